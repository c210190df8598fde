//! Style Declaration
//!
//! A `CSSStyleDeclaration`-like object for hosts without a live DOM.
//!
//! Only touched properties are tracked:
//! - `used` keeps the properties that currently hold a non-empty value, in
//!   the order they were first set
//! - `values` holds the value for each of them
//!
//! Every effective change re-serializes the declaration and sends it to the
//! owning element as a single `<path>.st` patch.

use std::collections::HashMap;

use mb_shared::warn_if;

use crate::parser::parse_declarations;
use crate::registry::PropertyId;
use crate::sink::StyleOwner;
use crate::StyleError;

const INLINE_IMAGE_URI: &str = "data:image/";

/// Inline style of one element
#[derive(Debug)]
pub struct StyleDeclaration {
    used: Vec<PropertyId>,
    values: HashMap<PropertyId, String>,
    owner: StyleOwner,
}

impl StyleDeclaration {
    pub fn new(owner: StyleOwner) -> Self {
        Self {
            used: Vec::new(),
            values: HashMap::new(),
            owner,
        }
    }
    
    pub fn owner(&self) -> &StyleOwner {
        &self.owner
    }
    
    /// Number of properties currently set
    pub fn len(&self) -> usize {
        self.used.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
    
    /// Set properties in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &str)> + '_ {
        self.used.iter().map(move |&prop| (prop, self.get(prop)))
    }
    
    /// Current value of `prop`, or `""` when unset
    #[inline]
    pub fn get(&self, prop: PropertyId) -> &str {
        self.values.get(&prop).map(String::as_str).unwrap_or("")
    }
    
    /// Assign `prop`. An empty value unsets it.
    ///
    /// A patch is emitted only when the stored value actually changes.
    pub fn set(&mut self, prop: PropertyId, value: &str) {
        warn_if(
            matches!(prop, PropertyId::Background | PropertyId::BackgroundImage)
                && value.contains(INLINE_IMAGE_URI),
            "inline base64 image data in a style degrades rendering performance badly; \
             move it into a CSS class or use an image URL instead",
        );
        
        if value.is_empty() {
            self.used.retain(|&p| p != prop);
        } else if !self.used.contains(&prop) {
            self.used.push(prop);
        }
        
        if self.get(prop) == value {
            return;
        }
        
        if value.is_empty() {
            self.values.remove(&prop);
        } else {
            self.values.insert(prop, value.to_string());
        }
        
        let css_text = self.css_text();
        tracing::trace!(path = self.owner.path(), property = prop.name(), "style changed");
        self.owner.enqueue_style(css_text);
    }
    
    /// Unset `prop`, returning the value it held
    pub fn remove(&mut self, prop: PropertyId) -> String {
        if !self.used.contains(&prop) {
            return String::new();
        }
        
        let previous = self.get(prop).to_string();
        self.set(prop, "");
        previous
    }
    
    /// `style.setProperty(name, value)`.
    ///
    /// `name` may be dashed or camel case. `None` and `""` remove the
    /// property. Names outside the registry are rejected.
    pub fn set_property(&mut self, name: &str, value: Option<&str>) -> Result<(), StyleError> {
        let prop = PropertyId::from_name(name)
            .ok_or_else(|| StyleError::UnknownProperty(name.to_string()))?;
        
        match value {
            None | Some("") => {
                self.remove(prop);
            }
            Some(value) => self.set(prop, value),
        }
        
        Ok(())
    }
    
    /// `style.removeProperty(name)`. Unknown names hold nothing and yield `""`.
    pub fn remove_property(&mut self, name: &str) -> String {
        match PropertyId::from_name(name) {
            Some(prop) => self.remove(prop),
            None => String::new(),
        }
    }
    
    /// `style.getPropertyValue(name)`
    pub fn get_property_value(&self, name: &str) -> &str {
        match PropertyId::from_name(name) {
            Some(prop) => self.get(prop),
            None => "",
        }
    }
    
    /// Serialized declaration: `"<dashed-name>: <value>; "` per property
    pub fn css_text(&self) -> String {
        let mut text = String::new();
        
        for &prop in &self.used {
            let value = self.get(prop);
            if value.is_empty() {
                continue;
            }
            text.push_str(prop.dashed_name());
            text.push_str(": ");
            text.push_str(value);
            text.push_str("; ");
        }
        
        text
    }
    
    /// Replace the whole declaration.
    ///
    /// Every current property is removed first, then each declaration of
    /// `text` is applied in source order. `None` behaves like `""`.
    pub fn set_css_text(&mut self, text: Option<&str>) {
        let text = text.unwrap_or("");
        
        for prop in self.used.clone() {
            self.remove(prop);
        }
        
        if text.is_empty() {
            return;
        }
        
        for (name, value) in parse_declarations(text) {
            if let Err(err) = self.set_property(name, Some(value)) {
                tracing::warn!(path = self.owner.path(), "skipping declaration: {}", err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::UpdateQueue;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
    
    fn style() -> (StyleDeclaration, Rc<UpdateQueue>) {
        let queue = Rc::new(UpdateQueue::new());
        let owner = StyleOwner::new("root.cn.[0]", queue.clone());
        (StyleDeclaration::new(owner), queue)
    }
    
    #[test]
    fn test_set_and_get() {
        let (mut style, queue) = style();
        style.set_property("color", Some("red")).unwrap();
        
        assert_eq!(style.get_property_value("color"), "red");
        assert_eq!(style.get(PropertyId::Color), "red");
        assert_eq!(style.css_text(), "color: red; ");
        assert_eq!(queue.len(), 1);
    }
    
    #[test]
    fn test_patch_path_and_value() {
        let (mut style, queue) = style();
        style.set(PropertyId::FontSize, "12px");
        
        let update = queue.last().unwrap();
        assert_eq!(update.path, "root.cn.[0].st");
        assert_eq!(update.value, "font-size: 12px; ");
    }
    
    #[test]
    fn test_dashed_and_camel_names_are_the_same_property() {
        let (mut style, _queue) = style();
        style.set_property("background-color", Some("blue")).unwrap();
        
        assert_eq!(style.get_property_value("backgroundColor"), "blue");
        assert_eq!(style.len(), 1);
    }
    
    #[test]
    fn test_same_value_emits_nothing() {
        let (mut style, queue) = style();
        style.set(PropertyId::Width, "10px");
        style.set(PropertyId::Width, "10px");
        style.set_property("width", Some("10px")).unwrap();
        
        assert_eq!(queue.len(), 1);
    }
    
    #[test]
    fn test_remove_returns_previous_value() {
        let (mut style, queue) = style();
        style.set_property("color", Some("red")).unwrap();
        
        assert_eq!(style.remove_property("color"), "red");
        assert_eq!(style.css_text(), "");
        assert!(style.is_empty());
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.last().unwrap().value, "");
    }
    
    #[test]
    fn test_remove_unset_is_silent() {
        let (mut style, queue) = style();
        assert_eq!(style.remove_property("color"), "");
        assert!(queue.is_empty());
    }
    
    #[test]
    fn test_null_and_empty_remove() {
        let (mut style, _queue) = style();
        style.set_property("color", Some("red")).unwrap();
        style.set_property("height", Some("1px")).unwrap();
        
        style.set_property("color", None).unwrap();
        style.set_property("height", Some("")).unwrap();
        
        assert!(style.is_empty());
        assert_eq!(style.css_text(), "");
    }
    
    #[test]
    fn test_indexed_empty_write_unsets() {
        let (mut style, queue) = style();
        style.set(PropertyId::Color, "red");
        style.set(PropertyId::Color, "");
        
        assert!(style.is_empty());
        assert_eq!(queue.len(), 2);
        
        // already unset: no change, no patch
        style.set(PropertyId::Color, "");
        assert_eq!(queue.len(), 2);
    }
    
    #[test]
    fn test_update_keeps_position() {
        let (mut style, _queue) = style();
        style.set(PropertyId::Color, "red");
        style.set(PropertyId::Width, "1px");
        style.set(PropertyId::Color, "blue");
        
        assert_eq!(style.css_text(), "color: blue; width: 1px; ");
    }
    
    #[test]
    fn test_remove_then_set_moves_to_end() {
        let (mut style, _queue) = style();
        style.set(PropertyId::Color, "red");
        style.set(PropertyId::Width, "1px");
        style.remove(PropertyId::Color);
        style.set(PropertyId::Color, "red");
        
        assert_eq!(style.css_text(), "width: 1px; color: red; ");
    }
    
    #[test]
    fn test_unknown_property_rejected() {
        let (mut style, queue) = style();
        let err = style.set_property("colour", Some("red")).unwrap_err();
        
        assert_eq!(err, StyleError::UnknownProperty("colour".into()));
        assert_eq!(style.get_property_value("colour"), "");
        assert_eq!(style.remove_property("colour"), "");
        assert!(queue.is_empty());
    }
    
    #[test]
    fn test_css_text_setter_replaces() {
        let (mut style, _queue) = style();
        style.set(PropertyId::Color, "red");
        style.set(PropertyId::Margin, "4px");
        
        style.set_css_text(Some("width: 10px; height: 20px;"));
        
        assert_eq!(style.css_text(), "width: 10px; height: 20px; ");
        assert_eq!(style.get(PropertyId::Color), "");
        assert_eq!(style.get(PropertyId::Margin), "");
    }
    
    #[test]
    fn test_css_text_setter_none_clears() {
        let (mut style, queue) = style();
        style.set(PropertyId::Color, "red");
        style.set(PropertyId::Width, "1px");
        queue.drain();
        
        style.set_css_text(None);
        
        assert!(style.is_empty());
        // one patch per removed property
        let updates = queue.drain();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[1].value, "");
    }
    
    #[test]
    fn test_css_text_setter_skips_unknown_and_malformed() {
        let (mut style, _queue) = style();
        style.set_css_text(Some("colour: red; color: blue; nonsense; ;top:0"));
        
        assert_eq!(style.css_text(), "color: blue; top: 0; ");
    }
    
    /// Counts WARN events seen while a closure runs
    #[derive(Clone, Default)]
    struct WarnCounter(Arc<AtomicUsize>);
    
    impl<S: Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }
    
    fn count_warnings(f: impl FnOnce()) -> usize {
        let counter = WarnCounter::default();
        let subscriber = tracing_subscriber::registry().with(counter.clone());
        tracing::subscriber::with_default(subscriber, f);
        counter.0.load(Ordering::SeqCst)
    }
    
    #[test]
    fn test_inline_image_is_allowed() {
        let (mut style, _queue) = style();
        style.set(PropertyId::BackgroundImage, "url(data:image/png;base64,AAAA)");
        
        assert_eq!(style.get(PropertyId::BackgroundImage), "url(data:image/png;base64,AAAA)");
    }
    
    #[test]
    fn test_inline_image_warns() {
        let (mut style, _queue) = style();
        let warnings = count_warnings(|| {
            style.set(PropertyId::BackgroundImage, "url(data:image/png;base64,AAAA)");
        });
        assert_eq!(warnings, 1);
        
        let warnings = count_warnings(|| {
            style.set_property("background", Some("#fff url(\"data:image/gif;base64,R0lG\")")).unwrap();
        });
        assert_eq!(warnings, 1);
    }
    
    #[test]
    fn test_plain_image_url_does_not_warn() {
        let (mut style, _queue) = style();
        let warnings = count_warnings(|| {
            style.set(PropertyId::BackgroundImage, "url(https://cdn.example.com/a.png)");
            style.set(PropertyId::Color, "red");
        });
        assert_eq!(warnings, 0);
    }
    
    #[test]
    fn test_iter_in_insertion_order() {
        let (mut style, _queue) = style();
        style.set(PropertyId::ZIndex, "2");
        style.set(PropertyId::AlignItems, "center");
        
        let props: Vec<_> = style.iter().collect();
        assert_eq!(props, vec![(PropertyId::ZIndex, "2"), (PropertyId::AlignItems, "center")]);
    }
}
