//! Compiled binding tables
//!
//! Output of the schema compiler. Both levels keep insertion order and
//! serialize as ordered JSON objects so the template generator sees the
//! attributes in declaration order.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Attribute bindings of one platform tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledComponent {
    bindings: Vec<(String, String)>,
}

impl CompiledComponent {
    /// Binding expression for `attribute`
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(name, _)| name == attribute)
            .map(|(_, binding)| binding.as_str())
    }
    
    pub fn contains(&self, attribute: &str) -> bool {
        self.get(attribute).is_some()
    }
    
    pub fn len(&self) -> usize {
        self.bindings.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
    
    /// `(attribute, binding)` in emission order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
    
    /// Insert or overwrite. An existing attribute keeps its position.
    pub(crate) fn insert(&mut self, attribute: String, binding: String) {
        match self.bindings.iter_mut().find(|(name, _)| *name == attribute) {
            Some(slot) => slot.1 = binding,
            None => self.bindings.push((attribute, binding)),
        }
    }
}

impl Serialize for CompiledComponent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.bindings.len()))?;
        for (attribute, binding) in &self.bindings {
            map.serialize_entry(attribute, binding)?;
        }
        map.end()
    }
}

/// Platform tag name -> attribute bindings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledTable {
    components: Vec<(String, CompiledComponent)>,
}

impl CompiledTable {
    pub fn get(&self, tag: &str) -> Option<&CompiledComponent> {
        self.components
            .iter()
            .find(|(name, _)| name == tag)
            .map(|(_, component)| component)
    }
    
    pub fn len(&self) -> usize {
        self.components.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
    
    /// Tag names in table order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(|(tag, _)| tag.as_str())
    }
    
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CompiledComponent)> {
        self.components.iter().map(|(tag, component)| (tag.as_str(), component))
    }
    
    pub(crate) fn push(&mut self, tag: String, component: CompiledComponent) {
        self.components.push((tag, component));
    }
}

impl Serialize for CompiledTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.components.len()))?;
        for (tag, component) in &self.components {
            map.serialize_entry(tag, component)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_insert_overwrites_in_place() {
        let mut component = CompiledComponent::default();
        component.insert("a".into(), "1".into());
        component.insert("b".into(), "2".into());
        component.insert("a".into(), "3".into());
        
        let attrs: Vec<_> = component.iter().collect();
        assert_eq!(attrs, vec![("a", "3"), ("b", "2")]);
    }
    
    #[test]
    fn test_serialize_keeps_order() {
        let mut component = CompiledComponent::default();
        component.insert("zeta".into(), "i.zeta".into());
        component.insert("alpha".into(), "i.alpha".into());
        let mut table = CompiledTable::default();
        table.push("view".into(), component);
        
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"view":{"zeta":"i.zeta","alpha":"i.alpha"}}"#);
    }
}
