//! Component Schema Compiler
//!
//! Turns the host-neutral schema into per-platform attribute bindings for
//! the template generator. Each attribute is classified once:
//! - events become the shared handler marker under a platform-specific name
//! - empty defaults bind straight to instance data
//! - literal defaults bind to instance data with the literal as fallback
//!
//! Every component except `block` also receives style, class and tap
//! bindings it never declares.

use std::collections::HashSet;

use mb_shared::{to_camel_case, to_dashed, Platform, Shortcuts};

use crate::compiled::{CompiledComponent, CompiledTable};
use crate::schema::{ComponentSchema, SPECIAL_EVENTS};
use crate::SchemaError;

/// Event attribute prefix in the schema and on default hosts
pub const EVENT_PREFIX: &str = "bind";

/// Event attribute prefix on alipay-like hosts
pub const ALIPAY_EVENT_PREFIX: &str = "on";

/// Structural grouping tag that gets no implicit bindings
pub const PASS_THROUGH_TAG: &str = "block";

/// Tap binding on default hosts
const TAP_EVENTS: &[&str] = &["bindtap"];

/// Alipay hosts need the touch family bound on every component
const ALIPAY_TAP_EVENTS: &[&str] = &["onTap", "onTouchMove", "onTouchEnd", "onTouchCancel", "onLongTap"];

/// How a schema attribute is compiled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind<'a> {
    /// Routed through the generic event bridge
    Event,
    /// No default, always bound to instance data
    EmptyDefault,
    /// Bound to instance data, falling back to the literal
    LiteralDefault(&'a str),
}

/// Classify one schema attribute
pub fn classify<'a>(name: &str, default: &'a str) -> AttributeKind<'a> {
    if name.starts_with(EVENT_PREFIX) || SPECIAL_EVENTS.contains(&name) {
        AttributeKind::Event
    } else if default.is_empty() {
        AttributeKind::EmptyDefault
    } else {
        AttributeKind::LiteralDefault(default)
    }
}

/// Compile `table` for `platform`
pub fn compile(table: &[ComponentSchema], platform: Platform) -> Result<CompiledTable, SchemaError> {
    tracing::debug!(%platform, components = table.len(), "compiling component schema");
    compile_for(table, platform.is_alipay_like())
}

/// Compile `table` for either the alipay dialect or the default one
pub fn compile_for(table: &[ComponentSchema], alipay_like: bool) -> Result<CompiledTable, SchemaError> {
    let mut compiled = CompiledTable::default();
    
    for schema in table {
        let tag = to_dashed(schema.name);
        if compiled.get(&tag).is_some() {
            return Err(SchemaError::DuplicateComponent {
                component: schema.name.to_string(),
                tag,
            });
        }
        
        let component = compile_component(schema, &tag, alipay_like)?;
        tracing::trace!(tag = %tag, attributes = component.len(), "compiled component");
        compiled.push(tag, component);
    }
    
    Ok(compiled)
}

fn compile_component(
    schema: &ComponentSchema,
    tag: &str,
    alipay_like: bool,
) -> Result<CompiledComponent, SchemaError> {
    let mut component = CompiledComponent::default();
    let mut seen = HashSet::new();
    
    for &(name, default) in schema.attributes {
        if name.is_empty() {
            return Err(SchemaError::EmptyAttributeName {
                component: schema.name.to_string(),
            });
        }
        if !seen.insert(name) {
            return Err(duplicate(schema, name));
        }
        
        let (attribute, binding) = match classify(name, default) {
            AttributeKind::Event => (event_name(name, alipay_like), Shortcuts::EventHandler.to_string()),
            AttributeKind::EmptyDefault => (name.to_string(), data_binding(name)),
            AttributeKind::LiteralDefault(literal) => {
                check_literal(schema, name, literal)?;
                (name.to_string(), format!("{} || {}", data_binding(name), literal))
            }
        };
        
        // renamed events can land on the same key, e.g. `bindTap` and `bindtap`
        if component.contains(&attribute) {
            return Err(duplicate(schema, name));
        }
        component.insert(attribute, binding);
    }
    
    if tag != PASS_THROUGH_TAG {
        component.insert("style".to_string(), data_binding(Shortcuts::Style.as_str()));
        component.insert("class".to_string(), data_binding(Shortcuts::Class.as_str()));
        
        let events = if alipay_like { ALIPAY_TAP_EVENTS } else { TAP_EVENTS };
        for event in events {
            component.insert(event.to_string(), Shortcuts::EventHandler.to_string());
        }
    }
    
    Ok(component)
}

/// `bindTouchMove` -> `onTouchMove` on alipay, `bindtouchmove` elsewhere
fn event_name(name: &str, alipay_like: bool) -> String {
    if alipay_like {
        name.replacen(EVENT_PREFIX, ALIPAY_EVENT_PREFIX, 1)
    } else {
        name.to_lowercase()
    }
}

/// `hover-class` -> `i.hoverClass`
fn data_binding(name: &str) -> String {
    format!("{}.{}", Shortcuts::Container, to_camel_case(name))
}

/// Literals are pasted into a double-quoted `{{ }}` binding unescaped
fn check_literal(schema: &ComponentSchema, name: &str, literal: &str) -> Result<(), SchemaError> {
    let breaks_binding = literal.contains('"')
        || literal.contains("{{")
        || literal.contains("}}")
        || literal.chars().any(char::is_control);
    
    if breaks_binding {
        return Err(SchemaError::UnsafeDefault {
            component: schema.name.to_string(),
            attribute: name.to_string(),
            value: literal.to_string(),
        });
    }
    Ok(())
}

fn duplicate(schema: &ComponentSchema, name: &str) -> SchemaError {
    SchemaError::DuplicateAttribute {
        component: schema.name.to_string(),
        attribute: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_classify() {
        assert_eq!(classify("bindChange", ""), AttributeKind::Event);
        assert_eq!(classify("bindLoad", "eh"), AttributeKind::Event);
        assert_eq!(classify("htouchmove", ""), AttributeKind::Event);
        assert_eq!(classify("src", ""), AttributeKind::EmptyDefault);
        assert_eq!(classify("size", "23"), AttributeKind::LiteralDefault("23"));
    }
    
    #[test]
    fn test_event_name() {
        assert_eq!(event_name("bindTouchMove", true), "onTouchMove");
        assert_eq!(event_name("bindTouchMove", false), "bindtouchmove");
        assert_eq!(event_name("htouchmove", true), "htouchmove");
        assert_eq!(event_name("vtouchmove", false), "vtouchmove");
    }
    
    #[test]
    fn test_data_binding() {
        assert_eq!(data_binding("hover-class"), "i.hoverClass");
        assert_eq!(data_binding("activeColor"), "i.activeColor");
        assert_eq!(data_binding("st"), "i.st");
    }
    
    #[test]
    fn test_literal_with_quote_rejected() {
        let schema = ComponentSchema { name: "Bad", attributes: &[("label", "\"x\"")] };
        let err = compile_for(&[schema], false).unwrap_err();
        assert!(matches!(err, SchemaError::UnsafeDefault { .. }));
    }
    
    #[test]
    fn test_literal_with_braces_rejected() {
        let schema = ComponentSchema { name: "Bad", attributes: &[("label", "{{x}}")] };
        assert!(compile_for(&[schema], true).is_err());
    }
    
    #[test]
    fn test_renamed_collision_rejected() {
        let schema = ComponentSchema {
            name: "Tappable",
            attributes: &[("bindTap", ""), ("bindtap", "")],
        };
        let err = compile_for(&[schema], false).unwrap_err();
        assert_eq!(err, SchemaError::DuplicateAttribute {
            component: "Tappable".into(),
            attribute: "bindtap".into(),
        });
    }
}
