//! minibridge Components
//!
//! The built-in component schema and the compiler that derives the
//! attribute binding tables each mini-program platform's templates need.

mod compiled;
mod compiler;
mod schema;

pub use compiled::{CompiledComponent, CompiledTable};
pub use compiler::{
    classify, compile, compile_for, AttributeKind, ALIPAY_EVENT_PREFIX, EVENT_PREFIX, PASS_THROUGH_TAG,
};
pub use schema::{
    is_controlled, is_focus_component, ComponentSchema, CONTROLLED_COMPONENTS, FOCUS_COMPONENTS,
    INTERNAL_COMPONENTS, SPECIAL_EVENTS,
};

/// Schema authoring error, reported at compile time
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("component `{component}` maps to tag `{tag}`, which is already declared")]
    DuplicateComponent { component: String, tag: String },
    
    #[error("component `{component}` declares attribute `{attribute}` more than once")]
    DuplicateAttribute { component: String, attribute: String },
    
    #[error("component `{component}` declares an attribute with an empty name")]
    EmptyAttributeName { component: String },
    
    #[error("component `{component}`: default `{value}` of `{attribute}` cannot be embedded in a binding")]
    UnsafeDefault { component: String, attribute: String, value: String },
}
