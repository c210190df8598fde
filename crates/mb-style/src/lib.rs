//! minibridge Style Engine
//!
//! Inline style declarations for mini-program hosts. A declaration tracks
//! only the properties that were touched, serializes them in insertion
//! order and forwards each effective change to its element as a patch.

mod declaration;
mod parser;
mod registry;
mod sink;

pub use declaration::StyleDeclaration;
pub use parser::parse_declarations;
pub use registry::PropertyId;
pub use sink::{StyleOwner, Update, UpdateQueue, UpdateSink};

/// Style engine error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("unknown style property `{0}`")]
    UnknownProperty(String),
}
