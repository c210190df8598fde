//! Reserved short keys shared between the runtime and generated templates.

use std::fmt;

/// Short keys used in patch paths and template bindings.
///
/// Kept short because they are repeated in every update payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shortcuts {
    /// Instance data object the templates read from
    Container,
    /// Inline style slot
    Style,
    /// Class slot
    Class,
    /// Generic event handler marker
    EventHandler,
}

impl Shortcuts {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Container => "i",
            Self::Style => "st",
            Self::Class => "cl",
            Self::EventHandler => "eh",
        }
    }
}

impl fmt::Display for Shortcuts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
