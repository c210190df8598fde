//! minibridge shared utilities
//!
//! Small, dependency-light helpers used by both the style engine and the
//! component schema compiler.

mod case;
mod diagnostics;
mod platform;
mod shortcuts;

pub use case::{has_own, single_quote, to_camel_case, to_dashed};
pub use diagnostics::warn_if;
pub use platform::{Platform, PlatformError};
pub use shortcuts::Shortcuts;
