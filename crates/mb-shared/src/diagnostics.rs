//! Non-fatal diagnostics

/// Emit a warning when `condition` holds. Returns `condition`.
pub fn warn_if(condition: bool, message: &str) -> bool {
    if condition {
        tracing::warn!("{}", message);
    }
    condition
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_warn_if_passes_condition_through() {
        assert!(warn_if(true, "shown"));
        assert!(!warn_if(false, "hidden"));
    }
}
