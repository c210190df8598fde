//! cssText Parser
//!
//! Splits an inline `style` attribute into `(name, value)` pairs.
//! No value validation happens here; names are returned as written.

/// Parse `"k1: v1; k2: v2"` into declarations in source order.
///
/// Blank rules and rules without a `:` are skipped. Only the first `:`
/// separates name from value, so `url(http://...)` values survive intact.
pub fn parse_declarations(text: &str) -> Vec<(&str, &str)> {
    text.split(';')
        .map(str::trim)
        .filter(|rule| !rule.is_empty())
        .filter_map(|rule| {
            let (name, value) = rule.split_once(':')?;
            Some((name.trim(), value.trim()))
        })
        .collect()
}
