//! Case Conversion
//!
//! kebab-case <-> camelCase helpers for ASCII identifiers.

use std::collections::HashMap;
use std::hash::Hash;

/// Convert a dashed name to camel case.
///
/// Every `-` is dropped and the character following it is upper-cased.
/// Input that is already camel case comes back unchanged.
pub fn to_camel_case(s: &str) -> String {
    let mut camel = String::with_capacity(s.len());
    let mut next_cap = false;
    
    for c in s.chars() {
        if c == '-' {
            next_cap = true;
        } else if next_cap {
            camel.push(c.to_ascii_uppercase());
            next_cap = false;
        } else {
            camel.push(c);
        }
    }
    
    camel
}

/// Convert a camel or Pascal case name to its dashed, lower-case form.
///
/// A dash goes between a lower-case letter or digit and the upper-case
/// letter that follows it.
pub fn to_dashed(s: &str) -> String {
    let mut dashed = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    
    for c in s.chars() {
        if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            dashed.push('-');
        }
        dashed.push(c.to_ascii_lowercase());
        prev = Some(c);
    }
    
    dashed
}

/// Own-key existence check on a plain map.
///
/// For embedders that build their own schema tables at runtime.
#[inline]
pub fn has_own<K, V, Q>(map: &HashMap<K, V>, key: &Q) -> bool
where
    K: Eq + Hash + std::borrow::Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    map.contains_key(key)
}

/// Wrap a literal in single quotes.
///
/// For embedders authoring extra schema defaults at runtime; the built-in
/// table is static and spells its quoted literals out.
pub fn single_quote(s: &str) -> String {
    format!("'{}'", s)
}
