//! Cascading parameter inheritance.
//!
//! One [`overlay`] function carries the entire precedence story:
//! caller defaults first, then each matched ancestor nearest-last, then
//! leaf overrides. Every application is a full per-key overwrite, never
//! a deep merge — a node's explicit value wins regardless of depth, and
//! keys a node does not mention keep the nearest ancestor's value.

use std::collections::HashMap;

use serde_json::Value;

use crate::table::NAMESPACE_KEY;

/// Overwrite `effective` with every key in `overrides`.
///
/// Returns `true` when the overrides contain a `namespace` key, i.e.
/// the caller must restart namespace accumulation at this node. The
/// namespace value itself is still stored like any other parameter.
pub(crate) fn overlay(
    effective: &mut HashMap<String, Value>,
    overrides: &HashMap<String, Value>,
) -> bool {
    for (key, value) in overrides {
        effective.insert(key.clone(), value.clone());
    }
    overrides.contains_key(NAMESPACE_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), json!(v)))
            .collect()
    }

    #[test]
    fn explicit_value_overwrites() {
        let mut effective = map(&[("authTag", "x")]);
        overlay(&mut effective, &map(&[("authTag", "y")]));
        assert_eq!(effective["authTag"], json!("y"));
    }

    #[test]
    fn unmentioned_keys_inherit() {
        let mut effective = map(&[("authTag", "x"), ("title", "Home")]);
        overlay(&mut effective, &map(&[("title", "Shop")]));
        assert_eq!(effective["authTag"], json!("x"));
        assert_eq!(effective["title"], json!("Shop"));
    }

    #[test]
    fn namespace_key_signals_reset_and_is_stored() {
        let mut effective = HashMap::new();
        let reset = overlay(&mut effective, &map(&[("namespace", "custom")]));
        assert!(reset);
        assert_eq!(effective["namespace"], json!("custom"));
    }

    #[test]
    fn no_namespace_no_reset() {
        let mut effective = HashMap::new();
        assert!(!overlay(&mut effective, &map(&[("title", "Shop")])));
    }
}
