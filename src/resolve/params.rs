//! Free URL-parameter collection.
//!
//! Tokens still unconsumed after leaf selection are zipped positionally
//! against the leaf's declared parameter names. The contract is
//! permissive in both directions: excess tokens are dropped, excess
//! names stay unbound, and an undeclared name list produces an empty
//! mapping no matter how many tokens remain.

use std::collections::HashMap;

/// Zip leftover tokens onto the leaf's ordered parameter names.
pub(crate) fn collect(
    param_names: Option<&[String]>,
    leftover: &[String],
) -> HashMap<String, String> {
    let Some(names) = param_names else {
        return HashMap::new();
    };

    names
        .iter()
        .zip(leftover.iter())
        .map(|(name, token)| {
            (
                name.clone(),
                token.strip_prefix('/').unwrap_or(token).to_string(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn positional_zip() {
        let names = vec!["a".to_string(), "b".to_string()];
        let bound = collect(Some(&names), &tokens(&["/1", "/2"]));
        assert_eq!(bound["a"], "1");
        assert_eq!(bound["b"], "2");
    }

    #[test]
    fn excess_tokens_dropped() {
        let names = vec!["a".to_string(), "b".to_string()];
        let bound = collect(Some(&names), &tokens(&["/1", "/2", "/3"]));
        assert_eq!(bound.len(), 2);
        assert!(!bound.values().any(|v| v == "3"));
    }

    #[test]
    fn excess_names_stay_unbound() {
        let names = vec!["a".to_string(), "b".to_string()];
        let bound = collect(Some(&names), &tokens(&["/1"]));
        assert_eq!(bound.len(), 1);
        assert_eq!(bound["a"], "1");
    }

    #[test]
    fn no_declaration_no_params() {
        assert!(collect(None, &tokens(&["/1", "/2"])).is_empty());
    }
}
