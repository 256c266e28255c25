//! Structural validation with detailed error reporting.
//!
//! Key-shape checks used during [`compile`](super::compile) plus
//! [`check_node`], which enforces the per-level invariants: unique
//! child names, at most one dynamic child, and no collision between a
//! child segment and a leaf-action name after prefix stripping. All
//! problems are collected as [`ValidationError`] values rather than
//! stopping at the first one.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::table::{ChildKey, RouteNode};

/// Validate a dynamic capture tag (the part after `/?`).
pub fn validate_tag(tag: &str) -> Result<(), String> {
    if tag.is_empty() {
        return Err("dynamic child needs a capture tag after '/?'".into());
    }
    if tag.contains('/') {
        return Err(format!("capture tag '{tag}' must be a single segment"));
    }
    Ok(())
}

/// Validate a literal child segment (the part after `/`).
pub fn validate_segment(segment: &str) -> Result<(), String> {
    if segment.is_empty() {
        return Err("literal child needs a segment name after '/'".into());
    }
    if segment.contains('/') {
        return Err(format!(
            "segment '{segment}' must be a single level (nest maps instead)"
        ));
    }
    Ok(())
}

/// Validate a leaf-action name (the part after `@`).
pub fn validate_leaf_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("leaf action needs a name after '@'".into());
    }
    Ok(())
}

/// Enforce per-level invariants on a compiled node.
pub fn check_node(node: &RouteNode, path: &str, errors: &mut Vec<ValidationError>) {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut dynamic_seen = false;

    for (key, _) in &node.children {
        if !seen.insert(key.name()) {
            errors.push(ValidationError {
                node: path.to_string(),
                key: key.name().to_string(),
                message: "duplicate child name at this level".into(),
                suggestion: None,
            });
        }

        if let ChildKey::Dynamic(tag) = key {
            if dynamic_seen {
                errors.push(ValidationError {
                    node: path.to_string(),
                    key: format!("/?{tag}"),
                    message: "more than one dynamic child at this level".into(),
                    suggestion: Some("only the first dynamic child can ever match".into()),
                });
            }
            dynamic_seen = true;
        }
    }

    for leaf_name in node.leaf_actions.keys() {
        if seen.contains(leaf_name.as_str()) {
            errors.push(ValidationError {
                node: path.to_string(),
                key: format!("@{leaf_name}"),
                message: "leaf action name collides with a child segment".into(),
                suggestion: Some("the child always consumes the segment first".into()),
            });
        }
    }
}
