//! Typed route-table data model.
//!
//! Contains [`RouteTable`] (the root), [`RouteNode`], [`ChildKey`], and
//! [`LeafAction`]. Child keys are a tagged enum rather than prefixed
//! strings: the `/` / `/?` convention of the raw document is parsed
//! exactly once, by [`compile`](crate::config::compile), so the walker
//! matches on typed variants instead of re-inspecting prefixes per
//! lookup. The table is immutable after compilation and shared freely
//! across requests.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

/// Leaf action sought when no path segments remain after the walk.
pub const MAIN_ACTION: &str = "main";

/// The key under which a parameter inherits as a namespace reset.
pub const NAMESPACE_KEY: &str = "namespace";

/// Key of one child slot inside a [`RouteNode`].
///
/// Names are stored stripped of their document prefix: `/page1` becomes
/// `Literal("page1")`, `/?id` becomes `Dynamic("id")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ChildKey {
    /// Matches exactly one path segment equal to the stored name.
    Literal(String),
    /// Matches any single path segment, binding it to the capture tag.
    Dynamic(String),
}

impl ChildKey {
    /// The configured name: the literal segment, or the capture tag.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Literal(name) | Self::Dynamic(name) => name.as_str(),
        }
    }

    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic(_))
    }
}

/// One level of the route tree.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RouteNode {
    /// Child nodes in declaration order. Literal lookups scan by name;
    /// dynamic matching takes the first `Dynamic` entry.
    pub children: Vec<(ChildKey, RouteNode)>,

    /// Terminal actions (`@`-keyed in the document), keyed by bare name.
    pub leaf_actions: HashMap<String, LeafAction>,

    /// Inheritable overrides: presence of a key here overwrites the
    /// inherited value for this node and all descendants.
    pub global_params: HashMap<String, Value>,

    /// Node-local values that never inherit (e.g. a custom controller
    /// binding for this node only).
    pub parent_only_params: HashMap<String, Value>,
}

impl RouteNode {
    /// Find the child matching `token` (a `/`-prefixed segment).
    ///
    /// An exact literal match always wins; a dynamic child is consulted
    /// only when no literal name equals the segment.
    #[must_use]
    pub fn find_child(&self, token: &str) -> Option<(&ChildKey, &RouteNode)> {
        let segment = token.strip_prefix('/').unwrap_or(token);

        let literal = self.children.iter().find(|(key, _)| match key {
            ChildKey::Literal(name) => name.as_str() == segment,
            ChildKey::Dynamic(_) => false,
        });

        literal
            .or_else(|| self.children.iter().find(|(key, _)| key.is_dynamic()))
            .map(|(key, node)| (key, node))
    }

    /// Look up a leaf action by bare name (no `@`).
    #[must_use]
    pub fn leaf(&self, name: &str) -> Option<&LeafAction> {
        self.leaf_actions.get(name)
    }
}

/// Terminal action reachable once path segments are exhausted or
/// explicitly named by the next segment.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LeafAction {
    /// Same key space as [`RouteNode::global_params`], scoped to this
    /// action only (leaves have no children to inherit into).
    pub overrides: HashMap<String, Value>,

    /// HTTP method name -> additional action name to invoke alongside
    /// the primary one. Published, never resolved here.
    pub method_actions: HashMap<String, String>,

    /// Names assigned, in order, to tokens left over after leaf
    /// selection. `None` means trailing tokens are simply unused.
    pub param_names: Option<Vec<String>>,
}

/// The compiled, immutable route configuration.
///
/// Constructed once at startup by [`compile`](crate::config::compile);
/// the resolver only ever reads it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RouteTable {
    pub root: RouteNode,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_with(children: Vec<(ChildKey, RouteNode)>) -> RouteNode {
        RouteNode {
            children,
            ..RouteNode::default()
        }
    }

    #[test]
    fn literal_wins_over_dynamic() {
        let node = node_with(vec![
            (ChildKey::Dynamic("id".into()), RouteNode::default()),
            (ChildKey::Literal("page1".into()), RouteNode::default()),
        ]);

        let (key, _) = node.find_child("/page1").unwrap();
        assert_eq!(key, &ChildKey::Literal("page1".into()));
    }

    #[test]
    fn dynamic_matches_anything() {
        let node = node_with(vec![(
            ChildKey::Dynamic("slug".into()),
            RouteNode::default(),
        )]);

        let (key, _) = node.find_child("/hello-world").unwrap();
        assert_eq!(key, &ChildKey::Dynamic("slug".into()));
    }

    #[test]
    fn no_child_no_match() {
        let node = node_with(vec![(
            ChildKey::Literal("page1".into()),
            RouteNode::default(),
        )]);

        assert!(node.find_child("/doesnotexist").is_none());
    }

    #[test]
    fn first_dynamic_wins() {
        let node = node_with(vec![
            (ChildKey::Dynamic("a".into()), RouteNode::default()),
            (ChildKey::Dynamic("b".into()), RouteNode::default()),
        ]);

        let (key, _) = node.find_child("/anything").unwrap();
        assert_eq!(key.name(), "a");
    }
}
