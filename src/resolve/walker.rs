//! Tree descent over the route table.
//!
//! [`walk`] consumes at most one token per level, always preferring an
//! exact literal child over the dynamic one (see
//! [`RouteNode::find_child`]). Each matched node updates the cascade,
//! records its namespace label, and binds dynamic captures. The walk
//! halts at the deepest matching node; the tokens it did not consume
//! drive leaf selection and free-parameter collection afterwards.

use crate::table::{ChildKey, RouteNode};

use super::{namespace, scope, MatchState};

/// Descend from `root`, consuming matching tokens. Returns the node
/// the walk stopped at (the root itself when nothing matched).
pub(crate) fn walk<'t>(root: &'t RouteNode, state: &mut MatchState) -> &'t RouteNode {
    let mut node = root;

    while let Some(token) = state.peek() {
        let token = token.to_string();
        let Some((key, child)) = node.find_child(&token) else {
            break;
        };

        match key {
            ChildKey::Dynamic(tag) => {
                let value = token.strip_prefix('/').unwrap_or(&token).to_string();
                tracing::debug!(tag = %tag, value = %value, "dynamic segment matched");
                state.dynamic_bindings.insert(tag.clone(), value);
            }
            ChildKey::Literal(name) => {
                tracing::debug!(segment = %name, "literal segment matched");
            }
        }

        state.advance();
        state.matched_depth += 1;
        state.parent_name = Some(key.name().to_string());

        let reset = scope::overlay(&mut state.effective, &child.global_params);
        if reset {
            tracing::debug!(node = %key.name(), "namespace reset");
            state.namespace_reset = true;
        }
        namespace::push(&mut state.namespace, key.name(), reset);

        node = child;
    }

    node
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;
    use crate::resolve::tokenize::tokenize;
    use crate::table::RouteNode;

    fn literal(name: &str, node: RouteNode) -> (ChildKey, RouteNode) {
        (ChildKey::Literal(name.into()), node)
    }

    fn dynamic(tag: &str, node: RouteNode) -> (ChildKey, RouteNode) {
        (ChildKey::Dynamic(tag.into()), node)
    }

    fn state_for(path: &str) -> MatchState {
        MatchState::new(tokenize(path), HashMap::new())
    }

    #[test]
    fn consumes_one_token_per_level() {
        let root = RouteNode {
            children: vec![literal(
                "shop",
                RouteNode {
                    children: vec![literal("item", RouteNode::default())],
                    ..RouteNode::default()
                },
            )],
            ..RouteNode::default()
        };

        let mut state = state_for("/shop/item/5");
        let stop = walk(&root, &mut state);

        assert_eq!(state.matched_depth, 2);
        assert_eq!(state.parent_name.as_deref(), Some("item"));
        assert_eq!(state.peek(), Some("/5"));
        assert!(stop.children.is_empty());
    }

    #[test]
    fn stops_at_deepest_match() {
        let root = RouteNode {
            children: vec![literal("shop", RouteNode::default())],
            ..RouteNode::default()
        };

        let mut state = state_for("/shop/edit/5");
        walk(&root, &mut state);

        assert_eq!(state.matched_depth, 1);
        assert_eq!(state.peek(), Some("/edit"));
    }

    #[test]
    fn unmatched_root_consumes_nothing() {
        let root = RouteNode {
            children: vec![literal("page1", RouteNode::default())],
            ..RouteNode::default()
        };

        let mut state = state_for("/doesnotexist");
        walk(&root, &mut state);

        assert_eq!(state.matched_depth, 0);
        assert!(state.parent_name.is_none());
        assert_eq!(state.peek(), Some("/doesnotexist"));
    }

    #[test]
    fn dynamic_binding_recorded() {
        let root = RouteNode {
            children: vec![dynamic("slug", RouteNode::default())],
            ..RouteNode::default()
        };

        let mut state = state_for("/hello-world");
        walk(&root, &mut state);

        assert_eq!(state.dynamic_bindings["slug"], "hello-world");
        assert_eq!(state.parent_name.as_deref(), Some("slug"));
    }

    #[test]
    fn node_params_overlay_during_descent() {
        let inner = RouteNode {
            global_params: [("title".to_string(), json!("Inner"))].into(),
            ..RouteNode::default()
        };
        let root = RouteNode {
            children: vec![literal("a", inner)],
            ..RouteNode::default()
        };

        let mut state = state_for("/a");
        state.effective.insert("title".into(), json!("Outer"));
        state.effective.insert("authTag".into(), json!("x"));
        walk(&root, &mut state);

        assert_eq!(state.effective["title"], json!("Inner"));
        assert_eq!(state.effective["authTag"], json!("x"));
    }
}
