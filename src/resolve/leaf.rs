//! Terminal action selection.
//!
//! Once the walk stops, the next unconsumed token names the leaf action
//! to run (`/shop/edit` seeks `edit` on the `/shop` node); with no
//! tokens left the canonical `main` action is sought instead. A found
//! leaf overlays its overrides onto the cascade and publishes its
//! request-method dispatch table and parameter names. A missing leaf is
//! a valid outcome, reported as an absent action name — never an error.

use crate::table::{RouteNode, MAIN_ACTION};

use super::{scope, MatchState};

pub(crate) fn resolve_leaf(node: &RouteNode, state: &mut MatchState) {
    let sought = match state.peek() {
        None => MAIN_ACTION.to_string(),
        Some(token) => token.strip_prefix('/').unwrap_or(token).to_string(),
    };

    // The selector token is spent on naming the leaf, found or not.
    if state.peek().is_some() {
        state.advance();
    }

    match node.leaf(&sought) {
        Some(action) => {
            tracing::debug!(action = %sought, "leaf action selected");

            // Leaf overrides outrank everything inherited. The reset
            // signal is ignored here: leaves contribute no namespace
            // label to restart from.
            scope::overlay(&mut state.effective, &action.overrides);

            state.leaf_params = action.overrides.clone();
            state.method_actions = action.method_actions.clone();
            state.param_names = action.param_names.clone();
            state.leaf_name = Some(sought);
        }
        None => {
            tracing::debug!(action = %sought, "no leaf action for selector");
        }
    }
}
