//! Request-path resolution against a compiled [`RouteTable`].
//!
//! The [`resolve`] entry point runs the full pipeline: tokenization
//! ([`tokenize`]), tree descent ([`walker`]), cascading parameter
//! inheritance ([`scope`]), namespace accumulation ([`namespace`]), leaf
//! selection ([`leaf`]), and free-parameter collection ([`params`]).
//! All traversal state lives in a per-call [`MatchState`] threaded
//! through the steps, so a shared `&RouteTable` can serve any number of
//! concurrent resolutions; the published [`ResolvedRoute`] is immutable.
//!
//! Routing misses are represented, not raised: an absent
//! [`parent_node`](ResolvedRoute::parent_node) means no tree node
//! matched, an absent [`child_action`](ResolvedRoute::child_action)
//! means the matched node has no action for the selector. Turning
//! either into a 404, redirect, or structured error is the caller's
//! policy, typically keyed on the inherited `solver`/`output` params.

pub mod leaf;
pub mod namespace;
pub mod params;
pub mod scope;
pub mod tokenize;
pub mod walker;

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::table::RouteTable;

/// Mutable traversal state, created fresh per resolution.
///
/// Nothing here survives a call; [`into_route`](Self::into_route)
/// publishes the immutable result exactly once.
#[derive(Debug)]
pub(crate) struct MatchState {
    tokens: Vec<String>,
    cursor: usize,

    pub(crate) matched_depth: usize,
    pub(crate) parent_name: Option<String>,
    pub(crate) dynamic_bindings: HashMap<String, String>,
    pub(crate) namespace: Vec<String>,
    pub(crate) namespace_reset: bool,
    pub(crate) effective: HashMap<String, Value>,

    pub(crate) leaf_name: Option<String>,
    pub(crate) leaf_params: HashMap<String, Value>,
    pub(crate) method_actions: HashMap<String, String>,
    pub(crate) param_names: Option<Vec<String>>,
}

impl MatchState {
    pub(crate) fn new(tokens: Vec<String>, defaults: HashMap<String, Value>) -> Self {
        Self {
            tokens,
            cursor: 0,
            matched_depth: 0,
            parent_name: None,
            dynamic_bindings: HashMap::new(),
            namespace: Vec::new(),
            namespace_reset: false,
            effective: defaults,
            leaf_name: None,
            leaf_params: HashMap::new(),
            method_actions: HashMap::new(),
            param_names: None,
        }
    }

    /// The next unconsumed token, if any.
    pub(crate) fn peek(&self) -> Option<&str> {
        self.tokens.get(self.cursor).map(String::as_str)
    }

    /// Consume one token.
    pub(crate) fn advance(&mut self) {
        self.cursor += 1;
    }

    /// Tokens left after the walk and leaf selection.
    pub(crate) fn leftover(&self) -> &[String] {
        &self.tokens[self.cursor..]
    }

    fn into_route(self, free_url_params: HashMap<String, String>) -> ResolvedRoute {
        ResolvedRoute {
            parent_node: self.parent_name,
            child_action: self.leaf_name,
            controller_namespace: namespace::finish(self.namespace, self.namespace_reset),
            global_params: self.effective,
            leaf_params: self.leaf_params,
            dynamic_bindings: self.dynamic_bindings,
            free_url_params,
            method_actions: self.method_actions,
        }
    }
}

/// The immutable outcome of one resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRoute {
    /// Name of the deepest matched tree node; `None` when no node
    /// matched at all (the walk never left the root).
    pub parent_node: Option<String>,

    /// Name of the selected leaf action; `None` when the matched node
    /// has no action for the selector (or `main` is missing).
    pub child_action: Option<String>,

    /// PascalCase controller-namespace path, reset-aware.
    pub controller_namespace: Vec<String>,

    /// Cumulative inheritable parameters at the resolved depth.
    pub global_params: HashMap<String, Value>,

    /// The selected leaf's own overrides, unscoped view.
    pub leaf_params: HashMap<String, Value>,

    /// Capture tag -> URL value for every dynamic node matched.
    pub dynamic_bindings: HashMap<String, String>,

    /// Leftover tokens zipped onto the leaf's declared names.
    pub free_url_params: HashMap<String, String>,

    /// HTTP method -> additional action, published for the dispatcher.
    pub method_actions: HashMap<String, String>,
}

impl ResolvedRoute {
    /// The additional action the dispatcher should invoke for `method`,
    /// per the leaf's request-method dispatch table.
    #[must_use]
    pub fn method_action(&self, method: &http::Method) -> Option<&str> {
        self.method_actions
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(method.as_str()))
            .map(|(_, action)| action.as_str())
    }

    /// An inherited parameter at the resolved depth.
    #[must_use]
    pub fn global(&self, key: &str) -> Option<&Value> {
        self.global_params.get(key)
    }

    /// Whether anything matched at all: either a tree node or a
    /// root-level leaf action.
    #[must_use]
    pub fn matched(&self) -> bool {
        self.parent_node.is_some() || self.child_action.is_some()
    }
}

/// Resolve `path` against `table` with no framework defaults.
#[must_use]
pub fn resolve(table: &RouteTable, path: &str) -> ResolvedRoute {
    resolve_with_defaults(table, path, HashMap::new())
}

/// Resolve `path` against `table`, seeding the parameter cascade with
/// `defaults` (the lowest-precedence layer).
///
/// `path` must already be stripped of the query string and any
/// application base path (see [`tokenize::strip_base`]).
#[must_use]
pub fn resolve_with_defaults(
    table: &RouteTable,
    path: &str,
    defaults: HashMap<String, Value>,
) -> ResolvedRoute {
    let tokens = tokenize::tokenize(path);
    let mut state = MatchState::new(tokens, defaults);

    // The root participates in the cascade and the namespace before any
    // segment is consumed.
    let reset = scope::overlay(&mut state.effective, &table.root.global_params);
    if reset {
        state.namespace_reset = true;
    }
    namespace::push(&mut state.namespace, "", reset);

    let stop = walker::walk(&table.root, &mut state);
    leaf::resolve_leaf(stop, &mut state);

    let free = params::collect(state.param_names.as_deref(), state.leftover());

    if state.parent_name.is_none() && state.leaf_name.is_none() {
        tracing::warn!(path = %path, "no route matched");
    } else {
        tracing::debug!(
            path = %path,
            parent = state.parent_name.as_deref().unwrap_or("-"),
            action = state.leaf_name.as_deref().unwrap_or("-"),
            "route resolved"
        );
    }

    state.into_route(free)
}
