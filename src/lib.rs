//! Signpost is a configuration-driven hierarchical HTTP path resolver.
//!
//! It maps an incoming request path onto a statically declared tree of
//! route nodes, resolving which action should run and which inherited
//! configuration values apply to it. Route tables arrive as nested maps
//! (`/segment` literal children, `/?tag` dynamic captures, `@name` leaf
//! actions, plain keys for inheritable parameters) and are compiled
//! once into a typed tree; each request then gets a fresh, independent
//! resolution pass with no shared mutable state.
//!
//! # Architecture
//!
//! - [`config`] -- Route-table construction: format parsing, compilation
//!   of the raw nested map into typed nodes, and structural validation.
//! - [`error`] -- Unified error types using `thiserror`.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print
//!   output.
//! - [`resolve`] -- The resolution pipeline: tokenizer, tree walker,
//!   parameter cascade, namespace builder, leaf selector, and free
//!   URL-parameter collector, producing an immutable
//!   [`ResolvedRoute`](resolve::ResolvedRoute).
//! - [`table`] -- The typed, immutable route-table data model.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let table = signpost::compile(&json!({
//!     "title": "Example",
//!     "/shop": {
//!         "/?item": {
//!             "@main": {},
//!             "@view": { "params": ["variant"] },
//!         },
//!         "@main": {},
//!     },
//! }))
//! .unwrap();
//!
//! let route = signpost::resolve(&table, "/shop/chair/view/red");
//! assert_eq!(route.parent_node.as_deref(), Some("item"));
//! assert_eq!(route.child_action.as_deref(), Some("view"));
//! assert_eq!(route.dynamic_bindings["item"], "chair");
//! assert_eq!(route.free_url_params["variant"], "red");
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `yaml` | YAML route-table documents _(enabled by default)_ |
//! | `toml` | TOML route-table documents |

pub mod config;
pub mod error;
pub mod logging;
pub mod resolve;
pub mod table;

pub use config::{compile, parse_table_str};
pub use error::SignpostError;
pub use resolve::{resolve, resolve_with_defaults, ResolvedRoute};
pub use table::RouteTable;
