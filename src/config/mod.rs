//! Route-table construction: parsing, compilation, and validation.
//!
//! The resolver consumes a pre-built, typed [`RouteTable`](crate::table::RouteTable);
//! this module is the collaborator that builds one. The raw form is a
//! nested map (a [`serde_json::Value`]) whose keys follow the document
//! convention: `/`-prefixed literal segments, `/?`-prefixed dynamic
//! captures, `@`-prefixed leaf actions, a reserved `parent` map for
//! node-local values, and plain keys for inheritable parameters.
//! [`compile`] turns that map into the typed tree exactly once, so no
//! prefix is ever re-parsed during request resolution.

pub mod compile;
pub mod validation;

pub use compile::compile;

use serde_json::Value;

use crate::error::SignpostError;

/// Parse a route-table document string based on file extension.
///
/// Produces the raw nested-map form; feed the result to [`compile`].
pub fn parse_table_str(
    ext: &str,
    content: &str,
    path_display: &str,
) -> Result<Value, SignpostError> {
    match ext {
        #[cfg(feature = "yaml")]
        "yaml" | "yml" => serde_yml::from_str(content).map_err(|e| SignpostError::TableParse {
            path: path_display.to_string(),
            source: Box::new(e),
        }),

        "json" => serde_json::from_str(content).map_err(|e| SignpostError::TableParse {
            path: path_display.to_string(),
            source: Box::new(e),
        }),

        #[cfg(feature = "toml")]
        "toml" => {
            let parsed: toml::Value =
                toml::from_str(content).map_err(|e| SignpostError::TableParse {
                    path: path_display.to_string(),
                    source: Box::new(e),
                })?;
            serde_json::to_value(parsed).map_err(|e| SignpostError::TableParse {
                path: path_display.to_string(),
                source: Box::new(e),
            })
        }

        other => Err(SignpostError::UnsupportedFormat(other.to_string())),
    }
}
