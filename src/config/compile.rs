//! Raw nested-map -> typed [`RouteTable`] compilation.
//!
//! [`compile`] walks the document tree once, classifying every key by
//! its prefix and producing tagged [`ChildKey`] variants, leaf actions,
//! and parameter maps. All structural problems across the whole
//! document are collected before failing, so a bad table reports every
//! offending key in one pass.

use serde_json::{Map, Value};

use super::validation;
use crate::error::{SignpostError, ValidationError};
use crate::table::{ChildKey, LeafAction, RouteNode, RouteTable};

/// Reserved node key holding non-inheriting, node-local values.
const PARENT_ONLY_KEY: &str = "parent";

/// Reserved leaf key: HTTP method name -> additional action name.
const METHODS_KEY: &str = "methods";

/// Reserved leaf key: ordered names for leftover URL tokens.
const PARAMS_KEY: &str = "params";

/// Compile a raw nested-map document into a typed [`RouteTable`].
pub fn compile(raw: &Value) -> Result<RouteTable, SignpostError> {
    let mut errors = Vec::new();

    let root = match raw.as_object() {
        Some(map) => compile_node(map, "/", &mut errors),
        None => {
            errors.push(ValidationError {
                node: "/".into(),
                key: "(root)".into(),
                message: "route table root must be a map".into(),
                suggestion: None,
            });
            RouteNode::default()
        }
    };

    if errors.is_empty() {
        Ok(RouteTable { root })
    } else {
        Err(SignpostError::TableValidation { errors })
    }
}

fn compile_node(map: &Map<String, Value>, path: &str, errors: &mut Vec<ValidationError>) -> RouteNode {
    let mut node = RouteNode::default();

    for (key, value) in map {
        // `/?` before `/`: a plain strip_prefix('/') would also eat it.
        if let Some(tag) = key.strip_prefix("/?") {
            if let Err(msg) = validation::validate_tag(tag) {
                errors.push(key_error(path, key, msg));
                continue;
            }
            if let Some(child) = require_map(value, path, key, errors) {
                let child_path = join(path, key);
                node.children.push((
                    ChildKey::Dynamic(tag.to_string()),
                    compile_node(child, &child_path, errors),
                ));
            }
        } else if let Some(segment) = key.strip_prefix('/') {
            if let Err(msg) = validation::validate_segment(segment) {
                errors.push(key_error(path, key, msg));
                continue;
            }
            if let Some(child) = require_map(value, path, key, errors) {
                let child_path = join(path, key);
                node.children.push((
                    ChildKey::Literal(segment.to_string()),
                    compile_node(child, &child_path, errors),
                ));
            }
        } else if let Some(name) = key.strip_prefix('@') {
            if let Err(msg) = validation::validate_leaf_name(name) {
                errors.push(key_error(path, key, msg));
                continue;
            }
            if let Some(leaf) = require_map(value, path, key, errors) {
                node.leaf_actions
                    .insert(name.to_string(), compile_leaf(leaf, path, name, errors));
            }
        } else if key == PARENT_ONLY_KEY {
            if let Some(local) = require_map(value, path, key, errors) {
                for (k, v) in local {
                    node.parent_only_params.insert(k.clone(), v.clone());
                }
            }
        } else {
            node.global_params.insert(key.clone(), value.clone());
        }
    }

    validation::check_node(&node, path, errors);
    node
}

fn compile_leaf(
    map: &Map<String, Value>,
    path: &str,
    name: &str,
    errors: &mut Vec<ValidationError>,
) -> LeafAction {
    let mut leaf = LeafAction::default();

    for (key, value) in map {
        match key.as_str() {
            METHODS_KEY => match value.as_object() {
                Some(methods) => {
                    for (method, action) in methods {
                        match action.as_str() {
                            Some(action) => {
                                leaf.method_actions
                                    .insert(method.to_uppercase(), action.to_string());
                            }
                            None => errors.push(key_error(
                                path,
                                &format!("@{name}.methods.{method}"),
                                "method entry must name an action (string)".into(),
                            )),
                        }
                    }
                }
                None => errors.push(key_error(
                    path,
                    &format!("@{name}.methods"),
                    "methods must be a map of HTTP method -> action name".into(),
                )),
            },

            PARAMS_KEY => match value.as_array() {
                Some(names) => {
                    let mut collected = Vec::with_capacity(names.len());
                    for entry in names {
                        match entry.as_str() {
                            Some(s) => collected.push(s.to_string()),
                            None => errors.push(key_error(
                                path,
                                &format!("@{name}.params"),
                                "param names must be strings".into(),
                            )),
                        }
                    }
                    leaf.param_names = Some(collected);
                }
                None => errors.push(key_error(
                    path,
                    &format!("@{name}.params"),
                    "params must be an ordered list of names".into(),
                )),
            },

            _ => {
                leaf.overrides.insert(key.clone(), value.clone());
            }
        }
    }

    leaf
}

fn require_map<'v>(
    value: &'v Value,
    path: &str,
    key: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<&'v Map<String, Value>> {
    let map = value.as_object();
    if map.is_none() {
        errors.push(key_error(path, key, "value must be a map".into()));
    }
    map
}

fn key_error(path: &str, key: &str, message: String) -> ValidationError {
    ValidationError {
        node: path.to_string(),
        key: key.to_string(),
        message,
        suggestion: None,
    }
}

fn join(path: &str, key: &str) -> String {
    if path == "/" {
        key.to_string()
    } else {
        format!("{path}{key}")
    }
}
