//! Conversion between trees and the nested YAML mapping representation.
//!
//! A node maps to a block with keys `value`, `left`, `right`; the child
//! keys are recursive and optional. Import tolerates an explicit `null`
//! under `left`/`right` (same as an absent key), export never emits one.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value as Yaml};
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::tree::{Node, Value};

const KEY_VALUE: &str = "value";
const KEY_LEFT: &str = "left";
const KEY_RIGHT: &str = "right";

/// Reconstruct a tree from its mapping representation.
///
/// YAML `null` and the empty mapping both mean "no node here"; this is
/// also how absent subtrees are represented recursively.
pub fn from_mapping(doc: &Yaml) -> TreeResult<Option<Node>> {
    match doc {
        Yaml::Null => Ok(None),
        Yaml::Mapping(map) if map.is_empty() => Ok(None),
        Yaml::Mapping(map) => {
            let value = match map.get(KEY_VALUE) {
                Some(scalar) => scalar_from_yaml(scalar)?,
                None => Value::Null,
            };
            let mut node = Node::new(value);
            node.left = child_from_mapping(map, KEY_LEFT)?;
            node.right = child_from_mapping(map, KEY_RIGHT)?;
            Ok(Some(node))
        }
        other => Err(TreeError::MalformedMapping(format!(
            "expected a mapping or null, got {}",
            yaml_kind(other)
        ))),
    }
}

fn child_from_mapping(map: &Mapping, key: &str) -> TreeResult<Option<Box<Node>>> {
    match map.get(key) {
        None => Ok(None),
        Some(child) => Ok(from_mapping(child)?.map(Box::new)),
    }
}

/// Convert a tree into its mapping representation.
///
/// Keys are emitted in insertion order (`value`, `left`, `right`); absent
/// children are omitted entirely rather than written as `null`.
pub fn to_mapping(root: Option<&Node>) -> Yaml {
    match root {
        None => Yaml::Null,
        Some(node) => {
            let mut map = Mapping::new();
            map.insert(Yaml::from(KEY_VALUE), scalar_to_yaml(&node.value));
            if let Some(left) = node.left.as_deref() {
                map.insert(Yaml::from(KEY_LEFT), to_mapping(Some(left)));
            }
            if let Some(right) = node.right.as_deref() {
                map.insert(Yaml::from(KEY_RIGHT), to_mapping(Some(right)));
            }
            Yaml::Mapping(map)
        }
    }
}

/// Read and parse a tree document from `path`.
#[instrument(level = "debug")]
pub fn load_tree(path: &Path) -> TreeResult<Option<Node>> {
    let content = fs::read_to_string(path)?;
    let doc: Yaml = serde_yaml::from_str(&content)?;
    from_mapping(&doc)
}

/// Serialize the tree and write it to `path`.
#[instrument(level = "debug", skip(root))]
pub fn save_tree(root: Option<&Node>, path: &Path) -> TreeResult<()> {
    let content = serde_yaml::to_string(&to_mapping(root))?;
    fs::write(path, content)?;
    Ok(())
}

fn scalar_from_yaml(scalar: &Yaml) -> TreeResult<Value> {
    match scalar {
        Yaml::Null => Ok(Value::Null),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float(f))
            } else {
                Err(TreeError::MalformedMapping(format!(
                    "unrepresentable number under '{}': {}",
                    KEY_VALUE, n
                )))
            }
        }
        Yaml::String(s) => Ok(Value::Str(s.clone())),
        other => Err(TreeError::MalformedMapping(format!(
            "unsupported scalar under '{}': {}",
            KEY_VALUE,
            yaml_kind(other)
        ))),
    }
}

fn scalar_to_yaml(value: &Value) -> Yaml {
    match value {
        Value::Null => Yaml::Null,
        Value::Int(i) => Yaml::from(*i),
        Value::Float(f) => Yaml::from(*f),
        Value::Str(s) => Yaml::from(s.as_str()),
    }
}

fn yaml_kind(value: &Yaml) -> &'static str {
    match value {
        Yaml::Null => "null",
        Yaml::Bool(_) => "boolean",
        Yaml::Number(_) => "number",
        Yaml::String(_) => "string",
        Yaml::Sequence(_) => "sequence",
        Yaml::Mapping(_) => "mapping",
        Yaml::Tagged(_) => "tagged value",
    }
}
