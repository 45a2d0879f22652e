//! Core tree structure: scalar values, owned nodes, path-encoded insertion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};

/// Scalar payload carried by a tree node.
///
/// Values are opaque to every algorithm in this crate: they are stored,
/// rendered and compared for equality, never interpreted. The untagged
/// serde representation maps YAML `null`, integers, floats and strings
/// directly onto the variants.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "None"),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "{}", v),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl FromStr for Value {
    type Err = std::convert::Infallible;

    /// Parse a command-line word with YAML scalar rules:
    /// `10` -> Int, `2.5` -> Float, `null`/`~` -> Null, anything else -> Str.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_yaml::from_str(s).unwrap_or_else(|_| Value::Str(s.to_string())))
    }
}

/// One position in a binary tree.
///
/// A child slot is either absent or an exclusively owned subtree; nodes
/// are never shared between parents, so dropping a parent drops the whole
/// subtree below it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Scalar payload of this position
    pub value: Value,
    /// Left child, `None` when the slot is empty
    pub left: Option<Box<Node>>,
    /// Right child, `None` when the slot is empty
    pub right: Option<Box<Node>>,
}

impl Node {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            left: None,
            right: None,
        }
    }

    fn children(&self) -> impl Iterator<Item = &Node> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }

    /// Height of the subtree rooted here; a single node has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }

    /// Number of nodes in the subtree rooted here.
    pub fn count(&self) -> usize {
        1 + self.children().map(|child| child.count()).sum::<usize>()
    }

    /// Attach a new node at the position encoded by `path`.
    ///
    /// `path` is a sequence of `L`/`R` steps read from this node; every
    /// step except the last must lead to an existing node, and the last
    /// step names the child slot that receives the new node. An occupied
    /// slot is overwritten and its subtree dropped. The empty path is a
    /// deliberate no-op.
    #[instrument(level = "debug", skip(self, value))]
    pub fn insert(&mut self, path: &str, value: impl Into<Value>) -> TreeResult<()> {
        if path.is_empty() {
            return Ok(());
        }

        let steps: Vec<char> = path.chars().collect();
        let mut current = self;

        // Walk to the parent of the new node
        for &step in &steps[..steps.len() - 1] {
            current = match step {
                'L' => current.left.as_deref_mut(),
                'R' => current.right.as_deref_mut(),
                other => return Err(TreeError::InvalidPathCharacter(other)),
            }
            .ok_or_else(|| TreeError::MissingIntermediateNode {
                path: path.to_string(),
                step,
            })?;
        }

        let new_node = Some(Box::new(Node::new(value)));
        match steps[steps.len() - 1] {
            'L' => current.left = new_node,
            'R' => current.right = new_node,
            other => return Err(TreeError::InvalidPathCharacter(other)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_and_count() {
        let mut root = Node::new(1);
        assert_eq!(root.depth(), 1);
        assert_eq!(root.count(), 1);

        root.insert("L", 2).unwrap();
        root.insert("LL", 3).unwrap();
        assert_eq!(root.depth(), 3);
        assert_eq!(root.count(), 3);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Null.to_string(), "None");
        assert_eq!(Value::Int(10).to_string(), "10");
        assert_eq!(Value::Str("x".into()).to_string(), "x");
    }

    #[test]
    fn test_value_from_str() {
        assert_eq!("10".parse::<Value>().unwrap(), Value::Int(10));
        assert_eq!("2.5".parse::<Value>().unwrap(), Value::Float(2.5));
        assert_eq!("null".parse::<Value>().unwrap(), Value::Null);
        assert_eq!("abc".parse::<Value>().unwrap(), Value::Str("abc".into()));
    }
}
