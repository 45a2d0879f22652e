//! rstree: a small binary tree toolkit.
//!
//! Trees are built by attaching nodes at `L`/`R` direction paths, persisted
//! as nested YAML mappings (`value`/`left`/`right` blocks) and rendered in
//! a deterministic text format.
//!
//! ```
//! use rstree::{render, Node};
//!
//! let mut root = Node::new(10);
//! root.insert("L", 5)?;
//! root.insert("LR", 7)?;
//!
//! let lines = render(Some(&root));
//! assert_eq!(lines[0], "Root:10");
//! # Ok::<(), rstree::TreeError>(())
//! ```

pub mod cli;
pub mod errors;
pub mod render;
pub mod serialize;
pub mod tree;
pub mod util;

pub use errors::{TreeError, TreeResult};
pub use render::{render, write_tree};
pub use serialize::{from_mapping, load_tree, save_tree, to_mapping};
pub use tree::{Node, Value};
