//!
//! Pathtree: a tree-shaped view over nested keyed/ordered data.
//!
//! This library wraps a nested structure of mappings, sequences, and scalars
//! (typically the output of a JSON decoder) in a tree abstraction that can be
//! addressed two ways: by a single key at one level, or by a dotted path that
//! traverses several levels in one lookup.
//!
//! ## Core Concepts
//!
//! * **Trees ([`Tree`])**: The immutable container. Built from a
//!   [`serde_json::Value`] via [`Tree::from_value`], read through
//!   [`Tree::get`] and friends, and unwrapped back to raw data with
//!   [`Tree::to_value`].
//! * **Mutable trees ([`TreeMut`])**: The same read surface plus `set` and
//!   `unset` through the same key-or-path addressing. Converting between the
//!   two variants always produces an independent deep copy.
//! * **Values ([`Value`])**: What a lookup yields — either a scalar leaf or a
//!   nested [`Tree`]. Nested containers are always materialized as trees,
//!   never handed out as raw data.
//! * **Paths ([`tree::path`])**: Segments separated by unescaped dots. A
//!   literal dot inside a key is written `\.`; `"a.b"` and `"a\.b"` address
//!   different things.
//!
//! ## Example
//!
//! ```
//! use pathtree::Tree;
//! use serde_json::json;
//!
//! let tree = Tree::from_value(json!({
//!     "server": { "host": "localhost", "ports": [8080, 8081] }
//! }))?;
//!
//! assert_eq!(tree.get_as::<&str>("server.host"), Some("localhost"));
//! assert_eq!(tree.get_as::<i64>("server.ports.1"), Some(8081));
//! assert!(!tree.contains_key("server.tls"));
//! # Ok::<(), pathtree::Error>(())
//! ```

pub mod tree;

pub use tree::{Tree, TreeKind, TreeMut, Value};

/// Result type used throughout the pathtree library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the pathtree library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured tree errors from the tree module
    #[error(transparent)]
    Tree(tree::TreeError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Serialize(_) => "serialize",
            Error::Tree(_) => "tree",
        }
    }

    /// Check if this error indicates invalid top-level input.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_invalid_input(),
            _ => false,
        }
    }

    /// Check if this error indicates a write path collided with a scalar.
    pub fn is_path_conflict(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_path_conflict(),
            _ => false,
        }
    }
}
