//! The mutable tree variant.
//!
//! [`TreeMut`] carries the full read contract of [`Tree`] plus in-place
//! write and delete through the same key-or-path addressing. Writes
//! auto-vivify missing intermediate levels; writing *through* an existing
//! scalar is a [`TreeError::PathConflict`] rather than a silent overwrite.

use std::fmt;

use tracing::trace;

use super::{Tree, TreeError, TreeKind, Value, path};

/// The mutable tree variant.
///
/// Same storage and read semantics as [`Tree`]; additionally supports
/// [`TreeMut::set`], [`TreeMut::unset`], and [`TreeMut::get_mut`]. A
/// `TreeMut` is single-writer by convention — it is plain owned data with no
/// interior mutability, so sharing it across writers requires external
/// synchronization.
///
/// # Examples
///
/// ```
/// # use pathtree::TreeMut;
/// # use serde_json::json;
/// let mut tree = TreeMut::from_value(json!({"a": {"b": 1}}))?;
///
/// tree.set("a.b", 2)?;
/// tree.set("a.c.d", "deep")?; // "c" is auto-vivified
/// assert_eq!(tree.get_as::<i64>("a.b"), Some(2));
/// assert_eq!(tree.get_as::<&str>("a.c.d"), Some("deep"));
///
/// tree.unset("a.b");
/// assert!(!tree.contains_key("a.b"));
/// # Ok::<(), pathtree::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TreeMut {
    pub(crate) root: Tree,
}

impl Default for TreeMut {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeMut {
    /// Creates a new empty mapping-shaped tree.
    pub fn new() -> Self {
        TreeMut {
            root: Tree::new_map(),
        }
    }

    /// Builds a mutable tree from raw nested data.
    ///
    /// # Errors
    /// Returns [`TreeError::InvalidInput`] if the top level is not a mapping
    /// or sequence.
    pub fn from_value(value: serde_json::Value) -> Result<Self, TreeError> {
        Ok(TreeMut {
            root: Tree::from_value(value)?,
        })
    }

    /// Parses a JSON document and builds a mutable tree from it.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(TreeMut {
            root: Tree::from_json_str(json)?,
        })
    }

    /// Returns whether the top level came from a mapping or a sequence.
    pub fn kind(&self) -> TreeKind {
        self.root.kind()
    }

    /// Returns the number of immediate children at the top level only.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Returns true if the top level has no children.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Gets a value by key or dotted path. See [`Tree::get`].
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
        self.root.get(key)
    }

    /// Gets a value by key or path with automatic type conversion.
    /// See [`Tree::get_as`].
    pub fn get_as<'a, T>(&'a self, key: impl AsRef<str>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = TreeError>,
    {
        self.root.get_as(key)
    }

    /// Returns true if the key or path resolves. See [`Tree::contains_key`].
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.root.contains_key(key)
    }

    /// Returns an iterator over the immediate (key, value) pairs in order.
    ///
    /// Restartable like the immutable side, but only guaranteed identical
    /// across restarts while no mutation happens in between.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.root.iter()
    }

    /// Returns an iterator over the immediate keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys()
    }

    /// Returns an iterator over the immediate values in order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.root.values()
    }

    /// Gets a mutable reference to a value by key or path.
    ///
    /// Useful for in-place scalar edits or wholesale replacement of a value;
    /// structural changes go through [`TreeMut::set`] and [`TreeMut::unset`].
    pub fn get_mut(&mut self, key: impl AsRef<str>) -> Option<&mut Value> {
        let segments = path::split(key.as_ref());
        let (last, parents) = segments.split_last()?;

        let mut current = &mut self.root;
        for segment in parents {
            let child_key = current.storage_key(segment);
            match current.children.get_mut(&child_key) {
                Some(Value::Tree(tree)) => current = tree,
                _ => return None,
            }
        }
        let child_key = current.storage_key(last);
        current.children.get_mut(&child_key)
    }

    /// Sets a value at the given key or path, returning the previous value.
    ///
    /// Missing intermediate levels are created as empty mapping-shaped trees
    /// (auto-vivification). Container values are wrapped as nested trees
    /// before storage, so `set("a", json!({...}))` behaves like construction.
    /// On a sequence level a numeric final segment stores under its canonical
    /// decimal index, which may extend the sequence sparsely.
    ///
    /// # Errors
    /// - [`TreeError::InvalidPath`] for the empty path (a tree cannot
    ///   replace itself).
    /// - [`TreeError::PathConflict`] if an intermediate segment exists but
    ///   holds a scalar. The scalar is left untouched.
    pub fn set(
        &mut self,
        key: impl AsRef<str>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, TreeError> {
        let path_str = key.as_ref();
        let segments = path::split(path_str);
        let Some((last, parents)) = segments.split_last() else {
            return Err(TreeError::InvalidPath {
                path: path_str.to_string(),
            });
        };

        let mut current = &mut self.root;
        for segment in parents {
            let child_key = current.storage_key(segment);
            let entry = current.children.entry(child_key).or_insert_with(|| {
                trace!(path = path_str, segment = segment.as_str(), "auto-vivifying intermediate");
                Value::Tree(Tree::new_map())
            });
            match entry {
                Value::Tree(tree) => current = tree,
                _ => {
                    return Err(TreeError::PathConflict {
                        path: path_str.to_string(),
                        segment: segment.clone(),
                    });
                }
            }
        }

        let child_key = current.storage_key(last);
        trace!(path = path_str, "set");
        Ok(current.children.insert(child_key, value.into()))
    }

    /// Removes the entry at the given key or path, returning the removed
    /// value.
    ///
    /// Removing a non-existent path (including the empty path) is a no-op
    /// returning `None` — delete is idempotent, matching the silent-absence
    /// convention of the read side. Sibling order is preserved. On sequence
    /// levels the surviving indices keep their keys, leaving a positional
    /// hole rather than shifting later elements down.
    pub fn unset(&mut self, key: impl AsRef<str>) -> Option<Value> {
        let path_str = key.as_ref();
        let segments = path::split(path_str);
        let (last, parents) = segments.split_last()?;

        let mut current = &mut self.root;
        for segment in parents {
            let child_key = current.storage_key(segment);
            match current.children.get_mut(&child_key) {
                Some(Value::Tree(tree)) => current = tree,
                _ => return None,
            }
        }

        let child_key = current.storage_key(last);
        let removed = current.children.shift_remove(&child_key);
        if removed.is_some() {
            trace!(path = path_str, "unset");
        }
        removed
    }

    /// Recursively unwraps this tree back into raw nested data.
    /// See [`Tree::to_value`].
    pub fn to_value(&self) -> serde_json::Value {
        self.root.to_value()
    }

    /// Converts to a JSON string representation of the raw data.
    pub fn to_json_string(&self) -> String {
        self.root.to_json_string()
    }

    /// Converts to the immutable variant as an independent deep copy.
    ///
    /// Further mutation of this tree never affects the result.
    pub fn to_immutable(&self) -> Tree {
        self.root.clone()
    }

    /// Returns an independent copy of this tree.
    ///
    /// Self-conversion is a no-op in value terms; the result compares equal.
    pub fn to_mutable(&self) -> TreeMut {
        self.clone()
    }
}

impl fmt::Display for TreeMut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

impl TryFrom<serde_json::Value> for TreeMut {
    type Error = TreeError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        TreeMut::from_value(value)
    }
}

impl From<TreeMut> for Tree {
    fn from(tree: TreeMut) -> Self {
        tree.root
    }
}

impl serde::Serialize for TreeMut {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.root.serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for TreeMut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(TreeMut {
            root: Tree::deserialize(deserializer)?,
        })
    }
}
