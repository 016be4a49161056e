//! Tree-level API.
//!
//! This module provides the tree abstraction at the center of pathtree. The
//! [`Tree`] type is the read-only variant: built once from raw nested data,
//! it answers key and dotted-path lookups, iterates its immediate children in
//! their original order, and unwraps back into raw data. Its mutable sibling
//! [`TreeMut`] lives in [`mutable`] and adds write/delete through the same
//! addressing.
//!
//! # Design
//!
//! The two variants are distinct types rather than one type with a runtime
//! mutability flag: `Tree` simply has no `&mut` surface, so illegal mutation
//! is a compile-time error. Conversions in either direction deep-copy — the
//! storage is plain owned data, so the copies can never alias.
//!
//! # Usage
//!
//! ```
//! use pathtree::Tree;
//! use serde_json::json;
//!
//! let tree = Tree::from_value(json!({
//!     "user": { "name": "Alice", "tags": ["admin", "ops"] }
//! }))?;
//!
//! assert_eq!(tree.get_as::<&str>("user.name"), Some("Alice"));
//! assert_eq!(tree.get_as::<&str>("user.tags.0"), Some("admin"));
//! assert_eq!(tree.len(), 1);
//! # Ok::<(), pathtree::Error>(())
//! ```

use std::fmt;

use indexmap::IndexMap;

// Submodules
pub mod errors;
pub mod mutable;
pub mod path;
pub mod value;

// Convenience re-exports for the core tree types
pub use errors::TreeError;
pub use mutable::TreeMut;
pub use value::Value;

/// Whether a tree level came from a keyed mapping or an ordered sequence.
///
/// The distinction matters in two places: sequence levels accept numeric path
/// segments as positional indices, and [`Tree::to_value`] rebuilds them as
/// arrays rather than objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeKind {
    /// A keyed mapping; children keep their original key strings
    Map,
    /// An ordered sequence; children are keyed by their decimal index
    Seq,
}

/// The immutable tree variant.
///
/// A `Tree` is an insertion-ordered mapping from segment key to [`Value`].
/// Sequence levels are stored the same way as mappings, keyed by the decimal
/// form of their indices, with [`TreeKind::Seq`] recording the original
/// shape. Nested containers are wrapped as trees eagerly at construction, so
/// every container observed through this API is itself a `Tree`.
///
/// # Key-or-path addressing
///
/// Every lookup parameter is a path: a single key with no unescaped dot is
/// just a one-segment path. A literal dot inside a key is escaped as `\.`
/// (see [`path`]). Lookups that fail — missing key, out-of-range index,
/// descent through a scalar, stray escape — are reported as absence, never
/// as an error.
///
/// # Examples
///
/// ```
/// # use pathtree::{Tree, Value};
/// # use serde_json::json;
/// let tree = Tree::from_value(json!({"a": {"b": [10, 20]}}))?;
///
/// // Path access and nested single-key chains are equivalent
/// let nested = tree.get("a").and_then(Value::as_tree).unwrap();
/// assert_eq!(tree.get("a.b.1"), nested.get("b.1"));
///
/// // Counting and iteration are shallow
/// assert_eq!(tree.len(), 1);
/// # Ok::<(), pathtree::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    /// Original shape of this level
    pub(crate) kind: TreeKind,
    /// Child values in insertion/positional order
    pub(crate) children: IndexMap<String, Value>,
}

impl Tree {
    /// Builds a tree from raw nested data, deep-wrapping all containers.
    ///
    /// # Errors
    /// Returns [`TreeError::InvalidInput`] if the top level is not a mapping
    /// or sequence. Nested scalars anywhere below the top level are fine —
    /// they become leaves.
    pub fn from_value(value: serde_json::Value) -> Result<Self, TreeError> {
        match value {
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                Ok(Self::wrap_container(value))
            }
            other => Err(TreeError::InvalidInput {
                found: json_type_name(&other).to_string(),
            }),
        }
    }

    /// Parses a JSON document and builds a tree from it.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let raw: serde_json::Value = serde_json::from_str(json)?;
        Ok(Self::from_value(raw)?)
    }

    /// Wraps a value already known to be a container.
    pub(crate) fn wrap_container(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(map) => Tree {
                kind: TreeKind::Map,
                children: map
                    .into_iter()
                    .map(|(key, child)| (key, Value::from(child)))
                    .collect(),
            },
            serde_json::Value::Array(items) => Tree {
                kind: TreeKind::Seq,
                children: items
                    .into_iter()
                    .enumerate()
                    .map(|(index, child)| (index.to_string(), Value::from(child)))
                    .collect(),
            },
            _ => unreachable!("wrap_container is only called on containers"),
        }
    }

    /// Creates an empty mapping-shaped tree. Used for auto-vivified
    /// intermediates and as the starting point of [`TreeMut::new`].
    pub(crate) fn new_map() -> Self {
        Tree {
            kind: TreeKind::Map,
            children: IndexMap::new(),
        }
    }

    /// Returns whether this level came from a mapping or a sequence.
    pub fn kind(&self) -> TreeKind {
        self.kind
    }

    /// Returns the number of immediate children at this level only.
    ///
    /// Never recursive: a child that is itself a tree counts as one.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if this level has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Gets a value by key or dotted path.
    ///
    /// Returns `None` for any resolution failure; absent values are not an
    /// error. The empty path addresses the tree itself and yields `None`
    /// here — use [`Tree::contains_key`] for the existence question.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
        let segments = path::split(key.as_ref());
        let (first, rest) = segments.split_first()?;

        let mut current = self.child(first)?;
        for segment in rest {
            current = current.as_tree()?.child(segment)?;
        }
        Some(current)
    }

    /// Gets a value by key or path with automatic type conversion.
    ///
    /// Returns `None` if the key doesn't exist or the value is of a
    /// different type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtree::Tree;
    /// # use serde_json::json;
    /// let tree = Tree::from_value(json!({"name": "Alice", "age": 30}))?;
    ///
    /// assert_eq!(tree.get_as::<&str>("name"), Some("Alice"));
    /// assert_eq!(tree.get_as::<i64>("age"), Some(30));
    /// assert_eq!(tree.get_as::<i64>("name"), None); // type mismatch
    /// assert_eq!(tree.get_as::<i64>("missing"), None); // absent
    /// # Ok::<(), pathtree::Error>(())
    /// ```
    pub fn get_as<'a, T>(&'a self, key: impl AsRef<str>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = TreeError>,
    {
        let value = self.get(key)?;
        T::try_from(value).ok()
    }

    /// Returns true if the key or path resolves.
    ///
    /// Never raises: missing keys, paths through scalars, and unmatched
    /// escapes all yield `false`. The empty path resolves to the tree itself
    /// and is `true`.
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        key.as_ref().is_empty() || self.get(key).is_some()
    }

    /// Returns an iterator over the immediate (key, value) pairs in their
    /// original insertion/positional order.
    ///
    /// The sequence is finite and restartable: calling `iter` again yields
    /// the identical sequence.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.children.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns an iterator over the immediate keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    /// Returns an iterator over the immediate values in order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.children.values()
    }

    /// Recursively unwraps this tree back into raw nested data.
    ///
    /// This is the exact inverse of [`Tree::from_value`] for trees that have
    /// not been mutated: all values and their order are preserved. Sequence
    /// levels rebuild as arrays from the surviving values in order, so holes
    /// left by [`TreeMut::unset`] close up in the raw form.
    pub fn to_value(&self) -> serde_json::Value {
        match self.kind {
            TreeKind::Map => serde_json::Value::Object(
                self.children
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            TreeKind::Seq => {
                serde_json::Value::Array(self.children.values().map(Value::to_json).collect())
            }
        }
    }

    /// Converts to a JSON string representation of the raw data.
    pub fn to_json_string(&self) -> String {
        self.to_value().to_string()
    }

    /// Converts to the mutable variant as an independent deep copy.
    ///
    /// Mutating the result never affects this tree.
    pub fn to_mutable(&self) -> TreeMut {
        TreeMut { root: self.clone() }
    }

    /// Returns an independent copy of this tree.
    ///
    /// Self-conversion is a no-op in value terms; the result compares equal.
    pub fn to_immutable(&self) -> Tree {
        self.clone()
    }

    /// Looks up one immediate child by segment.
    ///
    /// Exact string identity wins first, so a mapping key literally named
    /// "0" shadows nothing. Only on a sequence-shaped level does a numeric
    /// segment fall back to its canonical decimal form (so "01" finds
    /// index 1).
    pub(crate) fn child(&self, segment: &str) -> Option<&Value> {
        if let Some(value) = self.children.get(segment) {
            return Some(value);
        }
        if self.kind == TreeKind::Seq {
            let index: usize = segment.parse().ok()?;
            return self.children.get(index.to_string().as_str());
        }
        None
    }

    /// The key a segment stores under at this level: the canonical decimal
    /// form for fresh numeric segments on sequence levels, the segment
    /// itself everywhere else.
    pub(crate) fn storage_key(&self, segment: &str) -> String {
        if self.kind == TreeKind::Seq && !self.children.contains_key(segment) {
            if let Ok(index) = segment.parse::<usize>() {
                return index.to_string();
            }
        }
        segment.to_string()
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TreeKind::Map => {
                write!(f, "{{")?;
                let mut first = true;
                for (key, value) in self.iter() {
                    if !first {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                    first = false;
                }
                write!(f, "}}")
            }
            TreeKind::Seq => {
                write!(f, "[")?;
                let mut first = true;
                for value in self.values() {
                    if !first {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                    first = false;
                }
                write!(f, "]")
            }
        }
    }
}

impl TryFrom<serde_json::Value> for Tree {
    type Error = TreeError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Tree::from_value(value)
    }
}

impl serde::Serialize for Tree {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.kind {
            TreeKind::Map => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(self.children.len()))?;
                for (key, value) in &self.children {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            TreeKind::Seq => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(self.children.len()))?;
                for value in self.children.values() {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> serde::Deserialize<'de> for Tree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Tree::from_value(raw).map_err(serde::de::Error::custom)
    }
}

/// Raw type name used in [`TreeError::InvalidInput`] messages.
fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
