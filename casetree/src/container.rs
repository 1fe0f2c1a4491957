//! The recursive container node
//!
//! Every value assigned into a [`RecursiveContainer`] is itself wrapped into a
//! container, so a tree is homogeneous: each node holds either a scalar or a
//! mapping of further nodes. Reads materialize plain [`Value`]s with the
//! node's case transforms applied; stored data is never rewritten.
//!
//! Policy flags are plain per-node fields. The recursive setters walk the
//! subtree that exists at call time; nodes attached later keep their own
//! settings until a setter runs again.
//!
//! ```
//! use casetree::RecursiveContainer;
//! use serde_json::json;
//!
//! let mut config = RecursiveContainer::from_value(json!({
//!     "Server": {"Host": "Example.org", "Ports": [80, 443]}
//! }));
//!
//! assert_eq!(config.path("Server/Ports/1")?, json!(443));
//!
//! config.set_case_sensitivity(false).to_lower();
//! assert_eq!(config.path("server/host")?, json!("example.org"));
//!
//! config.original();
//! assert_eq!(config.path("SERVER/HOST")?, json!("Example.org"));
//! # Ok::<(), casetree::ContainerError>(())
//! ```

use crate::error::{ContainerError, Result};
use crate::key::Key;
use crate::options::ContainerOptions;
use crate::path::PathSpec;
use crate::payload::{Mapping, Payload};
use crate::transform::CaseTransform;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::borrow::Cow;
use tracing::{debug, trace};

/// A node in a tree of nested key/value data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecursiveContainer {
    payload: Payload,
    options: ContainerOptions,
}

/// Outcome of walking a path
enum Resolved<'a> {
    /// Path was empty
    Origin,
    /// Final node and the node it was looked up in
    Found {
        parent: &'a RecursiveContainer,
        node: &'a RecursiveContainer,
    },
    /// A segment was missing and the node holding it ignores missing keys
    Suppressed,
}

impl RecursiveContainer {
    /// Create an empty mapping node
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap nested data
    ///
    /// Arrays and objects are walked and each entry is wrapped recursively.
    /// Any other value becomes the scalar payload of a leaf as-is.
    pub fn from_value(data: Value) -> Self {
        let payload = match data {
            Value::Array(items) => {
                let mut mapping = Mapping::from_sequence();
                for (index, item) in items.into_iter().enumerate() {
                    mapping.insert(Key::Index(index), Self::from_value(item));
                }
                Payload::Mapping(mapping)
            }
            Value::Object(map) => {
                let mut mapping = Mapping::default();
                for (name, item) in map {
                    mapping.insert(Key::from(name), Self::from_value(item));
                }
                mapping.finish_as_object();
                Payload::Mapping(mapping)
            }
            scalar => Payload::Scalar(scalar),
        };
        Self {
            payload,
            options: ContainerOptions::default(),
        }
    }

    /// Wrap nested data and apply `options` to every node
    pub fn with_options(data: Value, options: ContainerOptions) -> Self {
        let mut container = Self::from_value(data);
        container.apply_options(&options);
        container
    }

    /// The empty-node sentinel returned for ignored missing keys
    pub fn sentinel() -> Self {
        Self {
            payload: Payload::Scalar(Value::Null),
            options: ContainerOptions::default(),
        }
    }

    /// Raw payload of this node
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Whether this node holds a scalar rather than a mapping
    pub fn is_leaf(&self) -> bool {
        matches!(self.payload, Payload::Scalar(_))
    }

    /// Current policy of this node
    pub fn options(&self) -> ContainerOptions {
        self.options
    }

    /// Whether lookups on this node match keys exactly
    pub fn is_case_sensitive(&self) -> bool {
        self.options.case_sensitive
    }

    /// Whether lookups on this node return the sentinel for missing keys
    pub fn ignores_missing(&self) -> bool {
        self.options.ignore_missing
    }

    /// Transform applied to string values read through this node
    pub fn value_case_transform(&self) -> CaseTransform {
        self.options.value_case
    }

    /// Transform applied to keys read through this node
    pub fn key_case_transform(&self) -> CaseTransform {
        self.options.key_case
    }

    /// Store `value` at `key`, wrapping it recursively
    ///
    /// A leaf becomes a mapping the first time a keyed set reaches it.
    pub fn set<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        self.insert_node(key, Self::from_value(value.into()));
        self
    }

    /// Append `value` at the next sequential index and return that index
    ///
    /// Fails with [`ContainerError::IndexExhausted`], leaving the node
    /// unchanged, when an entry already sits at `usize::MAX`.
    pub fn push<V: Into<Value>>(&mut self, value: V) -> Result<Key> {
        self.mapping_mut()
            .push(Self::from_value(value.into()))
            .ok_or(ContainerError::IndexExhausted { last: usize::MAX })
    }

    /// Attach an already built node at `key`, keeping its own settings
    ///
    /// Returns the node previously stored at exactly `key`.
    pub fn insert_node<K: Into<Key>>(&mut self, key: K, node: Self) -> Option<Self> {
        self.mapping_mut().insert(key.into(), node)
    }

    /// Read the materialized value at `key`
    ///
    /// This node's value and key transforms are applied to the child's
    /// materialized value. A missing key fails with
    /// [`ContainerError::KeyNotFound`], or yields `null` (the sentinel's
    /// value) when missing keys are ignored.
    pub fn get<K: Into<Key>>(&self, key: K) -> Result<Value> {
        let key = key.into();
        match self.lookup(&key) {
            Some(child) => Ok(self.present(child.materialize())),
            None if self.options.ignore_missing => {
                trace!(key = %key, "missing key ignored");
                Ok(Self::sentinel().value())
            }
            None => Err(self.missing(&key, String::new())),
        }
    }

    /// Borrow the child node at `key`
    ///
    /// When missing keys are ignored an owned sentinel stands in for the
    /// absent child.
    pub fn node<K: Into<Key>>(&self, key: K) -> Result<Cow<'_, Self>> {
        let key = key.into();
        match self.lookup(&key) {
            Some(child) => Ok(Cow::Borrowed(child)),
            None if self.options.ignore_missing => {
                trace!(key = %key, "missing node ignored");
                Ok(Cow::Owned(Self::sentinel()))
            }
            None => Err(self.missing(&key, String::new())),
        }
    }

    /// Mutably borrow the child node at `key`
    ///
    /// Always fails on a missing key: there is no stored node to hand out.
    pub fn node_mut<K: Into<Key>>(&mut self, key: K) -> Result<&mut Self> {
        let key = key.into();
        let stored = match &self.payload {
            Payload::Mapping(mapping) => mapping
                .resolve(&key, self.options.case_sensitive)
                .cloned(),
            Payload::Scalar(_) => None,
        };
        let missing = self.missing(&key, String::new());
        match (&mut self.payload, stored) {
            (Payload::Mapping(mapping), Some(stored)) => mapping.get_mut(&stored).ok_or(missing),
            _ => Err(missing),
        }
    }

    /// Whether `key` is present under this node's case policy
    pub fn exists<K: Into<Key>>(&self, key: K) -> bool {
        self.lookup(&key.into()).is_some()
    }

    /// Remove the entry at `key` and its case-insensitive alias
    ///
    /// The key is resolved under this node's case policy.
    pub fn remove<K: Into<Key>>(&mut self, key: K) -> Option<Self> {
        let key = key.into();
        let case_sensitive = self.options.case_sensitive;
        match &mut self.payload {
            Payload::Mapping(mapping) => {
                let stored = mapping.resolve(&key, case_sensitive)?.clone();
                mapping.remove(&stored)
            }
            Payload::Scalar(_) => None,
        }
    }

    /// Number of direct entries; a leaf counts as one
    pub fn count(&self) -> usize {
        match &self.payload {
            Payload::Mapping(mapping) => mapping.len(),
            Payload::Scalar(_) => 1,
        }
    }

    /// Whether this node is a mapping with no entries
    pub fn is_empty(&self) -> bool {
        match &self.payload {
            Payload::Mapping(mapping) => mapping.is_empty(),
            Payload::Scalar(_) => false,
        }
    }

    /// Direct child keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &Key> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Direct `(key, child)` pairs in insertion order
    ///
    /// Each call starts over from the current contents. Leaves have no
    /// children.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: match &self.payload {
                Payload::Mapping(mapping) => Some(mapping.iter()),
                Payload::Scalar(_) => None,
            },
        }
    }

    /// Fully resolved value of this node
    ///
    /// Mappings materialize like [`to_array`](Self::to_array); a leaf yields
    /// its scalar with the value transform applied.
    pub fn value(&self) -> Value {
        match &self.payload {
            Payload::Mapping(_) => self.to_array(),
            Payload::Scalar(scalar) => self.options.value_case.transform_values(scalar.clone()),
        }
    }

    /// Materialize the subtree into plain nested data
    ///
    /// Called on a leaf, the scalar is wrapped in a one-element array;
    /// leaves below the top level materialize bare.
    pub fn to_array(&self) -> Value {
        match &self.payload {
            Payload::Mapping(mapping) => self.present(mapping.materialize()),
            Payload::Scalar(scalar) => self.present(Value::Array(vec![scalar.clone()])),
        }
    }

    /// Value semantics used for children: bare leaves, own transforms
    pub(crate) fn materialize(&self) -> Value {
        match &self.payload {
            Payload::Mapping(mapping) => self.present(mapping.materialize()),
            Payload::Scalar(scalar) => self.present(scalar.clone()),
        }
    }

    fn present(&self, value: Value) -> Value {
        let value = self.options.value_case.transform_values(value);
        self.options.key_case.transform_keys(value)
    }

    /// Set exact or case-insensitive key matching on this node and all descendants
    pub fn set_case_sensitivity(&mut self, case_sensitive: bool) -> &mut Self {
        let visited = self.walk_mut(&mut |node| node.options.case_sensitive = case_sensitive);
        debug!(case_sensitive, visited, "case sensitivity updated");
        self
    }

    /// Set missing-key suppression on this node and all descendants
    pub fn set_ignore_missing(&mut self, ignore_missing: bool) -> &mut Self {
        let visited = self.walk_mut(&mut |node| node.options.ignore_missing = ignore_missing);
        debug!(ignore_missing, visited, "missing-key policy updated");
        self
    }

    /// Set the string value transform on this node and all descendants
    pub fn set_value_case_transform(&mut self, transform: CaseTransform) -> &mut Self {
        let visited = self.walk_mut(&mut |node| node.options.value_case = transform);
        debug!(%transform, visited, "value case transform updated");
        self
    }

    /// Set the key transform on this node and all descendants
    pub fn set_key_case_transform(&mut self, transform: CaseTransform) -> &mut Self {
        let visited = self.walk_mut(&mut |node| node.options.key_case = transform);
        debug!(%transform, visited, "key case transform updated");
        self
    }

    /// Upper-case values and keys on read
    pub fn to_upper(&mut self) -> &mut Self {
        self.set_value_case_transform(CaseTransform::Upper)
            .set_key_case_transform(CaseTransform::Upper)
    }

    /// Lower-case values and keys on read
    pub fn to_lower(&mut self) -> &mut Self {
        self.set_value_case_transform(CaseTransform::Lower)
            .set_key_case_transform(CaseTransform::Lower)
    }

    /// Read values and keys as stored
    pub fn original(&mut self) -> &mut Self {
        self.set_value_case_transform(CaseTransform::None)
            .set_key_case_transform(CaseTransform::None)
    }

    /// Apply every field of `options` to this node and all descendants
    pub fn apply_options(&mut self, options: &ContainerOptions) -> &mut Self {
        let options = *options;
        let visited = self.walk_mut(&mut |node| node.options = options);
        debug!(?options, visited, "options applied");
        self
    }

    fn walk_mut<F: FnMut(&mut Self)>(&mut self, apply: &mut F) -> usize {
        apply(self);
        let mut visited = 1;
        if let Payload::Mapping(mapping) = &mut self.payload {
            for child in mapping.children_mut() {
                visited += child.walk_mut(apply);
            }
        }
        visited
    }

    /// Resolve a path and read the final value as [`get`](Self::get) would
    ///
    /// String paths are split on `/`; use
    /// [`path_with_separator`](Self::path_with_separator) for another
    /// separator, or pass pre-split segments. Each step follows the case and
    /// missing-key policy of the node it is looked up in. The empty path reads
    /// this node's [`value`](Self::value).
    pub fn path<P: Into<PathSpec>>(&self, spec: P) -> Result<Value> {
        match self.resolve_path(&spec.into())? {
            Resolved::Origin => Ok(self.value()),
            Resolved::Found { parent, node } => Ok(parent.present(node.materialize())),
            Resolved::Suppressed => Ok(Self::sentinel().value()),
        }
    }

    /// [`path`](Self::path) with a custom separator
    pub fn path_with_separator(&self, text: &str, separator: &str) -> Result<Value> {
        self.path(PathSpec::parse(text, separator))
    }

    /// Resolve a path to a node
    pub fn node_at_path<P: Into<PathSpec>>(&self, spec: P) -> Result<Cow<'_, Self>> {
        match self.resolve_path(&spec.into())? {
            Resolved::Origin => Ok(Cow::Borrowed(self)),
            Resolved::Found { node, .. } => Ok(Cow::Borrowed(node)),
            Resolved::Suppressed => Ok(Cow::Owned(Self::sentinel())),
        }
    }

    fn resolve_path(&self, spec: &PathSpec) -> Result<Resolved<'_>> {
        let mut resolved = Resolved::Origin;
        let mut current = self;

        for (depth, segment) in spec.segments().iter().enumerate() {
            match current.lookup(segment) {
                Some(child) => {
                    resolved = Resolved::Found {
                        parent: current,
                        node: child,
                    };
                    current = child;
                }
                None if current.options.ignore_missing => {
                    trace!(path = %spec, depth, "missing path segment ignored");
                    return Ok(Resolved::Suppressed);
                }
                None => return Err(current.missing(segment, spec.prefix(depth))),
            }
        }

        Ok(resolved)
    }

    fn lookup(&self, key: &Key) -> Option<&Self> {
        match &self.payload {
            Payload::Mapping(mapping) => mapping
                .resolve(key, self.options.case_sensitive)
                .and_then(|stored| mapping.get(stored)),
            Payload::Scalar(_) => None,
        }
    }

    fn mapping_mut(&mut self) -> &mut Mapping {
        if let Payload::Scalar(previous) = &self.payload {
            if !previous.is_null() {
                debug!(previous = %previous, "keyed set replaces scalar payload");
            }
            self.payload = Payload::Mapping(Mapping::default());
        }
        match &mut self.payload {
            Payload::Mapping(mapping) => mapping,
            Payload::Scalar(_) => unreachable!("payload converted to mapping above"),
        }
    }

    fn missing(&self, key: &Key, reached_path: String) -> ContainerError {
        let available_keys = match &self.payload {
            Payload::Mapping(mapping) => ContainerError::describe_keys(
                mapping.keys().map(ToString::to_string),
                mapping.len(),
            ),
            Payload::Scalar(scalar) => format!("<{}, cannot traverse further>", type_name(scalar)),
        };
        ContainerError::KeyNotFound {
            key: key.to_string(),
            reached_path,
            available_keys,
        }
    }
}

/// Get a human-readable type name for a scalar
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Iterator over direct `(key, child)` pairs of a node
pub struct Iter<'a> {
    inner: Option<indexmap::map::Iter<'a, Key, RecursiveContainer>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Key, &'a RecursiveContainer);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.as_ref().map_or((0, Some(0)), |inner| inner.size_hint())
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a RecursiveContainer {
    type Item = (&'a Key, &'a RecursiveContainer);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for RecursiveContainer {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut container = Self::new();
        container.extend(iter);
        container
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for RecursiveContainer {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl From<Value> for RecursiveContainer {
    fn from(data: Value) -> Self {
        Self::from_value(data)
    }
}

impl From<RecursiveContainer> for Value {
    fn from(container: RecursiveContainer) -> Self {
        container.value()
    }
}

impl Serialize for RecursiveContainer {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RecursiveContainer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> RecursiveContainer {
        RecursiveContainer::from_value(json!({
            "Name": "Widget",
            "Tags": ["Red", "Blue"],
            "Owner": {"First": "Ada", "Last": "Lovelace"}
        }))
    }

    #[test]
    fn new_is_empty_mapping() {
        let container = RecursiveContainer::new();
        assert!(container.is_empty());
        assert!(!container.is_leaf());
        assert_eq!(container.count(), 0);
        assert_eq!(container.to_array(), json!({}));
    }

    #[test]
    fn scalar_construction_stores_leaf_directly() {
        let leaf = RecursiveContainer::from_value(json!("Hello"));
        assert!(leaf.is_leaf());
        assert_eq!(leaf.payload(), &Payload::Scalar(json!("Hello")));
        assert_eq!(leaf.value(), json!("Hello"));
        assert_eq!(leaf.to_array(), json!(["Hello"]));
        assert_eq!(leaf.count(), 1);
        assert_eq!(leaf.iter().count(), 0);
    }

    #[test]
    fn children_are_always_wrapped() {
        let container = sample();
        for (_, child) in &container {
            assert!(matches!(
                child.payload(),
                Payload::Scalar(Value::String(_)) | Payload::Mapping(_)
            ));
        }
        let tags = container.node("Tags").unwrap();
        assert!(tags.node(0usize).unwrap().is_leaf());
    }

    #[test]
    fn get_returns_materialized_child() {
        let container = sample();
        assert_eq!(container.get("Name").unwrap(), json!("Widget"));
        assert_eq!(container.get("Tags").unwrap(), json!(["Red", "Blue"]));
        assert_eq!(
            container.get("Owner").unwrap(),
            json!({"First": "Ada", "Last": "Lovelace"})
        );
    }

    #[test]
    fn get_missing_reports_available_keys() {
        let container = sample();
        let err = container.get("Color").unwrap_err();
        match err {
            ContainerError::KeyNotFound {
                key,
                available_keys,
                ..
            } => {
                assert_eq!(key, "Color");
                assert_eq!(available_keys, "Name, Tags, Owner");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn get_on_leaf_fails_with_type_hint() {
        let leaf = RecursiveContainer::from_value(json!(5));
        let err = leaf.get("anything").unwrap_err();
        assert!(err.to_string().contains("<number, cannot traverse further>"));
    }

    #[test]
    fn ignore_missing_returns_null_sentinel() {
        let mut container = sample();
        container.set_ignore_missing(true);
        assert_eq!(container.get("Color").unwrap(), Value::Null);
        let node = container.node("Color").unwrap();
        assert!(matches!(node, Cow::Owned(_)));
        assert_eq!(*node, RecursiveContainer::sentinel());
        assert!(!container.exists("Color"));
    }

    #[test]
    fn keyed_set_converts_leaf_to_mapping() {
        let mut container = RecursiveContainer::from_value(json!("scalar"));
        container.set("key", "value");
        assert!(!container.is_leaf());
        assert_eq!(container.to_array(), json!({"key": "value"}));
    }

    #[test]
    fn set_replaces_in_place() {
        let mut container = sample();
        container.set("Name", json!({"Short": "W"}));
        let keys: Vec<String> = container.keys().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["Name", "Tags", "Owner"]);
        assert_eq!(container.path("Name/Short").unwrap(), json!("W"));
    }

    #[test]
    fn push_appends_to_sequences() {
        let mut container = RecursiveContainer::from_value(json!([1, 2]));
        assert_eq!(container.push(3).unwrap(), Key::Index(2));
        assert_eq!(container.to_array(), json!([1, 2, 3]));

        let mut fresh = RecursiveContainer::new();
        fresh.push("a").unwrap();
        fresh.push("b").unwrap();
        assert_eq!(fresh.to_array(), json!(["a", "b"]));
    }

    #[test]
    fn push_after_largest_index_is_rejected() {
        let mut root = RecursiveContainer::new();
        root.set(usize::MAX.to_string(), "last");
        let before = root.clone();

        let err = root.push("next").unwrap_err();
        assert_eq!(err, ContainerError::IndexExhausted { last: usize::MAX });
        assert_eq!(root, before);
        assert_eq!(root.get(usize::MAX).unwrap(), json!("last"));
    }

    #[test]
    fn appended_entries_are_found_case_insensitively() {
        let mut container = RecursiveContainer::new();
        container.push("first").unwrap();
        container.set_case_sensitivity(false);
        assert!(container.exists(0usize));
        assert_eq!(container.get("0").unwrap(), json!("first"));
    }

    #[test]
    fn remove_respects_case_policy() {
        let mut container = sample();
        assert!(container.remove("name").is_none());
        container.set_case_sensitivity(false);
        let removed = container.remove("name").unwrap();
        assert_eq!(removed.value(), json!("Widget"));
        assert!(!container.exists("NAME"));
        assert_eq!(container.count(), 2);
    }

    #[test]
    fn node_mut_allows_nested_updates() {
        let mut container = sample();
        container.node_mut("Owner").unwrap().set("First", "Grace");
        assert_eq!(container.path("Owner/First").unwrap(), json!("Grace"));

        container.set_ignore_missing(true);
        assert!(container.node_mut("Missing").is_err());
    }

    #[test]
    fn value_transform_applies_to_nested_strings() {
        let mut container = sample();
        container.set_value_case_transform(CaseTransform::Upper);
        assert_eq!(container.get("Tags").unwrap(), json!(["RED", "BLUE"]));
        assert_eq!(container.node("Name").unwrap().value(), json!("WIDGET"));
        assert_eq!(container.get("Owner").unwrap()["First"], json!("ADA"));
    }

    #[test]
    fn key_transform_rekeys_nested_mappings() {
        let mut container = sample();
        container.set_key_case_transform(CaseTransform::Lower);
        assert_eq!(
            container.to_array(),
            json!({
                "name": "Widget",
                "tags": ["Red", "Blue"],
                "owner": {"first": "Ada", "last": "Lovelace"}
            })
        );
    }

    #[test]
    fn leaf_to_array_transforms_wrapped_scalar() {
        let mut leaf = RecursiveContainer::from_value(json!("Mixed"));
        leaf.to_lower();
        assert_eq!(leaf.to_array(), json!(["mixed"]));
        assert_eq!(leaf.value(), json!("mixed"));
    }

    #[test]
    fn non_string_scalars_pass_through_transforms() {
        let mut container = RecursiveContainer::from_value(json!({"n": 1.5, "b": true, "z": null}));
        container.to_upper();
        assert_eq!(container.to_array(), json!({"N": 1.5, "B": true, "Z": null}));
    }

    #[test]
    fn walk_mut_reports_visited_nodes() {
        let mut container = sample();
        // root + Name + Tags + 2 tags + Owner + 2 owner fields
        assert_eq!(container.walk_mut(&mut |_| {}), 8);
    }

    #[test]
    fn apply_options_round_trips_through_options() {
        let mut container = sample();
        let options = ContainerOptions {
            case_sensitive: false,
            ignore_missing: true,
            value_case: CaseTransform::Lower,
            key_case: CaseTransform::Upper,
        };
        container.apply_options(&options);
        assert_eq!(container.options(), options);
        assert_eq!(container.node_at_path("Owner/First").unwrap().options(), options);
    }

    #[test]
    fn path_with_separator_and_segments() {
        let container = sample();
        assert_eq!(container.path_with_separator("Owner.Last", ".").unwrap(), json!("Lovelace"));
        assert_eq!(container.path(["Tags", "1"]).unwrap(), json!("Blue"));
        assert_eq!(container.path("").unwrap(), container.value());
    }

    #[test]
    fn path_error_reports_reached_prefix() {
        let container = sample();
        let err = container.path("Owner/Middle").unwrap_err();
        match err {
            ContainerError::KeyNotFound {
                key, reached_path, ..
            } => {
                assert_eq!(key, "Middle");
                assert_eq!(reached_path, "Owner");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn path_through_leaf_fails() {
        let container = sample();
        assert!(container.path("Name/first").is_err());
    }

    #[test]
    fn collection_traits() {
        let container: RecursiveContainer = vec![("a", 1), ("B", 2)].into_iter().collect();
        assert_eq!(container.to_array(), json!({"a": 1, "B": 2}));
        assert_eq!(container.iter().len(), 2);

        let value: Value = container.into();
        assert_eq!(value, json!({"a": 1, "B": 2}));
    }

    #[test]
    fn serde_uses_materialized_value() {
        let mut container = sample();
        container.to_upper();
        let text = serde_json::to_string(&container).unwrap();
        assert!(text.contains("\"OWNER\""));

        let parsed: RecursiveContainer = serde_json::from_str(r#"{"a": {"b": [1, 2]}}"#).unwrap();
        assert_eq!(parsed.path("a/b/1").unwrap(), json!(2));
    }
}
