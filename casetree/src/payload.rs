//! Node payloads
//!
//! A node holds either a bare scalar or an ordered mapping of child nodes.
//! The mapping keeps a lower-cased key index alongside its entries so
//! case-insensitive lookups can find the originally spelled key.

use crate::container::RecursiveContainer;
use crate::key::Key;
use ahash::AHashMap;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Contents of a single node
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Leaf value (string, number, boolean or null)
    Scalar(Value),
    /// Child nodes by key
    Mapping(Mapping),
}

impl Default for Payload {
    fn default() -> Self {
        Payload::Mapping(Mapping::default())
    }
}

/// Insertion-ordered child nodes with a case-folding key index
///
/// Equality compares entries in insertion order and whether the mapping
/// materializes as a sequence; the key index is derived state and ignored.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    entries: IndexMap<Key, RecursiveContainer>,
    /// Lower-cased spelling -> stored key
    key_index: AHashMap<String, Key>,
    /// Built as a sequence; materializes as an array while keys stay 0..n
    sequence: bool,
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.sequence == other.sequence && self.entries.iter().eq(other.entries.iter())
    }
}

impl Mapping {
    pub(crate) fn from_sequence() -> Self {
        Self {
            sequence: true,
            ..Self::default()
        }
    }

    /// Number of direct entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored keys in insertion order
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, RecursiveContainer> {
        self.entries.keys()
    }

    pub(crate) fn iter(&self) -> indexmap::map::Iter<'_, Key, RecursiveContainer> {
        self.entries.iter()
    }

    pub(crate) fn children_mut(
        &mut self,
    ) -> indexmap::map::ValuesMut<'_, Key, RecursiveContainer> {
        self.entries.values_mut()
    }

    /// Stored key for `key` under the given case policy
    pub(crate) fn resolve(&self, key: &Key, case_sensitive: bool) -> Option<&Key> {
        if case_sensitive {
            self.entries.get_key_value(key).map(|(stored, _)| stored)
        } else {
            self.key_index.get(&key.folded())
        }
    }

    pub(crate) fn get(&self, stored: &Key) -> Option<&RecursiveContainer> {
        self.entries.get(stored)
    }

    pub(crate) fn get_mut(&mut self, stored: &Key) -> Option<&mut RecursiveContainer> {
        self.entries.get_mut(stored)
    }

    /// Store `node` at `key`, replacing any previous entry in place
    pub(crate) fn insert(
        &mut self,
        key: Key,
        node: RecursiveContainer,
    ) -> Option<RecursiveContainer> {
        if self.entries.is_empty() {
            self.sequence = matches!(key, Key::Index(_));
        }
        self.key_index.insert(key.folded(), key.clone());
        self.entries.insert(key, node)
    }

    /// Store `node` one past the largest sequential index
    ///
    /// Returns `None`, storing nothing, when `usize::MAX` is already taken.
    pub(crate) fn push(&mut self, node: RecursiveContainer) -> Option<Key> {
        let key = Key::Index(self.next_index()?);
        self.insert(key.clone(), node);
        Some(key)
    }

    fn next_index(&self) -> Option<usize> {
        match self.entries.keys().filter_map(Key::as_index).max() {
            Some(last) => last.checked_add(1),
            None => Some(0),
        }
    }

    /// Remove the entry stored at exactly `stored`
    ///
    /// The folded alias is dropped with it. If another surviving key folds to
    /// the same spelling, the alias moves to the most recently inserted one.
    pub(crate) fn remove(&mut self, stored: &Key) -> Option<RecursiveContainer> {
        let removed = self.entries.shift_remove(stored)?;
        let folded = stored.folded();
        if self.key_index.get(&folded) == Some(stored) {
            self.key_index.remove(&folded);
            if let Some(survivor) = self.entries.keys().rev().find(|k| k.folded() == folded) {
                self.key_index.insert(folded, survivor.clone());
            }
        }
        Some(removed)
    }

    pub(crate) fn finish_as_object(&mut self) {
        self.sequence = false;
    }

    /// Whether entries are exactly `0..len` in order and came from a sequence
    pub fn is_list(&self) -> bool {
        self.sequence
            && self
                .entries
                .keys()
                .enumerate()
                .all(|(position, key)| key.as_index() == Some(position))
    }

    /// Plain nested value of every child, without this level's transforms
    pub(crate) fn materialize(&self) -> Value {
        if self.is_list() {
            Value::Array(self.entries.values().map(RecursiveContainer::materialize).collect())
        } else {
            let mut map = Map::with_capacity(self.entries.len());
            for (key, child) in &self.entries {
                map.insert(key.to_string(), child.materialize());
            }
            Value::Object(map)
        }
    }

    #[cfg(test)]
    pub(crate) fn alias(&self, folded: &str) -> Option<&Key> {
        self.key_index.get(folded)
    }

    #[cfg(test)]
    pub(crate) fn alias_count(&self) -> usize {
        self.key_index.len()
    }
}
