//! Path specifications for nested lookups
//!
//! A path is an ordered list of [`Key`] segments. It can be given pre-split
//! (any list of keys or strings) or as a single string split on a separator,
//! `/` by default.

use crate::key::Key;
use smallvec::SmallVec;
use std::fmt;

/// Default segment separator for string paths
pub const DEFAULT_SEPARATOR: &str = "/";

/// Ordered path segments, inline for typical depths
pub type Segments = SmallVec<[Key; 8]>;

/// A parsed path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSpec {
    segments: Segments,
}

impl PathSpec {
    /// Split `text` on `separator`
    ///
    /// The empty string is the empty path (the node itself). Empty segments
    /// inside a non-empty path are kept as the empty key. An empty separator
    /// treats the whole text as a single segment.
    pub fn parse(text: &str, separator: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        if separator.is_empty() {
            return Self::from_segments([Key::parse(text)]);
        }
        Self::from_segments(text.split(separator).map(Key::parse))
    }

    /// Build from pre-split segments
    pub fn from_segments<I, K>(segments: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Path segments in lookup order
    pub fn segments(&self) -> &[Key] {
        &self.segments
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether this path addresses the starting node itself
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Render the first `depth` segments joined with the default separator
    pub fn prefix(&self, depth: usize) -> String {
        self.segments
            .iter()
            .take(depth)
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(DEFAULT_SEPARATOR)
    }
}

impl fmt::Display for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix(self.segments.len()))
    }
}

impl From<&str> for PathSpec {
    fn from(text: &str) -> Self {
        PathSpec::parse(text, DEFAULT_SEPARATOR)
    }
}

impl From<String> for PathSpec {
    fn from(text: String) -> Self {
        PathSpec::parse(&text, DEFAULT_SEPARATOR)
    }
}

impl<K: Into<Key>> From<Vec<K>> for PathSpec {
    fn from(segments: Vec<K>) -> Self {
        PathSpec::from_segments(segments)
    }
}

impl<K: Into<Key>, const N: usize> From<[K; N]> for PathSpec {
    fn from(segments: [K; N]) -> Self {
        PathSpec::from_segments(segments)
    }
}

impl<K: Clone + Into<Key>> From<&[K]> for PathSpec {
    fn from(segments: &[K]) -> Self {
        PathSpec::from_segments(segments.iter().cloned())
    }
}
