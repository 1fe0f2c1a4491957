//! Container keys
//!
//! A mapping payload is addressed either by name or by sequential index.
//! Text that spells a canonical non-negative integer (`"0"`, `"42"`, but not
//! `"007"` or `"+1"`) is normalized to [`Key::Index`], so `"3"` and `3`
//! address the same entry.

use std::fmt;

/// Key of a direct entry in a mapping payload
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Sequential position
    Index(usize),
    /// Named entry
    Name(String),
}

impl Key {
    /// Build a key from text, normalizing canonical integers to [`Key::Index`]
    pub fn parse(text: &str) -> Self {
        match parse_index(text) {
            Some(index) => Key::Index(index),
            None => Key::Name(text.to_string()),
        }
    }

    /// Lower-cased spelling used by the case-insensitive key index
    pub fn folded(&self) -> String {
        match self {
            Key::Index(index) => index.to_string(),
            Key::Name(name) => name.to_lowercase(),
        }
    }

    /// Index value, if this is a sequential key
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }
}

fn parse_index(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    text.parse().ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Key::parse(text)
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        match parse_index(&text) {
            Some(index) => Key::Index(index),
            None => Key::Name(text),
        }
    }
}
