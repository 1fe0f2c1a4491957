//! casetree Test Utilities
//!
//! Shared fixtures, proptest strategies and logging setup for casetree tests.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

/// Install a `tracing` subscriber that writes through the test harness
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}

/// Mixed-case configuration document used across integration tests
pub fn config_fixture() -> Value {
    json!({
        "Database": {
            "Host": "DB.Example.Org",
            "Port": 5432,
            "Replicas": [
                {"Name": "Primary", "Zone": "EU-West"},
                {"Name": "Standby", "Zone": "US-East"}
            ]
        },
        "Features": ["Search", "Export"],
        "Debug": false,
        "Owner": null
    })
}

/// Three levels of nested mappings: `{a: {b: {c: 42}}}`
pub fn nested_fixture() -> Value {
    json!({"a": {"b": {"c": 42}}})
}

/// Builder for mapping documents with common field types
pub struct DocBuilder {
    fields: Map<String, Value>,
}

impl DocBuilder {
    /// Create an empty document builder
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Add a string field
    pub fn string(mut self, key: &str, value: &str) -> Self {
        self.fields
            .insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    /// Add an integer field
    pub fn int(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), Value::Number(value.into()));
        self
    }

    /// Add a nested document or array
    pub fn nested(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Build the document
    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

impl Default for DocBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Mixed-case identifier, never a canonical integer
pub fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,7}"
}

/// Scalar JSON values with mixed-case strings
pub fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[A-Za-z0-9 ]{0,12}".prop_map(Value::String),
    ]
}

/// Nested arrays and objects up to a few levels deep
///
/// Object keys come from [`key_strategy`]; keys within one object are
/// distinct even when compared case-insensitively.
pub fn document_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((key_strategy(), inner), 0..6).prop_map(|entries| {
                let mut seen = std::collections::HashSet::new();
                let map: Map<String, Value> = entries
                    .into_iter()
                    .filter(|(key, _)| seen.insert(key.to_lowercase()))
                    .collect();
                Value::Object(map)
            }),
        ]
    })
}

/// Top-level mapping documents (never a bare scalar)
pub fn container_document_strategy() -> impl Strategy<Value = Value> {
    prop::collection::vec((key_strategy(), document_strategy()), 0..6).prop_map(|entries| {
        let mut seen = std::collections::HashSet::new();
        Value::Object(
            entries
                .into_iter()
                .filter(|(key, _)| seen.insert(key.to_lowercase()))
                .collect(),
        )
    })
}
