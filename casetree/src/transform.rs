//! Read-time case transforms
//!
//! Transforms never touch stored data. They are applied to materialized
//! [`Value`]s when a container is read, so the same tree can be viewed
//! upper-cased, lower-cased or as originally written.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Case policy applied to string values or to mapping keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseTransform {
    /// Leave text as stored
    #[default]
    None,
    /// Lower-case text
    Lower,
    /// Upper-case text
    Upper,
}

impl CaseTransform {
    /// Apply this transform to a single piece of text
    pub fn apply(self, text: &str) -> String {
        match self {
            CaseTransform::None => text.to_string(),
            CaseTransform::Lower => text.to_lowercase(),
            CaseTransform::Upper => text.to_uppercase(),
        }
    }

    /// Whether this transform leaves everything untouched
    pub fn is_none(self) -> bool {
        self == CaseTransform::None
    }

    /// Transform every string scalar reachable from `value`
    ///
    /// Arrays and objects are walked recursively; keys are left alone.
    pub fn transform_values(self, value: Value) -> Value {
        if self.is_none() {
            return value;
        }
        match value {
            Value::String(text) => Value::String(self.apply(&text)),
            Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(|item| self.transform_values(item))
                    .collect(),
            ),
            Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, item)| (key, self.transform_values(item)))
                    .collect(),
            ),
            other => other,
        }
    }

    /// Re-key every object reachable from `value`
    ///
    /// When two keys fold to the same spelling, the later entry's value wins
    /// and keeps the earlier entry's position.
    pub fn transform_keys(self, value: Value) -> Value {
        if self.is_none() {
            return value;
        }
        match value {
            Value::Object(map) => {
                let mut rekeyed = Map::with_capacity(map.len());
                for (key, item) in map {
                    rekeyed.insert(self.apply(&key), self.transform_keys(item));
                }
                Value::Object(rekeyed)
            }
            Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(|item| self.transform_keys(item))
                    .collect(),
            ),
            other => other,
        }
    }
}

impl fmt::Display for CaseTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CaseTransform::None => "none",
            CaseTransform::Lower => "lower",
            CaseTransform::Upper => "upper",
        })
    }
}

/// Error returned when parsing an unknown transform name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown case transform '{0}'. Expected one of: none, lower, upper")]
pub struct ParseCaseTransformError(
    /// The unrecognized input
    pub String,
);

impl FromStr for CaseTransform {
    type Err = ParseCaseTransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(CaseTransform::None),
            "lower" => Ok(CaseTransform::Lower),
            "upper" => Ok(CaseTransform::Upper),
            _ => Err(ParseCaseTransformError(s.to_string())),
        }
    }
}
