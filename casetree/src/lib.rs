//! casetree - Recursive key/value container
//!
//! Wraps nested mappings and sequences into a homogeneous tree of
//! [`RecursiveContainer`] nodes. It includes:
//!
//! - Keyed access (`get`, `set`, `push`, `exists`, `remove`)
//! - Case-insensitive lookup through a lower-cased key index
//! - Read-time value and key case transforms (`to_upper`, `to_lower`, `original`)
//! - Missing-key policy (error or empty sentinel)
//! - Path queries over string or pre-split paths
//! - Materialization back to plain [`serde_json::Value`]s
//! - Serializable configuration ([`ContainerOptions`])

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod container;
pub mod error;
pub mod key;
pub mod options;
pub mod path;
pub mod payload;
pub mod transform;

// Re-export commonly used types
pub use container::{Iter, RecursiveContainer};
pub use error::{ContainerError, Result};
pub use key::Key;
pub use options::ContainerOptions;
pub use path::{PathSpec, DEFAULT_SEPARATOR};
pub use payload::{Mapping, Payload};
pub use transform::{CaseTransform, ParseCaseTransformError};
