//! Container configuration

use crate::transform::CaseTransform;
use serde::{Deserialize, Serialize};

/// Lookup and presentation policy carried by every container node
///
/// Deserializable so a host configuration file can carry the policy:
///
/// ```
/// use casetree::{CaseTransform, ContainerOptions};
///
/// let options: ContainerOptions =
///     serde_json::from_str(r#"{"case_sensitive": false, "key_case": "lower"}"#)?;
/// assert!(!options.case_sensitive);
/// assert!(!options.ignore_missing);
/// assert_eq!(options.key_case, CaseTransform::Lower);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerOptions {
    /// Match keys exactly (default: true)
    pub case_sensitive: bool,
    /// Return the empty sentinel instead of failing on missing keys (default: false)
    pub ignore_missing: bool,
    /// Transform applied to string values on read (default: none)
    pub value_case: CaseTransform,
    /// Transform applied to mapping keys on read (default: none)
    pub key_case: CaseTransform,
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            ignore_missing: false,
            value_case: CaseTransform::None,
            key_case: CaseTransform::None,
        }
    }
}
