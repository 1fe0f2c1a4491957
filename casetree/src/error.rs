//! Error types for container lookups

use thiserror::Error;

/// Maximum number of sibling keys listed in a lookup error message
pub const MAX_LISTED_KEYS: usize = 10;

/// Container error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// Requested key is absent and missing keys are not being ignored
    #[error(
        "Identifier \"{key}\" is not defined.\n\
         \n\
         Reached: '{reached_path}'\n\
         Available keys at this level: {available_keys}"
    )]
    KeyNotFound {
        /// The key that was looked up, as given by the caller
        key: String,
        /// Path segments successfully resolved before the failure
        reached_path: String,
        /// Comma-separated list of keys available at the failure point
        available_keys: String,
    },

    /// Appending needs an index past the largest representable one
    #[error("Cannot append: index {last} is already taken and no later index exists")]
    IndexExhausted {
        /// The occupied largest index
        last: usize,
    },
}

impl ContainerError {
    /// Render sibling keys for an error message, capped at [`MAX_LISTED_KEYS`]
    pub(crate) fn describe_keys<I, S>(keys: I, total: usize) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let listed: Vec<String> = keys
            .into_iter()
            .take(MAX_LISTED_KEYS)
            .map(|k| k.as_ref().to_string())
            .collect();

        if listed.is_empty() {
            "<empty>".to_string()
        } else if total > MAX_LISTED_KEYS {
            format!("{}, ... ({} total)", listed.join(", "), total)
        } else {
            listed.join(", ")
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ContainerError>;
