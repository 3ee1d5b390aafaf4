//! Load a [`SearchPolicy`] from TOML.
//!
//! ```
//! use slide_search::heuristic::HeuristicKind;
//! use slide_search::policy::SearchPolicy;
//!
//! let policy = SearchPolicy::from_toml_str(r#"
//!     heuristic = "hamming"
//!     max_iterations = 100000
//! "#).unwrap();
//!
//! assert_eq!(policy.heuristic, HeuristicKind::Hamming);
//! assert_eq!(policy.max_iterations, Some(100_000));
//! ```

use std::path::Path;

use thiserror::Error;

use crate::policy::SearchPolicy;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl SearchPolicy {
    /// Loads a policy from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or the policy is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads a policy from a TOML file.
    ///
    /// # Errors
    ///
    /// Same as [`SearchPolicy::load`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a policy from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error on malformed TOML, unknown keys, or zero-valued bounds.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let policy: Self = toml::from_str(s)?;
        if policy.max_iterations == Some(0) {
            return Err(ConfigError::Invalid(
                "max_iterations must be at least 1".into(),
            ));
        }
        if policy.time_limit_ms == Some(0) {
            return Err(ConfigError::Invalid(
                "time_limit_ms must be at least 1".into(),
            ));
        }
        Ok(policy)
    }
}
