//! Comparison configuration

use crate::errors::ConfigError;
use deepeq_core_types::LineSeparator;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable selecting the report line separator
pub const ENV_LINE_SEPARATOR: &str = "DEEPEQ_LINE_SEPARATOR";
/// Environment variable bounding comparison depth
pub const ENV_MAX_DEPTH: &str = "DEEPEQ_MAX_DEPTH";

/// Settings for one comparator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Separator between rendered mismatch records
    pub line_separator: LineSeparator,
    /// Deepest path (in segments) a composite may sit at; `None` is unbounded
    pub max_depth: Option<usize>,
}

impl CompareConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_separator(mut self, separator: LineSeparator) -> Self {
        self.line_separator = separator;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// - `InvalidSeparator` if `DEEPEQ_LINE_SEPARATOR` is not `lf`, `crlf`
    ///   or `platform`
    /// - `InvalidMaxDepth` if `DEEPEQ_MAX_DEPTH` is not a positive integer
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Same as [`CompareConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_LINE_SEPARATOR) {
            config.line_separator = raw.parse().map_err(|source| ConfigError::InvalidSeparator {
                var: ENV_LINE_SEPARATOR.to_string(),
                source,
            })?;
        }

        if let Some(raw) = lookup(ENV_MAX_DEPTH) {
            let depth = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|depth| *depth > 0)
                .ok_or_else(|| ConfigError::InvalidMaxDepth {
                    var: ENV_MAX_DEPTH.to_string(),
                    value: raw.clone(),
                })?;
            config.max_depth = Some(depth);
        }

        Ok(config)
    }
}
