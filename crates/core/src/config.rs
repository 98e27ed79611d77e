// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser configuration.
//!
//! Configuration can be given as a TOML document:
//!
//! ```toml
//! max_depth = 16
//! ```
//!
//! or taken from the environment, where `FEXPR_MAX_DEPTH` overrides the
//! default nesting limit.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable overriding [`ParserConfig::max_depth`].
pub const MAX_DEPTH_ENV: &str = "FEXPR_MAX_DEPTH";

const DEFAULT_MAX_DEPTH: usize = 64;

/// Limits applied while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParserConfig {
    /// Maximum number of nested parenthesized groups (default: 64).
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    /// Parses a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ParserConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults, with `max_depth` taken from `FEXPR_MAX_DEPTH` when it holds
    /// a positive integer.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(MAX_DEPTH_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let mut config = ParserConfig::default();
        let Some(value) = value else {
            return config;
        };
        match value.trim().parse::<usize>() {
            Ok(depth) if depth > 0 => config.max_depth = depth,
            _ => tracing::warn!(
                "ignoring {}={:?}: expected a positive integer",
                MAX_DEPTH_ENV,
                value
            ),
        }
        config
    }

    fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
