use crate::db::sort::DEFAULT_TIEBREAK_FIELD;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Page size used when a request sets neither `first` nor `last`.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound applied to `first` / `last`.
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to parse pagination config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid pagination config: {0}")]
    Invalid(String),
}

///
/// PaginationConfig
///
/// Engine-wide paging policy. Every field has a default, so an empty TOML
/// document is a valid configuration.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationConfig {
    pub default_page_size: u32,
    pub max_page_size: u32,
    pub tiebreak_field: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            tiebreak_field: DEFAULT_TIEBREAK_FIELD.to_string(),
        }
    }
}

impl PaginationConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_page_size == 0 {
            return Err(ConfigError::Invalid(
                "max_page_size must be greater than zero".to_string(),
            ));
        }
        if self.default_page_size > self.max_page_size {
            return Err(ConfigError::Invalid(format!(
                "default_page_size ({}) exceeds max_page_size ({})",
                self.default_page_size, self.max_page_size
            )));
        }
        if self.tiebreak_field.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "tiebreak_field must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolve a requested page size: default when absent, clamped to the max.
    #[must_use]
    pub fn page_size(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_page_size)
            .min(self.max_page_size)
    }
}

///
/// TESTS
///
