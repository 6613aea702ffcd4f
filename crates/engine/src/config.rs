//! Repository configuration via `docstore.toml`
//!
//! A plain config file next to the data it governs. On first use a default
//! `docstore.toml` can be written; to change settings, edit the file and
//! rebuild the repository.

use docstore_core::{Error, Result, DEFAULT_ACTOR, MAX_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "docstore.toml";

/// Repository configuration loaded from `docstore.toml`.
///
/// # Example
///
/// ```toml
/// default_actor = "system"
/// default_page_size = 20
/// session_page_size = 50
/// search_limit = 20
/// validate_schemas = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Actor recorded when a caller does not name one
    #[serde(default = "default_actor")]
    pub default_actor: String,
    /// Page size for `list` when the query leaves it unset
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    /// Page size for session listings
    #[serde(default = "default_session_page_size")]
    pub session_page_size: usize,
    /// Result cap for content search
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
    /// Enforce attached schemas at creation time
    #[serde(default = "default_validate_schemas")]
    pub validate_schemas: bool,
}

fn default_actor() -> String {
    DEFAULT_ACTOR.to_string()
}

fn default_page_size() -> usize {
    20
}

fn default_session_page_size() -> usize {
    50
}

fn default_search_limit() -> usize {
    20
}

fn default_validate_schemas() -> bool {
    true
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            default_actor: default_actor(),
            default_page_size: default_page_size(),
            session_page_size: default_session_page_size(),
            search_limit: default_search_limit(),
            validate_schemas: default_validate_schemas(),
        }
    }
}

impl RepositoryConfig {
    /// Check every value is usable
    ///
    /// # Errors
    ///
    /// Returns a validation error if a page size is outside `1..=100` or the
    /// default actor is blank.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("default_page_size", self.default_page_size),
            ("session_page_size", self.session_page_size),
            ("search_limit", self.search_limit),
        ] {
            if value == 0 || value > MAX_PAGE_SIZE {
                return Err(Error::validation(format!(
                    "{} must be between 1 and {}, got {}",
                    name, MAX_PAGE_SIZE, value
                )));
            }
        }
        if self.default_actor.trim().is_empty() {
            return Err(Error::validation("default_actor must not be empty"));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Docstore repository configuration
#
# Actor recorded in created_by / updated_by when the caller names none.
default_actor = "system"

# Page size used by list queries that do not set one (1-100).
default_page_size = 20

# Page size used by session document listings (1-100).
session_page_size = 50

# Maximum results returned by content search (1-100).
search_limit = 20

# Reject creation when content fails its attached JSON Schema.
validate_schemas = true
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::internal(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: RepositoryConfig = toml::from_str(&content).map_err(|e| {
            Error::validation(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::internal(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::internal(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::internal(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
