//! Field limits and tag normalization
//!
//! This module defines the bounds enforced on document input before anything
//! reaches the store. Violations result in `Validation` errors.
//!
//! ## Contract
//!
//! The default limits are part of the repository contract. Tag lists are
//! trimmed and stripped of empty entries, never deduplicated.

use thiserror::Error;

/// Maximum length of a document name, in characters
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length of a document description, in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Maximum length of a session id, in characters
pub const MAX_SESSION_ID_LENGTH: usize = 100;

/// Maximum number of tags on a document
pub const MAX_TAGS: usize = 20;

/// Largest page a query may request
pub const MAX_PAGE_SIZE: usize = 100;

/// Errors raised when input exceeds a limit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    /// A required string was empty after trimming
    #[error("{field} must not be empty")]
    Empty {
        /// Field name
        field: &'static str,
    },

    /// A string exceeded its maximum length
    #[error("{field} too long: {actual} chars (max {max})")]
    TooLong {
        /// Field name
        field: &'static str,
        /// Actual length in characters
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// Too many tags were supplied
    #[error("too many tags: {actual} (max {max})")]
    TooManyTags {
        /// Number of tags supplied
        actual: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Page size outside `1..=MAX_PAGE_SIZE`
    #[error("limit must be between 1 and {max}, got {actual}")]
    PageSize {
        /// Requested page size
        actual: usize,
        /// Maximum allowed
        max: usize,
    },
}

/// Field limits applied to document input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum name length (default: 200)
    pub max_name_length: usize,

    /// Maximum description length (default: 1000)
    pub max_description_length: usize,

    /// Maximum session id length (default: 100)
    pub max_session_id_length: usize,

    /// Maximum tag count (default: 20)
    pub max_tags: usize,

    /// Maximum page size (default: 100)
    pub max_page_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_name_length: MAX_NAME_LENGTH,
            max_description_length: MAX_DESCRIPTION_LENGTH,
            max_session_id_length: MAX_SESSION_ID_LENGTH,
            max_tags: MAX_TAGS,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

impl Limits {
    /// Trim a required string and check its length
    pub fn required(
        &self,
        field: &'static str,
        value: &str,
        max: usize,
    ) -> Result<String, LimitError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(LimitError::Empty { field });
        }
        Self::bounded(field, trimmed, max)?;
        Ok(trimmed.to_string())
    }

    /// Check a string's length without altering it
    pub fn bounded(field: &'static str, value: &str, max: usize) -> Result<(), LimitError> {
        let actual = value.chars().count();
        if actual > max {
            return Err(LimitError::TooLong { field, actual, max });
        }
        Ok(())
    }

    /// Check the caller-supplied tag count, then normalize
    pub fn tags(&self, tags: Vec<String>) -> Result<Vec<String>, LimitError> {
        if tags.len() > self.max_tags {
            return Err(LimitError::TooManyTags {
                actual: tags.len(),
                max: self.max_tags,
            });
        }
        Ok(normalize_tags(tags))
    }

    /// Check a requested page size
    pub fn page_size(&self, limit: usize) -> Result<usize, LimitError> {
        if limit == 0 || limit > self.max_page_size {
            return Err(LimitError::PageSize {
                actual: limit,
                max: self.max_page_size,
            });
        }
        Ok(limit)
    }
}

/// Trim every tag and drop the empty ones
///
/// Order and duplicates are preserved. Applying this twice yields the same
/// list as applying it once.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|tag| {
            let trimmed = tag.as_ref().trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect()
}
