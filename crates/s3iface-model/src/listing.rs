//! The `ListBucketResult` listing page.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::S3_NAMESPACE;
use crate::error::ModelError;
use crate::types::Contents;

/// One page of an object listing.
///
/// A consistent value has `key_count == contents.len()`,
/// `key_count <= max_keys`, and `is_truncated` set exactly when
/// `next_continuation_token` is. [`ListBucketResult::from_page`] only builds
/// such values; [`ListBucketResult::validate`] checks one assembled by hand.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use s3iface_model::{Contents, ListBucketResult};
///
/// let page = vec![
///     Contents::new("a.txt", Utc::now(), "\"1\"", 1),
///     Contents::new("b.txt", Utc::now(), "\"2\"", 2),
/// ];
/// let listing = ListBucketResult::from_page("photos", 100, page, Vec::<String>::new(), None)?;
/// assert_eq!(listing.key_count, 2);
/// assert!(!listing.is_truncated);
/// # Ok::<(), s3iface_model::ModelError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBucketResult {
    /// Bucket name.
    pub name: String,
    /// Prefix the listing was filtered by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Marker the listing started after.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Number of entries in `contents`.
    pub key_count: i64,
    /// Page size bound requested by the client.
    pub max_keys: i64,
    /// Delimiter used to roll keys up into common prefixes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    /// Whether more results follow.
    pub is_truncated: bool,
    /// Token for the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_continuation_token: Option<String>,
    /// Entries on this page, in key order.
    #[serde(default)]
    pub contents: Vec<Contents>,
    /// Distinct prefixes rolled up by the delimiter.
    #[serde(default)]
    pub common_prefixes: BTreeSet<String>,
}

impl ListBucketResult {
    /// Build a listing from one page of results.
    ///
    /// `key_count` is taken from the page and `is_truncated` from whether a
    /// continuation token is given.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if `max_keys` is negative or the page holds
    /// more than `max_keys` entries.
    pub fn from_page(
        name: impl Into<String>,
        max_keys: i64,
        contents: Vec<Contents>,
        common_prefixes: impl IntoIterator<Item = String>,
        next_continuation_token: Option<String>,
    ) -> Result<Self, ModelError> {
        let listing = Self {
            name: name.into(),
            prefix: None,
            marker: None,
            key_count: i64::try_from(contents.len()).unwrap_or(i64::MAX),
            max_keys,
            delimiter: None,
            is_truncated: next_continuation_token.is_some(),
            next_continuation_token,
            contents,
            common_prefixes: common_prefixes.into_iter().collect(),
        };
        listing.validate()?;
        Ok(listing)
    }

    /// Set the prefix the listing was filtered by.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the marker the listing started after.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Set the delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// The XML namespace of the listing document.
    #[must_use]
    pub fn xmlns(&self) -> &'static str {
        S3_NAMESPACE
    }

    /// Check that the counters and truncation flag agree with the content.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.max_keys < 0 {
            return Err(ModelError::NegativeMaxKeys(self.max_keys));
        }
        if usize::try_from(self.key_count).ok() != Some(self.contents.len()) {
            return Err(ModelError::KeyCountMismatch {
                key_count: self.key_count,
                entries: self.contents.len(),
            });
        }
        if self.key_count > self.max_keys {
            return Err(ModelError::KeyCountExceedsMaxKeys {
                key_count: self.key_count,
                max_keys: self.max_keys,
            });
        }
        match (self.is_truncated, self.next_continuation_token.is_some()) {
            (true, false) => Err(ModelError::TruncatedWithoutToken),
            (false, true) => Err(ModelError::TokenWithoutTruncation),
            _ => Ok(()),
        }
    }
}
