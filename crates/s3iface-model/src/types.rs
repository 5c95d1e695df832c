//! Listing entries and error documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default storage class reported for listing entries.
pub const STANDARD_STORAGE_CLASS: &str = "STANDARD";

/// One object in a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contents {
    /// Object key.
    pub key: String,
    /// Last modification time.
    pub last_modified: DateTime<Utc>,
    /// Entity tag, quoted as S3 returns it.
    #[serde(rename = "ETag")]
    pub e_tag: String,
    /// Object size in bytes.
    pub size: i64,
    /// Storage class, e.g. `STANDARD`.
    pub storage_class: String,
    /// Object owner, when the listing was asked to include it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
}

impl Contents {
    /// Create an entry in the `STANDARD` storage class without owner.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use s3iface_model::Contents;
    ///
    /// let entry = Contents::new("a.txt", Utc::now(), "\"etag\"", 3);
    /// assert_eq!(entry.storage_class, "STANDARD");
    /// assert!(entry.owner.is_none());
    /// ```
    pub fn new(
        key: impl Into<String>,
        last_modified: DateTime<Utc>,
        e_tag: impl Into<String>,
        size: i64,
    ) -> Self {
        Self {
            key: key.into(),
            last_modified,
            e_tag: e_tag.into(),
            size,
            storage_class: STANDARD_STORAGE_CLASS.to_owned(),
            owner: None,
        }
    }

    /// Attach an owner.
    #[must_use]
    pub fn with_owner(mut self, owner: Owner) -> Self {
        self.owner = Some(owner);
        self
    }
}

/// Canonical owner of an object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Owner {
    /// Canonical user ID.
    #[serde(rename = "ID")]
    pub id: String,
    /// Display name.
    pub display_name: String,
}

impl Owner {
    /// Create an owner.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// An S3 `<Error>` document.
///
/// S3 does not wrap errors, so this is the whole body: a flat element with
/// no namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorResponse {
    /// Error code, e.g. `NoSuchBucket`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Bucket or object the error refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    /// Request ID for correlation.
    pub request_id: String,
}

impl ErrorResponse {
    /// Create an error response.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            resource: None,
            request_id: request_id.into(),
        }
    }

    /// Set the resource the error refers to.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }
}
