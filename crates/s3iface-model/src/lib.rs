//! S3 response models.
//!
//! Plain data types for the bodies an S3-compatible endpoint returns: object
//! listings and error documents. Wire encoding lives in `s3iface-wire`; the
//! serde derives here use the S3 element names so the JSON form mirrors the
//! XML one.

pub mod error;
pub mod listing;
pub mod types;

pub use error::ModelError;
pub use listing::ListBucketResult;
pub use types::{Contents, ErrorResponse, Owner};

/// The S3 XML namespace.
pub const S3_NAMESPACE: &str = "http://s3.amazonaws.com/doc/2006-03-01/";
