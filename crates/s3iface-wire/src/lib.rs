//! Wire codecs for S3 response bodies.
//!
//! XML layouts are declared per type as schema tables (see
//! [`xml::schema`]), so element names and namespaces are explicit rather
//! than inferred from Rust field names. JSON goes through `serde_json`; absent
//! optional fields of the wire models are left out.
//!
//! # Modules
//!
//! - [`xml`] - schema-driven XML encode/decode
//! - [`json`] - JSON encode/decode and deep copy
//! - [`serializer`] - [`WireSerializer`], both codecs behind one configured value
//! - [`error`] - [`XmlError`] and [`JsonError`]

pub mod error;
pub mod json;
pub mod serializer;
pub mod xml;

pub use error::{JsonError, XmlError};
pub use serializer::{WireConfig, WireSerializer};
