//! Wire codec errors.

use std::io;

use s3iface_model::ModelError;

/// Errors that can occur during XML serialization or deserialization.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// The input was empty or held only a byte-order mark.
    #[error("XML input is empty")]
    EmptyInput,

    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// An error from quick-xml attribute handling.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// The serialized document is not valid UTF-8.
    #[error("XML output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The root element or its namespace is not what the target type expects.
    #[error("schema mismatch: expected {expected}, found {found}")]
    SchemaMismatch {
        /// What the schema requires.
        expected: String,
        /// What the document contains.
        found: String,
    },

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// An unexpected XML element was encountered.
    #[error("unexpected XML element: {0}")]
    UnexpectedElement(String),

    /// An error parsing a value from XML text content.
    #[error("failed to parse value: {0}")]
    ParseError(String),

    /// The decoded value breaks a model invariant.
    #[error("invalid document: {0}")]
    Invariant(#[from] ModelError),
}

/// Errors that can occur during JSON serialization or deserialization.
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    /// The input was empty or whitespace.
    #[error("JSON input is empty")]
    EmptyInput,

    /// The input bytes are not valid UTF-8.
    #[error("JSON input is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// serde_json rejected the value or the document.
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
}
