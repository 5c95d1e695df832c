//! Error types for codecs and signature verification.

/// Errors produced when decoding textual encodings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodecError {
    /// The input was empty where the operation requires content.
    #[error("input must not be empty")]
    EmptyInput,

    /// The input is not an even-length string of hex digits.
    #[error("invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The input is not valid padded standard base64.
    #[error("invalid base64 string: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// The decoded bytes are not valid UTF-8.
    #[error("decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Errors that can occur while verifying a signed request.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The access key ID was not found in the secret store.
    #[error("Access key not found: {0}")]
    AccessKeyNotFound(String),

    /// The computed signature does not match the provided signature.
    #[error("Signature does not match")]
    SignatureDoesNotMatch,

    /// A provided digest header could not be decoded.
    #[error("Invalid digest: {0}")]
    InvalidDigest(#[from] CodecError),

    /// The payload does not hash to the provided digest.
    #[error("Bad digest: the payload does not match the provided digest")]
    BadDigest,
}
