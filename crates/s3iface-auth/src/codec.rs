//! Hex, base64, text and CSV conversions.
//!
//! Encoders return `None` for empty input; decoders return a [`CodecError`]
//! for malformed input and an empty buffer for an empty string.

use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use regex::Regex;

use crate::error::CodecError;

static BASE64_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9+/]*={0,3}$").expect("base64 charset is a valid regex")
});

// ---------------------------------------------------------------------------
// Hex
// ---------------------------------------------------------------------------

/// Encode bytes as uppercase hex, two characters per byte.
///
/// # Examples
///
/// ```
/// use s3iface_auth::codec::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0x0a, 0xff]).as_deref(), Some("0AFF"));
/// assert!(bytes_to_hex(&[]).is_none());
/// ```
#[must_use]
pub fn bytes_to_hex(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    Some(hex::encode_upper(bytes))
}

/// Decode a hex string (either case) into bytes.
///
/// # Errors
///
/// Returns [`CodecError::InvalidHex`] if the string has odd length or
/// contains a non-hex character.
pub fn hex_to_bytes(hex_str: &str) -> Result<Vec<u8>, CodecError> {
    Ok(hex::decode(hex_str)?)
}

/// Re-encode a hex string as base64.
///
/// Returns `Ok(None)` for an empty string.
///
/// # Errors
///
/// Returns [`CodecError::InvalidHex`] if `hex_str` is not valid hex.
pub fn hex_to_base64(hex_str: &str) -> Result<Option<String>, CodecError> {
    let bytes = hex_to_bytes(hex_str)?;
    Ok(bytes_to_base64(&bytes))
}

// ---------------------------------------------------------------------------
// Base64
// ---------------------------------------------------------------------------

/// Encode bytes as padded standard base64.
#[must_use]
pub fn bytes_to_base64(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    Some(BASE64.encode(bytes))
}

/// Decode padded standard base64 into bytes.
///
/// # Errors
///
/// Returns [`CodecError::InvalidBase64`] for malformed input.
pub fn base64_to_bytes(encoded: &str) -> Result<Vec<u8>, CodecError> {
    Ok(BASE64.decode(encoded)?)
}

/// Encode the UTF-8 bytes of `text` as base64.
#[must_use]
pub fn string_to_base64(text: &str) -> Option<String> {
    bytes_to_base64(text.as_bytes())
}

/// Decode base64 into a UTF-8 string.
///
/// # Errors
///
/// Returns [`CodecError::InvalidBase64`] for malformed base64 and
/// [`CodecError::InvalidUtf8`] if the decoded bytes are not UTF-8.
pub fn base64_to_string(encoded: &str) -> Result<String, CodecError> {
    let bytes = base64_to_bytes(encoded)?;
    Ok(String::from_utf8(bytes)?)
}

/// Cheap syntactic check that `value` looks like padded base64.
///
/// The trimmed input must have a length that is a multiple of four and use
/// only the base64 alphabet followed by at most three `=`. Passing this check
/// does not guarantee that [`base64_to_bytes`] will succeed: use it as a
/// pre-filter only.
///
/// # Errors
///
/// Returns [`CodecError::EmptyInput`] if `value` is empty.
///
/// # Examples
///
/// ```
/// use s3iface_auth::codec::is_base64_string;
///
/// assert!(is_base64_string("aGVsbG8=").unwrap());
/// assert!(!is_base64_string("abc").unwrap());
/// assert!(is_base64_string("").is_err());
/// ```
pub fn is_base64_string(value: &str) -> Result<bool, CodecError> {
    if value.is_empty() {
        return Err(CodecError::EmptyInput);
    }
    let value = value.trim();
    Ok(value.len() % 4 == 0 && BASE64_CHARSET.is_match(value))
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// Split a comma-separated string into trimmed fields.
///
/// Empty fields are dropped. A field made only of whitespace survives as an
/// empty string. Returns `None` for an empty input.
///
/// # Examples
///
/// ```
/// use s3iface_auth::codec::csv_to_list;
///
/// assert_eq!(
///     csv_to_list(" a, b ,,c").unwrap(),
///     vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]
/// );
/// assert!(csv_to_list("").is_none());
/// ```
#[must_use]
pub fn csv_to_list(csv: &str) -> Option<Vec<String>> {
    if csv.is_empty() {
        return None;
    }
    Some(
        csv.split(',')
            .filter(|field| !field.is_empty())
            .map(|field| field.trim().to_owned())
            .collect(),
    )
}

/// Join fields with commas, without trimming or filtering.
///
/// Returns `None` for an empty list.
#[must_use]
pub fn list_to_csv<S: AsRef<str>>(fields: &[S]) -> Option<String> {
    if fields.is_empty() {
        return None;
    }
    let mut out = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(field.as_ref());
    }
    Some(out)
}
