//! JSON encoding, decoding and deep copy.
//!
//! The wire models mark their `Option` fields `skip_serializing_if`, so an
//! absent field does not appear in the output at all. Map values and other
//! nulls are written as they are. Timestamps use chrono's RFC 3339 form,
//! which ends in `Z` for UTC.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::JsonError;

/// Serialize `value` to JSON, compact or indented.
///
/// # Errors
///
/// Returns [`JsonError::Serde`] if the value cannot be represented as JSON,
/// for example a map with non-string keys.
///
/// # Examples
///
/// ```
/// use s3iface_model::ErrorResponse;
/// use s3iface_wire::json::to_json;
///
/// let err = ErrorResponse::new("AccessDenied", "Access Denied", "r1");
/// let body = to_json(&err, false)?;
/// assert_eq!(
///     body,
///     r#"{"Code":"AccessDenied","Message":"Access Denied","RequestId":"r1"}"#
/// );
/// # Ok::<(), s3iface_wire::JsonError>(())
/// ```
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, JsonError> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

/// Parse JSON text into `T`.
///
/// # Errors
///
/// Returns [`JsonError::EmptyInput`] for blank input and
/// [`JsonError::Serde`] for malformed or mistyped JSON.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, JsonError> {
    if json.trim().is_empty() {
        return Err(JsonError::EmptyInput);
    }
    Ok(serde_json::from_str(json)?)
}

/// Parse UTF-8 encoded JSON bytes into `T`.
///
/// # Errors
///
/// As [`from_json`], plus [`JsonError::Utf8`] for bytes that are not UTF-8.
pub fn from_json_bytes<T: DeserializeOwned>(json: &[u8]) -> Result<T, JsonError> {
    if json.is_empty() {
        return Err(JsonError::EmptyInput);
    }
    from_json(std::str::from_utf8(json)?)
}

/// Clone `value` by encoding it to JSON and decoding the result.
///
/// The copy shares nothing with the original. Failure is not reported to
/// the caller: it is logged and `T::default()` is returned instead.
///
/// # Examples
///
/// ```
/// use s3iface_model::ListBucketResult;
/// use s3iface_wire::json::deep_copy;
///
/// let original = ListBucketResult { name: "photos".into(), ..Default::default() };
/// let mut copy = deep_copy(&original);
/// copy.common_prefixes.insert("x/".into());
/// assert!(original.common_prefixes.is_empty());
/// assert_eq!(copy.name, "photos");
/// ```
#[must_use]
pub fn deep_copy<T>(value: &T) -> T
where
    T: Serialize + DeserializeOwned + Default,
{
    match to_json(value, false).and_then(|json| from_json(&json)) {
        Ok(copy) => copy,
        Err(e) => {
            warn!(
                error = %e,
                target_type = std::any::type_name::<T>(),
                "Deep copy failed, returning default value"
            );
            T::default()
        }
    }
}
