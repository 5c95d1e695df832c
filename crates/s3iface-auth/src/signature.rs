//! Request signature computation and verification.
//!
//! The caller assembles the canonical string to sign (SigV2) or the SigV4
//! string to sign from the HTTP request; this module only turns those bytes
//! into signatures and compares them against what the client sent.
//!
//! - SigV2: `Base64(HMAC-SHA1(secret, string_to_sign))`
//! - SigV4: `Hex(HMAC-SHA256(signing_key, string_to_sign))`, where the signing
//!   key is derived from the secret, date, region and service.
//!
//! Comparisons run in constant time. An empty secret produces no signature,
//! so it can never verify.

use subtle::ConstantTimeEq;
use tracing::debug;

use crate::codec::{base64_to_bytes, bytes_to_base64, hex_to_bytes};
use crate::credentials::SecretStore;
use crate::error::AuthError;
use crate::hash::{hmac_sha1, hmac_sha256, md5, sha256};

/// The SigV4 algorithm identifier.
pub const SIGV4_ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Terminator of every SigV4 credential scope.
const SCOPE_TERMINATOR: &str = "aws4_request";

// ---------------------------------------------------------------------------
// SigV2
// ---------------------------------------------------------------------------

/// Compute a SigV2 signature.
///
/// Returns `None` if `secret_key` is empty.
///
/// # Examples
///
/// ```
/// use s3iface_auth::signature::sign_v2;
///
/// let sig = sign_v2(
///     "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
///     "GET\n\n\nTue, 27 Mar 2007 19:36:42 +0000\n/johnsmith/photos/puppy.jpg",
/// );
/// assert_eq!(sig.as_deref(), Some("bWq2s1WEIj+Ydj0vQ697zp+IXMU="));
/// ```
#[must_use]
pub fn sign_v2(secret_key: &str, string_to_sign: &str) -> Option<String> {
    let mac = hmac_sha1(Some(string_to_sign.as_bytes()), Some(secret_key.as_bytes()))?;
    bytes_to_base64(&mac)
}

/// Verify a SigV2 signature for `access_key_id`.
///
/// # Errors
///
/// Returns [`AuthError::AccessKeyNotFound`] if the store has no secret for the
/// key, or [`AuthError::SignatureDoesNotMatch`] if the signature is wrong.
pub fn verify_sigv2(
    store: &dyn SecretStore,
    access_key_id: &str,
    provided_signature: &str,
    string_to_sign: &str,
) -> Result<(), AuthError> {
    let secret_key = store.secret_key(access_key_id)?;

    debug!(access_key_id, "Verifying SigV2 signature");

    let expected = sign_v2(&secret_key, string_to_sign).ok_or(AuthError::SignatureDoesNotMatch)?;
    compare_signatures(access_key_id, &expected, provided_signature)
}

// ---------------------------------------------------------------------------
// SigV4
// ---------------------------------------------------------------------------

/// Build the SigV4 credential scope, e.g. `20130524/us-east-1/s3/aws4_request`.
#[must_use]
pub fn credential_scope(date: &str, region: &str, service: &str) -> String {
    format!("{date}/{region}/{service}/{SCOPE_TERMINATOR}")
}

/// Build the SigV4 string to sign from its three variable parts.
///
/// `canonical_request_hash` is the lowercase hex SHA-256 of the canonical
/// request.
#[must_use]
pub fn string_to_sign_v4(timestamp: &str, scope: &str, canonical_request_hash: &str) -> String {
    format!("{SIGV4_ALGORITHM}\n{timestamp}\n{scope}\n{canonical_request_hash}")
}

/// Derive the SigV4 signing key.
///
/// ```text
/// DateKey              = HMAC-SHA256("AWS4" + secret_key, date)
/// DateRegionKey        = HMAC-SHA256(DateKey, region)
/// DateRegionServiceKey = HMAC-SHA256(DateRegionKey, service)
/// SigningKey           = HMAC-SHA256(DateRegionServiceKey, "aws4_request")
/// ```
///
/// Returns `None` if `secret_key` is empty.
#[must_use]
pub fn derive_signing_key(
    secret_key: &str,
    date: &str,
    region: &str,
    service: &str,
) -> Option<Vec<u8>> {
    if secret_key.is_empty() {
        return None;
    }
    let seed = format!("AWS4{secret_key}");
    let date_key = hmac_sha256(Some(date.as_bytes()), Some(seed.as_bytes()))?;
    let date_region_key = hmac_sha256(Some(region.as_bytes()), Some(&date_key))?;
    let date_region_service_key = hmac_sha256(Some(service.as_bytes()), Some(&date_region_key))?;
    hmac_sha256(Some(SCOPE_TERMINATOR.as_bytes()), Some(&date_region_service_key))
}

/// Sign `string_to_sign` with a derived key, as lowercase hex.
#[must_use]
pub fn sign_v4(signing_key: &[u8], string_to_sign: &str) -> Option<String> {
    hmac_sha256(Some(string_to_sign.as_bytes()), Some(signing_key)).map(hex::encode)
}

/// Verify a SigV4 signature for `access_key_id` within the given scope.
///
/// # Errors
///
/// Returns [`AuthError::AccessKeyNotFound`] if the store has no secret for the
/// key, or [`AuthError::SignatureDoesNotMatch`] if the signature is wrong.
pub fn verify_sigv4(
    store: &dyn SecretStore,
    access_key_id: &str,
    provided_signature: &str,
    string_to_sign: &str,
    date: &str,
    region: &str,
    service: &str,
) -> Result<(), AuthError> {
    let secret_key = store.secret_key(access_key_id)?;

    debug!(access_key_id, date, region, service, "Verifying SigV4 signature");

    let expected = derive_signing_key(&secret_key, date, region, service)
        .and_then(|key| sign_v4(&key, string_to_sign))
        .ok_or(AuthError::SignatureDoesNotMatch)?;
    compare_signatures(access_key_id, &expected, provided_signature)
}

fn compare_signatures(
    access_key_id: &str,
    expected: &str,
    provided: &str,
) -> Result<(), AuthError> {
    if expected.as_bytes().ct_eq(provided.as_bytes()).into() {
        debug!(access_key_id, "Signature verification succeeded");
        Ok(())
    } else {
        debug!(access_key_id, expected, provided, "Signature mismatch");
        Err(AuthError::SignatureDoesNotMatch)
    }
}

// ---------------------------------------------------------------------------
// Payload integrity
// ---------------------------------------------------------------------------

/// Check a `Content-MD5` header value against the request body.
///
/// # Errors
///
/// Returns [`AuthError::InvalidDigest`] if the header is not base64 of a
/// 16-byte value, or [`AuthError::BadDigest`] if the body hashes differently.
pub fn verify_content_md5(content_md5: &str, body: &[u8]) -> Result<(), AuthError> {
    let provided = base64_to_bytes(content_md5.trim())?;
    if provided.len() != 16 {
        return Err(AuthError::BadDigest);
    }
    let actual = md5(Some(body)).unwrap_or_default();
    if bool::from(actual.ct_eq(&provided)) {
        Ok(())
    } else {
        debug!(content_md5, "Content-MD5 mismatch");
        Err(AuthError::BadDigest)
    }
}

/// Check an `x-amz-content-sha256` header value against the request body.
///
/// # Errors
///
/// Returns [`AuthError::InvalidDigest`] if the header is not hex, or
/// [`AuthError::BadDigest`] if the body hashes differently.
pub fn verify_content_sha256(content_sha256: &str, body: &[u8]) -> Result<(), AuthError> {
    let provided = hex_to_bytes(content_sha256.trim())?;
    let actual = sha256(Some(body)).unwrap_or_default();
    if bool::from(actual.ct_eq(&provided)) {
        Ok(())
    } else {
        debug!(content_sha256, "x-amz-content-sha256 mismatch");
        Err(AuthError::BadDigest)
    }
}
