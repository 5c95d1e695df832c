//! Message digests and HMACs.
//!
//! Every function takes its buffers as `Option<&[u8]>` so that an absent
//! buffer is expressible, and answers it with `None` instead of a partial or
//! default hash. The HMAC functions additionally return `None` when the key
//! is absent or empty: a keyless MAC can never equal a real signature, so a
//! caller comparing results will always see a mismatch.
//!
//! Input bytes are hashed exactly as given. Callers are responsible for
//! producing the canonical bytes to be signed.

use digest::Digest;
use hmac::{Hmac, KeyInit, Mac};

type HmacSha1 = Hmac<sha1::Sha1>;
type HmacSha256 = Hmac<sha2::Sha256>;

/// Compute the 16-byte MD5 digest of `data`.
///
/// # Examples
///
/// ```
/// use s3iface_auth::hash::md5;
///
/// let digest = md5(Some(b"")).unwrap();
/// assert_eq!(hex::encode(digest), "d41d8cd98f00b204e9800998ecf8427e");
/// assert!(md5(None).is_none());
/// ```
#[must_use]
pub fn md5(data: Option<&[u8]>) -> Option<Vec<u8>> {
    data.map(|d| md5::Md5::digest(d).to_vec())
}

/// Compute the MD5 digest of the UTF-8 bytes of `text`.
///
/// Returns `None` for an empty string.
#[must_use]
pub fn md5_text(text: &str) -> Option<Vec<u8>> {
    if text.is_empty() {
        return None;
    }
    md5(Some(text.as_bytes()))
}

/// Compute the 20-byte SHA-1 digest of `data`.
#[must_use]
pub fn sha1(data: Option<&[u8]>) -> Option<Vec<u8>> {
    data.map(|d| sha1::Sha1::digest(d).to_vec())
}

/// Compute the 32-byte SHA-256 digest of `data`.
///
/// # Examples
///
/// ```
/// use s3iface_auth::hash::sha256;
///
/// let digest = sha256(Some(b"abc")).unwrap();
/// assert_eq!(
///     hex::encode(digest),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
#[must_use]
pub fn sha256(data: Option<&[u8]>) -> Option<Vec<u8>> {
    data.map(|d| sha2::Sha256::digest(d).to_vec())
}

/// Compute HMAC-SHA1 of `message` under `key`.
///
/// Returns `None` if the message is absent or the key is absent or empty.
#[must_use]
pub fn hmac_sha1(message: Option<&[u8]>, key: Option<&[u8]>) -> Option<Vec<u8>> {
    let message = message?;
    let key = key.filter(|k| !k.is_empty())?;
    let mut mac = HmacSha1::new_from_slice(key).ok()?;
    mac.update(message);
    Some(mac.finalize().into_bytes().to_vec())
}

/// Compute HMAC-SHA256 of `message` under `key`.
///
/// Returns `None` if the message is absent or the key is absent or empty.
///
/// # Examples
///
/// ```
/// use s3iface_auth::hash::hmac_sha256;
///
/// assert!(hmac_sha256(Some(b"msg"), Some(b"key")).is_some());
/// assert!(hmac_sha256(Some(b"msg"), Some(b"")).is_none());
/// assert!(hmac_sha256(None, Some(b"key")).is_none());
/// ```
#[must_use]
pub fn hmac_sha256(message: Option<&[u8]>, key: Option<&[u8]>) -> Option<Vec<u8>> {
    let message = message?;
    let key = key.filter(|k| !k.is_empty())?;
    let mut mac = HmacSha256::new_from_slice(key).ok()?;
    mac.update(message);
    Some(mac.finalize().into_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_of(bytes: Option<Vec<u8>>) -> String {
        hex::encode(bytes.expect("digest expected"))
    }

    #[test]
    fn test_should_match_md5_vectors() {
        assert_eq!(hex_of(md5(Some(b""))), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(hex_of(md5(Some(b"abc"))), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(
            hex_of(md5(Some(b"The quick brown fox jumps over the lazy dog"))),
            "9e107d9d372bb6826bd81d3542a419d6"
        );
    }

    #[test]
    fn test_should_match_sha1_vectors() {
        assert_eq!(hex_of(sha1(Some(b""))), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(hex_of(sha1(Some(b"abc"))), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_should_match_sha256_vectors() {
        assert_eq!(
            hex_of(sha256(Some(b""))),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            hex_of(sha256(Some(b"abc"))),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_should_return_none_for_absent_digest_input() {
        assert!(md5(None).is_none());
        assert!(sha1(None).is_none());
        assert!(sha256(None).is_none());
    }

    #[test]
    fn test_should_hash_text_as_utf8() {
        assert_eq!(md5_text("abc"), md5(Some(b"abc")));
        assert!(md5_text("").is_none());
    }

    #[test]
    fn test_should_match_hmac_sha1_rfc2202_vector() {
        let mac = hmac_sha1(Some(b"what do ya want for nothing?"), Some(b"Jefe"));
        assert_eq!(hex_of(mac), "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79");
    }

    #[test]
    fn test_should_match_hmac_sha256_rfc4231_vector() {
        let mac = hmac_sha256(Some(b"what do ya want for nothing?"), Some(b"Jefe"));
        assert_eq!(
            hex_of(mac),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_should_return_none_for_missing_or_empty_hmac_key() {
        assert!(hmac_sha1(Some(b"msg"), None).is_none());
        assert!(hmac_sha1(Some(b"msg"), Some(b"")).is_none());
        assert!(hmac_sha256(Some(b"msg"), None).is_none());
        assert!(hmac_sha256(Some(b"msg"), Some(b"")).is_none());
    }

    #[test]
    fn test_should_return_none_for_absent_hmac_message() {
        assert!(hmac_sha1(None, Some(b"key")).is_none());
        assert!(hmac_sha256(None, Some(b"key")).is_none());
    }

    #[test]
    fn test_should_never_match_real_mac_with_missing_key() {
        let real = hmac_sha256(Some(b"payload"), Some(b"secret"));
        let keyless = hmac_sha256(Some(b"payload"), Some(b""));
        assert_ne!(real, keyless);
    }

    #[test]
    fn test_should_accept_empty_hmac_message() {
        assert!(hmac_sha256(Some(b""), Some(b"key")).is_some());
    }
}
