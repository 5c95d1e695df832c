//! Shared utilities.
//!
//! Provides identifier generation, truthy-flag parsing, and small time and
//! string helpers.

use chrono::{DateTime, Utc};
use rand::RngExt;
use rand::distr::Alphanumeric;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ID generation
// ---------------------------------------------------------------------------

/// Generate a random string of `len` ASCII letters and digits.
///
/// Returns `None` when `len` is zero.
///
/// Output is not guaranteed to be unique across calls and must not be used
/// as a credential, session token, or any other secret. Use it for test
/// fixtures and non-security identifiers only.
///
/// # Examples
///
/// ```
/// use s3iface_core::utils::random_string;
///
/// let s = random_string(16).unwrap();
/// assert_eq!(s.len(), 16);
/// assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
/// assert!(random_string(0).is_none());
/// ```
#[must_use]
pub fn random_string(len: usize) -> Option<String> {
    if len == 0 {
        return None;
    }

    Some(
        rand::rng()
            .sample_iter(Alphanumeric)
            .take(len)
            .map(char::from)
            .collect(),
    )
}

/// Generate a request ID (UUID v4 without dashes).
///
/// # Examples
///
/// ```
/// use s3iface_core::utils::generate_request_id;
///
/// let id = generate_request_id();
/// assert_eq!(id.len(), 32);
/// assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn generate_request_id() -> String {
    Uuid::new_v4().simple().to_string()
}

// ---------------------------------------------------------------------------
// Flags
// ---------------------------------------------------------------------------

/// Interpret a flag value: `"true"` (any case) or the integer `1` are true.
///
/// Surrounding whitespace is ignored; everything else, including the empty
/// string, is false.
///
/// # Examples
///
/// ```
/// use s3iface_core::utils::is_true;
///
/// assert!(is_true(" TRUE "));
/// assert!(is_true("1"));
/// assert!(!is_true("yes"));
/// ```
#[must_use]
pub fn is_true(value: &str) -> bool {
    let value = value.trim();
    value.eq_ignore_ascii_case("true") || value.parse::<i64>().is_ok_and(|n| n == 1)
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// Return `true` if `at` is strictly in the future.
#[must_use]
pub fn is_later_than_now(at: DateTime<Utc>) -> bool {
    at > Utc::now()
}

/// Milliseconds elapsed since `start`, or `-1.0` if `start` is in the future.
#[must_use]
pub fn elapsed_ms(start: DateTime<Utc>) -> f64 {
    (Utc::now() - start)
        .to_std()
        .map_or(-1.0, |d| d.as_secs_f64() * 1000.0)
}

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

/// Remove the first occurrence of `remove` from `original`.
///
/// Returns `None` if `original` is empty. An empty `remove` leaves the input
/// unchanged.
///
/// # Examples
///
/// ```
/// use s3iface_core::utils::remove_first;
///
/// assert_eq!(remove_first("a-b-c", "-").as_deref(), Some("ab-c"));
/// assert_eq!(remove_first("", "-"), None);
/// ```
#[must_use]
pub fn remove_first(original: &str, remove: &str) -> Option<String> {
    if original.is_empty() {
        return None;
    }
    if remove.is_empty() {
        return Some(original.to_owned());
    }
    Some(original.replacen(remove, "", 1))
}

/// Replace the last occurrence of `find` in `src` with `replace`.
///
/// # Examples
///
/// ```
/// use s3iface_core::utils::replace_last;
///
/// assert_eq!(replace_last("a/b/c", "/", "::"), "a/b::c");
/// assert_eq!(replace_last("abc", "x", "y"), "abc");
/// ```
#[must_use]
pub fn replace_last(src: &str, find: &str, replace: &str) -> String {
    if find.is_empty() {
        return src.to_owned();
    }
    match src.rfind(find) {
        Some(idx) => {
            let mut out = String::with_capacity(src.len() + replace.len());
            out.push_str(&src[..idx]);
            out.push_str(replace);
            out.push_str(&src[idx + find.len()..]);
            out
        }
        None => src.to_owned(),
    }
}
