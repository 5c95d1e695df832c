//! Validation of untrusted request fields.
//!
//! Two families of classifiers live here:
//!
//! - Object-key path segments ([`is_unsafe_segment`], [`is_unsafe_path`],
//!   [`is_unsafe_key`]). Object keys are attacker-controlled strings that end
//!   up mapped onto a filesystem or storage namespace, so segments that could
//!   traverse directories or collide with device names are rejected.
//! - IP address literals ([`is_ipv4_address`], [`is_ipv6_address`],
//!   [`is_ip_address`]) for values such as `X-Forwarded-For` entries.
//!
//! Path classifiers always return a verdict. Address classifiers treat an
//! empty input as a caller bug and return [`ValidationError::EmptyInput`]
//! rather than `false`.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::ValidationError;

/// Device names reserved by Windows filesystems (compared case-insensitively).
const RESERVED_DEVICE_NAMES: &[&str] = &[
    "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8", "com9", "lpt1", "lpt2",
    "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9", "con", "nul", "prn",
];

/// Printable ASCII characters that are still rejected inside a segment.
const UNSAFE_CHARACTERS: &[char] = &['/', '\\', '?', '<', '>', ':', '*', '|', '"', '\'', '^'];

/// Strict dotted-quad: four octets in `0..=255`, no leading zeros.
static IPV4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let octet = r"([0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])";
    Regex::new(&format!(r"^({octet}\.){{3}}{octet}$")).expect("IPv4 pattern is a valid regex")
});

/// One dotted-quad octet, 0 to 255.
const IPV4_OCTET: &str = r"(25[0-5]|(2[0-4]|1?[0-9])?[0-9])";

/// Full, compressed, link-local zone-scoped, and IPv4-embedded IPv6 forms.
static IPV6_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let embedded_ipv4 = format!(r"({IPV4_OCTET}\.){{3}}{IPV4_OCTET}");
    Regex::new(&format!(
        concat!(
            r"^(?:",
            r"([0-9a-fA-F]{{1,4}}:){{7}}[0-9a-fA-F]{{1,4}}",
            r"|([0-9a-fA-F]{{1,4}}:){{1,7}}:",
            r"|([0-9a-fA-F]{{1,4}}:){{1,6}}:[0-9a-fA-F]{{1,4}}",
            r"|([0-9a-fA-F]{{1,4}}:){{1,5}}(:[0-9a-fA-F]{{1,4}}){{1,2}}",
            r"|([0-9a-fA-F]{{1,4}}:){{1,4}}(:[0-9a-fA-F]{{1,4}}){{1,3}}",
            r"|([0-9a-fA-F]{{1,4}}:){{1,3}}(:[0-9a-fA-F]{{1,4}}){{1,4}}",
            r"|([0-9a-fA-F]{{1,4}}:){{1,2}}(:[0-9a-fA-F]{{1,4}}){{1,5}}",
            r"|[0-9a-fA-F]{{1,4}}:((:[0-9a-fA-F]{{1,4}}){{1,6}})",
            r"|:((:[0-9a-fA-F]{{1,4}}){{1,7}}|:)",
            r"|(?i:fe80):(:[0-9a-fA-F]{{0,4}}){{0,4}}%[0-9a-zA-Z]+",
            r"|::((?i:ffff)(:0{{1,4}})?:)?{ipv4}",
            r"|([0-9a-fA-F]{{1,4}}:){{1,4}}:{ipv4}",
            r")$",
        ),
        ipv4 = embedded_ipv4,
    ))
    .expect("IPv6 pattern is a valid regex")
});

// ---------------------------------------------------------------------------
// Path segments
// ---------------------------------------------------------------------------

/// Return `true` if a single path segment is unsafe to map onto a filesystem.
///
/// A segment is unsafe if any of the following holds:
///
/// 1. it is `.` or `..`
/// 2. it equals a reserved device name (`COM1`-`COM9`, `LPT1`-`LPT9`, `CON`,
///    `NUL`, `PRN`), ignoring ASCII case
/// 3. it contains a character outside printable ASCII (`0x20..=0x7E`)
/// 4. it contains any of `/ \ ? < > : * | " ' ^`
///
/// An empty segment is not unsafe on its own; callers that require a
/// non-empty key check that separately (see [`is_unsafe_key`]).
///
/// # Examples
///
/// ```
/// use s3iface_core::validation::is_unsafe_segment;
///
/// assert!(is_unsafe_segment(".."));
/// assert!(is_unsafe_segment("com1"));
/// assert!(is_unsafe_segment("a/b"));
/// assert!(!is_unsafe_segment("report.csv"));
/// ```
#[must_use]
pub fn is_unsafe_segment(segment: &str) -> bool {
    if segment.is_empty() {
        return false;
    }

    if segment == "." || segment == ".." {
        return true;
    }

    if RESERVED_DEVICE_NAMES
        .iter()
        .any(|name| segment.eq_ignore_ascii_case(name))
    {
        return true;
    }

    segment
        .chars()
        .any(|c| !(' '..='~').contains(&c) || UNSAFE_CHARACTERS.contains(&c))
}

/// Return `true` if the list is empty or any segment in it is unsafe.
///
/// The empty case fails closed: a path with no segments never names a safe
/// location.
///
/// # Examples
///
/// ```
/// use s3iface_core::validation::is_unsafe_path;
///
/// assert!(!is_unsafe_path(&["photos", "2024", "img.jpg"]));
/// assert!(is_unsafe_path(&["photos", "..", "etc"]));
/// assert!(is_unsafe_path::<&str>(&[]));
/// ```
#[must_use]
pub fn is_unsafe_path<S: AsRef<str>>(segments: &[S]) -> bool {
    if segments.is_empty() {
        return true;
    }

    for segment in segments {
        let segment: &str = segment.as_ref();
        if is_unsafe_segment(segment) {
            debug!(segment = %segment.escape_debug(), "rejected unsafe path segment");
            return true;
        }
    }

    false
}

/// Return `true` if a `/`-delimited object key is empty or has an unsafe segment.
///
/// Empty segments (from `a//b` or a trailing `/` folder marker) are allowed.
///
/// # Examples
///
/// ```
/// use s3iface_core::validation::is_unsafe_key;
///
/// assert!(!is_unsafe_key("photos/2024/img.jpg"));
/// assert!(!is_unsafe_key("photos/"));
/// assert!(is_unsafe_key("photos/../../etc/passwd"));
/// assert!(is_unsafe_key(""));
/// ```
#[must_use]
pub fn is_unsafe_key(key: &str) -> bool {
    if key.is_empty() {
        return true;
    }
    let segments: Vec<&str> = key.split('/').collect();
    is_unsafe_path(&segments)
}

// ---------------------------------------------------------------------------
// IP address literals
// ---------------------------------------------------------------------------

/// Classify a string as an IPv4 literal.
///
/// Matches a strict dotted-quad pattern first and falls back to the standard
/// library parser.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyInput`] if `value` is empty.
///
/// # Examples
///
/// ```
/// use s3iface_core::validation::is_ipv4_address;
///
/// assert_eq!(is_ipv4_address("192.168.1.1"), Ok(true));
/// assert_eq!(is_ipv4_address("256.1.1.1"), Ok(false));
/// assert!(is_ipv4_address("").is_err());
/// ```
pub fn is_ipv4_address(value: &str) -> Result<bool, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyInput("ipv4 address"));
    }

    if IPV4_PATTERN.is_match(value) {
        return Ok(true);
    }

    Ok(value.parse::<Ipv4Addr>().is_ok())
}

/// Classify a string as an IPv6 literal.
///
/// Accepts full, `::`-compressed, zone-scoped (`fe80::1%eth0`) and
/// IPv4-embedded forms via pattern matching, falling back to the standard
/// library parser on the part before any `%zone` suffix.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyInput`] if `value` is empty.
///
/// # Examples
///
/// ```
/// use s3iface_core::validation::is_ipv6_address;
///
/// assert_eq!(is_ipv6_address("::1"), Ok(true));
/// assert_eq!(is_ipv6_address("fe80::1%eth0"), Ok(true));
/// assert_eq!(is_ipv6_address("not-an-ip"), Ok(false));
/// ```
pub fn is_ipv6_address(value: &str) -> Result<bool, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyInput("ipv6 address"));
    }

    if IPV6_PATTERN.is_match(value) {
        return Ok(true);
    }

    // The std parser knows no scope IDs; check the address part alone.
    let address = match value.split_once('%') {
        Some((address, zone)) if is_valid_zone(zone) => address,
        Some(_) => return Ok(false),
        None => value,
    };
    Ok(address.parse::<Ipv6Addr>().is_ok())
}

fn is_valid_zone(zone: &str) -> bool {
    !zone.is_empty()
        && zone
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
}

/// Classify a string as either an IPv4 or an IPv6 literal.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyInput`] if `value` is empty.
pub fn is_ip_address(value: &str) -> Result<bool, ValidationError> {
    Ok(is_ipv4_address(value)? || is_ipv6_address(value)?)
}
