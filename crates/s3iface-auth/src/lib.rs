//! Authentication primitives for S3-compatible request handling.
//!
//! This crate provides the byte-level building blocks used to verify signed
//! S3 requests: message digests and HMACs, the hex/base64/CSV codecs used by
//! canonicalization, and SigV2/SigV4 signature checks over canonical bytes
//! assembled by the caller.
//!
//! # Error dialects
//!
//! Operations report failure in one of two ways, and which one is part of
//! each function's contract:
//!
//! - `Option::None` for an anticipated input state: an absent buffer to hash,
//!   an empty HMAC key, an empty list to join. These never authenticate
//!   anything and never panic.
//! - `Result::Err` for malformed input: bad hex or base64, a signature that
//!   does not match.
//!
//! # Modules
//!
//! - [`hash`] - MD5, SHA-1, SHA-256, HMAC-SHA1, HMAC-SHA256
//! - [`codec`] - hex, base64, UTF-8 text and CSV conversions
//! - [`credentials`] - Secret-key lookup trait and in-memory store
//! - [`signature`] - SigV2/SigV4 signing, verification and payload integrity checks
//! - [`error`] - [`CodecError`] and [`AuthError`]

pub mod codec;
pub mod credentials;
pub mod error;
pub mod hash;
pub mod signature;

pub use credentials::{SecretStore, StaticSecretStore};
pub use error::{AuthError, CodecError};
pub use signature::{verify_content_md5, verify_content_sha256, verify_sigv2, verify_sigv4};
