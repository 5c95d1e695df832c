//! Core building blocks for the S3 interface toolkit.
//!
//! This crate holds the pieces every other layer of the toolkit leans on:
//!
//! - [`validation`] - classifiers for object-key path segments and IP address
//!   literals, applied to untrusted request fields before they reach storage
//!   or logging
//! - [`config`] - [`InterfaceConfig`], loaded from environment variables
//! - [`logging`] - tracing subscriber initialization
//! - [`utils`] - identifier generation, flag parsing, and time/string helpers
//! - [`error`] - [`CoreError`] and [`ValidationError`]

pub mod config;
pub mod error;
pub mod logging;
pub mod utils;
pub mod validation;

pub use config::InterfaceConfig;
pub use error::{CoreError, CoreResult, ValidationError};
pub use validation::{
    is_ip_address, is_ipv4_address, is_ipv6_address, is_unsafe_key, is_unsafe_path,
    is_unsafe_segment,
};
