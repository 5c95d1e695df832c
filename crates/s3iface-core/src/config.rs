//! Toolkit configuration.
//!
//! Provides [`InterfaceConfig`], which controls wire formatting defaults and
//! listing limits. Values are loaded from environment variables.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::{CoreError, CoreResult};
use crate::utils::is_true;

/// Upper bound S3 places on `max-keys` for a single listing page.
pub const DEFAULT_MAX_KEYS: i64 = 1000;

/// Toolkit configuration.
///
/// # Examples
///
/// ```
/// use s3iface_core::config::InterfaceConfig;
///
/// let config = InterfaceConfig::default();
/// assert_eq!(config.log_level, "info");
/// assert!(config.xml_declaration);
/// assert_eq!(config.effective_max_keys(Some(5000)), 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceConfig {
    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,

    /// Whether JSON bodies are indented.
    #[builder(default = false)]
    pub pretty_json: bool,

    /// Whether XML bodies start with `<?xml version="1.0" encoding="UTF-8"?>`.
    #[builder(default = true)]
    pub xml_declaration: bool,

    /// Largest page a listing may return, whatever the client asks for.
    #[builder(default = DEFAULT_MAX_KEYS)]
    pub max_keys: i64,
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            log_level: String::from("info"),
            pretty_json: false,
            xml_declaration: true,
            max_keys: DEFAULT_MAX_KEYS,
        }
    }
}

impl InterfaceConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `LOG_LEVEL` | `info` |
    /// | `S3IFACE_PRETTY_JSON` | `false` |
    /// | `S3IFACE_XML_DECLARATION` | `true` |
    /// | `S3IFACE_MAX_KEYS` | `1000` |
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`] if `S3IFACE_MAX_KEYS` is not a
    /// non-negative integer.
    pub fn from_env() -> CoreResult<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> CoreResult<Self> {
        let mut config = Self::default();

        if let Some(v) = var("LOG_LEVEL") {
            config.log_level = v;
        }
        if let Some(v) = var("S3IFACE_PRETTY_JSON") {
            config.pretty_json = is_true(&v);
        }
        if let Some(v) = var("S3IFACE_XML_DECLARATION") {
            config.xml_declaration = is_true(&v);
        }
        if let Some(v) = var("S3IFACE_MAX_KEYS") {
            config.max_keys = parse_max_keys(&v)?;
        }

        Ok(config)
    }

    /// Resolve the page size for a listing request.
    ///
    /// A missing or negative request falls back to the configured maximum;
    /// anything larger is clamped to it.
    #[must_use]
    pub fn effective_max_keys(&self, requested: Option<i64>) -> i64 {
        match requested {
            Some(n) if n >= 0 => n.min(self.max_keys),
            _ => self.max_keys,
        }
    }
}

fn parse_max_keys(value: &str) -> CoreResult<i64> {
    match value.trim().parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(CoreError::Config(format!(
            "S3IFACE_MAX_KEYS must be a non-negative integer, got '{value}'"
        ))),
    }
}
