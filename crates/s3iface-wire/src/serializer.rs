//! Configured front end over the JSON and XML codecs.

use s3iface_core::InterfaceConfig;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{JsonError, XmlError};
use crate::json;
use crate::xml::{self, XmlEntity};

/// Output formatting switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireConfig {
    /// Indent JSON output.
    pub pretty_json: bool,
    /// Start XML output with a declaration.
    pub xml_declaration: bool,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            pretty_json: false,
            xml_declaration: true,
        }
    }
}

impl From<&InterfaceConfig> for WireConfig {
    fn from(config: &InterfaceConfig) -> Self {
        Self {
            pretty_json: config.pretty_json,
            xml_declaration: config.xml_declaration,
        }
    }
}

/// Encodes and decodes wire bodies with a fixed [`WireConfig`].
///
/// # Examples
///
/// ```
/// use s3iface_core::InterfaceConfig;
/// use s3iface_model::ErrorResponse;
/// use s3iface_wire::WireSerializer;
///
/// let config = InterfaceConfig::builder().xml_declaration(false).build();
/// let wire = WireSerializer::new(&config);
///
/// let xml = wire.encode_xml(&ErrorResponse::new("SlowDown", "Reduce your request rate", "r1"))?;
/// assert!(xml.starts_with("<Error>"));
/// # Ok::<(), s3iface_wire::XmlError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WireSerializer {
    config: WireConfig,
}

impl WireSerializer {
    /// Create a serializer from the toolkit configuration.
    #[must_use]
    pub fn new(config: &InterfaceConfig) -> Self {
        Self::with_config(WireConfig::from(config))
    }

    /// Create a serializer with explicit settings.
    #[must_use]
    pub fn with_config(config: WireConfig) -> Self {
        Self { config }
    }

    /// The active settings.
    #[must_use]
    pub fn config(&self) -> WireConfig {
        self.config
    }

    /// Encode `value` as JSON.
    pub fn encode_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, JsonError> {
        json::to_json(value, self.config.pretty_json)
    }

    /// Decode JSON text.
    pub fn decode_json<T: DeserializeOwned>(&self, input: &str) -> Result<T, JsonError> {
        json::from_json(input)
    }

    /// Encode `value` as XML.
    pub fn encode_xml<T: XmlEntity>(&self, value: &T) -> Result<String, XmlError> {
        xml::to_xml_with(value, self.config.xml_declaration)
    }

    /// Decode XML text.
    pub fn decode_xml<T: XmlEntity>(&self, input: &str) -> Result<T, XmlError> {
        xml::from_xml(input)
    }

    /// Clone `value` through JSON; see [`json::deep_copy`].
    #[must_use]
    pub fn deep_copy<T>(&self, value: &T) -> T
    where
        T: Serialize + DeserializeOwned + Default,
    {
        json::deep_copy(value)
    }
}
