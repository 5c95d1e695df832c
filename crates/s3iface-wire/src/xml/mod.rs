//! XML codec driven by per-type schemas.

mod deserialize;
mod entities;
pub mod schema;
mod serialize;

pub use deserialize::{from_xml, from_xml_bytes};
pub use schema::{XmlElement, XmlEntity, XmlField, XmlSchema, XmlValue};
pub use serialize::{to_xml, to_xml_with};

/// UTF-8 byte-order mark.
pub(crate) const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
