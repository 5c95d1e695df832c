//! XML serialization: rendering an [`XmlEntity`] as an S3 document.
//!
//! - Booleans: lowercase `true`/`false`
//! - Timestamps: ISO 8601 with at least milliseconds (`2006-02-03T16:45:09.000Z`)
//! - Optional declaration: `<?xml version="1.0" encoding="UTF-8"?>`
//! - No byte-order mark

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};

use super::UTF8_BOM;
use super::schema::{XmlElement, XmlEntity};
use crate::error::XmlError;

/// Serialize `value` with an XML declaration.
///
/// # Errors
///
/// Returns [`XmlError`] if writing fails.
///
/// # Examples
///
/// ```
/// use s3iface_model::ErrorResponse;
/// use s3iface_wire::xml::to_xml;
///
/// let xml = to_xml(&ErrorResponse::new("NoSuchKey", "gone", "r1"))?;
/// assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?><Error>"#));
/// assert!(xml.contains("<Code>NoSuchKey</Code>"));
/// # Ok::<(), s3iface_wire::XmlError>(())
/// ```
pub fn to_xml<T: XmlEntity>(value: &T) -> Result<String, XmlError> {
    to_xml_with(value, true)
}

/// Serialize `value`, writing the XML declaration only if `declaration` is set.
///
/// # Errors
///
/// Returns [`XmlError`] if writing fails.
pub fn to_xml_with<T: XmlEntity>(value: &T, declaration: bool) -> Result<String, XmlError> {
    let root = T::SCHEMA.to_element(value);

    let mut buf = Vec::with_capacity(512);
    let mut writer = Writer::new(&mut buf);
    if declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }
    write_element(&mut writer, &root)?;

    if buf.starts_with(UTF8_BOM) {
        buf.drain(..UTF8_BOM.len());
    }
    Ok(String::from_utf8(buf)?)
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &XmlElement) -> io::Result<()> {
    let mut start = writer.create_element(element.name.as_str());
    for (key, value) in &element.attributes {
        start = start.with_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        start.write_text_content(BytesText::new(&element.text))?;
    } else {
        start.write_inner_content(|w| {
            for child in &element.children {
                write_element(w, child)?;
            }
            Ok(())
        })?;
    }
    Ok(())
}
