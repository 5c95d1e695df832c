//! XML deserialization: parsing S3 documents into [`XmlEntity`] values.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::UTF8_BOM;
use super::schema::{XmlElement, XmlEntity};
use crate::error::XmlError;

/// Parse an XML document into `T`.
///
/// Leading byte-order marks are ignored. The root element and its `xmlns`
/// must match `T`'s schema exactly; unknown child elements are skipped.
///
/// # Errors
///
/// Returns [`XmlError::EmptyInput`] for blank input,
/// [`XmlError::SchemaMismatch`] for a different root or namespace, a parse
/// error for malformed XML, or [`XmlError::Invariant`] when the decoded value
/// is inconsistent.
///
/// # Examples
///
/// ```
/// use s3iface_model::ErrorResponse;
/// use s3iface_wire::xml::from_xml;
///
/// let err: ErrorResponse =
///     from_xml("<Error><Code>NoSuchKey</Code><Message>gone</Message></Error>")?;
/// assert_eq!(err.code, "NoSuchKey");
/// # Ok::<(), s3iface_wire::XmlError>(())
/// ```
pub fn from_xml<T: XmlEntity>(xml: &str) -> Result<T, XmlError> {
    from_xml_bytes(xml.as_bytes())
}

/// Parse UTF-8 encoded XML bytes into `T`.
///
/// # Errors
///
/// As [`from_xml`].
pub fn from_xml_bytes<T: XmlEntity>(xml: &[u8]) -> Result<T, XmlError> {
    let xml = strip_leading_boms(xml);
    if xml.iter().all(u8::is_ascii_whitespace) {
        return Err(XmlError::EmptyInput);
    }

    let root = parse_document(xml)?;
    T::SCHEMA.check_root(&root)?;
    let value = T::SCHEMA.from_element(&root)?;
    value.validate()?;
    Ok(value)
}

fn strip_leading_boms(mut xml: &[u8]) -> &[u8] {
    while let Some(rest) = xml.strip_prefix(UTF8_BOM) {
        xml = rest;
    }
    xml
}

/// Read a whole document into an element tree, returning its root.
pub(crate) fn parse_document(xml: &[u8]) -> Result<XmlElement, XmlError> {
    let mut reader = Reader::from_reader(xml);
    let mut stack: Vec<XmlElement> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(open_element(&e)?),
            Event::Empty(e) => {
                let element = open_element(&e)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => return Ok(element),
                }
            }
            Event::End(_) => {
                let Some(mut element) = stack.pop() else {
                    return Err(XmlError::UnexpectedElement(
                        "end tag without matching start tag".to_owned(),
                    ));
                };
                // Text between child elements is layout only.
                if !element.children.is_empty() {
                    element.text.clear();
                }
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => return Ok(element),
                }
            }
            Event::Text(e) => {
                if let Some(current) = stack.last_mut() {
                    let decoded = e
                        .decode()
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    let unescaped = quick_xml::escape::unescape(&decoded)
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    current.text.push_str(&unescaped);
                }
            }
            Event::CData(e) => {
                if let Some(current) = stack.last_mut() {
                    let raw = std::str::from_utf8(&e)
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    current.text.push_str(raw);
                }
            }
            Event::GeneralRef(e) => {
                if let Some(current) = stack.last_mut() {
                    if let Some(ch) = e
                        .resolve_char_ref()
                        .map_err(|err| XmlError::ParseError(err.to_string()))?
                    {
                        current.text.push(ch);
                    } else {
                        let name = e
                            .decode()
                            .map_err(|err| XmlError::ParseError(err.to_string()))?;
                        let resolved = quick_xml::escape::resolve_predefined_entity(&name)
                            .ok_or_else(|| {
                                XmlError::ParseError(format!("unknown entity &{name};"))
                            })?;
                        current.text.push_str(resolved);
                    }
                }
            }
            Event::Eof => {
                return Err(match stack.last() {
                    Some(open) => XmlError::UnexpectedElement(format!(
                        "unexpected EOF inside <{}>",
                        open.name
                    )),
                    None => XmlError::MissingElement("root element".to_owned()),
                });
            }
            // Declaration, comments, processing instructions, doctype.
            _ => {}
        }
    }
}

fn open_element(start: &BytesStart<'_>) -> Result<XmlElement, XmlError> {
    let name = start.name();
    let name = std::str::from_utf8(name.as_ref()).map_err(|e| XmlError::ParseError(e.to_string()))?;
    let mut element = XmlElement::new(name);

    for attr in start.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| XmlError::ParseError(e.to_string()))?;
        let raw =
            std::str::from_utf8(&attr.value).map_err(|e| XmlError::ParseError(e.to_string()))?;
        let value = quick_xml::escape::unescape(raw)
            .map_err(|e| XmlError::ParseError(e.to_string()))?;
        element.attributes.push((key.to_owned(), value.into_owned()));
    }
    Ok(element)
}
