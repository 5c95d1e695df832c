//! Declarative XML schemas.
//!
//! Each wire type carries an [`XmlSchema`]: its root element, its namespace,
//! and an ordered table of [`XmlField`]s binding element names to encode and
//! decode functions. Element names are written out in the table and never
//! derived from Rust field names.
//!
//! Documents pass through an owned [`XmlElement`] tree. Serialization turns
//! a value into a tree and writes it; deserialization reads a tree and walks
//! it against the schema.

use chrono::{DateTime, SecondsFormat, Timelike, Utc};
use tracing::debug;

use crate::error::XmlError;

/// An element in a parsed or to-be-written document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Element name, including any prefix.
    pub name: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    /// Unescaped text content. Empty for elements with children.
    pub text: String,
    /// Child elements in document order.
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create an element holding only text.
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First child with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children with the given name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text content as an owned string.
    #[must_use]
    pub fn text_owned(&self) -> String {
        self.text.clone()
    }

    /// Parse the text content as a boolean (`true`/`false`).
    pub fn parse_bool(&self) -> Result<bool, XmlError> {
        match self.text.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(XmlError::ParseError(format!(
                "invalid boolean in <{}>: {other}",
                self.name
            ))),
        }
    }

    /// Parse the text content as an i64.
    pub fn parse_i64(&self) -> Result<i64, XmlError> {
        let s = self.text.trim();
        s.parse::<i64>()
            .map_err(|e| XmlError::ParseError(format!("invalid i64 in <{}> '{s}': {e}", self.name)))
    }

    /// Parse the text content as an ISO 8601 timestamp.
    pub fn parse_timestamp(&self) -> Result<DateTime<Utc>, XmlError> {
        let s = self.text.trim();
        DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|_| {
                chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.fZ")
                    .map(|ndt| ndt.and_utc())
            })
            .map_err(|e| {
                XmlError::ParseError(format!("invalid timestamp in <{}> '{s}': {e}", self.name))
            })
    }
}

/// What a field contributes to its parent: text, or nested elements.
///
/// The schema wraps each value in an element named after the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlValue {
    /// `<Field>text</Field>`
    Text(String),
    /// `<Field><A/><B/></Field>`
    Nested(Vec<XmlElement>),
}

/// Produce the values of one field; empty to omit it, several to repeat it.
pub type EncodeFn<T> = fn(&T) -> Vec<XmlValue>;

/// Apply one occurrence of a field's element to the value being built.
pub type DecodeFn<T> = fn(&mut T, &XmlElement) -> Result<(), XmlError>;

/// Binding between one child element name and a part of `T`.
pub struct XmlField<T: 'static> {
    /// Element name on the wire.
    pub name: &'static str,
    /// Encoder.
    pub encode: EncodeFn<T>,
    /// Decoder, called once per occurrence.
    pub decode: DecodeFn<T>,
}

impl<T: 'static> std::fmt::Debug for XmlField<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XmlField").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Complete XML layout of a type.
pub struct XmlSchema<T: 'static> {
    /// Root element name.
    pub root: &'static str,
    /// Value of the root `xmlns` attribute, if the document has one.
    pub namespace: Option<&'static str>,
    /// Child elements, in output order.
    pub fields: &'static [XmlField<T>],
}

impl<T: 'static> std::fmt::Debug for XmlSchema<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XmlSchema")
            .field("root", &self.root)
            .field("namespace", &self.namespace)
            .field("fields", &self.fields)
            .finish()
    }
}

impl<T: 'static> XmlSchema<T> {
    /// Encode `value` as a root element, namespace included.
    pub fn to_element(&self, value: &T) -> XmlElement {
        let mut root = XmlElement::new(self.root);
        if let Some(ns) = self.namespace {
            root.attributes.push(("xmlns".to_owned(), ns.to_owned()));
        }
        root.children = self.to_children(value);
        root
    }

    /// Encode `value` as the children of an enclosing element.
    pub fn to_children(&self, value: &T) -> Vec<XmlElement> {
        let mut children = Vec::new();
        for field in self.fields {
            for item in (field.encode)(value) {
                children.push(match item {
                    XmlValue::Text(text) => XmlElement::leaf(field.name, text),
                    XmlValue::Nested(nested) => XmlElement {
                        name: field.name.to_owned(),
                        children: nested,
                        ..XmlElement::default()
                    },
                });
            }
        }
        children
    }

    /// Check that `element` is this schema's root in this schema's namespace.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::SchemaMismatch`] on a different root name or a
    /// missing, extra or different `xmlns`.
    pub fn check_root(&self, element: &XmlElement) -> Result<(), XmlError> {
        if element.name != self.root {
            debug!(expected = self.root, found = %element.name, "XML root mismatch");
            return Err(XmlError::SchemaMismatch {
                expected: format!("<{}>", self.root),
                found: format!("<{}>", element.name),
            });
        }
        let found = element.attribute("xmlns");
        if found != self.namespace {
            debug!(
                root = self.root,
                expected = ?self.namespace,
                found = ?found,
                "XML namespace mismatch"
            );
            return Err(XmlError::SchemaMismatch {
                expected: describe_namespace(self.namespace),
                found: describe_namespace(found),
            });
        }
        Ok(())
    }
}

impl<T: Default + 'static> XmlSchema<T> {
    /// Decode the children of `element` into a fresh `T`.
    ///
    /// Children with no matching field are skipped.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by a field decoder.
    pub fn from_element(&self, element: &XmlElement) -> Result<T, XmlError> {
        let mut value = T::default();
        for child in &element.children {
            match self.fields.iter().find(|f| f.name == child.name) {
                Some(field) => (field.decode)(&mut value, child)?,
                None => debug!(
                    parent = self.root,
                    element = %child.name,
                    "Skipping unknown XML element"
                ),
            }
        }
        Ok(value)
    }
}

fn describe_namespace(ns: Option<&str>) -> String {
    ns.map_or_else(|| "no namespace".to_owned(), |ns| format!("namespace {ns}"))
}

/// A type with a fixed XML layout.
pub trait XmlEntity: Default + Sized + 'static {
    /// The type's layout.
    const SCHEMA: XmlSchema<Self>;

    /// Check a freshly decoded value.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::Invariant`] when the value is inconsistent.
    fn validate(&self) -> Result<(), XmlError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

/// A single text value.
pub fn text(value: impl ToString) -> Vec<XmlValue> {
    vec![XmlValue::Text(value.to_string())]
}

/// A text value when present, nothing otherwise.
pub fn optional_text(value: Option<&str>) -> Vec<XmlValue> {
    value.map(|v| XmlValue::Text(v.to_owned())).into_iter().collect()
}

/// A boolean as `true`/`false`.
pub fn boolean(value: bool) -> Vec<XmlValue> {
    text(if value { "true" } else { "false" })
}

/// A timestamp with a `Z` suffix, e.g. `2006-02-03T16:45:09.000Z`.
///
/// At least milliseconds are written; finer fractions are kept so the value
/// decodes back unchanged.
pub fn timestamp(value: &DateTime<Utc>) -> Vec<XmlValue> {
    let precision = match value.nanosecond() % 1_000_000 {
        0 => SecondsFormat::Millis,
        n if n % 1_000 == 0 => SecondsFormat::Micros,
        _ => SecondsFormat::Nanos,
    };
    text(value.to_rfc3339_opts(precision, true))
}

/// One nested element per item, each encoded with `E`'s schema.
pub fn nested<'a, E: XmlEntity>(items: impl IntoIterator<Item = &'a E>) -> Vec<XmlValue> {
    items
        .into_iter()
        .map(|item| XmlValue::Nested(E::SCHEMA.to_children(item)))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Tag {
        key: String,
        values: Vec<i64>,
        flag: bool,
    }

    impl XmlEntity for Tag {
        const SCHEMA: XmlSchema<Self> = XmlSchema {
            root: "Tag",
            namespace: None,
            fields: &[
                XmlField {
                    name: "K",
                    encode: |v| text(&v.key),
                    decode: |v, el| {
                        v.key = el.text_owned();
                        Ok(())
                    },
                },
                XmlField {
                    name: "V",
                    encode: |v| v.values.iter().flat_map(text).collect(),
                    decode: |v, el| {
                        v.values.push(el.parse_i64()?);
                        Ok(())
                    },
                },
                XmlField {
                    name: "F",
                    encode: |v| boolean(v.flag),
                    decode: |v, el| {
                        v.flag = el.parse_bool()?;
                        Ok(())
                    },
                },
            ],
        };
    }

    fn sample() -> Tag {
        Tag {
            key: "k".to_owned(),
            values: vec![1, 2],
            flag: true,
        }
    }

    #[test]
    fn test_should_encode_fields_in_table_order() {
        let element = Tag::SCHEMA.to_element(&sample());
        let names: Vec<_> = element.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["K", "V", "V", "F"]);
        assert!(element.attributes.is_empty());
    }

    #[test]
    fn test_should_decode_repeated_fields_and_skip_unknown() {
        let mut element = Tag::SCHEMA.to_element(&sample());
        element.children.push(XmlElement::leaf("Unknown", "x"));
        assert_eq!(Tag::SCHEMA.from_element(&element).unwrap(), sample());
    }

    #[test]
    fn test_should_reject_wrong_root_or_namespace() {
        let wrong_root = XmlElement::new("Other");
        assert!(matches!(
            Tag::SCHEMA.check_root(&wrong_root),
            Err(XmlError::SchemaMismatch { .. })
        ));

        let mut namespaced = XmlElement::new("Tag");
        namespaced
            .attributes
            .push(("xmlns".to_owned(), "urn:other".to_owned()));
        assert!(matches!(
            Tag::SCHEMA.check_root(&namespaced),
            Err(XmlError::SchemaMismatch { .. })
        ));

        assert!(Tag::SCHEMA.check_root(&XmlElement::new("Tag")).is_ok());
    }

    #[test]
    fn test_should_report_bad_scalar_text() {
        let mut element = Tag::SCHEMA.to_element(&sample());
        element.children[1].text = "one".to_owned();
        assert!(matches!(
            Tag::SCHEMA.from_element(&element),
            Err(XmlError::ParseError(_))
        ));
    }

    #[test]
    fn test_should_parse_s3_and_rfc3339_timestamps() {
        let s3 = XmlElement::leaf("LastModified", "2006-02-03T16:45:09.000Z");
        let rfc = XmlElement::leaf("LastModified", "2006-02-03T16:45:09+00:00");
        assert_eq!(s3.parse_timestamp().unwrap(), rfc.parse_timestamp().unwrap());
        assert!(XmlElement::leaf("T", "yesterday").parse_timestamp().is_err());
    }

    #[test]
    fn test_should_keep_sub_millisecond_timestamps() {
        let whole = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let micros = Utc.timestamp_opt(1_700_000_000, 123_456_000).unwrap();
        let nanos = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();

        let render = |at: &DateTime<Utc>| match timestamp(at).pop() {
            Some(XmlValue::Text(s)) => s,
            other => panic!("expected text, got {other:?}"),
        };
        assert_eq!(render(&whole), "2023-11-14T22:13:20.000Z");
        assert_eq!(render(&micros), "2023-11-14T22:13:20.123456Z");
        assert_eq!(render(&nanos), "2023-11-14T22:13:20.123456789Z");

        for at in [whole, micros, nanos] {
            let decoded = XmlElement::leaf("LastModified", render(&at))
                .parse_timestamp()
                .unwrap();
            assert_eq!(decoded, at);
        }
    }
}
