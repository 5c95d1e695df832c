//! Schemas of the S3 response models.

use s3iface_model::{Contents, ErrorResponse, ListBucketResult, Owner, S3_NAMESPACE};

use super::schema::{
    XmlElement, XmlEntity, XmlField, XmlSchema, XmlValue, boolean, nested, optional_text, text,
    timestamp,
};
use crate::error::XmlError;

impl XmlEntity for ListBucketResult {
    const SCHEMA: XmlSchema<Self> = XmlSchema {
        root: "ListBucketResult",
        namespace: Some(S3_NAMESPACE),
        fields: &[
            XmlField {
                name: "Name",
                encode: |v| text(&v.name),
                decode: |v, el| {
                    v.name = el.text_owned();
                    Ok(())
                },
            },
            XmlField {
                name: "Prefix",
                encode: |v| optional_text(v.prefix.as_deref()),
                decode: |v, el| {
                    v.prefix = Some(el.text_owned());
                    Ok(())
                },
            },
            XmlField {
                name: "Marker",
                encode: |v| optional_text(v.marker.as_deref()),
                decode: |v, el| {
                    v.marker = Some(el.text_owned());
                    Ok(())
                },
            },
            XmlField {
                name: "KeyCount",
                encode: |v| text(v.key_count),
                decode: |v, el| {
                    v.key_count = el.parse_i64()?;
                    Ok(())
                },
            },
            XmlField {
                name: "MaxKeys",
                encode: |v| text(v.max_keys),
                decode: |v, el| {
                    v.max_keys = el.parse_i64()?;
                    Ok(())
                },
            },
            XmlField {
                name: "Delimiter",
                encode: |v| optional_text(v.delimiter.as_deref()),
                decode: |v, el| {
                    v.delimiter = Some(el.text_owned());
                    Ok(())
                },
            },
            XmlField {
                name: "IsTruncated",
                encode: |v| boolean(v.is_truncated),
                decode: |v, el| {
                    v.is_truncated = el.parse_bool()?;
                    Ok(())
                },
            },
            XmlField {
                name: "NextContinuationToken",
                encode: |v| optional_text(v.next_continuation_token.as_deref()),
                decode: |v, el| {
                    v.next_continuation_token = Some(el.text_owned());
                    Ok(())
                },
            },
            XmlField {
                name: "Contents",
                encode: |v| nested(&v.contents),
                decode: |v, el| {
                    v.contents.push(Contents::SCHEMA.from_element(el)?);
                    Ok(())
                },
            },
            XmlField {
                name: "CommonPrefixes",
                encode: |v| {
                    v.common_prefixes
                        .iter()
                        .map(|p| XmlValue::Nested(vec![XmlElement::leaf("Prefix", p.as_str())]))
                        .collect()
                },
                // One wrapper per prefix is standard, but several <Prefix>
                // children under a single wrapper are accepted too.
                decode: |v, el| {
                    v.common_prefixes
                        .extend(el.children_named("Prefix").map(XmlElement::text_owned));
                    Ok(())
                },
            },
        ],
    };

    fn validate(&self) -> Result<(), XmlError> {
        Ok(ListBucketResult::validate(self)?)
    }
}

impl XmlEntity for Contents {
    const SCHEMA: XmlSchema<Self> = XmlSchema {
        root: "Contents",
        namespace: None,
        fields: &[
            XmlField {
                name: "Key",
                encode: |v| text(&v.key),
                decode: |v, el| {
                    v.key = el.text_owned();
                    Ok(())
                },
            },
            XmlField {
                name: "LastModified",
                encode: |v| timestamp(&v.last_modified),
                decode: |v, el| {
                    v.last_modified = el.parse_timestamp()?;
                    Ok(())
                },
            },
            XmlField {
                name: "ETag",
                encode: |v| text(&v.e_tag),
                decode: |v, el| {
                    v.e_tag = el.text_owned();
                    Ok(())
                },
            },
            XmlField {
                name: "Size",
                encode: |v| text(v.size),
                decode: |v, el| {
                    v.size = el.parse_i64()?;
                    Ok(())
                },
            },
            XmlField {
                name: "StorageClass",
                encode: |v| text(&v.storage_class),
                decode: |v, el| {
                    v.storage_class = el.text_owned();
                    Ok(())
                },
            },
            XmlField {
                name: "Owner",
                encode: |v| nested(&v.owner),
                decode: |v, el| {
                    v.owner = Some(Owner::SCHEMA.from_element(el)?);
                    Ok(())
                },
            },
        ],
    };
}

impl XmlEntity for Owner {
    const SCHEMA: XmlSchema<Self> = XmlSchema {
        root: "Owner",
        namespace: None,
        fields: &[
            XmlField {
                name: "ID",
                encode: |v| text(&v.id),
                decode: |v, el| {
                    v.id = el.text_owned();
                    Ok(())
                },
            },
            XmlField {
                name: "DisplayName",
                encode: |v| text(&v.display_name),
                decode: |v, el| {
                    v.display_name = el.text_owned();
                    Ok(())
                },
            },
        ],
    };
}

impl XmlEntity for ErrorResponse {
    const SCHEMA: XmlSchema<Self> = XmlSchema {
        root: "Error",
        namespace: None,
        fields: &[
            XmlField {
                name: "Code",
                encode: |v| text(&v.code),
                decode: |v, el| {
                    v.code = el.text_owned();
                    Ok(())
                },
            },
            XmlField {
                name: "Message",
                encode: |v| text(&v.message),
                decode: |v, el| {
                    v.message = el.text_owned();
                    Ok(())
                },
            },
            XmlField {
                name: "Resource",
                encode: |v| optional_text(v.resource.as_deref()),
                decode: |v, el| {
                    v.resource = Some(el.text_owned());
                    Ok(())
                },
            },
            XmlField {
                name: "RequestId",
                encode: |v| text(&v.request_id),
                decode: |v, el| {
                    v.request_id = el.text_owned();
                    Ok(())
                },
            },
        ],
    };
}
