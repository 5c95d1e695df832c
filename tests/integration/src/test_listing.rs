//! Listing pages rendered through the configured wire serializer.

#[cfg(test)]
mod tests {
    use s3iface_core::InterfaceConfig;
    use s3iface_model::{ListBucketResult, S3_NAMESPACE};
    use s3iface_wire::{WireSerializer, XmlError};

    use crate::{entry_for, init_tracing};

    fn two_entry_listing(config: &InterfaceConfig) -> ListBucketResult {
        let max_keys = config.effective_max_keys(Some(100));
        ListBucketResult::from_page(
            "test-bucket",
            max_keys,
            vec![entry_for("a.txt", b"alpha"), entry_for("b.txt", b"bravo")],
            Vec::new(),
            None,
        )
        .expect("page fits")
    }

    #[test]
    fn test_should_render_two_entry_listing() {
        init_tracing();
        let config = InterfaceConfig::default();
        let wire = WireSerializer::new(&config);

        let xml = wire.encode_xml(&two_entry_listing(&config)).unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<ListBucketResult xmlns="{S3_NAMESPACE}">"#)));
        assert_eq!(xml.matches("<Contents>").count(), 2);
        assert!(xml.contains("<KeyCount>2</KeyCount>"));
        assert!(xml.contains("<MaxKeys>100</MaxKeys>"));
        assert!(xml.contains("<IsTruncated>false</IsTruncated>"));
        assert!(!xml.contains("<Delimiter>"));
        assert!(!xml.contains("<CommonPrefixes>"));
        assert!(xml.contains("<Key>a.txt</Key>"));
        assert!(xml.contains("<Size>5</Size>"));
    }

    #[test]
    fn test_should_round_trip_listing_with_common_prefix() {
        let config = InterfaceConfig::default();
        let wire = WireSerializer::new(&config);
        let listing = ListBucketResult::from_page(
            "test-bucket",
            config.effective_max_keys(None),
            vec![entry_for("a.txt", b"alpha"), entry_for("b.txt", b"bravo")],
            vec!["photos/".to_owned()],
            Some("next-page".to_owned()),
        )
        .unwrap()
        .with_prefix("")
        .with_delimiter("/");

        let decoded: ListBucketResult = wire
            .decode_xml(&wire.encode_xml(&listing).unwrap())
            .unwrap();

        assert_eq!(decoded, listing);
        assert_eq!(decoded.key_count, 2);
        assert!(decoded.is_truncated);
        assert!(decoded.common_prefixes.contains("photos/"));
    }

    #[test]
    fn test_should_clamp_page_to_configured_max_keys() {
        let config = InterfaceConfig::builder().max_keys(1).build();
        let max_keys = config.effective_max_keys(Some(1000));
        let result = ListBucketResult::from_page(
            "test-bucket",
            max_keys,
            vec![entry_for("a.txt", b"alpha"), entry_for("b.txt", b"bravo")],
            Vec::new(),
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_should_decode_listing_behind_byte_order_marks() {
        let wire = WireSerializer::default();
        let xml = wire
            .encode_xml(&two_entry_listing(&InterfaceConfig::default()))
            .unwrap();
        let with_bom = format!("\u{feff}\u{feff}{xml}");
        let decoded: ListBucketResult = wire.decode_xml(&with_bom).unwrap();
        assert_eq!(decoded.contents.len(), 2);
    }

    #[test]
    fn test_should_reject_listing_from_foreign_namespace() {
        let wire = WireSerializer::default();
        let xml = wire
            .encode_xml(&two_entry_listing(&InterfaceConfig::default()))
            .unwrap()
            .replace(S3_NAMESPACE, "http://example.com/other");
        assert!(matches!(
            wire.decode_xml::<ListBucketResult>(&xml),
            Err(XmlError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn test_should_carry_listing_through_json() {
        let config = InterfaceConfig::builder().pretty_json(true).build();
        let wire = WireSerializer::new(&config);
        let listing = two_entry_listing(&config);

        let json = wire.encode_json(&listing).unwrap();
        assert!(json.contains("\"KeyCount\": 2"));
        assert!(json.contains("\"LastModified\": \"2024-03-01T12:00:00Z\""));
        assert!(!json.contains("null"));

        let decoded: ListBucketResult = wire.decode_json(&json).unwrap();
        assert_eq!(decoded, listing);
    }

    #[test]
    fn test_should_isolate_deep_copied_listing() {
        let wire = WireSerializer::default();
        let original = two_entry_listing(&InterfaceConfig::default());

        let mut copy = wire.deep_copy(&original);
        copy.contents.clear();
        copy.common_prefixes.insert("extra/".to_owned());

        assert_eq!(original.contents.len(), 2);
        assert!(original.common_prefixes.is_empty());
    }
}
