//! How each operation reports trouble: `Err`, `None`/`false`, or a default.

#[cfg(test)]
mod tests {
    use s3iface_auth::codec::{
        base64_to_bytes, bytes_to_base64, bytes_to_hex, csv_to_list, hex_to_bytes,
        is_base64_string, list_to_csv, string_to_base64,
    };
    use s3iface_auth::CodecError;
    use s3iface_auth::hash::{hmac_sha1, hmac_sha256, md5, md5_text, sha1, sha256};
    use s3iface_core::utils::{random_string, remove_first};
    use s3iface_core::{
        ValidationError, is_ip_address, is_ipv4_address, is_ipv6_address, is_unsafe_path,
    };
    use s3iface_model::{ErrorResponse, ListBucketResult};
    use s3iface_wire::json::{deep_copy, from_json, from_json_bytes};
    use s3iface_wire::xml::{from_xml, from_xml_bytes};
    use s3iface_wire::{JsonError, XmlError};
    use serde::{Deserialize, Serialize};

    #[test]
    fn test_should_report_contract_violations_as_errors() {
        assert_eq!(is_ipv4_address(""), Err(ValidationError::EmptyInput("ipv4 address")));
        assert!(is_ipv6_address("").is_err());
        assert!(is_ip_address("").is_err());
        assert!(matches!(is_base64_string(""), Err(CodecError::EmptyInput)));
        assert!(matches!(hex_to_bytes("xyz"), Err(CodecError::InvalidHex(_))));
        assert!(matches!(base64_to_bytes("%%%%"), Err(CodecError::InvalidBase64(_))));
        assert!(matches!(from_xml::<ListBucketResult>(""), Err(XmlError::EmptyInput)));
        assert!(matches!(
            from_xml_bytes::<ErrorResponse>(b"\xEF\xBB\xBF"),
            Err(XmlError::EmptyInput)
        ));
        assert!(matches!(from_json::<ErrorResponse>(""), Err(JsonError::EmptyInput)));
        assert!(matches!(from_json_bytes::<ErrorResponse>(b""), Err(JsonError::EmptyInput)));
    }

    #[test]
    fn test_should_report_expected_divergence_as_sentinels() {
        assert!(md5(None).is_none());
        assert!(sha1(None).is_none());
        assert!(sha256(None).is_none());
        assert!(md5_text("").is_none());
        assert!(hmac_sha1(Some(b"m"), Some(b"")).is_none());
        assert!(hmac_sha256(Some(b"m"), None).is_none());
        assert!(bytes_to_hex(&[]).is_none());
        assert!(bytes_to_base64(&[]).is_none());
        assert!(string_to_base64("").is_none());
        assert!(csv_to_list("").is_none());
        assert!(list_to_csv::<String>(&[]).is_none());
        assert!(random_string(0).is_none());
        assert!(remove_first("", "x").is_none());
        assert!(is_unsafe_path::<&str>(&[]));
    }

    #[test]
    fn test_should_classify_addresses() {
        assert_eq!(is_ipv4_address("192.168.1.1"), Ok(true));
        assert_eq!(is_ipv6_address("::1"), Ok(true));
        assert_eq!(is_ip_address("not-an-ip"), Ok(false));
        assert_eq!(is_ipv4_address("256.1.1.1"), Ok(false));
    }

    #[test]
    fn test_should_degrade_deep_copy_to_default() {
        // JSON has no NaN: it is written as null, which does not decode as f64.
        #[derive(Debug, Default, Serialize, Deserialize)]
        struct Reading {
            value: f64,
        }
        let copy = deep_copy(&Reading { value: f64::NAN });
        assert_eq!(copy.value.to_bits(), 0f64.to_bits());
    }
}
