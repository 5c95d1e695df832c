//! Signed request verification, end to end.

#[cfg(test)]
mod tests {
    use s3iface_auth::codec::bytes_to_base64;
    use s3iface_auth::hash::{md5, sha256};
    use s3iface_auth::signature::{credential_scope, sign_v2, string_to_sign_v4};
    use s3iface_auth::{
        AuthError, StaticSecretStore, verify_content_md5, verify_content_sha256, verify_sigv2,
        verify_sigv4,
    };
    use s3iface_core::is_unsafe_key;

    use crate::{TEST_ACCESS_KEY, test_store};

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    fn aws_get_object_canonical_request() -> String {
        format!(
            "GET\n/test.txt\n\n\
             host:examplebucket.s3.amazonaws.com\n\
             range:bytes=0-9\n\
             x-amz-content-sha256:{EMPTY_SHA256}\n\
             x-amz-date:20130524T000000Z\n\n\
             host;range;x-amz-content-sha256;x-amz-date\n\
             {EMPTY_SHA256}"
        )
    }

    #[test]
    fn test_should_verify_aws_sigv4_get_object_example() {
        let store = test_store();

        let canonical = aws_get_object_canonical_request();
        let canonical_hash = sha256(Some(canonical.as_bytes()))
            .map(hex::encode)
            .unwrap_or_default();
        assert_eq!(
            canonical_hash,
            "7344ae5b7ee6c3e7e6b0fe0640412a37625d1fbfff95c48bbb2dc43964946972"
        );

        let sts = string_to_sign_v4(
            "20130524T000000Z",
            &credential_scope("20130524", "us-east-1", "s3"),
            &canonical_hash,
        );
        let result = verify_sigv4(
            &store,
            TEST_ACCESS_KEY,
            "f0e8bdb87c964420e857bd35b5d6ed310bd44f0170aba48dd91039c6036bdb41",
            &sts,
            "20130524",
            "us-east-1",
            "s3",
        );
        assert!(result.is_ok(), "verify_sigv4 failed: {result:?}");

        verify_content_sha256(EMPTY_SHA256, b"").unwrap();
    }

    #[test]
    fn test_should_verify_sigv2_put_with_content_md5() {
        let store = test_store();
        let key = "photos/puppy.jpg";
        let body = b"not really a jpeg";
        assert!(!is_unsafe_key(key));

        let content_md5 = md5(Some(body))
            .and_then(|d| bytes_to_base64(&d))
            .unwrap_or_default();
        let sts = format!(
            "PUT\n{content_md5}\nimage/jpeg\nTue, 27 Mar 2007 21:15:45 +0000\n/johnsmith/{key}"
        );
        let signature = sign_v2(crate::TEST_SECRET_KEY, &sts).unwrap_or_default();

        verify_sigv2(&store, TEST_ACCESS_KEY, &signature, &sts).unwrap();
        verify_content_md5(&content_md5, body).unwrap();
        assert!(matches!(
            verify_content_md5(&content_md5, b"tampered body"),
            Err(AuthError::BadDigest)
        ));
    }

    #[test]
    fn test_should_reject_unsafe_key_before_signature_check() {
        for key in ["../etc/passwd", "docs/./readme", "a/COM1/b", "bad|name"] {
            assert!(is_unsafe_key(key), "{key} should be unsafe");
        }
    }

    #[test]
    fn test_should_never_verify_against_empty_secret() {
        crate::init_tracing();
        let store = StaticSecretStore::new([("EMPTY".to_owned(), String::new())]);
        let sts = "GET\n\n\nTue, 27 Mar 2007 19:36:42 +0000\n/johnsmith/photos/puppy.jpg";

        for candidate in ["", "bWq2s1WEIj+Ydj0vQ697zp+IXMU="] {
            assert!(matches!(
                verify_sigv2(&store, "EMPTY", candidate, sts),
                Err(AuthError::SignatureDoesNotMatch)
            ));
        }
        assert!(matches!(
            verify_sigv4(&store, "EMPTY", "", sts, "20130524", "us-east-1", "s3"),
            Err(AuthError::SignatureDoesNotMatch)
        ));
    }

    #[test]
    fn test_should_reject_signature_from_other_secret() {
        let store = test_store();
        let sts = "GET\n\n\nTue, 27 Mar 2007 19:36:42 +0000\n/johnsmith/photos/puppy.jpg";
        let forged = sign_v2("some-other-secret", sts).unwrap_or_default();
        assert!(matches!(
            verify_sigv2(&store, TEST_ACCESS_KEY, &forged, sts),
            Err(AuthError::SignatureDoesNotMatch)
        ));
    }
}
