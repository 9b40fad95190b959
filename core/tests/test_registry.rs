#[cfg(test)]
mod tests {
    use jwe_core::compression::CompressionError;
    use jwe_core::constants::DEFAULT_MAX_DECOMPRESSED_LEN;
    use jwe_core::crypto::{AesGcmEncryption, AesKeyWrap, AlgorithmError, DirectKey};
    use jwe_core::headers::{Header, HeaderError};
    use jwe_core::registry::{
        builtin_algorithm, builtin_algorithms, Algorithm, AlgorithmKind, AlgorithmRegistry,
        CompressionAlgorithm, ConfigError, EnvelopeType, KeyManagementAlgorithm, WrappedKey,
    };
    use zeroize::Zeroizing;

    // A signature-side algorithm that must never land in a JWE registry.
    struct SigningOnly;

    impl KeyManagementAlgorithm for SigningOnly {
        fn name(&self) -> &str {
            "HS256"
        }
        fn envelope(&self) -> EnvelopeType {
            EnvelopeType::Jws
        }
        fn wrap(&self, cek: Zeroizing<Vec<u8>>, _: &Header, _: &[u8]) -> Result<WrappedKey, AlgorithmError> {
            Ok(WrappedKey { encrypted_key: Vec::new(), cek })
        }
        fn unwrap(&self, _: &[u8], _: &Header, _: &[u8]) -> Result<Zeroizing<Vec<u8>>, AlgorithmError> {
            Err(AlgorithmError::Unwrap)
        }
    }

    // Marks its output so the winning registration is observable.
    struct MarkedCodec;

    impl CompressionAlgorithm for MarkedCodec {
        fn name(&self) -> &str {
            "DEF"
        }
        fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CompressionError> {
            Ok([b"X".as_slice(), data].concat())
        }
        fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CompressionError> {
            Ok(data.get(1..).unwrap_or_default().to_vec())
        }
    }

    #[test]
    fn builtins_are_partitioned_by_kind() {
        let registry = AlgorithmRegistry::from_algorithms(builtin_algorithms(DEFAULT_MAX_DECOMPRESSED_LEN)).unwrap();

        assert_eq!(registry.names(AlgorithmKind::KeyManagement), vec!["A128KW", "A192KW", "A256KW", "dir"]);
        assert_eq!(registry.names(AlgorithmKind::ContentEncryption), vec!["A128GCM", "A192GCM", "A256GCM"]);
        assert_eq!(registry.names(AlgorithmKind::Compression), vec!["DEF"]);

        // Same name space per kind only.
        assert!(registry.contains(AlgorithmKind::KeyManagement, "dir"));
        assert!(!registry.contains(AlgorithmKind::ContentEncryption, "dir"));
        assert!(!registry.contains(AlgorithmKind::KeyManagement, "A128GCM"));
    }

    #[test]
    fn register_rejects_non_jwe_algorithms() {
        let mut registry = AlgorithmRegistry::new();
        let err = registry.register(Algorithm::key_management(SigningOnly)).unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidEnvelope { name: "HS256".into(), envelope: EnvelopeType::Jws }
        );
        assert!(!registry.contains(AlgorithmKind::KeyManagement, "HS256"));
    }

    #[test]
    fn last_registration_wins() {
        let registry = AlgorithmRegistry::from_algorithms([
            Algorithm::compression(jwe_core::compression::DeflateCompression::default()),
            Algorithm::compression(MarkedCodec),
        ])
        .unwrap();

        let codec = registry.compression("DEF").unwrap();
        assert_eq!(codec.compress(b"abc").unwrap(), b"Xabc");
        assert_eq!(registry.names(AlgorithmKind::Compression).len(), 1);
    }

    #[test]
    fn resolve_reports_unsupported_per_kind() {
        let registry = AlgorithmRegistry::from_algorithms([
            Algorithm::key_management(DirectKey),
            Algorithm::content_encryption(AesGcmEncryption::A128GCM),
        ])
        .unwrap();

        assert!(matches!(
            registry.resolve(AlgorithmKind::KeyManagement, "A128KW"),
            Err(HeaderError::UnsupportedAlgorithm { name }) if name == "A128KW"
        ));
        assert!(matches!(
            registry.resolve(AlgorithmKind::ContentEncryption, "A256GCM"),
            Err(HeaderError::UnsupportedEncryptionAlgorithm { name }) if name == "A256GCM"
        ));
        assert!(matches!(
            registry.resolve(AlgorithmKind::Compression, "DEF"),
            Err(HeaderError::UnsupportedCompressionAlgorithm { name }) if name == "DEF"
        ));

        let found = registry.resolve(AlgorithmKind::ContentEncryption, "A128GCM").unwrap();
        assert_eq!(found.kind(), AlgorithmKind::ContentEncryption);
        assert_eq!(found.name(), "A128GCM");
    }

    #[test]
    fn builtin_lookup_by_name() {
        let kw = builtin_algorithm("A192KW", DEFAULT_MAX_DECOMPRESSED_LEN).unwrap();
        assert_eq!(kw.kind(), AlgorithmKind::KeyManagement);
        assert_eq!(kw.envelope(), EnvelopeType::Jwe);
        assert!(builtin_algorithm("RSA-OAEP", DEFAULT_MAX_DECOMPRESSED_LEN).is_none());

        // Key wrap constants line up with their names.
        assert_eq!(AesKeyWrap::A256KW.name(), "A256KW");
    }
}
