#[cfg(test)]
mod tests {
    use jwe_core::compact::CompactParts;
    use jwe_core::constants::COMPACT_SEGMENTS;
    use jwe_core::segments::{decode_segment, encode_segment, DecodeError, SegmentKind};

    // {"alg":"dir","enc":"A128GCM"}
    const HEADER: &str = "eyJhbGciOiJkaXIiLCJlbmMiOiJBMTI4R0NNIn0";

    #[test]
    fn encode_is_unpadded_url_safe() {
        assert_eq!(encode_segment(&[0xFB, 0xFF]), "-_8");
        assert_eq!(encode_segment(b""), "");
    }

    #[test]
    fn decode_is_strict() {
        assert_eq!(decode_segment("-_8", SegmentKind::Ciphertext).unwrap(), vec![0xFB, 0xFF]);

        for bad in ["-_8=", "+/8", "a", "ab!c", "-_9"] {
            let err = decode_segment(bad, SegmentKind::Ciphertext).unwrap_err();
            assert!(
                matches!(err, DecodeError::InvalidBase64 { segment: SegmentKind::Ciphertext, .. }),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn parse_requires_exactly_five_segments() {
        for token in [
            String::new(),
            HEADER.to_string(),
            format!("{HEADER}..AAAAAAAAAAAAAAAA.AA"),
            format!("{HEADER}..AAAAAAAAAAAAAAAA.AA.AAAAAAAAAAAAAAAAAAAAAA.extra"),
        ] {
            let found = token.split('.').count();
            let err = token.parse::<CompactParts>().unwrap_err();
            assert!(matches!(err, DecodeError::SegmentCount { found: n } if n == found));
            assert_eq!(
                err.to_string(),
                format!("not enough segments: expected {COMPACT_SEGMENTS}, found {found}")
            );
        }
    }

    #[test]
    fn parse_names_the_failing_segment() {
        let cases = [
            ("!!.AA.AA.AA.AA".to_string(), SegmentKind::Header),
            (format!("{HEADER}.A=.AA.AA.AA"), SegmentKind::EncryptedKey),
            (format!("{HEADER}.AA.A.AA.AA"), SegmentKind::InitializationVector),
            (format!("{HEADER}.AA.AA.*.AA"), SegmentKind::Ciphertext),
            (format!("{HEADER}.AA.AA.AA.A+"), SegmentKind::AuthenticationTag),
        ];

        for (token, kind) in cases {
            let err = token.parse::<CompactParts>().unwrap_err();
            assert_eq!(err.segment(), Some(kind), "token {token}");
        }
    }

    #[test]
    fn parse_then_display_is_identity() {
        let token = format!("{HEADER}..AAECAwQFBgcICQoL.aGVsbG8.AAECAwQFBgcICQoLDA0ODw");
        let parts: CompactParts = token.parse().unwrap();

        assert!(parts.encrypted_key.is_empty());
        assert_eq!(parts.iv, (0u8..12).collect::<Vec<_>>());
        assert_eq!(parts.ciphertext, b"hello");
        assert_eq!(parts.tag, (0u8..16).collect::<Vec<_>>());
        assert_eq!(parts.protected.encoded, HEADER);
        assert_eq!(parts.to_string(), token);
    }
}
