#[cfg(test)]
mod tests {
    use crate::{Error, MagicKind, MagicRule};

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    #[test]
    fn anchored_string_rule_matches_prefix() {
        let rule = MagicRule::new("\\x89PNG\\r\\n\\x1a\\n", MagicKind::String, 0, 0, 50);
        assert!(rule.matches(PNG));
        assert!(!rule.matches(b"\xff\xd8\xffjfif"));
    }

    #[test]
    fn window_searches_every_candidate_offset() {
        let rule = MagicRule::new("%PDF-", MagicKind::String, 0, 4, 50);
        assert!(rule.matches(b"%PDF-1.7"));
        // BOM then the magic, still inside the window
        assert!(rule.matches(b"\xef\xbb\xbf%PDF-1.7"));
        // Pattern starts at offset 5, one past the window
        assert!(!rule.matches(b"junk %PDF-1.7"));
    }

    #[test]
    fn fixed_offset_window_is_exact() {
        let mut data = vec![0u8; 512];
        data[257..262].copy_from_slice(b"ustar");
        let rule = MagicRule::new("ustar", MagicKind::String, 257, 257, 50);
        assert!(rule.matches(&data));

        let mut shifted = vec![0u8; 512];
        shifted[256..261].copy_from_slice(b"ustar");
        assert!(!rule.matches(&shifted));
    }

    #[test]
    fn short_data_never_matches() {
        let rule = MagicRule::new("ustar", MagicKind::String, 257, 257, 50);
        assert!(!rule.matches(b"ustar"));
        assert!(!rule.matches(&[]));
    }

    #[test]
    fn numeric_rule_matches_encoded_bytes() {
        let rule = MagicRule::new("0x1F8B", MagicKind::Big16, 0, 0, 45);
        assert!(rule.matches(&[0x1F, 0x8B, 0x08, 0x00]));
        assert!(!rule.matches(&[0x8B, 0x1F, 0x08, 0x00]));
    }

    #[test]
    fn undecodable_rule_never_matches() {
        let rule = MagicRule::new("0x10000", MagicKind::Big16, 0, 0, 50);
        assert!(!rule.matches(&[0x00, 0x00]));
    }

    #[test]
    fn validate_accepts_the_valid_rule() {
        let rule = MagicRule::new("PK\\x03\\x04", MagicKind::String, 0, 0, 50);
        assert_eq!(rule.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_pattern() {
        let rule = MagicRule::new("", MagicKind::String, 0, 4, 50);
        assert_eq!(rule.validate(), Err(Error::EmptyPattern));
    }

    #[test]
    fn validate_rejects_inverted_range() {
        let rule = MagicRule::new("X", MagicKind::String, 10, 2, 50);
        assert_eq!(rule.validate(), Err(Error::InvalidRange { start: 10, end: 2 }));
    }

    #[test]
    fn validate_rejects_bad_numbers() {
        let rule = MagicRule::new("0x10000", MagicKind::Big16, 0, 0, 50);
        assert!(matches!(rule.validate(), Err(Error::InvalidNumber { .. })));
    }

    #[test]
    fn probe_len_covers_window_and_pattern() {
        let rule = MagicRule::new("ustar", MagicKind::String, 257, 257, 50);
        assert_eq!(rule.probe_len(), 262);
    }
}
