#[cfg(test)]
mod tests {
    use crate::{Error, MagicKind, MagicRule, pattern};

    fn bytes(kind: MagicKind, value: &str) -> Vec<u8> {
        MagicRule::new(value, kind, 0, 0, 50).pattern_bytes().unwrap()
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(pattern::unescape("GIF89a").unwrap(), b"GIF89a");
    }

    #[test]
    fn hex_escapes_decode() {
        assert_eq!(
            pattern::unescape("\\x89PNG\\r\\n\\x1a\\n").unwrap(),
            &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'],
        );
        // One hex digit is accepted
        assert_eq!(pattern::unescape("\\x7ELF").unwrap(), &[0x7E, b'L', b'F']);
    }

    #[test]
    fn octal_and_named_escapes_decode() {
        assert_eq!(pattern::unescape("\\177ELF").unwrap(), &[0x7f, b'E', b'L', b'F']);
        assert_eq!(pattern::unescape("\\0\\t\\\\").unwrap(), &[0, b'\t', b'\\']);
    }

    #[test]
    fn bad_escapes_are_rejected() {
        for value in ["trailing\\", "\\q", "\\x", "\\400"] {
            assert!(
                matches!(pattern::unescape(value), Err(Error::InvalidEscape { .. })),
                "expected InvalidEscape for {value:?}",
            );
        }
    }

    #[test]
    fn numeric_kinds_encode_at_width_and_order() {
        assert_eq!(bytes(MagicKind::Byte, "255"), &[0xFF]);
        assert_eq!(bytes(MagicKind::Big16, "0x1F8B"), &[0x1F, 0x8B]);
        assert_eq!(bytes(MagicKind::Little16, "0x1F8B"), &[0x8B, 0x1F]);
        assert_eq!(bytes(MagicKind::Big32, "0xCAFEBABE"), &[0xCA, 0xFE, 0xBA, 0xBE]);
        assert_eq!(bytes(MagicKind::Little32, "0xCAFEBABE"), &[0xBE, 0xBA, 0xFE, 0xCA]);
        // Decimal literals are accepted too
        assert_eq!(bytes(MagicKind::Big16, "8075"), 8075u16.to_be_bytes());
    }

    #[test]
    fn host_kinds_use_native_order() {
        assert_eq!(bytes(MagicKind::Host16, "0x1F8B"), 0x1F8Bu16.to_ne_bytes());
        assert_eq!(bytes(MagicKind::Host32, "0x89504E47"), 0x89504E47u32.to_ne_bytes());
    }

    #[test]
    fn numbers_must_fit_the_width() {
        let rule = MagicRule::new("256", MagicKind::Byte, 0, 0, 50);
        assert!(matches!(
            rule.pattern_bytes(),
            Err(Error::InvalidNumber { .. })
        ));
        let rule = MagicRule::new("0x10000", MagicKind::Big16, 0, 0, 50);
        assert!(matches!(
            rule.pattern_bytes(),
            Err(Error::InvalidNumber { .. })
        ));
        let rule = MagicRule::new("not-a-number", MagicKind::Little32, 0, 0, 50);
        assert!(matches!(
            rule.pattern_bytes(),
            Err(Error::InvalidNumber { .. })
        ));
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in MagicKind::ALL {
            assert_eq!(kind.name().parse::<MagicKind>().unwrap(), kind);
        }
        assert!(matches!(
            "mid16".parse::<MagicKind>(),
            Err(Error::UnknownKind { .. })
        ));
    }
}
