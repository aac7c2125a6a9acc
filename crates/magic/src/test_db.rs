#[cfg(test)]
mod tests {
    use crate::{Error, MagicDb, MagicKind, MagicRule, builtin, loader};

    fn rule(value: &str, priority: u32) -> MagicRule {
        MagicRule::new(value, MagicKind::String, 0, 0, priority)
    }

    #[test]
    fn builtin_table_detects_common_formats() {
        let db = builtin();
        let cases: [(&[u8], &str); 5] = [
            (b"\x89PNG\r\n\x1a\n....", "image/png"),
            (b"PK\x03\x04........", "application/zip"),
            (b"\x1f\x8b\x08\x00....", "application/gzip"),
            (b"%PDF-1.4", "application/pdf"),
            (b"\x7fELF\x02\x01\x01", "application/x-executable"),
        ];
        for (data, want) in cases {
            let hit = db.sniff(data).expect(want);
            assert_eq!(hit.mime_type, want);
        }
        assert_eq!(db.sniff(b"nothing recognizable here"), None);
    }

    #[test]
    fn higher_priority_wins() {
        let mut db = MagicDb::new();
        db.insert("text/plain", rule("AB", 10));
        db.insert("application/x-custom", rule("AB", 80));
        let hit = db.sniff(b"ABCD").unwrap();
        assert_eq!(hit.mime_type, "application/x-custom");
        assert_eq!(hit.priority, 80);
    }

    #[test]
    fn equal_priority_resolves_to_earliest_entry() {
        let mut db = MagicDb::new();
        db.insert("first/match", rule("AB", 50));
        db.insert("second/match", rule("AB", 50));
        assert_eq!(db.sniff(b"AB").unwrap().mime_type, "first/match");
    }

    #[test]
    fn insert_groups_rules_by_mime_type() {
        let mut db = MagicDb::new();
        db.insert("image/gif", rule("GIF87a", 50));
        db.insert("image/gif", rule("GIF89a", 50));
        assert_eq!(db.entries().len(), 1);
        assert_eq!(db.rule_count(), 2);
    }

    #[test]
    fn remove_drops_emptied_entries() {
        let mut db = MagicDb::new();
        db.insert("image/gif", rule("GIF87a", 50));
        let removed = db.remove("image/gif", 0).unwrap();
        assert_eq!(removed.value, "GIF87a");
        assert!(db.entries().is_empty());
    }

    #[test]
    fn remove_reports_missing_rules() {
        let mut db = MagicDb::new();
        db.insert("image/gif", rule("GIF87a", 50));
        assert!(matches!(
            db.remove("image/gif", 3),
            Err(Error::RuleNotFound { .. })
        ));
        assert!(matches!(
            db.remove("image/png", 0),
            Err(Error::RuleNotFound { .. })
        ));
    }

    #[test]
    fn check_reports_each_invalid_rule() {
        let mut db = MagicDb::new();
        db.insert("image/gif", rule("GIF87a", 50));
        db.insert("broken/empty", rule("", 50));
        db.insert("broken/range", MagicRule::new("X", MagicKind::String, 9, 1, 50));
        let issues = db.check();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].mime_type, "broken/empty");
        assert_eq!(issues[0].error, Error::EmptyPattern);
        assert_eq!(issues[1].mime_type, "broken/range");
        assert_eq!(issues[1].error, Error::InvalidRange { start: 9, end: 1 });
    }

    #[test]
    fn builtin_table_is_fully_valid() {
        assert!(builtin().check().is_empty());
    }

    #[test]
    fn ron_round_trips() {
        let db = builtin();
        let text = ron::ser::to_string_pretty(&db, ron::ser::PrettyConfig::default()).unwrap();
        let loaded = loader::load_from_str(&text, None).unwrap();
        assert_eq!(loaded, db);
    }

    #[test]
    fn terse_ron_uses_field_defaults() {
        let text = r#"(entries: [
            (mime_type: "image/png", rules: [(value: "\\x89PNG")]),
            (mime_type: "application/gzip", rules: [(value: "0x1F8B", kind: big16, priority: 45)]),
        ])"#;
        let db = loader::load_from_str(text, None).unwrap();
        assert_eq!(db.entries()[0].rules[0].kind, MagicKind::String);
        assert_eq!(db.entries()[0].rules[0].priority, 50);
        assert_eq!(db.entries()[0].rules[0].range_start, 0);
        assert_eq!(db.entries()[1].rules[0].priority, 45);
        assert_eq!(db.sniff(b"\x89PNG....").unwrap().mime_type, "image/png");
    }

    #[test]
    fn misspelled_field_fails_to_parse() {
        let text = r#"(entries: [(mime_type: "x/y", rules: [(value: "A", prio: 1)])])"#;
        assert!(matches!(
            loader::load_from_str(text, None),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn probe_len_spans_the_longest_rule() {
        let db = builtin();
        // The tar magic sits at offset 257 and is five bytes long
        assert_eq!(db.probe_len(), 262);
    }
}
