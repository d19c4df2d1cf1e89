use std::sync::Arc;

use cellwidth::{
    bisearch, classify, list_versions, wcswidth, wcwidth, Classifier, Interval, Table, TableSet,
    UnicodeVersion, VersionTables, WidthConfig,
};
use unicode_width::UnicodeWidthChar;

fn builtin() -> Classifier {
    Classifier::with_builtin_tables(&WidthConfig::default())
}

#[test]
fn test_list_versions() {
    let listing = list_versions().join("\n");
    insta::assert_snapshot!(listing, @r"
    3.2.0
    5.2.0
    9.0.0
    11.0.0
    12.1.0
    13.0.0
    14.0.0
    15.0.0
    15.1.0
    ");
}

#[test]
fn test_wcwidth_basics() {
    assert_eq!(wcwidth('\0'), 0);
    assert_eq!(wcwidth('a'), 1);
    assert_eq!(wcwidth('\u{1100}'), 2);
    assert_eq!(wcwidth('\u{0483}'), 0);
    assert_eq!(wcwidth('\u{0001}'), -1);
    assert_eq!(wcwidth('\u{009f}'), -1);
    assert_eq!(wcwidth('\u{00a0}'), 1);
}

#[test]
fn test_wcswidth_mixed() {
    assert_eq!(wcswidth("abc", None), 3);
    assert_eq!(wcswidth("--\u{05bf}--", None), 4);
    assert_eq!(wcswidth("\u{0410}\u{0488}", None), 1);
}

#[test]
fn test_controls_never_printable() {
    let c = builtin();
    for cp in (1..0x20).chain(0x7f..0xa0) {
        for version in ["3.2.0", "9.0.0", "latest"] {
            assert_eq!(c.width_of(cp, version), -1, "cp {:x} @ {}", cp, version);
        }
    }
}

#[test]
fn test_every_code_point_is_classified() {
    let c = builtin();
    for version in ["3.2.0", "latest"] {
        for cp in (0..0x11_0000u32).step_by(3) {
            let width = c.width_of(cp, version);
            assert!((-1..=2).contains(&width), "cp {:x}", cp);
        }
    }
}

#[test]
fn test_wide_tables_apply_per_version() {
    let c = builtin();
    for entry in c.tables().entries() {
        let version = entry.version.to_string();
        for interval in entry.wide.intervals().iter().step_by(7) {
            let cp = interval.start;
            let zero = entry.zero_width.contains(cp) || cp == 0x200d;
            if zero {
                continue;
            }
            assert_eq!(c.width_of(cp, &version), 2, "cp {:x} @ {}", cp, version);
        }
    }
}

#[test]
fn test_agrees_with_unicode_width_on_cjk() {
    let c = builtin();
    let ranges = [
        (0x4e00u32, 0x9fa5u32),
        (0xac00, 0xd7a3),
        (0xff01, 0xff60),
        (0x3041, 0x3096),
    ];
    for (start, end) in ranges {
        for cp in start..=end {
            let ch = char::from_u32(cp).unwrap();
            assert_eq!(UnicodeWidthChar::width(ch), Some(2), "cp {:x}", cp);
            assert_eq!(c.width(ch, "latest"), 2, "cp {:x}", cp);
        }
    }
}

#[test]
fn test_agrees_with_unicode_width_on_ascii() {
    let c = builtin();
    for ch in (0x20u8..0x7f).map(char::from) {
        assert_eq!(
            UnicodeWidthChar::width(ch).map(|w| w as i8),
            Some(c.width(ch, "latest"))
        );
    }
}

#[test]
fn test_gender_sign_scenario() {
    let tables = TableSet::new(vec![
        VersionTables::new(UnicodeVersion::new(4, 1, 0), Table::empty(), Table::empty()),
        VersionTables::new(UnicodeVersion::new(9, 0, 0), Table::empty(), Table::empty()),
    ])
    .unwrap();
    let c = Classifier::new(Arc::new(tables), &WidthConfig::default());
    assert_eq!(c.width_of(0x2642, "4.1.0"), 1);
    assert_eq!(c.width_of(0x2642, "9.0.0"), 2);
}

#[test]
fn test_gender_sign_builtin() {
    let c = builtin();
    assert_eq!(c.width('\u{2640}', "5.2.0"), 1);
    assert_eq!(c.width('\u{2640}', "9.0.0"), 2);
    assert_eq!(c.width('\u{2642}', "latest"), 2);
}

#[test]
fn test_emoji_cluster_collapses() {
    let c = builtin();
    let cluster = [0x1f469, 0x200d, 0x1f52c];
    assert_eq!(c.codepoints_width(&cluster, None, "latest"), 2);
    let separate: isize = cluster
        .iter()
        .map(|cp| isize::from(c.width_of(*cp, "latest")))
        .sum();
    assert_eq!(separate, 4);
}

#[test]
fn test_short_circuit_ignores_rest() {
    let c = builtin();
    assert_eq!(c.string_width("ok\u{7}", None, "latest"), -1);
    assert_eq!(c.string_width("ok\u{7}中中中中", None, "latest"), -1);
    assert_eq!(c.string_width("\u{1b}[0m", None, "latest"), -1);
}

#[test]
fn test_prefix_width_sums_units() {
    let c = builtin();
    let text = "Ｈｅｌｌｏ, wörld\u{308}!";
    let total = c.string_width(text, None, "latest");
    let per_char: isize = text
        .chars()
        .map(|ch| isize::from(c.width(ch, "latest")))
        .sum();
    assert_eq!(total, per_char);
    let counts: Vec<isize> = (0..=text.chars().count())
        .map(|k| c.string_width(text, Some(k), "latest"))
        .collect();
    assert!(counts.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_classify_against_raw_tables() {
    let entry = VersionTables::new(
        UnicodeVersion::new(1, 0, 0),
        Table::new(vec![Interval::new(0x0300, 0x036f)]).unwrap(),
        Table::new(vec![Interval::new(0x0300, 0x0300), Interval::new(0x3000, 0x3000)]).unwrap(),
    );
    // Zero-width is checked before wide
    assert_eq!(classify(0x0300, &entry), 0);
    assert_eq!(classify(0x3000, &entry), 2);
    assert_eq!(classify(0x2642, &entry), 1);
}

#[test]
fn test_bisearch_boundaries() {
    let table = [Interval::new(0x10, 0x20), Interval::new(0x30, 0x40)];
    assert!(bisearch(0x10, &table));
    assert!(bisearch(0x20, &table));
    assert!(!bisearch(0x0f, &table));
    assert!(!bisearch(0x21, &table));
    assert!(bisearch(0x40, &table));
    assert!(!bisearch(0x41, &table));
}

#[test]
fn test_classifier_is_shareable() {
    let c = Arc::new(builtin());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let c = Arc::clone(&c);
            std::thread::spawn(move || c.string_width(&"中a".repeat(i + 1), None, "auto"))
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), 3 * (i as isize + 1));
    }
}
