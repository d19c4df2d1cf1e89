//! Display width of whole strings

use crate::classifier::Classifier;
use crate::emoji::{continues_emoji_cluster, is_emoji_block};

impl Classifier {
    /// Cell width of the first `limit` characters of `text` (all when `None`).
    ///
    /// An emoji-block character followed by any run of ZWJ, variation
    /// selectors and further emoji-block characters counts as one two-cell
    /// unit. Returns -1 as soon as a non-printable character is found.
    pub fn string_width(&self, text: &str, limit: Option<usize>, version: &str) -> isize {
        self.sequence_width(text.chars().map(u32::from), limit, version)
    }

    /// [`string_width`](Self::string_width) over raw code points
    pub fn codepoints_width(&self, cps: &[u32], limit: Option<usize>, version: &str) -> isize {
        self.sequence_width(cps.iter().copied(), limit, version)
    }

    fn sequence_width<I>(&self, cps: I, limit: Option<usize>, version: &str) -> isize
    where
        I: Iterator<Item = u32>,
    {
        let mut cps = cps.take(limit.unwrap_or(usize::MAX)).peekable();
        if cps.peek().is_none() {
            return 0;
        }

        let version = self.resolve(version).version;
        let mut total: isize = 0;
        while let Some(cp) = cps.next() {
            if is_emoji_block(cp) {
                while cps.next_if(|next| continues_emoji_cluster(*next)).is_some() {}
                total += 2;
                continue;
            }
            match self.width_in(cp, version) {
                w if w < 0 => return -1,
                w => total += isize::from(w),
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use crate::config::WidthConfig;
    use crate::Classifier;

    fn classifier() -> Classifier {
        Classifier::with_builtin_tables(&WidthConfig::default())
    }

    #[test]
    fn test_empty_is_zero() {
        let c = classifier();
        assert_eq!(c.string_width("", None, "latest"), 0);
        assert_eq!(c.string_width("abc", Some(0), "latest"), 0);
        assert_eq!(c.codepoints_width(&[], None, "latest"), 0);
    }

    #[test]
    fn test_ascii_counts_characters() {
        assert_eq!(classifier().string_width("hello, world", None, "latest"), 12);
    }

    #[test]
    fn test_cjk_is_double() {
        assert_eq!(classifier().string_width("コンニチハ", None, "latest"), 10);
    }

    #[test]
    fn test_combining_marks_add_nothing() {
        assert_eq!(classifier().string_width("cafe\u{301}", None, "latest"), 4);
    }

    #[test]
    fn test_limit_bounds_prefix() {
        let c = classifier();
        assert_eq!(c.string_width("abc中文", Some(3), "latest"), 3);
        assert_eq!(c.string_width("abc中文", Some(4), "latest"), 5);
        assert_eq!(c.string_width("abc中文", Some(100), "latest"), 7);
    }

    #[test]
    fn test_control_short_circuits() {
        let c = classifier();
        assert_eq!(c.string_width("abc\x1bdef", None, "latest"), -1);
        assert_eq!(c.string_width("\u{7f}", None, "latest"), -1);
        assert_eq!(c.string_width("\u{85}中文", None, "latest"), -1);
    }

    #[test]
    fn test_control_beyond_limit_is_ignored() {
        assert_eq!(classifier().string_width("ab\ncd", Some(2), "latest"), 2);
    }

    #[test]
    fn test_zwj_sequence_is_one_unit() {
        // WOMAN, ZWJ, LAPTOP
        let text = "\u{1f469}\u{200d}\u{1f4bb}";
        assert_eq!(classifier().string_width(text, None, "latest"), 2);
    }

    #[test]
    fn test_family_sequence_is_one_unit() {
        let text = "\u{1f468}\u{200d}\u{1f469}\u{200d}\u{1f467}\u{200d}\u{1f466}";
        assert_eq!(classifier().string_width(text, None, "latest"), 2);
    }

    #[test]
    fn test_emoji_with_skin_tone_and_selector() {
        let text = "\u{1f44d}\u{1f3fd}\u{fe0f}";
        assert_eq!(classifier().string_width(text, None, "latest"), 2);
    }

    #[test]
    fn test_adjacent_emoji_merge() {
        // Emoji-block characters continue a cluster even without a joiner
        assert_eq!(
            classifier().string_width("\u{1f600}\u{1f600}", None, "latest"),
            2
        );
    }

    #[test]
    fn test_cluster_then_text() {
        let text = "\u{1f469}\u{200d}\u{1f4bb} ok";
        assert_eq!(classifier().string_width(text, None, "latest"), 5);
    }

    #[test]
    fn test_limit_cuts_cluster() {
        let c = classifier();
        let text = "\u{1f469}\u{200d}\u{1f4bb}x";
        assert_eq!(c.string_width(text, Some(1), "latest"), 2);
        assert_eq!(c.string_width(text, Some(4), "latest"), 3);
    }

    #[test]
    fn test_leading_zwj_is_zero() {
        assert_eq!(classifier().string_width("\u{200d}a", None, "latest"), 1);
    }

    #[test]
    fn test_codepoints_match_string() {
        let c = classifier();
        let text = "a\u{4e00}\u{301}\u{1f600}";
        let cps: Vec<u32> = text.chars().map(u32::from).collect();
        assert_eq!(
            c.codepoints_width(&cps, None, "latest"),
            c.string_width(text, None, "latest")
        );
    }

    #[test]
    fn test_prefix_widths_never_decrease() {
        let c = classifier();
        let text = "a中\u{301}b\u{1f469}\u{200d}\u{1f4bb}\u{ff21}z";
        let len = text.chars().count();
        let mut previous = 0;
        for k in 0..=len {
            let width = c.string_width(text, Some(k), "latest");
            assert!(width >= previous, "k = {}", k);
            previous = width;
        }
        assert_eq!(previous, 1 + 2 + 0 + 1 + 2 + 2 + 1);
    }

    #[test]
    fn test_version_changes_string_width() {
        // WATCH became wide in Unicode 9.0
        let c = classifier();
        assert_eq!(c.string_width("\u{231a}", None, "5.2.0"), 1);
        assert_eq!(c.string_width("\u{231a}", None, "9.0.0"), 2);
    }
}
