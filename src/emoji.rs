//! Fixed code point sets for emoji and presentation handling
//!
//! These do not vary with the Unicode table version.

use crate::interval::{bisearch, Interval};
use crate::version::UnicodeVersion;

/// Zero width joiner
pub const ZWJ: u32 = 0x200d;

/// Supplementary symbol planes holding emoji, always two cells wide
pub const EMOJI_BLOCK: Interval = Interval::new(0x1f000, 0x1ffff);

/// Variation selectors 1 through 16
pub const VARIATION_SELECTORS: Interval = Interval::new(0xfe00, 0xfe0f);

/// FEMALE SIGN and MALE SIGN
pub const GENDER_SIGNS: [u32; 2] = [0x2640, 0x2642];

/// First version in which the gender signs render as emoji
pub const GENDER_SIGN_EMOJI_SINCE: UnicodeVersion = UnicodeVersion::new(9, 0, 0);

/// Format controls and separators with no visible effect
#[rustfmt::skip]
pub const ZERO_WIDTH_CONTROLS: &[Interval] = &[
    Interval::new(0x00000, 0x00000), // Null
    Interval::new(0x0034f, 0x0034f), // Combining Grapheme Joiner
    Interval::new(0x0200b, 0x0200f), // Zero Width Space        ..Right-to-left Mark
    Interval::new(0x02028, 0x0202e), // Line Separator          ..Right-to-left Override
    Interval::new(0x02060, 0x02063), // Word Joiner             ..Invisible Separator
];

/// Text-default characters that take emoji presentation (two cells) with VS16.
///
/// Keycap bases and the gender signs are left out; keycaps also need U+20E3 and
/// the gender signs are decided by version.
#[rustfmt::skip]
pub const VS16_NARROW_TO_WIDE: &[Interval] = &[
    Interval::new(0x000a9, 0x000a9), // Copyright Sign
    Interval::new(0x000ae, 0x000ae), // Registered Sign
    Interval::new(0x0203c, 0x0203c), // Double Exclamation Mark
    Interval::new(0x02049, 0x02049), // Exclamation Question Mark
    Interval::new(0x02122, 0x02122), // Trade Mark Sign
    Interval::new(0x02139, 0x02139), // Information Source
    Interval::new(0x02194, 0x02199), // Left Right Arrow        ..South West Arrow
    Interval::new(0x021a9, 0x021aa), // Leftwards Arrow With Hoo..Rightwards Arrow With Ho
    Interval::new(0x02328, 0x02328), // Keyboard
    Interval::new(0x023cf, 0x023cf), // Eject Symbol
    Interval::new(0x023ed, 0x023ef), // Black Right-pointing Dou..Black Right-pointing Tri
    Interval::new(0x023f1, 0x023f2), // Stopwatch               ..Timer Clock
    Interval::new(0x023f8, 0x023fa), // Double Vertical Bar     ..Black Circle For Record
    Interval::new(0x024c2, 0x024c2), // Circled Latin Capital Letter M
    Interval::new(0x025aa, 0x025ab), // Black Small Square      ..White Small Square
    Interval::new(0x025b6, 0x025b6), // Black Right-pointing Triangle
    Interval::new(0x025c0, 0x025c0), // Black Left-pointing Triangle
    Interval::new(0x025fb, 0x025fc), // White Medium Square     ..Black Medium Square
    Interval::new(0x02600, 0x02604), // Black Sun With Rays     ..Comet
    Interval::new(0x0260e, 0x0260e), // Black Telephone
    Interval::new(0x02611, 0x02611), // Ballot Box With Check
    Interval::new(0x02618, 0x02618), // Shamrock
    Interval::new(0x0261d, 0x0261d), // White Up Pointing Index
    Interval::new(0x02620, 0x02620), // Skull And Crossbones
    Interval::new(0x02622, 0x02623), // Radioactive Sign        ..Biohazard Sign
    Interval::new(0x02626, 0x02626), // Orthodox Cross
    Interval::new(0x0262a, 0x0262a), // Star And Crescent
    Interval::new(0x0262e, 0x0262f), // Peace Symbol            ..Yin Yang
    Interval::new(0x02638, 0x0263a), // Wheel Of Dharma         ..White Smiling Face
    Interval::new(0x0265f, 0x02660), // Black Chess Pawn        ..Black Spade Suit
    Interval::new(0x02663, 0x02663), // Black Club Suit
    Interval::new(0x02665, 0x02666), // Black Heart Suit        ..Black Diamond Suit
    Interval::new(0x02668, 0x02668), // Hot Springs
    Interval::new(0x0267b, 0x0267b), // Black Universal Recycling Symbol
    Interval::new(0x0267e, 0x0267e), // Permanent Paper Sign
    Interval::new(0x02692, 0x02692), // Hammer And Pick
    Interval::new(0x02694, 0x02697), // Crossed Swords          ..Alembic
    Interval::new(0x02699, 0x02699), // Gear
    Interval::new(0x0269b, 0x0269c), // Atom Symbol             ..Fleur-de-lis
    Interval::new(0x026a0, 0x026a0), // Warning Sign
    Interval::new(0x026a7, 0x026a7), // Male With Stroke And Male And Female Sign
    Interval::new(0x026b0, 0x026b1), // Coffin                  ..Funeral Urn
    Interval::new(0x026c8, 0x026c8), // Thunder Cloud And Rain
    Interval::new(0x026cf, 0x026cf), // Pick
    Interval::new(0x026d1, 0x026d1), // Helmet With White Cross
    Interval::new(0x026d3, 0x026d3), // Chains
    Interval::new(0x026e9, 0x026e9), // Shinto Shrine
    Interval::new(0x026f0, 0x026f1), // Mountain                ..Umbrella On Ground
    Interval::new(0x026f4, 0x026f4), // Ferry
    Interval::new(0x026f7, 0x026f9), // Skier                   ..Person With Ball
    Interval::new(0x02702, 0x02702), // Black Scissors
    Interval::new(0x02708, 0x02709), // Airplane                ..Envelope
    Interval::new(0x0270c, 0x0270d), // Victory Hand            ..Writing Hand
    Interval::new(0x0270f, 0x0270f), // Pencil
    Interval::new(0x02712, 0x02712), // Black Nib
    Interval::new(0x02714, 0x02714), // Heavy Check Mark
    Interval::new(0x02716, 0x02716), // Heavy Multiplication X
    Interval::new(0x0271d, 0x0271d), // Latin Cross
    Interval::new(0x02721, 0x02721), // Star Of David
    Interval::new(0x02733, 0x02734), // Eight Spoked Asterisk   ..Eight Pointed Black Star
    Interval::new(0x02744, 0x02744), // Snowflake
    Interval::new(0x02747, 0x02747), // Sparkle
    Interval::new(0x02763, 0x02764), // Heavy Heart Exclamation ..Heavy Black Heart
    Interval::new(0x027a1, 0x027a1), // Black Rightwards Arrow
    Interval::new(0x02934, 0x02935), // Arrow Pointing Rightward..Arrow Pointing Rightward
    Interval::new(0x02b05, 0x02b07), // Leftwards Black Arrow   ..Downwards Black Arrow
];

pub fn is_emoji_block(cp: u32) -> bool {
    EMOJI_BLOCK.contains(cp)
}

pub fn is_variation_selector(cp: u32) -> bool {
    VARIATION_SELECTORS.contains(cp)
}

pub fn is_zero_width_control(cp: u32) -> bool {
    bisearch(cp, ZERO_WIDTH_CONTROLS)
}

pub fn is_vs16_narrow_to_wide(cp: u32) -> bool {
    bisearch(cp, VS16_NARROW_TO_WIDE)
}

/// Whether `cp` may continue an emoji cluster started by an emoji-block character
pub fn continues_emoji_cluster(cp: u32) -> bool {
    cp == ZWJ || is_emoji_block(cp) || is_variation_selector(cp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Table;

    #[test]
    fn test_fixed_tables_are_sorted() {
        assert_eq!(Table::from_static(ZERO_WIDTH_CONTROLS).validate(), Ok(()));
        assert_eq!(Table::from_static(VS16_NARROW_TO_WIDE).validate(), Ok(()));
    }

    #[test]
    fn test_vs16_set_excludes_keycaps_and_gender_signs() {
        for cp in ['#', '*', '0', '5', '9'] {
            assert!(!is_vs16_narrow_to_wide(cp as u32), "{:?}", cp);
        }
        for cp in GENDER_SIGNS {
            assert!(!is_vs16_narrow_to_wide(cp));
        }
        assert!(is_vs16_narrow_to_wide(0x2764));
        assert!(is_vs16_narrow_to_wide(0x00a9));
    }

    #[test]
    fn test_emoji_block_bounds() {
        assert!(!is_emoji_block(0x1efff));
        assert!(is_emoji_block(0x1f000));
        assert!(is_emoji_block(0x1f600));
        assert!(is_emoji_block(0x1ffff));
        assert!(!is_emoji_block(0x20000));
    }

    #[test]
    fn test_cluster_continuation() {
        assert!(continues_emoji_cluster(ZWJ));
        assert!(continues_emoji_cluster(0xfe0f));
        assert!(continues_emoji_cluster(0x1f3fb));
        assert!(!continues_emoji_cluster('a' as u32));
        assert!(!continues_emoji_cluster(0x20e3));
    }

    #[test]
    fn test_zero_width_controls() {
        assert!(is_zero_width_control(0));
        assert!(is_zero_width_control(ZWJ));
        assert!(is_zero_width_control(0x2029));
        assert!(!is_zero_width_control(0x00ad));
        assert!(!is_zero_width_control(0x2064));
    }
}
