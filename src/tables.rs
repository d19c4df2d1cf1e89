//! Generated by scripts/update_tables.py. Do not edit by hand.
//!
//! Zero-width ranges are general categories Mn and Me; wide ranges are
//! East Asian Width classes W and F.

use crate::interval::Interval;
use crate::version::UnicodeVersion;

/// Unicode versions carried by the built-in tables, ascending.
pub(crate) static VERSIONS: &[(UnicodeVersion, &[Interval], &[Interval])] = &[
    (UnicodeVersion::new(3, 2, 0), ZERO_WIDTH_3_2_0, WIDE_3_2_0),
    (UnicodeVersion::new(5, 2, 0), ZERO_WIDTH_5_2_0, WIDE_5_2_0),
    (UnicodeVersion::new(9, 0, 0), ZERO_WIDTH_9_0_0, WIDE_9_0_0),
    (UnicodeVersion::new(11, 0, 0), ZERO_WIDTH_11_0_0, WIDE_11_0_0),
    (UnicodeVersion::new(12, 1, 0), ZERO_WIDTH_12_1_0, WIDE_12_1_0),
    (UnicodeVersion::new(13, 0, 0), ZERO_WIDTH_13_0_0, WIDE_13_0_0),
    (UnicodeVersion::new(14, 0, 0), ZERO_WIDTH_14_0_0, WIDE_14_0_0),
    (UnicodeVersion::new(15, 0, 0), ZERO_WIDTH_15_0_0, WIDE_15_0_0),
    (UnicodeVersion::new(15, 1, 0), ZERO_WIDTH_15_1_0, WIDE_15_1_0),
];

#[rustfmt::skip]
static ZERO_WIDTH_3_2_0: &[Interval] = &[
    Interval::new(0x00300, 0x0034f),
    Interval::new(0x00360, 0x0036f),
    Interval::new(0x00483, 0x00486),
    Interval::new(0x00488, 0x00489),
    Interval::new(0x00591, 0x005a1),
    Interval::new(0x005a3, 0x005b9),
    Interval::new(0x005bb, 0x005bd),
    Interval::new(0x005bf, 0x005bf),
    Interval::new(0x005c1, 0x005c2),
    Interval::new(0x005c4, 0x005c4),
    Interval::new(0x0064b, 0x00655),
    Interval::new(0x00670, 0x00670),
    Interval::new(0x006d6, 0x006dc),
    Interval::new(0x006de, 0x006e4),
    Interval::new(0x006e7, 0x006e8),
    Interval::new(0x006ea, 0x006ed),
    Interval::new(0x00711, 0x00711),
    Interval::new(0x00730, 0x0074a),
    Interval::new(0x007a6, 0x007b0),
    Interval::new(0x00901, 0x00902),
    Interval::new(0x0093c, 0x0093c),
    Interval::new(0x00941, 0x00948),
    Interval::new(0x0094d, 0x0094d),
    Interval::new(0x00951, 0x00954),
    Interval::new(0x00962, 0x00963),
    Interval::new(0x00981, 0x00981),
    Interval::new(0x009bc, 0x009bc),
    Interval::new(0x009c1, 0x009c4),
    Interval::new(0x009cd, 0x009cd),
    Interval::new(0x009e2, 0x009e3),
    Interval::new(0x00a02, 0x00a02),
    Interval::new(0x00a3c, 0x00a3c),
    Interval::new(0x00a41, 0x00a42),
    Interval::new(0x00a47, 0x00a48),
    Interval::new(0x00a4b, 0x00a4d),
    Interval::new(0x00a70, 0x00a71),
    Interval::new(0x00a81, 0x00a82),
    Interval::new(0x00abc, 0x00abc),
    Interval::new(0x00ac1, 0x00ac5),
    Interval::new(0x00ac7, 0x00ac8),
    Interval::new(0x00acd, 0x00acd),
    Interval::new(0x00b01, 0x00b01),
    Interval::new(0x00b3c, 0x00b3c),
    Interval::new(0x00b3f, 0x00b3f),
    Interval::new(0x00b41, 0x00b43),
    Interval::new(0x00b4d, 0x00b4d),
    Interval::new(0x00b56, 0x00b56),
    Interval::new(0x00b82, 0x00b82),
    Interval::new(0x00bc0, 0x00bc0),
    Interval::new(0x00bcd, 0x00bcd),
    Interval::new(0x00c3e, 0x00c40),
    Interval::new(0x00c46, 0x00c48),
    Interval::new(0x00c4a, 0x00c4d),
    Interval::new(0x00c55, 0x00c56),
    Interval::new(0x00cbf, 0x00cbf),
    Interval::new(0x00cc6, 0x00cc6),
    Interval::new(0x00ccc, 0x00ccd),
    Interval::new(0x00d41, 0x00d43),
    Interval::new(0x00d4d, 0x00d4d),
    Interval::new(0x00dca, 0x00dca),
    Interval::new(0x00dd2, 0x00dd4),
    Interval::new(0x00dd6, 0x00dd6),
    Interval::new(0x00e31, 0x00e31),
    Interval::new(0x00e34, 0x00e3a),
    Interval::new(0x00e47, 0x00e4e),
    Interval::new(0x00eb1, 0x00eb1),
    Interval::new(0x00eb4, 0x00eb9),
    Interval::new(0x00ebb, 0x00ebc),
    Interval::new(0x00ec8, 0x00ecd),
    Interval::new(0x00f18, 0x00f19),
    Interval::new(0x00f35, 0x00f35),
    Interval::new(0x00f37, 0x00f37),
    Interval::new(0x00f39, 0x00f39),
    Interval::new(0x00f71, 0x00f7e),
    Interval::new(0x00f80, 0x00f84),
    Interval::new(0x00f86, 0x00f87),
    Interval::new(0x00f90, 0x00f97),
    Interval::new(0x00f99, 0x00fbc),
    Interval::new(0x00fc6, 0x00fc6),
    Interval::new(0x0102d, 0x01030),
    Interval::new(0x01032, 0x01032),
    Interval::new(0x01036, 0x01037),
    Interval::new(0x01039, 0x01039),
    Interval::new(0x01058, 0x01059),
    Interval::new(0x01712, 0x01714),
    Interval::new(0x01732, 0x01734),
    Interval::new(0x01752, 0x01753),
    Interval::new(0x01772, 0x01773),
    Interval::new(0x017b7, 0x017bd),
    Interval::new(0x017c6, 0x017c6),
    Interval::new(0x017c9, 0x017d3),
    Interval::new(0x0180b, 0x0180d),
    Interval::new(0x018a9, 0x018a9),
    Interval::new(0x020d0, 0x020ea),
    Interval::new(0x0302a, 0x0302f),
    Interval::new(0x03099, 0x0309a),
    Interval::new(0x0fb1e, 0x0fb1e),
    Interval::new(0x0fe00, 0x0fe0f),
    Interval::new(0x0fe20, 0x0fe23),
    Interval::new(0x1d167, 0x1d169),
    Interval::new(0x1d17b, 0x1d182),
    Interval::new(0x1d185, 0x1d18b),
    Interval::new(0x1d1aa, 0x1d1ad),
];

#[rustfmt::skip]
static WIDE_3_2_0: &[Interval] = &[
    Interval::new(0x01100, 0x01159),
    Interval::new(0x0115f, 0x0115f),
    Interval::new(0x02329, 0x0232a),
    Interval::new(0x02e80, 0x02e99),
    Interval::new(0x02e9b, 0x02ef3),
    Interval::new(0x02f00, 0x02fd5),
    Interval::new(0x02ff0, 0x02ffb),
    Interval::new(0x03000, 0x0303e),
    Interval::new(0x03041, 0x03096),
    Interval::new(0x03099, 0x030ff),
    Interval::new(0x03105, 0x0312c),
    Interval::new(0x03131, 0x0318e),
    Interval::new(0x03190, 0x031b7),
    Interval::new(0x031f0, 0x0321c),
    Interval::new(0x03220, 0x03243),
    Interval::new(0x03251, 0x0327b),
    Interval::new(0x0327f, 0x032cb),
    Interval::new(0x032d0, 0x032fe),
    Interval::new(0x03300, 0x03376),
    Interval::new(0x0337b, 0x033dd),
    Interval::new(0x033e0, 0x033fe),
    Interval::new(0x03400, 0x04dbf),
    Interval::new(0x04e00, 0x0a48c),
    Interval::new(0x0a490, 0x0a4c6),
    Interval::new(0x0ac00, 0x0d7a3),
    Interval::new(0x0f900, 0x0faff),
    Interval::new(0x0fe30, 0x0fe46),
    Interval::new(0x0fe49, 0x0fe52),
    Interval::new(0x0fe54, 0x0fe66),
    Interval::new(0x0fe68, 0x0fe6b),
    Interval::new(0x0ff01, 0x0ff60),
    Interval::new(0x0ffe0, 0x0ffe6),
    Interval::new(0x20000, 0x2fffd),
    Interval::new(0x30000, 0x3fffd),
];

#[rustfmt::skip]
static ZERO_WIDTH_5_2_0: &[Interval] = &[
    Interval::new(0x00300, 0x0036f),
    Interval::new(0x00483, 0x00489),
    Interval::new(0x00591, 0x005bd),
    Interval::new(0x005bf, 0x005bf),
    Interval::new(0x005c1, 0x005c2),
    Interval::new(0x005c4, 0x005c5),
    Interval::new(0x005c7, 0x005c7),
    Interval::new(0x00610, 0x0061a),
    Interval::new(0x0064b, 0x0065e),
    Interval::new(0x00670, 0x00670),
    Interval::new(0x006d6, 0x006dc),
    Interval::new(0x006de, 0x006e4),
    Interval::new(0x006e7, 0x006e8),
    Interval::new(0x006ea, 0x006ed),
    Interval::new(0x00711, 0x00711),
    Interval::new(0x00730, 0x0074a),
    Interval::new(0x007a6, 0x007b0),
    Interval::new(0x007eb, 0x007f3),
    Interval::new(0x00816, 0x00819),
    Interval::new(0x0081b, 0x00823),
    Interval::new(0x00825, 0x00827),
    Interval::new(0x00829, 0x0082d),
    Interval::new(0x00900, 0x00902),
    Interval::new(0x0093c, 0x0093c),
    Interval::new(0x00941, 0x00948),
    Interval::new(0x0094d, 0x0094d),
    Interval::new(0x00951, 0x00955),
    Interval::new(0x00962, 0x00963),
    Interval::new(0x00981, 0x00981),
    Interval::new(0x009bc, 0x009bc),
    Interval::new(0x009c1, 0x009c4),
    Interval::new(0x009cd, 0x009cd),
    Interval::new(0x009e2, 0x009e3),
    Interval::new(0x00a01, 0x00a02),
    Interval::new(0x00a3c, 0x00a3c),
    Interval::new(0x00a41, 0x00a42),
    Interval::new(0x00a47, 0x00a48),
    Interval::new(0x00a4b, 0x00a4d),
    Interval::new(0x00a51, 0x00a51),
    Interval::new(0x00a70, 0x00a71),
    Interval::new(0x00a75, 0x00a75),
    Interval::new(0x00a81, 0x00a82),
    Interval::new(0x00abc, 0x00abc),
    Interval::new(0x00ac1, 0x00ac5),
    Interval::new(0x00ac7, 0x00ac8),
    Interval::new(0x00acd, 0x00acd),
    Interval::new(0x00ae2, 0x00ae3),
    Interval::new(0x00b01, 0x00b01),
    Interval::new(0x00b3c, 0x00b3c),
    Interval::new(0x00b3f, 0x00b3f),
    Interval::new(0x00b41, 0x00b44),
    Interval::new(0x00b4d, 0x00b4d),
    Interval::new(0x00b56, 0x00b56),
    Interval::new(0x00b62, 0x00b63),
    Interval::new(0x00b82, 0x00b82),
    Interval::new(0x00bc0, 0x00bc0),
    Interval::new(0x00bcd, 0x00bcd),
    Interval::new(0x00c3e, 0x00c40),
    Interval::new(0x00c46, 0x00c48),
    Interval::new(0x00c4a, 0x00c4d),
    Interval::new(0x00c55, 0x00c56),
    Interval::new(0x00c62, 0x00c63),
    Interval::new(0x00cbc, 0x00cbc),
    Interval::new(0x00cbf, 0x00cbf),
    Interval::new(0x00cc6, 0x00cc6),
    Interval::new(0x00ccc, 0x00ccd),
    Interval::new(0x00ce2, 0x00ce3),
    Interval::new(0x00d41, 0x00d44),
    Interval::new(0x00d4d, 0x00d4d),
    Interval::new(0x00d62, 0x00d63),
    Interval::new(0x00dca, 0x00dca),
    Interval::new(0x00dd2, 0x00dd4),
    Interval::new(0x00dd6, 0x00dd6),
    Interval::new(0x00e31, 0x00e31),
    Interval::new(0x00e34, 0x00e3a),
    Interval::new(0x00e47, 0x00e4e),
    Interval::new(0x00eb1, 0x00eb1),
    Interval::new(0x00eb4, 0x00eb9),
    Interval::new(0x00ebb, 0x00ebc),
    Interval::new(0x00ec8, 0x00ecd),
    Interval::new(0x00f18, 0x00f19),
    Interval::new(0x00f35, 0x00f35),
    Interval::new(0x00f37, 0x00f37),
    Interval::new(0x00f39, 0x00f39),
    Interval::new(0x00f71, 0x00f7e),
    Interval::new(0x00f80, 0x00f84),
    Interval::new(0x00f86, 0x00f87),
    Interval::new(0x00f90, 0x00f97),
    Interval::new(0x00f99, 0x00fbc),
    Interval::new(0x00fc6, 0x00fc6),
    Interval::new(0x0102d, 0x01030),
    Interval::new(0x01032, 0x01037),
    Interval::new(0x01039, 0x0103a),
    Interval::new(0x0103d, 0x0103e),
    Interval::new(0x01058, 0x01059),
    Interval::new(0x0105e, 0x01060),
    Interval::new(0x01071, 0x01074),
    Interval::new(0x01082, 0x01082),
    Interval::new(0x01085, 0x01086),
    Interval::new(0x0108d, 0x0108d),
    Interval::new(0x0109d, 0x0109d),
    Interval::new(0x0135f, 0x0135f),
    Interval::new(0x01712, 0x01714),
    Interval::new(0x01732, 0x01734),
    Interval::new(0x01752, 0x01753),
    Interval::new(0x01772, 0x01773),
    Interval::new(0x017b7, 0x017bd),
    Interval::new(0x017c6, 0x017c6),
    Interval::new(0x017c9, 0x017d3),
    Interval::new(0x017dd, 0x017dd),
    Interval::new(0x0180b, 0x0180d),
    Interval::new(0x018a9, 0x018a9),
    Interval::new(0x01920, 0x01922),
    Interval::new(0x01927, 0x01928),
    Interval::new(0x01932, 0x01932),
    Interval::new(0x01939, 0x0193b),
    Interval::new(0x01a17, 0x01a18),
    Interval::new(0x01a56, 0x01a56),
    Interval::new(0x01a58, 0x01a5e),
    Interval::new(0x01a60, 0x01a60),
    Interval::new(0x01a62, 0x01a62),
    Interval::new(0x01a65, 0x01a6c),
    Interval::new(0x01a73, 0x01a7c),
    Interval::new(0x01a7f, 0x01a7f),
    Interval::new(0x01b00, 0x01b03),
    Interval::new(0x01b34, 0x01b34),
    Interval::new(0x01b36, 0x01b3a),
    Interval::new(0x01b3c, 0x01b3c),
    Interval::new(0x01b42, 0x01b42),
    Interval::new(0x01b6b, 0x01b73),
    Interval::new(0x01b80, 0x01b81),
    Interval::new(0x01ba2, 0x01ba5),
    Interval::new(0x01ba8, 0x01ba9),
    Interval::new(0x01c2c, 0x01c33),
    Interval::new(0x01c36, 0x01c37),
    Interval::new(0x01cd0, 0x01cd2),
    Interval::new(0x01cd4, 0x01ce0),
    Interval::new(0x01ce2, 0x01ce8),
    Interval::new(0x01ced, 0x01ced),
    Interval::new(0x01dc0, 0x01de6),
    Interval::new(0x01dfd, 0x01dff),
    Interval::new(0x020d0, 0x020f0),
    Interval::new(0x02cef, 0x02cf1),
    Interval::new(0x02de0, 0x02dff),
    Interval::new(0x0302a, 0x0302f),
    Interval::new(0x03099, 0x0309a),
    Interval::new(0x0a66f, 0x0a672),
    Interval::new(0x0a67c, 0x0a67d),
    Interval::new(0x0a6f0, 0x0a6f1),
    Interval::new(0x0a802, 0x0a802),
    Interval::new(0x0a806, 0x0a806),
    Interval::new(0x0a80b, 0x0a80b),
    Interval::new(0x0a825, 0x0a826),
    Interval::new(0x0a8c4, 0x0a8c4),
    Interval::new(0x0a8e0, 0x0a8f1),
    Interval::new(0x0a926, 0x0a92d),
    Interval::new(0x0a947, 0x0a951),
    Interval::new(0x0a980, 0x0a982),
    Interval::new(0x0a9b3, 0x0a9b3),
    Interval::new(0x0a9b6, 0x0a9b9),
    Interval::new(0x0a9bc, 0x0a9bc),
    Interval::new(0x0aa29, 0x0aa2e),
    Interval::new(0x0aa31, 0x0aa32),
    Interval::new(0x0aa35, 0x0aa36),
    Interval::new(0x0aa43, 0x0aa43),
    Interval::new(0x0aa4c, 0x0aa4c),
    Interval::new(0x0aab0, 0x0aab0),
    Interval::new(0x0aab2, 0x0aab4),
    Interval::new(0x0aab7, 0x0aab8),
    Interval::new(0x0aabe, 0x0aabf),
    Interval::new(0x0aac1, 0x0aac1),
    Interval::new(0x0abe5, 0x0abe5),
    Interval::new(0x0abe8, 0x0abe8),
    Interval::new(0x0abed, 0x0abed),
    Interval::new(0x0fb1e, 0x0fb1e),
    Interval::new(0x0fe00, 0x0fe0f),
    Interval::new(0x0fe20, 0x0fe26),
    Interval::new(0x101fd, 0x101fd),
    Interval::new(0x10a01, 0x10a03),
    Interval::new(0x10a05, 0x10a06),
    Interval::new(0x10a0c, 0x10a0f),
    Interval::new(0x10a38, 0x10a3a),
    Interval::new(0x10a3f, 0x10a3f),
    Interval::new(0x11080, 0x11081),
    Interval::new(0x110b3, 0x110b6),
    Interval::new(0x110b9, 0x110ba),
    Interval::new(0x1d167, 0x1d169),
    Interval::new(0x1d17b, 0x1d182),
    Interval::new(0x1d185, 0x1d18b),
    Interval::new(0x1d1aa, 0x1d1ad),
    Interval::new(0x1d242, 0x1d244),
    Interval::new(0xe0100, 0xe01ef),
];

#[rustfmt::skip]
static WIDE_5_2_0: &[Interval] = &[
    Interval::new(0x01100, 0x0115f),
    Interval::new(0x011a3, 0x011a7),
    Interval::new(0x011fa, 0x011ff),
    Interval::new(0x02329, 0x0232a),
    Interval::new(0x02e80, 0x02e99),
    Interval::new(0x02e9b, 0x02ef3),
    Interval::new(0x02f00, 0x02fd5),
    Interval::new(0x02ff0, 0x02ffb),
    Interval::new(0x03000, 0x0303e),
    Interval::new(0x03041, 0x03096),
    Interval::new(0x03099, 0x030ff),
    Interval::new(0x03105, 0x0312d),
    Interval::new(0x03131, 0x0318e),
    Interval::new(0x03190, 0x031b7),
    Interval::new(0x031c0, 0x031e3),
    Interval::new(0x031f0, 0x0321e),
    Interval::new(0x03220, 0x03247),
    Interval::new(0x03250, 0x032fe),
    Interval::new(0x03300, 0x04dbf),
    Interval::new(0x04e00, 0x0a48c),
    Interval::new(0x0a490, 0x0a4c6),
    Interval::new(0x0a960, 0x0a97c),
    Interval::new(0x0ac00, 0x0d7a3),
    Interval::new(0x0d7b0, 0x0d7c6),
    Interval::new(0x0d7cb, 0x0d7fb),
    Interval::new(0x0f900, 0x0faff),
    Interval::new(0x0fe10, 0x0fe19),
    Interval::new(0x0fe30, 0x0fe52),
    Interval::new(0x0fe54, 0x0fe66),
    Interval::new(0x0fe68, 0x0fe6b),
    Interval::new(0x0ff01, 0x0ff60),
    Interval::new(0x0ffe0, 0x0ffe6),
    Interval::new(0x1f200, 0x1f200),
    Interval::new(0x1f210, 0x1f231),
    Interval::new(0x1f240, 0x1f248),
    Interval::new(0x20000, 0x2fffd),
    Interval::new(0x30000, 0x3fffd),
];

#[rustfmt::skip]
static ZERO_WIDTH_9_0_0: &[Interval] = &[
    Interval::new(0x00300, 0x0036f),
    Interval::new(0x00483, 0x00489),
    Interval::new(0x00591, 0x005bd),
    Interval::new(0x005bf, 0x005bf),
    Interval::new(0x005c1, 0x005c2),
    Interval::new(0x005c4, 0x005c5),
    Interval::new(0x005c7, 0x005c7),
    Interval::new(0x00610, 0x0061a),
    Interval::new(0x0064b, 0x0065f),
    Interval::new(0x00670, 0x00670),
    Interval::new(0x006d6, 0x006dc),
    Interval::new(0x006df, 0x006e4),
    Interval::new(0x006e7, 0x006e8),
    Interval::new(0x006ea, 0x006ed),
    Interval::new(0x00711, 0x00711),
    Interval::new(0x00730, 0x0074a),
    Interval::new(0x007a6, 0x007b0),
    Interval::new(0x007eb, 0x007f3),
    Interval::new(0x00816, 0x00819),
    Interval::new(0x0081b, 0x00823),
    Interval::new(0x00825, 0x00827),
    Interval::new(0x00829, 0x0082d),
    Interval::new(0x00859, 0x0085b),
    Interval::new(0x008d4, 0x008e1),
    Interval::new(0x008e3, 0x00902),
    Interval::new(0x0093a, 0x0093a),
    Interval::new(0x0093c, 0x0093c),
    Interval::new(0x00941, 0x00948),
    Interval::new(0x0094d, 0x0094d),
    Interval::new(0x00951, 0x00957),
    Interval::new(0x00962, 0x00963),
    Interval::new(0x00981, 0x00981),
    Interval::new(0x009bc, 0x009bc),
    Interval::new(0x009c1, 0x009c4),
    Interval::new(0x009cd, 0x009cd),
    Interval::new(0x009e2, 0x009e3),
    Interval::new(0x00a01, 0x00a02),
    Interval::new(0x00a3c, 0x00a3c),
    Interval::new(0x00a41, 0x00a42),
    Interval::new(0x00a47, 0x00a48),
    Interval::new(0x00a4b, 0x00a4d),
    Interval::new(0x00a51, 0x00a51),
    Interval::new(0x00a70, 0x00a71),
    Interval::new(0x00a75, 0x00a75),
    Interval::new(0x00a81, 0x00a82),
    Interval::new(0x00abc, 0x00abc),
    Interval::new(0x00ac1, 0x00ac5),
    Interval::new(0x00ac7, 0x00ac8),
    Interval::new(0x00acd, 0x00acd),
    Interval::new(0x00ae2, 0x00ae3),
    Interval::new(0x00b01, 0x00b01),
    Interval::new(0x00b3c, 0x00b3c),
    Interval::new(0x00b3f, 0x00b3f),
    Interval::new(0x00b41, 0x00b44),
    Interval::new(0x00b4d, 0x00b4d),
    Interval::new(0x00b56, 0x00b56),
    Interval::new(0x00b62, 0x00b63),
    Interval::new(0x00b82, 0x00b82),
    Interval::new(0x00bc0, 0x00bc0),
    Interval::new(0x00bcd, 0x00bcd),
    Interval::new(0x00c00, 0x00c00),
    Interval::new(0x00c3e, 0x00c40),
    Interval::new(0x00c46, 0x00c48),
    Interval::new(0x00c4a, 0x00c4d),
    Interval::new(0x00c55, 0x00c56),
    Interval::new(0x00c62, 0x00c63),
    Interval::new(0x00c81, 0x00c81),
    Interval::new(0x00cbc, 0x00cbc),
    Interval::new(0x00cbf, 0x00cbf),
    Interval::new(0x00cc6, 0x00cc6),
    Interval::new(0x00ccc, 0x00ccd),
    Interval::new(0x00ce2, 0x00ce3),
    Interval::new(0x00d01, 0x00d01),
    Interval::new(0x00d41, 0x00d44),
    Interval::new(0x00d4d, 0x00d4d),
    Interval::new(0x00d62, 0x00d63),
    Interval::new(0x00dca, 0x00dca),
    Interval::new(0x00dd2, 0x00dd4),
    Interval::new(0x00dd6, 0x00dd6),
    Interval::new(0x00e31, 0x00e31),
    Interval::new(0x00e34, 0x00e3a),
    Interval::new(0x00e47, 0x00e4e),
    Interval::new(0x00eb1, 0x00eb1),
    Interval::new(0x00eb4, 0x00eb9),
    Interval::new(0x00ebb, 0x00ebc),
    Interval::new(0x00ec8, 0x00ecd),
    Interval::new(0x00f18, 0x00f19),
    Interval::new(0x00f35, 0x00f35),
    Interval::new(0x00f37, 0x00f37),
    Interval::new(0x00f39, 0x00f39),
    Interval::new(0x00f71, 0x00f7e),
    Interval::new(0x00f80, 0x00f84),
    Interval::new(0x00f86, 0x00f87),
    Interval::new(0x00f8d, 0x00f97),
    Interval::new(0x00f99, 0x00fbc),
    Interval::new(0x00fc6, 0x00fc6),
    Interval::new(0x0102d, 0x01030),
    Interval::new(0x01032, 0x01037),
    Interval::new(0x01039, 0x0103a),
    Interval::new(0x0103d, 0x0103e),
    Interval::new(0x01058, 0x01059),
    Interval::new(0x0105e, 0x01060),
    Interval::new(0x01071, 0x01074),
    Interval::new(0x01082, 0x01082),
    Interval::new(0x01085, 0x01086),
    Interval::new(0x0108d, 0x0108d),
    Interval::new(0x0109d, 0x0109d),
    Interval::new(0x0135d, 0x0135f),
    Interval::new(0x01712, 0x01714),
    Interval::new(0x01732, 0x01734),
    Interval::new(0x01752, 0x01753),
    Interval::new(0x01772, 0x01773),
    Interval::new(0x017b4, 0x017b5),
    Interval::new(0x017b7, 0x017bd),
    Interval::new(0x017c6, 0x017c6),
    Interval::new(0x017c9, 0x017d3),
    Interval::new(0x017dd, 0x017dd),
    Interval::new(0x0180b, 0x0180d),
    Interval::new(0x01885, 0x01886),
    Interval::new(0x018a9, 0x018a9),
    Interval::new(0x01920, 0x01922),
    Interval::new(0x01927, 0x01928),
    Interval::new(0x01932, 0x01932),
    Interval::new(0x01939, 0x0193b),
    Interval::new(0x01a17, 0x01a18),
    Interval::new(0x01a1b, 0x01a1b),
    Interval::new(0x01a56, 0x01a56),
    Interval::new(0x01a58, 0x01a5e),
    Interval::new(0x01a60, 0x01a60),
    Interval::new(0x01a62, 0x01a62),
    Interval::new(0x01a65, 0x01a6c),
    Interval::new(0x01a73, 0x01a7c),
    Interval::new(0x01a7f, 0x01a7f),
    Interval::new(0x01ab0, 0x01abe),
    Interval::new(0x01b00, 0x01b03),
    Interval::new(0x01b34, 0x01b34),
    Interval::new(0x01b36, 0x01b3a),
    Interval::new(0x01b3c, 0x01b3c),
    Interval::new(0x01b42, 0x01b42),
    Interval::new(0x01b6b, 0x01b73),
    Interval::new(0x01b80, 0x01b81),
    Interval::new(0x01ba2, 0x01ba5),
    Interval::new(0x01ba8, 0x01ba9),
    Interval::new(0x01bab, 0x01bad),
    Interval::new(0x01be6, 0x01be6),
    Interval::new(0x01be8, 0x01be9),
    Interval::new(0x01bed, 0x01bed),
    Interval::new(0x01bef, 0x01bf1),
    Interval::new(0x01c2c, 0x01c33),
    Interval::new(0x01c36, 0x01c37),
    Interval::new(0x01cd0, 0x01cd2),
    Interval::new(0x01cd4, 0x01ce0),
    Interval::new(0x01ce2, 0x01ce8),
    Interval::new(0x01ced, 0x01ced),
    Interval::new(0x01cf4, 0x01cf4),
    Interval::new(0x01cf8, 0x01cf9),
    Interval::new(0x01dc0, 0x01df5),
    Interval::new(0x01dfb, 0x01dff),
    Interval::new(0x020d0, 0x020f0),
    Interval::new(0x02cef, 0x02cf1),
    Interval::new(0x02d7f, 0x02d7f),
    Interval::new(0x02de0, 0x02dff),
    Interval::new(0x0302a, 0x0302d),
    Interval::new(0x03099, 0x0309a),
    Interval::new(0x0a66f, 0x0a672),
    Interval::new(0x0a674, 0x0a67d),
    Interval::new(0x0a69e, 0x0a69f),
    Interval::new(0x0a6f0, 0x0a6f1),
    Interval::new(0x0a802, 0x0a802),
    Interval::new(0x0a806, 0x0a806),
    Interval::new(0x0a80b, 0x0a80b),
    Interval::new(0x0a825, 0x0a826),
    Interval::new(0x0a8c4, 0x0a8c5),
    Interval::new(0x0a8e0, 0x0a8f1),
    Interval::new(0x0a926, 0x0a92d),
    Interval::new(0x0a947, 0x0a951),
    Interval::new(0x0a980, 0x0a982),
    Interval::new(0x0a9b3, 0x0a9b3),
    Interval::new(0x0a9b6, 0x0a9b9),
    Interval::new(0x0a9bc, 0x0a9bc),
    Interval::new(0x0a9e5, 0x0a9e5),
    Interval::new(0x0aa29, 0x0aa2e),
    Interval::new(0x0aa31, 0x0aa32),
    Interval::new(0x0aa35, 0x0aa36),
    Interval::new(0x0aa43, 0x0aa43),
    Interval::new(0x0aa4c, 0x0aa4c),
    Interval::new(0x0aa7c, 0x0aa7c),
    Interval::new(0x0aab0, 0x0aab0),
    Interval::new(0x0aab2, 0x0aab4),
    Interval::new(0x0aab7, 0x0aab8),
    Interval::new(0x0aabe, 0x0aabf),
    Interval::new(0x0aac1, 0x0aac1),
    Interval::new(0x0aaec, 0x0aaed),
    Interval::new(0x0aaf6, 0x0aaf6),
    Interval::new(0x0abe5, 0x0abe5),
    Interval::new(0x0abe8, 0x0abe8),
    Interval::new(0x0abed, 0x0abed),
    Interval::new(0x0fb1e, 0x0fb1e),
    Interval::new(0x0fe00, 0x0fe0f),
    Interval::new(0x0fe20, 0x0fe2f),
    Interval::new(0x101fd, 0x101fd),
    Interval::new(0x102e0, 0x102e0),
    Interval::new(0x10376, 0x1037a),
    Interval::new(0x10a01, 0x10a03),
    Interval::new(0x10a05, 0x10a06),
    Interval::new(0x10a0c, 0x10a0f),
    Interval::new(0x10a38, 0x10a3a),
    Interval::new(0x10a3f, 0x10a3f),
    Interval::new(0x10ae5, 0x10ae6),
    Interval::new(0x11001, 0x11001),
    Interval::new(0x11038, 0x11046),
    Interval::new(0x1107f, 0x11081),
    Interval::new(0x110b3, 0x110b6),
    Interval::new(0x110b9, 0x110ba),
    Interval::new(0x11100, 0x11102),
    Interval::new(0x11127, 0x1112b),
    Interval::new(0x1112d, 0x11134),
    Interval::new(0x11173, 0x11173),
    Interval::new(0x11180, 0x11181),
    Interval::new(0x111b6, 0x111be),
    Interval::new(0x111ca, 0x111cc),
    Interval::new(0x1122f, 0x11231),
    Interval::new(0x11234, 0x11234),
    Interval::new(0x11236, 0x11237),
    Interval::new(0x1123e, 0x1123e),
    Interval::new(0x112df, 0x112df),
    Interval::new(0x112e3, 0x112ea),
    Interval::new(0x11300, 0x11301),
    Interval::new(0x1133c, 0x1133c),
    Interval::new(0x11340, 0x11340),
    Interval::new(0x11366, 0x1136c),
    Interval::new(0x11370, 0x11374),
    Interval::new(0x11438, 0x1143f),
    Interval::new(0x11442, 0x11444),
    Interval::new(0x11446, 0x11446),
    Interval::new(0x114b3, 0x114b8),
    Interval::new(0x114ba, 0x114ba),
    Interval::new(0x114bf, 0x114c0),
    Interval::new(0x114c2, 0x114c3),
    Interval::new(0x115b2, 0x115b5),
    Interval::new(0x115bc, 0x115bd),
    Interval::new(0x115bf, 0x115c0),
    Interval::new(0x115dc, 0x115dd),
    Interval::new(0x11633, 0x1163a),
    Interval::new(0x1163d, 0x1163d),
    Interval::new(0x1163f, 0x11640),
    Interval::new(0x116ab, 0x116ab),
    Interval::new(0x116ad, 0x116ad),
    Interval::new(0x116b0, 0x116b5),
    Interval::new(0x116b7, 0x116b7),
    Interval::new(0x1171d, 0x1171f),
    Interval::new(0x11722, 0x11725),
    Interval::new(0x11727, 0x1172b),
    Interval::new(0x11c30, 0x11c36),
    Interval::new(0x11c38, 0x11c3d),
    Interval::new(0x11c3f, 0x11c3f),
    Interval::new(0x11c92, 0x11ca7),
    Interval::new(0x11caa, 0x11cb0),
    Interval::new(0x11cb2, 0x11cb3),
    Interval::new(0x11cb5, 0x11cb6),
    Interval::new(0x16af0, 0x16af4),
    Interval::new(0x16b30, 0x16b36),
    Interval::new(0x16f8f, 0x16f92),
    Interval::new(0x1bc9d, 0x1bc9e),
    Interval::new(0x1d167, 0x1d169),
    Interval::new(0x1d17b, 0x1d182),
    Interval::new(0x1d185, 0x1d18b),
    Interval::new(0x1d1aa, 0x1d1ad),
    Interval::new(0x1d242, 0x1d244),
    Interval::new(0x1da00, 0x1da36),
    Interval::new(0x1da3b, 0x1da6c),
    Interval::new(0x1da75, 0x1da75),
    Interval::new(0x1da84, 0x1da84),
    Interval::new(0x1da9b, 0x1da9f),
    Interval::new(0x1daa1, 0x1daaf),
    Interval::new(0x1e000, 0x1e006),
    Interval::new(0x1e008, 0x1e018),
    Interval::new(0x1e01b, 0x1e021),
    Interval::new(0x1e023, 0x1e024),
    Interval::new(0x1e026, 0x1e02a),
    Interval::new(0x1e8d0, 0x1e8d6),
    Interval::new(0x1e944, 0x1e94a),
    Interval::new(0xe0100, 0xe01ef),
];

#[rustfmt::skip]
static WIDE_9_0_0: &[Interval] = &[
    Interval::new(0x01100, 0x0115f),
    Interval::new(0x0231a, 0x0231b),
    Interval::new(0x02329, 0x0232a),
    Interval::new(0x023e9, 0x023ec),
    Interval::new(0x023f0, 0x023f0),
    Interval::new(0x023f3, 0x023f3),
    Interval::new(0x025fd, 0x025fe),
    Interval::new(0x02614, 0x02615),
    Interval::new(0x02648, 0x02653),
    Interval::new(0x0267f, 0x0267f),
    Interval::new(0x02693, 0x02693),
    Interval::new(0x026a1, 0x026a1),
    Interval::new(0x026aa, 0x026ab),
    Interval::new(0x026bd, 0x026be),
    Interval::new(0x026c4, 0x026c5),
    Interval::new(0x026ce, 0x026ce),
    Interval::new(0x026d4, 0x026d4),
    Interval::new(0x026ea, 0x026ea),
    Interval::new(0x026f2, 0x026f3),
    Interval::new(0x026f5, 0x026f5),
    Interval::new(0x026fa, 0x026fa),
    Interval::new(0x026fd, 0x026fd),
    Interval::new(0x02705, 0x02705),
    Interval::new(0x0270a, 0x0270b),
    Interval::new(0x02728, 0x02728),
    Interval::new(0x0274c, 0x0274c),
    Interval::new(0x0274e, 0x0274e),
    Interval::new(0x02753, 0x02755),
    Interval::new(0x02757, 0x02757),
    Interval::new(0x02795, 0x02797),
    Interval::new(0x027b0, 0x027b0),
    Interval::new(0x027bf, 0x027bf),
    Interval::new(0x02b1b, 0x02b1c),
    Interval::new(0x02b50, 0x02b50),
    Interval::new(0x02b55, 0x02b55),
    Interval::new(0x02e80, 0x02e99),
    Interval::new(0x02e9b, 0x02ef3),
    Interval::new(0x02f00, 0x02fd5),
    Interval::new(0x02ff0, 0x02ffb),
    Interval::new(0x03000, 0x0303e),
    Interval::new(0x03041, 0x03096),
    Interval::new(0x03099, 0x030ff),
    Interval::new(0x03105, 0x0312d),
    Interval::new(0x03131, 0x0318e),
    Interval::new(0x03190, 0x031ba),
    Interval::new(0x031c0, 0x031e3),
    Interval::new(0x031f0, 0x0321e),
    Interval::new(0x03220, 0x03247),
    Interval::new(0x03250, 0x032fe),
    Interval::new(0x03300, 0x04dbf),
    Interval::new(0x04e00, 0x0a48c),
    Interval::new(0x0a490, 0x0a4c6),
    Interval::new(0x0a960, 0x0a97c),
    Interval::new(0x0ac00, 0x0d7a3),
    Interval::new(0x0f900, 0x0faff),
    Interval::new(0x0fe10, 0x0fe19),
    Interval::new(0x0fe30, 0x0fe52),
    Interval::new(0x0fe54, 0x0fe66),
    Interval::new(0x0fe68, 0x0fe6b),
    Interval::new(0x0ff01, 0x0ff60),
    Interval::new(0x0ffe0, 0x0ffe6),
    Interval::new(0x16fe0, 0x16fe0),
    Interval::new(0x17000, 0x187ec),
    Interval::new(0x18800, 0x18af2),
    Interval::new(0x1b000, 0x1b001),
    Interval::new(0x1f004, 0x1f004),
    Interval::new(0x1f0cf, 0x1f0cf),
    Interval::new(0x1f18e, 0x1f18e),
    Interval::new(0x1f191, 0x1f19a),
    Interval::new(0x1f200, 0x1f202),
    Interval::new(0x1f210, 0x1f23b),
    Interval::new(0x1f240, 0x1f248),
    Interval::new(0x1f250, 0x1f251),
    Interval::new(0x1f300, 0x1f320),
    Interval::new(0x1f32d, 0x1f335),
    Interval::new(0x1f337, 0x1f37c),
    Interval::new(0x1f37e, 0x1f393),
    Interval::new(0x1f3a0, 0x1f3ca),
    Interval::new(0x1f3cf, 0x1f3d3),
    Interval::new(0x1f3e0, 0x1f3f0),
    Interval::new(0x1f3f4, 0x1f3f4),
    Interval::new(0x1f3f8, 0x1f43e),
    Interval::new(0x1f440, 0x1f440),
    Interval::new(0x1f442, 0x1f4fc),
    Interval::new(0x1f4ff, 0x1f53d),
    Interval::new(0x1f54b, 0x1f54e),
    Interval::new(0x1f550, 0x1f567),
    Interval::new(0x1f57a, 0x1f57a),
    Interval::new(0x1f595, 0x1f596),
    Interval::new(0x1f5a4, 0x1f5a4),
    Interval::new(0x1f5fb, 0x1f64f),
    Interval::new(0x1f680, 0x1f6c5),
    Interval::new(0x1f6cc, 0x1f6cc),
    Interval::new(0x1f6d0, 0x1f6d2),
    Interval::new(0x1f6eb, 0x1f6ec),
    Interval::new(0x1f6f4, 0x1f6f6),
    Interval::new(0x1f910, 0x1f91e),
    Interval::new(0x1f920, 0x1f927),
    Interval::new(0x1f930, 0x1f930),
    Interval::new(0x1f933, 0x1f93e),
    Interval::new(0x1f940, 0x1f94b),
    Interval::new(0x1f950, 0x1f95e),
    Interval::new(0x1f980, 0x1f991),
    Interval::new(0x1f9c0, 0x1f9c0),
    Interval::new(0x20000, 0x2fffd),
    Interval::new(0x30000, 0x3fffd),
];

#[rustfmt::skip]
static ZERO_WIDTH_11_0_0: &[Interval] = &[
    Interval::new(0x00300, 0x0036f),
    Interval::new(0x00483, 0x00489),
    Interval::new(0x00591, 0x005bd),
    Interval::new(0x005bf, 0x005bf),
    Interval::new(0x005c1, 0x005c2),
    Interval::new(0x005c4, 0x005c5),
    Interval::new(0x005c7, 0x005c7),
    Interval::new(0x00610, 0x0061a),
    Interval::new(0x0064b, 0x0065f),
    Interval::new(0x00670, 0x00670),
    Interval::new(0x006d6, 0x006dc),
    Interval::new(0x006df, 0x006e4),
    Interval::new(0x006e7, 0x006e8),
    Interval::new(0x006ea, 0x006ed),
    Interval::new(0x00711, 0x00711),
    Interval::new(0x00730, 0x0074a),
    Interval::new(0x007a6, 0x007b0),
    Interval::new(0x007eb, 0x007f3),
    Interval::new(0x007fd, 0x007fd),
    Interval::new(0x00816, 0x00819),
    Interval::new(0x0081b, 0x00823),
    Interval::new(0x00825, 0x00827),
    Interval::new(0x00829, 0x0082d),
    Interval::new(0x00859, 0x0085b),
    Interval::new(0x008d3, 0x008e1),
    Interval::new(0x008e3, 0x00902),
    Interval::new(0x0093a, 0x0093a),
    Interval::new(0x0093c, 0x0093c),
    Interval::new(0x00941, 0x00948),
    Interval::new(0x0094d, 0x0094d),
    Interval::new(0x00951, 0x00957),
    Interval::new(0x00962, 0x00963),
    Interval::new(0x00981, 0x00981),
    Interval::new(0x009bc, 0x009bc),
    Interval::new(0x009c1, 0x009c4),
    Interval::new(0x009cd, 0x009cd),
    Interval::new(0x009e2, 0x009e3),
    Interval::new(0x009fe, 0x009fe),
    Interval::new(0x00a01, 0x00a02),
    Interval::new(0x00a3c, 0x00a3c),
    Interval::new(0x00a41, 0x00a42),
    Interval::new(0x00a47, 0x00a48),
    Interval::new(0x00a4b, 0x00a4d),
    Interval::new(0x00a51, 0x00a51),
    Interval::new(0x00a70, 0x00a71),
    Interval::new(0x00a75, 0x00a75),
    Interval::new(0x00a81, 0x00a82),
    Interval::new(0x00abc, 0x00abc),
    Interval::new(0x00ac1, 0x00ac5),
    Interval::new(0x00ac7, 0x00ac8),
    Interval::new(0x00acd, 0x00acd),
    Interval::new(0x00ae2, 0x00ae3),
    Interval::new(0x00afa, 0x00aff),
    Interval::new(0x00b01, 0x00b01),
    Interval::new(0x00b3c, 0x00b3c),
    Interval::new(0x00b3f, 0x00b3f),
    Interval::new(0x00b41, 0x00b44),
    Interval::new(0x00b4d, 0x00b4d),
    Interval::new(0x00b56, 0x00b56),
    Interval::new(0x00b62, 0x00b63),
    Interval::new(0x00b82, 0x00b82),
    Interval::new(0x00bc0, 0x00bc0),
    Interval::new(0x00bcd, 0x00bcd),
    Interval::new(0x00c00, 0x00c00),
    Interval::new(0x00c04, 0x00c04),
    Interval::new(0x00c3e, 0x00c40),
    Interval::new(0x00c46, 0x00c48),
    Interval::new(0x00c4a, 0x00c4d),
    Interval::new(0x00c55, 0x00c56),
    Interval::new(0x00c62, 0x00c63),
    Interval::new(0x00c81, 0x00c81),
    Interval::new(0x00cbc, 0x00cbc),
    Interval::new(0x00cbf, 0x00cbf),
    Interval::new(0x00cc6, 0x00cc6),
    Interval::new(0x00ccc, 0x00ccd),
    Interval::new(0x00ce2, 0x00ce3),
    Interval::new(0x00d00, 0x00d01),
    Interval::new(0x00d3b, 0x00d3c),
    Interval::new(0x00d41, 0x00d44),
    Interval::new(0x00d4d, 0x00d4d),
    Interval::new(0x00d62, 0x00d63),
    Interval::new(0x00dca, 0x00dca),
    Interval::new(0x00dd2, 0x00dd4),
    Interval::new(0x00dd6, 0x00dd6),
    Interval::new(0x00e31, 0x00e31),
    Interval::new(0x00e34, 0x00e3a),
    Interval::new(0x00e47, 0x00e4e),
    Interval::new(0x00eb1, 0x00eb1),
    Interval::new(0x00eb4, 0x00eb9),
    Interval::new(0x00ebb, 0x00ebc),
    Interval::new(0x00ec8, 0x00ecd),
    Interval::new(0x00f18, 0x00f19),
    Interval::new(0x00f35, 0x00f35),
    Interval::new(0x00f37, 0x00f37),
    Interval::new(0x00f39, 0x00f39),
    Interval::new(0x00f71, 0x00f7e),
    Interval::new(0x00f80, 0x00f84),
    Interval::new(0x00f86, 0x00f87),
    Interval::new(0x00f8d, 0x00f97),
    Interval::new(0x00f99, 0x00fbc),
    Interval::new(0x00fc6, 0x00fc6),
    Interval::new(0x0102d, 0x01030),
    Interval::new(0x01032, 0x01037),
    Interval::new(0x01039, 0x0103a),
    Interval::new(0x0103d, 0x0103e),
    Interval::new(0x01058, 0x01059),
    Interval::new(0x0105e, 0x01060),
    Interval::new(0x01071, 0x01074),
    Interval::new(0x01082, 0x01082),
    Interval::new(0x01085, 0x01086),
    Interval::new(0x0108d, 0x0108d),
    Interval::new(0x0109d, 0x0109d),
    Interval::new(0x0135d, 0x0135f),
    Interval::new(0x01712, 0x01714),
    Interval::new(0x01732, 0x01734),
    Interval::new(0x01752, 0x01753),
    Interval::new(0x01772, 0x01773),
    Interval::new(0x017b4, 0x017b5),
    Interval::new(0x017b7, 0x017bd),
    Interval::new(0x017c6, 0x017c6),
    Interval::new(0x017c9, 0x017d3),
    Interval::new(0x017dd, 0x017dd),
    Interval::new(0x0180b, 0x0180d),
    Interval::new(0x01885, 0x01886),
    Interval::new(0x018a9, 0x018a9),
    Interval::new(0x01920, 0x01922),
    Interval::new(0x01927, 0x01928),
    Interval::new(0x01932, 0x01932),
    Interval::new(0x01939, 0x0193b),
    Interval::new(0x01a17, 0x01a18),
    Interval::new(0x01a1b, 0x01a1b),
    Interval::new(0x01a56, 0x01a56),
    Interval::new(0x01a58, 0x01a5e),
    Interval::new(0x01a60, 0x01a60),
    Interval::new(0x01a62, 0x01a62),
    Interval::new(0x01a65, 0x01a6c),
    Interval::new(0x01a73, 0x01a7c),
    Interval::new(0x01a7f, 0x01a7f),
    Interval::new(0x01ab0, 0x01abe),
    Interval::new(0x01b00, 0x01b03),
    Interval::new(0x01b34, 0x01b34),
    Interval::new(0x01b36, 0x01b3a),
    Interval::new(0x01b3c, 0x01b3c),
    Interval::new(0x01b42, 0x01b42),
    Interval::new(0x01b6b, 0x01b73),
    Interval::new(0x01b80, 0x01b81),
    Interval::new(0x01ba2, 0x01ba5),
    Interval::new(0x01ba8, 0x01ba9),
    Interval::new(0x01bab, 0x01bad),
    Interval::new(0x01be6, 0x01be6),
    Interval::new(0x01be8, 0x01be9),
    Interval::new(0x01bed, 0x01bed),
    Interval::new(0x01bef, 0x01bf1),
    Interval::new(0x01c2c, 0x01c33),
    Interval::new(0x01c36, 0x01c37),
    Interval::new(0x01cd0, 0x01cd2),
    Interval::new(0x01cd4, 0x01ce0),
    Interval::new(0x01ce2, 0x01ce8),
    Interval::new(0x01ced, 0x01ced),
    Interval::new(0x01cf4, 0x01cf4),
    Interval::new(0x01cf8, 0x01cf9),
    Interval::new(0x01dc0, 0x01df9),
    Interval::new(0x01dfb, 0x01dff),
    Interval::new(0x020d0, 0x020f0),
    Interval::new(0x02cef, 0x02cf1),
    Interval::new(0x02d7f, 0x02d7f),
    Interval::new(0x02de0, 0x02dff),
    Interval::new(0x0302a, 0x0302d),
    Interval::new(0x03099, 0x0309a),
    Interval::new(0x0a66f, 0x0a672),
    Interval::new(0x0a674, 0x0a67d),
    Interval::new(0x0a69e, 0x0a69f),
    Interval::new(0x0a6f0, 0x0a6f1),
    Interval::new(0x0a802, 0x0a802),
    Interval::new(0x0a806, 0x0a806),
    Interval::new(0x0a80b, 0x0a80b),
    Interval::new(0x0a825, 0x0a826),
    Interval::new(0x0a8c4, 0x0a8c5),
    Interval::new(0x0a8e0, 0x0a8f1),
    Interval::new(0x0a8ff, 0x0a8ff),
    Interval::new(0x0a926, 0x0a92d),
    Interval::new(0x0a947, 0x0a951),
    Interval::new(0x0a980, 0x0a982),
    Interval::new(0x0a9b3, 0x0a9b3),
    Interval::new(0x0a9b6, 0x0a9b9),
    Interval::new(0x0a9bc, 0x0a9bc),
    Interval::new(0x0a9e5, 0x0a9e5),
    Interval::new(0x0aa29, 0x0aa2e),
    Interval::new(0x0aa31, 0x0aa32),
    Interval::new(0x0aa35, 0x0aa36),
    Interval::new(0x0aa43, 0x0aa43),
    Interval::new(0x0aa4c, 0x0aa4c),
    Interval::new(0x0aa7c, 0x0aa7c),
    Interval::new(0x0aab0, 0x0aab0),
    Interval::new(0x0aab2, 0x0aab4),
    Interval::new(0x0aab7, 0x0aab8),
    Interval::new(0x0aabe, 0x0aabf),
    Interval::new(0x0aac1, 0x0aac1),
    Interval::new(0x0aaec, 0x0aaed),
    Interval::new(0x0aaf6, 0x0aaf6),
    Interval::new(0x0abe5, 0x0abe5),
    Interval::new(0x0abe8, 0x0abe8),
    Interval::new(0x0abed, 0x0abed),
    Interval::new(0x0fb1e, 0x0fb1e),
    Interval::new(0x0fe00, 0x0fe0f),
    Interval::new(0x0fe20, 0x0fe2f),
    Interval::new(0x101fd, 0x101fd),
    Interval::new(0x102e0, 0x102e0),
    Interval::new(0x10376, 0x1037a),
    Interval::new(0x10a01, 0x10a03),
    Interval::new(0x10a05, 0x10a06),
    Interval::new(0x10a0c, 0x10a0f),
    Interval::new(0x10a38, 0x10a3a),
    Interval::new(0x10a3f, 0x10a3f),
    Interval::new(0x10ae5, 0x10ae6),
    Interval::new(0x10d24, 0x10d27),
    Interval::new(0x10f46, 0x10f50),
    Interval::new(0x11001, 0x11001),
    Interval::new(0x11038, 0x11046),
    Interval::new(0x1107f, 0x11081),
    Interval::new(0x110b3, 0x110b6),
    Interval::new(0x110b9, 0x110ba),
    Interval::new(0x11100, 0x11102),
    Interval::new(0x11127, 0x1112b),
    Interval::new(0x1112d, 0x11134),
    Interval::new(0x11173, 0x11173),
    Interval::new(0x11180, 0x11181),
    Interval::new(0x111b6, 0x111be),
    Interval::new(0x111c9, 0x111cc),
    Interval::new(0x1122f, 0x11231),
    Interval::new(0x11234, 0x11234),
    Interval::new(0x11236, 0x11237),
    Interval::new(0x1123e, 0x1123e),
    Interval::new(0x112df, 0x112df),
    Interval::new(0x112e3, 0x112ea),
    Interval::new(0x11300, 0x11301),
    Interval::new(0x1133b, 0x1133c),
    Interval::new(0x11340, 0x11340),
    Interval::new(0x11366, 0x1136c),
    Interval::new(0x11370, 0x11374),
    Interval::new(0x11438, 0x1143f),
    Interval::new(0x11442, 0x11444),
    Interval::new(0x11446, 0x11446),
    Interval::new(0x1145e, 0x1145e),
    Interval::new(0x114b3, 0x114b8),
    Interval::new(0x114ba, 0x114ba),
    Interval::new(0x114bf, 0x114c0),
    Interval::new(0x114c2, 0x114c3),
    Interval::new(0x115b2, 0x115b5),
    Interval::new(0x115bc, 0x115bd),
    Interval::new(0x115bf, 0x115c0),
    Interval::new(0x115dc, 0x115dd),
    Interval::new(0x11633, 0x1163a),
    Interval::new(0x1163d, 0x1163d),
    Interval::new(0x1163f, 0x11640),
    Interval::new(0x116ab, 0x116ab),
    Interval::new(0x116ad, 0x116ad),
    Interval::new(0x116b0, 0x116b5),
    Interval::new(0x116b7, 0x116b7),
    Interval::new(0x1171d, 0x1171f),
    Interval::new(0x11722, 0x11725),
    Interval::new(0x11727, 0x1172b),
    Interval::new(0x1182f, 0x11837),
    Interval::new(0x11839, 0x1183a),
    Interval::new(0x11a01, 0x11a0a),
    Interval::new(0x11a33, 0x11a38),
    Interval::new(0x11a3b, 0x11a3e),
    Interval::new(0x11a47, 0x11a47),
    Interval::new(0x11a51, 0x11a56),
    Interval::new(0x11a59, 0x11a5b),
    Interval::new(0x11a8a, 0x11a96),
    Interval::new(0x11a98, 0x11a99),
    Interval::new(0x11c30, 0x11c36),
    Interval::new(0x11c38, 0x11c3d),
    Interval::new(0x11c3f, 0x11c3f),
    Interval::new(0x11c92, 0x11ca7),
    Interval::new(0x11caa, 0x11cb0),
    Interval::new(0x11cb2, 0x11cb3),
    Interval::new(0x11cb5, 0x11cb6),
    Interval::new(0x11d31, 0x11d36),
    Interval::new(0x11d3a, 0x11d3a),
    Interval::new(0x11d3c, 0x11d3d),
    Interval::new(0x11d3f, 0x11d45),
    Interval::new(0x11d47, 0x11d47),
    Interval::new(0x11d90, 0x11d91),
    Interval::new(0x11d95, 0x11d95),
    Interval::new(0x11d97, 0x11d97),
    Interval::new(0x11ef3, 0x11ef4),
    Interval::new(0x16af0, 0x16af4),
    Interval::new(0x16b30, 0x16b36),
    Interval::new(0x16f8f, 0x16f92),
    Interval::new(0x1bc9d, 0x1bc9e),
    Interval::new(0x1d167, 0x1d169),
    Interval::new(0x1d17b, 0x1d182),
    Interval::new(0x1d185, 0x1d18b),
    Interval::new(0x1d1aa, 0x1d1ad),
    Interval::new(0x1d242, 0x1d244),
    Interval::new(0x1da00, 0x1da36),
    Interval::new(0x1da3b, 0x1da6c),
    Interval::new(0x1da75, 0x1da75),
    Interval::new(0x1da84, 0x1da84),
    Interval::new(0x1da9b, 0x1da9f),
    Interval::new(0x1daa1, 0x1daaf),
    Interval::new(0x1e000, 0x1e006),
    Interval::new(0x1e008, 0x1e018),
    Interval::new(0x1e01b, 0x1e021),
    Interval::new(0x1e023, 0x1e024),
    Interval::new(0x1e026, 0x1e02a),
    Interval::new(0x1e8d0, 0x1e8d6),
    Interval::new(0x1e944, 0x1e94a),
    Interval::new(0xe0100, 0xe01ef),
];

#[rustfmt::skip]
static WIDE_11_0_0: &[Interval] = &[
    Interval::new(0x01100, 0x0115f),
    Interval::new(0x0231a, 0x0231b),
    Interval::new(0x02329, 0x0232a),
    Interval::new(0x023e9, 0x023ec),
    Interval::new(0x023f0, 0x023f0),
    Interval::new(0x023f3, 0x023f3),
    Interval::new(0x025fd, 0x025fe),
    Interval::new(0x02614, 0x02615),
    Interval::new(0x02648, 0x02653),
    Interval::new(0x0267f, 0x0267f),
    Interval::new(0x02693, 0x02693),
    Interval::new(0x026a1, 0x026a1),
    Interval::new(0x026aa, 0x026ab),
    Interval::new(0x026bd, 0x026be),
    Interval::new(0x026c4, 0x026c5),
    Interval::new(0x026ce, 0x026ce),
    Interval::new(0x026d4, 0x026d4),
    Interval::new(0x026ea, 0x026ea),
    Interval::new(0x026f2, 0x026f3),
    Interval::new(0x026f5, 0x026f5),
    Interval::new(0x026fa, 0x026fa),
    Interval::new(0x026fd, 0x026fd),
    Interval::new(0x02705, 0x02705),
    Interval::new(0x0270a, 0x0270b),
    Interval::new(0x02728, 0x02728),
    Interval::new(0x0274c, 0x0274c),
    Interval::new(0x0274e, 0x0274e),
    Interval::new(0x02753, 0x02755),
    Interval::new(0x02757, 0x02757),
    Interval::new(0x02795, 0x02797),
    Interval::new(0x027b0, 0x027b0),
    Interval::new(0x027bf, 0x027bf),
    Interval::new(0x02b1b, 0x02b1c),
    Interval::new(0x02b50, 0x02b50),
    Interval::new(0x02b55, 0x02b55),
    Interval::new(0x02e80, 0x02e99),
    Interval::new(0x02e9b, 0x02ef3),
    Interval::new(0x02f00, 0x02fd5),
    Interval::new(0x02ff0, 0x02ffb),
    Interval::new(0x03000, 0x0303e),
    Interval::new(0x03041, 0x03096),
    Interval::new(0x03099, 0x030ff),
    Interval::new(0x03105, 0x0312f),
    Interval::new(0x03131, 0x0318e),
    Interval::new(0x03190, 0x031ba),
    Interval::new(0x031c0, 0x031e3),
    Interval::new(0x031f0, 0x0321e),
    Interval::new(0x03220, 0x03247),
    Interval::new(0x03250, 0x032fe),
    Interval::new(0x03300, 0x04dbf),
    Interval::new(0x04e00, 0x0a48c),
    Interval::new(0x0a490, 0x0a4c6),
    Interval::new(0x0a960, 0x0a97c),
    Interval::new(0x0ac00, 0x0d7a3),
    Interval::new(0x0f900, 0x0faff),
    Interval::new(0x0fe10, 0x0fe19),
    Interval::new(0x0fe30, 0x0fe52),
    Interval::new(0x0fe54, 0x0fe66),
    Interval::new(0x0fe68, 0x0fe6b),
    Interval::new(0x0ff01, 0x0ff60),
    Interval::new(0x0ffe0, 0x0ffe6),
    Interval::new(0x16fe0, 0x16fe1),
    Interval::new(0x17000, 0x187f1),
    Interval::new(0x18800, 0x18af2),
    Interval::new(0x1b000, 0x1b11e),
    Interval::new(0x1b170, 0x1b2fb),
    Interval::new(0x1f004, 0x1f004),
    Interval::new(0x1f0cf, 0x1f0cf),
    Interval::new(0x1f18e, 0x1f18e),
    Interval::new(0x1f191, 0x1f19a),
    Interval::new(0x1f200, 0x1f202),
    Interval::new(0x1f210, 0x1f23b),
    Interval::new(0x1f240, 0x1f248),
    Interval::new(0x1f250, 0x1f251),
    Interval::new(0x1f260, 0x1f265),
    Interval::new(0x1f300, 0x1f320),
    Interval::new(0x1f32d, 0x1f335),
    Interval::new(0x1f337, 0x1f37c),
    Interval::new(0x1f37e, 0x1f393),
    Interval::new(0x1f3a0, 0x1f3ca),
    Interval::new(0x1f3cf, 0x1f3d3),
    Interval::new(0x1f3e0, 0x1f3f0),
    Interval::new(0x1f3f4, 0x1f3f4),
    Interval::new(0x1f3f8, 0x1f43e),
    Interval::new(0x1f440, 0x1f440),
    Interval::new(0x1f442, 0x1f4fc),
    Interval::new(0x1f4ff, 0x1f53d),
    Interval::new(0x1f54b, 0x1f54e),
    Interval::new(0x1f550, 0x1f567),
    Interval::new(0x1f57a, 0x1f57a),
    Interval::new(0x1f595, 0x1f596),
    Interval::new(0x1f5a4, 0x1f5a4),
    Interval::new(0x1f5fb, 0x1f64f),
    Interval::new(0x1f680, 0x1f6c5),
    Interval::new(0x1f6cc, 0x1f6cc),
    Interval::new(0x1f6d0, 0x1f6d2),
    Interval::new(0x1f6eb, 0x1f6ec),
    Interval::new(0x1f6f4, 0x1f6f9),
    Interval::new(0x1f910, 0x1f93e),
    Interval::new(0x1f940, 0x1f970),
    Interval::new(0x1f973, 0x1f976),
    Interval::new(0x1f97a, 0x1f97a),
    Interval::new(0x1f97c, 0x1f9a2),
    Interval::new(0x1f9b0, 0x1f9b9),
    Interval::new(0x1f9c0, 0x1f9c2),
    Interval::new(0x1f9d0, 0x1f9ff),
    Interval::new(0x20000, 0x2fffd),
    Interval::new(0x30000, 0x3fffd),
];

#[rustfmt::skip]
static ZERO_WIDTH_12_1_0: &[Interval] = &[
    Interval::new(0x00300, 0x0036f),
    Interval::new(0x00483, 0x00489),
    Interval::new(0x00591, 0x005bd),
    Interval::new(0x005bf, 0x005bf),
    Interval::new(0x005c1, 0x005c2),
    Interval::new(0x005c4, 0x005c5),
    Interval::new(0x005c7, 0x005c7),
    Interval::new(0x00610, 0x0061a),
    Interval::new(0x0064b, 0x0065f),
    Interval::new(0x00670, 0x00670),
    Interval::new(0x006d6, 0x006dc),
    Interval::new(0x006df, 0x006e4),
    Interval::new(0x006e7, 0x006e8),
    Interval::new(0x006ea, 0x006ed),
    Interval::new(0x00711, 0x00711),
    Interval::new(0x00730, 0x0074a),
    Interval::new(0x007a6, 0x007b0),
    Interval::new(0x007eb, 0x007f3),
    Interval::new(0x007fd, 0x007fd),
    Interval::new(0x00816, 0x00819),
    Interval::new(0x0081b, 0x00823),
    Interval::new(0x00825, 0x00827),
    Interval::new(0x00829, 0x0082d),
    Interval::new(0x00859, 0x0085b),
    Interval::new(0x008d3, 0x008e1),
    Interval::new(0x008e3, 0x00902),
    Interval::new(0x0093a, 0x0093a),
    Interval::new(0x0093c, 0x0093c),
    Interval::new(0x00941, 0x00948),
    Interval::new(0x0094d, 0x0094d),
    Interval::new(0x00951, 0x00957),
    Interval::new(0x00962, 0x00963),
    Interval::new(0x00981, 0x00981),
    Interval::new(0x009bc, 0x009bc),
    Interval::new(0x009c1, 0x009c4),
    Interval::new(0x009cd, 0x009cd),
    Interval::new(0x009e2, 0x009e3),
    Interval::new(0x009fe, 0x009fe),
    Interval::new(0x00a01, 0x00a02),
    Interval::new(0x00a3c, 0x00a3c),
    Interval::new(0x00a41, 0x00a42),
    Interval::new(0x00a47, 0x00a48),
    Interval::new(0x00a4b, 0x00a4d),
    Interval::new(0x00a51, 0x00a51),
    Interval::new(0x00a70, 0x00a71),
    Interval::new(0x00a75, 0x00a75),
    Interval::new(0x00a81, 0x00a82),
    Interval::new(0x00abc, 0x00abc),
    Interval::new(0x00ac1, 0x00ac5),
    Interval::new(0x00ac7, 0x00ac8),
    Interval::new(0x00acd, 0x00acd),
    Interval::new(0x00ae2, 0x00ae3),
    Interval::new(0x00afa, 0x00aff),
    Interval::new(0x00b01, 0x00b01),
    Interval::new(0x00b3c, 0x00b3c),
    Interval::new(0x00b3f, 0x00b3f),
    Interval::new(0x00b41, 0x00b44),
    Interval::new(0x00b4d, 0x00b4d),
    Interval::new(0x00b56, 0x00b56),
    Interval::new(0x00b62, 0x00b63),
    Interval::new(0x00b82, 0x00b82),
    Interval::new(0x00bc0, 0x00bc0),
    Interval::new(0x00bcd, 0x00bcd),
    Interval::new(0x00c00, 0x00c00),
    Interval::new(0x00c04, 0x00c04),
    Interval::new(0x00c3e, 0x00c40),
    Interval::new(0x00c46, 0x00c48),
    Interval::new(0x00c4a, 0x00c4d),
    Interval::new(0x00c55, 0x00c56),
    Interval::new(0x00c62, 0x00c63),
    Interval::new(0x00c81, 0x00c81),
    Interval::new(0x00cbc, 0x00cbc),
    Interval::new(0x00cbf, 0x00cbf),
    Interval::new(0x00cc6, 0x00cc6),
    Interval::new(0x00ccc, 0x00ccd),
    Interval::new(0x00ce2, 0x00ce3),
    Interval::new(0x00d00, 0x00d01),
    Interval::new(0x00d3b, 0x00d3c),
    Interval::new(0x00d41, 0x00d44),
    Interval::new(0x00d4d, 0x00d4d),
    Interval::new(0x00d62, 0x00d63),
    Interval::new(0x00dca, 0x00dca),
    Interval::new(0x00dd2, 0x00dd4),
    Interval::new(0x00dd6, 0x00dd6),
    Interval::new(0x00e31, 0x00e31),
    Interval::new(0x00e34, 0x00e3a),
    Interval::new(0x00e47, 0x00e4e),
    Interval::new(0x00eb1, 0x00eb1),
    Interval::new(0x00eb4, 0x00ebc),
    Interval::new(0x00ec8, 0x00ecd),
    Interval::new(0x00f18, 0x00f19),
    Interval::new(0x00f35, 0x00f35),
    Interval::new(0x00f37, 0x00f37),
    Interval::new(0x00f39, 0x00f39),
    Interval::new(0x00f71, 0x00f7e),
    Interval::new(0x00f80, 0x00f84),
    Interval::new(0x00f86, 0x00f87),
    Interval::new(0x00f8d, 0x00f97),
    Interval::new(0x00f99, 0x00fbc),
    Interval::new(0x00fc6, 0x00fc6),
    Interval::new(0x0102d, 0x01030),
    Interval::new(0x01032, 0x01037),
    Interval::new(0x01039, 0x0103a),
    Interval::new(0x0103d, 0x0103e),
    Interval::new(0x01058, 0x01059),
    Interval::new(0x0105e, 0x01060),
    Interval::new(0x01071, 0x01074),
    Interval::new(0x01082, 0x01082),
    Interval::new(0x01085, 0x01086),
    Interval::new(0x0108d, 0x0108d),
    Interval::new(0x0109d, 0x0109d),
    Interval::new(0x0135d, 0x0135f),
    Interval::new(0x01712, 0x01714),
    Interval::new(0x01732, 0x01734),
    Interval::new(0x01752, 0x01753),
    Interval::new(0x01772, 0x01773),
    Interval::new(0x017b4, 0x017b5),
    Interval::new(0x017b7, 0x017bd),
    Interval::new(0x017c6, 0x017c6),
    Interval::new(0x017c9, 0x017d3),
    Interval::new(0x017dd, 0x017dd),
    Interval::new(0x0180b, 0x0180d),
    Interval::new(0x01885, 0x01886),
    Interval::new(0x018a9, 0x018a9),
    Interval::new(0x01920, 0x01922),
    Interval::new(0x01927, 0x01928),
    Interval::new(0x01932, 0x01932),
    Interval::new(0x01939, 0x0193b),
    Interval::new(0x01a17, 0x01a18),
    Interval::new(0x01a1b, 0x01a1b),
    Interval::new(0x01a56, 0x01a56),
    Interval::new(0x01a58, 0x01a5e),
    Interval::new(0x01a60, 0x01a60),
    Interval::new(0x01a62, 0x01a62),
    Interval::new(0x01a65, 0x01a6c),
    Interval::new(0x01a73, 0x01a7c),
    Interval::new(0x01a7f, 0x01a7f),
    Interval::new(0x01ab0, 0x01abe),
    Interval::new(0x01b00, 0x01b03),
    Interval::new(0x01b34, 0x01b34),
    Interval::new(0x01b36, 0x01b3a),
    Interval::new(0x01b3c, 0x01b3c),
    Interval::new(0x01b42, 0x01b42),
    Interval::new(0x01b6b, 0x01b73),
    Interval::new(0x01b80, 0x01b81),
    Interval::new(0x01ba2, 0x01ba5),
    Interval::new(0x01ba8, 0x01ba9),
    Interval::new(0x01bab, 0x01bad),
    Interval::new(0x01be6, 0x01be6),
    Interval::new(0x01be8, 0x01be9),
    Interval::new(0x01bed, 0x01bed),
    Interval::new(0x01bef, 0x01bf1),
    Interval::new(0x01c2c, 0x01c33),
    Interval::new(0x01c36, 0x01c37),
    Interval::new(0x01cd0, 0x01cd2),
    Interval::new(0x01cd4, 0x01ce0),
    Interval::new(0x01ce2, 0x01ce8),
    Interval::new(0x01ced, 0x01ced),
    Interval::new(0x01cf4, 0x01cf4),
    Interval::new(0x01cf8, 0x01cf9),
    Interval::new(0x01dc0, 0x01df9),
    Interval::new(0x01dfb, 0x01dff),
    Interval::new(0x020d0, 0x020f0),
    Interval::new(0x02cef, 0x02cf1),
    Interval::new(0x02d7f, 0x02d7f),
    Interval::new(0x02de0, 0x02dff),
    Interval::new(0x0302a, 0x0302d),
    Interval::new(0x03099, 0x0309a),
    Interval::new(0x0a66f, 0x0a672),
    Interval::new(0x0a674, 0x0a67d),
    Interval::new(0x0a69e, 0x0a69f),
    Interval::new(0x0a6f0, 0x0a6f1),
    Interval::new(0x0a802, 0x0a802),
    Interval::new(0x0a806, 0x0a806),
    Interval::new(0x0a80b, 0x0a80b),
    Interval::new(0x0a825, 0x0a826),
    Interval::new(0x0a8c4, 0x0a8c5),
    Interval::new(0x0a8e0, 0x0a8f1),
    Interval::new(0x0a8ff, 0x0a8ff),
    Interval::new(0x0a926, 0x0a92d),
    Interval::new(0x0a947, 0x0a951),
    Interval::new(0x0a980, 0x0a982),
    Interval::new(0x0a9b3, 0x0a9b3),
    Interval::new(0x0a9b6, 0x0a9b9),
    Interval::new(0x0a9bc, 0x0a9bd),
    Interval::new(0x0a9e5, 0x0a9e5),
    Interval::new(0x0aa29, 0x0aa2e),
    Interval::new(0x0aa31, 0x0aa32),
    Interval::new(0x0aa35, 0x0aa36),
    Interval::new(0x0aa43, 0x0aa43),
    Interval::new(0x0aa4c, 0x0aa4c),
    Interval::new(0x0aa7c, 0x0aa7c),
    Interval::new(0x0aab0, 0x0aab0),
    Interval::new(0x0aab2, 0x0aab4),
    Interval::new(0x0aab7, 0x0aab8),
    Interval::new(0x0aabe, 0x0aabf),
    Interval::new(0x0aac1, 0x0aac1),
    Interval::new(0x0aaec, 0x0aaed),
    Interval::new(0x0aaf6, 0x0aaf6),
    Interval::new(0x0abe5, 0x0abe5),
    Interval::new(0x0abe8, 0x0abe8),
    Interval::new(0x0abed, 0x0abed),
    Interval::new(0x0fb1e, 0x0fb1e),
    Interval::new(0x0fe00, 0x0fe0f),
    Interval::new(0x0fe20, 0x0fe2f),
    Interval::new(0x101fd, 0x101fd),
    Interval::new(0x102e0, 0x102e0),
    Interval::new(0x10376, 0x1037a),
    Interval::new(0x10a01, 0x10a03),
    Interval::new(0x10a05, 0x10a06),
    Interval::new(0x10a0c, 0x10a0f),
    Interval::new(0x10a38, 0x10a3a),
    Interval::new(0x10a3f, 0x10a3f),
    Interval::new(0x10ae5, 0x10ae6),
    Interval::new(0x10d24, 0x10d27),
    Interval::new(0x10f46, 0x10f50),
    Interval::new(0x11001, 0x11001),
    Interval::new(0x11038, 0x11046),
    Interval::new(0x1107f, 0x11081),
    Interval::new(0x110b3, 0x110b6),
    Interval::new(0x110b9, 0x110ba),
    Interval::new(0x11100, 0x11102),
    Interval::new(0x11127, 0x1112b),
    Interval::new(0x1112d, 0x11134),
    Interval::new(0x11173, 0x11173),
    Interval::new(0x11180, 0x11181),
    Interval::new(0x111b6, 0x111be),
    Interval::new(0x111c9, 0x111cc),
    Interval::new(0x1122f, 0x11231),
    Interval::new(0x11234, 0x11234),
    Interval::new(0x11236, 0x11237),
    Interval::new(0x1123e, 0x1123e),
    Interval::new(0x112df, 0x112df),
    Interval::new(0x112e3, 0x112ea),
    Interval::new(0x11300, 0x11301),
    Interval::new(0x1133b, 0x1133c),
    Interval::new(0x11340, 0x11340),
    Interval::new(0x11366, 0x1136c),
    Interval::new(0x11370, 0x11374),
    Interval::new(0x11438, 0x1143f),
    Interval::new(0x11442, 0x11444),
    Interval::new(0x11446, 0x11446),
    Interval::new(0x1145e, 0x1145e),
    Interval::new(0x114b3, 0x114b8),
    Interval::new(0x114ba, 0x114ba),
    Interval::new(0x114bf, 0x114c0),
    Interval::new(0x114c2, 0x114c3),
    Interval::new(0x115b2, 0x115b5),
    Interval::new(0x115bc, 0x115bd),
    Interval::new(0x115bf, 0x115c0),
    Interval::new(0x115dc, 0x115dd),
    Interval::new(0x11633, 0x1163a),
    Interval::new(0x1163d, 0x1163d),
    Interval::new(0x1163f, 0x11640),
    Interval::new(0x116ab, 0x116ab),
    Interval::new(0x116ad, 0x116ad),
    Interval::new(0x116b0, 0x116b5),
    Interval::new(0x116b7, 0x116b7),
    Interval::new(0x1171d, 0x1171f),
    Interval::new(0x11722, 0x11725),
    Interval::new(0x11727, 0x1172b),
    Interval::new(0x1182f, 0x11837),
    Interval::new(0x11839, 0x1183a),
    Interval::new(0x119d4, 0x119d7),
    Interval::new(0x119da, 0x119db),
    Interval::new(0x119e0, 0x119e0),
    Interval::new(0x11a01, 0x11a0a),
    Interval::new(0x11a33, 0x11a38),
    Interval::new(0x11a3b, 0x11a3e),
    Interval::new(0x11a47, 0x11a47),
    Interval::new(0x11a51, 0x11a56),
    Interval::new(0x11a59, 0x11a5b),
    Interval::new(0x11a8a, 0x11a96),
    Interval::new(0x11a98, 0x11a99),
    Interval::new(0x11c30, 0x11c36),
    Interval::new(0x11c38, 0x11c3d),
    Interval::new(0x11c3f, 0x11c3f),
    Interval::new(0x11c92, 0x11ca7),
    Interval::new(0x11caa, 0x11cb0),
    Interval::new(0x11cb2, 0x11cb3),
    Interval::new(0x11cb5, 0x11cb6),
    Interval::new(0x11d31, 0x11d36),
    Interval::new(0x11d3a, 0x11d3a),
    Interval::new(0x11d3c, 0x11d3d),
    Interval::new(0x11d3f, 0x11d45),
    Interval::new(0x11d47, 0x11d47),
    Interval::new(0x11d90, 0x11d91),
    Interval::new(0x11d95, 0x11d95),
    Interval::new(0x11d97, 0x11d97),
    Interval::new(0x11ef3, 0x11ef4),
    Interval::new(0x16af0, 0x16af4),
    Interval::new(0x16b30, 0x16b36),
    Interval::new(0x16f4f, 0x16f4f),
    Interval::new(0x16f8f, 0x16f92),
    Interval::new(0x1bc9d, 0x1bc9e),
    Interval::new(0x1d167, 0x1d169),
    Interval::new(0x1d17b, 0x1d182),
    Interval::new(0x1d185, 0x1d18b),
    Interval::new(0x1d1aa, 0x1d1ad),
    Interval::new(0x1d242, 0x1d244),
    Interval::new(0x1da00, 0x1da36),
    Interval::new(0x1da3b, 0x1da6c),
    Interval::new(0x1da75, 0x1da75),
    Interval::new(0x1da84, 0x1da84),
    Interval::new(0x1da9b, 0x1da9f),
    Interval::new(0x1daa1, 0x1daaf),
    Interval::new(0x1e000, 0x1e006),
    Interval::new(0x1e008, 0x1e018),
    Interval::new(0x1e01b, 0x1e021),
    Interval::new(0x1e023, 0x1e024),
    Interval::new(0x1e026, 0x1e02a),
    Interval::new(0x1e130, 0x1e136),
    Interval::new(0x1e2ec, 0x1e2ef),
    Interval::new(0x1e8d0, 0x1e8d6),
    Interval::new(0x1e944, 0x1e94a),
    Interval::new(0xe0100, 0xe01ef),
];

#[rustfmt::skip]
static WIDE_12_1_0: &[Interval] = &[
    Interval::new(0x01100, 0x0115f),
    Interval::new(0x0231a, 0x0231b),
    Interval::new(0x02329, 0x0232a),
    Interval::new(0x023e9, 0x023ec),
    Interval::new(0x023f0, 0x023f0),
    Interval::new(0x023f3, 0x023f3),
    Interval::new(0x025fd, 0x025fe),
    Interval::new(0x02614, 0x02615),
    Interval::new(0x02648, 0x02653),
    Interval::new(0x0267f, 0x0267f),
    Interval::new(0x02693, 0x02693),
    Interval::new(0x026a1, 0x026a1),
    Interval::new(0x026aa, 0x026ab),
    Interval::new(0x026bd, 0x026be),
    Interval::new(0x026c4, 0x026c5),
    Interval::new(0x026ce, 0x026ce),
    Interval::new(0x026d4, 0x026d4),
    Interval::new(0x026ea, 0x026ea),
    Interval::new(0x026f2, 0x026f3),
    Interval::new(0x026f5, 0x026f5),
    Interval::new(0x026fa, 0x026fa),
    Interval::new(0x026fd, 0x026fd),
    Interval::new(0x02705, 0x02705),
    Interval::new(0x0270a, 0x0270b),
    Interval::new(0x02728, 0x02728),
    Interval::new(0x0274c, 0x0274c),
    Interval::new(0x0274e, 0x0274e),
    Interval::new(0x02753, 0x02755),
    Interval::new(0x02757, 0x02757),
    Interval::new(0x02795, 0x02797),
    Interval::new(0x027b0, 0x027b0),
    Interval::new(0x027bf, 0x027bf),
    Interval::new(0x02b1b, 0x02b1c),
    Interval::new(0x02b50, 0x02b50),
    Interval::new(0x02b55, 0x02b55),
    Interval::new(0x02e80, 0x02e99),
    Interval::new(0x02e9b, 0x02ef3),
    Interval::new(0x02f00, 0x02fd5),
    Interval::new(0x02ff0, 0x02ffb),
    Interval::new(0x03000, 0x0303e),
    Interval::new(0x03041, 0x03096),
    Interval::new(0x03099, 0x030ff),
    Interval::new(0x03105, 0x0312f),
    Interval::new(0x03131, 0x0318e),
    Interval::new(0x03190, 0x031ba),
    Interval::new(0x031c0, 0x031e3),
    Interval::new(0x031f0, 0x0321e),
    Interval::new(0x03220, 0x03247),
    Interval::new(0x03250, 0x04dbf),
    Interval::new(0x04e00, 0x0a48c),
    Interval::new(0x0a490, 0x0a4c6),
    Interval::new(0x0a960, 0x0a97c),
    Interval::new(0x0ac00, 0x0d7a3),
    Interval::new(0x0f900, 0x0faff),
    Interval::new(0x0fe10, 0x0fe19),
    Interval::new(0x0fe30, 0x0fe52),
    Interval::new(0x0fe54, 0x0fe66),
    Interval::new(0x0fe68, 0x0fe6b),
    Interval::new(0x0ff01, 0x0ff60),
    Interval::new(0x0ffe0, 0x0ffe6),
    Interval::new(0x16fe0, 0x16fe3),
    Interval::new(0x17000, 0x187f7),
    Interval::new(0x18800, 0x18af2),
    Interval::new(0x1b000, 0x1b11e),
    Interval::new(0x1b150, 0x1b152),
    Interval::new(0x1b164, 0x1b167),
    Interval::new(0x1b170, 0x1b2fb),
    Interval::new(0x1f004, 0x1f004),
    Interval::new(0x1f0cf, 0x1f0cf),
    Interval::new(0x1f18e, 0x1f18e),
    Interval::new(0x1f191, 0x1f19a),
    Interval::new(0x1f200, 0x1f202),
    Interval::new(0x1f210, 0x1f23b),
    Interval::new(0x1f240, 0x1f248),
    Interval::new(0x1f250, 0x1f251),
    Interval::new(0x1f260, 0x1f265),
    Interval::new(0x1f300, 0x1f320),
    Interval::new(0x1f32d, 0x1f335),
    Interval::new(0x1f337, 0x1f37c),
    Interval::new(0x1f37e, 0x1f393),
    Interval::new(0x1f3a0, 0x1f3ca),
    Interval::new(0x1f3cf, 0x1f3d3),
    Interval::new(0x1f3e0, 0x1f3f0),
    Interval::new(0x1f3f4, 0x1f3f4),
    Interval::new(0x1f3f8, 0x1f43e),
    Interval::new(0x1f440, 0x1f440),
    Interval::new(0x1f442, 0x1f4fc),
    Interval::new(0x1f4ff, 0x1f53d),
    Interval::new(0x1f54b, 0x1f54e),
    Interval::new(0x1f550, 0x1f567),
    Interval::new(0x1f57a, 0x1f57a),
    Interval::new(0x1f595, 0x1f596),
    Interval::new(0x1f5a4, 0x1f5a4),
    Interval::new(0x1f5fb, 0x1f64f),
    Interval::new(0x1f680, 0x1f6c5),
    Interval::new(0x1f6cc, 0x1f6cc),
    Interval::new(0x1f6d0, 0x1f6d2),
    Interval::new(0x1f6d5, 0x1f6d5),
    Interval::new(0x1f6eb, 0x1f6ec),
    Interval::new(0x1f6f4, 0x1f6fa),
    Interval::new(0x1f7e0, 0x1f7eb),
    Interval::new(0x1f90d, 0x1f971),
    Interval::new(0x1f973, 0x1f976),
    Interval::new(0x1f97a, 0x1f9a2),
    Interval::new(0x1f9a5, 0x1f9aa),
    Interval::new(0x1f9ae, 0x1f9ca),
    Interval::new(0x1f9cd, 0x1f9ff),
    Interval::new(0x1fa70, 0x1fa73),
    Interval::new(0x1fa78, 0x1fa7a),
    Interval::new(0x1fa80, 0x1fa82),
    Interval::new(0x1fa90, 0x1fa95),
    Interval::new(0x20000, 0x2fffd),
    Interval::new(0x30000, 0x3fffd),
];

#[rustfmt::skip]
static ZERO_WIDTH_13_0_0: &[Interval] = &[
    Interval::new(0x00300, 0x0036f),
    Interval::new(0x00483, 0x00489),
    Interval::new(0x00591, 0x005bd),
    Interval::new(0x005bf, 0x005bf),
    Interval::new(0x005c1, 0x005c2),
    Interval::new(0x005c4, 0x005c5),
    Interval::new(0x005c7, 0x005c7),
    Interval::new(0x00610, 0x0061a),
    Interval::new(0x0064b, 0x0065f),
    Interval::new(0x00670, 0x00670),
    Interval::new(0x006d6, 0x006dc),
    Interval::new(0x006df, 0x006e4),
    Interval::new(0x006e7, 0x006e8),
    Interval::new(0x006ea, 0x006ed),
    Interval::new(0x00711, 0x00711),
    Interval::new(0x00730, 0x0074a),
    Interval::new(0x007a6, 0x007b0),
    Interval::new(0x007eb, 0x007f3),
    Interval::new(0x007fd, 0x007fd),
    Interval::new(0x00816, 0x00819),
    Interval::new(0x0081b, 0x00823),
    Interval::new(0x00825, 0x00827),
    Interval::new(0x00829, 0x0082d),
    Interval::new(0x00859, 0x0085b),
    Interval::new(0x008d3, 0x008e1),
    Interval::new(0x008e3, 0x00902),
    Interval::new(0x0093a, 0x0093a),
    Interval::new(0x0093c, 0x0093c),
    Interval::new(0x00941, 0x00948),
    Interval::new(0x0094d, 0x0094d),
    Interval::new(0x00951, 0x00957),
    Interval::new(0x00962, 0x00963),
    Interval::new(0x00981, 0x00981),
    Interval::new(0x009bc, 0x009bc),
    Interval::new(0x009c1, 0x009c4),
    Interval::new(0x009cd, 0x009cd),
    Interval::new(0x009e2, 0x009e3),
    Interval::new(0x009fe, 0x009fe),
    Interval::new(0x00a01, 0x00a02),
    Interval::new(0x00a3c, 0x00a3c),
    Interval::new(0x00a41, 0x00a42),
    Interval::new(0x00a47, 0x00a48),
    Interval::new(0x00a4b, 0x00a4d),
    Interval::new(0x00a51, 0x00a51),
    Interval::new(0x00a70, 0x00a71),
    Interval::new(0x00a75, 0x00a75),
    Interval::new(0x00a81, 0x00a82),
    Interval::new(0x00abc, 0x00abc),
    Interval::new(0x00ac1, 0x00ac5),
    Interval::new(0x00ac7, 0x00ac8),
    Interval::new(0x00acd, 0x00acd),
    Interval::new(0x00ae2, 0x00ae3),
    Interval::new(0x00afa, 0x00aff),
    Interval::new(0x00b01, 0x00b01),
    Interval::new(0x00b3c, 0x00b3c),
    Interval::new(0x00b3f, 0x00b3f),
    Interval::new(0x00b41, 0x00b44),
    Interval::new(0x00b4d, 0x00b4d),
    Interval::new(0x00b55, 0x00b56),
    Interval::new(0x00b62, 0x00b63),
    Interval::new(0x00b82, 0x00b82),
    Interval::new(0x00bc0, 0x00bc0),
    Interval::new(0x00bcd, 0x00bcd),
    Interval::new(0x00c00, 0x00c00),
    Interval::new(0x00c04, 0x00c04),
    Interval::new(0x00c3e, 0x00c40),
    Interval::new(0x00c46, 0x00c48),
    Interval::new(0x00c4a, 0x00c4d),
    Interval::new(0x00c55, 0x00c56),
    Interval::new(0x00c62, 0x00c63),
    Interval::new(0x00c81, 0x00c81),
    Interval::new(0x00cbc, 0x00cbc),
    Interval::new(0x00cbf, 0x00cbf),
    Interval::new(0x00cc6, 0x00cc6),
    Interval::new(0x00ccc, 0x00ccd),
    Interval::new(0x00ce2, 0x00ce3),
    Interval::new(0x00d00, 0x00d01),
    Interval::new(0x00d3b, 0x00d3c),
    Interval::new(0x00d41, 0x00d44),
    Interval::new(0x00d4d, 0x00d4d),
    Interval::new(0x00d62, 0x00d63),
    Interval::new(0x00d81, 0x00d81),
    Interval::new(0x00dca, 0x00dca),
    Interval::new(0x00dd2, 0x00dd4),
    Interval::new(0x00dd6, 0x00dd6),
    Interval::new(0x00e31, 0x00e31),
    Interval::new(0x00e34, 0x00e3a),
    Interval::new(0x00e47, 0x00e4e),
    Interval::new(0x00eb1, 0x00eb1),
    Interval::new(0x00eb4, 0x00ebc),
    Interval::new(0x00ec8, 0x00ecd),
    Interval::new(0x00f18, 0x00f19),
    Interval::new(0x00f35, 0x00f35),
    Interval::new(0x00f37, 0x00f37),
    Interval::new(0x00f39, 0x00f39),
    Interval::new(0x00f71, 0x00f7e),
    Interval::new(0x00f80, 0x00f84),
    Interval::new(0x00f86, 0x00f87),
    Interval::new(0x00f8d, 0x00f97),
    Interval::new(0x00f99, 0x00fbc),
    Interval::new(0x00fc6, 0x00fc6),
    Interval::new(0x0102d, 0x01030),
    Interval::new(0x01032, 0x01037),
    Interval::new(0x01039, 0x0103a),
    Interval::new(0x0103d, 0x0103e),
    Interval::new(0x01058, 0x01059),
    Interval::new(0x0105e, 0x01060),
    Interval::new(0x01071, 0x01074),
    Interval::new(0x01082, 0x01082),
    Interval::new(0x01085, 0x01086),
    Interval::new(0x0108d, 0x0108d),
    Interval::new(0x0109d, 0x0109d),
    Interval::new(0x0135d, 0x0135f),
    Interval::new(0x01712, 0x01714),
    Interval::new(0x01732, 0x01734),
    Interval::new(0x01752, 0x01753),
    Interval::new(0x01772, 0x01773),
    Interval::new(0x017b4, 0x017b5),
    Interval::new(0x017b7, 0x017bd),
    Interval::new(0x017c6, 0x017c6),
    Interval::new(0x017c9, 0x017d3),
    Interval::new(0x017dd, 0x017dd),
    Interval::new(0x0180b, 0x0180d),
    Interval::new(0x01885, 0x01886),
    Interval::new(0x018a9, 0x018a9),
    Interval::new(0x01920, 0x01922),
    Interval::new(0x01927, 0x01928),
    Interval::new(0x01932, 0x01932),
    Interval::new(0x01939, 0x0193b),
    Interval::new(0x01a17, 0x01a18),
    Interval::new(0x01a1b, 0x01a1b),
    Interval::new(0x01a56, 0x01a56),
    Interval::new(0x01a58, 0x01a5e),
    Interval::new(0x01a60, 0x01a60),
    Interval::new(0x01a62, 0x01a62),
    Interval::new(0x01a65, 0x01a6c),
    Interval::new(0x01a73, 0x01a7c),
    Interval::new(0x01a7f, 0x01a7f),
    Interval::new(0x01ab0, 0x01ac0),
    Interval::new(0x01b00, 0x01b03),
    Interval::new(0x01b34, 0x01b34),
    Interval::new(0x01b36, 0x01b3a),
    Interval::new(0x01b3c, 0x01b3c),
    Interval::new(0x01b42, 0x01b42),
    Interval::new(0x01b6b, 0x01b73),
    Interval::new(0x01b80, 0x01b81),
    Interval::new(0x01ba2, 0x01ba5),
    Interval::new(0x01ba8, 0x01ba9),
    Interval::new(0x01bab, 0x01bad),
    Interval::new(0x01be6, 0x01be6),
    Interval::new(0x01be8, 0x01be9),
    Interval::new(0x01bed, 0x01bed),
    Interval::new(0x01bef, 0x01bf1),
    Interval::new(0x01c2c, 0x01c33),
    Interval::new(0x01c36, 0x01c37),
    Interval::new(0x01cd0, 0x01cd2),
    Interval::new(0x01cd4, 0x01ce0),
    Interval::new(0x01ce2, 0x01ce8),
    Interval::new(0x01ced, 0x01ced),
    Interval::new(0x01cf4, 0x01cf4),
    Interval::new(0x01cf8, 0x01cf9),
    Interval::new(0x01dc0, 0x01df9),
    Interval::new(0x01dfb, 0x01dff),
    Interval::new(0x020d0, 0x020f0),
    Interval::new(0x02cef, 0x02cf1),
    Interval::new(0x02d7f, 0x02d7f),
    Interval::new(0x02de0, 0x02dff),
    Interval::new(0x0302a, 0x0302d),
    Interval::new(0x03099, 0x0309a),
    Interval::new(0x0a66f, 0x0a672),
    Interval::new(0x0a674, 0x0a67d),
    Interval::new(0x0a69e, 0x0a69f),
    Interval::new(0x0a6f0, 0x0a6f1),
    Interval::new(0x0a802, 0x0a802),
    Interval::new(0x0a806, 0x0a806),
    Interval::new(0x0a80b, 0x0a80b),
    Interval::new(0x0a825, 0x0a826),
    Interval::new(0x0a82c, 0x0a82c),
    Interval::new(0x0a8c4, 0x0a8c5),
    Interval::new(0x0a8e0, 0x0a8f1),
    Interval::new(0x0a8ff, 0x0a8ff),
    Interval::new(0x0a926, 0x0a92d),
    Interval::new(0x0a947, 0x0a951),
    Interval::new(0x0a980, 0x0a982),
    Interval::new(0x0a9b3, 0x0a9b3),
    Interval::new(0x0a9b6, 0x0a9b9),
    Interval::new(0x0a9bc, 0x0a9bd),
    Interval::new(0x0a9e5, 0x0a9e5),
    Interval::new(0x0aa29, 0x0aa2e),
    Interval::new(0x0aa31, 0x0aa32),
    Interval::new(0x0aa35, 0x0aa36),
    Interval::new(0x0aa43, 0x0aa43),
    Interval::new(0x0aa4c, 0x0aa4c),
    Interval::new(0x0aa7c, 0x0aa7c),
    Interval::new(0x0aab0, 0x0aab0),
    Interval::new(0x0aab2, 0x0aab4),
    Interval::new(0x0aab7, 0x0aab8),
    Interval::new(0x0aabe, 0x0aabf),
    Interval::new(0x0aac1, 0x0aac1),
    Interval::new(0x0aaec, 0x0aaed),
    Interval::new(0x0aaf6, 0x0aaf6),
    Interval::new(0x0abe5, 0x0abe5),
    Interval::new(0x0abe8, 0x0abe8),
    Interval::new(0x0abed, 0x0abed),
    Interval::new(0x0fb1e, 0x0fb1e),
    Interval::new(0x0fe00, 0x0fe0f),
    Interval::new(0x0fe20, 0x0fe2f),
    Interval::new(0x101fd, 0x101fd),
    Interval::new(0x102e0, 0x102e0),
    Interval::new(0x10376, 0x1037a),
    Interval::new(0x10a01, 0x10a03),
    Interval::new(0x10a05, 0x10a06),
    Interval::new(0x10a0c, 0x10a0f),
    Interval::new(0x10a38, 0x10a3a),
    Interval::new(0x10a3f, 0x10a3f),
    Interval::new(0x10ae5, 0x10ae6),
    Interval::new(0x10d24, 0x10d27),
    Interval::new(0x10eab, 0x10eac),
    Interval::new(0x10f46, 0x10f50),
    Interval::new(0x11001, 0x11001),
    Interval::new(0x11038, 0x11046),
    Interval::new(0x1107f, 0x11081),
    Interval::new(0x110b3, 0x110b6),
    Interval::new(0x110b9, 0x110ba),
    Interval::new(0x11100, 0x11102),
    Interval::new(0x11127, 0x1112b),
    Interval::new(0x1112d, 0x11134),
    Interval::new(0x11173, 0x11173),
    Interval::new(0x11180, 0x11181),
    Interval::new(0x111b6, 0x111be),
    Interval::new(0x111c9, 0x111cc),
    Interval::new(0x111cf, 0x111cf),
    Interval::new(0x1122f, 0x11231),
    Interval::new(0x11234, 0x11234),
    Interval::new(0x11236, 0x11237),
    Interval::new(0x1123e, 0x1123e),
    Interval::new(0x112df, 0x112df),
    Interval::new(0x112e3, 0x112ea),
    Interval::new(0x11300, 0x11301),
    Interval::new(0x1133b, 0x1133c),
    Interval::new(0x11340, 0x11340),
    Interval::new(0x11366, 0x1136c),
    Interval::new(0x11370, 0x11374),
    Interval::new(0x11438, 0x1143f),
    Interval::new(0x11442, 0x11444),
    Interval::new(0x11446, 0x11446),
    Interval::new(0x1145e, 0x1145e),
    Interval::new(0x114b3, 0x114b8),
    Interval::new(0x114ba, 0x114ba),
    Interval::new(0x114bf, 0x114c0),
    Interval::new(0x114c2, 0x114c3),
    Interval::new(0x115b2, 0x115b5),
    Interval::new(0x115bc, 0x115bd),
    Interval::new(0x115bf, 0x115c0),
    Interval::new(0x115dc, 0x115dd),
    Interval::new(0x11633, 0x1163a),
    Interval::new(0x1163d, 0x1163d),
    Interval::new(0x1163f, 0x11640),
    Interval::new(0x116ab, 0x116ab),
    Interval::new(0x116ad, 0x116ad),
    Interval::new(0x116b0, 0x116b5),
    Interval::new(0x116b7, 0x116b7),
    Interval::new(0x1171d, 0x1171f),
    Interval::new(0x11722, 0x11725),
    Interval::new(0x11727, 0x1172b),
    Interval::new(0x1182f, 0x11837),
    Interval::new(0x11839, 0x1183a),
    Interval::new(0x1193b, 0x1193c),
    Interval::new(0x1193e, 0x1193e),
    Interval::new(0x11943, 0x11943),
    Interval::new(0x119d4, 0x119d7),
    Interval::new(0x119da, 0x119db),
    Interval::new(0x119e0, 0x119e0),
    Interval::new(0x11a01, 0x11a0a),
    Interval::new(0x11a33, 0x11a38),
    Interval::new(0x11a3b, 0x11a3e),
    Interval::new(0x11a47, 0x11a47),
    Interval::new(0x11a51, 0x11a56),
    Interval::new(0x11a59, 0x11a5b),
    Interval::new(0x11a8a, 0x11a96),
    Interval::new(0x11a98, 0x11a99),
    Interval::new(0x11c30, 0x11c36),
    Interval::new(0x11c38, 0x11c3d),
    Interval::new(0x11c3f, 0x11c3f),
    Interval::new(0x11c92, 0x11ca7),
    Interval::new(0x11caa, 0x11cb0),
    Interval::new(0x11cb2, 0x11cb3),
    Interval::new(0x11cb5, 0x11cb6),
    Interval::new(0x11d31, 0x11d36),
    Interval::new(0x11d3a, 0x11d3a),
    Interval::new(0x11d3c, 0x11d3d),
    Interval::new(0x11d3f, 0x11d45),
    Interval::new(0x11d47, 0x11d47),
    Interval::new(0x11d90, 0x11d91),
    Interval::new(0x11d95, 0x11d95),
    Interval::new(0x11d97, 0x11d97),
    Interval::new(0x11ef3, 0x11ef4),
    Interval::new(0x16af0, 0x16af4),
    Interval::new(0x16b30, 0x16b36),
    Interval::new(0x16f4f, 0x16f4f),
    Interval::new(0x16f8f, 0x16f92),
    Interval::new(0x16fe4, 0x16fe4),
    Interval::new(0x1bc9d, 0x1bc9e),
    Interval::new(0x1d167, 0x1d169),
    Interval::new(0x1d17b, 0x1d182),
    Interval::new(0x1d185, 0x1d18b),
    Interval::new(0x1d1aa, 0x1d1ad),
    Interval::new(0x1d242, 0x1d244),
    Interval::new(0x1da00, 0x1da36),
    Interval::new(0x1da3b, 0x1da6c),
    Interval::new(0x1da75, 0x1da75),
    Interval::new(0x1da84, 0x1da84),
    Interval::new(0x1da9b, 0x1da9f),
    Interval::new(0x1daa1, 0x1daaf),
    Interval::new(0x1e000, 0x1e006),
    Interval::new(0x1e008, 0x1e018),
    Interval::new(0x1e01b, 0x1e021),
    Interval::new(0x1e023, 0x1e024),
    Interval::new(0x1e026, 0x1e02a),
    Interval::new(0x1e130, 0x1e136),
    Interval::new(0x1e2ec, 0x1e2ef),
    Interval::new(0x1e8d0, 0x1e8d6),
    Interval::new(0x1e944, 0x1e94a),
    Interval::new(0xe0100, 0xe01ef),
];

#[rustfmt::skip]
static WIDE_13_0_0: &[Interval] = &[
    Interval::new(0x01100, 0x0115f),
    Interval::new(0x0231a, 0x0231b),
    Interval::new(0x02329, 0x0232a),
    Interval::new(0x023e9, 0x023ec),
    Interval::new(0x023f0, 0x023f0),
    Interval::new(0x023f3, 0x023f3),
    Interval::new(0x025fd, 0x025fe),
    Interval::new(0x02614, 0x02615),
    Interval::new(0x02648, 0x02653),
    Interval::new(0x0267f, 0x0267f),
    Interval::new(0x02693, 0x02693),
    Interval::new(0x026a1, 0x026a1),
    Interval::new(0x026aa, 0x026ab),
    Interval::new(0x026bd, 0x026be),
    Interval::new(0x026c4, 0x026c5),
    Interval::new(0x026ce, 0x026ce),
    Interval::new(0x026d4, 0x026d4),
    Interval::new(0x026ea, 0x026ea),
    Interval::new(0x026f2, 0x026f3),
    Interval::new(0x026f5, 0x026f5),
    Interval::new(0x026fa, 0x026fa),
    Interval::new(0x026fd, 0x026fd),
    Interval::new(0x02705, 0x02705),
    Interval::new(0x0270a, 0x0270b),
    Interval::new(0x02728, 0x02728),
    Interval::new(0x0274c, 0x0274c),
    Interval::new(0x0274e, 0x0274e),
    Interval::new(0x02753, 0x02755),
    Interval::new(0x02757, 0x02757),
    Interval::new(0x02795, 0x02797),
    Interval::new(0x027b0, 0x027b0),
    Interval::new(0x027bf, 0x027bf),
    Interval::new(0x02b1b, 0x02b1c),
    Interval::new(0x02b50, 0x02b50),
    Interval::new(0x02b55, 0x02b55),
    Interval::new(0x02e80, 0x02e99),
    Interval::new(0x02e9b, 0x02ef3),
    Interval::new(0x02f00, 0x02fd5),
    Interval::new(0x02ff0, 0x02ffb),
    Interval::new(0x03000, 0x0303e),
    Interval::new(0x03041, 0x03096),
    Interval::new(0x03099, 0x030ff),
    Interval::new(0x03105, 0x0312f),
    Interval::new(0x03131, 0x0318e),
    Interval::new(0x03190, 0x031e3),
    Interval::new(0x031f0, 0x0321e),
    Interval::new(0x03220, 0x03247),
    Interval::new(0x03250, 0x04dbf),
    Interval::new(0x04e00, 0x0a48c),
    Interval::new(0x0a490, 0x0a4c6),
    Interval::new(0x0a960, 0x0a97c),
    Interval::new(0x0ac00, 0x0d7a3),
    Interval::new(0x0f900, 0x0faff),
    Interval::new(0x0fe10, 0x0fe19),
    Interval::new(0x0fe30, 0x0fe52),
    Interval::new(0x0fe54, 0x0fe66),
    Interval::new(0x0fe68, 0x0fe6b),
    Interval::new(0x0ff01, 0x0ff60),
    Interval::new(0x0ffe0, 0x0ffe6),
    Interval::new(0x16fe0, 0x16fe4),
    Interval::new(0x16ff0, 0x16ff1),
    Interval::new(0x17000, 0x187f7),
    Interval::new(0x18800, 0x18cd5),
    Interval::new(0x18d00, 0x18d08),
    Interval::new(0x1b000, 0x1b11e),
    Interval::new(0x1b150, 0x1b152),
    Interval::new(0x1b164, 0x1b167),
    Interval::new(0x1b170, 0x1b2fb),
    Interval::new(0x1f004, 0x1f004),
    Interval::new(0x1f0cf, 0x1f0cf),
    Interval::new(0x1f18e, 0x1f18e),
    Interval::new(0x1f191, 0x1f19a),
    Interval::new(0x1f200, 0x1f202),
    Interval::new(0x1f210, 0x1f23b),
    Interval::new(0x1f240, 0x1f248),
    Interval::new(0x1f250, 0x1f251),
    Interval::new(0x1f260, 0x1f265),
    Interval::new(0x1f300, 0x1f320),
    Interval::new(0x1f32d, 0x1f335),
    Interval::new(0x1f337, 0x1f37c),
    Interval::new(0x1f37e, 0x1f393),
    Interval::new(0x1f3a0, 0x1f3ca),
    Interval::new(0x1f3cf, 0x1f3d3),
    Interval::new(0x1f3e0, 0x1f3f0),
    Interval::new(0x1f3f4, 0x1f3f4),
    Interval::new(0x1f3f8, 0x1f43e),
    Interval::new(0x1f440, 0x1f440),
    Interval::new(0x1f442, 0x1f4fc),
    Interval::new(0x1f4ff, 0x1f53d),
    Interval::new(0x1f54b, 0x1f54e),
    Interval::new(0x1f550, 0x1f567),
    Interval::new(0x1f57a, 0x1f57a),
    Interval::new(0x1f595, 0x1f596),
    Interval::new(0x1f5a4, 0x1f5a4),
    Interval::new(0x1f5fb, 0x1f64f),
    Interval::new(0x1f680, 0x1f6c5),
    Interval::new(0x1f6cc, 0x1f6cc),
    Interval::new(0x1f6d0, 0x1f6d2),
    Interval::new(0x1f6d5, 0x1f6d7),
    Interval::new(0x1f6eb, 0x1f6ec),
    Interval::new(0x1f6f4, 0x1f6fc),
    Interval::new(0x1f7e0, 0x1f7eb),
    Interval::new(0x1f90c, 0x1f93a),
    Interval::new(0x1f93c, 0x1f945),
    Interval::new(0x1f947, 0x1f978),
    Interval::new(0x1f97a, 0x1f9cb),
    Interval::new(0x1f9cd, 0x1f9ff),
    Interval::new(0x1fa70, 0x1fa74),
    Interval::new(0x1fa78, 0x1fa7a),
    Interval::new(0x1fa80, 0x1fa86),
    Interval::new(0x1fa90, 0x1faa8),
    Interval::new(0x1fab0, 0x1fab6),
    Interval::new(0x1fac0, 0x1fac2),
    Interval::new(0x1fad0, 0x1fad6),
    Interval::new(0x20000, 0x2fffd),
    Interval::new(0x30000, 0x3fffd),
];

#[rustfmt::skip]
static ZERO_WIDTH_14_0_0: &[Interval] = &[
    Interval::new(0x00300, 0x0036f),
    Interval::new(0x00483, 0x00489),
    Interval::new(0x00591, 0x005bd),
    Interval::new(0x005bf, 0x005bf),
    Interval::new(0x005c1, 0x005c2),
    Interval::new(0x005c4, 0x005c5),
    Interval::new(0x005c7, 0x005c7),
    Interval::new(0x00610, 0x0061a),
    Interval::new(0x0064b, 0x0065f),
    Interval::new(0x00670, 0x00670),
    Interval::new(0x006d6, 0x006dc),
    Interval::new(0x006df, 0x006e4),
    Interval::new(0x006e7, 0x006e8),
    Interval::new(0x006ea, 0x006ed),
    Interval::new(0x00711, 0x00711),
    Interval::new(0x00730, 0x0074a),
    Interval::new(0x007a6, 0x007b0),
    Interval::new(0x007eb, 0x007f3),
    Interval::new(0x007fd, 0x007fd),
    Interval::new(0x00816, 0x00819),
    Interval::new(0x0081b, 0x00823),
    Interval::new(0x00825, 0x00827),
    Interval::new(0x00829, 0x0082d),
    Interval::new(0x00859, 0x0085b),
    Interval::new(0x00898, 0x0089f),
    Interval::new(0x008ca, 0x008e1),
    Interval::new(0x008e3, 0x00902),
    Interval::new(0x0093a, 0x0093a),
    Interval::new(0x0093c, 0x0093c),
    Interval::new(0x00941, 0x00948),
    Interval::new(0x0094d, 0x0094d),
    Interval::new(0x00951, 0x00957),
    Interval::new(0x00962, 0x00963),
    Interval::new(0x00981, 0x00981),
    Interval::new(0x009bc, 0x009bc),
    Interval::new(0x009c1, 0x009c4),
    Interval::new(0x009cd, 0x009cd),
    Interval::new(0x009e2, 0x009e3),
    Interval::new(0x009fe, 0x009fe),
    Interval::new(0x00a01, 0x00a02),
    Interval::new(0x00a3c, 0x00a3c),
    Interval::new(0x00a41, 0x00a42),
    Interval::new(0x00a47, 0x00a48),
    Interval::new(0x00a4b, 0x00a4d),
    Interval::new(0x00a51, 0x00a51),
    Interval::new(0x00a70, 0x00a71),
    Interval::new(0x00a75, 0x00a75),
    Interval::new(0x00a81, 0x00a82),
    Interval::new(0x00abc, 0x00abc),
    Interval::new(0x00ac1, 0x00ac5),
    Interval::new(0x00ac7, 0x00ac8),
    Interval::new(0x00acd, 0x00acd),
    Interval::new(0x00ae2, 0x00ae3),
    Interval::new(0x00afa, 0x00aff),
    Interval::new(0x00b01, 0x00b01),
    Interval::new(0x00b3c, 0x00b3c),
    Interval::new(0x00b3f, 0x00b3f),
    Interval::new(0x00b41, 0x00b44),
    Interval::new(0x00b4d, 0x00b4d),
    Interval::new(0x00b55, 0x00b56),
    Interval::new(0x00b62, 0x00b63),
    Interval::new(0x00b82, 0x00b82),
    Interval::new(0x00bc0, 0x00bc0),
    Interval::new(0x00bcd, 0x00bcd),
    Interval::new(0x00c00, 0x00c00),
    Interval::new(0x00c04, 0x00c04),
    Interval::new(0x00c3c, 0x00c3c),
    Interval::new(0x00c3e, 0x00c40),
    Interval::new(0x00c46, 0x00c48),
    Interval::new(0x00c4a, 0x00c4d),
    Interval::new(0x00c55, 0x00c56),
    Interval::new(0x00c62, 0x00c63),
    Interval::new(0x00c81, 0x00c81),
    Interval::new(0x00cbc, 0x00cbc),
    Interval::new(0x00cbf, 0x00cbf),
    Interval::new(0x00cc6, 0x00cc6),
    Interval::new(0x00ccc, 0x00ccd),
    Interval::new(0x00ce2, 0x00ce3),
    Interval::new(0x00d00, 0x00d01),
    Interval::new(0x00d3b, 0x00d3c),
    Interval::new(0x00d41, 0x00d44),
    Interval::new(0x00d4d, 0x00d4d),
    Interval::new(0x00d62, 0x00d63),
    Interval::new(0x00d81, 0x00d81),
    Interval::new(0x00dca, 0x00dca),
    Interval::new(0x00dd2, 0x00dd4),
    Interval::new(0x00dd6, 0x00dd6),
    Interval::new(0x00e31, 0x00e31),
    Interval::new(0x00e34, 0x00e3a),
    Interval::new(0x00e47, 0x00e4e),
    Interval::new(0x00eb1, 0x00eb1),
    Interval::new(0x00eb4, 0x00ebc),
    Interval::new(0x00ec8, 0x00ecd),
    Interval::new(0x00f18, 0x00f19),
    Interval::new(0x00f35, 0x00f35),
    Interval::new(0x00f37, 0x00f37),
    Interval::new(0x00f39, 0x00f39),
    Interval::new(0x00f71, 0x00f7e),
    Interval::new(0x00f80, 0x00f84),
    Interval::new(0x00f86, 0x00f87),
    Interval::new(0x00f8d, 0x00f97),
    Interval::new(0x00f99, 0x00fbc),
    Interval::new(0x00fc6, 0x00fc6),
    Interval::new(0x0102d, 0x01030),
    Interval::new(0x01032, 0x01037),
    Interval::new(0x01039, 0x0103a),
    Interval::new(0x0103d, 0x0103e),
    Interval::new(0x01058, 0x01059),
    Interval::new(0x0105e, 0x01060),
    Interval::new(0x01071, 0x01074),
    Interval::new(0x01082, 0x01082),
    Interval::new(0x01085, 0x01086),
    Interval::new(0x0108d, 0x0108d),
    Interval::new(0x0109d, 0x0109d),
    Interval::new(0x0135d, 0x0135f),
    Interval::new(0x01712, 0x01714),
    Interval::new(0x01732, 0x01733),
    Interval::new(0x01752, 0x01753),
    Interval::new(0x01772, 0x01773),
    Interval::new(0x017b4, 0x017b5),
    Interval::new(0x017b7, 0x017bd),
    Interval::new(0x017c6, 0x017c6),
    Interval::new(0x017c9, 0x017d3),
    Interval::new(0x017dd, 0x017dd),
    Interval::new(0x0180b, 0x0180d),
    Interval::new(0x0180f, 0x0180f),
    Interval::new(0x01885, 0x01886),
    Interval::new(0x018a9, 0x018a9),
    Interval::new(0x01920, 0x01922),
    Interval::new(0x01927, 0x01928),
    Interval::new(0x01932, 0x01932),
    Interval::new(0x01939, 0x0193b),
    Interval::new(0x01a17, 0x01a18),
    Interval::new(0x01a1b, 0x01a1b),
    Interval::new(0x01a56, 0x01a56),
    Interval::new(0x01a58, 0x01a5e),
    Interval::new(0x01a60, 0x01a60),
    Interval::new(0x01a62, 0x01a62),
    Interval::new(0x01a65, 0x01a6c),
    Interval::new(0x01a73, 0x01a7c),
    Interval::new(0x01a7f, 0x01a7f),
    Interval::new(0x01ab0, 0x01ace),
    Interval::new(0x01b00, 0x01b03),
    Interval::new(0x01b34, 0x01b34),
    Interval::new(0x01b36, 0x01b3a),
    Interval::new(0x01b3c, 0x01b3c),
    Interval::new(0x01b42, 0x01b42),
    Interval::new(0x01b6b, 0x01b73),
    Interval::new(0x01b80, 0x01b81),
    Interval::new(0x01ba2, 0x01ba5),
    Interval::new(0x01ba8, 0x01ba9),
    Interval::new(0x01bab, 0x01bad),
    Interval::new(0x01be6, 0x01be6),
    Interval::new(0x01be8, 0x01be9),
    Interval::new(0x01bed, 0x01bed),
    Interval::new(0x01bef, 0x01bf1),
    Interval::new(0x01c2c, 0x01c33),
    Interval::new(0x01c36, 0x01c37),
    Interval::new(0x01cd0, 0x01cd2),
    Interval::new(0x01cd4, 0x01ce0),
    Interval::new(0x01ce2, 0x01ce8),
    Interval::new(0x01ced, 0x01ced),
    Interval::new(0x01cf4, 0x01cf4),
    Interval::new(0x01cf8, 0x01cf9),
    Interval::new(0x01dc0, 0x01dff),
    Interval::new(0x020d0, 0x020f0),
    Interval::new(0x02cef, 0x02cf1),
    Interval::new(0x02d7f, 0x02d7f),
    Interval::new(0x02de0, 0x02dff),
    Interval::new(0x0302a, 0x0302d),
    Interval::new(0x03099, 0x0309a),
    Interval::new(0x0a66f, 0x0a672),
    Interval::new(0x0a674, 0x0a67d),
    Interval::new(0x0a69e, 0x0a69f),
    Interval::new(0x0a6f0, 0x0a6f1),
    Interval::new(0x0a802, 0x0a802),
    Interval::new(0x0a806, 0x0a806),
    Interval::new(0x0a80b, 0x0a80b),
    Interval::new(0x0a825, 0x0a826),
    Interval::new(0x0a82c, 0x0a82c),
    Interval::new(0x0a8c4, 0x0a8c5),
    Interval::new(0x0a8e0, 0x0a8f1),
    Interval::new(0x0a8ff, 0x0a8ff),
    Interval::new(0x0a926, 0x0a92d),
    Interval::new(0x0a947, 0x0a951),
    Interval::new(0x0a980, 0x0a982),
    Interval::new(0x0a9b3, 0x0a9b3),
    Interval::new(0x0a9b6, 0x0a9b9),
    Interval::new(0x0a9bc, 0x0a9bd),
    Interval::new(0x0a9e5, 0x0a9e5),
    Interval::new(0x0aa29, 0x0aa2e),
    Interval::new(0x0aa31, 0x0aa32),
    Interval::new(0x0aa35, 0x0aa36),
    Interval::new(0x0aa43, 0x0aa43),
    Interval::new(0x0aa4c, 0x0aa4c),
    Interval::new(0x0aa7c, 0x0aa7c),
    Interval::new(0x0aab0, 0x0aab0),
    Interval::new(0x0aab2, 0x0aab4),
    Interval::new(0x0aab7, 0x0aab8),
    Interval::new(0x0aabe, 0x0aabf),
    Interval::new(0x0aac1, 0x0aac1),
    Interval::new(0x0aaec, 0x0aaed),
    Interval::new(0x0aaf6, 0x0aaf6),
    Interval::new(0x0abe5, 0x0abe5),
    Interval::new(0x0abe8, 0x0abe8),
    Interval::new(0x0abed, 0x0abed),
    Interval::new(0x0fb1e, 0x0fb1e),
    Interval::new(0x0fe00, 0x0fe0f),
    Interval::new(0x0fe20, 0x0fe2f),
    Interval::new(0x101fd, 0x101fd),
    Interval::new(0x102e0, 0x102e0),
    Interval::new(0x10376, 0x1037a),
    Interval::new(0x10a01, 0x10a03),
    Interval::new(0x10a05, 0x10a06),
    Interval::new(0x10a0c, 0x10a0f),
    Interval::new(0x10a38, 0x10a3a),
    Interval::new(0x10a3f, 0x10a3f),
    Interval::new(0x10ae5, 0x10ae6),
    Interval::new(0x10d24, 0x10d27),
    Interval::new(0x10eab, 0x10eac),
    Interval::new(0x10f46, 0x10f50),
    Interval::new(0x10f82, 0x10f85),
    Interval::new(0x11001, 0x11001),
    Interval::new(0x11038, 0x11046),
    Interval::new(0x11070, 0x11070),
    Interval::new(0x11073, 0x11074),
    Interval::new(0x1107f, 0x11081),
    Interval::new(0x110b3, 0x110b6),
    Interval::new(0x110b9, 0x110ba),
    Interval::new(0x110c2, 0x110c2),
    Interval::new(0x11100, 0x11102),
    Interval::new(0x11127, 0x1112b),
    Interval::new(0x1112d, 0x11134),
    Interval::new(0x11173, 0x11173),
    Interval::new(0x11180, 0x11181),
    Interval::new(0x111b6, 0x111be),
    Interval::new(0x111c9, 0x111cc),
    Interval::new(0x111cf, 0x111cf),
    Interval::new(0x1122f, 0x11231),
    Interval::new(0x11234, 0x11234),
    Interval::new(0x11236, 0x11237),
    Interval::new(0x1123e, 0x1123e),
    Interval::new(0x112df, 0x112df),
    Interval::new(0x112e3, 0x112ea),
    Interval::new(0x11300, 0x11301),
    Interval::new(0x1133b, 0x1133c),
    Interval::new(0x11340, 0x11340),
    Interval::new(0x11366, 0x1136c),
    Interval::new(0x11370, 0x11374),
    Interval::new(0x11438, 0x1143f),
    Interval::new(0x11442, 0x11444),
    Interval::new(0x11446, 0x11446),
    Interval::new(0x1145e, 0x1145e),
    Interval::new(0x114b3, 0x114b8),
    Interval::new(0x114ba, 0x114ba),
    Interval::new(0x114bf, 0x114c0),
    Interval::new(0x114c2, 0x114c3),
    Interval::new(0x115b2, 0x115b5),
    Interval::new(0x115bc, 0x115bd),
    Interval::new(0x115bf, 0x115c0),
    Interval::new(0x115dc, 0x115dd),
    Interval::new(0x11633, 0x1163a),
    Interval::new(0x1163d, 0x1163d),
    Interval::new(0x1163f, 0x11640),
    Interval::new(0x116ab, 0x116ab),
    Interval::new(0x116ad, 0x116ad),
    Interval::new(0x116b0, 0x116b5),
    Interval::new(0x116b7, 0x116b7),
    Interval::new(0x1171d, 0x1171f),
    Interval::new(0x11722, 0x11725),
    Interval::new(0x11727, 0x1172b),
    Interval::new(0x1182f, 0x11837),
    Interval::new(0x11839, 0x1183a),
    Interval::new(0x1193b, 0x1193c),
    Interval::new(0x1193e, 0x1193e),
    Interval::new(0x11943, 0x11943),
    Interval::new(0x119d4, 0x119d7),
    Interval::new(0x119da, 0x119db),
    Interval::new(0x119e0, 0x119e0),
    Interval::new(0x11a01, 0x11a0a),
    Interval::new(0x11a33, 0x11a38),
    Interval::new(0x11a3b, 0x11a3e),
    Interval::new(0x11a47, 0x11a47),
    Interval::new(0x11a51, 0x11a56),
    Interval::new(0x11a59, 0x11a5b),
    Interval::new(0x11a8a, 0x11a96),
    Interval::new(0x11a98, 0x11a99),
    Interval::new(0x11c30, 0x11c36),
    Interval::new(0x11c38, 0x11c3d),
    Interval::new(0x11c3f, 0x11c3f),
    Interval::new(0x11c92, 0x11ca7),
    Interval::new(0x11caa, 0x11cb0),
    Interval::new(0x11cb2, 0x11cb3),
    Interval::new(0x11cb5, 0x11cb6),
    Interval::new(0x11d31, 0x11d36),
    Interval::new(0x11d3a, 0x11d3a),
    Interval::new(0x11d3c, 0x11d3d),
    Interval::new(0x11d3f, 0x11d45),
    Interval::new(0x11d47, 0x11d47),
    Interval::new(0x11d90, 0x11d91),
    Interval::new(0x11d95, 0x11d95),
    Interval::new(0x11d97, 0x11d97),
    Interval::new(0x11ef3, 0x11ef4),
    Interval::new(0x16af0, 0x16af4),
    Interval::new(0x16b30, 0x16b36),
    Interval::new(0x16f4f, 0x16f4f),
    Interval::new(0x16f8f, 0x16f92),
    Interval::new(0x16fe4, 0x16fe4),
    Interval::new(0x1bc9d, 0x1bc9e),
    Interval::new(0x1cf00, 0x1cf2d),
    Interval::new(0x1cf30, 0x1cf46),
    Interval::new(0x1d167, 0x1d169),
    Interval::new(0x1d17b, 0x1d182),
    Interval::new(0x1d185, 0x1d18b),
    Interval::new(0x1d1aa, 0x1d1ad),
    Interval::new(0x1d242, 0x1d244),
    Interval::new(0x1da00, 0x1da36),
    Interval::new(0x1da3b, 0x1da6c),
    Interval::new(0x1da75, 0x1da75),
    Interval::new(0x1da84, 0x1da84),
    Interval::new(0x1da9b, 0x1da9f),
    Interval::new(0x1daa1, 0x1daaf),
    Interval::new(0x1e000, 0x1e006),
    Interval::new(0x1e008, 0x1e018),
    Interval::new(0x1e01b, 0x1e021),
    Interval::new(0x1e023, 0x1e024),
    Interval::new(0x1e026, 0x1e02a),
    Interval::new(0x1e130, 0x1e136),
    Interval::new(0x1e2ae, 0x1e2ae),
    Interval::new(0x1e2ec, 0x1e2ef),
    Interval::new(0x1e8d0, 0x1e8d6),
    Interval::new(0x1e944, 0x1e94a),
    Interval::new(0xe0100, 0xe01ef),
];

#[rustfmt::skip]
static WIDE_14_0_0: &[Interval] = &[
    Interval::new(0x01100, 0x0115f),
    Interval::new(0x0231a, 0x0231b),
    Interval::new(0x02329, 0x0232a),
    Interval::new(0x023e9, 0x023ec),
    Interval::new(0x023f0, 0x023f0),
    Interval::new(0x023f3, 0x023f3),
    Interval::new(0x025fd, 0x025fe),
    Interval::new(0x02614, 0x02615),
    Interval::new(0x02648, 0x02653),
    Interval::new(0x0267f, 0x0267f),
    Interval::new(0x02693, 0x02693),
    Interval::new(0x026a1, 0x026a1),
    Interval::new(0x026aa, 0x026ab),
    Interval::new(0x026bd, 0x026be),
    Interval::new(0x026c4, 0x026c5),
    Interval::new(0x026ce, 0x026ce),
    Interval::new(0x026d4, 0x026d4),
    Interval::new(0x026ea, 0x026ea),
    Interval::new(0x026f2, 0x026f3),
    Interval::new(0x026f5, 0x026f5),
    Interval::new(0x026fa, 0x026fa),
    Interval::new(0x026fd, 0x026fd),
    Interval::new(0x02705, 0x02705),
    Interval::new(0x0270a, 0x0270b),
    Interval::new(0x02728, 0x02728),
    Interval::new(0x0274c, 0x0274c),
    Interval::new(0x0274e, 0x0274e),
    Interval::new(0x02753, 0x02755),
    Interval::new(0x02757, 0x02757),
    Interval::new(0x02795, 0x02797),
    Interval::new(0x027b0, 0x027b0),
    Interval::new(0x027bf, 0x027bf),
    Interval::new(0x02b1b, 0x02b1c),
    Interval::new(0x02b50, 0x02b50),
    Interval::new(0x02b55, 0x02b55),
    Interval::new(0x02e80, 0x02e99),
    Interval::new(0x02e9b, 0x02ef3),
    Interval::new(0x02f00, 0x02fd5),
    Interval::new(0x02ff0, 0x02ffb),
    Interval::new(0x03000, 0x0303e),
    Interval::new(0x03041, 0x03096),
    Interval::new(0x03099, 0x030ff),
    Interval::new(0x03105, 0x0312f),
    Interval::new(0x03131, 0x0318e),
    Interval::new(0x03190, 0x031e3),
    Interval::new(0x031f0, 0x0321e),
    Interval::new(0x03220, 0x03247),
    Interval::new(0x03250, 0x04dbf),
    Interval::new(0x04e00, 0x0a48c),
    Interval::new(0x0a490, 0x0a4c6),
    Interval::new(0x0a960, 0x0a97c),
    Interval::new(0x0ac00, 0x0d7a3),
    Interval::new(0x0f900, 0x0faff),
    Interval::new(0x0fe10, 0x0fe19),
    Interval::new(0x0fe30, 0x0fe52),
    Interval::new(0x0fe54, 0x0fe66),
    Interval::new(0x0fe68, 0x0fe6b),
    Interval::new(0x0ff01, 0x0ff60),
    Interval::new(0x0ffe0, 0x0ffe6),
    Interval::new(0x16fe0, 0x16fe4),
    Interval::new(0x16ff0, 0x16ff1),
    Interval::new(0x17000, 0x187f7),
    Interval::new(0x18800, 0x18cd5),
    Interval::new(0x18d00, 0x18d08),
    Interval::new(0x1aff0, 0x1aff3),
    Interval::new(0x1aff5, 0x1affb),
    Interval::new(0x1affd, 0x1affe),
    Interval::new(0x1b000, 0x1b122),
    Interval::new(0x1b150, 0x1b152),
    Interval::new(0x1b164, 0x1b167),
    Interval::new(0x1b170, 0x1b2fb),
    Interval::new(0x1f004, 0x1f004),
    Interval::new(0x1f0cf, 0x1f0cf),
    Interval::new(0x1f18e, 0x1f18e),
    Interval::new(0x1f191, 0x1f19a),
    Interval::new(0x1f200, 0x1f202),
    Interval::new(0x1f210, 0x1f23b),
    Interval::new(0x1f240, 0x1f248),
    Interval::new(0x1f250, 0x1f251),
    Interval::new(0x1f260, 0x1f265),
    Interval::new(0x1f300, 0x1f320),
    Interval::new(0x1f32d, 0x1f335),
    Interval::new(0x1f337, 0x1f37c),
    Interval::new(0x1f37e, 0x1f393),
    Interval::new(0x1f3a0, 0x1f3ca),
    Interval::new(0x1f3cf, 0x1f3d3),
    Interval::new(0x1f3e0, 0x1f3f0),
    Interval::new(0x1f3f4, 0x1f3f4),
    Interval::new(0x1f3f8, 0x1f43e),
    Interval::new(0x1f440, 0x1f440),
    Interval::new(0x1f442, 0x1f4fc),
    Interval::new(0x1f4ff, 0x1f53d),
    Interval::new(0x1f54b, 0x1f54e),
    Interval::new(0x1f550, 0x1f567),
    Interval::new(0x1f57a, 0x1f57a),
    Interval::new(0x1f595, 0x1f596),
    Interval::new(0x1f5a4, 0x1f5a4),
    Interval::new(0x1f5fb, 0x1f64f),
    Interval::new(0x1f680, 0x1f6c5),
    Interval::new(0x1f6cc, 0x1f6cc),
    Interval::new(0x1f6d0, 0x1f6d2),
    Interval::new(0x1f6d5, 0x1f6d7),
    Interval::new(0x1f6dd, 0x1f6df),
    Interval::new(0x1f6eb, 0x1f6ec),
    Interval::new(0x1f6f4, 0x1f6fc),
    Interval::new(0x1f7e0, 0x1f7eb),
    Interval::new(0x1f7f0, 0x1f7f0),
    Interval::new(0x1f90c, 0x1f93a),
    Interval::new(0x1f93c, 0x1f945),
    Interval::new(0x1f947, 0x1f9ff),
    Interval::new(0x1fa70, 0x1fa74),
    Interval::new(0x1fa78, 0x1fa7c),
    Interval::new(0x1fa80, 0x1fa86),
    Interval::new(0x1fa90, 0x1faac),
    Interval::new(0x1fab0, 0x1faba),
    Interval::new(0x1fac0, 0x1fac5),
    Interval::new(0x1fad0, 0x1fad9),
    Interval::new(0x1fae0, 0x1fae7),
    Interval::new(0x1faf0, 0x1faf6),
    Interval::new(0x20000, 0x2fffd),
    Interval::new(0x30000, 0x3fffd),
];

#[rustfmt::skip]
static ZERO_WIDTH_15_0_0: &[Interval] = &[
    Interval::new(0x00300, 0x0036f),
    Interval::new(0x00483, 0x00489),
    Interval::new(0x00591, 0x005bd),
    Interval::new(0x005bf, 0x005bf),
    Interval::new(0x005c1, 0x005c2),
    Interval::new(0x005c4, 0x005c5),
    Interval::new(0x005c7, 0x005c7),
    Interval::new(0x00610, 0x0061a),
    Interval::new(0x0064b, 0x0065f),
    Interval::new(0x00670, 0x00670),
    Interval::new(0x006d6, 0x006dc),
    Interval::new(0x006df, 0x006e4),
    Interval::new(0x006e7, 0x006e8),
    Interval::new(0x006ea, 0x006ed),
    Interval::new(0x00711, 0x00711),
    Interval::new(0x00730, 0x0074a),
    Interval::new(0x007a6, 0x007b0),
    Interval::new(0x007eb, 0x007f3),
    Interval::new(0x007fd, 0x007fd),
    Interval::new(0x00816, 0x00819),
    Interval::new(0x0081b, 0x00823),
    Interval::new(0x00825, 0x00827),
    Interval::new(0x00829, 0x0082d),
    Interval::new(0x00859, 0x0085b),
    Interval::new(0x00898, 0x0089f),
    Interval::new(0x008ca, 0x008e1),
    Interval::new(0x008e3, 0x00902),
    Interval::new(0x0093a, 0x0093a),
    Interval::new(0x0093c, 0x0093c),
    Interval::new(0x00941, 0x00948),
    Interval::new(0x0094d, 0x0094d),
    Interval::new(0x00951, 0x00957),
    Interval::new(0x00962, 0x00963),
    Interval::new(0x00981, 0x00981),
    Interval::new(0x009bc, 0x009bc),
    Interval::new(0x009c1, 0x009c4),
    Interval::new(0x009cd, 0x009cd),
    Interval::new(0x009e2, 0x009e3),
    Interval::new(0x009fe, 0x009fe),
    Interval::new(0x00a01, 0x00a02),
    Interval::new(0x00a3c, 0x00a3c),
    Interval::new(0x00a41, 0x00a42),
    Interval::new(0x00a47, 0x00a48),
    Interval::new(0x00a4b, 0x00a4d),
    Interval::new(0x00a51, 0x00a51),
    Interval::new(0x00a70, 0x00a71),
    Interval::new(0x00a75, 0x00a75),
    Interval::new(0x00a81, 0x00a82),
    Interval::new(0x00abc, 0x00abc),
    Interval::new(0x00ac1, 0x00ac5),
    Interval::new(0x00ac7, 0x00ac8),
    Interval::new(0x00acd, 0x00acd),
    Interval::new(0x00ae2, 0x00ae3),
    Interval::new(0x00afa, 0x00aff),
    Interval::new(0x00b01, 0x00b01),
    Interval::new(0x00b3c, 0x00b3c),
    Interval::new(0x00b3f, 0x00b3f),
    Interval::new(0x00b41, 0x00b44),
    Interval::new(0x00b4d, 0x00b4d),
    Interval::new(0x00b55, 0x00b56),
    Interval::new(0x00b62, 0x00b63),
    Interval::new(0x00b82, 0x00b82),
    Interval::new(0x00bc0, 0x00bc0),
    Interval::new(0x00bcd, 0x00bcd),
    Interval::new(0x00c00, 0x00c00),
    Interval::new(0x00c04, 0x00c04),
    Interval::new(0x00c3c, 0x00c3c),
    Interval::new(0x00c3e, 0x00c40),
    Interval::new(0x00c46, 0x00c48),
    Interval::new(0x00c4a, 0x00c4d),
    Interval::new(0x00c55, 0x00c56),
    Interval::new(0x00c62, 0x00c63),
    Interval::new(0x00c81, 0x00c81),
    Interval::new(0x00cbc, 0x00cbc),
    Interval::new(0x00cbf, 0x00cbf),
    Interval::new(0x00cc6, 0x00cc6),
    Interval::new(0x00ccc, 0x00ccd),
    Interval::new(0x00ce2, 0x00ce3),
    Interval::new(0x00d00, 0x00d01),
    Interval::new(0x00d3b, 0x00d3c),
    Interval::new(0x00d41, 0x00d44),
    Interval::new(0x00d4d, 0x00d4d),
    Interval::new(0x00d62, 0x00d63),
    Interval::new(0x00d81, 0x00d81),
    Interval::new(0x00dca, 0x00dca),
    Interval::new(0x00dd2, 0x00dd4),
    Interval::new(0x00dd6, 0x00dd6),
    Interval::new(0x00e31, 0x00e31),
    Interval::new(0x00e34, 0x00e3a),
    Interval::new(0x00e47, 0x00e4e),
    Interval::new(0x00eb1, 0x00eb1),
    Interval::new(0x00eb4, 0x00ebc),
    Interval::new(0x00ec8, 0x00ece),
    Interval::new(0x00f18, 0x00f19),
    Interval::new(0x00f35, 0x00f35),
    Interval::new(0x00f37, 0x00f37),
    Interval::new(0x00f39, 0x00f39),
    Interval::new(0x00f71, 0x00f7e),
    Interval::new(0x00f80, 0x00f84),
    Interval::new(0x00f86, 0x00f87),
    Interval::new(0x00f8d, 0x00f97),
    Interval::new(0x00f99, 0x00fbc),
    Interval::new(0x00fc6, 0x00fc6),
    Interval::new(0x0102d, 0x01030),
    Interval::new(0x01032, 0x01037),
    Interval::new(0x01039, 0x0103a),
    Interval::new(0x0103d, 0x0103e),
    Interval::new(0x01058, 0x01059),
    Interval::new(0x0105e, 0x01060),
    Interval::new(0x01071, 0x01074),
    Interval::new(0x01082, 0x01082),
    Interval::new(0x01085, 0x01086),
    Interval::new(0x0108d, 0x0108d),
    Interval::new(0x0109d, 0x0109d),
    Interval::new(0x0135d, 0x0135f),
    Interval::new(0x01712, 0x01714),
    Interval::new(0x01732, 0x01733),
    Interval::new(0x01752, 0x01753),
    Interval::new(0x01772, 0x01773),
    Interval::new(0x017b4, 0x017b5),
    Interval::new(0x017b7, 0x017bd),
    Interval::new(0x017c6, 0x017c6),
    Interval::new(0x017c9, 0x017d3),
    Interval::new(0x017dd, 0x017dd),
    Interval::new(0x0180b, 0x0180d),
    Interval::new(0x0180f, 0x0180f),
    Interval::new(0x01885, 0x01886),
    Interval::new(0x018a9, 0x018a9),
    Interval::new(0x01920, 0x01922),
    Interval::new(0x01927, 0x01928),
    Interval::new(0x01932, 0x01932),
    Interval::new(0x01939, 0x0193b),
    Interval::new(0x01a17, 0x01a18),
    Interval::new(0x01a1b, 0x01a1b),
    Interval::new(0x01a56, 0x01a56),
    Interval::new(0x01a58, 0x01a5e),
    Interval::new(0x01a60, 0x01a60),
    Interval::new(0x01a62, 0x01a62),
    Interval::new(0x01a65, 0x01a6c),
    Interval::new(0x01a73, 0x01a7c),
    Interval::new(0x01a7f, 0x01a7f),
    Interval::new(0x01ab0, 0x01ace),
    Interval::new(0x01b00, 0x01b03),
    Interval::new(0x01b34, 0x01b34),
    Interval::new(0x01b36, 0x01b3a),
    Interval::new(0x01b3c, 0x01b3c),
    Interval::new(0x01b42, 0x01b42),
    Interval::new(0x01b6b, 0x01b73),
    Interval::new(0x01b80, 0x01b81),
    Interval::new(0x01ba2, 0x01ba5),
    Interval::new(0x01ba8, 0x01ba9),
    Interval::new(0x01bab, 0x01bad),
    Interval::new(0x01be6, 0x01be6),
    Interval::new(0x01be8, 0x01be9),
    Interval::new(0x01bed, 0x01bed),
    Interval::new(0x01bef, 0x01bf1),
    Interval::new(0x01c2c, 0x01c33),
    Interval::new(0x01c36, 0x01c37),
    Interval::new(0x01cd0, 0x01cd2),
    Interval::new(0x01cd4, 0x01ce0),
    Interval::new(0x01ce2, 0x01ce8),
    Interval::new(0x01ced, 0x01ced),
    Interval::new(0x01cf4, 0x01cf4),
    Interval::new(0x01cf8, 0x01cf9),
    Interval::new(0x01dc0, 0x01dff),
    Interval::new(0x020d0, 0x020f0),
    Interval::new(0x02cef, 0x02cf1),
    Interval::new(0x02d7f, 0x02d7f),
    Interval::new(0x02de0, 0x02dff),
    Interval::new(0x0302a, 0x0302d),
    Interval::new(0x03099, 0x0309a),
    Interval::new(0x0a66f, 0x0a672),
    Interval::new(0x0a674, 0x0a67d),
    Interval::new(0x0a69e, 0x0a69f),
    Interval::new(0x0a6f0, 0x0a6f1),
    Interval::new(0x0a802, 0x0a802),
    Interval::new(0x0a806, 0x0a806),
    Interval::new(0x0a80b, 0x0a80b),
    Interval::new(0x0a825, 0x0a826),
    Interval::new(0x0a82c, 0x0a82c),
    Interval::new(0x0a8c4, 0x0a8c5),
    Interval::new(0x0a8e0, 0x0a8f1),
    Interval::new(0x0a8ff, 0x0a8ff),
    Interval::new(0x0a926, 0x0a92d),
    Interval::new(0x0a947, 0x0a951),
    Interval::new(0x0a980, 0x0a982),
    Interval::new(0x0a9b3, 0x0a9b3),
    Interval::new(0x0a9b6, 0x0a9b9),
    Interval::new(0x0a9bc, 0x0a9bd),
    Interval::new(0x0a9e5, 0x0a9e5),
    Interval::new(0x0aa29, 0x0aa2e),
    Interval::new(0x0aa31, 0x0aa32),
    Interval::new(0x0aa35, 0x0aa36),
    Interval::new(0x0aa43, 0x0aa43),
    Interval::new(0x0aa4c, 0x0aa4c),
    Interval::new(0x0aa7c, 0x0aa7c),
    Interval::new(0x0aab0, 0x0aab0),
    Interval::new(0x0aab2, 0x0aab4),
    Interval::new(0x0aab7, 0x0aab8),
    Interval::new(0x0aabe, 0x0aabf),
    Interval::new(0x0aac1, 0x0aac1),
    Interval::new(0x0aaec, 0x0aaed),
    Interval::new(0x0aaf6, 0x0aaf6),
    Interval::new(0x0abe5, 0x0abe5),
    Interval::new(0x0abe8, 0x0abe8),
    Interval::new(0x0abed, 0x0abed),
    Interval::new(0x0fb1e, 0x0fb1e),
    Interval::new(0x0fe00, 0x0fe0f),
    Interval::new(0x0fe20, 0x0fe2f),
    Interval::new(0x101fd, 0x101fd),
    Interval::new(0x102e0, 0x102e0),
    Interval::new(0x10376, 0x1037a),
    Interval::new(0x10a01, 0x10a03),
    Interval::new(0x10a05, 0x10a06),
    Interval::new(0x10a0c, 0x10a0f),
    Interval::new(0x10a38, 0x10a3a),
    Interval::new(0x10a3f, 0x10a3f),
    Interval::new(0x10ae5, 0x10ae6),
    Interval::new(0x10d24, 0x10d27),
    Interval::new(0x10eab, 0x10eac),
    Interval::new(0x10efd, 0x10eff),
    Interval::new(0x10f46, 0x10f50),
    Interval::new(0x10f82, 0x10f85),
    Interval::new(0x11001, 0x11001),
    Interval::new(0x11038, 0x11046),
    Interval::new(0x11070, 0x11070),
    Interval::new(0x11073, 0x11074),
    Interval::new(0x1107f, 0x11081),
    Interval::new(0x110b3, 0x110b6),
    Interval::new(0x110b9, 0x110ba),
    Interval::new(0x110c2, 0x110c2),
    Interval::new(0x11100, 0x11102),
    Interval::new(0x11127, 0x1112b),
    Interval::new(0x1112d, 0x11134),
    Interval::new(0x11173, 0x11173),
    Interval::new(0x11180, 0x11181),
    Interval::new(0x111b6, 0x111be),
    Interval::new(0x111c9, 0x111cc),
    Interval::new(0x111cf, 0x111cf),
    Interval::new(0x1122f, 0x11231),
    Interval::new(0x11234, 0x11234),
    Interval::new(0x11236, 0x11237),
    Interval::new(0x1123e, 0x1123e),
    Interval::new(0x11241, 0x11241),
    Interval::new(0x112df, 0x112df),
    Interval::new(0x112e3, 0x112ea),
    Interval::new(0x11300, 0x11301),
    Interval::new(0x1133b, 0x1133c),
    Interval::new(0x11340, 0x11340),
    Interval::new(0x11366, 0x1136c),
    Interval::new(0x11370, 0x11374),
    Interval::new(0x11438, 0x1143f),
    Interval::new(0x11442, 0x11444),
    Interval::new(0x11446, 0x11446),
    Interval::new(0x1145e, 0x1145e),
    Interval::new(0x114b3, 0x114b8),
    Interval::new(0x114ba, 0x114ba),
    Interval::new(0x114bf, 0x114c0),
    Interval::new(0x114c2, 0x114c3),
    Interval::new(0x115b2, 0x115b5),
    Interval::new(0x115bc, 0x115bd),
    Interval::new(0x115bf, 0x115c0),
    Interval::new(0x115dc, 0x115dd),
    Interval::new(0x11633, 0x1163a),
    Interval::new(0x1163d, 0x1163d),
    Interval::new(0x1163f, 0x11640),
    Interval::new(0x116ab, 0x116ab),
    Interval::new(0x116ad, 0x116ad),
    Interval::new(0x116b0, 0x116b5),
    Interval::new(0x116b7, 0x116b7),
    Interval::new(0x1171d, 0x1171f),
    Interval::new(0x11722, 0x11725),
    Interval::new(0x11727, 0x1172b),
    Interval::new(0x1182f, 0x11837),
    Interval::new(0x11839, 0x1183a),
    Interval::new(0x1193b, 0x1193c),
    Interval::new(0x1193e, 0x1193e),
    Interval::new(0x11943, 0x11943),
    Interval::new(0x119d4, 0x119d7),
    Interval::new(0x119da, 0x119db),
    Interval::new(0x119e0, 0x119e0),
    Interval::new(0x11a01, 0x11a0a),
    Interval::new(0x11a33, 0x11a38),
    Interval::new(0x11a3b, 0x11a3e),
    Interval::new(0x11a47, 0x11a47),
    Interval::new(0x11a51, 0x11a56),
    Interval::new(0x11a59, 0x11a5b),
    Interval::new(0x11a8a, 0x11a96),
    Interval::new(0x11a98, 0x11a99),
    Interval::new(0x11c30, 0x11c36),
    Interval::new(0x11c38, 0x11c3d),
    Interval::new(0x11c3f, 0x11c3f),
    Interval::new(0x11c92, 0x11ca7),
    Interval::new(0x11caa, 0x11cb0),
    Interval::new(0x11cb2, 0x11cb3),
    Interval::new(0x11cb5, 0x11cb6),
    Interval::new(0x11d31, 0x11d36),
    Interval::new(0x11d3a, 0x11d3a),
    Interval::new(0x11d3c, 0x11d3d),
    Interval::new(0x11d3f, 0x11d45),
    Interval::new(0x11d47, 0x11d47),
    Interval::new(0x11d90, 0x11d91),
    Interval::new(0x11d95, 0x11d95),
    Interval::new(0x11d97, 0x11d97),
    Interval::new(0x11ef3, 0x11ef4),
    Interval::new(0x11f00, 0x11f01),
    Interval::new(0x11f36, 0x11f3a),
    Interval::new(0x11f40, 0x11f40),
    Interval::new(0x11f42, 0x11f42),
    Interval::new(0x13440, 0x13440),
    Interval::new(0x13447, 0x13455),
    Interval::new(0x16af0, 0x16af4),
    Interval::new(0x16b30, 0x16b36),
    Interval::new(0x16f4f, 0x16f4f),
    Interval::new(0x16f8f, 0x16f92),
    Interval::new(0x16fe4, 0x16fe4),
    Interval::new(0x1bc9d, 0x1bc9e),
    Interval::new(0x1cf00, 0x1cf2d),
    Interval::new(0x1cf30, 0x1cf46),
    Interval::new(0x1d167, 0x1d169),
    Interval::new(0x1d17b, 0x1d182),
    Interval::new(0x1d185, 0x1d18b),
    Interval::new(0x1d1aa, 0x1d1ad),
    Interval::new(0x1d242, 0x1d244),
    Interval::new(0x1da00, 0x1da36),
    Interval::new(0x1da3b, 0x1da6c),
    Interval::new(0x1da75, 0x1da75),
    Interval::new(0x1da84, 0x1da84),
    Interval::new(0x1da9b, 0x1da9f),
    Interval::new(0x1daa1, 0x1daaf),
    Interval::new(0x1e000, 0x1e006),
    Interval::new(0x1e008, 0x1e018),
    Interval::new(0x1e01b, 0x1e021),
    Interval::new(0x1e023, 0x1e024),
    Interval::new(0x1e026, 0x1e02a),
    Interval::new(0x1e08f, 0x1e08f),
    Interval::new(0x1e130, 0x1e136),
    Interval::new(0x1e2ae, 0x1e2ae),
    Interval::new(0x1e2ec, 0x1e2ef),
    Interval::new(0x1e4ec, 0x1e4ef),
    Interval::new(0x1e8d0, 0x1e8d6),
    Interval::new(0x1e944, 0x1e94a),
    Interval::new(0xe0100, 0xe01ef),
];

#[rustfmt::skip]
static WIDE_15_0_0: &[Interval] = &[
    Interval::new(0x01100, 0x0115f),
    Interval::new(0x0231a, 0x0231b),
    Interval::new(0x02329, 0x0232a),
    Interval::new(0x023e9, 0x023ec),
    Interval::new(0x023f0, 0x023f0),
    Interval::new(0x023f3, 0x023f3),
    Interval::new(0x025fd, 0x025fe),
    Interval::new(0x02614, 0x02615),
    Interval::new(0x02648, 0x02653),
    Interval::new(0x0267f, 0x0267f),
    Interval::new(0x02693, 0x02693),
    Interval::new(0x026a1, 0x026a1),
    Interval::new(0x026aa, 0x026ab),
    Interval::new(0x026bd, 0x026be),
    Interval::new(0x026c4, 0x026c5),
    Interval::new(0x026ce, 0x026ce),
    Interval::new(0x026d4, 0x026d4),
    Interval::new(0x026ea, 0x026ea),
    Interval::new(0x026f2, 0x026f3),
    Interval::new(0x026f5, 0x026f5),
    Interval::new(0x026fa, 0x026fa),
    Interval::new(0x026fd, 0x026fd),
    Interval::new(0x02705, 0x02705),
    Interval::new(0x0270a, 0x0270b),
    Interval::new(0x02728, 0x02728),
    Interval::new(0x0274c, 0x0274c),
    Interval::new(0x0274e, 0x0274e),
    Interval::new(0x02753, 0x02755),
    Interval::new(0x02757, 0x02757),
    Interval::new(0x02795, 0x02797),
    Interval::new(0x027b0, 0x027b0),
    Interval::new(0x027bf, 0x027bf),
    Interval::new(0x02b1b, 0x02b1c),
    Interval::new(0x02b50, 0x02b50),
    Interval::new(0x02b55, 0x02b55),
    Interval::new(0x02e80, 0x02e99),
    Interval::new(0x02e9b, 0x02ef3),
    Interval::new(0x02f00, 0x02fd5),
    Interval::new(0x02ff0, 0x02ffb),
    Interval::new(0x03000, 0x0303e),
    Interval::new(0x03041, 0x03096),
    Interval::new(0x03099, 0x030ff),
    Interval::new(0x03105, 0x0312f),
    Interval::new(0x03131, 0x0318e),
    Interval::new(0x03190, 0x031e3),
    Interval::new(0x031f0, 0x0321e),
    Interval::new(0x03220, 0x03247),
    Interval::new(0x03250, 0x04dbf),
    Interval::new(0x04e00, 0x0a48c),
    Interval::new(0x0a490, 0x0a4c6),
    Interval::new(0x0a960, 0x0a97c),
    Interval::new(0x0ac00, 0x0d7a3),
    Interval::new(0x0f900, 0x0faff),
    Interval::new(0x0fe10, 0x0fe19),
    Interval::new(0x0fe30, 0x0fe52),
    Interval::new(0x0fe54, 0x0fe66),
    Interval::new(0x0fe68, 0x0fe6b),
    Interval::new(0x0ff01, 0x0ff60),
    Interval::new(0x0ffe0, 0x0ffe6),
    Interval::new(0x16fe0, 0x16fe4),
    Interval::new(0x16ff0, 0x16ff1),
    Interval::new(0x17000, 0x187f7),
    Interval::new(0x18800, 0x18cd5),
    Interval::new(0x18d00, 0x18d08),
    Interval::new(0x1aff0, 0x1aff3),
    Interval::new(0x1aff5, 0x1affb),
    Interval::new(0x1affd, 0x1affe),
    Interval::new(0x1b000, 0x1b122),
    Interval::new(0x1b132, 0x1b132),
    Interval::new(0x1b150, 0x1b152),
    Interval::new(0x1b155, 0x1b155),
    Interval::new(0x1b164, 0x1b167),
    Interval::new(0x1b170, 0x1b2fb),
    Interval::new(0x1f004, 0x1f004),
    Interval::new(0x1f0cf, 0x1f0cf),
    Interval::new(0x1f18e, 0x1f18e),
    Interval::new(0x1f191, 0x1f19a),
    Interval::new(0x1f200, 0x1f202),
    Interval::new(0x1f210, 0x1f23b),
    Interval::new(0x1f240, 0x1f248),
    Interval::new(0x1f250, 0x1f251),
    Interval::new(0x1f260, 0x1f265),
    Interval::new(0x1f300, 0x1f320),
    Interval::new(0x1f32d, 0x1f335),
    Interval::new(0x1f337, 0x1f37c),
    Interval::new(0x1f37e, 0x1f393),
    Interval::new(0x1f3a0, 0x1f3ca),
    Interval::new(0x1f3cf, 0x1f3d3),
    Interval::new(0x1f3e0, 0x1f3f0),
    Interval::new(0x1f3f4, 0x1f3f4),
    Interval::new(0x1f3f8, 0x1f43e),
    Interval::new(0x1f440, 0x1f440),
    Interval::new(0x1f442, 0x1f4fc),
    Interval::new(0x1f4ff, 0x1f53d),
    Interval::new(0x1f54b, 0x1f54e),
    Interval::new(0x1f550, 0x1f567),
    Interval::new(0x1f57a, 0x1f57a),
    Interval::new(0x1f595, 0x1f596),
    Interval::new(0x1f5a4, 0x1f5a4),
    Interval::new(0x1f5fb, 0x1f64f),
    Interval::new(0x1f680, 0x1f6c5),
    Interval::new(0x1f6cc, 0x1f6cc),
    Interval::new(0x1f6d0, 0x1f6d2),
    Interval::new(0x1f6d5, 0x1f6d7),
    Interval::new(0x1f6dc, 0x1f6df),
    Interval::new(0x1f6eb, 0x1f6ec),
    Interval::new(0x1f6f4, 0x1f6fc),
    Interval::new(0x1f7e0, 0x1f7eb),
    Interval::new(0x1f7f0, 0x1f7f0),
    Interval::new(0x1f90c, 0x1f93a),
    Interval::new(0x1f93c, 0x1f945),
    Interval::new(0x1f947, 0x1f9ff),
    Interval::new(0x1fa70, 0x1fa7c),
    Interval::new(0x1fa80, 0x1fa88),
    Interval::new(0x1fa90, 0x1fabd),
    Interval::new(0x1fabf, 0x1fac5),
    Interval::new(0x1face, 0x1fadb),
    Interval::new(0x1fae0, 0x1fae8),
    Interval::new(0x1faf0, 0x1faf8),
    Interval::new(0x20000, 0x2fffd),
    Interval::new(0x30000, 0x3fffd),
];

#[rustfmt::skip]
static ZERO_WIDTH_15_1_0: &[Interval] = &[
    Interval::new(0x00300, 0x0036f),
    Interval::new(0x00483, 0x00489),
    Interval::new(0x00591, 0x005bd),
    Interval::new(0x005bf, 0x005bf),
    Interval::new(0x005c1, 0x005c2),
    Interval::new(0x005c4, 0x005c5),
    Interval::new(0x005c7, 0x005c7),
    Interval::new(0x00610, 0x0061a),
    Interval::new(0x0064b, 0x0065f),
    Interval::new(0x00670, 0x00670),
    Interval::new(0x006d6, 0x006dc),
    Interval::new(0x006df, 0x006e4),
    Interval::new(0x006e7, 0x006e8),
    Interval::new(0x006ea, 0x006ed),
    Interval::new(0x00711, 0x00711),
    Interval::new(0x00730, 0x0074a),
    Interval::new(0x007a6, 0x007b0),
    Interval::new(0x007eb, 0x007f3),
    Interval::new(0x007fd, 0x007fd),
    Interval::new(0x00816, 0x00819),
    Interval::new(0x0081b, 0x00823),
    Interval::new(0x00825, 0x00827),
    Interval::new(0x00829, 0x0082d),
    Interval::new(0x00859, 0x0085b),
    Interval::new(0x00898, 0x0089f),
    Interval::new(0x008ca, 0x008e1),
    Interval::new(0x008e3, 0x00902),
    Interval::new(0x0093a, 0x0093a),
    Interval::new(0x0093c, 0x0093c),
    Interval::new(0x00941, 0x00948),
    Interval::new(0x0094d, 0x0094d),
    Interval::new(0x00951, 0x00957),
    Interval::new(0x00962, 0x00963),
    Interval::new(0x00981, 0x00981),
    Interval::new(0x009bc, 0x009bc),
    Interval::new(0x009c1, 0x009c4),
    Interval::new(0x009cd, 0x009cd),
    Interval::new(0x009e2, 0x009e3),
    Interval::new(0x009fe, 0x009fe),
    Interval::new(0x00a01, 0x00a02),
    Interval::new(0x00a3c, 0x00a3c),
    Interval::new(0x00a41, 0x00a42),
    Interval::new(0x00a47, 0x00a48),
    Interval::new(0x00a4b, 0x00a4d),
    Interval::new(0x00a51, 0x00a51),
    Interval::new(0x00a70, 0x00a71),
    Interval::new(0x00a75, 0x00a75),
    Interval::new(0x00a81, 0x00a82),
    Interval::new(0x00abc, 0x00abc),
    Interval::new(0x00ac1, 0x00ac5),
    Interval::new(0x00ac7, 0x00ac8),
    Interval::new(0x00acd, 0x00acd),
    Interval::new(0x00ae2, 0x00ae3),
    Interval::new(0x00afa, 0x00aff),
    Interval::new(0x00b01, 0x00b01),
    Interval::new(0x00b3c, 0x00b3c),
    Interval::new(0x00b3f, 0x00b3f),
    Interval::new(0x00b41, 0x00b44),
    Interval::new(0x00b4d, 0x00b4d),
    Interval::new(0x00b55, 0x00b56),
    Interval::new(0x00b62, 0x00b63),
    Interval::new(0x00b82, 0x00b82),
    Interval::new(0x00bc0, 0x00bc0),
    Interval::new(0x00bcd, 0x00bcd),
    Interval::new(0x00c00, 0x00c00),
    Interval::new(0x00c04, 0x00c04),
    Interval::new(0x00c3c, 0x00c3c),
    Interval::new(0x00c3e, 0x00c40),
    Interval::new(0x00c46, 0x00c48),
    Interval::new(0x00c4a, 0x00c4d),
    Interval::new(0x00c55, 0x00c56),
    Interval::new(0x00c62, 0x00c63),
    Interval::new(0x00c81, 0x00c81),
    Interval::new(0x00cbc, 0x00cbc),
    Interval::new(0x00cbf, 0x00cbf),
    Interval::new(0x00cc6, 0x00cc6),
    Interval::new(0x00ccc, 0x00ccd),
    Interval::new(0x00ce2, 0x00ce3),
    Interval::new(0x00d00, 0x00d01),
    Interval::new(0x00d3b, 0x00d3c),
    Interval::new(0x00d41, 0x00d44),
    Interval::new(0x00d4d, 0x00d4d),
    Interval::new(0x00d62, 0x00d63),
    Interval::new(0x00d81, 0x00d81),
    Interval::new(0x00dca, 0x00dca),
    Interval::new(0x00dd2, 0x00dd4),
    Interval::new(0x00dd6, 0x00dd6),
    Interval::new(0x00e31, 0x00e31),
    Interval::new(0x00e34, 0x00e3a),
    Interval::new(0x00e47, 0x00e4e),
    Interval::new(0x00eb1, 0x00eb1),
    Interval::new(0x00eb4, 0x00ebc),
    Interval::new(0x00ec8, 0x00ece),
    Interval::new(0x00f18, 0x00f19),
    Interval::new(0x00f35, 0x00f35),
    Interval::new(0x00f37, 0x00f37),
    Interval::new(0x00f39, 0x00f39),
    Interval::new(0x00f71, 0x00f7e),
    Interval::new(0x00f80, 0x00f84),
    Interval::new(0x00f86, 0x00f87),
    Interval::new(0x00f8d, 0x00f97),
    Interval::new(0x00f99, 0x00fbc),
    Interval::new(0x00fc6, 0x00fc6),
    Interval::new(0x0102d, 0x01030),
    Interval::new(0x01032, 0x01037),
    Interval::new(0x01039, 0x0103a),
    Interval::new(0x0103d, 0x0103e),
    Interval::new(0x01058, 0x01059),
    Interval::new(0x0105e, 0x01060),
    Interval::new(0x01071, 0x01074),
    Interval::new(0x01082, 0x01082),
    Interval::new(0x01085, 0x01086),
    Interval::new(0x0108d, 0x0108d),
    Interval::new(0x0109d, 0x0109d),
    Interval::new(0x0135d, 0x0135f),
    Interval::new(0x01712, 0x01714),
    Interval::new(0x01732, 0x01733),
    Interval::new(0x01752, 0x01753),
    Interval::new(0x01772, 0x01773),
    Interval::new(0x017b4, 0x017b5),
    Interval::new(0x017b7, 0x017bd),
    Interval::new(0x017c6, 0x017c6),
    Interval::new(0x017c9, 0x017d3),
    Interval::new(0x017dd, 0x017dd),
    Interval::new(0x0180b, 0x0180d),
    Interval::new(0x0180f, 0x0180f),
    Interval::new(0x01885, 0x01886),
    Interval::new(0x018a9, 0x018a9),
    Interval::new(0x01920, 0x01922),
    Interval::new(0x01927, 0x01928),
    Interval::new(0x01932, 0x01932),
    Interval::new(0x01939, 0x0193b),
    Interval::new(0x01a17, 0x01a18),
    Interval::new(0x01a1b, 0x01a1b),
    Interval::new(0x01a56, 0x01a56),
    Interval::new(0x01a58, 0x01a5e),
    Interval::new(0x01a60, 0x01a60),
    Interval::new(0x01a62, 0x01a62),
    Interval::new(0x01a65, 0x01a6c),
    Interval::new(0x01a73, 0x01a7c),
    Interval::new(0x01a7f, 0x01a7f),
    Interval::new(0x01ab0, 0x01ace),
    Interval::new(0x01b00, 0x01b03),
    Interval::new(0x01b34, 0x01b34),
    Interval::new(0x01b36, 0x01b3a),
    Interval::new(0x01b3c, 0x01b3c),
    Interval::new(0x01b42, 0x01b42),
    Interval::new(0x01b6b, 0x01b73),
    Interval::new(0x01b80, 0x01b81),
    Interval::new(0x01ba2, 0x01ba5),
    Interval::new(0x01ba8, 0x01ba9),
    Interval::new(0x01bab, 0x01bad),
    Interval::new(0x01be6, 0x01be6),
    Interval::new(0x01be8, 0x01be9),
    Interval::new(0x01bed, 0x01bed),
    Interval::new(0x01bef, 0x01bf1),
    Interval::new(0x01c2c, 0x01c33),
    Interval::new(0x01c36, 0x01c37),
    Interval::new(0x01cd0, 0x01cd2),
    Interval::new(0x01cd4, 0x01ce0),
    Interval::new(0x01ce2, 0x01ce8),
    Interval::new(0x01ced, 0x01ced),
    Interval::new(0x01cf4, 0x01cf4),
    Interval::new(0x01cf8, 0x01cf9),
    Interval::new(0x01dc0, 0x01dff),
    Interval::new(0x020d0, 0x020f0),
    Interval::new(0x02cef, 0x02cf1),
    Interval::new(0x02d7f, 0x02d7f),
    Interval::new(0x02de0, 0x02dff),
    Interval::new(0x0302a, 0x0302d),
    Interval::new(0x03099, 0x0309a),
    Interval::new(0x0a66f, 0x0a672),
    Interval::new(0x0a674, 0x0a67d),
    Interval::new(0x0a69e, 0x0a69f),
    Interval::new(0x0a6f0, 0x0a6f1),
    Interval::new(0x0a802, 0x0a802),
    Interval::new(0x0a806, 0x0a806),
    Interval::new(0x0a80b, 0x0a80b),
    Interval::new(0x0a825, 0x0a826),
    Interval::new(0x0a82c, 0x0a82c),
    Interval::new(0x0a8c4, 0x0a8c5),
    Interval::new(0x0a8e0, 0x0a8f1),
    Interval::new(0x0a8ff, 0x0a8ff),
    Interval::new(0x0a926, 0x0a92d),
    Interval::new(0x0a947, 0x0a951),
    Interval::new(0x0a980, 0x0a982),
    Interval::new(0x0a9b3, 0x0a9b3),
    Interval::new(0x0a9b6, 0x0a9b9),
    Interval::new(0x0a9bc, 0x0a9bd),
    Interval::new(0x0a9e5, 0x0a9e5),
    Interval::new(0x0aa29, 0x0aa2e),
    Interval::new(0x0aa31, 0x0aa32),
    Interval::new(0x0aa35, 0x0aa36),
    Interval::new(0x0aa43, 0x0aa43),
    Interval::new(0x0aa4c, 0x0aa4c),
    Interval::new(0x0aa7c, 0x0aa7c),
    Interval::new(0x0aab0, 0x0aab0),
    Interval::new(0x0aab2, 0x0aab4),
    Interval::new(0x0aab7, 0x0aab8),
    Interval::new(0x0aabe, 0x0aabf),
    Interval::new(0x0aac1, 0x0aac1),
    Interval::new(0x0aaec, 0x0aaed),
    Interval::new(0x0aaf6, 0x0aaf6),
    Interval::new(0x0abe5, 0x0abe5),
    Interval::new(0x0abe8, 0x0abe8),
    Interval::new(0x0abed, 0x0abed),
    Interval::new(0x0fb1e, 0x0fb1e),
    Interval::new(0x0fe00, 0x0fe0f),
    Interval::new(0x0fe20, 0x0fe2f),
    Interval::new(0x101fd, 0x101fd),
    Interval::new(0x102e0, 0x102e0),
    Interval::new(0x10376, 0x1037a),
    Interval::new(0x10a01, 0x10a03),
    Interval::new(0x10a05, 0x10a06),
    Interval::new(0x10a0c, 0x10a0f),
    Interval::new(0x10a38, 0x10a3a),
    Interval::new(0x10a3f, 0x10a3f),
    Interval::new(0x10ae5, 0x10ae6),
    Interval::new(0x10d24, 0x10d27),
    Interval::new(0x10eab, 0x10eac),
    Interval::new(0x10efd, 0x10eff),
    Interval::new(0x10f46, 0x10f50),
    Interval::new(0x10f82, 0x10f85),
    Interval::new(0x11001, 0x11001),
    Interval::new(0x11038, 0x11046),
    Interval::new(0x11070, 0x11070),
    Interval::new(0x11073, 0x11074),
    Interval::new(0x1107f, 0x11081),
    Interval::new(0x110b3, 0x110b6),
    Interval::new(0x110b9, 0x110ba),
    Interval::new(0x110c2, 0x110c2),
    Interval::new(0x11100, 0x11102),
    Interval::new(0x11127, 0x1112b),
    Interval::new(0x1112d, 0x11134),
    Interval::new(0x11173, 0x11173),
    Interval::new(0x11180, 0x11181),
    Interval::new(0x111b6, 0x111be),
    Interval::new(0x111c9, 0x111cc),
    Interval::new(0x111cf, 0x111cf),
    Interval::new(0x1122f, 0x11231),
    Interval::new(0x11234, 0x11234),
    Interval::new(0x11236, 0x11237),
    Interval::new(0x1123e, 0x1123e),
    Interval::new(0x11241, 0x11241),
    Interval::new(0x112df, 0x112df),
    Interval::new(0x112e3, 0x112ea),
    Interval::new(0x11300, 0x11301),
    Interval::new(0x1133b, 0x1133c),
    Interval::new(0x11340, 0x11340),
    Interval::new(0x11366, 0x1136c),
    Interval::new(0x11370, 0x11374),
    Interval::new(0x11438, 0x1143f),
    Interval::new(0x11442, 0x11444),
    Interval::new(0x11446, 0x11446),
    Interval::new(0x1145e, 0x1145e),
    Interval::new(0x114b3, 0x114b8),
    Interval::new(0x114ba, 0x114ba),
    Interval::new(0x114bf, 0x114c0),
    Interval::new(0x114c2, 0x114c3),
    Interval::new(0x115b2, 0x115b5),
    Interval::new(0x115bc, 0x115bd),
    Interval::new(0x115bf, 0x115c0),
    Interval::new(0x115dc, 0x115dd),
    Interval::new(0x11633, 0x1163a),
    Interval::new(0x1163d, 0x1163d),
    Interval::new(0x1163f, 0x11640),
    Interval::new(0x116ab, 0x116ab),
    Interval::new(0x116ad, 0x116ad),
    Interval::new(0x116b0, 0x116b5),
    Interval::new(0x116b7, 0x116b7),
    Interval::new(0x1171d, 0x1171f),
    Interval::new(0x11722, 0x11725),
    Interval::new(0x11727, 0x1172b),
    Interval::new(0x1182f, 0x11837),
    Interval::new(0x11839, 0x1183a),
    Interval::new(0x1193b, 0x1193c),
    Interval::new(0x1193e, 0x1193e),
    Interval::new(0x11943, 0x11943),
    Interval::new(0x119d4, 0x119d7),
    Interval::new(0x119da, 0x119db),
    Interval::new(0x119e0, 0x119e0),
    Interval::new(0x11a01, 0x11a0a),
    Interval::new(0x11a33, 0x11a38),
    Interval::new(0x11a3b, 0x11a3e),
    Interval::new(0x11a47, 0x11a47),
    Interval::new(0x11a51, 0x11a56),
    Interval::new(0x11a59, 0x11a5b),
    Interval::new(0x11a8a, 0x11a96),
    Interval::new(0x11a98, 0x11a99),
    Interval::new(0x11c30, 0x11c36),
    Interval::new(0x11c38, 0x11c3d),
    Interval::new(0x11c3f, 0x11c3f),
    Interval::new(0x11c92, 0x11ca7),
    Interval::new(0x11caa, 0x11cb0),
    Interval::new(0x11cb2, 0x11cb3),
    Interval::new(0x11cb5, 0x11cb6),
    Interval::new(0x11d31, 0x11d36),
    Interval::new(0x11d3a, 0x11d3a),
    Interval::new(0x11d3c, 0x11d3d),
    Interval::new(0x11d3f, 0x11d45),
    Interval::new(0x11d47, 0x11d47),
    Interval::new(0x11d90, 0x11d91),
    Interval::new(0x11d95, 0x11d95),
    Interval::new(0x11d97, 0x11d97),
    Interval::new(0x11ef3, 0x11ef4),
    Interval::new(0x11f00, 0x11f01),
    Interval::new(0x11f36, 0x11f3a),
    Interval::new(0x11f40, 0x11f40),
    Interval::new(0x11f42, 0x11f42),
    Interval::new(0x13440, 0x13440),
    Interval::new(0x13447, 0x13455),
    Interval::new(0x16af0, 0x16af4),
    Interval::new(0x16b30, 0x16b36),
    Interval::new(0x16f4f, 0x16f4f),
    Interval::new(0x16f8f, 0x16f92),
    Interval::new(0x16fe4, 0x16fe4),
    Interval::new(0x1bc9d, 0x1bc9e),
    Interval::new(0x1cf00, 0x1cf2d),
    Interval::new(0x1cf30, 0x1cf46),
    Interval::new(0x1d167, 0x1d169),
    Interval::new(0x1d17b, 0x1d182),
    Interval::new(0x1d185, 0x1d18b),
    Interval::new(0x1d1aa, 0x1d1ad),
    Interval::new(0x1d242, 0x1d244),
    Interval::new(0x1da00, 0x1da36),
    Interval::new(0x1da3b, 0x1da6c),
    Interval::new(0x1da75, 0x1da75),
    Interval::new(0x1da84, 0x1da84),
    Interval::new(0x1da9b, 0x1da9f),
    Interval::new(0x1daa1, 0x1daaf),
    Interval::new(0x1e000, 0x1e006),
    Interval::new(0x1e008, 0x1e018),
    Interval::new(0x1e01b, 0x1e021),
    Interval::new(0x1e023, 0x1e024),
    Interval::new(0x1e026, 0x1e02a),
    Interval::new(0x1e08f, 0x1e08f),
    Interval::new(0x1e130, 0x1e136),
    Interval::new(0x1e2ae, 0x1e2ae),
    Interval::new(0x1e2ec, 0x1e2ef),
    Interval::new(0x1e4ec, 0x1e4ef),
    Interval::new(0x1e8d0, 0x1e8d6),
    Interval::new(0x1e944, 0x1e94a),
    Interval::new(0xe0100, 0xe01ef),
];

#[rustfmt::skip]
static WIDE_15_1_0: &[Interval] = &[
    Interval::new(0x01100, 0x0115f),
    Interval::new(0x0231a, 0x0231b),
    Interval::new(0x02329, 0x0232a),
    Interval::new(0x023e9, 0x023ec),
    Interval::new(0x023f0, 0x023f0),
    Interval::new(0x023f3, 0x023f3),
    Interval::new(0x025fd, 0x025fe),
    Interval::new(0x02614, 0x02615),
    Interval::new(0x02648, 0x02653),
    Interval::new(0x0267f, 0x0267f),
    Interval::new(0x02693, 0x02693),
    Interval::new(0x026a1, 0x026a1),
    Interval::new(0x026aa, 0x026ab),
    Interval::new(0x026bd, 0x026be),
    Interval::new(0x026c4, 0x026c5),
    Interval::new(0x026ce, 0x026ce),
    Interval::new(0x026d4, 0x026d4),
    Interval::new(0x026ea, 0x026ea),
    Interval::new(0x026f2, 0x026f3),
    Interval::new(0x026f5, 0x026f5),
    Interval::new(0x026fa, 0x026fa),
    Interval::new(0x026fd, 0x026fd),
    Interval::new(0x02705, 0x02705),
    Interval::new(0x0270a, 0x0270b),
    Interval::new(0x02728, 0x02728),
    Interval::new(0x0274c, 0x0274c),
    Interval::new(0x0274e, 0x0274e),
    Interval::new(0x02753, 0x02755),
    Interval::new(0x02757, 0x02757),
    Interval::new(0x02795, 0x02797),
    Interval::new(0x027b0, 0x027b0),
    Interval::new(0x027bf, 0x027bf),
    Interval::new(0x02b1b, 0x02b1c),
    Interval::new(0x02b50, 0x02b50),
    Interval::new(0x02b55, 0x02b55),
    Interval::new(0x02e80, 0x02e99),
    Interval::new(0x02e9b, 0x02ef3),
    Interval::new(0x02f00, 0x02fd5),
    Interval::new(0x02ff0, 0x0303e),
    Interval::new(0x03041, 0x03096),
    Interval::new(0x03099, 0x030ff),
    Interval::new(0x03105, 0x0312f),
    Interval::new(0x03131, 0x0318e),
    Interval::new(0x03190, 0x031e3),
    Interval::new(0x031ef, 0x0321e),
    Interval::new(0x03220, 0x03247),
    Interval::new(0x03250, 0x04dbf),
    Interval::new(0x04e00, 0x0a48c),
    Interval::new(0x0a490, 0x0a4c6),
    Interval::new(0x0a960, 0x0a97c),
    Interval::new(0x0ac00, 0x0d7a3),
    Interval::new(0x0f900, 0x0faff),
    Interval::new(0x0fe10, 0x0fe19),
    Interval::new(0x0fe30, 0x0fe52),
    Interval::new(0x0fe54, 0x0fe66),
    Interval::new(0x0fe68, 0x0fe6b),
    Interval::new(0x0ff01, 0x0ff60),
    Interval::new(0x0ffe0, 0x0ffe6),
    Interval::new(0x16fe0, 0x16fe4),
    Interval::new(0x16ff0, 0x16ff1),
    Interval::new(0x17000, 0x187f7),
    Interval::new(0x18800, 0x18cd5),
    Interval::new(0x18d00, 0x18d08),
    Interval::new(0x1aff0, 0x1aff3),
    Interval::new(0x1aff5, 0x1affb),
    Interval::new(0x1affd, 0x1affe),
    Interval::new(0x1b000, 0x1b122),
    Interval::new(0x1b132, 0x1b132),
    Interval::new(0x1b150, 0x1b152),
    Interval::new(0x1b155, 0x1b155),
    Interval::new(0x1b164, 0x1b167),
    Interval::new(0x1b170, 0x1b2fb),
    Interval::new(0x1f004, 0x1f004),
    Interval::new(0x1f0cf, 0x1f0cf),
    Interval::new(0x1f18e, 0x1f18e),
    Interval::new(0x1f191, 0x1f19a),
    Interval::new(0x1f200, 0x1f202),
    Interval::new(0x1f210, 0x1f23b),
    Interval::new(0x1f240, 0x1f248),
    Interval::new(0x1f250, 0x1f251),
    Interval::new(0x1f260, 0x1f265),
    Interval::new(0x1f300, 0x1f320),
    Interval::new(0x1f32d, 0x1f335),
    Interval::new(0x1f337, 0x1f37c),
    Interval::new(0x1f37e, 0x1f393),
    Interval::new(0x1f3a0, 0x1f3ca),
    Interval::new(0x1f3cf, 0x1f3d3),
    Interval::new(0x1f3e0, 0x1f3f0),
    Interval::new(0x1f3f4, 0x1f3f4),
    Interval::new(0x1f3f8, 0x1f43e),
    Interval::new(0x1f440, 0x1f440),
    Interval::new(0x1f442, 0x1f4fc),
    Interval::new(0x1f4ff, 0x1f53d),
    Interval::new(0x1f54b, 0x1f54e),
    Interval::new(0x1f550, 0x1f567),
    Interval::new(0x1f57a, 0x1f57a),
    Interval::new(0x1f595, 0x1f596),
    Interval::new(0x1f5a4, 0x1f5a4),
    Interval::new(0x1f5fb, 0x1f64f),
    Interval::new(0x1f680, 0x1f6c5),
    Interval::new(0x1f6cc, 0x1f6cc),
    Interval::new(0x1f6d0, 0x1f6d2),
    Interval::new(0x1f6d5, 0x1f6d7),
    Interval::new(0x1f6dc, 0x1f6df),
    Interval::new(0x1f6eb, 0x1f6ec),
    Interval::new(0x1f6f4, 0x1f6fc),
    Interval::new(0x1f7e0, 0x1f7eb),
    Interval::new(0x1f7f0, 0x1f7f0),
    Interval::new(0x1f90c, 0x1f93a),
    Interval::new(0x1f93c, 0x1f945),
    Interval::new(0x1f947, 0x1f9ff),
    Interval::new(0x1fa70, 0x1fa7c),
    Interval::new(0x1fa80, 0x1fa88),
    Interval::new(0x1fa90, 0x1fabd),
    Interval::new(0x1fabf, 0x1fac5),
    Interval::new(0x1face, 0x1fadb),
    Interval::new(0x1fae0, 0x1fae8),
    Interval::new(0x1faf0, 0x1faf8),
    Interval::new(0x20000, 0x2fffd),
    Interval::new(0x30000, 0x3fffd),
];
