//! Whimsical stand-ins for letters with no matching element symbol.
//!
//! Several letters carry more than one candidate. The first entry for each
//! letter is the classic name; the tokenizer picks among candidates through
//! its random source.

/// `(letter, name)`. Every entry shares [`PLACEHOLDER_COLOR`].
pub(super) const PLACEHOLDERS: &[(char, &str)] = &[
    ('A', "Arium"),
    ('D', "Dium"),
    ('E', "Elium"),
    ('G', "Gium"),
    ('I', "Ium"),
    ('J', "Jium"),
    ('K', "Kium"),
    ('L', "Lium"),
    ('M', "Mium"),
    ('N', "Nium"),
    ('O', "Oium"),
    ('P', "Pium"),
    ('Q', "Qium"),
    ('R', "Rium"),
    ('S', "Sium"),
    ('T', "Tium"),
    ('U', "Uium"),
    ('V', "Vium"),
    ('W', "Wium"),
    ('X', "Xium"),
    ('Y', "Yium"),
    ('Z', "Zium"),
    // Alternates
    ('A', "Aurorium"),
    ('E', "Elysium"),
    ('J', "Jovium"),
    ('Q', "Quirkium"),
    ('X', "Xylium"),
    ('Z', "Zephyrium"),
];

pub(super) const PLACEHOLDER_COLOR: &str = "#E5E7EB";
