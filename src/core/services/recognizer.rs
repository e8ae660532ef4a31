//! Digit recognizer - maps glyphs to digit characters
//!
//! Lookup is an exact match against [`DIGIT_GLYPHS`]. There is no fuzzy
//! matching: any glyph not in the table reads as [`ILLEGIBLE_DIGIT`].

use log::debug;

use crate::core::models::{Glyph, ILLEGIBLE_DIGIT};

/// Printed form of each digit, row-major, `_` and `|` for segments
pub const DIGIT_GLYPHS: [(&str, char); 10] = [
    (" _ | ||_|", '0'),
    ("     |  |", '1'),
    (" _  _||_ ", '2'),
    (" _  _| _|", '3'),
    ("   |_|  |", '4'),
    (" _ |_  _|", '5'),
    (" _ |_ |_|", '6'),
    (" _   |  |", '7'),
    (" _ |_||_|", '8'),
    (" _ |_| _|", '9'),
];

/// Recognize a single glyph
#[must_use]
pub fn recognize(glyph: &Glyph) -> char {
    DIGIT_GLYPHS
        .iter()
        .find(|(cells, _)| *cells == glyph.as_str())
        .map_or(ILLEGIBLE_DIGIT, |&(_, digit)| digit)
}

/// Recognize a sequence of glyphs into an account number, keeping their order
#[must_use]
pub fn recognize_all(glyphs: &[Glyph]) -> String {
    let number: String = glyphs.iter().map(recognize).collect();
    debug!("recognize_all(): number='{number}'");
    number
}

/// The printed form of a digit, if `digit` is `'0'..='9'`
#[must_use]
pub fn glyph_for(digit: char) -> Option<Glyph> {
    DIGIT_GLYPHS
        .iter()
        .find(|&&(_, d)| d == digit)
        .map(|&(cells, _)| Glyph::new(cells))
}
