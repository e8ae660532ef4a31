//! Glyph segmenter - cuts a record's three lines into nine glyphs
//!
//! Each line is padded with spaces to [`LINE_WIDTH`] columns. Glyph `k` takes
//! columns `3k..3k+3` from the top, middle and bottom rows in that order.
//! Anything past column 27 is ignored unless strict width is enabled.

use log::debug;

use crate::core::models::{
    DIGITS_PER_ACCOUNT, GLYPH_WIDTH, Glyph, LINE_WIDTH, ROWS_PER_RECORD, Record, all_blank,
};

/// Controls how lines wider than a record are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentOptions {
    /// Fold non-blank text past column 27 into the last glyph so it reads
    /// as illegible instead of being dropped
    pub strict_width: bool,
}

impl SegmentOptions {
    /// Options with strict width enabled
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict_width: true }
    }
}

/// Cut up to three lines into glyphs
///
/// Missing lines are treated as empty. Returns `None` when there is no glyph
/// content at all (no lines, or every line blank), so callers never see a
/// sequence of nine empty glyphs.
#[must_use]
pub fn segment<S: AsRef<str>>(lines: &[S], options: SegmentOptions) -> Option<Vec<Glyph>> {
    if all_blank(lines) {
        debug!("segment(): no glyph content in {} line(s)", lines.len());
        return None;
    }

    let mut cells = vec![String::with_capacity(GLYPH_WIDTH * ROWS_PER_RECORD); DIGITS_PER_ACCOUNT];

    for row in 0..ROWS_PER_RECORD {
        let line: Vec<char> = lines.get(row).map_or("", |line| line.as_ref()).chars().collect();
        let tail = overflow(&line);

        for (slot, glyph) in cells.iter_mut().enumerate() {
            let start = slot * GLYPH_WIDTH;
            glyph.extend((start..start + GLYPH_WIDTH).map(|col| line.get(col).copied().unwrap_or(' ')));

            if options.strict_width && slot == DIGITS_PER_ACCOUNT - 1 {
                glyph.push_str(&tail);
            }
        }
    }

    let glyphs: Vec<Glyph> = cells.into_iter().map(Glyph::new).collect();
    debug!("segment(): glyphs={glyphs:?}");
    Some(glyphs)
}

/// Cut a record into glyphs
#[must_use]
pub fn segment_record(record: &Record, options: SegmentOptions) -> Option<Vec<Glyph>> {
    segment(record.rows(), options)
}

/// Text past the record width, with trailing whitespace dropped
fn overflow(line: &[char]) -> String {
    line.get(LINE_WIDTH..)
        .map(|tail| tail.iter().collect::<String>().trim_end().to_string())
        .unwrap_or_default()
}
