//! Glyphs and records
//!
//! A record is the three-line OCR scan of one account number. Each record is
//! cut into nine glyphs, one per digit position, where a glyph is the 3x3
//! block of `' '`, `'_'` and `'|'` characters read row by row.

/// Number of text rows in a record
pub const ROWS_PER_RECORD: usize = 3;

/// Width of one digit in columns
pub const GLYPH_WIDTH: usize = 3;

/// Number of digits in an account number
pub const DIGITS_PER_ACCOUNT: usize = 9;

/// Width of a full record line (`DIGITS_PER_ACCOUNT * GLYPH_WIDTH`)
pub const LINE_WIDTH: usize = DIGITS_PER_ACCOUNT * GLYPH_WIDTH;

/// Character used for a glyph that matches no known digit
pub const ILLEGIBLE_DIGIT: char = '?';

/// True when every line is empty or whitespace
#[must_use]
pub fn all_blank<S: AsRef<str>>(lines: &[S]) -> bool {
    lines.iter().all(|line| line.as_ref().trim().is_empty())
}

/// One digit's printed form, 3 rows of 3 columns concatenated row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Glyph(String);

impl Glyph {
    /// Wrap a row-major glyph string
    #[must_use]
    pub fn new(cells: impl Into<String>) -> Self {
        Self(cells.into())
    }

    /// The glyph cells as a string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl From<&str> for Glyph {
    fn from(cells: &str) -> Self {
        Self::new(cells)
    }
}

/// The three content lines of one scanned account number
///
/// The blank separator that follows a record in the input is not part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    rows: [String; ROWS_PER_RECORD],
}

impl Record {
    /// Build a record from its top, middle and bottom rows
    #[must_use]
    pub fn new(top: impl Into<String>, middle: impl Into<String>, bottom: impl Into<String>) -> Self {
        Self {
            rows: [top.into(), middle.into(), bottom.into()],
        }
    }

    /// Rows in top-to-bottom order
    #[must_use]
    pub const fn rows(&self) -> &[String; ROWS_PER_RECORD] {
        &self.rows
    }

    /// True when every row is empty or whitespace
    #[must_use]
    pub fn is_blank(&self) -> bool {
        all_blank(&self.rows)
    }
}
