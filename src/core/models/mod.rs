//! Domain models for bankocr
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Record`] - Three scanned lines for one account number
//! - [`Glyph`] - One digit's 3x3 printed form
//! - [`Account`] - A recognized number with its checksum and classification
//! - [`Status`] - Valid, erroneous, or illegible

mod account;
mod glyph;
mod status;

pub use account::Account;
pub use glyph::{
    DIGITS_PER_ACCOUNT, GLYPH_WIDTH, Glyph, ILLEGIBLE_DIGIT, LINE_WIDTH, ROWS_PER_RECORD, Record,
    all_blank,
};
pub use status::Status;
