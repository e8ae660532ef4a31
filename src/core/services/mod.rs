//! Business logic services
//!
//! Pure logic that operates on domain models. Nothing here touches files or
//! streams directly; input and output go through the port traits.
//!
//! - [`segmenter`] - Cut three scanned lines into nine glyphs
//! - [`recognizer`] - Map glyphs to digits
//! - [`validator`] - Checksum and classify account numbers
//! - [`scanner`] - Drive records through the whole pipeline

pub mod recognizer;
pub mod scanner;
pub mod segmenter;
pub mod validator;

pub use recognizer::{DIGIT_GLYPHS, glyph_for, recognize, recognize_all};
pub use scanner::{ScanSummary, read_account_number, scan};
pub use segmenter::{SegmentOptions, segment, segment_record};
pub use validator::{Validation, checksum_for, is_well_formed, validate};
