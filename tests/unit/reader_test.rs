//! Tests for reading scan text end to end
//!
//! Reader -> segmenter -> recognizer -> validator, through the public API.

use bankocr::adapters::{AccountWriter, OcrReader};
use bankocr::core::models::{Account, Status};
use bankocr::core::ports::RecordSource;
use bankocr::core::services::{SegmentOptions, scan};
use bankocr::output::OutputMode;

use crate::common::{render, scan_text};

const ONES: &str = "                           \n  |  |  |  |  |  |  |  |  |\n  |  |  |  |  |  |  |  |  |\n\n";

const TWOS: &str = " _  _  _  _  _  _  _  _  _ \n _| _| _| _| _| _| _| _| _|\n|_ |_ |_ |_ |_ |_ |_ |_ |_ \n\n";

const ONE_TO_NINE: &str = "    _  _     _  _  _  _  _ \n  | _| _||_||_ |_   ||_||_|\n  ||_  _|  | _||_|  ||_| _|\n\n";

#[test]
fn reads_records_in_order() {
    let mut reader = OcrReader::from_text(format!("{ONES}{TWOS}{ONE_TO_NINE}"));

    assert_eq!(reader.next_account_number().unwrap().as_deref(), Some("111111111"));
    assert!(reader.is_ready());
    assert_eq!(reader.next_account_number().unwrap().as_deref(), Some("222222222"));
    assert!(reader.is_ready());
    assert_eq!(reader.next_account_number().unwrap().as_deref(), Some("123456789"));
    assert!(reader.is_ready());

    assert_eq!(reader.next_account_number().unwrap(), None);
    assert!(!reader.is_ready());

    for _ in 0..3 {
        assert_eq!(reader.next_account_number().unwrap(), None);
    }
}

#[test]
fn ones_are_checksummed() {
    let mut reader = OcrReader::from_text(ONES);
    let account = Account::try_from(reader.next_account_number().unwrap()).unwrap();
    assert_eq!(account.number(), "111111111");
    assert_eq!(account.checksum(), Some(1));
    assert_eq!(account.status(), Status::Erroneous);
}

#[test]
fn exhausted_reader_rejects_account_construction() {
    let mut reader = OcrReader::from_text("");
    assert!(Account::try_from(reader.next_account_number().unwrap()).is_err());
}

#[test]
fn last_separator_optional() {
    let text = ONE_TO_NINE.trim_end_matches('\n');
    let mut reader = OcrReader::from_text(text);
    assert_eq!(reader.next_account_number().unwrap().as_deref(), Some("123456789"));
    assert_eq!(reader.next_account_number().unwrap(), None);
}

#[test]
fn unreadable_digits_marked() {
    let mut reader = OcrReader::from_text(scan_text(&["86110x?36"]));
    assert_eq!(reader.next_account_number().unwrap().as_deref(), Some("86110??36"));
}

#[test]
fn record_source_stays_empty() {
    let mut reader = OcrReader::from_text(ONES);
    assert!(reader.next_record().unwrap().is_some());
    assert!(reader.next_record().unwrap().is_none());
    assert!(reader.next_record().unwrap().is_none());
}

#[test]
fn scan_writes_result_file_format() {
    let mut reader = OcrReader::from_text(scan_text(&["000000051", "49006771x", "664371495"]));
    let mut writer = AccountWriter::new(Vec::new(), OutputMode::Human);

    let summary = scan(&mut reader, &mut writer, SegmentOptions::default()).unwrap();

    let out = String::from_utf8(writer.into_inner()).unwrap();
    assert_eq!(out, "000000051 \n49006771? ILL\n664371495 ERR\n");
    assert_eq!(summary.total, 3);
    assert_eq!(summary.valid, 1);
    assert_eq!(summary.illegible, 1);
    assert_eq!(summary.erroneous, 1);
}

#[test]
fn blank_blocks_between_records_are_skipped() {
    let text = format!("{ONES}\n\n\n\n{TWOS}   \n \n\n\n{ONE_TO_NINE}");
    let mut reader = OcrReader::from_text(text);
    let mut writer = AccountWriter::new(Vec::new(), OutputMode::Human);

    let summary = scan(&mut reader, &mut writer, SegmentOptions::default()).unwrap();

    let out = String::from_utf8(writer.into_inner()).unwrap();
    assert_eq!(out, "111111111 ERR\n222222222 ERR\n123456789 \n");
    assert_eq!(summary.total, 3);
}

#[test]
fn strict_width_flags_trailing_text() {
    let [top, middle, bottom] = render("123456789");
    let text = format!("{top}\n{middle}garbage\n{bottom}\n\n");

    let mut lenient = OcrReader::from_text(text.clone());
    assert_eq!(lenient.next_account_number().unwrap().as_deref(), Some("123456789"));

    let mut strict = OcrReader::from_text(text).with_options(SegmentOptions::strict());
    let number = strict.next_account_number().unwrap().unwrap();
    assert_eq!(number, "12345678?");
    assert_eq!(Account::new(number).status(), Status::Illegible);
}
