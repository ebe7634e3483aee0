//! Reader edge cases

use super::load;
use crate::config::ReadOptions;
use crate::error::GenError;
use crate::format::{read_gen_from, read_gen_str};
use crate::geometry::SpaceVariant;

const TRANSLATION: &str = "1 0 0 0\n0 1 0 0\n0 0 1 0\n0 0 3 1\n";

#[test]
fn test_comment_and_blank_only_input_is_empty() {
    assert!(load("").is_empty());
    assert!(load("\n\n   \n").is_empty());
    assert!(load("# only\n#\tcomments\n\n# here\n").is_empty());
}

#[test]
fn test_header_stops_at_first_blank_line() {
    let text = format!("#\tTitle\n# second\n\n# not header\n{}", TRANSLATION);
    let file = load(&text);
    assert_eq!(file.header, vec!["Title".to_string(), "second".to_string()]);
    assert_eq!(file.len(), 1);
    assert_eq!(file.generators[0].m[3][2], 3.0);
}

#[test]
fn test_consecutive_blocks_without_separator() {
    let text = format!("{}{}", TRANSLATION, TRANSLATION);
    assert_eq!(load(&text).len(), 2);
}

#[test]
fn test_crlf_line_endings() {
    let text = TRANSLATION.replace('\n', "\r\n");
    let file = load(&text);
    assert_eq!(file.len(), 1);
}

#[test]
fn test_cr_only_line_endings() {
    let file = load("#\tTitle\r1 0 0 0\r0 1 0 0\r0 0 1 0\r1 0 0 1\r");
    assert_eq!(file.header, vec!["Title".to_string()]);
    assert_eq!(file.len(), 1);
    assert_eq!(file.generators[0].m[3], [1.0, 0.0, 0.0, 1.0]);

    let text = format!("{}\r{}", TRANSLATION, TRANSLATION).replace('\n', "\r");
    assert_eq!(load(&text).len(), 2);
}

#[test]
fn test_cr_only_errors_report_line_numbers() {
    let err = read_gen_str("# one\r# two\r1 0 0\r", &ReadOptions::default()).unwrap_err();
    assert!(matches!(err, GenError::Parse { line: 3, .. }));
}

#[test]
fn test_mixed_line_endings() {
    let text = "#\tMixed\r\n1 0 0 0\r0 1 0 0\n0 0 1 0\r\n0 0 2 1";
    let file = load(text);
    assert_eq!(file.header, vec!["Mixed".to_string()]);
    assert_eq!(file.len(), 1);
    assert_eq!(file.generators[0].m[3][2], 2.0);
}

#[test]
fn test_utf8_bom_before_comment() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(b"#\tSeifert-Weber Dodecahedral Space\n");
    bytes.extend_from_slice(TRANSLATION.as_bytes());
    let file = read_gen_from(bytes.as_slice(), &ReadOptions::default()).unwrap();
    assert_eq!(file.variant, SpaceVariant::SeifertWeber);
    assert_eq!(file.header, vec!["Seifert-Weber Dodecahedral Space".to_string()]);
    assert_eq!(file.len(), 1);
}

#[test]
fn test_utf16_is_rejected() {
    for bom in [[0xFFu8, 0xFE], [0xFE, 0xFF]] {
        let mut bytes = bom.to_vec();
        bytes.extend_from_slice(b"#\0 \0");
        let err = read_gen_from(bytes.as_slice(), &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, GenError::Utf16));
    }
}

#[test]
fn test_row_with_wrong_field_count() {
    let err = read_gen_str("1 0 0\n", &ReadOptions::default()).unwrap_err();
    match err {
        GenError::Parse { line, message } => {
            assert_eq!(line, 1);
            assert!(message.contains("found 3"));
        }
        other => panic!("unexpected error {:?}", other),
    }
    let err = read_gen_str("#\n1 0 0 0 0\n", &ReadOptions::default()).unwrap_err();
    assert!(matches!(err, GenError::Parse { line: 2, .. }));
}

#[test]
fn test_non_numeric_token() {
    let err = read_gen_str("1 0 zero 0\n", &ReadOptions::default()).unwrap_err();
    assert!(err.to_string().contains("'zero' is not a number"));
}

#[test]
fn test_short_block_at_end_of_file() {
    let err = read_gen_str("1 0 0 0\n0 1 0 0\n", &ReadOptions::default()).unwrap_err();
    assert!(matches!(err, GenError::IncompleteBlock { line: 2, rows: 2 }));
}

#[test]
fn test_blank_line_inside_block() {
    let text = "1 0 0 0\n0 1 0 0\n\n0 0 1 0\n0 0 0 1\n";

    let err = read_gen_str(text, &ReadOptions::default()).unwrap_err();
    assert!(matches!(err, GenError::IncompleteBlock { line: 3, rows: 2 }));

    let lenient = ReadOptions {
        strict_blocks: false,
    };
    let file = read_gen_str(text, &lenient).unwrap();
    assert_eq!(file.len(), 1);
    assert!(file.generators[0].is_identity());
}

#[test]
fn test_comment_inside_block_is_ignored() {
    let text = "1 0 0 0\n0 1 0 0\n# middle\n0 0 1 0\n0 0 0 1\n";
    assert_eq!(load(text).len(), 1);
}

#[test]
fn test_read_from_path() {
    use std::io::Write;

    let mut temp_file = tempfile::NamedTempFile::new().unwrap();
    temp_file.write_all(TRANSLATION.as_bytes()).unwrap();
    let file = crate::format::read_gen_file(temp_file.path(), &ReadOptions::default()).unwrap();
    assert_eq!(file.len(), 1);

    let missing = crate::format::read_gen_file(
        std::path::Path::new("/nonexistent/space.gen"),
        &ReadOptions::default(),
    );
    assert!(matches!(missing, Err(GenError::Io(_))));
}
