use crate::config::ReadOptions;
use crate::format::{read_gen_str, GeneratorFile};

pub mod reader_test;
pub mod fixtures_test;

pub(crate) const KLEIN_SPACE: &str = include_str!("../../../data/klein_space.gen");
pub(crate) const TETRAHEDRAL_SPACE: &str = include_str!("../../../data/tetrahedral_space.gen");

pub(crate) fn load(text: &str) -> GeneratorFile {
    read_gen_str(text, &ReadOptions::default()).expect("fixture should parse")
}

/// Lines that are neither blank nor comments
pub(crate) fn data_lines(text: &str) -> usize {
    text.lines()
        .map(|l| l.trim_start_matches('\u{feff}').trim())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .count()
}

#[test]
fn test_data_lines_come_in_fours() {
    for text in [KLEIN_SPACE, TETRAHEDRAL_SPACE] {
        let lines = data_lines(text);
        assert_eq!(lines % 4, 0);
        assert_eq!(lines / 4, load(text).len());
    }
}
