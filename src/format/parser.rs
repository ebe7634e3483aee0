//! `.gen` file parser

use std::io::{BufRead, BufReader, Read};

use tracing::{debug, trace};

use super::GeneratorFile;
use crate::config::ReadOptions;
use crate::error::{GenError, GenResult};
use crate::geometry::SpaceVariant;
use crate::matrix::Matrix4;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// One line of input after comments are stripped
#[derive(Debug)]
enum Line {
    Comment(String),
    Blank,
    Row([f64; 4]),
}

/// Streaming reader for generator files
pub struct GenReader<R> {
    reader: BufReader<R>,
    line_number: usize,
    options: ReadOptions,
}

impl<R: Read> GenReader<R> {
    pub fn new(reader: R) -> Self {
        GenReader {
            reader: BufReader::new(reader),
            line_number: 0,
            options: ReadOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ReadOptions) -> Self {
        self.options = options;
        self
    }

    /// Read one raw line, without its terminator.
    /// Lines end at `\n`, `\r\n` or a lone `\r`.
    fn read_line(&mut self) -> GenResult<Option<Vec<u8>>> {
        let mut line = Vec::new();
        let mut started = false;

        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                if !started {
                    return Ok(None);
                }
                break;
            }
            started = true;

            match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(i) => {
                    let terminator = buf[i];
                    line.extend_from_slice(&buf[..i]);
                    self.reader.consume(i + 1);
                    if terminator == b'\r' && self.reader.fill_buf()?.first() == Some(&b'\n') {
                        self.reader.consume(1);
                    }
                    break;
                }
                None => {
                    let n = buf.len();
                    line.extend_from_slice(buf);
                    self.reader.consume(n);
                }
            }
        }

        self.line_number += 1;
        Ok(Some(line))
    }

    /// Parse the whole input into a [`GeneratorFile`]
    pub fn read(&mut self) -> GenResult<GeneratorFile> {
        let mut file = GeneratorFile::default();
        let mut in_header = true;
        let mut rows: Vec<[f64; 4]> = Vec::with_capacity(4);

        while let Some(mut raw) = self.read_line()? {
            if self.line_number == 1 {
                if raw.starts_with(&[0xFF, 0xFE]) || raw.starts_with(&[0xFE, 0xFF]) {
                    return Err(GenError::Utf16);
                }
                if raw.starts_with(UTF8_BOM) {
                    raw.drain(..UTF8_BOM.len());
                }
                file.variant = SpaceVariant::from_first_line(&decode_text(&raw));
            }

            match classify_line(&raw, self.line_number)? {
                Line::Comment(text) => {
                    if in_header {
                        file.header.push(text);
                    }
                }
                Line::Blank => {
                    in_header = false;
                    if !rows.is_empty() && self.options.strict_blocks {
                        return Err(GenError::IncompleteBlock {
                            line: self.line_number,
                            rows: rows.len(),
                        });
                    }
                }
                Line::Row(row) => {
                    in_header = false;
                    trace!(line = self.line_number, ?row, "matrix row");
                    rows.push(row);
                    if rows.len() == 4 {
                        let matrix = Matrix4::from_rows([rows[0], rows[1], rows[2], rows[3]]);
                        debug!(
                            index = file.generators.len(),
                            line = self.line_number,
                            parity = %matrix.parity,
                            "read generator"
                        );
                        file.generators.push(matrix);
                        rows.clear();
                    }
                }
            }
        }

        if !rows.is_empty() {
            return Err(GenError::IncompleteBlock {
                line: self.line_number,
                rows: rows.len(),
            });
        }

        Ok(file)
    }
}

/// UTF-8 if possible, otherwise Latin-1
fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

fn classify_line(raw: &[u8], line_number: usize) -> GenResult<Line> {
    let start = raw
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(raw.len());

    if raw.get(start) == Some(&b'#') {
        let text = decode_text(&raw[start + 1..]);
        let text = text
            .strip_prefix(['\t', ' '])
            .map(str::to_string)
            .unwrap_or(text);
        return Ok(Line::Comment(text));
    }

    // A '#' after the numbers starts a trailing comment
    let content = match raw.iter().position(|&b| b == b'#') {
        Some(end) => &raw[..end],
        None => raw,
    };

    let content = std::str::from_utf8(content)
        .ok()
        .filter(|s| s.is_ascii())
        .ok_or_else(|| GenError::parse(line_number, "matrix file contains text other than numbers"))?;

    let tokens: Vec<&str> = content.split_ascii_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Line::Blank);
    }
    if tokens.len() != 4 {
        return Err(GenError::parse(
            line_number,
            format!("expected 4 numbers per row, found {}", tokens.len()),
        ));
    }

    let mut row = [0.0; 4];
    for (slot, token) in row.iter_mut().zip(&tokens) {
        *slot = parse_number(token, line_number)?;
    }
    Ok(Line::Row(row))
}

fn parse_number(token: &str, line_number: usize) -> GenResult<f64> {
    let value: f64 = token
        .parse()
        .map_err(|_| GenError::parse(line_number, format!("'{}' is not a number", token)))?;
    if !value.is_finite() {
        return Err(GenError::parse(
            line_number,
            format!("'{}' is not a finite number", token),
        ));
    }
    Ok(value)
}
