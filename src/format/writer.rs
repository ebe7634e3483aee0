//! `.gen` file writer

use std::io::Write;

use super::GeneratorFile;
use crate::config::{WriteOptions, MAX_PRECISION};
use crate::error::GenResult;
use crate::matrix::Matrix4;

/// Fixed-precision entry with a leading space in place of a plus sign,
/// so that columns line up. Anything that rounds to zero, `-0.0` and tiny
/// negatives included, prints as positive zero.
pub fn format_entry(value: f64, precision: usize) -> String {
    let precision = precision.min(MAX_PRECISION);
    let text = format!("{:.*}", precision, value);
    match text.strip_prefix('-') {
        Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => {
            format!(" {}", magnitude)
        }
        Some(_) => text,
        None => format!(" {}", text),
    }
}

/// Writer for generator files
pub struct GenWriter<W: Write> {
    writer: W,
    options: WriteOptions,
}

impl<W: Write> GenWriter<W> {
    pub fn new(writer: W) -> Self {
        GenWriter {
            writer,
            options: WriteOptions::default(),
        }
    }

    pub fn with_options(mut self, options: WriteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn write(&mut self, file: &GeneratorFile) -> GenResult<()> {
        let mut needs_separator = false;

        if self.options.write_header && !file.header.is_empty() {
            for line in &file.header {
                if line.is_empty() {
                    writeln!(self.writer, "#")?;
                } else {
                    writeln!(self.writer, "#\t{}", line)?;
                }
            }
            needs_separator = true;
        }

        for matrix in &file.generators {
            if needs_separator {
                writeln!(self.writer)?;
            }
            self.write_matrix(matrix)?;
            needs_separator = true;
        }

        Ok(())
    }

    fn write_matrix(&mut self, matrix: &Matrix4) -> GenResult<()> {
        for row in &matrix.m {
            let cells: Vec<String> = row
                .iter()
                .map(|&v| format_entry(v, self.options.precision))
                .collect();
            writeln!(self.writer, "{}", cells.join(" "))?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> GenResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
