//! Reader and writer for `.gen` matrix generator files.
//!
//! A file is a list of 4×4 matrices, one row of four numbers per line,
//! with blank lines between matrices and `#` comments anywhere:
//!
//! ```text
//! #	Klein Space
//!
//! 1 0 0 0
//! 0 1 0 0
//! 0 0 1 0
//! 1 0 0 1
//! ```
//!
//! Text is UTF-8 or Latin-1, and anything other than ASCII may only
//! appear inside comments.

mod parser;
mod writer;

pub use parser::GenReader;
pub use writer::{format_entry, GenWriter};

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::info;

use crate::config::{ReadOptions, WriteOptions};
use crate::error::GenResult;
use crate::geometry::{detect_space_type, SpaceType, SpaceVariant};
use crate::matrix::Matrix4;

/// The contents of one generator file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeneratorFile {
    /// Leading comment block, without the `#` marker
    pub header: Vec<String>,
    pub generators: Vec<Matrix4>,
    pub variant: SpaceVariant,
}

impl GeneratorFile {
    pub fn new(generators: Vec<Matrix4>) -> Self {
        GeneratorFile {
            header: Vec::new(),
            generators,
            variant: SpaceVariant::Generic,
        }
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// First header line, typically the name of the space
    pub fn title(&self) -> Option<&str> {
        self.header.iter().map(|l| l.trim()).find(|l| !l.is_empty())
    }

    pub fn space_type(&self, eps: f64) -> GenResult<SpaceType> {
        detect_space_type(&self.generators, eps)
    }
}

/// Read a generator file from a path
pub fn read_gen_file(path: &Path, options: &ReadOptions) -> GenResult<GeneratorFile> {
    let file = File::open(path)?;
    let parsed = read_gen_from(BufReader::new(file), options)?;
    info!(
        path = %path.display(),
        generators = parsed.len(),
        "loaded generator file"
    );
    Ok(parsed)
}

/// Read a generator file from a string
pub fn read_gen_str(content: &str, options: &ReadOptions) -> GenResult<GeneratorFile> {
    read_gen_from(content.as_bytes(), options)
}

/// Read a generator file from any reader
pub fn read_gen_from<R: Read>(reader: R, options: &ReadOptions) -> GenResult<GeneratorFile> {
    GenReader::new(reader).with_options(options.clone()).read()
}

/// Write a generator file to a path
pub fn write_gen_file(path: &Path, file: &GeneratorFile, options: &WriteOptions) -> GenResult<()> {
    let out = File::create(path)?;
    let mut writer = GenWriter::new(BufWriter::new(out)).with_options(options.clone());
    writer.write(file)?;
    writer.flush()?;
    info!(path = %path.display(), generators = file.len(), "wrote generator file");
    Ok(())
}

/// Serialize a generator file to a string
pub fn write_gen_string(file: &GeneratorFile, options: &WriteOptions) -> GenResult<String> {
    let mut buffer = Vec::new();
    GenWriter::new(&mut buffer)
        .with_options(options.clone())
        .write(file)?;
    // The writer only emits ASCII and the header, which came from &str
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write to any writer
pub fn write_gen_to<W: Write>(writer: W, file: &GeneratorFile, options: &WriteOptions) -> GenResult<()> {
    let mut writer = GenWriter::new(writer).with_options(options.clone());
    writer.write(file)?;
    writer.flush()
}

#[cfg(test)]
mod __test__;
