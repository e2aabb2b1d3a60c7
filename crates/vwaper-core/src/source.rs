use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::CoreError;

/// One raw input line with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

/// Line-oriented trade input.
///
/// Lines are split on `\n`; a trailing `\r` is dropped and invalid UTF-8 is
/// replaced rather than rejected, leaving it to the parser to decide whether
/// the line is usable. The underlying reader is released when the source is
/// dropped.
#[derive(Debug)]
pub struct TradeSource<R> {
    reader: R,
    path: PathBuf,
    line_number: usize,
    buffer: Vec<u8>,
}

impl TradeSource<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|source| CoreError::source_unavailable(path, source))?;
        Ok(Self::from_reader(BufReader::new(file), path))
    }
}

impl<R: BufRead> TradeSource<R> {
    /// Wraps an already-open reader; `label` is only used in error messages.
    pub fn from_reader(reader: R, label: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            path: label.into(),
            line_number: 0,
            buffer: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_line(&mut self) -> Result<Option<SourceLine>, CoreError> {
        self.buffer.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buffer)
            .map_err(|source| CoreError::source_unavailable(&self.path, source))?;
        if read == 0 {
            return Ok(None);
        }

        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
        }
        if self.buffer.last() == Some(&b'\r') {
            self.buffer.pop();
        }

        self.line_number += 1;
        Ok(Some(SourceLine {
            number: self.line_number,
            text: String::from_utf8_lossy(&self.buffer).into_owned(),
        }))
    }
}

impl<R: BufRead> Iterator for TradeSource<R> {
    type Item = Result<SourceLine, CoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}
