//! Line-delimited JSON records
//!
//! One UTF-8 JSON object per line. Blank lines are skipped on read; a line
//! that fails to decode is reported with its 1-based line number.

use crate::error::RecordError;
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::marker::PhantomData;
use std::path::Path;

/// Streaming reader yielding one decoded record per non-blank line
pub struct JsonlReader<R, T> {
    lines: Lines<R>,
    line_no: usize,
    _record: PhantomData<fn() -> T>,
}

impl<R: BufRead, T: DeserializeOwned> JsonlReader<R, T> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            _record: PhantomData,
        }
    }
}

impl<R: BufRead, T: DeserializeOwned> Iterator for JsonlReader<R, T> {
    type Item = Result<T, RecordError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(RecordError::Io(e))),
            };
            self.line_no += 1;

            if line.trim().is_empty() {
                continue;
            }

            return Some(
                serde_json::from_str(&line).map_err(|source| RecordError::Malformed {
                    line: self.line_no,
                    source,
                }),
            );
        }
    }
}

/// Decode every record from a reader
pub fn read_jsonl<R: BufRead, T: DeserializeOwned>(reader: R) -> Result<Vec<T>, RecordError> {
    JsonlReader::new(reader).collect()
}

/// Decode every record from a file
pub fn read_jsonl_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>, RecordError> {
    let file = File::open(path.as_ref())?;
    read_jsonl(BufReader::new(file))
}

/// Encode records one per line, returning how many were written
pub fn write_jsonl<W, T, I>(writer: &mut W, records: I) -> Result<usize, RecordError>
where
    W: Write,
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut count = 0;
    for record in records {
        serde_json::to_writer(&mut *writer, &record).map_err(RecordError::Encode)?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Encode records to a file, creating parent directories
pub fn write_jsonl_file<T, I>(path: impl AsRef<Path>, records: I) -> Result<usize, RecordError>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    write_jsonl(&mut writer, records)
}
