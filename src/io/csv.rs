//! CSV input for customer exports.
//!
//! Two ways in, matching the two profiles:
//! - [`read_records`] loads the whole export into a `Vec` (needed when the
//!   record total must be known before the first statement is written)
//! - [`RecordStream`] yields records one at a time in file order
//!
//! Both expect a header row and pair each data row with it to build a
//! [`CustomerRecord`] keyed by header name. Rows shorter than the header are
//! accepted; their trailing columns are simply absent. Errors carry the 1-based
//! data record number.
//!
//! **Compression**: input is opened through [`open_input`], so `.gz`/`.zst`
//! exports (or gzip/zstd content behind any name) are decompressed transparently
//! when the matching feature is enabled.

use crate::io::compression::open_input;
use crate::record::CustomerRecord;
use anyhow::{Context, Result};
use csv::{StringRecord, StringRecordsIntoIter};
use std::io::Read;
use std::path::{Path, PathBuf};

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}

/// Read every record of a headered CSV file.
///
/// # Errors
/// Returns an error if the file cannot be opened or any record is malformed CSV.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<CustomerRecord>> {
    RecordStream::open(path)?.collect()
}

/// Read every record from an already-open reader. Mostly useful in tests.
///
/// # Errors
/// Returns an error if any record is malformed CSV.
pub fn read_records_from<R: Read + 'static>(reader: R) -> Result<Vec<CustomerRecord>> {
    RecordStream::from_reader(reader)?.collect()
}

/// Streaming record iterator over a headered CSV source.
///
/// Yields `Result<CustomerRecord>`; iteration is in file order and holds only
/// the current row in memory.
pub struct RecordStream {
    source: Option<PathBuf>,
    headers: StringRecord,
    inner: StringRecordsIntoIter<Box<dyn Read>>,
    position: u64,
}

impl RecordStream {
    /// Open `path` (decompressing if needed) and prepare to stream its records.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or its header row is unreadable.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_input(path)?;
        let mut stream = Self::from_boxed(reader)
            .with_context(|| format!("read CSV header of {}", path.display()))?;
        stream.source = Some(path.to_path_buf());
        Ok(stream)
    }

    /// # Errors
    /// Returns an error if the header row is unreadable.
    pub fn from_reader<R: Read + 'static>(reader: R) -> Result<Self> {
        Self::from_boxed(Box::new(reader)).context("read CSV header")
    }

    fn from_boxed(reader: Box<dyn Read>) -> csv::Result<Self> {
        let mut rdr = reader_builder().from_reader(reader);
        let headers = rdr.headers()?.clone();
        Ok(Self {
            source: None,
            headers,
            inner: rdr.into_records(),
            position: 0,
        })
    }

    /// Column names from the header row. Empty for an empty file.
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    /// Number of records yielded so far.
    pub fn position(&self) -> u64 {
        self.position
    }
}

impl Iterator for RecordStream {
    type Item = Result<CustomerRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let rec = self.inner.next()?;
        self.position += 1;
        let n = self.position;
        let rec = rec.with_context(|| match &self.source {
            Some(path) => format!("parse CSV record #{} in {}", n, path.display()),
            None => format!("parse CSV record #{}", n),
        });
        Some(rec.map(|fields| CustomerRecord::from_pairs(self.headers.iter().zip(fields.iter()))))
    }
}
