//! Transparent compression for seed inputs and outputs.
//!
//! Exports are often shipped as `customers_rows.csv.gz`, and a large seed file
//! compresses well, so both ends of a run go through this module:
//! - [`open_input`] opens a file and wraps it with a decompressor when the
//!   extension or the leading magic bytes name a known codec
//! - [`create_output`] creates a file (and its parent directories) and wraps
//!   it with a compressor when the extension names a known codec
//!
//! ## Built-in Codecs
//!
//! - **Gzip** (`.gz`) via `flate2` (feature: `compression-gzip`)
//! - **Zstd** (`.zst`) via `zstd` (feature: `compression-zstd`)
//!
//! With no codec features enabled both functions are plain buffered file I/O.
//!
//! Writers come back as [`FinishWrite`] trait objects. Dropping one without
//! calling [`FinishWrite::finish`] may lose the codec trailer and any buffered
//! bytes, and the error that caused the loss.

use anyhow::{Context, Result};
use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compression-gzip")]
use flate2::write::GzEncoder;
#[cfg(feature = "compression-zstd")]
use zstd::stream::write::Encoder as ZstdEncoder;

/// A compression algorithm that can wrap readers and writers.
pub trait CompressionCodec: Send + Sync {
    /// Human-readable codec name (e.g., "gzip").
    fn name(&self) -> &str;

    /// Lowercase extensions with the leading dot.
    fn extensions(&self) -> &[&str];

    /// Leading bytes identifying this format, if it has any.
    fn magic_bytes(&self) -> Option<&[u8]>;

    fn wrap_reader_dyn(&self, reader: Box<dyn Read>) -> std::io::Result<Box<dyn Read>>;

    fn wrap_writer_dyn(
        &self,
        writer: Box<dyn FinishWrite>,
    ) -> std::io::Result<Box<dyn FinishWrite>>;
}

/// A writer that must be explicitly completed.
///
/// `finish` writes any codec trailer, drains buffers all the way to the
/// underlying file and reports the first error on the way.
pub trait FinishWrite: Write {
    fn finish(self: Box<Self>) -> std::io::Result<()>;
}

impl<W: Write> FinishWrite for BufWriter<W> {
    fn finish(self: Box<Self>) -> std::io::Result<()> {
        let mut inner = self.into_inner().map_err(|e| e.into_error())?;
        inner.flush()
    }
}

static BUILTIN_CODECS: &[&dyn CompressionCodec] = &[
    #[cfg(feature = "compression-gzip")]
    &GzipCodec,
    #[cfg(feature = "compression-zstd")]
    &ZstdCodec,
];

/// Codec whose extension ends `path`, compared case-insensitively.
pub fn detect_from_extension(path: impl AsRef<Path>) -> Option<&'static dyn CompressionCodec> {
    let path_str = path.as_ref().to_string_lossy().to_lowercase();
    BUILTIN_CODECS
        .iter()
        .copied()
        .find(|codec| codec.extensions().iter().any(|ext| path_str.ends_with(ext)))
}

/// Peek at the buffered reader without consuming anything.
fn detect_from_magic<R: BufRead>(reader: &mut R) -> Option<&'static dyn CompressionCodec> {
    let buf = reader.fill_buf().ok()?;
    if buf.is_empty() {
        return None;
    }
    BUILTIN_CODECS.iter().copied().find(|codec| {
        codec
            .magic_bytes()
            .is_some_and(|magic| buf.starts_with(magic))
    })
}

/// Wrap `reader` with a decompressor chosen by `path_hint`'s extension, falling
/// back to magic bytes. Unrecognised input is returned buffered but untouched.
///
/// # Errors
/// Returns an error if the codec fails to initialise.
pub fn wrap_reader<R: Read + 'static>(reader: R, path_hint: impl AsRef<Path>) -> Result<Box<dyn Read>> {
    if let Some(codec) = detect_from_extension(&path_hint) {
        return codec
            .wrap_reader_dyn(Box::new(reader))
            .with_context(|| format!("wrap reader with {} codec", codec.name()));
    }

    let mut buf_reader = BufReader::new(reader);
    if let Some(codec) = detect_from_magic(&mut buf_reader) {
        return codec
            .wrap_reader_dyn(Box::new(buf_reader))
            .with_context(|| format!("wrap reader with {} codec", codec.name()));
    }

    Ok(Box::new(buf_reader))
}

/// Wrap `writer` with a compressor chosen by `path_hint`'s extension.
///
/// The result is always buffered; call [`FinishWrite::finish`] when done.
///
/// # Errors
/// Returns an error if the codec fails to initialise.
pub fn wrap_writer<W: Write + 'static>(
    writer: W,
    path_hint: impl AsRef<Path>,
) -> Result<Box<dyn FinishWrite>> {
    if let Some(codec) = detect_from_extension(&path_hint) {
        return codec
            .wrap_writer_dyn(Box::new(BufWriter::new(writer)))
            .with_context(|| format!("wrap writer with {} codec", codec.name()));
    }
    Ok(Box::new(BufWriter::new(writer)))
}

/// Open a file for reading, decompressing if needed.
///
/// # Errors
/// Returns an error if the file cannot be opened.
pub fn open_input(path: impl AsRef<Path>) -> Result<Box<dyn Read>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    wrap_reader(f, path).with_context(|| format!("setup decompression for {}", path.display()))
}

/// Create (truncate) a file for writing, creating parent directories first.
///
/// # Errors
/// Returns an error if the directories or the file cannot be created.
pub fn create_output(path: impl AsRef<Path>) -> Result<Box<dyn FinishWrite>> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent).with_context(|| format!("mkdir -p {}", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    wrap_writer(f, path).with_context(|| format!("setup compression for {}", path.display()))
}

#[cfg(feature = "compression-gzip")]
struct GzipCodec;

#[cfg(feature = "compression-gzip")]
impl CompressionCodec for GzipCodec {
    fn name(&self) -> &str {
        "gzip"
    }

    fn extensions(&self) -> &[&str] {
        &[".gz", ".gzip"]
    }

    fn magic_bytes(&self) -> Option<&[u8]> {
        Some(&[0x1f, 0x8b])
    }

    fn wrap_reader_dyn(&self, reader: Box<dyn Read>) -> std::io::Result<Box<dyn Read>> {
        use flate2::read::MultiGzDecoder;
        Ok(Box::new(MultiGzDecoder::new(reader)))
    }

    fn wrap_writer_dyn(
        &self,
        writer: Box<dyn FinishWrite>,
    ) -> std::io::Result<Box<dyn FinishWrite>> {
        use flate2::Compression;
        Ok(Box::new(GzEncoder::new(writer, Compression::default())))
    }
}

#[cfg(feature = "compression-gzip")]
impl FinishWrite for GzEncoder<Box<dyn FinishWrite>> {
    fn finish(self: Box<Self>) -> std::io::Result<()> {
        let inner = (*self).finish()?;
        inner.finish()
    }
}

#[cfg(feature = "compression-zstd")]
struct ZstdCodec;

#[cfg(feature = "compression-zstd")]
impl CompressionCodec for ZstdCodec {
    fn name(&self) -> &str {
        "zstd"
    }

    fn extensions(&self) -> &[&str] {
        &[".zst", ".zstd"]
    }

    fn magic_bytes(&self) -> Option<&[u8]> {
        Some(&[0x28, 0xb5, 0x2f, 0xfd])
    }

    fn wrap_reader_dyn(&self, reader: Box<dyn Read>) -> std::io::Result<Box<dyn Read>> {
        zstd::stream::read::Decoder::new(reader).map(|d| Box::new(d) as Box<dyn Read>)
    }

    fn wrap_writer_dyn(
        &self,
        writer: Box<dyn FinishWrite>,
    ) -> std::io::Result<Box<dyn FinishWrite>> {
        ZstdEncoder::new(writer, 3).map(|e| Box::new(e) as Box<dyn FinishWrite>)
    }
}

#[cfg(feature = "compression-zstd")]
impl FinishWrite for ZstdEncoder<'static, Box<dyn FinishWrite>> {
    fn finish(self: Box<Self>) -> std::io::Result<()> {
        let inner = (*self).finish()?;
        inner.finish()
    }
}
