//! Run driver: read the export, write the seed file.
//!
//! [`Profile::Batched`] loads the whole export before writing so the header can
//! carry the record total; [`Profile::ConflictSafe`] streams rows straight
//! through. Either way records are processed once, in file order, on the
//! calling thread.

use crate::config::Config;
use crate::io::compression::{create_output, FinishWrite};
use crate::io::csv::{read_records, RecordStream};
use crate::metrics::RunMetrics;
use crate::profile::Profile;
use crate::record::CustomerRecord;
use crate::serializer::RowSerializer;
use crate::writer::SeedWriter;
use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub profile: Profile,
    pub output: PathBuf,
    /// Statements written, equal to records read.
    pub records: u64,
    pub metrics: RunMetrics,
}

/// Convert `config.input` into `config.output`.
///
/// The input is opened before the output is created, so a missing export
/// leaves no empty seed file behind. A failure after that point leaves a
/// partially written output.
///
/// # Errors
/// Returns an error on any I/O or CSV framing failure.
pub fn run(config: &Config) -> Result<RunReport> {
    let serializer = RowSerializer::new(config.profile, config.table.clone());
    let source_name = file_name(&config.input);
    info!(
        "Generating {} seed from {} into {}",
        config.profile,
        config.input.display(),
        config.output.display()
    );

    let metrics = if config.profile.streams_input() {
        let records = RecordStream::open(&config.input)?;
        let out = create_output(&config.output)?;
        write_seed_to_sink(out, serializer, &source_name, None, records)
    } else {
        let records = read_records(&config.input)?;
        info!("Read {} records from {}", records.len(), config.input.display());
        let out = create_output(&config.output)?;
        let total = records.len() as u64;
        write_seed_to_sink(out, serializer, &source_name, Some(total), records.into_iter().map(Ok))
    }
    .with_context(|| format!("write {}", config.output.display()))?;

    if let Some(path) = &config.metrics_json {
        metrics
            .save_to_file(path)
            .with_context(|| format!("save metrics to {}", path.display()))?;
    }

    info!("Wrote {} statements to {}", metrics.statements, config.output.display());
    Ok(RunReport {
        profile: config.profile,
        output: config.output.clone(),
        records: metrics.statements,
        metrics,
    })
}

/// Write a complete seed document for `records` into `out`.
///
/// # Errors
/// Returns the first record error or write error encountered.
pub fn write_seed<W, I>(
    out: W,
    serializer: RowSerializer,
    source_name: &str,
    total: Option<u64>,
    records: I,
) -> Result<(W, RunMetrics)>
where
    W: Write,
    I: IntoIterator<Item = Result<CustomerRecord>>,
{
    let mut writer = SeedWriter::begin(out, serializer, source_name, total)?;
    for record in records {
        writer.write_record(&record?)?;
    }
    writer.finish()
}

/// Like [`write_seed`], then finish `sink` so codec trailers and buffered
/// bytes reach the file before success is reported.
///
/// # Errors
/// Returns the first record, write or finish error encountered.
pub fn write_seed_to_sink<I>(
    sink: Box<dyn FinishWrite>,
    serializer: RowSerializer,
    source_name: &str,
    total: Option<u64>,
    records: I,
) -> Result<RunMetrics>
where
    I: IntoIterator<Item = Result<CustomerRecord>>,
{
    let (sink, metrics) = write_seed(sink, serializer, source_name, total, records)?;
    sink.finish().context("finish seed output")?;
    Ok(metrics)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .map_or_else(|| path.display().to_string(), str::to_string)
}
