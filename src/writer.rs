//! Seed file writer: header block, per-record statements, annotations, summary.

use crate::metrics::RunMetrics;
use crate::profile::{Profile, CONFLICT_COLUMN};
use crate::record::CustomerRecord;
use crate::serializer::RowSerializer;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

/// Streams `INSERT` statements for one profile into `out`.
///
/// Created with [`SeedWriter::begin`], which writes the header block. Each call
/// to [`write_record`](SeedWriter::write_record) writes exactly one statement
/// line, preceded by a `-- Batch` comment where the profile wants one.
/// [`finish`](SeedWriter::finish) writes the trailing summary (if any) and flushes.
pub struct SeedWriter<W: Write> {
    out: W,
    serializer: RowSerializer,
    total: Option<u64>,
    written: u64,
    metrics: RunMetrics,
}

impl<W: Write> SeedWriter<W> {
    /// Write the header block and return a writer positioned for the first record.
    ///
    /// `source_name` is the file name quoted in the header. `total` is the
    /// number of records that will follow; [`Profile::Batched`] prints it in the
    /// header and uses it to close the last batch range.
    ///
    /// # Errors
    /// Returns an error if the header cannot be written.
    pub fn begin(
        mut out: W,
        serializer: RowSerializer,
        source_name: &str,
        total: Option<u64>,
    ) -> Result<Self> {
        let mut metrics = RunMetrics::new();
        metrics.record_start();
        write_header(&mut out, &serializer, source_name, total).context("write seed header")?;
        Ok(Self {
            out,
            serializer,
            total,
            written: 0,
            metrics,
        })
    }

    /// Serialize and write one record.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    pub fn write_record(&mut self, record: &CustomerRecord) -> Result<()> {
        let profile = self.serializer.profile();
        let index = self.written;

        if let Some(size) = profile.batch_size() {
            let size = size as u64;
            if index % size == 0 {
                let batch = index / size + 1;
                let last = self.total.map_or(index + size, |t| (index + size).min(t));
                debug!("batch {} starts at row {}", batch, index + 1);
                write!(self.out, "\n-- Batch {} (rows {}-{})\n", batch, index + 1, last)
                    .with_context(|| format!("write batch comment #{}", batch))?;
                self.metrics.batch_comments += 1;
            }
        }

        let row = self.serializer.serialize_row(record);
        writeln!(self.out, "{}", row.statement)
            .with_context(|| format!("write statement #{}", index + 1))?;

        self.written += 1;
        self.metrics.records += 1;
        self.metrics.statements += 1;
        self.metrics.null_values += row.rendered.null_count() as u64;
        self.metrics.defaulted_values += row.rendered.defaulted as u64;

        if let Some(interval) = profile.progress_interval()
            && self.written % interval == 0
        {
            info!("Processed {} rows...", self.written);
        }
        Ok(())
    }

    /// Statements written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    /// Write the trailing summary (ConflictSafe only), flush, and hand back the
    /// sink and the counters.
    ///
    /// # Errors
    /// Returns an error if the summary cannot be written or the flush fails.
    pub fn finish(mut self) -> Result<(W, RunMetrics)> {
        if self.serializer.profile() == Profile::ConflictSafe {
            write!(self.out, "\n-- Total: {} customer records\n", self.written)
                .context("write seed summary")?;
        }
        self.out.flush().context("flush seed output")?;
        self.metrics.record_end();
        Ok((self.out, self.metrics))
    }
}

fn write_header<W: Write>(
    out: &mut W,
    serializer: &RowSerializer,
    source_name: &str,
    total: Option<u64>,
) -> std::io::Result<()> {
    writeln!(out, "-- Customer data seed file")?;
    match serializer.profile() {
        Profile::Batched => {
            writeln!(out, "-- Generated from {}", source_name)?;
            if let Some(total) = total {
                writeln!(out, "-- Total records: {}", total)?;
            }
            writeln!(out)?;
            writeln!(
                out,
                "-- Truncate existing customer data (optional - remove if you want to keep existing data)"
            )?;
            writeln!(out, "-- TRUNCATE TABLE {} CASCADE;", serializer.table())?;
            writeln!(out)?;
            writeln!(out, "-- Insert customer data")?;
        }
        Profile::ConflictSafe => {
            writeln!(out, "-- Generated from {} with duplicate handling", source_name)?;
            writeln!(
                out,
                "-- ON CONFLICT ({}) DO NOTHING will skip existing customers with same ID",
                CONFLICT_COLUMN
            )?;
            writeln!(out)?;
        }
    }
    Ok(())
}
