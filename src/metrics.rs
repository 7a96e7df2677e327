//! Run metrics: counters and timing for one seed generation.
//!
//! ```no_run
//! use csv2seed::metrics::RunMetrics;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut metrics = RunMetrics::new();
//! metrics.record_start();
//! metrics.records += 1;
//! metrics.record_end();
//! metrics.print();
//! metrics.save_to_file("metrics.json")?;
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::Path;
use std::time::{Duration, Instant};

/// Counters collected while writing a seed file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunMetrics {
    /// Input records consumed.
    pub records: u64,
    /// `INSERT` statements written.
    pub statements: u64,
    /// Value slots rendered as `NULL`.
    pub null_values: u64,
    /// Numeric/boolean slots that fell back to `0` or `TRUE`.
    pub defaulted_values: u64,
    /// `-- Batch` comments written.
    pub batch_comments: u64,
    #[serde(skip)]
    start_time: Option<Instant>,
    #[serde(skip)]
    end_time: Option<Instant>,
}

impl RunMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn record_end(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Elapsed time between [`record_start`](Self::record_start) and
    /// [`record_end`](Self::record_end), if both were called.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(end.duration_since(start)),
            _ => None,
        }
    }

    /// Counters as a JSON object, plus `execution_time_ms` when timing is known.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut value = json!(self);
        if let (Some(elapsed), Some(obj)) = (self.elapsed(), value.as_object_mut()) {
            obj.insert("execution_time_ms".to_string(), json!(elapsed.as_millis()));
        }
        value
    }

    /// Print all counters to stdout.
    pub fn print(&self) {
        println!("\n========== Seed Metrics ==========");
        if let Some(elapsed) = self.elapsed() {
            println!(
                "Execution Time: {:.3}s ({} ms)",
                elapsed.as_secs_f64(),
                elapsed.as_millis()
            );
            println!("----------------------------------");
        }
        println!("records: {}", self.records);
        println!("statements: {}", self.statements);
        println!("null_values: {}", self.null_values);
        println!("defaulted_values: {}", self.defaulted_values);
        println!("batch_comments: {}", self.batch_comments);
        println!("==================================\n");
    }

    /// Save the counters as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written to.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let formatted = serde_json::to_string_pretty(&self.to_json())?;
        std::fs::write(path, formatted).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}
