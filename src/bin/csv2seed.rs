//! `csv2seed` command-line entry point.
//!
//! Parses flags into a [`Config`], installs the logger, runs the conversion and
//! prints a short human-readable summary.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use csv2seed::logging::init_logger;
use csv2seed::{run, Config, Profile};

fn main() -> Result<()> {
    let config = Config::parse();
    init_logger(config.log_level.into()).context("Failed to initialize logger")?;

    match run(&config) {
        Ok(report) => {
            let output = report.output.display();
            match report.profile {
                Profile::Batched => {
                    println!("✅ Created {} with {} INSERT statements", output, report.records);
                    println!("📁 File location: {}", output);
                    println!("\nTo apply the seed data, run:");
                    println!("  supabase db push --include-seed");
                }
                Profile::ConflictSafe => {
                    println!(
                        "✅ Successfully generated {} INSERT statements in {}",
                        report.records, output
                    );
                }
            }
            if config.metrics_json.is_some() {
                report.metrics.print();
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("csv2seed error: {:#}", e);
            process::exit(1);
        }
    }
}
