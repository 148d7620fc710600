//! camas-reshape: normalize the ICU bed census extract into long form
//!
//! Usage:
//!   # Default output name, pipe-delimited input
//!   camas-reshape Data.txt
//!
//!   # Explicit output path and delimiters
//!   camas-reshape Data.txt -o DataProcesada.csv --input-delimiter "|"
//!
//!   # A differently formatted registration stamp
//!   camas-reshape Data.txt --date-format "%Y-%m-%d %H:%M:%S"

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use camas::pipeline::{self, PipelineConfig};

#[derive(Parser, Debug)]
#[command(name = "camas-reshape")]
#[command(about = "Reshape the wide ICU bed census extract into a long-form CSV", long_about = None)]
struct Args {
    /// Delimited census extract with a header row
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output path for the headerless long-form file
    #[arg(long, short = 'o', default_value = "DataProcesada.csv")]
    output: PathBuf,

    /// Field delimiter of the input file
    #[arg(long, default_value = "|")]
    input_delimiter: char,

    /// Field delimiter of the output file
    #[arg(long, default_value = ",")]
    output_delimiter: char,

    /// Timestamp layout of the registration column (chrono strftime syntax)
    #[arg(long)]
    date_format: Option<String>,
}

fn delimiter_byte(delimiter: char, which: &str) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("{which} delimiter must be a single ASCII character");
    }
    Ok(delimiter as u8)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = PipelineConfig {
        input: args.input,
        output: args.output,
        input_delimiter: delimiter_byte(args.input_delimiter, "input")?,
        output_delimiter: delimiter_byte(args.output_delimiter, "output")?,
        ..PipelineConfig::default()
    };
    if let Some(format) = args.date_format {
        config.date_format = format;
    }

    let stats = pipeline::run(&config)
        .with_context(|| format!("failed to reshape {}", config.input.display()))?;

    info!(
        "done: {} rows in, {} dropped, {} rows out",
        stats.rows_read, stats.rows_dropped, stats.rows_written
    );

    Ok(())
}
