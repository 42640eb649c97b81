use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::logging::LogFormat;
use crate::source::DEFAULT_MAX_BYTES;
use crate::utils::parse_size;

/// Find the lines unique to each of two sorted text files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// First sorted input (A)
    pub input_a: PathBuf,

    /// Second sorted input (B)
    pub input_b: PathBuf,

    /// Output for lines only in A
    pub output_a: PathBuf,

    /// Output for lines only in B
    pub output_b: PathBuf,

    /// Max size per input file (e.g., 10MiB, 5MB, 102400)
    #[arg(short = 'S', long, default_value = "10MiB")]
    pub max_size: String,

    /// Print only the counts, not the unique lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Append logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Human)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone)]
pub struct Options {
    pub max_bytes: u64,
    pub quiet: bool,
    pub log_file: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            quiet: false,
            log_file: None,
            log_format: LogFormat::Human,
        }
    }
}

pub fn build_options(args: &Args) -> Result<Options> {
    let max_bytes = parse_size(&args.max_size)
        .with_context(|| format!("Invalid max size: {}", args.max_size))?;
    if max_bytes == 0 {
        bail!("Max size must be greater than zero");
    }

    Ok(Options {
        max_bytes,
        quiet: args.quiet,
        log_file: args.log_file.clone(),
        log_format: args.log_format,
    })
}
