//! CLI for paperfetch.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use paperfetch_core::config;
use std::path::{Path, PathBuf};

use commands::{run_checksum, run_get, GetArgs};

/// Top-level CLI for paperfetch.
#[derive(Debug, Parser)]
#[command(name = "paperfetch")]
#[command(about = "Fetch papers by id, retrying transient failures", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a paper by id.
    Get {
        /// Paper identifier (file name without suffix).
        id: String,
        /// Write the document here instead of stdout.
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,
        /// Total attempts including the first (overrides config).
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
        tries: Option<u32>,
        /// HTTP base URL to fetch from (overrides config).
        #[arg(long, value_name = "URL", conflicts_with = "dir")]
        base_url: Option<String>,
        /// Local directory to read papers from (overrides config).
        #[arg(long, value_name = "PATH")]
        dir: Option<PathBuf>,
        /// Print the SHA-256 of the fetched document.
        #[arg(long)]
        sha256: bool,
    },

    /// Compute SHA-256 of a file (e.g. after fetching).
    Checksum {
        /// Path to the file.
        path: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Get {
                id,
                out,
                tries,
                base_url,
                dir,
                sha256,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_get(
                    &cfg,
                    GetArgs {
                        id,
                        out,
                        tries,
                        base_url,
                        dir,
                        sha256,
                    },
                )?;
            }
            CliCommand::Checksum { path } => run_checksum(Path::new(&path))?,
        }

        Ok(())
    }
}
