// ueie/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(name = "ueie")]
#[command(about = "Batch ingestion with quality and drift gates", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log verbosity (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info", env = "UEIE_LOG_LEVEL")]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚀 Runs the pipeline (Extract -> Profile -> Gates -> Clean -> Load)
    Run {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Process this file instead of the newest one in the raw directory
        #[arg(long, short)]
        input: Option<PathBuf>,
    },

    /// 🔎 Profiles a single file and scores it
    Profile {
        /// CSV, Parquet or newline-delimited JSON file
        file: PathBuf,

        /// Project directory (thresholds are read from its config)
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// 📈 Compares two persisted profiles
    Drift {
        /// Baseline profile (JSON)
        #[arg(long)]
        previous: PathBuf,

        /// Profile to check (JSON)
        #[arg(long)]
        current: PathBuf,

        /// Project directory (thresholds are read from its config)
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// 🧹 Removes processed outputs and logs
    Clean {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },
}
