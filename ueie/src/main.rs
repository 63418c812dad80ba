// ueie/src/main.rs

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // --- USE CASE: RUN PIPELINE ---
        Commands::Run { project_dir, input } => {
            commands::run::execute(project_dir, input, cli.log_level).await
        }

        // --- USE CASE: PROFILE A FILE ---
        Commands::Profile {
            file,
            project_dir,
            json,
        } => {
            logging::init(cli.log_level, None)?;
            commands::profile::execute(file, project_dir, json).await
        }

        // --- USE CASE: COMPARE PROFILES ---
        Commands::Drift {
            previous,
            current,
            project_dir,
            json,
        } => {
            logging::init(cli.log_level, None)?;
            commands::drift::execute(previous, current, project_dir, json)
        }

        // --- USE CASE: CLEAN ---
        Commands::Clean { project_dir } => {
            logging::init(cli.log_level, None)?;
            commands::clean::execute(project_dir)
        }
    }
}
