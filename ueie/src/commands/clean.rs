// ueie/src/commands/clean.rs
//
// USE CASE: Remove processed outputs and logs.

use std::path::PathBuf;

use miette::{Report, WrapErr};
use ueie_core::application::clean_artifacts;
use ueie_core::infrastructure::config::load_project_config;

pub fn execute(project_dir: PathBuf) -> miette::Result<()> {
    let config = load_project_config(&project_dir)
        .wrap_err_with(|| format!("Failed to load project configuration from {:?}", project_dir))?;

    match clean_artifacts(&project_dir, &config) {
        Ok(removed) if removed.is_empty() => println!("✨ Nothing to clean."),
        Ok(removed) => println!("✨ Removed {} artifact(s).", removed.len()),
        Err(e) => {
            eprintln!("❌ Clean failed");
            eprintln!("{:?}", Report::new(e));
            std::process::exit(1);
        }
    }
    Ok(())
}
