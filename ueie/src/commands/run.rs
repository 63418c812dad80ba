// ueie/src/commands/run.rs
//
// USE CASE: Run the ingestion pipeline.

use std::path::PathBuf;

use miette::{Report, WrapErr};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use ueie_core::application::{RunContext, run_pipeline};
use ueie_core::infrastructure::adapters::duckdb::DuckDBConnector;
use ueie_core::infrastructure::config::{StorageConfig, load_project_config};
use ueie_core::infrastructure::metadata::MetadataWriter;
use ueie_core::infrastructure::store::JsonProfileStore;

use crate::logging;

pub async fn execute(
    project_dir: PathBuf,
    input: Option<PathBuf>,
    log_level: LevelFilter,
) -> miette::Result<()> {
    // A. Load the Config (Infra)
    let config = load_project_config(&project_dir).wrap_err_with(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;
    let storage = StorageConfig::resolve(&project_dir, &config);

    logging::init(log_level, Some(&storage.log_file()))?;
    // Loading happened before the subscriber existed; record what it settled on.
    info!(
        project = %config.name,
        raw_dir = ?storage.raw_dir,
        processed_dir = ?storage.processed_dir,
        output = %storage.output_file().display(),
        pass_threshold = config.quality.pass_threshold,
        warn_threshold = config.quality.warn_threshold,
        apply_rules = config.quality.apply_rules,
        "Resolved project configuration"
    );
    println!("⚙️  Project: {} (output: {})", config.name, storage.output_format);

    // B. Adapters
    let connector = DuckDBConnector::in_memory().wrap_err("Failed to initialize DuckDB")?;
    let baseline = JsonProfileStore::new(&storage.baseline_path);
    let metadata = MetadataWriter::new(&storage.metadata_path);

    // C. Run the Pipeline (Application Layer)
    let ctx = RunContext {
        connector: &connector,
        baseline: &baseline,
        metadata: &metadata,
        storage: &storage,
        config: &config,
    };

    match run_pipeline(&ctx, input).await {
        Ok(run) if run.continue_pipeline => {
            println!(
                "\n✨ SUCCESS! Quality {} / Drift {}. Metadata: {}",
                run.quality_gate.status.as_str(),
                run.drift_gate.status.as_str(),
                metadata.path().display()
            );
        }
        Ok(run) => {
            eprintln!(
                "\n❌ GATE FAILURE. Quality {}: {} | Drift {}: {}",
                run.quality_gate.status.as_str(),
                run.quality_gate.reason,
                run.drift_gate.status.as_str(),
                run.drift_gate.reason
            );
            // Exit with error code for CI/CD
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("\n💥 CRITICAL PIPELINE ERROR");
            eprintln!("{:?}", Report::new(e));
            std::process::exit(1);
        }
    }

    Ok(())
}
