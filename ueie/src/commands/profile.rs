// ueie/src/commands/profile.rs
//
// USE CASE: Profile one file and score it, without touching the baseline.

use std::path::PathBuf;

use comfy_table::{Cell, CellAlignment, Table};
use miette::{IntoDiagnostic, WrapErr};
use tracing::warn;
use ueie_core::application::extract_dataset;
use ueie_core::domain::profile::Profiler;
use ueie_core::infrastructure::adapters::duckdb::DuckDBConnector;
use ueie_core::infrastructure::config::load_project_config;

pub async fn execute(file: PathBuf, project_dir: PathBuf, json: bool) -> miette::Result<()> {
    let config = load_project_config(&project_dir).wrap_err_with(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;

    let connector = DuckDBConnector::in_memory().wrap_err("Failed to initialize DuckDB")?;
    let dataset = extract_dataset(&connector, &file)
        .await
        .wrap_err_with(|| format!("Failed to read {:?}", file))?;

    let profile = match Profiler::profile(&dataset) {
        Ok(profile) => Some(profile),
        Err(e) => {
            warn!(error = %e, "Profiling failed");
            None
        }
    };

    let quality = &config.quality;
    let score = profile.as_ref().map(|p| quality.scorer().score(p));
    let verdict = quality.gate().evaluate(score);
    let rules = profile
        .as_ref()
        .map(|p| quality.rule_engine().decide(p))
        .unwrap_or_default();

    if json {
        let doc = serde_json::json!({
            "file": dataset.name(),
            "rows": dataset.row_count(),
            "profile": profile,
            "quality_score": score,
            "quality_gate": verdict,
            "rules": rules,
        });
        println!("{}", serde_json::to_string_pretty(&doc).into_diagnostic()?);
        return Ok(());
    }

    println!("\n🔎 {} ({} rows)", dataset.name(), dataset.row_count());
    if let Some(profile) = &profile {
        let mut table = Table::new();
        table.set_header(vec!["Column", "Type", "Null %", "Unique %", "Rule"]);
        for col in profile.iter() {
            let rule = rules.get(&col.name).map(|a| a.as_str()).unwrap_or("-");
            table.add_row(vec![
                Cell::new(&col.name),
                Cell::new(col.dtype),
                Cell::new(col.null_pct).set_alignment(CellAlignment::Right),
                Cell::new(col.unique_pct).set_alignment(CellAlignment::Right),
                Cell::new(rule),
            ]);
        }
        println!("{table}");
    }

    match score {
        Some(score) => println!("   Score: {}", score),
        None => println!("   Score: n/a"),
    }
    println!("   Quality: {} ({})", verdict.status.as_str(), verdict.reason);

    Ok(())
}
