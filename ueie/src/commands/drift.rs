// ueie/src/commands/drift.rs
//
// USE CASE: Compare two persisted profiles.

use std::path::{Path, PathBuf};

use comfy_table::{Cell, Color, Table};
use miette::{IntoDiagnostic, WrapErr, bail};
use ueie_core::domain::drift::{DriftDetail, DriftDetector, DriftGate, DriftStatus, Severity};
use ueie_core::domain::profile::DatasetProfile;
use ueie_core::infrastructure::config::load_project_config;
use ueie_core::infrastructure::store::JsonProfileStore;
use ueie_core::ports::baseline::BaselineStore;

pub fn execute(
    previous: PathBuf,
    current: PathBuf,
    project_dir: PathBuf,
    json: bool,
) -> miette::Result<()> {
    let config = load_project_config(&project_dir).wrap_err_with(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;

    let previous_profile = load_profile(&previous)?;
    let current_profile = load_profile(&current)?;

    let report = DriftDetector::new(config.drift).detect(&previous_profile, &current_profile);
    let verdict = DriftGate::evaluate(&report);

    if json {
        let doc = serde_json::json!({
            "drift_report": report,
            "drift_gate": verdict,
        });
        println!("{}", serde_json::to_string_pretty(&doc).into_diagnostic()?);
    } else {
        if !report.is_empty() {
            let mut table = Table::new();
            table.set_header(vec!["Column", "Severity", "Type", "Detail"]);
            for entry in report.iter() {
                let detail = match &entry.detail {
                    DriftDetail::Message(message) => message.clone(),
                    DriftDetail::Issues(issues) => issues.join("; "),
                };
                table.add_row(vec![
                    Cell::new(&entry.column),
                    Cell::new(entry.severity).fg(severity_color(entry.severity)),
                    Cell::new(entry.kind),
                    Cell::new(detail),
                ]);
            }
            println!("{table}");
        }
        println!("📈 Drift: {} ({})", verdict.status.as_str(), verdict.reason);
    }

    if verdict.status == DriftStatus::Critical {
        std::process::exit(1);
    }
    Ok(())
}

fn load_profile(path: &Path) -> miette::Result<DatasetProfile> {
    // The store treats a missing file as a first run; here it is a user error.
    if !path.is_file() {
        bail!("❌ Profile not found at: {:?}", path);
    }
    let profile = JsonProfileStore::new(path)
        .load()
        .wrap_err_with(|| format!("Failed to read profile {:?}", path))?;
    Ok(profile)
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Minor => Color::Yellow,
        Severity::Major => Color::DarkYellow,
        Severity::Critical => Color::Red,
    }
}
