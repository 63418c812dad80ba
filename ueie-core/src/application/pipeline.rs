// ueie-core/src/application/pipeline.rs

use chrono::{SecondsFormat, Utc};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, instrument, warn};

use crate::error::UeieError;
use crate::ports::baseline::BaselineStore;
use crate::ports::connector::Connector;

// Application Services
use crate::application::extraction::{RAW_TABLE, extract_dataset};
use crate::application::transform::{CLEAN_TABLE, clean_dataset};

// Domain
use crate::domain::drift::{DriftAnalysis, DriftDetector, DriftGate};
use crate::domain::profile::{DatasetProfile, Profiler, round2};
use crate::domain::project::ProjectConfig;
use crate::domain::quality::RemediationPlan;
use crate::domain::run::{RowCounts, RunMetadata, should_continue};

// Infrastructure
use crate::infrastructure::config::StorageConfig;
use crate::infrastructure::discovery::{file_info, latest_raw_file};
use crate::infrastructure::metadata::MetadataWriter;

/// Collaborators for one pipeline run.
pub struct RunContext<'a> {
    pub connector: &'a dyn Connector,
    pub baseline: &'a dyn BaselineStore,
    pub metadata: &'a MetadataWriter,
    pub storage: &'a StorageConfig,
    pub config: &'a ProjectConfig,
}

/// Runs extraction, profiling, gating, cleaning and persistence for a single file.
///
/// When `input` is `None` the newest supported file in the raw directory is used.
/// Gate outcomes never turn into an `Err`: the caller reads
/// [`RunMetadata::continue_pipeline`] once everything has been persisted.
#[instrument(skip(ctx), fields(engine = ctx.connector.engine_name()))]
pub async fn run_pipeline(
    ctx: &RunContext<'_>,
    input: Option<PathBuf>,
) -> Result<RunMetadata, UeieError> {
    println!("🚀 Starting UEIE pipeline...");
    let start_time = Instant::now();
    let run_time = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    // 1. DISCOVERY
    let source_path = match input {
        Some(path) => path,
        None => latest_raw_file(&ctx.storage.raw_dir)?,
    };
    let info = file_info(&source_path)?;
    println!("📥 Extracting {} ({} MB)", info.file_name, info.file_size_mb);

    // 2. EXTRACTION
    let dataset = extract_dataset(ctx.connector, &source_path).await?;

    // 3. PROFILING (raw snapshot, before any filling)
    println!("🔎 Profiling {} rows...", dataset.row_count());
    let current_profile = match Profiler::profile(&dataset) {
        Ok(profile) => Some(profile),
        Err(e) => {
            warn!(error = %e, "Profiling failed, treating profile as unavailable");
            None
        }
    };

    // 4. QUALITY GATE
    let quality = &ctx.config.quality;
    let score = current_profile.as_ref().map(|p| quality.scorer().score(p));
    let quality_gate = quality.gate().evaluate(score);
    info!(score = ?score, status = quality_gate.status.as_str(), "{}", quality_gate.reason);

    let rules = current_profile
        .as_ref()
        .map(|p| quality.rule_engine().decide(p))
        .unwrap_or_default();
    log_rules(&rules);

    // 5. DRIFT GATE
    let analysis = analyze_drift(ctx, current_profile.as_ref());
    let drift_gate = DriftGate::evaluate_analysis(&analysis);
    info!(status = drift_gate.status.as_str(), "{}", drift_gate.reason);

    // 6. CLEAN & LOAD
    println!("🧹 Cleaning dataset...");
    let dropped = if quality.apply_rules {
        rules.dropped_columns()
    } else {
        Vec::new()
    };
    let stats = clean_dataset(ctx.connector, RAW_TABLE, &dataset, &dropped).await?;

    fs::create_dir_all(&ctx.storage.processed_dir)?;
    let output_path = ctx.storage.output_file();
    ctx.connector
        .export(CLEAN_TABLE, &output_path, ctx.storage.output_format)
        .await?;
    println!("💾 Cleaned data written to {:?}", output_path);

    // 7. AUDIT TRAIL (fatal on failure)
    let continue_pipeline = should_continue(&quality_gate, &drift_gate);
    let metadata = RunMetadata {
        run_time,
        file_info: info,
        quality_score: score,
        quality_gate,
        drift_gate,
        drift_report: analysis.report().cloned().unwrap_or_default(),
        rules,
        rows: RowCounts {
            raw: stats.input_rows,
            cleaned: stats.output_rows,
            duplicates_removed: stats.duplicates_removed(),
        },
        output_path: output_path.to_string_lossy().to_string(),
        duration_secs: round2(start_time.elapsed().as_secs_f64()),
        continue_pipeline,
    };
    ctx.metadata.write(&metadata)?;

    // An unavailable profile never replaces the baseline.
    if let Some(profile) = &current_profile {
        ctx.baseline.save(profile)?;
    }

    if continue_pipeline {
        println!(
            "✅ Pipeline finished in {:.2}s (quality {}, drift {})",
            metadata.duration_secs,
            metadata.quality_gate.status.as_str(),
            metadata.drift_gate.status.as_str()
        );
    } else {
        println!(
            "⛔ Pipeline stopped (quality {}, drift {})",
            metadata.quality_gate.status.as_str(),
            metadata.drift_gate.status.as_str()
        );
    }

    Ok(metadata)
}

fn analyze_drift(ctx: &RunContext<'_>, current: Option<&DatasetProfile>) -> DriftAnalysis {
    let Some(current) = current else {
        return DriftAnalysis::Unavailable {
            reason: "current profile unavailable".to_string(),
        };
    };

    match ctx.baseline.load() {
        Ok(previous) => {
            let detector = DriftDetector::new(ctx.config.drift);
            DriftAnalysis::Analyzed(detector.detect(&previous, current))
        }
        Err(e) => {
            warn!(error = %e, "Baseline unreadable, skipping drift analysis");
            DriftAnalysis::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}

fn log_rules(rules: &RemediationPlan) {
    for (column, action) in rules.iter() {
        info!(column, action = action.as_str(), "Remediation rule");
    }
}
