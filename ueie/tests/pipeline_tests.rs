use anyhow::{Context, Result};
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Throwaway project directory with `raw/` ready for input files.
struct UeieTestEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl UeieTestEnv {
    fn new() -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let root = tmp.path().join("project");
        fs::create_dir_all(root.join("raw"))?;
        Ok(Self { _tmp: tmp, root })
    }

    fn write_raw(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.root.join("raw").join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    fn write(&self, rel: &str, content: &str) -> Result<PathBuf> {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    fn read_json(&self, rel: &str) -> Result<serde_json::Value> {
        let content = fs::read_to_string(self.root.join(rel))
            .with_context(|| format!("{} not written", rel))?;
        Ok(serde_json::from_str(&content)?)
    }

    fn ueie(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ueie"));
        cmd.current_dir(&self.root);
        cmd.env_remove("UEIE_RAW_DIR")
            .env_remove("UEIE_PROCESSED_DIR")
            .env_remove("UEIE_OUTPUT_FORMAT")
            .env_remove("UEIE_LOG_LEVEL");
        cmd
    }
}

const ORDERS: &str = "Order ID,Amount,City\n1,10,paris\n2,20,lyon\n2,20,lyon\n3,30,nice\n";

#[test]
fn test_run_writes_outputs_and_baseline() -> Result<()> {
    let env = UeieTestEnv::new()?;
    env.write_raw("orders.csv", ORDERS)?;

    env.ueie()
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS"));

    assert!(env.root.join("processed/cleaned_data.csv").exists());
    let log = fs::read_to_string(env.root.join("logs/pipeline.log"))?;
    assert!(log.contains("Resolved project configuration"));
    assert!(log.contains("pass_threshold=80"));

    let meta = env.read_json("processed/run_metadata.json")?;
    assert_eq!(meta["quality_gate"]["status"], "PASS");
    assert_eq!(meta["drift_gate"]["status"], "MAJOR");
    assert_eq!(meta["rows"]["duplicates_removed"], 1);
    assert_eq!(meta["file_info"]["extension"], ".csv");

    let baseline = env.read_json("processed/last_profile.json")?;
    assert_eq!(baseline["order_id"]["dtype"], "integer");
    assert_eq!(baseline["city"]["null_pct"], 0.0);

    // Same input again: nothing moved.
    env.ueie().arg("run").assert().success();
    let meta = env.read_json("processed/run_metadata.json")?;
    assert_eq!(meta["drift_gate"]["status"], "NO_DRIFT");
    Ok(())
}

#[test]
fn test_run_stops_on_removed_column() -> Result<()> {
    let env = UeieTestEnv::new()?;
    env.write_raw("orders.csv", ORDERS)?;
    env.ueie().arg("run").assert().success();

    env.write_raw("orders.csv", "Order ID,Amount\n1,10\n2,20\n3,30\n")?;
    env.ueie()
        .arg("run")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GATE FAILURE"));

    let meta = env.read_json("processed/run_metadata.json")?;
    assert_eq!(meta["drift_gate"]["status"], "CRITICAL");
    assert_eq!(meta["continue_pipeline"], false);
    Ok(())
}

#[test]
fn test_run_honours_config_file() -> Result<()> {
    let env = UeieTestEnv::new()?;
    env.write(
        "ueie.yaml",
        "name: sales\nquality:\n  pass_threshold: 99.0\n  warn_threshold: 50.0\noutput:\n  format: parquet\n",
    )?;
    // amount is a third null -> score 93.33
    env.write_raw("orders.csv", "id,amount,city\n1,10,paris\n2,,lyon\n3,30,nice\n")?;

    env.ueie().arg("run").assert().success();

    assert!(env.root.join("processed/cleaned_data.parquet").exists());
    let meta = env.read_json("processed/run_metadata.json")?;
    assert_eq!(meta["quality_gate"]["status"], "WARN");
    Ok(())
}

#[test]
fn test_run_without_input_fails() -> Result<()> {
    let env = UeieTestEnv::new()?;
    env.ueie()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CRITICAL PIPELINE ERROR"))
        .stderr(predicate::str::contains("pass --input"));
    Ok(())
}

#[test]
fn test_profile_json() -> Result<()> {
    let env = UeieTestEnv::new()?;
    let path = env.write_raw("sparse.csv", "id,comment\n1,\n2,\n3,ok\n")?;

    let output = env
        .ueie()
        .arg("profile")
        .arg(&path)
        .arg("--json")
        .output()?;
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(doc["rows"], 3);
    assert_eq!(doc["profile"]["comment"]["null_pct"], 66.67);
    assert_eq!(doc["quality_score"], 86.67);
    assert_eq!(doc["quality_gate"]["status"], "PASS");
    assert_eq!(doc["rules"]["comment"], "drop_column");
    assert_eq!(doc["rules"]["id"], "fill_zero");

    // profiling never touches the baseline
    assert!(!env.root.join("processed").exists());
    Ok(())
}

#[test]
fn test_profile_table() -> Result<()> {
    let env = UeieTestEnv::new()?;
    let path = env.write_raw("orders.csv", ORDERS)?;

    env.ueie()
        .arg("profile")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("order_id"))
        .stdout(predicate::str::contains("Quality: PASS"));
    Ok(())
}

fn write_profiles(env: &UeieTestEnv) -> Result<(PathBuf, PathBuf)> {
    let previous = env.write(
        "profiles/previous.json",
        r#"{
            "id": {"dtype": "integer", "null_pct": 0.0, "unique_pct": 100.0},
            "amount": {"dtype": "float", "null_pct": 0.0, "unique_pct": 80.0},
            "city": {"dtype": "string", "null_pct": 0.0, "unique_pct": 50.0}
        }"#,
    )?;
    let current = env.write(
        "profiles/current.json",
        r#"{
            "id": {"dtype": "string", "null_pct": 0.0, "unique_pct": 100.0},
            "amount": {"dtype": "float", "null_pct": 30.0, "unique_pct": 80.0},
            "country": {"dtype": "string", "null_pct": 0.0, "unique_pct": 10.0}
        }"#,
    )?;
    Ok((previous, current))
}

fn drift_cmd(env: &UeieTestEnv, previous: &Path, current: &Path) -> Command {
    let mut cmd = env.ueie();
    cmd.arg("drift")
        .arg("--previous")
        .arg(previous)
        .arg("--current")
        .arg(current);
    cmd
}

#[test]
fn test_drift_report_snapshot() -> Result<()> {
    let env = UeieTestEnv::new()?;
    let (previous, current) = write_profiles(&env)?;

    let output = drift_cmd(&env, &previous, &current).arg("--json").output()?;
    assert_eq!(output.status.code(), Some(1));

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    insta::with_settings!({ sort_maps => true }, {
        insta::assert_json_snapshot!(doc, @r#"
        {
          "drift_gate": {
            "reason": "Critical drift detected (schema/type change)",
            "status": "CRITICAL"
          },
          "drift_report": {
            "amount": {
              "issues": [
                "Null % changed from 0 to 30"
              ],
              "severity": "MAJOR",
              "type": "DRIFT"
            },
            "city": {
              "message": "Column missing in current run",
              "severity": "CRITICAL",
              "type": "REMOVED_COLUMN"
            },
            "country": {
              "message": "Column not present in previous run",
              "severity": "MAJOR",
              "type": "NEW_COLUMN"
            },
            "id": {
              "message": "Dtype changed from integer to string",
              "severity": "CRITICAL",
              "type": "TYPE_CHANGE"
            }
          }
        }
        "#);
    });
    Ok(())
}

#[test]
fn test_drift_identical_profiles() -> Result<()> {
    let env = UeieTestEnv::new()?;
    let (previous, _) = write_profiles(&env)?;

    drift_cmd(&env, &previous, &previous)
        .assert()
        .success()
        .stdout(predicate::str::contains("NO_DRIFT"));
    Ok(())
}

#[test]
fn test_drift_missing_profile() -> Result<()> {
    let env = UeieTestEnv::new()?;
    let (previous, _) = write_profiles(&env)?;

    drift_cmd(&env, &previous, &env.root.join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile not found"));
    Ok(())
}

#[test]
fn test_clean_removes_artifacts() -> Result<()> {
    let env = UeieTestEnv::new()?;
    env.write_raw("orders.csv", ORDERS)?;
    env.ueie().arg("run").assert().success();
    assert!(env.root.join("processed").exists());

    env.ueie().arg("clean").assert().success();

    assert!(!env.root.join("processed").exists());
    assert!(!env.root.join("logs").exists());
    assert!(env.root.join("raw/orders.csv").exists());
    Ok(())
}

#[test]
fn test_clean_refuses_raw_dir() -> Result<()> {
    let env = UeieTestEnv::new()?;
    env.write_raw("orders.csv", ORDERS)?;
    env.write("ueie.yaml", "paths:\n  log_dir: raw\n")?;

    env.ueie()
        .arg("clean")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Clean failed"))
        .stderr(predicate::str::contains("Refusing to remove"));

    assert!(env.root.join("raw/orders.csv").exists());
    Ok(())
}
