//! Integration tests for the precedent CLI
//!
//! Commands run against the in-memory graph (`--memory`) with configuration
//! files written to temporary directories.

use clap::Parser;
use precedent_cli::{build_context, run, Cli, CliError, Config};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

fn mock_config(dir: &TempDir, response: &str) -> String {
    write_config(
        dir,
        &format!(
            "[llm]\nprovider = \"mock\"\nmock_response = '{}'\n\n[settings]\ncolor = false\n",
            response
        ),
    )
}

async fn run_args(args: &[&str]) -> precedent_cli::Result<String> {
    run(Cli::parse_from(args)).await
}

#[tokio::test]
async fn test_ping_memory() {
    let dir = TempDir::new().unwrap();
    let config = mock_config(&dir, "{}");

    let output = run_args(&["precedent", "--memory", "--config", &config, "--format", "json", "ping"])
        .await
        .unwrap();

    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["connected"], true);
}

#[tokio::test]
async fn test_search_with_principle_flag() {
    let dir = TempDir::new().unwrap();
    let config = mock_config(&dir, "not json");

    let output = run_args(&[
        "precedent",
        "--memory",
        "--config",
        &config,
        "--format",
        "json",
        "search",
        "abortion precedent",
        "--principle",
        "Federalism",
    ])
    .await
    .unwrap();

    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["cases"][0]["id"], "dobbs_v_jackson_2022");
    assert_eq!(value["relatedCases"][0]["id"], "roe_v_wade_1973");
    assert_eq!(value["analysis"]["principles"][0], "Federalism");
}

#[tokio::test]
async fn test_search_uses_configured_provider() {
    let dir = TempDir::new().unwrap();
    let config = mock_config(
        &dir,
        r#"{"principles": ["Data Privacy"], "keywords": ["records"]}"#,
    );

    let output = run_args(&[
        "precedent",
        "--memory",
        "--config",
        &config,
        "-f",
        "json",
        "search",
        "medical records breach",
    ])
    .await
    .unwrap();

    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["cases"].as_array().unwrap().len(), 2);
    assert_eq!(value["analysis"]["keywords"][0], "records");
}

#[tokio::test]
async fn test_search_falls_back_on_prose() {
    let dir = TempDir::new().unwrap();
    let config = mock_config(&dir, "I am not sure.");

    let output = run_args(&[
        "precedent", "--memory", "--config", &config, "-f", "json", "search", "Privacy Law",
    ])
    .await
    .unwrap();

    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["analysis"]["principles"], serde_json::json!([]));
    assert_eq!(value["analysis"]["keywords"], serde_json::json!(["privacy", "law"]));
    assert_eq!(value["cases"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_table_output() {
    let dir = TempDir::new().unwrap();
    let config = mock_config(&dir, "{}");

    let output = run_args(&[
        "precedent", "--memory", "--config", &config, "search", "q", "-p", "Damages",
    ])
    .await
    .unwrap();

    assert!(output.contains("smith_v_medical_2020"));
    assert!(output.contains("Related cases"));
    assert!(output.contains("hipaa_privacy_2018"));
}

#[tokio::test]
async fn test_ingest_file() {
    let dir = TempDir::new().unwrap();
    let config = mock_config(&dir, "{}");
    let cases = dir.path().join("cases.json");
    fs::write(
        &cases,
        r#"[{"id": "printz_v_us_1997", "name": "Printz v. United States", "year": 1997,
             "court": "Supreme Court", "summary": "s", "principles": ["Federalism"]}]"#,
    )
    .unwrap();

    let output = run_args(&[
        "precedent",
        "--memory",
        "--no-color",
        "--config",
        &config,
        "ingest",
        cases.to_str().unwrap(),
    ])
    .await
    .unwrap();

    assert_eq!(output, "✓ Ingested 1 case(s)");
}

#[tokio::test]
async fn test_ingest_rejects_invalid_case() {
    let dir = TempDir::new().unwrap();
    let config = mock_config(&dir, "{}");
    let cases = dir.path().join("cases.json");
    fs::write(
        &cases,
        r#"{"id": "", "name": "Nameless", "year": 1, "court": "c", "summary": "s"}"#,
    )
    .unwrap();

    let err = run_args(&[
        "precedent",
        "--memory",
        "--config",
        &config,
        "ingest",
        cases.to_str().unwrap(),
    ])
    .await
    .unwrap_err();

    assert!(matches!(err, CliError::Domain(_)));
}

#[tokio::test]
async fn test_relate_missing_case_warns() {
    let dir = TempDir::new().unwrap();
    let config = mock_config(&dir, "{}");

    let output = run_args(&[
        "precedent", "--memory", "--config", &config, "relate", "roe_v_wade_1973", "nope", "cites",
    ])
    .await
    .unwrap();

    assert!(output.contains("not created"));
    assert!(output.contains("-[CITES]->"));
}

#[tokio::test]
async fn test_relate_existing_cases() {
    let dir = TempDir::new().unwrap();
    let config = mock_config(&dir, "{}");

    let output = run_args(&[
        "precedent",
        "--memory",
        "--config",
        &config,
        "relate",
        "smith_v_medical_2020",
        "roe_v_wade_1973",
        "cites",
    ])
    .await
    .unwrap();

    assert_eq!(output, "✓ Related smith_v_medical_2020 -[CITES]-> roe_v_wade_1973");
}

#[tokio::test]
async fn test_relate_rejects_bad_type() {
    let dir = TempDir::new().unwrap();
    let config = mock_config(&dir, "{}");

    let err = run_args(&[
        "precedent", "--memory", "--config", &config, "relate", "a", "b", "CITES]->(x",
    ])
    .await
    .unwrap_err();

    assert!(matches!(err, CliError::Domain(_)));
}

#[tokio::test]
async fn test_missing_explicit_config_is_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.toml");

    let cli = Cli::parse_from(["precedent", "--memory", "--config", missing.to_str().unwrap(), "ping"]);
    assert!(matches!(build_context(&cli).await, Err(CliError::Io(_))));
}

#[test]
fn test_config_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.graph.uri = "bolt://graph.internal:7687".to_string();
    config.analyzer.timeout_secs = 10;
    config.save_to(&path).unwrap();

    let loaded = Config::load(Some(Path::new(&path))).unwrap();
    assert_eq!(loaded.graph.uri, "bolt://graph.internal:7687");
    assert_eq!(loaded.analyzer.timeout_secs, 10);
}
