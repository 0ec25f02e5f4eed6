//! # Configuration Tests
//!
//! Defaults, partial JSON documents, and error reporting for malformed or
//! missing configuration files.

use litec_lab::LabError;
use litec_lab::config::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_temp_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.student.name, "REPLACE_WITH_YOUR_NAME");
    assert_eq!(config.student.rin, 0);
    assert!(!config.general.no_sim);
    assert_eq!(config.general.print_to_file, None);
}

#[test]
fn test_sim_config_defaults() {
    let sim = SimConfig::default();
    assert_eq!(sim.sysclk_hz, 22_118_400);
    assert_eq!(sim.cycles_per_update, 1000);
}

#[test]
fn test_empty_document_is_default() {
    let config = Config::from_json_str("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_document() {
    let json = r#"{
        "student": { "name": "Grace Hopper", "rin": 660000042 },
        "general": { "no_sim": true, "print_to_file": "run.csv" },
        "sim": { "sysclk_hz": 11059200, "cycles_per_update": 12 }
    }"#;

    let config = Config::from_json_str(json).unwrap();
    assert_eq!(config.student.name, "Grace Hopper");
    assert_eq!(config.student.rin, 660000042);
    assert!(config.general.no_sim);
    assert_eq!(config.general.print_to_file, Some(PathBuf::from("run.csv")));
    assert_eq!(config.sim.sysclk_hz, 11_059_200);
    assert_eq!(config.sim.cycles_per_update, 12);
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config = Config::from_json_str(r#"{ "student": { "rin": 7 } }"#).unwrap();
    assert_eq!(config.student.name, "REPLACE_WITH_YOUR_NAME");
    assert_eq!(config.student.rin, 7);
    assert_eq!(config.sim, SimConfig::default());
}

#[test]
fn test_unknown_field_rejected() {
    let err = Config::from_json_str(r#"{ "student": { "nmae": "typo" } }"#).unwrap_err();
    assert!(matches!(err, LabError::Config(_)));
}

#[test]
fn test_wrong_type_rejected() {
    let err = Config::from_json_str(r#"{ "student": { "rin": "not a number" } }"#).unwrap_err();
    assert!(matches!(err, LabError::Config(_)));
}

#[test]
fn test_negative_rin_rejected() {
    assert!(Config::from_json_str(r#"{ "student": { "rin": -1 } }"#).is_err());
}

#[test]
fn test_from_file() {
    let file = write_temp_config(r#"{ "general": { "no_sim": true } }"#);
    let config = Config::from_file(file.path()).unwrap();
    assert!(config.general.no_sim);
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    match Config::from_file(&path) {
        Err(LabError::ConfigFile { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ConfigFile error, got {other:?}"),
    }
}

#[test]
fn test_config_file_error_mentions_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = Config::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
}
