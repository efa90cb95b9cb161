//! # Configuration Tests
//!
//! Defaults, JSON deserialization, file loading, and validation.

use std::io::Write;

use div7_core::common::ConfigError;
use div7_core::config::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(config.general.trace);
    assert_eq!(config.general.format, TraceFormat::Text);
    assert_eq!(config.verify.start, -1000);
    assert_eq!(config.verify.end, 1000);
    assert_eq!(config.verify.range(), -1000..1000);
}

#[test]
fn test_empty_json_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_sections_fill_defaults() {
    let config = Config::from_json(r#"{ "general": { "format": "Json" }, "verify": { "end": 10 } }"#)
        .unwrap();
    assert!(config.general.trace);
    assert_eq!(config.general.format, TraceFormat::Json);
    assert_eq!(config.verify.start, -1000);
    assert_eq!(config.verify.end, 10);
}

#[test]
fn test_full_json() {
    let json = r#"{
        "general": { "trace": false, "format": "Text" },
        "verify": { "start": -7, "end": 7 }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert!(!config.general.trace);
    assert_eq!(config.verify.range(), -7..7);
}

#[test]
fn test_malformed_json_is_parse_error() {
    let err = Config::from_json("{ general: }").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_unknown_format_is_parse_error() {
    let err = Config::from_json(r#"{ "general": { "format": "Yaml" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_inverted_range_rejected() {
    let err = Config::from_json(r#"{ "verify": { "start": 5, "end": -5 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRange { start: 5, end: -5 }));
}

#[test]
fn test_empty_range_allowed() {
    assert!(Config::from_json(r#"{ "verify": { "start": 3, "end": 3 } }"#).is_ok());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{ "verify": { "start": 0, "end": 70 } }"#)
        .unwrap();
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.verify.range(), 0..70);
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = Config::from_file(&path).unwrap_err();
    match err {
        ConfigError::Read { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_defers_validation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{ "verify": { "start": 5000, "end": 1000 } }"#)
        .unwrap();

    assert!(matches!(
        Config::from_file(file.path()).unwrap_err(),
        ConfigError::InvalidRange { start: 5000, end: 1000 }
    ));

    let mut config = Config::load(file.path()).unwrap();
    assert!(config.validate().is_err());
    config.verify.start = 0;
    config.verify.end = 10;
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_reports_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"not json").unwrap();
    assert!(matches!(
        Config::load(file.path()).unwrap_err(),
        ConfigError::Parse(_)
    ));
}
