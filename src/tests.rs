use crate::config::{OracleConfig, PathsConfig};
use crate::driver::{passage_files, DriverConfig};
use std::path::{Path, PathBuf};

#[test]
fn default_paths() {
    let paths = PathsConfig::default();
    assert_eq!(paths.data_dir, PathBuf::from("data/raw"));
    assert_eq!(paths.output_dir, PathBuf::from("data/oracles"));
    assert_eq!(paths.splits, vec!["dev-xml", "train-xml"]);
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let config: OracleConfig = toml::from_str(
        r#"
        [paths]
        output_dir = "out"

        [parser]
        step_factor = 4
        "#,
    )
    .unwrap();
    assert_eq!(config.paths.output_dir, PathBuf::from("out"));
    assert_eq!(config.paths.data_dir, PathBuf::from("data/raw"));
    assert_eq!(config.parser.step_factor, 4);
    assert_eq!(config.parser.labeled_formats, vec!["amr"]);
}

#[test]
fn toml_output_loads_back() {
    let config = OracleConfig::default();
    let parsed: OracleConfig = toml::from_str(&config.to_toml()).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn missing_config_file_falls_back() {
    let config = OracleConfig::load(Path::new("/nonexistent/oraclegen.toml"));
    assert_eq!(config, OracleConfig::default());
}

#[test]
fn driver_config_starts_with_discovery() {
    let driver = DriverConfig::from(OracleConfig::default());
    assert!(driver.inputs.is_empty());
    assert!(!driver.load.annotate);
}

#[test]
fn explicit_inputs_bypass_discovery() {
    let driver = DriverConfig {
        inputs: vec![PathBuf::from("a.xml"), PathBuf::from("b.json")],
        ..DriverConfig::default()
    };
    assert_eq!(passage_files(&driver).unwrap(), driver.inputs);
}
