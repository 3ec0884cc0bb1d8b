use yamlquery::config::{Config, OutputFormat};

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.output_format, OutputFormat::Plain);
    assert!(!config.strict);
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_serialize_default_config() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).expect("Failed to serialize config");

    assert!(toml_str.contains("output_format = \"plain\""));
    assert!(toml_str.contains("strict = false"));
    assert!(toml_str.contains("log_level = \"warn\""));
}

#[test]
fn test_deserialize_full_config() {
    let toml_str = r#"
        output_format = "yaml"
        strict = true
        log_level = "debug"
    "#;

    let config: Config = toml::from_str(toml_str).expect("Failed to deserialize config");

    assert_eq!(config.output_format, OutputFormat::Yaml);
    assert!(config.strict);
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_deserialize_empty_config() {
    let config: Config = toml::from_str("").expect("Failed to deserialize config");
    assert_eq!(config, Config::default());
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = Config {
        output_format: OutputFormat::Json,
        strict: true,
        ..Config::default()
    };
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path), config);
}

#[test]
fn test_load_missing_or_invalid_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("absent.toml");
    assert_eq!(Config::load_from(&missing), Config::default());

    let invalid = dir.path().join("invalid.toml");
    std::fs::write(&invalid, "output_format = 7\n").unwrap();
    assert_eq!(Config::load_from(&invalid), Config::default());
}
