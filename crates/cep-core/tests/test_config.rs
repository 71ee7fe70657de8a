use cep_core::config::CepConfig;

#[test]
fn defaults_target_viacep_with_five_second_timeout() {
    let config = CepConfig::default();
    assert_eq!(config.base_url, "https://viacep.com.br/ws");
    assert_eq!(config.timeout_ms, 5000);
}

#[test]
fn empty_json_falls_back_to_defaults() {
    let config = CepConfig::from_json_str("{}").expect("empty object should parse");
    assert_eq!(config.base_url, "https://viacep.com.br/ws");
    assert_eq!(config.timeout_ms, 5000);
}

#[test]
fn json_overrides_are_applied() {
    let json = r#"{
        "base_url": "http://localhost:9321/ws",
        "timeout_ms": 250
    }"#;

    let config = CepConfig::from_json_str(json).expect("Failed to parse config");
    assert_eq!(config.base_url, "http://localhost:9321/ws");
    assert_eq!(config.timeout_ms, 250);
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let config =
        CepConfig::from_json_str(r#"{"timeout_ms": 1000}"#).expect("Failed to parse config");
    assert_eq!(config.base_url, "https://viacep.com.br/ws");
    assert_eq!(config.timeout_ms, 1000);
}

#[test]
fn invalid_json_reports_parse_context() {
    let err = CepConfig::from_json_str("not json").expect_err("garbage should not parse");
    assert!(err.to_string().contains("Failed to parse CEP configuration"));
}

#[test]
fn loads_from_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("cep.json");
    std::fs::write(&path, r#"{"timeout_ms": 750}"#).expect("write config file");

    let config = CepConfig::from_file(&path).expect("Failed to load config file");
    assert_eq!(config.timeout_ms, 750);
    assert_eq!(config.base_url, "https://viacep.com.br/ws");
}

#[test]
fn missing_file_reports_read_context() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("absent.json");

    let err = CepConfig::from_file(&path).expect_err("missing file should fail");
    assert!(err.to_string().contains("Failed to read config file"));
}
