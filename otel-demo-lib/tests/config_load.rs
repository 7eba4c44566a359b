use otel_demo_lib::config::{load_from_path, Config};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn empty_file_yields_defaults() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let file = NamedTempFile::new()?;

    let config = load_from_path(file.path())?;
    assert_eq!(config.listen.to_string(), "0.0.0.0:8080");
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.json);
    assert!(!config.logging.show_target);
    assert!(config.telemetry.trace_enabled);
    assert_eq!(config.telemetry.trace_endpoint, "host.docker.internal:4318");
    assert_eq!(config.telemetry.trace_path, "/v1/traces");
    assert_eq!(config.telemetry.otel_log_level, "warn");
    Ok(())
}

#[test]
fn defaults_match_default_impl() {
    let config = Config::default();
    assert_eq!(config.listen.to_string(), "0.0.0.0:8080");
    assert!(config.telemetry.trace_enabled);
}

#[test]
fn explicit_values_roundtrip() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"
listen = "127.0.0.1:9090"

[logging]
level = "debug"
show_target = true
json = false

[telemetry]
trace_enabled = false
trace_endpoint = "collector:4318"
trace_path = "/v1/traces"
otel_log_level = "debug"
"#
    )?;

    let config = load_from_path(file.path())?;
    assert_eq!(config.listen.to_string(), "127.0.0.1:9090");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.show_target);
    assert!(!config.logging.json);
    assert!(!config.telemetry.trace_enabled);
    assert_eq!(config.telemetry.trace_endpoint, "collector:4318");
    assert_eq!(config.telemetry.otel_log_level, "debug");
    Ok(())
}

#[test]
fn trace_path_without_slash_rejected() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"
[telemetry]
trace_path = "v1/traces"
"#
    )?;

    assert!(load_from_path(file.path()).is_err());
    Ok(())
}

#[test]
fn empty_endpoint_rejected() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"
[telemetry]
trace_endpoint = ""
"#
    )?;

    assert!(load_from_path(file.path()).is_err());
    Ok(())
}

#[test]
fn disabled_tracing_skips_endpoint_validation() -> Result<(), Box<dyn std::error::Error + Send + Sync>>
{
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"
[telemetry]
trace_enabled = false
trace_endpoint = ""
trace_path = "no-slash"
"#
    )?;

    assert!(load_from_path(file.path()).is_ok());
    Ok(())
}

#[test]
fn missing_file_rejected() {
    assert!(load_from_path("/nonexistent/otel-demo.toml").is_err());
}
