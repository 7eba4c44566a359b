use serde::Deserialize;
use std::net::SocketAddr;

/// Main configuration structure
///
/// Every field has a default, so the server runs without a config file at
/// all: listen on 0.0.0.0:8080, JSON logging at info level, trace export to
/// host.docker.internal:4318.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Address and port to listen on
    /// Example: "0.0.0.0:8080" or "127.0.0.1:8080"
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Telemetry configuration
    /// Controls trace export and OpenTelemetry SDK log verbosity
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            logging: LoggingConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

/// Logging configuration
/// Controls application-level structured logging (stdout)
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    /// Default: "info"
    /// Can be overridden at runtime via RUST_LOG environment variable
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Show module path (target) in log messages
    /// Default: false
    #[serde(default = "default_false")]
    pub show_target: bool,
    /// Emit log lines as structured JSON instead of plain text
    /// Default: true
    #[serde(default = "default_true")]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            show_target: default_false(),
            json: default_true(),
        }
    }
}

/// Telemetry configuration
/// Controls trace export and OpenTelemetry integration
#[derive(Debug, Deserialize, Clone)]
pub struct TelemetryConfig {
    /// Export spans to an OTLP collector over HTTP
    /// Default: true
    #[serde(default = "default_true")]
    pub trace_enabled: bool,
    /// OTLP collector host:port (HTTP transport, no scheme)
    /// Default: "host.docker.internal:4318"
    #[serde(default = "default_trace_endpoint")]
    pub trace_endpoint: String,
    /// OTLP traces URL path on the collector
    /// Must start with "/"
    /// Default: "/v1/traces"
    #[serde(default = "default_trace_path")]
    pub trace_path: String,
    /// OpenTelemetry internal log level
    /// Controls verbosity of OpenTelemetry SDK internal logs (not application logs)
    /// Options: "trace", "debug", "info", "warn", "error"
    /// Default: "warn"
    #[serde(default = "default_otel_log_level")]
    pub otel_log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            trace_enabled: default_true(),
            trace_endpoint: default_trace_endpoint(),
            trace_path: default_trace_path(),
            otel_log_level: default_otel_log_level(),
        }
    }
}

fn default_listen() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_otel_log_level() -> String {
    "warn".to_string()
}

fn default_trace_endpoint() -> String {
    "host.docker.internal:4318".to_string()
}

fn default_trace_path() -> String {
    "/v1/traces".to_string()
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}
