#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod server;
pub mod telemetry;

pub use config::{load_from_path, Config, LoggingConfig, TelemetryConfig};
pub use error::{DemoError, Result};
pub use server::run;
pub use telemetry::{init_logging, init_metrics, init_tracer, record_hello_trace, Metrics};
