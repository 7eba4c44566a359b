pub mod health;
pub mod metrics;
pub mod metrics_handler;
pub mod tracing;

pub use health::health_check_response;
pub use metrics::{build_meter_provider, init_metrics, Metrics};
pub use metrics_handler::{handle_metrics, RespBody};
pub use tracing::{init_logging, init_tracer, record_hello_trace};
