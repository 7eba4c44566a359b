use opentelemetry::global;
use opentelemetry::trace::{Span, TraceContextExt, Tracer};
use opentelemetry::Context;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

use crate::config::{LoggingConfig, TelemetryConfig};
use crate::error::{DemoError, Result};
use crate::telemetry::metrics::SCOPE_NAME;

/// Service name reported in the trace resource.
pub const SERVICE_NAME: &str = "otlp-http-server";

/// Initialize the global tracing subscriber for application logs.
///
/// The filter honors RUST_LOG when set; otherwise it combines the configured
/// application level with a separate level for OpenTelemetry SDK internals.
pub fn init_logging(logging: &LoggingConfig, telemetry: &TelemetryConfig) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "{},opentelemetry={}",
            logging.level, telemetry.otel_log_level
        ))
    });

    if logging.json {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(logging.show_target);
        let subscriber = Registry::default().with(env_filter).with(fmt_layer);
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| DemoError::Telemetry(format!("Failed to set global tracing subscriber: {e}")))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(logging.show_target);
        let subscriber = Registry::default().with(env_filter).with(fmt_layer);
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| DemoError::Telemetry(format!("Failed to set global tracing subscriber: {e}")))?;
    }

    Ok(())
}

/// Set up the process-wide tracer provider with an OTLP/HTTP span exporter.
///
/// The returned provider must be shut down by the caller at process exit to
/// flush batched spans.
pub fn init_tracer(telemetry: &TelemetryConfig) -> Result<SdkTracerProvider> {
    let endpoint = format!(
        "http://{}{}",
        telemetry.trace_endpoint, telemetry.trace_path
    );

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_http()
        .with_endpoint(endpoint)
        .build()
        .map_err(|e| DemoError::Telemetry(format!("Failed to build OTLP span exporter: {e}")))?;

    let resource = Resource::builder().with_service_name(SERVICE_NAME).build();

    let provider = SdkTracerProvider::builder()
        .with_resource(resource)
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    Ok(provider)
}

/// Record the manual demo spans for one `/hello` request: an outer span
/// carrying one event, with a nested inner span started and ended inside it.
///
/// No-op (via the noop tracer) when no tracer provider is installed.
pub fn record_hello_trace() {
    let tracer = global::tracer(SCOPE_NAME);

    let mut outer = tracer.start("hello-outer-span");
    outer.add_event("hello-event", Vec::new());

    let cx = Context::current_with_span(outer);
    let mut inner = tracer.start_with_context("hello-inner-span", &cx);
    inner.end();

    cx.span().end();
}
