use opentelemetry::global;
use opentelemetry::metrics::{Counter, Histogram, Meter, UpDownCounter};
use opentelemetry::InstrumentationScope;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use prometheus::Registry;
use std::sync::Arc;

use crate::error::{DemoError, Result};

/// Instrumentation scope reported alongside every instrument.
pub const SCOPE_NAME: &str = "otel-demo";
pub const SCOPE_VERSION: &str = "v1.0";

/// Upper bounds of the demo histogram buckets, in milliseconds.
pub const HISTOGRAM_BOUNDARIES: [f64; 10] =
    [0.0, 10.0, 20.0, 50.0, 100.0, 500.0, 1000.0, 2000.0, 5000.0, 10000.0];

/// Samples recorded into the histogram on every `/hello` request.
pub const HELLO_HISTOGRAM_SAMPLES: [f64; 7] =
    [1.0, 20.0, 30.0, 101.0, 2000.0, 9000.0, 20000.0];

#[derive(Clone)]
pub struct Metrics {
    pub demo_counter: Counter<u64>,
    pub demo_gauge: UpDownCounter<i64>,
    pub demo_histogram: Histogram<f64>,
}

impl Metrics {
    pub fn new(meter: Meter) -> Self {
        Self {
            demo_counter: meter
                .u64_counter("goframe.metric.demo.counter")
                .with_description("This is a simple demo for Counter usage")
                .with_unit("bytes")
                .build(),
            demo_gauge: meter
                .i64_up_down_counter("goframe.metric.demo.gauge")
                .with_description("This is a simple demo for UpDownCounter usage")
                .with_unit("%")
                .build(),
            demo_histogram: meter
                .f64_histogram("goframe.metric.demo.histogram")
                .with_description("This is a simple demo for histogram usage")
                .with_unit("ms")
                .with_boundaries(HISTOGRAM_BOUNDARIES.to_vec())
                .build(),
        }
    }

    /// Record the fixed demo values for one `/hello` request:
    /// counter +1, up/down counter +10 then -1 (net +9), and the
    /// seven fixed histogram samples.
    pub fn record_hello(&self) {
        self.demo_counter.add(1, &[]);

        self.demo_gauge.add(10, &[]);
        self.demo_gauge.add(-1, &[]);

        for sample in HELLO_HISTOGRAM_SAMPLES {
            self.demo_histogram.record(sample, &[]);
        }
    }
}

/// Build a meter provider whose prometheus exporter reads into `registry`.
///
/// Does not touch the global provider; `init_metrics` does the global
/// registration, tests use this directly with a private registry.
pub fn build_meter_provider(registry: &Registry) -> Result<SdkMeterProvider> {
    let exporter = opentelemetry_prometheus::exporter()
        .with_registry(registry.clone())
        .build()
        .map_err(|e| DemoError::Telemetry(format!("Failed to build prometheus exporter: {e}")))?;

    Ok(SdkMeterProvider::builder().with_reader(exporter).build())
}

/// Set up the process-wide meter provider and create the demo instruments.
///
/// The returned provider must be shut down by the caller at process exit to
/// flush buffered data.
pub fn init_metrics() -> Result<(Arc<Metrics>, Registry, SdkMeterProvider)> {
    let registry = Registry::default();
    let provider = build_meter_provider(&registry)?;

    global::set_meter_provider(provider.clone());

    let scope = InstrumentationScope::builder(SCOPE_NAME)
        .with_version(SCOPE_VERSION)
        .build();
    let metrics = Arc::new(Metrics::new(global::meter_with_scope(scope)));

    Ok((metrics, registry, provider))
}
