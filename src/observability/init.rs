//! Tracing subscriber setup.
//!
//! Wires `tracing` macros through the OpenTelemetry bridge into the file
//! exporter: filter by level, bridge spans, encode OTLP JSON, write with
//! rotation.

use super::tracer;
use crate::infrastructure::paths;
use crate::TableConfig;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name reported in exported trace resources.
const SERVICE_NAME: &str = "Marquee";

/// Name of the live trace file under the data directory.
const TRACE_FILE: &str = "marquee-otlp.json";

/// Installs the tracing subscriber with file-based OTLP export.
///
/// The filter level comes from `config.trace_level`, defaulting to `info`.
/// Observability is strictly optional: if the data directory cannot be
/// created this quietly does nothing, and repeated calls after a successful
/// install are no-ops (only the first subscriber wins).
pub fn init_tracing(config: &TableConfig) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE), resource);

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)))
        .try_init();
}
