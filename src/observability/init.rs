//! Tracing subscriber setup.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::exporter;
use crate::Config;

/// Service and scope name stamped on every exported span.
const SERVICE_NAME: &str = "zcalc";

/// Name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "zcalc-otlp.json";

/// Installs the global subscriber: an `EnvFilter` built from
/// `config.trace_level` in front of an OpenTelemetry layer exporting to
/// `<data dir>/zcalc-otlp.json`.
///
/// Tracing is optional. If the data directory cannot be created, or a
/// subscriber is already installed, this returns without doing anything.
///
/// # Example
///
/// ```rust
/// use zcalc::observability::init_tracing;
/// use zcalc::Config;
///
/// let config = Config {
///     trace_level: "debug".to_string(),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider =
        exporter::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
