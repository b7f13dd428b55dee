//! OpenTelemetry-based observability with file-based trace export.
//!
//! The plugin has no network access, so spans are written as OTLP JSON lines
//! to a local file that any OTLP-aware tool can ingest later.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter → zcalc-otlp.json
//! ```
//!
//! - **Location**: `~/.local/share/zellij/zcalc/zcalc-otlp.json`
//! - **Rotation**: at 10 MB, keeping `zcalc-otlp.json.1` to `.3`
//! - **Filtering**: `trace_level` plugin option, an `EnvFilter` directive
//!   (default `"info"`)
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: `SpanExporter` implementation and tracer provider
//! - [`otlp`]: OTLP JSON encoding
//! - [`rotation`]: Size-rotated file

mod exporter;
mod init;
mod otlp;
mod rotation;

pub use init::{init_tracing, TRACE_FILE_NAME};
