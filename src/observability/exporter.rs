//! Span exporter writing OTLP JSON lines to a rotating file.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;

use super::otlp::OtlpEncoder;
use super::rotation::RotatingFile;

/// Writes each exported batch as one line of OTLP JSON.
///
/// Exports fail once [`SpanExporter::shutdown`] has been called.
#[derive(Debug)]
struct FileSpanExporter {
    file: RotatingFile,
    encoder: OtlpEncoder,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    const fn new(file: RotatingFile, encoder: OtlpEncoder) -> Self {
        Self {
            file,
            encoder,
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(TraceError::from("exporter is shut down"));
        }

        let document = self.encoder.encode_batch(batch).to_string();
        self.file
            .write_line(&document)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    // The resource is fixed when the encoder is built.
    fn set_resource(&mut self, _resource: &Resource) {}
}

/// Builds a tracer provider that exports every ended span synchronously to
/// `file_path`.
///
/// The simple (unbatched) processor is used because the plugin runs on a
/// single WASI thread with no async runtime to drive a batch exporter.
pub fn create_tracer_provider(
    file_path: PathBuf,
    resource: Resource,
    scope: &'static str,
) -> TracerProvider {
    let exporter = FileSpanExporter::new(
        RotatingFile::new(file_path),
        OtlpEncoder::new(resource.clone(), scope),
    );

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer, TracerProvider as _};
    use opentelemetry::KeyValue;

    #[test]
    fn test_ended_span_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zcalc-otlp.json");
        let resource = Resource::new(vec![KeyValue::new("service.name", "zcalc")]);

        let provider = create_tracer_provider(path.clone(), resource, "zcalc");
        let tracer = provider.tracer("zcalc");
        tracer.in_span("dispatch", |_cx| {});

        let contents = std::fs::read_to_string(&path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        let span = &doc["resourceSpans"][0]["scopeSpans"][0]["spans"][0];
        assert_eq!(span["name"], "dispatch");
        assert_eq!(span["parentSpanId"], "");
    }
}
