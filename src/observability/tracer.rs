//! OpenTelemetry tracer provider backed by a file exporter.
//!
//! Spans go to a rotating JSON file instead of over the network, so traces
//! can be inspected offline without any collector infrastructure.

use super::file_writer::FileWriter;
use super::span_formatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// `SpanExporter` writing OTLP JSON documents to a rotating file, one batch
/// per line.
struct OtlpFileExporter {
    writer: FileWriter,
    resource: Resource,
    shut_down: AtomicBool,
}

impl SpanExporter for OtlpFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.shut_down.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        let document = span_formatter::encode_batch(&self.resource, &batch).to_string();
        let outcome = self
            .writer
            .write_line(&document)
            .map_err(|e| TraceError::from(e.to_string()));
        Box::pin(std::future::ready(outcome))
    }

    fn shutdown(&mut self) {
        // Export attempts after this point fail; the file closes on Drop.
        self.shut_down.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

impl std::fmt::Debug for OtlpFileExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtlpFileExporter")
            .field("writer", &self.writer)
            .field("shut_down", &self.shut_down)
            .finish_non_exhaustive()
    }
}

/// Builds a tracer provider that exports through [`OtlpFileExporter`] with
/// a simple (immediate, non-batched) export strategy.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = OtlpFileExporter {
        writer: FileWriter::new(file_path),
        resource: resource.clone(),
        shut_down: AtomicBool::new(false),
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
