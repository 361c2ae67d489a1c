//! OpenTelemetry-based observability with file-based trace export.
//!
//! This module provides tracing infrastructure for the table engine, using
//! OpenTelemetry OTLP format with file-based exporting. Traces are written
//! to JSON files for offline analysis and debugging.
//!
//! # Architecture
//!
//! The observability layer implements a custom file-based OTLP exporter:
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON Files
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: traces written to `marquee-otlp.json` under the
//!   data directory
//! - **Automatic Rotation**: files rotate at 10MB with 3-backup retention
//! - **OTLP Format**: standard OpenTelemetry Protocol JSON documents
//! - **Resource Metadata**: includes the service name
//!
//! # Usage
//!
//! Initialize tracing early in the host lifecycle:
//!
//! ```no_run
//! use marquee::observability::init_tracing;
//! use marquee::TableConfig;
//!
//! let config = TableConfig::default();
//! init_tracing(&config);
//!
//! tracing::debug!("table engine initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`tracer`]: Custom OpenTelemetry tracer provider with file export
//! - [`span_formatter`]: OTLP JSON span serialization
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod span_formatter;
mod tracer;

pub mod init;

pub use init::init_tracing;
