//! Tracing pipeline with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer → FileSpanExporter → JSON lines
//! ```
//!
//! Spans land in `~/.local/share/zellij/showcase/showcase-otlp.json`, one
//! OTLP/JSON document per exported batch. The file rotates once it passes
//! 5 MiB and two backups are kept.
//!
//! The level comes from the `trace_level` plugin option and defaults to
//! `"info"`. Directive syntax follows `EnvFilter`, so `"showcase=debug"` works.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - `exporter`: Span exporter and tracer provider
//! - `otlp`: OTLP/JSON encoding
//! - `file_writer`: Rotating line writer

mod exporter;
mod file_writer;
mod init;
mod otlp;

pub use init::{init_tracing, TRACE_FILE_NAME};
