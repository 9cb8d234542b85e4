//! Document export adapters. Implement DocumentExporterPort.

pub mod pdf_exporter;

pub use pdf_exporter::{PDF_MIME_TYPE, PLAN_FILE_NAME, PdfExporter};
