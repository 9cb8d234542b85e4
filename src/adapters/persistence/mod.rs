//! Persistence adapters. Write exported documents to disk.

pub mod fs_sink;

pub use fs_sink::FsDocumentSink;
