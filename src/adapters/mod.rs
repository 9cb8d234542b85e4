//! Infrastructure adapters. Implement ports.
//!
//! Text generation, PDF export, filesystem, terminal UI. Map errors to DomainError.

pub mod ai;
pub mod assets;
pub mod export;
pub mod persistence;
pub mod ui;
