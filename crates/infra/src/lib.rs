//! # Infrastructure
//!
//! Adapters that implement the ports against the real filesystem:
//!
//! - [`filesystem`]: `ignore`-based directory walker filtered by extension
//! - [`line_reader`]: buffered line source with CRLF and BOM handling
//! - [`config`]: JSON / YAML / legacy `KEY = value` configuration loader
//! - [`progress`]: progress sink that reports through the `log` facade

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod filesystem;
pub mod line_reader;
pub mod persistence;
pub mod progress;

pub use config::load_config;
pub use filesystem::ExtensionFileEnumerator;
pub use line_reader::BufferedLineSource;
pub use progress::LogProgress;
