//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: Directory traversal and extension filtering
//! - [`line_source`]: Reading a file as a sequence of lines
//! - [`progress`]: Progress reporting for long-running operations
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod line_source;
pub mod progress;
