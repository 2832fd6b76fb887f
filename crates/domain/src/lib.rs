//! # Domain
//!
//! The line classification core.
//!
//! - [`markers`]: literal comment markers configured for a run
//! - [`classifier`]: per-file state machine producing a [`Classification`] per line
//! - [`aggregator`]: blank/comment/code/file counters
//! - [`config`]: validated settings for a counting run
//!
//! Nothing in this crate touches the file system.

#![allow(clippy::multiple_crate_versions)]

pub mod aggregator;
pub mod classification;
pub mod classifier;
pub mod config;
pub mod markers;

pub use aggregator::{Aggregator, LineTally};
pub use classification::{Classification, LineKind};
pub use classifier::Classifier;
pub use config::{ConfigDraft, CountingConfig, RawMarkers};
pub use markers::{BlockMarker, MarkerSet};
