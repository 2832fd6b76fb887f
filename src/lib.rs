// src/lib.rs
//! `line_tally`: 設定可能なコメント記法で行を コード/コメント/空行 に分類して集計する。
#![allow(clippy::multiple_crate_versions)]

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod cli;
pub mod presentation;
