//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters
//! to implement specific use cases:
//!
//! - [`orchestrator`]: 入力を一回走査して集計する `AnalyzeRecords`
//! - [`command`]: 集計から出力までを通す `RunAnalysisCommand`
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod command;
pub mod dto;
pub mod orchestrator;

pub use command::{RunAnalysisCommand, SummaryPresenter};
pub use dto::{AnalysisReport, RowPolicy};
pub use orchestrator::AnalyzeRecords;
