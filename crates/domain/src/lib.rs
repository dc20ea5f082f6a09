//! # Domain
//!
//! ユーザーレコードと集計ロジック。
//!
//! - [`model`]: `UserRecord` と集計結果 (`StatsSummary`, `AgeGroupCounts`)
//! - [`analytics`]: 一回の走査で集計する `Aggregator` と部分集計 `Tally`
//!
//! I/O は一切行わない。レコードの読み込みや表示は外側の層の責務。

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
pub mod value_objects;

pub use analytics::{Aggregator, Tally};
pub use model::{AgeBracket, AgeGroupCounts, StatsSummary, UserRecord};
