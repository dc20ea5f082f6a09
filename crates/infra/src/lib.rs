// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod notifier;
pub mod persistence;
pub mod source;
