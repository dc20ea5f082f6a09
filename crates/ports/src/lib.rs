//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: 入力表からユーザーレコードを読み出す
//! - [`notifier`]: 解析中の警告・進捗の通知
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod notifier;
pub mod source;
