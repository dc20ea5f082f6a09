// src/config.rs
use std::path::PathBuf;

use log::LevelFilter;
use user_stats_usecase::RowPolicy;

use crate::{cli, presentation::OutputFormat};

/// 1 回の実行に必要な設定。CLI 引数から [`cli::build_config`] で作る。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub delimiter: u8,
    pub policy: RowPolicy,
    pub output: Option<PathBuf>,
    pub log_level: LevelFilter,
}

#[cfg(test)]
impl Config {
    /// 既定値で入力だけ指定した設定。
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            format: OutputFormat::Text,
            delimiter: b',',
            policy: RowPolicy::Strict,
            output: None,
            log_level: LevelFilter::Warn,
        }
    }
}

// From trait implementations for CLI -> presentation enum conversion

impl From<cli::OutputFormat> for OutputFormat {
    fn from(format: cli::OutputFormat) -> Self {
        match format {
            cli::OutputFormat::Text => Self::Text,
            cli::OutputFormat::Json => Self::Json,
            #[cfg(feature = "yaml")]
            cli::OutputFormat::Yaml => Self::Yaml,
            cli::OutputFormat::Md => Self::Md,
        }
    }
}
