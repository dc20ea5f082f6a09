// src/cli/value_enum.rs
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 人が読むためのテキスト
    Text,
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
    /// Markdown の表
    Md,
}
