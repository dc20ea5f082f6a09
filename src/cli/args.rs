// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use super::{parsers, value_enum::OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "user_stats", version, about = "ユーザーCSVの集計ツール (アクティブ数・女性比率・年齢層別人数)")]
pub struct Args {
    /// 入力CSV (ヘッダー行に ID, Name, Age, Gender, Status が必要)
    #[arg(default_value = "Data.csv")]
    pub path: PathBuf,

    /// 出力フォーマット
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// 区切り文字 (1文字のASCII。`\t` または `tab` でタブ)
    #[arg(short, long, default_value = ",", value_parser = parsers::parse_delimiter)]
    pub delimiter: u8,

    /// 不正な行を警告して読み飛ばす (既定では最初の不正行でエラー終了)
    #[arg(long)]
    pub skip_invalid: bool,

    /// 結果を標準出力ではなくファイルへ書き出す
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// ログを詳しくする (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// エラー以外のログを出さない
    #[arg(short, long)]
    pub quiet: bool,
}
