// crates/ports/src/source.rs
use user_stats_shared_kernel::{Gender, Result, Status};

/// DTO representing one row yielded by a record source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecordDto {
    /// 1 始まりの入力行番号 (ヘッダー行を含む)。
    pub line: u64,
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub gender: Gender,
    pub status: Status,
}

/// 行ごとの読み出し結果。行単位のエラーは要素側に載る。
pub type RecordRows<'a> = Box<dyn Iterator<Item = Result<UserRecordDto>> + 'a>;

/// Port for reading user records.
///
/// `rows` 自体の失敗は入力を開けなかったことを表し、
/// 個々の行の失敗は反復子の要素として返る。
pub trait RecordSource {
    fn rows(&self) -> Result<RecordRows<'_>>;

    /// ログ用の入力名。
    fn describe(&self) -> String;
}
