use serde::Serialize;
use user_stats_domain::{StatsSummary, value_objects::UserCount};

/// 不正な行に出会ったときの扱い。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowPolicy {
    /// 最初の不正行でエラーにする。
    #[default]
    Strict,
    /// 不正行を警告して読み飛ばし、件数を報告する。
    Skip,
}

/// Output of the analysis use case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub summary: StatsSummary,
    pub total_users: UserCount,
    /// 集計に入った行数。
    pub processed: usize,
    /// 読み飛ばした不正行の数。`RowPolicy::Strict` では常に 0。
    pub skipped: usize,
}

impl AnalysisReport {
    pub fn new(summary: StatsSummary, skipped: usize) -> Self {
        let total_users = summary.total_users();
        Self { processed: total_users.value(), total_users, summary, skipped }
    }
}
