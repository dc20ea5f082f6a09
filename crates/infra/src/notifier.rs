// crates/infra/src/notifier.rs
use user_stats_ports::notifier::AnalysisNotifier;

/// `log` ファサードへ転送する通知先。出力先とレベルはバイナリ側で設定する。
pub struct LogNotifier;

impl AnalysisNotifier for LogNotifier {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }
}
