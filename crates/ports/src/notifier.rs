// crates/ports/src/notifier.rs

pub trait AnalysisNotifier {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}
