use std::io::Write;

use user_stats_ports::{notifier::AnalysisNotifier, source::RecordSource};
use user_stats_shared_kernel::{ErrorContext, Result};

use crate::{
    dto::{AnalysisReport, RowPolicy},
    orchestrator::AnalyzeRecords,
};

/// 集計結果を何らかの形式で書き出す。
pub trait SummaryPresenter {
    fn present(&self, report: &AnalysisReport, out: &mut dyn Write) -> Result<()>;
}

pub struct RunAnalysisCommand<'a> {
    source: &'a dyn RecordSource,
    presenter: &'a dyn SummaryPresenter,
    notifier: Option<&'a dyn AnalysisNotifier>,
}

impl<'a> RunAnalysisCommand<'a> {
    pub fn new(
        source: &'a dyn RecordSource,
        presenter: &'a dyn SummaryPresenter,
        notifier: Option<&'a dyn AnalysisNotifier>,
    ) -> Self {
        Self { source, presenter, notifier }
    }

    pub fn execute(&self, policy: RowPolicy, out: &mut dyn Write) -> Result<AnalysisReport> {
        let mut analysis = AnalyzeRecords::new(self.source);
        if let Some(notifier) = self.notifier {
            notifier.info(&format!("analyzing {}", self.source.describe()));
            analysis = analysis.with_notifier(notifier);
        }

        let report = analysis.run(policy).context("failed to analyze records")?;

        self.presenter.present(&report, out).context("failed to emit output")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use user_stats_ports::source::{RecordRows, UserRecordDto};
    use user_stats_shared_kernel::{Gender, InfrastructureError, Status, UserStatsError};

    use super::*;

    struct OneRow;

    impl RecordSource for OneRow {
        fn rows(&self) -> Result<RecordRows<'_>> {
            let dto = UserRecordDto {
                line: 2,
                id: 1,
                name: "User 1".into(),
                age: 45,
                gender: Gender::Female,
                status: Status::Active,
            };
            Ok(Box::new(std::iter::once(Ok(dto))))
        }

        fn describe(&self) -> String {
            "one-row".into()
        }
    }

    struct CountPresenter;

    impl SummaryPresenter for CountPresenter {
        fn present(&self, report: &AnalysisReport, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "{}", report.summary.active_count())?;
            Ok(())
        }
    }

    struct FailingPresenter;

    impl SummaryPresenter for FailingPresenter {
        fn present(&self, _report: &AnalysisReport, _out: &mut dyn Write) -> Result<()> {
            Err(std::io::Error::other("No space left on device").into())
        }
    }

    #[test]
    fn execute_presents_report() {
        let mut out = Vec::new();
        let report = RunAnalysisCommand::new(&OneRow, &CountPresenter, None)
            .execute(RowPolicy::Strict, &mut out)
            .expect("execute succeeds");

        assert_eq!(report.processed, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "1\n");
    }

    #[test]
    fn presenter_failure_keeps_cause() {
        let mut out = Vec::new();
        let err = RunAnalysisCommand::new(&OneRow, &FailingPresenter, None)
            .execute(RowPolicy::Strict, &mut out)
            .unwrap_err();

        let display = err.to_string();
        assert!(display.starts_with("failed to emit output: "));
        assert!(display.contains("No space left on device"));
        assert!(matches!(
            err.root(),
            UserStatsError::Infrastructure(InfrastructureError::OutputError { .. })
        ));
    }
}
