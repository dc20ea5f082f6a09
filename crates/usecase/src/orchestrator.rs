use user_stats_domain::{Tally, UserRecord};
use user_stats_ports::{
    notifier::AnalysisNotifier,
    source::{RecordSource, UserRecordDto},
};
use user_stats_shared_kernel::{ErrorContext, Result};

use crate::dto::{AnalysisReport, RowPolicy};

pub struct AnalyzeRecords<'a> {
    source: &'a dyn RecordSource,
    notifier: Option<&'a dyn AnalysisNotifier>,
}

impl<'a> AnalyzeRecords<'a> {
    pub fn new(source: &'a dyn RecordSource) -> Self {
        Self { source, notifier: None }
    }

    pub fn with_notifier(mut self, notifier: &'a dyn AnalysisNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// 入力を一回走査して集計する。レコードは畳み込んだ時点で捨てる。
    pub fn run(&self, policy: RowPolicy) -> Result<AnalysisReport> {
        let input = self.source.describe();
        log::debug!("reading user records from {input}");

        let mut tally = Tally::new();
        let mut skipped = 0usize;
        for row in self.source.rows()? {
            match row {
                Ok(dto) => tally.record(&dto_to_domain_record(dto)),
                Err(err) if policy == RowPolicy::Skip && err.is_malformed_record() => {
                    skipped += 1;
                    self.warn(&format!("skipping row: {err}"));
                }
                Err(err) => return Err(err),
            }
        }

        if skipped > 0 {
            self.warn(&format!("{skipped} malformed rows skipped in {input}"));
        }
        log::debug!("aggregated {} records ({skipped} skipped)", tally.total());

        let summary = tally
            .finish()
            .with_context(|| format!("no usable records in {input}"))?;
        Ok(AnalysisReport::new(summary, skipped))
    }

    fn warn(&self, message: &str) {
        if let Some(notifier) = self.notifier {
            notifier.warn(message);
        }
    }
}

fn dto_to_domain_record(dto: UserRecordDto) -> UserRecord {
    UserRecord {
        id: dto.id,
        name: dto.name,
        age: dto.age,
        gender: dto.gender,
        status: dto.status,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use user_stats_domain::AgeBracket;
    use user_stats_ports::source::RecordRows;
    use user_stats_shared_kernel::{Gender, InfrastructureError, Status, UserStatsError};

    use super::*;

    enum StubRow {
        Good(i64, &'static str, &'static str),
        Bad(&'static str),
    }

    struct StubSource {
        rows: Vec<StubRow>,
    }

    impl RecordSource for StubSource {
        fn rows(&self) -> Result<RecordRows<'_>> {
            let iter = self.rows.iter().enumerate().map(|(i, row)| {
                let line = i as u64 + 2;
                match row {
                    StubRow::Good(age, gender, status) => Ok(UserRecordDto {
                        line,
                        id: line as i64,
                        name: format!("User {line}"),
                        age: *age,
                        gender: Gender::from(*gender),
                        status: Status::from(*status),
                    }),
                    StubRow::Bad(field) => Err(InfrastructureError::MalformedRecord {
                        line,
                        field: (*field).to_string(),
                        reason: "bad value".to_string(),
                    }
                    .into()),
                }
            });
            Ok(Box::new(iter))
        }

        fn describe(&self) -> String {
            "stub".to_string()
        }
    }

    struct MissingSource;

    impl RecordSource for MissingSource {
        fn rows(&self) -> Result<RecordRows<'_>> {
            Err(InfrastructureError::SourceNotFound {
                path: "missing.csv".into(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }
            .into())
        }

        fn describe(&self) -> String {
            "missing.csv".to_string()
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        warnings: RefCell<Vec<String>>,
    }

    impl AnalysisNotifier for RecordingNotifier {
        fn info(&self, _message: &str) {}

        fn warn(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }
    }

    fn mixed_source() -> StubSource {
        StubSource {
            rows: vec![
                StubRow::Good(10, "Female", "Active"),
                StubRow::Bad("Age"),
                StubRow::Good(25, "Male", "Inactive"),
                StubRow::Good(70, "Female", "Active"),
            ],
        }
    }

    #[test]
    fn run_aggregates_all_good_rows() {
        let source = StubSource {
            rows: vec![
                StubRow::Good(10, "Female", "Active"),
                StubRow::Good(25, "Male", "Inactive"),
                StubRow::Good(70, "Female", "Active"),
            ],
        };
        let report = AnalyzeRecords::new(&source).run(RowPolicy::Strict).expect("run succeeds");

        assert_eq!(report.processed, 3);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.summary.active_count(), 2usize);
        assert_eq!(report.summary.age_group_counts().get(AgeBracket::Over60), 1usize);
    }

    #[test]
    fn strict_policy_fails_on_first_bad_row() {
        let source = mixed_source();
        let err = AnalyzeRecords::new(&source).run(RowPolicy::Strict).unwrap_err();

        assert!(err.is_malformed_record());
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn skip_policy_reports_skipped_rows() {
        let source = mixed_source();
        let notifier = RecordingNotifier::default();
        let report = AnalyzeRecords::new(&source)
            .with_notifier(&notifier)
            .run(RowPolicy::Skip)
            .expect("bad row is skipped");

        assert_eq!(report.processed, 3);
        assert_eq!(report.skipped, 1);
        assert!((report.summary.female_percentage() - 66.67).abs() < 0.01);

        let warnings = notifier.warnings.borrow();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("'Age'"));
        assert!(warnings[1].contains("1 malformed rows skipped"));
    }

    #[test]
    fn only_bad_rows_is_empty_input() {
        let source = StubSource { rows: vec![StubRow::Bad("ID"), StubRow::Bad("Age")] };
        let err = AnalyzeRecords::new(&source).run(RowPolicy::Skip).unwrap_err();

        assert!(err.is_empty_input());
        assert!(matches!(err, UserStatsError::Context { .. }));
    }

    #[test]
    fn missing_source_propagates() {
        let err = AnalyzeRecords::new(&MissingSource).run(RowPolicy::Skip).unwrap_err();
        assert!(err.is_source_not_found());
    }

    #[test]
    fn report_serializes_flat() {
        let source = StubSource { rows: vec![StubRow::Good(19, "Male", "Active")] };
        let report = AnalyzeRecords::new(&source).run(RowPolicy::Strict).unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["active_count"], 1);
        assert_eq!(value["female_percentage"], 0.0);
        assert_eq!(value["age_group_counts"]["19-30"], 1);
        assert_eq!(value["total_users"], 1);
        assert_eq!(value["skipped"], 0);
    }
}
