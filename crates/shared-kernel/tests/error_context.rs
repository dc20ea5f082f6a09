// crates/shared-kernel/tests/error_context.rs
use std::io;

use user_stats_shared_kernel::{DomainError, ErrorContext, InfrastructureError, UserStatsError};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(UserStatsError::from)
        .context("writing report")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("writing report"));
    assert!(display.contains("Output error:"));
}

#[test]
fn root_sees_through_nested_context() {
    let err = Err::<(), _>(DomainError::EmptyInput)
        .context("aggregating")
        .context("running analysis")
        .unwrap_err();

    assert!(err.is_empty_input());
    assert!(!err.is_source_not_found());
}

#[test]
fn malformed_record_names_line_and_field() {
    let err: UserStatsError = InfrastructureError::MalformedRecord {
        line: 4,
        field: "Age".into(),
        reason: "invalid digit found in string: 'abc'".into(),
    }
    .into();

    assert!(err.is_malformed_record());
    let display = err.to_string();
    assert!(display.contains("line 4"));
    assert!(display.contains("'Age'"));
}
