//! Tests for operation mode determination.

use rstest::rstest;

use crate::DashboardConfig;
use crate::config::OperationMode;

#[rstest]
fn operation_mode_serve_when_serve_set() {
    let config = DashboardConfig {
        serve: true,
        ..Default::default()
    };

    assert_eq!(
        config.operation_mode(),
        OperationMode::Serve,
        "should be Serve when serve is set"
    );
}

#[rstest]
fn operation_mode_report_by_default() {
    let config = DashboardConfig::default();

    assert_eq!(
        config.operation_mode(),
        OperationMode::Report,
        "should be Report when no fields are set"
    );
}

#[rstest]
fn operation_mode_ignores_output_fields() {
    let config = DashboardConfig {
        format: Some("json".to_owned()),
        limit: Some(3),
        ..Default::default()
    };

    assert_eq!(
        config.operation_mode(),
        OperationMode::Report,
        "output fields should not affect operation mode"
    );
}
