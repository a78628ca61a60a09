//! Tests for configuration consistency validation.

use rstest::rstest;

use crate::DashboardConfig;
use crate::error::DashboardError;

#[rstest]
fn default_configuration_is_valid() {
    assert!(DashboardConfig::default().validate().is_ok());
}

#[rstest]
#[case::serve_with_report(DashboardConfig {
    serve: true,
    report: Some("dashboard".to_owned()),
    ..Default::default()
})]
#[case::serve_offline(DashboardConfig {
    serve: true,
    offline: true,
    ..Default::default()
})]
#[case::zero_limit(DashboardConfig {
    limit: Some(0),
    ..Default::default()
})]
fn inconsistent_configurations_are_rejected(#[case] config: DashboardConfig) {
    let result = config.validate();

    assert!(
        matches!(result, Err(DashboardError::Configuration { .. })),
        "expected Configuration error, got {result:?}"
    );
}

#[rstest]
fn serve_alone_is_valid() {
    let config = DashboardConfig {
        serve: true,
        ..Default::default()
    };

    assert!(config.validate().is_ok(), "serve without report options should pass");
}
