//! Tests for configuration layer precedence.

use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::{Layer, config_from};
use crate::DashboardConfig;

#[rstest]
#[case::file_overrides_defaults(
    vec![(Layer::Defaults, json!({"report": "dashboard"})), (Layer::File, json!({"report": "support-care"}))],
    "support-care"
)]
#[case::environment_overrides_file(
    vec![(Layer::File, json!({"report": "projects"})), (Layer::Environment, json!({"report": "employees"}))],
    "employees"
)]
#[case::cli_overrides_environment(
    vec![(Layer::Environment, json!({"report": "employees"})), (Layer::Cli, json!({"report": "prs-over-time"}))],
    "prs-over-time"
)]
fn report_follows_layer_precedence(#[case] layers: Vec<(Layer, Value)>, #[case] expected: &str) {
    let config = config_from(&layers);

    assert_eq!(config.report.as_deref(), Some(expected));
}

#[rstest]
fn cli_api_base_url_wins_over_every_other_source() {
    let config = config_from(&[
        (Layer::Defaults, json!({"api_base_url": "http://defaults/api"})),
        (Layer::File, json!({"api_base_url": "http://file/api"})),
        (Layer::Environment, json!({"api_base_url": "http://env/api"})),
        (Layer::Cli, json!({"api_base_url": "http://cli/api"})),
    ]);

    assert_eq!(config.api_base_url(), "http://cli/api");
}

#[rstest]
fn layers_without_a_field_keep_the_lower_value() {
    let config = config_from(&[
        (Layer::File, json!({"limit": 5, "format": "json"})),
        (Layer::Cli, json!({"format": "text"})),
    ]);

    assert_eq!(config.limit, Some(5), "limit should survive the CLI layer");
    assert_eq!(config.format.as_deref(), Some("text"));
}

#[rstest]
fn merged_shape_matches_the_built_in_defaults() {
    let config = config_from(&[]);
    let built_in = DashboardConfig::default();

    assert_eq!(config.api_base_url, built_in.api_base_url);
    assert_eq!(config.report, built_in.report);
    assert_eq!(config.limit, built_in.limit);
    assert!(!config.serve, "serve should default to false");
    assert!(!config.offline, "offline should default to false");
}
