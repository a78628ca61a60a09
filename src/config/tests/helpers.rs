//! Layer builders for configuration tests.

use ortho_config::MergeComposer;
use serde_json::{Value, json};

use crate::DashboardConfig;

/// Configuration source, lowest precedence first.
#[derive(Debug, Clone, Copy)]
pub enum Layer {
    Defaults,
    File,
    Environment,
    Cli,
}

/// Null-valued defaults so every merge sees the full struct shape.
fn shape() -> Value {
    json!({
        "api_base_url": null,
        "bind_address": null,
        "report": null,
        "format": null,
        "limit": null
    })
}

/// Merges the shape followed by `layers` in order.
pub fn config_from(layers: &[(Layer, Value)]) -> DashboardConfig {
    let mut composer = MergeComposer::new();
    composer.push_defaults(shape());

    for (layer, value) in layers {
        let owned = value.clone();
        match layer {
            Layer::Defaults => composer.push_defaults(owned),
            Layer::File => composer.push_file(owned, None),
            Layer::Environment => composer.push_environment(owned),
            Layer::Cli => composer.push_cli(owned),
        }
    }

    DashboardConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}
