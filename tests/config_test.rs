//! Tests for layered settings

use std::time::Duration;

use orgview::chart::{ConnectorStyle, RootOrientation};
use orgview::config::{HttpSettings, Settings};

// ============================================================
// Default Tests
// ============================================================

#[test]
fn given_no_configuration_when_defaulting_then_original_chart_setup_applies() {
    // Arrange & Act
    let settings = Settings::default();

    // Assert: the compiled defaults reproduce the original chart config
    assert_eq!(settings.source, "data/hierarchy.json");
    assert_eq!(settings.chart.root_orientation, RootOrientation::North);
    assert_eq!(settings.chart.level_separation, 40);
    assert_eq!(settings.chart.sibling_separation, 20);
    assert_eq!(settings.chart.subtree_separation, 30);
    assert_eq!(settings.chart.connector, ConnectorStyle::Step);
    assert!(settings.chart.collapsible);
    assert_eq!(settings.chart.node_class, "node");
}

#[test]
fn given_default_http_settings_when_querying_timeout_then_thirty_seconds() {
    // Arrange & Act
    let http = HttpSettings::default();

    // Assert
    assert_eq!(http.timeout(), Duration::from_secs(30));
    assert!(http.user_agent.starts_with("orgview/"));
}

// ============================================================
// Layering Tests
// ============================================================

#[test]
fn given_partial_toml_when_deserializing_then_missing_fields_keep_defaults() {
    // Arrange: a config file overriding only two values
    let raw = r#"
source = "https://intranet.example/hierarchy.json"

[chart]
level_separation = 80
"#;

    // Act
    let settings: Settings = toml::from_str(raw).unwrap();

    // Assert: overridden fields take effect, everything else defaults
    assert_eq!(settings.source, "https://intranet.example/hierarchy.json");
    assert_eq!(settings.chart.level_separation, 80);
    assert_eq!(settings.chart.sibling_separation, 20);
    assert_eq!(settings.http.timeout_secs, 30);
}

#[test]
fn given_settings_when_rendering_to_toml_then_round_trips() {
    // Arrange
    let settings = Settings::default();

    // Act
    let rendered = toml::to_string_pretty(&settings).unwrap();
    let parsed: Settings = toml::from_str(&rendered).unwrap();

    // Assert
    assert_eq!(parsed, settings);
}

#[test]
fn given_connector_styles_when_deserializing_then_lowercase_names_parse() {
    // Arrange
    let raw = r#"
[chart]
connector = "straight"
root_orientation = "west"
"#;

    // Act
    let settings: Settings = toml::from_str(raw).unwrap();

    // Assert
    assert_eq!(settings.chart.connector, ConnectorStyle::Straight);
    assert_eq!(settings.chart.root_orientation, RootOrientation::West);
}
