//! Unit tests for config module
//!
//! Tests document loading, defaults, schema errors and serialization.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use serde_json::json;

use crate::{
    PanelConfigError,
    config::{Align, Alpha, Color, Edge, GlobalSettings, PanelConfig, VisibilityMode, WidthType},
};

const TEMPLATE: &str = include_str!("../../../tests/fixtures/bottom1.js");

fn schema_paths(err: &PanelConfigError) -> Vec<&str> {
    err.schema_errors()
        .iter()
        .map(|error| error.path.as_str())
        .collect()
}

#[test]
fn template_loads() {
    let config = PanelConfig::load(TEMPLATE).unwrap();

    assert_eq!(config.global.edge, Edge::Bottom);
    assert_eq!(config.global.align, Align::Left);
    assert_eq!(config.global.oriented_width_type, WidthType::Percent);
    assert_eq!(config.global.widget_name, "PanelToplevel");
    assert!(config.global.set_strut);
    assert_eq!(
        config.plugin_types().collect::<Vec<_>>(),
        ["menu", "launchbar", "taskbar", "notification_area", "batt", "dclock"]
    );
}

#[test]
fn template_roundtrips() {
    let config = PanelConfig::load(TEMPLATE).unwrap();

    let serialized = config.to_json_string().unwrap();
    let reloaded = PanelConfig::load(&serialized).unwrap();

    assert_eq!(config, reloaded);
}

#[test]
fn template_matches_builtin_default() {
    assert_eq!(PanelConfig::load(TEMPLATE).unwrap(), PanelConfig::default());
}

#[test]
fn missing_global_uses_defaults() {
    let config = PanelConfig::load(r#"{ "plugins": [] }"#).unwrap();

    assert_eq!(config.global, GlobalSettings::default());
    assert_eq!(config.global.align, Align::Center);
    assert_eq!(config.global.alpha, Alpha::OPAQUE);
    assert_eq!(config.global.tint_color, Color::WHITE);
    assert_eq!(config.global.oriented_height, 26);
    assert_eq!(config.global.visibility_mode, VisibilityMode::Always);
    assert!(config.plugins.is_empty());
}

#[test]
fn partial_global_fills_remaining_defaults() {
    let config =
        PanelConfig::load(r#"{ "global": { "edge": "top", "icon_size": 32 }, "plugins": [] }"#)
            .unwrap();

    assert_eq!(config.global.edge, Edge::Top);
    assert_eq!(config.global.icon_size, 32);
    assert_eq!(config.global.font_size, 10);
    assert_eq!(config.global.round_corners_radius, 7);
}

#[test]
fn plugin_order_is_preserved() {
    let config = PanelConfig::load(
        r#"{ "plugins": [{ "type": "A" }, { "type": "B" }, { "type": "C" }] }"#,
    )
    .unwrap();

    assert_eq!(config.plugin_types().collect::<Vec<_>>(), ["A", "B", "C"]);
}

#[test]
fn missing_plugins_is_schema_error() {
    let err = PanelConfig::load(r#"{ "global": {} }"#).unwrap_err();

    assert!(err.is_schema());
    assert_eq!(schema_paths(&err), ["plugins"]);
}

#[test]
fn plugins_must_be_array() {
    let err = PanelConfig::load(r#"{ "plugins": { "type": "menu" } }"#).unwrap_err();

    assert_eq!(err.schema_errors()[0].reason, "must be an array, found object");
}

#[test]
fn plugin_without_type_is_schema_error() {
    let err = PanelConfig::load(r#"{ "plugins": [{ "type": "menu" }, { "expand": true }] }"#)
        .unwrap_err();

    assert_eq!(schema_paths(&err), ["plugins[1].type"]);
}

#[test]
fn plugin_type_must_be_non_empty_string() {
    let err = PanelConfig::load(r#"{ "plugins": [{ "type": "" }, { "type": 7 }, "menu"] }"#)
        .unwrap_err();

    assert_eq!(
        schema_paths(&err),
        ["plugins[0].type", "plugins[1].type", "plugins[2]"]
    );
}

#[test]
fn alpha_boundaries() {
    for alpha in [0, 255] {
        let text = json!({ "global": { "alpha": alpha }, "plugins": [] }).to_string();
        let config = PanelConfig::load(&text).unwrap();
        assert_eq!(config.global.alpha, Alpha(alpha));
    }

    for alpha in [-1, 256, 1000] {
        let text = json!({ "global": { "alpha": alpha }, "plugins": [] }).to_string();
        let err = PanelConfig::load(&text).unwrap_err();
        assert_eq!(schema_paths(&err), ["global.alpha"], "alpha {alpha}");
    }
}

#[test]
fn edge_domain() {
    let err =
        PanelConfig::load(r#"{ "global": { "edge": "diagonal" }, "plugins": [] }"#).unwrap_err();
    assert_eq!(schema_paths(&err), ["global.edge"]);
    assert!(err.schema_errors()[0].reason.contains("unknown edge 'diagonal'"));

    let config =
        PanelConfig::load(r#"{ "global": { "edge": "bottom" }, "plugins": [] }"#).unwrap();
    assert_eq!(config.global.edge, Edge::Bottom);
}

#[test]
fn align_and_visibility_domains() {
    let err = PanelConfig::load(
        r#"{ "global": { "align": "middle", "visibility_mode": "sometimes" }, "plugins": [] }"#,
    )
    .unwrap_err();

    assert_eq!(schema_paths(&err), ["global.align", "global.visibility_mode"]);
}

#[test]
fn collects_errors_across_sections() {
    let err = PanelConfig::load(
        r#"{
            "global": { "tint_color": "white", "set_strut": 2 },
            "plugins": [{ "type": "menu", "padding": -3 }, {}]
        }"#,
    )
    .unwrap_err();

    assert_eq!(
        schema_paths(&err),
        [
            "global.tint_color",
            "global.set_strut",
            "plugins[0].padding",
            "plugins[1].type"
        ]
    );
}

#[test]
fn set_strut_accepts_bools_and_writes_integers() {
    let config =
        PanelConfig::load(r#"{ "global": { "set_strut": false }, "plugins": [] }"#).unwrap();
    assert!(!config.global.set_strut);

    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["global"]["set_strut"], json!(0));
}

#[test]
fn keywords_are_case_insensitive() {
    let config = PanelConfig::load(
        r#"{ "global": { "edge": "Left", "oriented_width_type": "PIXEL", "visibility_mode": "auto-hide" }, "plugins": [] }"#,
    )
    .unwrap();

    assert_eq!(config.global.edge, Edge::Left);
    assert_eq!(config.global.oriented_width_type, WidthType::Pixel);
    assert_eq!(config.global.visibility_mode, VisibilityMode::AutoHide);

    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["global"]["visibility_mode"], json!("autohide"));
}

#[test]
fn unknown_keys_survive_roundtrip() {
    let text = json!({
        "global": { "edge": "top", "future_option": [1, 2] },
        "plugins": [{
            "type": "weather",
            "position_hint": "end",
            "settings": { "city": "Oslo", "units": { "temp": "C" } }
        }]
    })
    .to_string();

    let config = PanelConfig::load(&text).unwrap();
    assert_eq!(config.global.extra["future_option"], json!([1, 2]));
    assert_eq!(config.plugins[0].extra["position_hint"], json!("end"));
    assert_eq!(config.plugins[0].setting("units"), Some(&json!({ "temp": "C" })));
    assert!(!config.plugins[0].is_known_type());

    let reloaded = PanelConfig::load(&config.to_json_string().unwrap()).unwrap();
    assert_eq!(config, reloaded);
}

#[test]
fn indexed_settings_from_template() {
    let config = PanelConfig::load(TEMPLATE).unwrap();
    let taskbar = &config.plugins[2];

    let sort_by = taskbar.settings.as_ref().unwrap().indexed("sort_by");
    assert_eq!(sort_by.len(), 3);
    assert!(sort_by.iter().all(|value| *value == "Timestamp"));
}

#[test]
fn gap_in_indexed_settings_fails_load() {
    let err = PanelConfig::load(
        r#"{ "plugins": [{ "type": "taskbar", "settings": { "sort_by[0]": "Title", "sort_by[3]": "Title" } }] }"#,
    )
    .unwrap_err();

    assert_eq!(schema_paths(&err), ["plugins[0].settings.sort_by"]);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = PanelConfig::load("{ \"plugins\": [ }").unwrap_err();

    assert!(err.is_parse());
    match err {
        PanelConfigError::Parse { line, location, .. } => {
            assert_eq!(line, 1);
            assert_eq!(location, "string");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn non_object_document_is_schema_error() {
    let err = PanelConfig::load("[1, 2, 3]").unwrap_err();

    assert_eq!(schema_paths(&err), ["$"]);
}

#[test]
fn load_or_default_falls_back() {
    assert_eq!(PanelConfig::load_or_default("not json"), PanelConfig::default());
    assert_eq!(
        PanelConfig::load_or_default(r#"{ "plugins": [{ "type": "menu" }] }"#).plugins.len(),
        1
    );
}

#[test]
fn schema_describes_document() {
    let schema = serde_json::to_value(PanelConfig::json_schema()).unwrap();

    assert!(schema["properties"]["global"].is_object());
    assert!(schema["properties"]["plugins"].is_object());
    assert_eq!(schema["required"], json!(["plugins"]));
}

#[test]
fn oversized_percent_width_is_kept_as_written() {
    let config = PanelConfig::load(
        r#"{ "global": { "oriented_width_type": "percent", "oriented_width": 150 }, "plugins": [] }"#,
    )
    .unwrap();

    assert_eq!(config.global.oriented_width_type, WidthType::Percent);
    assert_eq!(config.global.oriented_width, 150);
    assert!(config.to_json_string().unwrap().contains("\"oriented_width\": 150"));
}
