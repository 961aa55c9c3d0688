//! Unit tests for CLI module
//!
//! Tests command registry, formatting, and panel commands against
//! documents written to temporary files.
#![allow(clippy::unwrap_used)]

use std::{fs, sync::Arc};

use serde_json::{Value, json};
use tempfile::TempDir;

use crate::cli::{
    CliError, CliService, CommandRegistry, PanelSource, formatting::format_json_value,
};
use crate::config::PanelConfig;

const VALID_PANEL: &str = r##"{
    "global": { "edge": "top", "align": "left", "tint_color": "#336699" },
    "plugins": [
        { "type": "menu" },
        { "type": "taskbar", "expand": true, "settings": { "mode": 1 } },
        { "type": "weather_widget" }
    ]
}"##;

const INVALID_PANEL: &str = r#"{
    "global": { "edge": "diagonal", "alpha": 300 },
    "plugins": [ { "type": "menu" } ]
}"#;

fn write_panel(dir: &TempDir, name: &str, text: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path.to_string_lossy().into_owned()
}

fn service() -> CliService {
    CliService::new(PanelSource::new("no-such-profile-for-tests"))
}

#[test]
fn format_json_value_scalars() {
    assert_eq!(format_json_value(&json!("hello world")), "\"hello world\"");
    assert_eq!(format_json_value(&json!("")), "\"\"");
    assert_eq!(format_json_value(&json!(42)), "42");
    assert_eq!(format_json_value(&json!(-123)), "-123");
    assert_eq!(format_json_value(&json!(true)), "true");
    assert_eq!(format_json_value(&Value::Null), "null");
}

#[test]
fn format_json_value_collections_show_size() {
    assert_eq!(format_json_value(&json!([1, 2, 3])), "[3]");
    assert_eq!(format_json_value(&json!([])), "[0]");
    assert_eq!(format_json_value(&json!({"a": 1, "b": {"c": 2}})), "{2}");
}

#[test]
fn command_registry_creation() {
    let registry = CommandRegistry::new(Arc::new(PanelSource::default()));
    assert!(registry.list_commands().is_empty());
}

#[test]
fn command_registry_categories() {
    let mut registry = CommandRegistry::new(Arc::new(PanelSource::default()));
    registry.register_all_commands();

    let categories = registry.list_commands();
    assert_eq!(categories.len(), 1);

    let (category, commands) = &categories[0];
    assert_eq!(category, "panel");

    let names: Vec<&str> = commands.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        ["check", "default", "get", "normalize", "plugins", "schema"]
    );
}

#[test]
fn unknown_category_and_command_are_not_found() {
    let service = service();

    let err = service.execute_command("audio", "volume", &[]).unwrap_err();
    assert!(matches!(err, CliError::CommandNotFound(_)));

    let err = service.execute_command("panel", "reload", &[]).unwrap_err();
    assert!(matches!(err, CliError::CommandNotFound(_)));
}

#[test]
fn argument_counts_are_checked() {
    let service = service();

    let err = service.execute_command("panel", "check", &[]).unwrap_err();
    assert!(matches!(err, CliError::InvalidArguments(_)));

    let too_many = vec!["a".to_string(), "b".to_string()];
    let err = service
        .execute_command("panel", "default", &too_many)
        .unwrap_err();
    assert!(matches!(err, CliError::InvalidArguments(_)));
}

#[test]
fn list_all_names_every_command() {
    let all = service().list_all();
    assert_eq!(all.len(), 1);
    assert!(all[0].1.contains(&"normalize".to_string()));
}

#[test]
fn help_mentions_every_command() {
    let help = service().help();
    for name in ["check", "default", "get", "normalize", "plugins", "schema"] {
        assert!(help.contains(name), "help is missing {name}");
    }
}

#[test]
fn help_describes_argument_values() {
    let help = service().help();
    assert!(help.contains("file path or panel name"));
    assert!(help.contains("dot path, array indices as numbers"));
}

#[test]
fn default_command_prints_loadable_document() {
    let output = service().execute_command("panel", "default", &[]).unwrap();
    let config = PanelConfig::load(&output).unwrap();
    assert_eq!(config, PanelConfig::default());
}

#[test]
fn schema_command_prints_json_schema() {
    let output = service().execute_command("panel", "schema", &[]).unwrap();
    let schema: Value = serde_json::from_str(&output).unwrap();
    assert!(schema["properties"]["plugins"].is_object());
}

#[test]
fn check_reports_plugin_count() {
    let dir = TempDir::new().unwrap();
    let panel = write_panel(&dir, "top.js", VALID_PANEL);

    let output = service()
        .execute_command("panel", "check", &[panel])
        .unwrap();
    assert_eq!(output, "ok: 3 plugin(s), edge top (horizontal), align left");
}

#[test]
fn check_reports_vertical_panels() {
    let dir = TempDir::new().unwrap();
    let panel = write_panel(
        &dir,
        "side.js",
        r#"{ "global": { "edge": "right" }, "plugins": [ { "type": "pager" } ] }"#,
    );

    let output = service()
        .execute_command("panel", "check", &[panel])
        .unwrap();
    assert_eq!(output, "ok: 1 plugin(s), edge right (vertical), align center");
}

#[test]
fn check_reports_every_problem() {
    let dir = TempDir::new().unwrap();
    let panel = write_panel(&dir, "broken.js", INVALID_PANEL);

    let err = service()
        .execute_command("panel", "check", &[panel])
        .unwrap_err();
    let CliError::InvalidDocument(report) = err else {
        panic!("expected InvalidDocument, got {err:?}");
    };
    assert!(report.contains("2 problem(s)"));
    assert!(report.contains("global.edge"));
    assert!(report.contains("global.alpha"));
}

#[test]
fn check_missing_panel_is_not_found() {
    let err = service()
        .execute_command("panel", "check", &["no-such-panel-for-tests".to_string()])
        .unwrap_err();
    assert!(matches!(err, CliError::PanelNotFound(_)));
}

#[test]
fn get_reads_values_with_defaults_applied() {
    let dir = TempDir::new().unwrap();
    let panel = write_panel(&dir, "top.js", VALID_PANEL);
    let service = service();

    let edge = service
        .execute_command("panel", "get", &[panel.clone(), "global.edge".to_string()])
        .unwrap();
    assert_eq!(edge, "global.edge: \"top\"");

    let height = service
        .execute_command(
            "panel",
            "get",
            &[panel.clone(), "global.oriented_height".to_string()],
        )
        .unwrap();
    assert_eq!(height, "global.oriented_height: 26");

    let mode = service
        .execute_command(
            "panel",
            "get",
            &[panel, "plugins.1.settings.mode".to_string()],
        )
        .unwrap();
    assert_eq!(mode, "plugins.1.settings.mode: 1");
}

#[test]
fn get_unknown_path_is_config_error() {
    let dir = TempDir::new().unwrap();
    let panel = write_panel(&dir, "top.js", VALID_PANEL);

    let err = service()
        .execute_command("panel", "get", &[panel, "plugins.9.type".to_string()])
        .unwrap_err();
    assert!(matches!(err, CliError::ConfigError(_)));
}

#[test]
fn normalize_fills_defaults_and_keeps_order() {
    let dir = TempDir::new().unwrap();
    let panel = write_panel(&dir, "top.js", VALID_PANEL);

    let output = service()
        .execute_command("panel", "normalize", &[panel])
        .unwrap();
    let document: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(document["global"]["tint_color"], "#336699");
    assert_eq!(document["global"]["icon_size"], 24);
    assert_eq!(document["plugins"][2]["type"], "weather_widget");
}

#[test]
fn plugins_lists_in_order_and_flags_unknown_types() {
    let dir = TempDir::new().unwrap();
    let panel = write_panel(&dir, "top.js", VALID_PANEL);

    let output = service()
        .execute_command("panel", "plugins", &[panel])
        .unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "0: menu (0 setting(s))");
    assert_eq!(lines[1], "1: taskbar [expand] (1 setting(s))");
    assert!(lines[2].starts_with("2: weather_widget (0 setting(s))"));
    assert!(lines[2].contains("unknown type"));
}
