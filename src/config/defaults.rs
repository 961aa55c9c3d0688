use serde_json::{Value, json};

use super::{Align, GlobalSettings, PanelConfig, PluginEntry, PluginSettings};

/// The stock bottom panel: menu, launcher, taskbar, tray, battery, clock.
///
/// Hosts fall back to this layout when a user document cannot be loaded.
impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            global: default_global(),
            plugins: vec![
                PluginEntry::new("menu"),
                PluginEntry::new("launchbar").with_settings(settings([(
                    "buttons",
                    json!([{ "id": "/usr/share/applications/firefox.desktop" }]),
                )])),
                PluginEntry::new("taskbar")
                    .with_expand(true)
                    .with_settings(taskbar_settings()),
                PluginEntry::new("notification_area").with_settings(settings([
                    ("display_in_frame", json!(true)),
                    ("use_custom_icon_size", json!(true)),
                    ("icon_size", json!(16)),
                ])),
                PluginEntry::new("batt").with_settings(settings([
                    ("hide_if_no_battery", json!(false)),
                    ("alarmCommand", json!("xmessage Battery low")),
                    ("alarmTime", json!(5)),
                    ("display_as", json!("Text")),
                    ("background_color", json!("rgb(0,0,0)")),
                    ("border_width", json!(3)),
                    ("charging_color1", json!("rgb(27,59,198)")),
                    ("charging_color2", json!("rgb(181,47,195)")),
                    ("discharging_color1", json!("rgb(0,255,0)")),
                    ("discharging_color2", json!("rgb(255,0,0)")),
                ])),
                PluginEntry::new("dclock").with_settings(settings([
                    ("clock_format", json!("%R")),
                    ("tooltip_format", json!("%A %x")),
                    ("icon_only", json!(false)),
                    ("center_text", json!(false)),
                ])),
            ],
        }
    }
}

fn default_global() -> GlobalSettings {
    GlobalSettings {
        align: Align::Left,
        height_when_hidden: 1,
        padding_top: 2,
        padding_bottom: 2,
        padding_left: 2,
        padding_right: 2,
        applet_spacing: 2,
        ..GlobalSettings::default()
    }
}

fn settings<const N: usize>(pairs: [(&str, Value); N]) -> PluginSettings {
    pairs.into_iter().collect()
}

fn taskbar_settings() -> PluginSettings {
    settings([
        ("tooltips", json!(true)),
        ("show_icons_titles", json!("Both")),
        ("custom_fallback_icon", json!("xorg")),
        ("show_iconified", json!(true)),
        ("show_mapped", json!(true)),
        ("show_all_desks", json!(false)),
        ("show_urgency_all_desks", json!(true)),
        ("use_urgency_hint", json!(true)),
        ("flat_inactive_buttons", json!(false)),
        ("flat_active_button", json!(false)),
        ("colorize_buttons", json!(true)),
        ("use_thumbnails_as_icons", json!(false)),
        ("dim_iconified", json!(true)),
        ("task_width_max", json!(200)),
        ("spacing", json!(1)),
        ("highlight_modified_titles", json!(false)),
        ("highlight_title_of_focused_button", json!(false)),
        ("bold_font_on_mouse_over", json!(false)),
        ("mode", json!("Classic")),
        ("group_fold_threshold", json!(5)),
        ("panel_fold_threshold", json!(10)),
        ("group_by", json!("Class")),
        ("manual_grouping", json!(true)),
        ("unfold_focused_group", json!(false)),
        ("show_single_group", json!(false)),
        ("show_close_buttons", json!(false)),
        ("sort_by[0]", json!("Timestamp")),
        ("sort_by[1]", json!("Timestamp")),
        ("sort_by[2]", json!("Timestamp")),
        ("sort_reverse[0]", json!(false)),
        ("sort_reverse[1]", json!(false)),
        ("sort_reverse[2]", json!(false)),
        ("rearrange", json!(false)),
        ("button1_action", json!("RaiseIconify")),
        ("button2_action", json!("Shade")),
        ("button3_action", json!("Menu")),
        ("scroll_up_action", json!("PrevWindow")),
        ("scroll_down_action", json!("NextWindow")),
        ("shift_button1_action", json!("Iconify")),
        ("shift_button2_action", json!("Maximize")),
        ("shift_button3_action", json!("Close")),
        ("shift_scroll_up_action", json!("PrevWindowInCurrentGroup")),
        ("shift_scroll_down_action", json!("NextWindowInCurrentGroup")),
        ("menu_actions_click_press", json!("Press")),
        ("other_actions_click_press", json!("Click")),
        ("mouse_over_action", json!("None")),
        ("use_group_separators", json!(false)),
        ("group_separator_size", json!(0)),
        ("hide_from_launchbar", json!(false)),
        ("use_x_net_wm_icon_geometry", json!(false)),
        ("use_x_window_position", json!(false)),
    ])
}
