/// Plugin types shipped with the stock panel.
pub const KNOWN_PLUGIN_TYPES: &[&str] = &[
    "batt",
    "battery_indicator",
    "cpu",
    "cpufreq",
    "dclock",
    "dirmenu",
    "launchbar",
    "launchbutton",
    "menu",
    "netstatus",
    "notification_area",
    "pager",
    "separator",
    "show_desktop",
    "space",
    "taskbar",
    "thermal",
    "volumealsa",
    "wincmd",
    "xkb_groups",
    "xkb_leds",
    "xkb_locks",
];

/// Whether `plugin_type` names a stock plugin.
pub fn is_known_plugin_type(plugin_type: &str) -> bool {
    KNOWN_PLUGIN_TYPES.binary_search(&plugin_type).is_ok()
}
