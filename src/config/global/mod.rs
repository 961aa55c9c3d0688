mod color;
mod flag;
mod keywords;

pub use color::{Alpha, Color, InvalidColor};
pub use keywords::{Align, Edge, KeywordError, VisibilityMode, WidthType};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Panel-wide settings from the `global` section.
///
/// Every field has a default, so a document may omit any of them (or the
/// whole section). Keys this struct does not know are kept in `extra` and
/// written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GlobalSettings {
    /// Screen edge the panel is attached to.
    pub edge: Edge,

    /// Placement along the edge.
    pub align: Align,

    /// Gap between the panel and the screen edge, in pixels.
    pub edge_margin: u32,

    /// Offset from the aligned end of the edge, in pixels.
    pub align_margin: u32,

    /// Unit of `oriented_width`.
    pub oriented_width_type: WidthType,

    /// Length along the edge, in `oriented_width_type` units.
    pub oriented_width: u32,

    /// Thickness across the edge, in pixels.
    pub oriented_height: u32,

    /// Draw rounded corners.
    pub round_corners: bool,

    /// Corner radius in pixels when `round_corners` is set.
    pub round_corners_radius: u32,

    /// Use an ARGB visual for real transparency.
    pub rgba_transparency: bool,

    /// Scale the background image instead of tiling it.
    pub stretch_background: bool,

    /// Paint `background_file` behind the plugins.
    pub background: bool,

    /// Background image used when `background` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_file: Option<String>,

    /// Tint the panel with `tint_color` at `alpha`.
    pub transparent: bool,

    /// Opacity of the tint.
    pub alpha: Alpha,

    /// Tint color.
    pub tint_color: Color,

    /// When the panel is shown.
    pub visibility_mode: VisibilityMode,

    /// Thickness in pixels left on screen while hidden.
    pub height_when_hidden: u32,

    /// Reserve screen space so maximized windows do not cover the panel.
    #[serde(with = "flag")]
    #[schemars(with = "u8")]
    pub set_strut: bool,

    /// Override the theme font color with `font_color`.
    pub use_font_color: bool,

    /// Font color when `use_font_color` is set.
    pub font_color: Color,

    /// Override the theme font size with `font_size`.
    pub use_font_size: bool,

    /// Font size in points when `use_font_size` is set.
    pub font_size: u32,

    /// Preferred plugin icon size in pixels.
    pub icon_size: u32,

    /// Inner padding above the plugins.
    pub padding_top: u32,

    /// Inner padding below the plugins.
    pub padding_bottom: u32,

    /// Inner padding before the first plugin.
    pub padding_left: u32,

    /// Inner padding after the last plugin.
    pub padding_right: u32,

    /// Gap between adjacent plugins.
    pub applet_spacing: u32,

    /// Widget name handed to the host toolkit for theming.
    #[serde(rename = "GtkWidgetName")]
    pub widget_name: String,

    /// Keys not recognised by this version, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GlobalSettings {
    /// Document keys of the typed options, which `extra` must not repeat.
    pub const FIELD_NAMES: &'static [&'static str] = &[
        "edge",
        "align",
        "edge_margin",
        "align_margin",
        "oriented_width_type",
        "oriented_width",
        "oriented_height",
        "round_corners",
        "round_corners_radius",
        "rgba_transparency",
        "stretch_background",
        "background",
        "background_file",
        "transparent",
        "alpha",
        "tint_color",
        "visibility_mode",
        "height_when_hidden",
        "set_strut",
        "use_font_color",
        "font_color",
        "use_font_size",
        "font_size",
        "icon_size",
        "padding_top",
        "padding_bottom",
        "padding_left",
        "padding_right",
        "applet_spacing",
        "GtkWidgetName",
    ];
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            edge: Edge::Bottom,
            align: Align::Center,
            edge_margin: 0,
            align_margin: 0,
            oriented_width_type: WidthType::Percent,
            oriented_width: 100,
            oriented_height: 26,
            round_corners: false,
            round_corners_radius: 7,
            rgba_transparency: false,
            stretch_background: false,
            background: false,
            background_file: None,
            transparent: false,
            alpha: Alpha::OPAQUE,
            tint_color: Color::WHITE,
            visibility_mode: VisibilityMode::Always,
            height_when_hidden: 2,
            set_strut: true,
            use_font_color: false,
            font_color: Color::BLACK,
            use_font_size: false,
            font_size: 10,
            icon_size: 24,
            padding_top: 0,
            padding_bottom: 0,
            padding_left: 0,
            padding_right: 0,
            applet_spacing: 0,
            widget_name: "PanelToplevel".to_string(),
            extra: Map::new(),
        }
    }
}
