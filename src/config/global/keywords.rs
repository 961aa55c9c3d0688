use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// A keyword option held a value outside its domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {option} '{value}', expected one of: {}", .expected.join(", "))]
pub struct KeywordError {
    /// Human name of the option kind, e.g. "edge".
    pub option: &'static str,
    /// The rejected value.
    pub value: String,
    /// Canonical spellings that would have been accepted.
    pub expected: &'static [&'static str],
}

// Keyword values match case-insensitively and always serialize in their
// canonical lowercase spelling.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($option:literal) {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $canonical:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
        #[schemars(rename_all = "lowercase")]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Canonical spellings, in declaration order.
            pub const NAMES: &'static [&'static str] = &[$($canonical),+];

            /// Canonical spelling of this value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $canonical,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = KeywordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($canonical)
                        $(|| s.eq_ignore_ascii_case($alias))*
                    {
                        return Ok($name::$variant);
                    }
                )+

                Err(KeywordError {
                    option: $option,
                    value: s.to_string(),
                    expected: Self::NAMES,
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(de::Error::custom)
            }
        }
    };
}

keyword_enum! {
    /// Screen edge the panel is attached to.
    #[derive(Default)]
    pub enum Edge ("edge") {
        /// Top of the monitor.
        Top => "top",
        /// Bottom of the monitor.
        #[default]
        Bottom => "bottom",
        /// Left side; the panel is vertical.
        Left => "left",
        /// Right side; the panel is vertical.
        Right => "right",
    }
}

impl Edge {
    /// Whether a panel on this edge lays its plugins out vertically.
    pub fn is_vertical(self) -> bool {
        matches!(self, Edge::Left | Edge::Right)
    }
}

keyword_enum! {
    /// Placement of the panel along its edge.
    #[derive(Default)]
    pub enum Align ("align") {
        /// Start of the edge.
        Left => "left",
        /// Centered on the edge.
        #[default]
        Center => "center",
        /// End of the edge.
        Right => "right",
    }
}

keyword_enum! {
    /// Unit of `oriented_width`.
    #[derive(Default)]
    pub enum WidthType ("width type") {
        /// Percentage of the monitor edge length.
        #[default]
        Percent => "percent",
        /// Absolute pixels.
        Pixel => "pixel",
        /// Sized to fit the plugins; `oriented_width` is ignored.
        Request => "request",
    }
}

keyword_enum! {
    /// When the panel is shown.
    #[derive(Default)]
    pub enum VisibilityMode ("visibility mode") {
        /// Always visible above other windows.
        #[default]
        Always => "always",
        /// Always visible, stacked below other windows.
        Below => "below",
        /// Collapses to `height_when_hidden` until the pointer reaches it.
        AutoHide => "autohide" | "auto-hide" | "auto_hide",
        /// Drops below other windows until the pointer reaches it.
        GoBelow => "gobelow" | "go-below" | "go_below",
    }
}
