use std::{borrow::Cow, fmt, str::FromStr};

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// A color string that is neither `#rgb` nor `#rrggbb`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color '{0}', expected '#rgb' or '#rrggbb'")]
pub struct InvalidColor(pub String);

/// An opaque RGB color written as a hex string.
///
/// Short `#rgb` input is widened to `#rrggbb`; serialization always emits
/// the lowercase six-digit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// White, the default tint.
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    /// Black, the default font color.
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Creates a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidColor(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: &str| u8::from_str_radix(range, 16).map_err(|_| invalid());

        match digits.len() {
            3 => {
                let widen = |i: usize| channel(&digits[i..=i]).map(|v| v * 0x11);
                Ok(Color::rgb(widen(0)?, widen(1)?, widen(2)?))
            }
            6 => Ok(Color::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

impl JsonSchema for Color {
    fn schema_name() -> Cow<'static, str> {
        "Color".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": "^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$",
            "description": "Hex color, '#rgb' or '#rrggbb'"
        })
    }
}

/// Panel opacity, 0 (transparent) to 255 (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct Alpha(pub u8);

impl Alpha {
    /// Fully opaque.
    pub const OPAQUE: Alpha = Alpha(u8::MAX);
}

impl Default for Alpha {
    fn default() -> Self {
        Self::OPAQUE
    }
}

impl<'de> Deserialize<'de> for Alpha {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        u8::try_from(raw).map(Alpha).map_err(|_| {
            de::Error::custom(format!("alpha must be between 0 and 255, got {raw}"))
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!("#ffffff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("#F00".parse::<Color>().unwrap(), Color::rgb(0xff, 0, 0));
        assert_eq!("#1b3bc6".parse::<Color>().unwrap(), Color::rgb(0x1b, 0x3b, 0xc6));
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["ffffff", "#ffff", "#gggggg", "", "#", "rgb(0,0,0)"] {
            assert!(bad.parse::<Color>().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn serializes_lowercase_long_form() {
        let color: Color = "#ABC".parse().unwrap();
        assert_eq!(color.to_string(), "#aabbcc");
    }

    #[test]
    fn alpha_accepts_boundaries() {
        assert_eq!(serde_json::from_str::<Alpha>("0").unwrap(), Alpha(0));
        assert_eq!(serde_json::from_str::<Alpha>("255").unwrap(), Alpha::OPAQUE);
    }

    #[test]
    fn alpha_rejects_out_of_range() {
        let err = serde_json::from_str::<Alpha>("256").unwrap_err();
        assert!(err.to_string().contains("alpha must be between 0 and 255, got 256"));
        assert!(serde_json::from_str::<Alpha>("-1").is_err());
    }
}
