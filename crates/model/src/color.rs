use serde::{de, Deserialize, Deserializer, Serialize};

fn default_alpha() -> f32 {
    1.0
}

fn is_opaque(a: &f32) -> bool {
    *a == 1.0
}

/// An sRGB color with an alpha channel, as supplied by the layout stage.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(skip_serializing_if = "is_opaque", default = "default_alpha")]
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 1.0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 1.0 };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Components normalized to the 0.0..=1.0 range used by PDF color
    /// operators.
    pub fn normalized(&self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    /// Parse a `#RGB` or `#RRGGBB` hex string.
    fn parse_hex(s: &str) -> Result<Color, String> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| format!("color must start with #, got: {s}"))?;

        let component = |slice: &str| {
            let expanded = if slice.len() == 1 { slice.repeat(2) } else { slice.to_string() };
            u8::from_str_radix(&expanded, 16).map_err(|e| format!("invalid color component: {e}"))
        };

        match hex.len() {
            3 => Ok(Color {
                r: component(&hex[0..1])?,
                g: component(&hex[1..2])?,
                b: component(&hex[2..3])?,
                a: 1.0,
            }),
            6 => Ok(Color {
                r: component(&hex[0..2])?,
                g: component(&hex[2..4])?,
                b: component(&hex[4..6])?,
                a: 1.0,
            }),
            len => Err(format!("invalid hex color length: expected 3 or 6, got {len}")),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "default_alpha")]
                a: f32,
            },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b, a } => Ok(Color { r, g, b, a }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_hex_form() {
        assert_eq!(Color::parse_hex("#1a2b3c").unwrap(), Color::rgb(0x1a, 0x2b, 0x3c));
    }

    #[test]
    fn parses_short_hex_form() {
        assert_eq!(Color::parse_hex("#f0a").unwrap(), Color::rgb(0xff, 0x00, 0xaa));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::parse_hex("123456").is_err());
        assert!(Color::parse_hex("#12345").is_err());
    }

    #[test]
    fn deserializes_both_forms() {
        let from_str: Color = serde_json::from_str("\"#ff0000\"").unwrap();
        assert_eq!(from_str, Color::rgb(255, 0, 0));

        let from_map: Color = serde_json::from_str(r#"{"r": 1, "g": 2, "b": 3}"#).unwrap();
        assert_eq!(from_map, Color::rgb(1, 2, 3));
    }
}
