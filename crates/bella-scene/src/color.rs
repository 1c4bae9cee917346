//! sRGB colors for ornament materials

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque sRGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Build from a packed `0xRRGGBB` value
    #[inline]
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn parse(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::hex)
    }

    /// `#rrggbb` form
    pub fn to_hex_string(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear-light RGB components, as the shader expects them
    pub fn to_linear(self) -> [f32; 3] {
        fn channel(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        [channel(self.r), channel(self.g), channel(self.b)]
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        let c = Color::hex(0xe11d48);
        assert_eq!((c.r, c.g, c.b), (0xe1, 0x1d, 0x48));
        assert_eq!(c.to_hex_string(), "#e11d48");
    }

    #[test]
    fn test_color_parse() {
        assert_eq!(Color::parse("#f43f5e"), Some(Color::hex(0xf43f5e)));
        assert_eq!(Color::parse("FB7185"), Some(Color::hex(0xfb7185)));
        assert_eq!(Color::parse("#fff"), None);
        assert_eq!(Color::parse("#gggggg"), None);
    }

    #[test]
    fn test_color_to_linear_endpoints() {
        let black = Color::hex(0x000000).to_linear();
        let white = Color::hex(0xffffff).to_linear();
        assert!(black.iter().all(|c| c.abs() < 0.001));
        assert!(white.iter().all(|c| (c - 1.0).abs() < 0.001));
    }

    #[test]
    fn test_color_serde() {
        let json = serde_json::to_string(&Color::hex(0xbe123c)).unwrap();
        assert_eq!(json, "\"#be123c\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::hex(0xbe123c));
        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }
}
