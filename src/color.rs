use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A validated `#rrggbb` color.
///
/// The original text is kept as-is, so a color read from pywal is written back
/// out byte-for-byte (same casing). Every color is exactly seven characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| ConfigError::InvalidColor(value.to_string()))?;

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(value.to_string()));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The color without its leading `#`, as cookies and query strings expect it.
    pub fn strip_hash(&self) -> &str {
        &self.0[1..]
    }

    /// Red, green and blue channels.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let digits = self.strip_hash();
        // Digits were checked in `parse`.
        let channel = |i: usize| u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).unwrap_or(0);
        (channel(0), channel(1), channel(2))
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{:02x}{:02x}{:02x}", r, g, b))
    }

    /// Scale every channel by `1 + amount`, clamped to 0..=255.
    ///
    /// Positive amounts brighten, negative amounts darken. The result is
    /// always a lowercase six digit color.
    pub fn change_brightness(&self, amount: f64) -> Self {
        let adjust = |c: u8| -> u8 {
            let c = f64::from(c);
            (c + c * amount).clamp(0.0, 255.0).round() as u8
        };
        let (r, g, b) = self.rgb();
        Self::from_rgb(adjust(r), adjust(g), adjust(b))
    }
}

impl FromStr for HexColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::HexColor;
    use crate::error::ConfigError;

    #[test]
    fn parse_keeps_original_text() {
        let color = HexColor::parse("#A1b2C3").unwrap();
        assert_eq!(color.as_str(), "#A1b2C3");
        assert_eq!(color.strip_hash(), "A1b2C3");
    }

    #[test]
    fn parse_rejects_short_form() {
        assert_eq!(
            HexColor::parse("#fff"),
            Err(ConfigError::InvalidColor("#fff".to_string()))
        );
        assert_eq!(HexColor::parse("#FfFfFf").unwrap().rgb(), (255, 255, 255));
    }

    #[test]
    fn parse_rejects_missing_hash() {
        assert_eq!(
            HexColor::parse("101010"),
            Err(ConfigError::InvalidColor("101010".to_string()))
        );
    }

    #[test]
    fn parse_rejects_bad_digits_and_lengths() {
        assert!(HexColor::parse("#10101g").is_err());
        assert!(HexColor::parse("#1010").is_err());
        assert!(HexColor::parse("#").is_err());
        assert!(HexColor::parse("").is_err());
        assert!(HexColor::parse("#10101010").is_err());
    }

    #[test]
    fn brighten_scales_channels() {
        let color = HexColor::parse("#646464").unwrap();
        assert_eq!(color.change_brightness(0.2).as_str(), "#787878");
    }

    #[test]
    fn brighten_clamps_at_white() {
        let color = HexColor::parse("#f0f0f0").unwrap();
        assert_eq!(color.change_brightness(0.2).as_str(), "#ffffff");
    }

    #[test]
    fn brighten_rounds_half_up() {
        // 0x0a * 1.25 = 12.5
        let color = HexColor::parse("#0a0a0a").unwrap();
        assert_eq!(color.change_brightness(0.25).as_str(), "#0d0d0d");
    }

    #[test]
    fn darken_with_negative_amount() {
        let color = HexColor::parse("#c8c8c8").unwrap();
        assert_eq!(color.change_brightness(-0.5).as_str(), "#646464");
    }

    #[test]
    fn brightness_of_black_stays_black() {
        let color = HexColor::parse("#000000").unwrap();
        assert_eq!(color.change_brightness(0.2).as_str(), "#000000");
    }

    #[test]
    fn deserialize_validates() {
        let ok: HexColor = serde_json::from_str("\"#123456\"").unwrap();
        assert_eq!(ok.as_str(), "#123456");
        assert!(serde_json::from_str::<HexColor>("\"blue\"").is_err());
    }
}
