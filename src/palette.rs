use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::HexColor;
use crate::error::ConfigError;

/// Smallest raw palette accepted: pywal's 16 terminal colors.
pub const MIN_RAW_COLORS: usize = 16;
/// Largest raw palette accepted: the 16 pywal colors plus two derived ones.
pub const MAX_RAW_COLORS: usize = 18;

/// Colors as delivered by pywal or the native helper, addressed by position.
///
/// Indices 0-15 are pywal's colors; 16 and 17 (when present) are a lighter
/// background and a darker foreground.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPalette(Vec<HexColor>);

impl RawPalette {
    pub fn new(colors: Vec<HexColor>) -> Result<Self, ConfigError> {
        if !(MIN_RAW_COLORS..=MAX_RAW_COLORS).contains(&colors.len()) {
            return Err(ConfigError::PaletteLength {
                min: MIN_RAW_COLORS,
                max: MAX_RAW_COLORS,
                got: colors.len(),
            });
        }
        Ok(Self(colors))
    }

    /// Validate a list of color strings.
    pub fn from_strings<S: AsRef<str>>(colors: &[S]) -> Result<Self, ConfigError> {
        let colors = colors
            .iter()
            .map(|c| HexColor::parse(c.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    pub fn get(&self, index: usize) -> Option<&HexColor> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// The six abstract color roles every theme is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaletteKey {
    Background,
    Text,
    TextFocus,
    BackgroundLight,
    AccentPrimary,
    AccentSecondary,
}

impl PaletteKey {
    pub const ALL: [PaletteKey; 6] = [
        PaletteKey::Background,
        PaletteKey::Text,
        PaletteKey::TextFocus,
        PaletteKey::BackgroundLight,
        PaletteKey::AccentPrimary,
        PaletteKey::AccentSecondary,
    ];

    /// Name used in templates, config files and JSON output.
    pub fn name(self) -> &'static str {
        match self {
            PaletteKey::Background => "background",
            PaletteKey::Text => "text",
            PaletteKey::TextFocus => "textFocus",
            PaletteKey::BackgroundLight => "backgroundLight",
            PaletteKey::AccentPrimary => "accentPrimary",
            PaletteKey::AccentSecondary => "accentSecondary",
        }
    }
}

/// A fully resolved semantic palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub background: HexColor,
    pub text: HexColor,
    pub text_focus: HexColor,
    pub background_light: HexColor,
    pub accent_primary: HexColor,
    pub accent_secondary: HexColor,
}

impl Palette {
    pub fn get(&self, key: PaletteKey) -> &HexColor {
        match key {
            PaletteKey::Background => &self.background,
            PaletteKey::Text => &self.text,
            PaletteKey::TextFocus => &self.text_focus,
            PaletteKey::BackgroundLight => &self.background_light,
            PaletteKey::AccentPrimary => &self.accent_primary,
            PaletteKey::AccentSecondary => &self.accent_secondary,
        }
    }

    /// Fingerprint used to detect palette changes.
    ///
    /// The colors (without `#`) are concatenated in alphabetical key order.
    /// Every color is six digits wide, so two palettes hash the same exactly
    /// when all six colors are equal.
    pub fn hash(&self) -> String {
        let mut keys = PaletteKey::ALL;
        keys.sort_by_key(|key| key.name());

        keys.iter()
            .map(|key| self.get(*key).strip_hash())
            .collect()
    }
}

/// Maps every semantic key to a position in the raw palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteTemplate {
    pub background: usize,
    pub text: usize,
    pub text_focus: usize,
    pub background_light: usize,
    pub accent_primary: usize,
    pub accent_secondary: usize,
}

impl PaletteTemplate {
    pub fn index(&self, key: PaletteKey) -> usize {
        match key {
            PaletteKey::Background => self.background,
            PaletteKey::Text => self.text,
            PaletteKey::TextFocus => self.text_focus,
            PaletteKey::BackgroundLight => self.background_light,
            PaletteKey::AccentPrimary => self.accent_primary,
            PaletteKey::AccentSecondary => self.accent_secondary,
        }
    }

    /// Look up every key in `raw`. Fails on the first index the palette lacks.
    pub fn resolve(&self, raw: &RawPalette) -> Result<Palette, ConfigError> {
        let lookup = |key: PaletteKey| -> Result<HexColor, ConfigError> {
            let index = self.index(key);
            raw.get(index)
                .cloned()
                .ok_or(ConfigError::MissingPaletteIndex {
                    key: key.name(),
                    index,
                    len: raw.len(),
                })
        };

        Ok(Palette {
            background: lookup(PaletteKey::Background)?,
            text: lookup(PaletteKey::Text)?,
            text_focus: lookup(PaletteKey::TextFocus)?,
            background_light: lookup(PaletteKey::BackgroundLight)?,
            accent_primary: lookup(PaletteKey::AccentPrimary)?,
            accent_secondary: lookup(PaletteKey::AccentSecondary)?,
        })
    }

    pub fn with_overrides(mut self, overrides: &PaletteTemplateOverrides) -> Self {
        if let Some(index) = overrides.background {
            self.background = index;
        }
        if let Some(index) = overrides.text {
            self.text = index;
        }
        if let Some(index) = overrides.text_focus {
            self.text_focus = index;
        }
        if let Some(index) = overrides.background_light {
            self.background_light = index;
        }
        if let Some(index) = overrides.accent_primary {
            self.accent_primary = index;
        }
        if let Some(index) = overrides.accent_secondary {
            self.accent_secondary = index;
        }
        self
    }
}

/// Partial palette template read from the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PaletteTemplateOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_focus: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_light: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_primary: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_secondary: Option<usize>,
}

impl PaletteTemplateOverrides {
    /// Combine two override sets; fields set in `other` win.
    pub fn merge(self, other: Self) -> Self {
        Self {
            background: other.background.or(self.background),
            text: other.text.or(self.text),
            text_focus: other.text_focus.or(self.text_focus),
            background_light: other.background_light.or(self.background_light),
            accent_primary: other.accent_primary.or(self.accent_primary),
            accent_secondary: other.accent_secondary.or(self.accent_secondary),
        }
    }
}

/// Colors the user picked by hand. Any key set here replaces the templated color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CustomColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_focus: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_light: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_primary: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_secondary: Option<HexColor>,
}

impl CustomColors {
    pub fn is_empty(&self) -> bool {
        PaletteKey::ALL.iter().all(|key| self.get(*key).is_none())
    }

    pub fn get(&self, key: PaletteKey) -> Option<&HexColor> {
        match key {
            PaletteKey::Background => self.background.as_ref(),
            PaletteKey::Text => self.text.as_ref(),
            PaletteKey::TextFocus => self.text_focus.as_ref(),
            PaletteKey::BackgroundLight => self.background_light.as_ref(),
            PaletteKey::AccentPrimary => self.accent_primary.as_ref(),
            PaletteKey::AccentSecondary => self.accent_secondary.as_ref(),
        }
    }

    /// Overlay these colors on `palette`, key by key.
    pub fn apply(&self, palette: Palette) -> Palette {
        let pick = |custom: &Option<HexColor>, templated: HexColor| -> HexColor {
            custom.clone().unwrap_or(templated)
        };

        let applied = Palette {
            background: pick(&self.background, palette.background),
            text: pick(&self.text, palette.text),
            text_focus: pick(&self.text_focus, palette.text_focus),
            background_light: pick(&self.background_light, palette.background_light),
            accent_primary: pick(&self.accent_primary, palette.accent_primary),
            accent_secondary: pick(&self.accent_secondary, palette.accent_secondary),
        };

        if !self.is_empty() {
            debug!(custom = ?self, "palette:applied custom colors");
        }
        applied
    }

    /// Combine two sets of custom colors; fields set in `other` win.
    pub fn merge(self, other: Self) -> Self {
        Self {
            background: other.background.or(self.background),
            text: other.text.or(self.text),
            text_focus: other.text_focus.or(self.text_focus),
            background_light: other.background_light.or(self.background_light),
            accent_primary: other.accent_primary.or(self.accent_primary),
            accent_secondary: other.accent_secondary.or(self.accent_secondary),
        }
    }
}
