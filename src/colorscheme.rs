use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::browser::{BrowserTemplateOverrides, BrowserTheme, BrowserThemeTemplate, generate_browser_theme};
use crate::error::ConfigError;
use crate::palette::{
    CustomColors, Palette, PaletteKey, PaletteTemplate, PaletteTemplateOverrides, RawPalette,
};

/// Which built-in template to start from.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            _ => Err(ConfigError::UnknownTheme(s.to_string())),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to go from a raw palette to a browser theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorschemeTemplate {
    pub palette: PaletteTemplate,
    pub browser: BrowserThemeTemplate,
}

impl ColorschemeTemplate {
    pub fn dark() -> Self {
        Self {
            palette: PaletteTemplate {
                background: 0,
                text: 7,
                text_focus: 15,
                background_light: 16,
                accent_primary: 1,
                accent_secondary: 2,
            },
            browser: default_browser_template(),
        }
    }

    pub fn light() -> Self {
        Self {
            palette: PaletteTemplate {
                background: 15,
                text: 8,
                text_focus: 0,
                background_light: 17,
                accent_primary: 1,
                accent_secondary: 2,
            },
            browser: default_browser_template(),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn with_overrides(
        self,
        palette: &PaletteTemplateOverrides,
        browser: &BrowserTemplateOverrides,
    ) -> Self {
        Self {
            palette: self.palette.with_overrides(palette),
            browser: self.browser.with_overrides(browser),
        }
    }
}

fn default_browser_template() -> BrowserThemeTemplate {
    use PaletteKey::*;

    BrowserThemeTemplate {
        icons: AccentPrimary,
        icons_attention: AccentSecondary,
        frame: Background,
        tab_text: Background,
        tab_loading: AccentPrimary,
        tab_background_text: Text,
        tab_selected: TextFocus,
        tab_line: TextFocus,
        tab_background_separator: Background,
        toolbar: Background,
        toolbar_field: Background,
        toolbar_field_focus: Background,
        toolbar_field_text: Text,
        toolbar_field_text_focus: Text,
        toolbar_field_border: Background,
        toolbar_field_border_focus: Background,
        toolbar_field_separator: Background,
        toolbar_field_highlight: AccentPrimary,
        toolbar_field_highlight_text: Text,
        toolbar_bottom_separator: Background,
        toolbar_top_separator: Background,
        toolbar_vertical_separator: BackgroundLight,
        ntp_background: Background,
        ntp_text: TextFocus,
        popup: Background,
        popup_border: BackgroundLight,
        popup_text: TextFocus,
        popup_highlight: AccentSecondary,
        popup_highlight_text: Text,
        sidebar: Background,
        sidebar_border: BackgroundLight,
        sidebar_text: TextFocus,
        sidebar_highlight: AccentPrimary,
        sidebar_highlight_text: Text,
        bookmark_text: Text,
        button_background_hover: BackgroundLight,
        button_background_active: BackgroundLight,
    }
}

/// One fully resolved theming state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Colorscheme {
    pub hash: String,
    pub palette: Palette,
    pub browser: BrowserTheme,
}

/// Resolve `template` against `raw`, overlay `custom`, and derive the browser theme.
pub fn generate_colorscheme(
    raw: &RawPalette,
    custom: &CustomColors,
    template: &ColorschemeTemplate,
) -> Result<Colorscheme, ConfigError> {
    let templated = template.palette.resolve(raw)?;
    let palette = custom.apply(templated);
    let browser = generate_browser_theme(&palette, &template.browser);
    let hash = palette.hash();

    debug!(hash = %hash, raw_colors = raw.len(), "colorscheme:generated");
    Ok(Colorscheme {
        hash,
        palette,
        browser,
    })
}
