use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::browser::BrowserTemplateOverrides;
use crate::colorscheme::{ColorschemeTemplate, ThemeMode};
use crate::palette::{CustomColors, PaletteTemplateOverrides};

/// Hand-picked colors, kept separately for each theme mode.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CustomColorsConfig {
    #[serde(default)]
    pub dark: CustomColors,
    #[serde(default)]
    pub light: CustomColors,
}

/// Configuration for walfox, read from ~/.config/walfox/config.yaml
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Built-in template to use (optional, defaults to dark)
    #[serde(default)]
    pub theme: Option<ThemeMode>,

    /// Colors that replace the templated ones, per theme mode
    #[serde(default)]
    pub custom_colors: CustomColorsConfig,

    /// Raw palette indices that replace the built-in template's, by semantic key
    #[serde(default)]
    pub palette_template: PaletteTemplateOverrides,

    /// Semantic keys that replace the built-in template's, by browser theme slot
    #[serde(default)]
    pub browser_template: BrowserTemplateOverrides,
}

impl Config {
    /// Load the global configuration, then merge `explicit` over it if given.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        debug!("config:loading");
        let global_config = Self::load_global()?.unwrap_or_default();

        let config = match explicit {
            Some(path) => {
                let explicit_config = Self::load_from_path(path)?.ok_or_else(|| {
                    anyhow::anyhow!("Config file not found: {}", path.display())
                })?;
                global_config.merge(explicit_config)
            }
            None => global_config,
        };

        debug!(
            theme = %config.theme(),
            has_custom_dark = !config.custom_colors.dark.is_empty(),
            has_custom_light = !config.custom_colors.light.is_empty(),
            has_browser_overrides = !config.browser_template.is_empty(),
            "config:loaded"
        );
        Ok(config)
    }

    /// Load configuration from a specific path.
    fn load_from_path(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        debug!(path = %path.display(), "config:reading file");
        let contents = fs::read_to_string(path)?;
        // A file holding only comments (as `walfox init` writes it) is an empty config.
        let has_content = contents.lines().any(|line| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        });
        if !has_content {
            return Ok(Some(Self::default()));
        }
        let config: Config = serde_yaml::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Failed to parse config at {}: {}", path.display(), e))?;
        Ok(Some(config))
    }

    /// Load the global configuration file from the XDG config directory.
    fn load_global() -> anyhow::Result<Option<Self>> {
        for path in Self::global_paths() {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }
        Ok(None)
    }

    /// Candidate global config files, in lookup order.
    fn global_paths() -> Vec<PathBuf> {
        let Some(config_dir) = global_config_dir() else {
            return Vec::new();
        };
        vec![config_dir.join("config.yaml"), config_dir.join("config.yml")]
    }

    /// Merge another config over this one. Fields set in `other` win.
    fn merge(self, other: Self) -> Self {
        Self {
            theme: other.theme.or(self.theme),
            custom_colors: CustomColorsConfig {
                dark: self.custom_colors.dark.merge(other.custom_colors.dark),
                light: self.custom_colors.light.merge(other.custom_colors.light),
            },
            palette_template: self.palette_template.merge(other.palette_template),
            browser_template: self.browser_template.merge(other.browser_template),
        }
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme.unwrap_or_default()
    }

    pub fn custom_colors(&self, mode: ThemeMode) -> &CustomColors {
        match mode {
            ThemeMode::Dark => &self.custom_colors.dark,
            ThemeMode::Light => &self.custom_colors.light,
        }
    }

    /// The built-in template for `mode` with the configured overrides applied.
    pub fn template(&self, mode: ThemeMode) -> ColorschemeTemplate {
        ColorschemeTemplate::for_mode(mode)
            .with_overrides(&self.palette_template, &self.browser_template)
    }

    /// Write an example configuration file to `path`, or the global location.
    pub fn init(path: Option<&Path>) -> anyhow::Result<()> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => global_config_dir()
                .map(|dir| dir.join("config.yaml"))
                .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?,
        };

        Self::init_at(&config_path)?;
        println!("✓ Created {}", config_path.display());
        Ok(())
    }

    fn init_at(config_path: &Path) -> anyhow::Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "{} already exists. Remove it first if you want to regenerate it.",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(config_path, EXAMPLE_CONFIG)?;
        debug!(path = %config_path.display(), "config:wrote example");
        Ok(())
    }
}

/// `$XDG_CONFIG_HOME/walfox`, falling back to `~/.config/walfox`.
fn global_config_dir() -> Option<PathBuf> {
    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME")
        && !config_home.is_empty()
    {
        return Some(PathBuf::from(config_home).join("walfox"));
    }
    home::home_dir().map(|home| home.join(".config").join("walfox"))
}

const EXAMPLE_CONFIG: &str = r##"# walfox configuration
# All options below are commented out - uncomment to override defaults.

#-------------------------------------------------------------------------------
# Template
#-------------------------------------------------------------------------------

# Built-in template to start from.
# Options: dark (default), light
# theme: dark

#-------------------------------------------------------------------------------
# Custom colors
#-------------------------------------------------------------------------------

# Colors that always replace the ones picked from the pywal palette.
# Keys: background, text, textFocus, backgroundLight, accentPrimary, accentSecondary
# custom_colors:
#   dark:
#     accentPrimary: "#ff79c6"
#   light:
#     text: "#1e1e1e"

#-------------------------------------------------------------------------------
# Template overrides
#-------------------------------------------------------------------------------

# Which pywal color (0-15, 16 = lighter background, 17 = darker foreground)
# each semantic key uses.
# palette_template:
#   backgroundLight: 8
#   accentSecondary: 4

# Which semantic key each browser theme slot uses.
# browser_template:
#   toolbar: backgroundLight
#   tab_selected: accentPrimary
"##;

#[cfg(test)]
mod tests {
    use super::{Config, CustomColorsConfig, EXAMPLE_CONFIG};
    use crate::browser::BrowserTemplateOverrides;
    use crate::color::HexColor;
    use crate::colorscheme::{ColorschemeTemplate, ThemeMode};
    use crate::palette::{CustomColors, PaletteKey, PaletteTemplateOverrides};
    use std::fs;
    use tempfile::TempDir;

    fn color(s: &str) -> Option<HexColor> {
        Some(HexColor::parse(s).unwrap())
    }

    #[test]
    fn parses_full_config() {
        let yaml = r##"
theme: light
custom_colors:
  light:
    text: "#abcdef"
palette_template:
  backgroundLight: 8
browser_template:
  toolbar: accentPrimary
"##;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.theme(), ThemeMode::Light);
        assert_eq!(config.custom_colors(ThemeMode::Light).text, color("#abcdef"));
        assert!(config.custom_colors(ThemeMode::Dark).is_empty());

        let template = config.template(ThemeMode::Light);
        assert_eq!(template.palette.background_light, 8);
        assert_eq!(template.palette.background, ColorschemeTemplate::light().palette.background);
        assert_eq!(template.browser.toolbar, PaletteKey::AccentPrimary);
    }

    #[test]
    fn defaults_to_dark_template() {
        let config = Config::default();
        assert_eq!(config.theme(), ThemeMode::Dark);
        assert_eq!(config.template(ThemeMode::Dark), ColorschemeTemplate::dark());
    }

    #[test]
    fn rejects_invalid_custom_color() {
        let yaml = "custom_colors:\n  dark:\n    text: blue\n";
        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn rejects_unknown_semantic_key() {
        let yaml = "browser_template:\n  toolbar: foreground\n";
        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn merge_prefers_later_config() {
        let global = Config {
            theme: Some(ThemeMode::Light),
            custom_colors: CustomColorsConfig {
                dark: CustomColors {
                    text: color("#111111"),
                    background: color("#222222"),
                    ..Default::default()
                },
                light: CustomColors::default(),
            },
            palette_template: PaletteTemplateOverrides {
                text: Some(3),
                ..Default::default()
            },
            browser_template: BrowserTemplateOverrides::default(),
        };
        let explicit = Config {
            theme: None,
            custom_colors: CustomColorsConfig {
                dark: CustomColors {
                    text: color("#333333"),
                    ..Default::default()
                },
                light: CustomColors::default(),
            },
            palette_template: PaletteTemplateOverrides {
                text: Some(4),
                ..Default::default()
            },
            browser_template: BrowserTemplateOverrides {
                popup: Some(PaletteKey::Text),
                ..Default::default()
            },
        };

        let merged = global.merge(explicit);
        assert_eq!(merged.theme(), ThemeMode::Light);
        assert_eq!(merged.custom_colors.dark.text, color("#333333"));
        assert_eq!(merged.custom_colors.dark.background, color("#222222"));
        assert_eq!(merged.palette_template.text, Some(4));
        assert_eq!(merged.browser_template.popup, Some(PaletteKey::Text));
    }

    #[test]
    fn load_from_path_reports_parse_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "theme: [unclosed").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config at"));
    }

    #[test]
    fn load_from_missing_path_is_none() {
        let temp = TempDir::new().unwrap();
        let result = Config::load_from_path(&temp.path().join("missing.yaml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn empty_file_is_default_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "\n").unwrap();
        assert_eq!(Config::load_from_path(&path).unwrap(), Some(Config::default()));
    }

    #[test]
    fn example_config_loads_as_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, EXAMPLE_CONFIG).unwrap();
        assert_eq!(Config::load_from_path(&path).unwrap(), Some(Config::default()));
    }

    #[test]
    fn example_config_uncommented_parses() {
        let uncommented: String = EXAMPLE_CONFIG
            .lines()
            .filter(|line| line.starts_with("# ") && !line.starts_with("# walfox"))
            .map(|line| &line[2..])
            .filter(|line| line.starts_with(' ') || line.contains(':'))
            .filter(|line| !line.contains("Options:") && !line.contains("Keys:"))
            .collect::<Vec<_>>()
            .join("\n");
        let config: Config = serde_yaml::from_str(&uncommented).unwrap();
        assert_eq!(config.theme(), ThemeMode::Dark);
        assert_eq!(config.palette_template.background_light, Some(8));
        assert_eq!(config.browser_template.tab_selected, Some(PaletteKey::AccentPrimary));
    }

    #[test]
    fn init_writes_once() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.yaml");

        Config::init_at(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), EXAMPLE_CONFIG);

        let err = Config::init_at(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
