use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::color::HexColor;
use crate::palette::{MIN_RAW_COLORS, RawPalette};

/// Brightness change applied to derive the extra background and foreground shades.
const DERIVED_SHADE: f64 = 0.2;

/// The parts of pywal's `colors.json` we read.
#[derive(Debug, Deserialize)]
struct WalCache {
    colors: BTreeMap<String, String>,
}

/// Where pywal writes its cache: `$XDG_CACHE_HOME/wal/colors.json`,
/// falling back to `~/.cache/wal/colors.json`.
pub fn default_cache_path() -> Option<PathBuf> {
    if let Ok(cache_home) = std::env::var("XDG_CACHE_HOME")
        && !cache_home.is_empty()
    {
        return Some(PathBuf::from(cache_home).join("wal").join("colors.json"));
    }

    home::home_dir().map(|home| home.join(".cache").join("wal").join("colors.json"))
}

/// Parse a palette from either a JSON array of colors or a pywal cache object.
pub fn parse_palette(contents: &str) -> Result<RawPalette> {
    let value: JsonValue = serde_json::from_str(contents).context("Colors are not valid JSON")?;

    match value {
        JsonValue::Array(_) => {
            let colors: Vec<String> =
                serde_json::from_value(value).context("Expected an array of color strings")?;
            let colors = colors
                .iter()
                .map(|c| HexColor::parse(c))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(RawPalette::new(with_derived_shades(colors))?)
        }
        JsonValue::Object(_) => {
            let cache: WalCache =
                serde_json::from_value(value).context("Expected a pywal colors.json object")?;
            from_wal_colors(&cache.colors)
        }
        _ => Err(anyhow!(
            "Expected a JSON array of colors or a pywal colors.json object"
        )),
    }
}

/// Turn pywal's `color0`..`color15` into a full raw palette.
fn from_wal_colors(colors: &BTreeMap<String, String>) -> Result<RawPalette> {
    let mut palette = Vec::with_capacity(MIN_RAW_COLORS + 2);
    for i in 0..MIN_RAW_COLORS {
        let name = format!("color{i}");
        let value = colors
            .get(&name)
            .ok_or_else(|| anyhow!("pywal colors are missing '{}'", name))?;
        palette.push(HexColor::parse(value)?);
    }

    Ok(RawPalette::new(with_derived_shades(palette))?)
}

/// Append the shades the native helper derives when only pywal's colors are
/// given: index 16 is a lighter `color0` and index 17 is a darker `color15`.
/// Shorter or complete lists are returned unchanged.
fn with_derived_shades(mut colors: Vec<HexColor>) -> Vec<HexColor> {
    if colors.len() == MIN_RAW_COLORS {
        let background_light = colors[0].change_brightness(DERIVED_SHADE);
        colors.push(background_light);
    }
    if colors.len() == MIN_RAW_COLORS + 1 {
        let foreground_dark = colors[MIN_RAW_COLORS - 1].change_brightness(-DERIVED_SHADE);
        colors.push(foreground_dark);
    }
    colors
}

/// Load a palette from `path`, or from stdin when `path` is `-`.
pub fn load_palette(path: &Path) -> Result<RawPalette> {
    let contents = if path == Path::new("-") {
        debug!("pywal:reading colors from stdin");
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read colors from stdin")?;
        buf
    } else {
        debug!(path = %path.display(), "pywal:reading colors");
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read colors from {}", path.display()))?
    };

    let palette = parse_palette(&contents)
        .with_context(|| format!("Invalid colors in {}", path.display()))?;
    debug!(colors = palette.len(), "pywal:palette loaded");
    Ok(palette)
}

/// Load the palette from an explicit source or pywal's cache.
pub fn load_palette_or_cache(path: Option<&Path>) -> Result<RawPalette> {
    match path {
        Some(path) => load_palette(path),
        None => {
            let cache = default_cache_path()
                .ok_or_else(|| anyhow!("Could not determine pywal cache location"))?;
            if !cache.exists() {
                return Err(anyhow!(
                    "No pywal colors found at {}. Run 'wal' first or pass --colors.",
                    cache.display()
                ));
            }
            load_palette(&cache)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{load_palette, parse_palette};
    use crate::colorscheme::{ColorschemeTemplate, generate_colorscheme};
    use crate::palette::CustomColors;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn wal_json() -> String {
        let colors: Vec<String> = (0..16)
            .map(|i| format!("\"color{i}\": \"#{:02x}{:02x}{:02x}\"", 100, 100, i * 10))
            .collect();
        format!(
            r##"{{"wallpaper": "/tmp/wall.png", "alpha": "100",
                "special": {{"background": "#646400", "foreground": "#646496", "cursor": "#646496"}},
                "colors": {{{}}}}}"##,
            colors.join(", ")
        )
    }

    #[test]
    fn parses_plain_array() {
        let colors: Vec<String> = (0..18).map(|i| format!("\"#0000{:02x}\"", i)).collect();
        let palette = parse_palette(&format!("[{}]", colors.join(","))).unwrap();
        assert_eq!(palette.len(), 18);
        assert_eq!(palette.get(17).unwrap().as_str(), "#000011");
    }

    #[test]
    fn sixteen_color_array_gets_derived_shades() {
        let mut colors = vec!["\"#646464\""; 16];
        colors[15] = "\"#c8c8c8\"";
        let palette = parse_palette(&format!("[{}]", colors.join(","))).unwrap();
        assert_eq!(palette.len(), 18);
        assert_eq!(palette.get(16).unwrap().as_str(), "#787878");
        assert_eq!(palette.get(17).unwrap().as_str(), "#a0a0a0");

        for template in [ColorschemeTemplate::dark(), ColorschemeTemplate::light()] {
            assert!(generate_colorscheme(&palette, &CustomColors::default(), &template).is_ok());
        }
    }

    #[test]
    fn seventeen_color_array_gets_darker_foreground() {
        let mut colors = vec!["\"#000000\""; 17];
        colors[15] = "\"#c8c8c8\"";
        colors[16] = "\"#123456\"";
        let palette = parse_palette(&format!("[{}]", colors.join(","))).unwrap();
        assert_eq!(palette.len(), 18);
        assert_eq!(palette.get(16).unwrap().as_str(), "#123456");
        assert_eq!(palette.get(17).unwrap().as_str(), "#a0a0a0");
    }

    #[test]
    fn array_with_bad_color_fails() {
        let mut colors = vec!["\"#000000\""; 16];
        colors[3] = "\"red\"";
        let err = parse_palette(&format!("[{}]", colors.join(","))).unwrap_err();
        assert!(err.to_string().contains("red"));
    }

    #[test]
    fn array_with_too_few_colors_fails() {
        assert!(parse_palette(r##"["#000000", "#ffffff"]"##).is_err());
    }

    #[test]
    fn parses_wal_cache_and_derives_shades() {
        let palette = parse_palette(&wal_json()).unwrap();
        assert_eq!(palette.len(), 18);
        assert_eq!(palette.get(0).unwrap().as_str(), "#646400");
        // color0 brightened by 20%
        assert_eq!(palette.get(16).unwrap().as_str(), "#787800");
        // color15 = #646496, darkened by 20%
        assert_eq!(palette.get(17).unwrap().as_str(), "#505078");
    }

    #[test]
    fn wal_cache_missing_color_fails() {
        let err = parse_palette(r##"{"colors": {"color0": "#000000"}}"##).unwrap_err();
        assert!(err.to_string().contains("color1"));
    }

    #[test]
    fn rejects_other_json() {
        assert!(parse_palette("42").is_err());
        assert!(parse_palette("not json").is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", wal_json()).unwrap();
        let palette = load_palette(file.path()).unwrap();
        assert_eq!(palette.len(), 18);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_palette(std::path::Path::new("/nonexistent/colors.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/colors.json"));
    }
}
