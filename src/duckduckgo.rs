use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::colorscheme::Colorscheme;

/// Value of the `kae` setting that marks the theme as ours.
pub const THEME_ID: &str = "pywal";

/// How much brighter result links are drawn than the accents they come from.
pub const LINK_BRIGHTNESS: f64 = 0.2;

/// One DuckDuckGo appearance setting. `value` is a color without `#`, or the theme id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuckDuckGoColor {
    pub id: String,
    pub value: String,
}

impl DuckDuckGoColor {
    fn new(id: &str, value: &str) -> Self {
        Self {
            id: id.to_string(),
            value: value.to_string(),
        }
    }
}

/// The settings DuckDuckGo reads from its cookies to skin the results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuckDuckGoTheme {
    pub hash: String,
    pub colors: Vec<DuckDuckGoColor>,
}

impl DuckDuckGoTheme {
    /// `k7=101010; kj=101010; ...`, the form of a `Cookie` header.
    pub fn to_cookie_header(&self) -> String {
        self.colors
            .iter()
            .map(|c| format!("{}={}", c.id, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// `k7=101010&kj=101010&...`, appended to a search URL to apply the theme
    /// without cookies.
    pub fn to_query_string(&self) -> String {
        self.colors
            .iter()
            .map(|c| {
                format!(
                    "{}={}",
                    utf8_percent_encode(&c.id, NON_ALPHANUMERIC),
                    utf8_percent_encode(&c.value, NON_ALPHANUMERIC)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Build the DuckDuckGo settings for `colorscheme`.
///
/// Ids and their order are fixed by DuckDuckGo's settings format.
pub fn generate_duckduckgo_theme(colorscheme: &Colorscheme) -> DuckDuckGoTheme {
    let palette = &colorscheme.palette;
    let link = palette.accent_secondary.change_brightness(LINK_BRIGHTNESS);
    let visited_link = palette.accent_primary.change_brightness(LINK_BRIGHTNESS);

    let colors = vec![
        // Background
        DuckDuckGoColor::new("k7", palette.background.strip_hash()),
        // Header background
        DuckDuckGoColor::new("kj", palette.background.strip_hash()),
        // Result title
        DuckDuckGoColor::new("k9", palette.text_focus.strip_hash()),
        // Result url
        DuckDuckGoColor::new("kx", link.strip_hash()),
        // Visited result title
        DuckDuckGoColor::new("kaa", visited_link.strip_hash()),
        // Result description
        DuckDuckGoColor::new("k8", palette.text.strip_hash()),
        // Hover, dropdowns
        DuckDuckGoColor::new("k21", palette.background_light.strip_hash()),
        DuckDuckGoColor::new("kae", THEME_ID),
    ];

    DuckDuckGoTheme {
        hash: colorscheme.hash.clone(),
        colors,
    }
}
