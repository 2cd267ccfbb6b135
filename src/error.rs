/// Errors raised while turning a raw palette into a colorscheme.
///
/// Every variant describes input that does not fit the templates in use.
/// Generation stops at the first one; nothing is substituted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Palette template references index {index} for '{key}', but the palette only has {len} colors")]
    MissingPaletteIndex {
        key: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    #[error("Expected between {min} and {max} palette colors, got {got}")]
    PaletteLength { min: usize, max: usize, got: usize },

    #[error("Unknown theme '{0}' (expected 'dark' or 'light')")]
    UnknownTheme(String),
}
