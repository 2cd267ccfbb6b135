pub mod args;
pub mod browser;
pub mod css;
pub mod duckduckgo;
pub mod generate;
pub mod hash;
pub mod palette;
pub mod render;

use anyhow::{Context, Result};
use tracing::debug;

use crate::colorscheme::{Colorscheme, ThemeMode, generate_colorscheme};
use crate::config::Config;
use crate::palette::RawPalette;
use crate::pywal;
use args::InputArgs;

/// Loaded config, the theme mode in effect and the raw colors.
pub struct Inputs {
    pub config: Config,
    pub mode: ThemeMode,
    pub raw: RawPalette,
}

/// Load the config file(s) and colors named on the command line.
/// A `--theme` flag wins over the configured theme.
pub fn load_inputs(args: &InputArgs) -> Result<Inputs> {
    let config = Config::load(args.config.as_deref())?;
    let mode = args.theme.unwrap_or_else(|| config.theme());
    let raw = pywal::load_palette_or_cache(args.colors.as_deref())?;
    Ok(Inputs { config, mode, raw })
}

/// Load config and colors, then build the colorscheme every output is derived from.
pub fn load_colorscheme(args: &InputArgs) -> Result<Colorscheme> {
    let Inputs { config, mode, raw } = load_inputs(args)?;

    debug!(theme = %mode, colors = raw.len(), "command:generating colorscheme");
    generate_colorscheme(&raw, config.custom_colors(mode), &config.template(mode))
        .with_context(|| format!("Failed to generate the {} colorscheme", mode))
}
