use anyhow::{Context, Result};

use super::args::InputArgs;

/// Print the theme in the shape `browser.theme.update()` accepts.
pub fn run(inputs: &InputArgs) -> Result<()> {
    let colorscheme = super::load_colorscheme(inputs)?;
    let json = serde_json::to_string_pretty(&colorscheme.browser.manifest())
        .context("Failed to serialize browser theme")?;
    println!("{json}");
    Ok(())
}
