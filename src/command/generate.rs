use anyhow::{Context, Result};

use super::args::InputArgs;

pub fn run(inputs: &InputArgs) -> Result<()> {
    let colorscheme = super::load_colorscheme(inputs)?;
    let json =
        serde_json::to_string_pretty(&colorscheme).context("Failed to serialize colorscheme")?;
    println!("{json}");
    Ok(())
}
