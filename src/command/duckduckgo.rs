use anyhow::{Context, Result};

use super::args::InputArgs;
use crate::duckduckgo::generate_duckduckgo_theme;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuckDuckGoFormat {
    /// `{hash, colors: [{id, value}]}`
    #[default]
    Json,
    /// `k7=...; kj=...`, as a Cookie header
    Cookie,
    /// `k7=...&kj=...`, to append to a search URL
    Query,
}

pub fn run(inputs: &InputArgs, format: DuckDuckGoFormat) -> Result<()> {
    let colorscheme = super::load_colorscheme(inputs)?;
    let theme = generate_duckduckgo_theme(&colorscheme);

    match format {
        DuckDuckGoFormat::Json => {
            let json = serde_json::to_string_pretty(&theme)
                .context("Failed to serialize DuckDuckGo theme")?;
            println!("{json}");
        }
        DuckDuckGoFormat::Cookie => println!("{}", theme.to_cookie_header()),
        DuckDuckGoFormat::Query => println!("{}", theme.to_query_string()),
    }
    Ok(())
}
