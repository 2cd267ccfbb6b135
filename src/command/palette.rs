use std::io::IsTerminal;

use anyhow::{Context, Result};
use tabled::{
    Table, Tabled,
    settings::{Padding, Style, disable::Remove, object::Columns},
};

use super::args::InputArgs;
use crate::color::HexColor;
use crate::colorscheme::generate_colorscheme;
use crate::palette::{CustomColors, Palette, PaletteKey, PaletteTemplate};

#[derive(Tabled, Debug, PartialEq)]
struct PaletteRow {
    #[tabled(rename = "KEY")]
    key: String,
    #[tabled(rename = "COLOR")]
    color: String,
    #[tabled(rename = "SOURCE")]
    source: String,
    #[tabled(rename = "")]
    swatch: String,
}

/// A block filled with `color`, for terminals with truecolor support.
fn swatch(color: &HexColor) -> String {
    let (r, g, b) = color.rgb();
    format!("\x1b[48;2;{};{};{}m    \x1b[0m", r, g, b)
}

/// Where each semantic color came from: a custom color or a palette index.
fn build_rows(palette: &Palette, template: &PaletteTemplate, custom: &CustomColors) -> Vec<PaletteRow> {
    PaletteKey::ALL
        .iter()
        .map(|key| {
            let color = palette.get(*key);
            let source = if custom.get(*key).is_some() {
                "custom".to_string()
            } else {
                format!("color{}", template.index(*key))
            };
            PaletteRow {
                key: key.name().to_string(),
                color: color.to_string(),
                source,
                swatch: swatch(color),
            }
        })
        .collect()
}

pub fn run(inputs: &InputArgs) -> Result<()> {
    let loaded = super::load_inputs(inputs)?;
    let template = loaded.config.template(loaded.mode);
    let custom = loaded.config.custom_colors(loaded.mode);
    let colorscheme = generate_colorscheme(&loaded.raw, custom, &template)
        .with_context(|| format!("Failed to generate the {} colorscheme", loaded.mode))?;

    let rows = build_rows(&colorscheme.palette, &template.palette, custom);
    let mut table = Table::new(rows);
    table
        .with(Style::blank())
        .modify(Columns::new(0..4), Padding::new(0, 1, 0, 0));

    // Swatches are escape codes; leave them out when piped.
    if !std::io::stdout().is_terminal() {
        table.with(Remove::column(Columns::new(3..4)));
    }

    println!("theme: {}", loaded.mode);
    println!("{table}");
    Ok(())
}
