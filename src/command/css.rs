use anyhow::Result;

use super::args::InputArgs;
use crate::extension::generate_extension_css;

pub fn run(inputs: &InputArgs) -> Result<()> {
    let colorscheme = super::load_colorscheme(inputs)?;
    println!("{}", generate_extension_css(&colorscheme));
    Ok(())
}
