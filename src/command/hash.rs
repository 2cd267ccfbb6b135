use anyhow::Result;

use super::args::InputArgs;

pub fn run(inputs: &InputArgs) -> Result<()> {
    let colorscheme = super::load_colorscheme(inputs)?;
    println!("{}", colorscheme.hash);
    Ok(())
}
