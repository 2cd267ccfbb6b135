use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::args::InputArgs;
use crate::template::{create_template_env, render_template_file};

/// Render a user template, printing it or writing it to `output`.
pub fn run(inputs: &InputArgs, template: &Path, output: Option<&Path>) -> Result<()> {
    let colorscheme = super::load_colorscheme(inputs)?;
    let env = create_template_env();
    let rendered = render_template_file(template, &env, &colorscheme)?;

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(template = %template.display(), output = %path.display(), "render:wrote output");
            println!("✓ Rendered {} to {}", template.display(), path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
