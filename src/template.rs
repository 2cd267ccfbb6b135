use anyhow::{Context, Result};
use minijinja::{AutoEscape, Environment, Error as TemplateError, ErrorKind};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::browser::BrowserTheme;
use crate::color::HexColor;
use crate::colorscheme::Colorscheme;
use crate::duckduckgo::{DuckDuckGoTheme, generate_duckduckgo_theme};
use crate::extension::generate_extension_css;
use crate::palette::Palette;

pub type TemplateEnv = Environment<'static>;

/// Values exposed to user templates.
#[derive(Debug, Serialize)]
struct TemplateContext<'a> {
    hash: &'a str,
    palette: &'a Palette,
    browser: &'a BrowserTheme,
    css: String,
    duckduckgo: DuckDuckGoTheme,
}

/// Create and configure the template environment with filters and escape settings.
pub fn create_template_env() -> TemplateEnv {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);
    env.add_filter("strip_hash", strip_hash_filter);
    env.add_filter("brightness", brightness_filter);
    env
}

/// Render `source` with the palette, browser theme and derived outputs of `colorscheme`.
pub fn render_template(source: &str, env: &TemplateEnv, colorscheme: &Colorscheme) -> Result<String> {
    let context = TemplateContext {
        hash: &colorscheme.hash,
        palette: &colorscheme.palette,
        browser: &colorscheme.browser,
        css: generate_extension_css(colorscheme),
        duckduckgo: generate_duckduckgo_theme(colorscheme),
    };
    env.render_str(source, &context)
        .context("Failed to render template")
}

pub fn render_template_file(path: &Path, env: &TemplateEnv, colorscheme: &Colorscheme) -> Result<String> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read template file '{}'", path.display()))?;
    render_template(&source, env, colorscheme)
        .with_context(|| format!("Failed to render '{}'", path.display()))
}

fn strip_hash_filter(input: String) -> String {
    match input.strip_prefix('#') {
        Some(rest) => rest.to_string(),
        None => input,
    }
}

fn brightness_filter(input: String, amount: f64) -> Result<String, TemplateError> {
    let color = HexColor::parse(&input)
        .map_err(|e| TemplateError::new(ErrorKind::InvalidOperation, e.to_string()))?;
    Ok(color.change_brightness(amount).to_string())
}
