use std::path::PathBuf;

use crate::colorscheme::ThemeMode;
use crate::error::ConfigError;

/// Where colors and configuration come from. Shared by every generating command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Config file to merge over the global one
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Built-in template to use (overrides the config file)
    #[arg(short = 't', long, global = true, value_parser = parse_theme)]
    pub theme: Option<ThemeMode>,

    /// Colors to read: a JSON array, a pywal colors.json, or '-' for stdin
    /// (defaults to pywal's cache)
    #[arg(short = 'c', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub colors: Option<PathBuf>,
}

fn parse_theme(value: &str) -> Result<ThemeMode, ConfigError> {
    value.parse()
}
