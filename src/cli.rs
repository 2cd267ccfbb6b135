use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};

use crate::command::args::InputArgs;
use crate::command::duckduckgo::DuckDuckGoFormat;
use crate::{command, config};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "walfox")]
#[command(about = "Generates browser and search engine themes from pywal color palettes")]
struct Cli {
    #[command(flatten)]
    inputs: InputArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full colorscheme (hash, palette, browser theme) as JSON
    #[command(visible_alias = "gen")]
    Generate,

    /// Print the browser theme in the shape browser.theme.update() accepts
    Browser,

    /// Print the CSS custom properties used by the extension pages
    Css,

    /// Print the DuckDuckGo appearance settings
    #[command(visible_alias = "ddg")]
    Duckduckgo {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = DuckDuckGoFormat::Json)]
        format: DuckDuckGoFormat,
    },

    /// Print the palette hash (changes whenever any palette color changes)
    Hash,

    /// Show the semantic palette and where each color came from
    Palette,

    /// Render a template file with the colorscheme
    Render {
        /// Template file (minijinja syntax)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        template: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Generate an example configuration file
    Init,

    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

// --- Public Entry Point ---
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let inputs = cli.inputs;

    match cli.command {
        Commands::Generate => command::generate::run(&inputs),
        Commands::Browser => command::browser::run(&inputs),
        Commands::Css => command::css::run(&inputs),
        Commands::Duckduckgo { format } => command::duckduckgo::run(&inputs, format),
        Commands::Hash => command::hash::run(&inputs),
        Commands::Palette => command::palette::run(&inputs),
        Commands::Render { template, output } => {
            command::render::run(&inputs, &template, output.as_deref())
        }
        Commands::Init => config::Config::init(inputs.config.as_deref()),
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    }
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
