mod browser;
mod cli;
mod color;
mod colorscheme;
mod command;
mod config;
mod duckduckgo;
mod error;
mod extension;
mod logger;
mod palette;
mod pywal;
mod template;

use anyhow::Result;
use tracing::{error, info};

fn main() -> Result<()> {
    logger::init()?;
    info!(args = ?std::env::args().collect::<Vec<_>>(), "walfox start");

    match cli::run() {
        Ok(result) => {
            info!("walfox finished successfully");
            Ok(result)
        }
        Err(err) => {
            error!(error = ?err, "walfox failed");
            Err(err)
        }
    }
}
