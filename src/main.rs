mod cli;
mod commands;
mod page_range;
mod pdf;
mod selection;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            path,
            pages,
            output,
        } => {
            commands::extract::run(&path, &pages, output.as_deref())?;
        }
        Commands::Pick { path } => {
            commands::pick::run(&path).await?;
        }
        Commands::Info { path } => {
            commands::info::run(&path)?;
        }
    }

    Ok(())
}
