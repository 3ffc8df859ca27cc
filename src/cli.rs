use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfpick")]
#[command(about = "Pick pages out of a PDF into a new file")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the pages matching an expression to a new PDF
    #[command(alias = "cat")]
    Extract {
        /// PDF file to extract from
        path: PathBuf,

        /// Page expression (e.g., "1-5,8,11-12")
        pages: String,

        /// Output file (defaults to a name embedding the selected pages)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Choose pages interactively, then write them out
    Pick {
        /// PDF file to pick from
        path: PathBuf,
    },

    /// Show the page count of a PDF
    Info {
        /// PDF file to inspect
        path: PathBuf,
    },
}
