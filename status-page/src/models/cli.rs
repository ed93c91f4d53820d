use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::DEFAULT_OUTPUT_PATH;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Show detailed progress information
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the page as a standalone HTML document
    Export {
        /// Destination file, parent directories are created as needed
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,
    },
    /// Print the display tree to stdout
    Dump {
        #[arg(short, long, value_enum, default_value_t = DumpFormat::Json)]
        format: DumpFormat,
    },
    /// Print the style table, one region per line
    Styles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    Json,
    Toml,
    Html,
}
