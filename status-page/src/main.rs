use anyhow::Result;
use clap::Parser;
use std::path::Path;

use status_page::export::{dump_tree, style_table, write_document};
use status_page::{Cli, Commands, DEFAULT_OUTPUT_PATH};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Export { output }) => {
            write_document(&output, cli.verbose)?;
        }
        Some(Commands::Dump { format }) => {
            println!("{}", dump_tree(format)?);
        }
        Some(Commands::Styles) => {
            println!("{}", style_table());
        }
        None => {
            write_document(Path::new(DEFAULT_OUTPUT_PATH), cli.verbose)?;
        }
    }

    Ok(())
}
