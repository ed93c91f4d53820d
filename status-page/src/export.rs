use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::models::{DumpFormat, Region};
use crate::render::{render_document, render_fragment, render_page};

/// Renders the page and writes it to `output` as a standalone HTML document.
///
/// Returns the number of bytes written.
pub fn write_document(output: &Path, verbose: bool) -> Result<usize> {
    println!("📝 Rendering page...");
    let root = render_page();
    let html = render_document(&root);

    if verbose {
        println!(
            "📊 {} top-level regions, {} bytes of HTML",
            root.children().len(),
            html.len()
        );
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
    }

    fs::write(output, &html).with_context(|| format!("Failed to write page: {:?}", output))?;
    println!("✅ Static page written to {}", output.display());

    Ok(html.len())
}

/// Serializes the display tree in the requested format.
pub fn dump_tree(format: DumpFormat) -> Result<String> {
    let root = render_page();
    let dumped = match format {
        DumpFormat::Json => {
            serde_json::to_string_pretty(&root).context("Failed to serialize tree as JSON")?
        }
        DumpFormat::Toml => toml::to_string(&root).context("Failed to serialize tree as TOML")?,
        DumpFormat::Html => render_fragment(&root),
    };
    Ok(dumped)
}

/// The style table as `region: css` lines, in declaration order.
pub fn style_table() -> String {
    Region::ALL
        .iter()
        .map(|region| format!("{}: {}", region.name(), region.css()))
        .collect::<Vec<_>>()
        .join("\n")
}
