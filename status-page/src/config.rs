/// Where `export` writes the document when no `--output` is given.
pub const DEFAULT_OUTPUT_PATH: &str = "dist/index.html";

/// Value of the `lang` attribute on the exported `<html>` element.
pub const DOCUMENT_LANG: &str = "en";
