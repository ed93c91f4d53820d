use crate::config::DOCUMENT_LANG;
use crate::models::{Node, Region};

/// Escapes text content for use between tags.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a value for use inside a double-quoted attribute.
pub fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// Serializes a node and its descendants, with each region's style inlined.
pub fn render_fragment(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text { text } => out.push_str(&escape_text(text)),
        Node::Element {
            tag,
            region,
            children,
        } => {
            out.push('<');
            out.push_str(tag.as_str());
            if let Some(region) = region {
                out.push_str(" style=\"");
                out.push_str(&escape_attribute(&region.css()));
                out.push('"');
            }
            out.push('>');
            for child in children {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(tag.as_str());
            out.push('>');
        }
    }
}

/// Drops a leading emoji and the whitespace after it, e.g. "🚀 Launch" -> "Launch".
///
/// Only a run of non-ASCII characters followed by whitespace counts as an emoji
/// prefix; anything else is returned unchanged.
pub fn strip_leading_emoji(title: &str) -> &str {
    let rest = title.trim_start_matches(|c: char| !c.is_ascii());
    if rest.len() < title.len() && rest.starts_with(char::is_whitespace) {
        rest.trim_start()
    } else {
        title
    }
}

/// Text for `<title>`, taken from the first `title` region under `root`.
pub fn document_title(root: &Node) -> String {
    root.find_all(Region::Title)
        .first()
        .map(|node| strip_leading_emoji(&node.text_content()).to_string())
        .unwrap_or_default()
}

/// Wraps the fragment for `root` in a complete HTML5 document.
pub fn render_document(root: &Node) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"{lang}\">\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "<title>{title}</title>\n",
            "</head>\n",
            "<body>\n",
            "{body}\n",
            "</body>\n",
            "</html>\n",
        ),
        lang = DOCUMENT_LANG,
        title = escape_text(&document_title(root)),
        body = render_fragment(root),
    )
}
