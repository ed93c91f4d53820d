//! Tests for the static HTML export and tree dumps

use status_page::export::{dump_tree, style_table, write_document};
use status_page::{
    document_title, escape_attribute, escape_text, render_document, render_fragment, render_page,
    strip_leading_emoji, DumpFormat, Node, Region, Tag,
};

#[test]
fn document_is_deterministic() {
    let first = render_document(&render_page());
    let second = render_document(&render_page());
    assert_eq!(first, second);
}

#[test]
fn document_wraps_fragment() {
    let root = render_page();
    let document = render_document(&root);

    assert!(document.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert!(document.contains("<meta charset=\"utf-8\">"));
    assert!(document.contains("<title>7 - Tire React Application</title>"));
    assert!(document.contains(&render_fragment(&root)));
    assert!(document.trim_end().ends_with("</html>"));
}

#[test]
fn fragment_contains_literal_status_values() {
    let html = render_fragment(&render_page());

    for value in ["RUNNING", "PRODUCTION", "ap-south-1"] {
        assert!(
            html.contains(&format!("<strong>{}</strong>", value)),
            "missing status value {}",
            value
        );
    }
    for badge in ["Production Ready", "Secure", "Scalable"] {
        assert!(html.contains(badge), "missing badge {}", badge);
    }
}

#[test]
fn fragment_inlines_region_styles() {
    let html = render_fragment(&render_page());

    assert!(html.starts_with(&format!("<div style=\"{}\">", Region::Page.css())));
    for region in Region::ALL {
        assert!(
            html.contains(&format!("style=\"{}\"", escape_attribute(&region.css()))),
            "no inline style for {}",
            region.name()
        );
    }
    assert_eq!(html.matches("<li>").count(), 7);
}

#[test]
fn escaping() {
    assert_eq!(escape_text("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
    assert_eq!(escape_attribute("say \"hi\" & go"), "say &quot;hi&quot; &amp; go");
    assert_eq!(escape_text("React • AWS • Linux"), "React • AWS • Linux");
}

#[test]
fn write_document_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("dist/nested/index.html");

    let written = write_document(&output, true).expect("export succeeds");

    let content = std::fs::read_to_string(&output).expect("exported file exists");
    assert_eq!(written, content.len());
    assert_eq!(content, render_document(&render_page()));
}

#[test]
fn json_dump_parses_back() {
    let dumped = dump_tree(DumpFormat::Json).expect("json dump");
    let value: serde_json::Value = serde_json::from_str(&dumped).expect("valid json");

    assert_eq!(value["kind"], "element");
    assert_eq!(value["tag"], "div");
    assert_eq!(value["region"], "page");
    let children = value["children"].as_array().expect("children array");
    assert_eq!(children.len(), 4);
    assert_eq!(children[2]["region"], "status");
}

#[test]
fn toml_dump_parses_back() {
    let dumped = dump_tree(DumpFormat::Toml).expect("toml dump");
    let table: toml::Table = toml::from_str(&dumped).expect("valid toml");

    assert_eq!(table.get("region").and_then(|v| v.as_str()), Some("page"));
    let children = table
        .get("children")
        .and_then(|v| v.as_array())
        .expect("children array");
    assert_eq!(children.len(), 4);
}

#[test]
fn html_dump_matches_fragment() {
    let dumped = dump_tree(DumpFormat::Html).expect("html dump");
    assert_eq!(dumped, render_fragment(&render_page()));
}

#[test]
fn style_table_lists_every_region() {
    let table = style_table();
    let lines: Vec<_> = table.lines().collect();

    assert_eq!(lines.len(), Region::ALL.len());
    assert!(lines[0].starts_with("page: min-height: 100vh"));
    assert!(lines.contains(&"footer_note: font-size: 13px; color: #94a3b8"));
}

/// Titles and what the document `<title>` shows for them
const TITLE_CASES: &[(&str, &str)] = &[
    ("🚀 7 - Tire React Application", "7 - Tire React Application"),
    ("⚙️ Deployment Stack", "Deployment Stack"),
    ("\"Quoted\" launch", "\"Quoted\" launch"),
    ("(beta) release", "(beta) release"),
    ("Überblick", "Überblick"),
    ("Plain title", "Plain title"),
];

#[test]
fn leading_emoji_is_the_only_thing_stripped() {
    for (title, expected) in TITLE_CASES {
        assert_eq!(strip_leading_emoji(title), *expected, "{}", title);
    }
}

#[test]
fn document_title_comes_from_the_given_tree() {
    let root = Node::styled(
        Tag::Div,
        Region::Page,
        vec![Node::styled(
            Tag::H1,
            Region::Title,
            vec![Node::text("📦 Release <notes>")],
        )],
    );

    assert_eq!(document_title(&root), "Release <notes>");
    assert!(render_document(&root).contains("<title>Release &lt;notes&gt;</title>"));
}

#[test]
fn document_without_title_region_has_empty_title() {
    let root = Node::styled(Tag::Div, Region::Page, vec![Node::text("bare")]);

    assert_eq!(document_title(&root), "");
    assert!(render_document(&root).contains("<title></title>"));
}
