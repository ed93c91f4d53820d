use serde::Serialize;

use super::Region;

/// HTML tags used by the page.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Div,
    Header,
    Section,
    Footer,
    H1,
    H3,
    P,
    Span,
    Ul,
    Li,
    Strong,
}

impl Tag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Header => "header",
            Tag::Section => "section",
            Tag::Footer => "footer",
            Tag::H1 => "h1",
            Tag::H3 => "h3",
            Tag::P => "p",
            Tag::Span => "span",
            Tag::Ul => "ul",
            Tag::Li => "li",
            Tag::Strong => "strong",
        }
    }
}

/// An element in the rendered output tree.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Element {
        tag: Tag,
        #[serde(skip_serializing_if = "Option::is_none")]
        region: Option<Region>,
        children: Vec<Node>,
    },
    Text {
        text: &'static str,
    },
}

impl Node {
    pub fn element(tag: Tag, children: Vec<Node>) -> Self {
        Node::Element {
            tag,
            region: None,
            children,
        }
    }

    pub fn styled(tag: Tag, region: Region, children: Vec<Node>) -> Self {
        Node::Element {
            tag,
            region: Some(region),
            children,
        }
    }

    pub fn text(text: &'static str) -> Self {
        Node::Text { text }
    }

    pub fn tag(&self) -> Option<Tag> {
        match self {
            Node::Element { tag, .. } => Some(*tag),
            Node::Text { .. } => None,
        }
    }

    pub fn region(&self) -> Option<Region> {
        match self {
            Node::Element { region, .. } => *region,
            Node::Text { .. } => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text { .. } => &[],
        }
    }

    /// All text below this node, concatenated in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(text),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Pre-order search for every node attached to `region`.
    pub fn find_all(&self, region: Region) -> Vec<&Node> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if node.region() == Some(region) {
                found.push(node);
            }
        });
        found
    }

    /// Visits this node and all descendants in document order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}
