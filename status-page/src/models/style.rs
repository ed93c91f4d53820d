use serde::Serialize;

/// Symbolic name of a styled node on the page.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Page,
    Hero,
    Title,
    Subtitle,
    Badges,
    Badge,
    Cards,
    Card,
    Status,
    Footer,
    FooterNote,
}

impl Region {
    pub const ALL: [Region; 11] = [
        Region::Page,
        Region::Hero,
        Region::Title,
        Region::Subtitle,
        Region::Badges,
        Region::Badge,
        Region::Cards,
        Region::Card,
        Region::Status,
        Region::Footer,
        Region::FooterNote,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Region::Page => "page",
            Region::Hero => "hero",
            Region::Title => "title",
            Region::Subtitle => "subtitle",
            Region::Badges => "badges",
            Region::Badge => "badge",
            Region::Cards => "cards",
            Region::Card => "card",
            Region::Status => "status",
            Region::Footer => "footer",
            Region::FooterNote => "footer_note",
        }
    }

    /// Inline CSS for this region, ready for a `style` attribute.
    pub fn css(self) -> String {
        self.style().to_css()
    }
}

/// A single `property: value` CSS declaration.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: &'static str,
}

/// The visual attributes attached to a region.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub declarations: &'static [Declaration],
}

impl Style {
    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|d| format!("{}: {}", d.property, d.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn get(&self, property: &str) -> Option<&'static str> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value)
    }
}
