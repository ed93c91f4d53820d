//! The style table: every region maps to a fixed set of CSS declarations.
//!
//! Lookup goes through an exhaustive `match`, so adding a `Region` without a
//! table entry is a compile error.

use crate::models::{Declaration, Region, Style};

const fn decl(property: &'static str, value: &'static str) -> Declaration {
    Declaration { property, value }
}

const PAGE: &[Declaration] = &[
    decl("min-height", "100vh"),
    decl("background", "linear-gradient(135deg, #020617, #020617)"),
    decl("color", "#e5e7eb"),
    decl("font-family", "Inter, Arial, sans-serif"),
];

const HERO: &[Declaration] = &[
    decl("text-align", "center"),
    decl("padding", "80px 20px 60px"),
];

const TITLE: &[Declaration] = &[
    decl("font-size", "52px"),
    decl("font-weight", "700"),
    decl("margin-bottom", "15px"),
];

const SUBTITLE: &[Declaration] = &[decl("font-size", "20px"), decl("color", "#94a3b8")];

const BADGES: &[Declaration] = &[
    decl("margin-top", "30px"),
    decl("display", "flex"),
    decl("justify-content", "center"),
    decl("gap", "15px"),
    decl("flex-wrap", "wrap"),
];

const BADGE: &[Declaration] = &[
    decl("background", "#0f172a"),
    decl("padding", "8px 16px"),
    decl("border-radius", "20px"),
    decl("font-size", "14px"),
    decl("border", "1px solid #1e293b"),
];

// Columns are at least 260px wide and auto-fill the row, collapsing on narrow screens.
const CARDS: &[Declaration] = &[
    decl("display", "grid"),
    decl("grid-template-columns", "repeat(auto-fit, minmax(260px, 1fr))"),
    decl("gap", "25px"),
    decl("padding", "0 40px 60px"),
    decl("max-width", "1100px"),
    decl("margin", "auto"),
];

const CARD: &[Declaration] = &[
    decl("background", "#020617"),
    decl("border-radius", "14px"),
    decl("padding", "25px"),
    decl("box-shadow", "0 10px 30px rgba(0,0,0,0.4)"),
];

const STATUS: &[Declaration] = &[
    decl("display", "flex"),
    decl("justify-content", "space-around"),
    decl("background", "#020617"),
    decl("padding", "25px"),
    decl("margin", "0 40px"),
    decl("border-radius", "12px"),
    decl("font-size", "15px"),
];

const FOOTER: &[Declaration] = &[
    decl("text-align", "center"),
    decl("padding", "40px 20px"),
    decl("border-top", "1px solid #1e293b"),
    decl("margin-top", "60px"),
];

const FOOTER_NOTE: &[Declaration] = &[decl("font-size", "13px"), decl("color", "#94a3b8")];

impl Region {
    pub const fn style(self) -> Style {
        let declarations = match self {
            Region::Page => PAGE,
            Region::Hero => HERO,
            Region::Title => TITLE,
            Region::Subtitle => SUBTITLE,
            Region::Badges => BADGES,
            Region::Badge => BADGE,
            Region::Cards => CARDS,
            Region::Card => CARD,
            Region::Status => STATUS,
            Region::Footer => FOOTER,
            Region::FooterNote => FOOTER_NOTE,
        };
        Style { declarations }
    }
}
