use crate::content::{Card, CardBody, Footer, Hero, StatusEntry, PAGE};
use crate::models::{Node, Region, Tag};

/// Builds the full page tree from the static content.
///
/// Takes no input and has no side effects; every call returns an equal tree.
/// The root is the `page` region with exactly four children, in order:
/// hero, cards, status, footer.
pub fn render_page() -> Node {
    Node::styled(
        Tag::Div,
        Region::Page,
        vec![
            hero(&PAGE.hero),
            cards(&PAGE.cards),
            status(&PAGE.status),
            footer(&PAGE.footer),
        ],
    )
}

fn hero(hero: &Hero) -> Node {
    let badges = hero
        .badges
        .iter()
        .map(|label| Node::styled(Tag::Span, Region::Badge, vec![Node::text(*label)]))
        .collect();

    Node::styled(
        Tag::Header,
        Region::Hero,
        vec![
            Node::styled(Tag::H1, Region::Title, vec![Node::text(hero.title)]),
            Node::styled(Tag::P, Region::Subtitle, vec![Node::text(hero.subtitle)]),
            Node::styled(Tag::Div, Region::Badges, badges),
        ],
    )
}

fn cards(cards: &[Card]) -> Node {
    Node::styled(
        Tag::Section,
        Region::Cards,
        cards.iter().map(card).collect(),
    )
}

fn card(card: &Card) -> Node {
    let body = match card.body {
        CardBody::List(items) => Node::element(
            Tag::Ul,
            items
                .iter()
                .map(|item| Node::element(Tag::Li, vec![Node::text(*item)]))
                .collect(),
        ),
        CardBody::Paragraph(text) => Node::element(Tag::P, vec![Node::text(text)]),
    };

    Node::styled(
        Tag::Div,
        Region::Card,
        vec![Node::element(Tag::H3, vec![Node::text(card.heading)]), body],
    )
}

fn status(entries: &[StatusEntry]) -> Node {
    Node::styled(
        Tag::Section,
        Region::Status,
        entries
            .iter()
            .map(|entry| {
                Node::element(
                    Tag::Div,
                    vec![
                        Node::text(entry.label),
                        Node::element(Tag::Strong, vec![Node::text(entry.value)]),
                    ],
                )
            })
            .collect(),
    )
}

fn footer(footer: &Footer) -> Node {
    Node::styled(
        Tag::Footer,
        Region::Footer,
        vec![
            Node::element(
                Tag::P,
                vec![
                    Node::text(footer.credit_prefix),
                    Node::element(Tag::Strong, vec![Node::text(footer.credit_name)]),
                ],
            ),
            Node::styled(Tag::P, Region::FooterNote, vec![Node::text(footer.note)]),
        ],
    )
}
