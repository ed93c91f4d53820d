use leptos::prelude::*;
use status_page::{render_page, Node, Region, Tag};

#[component]
fn App() -> impl IntoView {
    view! { <NodeView node=render_page() /> }
}

/// Renders a display node and everything below it, with region styles inlined.
#[component]
fn NodeView(node: Node) -> impl IntoView {
    node_view(node)
}

fn node_view(node: Node) -> AnyView {
    let (tag, region, children) = match node {
        Node::Text { text } => return text.into_any(),
        Node::Element {
            tag,
            region,
            children,
        } => (tag, region, children),
    };

    // Unstyled nodes get no style attribute at all
    let style = region.map(Region::css);
    let children = children.into_iter().map(node_view).collect::<Vec<_>>();

    match tag {
        Tag::Div => view! { <div style=style>{children}</div> }.into_any(),
        Tag::Header => view! { <header style=style>{children}</header> }.into_any(),
        Tag::Section => view! { <section style=style>{children}</section> }.into_any(),
        Tag::Footer => view! { <footer style=style>{children}</footer> }.into_any(),
        Tag::H1 => view! { <h1 style=style>{children}</h1> }.into_any(),
        Tag::H3 => view! { <h3 style=style>{children}</h3> }.into_any(),
        Tag::P => view! { <p style=style>{children}</p> }.into_any(),
        Tag::Span => view! { <span style=style>{children}</span> }.into_any(),
        Tag::Ul => view! { <ul style=style>{children}</ul> }.into_any(),
        Tag::Li => view! { <li style=style>{children}</li> }.into_any(),
        Tag::Strong => view! { <strong style=style>{children}</strong> }.into_any(),
    }
}

fn main() {
    leptos::mount::mount_to_body(App)
}
