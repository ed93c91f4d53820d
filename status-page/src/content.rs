//! Everything the page says, fixed at compile time.

/// The body of an informational card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardBody {
    List(&'static [&'static str]),
    Paragraph(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub heading: &'static str,
    pub body: CardBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub badges: [&'static str; 3],
}

/// A label followed by an emphasized value, e.g. "Region: " / "ap-south-1".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEntry {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    pub credit_prefix: &'static str,
    pub credit_name: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub hero: Hero,
    pub cards: [Card; 3],
    pub status: [StatusEntry; 3],
    pub footer: Footer,
}

pub const PAGE: Page = Page {
    hero: Hero {
        title: "🚀 7 - Tire React Application",
        subtitle: "Enterprise-grade frontend deployment on AWS",
        badges: ["Production Ready", "Secure", "Scalable"],
    },
    cards: [
        Card {
            heading: "⚙️ Deployment Stack",
            body: CardBody::List(&[
                "React (Production Build)",
                "Git hub",
                "AWS EC2 (Ubuntu)",
                "Linux",
            ]),
        },
        Card {
            heading: "🧠 Architecture",
            body: CardBody::Paragraph(
                "React is built into static files for high performance and low runtime overhead.",
            ),
        },
        Card {
            heading: "🔐 DevOps Best Practices",
            body: CardBody::List(&[
                "No Node.js in production",
                "Stateless frontend",
                "Easy CI/CD integration",
            ]),
        },
    ],
    status: [
        StatusEntry {
            label: "🟢 Server Status: ",
            value: "RUNNING",
        },
        StatusEntry {
            label: "📦 Build Mode: ",
            value: "PRODUCTION",
        },
        StatusEntry {
            label: "🌍 Region: ",
            value: "ap-south-1",
        },
    ],
    footer: Footer {
        credit_prefix: "Deployed by ",
        credit_name: "Sohail DevOps Engineer",
        note: "React • AWS • Linux",
    },
};
