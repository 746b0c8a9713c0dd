//! Site copy. Lives in `content/site.json` and is compiled into the binary.

use serde::Deserialize;
use thiserror::Error;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("site content has no {0}")]
    Missing(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Calendar,
    Users,
    Globe,
    Clock,
    Target,
    Bolt,
    Heart,
    Truck,
    Shield,
    MapPin,
    Envelope,
    Phone,
    Chat,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Calendar => "📅",
            Icon::Users => "👥",
            Icon::Globe => "🌍",
            Icon::Clock => "🕒",
            Icon::Target => "🎯",
            Icon::Bolt => "⚡",
            Icon::Heart => "❤",
            Icon::Truck => "🚚",
            Icon::Shield => "🛡",
            Icon::MapPin => "📍",
            Icon::Envelope => "✉",
            Icon::Phone => "📞",
            Icon::Chat => "💬",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteContent {
    pub brand: String,
    pub hero: Hero,
    pub stats: Vec<Stat>,
    pub about: About,
    pub services: Services,
    pub contact: Contact,
    pub faq: Faq,
    pub footer: Footer,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Hero {
    pub tagline: String,
    pub subtitle: String,
    pub qualities: Vec<String>,
    pub badge: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
    pub icon: Icon,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct About {
    pub heading: String,
    pub lead: String,
    pub paragraphs: Vec<String>,
    pub pillars: Vec<Card>,
}

/// Icon, title and a paragraph. Used for the about pillars.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Card {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Services {
    pub heading: String,
    pub intro: String,
    pub offerings: Vec<Offering>,
    pub highlights_heading: String,
    pub highlights: Vec<Highlight>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Offering {
    pub icon: Icon,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Highlight {
    /// Emoji shown above the title.
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub intro: String,
    pub channels: Vec<Channel>,
    pub social_heading: String,
    pub social_handle: String,
    pub social_networks: Vec<String>,
}

impl Contact {
    /// `(network, profile url)` pairs, e.g. `https://tiktok.com/mamdelivery`.
    pub fn social_links(&self) -> Vec<(String, String)> {
        self.social_networks
            .iter()
            .map(|network| {
                let url = format!(
                    "https://{}.com/{}",
                    network.to_lowercase(),
                    self.social_handle
                );
                (network.clone(), url)
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Channel {
    pub icon: Icon,
    pub title: String,
    pub info: String,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Faq {
    pub heading: String,
    pub entries: Vec<FaqEntry>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Footer {
    pub statement: String,
    pub motto: String,
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        Self::parse(SITE_JSON)
    }

    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        if content.stats.is_empty() {
            return Err(ContentError::Missing("stats"));
        }
        if content.services.offerings.is_empty() {
            return Err(ContentError::Missing("services"));
        }
        if content.contact.channels.is_empty() {
            return Err(ContentError::Missing("contact channels"));
        }
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_loads() {
        let content = SiteContent::load().expect("embedded content should parse");
        assert_eq!(content.brand, "MAM Delivery");
        assert_eq!(content.stats.len(), 4);
        assert_eq!(content.about.pillars.len(), 3);
        assert_eq!(content.services.offerings.len(), 4);
        assert!(content
            .services
            .offerings
            .iter()
            .all(|offering| offering.features.len() == 3));
        assert_eq!(content.faq.entries.len(), 4);
    }

    #[test]
    fn channels_without_links() {
        let content = SiteContent::load().expect("embedded content should parse");
        let location = &content.contact.channels[0];
        assert_eq!(location.icon, Icon::MapPin);
        assert_eq!(location.href, None);
        let whatsapp = content
            .contact
            .channels
            .iter()
            .find(|c| c.title == "WhatsApp")
            .expect("whatsapp channel");
        assert_eq!(whatsapp.href.as_deref(), Some("https://wa.me/97141234567"));
    }

    #[test]
    fn social_links_use_lowercase_network() {
        let content = SiteContent::load().expect("embedded content should parse");
        let links = content.contact.social_links();
        assert_eq!(links.len(), 4);
        assert_eq!(
            links[2],
            ("TikTok".to_string(), "https://tiktok.com/mamdelivery".to_string())
        );
    }

    #[test]
    fn malformed_content_is_rejected() {
        assert!(matches!(
            SiteContent::parse("{\"brand\": 3}"),
            Err(ContentError::Malformed(_))
        ));
    }

    #[test]
    fn empty_services_are_rejected() {
        let mut value: serde_json::Value =
            serde_json::from_str(SITE_JSON).expect("embedded content is json");
        value["services"]["offerings"] = serde_json::json!([]);
        let err = SiteContent::parse(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Missing("services")));
    }
}
