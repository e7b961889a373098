//! The canonical site content snapshot.
//!
//! A [`SiteSnapshot`] is built once per page load by
//! [`crate::normalize::normalize`] and never mutated afterwards. Every field
//! holds either real content or a defined default, so renderers can consume
//! it without any fallback logic of their own.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::nav::NavItem;

/// Fully normalized content for one page load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSnapshot {
    pub niche: Option<String>,
    pub settings: Settings,
    pub theme: Theme,
    pub homepage: Homepage,
    pub services: Vec<Service>,
    pub about: About,
    pub contact: Contact,
    pub seo: Seo,
    pub social_media: SocialMedia,
    pub whatsapp: WhatsApp,
    pub header: Header,
    pub faqs: Vec<Faq>,
    pub pricing_tiers: Vec<Value>,
    pub reviews: Vec<Value>,
    pub selected_template: Option<String>,
}

/// Gradient shape used for the `--gradient` style variable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientType {
    #[default]
    Linear,
    Radial,
}

impl GradientType {
    /// Anything other than `radial` is treated as linear.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("radial") {
            Self::Radial
        } else {
            Self::Linear
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub business_name: String,
    pub website_title: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub gradient_type: GradientType,
    pub logo_url: String,
    pub favicon_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
    pub text_light: String,
}

/// Named palette with six colour roles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

impl Theme {
    /// Colour roles keyed by their style-variable suffix, in a fixed order.
    pub fn roles(&self) -> [(&'static str, &str); 6] {
        let c = &self.colors;
        [
            ("primary", c.primary.as_str()),
            ("secondary", c.secondary.as_str()),
            ("accent", c.accent.as_str()),
            ("background", c.background.as_str()),
            ("text", c.text.as_str()),
            ("textLight", c.text_light.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub customer_name: String,
    pub feedback: String,
    pub rating: i64,
}

impl Testimonial {
    /// Rating clamped to the 1–5 star range used for display.
    pub fn stars(&self) -> u8 {
        self.rating.clamp(1, 5) as u8
    }

    /// Upper-cased first letter of the customer name, for avatars.
    pub fn initial(&self) -> String {
        self.customer_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Homepage {
    pub hero_heading: String,
    pub hero_subtext: String,
    pub hero_image_url: String,
    pub cta_text: String,
    pub cta2_text: String,
    pub hero_slides: Vec<HeroSlide>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub short_desc: String,
    pub description: String,
    pub image: Option<String>,
    pub price: Option<String>,
    pub features: Vec<String>,
    pub youtube_url: Option<String>,
    pub whatsapp_message: Option<String>,
}

impl Service {
    /// Outbound `wa.me` link for an inquiry about this service.
    ///
    /// Uses the stored message template when present.
    pub fn inquiry_url(&self, phone_number: &str) -> Option<String> {
        let number: String = phone_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        if number.is_empty() {
            return None;
        }
        let message = match self.whatsapp_message.as_deref() {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => format!(
                "Hello! I'm interested in {}. Please share more details.",
                self.name
            ),
        };
        Some(format!(
            "https://wa.me/{}?text={}",
            number,
            urlencoding::encode(&message)
        ))
    }
}

/// The three core values. Each is optional; the section itself is absent
/// from [`About`] when all three are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreValues {
    pub innovation: Option<String>,
    pub excellence: Option<String>,
    pub trust: Option<String>,
}

impl CoreValues {
    pub fn is_empty(&self) -> bool {
        self.innovation.is_none() && self.excellence.is_none() && self.trust.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub intro_image_url: Option<String>,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub why_choose: Option<String>,
    pub core_values: Option<CoreValues>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialMedia {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
}

impl SocialMedia {
    /// Present handles as `(label, url)` pairs in display order.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Facebook", &self.facebook),
            ("Instagram", &self.instagram),
            ("LinkedIn", &self.linkedin),
            ("Twitter", &self.twitter),
            ("YouTube", &self.youtube),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.as_deref().map(|u| (label, u)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.links().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub google_maps_url: Option<String>,
    pub banner_image: Option<String>,
    pub social_media: SocialMedia,
    pub custom_fields: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seo {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsApp {
    pub phone_number: String,
    pub default_message: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Header logo, falling back to the settings logo.
    pub logo_url: String,
    /// Brand title, falling back to the business name.
    pub title: String,
    pub subtitle: Option<String>,
    /// Menu labels exactly as stored.
    pub menu: Vec<String>,
    /// Menu labels mapped to section anchors.
    pub navigation: Vec<NavItem>,
}
