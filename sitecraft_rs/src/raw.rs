//! Raw site records as they come out of the remote store.
//!
//! Every field is optional. Records written by different generations of the
//! admin tooling put the same logical value under different names and
//! locations, so this module only decodes; reconciling the variants is the
//! job of [`crate::normalize`].
//!
//! Decoding is lenient: a nested value of the wrong shape decodes as absent
//! and one bad list entry is dropped instead of failing the whole record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level record stored at `projects/{id}/website/config`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSiteRecord {
    #[serde(deserialize_with = "lenient::text")]
    pub niche: Option<String>,
    #[serde(deserialize_with = "lenient::value")]
    pub settings: Option<RawSettings>,
    #[serde(deserialize_with = "lenient::value")]
    pub homepage: Option<RawHomepage>,
    /// Either a plain array or the embedded `{ "items": [...] }` shape.
    #[serde(deserialize_with = "lenient::services")]
    pub services: Vec<RawService>,
    #[serde(deserialize_with = "lenient::value")]
    pub about: Option<RawAbout>,
    #[serde(deserialize_with = "lenient::value")]
    pub contact: Option<RawContact>,
    #[serde(deserialize_with = "lenient::value")]
    pub seo: Option<RawSeo>,
    #[serde(deserialize_with = "lenient::value")]
    pub social_media: Option<RawSocialMedia>,
    #[serde(deserialize_with = "lenient::value")]
    pub theme: Option<RawTheme>,
    #[serde(deserialize_with = "lenient::value")]
    pub whatsapp: Option<RawWhatsApp>,
    #[serde(deserialize_with = "lenient::value")]
    pub header: Option<RawHeader>,
    #[serde(deserialize_with = "lenient::list")]
    pub pricing_tiers: Vec<Value>,
    #[serde(deserialize_with = "lenient::optional_list")]
    pub reviews: Option<Vec<Value>>,
    #[serde(deserialize_with = "lenient::optional_list")]
    pub faqs: Option<Vec<RawFaq>>,
    #[serde(deserialize_with = "lenient::text")]
    pub selected_template: Option<String>,
}

impl RawSiteRecord {
    /// Decode a record from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSettings {
    #[serde(deserialize_with = "lenient::text")]
    pub business_name: Option<String>,
    /// Legacy name of `business_name`.
    #[serde(deserialize_with = "lenient::text")]
    pub site_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub website_title: Option<String>,
    /// Legacy name of `website_title`, also the SEO title fallback.
    #[serde(deserialize_with = "lenient::text")]
    pub seo_title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub seo_description: Option<String>,
    #[serde(deserialize_with = "lenient::optional_texts")]
    pub seo_keywords: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::text")]
    pub primary_color: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub secondary_color: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub gradient_type: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub logo_url: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub logo: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub favicon_url: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub favicon: Option<String>,
    #[serde(deserialize_with = "lenient::value")]
    pub social_media: Option<RawSocialMedia>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawHomepage {
    #[serde(deserialize_with = "lenient::text")]
    pub hero_heading: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub hero_subtext: Option<String>,
    /// Legacy name of `hero_subtext`.
    #[serde(deserialize_with = "lenient::text")]
    pub hero_tagline: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub hero_image_url: Option<String>,
    /// Legacy name of `hero_image_url`.
    #[serde(deserialize_with = "lenient::text")]
    pub hero_image: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub cta_text: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub cta2_text: Option<String>,
    #[serde(deserialize_with = "lenient::optional_list")]
    pub portfolio_items: Option<Vec<RawPortfolioItem>>,
    /// Already-shaped slides, as returned by the remote procedure.
    #[serde(deserialize_with = "lenient::optional_list")]
    pub hero_slides: Option<Vec<RawHeroSlide>>,
    #[serde(deserialize_with = "lenient::list")]
    pub testimonials: Vec<RawTestimonial>,
    #[serde(deserialize_with = "lenient::optional_list")]
    pub faqs: Option<Vec<RawFaq>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPortfolioItem {
    #[serde(deserialize_with = "lenient::text")]
    pub slide_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawHeroSlide {
    #[serde(deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub content: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawTestimonial {
    #[serde(deserialize_with = "lenient::text")]
    pub customer_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub feedback: Option<String>,
    #[serde(deserialize_with = "lenient::integer")]
    pub rating: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFaq {
    #[serde(deserialize_with = "lenient::text")]
    pub question: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub answer: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawService {
    #[serde(deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub short_desc: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub icon_url: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub price: Option<String>,
    #[serde(deserialize_with = "lenient::texts")]
    pub features: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub youtube_url: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub whatsapp_message: Option<String>,
}

/// Core values as a nested object. The same three fields may also appear
/// flattened on [`RawAbout`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCoreValues {
    #[serde(deserialize_with = "lenient::text")]
    pub innovation: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub excellence: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub trust: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawAbout {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub intro_image_url: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub mission: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub vision: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub why_choose: Option<String>,
    #[serde(deserialize_with = "lenient::value")]
    pub core_values: Option<RawCoreValues>,
    #[serde(deserialize_with = "lenient::text")]
    pub innovation: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub excellence: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub trust: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSocialMedia {
    #[serde(deserialize_with = "lenient::text")]
    pub facebook: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub instagram: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub linkedin: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub twitter: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub youtube: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawContact {
    #[serde(deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub google_maps_url: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub banner_image: Option<String>,
    #[serde(deserialize_with = "lenient::value")]
    pub social_media: Option<RawSocialMedia>,
    /// Legacy location of the WhatsApp number.
    #[serde(deserialize_with = "lenient::text")]
    pub whatsapp: Option<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub custom_fields: Vec<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSeo {
    #[serde(deserialize_with = "lenient::text")]
    pub meta_title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub meta_description: Option<String>,
    #[serde(deserialize_with = "lenient::optional_texts")]
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTheme {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::value")]
    pub colors: Option<RawThemeColors>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawThemeColors {
    #[serde(deserialize_with = "lenient::text")]
    pub primary: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub secondary: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub accent: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub background: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub text_light: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawWhatsApp {
    #[serde(deserialize_with = "lenient::text")]
    pub phone_number: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub default_message: Option<String>,
    #[serde(deserialize_with = "lenient::value")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawHeader {
    #[serde(deserialize_with = "lenient::text")]
    pub logo_url: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient::texts")]
    pub menu: Vec<String>,
}

/// Field deserializers that never reject a record.
///
/// Each one reads a `serde_json::Value` first and only keeps it when it has
/// the expected shape.
pub(crate) mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::RawService;

    /// Strings pass through, numbers and booleans are stringified, the rest
    /// is dropped.
    pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(scalar_text))
    }

    pub(crate) fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.round() as i64)),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok().map(|f| f.round() as i64),
            _ => None,
        })
    }

    pub(crate) fn value<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(|v| serde_json::from_value(v).ok()))
    }

    /// Keep every list entry that decodes, in source order.
    pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(entries(value))
    }

    /// Like [`list`], but a missing or non-array value stays `None` so the
    /// normalizer can fall through to the next location.
    pub(crate) fn optional_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(items @ Value::Array(_)) => Some(entries(Some(items))),
            _ => None,
        })
    }

    pub(crate) fn optional_texts<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Array(items)) => Some(items.iter().filter_map(scalar_text).collect()),
            _ => None,
        })
    }

    pub(crate) fn texts<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
            _ => Vec::new(),
        })
    }

    /// Services are stored either as an array or as `{ "items": [...] }`.
    pub(crate) fn services<'de, D>(deserializer: D) -> Result<Vec<RawService>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Object(mut map)) => entries(map.remove("items")),
            other => entries(other),
        })
    }

    fn entries<T: DeserializeOwned>(value: Option<Value>) -> Vec<T> {
        match value {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
            _ => Vec::new(),
        }
    }

    fn scalar_text(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}
