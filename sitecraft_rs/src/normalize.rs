//! Raw record → canonical snapshot.
//!
//! [`normalize`] is total: any [`RawSiteRecord`], including an empty one,
//! produces a fully populated [`SiteSnapshot`]. Each field is resolved from
//! an ordered list of candidate locations; the first present, non-empty
//! candidate wins, otherwise the field's literal default applies.

use chrono::Utc;

use crate::nav::{self, DEFAULT_MENU};
use crate::raw::{
    RawAbout, RawContact, RawHeroSlide, RawPortfolioItem, RawService, RawSiteRecord,
    RawSocialMedia, RawTestimonial,
};
use crate::snapshot::{
    About, Contact, CoreValues, Faq, GradientType, Header, HeroSlide, Homepage, Seo, Service,
    Settings, SiteSnapshot, SocialMedia, Testimonial, Theme, ThemeColors, WhatsApp,
};

pub const DEFAULT_BUSINESS_NAME: &str = "My Business";
pub const DEFAULT_WEBSITE_TITLE: &str = "Welcome";
pub const DEFAULT_PRIMARY_COLOR: &str = "#0066FF";
pub const DEFAULT_SECONDARY_COLOR: &str = "#FFCC00";
pub const DEFAULT_ACCENT_COLOR: &str = "#FF6B6B";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";
pub const DEFAULT_TEXT_COLOR: &str = "#1a1a1a";
pub const DEFAULT_TEXT_LIGHT_COLOR: &str = "#666666";
pub const DEFAULT_THEME_NAME: &str = "default";

/// Short descriptions derived from the long one keep this many characters.
pub const SHORT_DESC_CHARS: usize = 100;

/// Testimonials without a stored rating show full marks.
const DEFAULT_RATING: i64 = 5;

const ACTIVE_STATUS: &str = "active";

/// Normalize using the current time for generated slide ids.
pub fn normalize(raw: &RawSiteRecord) -> SiteSnapshot {
    normalize_at(raw, Utc::now().timestamp_millis())
}

/// Normalize with an explicit timestamp (milliseconds) for generated ids.
pub fn normalize_at(raw: &RawSiteRecord, generated_at_ms: i64) -> SiteSnapshot {
    let settings = settings(raw);
    let social_media = social_media(raw);

    SiteSnapshot {
        niche: text(raw.niche.as_deref()),
        theme: theme(raw),
        homepage: homepage(raw, generated_at_ms),
        services: raw.services.iter().enumerate().map(service).collect(),
        about: raw.about.as_ref().map(about).unwrap_or_default(),
        contact: contact(raw.contact.as_ref(), &social_media),
        seo: seo(raw),
        whatsapp: whatsapp(raw),
        header: header(raw, &settings),
        faqs: faqs(raw),
        pricing_tiers: raw.pricing_tiers.clone(),
        reviews: reviews(raw),
        selected_template: text(raw.selected_template.as_deref()),
        social_media,
        settings,
    }
}

/// First candidate that is present and non-empty.
fn first<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> Option<&'a str> {
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

fn first_or<const N: usize>(candidates: [Option<&str>; N], default: &str) -> String {
    first(candidates).unwrap_or(default).to_string()
}

fn text(value: Option<&str>) -> Option<String> {
    first([value]).map(str::to_string)
}

fn settings(raw: &RawSiteRecord) -> Settings {
    let s = raw.settings.clone().unwrap_or_default();

    Settings {
        business_name: first_or(
            [s.business_name.as_deref(), s.site_name.as_deref()],
            DEFAULT_BUSINESS_NAME,
        ),
        website_title: first_or(
            [s.website_title.as_deref(), s.seo_title.as_deref()],
            DEFAULT_WEBSITE_TITLE,
        ),
        primary_color: first_or([s.primary_color.as_deref()], DEFAULT_PRIMARY_COLOR),
        secondary_color: first_or([s.secondary_color.as_deref()], DEFAULT_SECONDARY_COLOR),
        gradient_type: s
            .gradient_type
            .as_deref()
            .map(GradientType::parse)
            .unwrap_or_default(),
        logo_url: first_or([s.logo_url.as_deref(), s.logo.as_deref()], ""),
        favicon_url: first_or([s.favicon_url.as_deref(), s.favicon.as_deref()], ""),
    }
}

fn theme(raw: &RawSiteRecord) -> Theme {
    let settings = raw.settings.clone().unwrap_or_default();
    let stored = raw.theme.clone().unwrap_or_default();
    let colors = stored.colors.unwrap_or_default();

    Theme {
        name: first_or([stored.name.as_deref()], DEFAULT_THEME_NAME),
        colors: ThemeColors {
            primary: first_or(
                [settings.primary_color.as_deref(), colors.primary.as_deref()],
                DEFAULT_PRIMARY_COLOR,
            ),
            secondary: first_or(
                [
                    settings.secondary_color.as_deref(),
                    colors.secondary.as_deref(),
                ],
                DEFAULT_SECONDARY_COLOR,
            ),
            accent: first_or([colors.accent.as_deref()], DEFAULT_ACCENT_COLOR),
            background: first_or([colors.background.as_deref()], DEFAULT_BACKGROUND_COLOR),
            text: first_or([colors.text.as_deref()], DEFAULT_TEXT_COLOR),
            text_light: first_or([colors.text_light.as_deref()], DEFAULT_TEXT_LIGHT_COLOR),
        },
    }
}

fn homepage(raw: &RawSiteRecord, generated_at_ms: i64) -> Homepage {
    let Some(h) = raw.homepage.as_ref() else {
        return Homepage::default();
    };

    let hero_slides = match (&h.portfolio_items, &h.hero_slides) {
        (Some(items), _) => items
            .iter()
            .filter(|item| item.status.as_deref() == Some(ACTIVE_STATUS))
            .enumerate()
            .map(|(idx, item)| portfolio_slide(item, idx, generated_at_ms))
            .collect(),
        (None, Some(slides)) => slides
            .iter()
            .enumerate()
            .map(|(idx, slide)| shaped_slide(slide, idx, generated_at_ms))
            .collect(),
        (None, None) => Vec::new(),
    };

    Homepage {
        hero_heading: first_or([h.hero_heading.as_deref()], ""),
        hero_subtext: first_or([h.hero_subtext.as_deref(), h.hero_tagline.as_deref()], ""),
        hero_image_url: first_or([h.hero_image_url.as_deref(), h.hero_image.as_deref()], ""),
        cta_text: first_or([h.cta_text.as_deref()], ""),
        cta2_text: first_or([h.cta2_text.as_deref()], ""),
        hero_slides,
        testimonials: h.testimonials.iter().map(testimonial).collect(),
    }
}

fn generated_slide_id(generated_at_ms: i64, idx: usize) -> String {
    format!("slide-{}-{}", generated_at_ms, idx)
}

fn portfolio_slide(item: &RawPortfolioItem, idx: usize, generated_at_ms: i64) -> HeroSlide {
    HeroSlide {
        id: text(item.slide_id.as_deref())
            .unwrap_or_else(|| generated_slide_id(generated_at_ms, idx)),
        title: first_or([item.title.as_deref()], ""),
        content: first_or([item.description.as_deref()], ""),
        image_url: first_or([item.image.as_deref()], ""),
    }
}

fn shaped_slide(slide: &RawHeroSlide, idx: usize, generated_at_ms: i64) -> HeroSlide {
    HeroSlide {
        id: text(slide.id.as_deref()).unwrap_or_else(|| generated_slide_id(generated_at_ms, idx)),
        title: first_or([slide.title.as_deref()], ""),
        content: first_or([slide.content.as_deref()], ""),
        image_url: first_or([slide.image_url.as_deref()], ""),
    }
}

fn testimonial(t: &RawTestimonial) -> Testimonial {
    Testimonial {
        customer_name: first_or([t.customer_name.as_deref()], ""),
        feedback: first_or([t.feedback.as_deref()], ""),
        rating: t.rating.unwrap_or(DEFAULT_RATING),
    }
}

/// Explicit short description, else the first [`SHORT_DESC_CHARS`]
/// characters of the long one.
pub fn short_description(short_desc: Option<&str>, description: Option<&str>) -> String {
    if let Some(short) = first([short_desc]) {
        return short.to_string();
    }
    description
        .map(|d| d.chars().take(SHORT_DESC_CHARS).collect())
        .unwrap_or_default()
}

fn service((idx, s): (usize, &RawService)) -> Service {
    Service {
        id: text(s.id.as_deref()).unwrap_or_else(|| format!("service-{}", idx)),
        name: first_or([s.name.as_deref()], ""),
        short_desc: short_description(s.short_desc.as_deref(), s.description.as_deref()),
        description: first_or([s.description.as_deref()], ""),
        image: first([s.icon.as_deref(), s.icon_url.as_deref()]).map(str::to_string),
        price: text(s.price.as_deref()),
        features: s
            .features
            .iter()
            .filter(|f| !f.is_empty())
            .cloned()
            .collect(),
        youtube_url: text(s.youtube_url.as_deref()),
        whatsapp_message: text(s.whatsapp_message.as_deref()),
    }
}

/// Nested `coreValues` wins over the flattened field of the same name.
pub fn core_values(about: &RawAbout) -> Option<CoreValues> {
    let nested = about.core_values.clone().unwrap_or_default();
    let values = CoreValues {
        innovation: first([nested.innovation.as_deref(), about.innovation.as_deref()])
            .map(str::to_string),
        excellence: first([nested.excellence.as_deref(), about.excellence.as_deref()])
            .map(str::to_string),
        trust: first([nested.trust.as_deref(), about.trust.as_deref()]).map(str::to_string),
    };
    (!values.is_empty()).then_some(values)
}

fn about(a: &RawAbout) -> About {
    About {
        title: first_or([a.title.as_deref()], ""),
        description: first_or([a.description.as_deref()], ""),
        image_url: first([a.image_url.as_deref(), a.image.as_deref()]).map(str::to_string),
        intro_image_url: text(a.intro_image_url.as_deref()),
        mission: text(a.mission.as_deref()),
        vision: text(a.vision.as_deref()),
        why_choose: text(a.why_choose.as_deref()),
        core_values: core_values(a),
    }
}

fn social_set(raw: Option<&RawSocialMedia>) -> Option<SocialMedia> {
    let raw = raw?;
    let social = SocialMedia {
        facebook: text(raw.facebook.as_deref()),
        instagram: text(raw.instagram.as_deref()),
        linkedin: text(raw.linkedin.as_deref()),
        twitter: text(raw.twitter.as_deref()),
        youtube: text(raw.youtube.as_deref()),
    };
    (!social.is_empty()).then_some(social)
}

/// Settings-level, then contact-level, then top-level handles.
fn social_media(raw: &RawSiteRecord) -> SocialMedia {
    let settings_level = raw.settings.as_ref().and_then(|s| s.social_media.as_ref());
    let contact_level = raw.contact.as_ref().and_then(|c| c.social_media.as_ref());

    social_set(settings_level)
        .or_else(|| social_set(contact_level))
        .or_else(|| social_set(raw.social_media.as_ref()))
        .unwrap_or_default()
}

fn contact(c: Option<&RawContact>, social_media: &SocialMedia) -> Contact {
    let c = c.cloned().unwrap_or_default();
    Contact {
        email: first_or([c.email.as_deref()], ""),
        phone: first_or([c.phone.as_deref()], ""),
        address: first_or([c.address.as_deref()], ""),
        google_maps_url: text(c.google_maps_url.as_deref()),
        banner_image: text(c.banner_image.as_deref()),
        social_media: social_media.clone(),
        custom_fields: c.custom_fields,
    }
}

fn seo(raw: &RawSiteRecord) -> Seo {
    let seo = raw.seo.clone().unwrap_or_default();
    let settings = raw.settings.clone().unwrap_or_default();

    Seo {
        title: first_or(
            [seo.meta_title.as_deref(), settings.seo_title.as_deref()],
            "",
        ),
        description: first_or(
            [
                seo.meta_description.as_deref(),
                settings.seo_description.as_deref(),
            ],
            "",
        ),
        keywords: seo
            .keywords
            .or(settings.seo_keywords)
            .unwrap_or_default(),
    }
}

fn whatsapp(raw: &RawSiteRecord) -> WhatsApp {
    let legacy_number = raw.contact.as_ref().and_then(|c| c.whatsapp.as_deref());
    match raw.whatsapp.as_ref() {
        Some(w) => WhatsApp {
            phone_number: first_or([w.phone_number.as_deref()], ""),
            default_message: first_or([w.default_message.as_deref()], ""),
            enabled: w.enabled.unwrap_or(true),
        },
        None => WhatsApp {
            phone_number: first_or([legacy_number], ""),
            default_message: String::new(),
            enabled: first([legacy_number]).is_some(),
        },
    }
}

fn header(raw: &RawSiteRecord, settings: &Settings) -> Header {
    let h = raw.header.clone().unwrap_or_default();
    let menu: Vec<String> = if h.menu.is_empty() {
        DEFAULT_MENU.iter().map(|s| s.to_string()).collect()
    } else {
        h.menu
    };

    Header {
        logo_url: first_or([h.logo_url.as_deref()], &settings.logo_url),
        title: first_or([h.title.as_deref()], &settings.business_name),
        subtitle: text(h.subtitle.as_deref()),
        navigation: nav::map_menu(&menu),
        menu,
    }
}

/// Top-level FAQs, else the homepage ones.
fn faqs(raw: &RawSiteRecord) -> Vec<Faq> {
    let homepage = raw.homepage.as_ref().and_then(|h| h.faqs.as_ref());
    raw.faqs
        .as_ref()
        .or(homepage)
        .map(|faqs| {
            faqs.iter()
                .map(|f| Faq {
                    question: first_or([f.question.as_deref()], ""),
                    answer: first_or([f.answer.as_deref()], ""),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Top-level reviews, else the homepage testimonials as stored.
fn reviews(raw: &RawSiteRecord) -> Vec<serde_json::Value> {
    if let Some(reviews) = raw.reviews.as_ref() {
        return reviews.clone();
    }
    raw.homepage
        .as_ref()
        .map(|h| {
            h.testimonials
                .iter()
                .filter_map(|t| serde_json::to_value(t).ok())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(value: serde_json::Value) -> SiteSnapshot {
        normalize_at(&RawSiteRecord::from_value(value).unwrap(), 1_700_000_000_000)
    }

    #[test]
    fn empty_record_gets_every_default() {
        let snap = snapshot(json!({}));

        assert_eq!(snap.settings.business_name, "My Business");
        assert_eq!(snap.settings.website_title, "Welcome");
        assert_eq!(snap.settings.primary_color, "#0066FF");
        assert_eq!(snap.settings.secondary_color, "#FFCC00");
        assert_eq!(snap.settings.gradient_type, GradientType::Linear);
        assert_eq!(snap.settings.logo_url, "");
        assert_eq!(snap.settings.favicon_url, "");
        assert_eq!(snap.theme.name, "default");
        assert_eq!(snap.theme.colors.accent, "#FF6B6B");
        assert_eq!(snap.theme.colors.background, "#FFFFFF");
        assert_eq!(snap.theme.colors.text, "#1a1a1a");
        assert_eq!(snap.theme.colors.text_light, "#666666");
        assert_eq!(snap.homepage.hero_subtext, "");
        assert!(snap.homepage.hero_slides.is_empty());
        assert!(snap.services.is_empty());
        assert!(snap.about.core_values.is_none());
        assert!(snap.seo.keywords.is_empty());
        assert_eq!(snap.header.title, "My Business");
        assert_eq!(snap.header.menu, DEFAULT_MENU);
    }

    #[test]
    fn legacy_and_new_field_names_resolve_table() {
        // (record, JSON pointer into the snapshot, expected)
        let cases = [
            (json!({"settings": {"siteName": "Old"}}), "/settings/businessName", "Old"),
            (
                json!({"settings": {"siteName": "Old", "businessName": "New"}}),
                "/settings/businessName",
                "New",
            ),
            (json!({"settings": {"seoTitle": "Old"}}), "/settings/websiteTitle", "Old"),
            (
                json!({"settings": {"seoTitle": "Old", "websiteTitle": "New"}}),
                "/settings/websiteTitle",
                "New",
            ),
            (json!({"settings": {"logo": "old.png"}}), "/settings/logoUrl", "old.png"),
            (
                json!({"settings": {"logo": "old.png", "logoUrl": "new.png"}}),
                "/settings/logoUrl",
                "new.png",
            ),
            (json!({"settings": {"favicon": "f.ico"}}), "/settings/faviconUrl", "f.ico"),
            (
                json!({"settings": {"favicon": "f.ico", "faviconUrl": "n.svg"}}),
                "/settings/faviconUrl",
                "n.svg",
            ),
            (json!({"homepage": {"heroTagline": "Old"}}), "/homepage/heroSubtext", "Old"),
            (
                json!({"homepage": {"heroTagline": "Old", "heroSubtext": "New"}}),
                "/homepage/heroSubtext",
                "New",
            ),
            (json!({"homepage": {"heroImage": "a.jpg"}}), "/homepage/heroImageUrl", "a.jpg"),
            (json!({"settings": {"seoTitle": "T"}}), "/seo/title", "T"),
            (json!({"settings": {"seoDescription": "D"}}), "/seo/description", "D"),
            (
                json!({"seo": {"metaDescription": "M"}, "settings": {"seoDescription": "D"}}),
                "/seo/description",
                "M",
            ),
            (json!({"contact": {"whatsapp": "555"}}), "/whatsapp/phoneNumber", "555"),
            (json!({"settings": {"gradientType": "radial"}}), "/settings/gradientType", "radial"),
        ];

        for (record, pointer, expected) in cases {
            let snap = serde_json::to_value(snapshot(record.clone())).unwrap();
            assert_eq!(
                snap.pointer(pointer).and_then(|v| v.as_str()),
                Some(expected),
                "record: {} pointer: {}",
                record,
                pointer
            );
        }
    }

    #[test]
    fn empty_strings_fall_through_to_next_candidate() {
        let snap = snapshot(json!({"settings": {"businessName": "", "siteName": "Legacy"}}));
        assert_eq!(snap.settings.business_name, "Legacy");

        let snap = snapshot(json!({"settings": {"businessName": ""}}));
        assert_eq!(snap.settings.business_name, "My Business");
    }

    #[test]
    fn only_active_portfolio_items_become_slides_in_order() {
        let snap = snapshot(json!({
            "homepage": {
                "portfolioItems": [
                    {"slide_id": "a", "title": "A", "description": "one", "image": "a.jpg", "status": "active"},
                    {"slide_id": "b", "title": "B", "status": "draft"},
                    {"title": "C", "status": "active"},
                    {"slide_id": "d", "title": "D"},
                    {"slide_id": "e", "title": "E", "status": "active"}
                ]
            }
        }));

        let slides = &snap.homepage.hero_slides;
        let titles: Vec<_> = slides.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C", "E"]);
        assert_eq!(slides[0].content, "one");
        assert_eq!(slides[0].image_url, "a.jpg");
        assert_eq!(slides[1].id, "slide-1700000000000-1");
        assert_eq!(slides[2].id, "e");
    }

    #[test]
    fn malformed_entries_do_not_hide_the_rest() {
        let snap = snapshot(json!({
            "homepage": {
                "portfolioItems": [null, {"slide_id": "a", "title": "Live", "status": "active"}]
            },
            "seo": {"keywords": ["salon", 42, "hair"]}
        }));

        assert_eq!(snap.homepage.hero_slides.len(), 1);
        assert_eq!(snap.homepage.hero_slides[0].id, "a");
        assert_eq!(snap.seo.keywords, vec!["salon", "42", "hair"]);
    }

    #[test]
    fn already_shaped_slides_are_kept_when_no_portfolio() {
        let snap = snapshot(json!({
            "homepage": { "heroSlides": [{"id": "x", "title": "X", "content": "c", "imageUrl": "i"}] }
        }));
        assert_eq!(snap.homepage.hero_slides[0].id, "x");
        assert_eq!(snap.homepage.hero_slides[0].image_url, "i");
    }

    #[test]
    fn core_values_prefer_nested_and_omit_when_absent() {
        let snap = snapshot(json!({
            "about": {
                "coreValues": {"innovation": "nested"},
                "innovation": "flat",
                "trust": "flat trust"
            }
        }));
        let values = snap.about.core_values.unwrap();
        assert_eq!(values.innovation.as_deref(), Some("nested"));
        assert_eq!(values.excellence, None);
        assert_eq!(values.trust.as_deref(), Some("flat trust"));

        let snap = snapshot(json!({"about": {"title": "Us", "coreValues": {}}}));
        assert!(snap.about.core_values.is_none());
    }

    #[test]
    fn social_media_precedence() {
        let snap = snapshot(json!({
            "socialMedia": {"facebook": "top"},
            "contact": {"socialMedia": {"facebook": "contact"}},
            "settings": {"socialMedia": {"facebook": "settings"}}
        }));
        assert_eq!(snap.social_media.facebook.as_deref(), Some("settings"));
        assert_eq!(snap.contact.social_media, snap.social_media);

        let snap = snapshot(json!({
            "socialMedia": {"facebook": "top"},
            "contact": {"socialMedia": {"instagram": "contact"}}
        }));
        assert_eq!(snap.social_media.instagram.as_deref(), Some("contact"));
        assert_eq!(snap.social_media.facebook, None);

        let snap = snapshot(json!({"socialMedia": {"linkedin": "top"}}));
        assert_eq!(snap.contact.social_media.linkedin.as_deref(), Some("top"));
    }

    #[test]
    fn theme_roles_resolve_independently() {
        let snap = snapshot(json!({
            "settings": {"primaryColor": "#111111"},
            "theme": {"name": "ocean", "colors": {
                "primary": "#222222", "secondary": "#333333", "text": "#444444"
            }}
        }));
        let c = &snap.theme.colors;
        assert_eq!(snap.theme.name, "ocean");
        assert_eq!(c.primary, "#111111");
        assert_eq!(c.secondary, "#333333");
        assert_eq!(c.text, "#444444");
        assert_eq!(c.accent, "#FF6B6B");
        assert_eq!(snap.settings.secondary_color, "#FFCC00");
    }

    #[test]
    fn service_short_description_is_derived() {
        let long = "x".repeat(150);
        let snap = snapshot(json!({
            "services": [
                {"id": "s1", "name": "Explicit", "shortDesc": "short", "description": long},
                {"name": "Derived", "description": long, "iconUrl": "i.png", "price": 20},
                {"name": "Bare"}
            ]
        }));

        assert_eq!(snap.services[0].short_desc, "short");
        assert_eq!(snap.services[1].short_desc.chars().count(), 100);
        assert_eq!(snap.services[1].id, "service-1");
        assert_eq!(snap.services[1].image.as_deref(), Some("i.png"));
        assert_eq!(snap.services[1].price.as_deref(), Some("20"));
        assert_eq!(snap.services[2].short_desc, "");
    }

    #[test]
    fn short_description_counts_characters_not_bytes() {
        let long = "é".repeat(120);
        assert_eq!(short_description(None, Some(&long)).chars().count(), 100);
        assert_eq!(short_description(Some(""), Some("abc")), "abc");
    }

    #[test]
    fn header_falls_back_to_settings_and_maps_menu() {
        let snap = snapshot(json!({
            "settings": {"businessName": "Acme", "logoUrl": "logo.svg"},
            "header": {"subtitle": "Since 1999", "menu": ["Home", "Aboute Us", "Gallery"]}
        }));
        assert_eq!(snap.header.title, "Acme");
        assert_eq!(snap.header.logo_url, "logo.svg");
        assert_eq!(snap.header.subtitle.as_deref(), Some("Since 1999"));
        let anchors: Vec<_> = snap.header.navigation.iter().map(|n| n.anchor.as_str()).collect();
        assert_eq!(anchors, vec!["home", "about", "gallery"]);
    }

    #[test]
    fn faqs_and_reviews_support_both_locations() {
        let snap = snapshot(json!({
            "homepage": {
                "faqs": [{"question": "Q1", "answer": "A1"}],
                "testimonials": [{"customerName": "Ann", "feedback": "Great", "rating": 4}]
            }
        }));
        assert_eq!(snap.faqs[0].question, "Q1");
        assert_eq!(snap.reviews.len(), 1);
        assert_eq!(snap.homepage.testimonials[0].rating, 4);

        let snap = snapshot(json!({
            "faqs": [{"question": "Top"}],
            "reviews": [{"text": "r"}],
            "homepage": {"faqs": [{"question": "Nested"}]}
        }));
        assert_eq!(snap.faqs[0].question, "Top");
        assert_eq!(snap.reviews, vec![json!({"text": "r"})]);
    }

    #[test]
    fn acme_scenario() {
        let snap = snapshot(json!({
            "settings": {"siteName": "Acme"},
            "homepage": {"heroTagline": "Go fast"},
            "about": {"innovation": "Yes"}
        }));

        assert_eq!(snap.settings.business_name, "Acme");
        assert_eq!(snap.homepage.hero_subtext, "Go fast");
        let values = snap.about.core_values.expect("core values present");
        assert_eq!(values.innovation.as_deref(), Some("Yes"));
        assert!(values.excellence.is_none());
        assert!(values.trust.is_none());
    }
}
