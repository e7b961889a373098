//! # page-leptos
//!
//! Leptos SSR renderer for sitecraft sites.
//!
//! Takes a normalized [`SiteSnapshot`] and produces one static HTML
//! document. The theme is applied through [`HeadState`], so the page's
//! `<head>` carries the same CSS variables, title and favicon a live page
//! would end up with.
//!
//! ## Quick Start
//!
//! ```rust
//! use page_leptos::render_site;
//! use sitecraft::{RawSiteRecord, normalize};
//!
//! let raw = RawSiteRecord::default();
//! let html = render_site(&normalize(&raw));
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through the `RenderHtml` trait; no reactive runtime or
//! hydration is involved.

pub mod components;
pub mod styles;

use components::{ErrorDocument, SiteDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use sitecraft::{HeadState, SiteSnapshot};

/// Render the full site page for a snapshot.
pub fn render_site(site: &SiteSnapshot) -> String {
    let head = HeadState::from_snapshot(site);
    let doc = view! { <SiteDocument site=site.clone() head=head /> };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

/// Render the full-page error state with a single message.
pub fn render_error(message: &str) -> String {
    let doc = view! { <ErrorDocument message=message.to_string() /> };
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sitecraft::normalize::normalize_at;
    use sitecraft::raw::RawSiteRecord;

    fn site(value: serde_json::Value) -> SiteSnapshot {
        normalize_at(&RawSiteRecord::from_value(value).unwrap(), 1_700_000_000_000)
    }

    #[test]
    fn renders_empty_site_with_defaults() {
        let html = render_site(&site(json!({})));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Welcome</title>"));
        assert!(html.contains("My Business"));
        assert!(html.contains("--color-primary: #0066FF;"));
        assert!(html.contains("--gradient: linear-gradient(135deg, #0066FF, #FFCC00);"));
        assert!(html.contains(r##"href="#about""##));
        assert!(html.contains(r##"href="#contact""##));
        assert!(!html.contains("Our Services"));
        assert!(!html.contains("Our Core Values"));
    }

    #[test]
    fn renders_acme_scenario() {
        let html = render_site(&site(json!({
            "settings": { "siteName": "Acme" },
            "homepage": { "heroTagline": "Go fast" },
            "about": { "innovation": "Yes" }
        })));

        assert!(html.contains("Acme"));
        assert!(html.contains("Go fast"));
        assert!(html.contains("Our Core Values"));
        assert!(html.contains("Innovation"));
        assert!(!html.contains("Excellence"));
        assert!(!html.contains(r#"data-value="trust""#));
    }

    #[test]
    fn head_reflects_settings() {
        let html = render_site(&site(json!({
            "settings": {
                "websiteTitle": "Acme Widgets",
                "faviconUrl": "https://cdn.example.com/icon.svg",
                "gradientType": "radial",
                "primaryColor": "#111111",
                "secondaryColor": "#222222"
            },
            "seo": { "metaDescription": "Widgets for everyone" }
        })));

        assert!(html.contains("<title>Acme Widgets</title>"));
        assert!(html.contains(r#"href="https://cdn.example.com/icon.svg""#));
        assert!(html.contains(r#"type="image/svg+xml""#));
        assert!(html.contains("--gradient: radial-gradient(circle, #111111, #222222);"));
        assert!(html.contains(r#"content="Widgets for everyone""#));
    }

    #[test]
    fn renders_services_with_inquiry_links() {
        let html = render_site(&site(json!({
            "contact": { "phone": "+91 98765 43210" },
            "services": [{
                "name": "Haircut",
                "description": "A fresh look",
                "price": 499,
                "features": ["Wash", "Style"],
                "youtubeUrl": "https://youtu.be/demo"
            }]
        })));

        assert!(html.contains(r#"id="services""#));
        assert!(html.contains("Our Services"));
        assert!(html.contains("Discover what we offer"));
        assert!(html.contains("₹499"));
        assert!(html.contains("https://wa.me/919876543210?text="));
        assert!(html.contains("Inquire Now"));
        assert!(html.contains("Watch Demo"));
        assert!(html.contains("Style"));
    }

    #[test]
    fn no_inquiry_link_without_phone() {
        let html = render_site(&site(json!({ "services": [{ "name": "Haircut" }] })));
        assert!(html.contains("Haircut"));
        assert!(!html.contains("wa.me"));
    }

    #[test]
    fn navigation_uses_mapped_anchors() {
        let html = render_site(&site(json!({
            "header": { "menu": ["Home", "Aboute Us", "Pricing Plans"] }
        })));

        assert!(html.contains(r##"href="#about""##));
        assert!(html.contains("Aboute Us"));
        assert!(html.contains(r##"href="#pricing-plans""##));
    }

    #[test]
    fn testimonial_stars_follow_rating() {
        let html = render_site(&site(json!({
            "homepage": { "testimonials": [
                { "customerName": "ana", "feedback": "Great", "rating": 3 }
            ]}
        })));

        assert!(html.contains("What Our Clients Say"));
        assert_eq!(html.matches("star star-filled").count(), 3);
        assert_eq!(html.matches("star star-empty").count(), 2);
        assert!(html.contains(r#"class="avatar""#));
        assert!(html.contains(">A<"));
    }

    #[test]
    fn multiline_text_keeps_breaks() {
        let html = render_site(&site(json!({
            "about": { "mission": "First line\nSecond line" }
        })));
        assert!(html.contains("Our Mission"));
        assert!(html.contains("First line"));
        assert!(html.contains("<br"));
        assert!(html.contains("Second line"));
    }

    #[test]
    fn inactive_slides_are_not_rendered() {
        let html = render_site(&site(json!({
            "homepage": { "portfolioItems": [
                { "slide_id": "a", "title": "Live", "status": "active" },
                { "slide_id": "b", "title": "Draft", "status": "draft" }
            ]}
        })));
        assert!(html.contains("Live"));
        assert!(!html.contains("Draft"));
    }

    #[test]
    fn renders_error_page() {
        let html = render_error(
            "No website data found. Please configure your website in the admin panel.",
        );

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Error Loading Website"));
        assert!(html.contains("No website data found"));
        assert!(!html.contains(r#"class="site-header""#));
    }

    #[test]
    fn error_message_is_escaped() {
        let html = render_error("<script>alert(1)</script>");
        assert!(!html.contains("<script>alert(1)</script>"));
    }
}
