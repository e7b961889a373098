//! Menu label → section anchor mapping.
//!
//! Header menus are stored as free text ("About Us", "Our Services", ...).
//! Labels are slugged and then looked up in a synonym table that points
//! common variants at the canonical section ids used by the page.

use serde::{Deserialize, Serialize};

/// Stored menus contain the misspelling `Aboute Us`; it stays in the table.
const SECTION_SYNONYMS: &[(&str, &str)] = &[
    ("home", "home"),
    ("about", "about"),
    ("about-us", "about"),
    ("aboute-us", "about"),
    ("services", "services"),
    ("our-services", "services"),
    ("contact", "contact"),
    ("contact-us", "contact"),
];

/// Menu used when the stored header has no entries.
pub const DEFAULT_MENU: [&str; 4] = ["Home", "About Us", "Services", "Contact Us"];

/// One navigation entry: the label as stored and the anchor it targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub anchor: String,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// Lower-case, turn whitespace runs into `-`, drop anything outside
/// `[a-z0-9-]`.
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut in_whitespace = false;
    for c in label.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
        }
    }
    slug
}

pub fn anchor_for(label: &str) -> String {
    let slug = slugify(label);
    SECTION_SYNONYMS
        .iter()
        .find(|(variant, _)| *variant == slug)
        .map(|(_, anchor)| anchor.to_string())
        .unwrap_or(slug)
}

pub fn map_menu<S: AsRef<str>>(labels: &[S]) -> Vec<NavItem> {
    labels
        .iter()
        .map(|label| NavItem {
            label: label.as_ref().to_string(),
            anchor: anchor_for(label.as_ref()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_upstream_typo() {
        assert_eq!(anchor_for("Aboute Us"), "about");
    }

    #[test]
    fn falls_back_to_slug() {
        assert_eq!(anchor_for("Random Page"), "random-page");
        assert_eq!(anchor_for("FAQ & Help!"), "faq--help");
    }

    #[test]
    fn maps_synonyms() {
        assert_eq!(anchor_for("Contact Us"), "contact");
        assert_eq!(anchor_for("Our   Services"), "services");
        assert_eq!(anchor_for("HOME"), "home");
    }

    #[test]
    fn slug_keeps_leading_whitespace_as_hyphen() {
        assert_eq!(slugify("  About"), "-about");
        assert_eq!(slugify("Über uns"), "ber-uns");
    }

    #[test]
    fn map_menu_preserves_order() {
        let items = map_menu(&["Services", "Blog Posts", "About Us"]);
        let hrefs: Vec<_> = items.iter().map(NavItem::href).collect();
        assert_eq!(hrefs, vec!["#services", "#blog-posts", "#about"]);
        assert_eq!(items[1].label, "Blog Posts");
    }
}
