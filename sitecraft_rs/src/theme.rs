//! Theme application.
//!
//! Turns the colour values of a [`Theme`] and [`Settings`] into named,
//! globally scoped style variables plus the document title and favicon.
//! The target is any [`StyleSink`]; [`HeadState`] is the in-memory sink the
//! page renderer materializes into `<head>`.

use crate::normalize::DEFAULT_WEBSITE_TITLE;
use crate::snapshot::{GradientType, Settings, SiteSnapshot, Theme};

/// Destination for applied theme state.
pub trait StyleSink {
    /// Set (or overwrite) a global style variable such as `--color-primary`.
    fn set_property(&mut self, name: &str, value: &str);
    fn set_title(&mut self, title: &str);
    /// Point the favicon at `href`. A `None` MIME type leaves the current
    /// type untouched.
    fn set_favicon(&mut self, href: &str, mime: Option<&str>);
}

/// Write all six colour roles as `--color-{role}`. `None` means no theme has
/// been loaded yet and is a no-op.
pub fn apply_theme<S: StyleSink + ?Sized>(theme: Option<&Theme>, sink: &mut S) {
    let Some(theme) = theme else {
        return;
    };
    for (role, value) in theme.roles() {
        sink.set_property(&format!("--color-{}", role), value);
    }
}

/// Apply settings-derived state: brand colours, gradient, title, favicon.
pub fn apply_settings<S: StyleSink + ?Sized>(settings: &Settings, sink: &mut S) {
    sink.set_title(document_title(settings));

    if !settings.favicon_url.is_empty() {
        sink.set_favicon(&settings.favicon_url, favicon_mime(&settings.favicon_url));
    }

    sink.set_property("--primary-color", &settings.primary_color);
    sink.set_property("--secondary-color", &settings.secondary_color);
    sink.set_property(
        "--gradient",
        &gradient_css(
            settings.gradient_type,
            &settings.primary_color,
            &settings.secondary_color,
        ),
    );
}

/// Apply everything a loaded snapshot contributes to the page head.
pub fn apply_snapshot<S: StyleSink + ?Sized>(snapshot: Option<&SiteSnapshot>, sink: &mut S) {
    let Some(snapshot) = snapshot else {
        return;
    };
    apply_theme(Some(&snapshot.theme), sink);
    apply_settings(&snapshot.settings, sink);
}

pub fn gradient_css(kind: GradientType, primary: &str, secondary: &str) -> String {
    match kind {
        GradientType::Linear => format!("linear-gradient(135deg, {}, {})", primary, secondary),
        GradientType::Radial => format!("radial-gradient(circle, {}, {})", primary, secondary),
    }
}

/// Website title, then business name, then the literal default.
pub fn document_title(settings: &Settings) -> &str {
    [
        settings.website_title.as_str(),
        settings.business_name.as_str(),
    ]
    .into_iter()
    .find(|s| !s.is_empty())
    .unwrap_or(DEFAULT_WEBSITE_TITLE)
}

/// MIME type for a favicon URL, inferred from the text after the last `.`.
pub fn favicon_mime(url: &str) -> Option<&'static str> {
    let ext = url.rsplit('.').next()?.to_ascii_lowercase();
    match ext.as_str() {
        "ico" => Some("image/x-icon"),
        "png" => Some("image/png"),
        "svg" => Some("image/svg+xml"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        _ => None,
    }
}

/// In-memory head state: ordered style variables, title and favicon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadState {
    properties: Vec<(String, String)>,
    pub title: Option<String>,
    pub favicon_href: Option<String>,
    pub favicon_type: Option<String>,
}

impl HeadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Head state for a snapshot in one step.
    pub fn from_snapshot(snapshot: &SiteSnapshot) -> Self {
        let mut head = Self::new();
        apply_snapshot(Some(snapshot), &mut head);
        head
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn properties(&self) -> &[(String, String)] {
        &self.properties
    }

    /// `:root { ... }` rule declaring every variable, in insertion order.
    pub fn root_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.properties {
            css.push_str(&format!("    {}: {};\n", name, sanitize_css_value(value)));
        }
        css.push('}');
        css
    }
}

impl StyleSink for HeadState {
    fn set_property(&mut self, name: &str, value: &str) {
        match self.properties.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.properties.push((name.to_string(), value.to_string())),
        }
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_favicon(&mut self, href: &str, mime: Option<&str>) {
        self.favicon_href = Some(href.to_string());
        if let Some(mime) = mime {
            self.favicon_type = Some(mime.to_string());
        }
    }
}

/// Stored colour values end up inside a `<style>` element.
fn sanitize_css_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | ';' | '{' | '}'))
        .collect()
}
