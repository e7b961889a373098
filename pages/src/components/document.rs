//! Root document components: the full site page and the error page.

use leptos::prelude::*;
use sitecraft::snapshot::{Seo, SiteSnapshot};
use sitecraft::theme::HeadState;

use super::{
    AboutSection, ContactSection, FaqSection, Hero, Services, SiteFooter, SiteHeader, Testimonials,
};
use crate::styles::SITE_CSS;

/// Used when no favicon was applied.
const DEFAULT_FAVICON: &str = "/favicon.ico";

/// The complete HTML document for one site snapshot.
///
/// `head` carries the applied theme: `:root` variables, title, favicon.
#[component]
pub fn SiteDocument(site: SiteSnapshot, head: HeadState) -> impl IntoView {
    let root_css = head.root_css();
    let title = head.title.unwrap_or_default();
    let favicon_href = head
        .favicon_href
        .unwrap_or_else(|| DEFAULT_FAVICON.to_string());
    let favicon_type = head.favicon_type;

    let SiteSnapshot {
        settings,
        homepage,
        services,
        about,
        contact,
        seo,
        header,
        faqs,
        ..
    } = site;
    let business_name = settings.business_name.clone();
    let testimonials = homepage.testimonials.clone();
    let whatsapp_number = contact.phone.clone();
    let footer_contact = contact.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <title>{title}</title>
                <SeoMeta seo=seo />
                <link id="favicon" rel="icon" href=favicon_href type=favicon_type />
                <style id="theme-variables">{root_css}</style>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <SiteHeader header=header business_name=business_name />
                <main>
                    <Hero homepage=homepage />
                    <Services services=services whatsapp_number=whatsapp_number />
                    <AboutSection about=about />
                    <Testimonials testimonials=testimonials />
                    <FaqSection faqs=faqs />
                    <ContactSection contact=contact />
                </main>
                <SiteFooter settings=settings contact=footer_contact />
            </body>
        </html>
    }
}

#[component]
fn SeoMeta(seo: Seo) -> impl IntoView {
    let description = (!seo.description.is_empty()).then_some(seo.description);
    let keywords = (!seo.keywords.is_empty()).then(|| seo.keywords.join(", "));

    view! {
        {description.map(|content| view! { <meta name="description" content=content /> })}
        {keywords.map(|content| view! { <meta name="keywords" content=content /> })}
    }
}

/// Full-page error state. There is no partial render: this replaces the
/// whole site.
#[component]
pub fn ErrorDocument(message: String) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <title>"Error Loading Website"</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <div class="error-page">
                    <div>
                        <h1 class="error-icon">"⚠️"</h1>
                        <h2>"Error Loading Website"</h2>
                        <p class="error-message">{message}</p>
                    </div>
                </div>
            </body>
        </html>
    }
}
