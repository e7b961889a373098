//! CSS for the rendered site.
//!
//! Colours come exclusively from the custom properties written by
//! [`sitecraft::theme`]: `--color-*` for the palette roles plus
//! `--primary-color`, `--secondary-color` and `--gradient` for the brand
//! settings. Nothing here hard-codes a brand colour.
//!
//! Kept free of `>` and `&` so the text survives HTML escaping inside
//! `<style>` unchanged.

/// Page stylesheet, appended after the generated `:root` block.
pub const SITE_CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    font-family: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
    line-height: 1.6;
    color: var(--color-text);
    background: var(--color-background);
}

img { max-width: 100%; display: block; }

a { color: var(--color-primary); text-decoration: none; }

.container {
    width: 100%;
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.section { padding: 5rem 0; }

.section-header { text-align: center; margin-bottom: 3rem; }

.section-title {
    margin: 0 0 0.75rem;
    font-size: 2.5rem;
    background: var(--gradient);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.section-subtitle { margin: 0; color: var(--color-textLight); }

.muted { color: var(--color-textLight); }

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 10;
    background: var(--color-background);
    border-bottom: 1px solid rgba(0, 0, 0, 0.06);
}

.site-header .container {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 1rem;
    padding-bottom: 1rem;
}

.brand { display: flex; align-items: center; gap: 0.75rem; }
.brand-logo { height: 48px; width: auto; }
.brand-title { margin: 0; font-size: 1.4rem; color: var(--color-primary); }
.brand-subtitle { margin: 0; font-size: 0.85rem; color: var(--color-textLight); }

.site-nav { display: flex; gap: 1.5rem; flex-wrap: wrap; }
.nav-link { color: var(--color-text); font-weight: 500; }
.nav-link:hover { color: var(--color-primary); }

/* Hero */
.hero {
    position: relative;
    padding: 7rem 0 5rem;
    color: #fff;
    background: var(--gradient);
    background-size: cover;
    background-position: center;
    text-align: center;
}

.hero-heading { margin: 0 0 1rem; font-size: 3.25rem; line-height: 1.15; }
.hero-tagline { margin: 0 auto 2rem; max-width: 720px; font-size: 1.25rem; opacity: 0.92; }

.hero-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }

.btn {
    display: inline-block;
    padding: 0.85rem 2rem;
    border-radius: 999px;
    font-weight: 600;
    border: 2px solid transparent;
}

.btn-primary { background: var(--color-background); color: var(--color-primary); }
.btn-secondary { border-color: currentColor; color: inherit; }

.hero-slides {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 1.5rem;
    margin-top: 4rem;
    text-align: left;
}

.hero-slide {
    background: rgba(255, 255, 255, 0.12);
    border-radius: 16px;
    overflow: hidden;
}

.hero-slide img { width: 100%; height: 180px; object-fit: cover; }
.hero-slide-body { padding: 1rem 1.25rem; }
.hero-slide-body h3 { margin: 0 0 0.5rem; }
.hero-slide-body p { margin: 0; opacity: 0.9; }

/* Services */
.services-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
    gap: 2rem;
}

.service-card {
    border-radius: 20px;
    padding: 2rem;
    background: var(--color-background);
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}

.service-title-row { display: flex; justify-content: space-between; align-items: baseline; gap: 1rem; }
.service-name { margin: 0; font-size: 1.35rem; }
.service-price { font-weight: 700; color: var(--color-accent); white-space: nowrap; }
.service-short { margin: 0; font-weight: 500; }
.service-description { margin: 0; color: var(--color-textLight); }

.service-features { list-style: none; margin: 0; padding: 0; }
.service-features li { padding: 0.25rem 0; }
.checkmark { color: var(--color-primary); margin-right: 0.5rem; }

.service-image { border-radius: 12px; width: 100%; }

.service-actions { display: flex; gap: 0.75rem; flex-wrap: wrap; margin-top: auto; }
.btn-whatsapp { background: #25d366; color: #fff; }
.btn-youtube { background: #ff0000; color: #fff; }

/* About */
.about-intro { text-align: center; max-width: 820px; margin: 0 auto 3rem; }
.about-intro.with-image {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    max-width: none;
    text-align: left;
    align-items: center;
}
.about-intro img, .about-grid img { border-radius: 20px; }

.about-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; margin-bottom: 3rem; }
.about-grid.full-width { grid-template-columns: 1fr; }

.about-card {
    display: flex;
    gap: 1rem;
    padding: 1.5rem;
    border-radius: 16px;
    background: rgba(0, 0, 0, 0.03);
    margin-bottom: 1.25rem;
}

.about-card h3 { margin: 0 0 0.5rem; }
.about-card p { margin: 0; color: var(--color-textLight); }
.card-icon { font-size: 2rem; }

.core-values { text-align: center; }
.values-title { font-size: 2rem; margin: 0 0 2rem; }
.values-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 2rem; }
.value { padding: 2rem; border-radius: 16px; border-top: 4px solid var(--color-primary); }
.value-icon { font-size: 2.25rem; }
.value h4 { margin: 0.75rem 0 0.5rem; }
.value p { margin: 0; color: var(--color-textLight); }

/* Testimonials */
.testimonials { background: rgba(0, 0, 0, 0.03); }
.testimonial-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2rem; }
.testimonial-card { padding: 2rem; border-radius: 20px; background: var(--color-background); }
.testimonial-feedback { margin: 0 0 1rem; font-style: italic; }
.stars { margin-bottom: 1rem; }
.star-filled { color: var(--secondary-color); }
.star-empty { color: rgba(0, 0, 0, 0.15); }
.customer { display: flex; align-items: center; gap: 0.75rem; }
.avatar {
    width: 44px;
    height: 44px;
    border-radius: 50%;
    display: grid;
    place-items: center;
    font-weight: 700;
    color: #fff;
    background: var(--gradient);
}
.customer-name { margin: 0; }
.customer-role { margin: 0; font-size: 0.85rem; color: var(--color-textLight); }

/* FAQ */
.faq-list { max-width: 820px; margin: 0 auto; }
.faq-item { border-bottom: 1px solid rgba(0, 0, 0, 0.08); padding: 1rem 0; }
.faq-item summary { cursor: pointer; font-weight: 600; }
.faq-item p { margin: 0.75rem 0 0; color: var(--color-textLight); }

/* Contact */
.contact-info { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.5rem; }
.info-item h4 { margin: 0 0 0.25rem; }
.info-item p { margin: 0; }
.social-links { display: flex; gap: 1rem; flex-wrap: wrap; }
.map-section { margin-top: 3rem; }
.map-section iframe { width: 100%; height: 450px; border: 0; border-radius: 20px; }
.directions { display: inline-block; margin-top: 1rem; font-weight: 600; }

/* Footer */
.site-footer { padding: 3rem 0; background: var(--color-text); color: var(--color-background); }
.site-footer a { color: inherit; }
.footer-grid { display: flex; justify-content: space-between; gap: 2rem; flex-wrap: wrap; }
.footer-brand h3 { margin: 0 0 0.5rem; }
.footer-contact p { margin: 0 0 0.25rem; }
.footer-bottom { margin-top: 2rem; font-size: 0.85rem; opacity: 0.7; }

/* Error page */
.error-page {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 2rem;
    text-align: center;
}
.error-page .error-icon { font-size: 3rem; margin: 0 0 1rem; }
.error-page p { max-width: 500px; color: #6b7280; }

@media (max-width: 768px) {
    .hero-heading { font-size: 2.25rem; }
    .about-intro.with-image, .about-grid { grid-template-columns: 1fr; }
    .site-header .container { flex-direction: column; gap: 1rem; }
}
"#;
