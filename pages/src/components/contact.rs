//! Contact section (`#contact`).

use leptos::prelude::*;
use sitecraft::snapshot::{Contact, SocialMedia};

/// Contact details, social links and the embedded map.
#[component]
pub fn ContactSection(contact: Contact) -> impl IntoView {
    let has_info = !contact.email.is_empty()
        || !contact.phone.is_empty()
        || !contact.address.is_empty()
        || !contact.social_media.is_empty();
    let email = contact.email;
    let phone = contact.phone;
    let address = contact.address;

    view! {
        <section id="contact" class="section contact">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Get In Touch"</h2>
                    <p class="section-subtitle">"We'd love to hear from you. Send us a message!"</p>
                </div>

                {has_info.then(|| view! {
                    <div class="contact-info">
                        {(!email.is_empty()).then(|| {
                            let href = format!("mailto:{}", email);
                            view! {
                                <div class="info-item">
                                    <h4>"Email"</h4>
                                    <a href=href>{email}</a>
                                </div>
                            }
                        })}
                        {(!phone.is_empty()).then(|| {
                            let href = format!("tel:{}", phone);
                            view! {
                                <div class="info-item">
                                    <h4>"Phone"</h4>
                                    <a href=href>{phone}</a>
                                </div>
                            }
                        })}
                        {(!address.is_empty()).then(|| view! {
                            <div class="info-item">
                                <h4>"Address"</h4>
                                <p>{address}</p>
                            </div>
                        })}
                        <SocialLinks social_media=contact.social_media heading="Follow Us" />
                    </div>
                })}

                {contact.google_maps_url.map(|url| view! {
                    <div class="map-section">
                        <iframe
                            src=url.clone()
                            {..leptos::attr::loading("lazy")}
                            referrerpolicy="no-referrer-when-downgrade"
                            title="Google Maps Location"
                        ></iframe>
                        <a class="directions" href=url target="_blank" rel="noopener noreferrer">
                            "📍 Get Directions"
                        </a>
                    </div>
                })}
            </div>
        </section>
    }
}

/// Links for every present social handle. Renders nothing when none are.
#[component]
pub fn SocialLinks(social_media: SocialMedia, heading: &'static str) -> impl IntoView {
    let links: Vec<(&'static str, String)> = social_media
        .links()
        .into_iter()
        .map(|(label, url)| (label, url.to_string()))
        .collect();
    if links.is_empty() {
        return view! { "" }.into_any();
    }

    view! {
        <div class="social">
            <h4>{heading}</h4>
            <div class="social-links">
                {links.into_iter().map(|(label, url)| view! {
                    <a href=url target="_blank" rel="noopener noreferrer">{label}</a>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
    .into_any()
}
