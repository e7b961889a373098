//! Page footer.

use leptos::prelude::*;
use sitecraft::snapshot::{Contact, Settings};

use super::SocialLinks;

#[component]
pub fn SiteFooter(settings: Settings, contact: Contact) -> impl IntoView {
    let has_logo = !settings.logo_url.is_empty();
    let logo = settings.logo_url;
    let name = settings.business_name;
    let alt = name.clone();
    let copyright = format!("© {}. All rights reserved.", name);
    let email = (!contact.email.is_empty()).then_some(contact.email);
    let phone = (!contact.phone.is_empty()).then_some(contact.phone);

    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        {has_logo.then(|| view! { <img class="brand-logo" src=logo alt=alt /> })}
                        <h3>{name}</h3>
                        <p>{settings.website_title}</p>
                    </div>
                    <div class="footer-contact">
                        {email.map(|email| {
                            let href = format!("mailto:{}", email);
                            view! { <p><a href=href>{email}</a></p> }
                        })}
                        {phone.map(|phone| {
                            let href = format!("tel:{}", phone);
                            view! { <p><a href=href>{phone}</a></p> }
                        })}
                    </div>
                    <SocialLinks social_media=contact.social_media heading="Follow Us" />
                </div>
                <p class="footer-bottom">{copyright}</p>
            </div>
        </footer>
    }
}
