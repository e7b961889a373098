//! Services section (`#services`).

use leptos::prelude::*;
use sitecraft::snapshot::Service;

pub const SERVICES_TITLE: &str = "Our Services";
pub const SERVICES_SUBTITLE: &str = "Discover what we offer";

/// Grid of service cards. Renders nothing when there are no services.
///
/// `whatsapp_number` is the contact phone; when it has digits every card
/// gets an "Inquire Now" link to `wa.me`.
#[component]
pub fn Services(services: Vec<Service>, whatsapp_number: String) -> impl IntoView {
    if services.is_empty() {
        return view! { "" }.into_any();
    }

    view! {
        <section id="services" class="section services">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{SERVICES_TITLE}</h2>
                    <p class="section-subtitle">{SERVICES_SUBTITLE}</p>
                </div>

                <div class="services-grid">
                    {services.into_iter().map(|service| {
                        let inquiry = service.inquiry_url(&whatsapp_number);
                        view! { <ServiceCard service=service inquiry_url=inquiry /> }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn ServiceCard(service: Service, inquiry_url: Option<String>) -> impl IntoView {
    let price = service.price.map(|p| format!("₹{}", p));
    let has_short = !service.short_desc.is_empty();
    let has_description = !service.description.is_empty();
    let has_features = !service.features.is_empty();
    let name = service.name.clone();

    view! {
        <div class="service-card" data-service-id=service.id>
            <div class="service-title-row">
                <h3 class="service-name">{service.name}</h3>
                {price.map(|price| view! { <span class="service-price">{price}</span> })}
            </div>

            {has_short.then(|| view! {
                <p class="service-short">{service.short_desc}</p>
            })}
            {has_description.then(|| view! {
                <p class="service-description">{service.description}</p>
            })}

            {has_features.then(|| view! {
                <ul class="service-features">
                    {service.features.into_iter().map(|feature| view! {
                        <li><span class="checkmark">"✓"</span>{feature}</li>
                    }).collect::<Vec<_>>()}
                </ul>
            })}

            {service.image.map(|src| view! {
                <img class="service-image" src=src alt=name />
            })}

            <div class="service-actions">
                {inquiry_url.map(|href| view! {
                    <a class="btn btn-whatsapp" href=href target="_blank" rel="noopener noreferrer">
                        "Inquire Now"
                    </a>
                })}
                {service.youtube_url.map(|href| view! {
                    <a class="btn btn-youtube" href=href target="_blank" rel="noopener noreferrer">
                        "Watch Demo"
                    </a>
                })}
            </div>
        </div>
    }
}
