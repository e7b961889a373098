//! Customer testimonials.

use leptos::prelude::*;
use sitecraft::snapshot::Testimonial;

const MAX_STARS: u8 = 5;

#[component]
pub fn Testimonials(testimonials: Vec<Testimonial>) -> impl IntoView {
    if testimonials.is_empty() {
        return view! { "" }.into_any();
    }

    view! {
        <section class="section testimonials">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"What Our Clients Say"</h2>
                    <p class="section-subtitle">
                        "Don't just take our word for it - hear from our satisfied customers"
                    </p>
                </div>
                <div class="testimonial-grid">
                    {testimonials.into_iter().map(|t| view! { <TestimonialCard testimonial=t /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let filled = testimonial.stars();
    let initial = testimonial.initial();

    view! {
        <div class="testimonial-card">
            <p class="testimonial-feedback">{testimonial.feedback}</p>
            <div class="stars" data-rating=filled.to_string()>
                {(1..=MAX_STARS).map(|star| {
                    let class = if star <= filled { "star star-filled" } else { "star star-empty" };
                    view! { <span class=class>"★"</span> }
                }).collect::<Vec<_>>()}
            </div>
            <div class="customer">
                <div class="avatar">{initial}</div>
                <div>
                    <h4 class="customer-name">{testimonial.customer_name}</h4>
                    <p class="customer-role">"Customer"</p>
                </div>
            </div>
        </div>
    }
}
