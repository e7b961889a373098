//! Hero section (`#home`).

use leptos::prelude::*;
use sitecraft::snapshot::{HeroSlide, Homepage};

/// Heading, subtext, call-to-action buttons and the active slides.
///
/// The primary button jumps to `#contact`, the secondary one to
/// `#services`. A stored hero image replaces the gradient background.
#[component]
pub fn Hero(homepage: Homepage) -> impl IntoView {
    let background = (!homepage.hero_image_url.is_empty()).then(|| {
        format!(
            "background-image: linear-gradient(rgba(0, 0, 0, 0.45), rgba(0, 0, 0, 0.45)), url('{}')",
            homepage.hero_image_url.replace('\'', "%27")
        )
    });
    let has_heading = !homepage.hero_heading.is_empty();
    let has_subtext = !homepage.hero_subtext.is_empty();
    let has_cta = !homepage.cta_text.is_empty();
    let has_cta2 = !homepage.cta2_text.is_empty();
    let has_slides = !homepage.hero_slides.is_empty();

    view! {
        <section id="home" class="hero" style=background>
            <div class="container">
                {has_heading.then(|| view! {
                    <h1 class="hero-heading">{homepage.hero_heading}</h1>
                })}
                {has_subtext.then(|| view! {
                    <p class="hero-tagline">{homepage.hero_subtext}</p>
                })}

                <div class="hero-actions">
                    {has_cta.then(|| view! {
                        <a class="btn btn-primary" href="#contact">{homepage.cta_text}</a>
                    })}
                    {has_cta2.then(|| view! {
                        <a class="btn btn-secondary" href="#services">{homepage.cta2_text}</a>
                    })}
                </div>

                {has_slides.then(|| view! {
                    <div class="hero-slides">
                        {homepage.hero_slides.into_iter().map(|slide| view! {
                            <HeroSlideCard slide=slide />
                        }).collect::<Vec<_>>()}
                    </div>
                })}
            </div>
        </section>
    }
}

#[component]
fn HeroSlideCard(slide: HeroSlide) -> impl IntoView {
    let has_image = !slide.image_url.is_empty();
    let alt = slide.title.clone();
    let image_url = slide.image_url;

    view! {
        <article class="hero-slide" data-slide-id=slide.id>
            {has_image.then(|| view! { <img src=image_url alt=alt /> })}
            <div class="hero-slide-body">
                <h3>{slide.title}</h3>
                <p>{slide.content}</p>
            </div>
        </article>
    }
}
