//! About section (`#about`).

use leptos::prelude::*;
use sitecraft::snapshot::{About, CoreValues};

/// Stored text keeps its line breaks.
#[component]
pub fn Multiline(text: String) -> impl IntoView {
    let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    let last = lines.len().saturating_sub(1);

    let spans = lines
        .into_iter()
        .enumerate()
        .map(|(idx, line)| {
            view! {
                <span>{line}{(idx < last).then(|| view! { <br /> })}</span>
            }
        })
        .collect::<Vec<_>>();

    view! { {spans} }
}

/// Intro, mission/vision, "why choose us" and core values. Each block is
/// only rendered when it has content.
#[component]
pub fn AboutSection(about: About) -> impl IntoView {
    let has_intro = !about.title.is_empty() || !about.description.is_empty();
    let has_mission_vision = about.mission.is_some() || about.vision.is_some();

    view! {
        <section id="about" class="section about">
            <div class="container">
                {has_intro.then(|| view! {
                    <AboutIntro
                        title=about.title
                        description=about.description
                        image_url=about.intro_image_url
                    />
                })}

                {has_mission_vision.then(|| {
                    let grid_class = if about.image_url.is_some() {
                        "about-grid"
                    } else {
                        "about-grid full-width"
                    };
                    view! {
                        <div class=grid_class>
                            {about.image_url.map(|src| view! {
                                <img src=src alt="Our Mission & Vision" />
                            })}
                            <div class="mission-vision">
                                {about.mission.map(|text| view! {
                                    <AboutCard icon="🎯" heading="Our Mission" text=text />
                                })}
                                {about.vision.map(|text| view! {
                                    <AboutCard icon="📊" heading="Our Vision" text=text />
                                })}
                            </div>
                        </div>
                    }
                })}

                {about.why_choose.map(|text| view! {
                    <AboutCard icon="⭐" heading="Why Choose Us" text=text />
                })}

                {about.core_values.map(|values| view! { <CoreValuesBlock values=values /> })}
            </div>
        </section>
    }
}

#[component]
fn AboutIntro(title: String, description: String, image_url: Option<String>) -> impl IntoView {
    let class = if image_url.is_some() {
        "about-intro with-image"
    } else {
        "about-intro"
    };
    let has_title = !title.is_empty();
    let has_description = !description.is_empty();

    view! {
        <div class=class>
            <div class="about-intro-text">
                {has_title.then(|| view! { <h2 class="section-title">{title}</h2> })}
                {has_description.then(|| view! {
                    <p class="about-description"><Multiline text=description /></p>
                })}
            </div>
            {image_url.map(|src| view! { <img src=src alt="About Us" /> })}
        </div>
    }
}

#[component]
fn AboutCard(icon: &'static str, heading: &'static str, text: String) -> impl IntoView {
    view! {
        <div class="about-card">
            <div class="card-icon">{icon}</div>
            <div>
                <h3>{heading}</h3>
                <p><Multiline text=text /></p>
            </div>
        </div>
    }
}

/// "Our Core Values" with one tile per present value. Absent values get no
/// tile at all.
#[component]
fn CoreValuesBlock(values: CoreValues) -> impl IntoView {
    let tiles = [
        ("💡", "Innovation", values.innovation),
        ("⭐", "Excellence", values.excellence),
        ("🤝", "Trust", values.trust),
    ];

    view! {
        <div class="core-values">
            <h3 class="values-title">"Our Core Values"</h3>
            <div class="values-grid">
                {tiles.into_iter().filter_map(|(icon, label, text)| {
                    text.map(|text| view! {
                        <div class="value" data-value=label.to_lowercase()>
                            <div class="value-icon">{icon}</div>
                            <h4>{label}</h4>
                            <p><Multiline text=text /></p>
                        </div>
                    })
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
