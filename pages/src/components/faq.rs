//! FAQ section (`#faq`), rendered with native `<details>` disclosure.

use leptos::prelude::*;
use sitecraft::snapshot::Faq;

#[component]
pub fn FaqSection(faqs: Vec<Faq>) -> impl IntoView {
    let faqs: Vec<Faq> = faqs.into_iter().filter(|f| !f.question.is_empty()).collect();
    if faqs.is_empty() {
        return view! { "" }.into_any();
    }

    view! {
        <section id="faq" class="section faq">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Frequently Asked Questions"</h2>
                </div>
                <div class="faq-list">
                    {faqs.into_iter().map(|faq| view! {
                        <details class="faq-item">
                            <summary>{faq.question}</summary>
                            <p>{faq.answer}</p>
                        </details>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
    .into_any()
}
