//! Sticky site header: brand block plus the anchor navigation.

use leptos::prelude::*;
use sitecraft::snapshot::Header;

/// Brand logo, title and subtitle, followed by one link per menu entry.
///
/// `header.navigation` is already mapped to section anchors and already
/// contains the default menu when nothing was stored.
#[component]
pub fn SiteHeader(header: Header, business_name: String) -> impl IntoView {
    let has_logo = !header.logo_url.is_empty();
    let logo_url = header.logo_url;
    let alt = business_name;

    view! {
        <header class="site-header">
            <div class="container">
                <div class="brand">
                    {has_logo.then(|| view! {
                        <img class="brand-logo" src=logo_url alt=alt />
                    })}
                    <div class="brand-text">
                        <h1 class="brand-title">{header.title}</h1>
                        {header.subtitle.map(|subtitle| view! {
                            <p class="brand-subtitle">{subtitle}</p>
                        })}
                    </div>
                </div>

                <nav class="site-nav">
                    {header.navigation.into_iter().map(|item| {
                        let href = item.href();
                        view! {
                            <a class="nav-link" href=href>{item.label}</a>
                        }
                    }).collect::<Vec<_>>()}
                </nav>
            </div>
        </header>
    }
}
