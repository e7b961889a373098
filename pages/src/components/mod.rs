//! Leptos components for the rendered site.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! ├── SiteHeader
//! └── main
//!     ├── Hero            #home
//!     ├── Services        #services
//!     ├── AboutSection    #about
//!     ├── Testimonials
//!     ├── FaqSection      #faq
//!     └── ContactSection  #contact
//! └── SiteFooter
//!
//! ErrorDocument
//! ```

mod about;
mod contact;
mod document;
mod faq;
mod footer;
mod header;
mod hero;
mod services;
mod testimonials;

pub use about::{AboutSection, Multiline};
pub use contact::{ContactSection, SocialLinks};
pub use document::{ErrorDocument, SiteDocument};
pub use faq::FaqSection;
pub use footer::SiteFooter;
pub use header::SiteHeader;
pub use hero::Hero;
pub use services::{SERVICES_SUBTITLE, SERVICES_TITLE, Services};
pub use testimonials::Testimonials;
