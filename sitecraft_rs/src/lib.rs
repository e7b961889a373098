//! # sitecraft
//!
//! **Marketing-site content loader** - fetches a site's stored configuration,
//! reconciles legacy and current field names into one canonical snapshot,
//! and derives the page's theme variables.
//!
//! ## Features
//!
//! - **Two-path fetch** - document store first, backend procedure once as fallback
//! - **Lenient decoding** - numbers or strings, missing or mis-shaped fields
//! - **Normalization** - legacy names, defaults, active-only hero slides
//! - **Navigation mapping** - free-text menu labels to section anchors
//! - **Theme application** - CSS custom properties, title and favicon
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sitecraft::{SiteConfig, load_site};
//!
//! # async fn run() -> Result<(), sitecraft::LoadError> {
//! let config = SiteConfig::load(std::path::Path::new(".")).with_env();
//! let site = load_site(&config).await?;
//! println!("{}", site.settings.business_name);
//! # Ok(())
//! # }
//! ```
//!
//! ## Offline Use
//!
//! ```rust
//! use sitecraft::{HeadState, RawSiteRecord, normalize};
//!
//! let raw = RawSiteRecord::from_value(serde_json::json!({
//!     "settings": { "siteName": "Acme", "seoTitle": "Acme Widgets" }
//! }))
//! .unwrap();
//! let site = normalize(&raw);
//! assert_eq!(site.settings.business_name, "Acme");
//!
//! let head = HeadState::from_snapshot(&site);
//! assert_eq!(head.title.as_deref(), Some("Acme Widgets"));
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// `sitecraft.toml` plus environment overrides.
pub mod config;

/// Error taxonomy for both fetch paths and the combined load.
pub mod error;

/// Two-path loading behind the [`DocumentStore`](fetch::DocumentStore) and
/// [`RemoteProcedure`](fetch::RemoteProcedure) traits.
pub mod fetch;

/// Firestore REST implementation of the document store.
pub mod firestore;

/// Callable-function implementation of the remote procedure.
pub mod functions;

/// Menu label to section anchor mapping.
pub mod nav;

/// Raw record → canonical snapshot.
///
/// # Key Functions
///
/// - [`normalize`](normalize::normalize) - stamps generated ids with the current time
/// - [`normalize_at`](normalize::normalize_at) - deterministic variant for tests
pub mod normalize;

/// Stored record as it arrives, with every field optional.
pub mod raw;

/// The canonical, render-ready site model.
pub mod snapshot;

/// Style variables, title and favicon.
pub mod theme;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::SiteConfig;
pub use error::{BackendFailure, FetchError, LoadError};
pub use fetch::SiteFetcher;
pub use firestore::FirestoreClient;
pub use functions::CallableClient;
pub use nav::NavItem;
pub use normalize::normalize;
pub use raw::RawSiteRecord;
pub use snapshot::SiteSnapshot;
pub use theme::{HeadState, StyleSink};

/// Load and normalize the configured site over the network.
///
/// The site id is checked before any client is built, so a missing id is
/// reported as such even when the backend is not configured either.
pub async fn load_site(config: &SiteConfig) -> Result<SiteSnapshot, LoadError> {
    let site_id = config.site_id().ok_or_else(LoadError::missing_site_id)?;

    let store = FirestoreClient::from_config(&config.firebase).map_err(LoadError::Configuration)?;
    let procedure =
        CallableClient::from_config(&config.firebase).map_err(LoadError::Configuration)?;

    SiteFetcher::new(store, procedure).load(Some(site_id)).await
}
