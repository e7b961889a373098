//! Two-path site loading.
//!
//! The primary path reads the site's configuration document and services
//! collection straight from the document store. If that fails for any
//! reason, the secondary path asks the backend procedure for the same data
//! exactly once. Both failures are folded into a single [`LoadError`].

use async_trait::async_trait;
use serde_json::{Map, Value, json};
use tracing::{debug, info, warn};

use crate::error::{BackendFailure, FetchError, FetchResult, LoadError};
use crate::normalize::normalize;
use crate::raw::RawSiteRecord;
use crate::snapshot::SiteSnapshot;

/// Configuration document, relative to `projects/{id}`.
pub const CONFIG_DOCUMENT: &str = "website/config";
/// Services collection, relative to `projects/{id}`.
pub const SERVICES_COLLECTION: &str = "services";
pub const WEBSITE_DATA_PROCEDURE: &str = "getWebsiteData";

// =============================================================================
// BACKEND INTERFACES
// =============================================================================

/// A document from a collection listing.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub data: Value,
}

/// Read access to the hierarchical document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// `Ok(None)` when the document does not exist.
    async fn get_document(&self, path: &str) -> FetchResult<Option<Value>>;
    async fn list_documents(&self, path: &str) -> FetchResult<Vec<StoredDocument>>;
}

/// A named server-side procedure taking and returning JSON.
#[async_trait]
pub trait RemoteProcedure: Send + Sync {
    async fn call(&self, name: &str, payload: Value) -> FetchResult<Value>;
}

// =============================================================================
// FETCHER
// =============================================================================

pub struct SiteFetcher<S, P> {
    store: S,
    procedure: P,
}

impl<S: DocumentStore, P: RemoteProcedure> SiteFetcher<S, P> {
    pub fn new(store: S, procedure: P) -> Self {
        Self { store, procedure }
    }

    /// Fetch and normalize. A missing or blank id fails before any I/O.
    pub async fn load(&self, site_id: Option<&str>) -> Result<SiteSnapshot, LoadError> {
        let site_id = site_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(LoadError::missing_site_id)?;
        let raw = self.fetch_raw(site_id).await?;
        Ok(normalize(&raw))
    }

    /// Primary path, then the secondary path once if the primary failed.
    pub async fn fetch_raw(&self, site_id: &str) -> Result<RawSiteRecord, LoadError> {
        let primary = match self.fetch_direct(site_id).await {
            Ok(record) => {
                info!(site_id, "Loaded site from document store");
                return Ok(record);
            }
            Err(err) => err,
        };
        warn!(site_id, error = %primary, "Document store read failed, calling {}", WEBSITE_DATA_PROCEDURE);

        match self.fetch_via_procedure(site_id).await {
            Ok(record) => {
                info!(site_id, "Loaded site from {}", WEBSITE_DATA_PROCEDURE);
                Ok(record)
            }
            Err(secondary) => {
                warn!(site_id, error = %secondary, "{} failed", WEBSITE_DATA_PROCEDURE);
                Err(LoadError::from_paths(primary, secondary))
            }
        }
    }

    async fn fetch_direct(&self, site_id: &str) -> FetchResult<RawSiteRecord> {
        let config_path = format!("projects/{}/{}", site_id, CONFIG_DOCUMENT);
        let mut document = self
            .store
            .get_document(&config_path)
            .await?
            .ok_or_else(|| FetchError::NotFound(config_path.clone()))?;

        let services_path = format!("projects/{}/{}", site_id, SERVICES_COLLECTION);
        match self.store.list_documents(&services_path).await {
            Ok(docs) => {
                debug!(count = docs.len(), "Fetched services collection");
                if let Value::Object(fields) = &mut document {
                    fields.insert("services".to_string(), services_with_ids(docs));
                }
            }
            Err(err) => {
                warn!(error = %err, "Could not read {}, using embedded services", services_path);
            }
        }

        RawSiteRecord::from_value(document).map_err(|e| {
            debug!("Config document did not decode: {}", e);
            FetchError::Backend(BackendFailure::Malformed)
        })
    }

    async fn fetch_via_procedure(&self, site_id: &str) -> FetchResult<RawSiteRecord> {
        let response = self
            .procedure
            .call(WEBSITE_DATA_PROCEDURE, json!({ "projectId": site_id }))
            .await?;
        let data = unwrap_procedure_response(response)?;
        RawSiteRecord::from_value(data).map_err(|_| BackendFailure::Malformed.into())
    }
}

/// Pull the site payload out of a procedure reply.
///
/// Accepts both `{success, data}` and `{result: {success, data}}`.
pub fn unwrap_procedure_response(response: Value) -> Result<Value, BackendFailure> {
    let mut response = match response {
        Value::Object(map) => map,
        _ => return Err(BackendFailure::Malformed),
    };
    if matches!(response.get("result"), Some(Value::Object(_))) {
        if let Some(Value::Object(inner)) = response.remove("result") {
            response = inner;
        }
    }

    if response.get("success") != Some(&Value::Bool(true)) {
        return Err(BackendFailure::Unsuccessful);
    }
    match response.remove("data") {
        Some(data) if !is_blank_payload(&data) => Ok(data),
        _ => Err(BackendFailure::EmptyPayload),
    }
}

/// `null`, `false`, zero and the empty string all mean "no data". Empty
/// objects and arrays do not.
fn is_blank_payload(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Collection documents as service records. A stored `id` field wins over
/// the document id.
fn services_with_ids(docs: Vec<StoredDocument>) -> Value {
    docs.into_iter()
        .map(|doc| {
            let mut service = Map::new();
            service.insert("id".to_string(), Value::String(doc.id));
            if let Value::Object(fields) = doc.data {
                service.extend(fields);
            }
            Value::Object(service)
        })
        .collect()
}
