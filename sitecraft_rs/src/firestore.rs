//! Firestore REST document store.
//!
//! Documents come back with typed values (`{"stringValue": "..."}`); they are
//! decoded into plain JSON before anything else sees them.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::config::FirebaseConfig;
use crate::error::{FetchError, FetchResult};
use crate::fetch::{DocumentStore, StoredDocument};

const PAGE_SIZE: u32 = 300;

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    #[serde(default)]
    documents: Vec<Document>,
    next_page_token: Option<String>,
}

pub struct FirestoreClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl FirestoreClient {
    /// `base_url` is the `.../documents` root; paths are appended to it.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn from_config(config: &FirebaseConfig) -> FetchResult<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self::new(
            config.firestore_base_url()?,
            config.api_key.clone(),
            client,
        ))
    }

    fn url(&self, path: &str) -> String {
        let encoded: Vec<_> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();
        format!("{}/{}", self.base_url, encoded.join("/"))
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.client.get(url);
        match &self.api_key {
            Some(key) => request.query(&[("key", key.as_str())]),
            None => request,
        }
    }
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    async fn get_document(&self, path: &str) -> FetchResult<Option<Value>> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let document: Document = response.json().await?;
                Ok(Some(decode_fields(document.fields)))
            }
            status => Err(FetchError::Transport(format!(
                "document read {} returned {}",
                path, status
            ))),
        }
    }

    async fn list_documents(&self, path: &str) -> FetchResult<Vec<StoredDocument>> {
        let url = self.url(path);
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self.get(&url).query(&[("pageSize", PAGE_SIZE)]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }
            debug!("GET {} (page token: {:?})", url, page_token);
            let response = request.send().await?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Transport(format!(
                    "collection read {} returned {}",
                    path, status
                )));
            }

            let page: ListResponse = response.json().await?;
            documents.extend(page.documents.into_iter().map(|doc| StoredDocument {
                id: document_id(&doc.name).to_string(),
                data: decode_fields(doc.fields),
            }));

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(documents)
    }
}

/// Last segment of a full document resource name.
fn document_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// Decode a `fields` map into a plain JSON object.
pub fn decode_fields(fields: Map<String, Value>) -> Value {
    Value::Object(
        fields
            .into_iter()
            .map(|(key, value)| (key, decode_value(value)))
            .collect(),
    )
}

/// Decode one typed Firestore value. Unknown shapes become `null`.
pub fn decode_value(value: Value) -> Value {
    let Value::Object(mut typed) = value else {
        return Value::Null;
    };
    let Some((kind, inner)) = typed.iter_mut().next().map(|(k, v)| (k.clone(), v.take())) else {
        return Value::Null;
    };

    match (kind.as_str(), inner) {
        ("nullValue", _) => Value::Null,
        ("booleanValue", v @ Value::Bool(_)) => v,
        // int64 travels as a decimal string
        ("integerValue", Value::String(s)) => s
            .parse::<i64>()
            .map(|n| Value::Number(n.into()))
            .unwrap_or(Value::String(s)),
        ("integerValue", v @ Value::Number(_)) => v,
        ("doubleValue", Value::Number(n)) => Value::Number(n),
        ("doubleValue", Value::String(s)) => s
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ("stringValue" | "timestampValue" | "referenceValue" | "bytesValue", v @ Value::String(_)) => {
            v
        }
        ("geoPointValue", Value::Object(point)) => {
            let mut decoded = Map::new();
            for axis in ["latitude", "longitude"] {
                decoded.insert(
                    axis.to_string(),
                    point.get(axis).cloned().unwrap_or(Value::from(0.0)),
                );
            }
            Value::Object(decoded)
        }
        ("mapValue", Value::Object(mut map)) => match map.remove("fields") {
            Some(Value::Object(fields)) => decode_fields(fields),
            _ => Value::Object(Map::new()),
        },
        ("arrayValue", Value::Object(mut array)) => match array.remove("values") {
            Some(Value::Array(values)) => Value::Array(values.into_iter().map(decode_value).collect()),
            _ => Value::Array(Vec::new()),
        },
        _ => Value::Null,
    }
}
