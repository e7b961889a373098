//! Callable cloud functions over HTTPS.
//!
//! Request body is `{"data": payload}`; the reply is `{"result": ...}` on
//! success or `{"error": {"status", "message"}}` on failure.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::config::FirebaseConfig;
use crate::error::{BackendFailure, FetchError, FetchResult};
use crate::fetch::RemoteProcedure;

#[derive(Debug, Deserialize)]
struct CallableReply {
    result: Option<Value>,
    error: Option<CallableError>,
}

#[derive(Debug, Deserialize)]
struct CallableError {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: String,
}

pub struct CallableClient {
    client: Client,
    base_url: String,
}

impl CallableClient {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &FirebaseConfig) -> FetchResult<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self::new(config.functions_base_url()?, client))
    }
}

#[async_trait]
impl RemoteProcedure for CallableClient {
    async fn call(&self, name: &str, payload: Value) -> FetchResult<Value> {
        let url = format!("{}/{}", self.base_url, name);
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(&json!({ "data": payload }))
            .send()
            .await?;
        let status = response.status();

        // Callable errors carry a JSON body even on non-2xx statuses.
        let reply: CallableReply = match response.json().await {
            Ok(reply) => reply,
            Err(_) if !status.is_success() => {
                return Err(FetchError::Transport(format!("{} returned {}", name, status)));
            }
            Err(_) => return Err(BackendFailure::Malformed.into()),
        };

        if let Some(error) = reply.error {
            return Err(match error.status.as_str() {
                "NOT_FOUND" => FetchError::NotFound(error.message),
                _ => FetchError::Transport(format!("{}: {} {}", name, error.status, error.message)),
            });
        }
        if !status.is_success() {
            return Err(FetchError::Transport(format!("{} returned {}", name, status)));
        }
        reply.result.ok_or(BackendFailure::Malformed.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn posts_data_envelope_and_returns_result() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/getWebsiteData")
                    .json_body(json!({ "data": { "projectId": "acme" } }));
                then.status(200)
                    .json_body(json!({ "result": { "success": true, "data": {} } }));
            })
            .await;

        let client = CallableClient::new(server.base_url(), Client::new());
        let result = client
            .call("getWebsiteData", json!({ "projectId": "acme" }))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result, json!({ "success": true, "data": {} }));
    }

    #[tokio::test]
    async fn not_found_status_maps_to_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/getWebsiteData");
                then.status(404).json_body(json!({
                    "error": { "status": "NOT_FOUND", "message": "no such project" }
                }));
            })
            .await;

        let err = CallableClient::new(server.base_url(), Client::new())
            .call("getWebsiteData", json!({ "projectId": "ghost" }))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::NotFound(ref m) if m == "no such project"));
    }

    #[tokio::test]
    async fn internal_error_is_transport_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/getWebsiteData");
                then.status(500).body("upstream exploded");
            })
            .await;

        let err = CallableClient::new(server.base_url(), Client::new())
            .call("getWebsiteData", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[tokio::test]
    async fn reply_without_result_is_malformed() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/getWebsiteData");
                then.status(200).json_body(json!({ "unexpected": true }));
            })
            .await;

        let err = CallableClient::new(server.base_url(), Client::new())
            .call("getWebsiteData", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Backend(BackendFailure::Malformed)));
    }
}
