//! Configuration for sitecraft.
//!
//! Loads an optional `sitecraft.toml`; environment variables override the
//! file, and the CLI overrides both.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

use crate::error::FetchError;

pub const ENV_PROJECT_ID: &str = "SITECRAFT_PROJECT_ID";
pub const ENV_FIREBASE_PROJECT: &str = "SITECRAFT_FIREBASE_PROJECT";
pub const ENV_FIREBASE_API_KEY: &str = "SITECRAFT_FIREBASE_API_KEY";
pub const ENV_FUNCTIONS_REGION: &str = "SITECRAFT_FUNCTIONS_REGION";
pub const ENV_FIRESTORE_URL: &str = "SITECRAFT_FIRESTORE_URL";
pub const ENV_FUNCTIONS_URL: &str = "SITECRAFT_FUNCTIONS_URL";

pub const DEFAULT_CONFIG_FILE: &str = "sitecraft.toml";
const FIRESTORE_API: &str = "https://firestore.googleapis.com/v1";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site identifier: the `projects/{id}` document the site is built from.
    pub project_id: Option<String>,
    pub firebase: FirebaseConfig,
}

/// Where the remote store lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FirebaseConfig {
    /// Cloud project hosting Firestore and the functions.
    pub project: Option<String>,
    pub api_key: Option<String>,
    pub functions_region: String,
    /// Full documents base URL; overrides the one derived from `project`.
    pub firestore_url: Option<String>,
    /// Functions base URL; overrides the one derived from `project`.
    pub functions_url: Option<String>,
    /// Transport timeout handed to the HTTP client.
    pub timeout_secs: u64,
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            project: None,
            api_key: None,
            functions_region: "us-central1".to_string(),
            firestore_url: None,
            functions_url: None,
            timeout_secs: 30,
        }
    }
}

impl SiteConfig {
    /// Load config from `sitecraft.toml` in the given directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(DEFAULT_CONFIG_FILE))
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Overlay values from the process environment.
    pub fn with_env(self) -> Self {
        self.with_vars(|key| std::env::var(key).ok())
    }

    /// Overlay values from any variable lookup. Blank values are ignored.
    pub fn with_vars<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENV_PROJECT_ID) {
            self.project_id = Some(v);
        }
        if let Some(v) = get(ENV_FIREBASE_PROJECT) {
            self.firebase.project = Some(v);
        }
        if let Some(v) = get(ENV_FIREBASE_API_KEY) {
            self.firebase.api_key = Some(v);
        }
        if let Some(v) = get(ENV_FUNCTIONS_REGION) {
            self.firebase.functions_region = v;
        }
        if let Some(v) = get(ENV_FIRESTORE_URL) {
            self.firebase.firestore_url = Some(v);
        }
        if let Some(v) = get(ENV_FUNCTIONS_URL) {
            self.firebase.functions_url = Some(v);
        }
        self
    }

    /// The configured site identifier, if it is non-blank.
    pub fn site_id(&self) -> Option<&str> {
        self.project_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

impl FirebaseConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL that document paths are appended to.
    pub fn firestore_base_url(&self) -> Result<String, FetchError> {
        if let Some(url) = &self.firestore_url {
            return Ok(url.trim_end_matches('/').to_string());
        }
        let project = self.require_project()?;
        Ok(format!(
            "{}/projects/{}/databases/(default)/documents",
            FIRESTORE_API, project
        ))
    }

    /// Base URL that function names are appended to.
    pub fn functions_base_url(&self) -> Result<String, FetchError> {
        if let Some(url) = &self.functions_url {
            return Ok(url.trim_end_matches('/').to_string());
        }
        let project = self.require_project()?;
        Ok(format!(
            "https://{}-{}.cloudfunctions.net",
            self.functions_region, project
        ))
    }

    fn require_project(&self) -> Result<&str, FetchError> {
        self.project
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| FetchError::Configuration("missing firebase project".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::load(dir.path());
        assert!(config.project_id.is_none());
        assert_eq!(config.firebase.functions_region, "us-central1");
        assert_eq!(config.firebase.timeout_secs, 30);
    }

    #[test]
    fn loads_toml_file() {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join("sitecraft.toml")).unwrap();
        writeln!(
            file,
            r#"
project_id = "salon-42"

[firebase]
project = "acme-prod"
functions_region = "europe-west1"
"#
        )
        .unwrap();

        let config = SiteConfig::load(dir.path());
        assert_eq!(config.site_id(), Some("salon-42"));
        assert_eq!(
            config.firebase.functions_base_url().unwrap(),
            "https://europe-west1-acme-prod.cloudfunctions.net"
        );
        assert_eq!(
            config.firebase.firestore_base_url().unwrap(),
            "https://firestore.googleapis.com/v1/projects/acme-prod/databases/(default)/documents"
        );
    }

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("sitecraft.toml"), "project_id = [").unwrap();
        let config = SiteConfig::load(dir.path());
        assert!(config.project_id.is_none());
    }

    #[test]
    fn environment_overrides_file_values() {
        let vars: HashMap<&str, &str> = [
            (ENV_PROJECT_ID, "from-env"),
            (ENV_FIRESTORE_URL, "http://localhost:8080/docs/"),
            (ENV_FIREBASE_API_KEY, "   "),
        ]
        .into_iter()
        .collect();

        let config = SiteConfig {
            project_id: Some("from-file".into()),
            ..Default::default()
        }
        .with_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.site_id(), Some("from-env"));
        assert_eq!(
            config.firebase.firestore_base_url().unwrap(),
            "http://localhost:8080/docs"
        );
        assert!(config.firebase.api_key.is_none());
    }

    #[test]
    fn blank_site_id_is_absent() {
        let config = SiteConfig {
            project_id: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(config.site_id(), None);
    }

    #[test]
    fn urls_need_a_project() {
        let err = FirebaseConfig::default().functions_base_url().unwrap_err();
        assert!(matches!(err, FetchError::Configuration(_)));
    }
}
