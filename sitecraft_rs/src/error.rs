use thiserror::Error;

/// Why a single fetch path failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Required configuration is missing. Not retried.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// The primary-path document does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// The remote procedure answered, but not with usable data.
    #[error("backend error: {0}")]
    Backend(BackendFailure),
    /// Network or HTTP-level failure on either path.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Ways a remote procedure response can be unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BackendFailure {
    #[error("malformed response")]
    Malformed,
    #[error("unsuccessful response")]
    Unsuccessful,
    #[error("empty payload")]
    EmptyPayload,
}

impl FetchError {
    /// True when the failure means "nothing is configured for this site"
    /// rather than "something broke".
    pub fn is_missing_content(&self) -> bool {
        matches!(
            self,
            FetchError::NotFound(_) | FetchError::Backend(BackendFailure::EmptyPayload)
        )
    }
}

impl From<BackendFailure> for FetchError {
    fn from(failure: BackendFailure) -> Self {
        FetchError::Backend(failure)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

/// The single user-facing failure of a page load.
///
/// Both path failures are kept so callers can inspect them.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Configuration(FetchError),
    #[error("No website data found. Please configure your website in the admin panel.")]
    NoContent {
        primary: FetchError,
        secondary: FetchError,
    },
    #[error("Failed to load website data: {secondary}")]
    Failed {
        primary: FetchError,
        secondary: FetchError,
    },
}

impl LoadError {
    /// Pick the user-facing variant for two failed paths.
    pub fn from_paths(primary: FetchError, secondary: FetchError) -> Self {
        if primary.is_missing_content() || secondary.is_missing_content() {
            LoadError::NoContent { primary, secondary }
        } else {
            LoadError::Failed { primary, secondary }
        }
    }

    pub fn missing_site_id() -> Self {
        LoadError::Configuration(FetchError::Configuration(
            "missing site identifier".to_string(),
        ))
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_content_classification() {
        assert!(FetchError::NotFound("doc".into()).is_missing_content());
        assert!(FetchError::Backend(BackendFailure::EmptyPayload).is_missing_content());
        assert!(!FetchError::Backend(BackendFailure::Unsuccessful).is_missing_content());
        assert!(!FetchError::Transport("reset".into()).is_missing_content());
    }

    #[test]
    fn user_message_for_missing_data() {
        let err = LoadError::from_paths(
            FetchError::Transport("offline".into()),
            BackendFailure::EmptyPayload.into(),
        );
        assert!(
            err.to_string()
                .to_lowercase()
                .contains("no website data found")
        );
    }

    #[test]
    fn generic_message_wraps_last_error() {
        let err = LoadError::from_paths(
            FetchError::Transport("offline".into()),
            BackendFailure::Unsuccessful.into(),
        );
        assert_eq!(
            err.to_string(),
            "Failed to load website data: backend error: unsuccessful response"
        );
    }

    #[test]
    fn configuration_error_is_transparent() {
        assert_eq!(
            LoadError::missing_site_id().to_string(),
            "configuration error: missing site identifier"
        );
    }
}
