use thiserror::Error;

/// Failures a session operation can surface. Transport and decode problems
/// both come back through [`ClientError::Http`]; the caller decides whether
/// to show anything to the user.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server url {url:?}: {source}")]
    InvalidServerUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server accepted the move but returned no state")]
    MissingState,
}
