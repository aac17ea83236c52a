use thiserror::Error;

/// Errors from skin lookups.
///
/// Every variant propagates unchanged from the provider to the caller of
/// `DisguiseBuilder::build`; nothing in the pipeline recovers locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkinError {
    #[error("http request failed: {message}")]
    Http { message: String },

    #[error("unexpected HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("malformed {provider} response: {message}")]
    MalformedResponse { provider: String, message: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("skin lookup task failed: {0}")]
    Task(String),
}

impl SkinError {
    pub fn malformed(provider: &str, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider: provider.to_string(),
            message: message.into(),
        }
    }
}
