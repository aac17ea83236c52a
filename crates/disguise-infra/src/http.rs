//! HttpJsonFetcher -- reqwest implementation of the [`JsonFetcher`] port.
//!
//! The transport owns the request timeout; the skin pipeline above it
//! imposes none.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;

use disguise_core::skin::JsonFetcher;
use disguise_types::config::DisguiseConfig;
use disguise_types::error::SkinError;

/// GETs a URL and parses the body as JSON.
///
/// `204 No Content` and blank bodies map to [`Value::Null`]; any other
/// non-success status is a [`SkinError::Status`].
#[derive(Debug, Clone)]
pub struct HttpJsonFetcher {
    client: reqwest::Client,
}

impl HttpJsonFetcher {
    pub fn new(config: &DisguiseConfig) -> Result<Self, SkinError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| SkinError::Http {
                message: format!("failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }
}

impl JsonFetcher for HttpJsonFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value, SkinError> {
        let response = self.client.get(url).send().await.map_err(|e| SkinError::Http {
            message: format!("GET {url} failed: {e}"),
        })?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            tracing::debug!(%url, "no content, treating as absent profile");
            return Ok(Value::Null);
        }
        if !status.is_success() {
            return Err(SkinError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| SkinError::Http {
            message: format!("reading body of {url} failed: {e}"),
        })?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&body)
            .map_err(|e| SkinError::Deserialization(format!("invalid JSON from {url}: {e}")))
    }
}

#[cfg(test)]
pub(crate) mod test_server {
    use axum::Router;

    /// Serve `router` on an ephemeral local port and return its base URL.
    pub async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    use super::*;

    fn fetcher() -> HttpJsonFetcher {
        HttpJsonFetcher::new(&DisguiseConfig::default()).unwrap()
    }

    async fn server() -> String {
        let router = Router::new()
            .route("/json", get(|| async { Json(json!({ "properties": [] })) }))
            .route("/no-content", get(|| async { AxumStatus::NO_CONTENT }))
            .route("/blank", get(|| async { "  \n" }))
            .route("/broken", get(|| async { AxumStatus::INTERNAL_SERVER_ERROR }))
            .route("/garbage", get(|| async { "<html>not json</html>" }));
        test_server::spawn(router).await
    }

    #[tokio::test]
    async fn test_fetch_parses_json() {
        let base = server().await;
        let body = fetcher().fetch_json(&format!("{base}/json")).await.unwrap();
        assert_eq!(body, json!({ "properties": [] }));
    }

    #[tokio::test]
    async fn test_no_content_and_blank_body_are_null() {
        let base = server().await;
        let f = fetcher();
        assert_eq!(f.fetch_json(&format!("{base}/no-content")).await.unwrap(), Value::Null);
        assert_eq!(f.fetch_json(&format!("{base}/blank")).await.unwrap(), Value::Null);
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let base = server().await;
        let url = format!("{base}/broken");
        let err = fetcher().fetch_json(&url).await.unwrap_err();
        assert_eq!(err, SkinError::Status { status: 500, url });
    }

    #[tokio::test]
    async fn test_not_found_is_reported() {
        let base = server().await;
        let err = fetcher().fetch_json(&format!("{base}/missing")).await.unwrap_err();
        assert!(matches!(err, SkinError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_invalid_json_is_deserialization_error() {
        let base = server().await;
        let err = fetcher().fetch_json(&format!("{base}/garbage")).await.unwrap_err();
        assert!(matches!(err, SkinError::Deserialization(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_http_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = fetcher().fetch_json(&format!("http://{addr}/json")).await.unwrap_err();
        assert!(matches!(err, SkinError::Http { .. }));
    }
}
