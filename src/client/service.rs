use std::time::Duration;

use async_trait::async_trait;

use crate::api::types::{ErrorResponse, RecommendResponse};

pub const FALLBACK_ERROR: &str = "Something went wrong";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Network or body-decoding failure, surfaced with its own message.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// Non-success HTTP status; the message comes from the server's
    /// error body, or the generic fallback when it carries none.
    #[error("{0}")]
    Server(String),
}

/// The backend that turns a movie title into related titles.
#[async_trait]
pub trait RecommendationService: Send + Sync {
    async fn recommend(&self, title: &str) -> Result<Vec<String>, ServiceError>;
}

/// Production service: calls `GET {base}/recommend?title=...` over HTTP.
pub struct HttpRecommendClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpRecommendClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// The query parameter is percent-encoded so reserved characters in
    /// titles round-trip to the server unchanged.
    fn recommend_url(&self, title: &str) -> String {
        format!(
            "{}/recommend?title={}",
            self.base_url,
            urlencoding::encode(title)
        )
    }
}

#[async_trait]
impl RecommendationService for HttpRecommendClient {
    async fn recommend(&self, title: &str) -> Result<Vec<String>, ServiceError> {
        let response = self.http.get(self.recommend_url(title)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Server(error_message(&body)));
        }

        let body: RecommendResponse = response.json().await?;
        Ok(body.recommendations)
    }
}

/// Extract the server's error message from a response body, falling back
/// to a generic message when the body has none.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.error)
        .unwrap_or_else(|| FALLBACK_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_message_from_body() {
        assert_eq!(
            error_message(r#"{"error": "Movie not found"}"#),
            "Movie not found"
        );
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(error_message(""), FALLBACK_ERROR);
        assert_eq!(error_message("{}"), FALLBACK_ERROR);
        assert_eq!(error_message("not json"), FALLBACK_ERROR);
        assert_eq!(error_message(r#"{"error": null}"#), FALLBACK_ERROR);
    }

    #[test]
    fn test_recommend_url_encodes_reserved_characters() {
        let client = HttpRecommendClient::new("http://localhost:8080/").unwrap();
        let url = client.recommend_url("Fast & Furious? #7");

        let (base, query) = url.split_once("?title=").unwrap();
        assert_eq!(base, "http://localhost:8080/recommend");
        assert!(!query.contains('&'));
        assert!(!query.contains('?'));
        assert!(!query.contains('#'));
        assert!(!query.contains(' '));

        // Round trip: decoding the parameter restores the original title.
        assert_eq!(urlencoding::decode(query).unwrap(), "Fast & Furious? #7");
    }

    #[test]
    fn test_recommend_url_plain_title() {
        let client = HttpRecommendClient::new("http://localhost:8080").unwrap();
        assert_eq!(
            client.recommend_url("Heat"),
            "http://localhost:8080/recommend?title=Heat"
        );
    }
}
