//! HTTP client for the public word API.

use super::{ServiceError, WordService};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Base URL of the public word API.
pub const DEFAULT_API_URL: &str = "https://words.dev-apis.com";

/// Response body of `GET /word-of-the-day`.
#[derive(Debug, Clone, Deserialize)]
struct WordOfTheDay {
    word: String,
}

/// Request body of `POST /validate-word`.
#[derive(Debug, Clone, Serialize)]
struct ValidateRequest<'a> {
    word: &'a str,
}

/// Response body of `POST /validate-word`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateResponse {
    valid_word: bool,
}

/// Word service backed by the word API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpWordService {
    /// Base URL without trailing slash.
    base_url: String,
    /// HTTP client.
    client: reqwest::Client,
}

impl HttpWordService {
    /// Creates a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl Default for HttpWordService {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[async_trait::async_trait]
impl WordService for HttpWordService {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn word_of_the_day(&self) -> Result<String, ServiceError> {
        let url = self.endpoint("word-of-the-day");
        debug!(url = %url, "Fetching word of the day");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| {
                error!(error = %e, "Word of the day request failed");
                ServiceError::fetch_failed(format!("HTTP request failed: {e}"))
            })?;

        let body: WordOfTheDay = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to decode word of the day");
            ServiceError::fetch_failed(format!("Failed to decode response: {e}"))
        })?;

        info!("Fetched word of the day");
        Ok(body.word)
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn validate_word(&self, word: &str) -> Result<bool, ServiceError> {
        let url = self.endpoint("validate-word");
        debug!(url = %url, "Validating guess");

        let response = self
            .client
            .post(&url)
            .json(&ValidateRequest { word })
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| {
                error!(error = %e, "Validation request failed");
                ServiceError::validation_failed(format!("HTTP request failed: {e}"))
            })?;

        let body: ValidateResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to decode validation response");
            ServiceError::validation_failed(format!("Failed to decode response: {e}"))
        })?;

        debug!(valid = body.valid_word, "Validation finished");
        Ok(body.valid_word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::ServiceErrorKind;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port
    async fn serve_once(status: &'static str, body: &'static str) -> HttpWordService {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if request_complete(&request) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        HttpWordService {
            base_url: format!("http://{addr}"),
            client: reqwest::Client::builder().no_proxy().build().unwrap(),
        }
    }

    /// Headers received and, if announced, the whole body
    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(end) = text.find("\r\n\r\n") else {
            return false;
        };
        let length = text[..end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        request.len() >= end + 4 + length
    }

    #[tokio::test]
    async fn fetches_word_from_server() {
        let service = serve_once("200 OK", r#"{"word":"crane","puzzleNumber":7}"#).await;
        assert_eq!(service.word_of_the_day().await.unwrap(), "crane");
    }

    #[tokio::test]
    async fn validates_word_against_server() {
        let service = serve_once("200 OK", r#"{"word":"CRANE","validWord":true}"#).await;
        assert!(service.validate_word("CRANE").await.unwrap());
    }

    #[tokio::test]
    async fn server_error_is_fetch_failure() {
        let service = serve_once("500 Internal Server Error", "").await;
        let err = service.word_of_the_day().await.unwrap_err();
        assert_eq!(err.kind, ServiceErrorKind::FetchFailed);
    }

    #[tokio::test]
    async fn undecodable_word_is_fetch_failure() {
        let service = serve_once("200 OK", r#"{"puzzleNumber":7}"#).await;
        let err = service.word_of_the_day().await.unwrap_err();
        assert_eq!(err.kind, ServiceErrorKind::FetchFailed);
    }

    #[tokio::test]
    async fn server_error_is_validation_failure() {
        let service = serve_once("503 Service Unavailable", "").await;
        let err = service.validate_word("CRANE").await.unwrap_err();
        assert_eq!(err.kind, ServiceErrorKind::ValidationFailed);
    }

    #[tokio::test]
    async fn undecodable_verdict_is_validation_failure() {
        let service = serve_once("200 OK", "not json").await;
        let err = service.validate_word("CRANE").await.unwrap_err();
        assert_eq!(err.kind, ServiceErrorKind::ValidationFailed);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let service = HttpWordService::new("http://localhost:8080/");
        assert_eq!(service.base_url(), "http://localhost:8080");
        assert_eq!(
            service.endpoint("validate-word"),
            "http://localhost:8080/validate-word"
        );
    }

    #[test]
    fn default_points_at_public_api() {
        assert_eq!(HttpWordService::default().base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn decodes_word_of_the_day() {
        let body: WordOfTheDay =
            serde_json::from_str(r#"{"word":"hello","puzzleNumber":42}"#).unwrap();
        assert_eq!(body.word, "hello");
    }

    #[test]
    fn decodes_validation_response() {
        let body: ValidateResponse =
            serde_json::from_str(r#"{"word":"crane","validWord":true}"#).unwrap();
        assert!(body.valid_word);

        let body: ValidateResponse =
            serde_json::from_str(r#"{"word":"xxxxx","validWord":false}"#).unwrap();
        assert!(!body.valid_word);
    }

    #[test]
    fn encodes_validation_request() {
        let json = serde_json::to_value(ValidateRequest { word: "CRANE" }).unwrap();
        assert_eq!(json, serde_json::json!({ "word": "CRANE" }));
    }
}
