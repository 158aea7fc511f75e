//! REST API client for the Shotstack render endpoints.
//!
//! Wraps the Shotstack HTTP API (render submission, status retrieval)
//! using [`reqwest`]. Responses are kept as raw JSON so API handlers
//! can pass the remote body through to callers unchanged; typed
//! accessors sit on top where the poller needs them.

use promoforge_core::timeline::RenderPayload;

/// HTTP client for one Shotstack environment.
pub struct ShotstackClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Errors from the Shotstack REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ShotstackError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Shotstack returned a non-2xx status code.
    ///
    /// `message` is the most specific error text extractable from the
    /// body; `body` is the raw response for passthrough.
    #[error("Shotstack API error ({status}): {message}")]
    Api {
        status: u16,
        body: serde_json::Value,
        message: String,
    },

    /// A 2xx response whose body was not the expected shape.
    #[error("Malformed Shotstack response: {0}")]
    Malformed(String),
}

impl ShotstackClient {
    /// Create a client for a Shotstack environment.
    ///
    /// * `base_url` - environment base, e.g. `https://api.shotstack.io/v1`.
    /// * `api_key`  - key sent as the `x-api-key` header.
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Submit a render document.
    ///
    /// Sends `POST /render`. Returns the raw remote response body; on a
    /// non-2xx status the body is folded into [`ShotstackError::Api`]
    /// with the most specific message it carries.
    pub async fn submit(
        &self,
        payload: &RenderPayload,
    ) -> Result<serde_json::Value, ShotstackError> {
        tracing::info!("Submitting render request to Shotstack");

        let response = self
            .client
            .post(format!("{}/render", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(payload)
            .send()
            .await?;

        let body = Self::parse_body(response).await?;
        tracing::info!(render_id = render_id(&body), "Shotstack render queued");
        Ok(body)
    }

    /// Look up the status of a render by its server-assigned id.
    ///
    /// Sends `GET /render/{id}` and returns the raw remote body.
    pub async fn status(&self, id: &str) -> Result<serde_json::Value, ShotstackError> {
        let response = self
            .client
            .get(format!("{}/render/{}", self.base_url, id))
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        Self::parse_body(response).await
    }

    // ---- private helpers ----

    /// Read a response into JSON, converting non-2xx statuses into
    /// [`ShotstackError::Api`] with the body attached.
    async fn parse_body(response: reqwest::Response) -> Result<serde_json::Value, ShotstackError> {
        let status = response.status();
        let body: serde_json::Value = response
            .json()
            .await
            .unwrap_or(serde_json::Value::Null);

        if !status.is_success() {
            let message = extract_error_message(&body);
            tracing::error!(status = status.as_u16(), %message, "Shotstack API error");
            return Err(ShotstackError::Api {
                status: status.as_u16(),
                body,
                message,
            });
        }

        Ok(body)
    }
}

/// The server-assigned render id inside a successful submit body
/// (`response.id`), if present.
pub fn render_id(body: &serde_json::Value) -> Option<&str> {
    body.get("response")?.get("id")?.as_str()
}

/// Extract the most specific error message from a Shotstack error body.
///
/// Preference order: the `data` array of `{message}` validation errors
/// joined with commas, then a top-level `message`, then a top-level
/// `error`, then a generic fallback.
pub fn extract_error_message(body: &serde_json::Value) -> String {
    if let Some(errors) = body.get("data").and_then(|d| d.as_array()) {
        let messages: Vec<&str> = errors
            .iter()
            .filter_map(|e| e.get("message").and_then(|m| m.as_str()))
            .collect();
        if !messages.is_empty() {
            return messages.join(", ");
        }
    }

    if let Some(message) = body.get("message").and_then(|m| m.as_str()) {
        return message.to_string();
    }
    if let Some(error) = body.get("error").and_then(|e| e.as_str()) {
        return error.to_string();
    }

    "Shotstack API request failed".to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn error_message_prefers_the_validation_error_array() {
        let body = json!({
            "message": "Bad Request",
            "data": [
                { "message": "timeline.tracks must not be empty" },
                { "message": "output.format is invalid" },
            ],
        });
        assert_eq!(
            extract_error_message(&body),
            "timeline.tracks must not be empty, output.format is invalid"
        );
    }

    #[test]
    fn error_message_falls_back_to_message_then_error() {
        assert_eq!(
            extract_error_message(&json!({ "message": "nope" })),
            "nope"
        );
        assert_eq!(extract_error_message(&json!({ "error": "broken" })), "broken");
        assert_eq!(
            extract_error_message(&json!({})),
            "Shotstack API request failed"
        );
    }

    #[test]
    fn render_id_reads_the_nested_response_id() {
        let body = json!({ "response": { "id": "abc-123", "message": "queued" } });
        assert_eq!(render_id(&body), Some("abc-123"));
        assert_eq!(render_id(&json!({})), None);
    }
}
