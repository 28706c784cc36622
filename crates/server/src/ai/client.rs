//! Completion client for the Anthropic Messages API

use async_trait::async_trait;
use healthai_core::{CompletionError, Prompt};
use serde::{Deserialize, Serialize};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

/// Text completion boundary used by every AI page.
///
/// Implementations make exactly one upstream call per `complete`.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system: Option<&str>, prompt: &str)
    -> Result<String, CompletionError>;
}

/// Send a built prompt through any client
pub async fn complete_prompt(
    client: &dyn CompletionClient,
    prompt: &Prompt,
) -> Result<String, CompletionError> {
    client.complete(Some(prompt.system), &prompt.user).await
}

/// Stand-in used when no API key is configured; fails every call without
/// touching the network
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredClient;

#[async_trait]
impl CompletionClient for UnconfiguredClient {
    async fn complete(
        &self,
        _system: Option<&str>,
        _prompt: &str,
    ) -> Result<String, CompletionError> {
        Err(CompletionError::NotConfigured)
    }
}

/// Client for the Anthropic Claude Messages API
#[derive(Clone)]
pub struct ClaudeClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    api_url: String,
}

/// A message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// Content block of a response; only text is read back
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

/// Request body for the Messages API
#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: Vec<Message>,
}

/// Response from the Messages API
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
}

/// Error detail from the Messages API
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl ClaudeClient {
    /// Create a new client with the given API key and model
    pub fn new(api_key: String, model: String, max_tokens: u32) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
            max_tokens,
            api_url: API_URL.to_string(),
        }
    }

    /// Point the client at another Messages-compatible endpoint
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    async fn send(&self, system: Option<&str>, prompt: &str) -> Result<ApiResponse, CompletionError> {
        let request = ApiRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .http
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiError>(&body) {
                Ok(api_err) => api_err.error.message,
                Err(_) => body,
            };
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<ApiResponse>()
            .await
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl CompletionClient for ClaudeClient {
    async fn complete(
        &self,
        system: Option<&str>,
        prompt: &str,
    ) -> Result<String, CompletionError> {
        let response = self.send(system, prompt).await?;
        tracing::debug!(
            model = %self.model,
            stop_reason = response.stop_reason.as_deref().unwrap_or("unknown"),
            "Completion received"
        );
        extract_text(&response)
    }
}

/// First text block of a response
pub fn extract_text(response: &ApiResponse) -> Result<String, CompletionError> {
    response
        .content
        .iter()
        .find_map(|block| match block {
            ContentBlock::Text { text } => Some(text.clone()),
            ContentBlock::Other => None,
        })
        .ok_or(CompletionError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::HeaderMap, http::StatusCode, routing::post};
    use serde_json::{Value as JsonValue, json};

    /// Serve `router` on an ephemeral port and return its messages URL
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/v1/messages", addr)
    }

    fn client(url: String) -> ClaudeClient {
        ClaudeClient::new("sk-test".into(), "test-model".into(), 256).with_api_url(url)
    }

    #[tokio::test]
    async fn unconfigured_client_reports_not_configured() {
        let err = UnconfiguredClient.complete(None, "hi").await.unwrap_err();
        assert_eq!(err, CompletionError::NotConfigured);
    }

    #[test]
    fn extract_text_skips_non_text_blocks() {
        let response: ApiResponse = serde_json::from_value(json!({
            "content": [
                {"type": "thinking", "thinking": "..."},
                {"type": "text", "text": "Drink water."}
            ],
            "stop_reason": "end_turn"
        }))
        .unwrap();
        assert_eq!(extract_text(&response).unwrap(), "Drink water.");
    }

    #[test]
    fn extract_text_without_text_is_empty_response() {
        let response: ApiResponse = serde_json::from_value(json!({"content": []})).unwrap();
        assert_eq!(extract_text(&response), Err(CompletionError::EmptyResponse));
    }

    #[tokio::test]
    async fn sends_headers_and_returns_text() {
        let router = Router::new().route(
            "/v1/messages",
            post(|headers: HeaderMap, Json(body): Json<JsonValue>| async move {
                assert_eq!(headers["x-api-key"], "sk-test");
                assert_eq!(headers["anthropic-version"], API_VERSION);
                assert_eq!(body["model"], "test-model");
                assert_eq!(body["max_tokens"], 256);
                assert_eq!(body["system"], "be brief");
                assert_eq!(body["messages"][0]["role"], "user");
                let echoed = format!("echo: {}", body["messages"][0]["content"].as_str().unwrap());
                Json(json!({
                    "id": "msg_1",
                    "content": [{"type": "text", "text": echoed}],
                    "stop_reason": "end_turn"
                }))
            }),
        );
        let url = serve(router).await;

        let text = client(url).complete(Some("be brief"), "hello").await.unwrap();
        assert_eq!(text, "echo: hello");
    }

    #[tokio::test]
    async fn api_errors_carry_status_and_message() {
        let router = Router::new().route(
            "/v1/messages",
            post(|| async {
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(json!({"type": "error", "error": {"type": "rate_limit_error", "message": "Slow down"}})),
                )
            }),
        );
        let url = serve(router).await;

        let err = client(url).complete(None, "hi").await.unwrap_err();
        assert_eq!(
            err,
            CompletionError::Api {
                status: 429,
                message: "Slow down".to_string()
            }
        );
    }

    #[tokio::test]
    async fn unparseable_body_is_malformed() {
        let router = Router::new().route("/v1/messages", post(|| async { "not json" }));
        let url = serve(router).await;

        let err = client(url).complete(None, "hi").await.unwrap_err();
        assert_eq!(err.kind(), "malformed-response");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_transport_error() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(format!("http://{}/v1/messages", addr))
            .complete(None, "hi")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "transport");
    }
}
