use super::{ContentGenerator, GenerationRequest, RemoteError, RemoteErrorKind};
use crate::config::GeminiConfig;
use crate::error::{Result, TripcraftError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    status: Option<String>,
}

/// HTTP client for the Gemini `generateContent` endpoint
pub struct GeminiClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl GeminiClient {
    /// Create a client from explicit configuration and credential
    pub fn new(config: &GeminiConfig, api_key: String) -> Result<Self> {
        let mut builder = Client::builder();
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
        }
        let http = builder
            .build()
            .map_err(|e| TripcraftError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let mut base_url = Url::parse(&config.base_url)
            .map_err(|e| TripcraftError::ConfigInvalid(format!("Invalid base_url '{}': {}", config.base_url, e)))?;
        // Url::join replaces the last segment unless the path ends in a slash
        let path = format!("{}/", base_url.path().trim_end_matches('/'));
        base_url.set_path(&path);

        Ok(GeminiClient {
            http,
            base_url,
            api_key,
        })
    }

    fn endpoint(&self, model: &str) -> std::result::Result<Url, RemoteError> {
        self.base_url
            .join(&format!("v1beta/models/{}:generateContent", model))
            .map_err(|e| RemoteError::new(RemoteErrorKind::Other, format!("Invalid endpoint for model '{}': {}", model, e)))
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> std::result::Result<String, RemoteError> {
        let endpoint = self.endpoint(&request.model)?;

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: &request.response_mime_type,
                temperature: request.temperature,
            },
        };

        tracing::debug!(model = %request.model, prompt_len = request.prompt.len(), "Sending generateContent request");

        let response = self
            .http
            .post(endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let message = format!("Request failed: {}", e);
                if e.is_timeout() || e.is_connect() {
                    RemoteError::new(RemoteErrorKind::Transient, message)
                } else {
                    RemoteError::from_message(message)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), &text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| RemoteError::new(RemoteErrorKind::Other, format!("Failed to read response: {}", e)))?;

        let text = response_text(&parsed).unwrap_or_else(|| {
            tracing::warn!("Gemini response contained no text");
            "{}".to_string()
        });

        tracing::debug!(response_len = text.len(), "Received generateContent response");
        Ok(text)
    }
}

/// Concatenated text parts of the first candidate
fn response_text(response: &GenerateContentResponse) -> Option<String> {
    let parts = &response.candidates.first()?.content.as_ref()?.parts;
    let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn api_error(http_status: u16, body: &str) -> RemoteError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => {
            let kind = RemoteErrorKind::from_status(
                http_status,
                parsed.error.status.as_deref(),
                &parsed.error.message,
            );
            RemoteError::new(kind, parsed.error.message)
        }
        Err(_) => {
            let kind = RemoteErrorKind::from_status(http_status, None, body);
            RemoteError::new(kind, format!("API returned status {}: {}", http_status, body.trim()))
        }
    }
}
