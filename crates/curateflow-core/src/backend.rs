use async_trait::async_trait;
use tracing::debug;

use crate::{
    composer::CurateRequest,
    config::GeminiConfig,
    error::{CurateError, Result},
};

pub const JSON_MIME_TYPE: &str = "application/json";

/// One schema-constrained generation call
#[derive(Debug, Clone, Copy)]
pub struct GenerateCall<'a> {
    pub api_key: &'a str,
    pub model: &'a str,
    pub response_mime_type: &'a str,
    pub request: &'a CurateRequest,
}

/// Seam between the client and the structured-text generation service.
///
/// Returns the raw reply text, or `None` when the service answered without
/// any text to parse.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, call: GenerateCall<'_>) -> Result<Option<String>>;
}

/// Gemini `generateContent` over REST
pub struct GeminiBackend {
    http: reqwest::Client,
    base_url: String,
}

impl GeminiBackend {
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("curateflow/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn generate(&self, call: GenerateCall<'_>) -> Result<Option<String>> {
        let url = self.endpoint(call.model);
        debug!(url = %url, "Sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", call.api_key)
            .json(&serde_json::json!({
                "systemInstruction": {
                    "parts": [{ "text": &call.request.system_instruction }],
                },
                "contents": [
                    {
                        "role": "user",
                        "parts": [{ "text": &call.request.user_message }],
                    },
                ],
                "generationConfig": {
                    "responseMimeType": call.response_mime_type,
                    "responseSchema": &call.request.response_schema,
                },
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CurateError::Backend {
                reason: format!("{}: {}", status, api_error_message(&body)),
            });
        }

        let response = response.json::<serde_json::Value>().await?;
        Ok(extract_text(&response))
    }
}

/// Concatenate the text parts of the first candidate
fn extract_text(response: &serde_json::Value) -> Option<String> {
    let text: String = response["candidates"][0]["content"]["parts"]
        .as_array()?
        .iter()
        .filter_map(|part| part["text"].as_str())
        .collect();

    (!text.trim().is_empty()).then_some(text)
}

/// Prefer the API's own `error.message`, fall back to the raw body
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
