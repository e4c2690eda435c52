/// LLM Client: the single point of entry for calls to the hosted
/// text-generation model (Hugging Face Inference API).
///
/// No other module may call the inference endpoint directly.
///
/// One attempt per call, no retries. The recommendation orchestrator treats
/// every failure as a signal to serve the deterministic fallback instead.
use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Default inference endpoint; overridable through `HF_INFERENCE_URL`.
pub const HUGGING_FACE_API_URL: &str =
    "https://api-inference.huggingface.co/models/tiiuae/falcon-7b-instruct";
const MAX_NEW_TOKENS: u32 = 500;
const TEMPERATURE: f64 = 0.7;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Hugging Face API key not configured")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Inference API returned an empty body")]
    EmptyBody,

    #[error("Malformed inference payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f64,
    do_sample: bool,
    /// `false` so the response carries only newly generated text.
    return_full_text: bool,
}

/// The single inference client shared by all request handlers.
/// Cheap to clone: the inner `reqwest::Client` is reference counted.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl LlmClient {
    /// Builds a client for `endpoint`. A `None` or blank `api_key` is accepted
    /// here; calls made without one fail with `LlmError::MissingCredential`.
    pub fn new(
        api_key: Option<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint: endpoint.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends `prompt` to the inference endpoint and returns the generated text.
    ///
    /// Returns an empty string when the payload is valid JSON but carries no
    /// `generated_text` field.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingCredential)?;

        let request_body = InferenceRequest {
            inputs: prompt,
            parameters: GenerationParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                temperature: TEMPERATURE,
                do_sample: true,
                return_full_text: false,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Inference API returned {}: {}", status, body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        if body.trim().is_empty() {
            return Err(LlmError::EmptyBody);
        }

        let payload: Value = serde_json::from_str(&body)?;
        debug!("Raw inference response: {payload}");

        Ok(generated_text(&payload).unwrap_or_default().to_string())
    }
}

/// Picks `generated_text` from either `[{"generated_text": ...}, ...]` or a
/// bare `{"generated_text": ...}` object.
fn generated_text(payload: &Value) -> Option<&str> {
    let first = match payload {
        Value::Array(items) => items.first()?,
        other => other,
    };
    first.get("generated_text")?.as_str()
}

/// Hugging Face reports failures as `{"error": "..."}`; fall back to the raw body.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
