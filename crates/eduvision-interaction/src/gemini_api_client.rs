//! GeminiApiClient - Direct REST API implementation for Gemini.
//!
//! Sends the prompt text and an optional inline image to
//! `models/{model}:generateContent` and returns the text of the first candidate.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use eduvision_core::config::{AppConfig, GeminiSecret};
use eduvision_core::{ClientFault, EduError, GenerationPrompt, GenerativeClient};
use eduvision_infrastructure::{ConfigService, EduPaths, SecretService};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::model_selection::ModelSelection;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client implementation that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiApiClient {
    client: Client,
    api_key: String,
    models: ModelSelection,
    base_url: String,
    timeout: Option<Duration>,
}

impl GeminiApiClient {
    /// Creates a new client with the provided API key and model choice.
    pub fn new(api_key: impl Into<String>, models: ModelSelection) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            models,
            base_url: BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Builds a client from loaded configuration and credentials.
    ///
    /// A model named in `secret.json` wins over the text model in
    /// `config.toml`.
    pub fn from_config(config: &AppConfig, secret: GeminiSecret) -> Self {
        let mut models = ModelSelection::from_config(&config.model);
        if let Some(model) = secret.model_name {
            models.text_model = model;
        }
        Self::new(secret.api_key, models)
            .with_timeout(Duration::from_secs(config.model.timeout_secs))
    }

    /// Loads `config.toml` and the Gemini credentials and builds a client.
    pub fn try_from_paths(paths: &EduPaths) -> Result<Self, EduError> {
        let config = ConfigService::new(paths.clone()).load()?;
        let secret = SecretService::new(paths.clone()).gemini()?;
        Ok(Self::from_config(&config, secret))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the API endpoint (e.g. a proxy).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn models(&self) -> &ModelSelection {
        &self.models
    }

    /// The key travels in a header so it never shows up in request URLs,
    /// and therefore never in reqwest error text.
    fn request_builder(&self, model: &str, body: &GenerateContentRequest) -> RequestBuilder {
        let url = format!("{}/{model}:generateContent", self.base_url);
        let mut request = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        request
    }

    async fn send_request(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<Option<String>, ClientFault> {
        let response = self
            .request_builder(model, body)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, &body_text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| {
                ClientFault::new(format!("Failed to parse Gemini response: {}", err.without_url()))
            })?;

        Ok(extract_text_response(parsed))
    }
}

#[async_trait]
impl GenerativeClient for GeminiApiClient {
    async fn generate(&self, prompt: GenerationPrompt) -> Result<Option<String>, ClientFault> {
        let model = self.models.model_for(prompt.has_image()).to_string();
        tracing::debug!(model = %model, has_image = prompt.has_image(), "Calling Gemini API");

        let request = build_request(&prompt)?;
        let result = self.send_request(&model, &request).await;

        match &result {
            Ok(Some(text)) => tracing::debug!("Gemini response received: {} characters", text.len()),
            Ok(None) => tracing::warn!("Gemini response contained no text"),
            Err(fault) => tracing::warn!("Gemini request failed: {}", fault),
        }
        result
    }
}

/// Image part first, then text.
fn build_request(prompt: &GenerationPrompt) -> Result<GenerateContentRequest, ClientFault> {
    let mut parts = Vec::new();

    if let Some(image) = &prompt.image {
        let bytes = image
            .encode_png()
            .map_err(|err| ClientFault::new(format!("Failed to encode image for Gemini: {err}")))?;
        parts.push(Part::InlineData {
            inline_data: InlineDataPayload {
                mime_type: image.mime_type().to_string(),
                data: BASE64_STANDARD.encode(bytes),
            },
        });
    }

    if !prompt.text.trim().is_empty() {
        parts.push(Part::Text {
            text: prompt.text.clone(),
        });
    }

    if parts.is_empty() {
        return Err(ClientFault::new(
            "Gemini payload must include text or an image",
        ));
    }

    Ok(GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts,
        }],
    })
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineDataPayload,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineDataPayload {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Concatenated text parts of the first candidate, if any.
fn extract_text_response(response: GenerateContentResponse) -> Option<String> {
    let content = response
        .candidates?
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)?;

    let texts: Vec<String> = content
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if texts.is_empty() {
        None
    } else {
        Some(texts.concat())
    }
}

fn map_http_error(status: StatusCode, body: &str) -> ClientFault {
    let message = serde_json::from_str::<ErrorWrapper>(body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.to_string());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| format!("HTTP {}: {}", status.as_u16(), body));

    ClientFault::new(message)
}

fn map_transport_error(err: reqwest::Error) -> ClientFault {
    // The URL names `/models/`, which classify_fault would read as a model
    // fault. Connection and timeout faults must mention "network" instead.
    let err = err.without_url();
    if err.is_connect() || err.is_timeout() {
        ClientFault::new(format!("network error: {err}"))
    } else {
        ClientFault::new(format!("Gemini API request failed: {err}"))
    }
}
