use reqwest::Client;
use serde_json::Value;

use crate::config::GeminiSettings;
use crate::error::{AppError, Result};
use crate::models::gemini::{GenerateContentRequest, GenerateContentResponse};

pub struct GeminiClient {
    http: Client,
    api_key: String,
    url: String,
    model: String,
}

impl GeminiClient {
    pub fn from_settings(settings: &GeminiSettings) -> Result<Self> {
        let api_key = settings.api_key.clone().ok_or(AppError::MissingApiKey)?;
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            api_key,
            url: settings.generate_content_url(),
            model: settings.model.clone(),
        })
    }

    /// Sends `prompt` as a single user message and returns the first candidate's text.
    pub async fn generate(&self, prompt: String) -> Result<String> {
        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "sending generateContent request");

        let payload = GenerateContentRequest::user_message(prompt);
        // The key travels in the query string; strip the URL so it never reaches an error message.
        let response = self
            .http
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        let body = response.text().await.map_err(reqwest::Error::without_url)?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), body_len = body.len(), "upstream returned an error");
            return Err(AppError::Upstream {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let value: Value = serde_json::from_str(&body)?;
        GenerateContentResponse::text_from_value(value)
    }
}
