use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{common::entities::app_errors::CoreError, inference::ports::InferenceClient};

/// Inference adapter for the Gemini `generateContent` endpoint.
///
/// Fails fast with `CoreError::MissingCredential` before any I/O when no
/// API key is configured.
#[derive(Debug, Clone)]
pub struct GeminiInferenceClient {
    api_key: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: String,
}

impl GeminiInferenceClient {
    pub fn new(api_key: String, model_name: String) -> Self {
        Self {
            api_key,
            model_name,
            client: Client::new(),
        }
    }

    fn ensure_credential(&self) -> Result<(), CoreError> {
        if self.api_key.trim().is_empty() {
            return Err(CoreError::MissingCredential);
        }
        Ok(())
    }

    fn image_part(image_data: &[u8]) -> Part {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: "image/jpeg".to_string(),
                data: general_purpose::STANDARD.encode(image_data),
            },
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response envelope: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or(CoreError::EmptyResponse)
    }
}

impl InferenceClient for GeminiInferenceClient {
    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        self.ensure_credential()?;

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        };

        self.call_gemini_api(request).await
    }

    async fn generate_with_images(
        &self,
        prompt: String,
        images: Vec<Vec<u8>>,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        self.ensure_credential()?;

        let mut parts: Vec<Part> = images.iter().map(|img| Self::image_part(img)).collect();
        parts.push(Part::Text { text: prompt });

        let request = GeminiRequest {
            contents: vec![Content { parts }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        };

        self.call_gemini_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn missing_credential_fails_before_any_io() {
        let client = GeminiInferenceClient::new(String::new(), "gemini-2.5-flash".to_string());

        let text = client
            .generate_with_text("prompt".to_string(), json!({"type": "object"}))
            .await;
        assert!(matches!(text, Err(CoreError::MissingCredential)));

        let image = client
            .generate_with_images(
                "prompt".to_string(),
                vec![vec![1, 2, 3]],
                json!({"type": "object"}),
            )
            .await;
        assert!(matches!(image, Err(CoreError::MissingCredential)));
    }

    #[tokio::test]
    async fn blank_credential_counts_as_missing() {
        let client =
            GeminiInferenceClient::new("   ".to_string(), "gemini-2.5-flash".to_string());

        let outcome = client
            .generate_with_text("prompt".to_string(), json!({"type": "object"}))
            .await;
        assert!(matches!(outcome, Err(CoreError::MissingCredential)));
    }

    #[test]
    fn image_parts_are_base64_inline_data() {
        let part = GeminiInferenceClient::image_part(&[0xFF, 0xD8, 0xFF]);
        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(value["inline_data"]["mime_type"], "image/jpeg");
        assert_eq!(value["inline_data"]["data"], "/9j/");
    }
}
