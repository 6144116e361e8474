//! Google Gemini client using the Generative Language `generateContent` API.
//!
//! Sends the prompt as a text part followed by the image as an inline-data
//! part, and returns the first candidate's text untouched.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use super::provider::{ModelClient, ModelRequest, ModelResponse};
use crate::config::ModelConfig;
use crate::credential::Credential;
use crate::error::ModelError;

/// Gemini client. Holds the credential loaded at startup.
pub struct GeminiClient {
    endpoint: String,
    model: String,
    credential: Option<Credential>,
    key_hint: String,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(endpoint: &str, model: &str, credential: Option<Credential>) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.trim_start_matches("models/").to_string(),
            credential,
            key_hint: crate::credential::DEFAULT_API_KEY_VAR.to_string(),
            timeout: None,
            client: reqwest::Client::new(),
        }
    }

    /// Build a client from config, with an optional model override from the CLI.
    pub fn from_config(
        config: &ModelConfig,
        model_override: Option<&str>,
        credential: Option<Credential>,
    ) -> Self {
        let model = model_override.unwrap_or(&config.model);
        let mut client = Self::new(&config.endpoint, model, credential);
        client.key_hint = Credential::source_hint(config);
        client.timeout = config.timeout_secs.map(Duration::from_secs);
        client
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

// --- Request types ---

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: Blob },
}

#[derive(Serialize)]
struct Blob {
    mime_type: String,
    data: String,
}

impl GenerateContentRequest {
    fn from_request(request: &ModelRequest) -> Self {
        let image = request.image();
        Self {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: request.prompt().to_string(),
                    },
                    Part::InlineData {
                        inline_data: Blob {
                            mime_type: image.mime_type.clone(),
                            data: image.data.clone(),
                        },
                    },
                ],
            }],
        }
    }
}

// --- Response types ---

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
    model_version: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    total_token_count: Option<u32>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    status: Option<String>,
}

/// Pull the generated text out of a decoded response.
fn extract_text(model: &str, resp: GenerateContentResponse) -> Result<String, ModelError> {
    if let Some(reason) = resp.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(ModelError::Blocked {
            model: model.to_string(),
            reason,
        });
    }

    let Some(candidate) = resp.candidates.into_iter().next() else {
        return Err(ModelError::EmptyResponse {
            model: model.to_string(),
        });
    };

    let text = candidate
        .content
        .map(|c| {
            c.parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        let blocked = matches!(
            candidate.finish_reason.as_deref(),
            Some("SAFETY" | "RECITATION" | "PROHIBITED_CONTENT")
        );
        if blocked {
            return Err(ModelError::Blocked {
                model: model.to_string(),
                reason: candidate.finish_reason.unwrap_or_default(),
            });
        }
        return Err(ModelError::EmptyResponse {
            model: model.to_string(),
        });
    }

    Ok(text)
}

/// Human-readable message from an error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(status) => format!("{status}: {}", envelope.error.message),
            None => envelope.error.message,
        },
        Err(_) => body.trim().to_string(),
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn is_configured(&self) -> bool {
        self.credential.is_some()
    }

    async fn classify(&self, request: &ModelRequest) -> Result<ModelResponse, ModelError> {
        let Some(credential) = &self.credential else {
            return Err(ModelError::MissingApiKey {
                env_var: self.key_hint.clone(),
            });
        };

        let start = Instant::now();
        let body = GenerateContentRequest::from_request(request);

        let mut builder = self
            .client
            .post(self.url())
            .header("x-goog-api-key", credential.expose())
            .json(&body);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        tracing::debug!(model = %self.model, "Sending classification request");

        let resp = builder.send().await.map_err(|e| ModelError::Request {
            model: self.model.clone(),
            message: e.to_string(),
        })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ModelError::Http {
                model: self.model.clone(),
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        let decoded: GenerateContentResponse = resp.json().await.map_err(|e| ModelError::Parse {
            model: self.model.clone(),
            message: e.to_string(),
        })?;

        let tokens_used = decoded
            .usage_metadata
            .as_ref()
            .and_then(|u| u.total_token_count);
        let model = decoded
            .model_version
            .clone()
            .unwrap_or_else(|| self.model.clone());
        let text = extract_text(&self.model, decoded)?;

        Ok(ModelResponse {
            text,
            model,
            tokens_used,
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::ImagePayload;

    fn sample_request() -> ModelRequest {
        ModelRequest::classify(ImagePayload {
            mime_type: "image/jpeg".to_string(),
            data: "/9j/".to_string(),
        })
    }

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateContentRequest::from_request(&sample_request());
        let json = serde_json::to_value(&body).unwrap();
        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts.as_array().unwrap().len(), 2);
        assert!(parts[0]["text"]
            .as_str()
            .unwrap()
            .contains("white blood cell"));
        assert_eq!(parts[1]["inline_data"]["mime_type"], "image/jpeg");
        assert_eq!(parts[1]["inline_data"]["data"], "/9j/");
    }

    #[test]
    fn test_url_strips_models_prefix() {
        let client = GeminiClient::new(
            "https://generativelanguage.googleapis.com/v1beta/",
            "models/gemini-1.5-flash",
            None,
        );
        assert_eq!(client.model(), "gemini-1.5-flash");
        assert_eq!(
            client.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_from_config_model_override() {
        let config = ModelConfig::default();
        let client = GeminiClient::from_config(&config, Some("gemini-1.5-pro"), None);
        assert_eq!(client.model(), "gemini-1.5-pro");
        assert!(!client.is_configured());
    }

    #[test]
    fn test_extract_text_joins_parts_verbatim() {
        let resp = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"Type: Neutrophil.\n"},{"text":"Model accuracy: 92%"}]},"finishReason":"STOP"}]}"#,
        );
        let text = extract_text("gemini-1.5-flash", resp).unwrap();
        assert_eq!(text, "Type: Neutrophil.\nModel accuracy: 92%");
    }

    #[test]
    fn test_extract_text_blocked_prompt() {
        let resp = parse(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#);
        let err = extract_text("gemini-1.5-flash", resp).unwrap_err();
        assert!(matches!(err, ModelError::Blocked { reason, .. } if reason == "SAFETY"));
    }

    #[test]
    fn test_extract_text_no_candidates() {
        let resp = parse(r#"{"candidates":[]}"#);
        let err = extract_text("gemini-1.5-flash", resp).unwrap_err();
        assert!(matches!(err, ModelError::EmptyResponse { .. }));
    }

    #[test]
    fn test_extract_text_whitespace_only_is_empty() {
        let resp = parse(r#"{"candidates":[{"content":{"parts":[{"text":"  \n"}]}}]}"#);
        let err = extract_text("gemini-1.5-flash", resp).unwrap_err();
        assert!(matches!(err, ModelError::EmptyResponse { .. }));
    }

    #[test]
    fn test_extract_text_safety_finish_without_text() {
        let resp = parse(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#);
        let err = extract_text("gemini-1.5-flash", resp).unwrap_err();
        assert!(matches!(err, ModelError::Blocked { .. }));
    }

    #[test]
    fn test_error_message_from_envelope() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(
            error_message(body),
            "INVALID_ARGUMENT: API key not valid. Please pass a valid API key."
        );
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body() {
        assert_eq!(error_message("  upstream timeout \n"), "upstream timeout");
    }

    #[tokio::test]
    async fn test_classify_without_key_fails_before_sending() {
        let config = ModelConfig {
            api_key: "${LEUKO_UNSET_KEY_FOR_TEST}".to_string(),
            ..ModelConfig::default()
        };
        let client = GeminiClient::from_config(&config, None, None);
        let err = client.classify(&sample_request()).await.unwrap_err();
        match err {
            ModelError::MissingApiKey { env_var } => {
                assert_eq!(env_var, "LEUKO_UNSET_KEY_FOR_TEST")
            }
            other => panic!("Expected MissingApiKey, got {other:?}"),
        }
    }
}
