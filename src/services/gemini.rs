//! Gemini `generateContent` client.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::generator::{GenerationError, TextGenerator};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            top_p: 1.0,
            top_k: 1,
            max_output_tokens: 2048,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    BlockNone,
    BlockOnlyHigh,
    BlockMediumAndAbove,
    BlockLowAndAbove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

/// Medium-and-above blocking for the four harm categories.
pub fn default_safety_settings() -> Vec<SafetySetting> {
    [
        HarmCategory::Harassment,
        HarmCategory::HateSpeech,
        HarmCategory::SexuallyExplicit,
        HarmCategory::DangerousContent,
    ]
    .into_iter()
    .map(|category| SafetySetting {
        category,
        threshold: HarmBlockThreshold::BlockMediumAndAbove,
    })
    .collect()
}

/// Everything the client needs, fixed at startup.
#[derive(Debug)]
pub struct GeminiSettings {
    pub api_key: SecretString,
    pub model: String,
    pub base_url: String,
    pub generation: GenerationConfig,
    pub safety: Vec<SafetySetting>,
}

impl GeminiSettings {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            generation: GenerationConfig::default(),
            safety: default_safety_settings(),
        }
    }
}

pub struct GeminiClient {
    settings: GeminiSettings,
    client: Client,
}

impl GeminiClient {
    pub fn new(settings: GeminiSettings) -> Result<Self, GenerationError> {
        // No request timeout: a slow model call blocks its request until it finishes.
        let client = Client::builder().build()?;
        Ok(Self { settings, client })
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = GenerateContentRequest {
            contents: [Content {
                role: "user",
                parts: [Part { text: prompt }],
            }],
            generation_config: &self.settings.generation,
            safety_settings: &self.settings.safety,
        };

        tracing::debug!(
            model = %self.settings.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.settings.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| GenerationError::Decode(e.to_string()))?;
        extract_text(parsed)
    }
}

/// Joins the text parts of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Result<String, GenerationError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(GenerationError::Blocked(reason));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(GenerationError::Empty)?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return match candidate.finish_reason.as_deref() {
            Some("SAFETY") => Err(GenerationError::Blocked("SAFETY".to_string())),
            _ => Err(GenerationError::Empty),
        };
    }
    Ok(text)
}

// Wire types

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: &'a GenerationConfig,
    safety_settings: &'a [SafetySetting],
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn joins_all_text_parts_of_first_candidate() {
        let response = parse(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "Fever is " }, { "text": "heat." }] },
                  "finishReason": "STOP" },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }));
        assert_eq!(extract_text(response).unwrap(), "Fever is heat.");
    }

    #[test]
    fn prompt_block_is_reported() {
        let response = parse(json!({ "promptFeedback": { "blockReason": "SAFETY" } }));
        assert!(matches!(extract_text(response), Err(GenerationError::Blocked(r)) if r == "SAFETY"));
    }

    #[test]
    fn safety_stop_without_text_is_blocked() {
        let response = parse(json!({ "candidates": [{ "finishReason": "SAFETY" }] }));
        assert!(matches!(extract_text(response), Err(GenerationError::Blocked(_))));
    }

    #[test]
    fn no_candidates_is_empty() {
        assert!(matches!(extract_text(parse(json!({}))), Err(GenerationError::Empty)));
    }

    #[test]
    fn request_serializes_provider_field_names() {
        let generation = GenerationConfig::default();
        let safety = default_safety_settings();
        let request = GenerateContentRequest {
            contents: [Content {
                role: "user",
                parts: [Part { text: "hi" }],
            }],
            generation_config: &generation,
            safety_settings: &safety,
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(value["generationConfig"]["topK"], 1);
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 2048);
        assert_eq!(value["safetySettings"].as_array().unwrap().len(), 4);
        assert_eq!(value["safetySettings"][1]["category"], "HARM_CATEGORY_HATE_SPEECH");
        assert_eq!(value["safetySettings"][1]["threshold"], "BLOCK_MEDIUM_AND_ABOVE");
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let mut settings = GeminiSettings::new(SecretString::new("k".to_string()));
        settings.base_url = "http://localhost:1234/v1beta/".to_string();
        let client = GeminiClient::new(settings).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:1234/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }
}
