use super::types::{GeneratedImage, GenerationError, ImageGenerator};
use crate::shared::config::GeminiConfig;
use async_trait::async_trait;
use base64::Engine;
use contracts::generation::DEFAULT_MIME_TYPE;
use serde::{Deserialize, Serialize};

/// Максимальная длина тела ответа, попадающего в текст ошибки и в лог
const PREVIEW_LEN: usize = 500;

/// Gemini провайдер (generateContent с модальностью IMAGE)
pub struct GeminiProvider {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key_env: String,
    api_key: Option<String>,
}

impl GeminiProvider {
    /// Создать провайдер из конфига; ключ читается из окружения.
    ///
    /// A missing key is not fatal here: the server still starts and every
    /// generation request reports the missing key.
    pub fn from_config(config: &GeminiConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        let api_key = config.api_key();
        if api_key.is_none() {
            tracing::warn!(
                "{} is not set; /api/generate will fail until it is provided",
                config.api_key_env
            );
        }

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key_env: config.api_key_env.clone(),
            api_key,
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[async_trait]
impl ImageGenerator for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GenerationError::MissingApiKey(self.api_key_env.clone()))?;

        let url = self.url();
        tracing::debug!("POST {} (prompt: {} chars)", url, prompt.chars().count());

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&GeminiRequest::for_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!("Gemini API request failed with status {}: {}", status, preview(&body));
            return Err(GenerationError::Upstream {
                status: status.as_u16(),
                body: preview(&body),
            });
        }

        let parsed: GeminiResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            GenerationError::NoImage(preview(&body))
        })?;

        extract_image(parsed, &body)
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

/// Первая часть первого кандидата, содержащая `inlineData`
fn extract_image(response: GeminiResponse, raw: &str) -> Result<GeneratedImage, GenerationError> {
    let inline = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.inline_data))
        .filter(|inline| !inline.data.is_empty())
        .ok_or_else(|| GenerationError::NoImage(preview(raw)))?;

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(&inline.data)
        .map_err(|e| GenerationError::InvalidPayload(e.to_string()))?;

    Ok(GeneratedImage {
        mime_type: inline
            .mime_type
            .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
        image_b64: inline.data,
        size_bytes: decoded.len(),
    })
}

fn preview(body: &str) -> String {
    let preview: String = body.chars().take(PREVIEW_LEN).collect();
    if preview.len() < body.len() {
        format!("{}...", preview)
    } else {
        preview
    }
}

// ─── Wire types ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

impl GeminiRequest {
    fn for_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["TEXT", "IMAGE"],
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
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
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: Option<String>,
    #[serde(default)]
    data: String,
}
