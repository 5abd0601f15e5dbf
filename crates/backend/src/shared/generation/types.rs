use async_trait::async_trait;
use thiserror::Error;

/// Ошибки генерации изображения
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0} not found in environment variables.")]
    MissingApiKey(String),

    #[error("image API returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("API response did not contain image data. Response: {0}")]
    NoImage(String),

    #[error("Image payload is not valid base64: {0}")]
    InvalidPayload(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }
}

/// Изображение, полученное от провайдера; payload остаётся в base64,
/// в таком виде он и уходит клиенту
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub image_b64: String,
    /// Size of the decoded image
    pub size_bytes: usize,
}

/// Трейт для провайдеров генерации изображений
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Сгенерировать одно изображение по текстовому prompt
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, GenerationError>;

    /// Получить название провайдера
    fn provider_name(&self) -> &str;
}
