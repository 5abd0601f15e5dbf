//! DTO для `POST /api/generate`, общие для frontend и backend.

use serde::{Deserialize, Deserializer, Serialize};

/// MIME type assumed when the upstream model does not report one.
pub const DEFAULT_MIME_TYPE: &str = "image/png";

/// Message shown when a failed response carries no `detail`.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Отсутствующий и `null` prompt читаются как пустая строка
    #[serde(default, deserialize_with = "null_as_empty")]
    pub prompt: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Успешный ответ: base64 изображения и его MIME type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateResponse {
    pub mime_type: String,
    pub image_b64: String,
}

impl GenerateResponse {
    /// `data:<mime_type>;base64,<image_b64>`, usable directly as `<img src>`.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.image_b64)
    }
}

/// Тело ответа при ошибке (любой не-2xx статус)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
        }
    }

    /// `detail`, or the generic fallback when it is missing or blank.
    pub fn message_or_default(&self) -> String {
        match self.detail.as_deref() {
            Some(detail) if !detail.trim().is_empty() => detail.to_string(),
            _ => UNKNOWN_ERROR_MESSAGE.to_string(),
        }
    }
}
