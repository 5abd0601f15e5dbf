use contracts::generation::{ErrorResponse, GenerateRequest, GenerateResponse, UNKNOWN_ERROR_MESSAGE};
use gloo_net::http::Request;

/// Endpoint генерации (тот же origin, что и страница)
pub const GENERATE_ENDPOINT: &str = "/api/generate";

/// Отправить prompt и получить изображение.
///
/// `Err` carries the message shown to the user: the server's `detail` for
/// non-2xx responses, otherwise the transport or parse failure.
pub async fn generate_image(prompt: String) -> Result<GenerateResponse, String> {
    let request = GenerateRequest { prompt };

    let response = Request::post(GENERATE_ENDPOINT)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    if !response.ok() {
        log::warn!("Generation failed with status {}", response.status());
        return Err(error_message(&body));
    }

    parse_success(&body)
}

/// Сообщение об ошибке из тела не-2xx ответа
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|error| error.message_or_default())
        .unwrap_or_else(|_| UNKNOWN_ERROR_MESSAGE.to_string())
}

pub fn parse_success(body: &str) -> Result<GenerateResponse, String> {
    serde_json::from_str::<GenerateResponse>(body)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_uses_detail() {
        assert_eq!(error_message(r#"{"detail":"bad prompt"}"#), "bad prompt");
    }

    #[test]
    fn test_error_message_fallbacks() {
        assert_eq!(error_message(r#"{"error":"A prompt is required."}"#), UNKNOWN_ERROR_MESSAGE);
        assert_eq!(error_message("<html>502 Bad Gateway</html>"), UNKNOWN_ERROR_MESSAGE);
        assert_eq!(error_message(""), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_parse_success() {
        let response = parse_success(r#"{"mime_type":"image/png","image_b64":"AAAA"}"#).unwrap();
        assert_eq!(response.data_uri(), "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_parse_success_rejects_malformed_body() {
        let err = parse_success(r#"{"mime_type":"image/png"}"#).unwrap_err();
        assert!(err.starts_with("Failed to parse response"));
    }
}
