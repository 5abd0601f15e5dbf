use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::generation::{ErrorResponse, GenerateRequest, GenerateResponse};

use crate::routes::AppState;

/// POST /api/generate
///
/// 200 `{mime_type, image_b64}`; 400 `{detail}` when the prompt is missing;
/// 500 `{detail}` for any provider failure.
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!("Rejected generate request: {}", rejection.body_text());
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid request body: {}", rejection.body_text()),
            );
        }
    };

    if request.prompt.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "A prompt is required.");
    }

    tracing::info!(
        provider = state.generator.provider_name(),
        prompt_chars = request.prompt.chars().count(),
        "Generating image"
    );

    match state.generator.generate(&request.prompt).await {
        Ok(image) => {
            tracing::info!(
                mime_type = %image.mime_type,
                size_bytes = image.size_bytes,
                "Image generated"
            );
            Json(GenerateResponse {
                mime_type: image.mime_type,
                image_b64: image.image_b64,
            })
            .into_response()
        }
        Err(e) => {
            tracing::error!("Image generation failed: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error occurred: {}", e),
            )
        }
    }
}

fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(detail))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::generation::{GeneratedImage, GenerationError, ImageGenerator};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StubGenerator {
        result: fn() -> Result<GeneratedImage, GenerationError>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ImageGenerator for StubGenerator {
        async fn generate(&self, _prompt: &str) -> Result<GeneratedImage, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.result)()
        }

        fn provider_name(&self) -> &str {
            "stub"
        }
    }

    fn state_with(result: fn() -> Result<GeneratedImage, GenerationError>) -> (AppState, Arc<StubGenerator>) {
        let stub = Arc::new(StubGenerator {
            result,
            calls: AtomicUsize::new(0),
        });
        (AppState { generator: stub.clone() }, stub)
    }

    fn ok_image() -> Result<GeneratedImage, GenerationError> {
        Ok(GeneratedImage {
            mime_type: "image/png".to_string(),
            image_b64: "AAAA".to_string(),
            size_bytes: 3,
        })
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn prompt(text: &str) -> Result<Json<GenerateRequest>, JsonRejection> {
        Ok(Json(GenerateRequest {
            prompt: text.to_string(),
        }))
    }

    #[tokio::test]
    async fn test_success_returns_image() {
        let (state, stub) = state_with(ok_image);
        let response = generate(State(state), prompt("A cat")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"mime_type": "image/png", "image_b64": "AAAA"})
        );
    }

    #[tokio::test]
    async fn test_empty_prompt_is_bad_request() {
        let (state, stub) = state_with(ok_image);
        let response = generate(State(state), prompt("")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"detail": "A prompt is required."})
        );
    }

    #[tokio::test]
    async fn test_provider_failure_is_server_error_with_detail() {
        let (state, _) = state_with(|| Err(GenerationError::NoImage("{}".to_string())));
        let response = generate(State(state), prompt("A cat")).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.starts_with("An error occurred: "));
        assert!(detail.contains("did not contain image data"));
    }

    #[tokio::test]
    async fn test_missing_key_surfaces_in_detail() {
        let (state, _) =
            state_with(|| Err(GenerationError::MissingApiKey("GOOGLE_API_KEY".to_string())));
        let response = generate(State(state), prompt("A cat")).await;

        let body = body_json(response).await;
        assert_eq!(
            body["detail"],
            "An error occurred: GOOGLE_API_KEY not found in environment variables."
        );
    }
}
