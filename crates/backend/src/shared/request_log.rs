use axum::body::{Body, HttpBody};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;

/// Middleware для логирования HTTP запросов
///
/// Каждому запросу присваивается id, который попадает в span, так что
/// логи handler'а и провайдера связаны с итоговой строкой статуса.
/// The body is not buffered: image responses are large, the size comes
/// from the body's size hint.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let span = tracing::info_span!("request", id = %uuid::Uuid::new_v4(), %method, %path);

    async move {
        let start = std::time::Instant::now();
        let response = next.run(req).await;

        let status = response.status().as_u16();
        let size = response
            .body()
            .size_hint()
            .exact()
            .map(format_size)
            .unwrap_or_else(|| "stream".to_string());
        let elapsed_ms = start.elapsed().as_millis() as u64;

        if response.status().is_server_error() {
            tracing::warn!(status, elapsed_ms, size = %size, "finished");
        } else {
            tracing::info!(status, elapsed_ms, size = %size, "finished");
        }

        response
    }
    .instrument(span)
    .await
}

/// Размер в байтах в человекочитаемом виде: `512 B`, `1.5 KB`, `2.0 MB`
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / MB)
    }
}
