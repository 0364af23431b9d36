use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Middleware logging one line per HTTP request:
/// status, method, path, duration and response size.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Read the body to learn its real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                status = parts.status.as_u16(),
                method = %method,
                path = uri.path(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "response body could not be read: {}",
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let elapsed_ms = start.elapsed().as_millis() as u64;
    if parts.status.is_server_error() {
        tracing::error!(
            status = parts.status.as_u16(),
            method = %method,
            path = uri.path(),
            elapsed_ms,
            size = bytes.len(),
            "request failed"
        );
    } else {
        tracing::info!(
            status = parts.status.as_u16(),
            method = %method,
            path = uri.path(),
            elapsed_ms,
            size = bytes.len(),
            "request handled"
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}
