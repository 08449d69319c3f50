use std::io::ErrorKind;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::config::StaticAsset;

/// `GET <asset route>` — stream the configured file back verbatim.
pub(super) async fn serve_asset(State(asset): State<Arc<StaticAsset>>) -> Response {
    match tokio::fs::read(&asset.path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type(&asset.path))],
            bytes,
        )
            .into_response(),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %asset.path, "static asset missing");
            (StatusCode::NOT_FOUND, "404 page not found").into_response()
        }
        Err(e) => {
            warn!(path = %asset.path, error = %e, "static asset unreadable");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

fn content_type(path: &str) -> &'static str {
    let extension = std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("json") => "application/json",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
