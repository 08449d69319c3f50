use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::video::{StoreError, VideoInput, VideoStore};

/// `GET /videos/`
pub(super) async fn list(State(store): State<Arc<VideoStore>>) -> Response {
    match store.list() {
        Ok(videos) => (StatusCode::OK, Json(videos)).into_response(),
        Err(e) => internal(e),
    }
}

/// `POST /videos/`
pub(super) async fn create(
    State(store): State<Arc<VideoStore>>,
    body: Bytes,
) -> Response {
    let input = match decode(&body) {
        Ok(input) => input,
        Err(e) => return bad_request(format!("Bad request {}, error in parsing data", e)),
    };

    match store.create(input) {
        Ok(id) => ok(format!(
            "Successfully added new video, new video id is {}",
            id
        )),
        Err(e) => internal(e),
    }
}

/// `PUT /videos/:id`
pub(super) async fn update(
    State(store): State<Arc<VideoStore>>,
    id: Result<Path<u64>, PathRejection>,
    body: Bytes,
) -> Response {
    let (Ok(Path(id)), Ok(input)) = (id, decode(&body)) else {
        return bad_request("bad request, format does not match".to_string());
    };

    match store.update(id, input) {
        Ok(()) => ok(format!("video with id {} has been updated to the db", id)),
        Err(StoreError::NotFound(id)) => {
            bad_request(format!("bad request, cannot find video with id {}", id))
        }
        Err(e) => internal(e),
    }
}

/// `DELETE /videos/:id`
pub(super) async fn delete(
    State(store): State<Arc<VideoStore>>,
    id: Result<Path<u64>, PathRejection>,
) -> Response {
    let id = match id {
        Ok(Path(id)) => id,
        Err(e) => {
            return bad_request(format!(
                "bad request, format does not match. ERROR: {}",
                e.body_text()
            ))
        }
    };

    match store.delete(id) {
        Ok(_) => ok(format!("video with id {} has been removed from the db", id)),
        Err(StoreError::NotFound(id)) => {
            bad_request(format!("Cannot find the video to delete, video id:{}", id))
        }
        Err(e) => internal(e),
    }
}

/// `*` — anything outside the routes above.
pub(super) async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "404 page not found").into_response()
}

/// Decode a JSON body regardless of the declared content type.
fn decode(body: &[u8]) -> Result<VideoInput, serde_json::Error> {
    serde_json::from_slice(body)
}

fn ok(message: String) -> Response {
    (StatusCode::OK, message).into_response()
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, message).into_response()
}

fn internal(err: StoreError) -> Response {
    error!(error = %err, "video store failure");
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, err.to_string()).into_response()
}
