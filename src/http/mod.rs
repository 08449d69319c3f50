//! HTTP transport — maps REST requests onto [`VideoStore`] operations.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /videos/` — JSON array of every video, in insertion order.
//! - `POST /videos/` — create from a JSON body; responds with the new id as text.
//! - `PUT /videos/:id` — replace the fields of an existing video.
//! - `DELETE /videos/:id` — remove a video.
//! - `GET <asset route>` — one static file (see [`StaticAsset`](crate::StaticAsset)).
//! - anything else — `404`.
//!
//! Bodies are decoded as JSON whatever their `Content-Type`. Every decode
//! failure and every unknown id answers `400` with a plain-text message. When credentials are configured, all routes sit behind basic auth.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use video_store::{http, Config, VideoStore};
//!
//! let config = Config::from_env()?;
//! let store = Arc::new(VideoStore::new());
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(store.clone(), &config.http);
//!
//! // Or serve directly
//! http::serve(store, &config).await?;
//! ```

mod asset;
mod handlers;
mod middleware;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tracing::info;

use crate::config::{Config, HttpConfig};
use crate::video::VideoStore;

/// Build the application router around a shared store.
pub fn router(store: Arc<VideoStore>, config: &HttpConfig) -> Router {
    let videos = Router::new()
        .route("/videos", get(handlers::list).post(handlers::create))
        .route("/videos/", get(handlers::list).post(handlers::create))
        .route(
            "/videos/:id",
            axum::routing::put(handlers::update).delete(handlers::delete),
        )
        .layer(axum::middleware::from_fn(middleware::log_request))
        .with_state(store);

    let asset = Router::new()
        .route(&config.asset.route, get(asset::serve_asset))
        .with_state(Arc::new(config.asset.clone()));

    // Explicit fallback so the auth layer also guards unmatched paths.
    let app = videos.merge(asset).fallback(handlers::not_found);
    match &config.auth {
        Some(credentials) => app.layer(axum::middleware::from_fn_with_state(
            Arc::new(credentials.clone()),
            middleware::basic_auth,
        )),
        None => app,
    }
}

/// Serve the store over HTTP at the configured address.
pub async fn serve(store: Arc<VideoStore>, config: &Config) -> Result<(), std::io::Error> {
    let app = router(store, &config.http);
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "video server listening");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
}
