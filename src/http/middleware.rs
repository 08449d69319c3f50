use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{info, warn};

use crate::config::Credentials;

const REALM: &str = "Basic realm=\"Authorization Required\"";

/// Log client address, method and path for every request.
///
/// The client shows as `-` when the server was not started with connect info.
pub(super) async fn log_request(req: Request, next: Next) -> Response {
    let client = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    info!(
        %client,
        %method,
        %path,
        status = response.status().as_u16(),
        "request"
    );
    response
}

/// Reject requests that do not carry the configured basic-auth credentials.
pub(super) async fn basic_auth(
    State(credentials): State<Arc<Credentials>>,
    req: Request,
    next: Next,
) -> Response {
    match basic_credentials(req.headers()) {
        Some((user, password)) if user == credentials.user && password == credentials.password => {
            next.run(req).await
        }
        presented => {
            warn!(
                path = %req.uri().path(),
                user = presented.as_ref().map(|(user, _)| user.as_str()).unwrap_or("-"),
                "rejected unauthenticated request"
            );
            (StatusCode::UNAUTHORIZED, [(header::WWW_AUTHENTICATE, REALM)]).into_response()
        }
    }
}

/// Decode `Authorization: Basic <base64(user:password)>`.
fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, password) = decoded.split_once(':')?;
    Some((user.to_string(), password.to_string()))
}
