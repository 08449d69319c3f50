use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use video_store::{http, Config, VideoStore};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    info!(
        addr = %config.bind_addr(),
        auth = config.http.auth.is_some(),
        asset = %config.http.asset.route,
        "starting video server"
    );

    let store = Arc::new(VideoStore::new());
    if let Err(e) = http::serve(store, &config).await {
        error!(error = %e, "video server stopped");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
