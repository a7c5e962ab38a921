use std::sync::Arc;

use gallery_shared::{load_settings, AppState};
use lambda_http::{run, service_fn, Error};
use tracing_subscriber::{fmt, EnvFilter};

mod http_handler;
use http_handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // JSON lines for CloudWatch; the Lambda log already carries a timestamp
    fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    // Bad config fails the cold start instead of signing broken URLs later
    let settings = load_settings()?;
    tracing::info!(
        "Gallery API starting: groups={} images={} bucket={} url_expiration={}s",
        settings.groups_table,
        settings.images_table,
        settings.bucket_name,
        settings.url_expiration.as_secs()
    );

    let state = Arc::new(AppState::from_env(settings).await);

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { function_handler(event, state).await }
    }))
    .await
}
