use std::sync::Arc;

use anyhow::Context;
use movies_api::store::{seed, InMemoryMovieStore};
use movies_api::{http, telemetry, Config};
use tracing::info;

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let (Ok(mut sigterm), Ok(mut sigint)) = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) else {
            let _ = tokio::signal::ctrl_c().await;
            return;
        };
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("reading configuration")?;
    telemetry::init_tracing(config.log_json).context("installing tracing subscriber")?;

    let movies = match &config.seed_path {
        Some(path) => seed::load(path),
        None => seed::default_seed(),
    }
    .context("loading seed movies")?;
    info!(count = movies.len(), "seeded movie store");

    let store = Arc::new(InMemoryMovieStore::with_movies(movies));
    http::serve(store, config.bind_addr(), wait_for_shutdown_signal())
        .await
        .context("serving http")?;

    info!("shut down");
    Ok(())
}
