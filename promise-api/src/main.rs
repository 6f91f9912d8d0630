use std::net::SocketAddr;

use anyhow::Context;
use promise_api::{app, AppState};
use promise_store::{app_config::Config, Datastore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promise_api=debug,promise_order=debug,promise_store=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Promise API on port {}", config.server.port);

    let datastore = Datastore::load(&config.datastore.path)
        .await
        .context("Failed to load datastore")?;
    let app_state = AppState::from_datastore(&datastore, &config.aggregation)?;

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
