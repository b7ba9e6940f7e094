mod config;
mod error;
mod routes;

use catalog::Catalog;
use leptos::config::get_configuration;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    // Missing .env is fine; deployments set real env vars.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "olympiad site failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;

    // Fail fast on broken content instead of serving an error notice.
    let stats = Catalog::builtin().map_err(ServerError::Catalog)?.stats();
    tracing::info!(
        categories = stats.resource_categories,
        resources = stats.resources,
        events = stats.events,
        sponsor_categories = stats.sponsor_categories,
        sponsor_links = stats.sponsor_links,
        "site content loaded"
    );

    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let app = routes::app(conf.leptos_options);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "olympiad site listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
