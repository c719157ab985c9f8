mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod routes;

use anyhow::Context;
use app::App;
use config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading RUST_LOG; report the outcome once tracing is up
    let dotenv = config::dotenv_status(dotenvy::dotenv());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "avoxi_demo_app=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("avoxi-demo-app starting");

    match dotenv {
        Ok(Some(path)) => tracing::info!("Loaded environment from {}", path.display()),
        Ok(None) => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!("{:#}", e),
    }

    let config = Config::from_env()?;
    config.log_startup();

    let mut app = App::new(config);
    app.initialize();

    let addr = format!("{}:{}", app.config().service_host, app.config().service_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    app.serve(listener).await
}
