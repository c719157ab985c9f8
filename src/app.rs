use crate::api_doc::ApiDoc;
use crate::config::Config;
use crate::error::ApiError;
use crate::handlers::{alive_handler, home_handler};
use crate::routes;
use anyhow::{Context, Result};
use axum::{http::Uri, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// The service: its configuration plus the router requests are dispatched to.
///
/// `router` is public so requests can be driven through it in-process,
/// without binding a socket.
pub struct App {
    pub router: Router,
    config: Config,
}

impl App {
    /// Create an application with an empty route table. Every request is a
    /// 404 until `initialize` runs.
    pub fn new(config: Config) -> Self {
        App {
            router: Router::new().fallback(not_found_handler),
            config,
        }
    }

    /// Build the route table. Safe to call repeatedly: each call replaces the
    /// router with a fresh one, so registrations are never duplicated.
    pub fn initialize(&mut self) {
        self.router = build_router(&self.config);
        tracing::debug!(
            home = %self.config.home_path,
            alive = %self.config.alive_route(),
            "Routes registered"
        );
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Serve on an already-bound listener until Ctrl-C or SIGTERM.
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        let addr = listener
            .local_addr()
            .context("Failed to read listener address")?;
        tracing::info!("Listening on {}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

fn build_router(config: &Config) -> Router {
    Router::new()
        .route(&config.home_path, get(home_handler))
        .route(&config.alive_route(), get(alive_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
}

async fn not_found_handler(uri: Uri) -> ApiError {
    tracing::debug!("No route for {}", uri.path());
    ApiError::NotFound(uri.path().to_string())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
