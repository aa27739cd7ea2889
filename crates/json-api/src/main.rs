//! Product Catalog JSON API Server

use std::process;

use salvo::{oapi::swagger_ui::SwaggerUi, prelude::*};
use tracing::{error, info};

use catalog_app::context::{AppContext, AppInitError};

use crate::{
    config::{ServerConfig, storage::StorageBackend},
    state::State,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod config;
mod extensions;
mod healthcheck;
mod observability;
mod products;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod welcome;

/// Catalog JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("{init_error}");
        }

        process::exit(1);
    }

    let app = match build_app_context(&config).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    if config.storage.seed_sample_data {
        match app.products.seed_if_empty().await {
            Ok(inserted) => info!(inserted, "sample data check complete"),
            Err(seed_error) => {
                error!("failed to seed sample products: {seed_error}");

                process::exit(1);
            }
        }
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let router = router::app_router(State::from_app_context(app));

    let doc = router::api_doc(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}

async fn build_app_context(config: &ServerConfig) -> Result<AppContext, AppInitError> {
    let api_key = config.auth.secret();

    match config.storage.storage {
        StorageBackend::Memory => {
            info!("using in-memory product storage");

            Ok(AppContext::in_memory(api_key))
        }
        StorageBackend::Postgres => {
            let url = config
                .storage
                .database_url
                .as_deref()
                .ok_or(AppInitError::MissingDatabaseUrl)?;

            AppContext::from_database_url(url, api_key).await
        }
    }
}
