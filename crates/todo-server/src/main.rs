//! Todo Server Binary
//!
//! Standalone server for the todo API.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use todo_server::config::CliArgs;
use todo_server::{serve, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = CliArgs::parse().resolve()?;

    let state = match AppState::open(&config) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!(
                path = %config.data_path.display(),
                error = %e,
                "Failed to load todo store"
            );
            return Err(e.into());
        }
    };

    serve(&config, state).await
}
