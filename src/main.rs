//! Main entry point for the clinica appointment manager.
//!
//! Serves the REST API consumed by the admin dashboard.
//!
//! # Environment Variables
//! - `CLINICA_REST_ADDR`: server address (default: "0.0.0.0:3000")
//! - `CLINICA_DATA_DIR`: directory holding the JSON tables (default: "./data")
//!
//! Variables may also come from a `.env` file in the working directory.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use clinica_core::CoreConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinica_run=info".parse()?)
                .add_directive("clinica_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("CLINICA_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let data_dir = std::env::var("CLINICA_DATA_DIR").unwrap_or_else(|_| "./data".into());

    tracing::info!("++ Starting clinica REST on {}", addr);
    tracing::info!("++ JSON tables under {}", data_dir);

    let cfg = Arc::new(CoreConfig::new(data_dir.into()));
    let app = router(AppState::new(cfg));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
