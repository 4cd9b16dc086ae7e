//! KKI API server binary.
//!
//! Loads `.env`, resolves configuration, wires the Gemini provider into the
//! chat gateway and serves the HTTP API until Ctrl-C.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use kki_api::config::ApiConfig;
use kki_core::ChatGateway;
use kki_core::provider::GeminiProvider;
use tracing::{info, warn};

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "kki_api_server", version, about = "KKI chat API server")]
struct Args {
    /// Address to listen on. Overrides `BIND_ADDR`.
    #[arg(long)]
    bind: Option<String>,

    /// Load environment variables from this file instead of `./.env`.
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Gemini model used for replies. Overrides `GEMINI_MODEL`.
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    load_env(args.env_file.as_deref())?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("info,kki_api=debug,kki_core=debug")
                }),
        )
        .init();

    let mut config = ApiConfig::from_env();
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(model) = args.model {
        config.gemini_model = model;
    }

    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY_FREE is not set; chat requests will fail until it is configured");
    }

    info!(
        bind_addr = %config.bind_addr,
        model = %config.gemini_model,
        timeout = ?config.gemini_timeout,
        "starting kki_api_server"
    );

    let provider = GeminiProvider::new(config.gemini())?;
    let state = kki_api::AppState {
        gateway: ChatGateway::new(Arc::new(provider)),
        config: config.clone(),
    };

    let app = kki_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Loads `env_file` when given, otherwise the optional `./.env`.
///
/// A file named on the command line must exist; the default one may not.
fn load_env(env_file: Option<&Path>) -> Result<(), dotenvy::Error> {
    match env_file {
        Some(path) => dotenvy::from_path(path),
        None => {
            dotenvy::dotenv().ok();
            Ok(())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_file_is_an_error() {
        let err = load_env(Some(Path::new("/nonexistent/kki/.env")));
        assert!(err.is_err());
    }

    #[test]
    fn default_env_lookup_never_fails() {
        assert!(load_env(None).is_ok());
    }

    #[test]
    fn env_file_flag_parses() {
        let args = Args::parse_from(["kki_api_server", "--env-file", "../../.env"]);
        assert_eq!(args.env_file.as_deref(), Some(Path::new("../../.env")));
        assert!(args.bind.is_none());
    }
}
