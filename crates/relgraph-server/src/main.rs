//! CLI entry point for the relgraph HTTP server.

use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use relgraph_graph::GraphClient;
use relgraph_server::config::AppConfig;
use relgraph_server::{router, AppState};

#[derive(Parser)]
#[command(name = "relgraph-server")]
#[command(about = "HTTP CRUD service over a Neo4j property graph")]
struct Cli {
    /// Config file prefix (default: relgraph).
    #[arg(short, long, default_value = "relgraph")]
    config: String,

    /// Listen address, overriding server.host and server.port.
    #[arg(short, long)]
    bind: Option<String>,

    /// Emit logs as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.json {
        fmt().with_env_filter(filter).json().init();
    } else {
        fmt().with_env_filter(filter).init();
    }

    let config = AppConfig::load(&cli.config)?;
    let max_relation = config.aggregate.to_query()?;

    // Connect to Neo4j.
    let graph = GraphClient::connect(&config.neo4j).await?;

    let state = AppState::new(Arc::new(graph), max_relation);
    let app = router(state);

    let bind_address = config.server.resolve_bind(cli.bind.as_deref());
    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!(addr = %bind_address, "relgraph server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
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
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
