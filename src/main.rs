use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use msgboard::config::Config;
use msgboard::routes::{self, AppState};
use msgboard::schema;
use msgboard::store::MessageStore;

#[derive(Parser, Debug)]
#[command(name = "msgboard")]
#[command(about = "In-memory GraphQL message board service")]
#[command(version)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "MSGBOARD_PORT", default_value = "8085")]
    port: u16,

    /// Address to bind to
    #[arg(short, long, env = "MSGBOARD_BIND", default_value = "0.0.0.0")]
    bind: String,

    /// Enable verbose logging
    #[arg(short, long, env = "MSGBOARD_VERBOSE")]
    verbose: bool,

    /// Config file path (optional)
    #[arg(short, long, env = "MSGBOARD_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "msgboard=debug,tower_http=debug"
    } else {
        "msgboard=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config from file if provided, otherwise use defaults
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let store = Arc::new(MessageStore::new());
    let schema = schema::build_schema(store, &config);

    let state = AppState {
        schema,
        config: Arc::new(config),
    };

    let app = routes::create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", cli.bind, cli.port)
        .parse()
        .context("invalid bind address")?;
    info!("Starting msgboard on {}, GraphQL endpoint at /graphql", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
