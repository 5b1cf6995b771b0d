/// Roster Server - user record HTTP service
use clap::{Parser, Subcommand};
use roster_core::UserStore;
use roster_server::{config::ServerConfig, create_router, shutdown, state::AppState};
use roster_storage::SqliteUserStore;
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "User record HTTP service", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "ROSTER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// List all users
    ListUsers,
}

// Requests interleave on a single thread; the store serializes writes.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster_server=info,roster_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(&config).await?,
        Commands::ListUsers => list_users(&config).await?,
    }

    Ok(())
}

async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Roster Server");

    let addr = config.socket_addr()?;

    let store = SqliteUserStore::connect(&config.storage.database_url).await?;
    tracing::info!("Database connected");

    let app = create_router(AppState::new(Arc::new(store.clone())));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("Database closed");

    Ok(())
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let store = SqliteUserStore::connect(&config.storage.database_url).await?;

    let users = store.list_all().await?;

    println!("Users:");
    for user in users {
        println!("  {} - {} <{}>", user.id, user.name, user.email);
    }

    store.close().await;
    Ok(())
}
