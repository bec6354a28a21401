//! Author Service - HTTP and gRPC server for author management.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use author_service_lib::config::AuthorServiceConfig;

#[derive(Parser)]
#[command(name = "author-service")]
#[command(about = "Author management microservice")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP and gRPC servers
    Serve {
        /// Listen host (overrides AUTHOR_SERVICE_HOST)
        #[arg(long)]
        host: Option<String>,
        /// HTTP port (overrides AUTHOR_SERVICE_HTTP_PORT)
        #[arg(long)]
        http_port: Option<u16>,
        /// gRPC port (overrides AUTHOR_SERVICE_GRPC_PORT)
        #[arg(long)]
        grpc_port: Option<u16>,
        /// Storage backend: memory, mongo or scylla (overrides AUTHOR_STORAGE)
        #[arg(long)]
        storage: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            http_port,
            grpc_port,
            storage,
        } => {
            let mut config = AuthorServiceConfig::from_env()?;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = http_port {
                config.http_port = port;
            }
            if let Some(port) = grpc_port {
                config.grpc_port = port;
            }
            if let Some(storage) = storage {
                config = config.with_storage(&storage)?;
            }

            author_service_lib::run_server_with_config(config).await?;
        }
    }

    Ok(())
}
