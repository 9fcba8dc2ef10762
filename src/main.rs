//! Pipecheck CLI entry point

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "pipecheck")]
#[command(about = "Pipeline graph analysis service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the analysis server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Browser origin allowed to call the API
        #[arg(long, default_value = "http://localhost:3000")]
        origin: String,
    },
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "pipecheck={}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Pipecheck v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Serve { port, host, origin } => commands::serve(host, port, origin).await,
        Commands::Version => {
            println!("Pipecheck v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
