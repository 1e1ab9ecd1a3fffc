use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scout::config::Config;
use scout::transport;

#[derive(Parser)]
#[command(name = "scout")]
#[command(author, version, about = "Turn a research question into a sourced, structured report", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a report for a research question
    Report {
        /// The research question
        query: String,

        /// Model to use (default: gemini-2.5-flash)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Start the HTTP report API
    Serve {
        /// Port to listen on (default: from config, 8710)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (default: from config, 127.0.0.1)
        #[arg(long)]
        host: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "scout=debug"
    } else {
        "scout=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Report { query, model } => {
            transport::cli::run_report(&query, model.as_deref(), config).await?;
        }
        Commands::Serve { port, host } => {
            let (host, port) = config.server.resolved(host, port);
            tracing::info!("Starting report API on {}:{}", host, port);
            transport::http::run_http_server(&host, port, config).await?;
        }
    }

    Ok(())
}
