use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// landing - company landing page and contact relay
#[derive(Parser)]
#[command(name = "landing")]
#[command(about = "Company landing page with a Google Sheets contact relay", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Contact form operations
    Contact {
        #[command(subcommand)]
        command: ContactCommands,
    },
}

#[derive(Subcommand)]
enum ContactCommands {
    /// Submit the contact form to a relay
    Submit {
        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,

        /// Relay URL (defaults to this server's /api/submit-contact)
        #[arg(long)]
        endpoint: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = landing::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    landing::observability::init_tracing(&config.logging)?;

    match cli.command {
        Commands::Serve { host, port } => cli::serve(config, host, port).await,
        Commands::Contact {
            command:
                ContactCommands::Submit {
                    email,
                    message,
                    endpoint,
                },
        } => cli::submit(config, endpoint, email, message).await,
    }
}
