use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init(),
        Commands::Login { token } => commands::login(&token),
        Commands::Logout => commands::logout(),
        Commands::Whoami { format } => commands::whoami(format),
        Commands::Inspect { token } => commands::inspect(&token),
        Commands::Guard {
            admin_only,
            redirect_to,
            fallback,
        } => commands::guard(admin_only, redirect_to, fallback),
        Commands::Watch { resource } => commands::watch(&resource).await,
    }
}
