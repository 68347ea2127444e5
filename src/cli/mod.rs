//! CLI interface for Storefront

pub mod commands;
mod output;

pub use output::*;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(version = "0.1.0")]
#[command(about = "Inspect and manage the storefront client session", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new storefront.toml configuration file
    Init,

    /// Store a bearer token as the current session
    Login {
        /// The token handed out by the backend at login
        #[arg(short, long, env = "STOREFRONT_TOKEN")]
        token: String,
    },

    /// Clear the current session
    Logout,

    /// Show the current session
    Whoami {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Decode a token without storing it
    Inspect {
        /// The token to decode
        token: String,
    },

    /// Evaluate a route guard against the current session
    Guard {
        /// Require the admin role
        #[arg(long)]
        admin_only: bool,

        /// Where unauthenticated visitors are sent
        #[arg(long)]
        redirect_to: Option<String>,

        /// Where authenticated non-admins are sent
        #[arg(long)]
        fallback: Option<String>,
    },

    /// Poll a backend list endpoint on the configured interval
    Watch {
        /// Resource path under /api, e.g. "orders" or "admin/users"
        resource: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
