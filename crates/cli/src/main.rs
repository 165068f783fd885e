//! Classic Cuts CLI - Admin registry management tools.
//!
//! The panel has no self-service signup; admin accounts are provisioned
//! out of band with this tool.
//!
//! # Usage
//!
//! ```bash
//! # Create an identity and register it as admin
//! cc-cli admin create -e owner@example.com -p 'a strong password'
//!
//! # Register an existing identity as admin
//! cc-cli admin grant -u <uid> -e owner@example.com
//!
//! # Remove an identity from the admin registry
//! cc-cli admin revoke -u <uid>
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cc-cli")]
#[command(author, version, about = "Classic Cuts CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the admin registry
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new identity and register it as admin
    Create {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Password for the new identity
        #[arg(short, long)]
        password: String,
    },
    /// Register an existing identity as admin
    Grant {
        /// Identity UID
        #[arg(short, long)]
        uid: String,

        /// Email address, recorded alongside the registry entry
        #[arg(short, long)]
        email: String,
    },
    /// Remove an identity from the admin registry
    Revoke {
        /// Identity UID
        #[arg(short, long)]
        uid: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Admin { action } => match action {
            AdminAction::Create { email, password } => {
                commands::admin::create(&email, &password).await?;
            }
            AdminAction::Grant { uid, email } => {
                commands::admin::grant(&uid, &email).await?;
            }
            AdminAction::Revoke { uid } => {
                commands::admin::revoke(&uid).await?;
            }
        },
    }
    Ok(())
}
