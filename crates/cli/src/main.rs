//! Warden CLI - Database migrations and admin management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run admin database migrations
//! warden migrate
//!
//! # Ensure WARDEN_BOOTSTRAP_SUPERADMINS are superadmins
//! warden bootstrap
//!
//! # Create or update an admin
//! warden admin upsert -i 123456789 -r manager --created-by 42
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `bootstrap` - Seed superadmins from configuration
//! - `admin` - Upsert, list, show, check and delete admins
//!
//! # Logging
//!
//! Filtered by `RUST_LOG` (default `warden_admin=info,warden_cli=info`).
//! Set `WARDEN_LOG_FORMAT=json` for structured output.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use warden_core::{AdminIdentity, AdminRole};

mod commands;

use commands::CliError;
use commands::admin::UpsertArgs;

/// Exit status of `admin check` when the action is denied.
const EXIT_DENIED: i32 = 2;

#[derive(Parser)]
#[command(name = "warden")]
#[command(author, version, about = "Warden admin management tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Ensure the configured bootstrap identities are superadmins
    Bootstrap,
    /// Manage admins
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create an admin, or update it if it already exists
    Upsert {
        /// Admin identity (account id)
        #[arg(short, long)]
        identity: AdminIdentity,

        /// Admin role (`superadmin`, `manager`, `basic`)
        #[arg(short, long, default_value = "basic")]
        role: AdminRole,

        /// Display name
        #[arg(short = 'n', long)]
        display_name: Option<String>,

        /// Grant the add-admin override flag
        #[arg(long)]
        can_add_admin: bool,

        /// Grant the delete-content override flag
        #[arg(long)]
        can_delete_content: bool,

        /// Identity of the admin performing the change
        #[arg(long)]
        created_by: AdminIdentity,
    },
    /// List admins, newest first
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one admin
    Show {
        /// Admin identity (account id)
        #[arg(short, long)]
        identity: AdminIdentity,

        /// Print JSON instead of a summary line
        #[arg(long)]
        json: bool,
    },
    /// Check whether an identity may perform an action
    Check {
        /// Identity to check
        #[arg(short, long)]
        identity: AdminIdentity,

        /// Action name, e.g. `UPLOAD_CONTENT`
        #[arg(short, long)]
        action: String,
    },
    /// Delete an admin
    Delete {
        /// Admin identity (account id)
        #[arg(short, long)]
        identity: AdminIdentity,
    },
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warden_admin=info,warden_cli=info".into());

    let is_json = std::env::var("WARDEN_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let json_layer = is_json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!is_json).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_DENIED),
        Err(e) => {
            tracing::error!("Command failed: {e}");
            std::process::exit(1);
        }
    }
}

/// Run a command. `Ok(false)` means a permission check was denied.
async fn run(cli: Cli) -> Result<bool, CliError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Bootstrap => commands::admin::bootstrap().await?,
        Commands::Admin { action } => match action {
            AdminAction::Upsert {
                identity,
                role,
                display_name,
                can_add_admin,
                can_delete_content,
                created_by,
            } => {
                commands::admin::upsert(UpsertArgs {
                    identity,
                    role,
                    display_name,
                    can_add_admin,
                    can_delete_content,
                    created_by,
                })
                .await?;
            }
            AdminAction::List { json } => commands::admin::list(json).await?,
            AdminAction::Show { identity, json } => commands::admin::show(&identity, json).await?,
            AdminAction::Check { identity, action } => {
                return commands::admin::check(&identity, &action).await;
            }
            AdminAction::Delete { identity } => commands::admin::delete(&identity).await?,
        },
    }
    Ok(true)
}
