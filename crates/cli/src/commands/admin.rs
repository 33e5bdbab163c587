//! Admin management commands.
//!
//! # Usage
//!
//! ```bash
//! # Create or update an admin
//! warden admin upsert -i 123456789 -r manager -n alice --created-by 42
//!
//! # Inspect admins
//! warden admin list
//! warden admin show -i 123456789 --json
//!
//! # Check a permission
//! warden admin check -i 123456789 -a UPLOAD_CONTENT
//!
//! # Remove an admin
//! warden admin delete -i 123456789
//!
//! # Promote WARDEN_BOOTSTRAP_SUPERADMINS to superadmin
//! warden bootstrap
//! ```
//!
//! # Environment Variables
//!
//! - `WARDEN_DATABASE_URL` - `PostgreSQL` connection string for admin database
//! - `WARDEN_BOOTSTRAP_SUPERADMINS` - Identities used by `bootstrap`

use warden_admin::{AdminInput, AdminRecord, AdminRepository, AdminService};
use warden_core::{AdminIdentity, AdminRole};

use super::{CliError, connect};

/// Arguments of `warden admin upsert`.
#[derive(Debug, Clone)]
pub struct UpsertArgs {
    pub identity: AdminIdentity,
    pub role: AdminRole,
    pub display_name: Option<String>,
    pub can_add_admin: bool,
    pub can_delete_content: bool,
    pub created_by: AdminIdentity,
}

impl From<UpsertArgs> for AdminInput {
    fn from(args: UpsertArgs) -> Self {
        Self {
            identity: args.identity,
            display_name: args.display_name,
            role: args.role,
            can_add_admin: args.can_add_admin.then_some(true),
            can_delete_content: args.can_delete_content.then_some(true),
            created_by: args.created_by,
        }
    }
}

/// Create an admin, or update it if the identity is already registered.
///
/// # Errors
///
/// Returns `CliError` if the database is unreachable or the write fails.
pub async fn upsert(args: UpsertArgs) -> Result<(), CliError> {
    let (_, pool) = connect().await?;
    let service = AdminService::new(AdminRepository::new(&pool));

    let admin = service.create_or_update_admin(&args.into()).await?;

    tracing::info!(
        "Admin saved: {} ({}), can_add_admin={}, can_delete_content={}",
        admin.identity,
        admin.role,
        admin.can_add_admin,
        admin.can_delete_content
    );
    Ok(())
}

/// Ensure every identity in `WARDEN_BOOTSTRAP_SUPERADMINS` is a superadmin.
///
/// # Errors
///
/// Returns `CliError` if configuration is invalid or a write fails.
pub async fn bootstrap() -> Result<(), CliError> {
    let (config, pool) = connect().await?;

    if config.bootstrap_superadmins.is_empty() {
        tracing::warn!("WARDEN_BOOTSTRAP_SUPERADMINS is empty, nothing to do");
        return Ok(());
    }

    let service = AdminService::new(AdminRepository::new(&pool));
    let admins = service
        .bootstrap_superadmins(&config.bootstrap_superadmins)
        .await?;

    for admin in &admins {
        tracing::info!("Superadmin ensured: {}", admin.identity);
    }
    Ok(())
}

/// Print all admins, most recently created first.
///
/// # Errors
///
/// Returns `CliError` if the database is unreachable.
pub async fn list(json: bool) -> Result<(), CliError> {
    let (_, pool) = connect().await?;
    let service = AdminService::new(AdminRepository::new(&pool));

    let admins = service.list_admins().await?;

    #[allow(clippy::print_stdout)]
    {
        if json {
            println!("{}", serde_json::to_string_pretty(&admins)?);
        } else if admins.is_empty() {
            println!("No admins registered.");
        } else {
            for admin in &admins {
                println!("{}", summary_line(admin));
            }
        }
    }
    Ok(())
}

/// Print a single admin record.
///
/// # Errors
///
/// Returns `CliError` if the database is unreachable.
pub async fn show(identity: &AdminIdentity, json: bool) -> Result<(), CliError> {
    let (_, pool) = connect().await?;
    let service = AdminService::new(AdminRepository::new(&pool));

    let admin = service.get_admin_by_identity(identity).await?;

    #[allow(clippy::print_stdout)]
    {
        match admin {
            Some(admin) if json => println!("{}", serde_json::to_string_pretty(&admin)?),
            Some(admin) => println!("{}", summary_line(&admin)),
            None => println!("{identity} is not an admin."),
        }
    }
    Ok(())
}

/// Print whether `identity` may perform `action`.
///
/// Returns the decision so the caller can turn it into an exit status.
///
/// # Errors
///
/// Returns `CliError` if the database is unreachable.
pub async fn check(identity: &AdminIdentity, action: &str) -> Result<bool, CliError> {
    let (_, pool) = connect().await?;
    let service = AdminService::new(AdminRepository::new(&pool));

    let allowed = service.has_permission(identity, action).await?;

    #[allow(clippy::print_stdout)]
    {
        println!("{}", if allowed { "allowed" } else { "denied" });
    }
    Ok(allowed)
}

/// Delete an admin.
///
/// # Errors
///
/// Returns `CliError` wrapping `AdminError::NotFound` if `identity` is not an
/// admin, or a database error.
pub async fn delete(identity: &AdminIdentity) -> Result<(), CliError> {
    let (_, pool) = connect().await?;
    let service = AdminService::new(AdminRepository::new(&pool));

    let admin = service.delete_admin(identity).await?;

    tracing::info!("Admin deleted: {} (was {})", admin.identity, admin.role);
    Ok(())
}

fn summary_line(admin: &AdminRecord) -> String {
    let mut flags = Vec::new();
    if admin.can_add_admin {
        flags.push("add-admin");
    }
    if admin.can_delete_content {
        flags.push("delete-content");
    }

    format!(
        "{:<20} {:<10} {:<20} [{}] created {} by {}",
        admin.identity,
        admin.role,
        admin.display_name.as_deref().unwrap_or("-"),
        flags.join(","),
        admin.created_at.format("%Y-%m-%d %H:%M:%S"),
        admin.created_by
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn id(s: &str) -> AdminIdentity {
        AdminIdentity::parse(s).unwrap()
    }

    #[test]
    fn test_upsert_args_leave_unset_flags_unspecified() {
        let input = AdminInput::from(UpsertArgs {
            identity: id("10"),
            role: AdminRole::Basic,
            display_name: None,
            can_add_admin: false,
            can_delete_content: true,
            created_by: id("1"),
        });
        assert_eq!(input.can_add_admin, None);
        assert_eq!(input.can_delete_content, Some(true));
    }

    #[test]
    fn test_summary_line() {
        let created_at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let admin = AdminRecord {
            identity: id("10"),
            display_name: Some("alice".to_owned()),
            role: AdminRole::Manager,
            can_add_admin: false,
            can_delete_content: true,
            created_by: id("1"),
            created_at,
            updated_at: created_at,
        };

        let line = summary_line(&admin);
        assert!(line.starts_with("10 "));
        assert!(line.contains("manager"));
        assert!(line.contains("alice"));
        assert!(line.contains("[delete-content]"));
        assert!(line.ends_with("created 2026-01-02 03:04:05 by 1"));
    }
}
