//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `WARDEN_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! ## Optional
//! - `WARDEN_DATABASE_MAX_CONNECTIONS` - Pool size (default: 10)
//! - `WARDEN_BOOTSTRAP_SUPERADMINS` - Comma-separated identities to ensure as superadmins

use secrecy::SecretString;
use thiserror::Error;

use warden_core::AdminIdentity;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin module configuration.
///
/// Implements `Debug` manually to redact the database URL.
#[derive(Clone)]
pub struct AdminConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// Maximum pooled database connections
    pub max_connections: u32,
    /// Identities that bootstrap ensures are superadmins
    pub bootstrap_superadmins: Vec<AdminIdentity>,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("database_url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("bootstrap_superadmins", &self.bootstrap_superadmins)
            .finish()
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("WARDEN_DATABASE_URL")?;
        let max_connections = match get_optional_env("WARDEN_DATABASE_MAX_CONNECTIONS") {
            Some(value) => parse_max_connections(&value)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let bootstrap_superadmins = get_optional_env("WARDEN_BOOTSTRAP_SUPERADMINS")
            .map(|list| parse_identity_list(&list, "WARDEN_BOOTSTRAP_SUPERADMINS"))
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            database_url,
            max_connections,
            bootstrap_superadmins,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable, treating blank values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_max_connections(value: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: String| {
        ConfigError::InvalidEnvVar("WARDEN_DATABASE_MAX_CONNECTIONS".to_string(), reason)
    };
    let n = value
        .trim()
        .parse::<u32>()
        .map_err(|e| invalid(e.to_string()))?;
    if n == 0 {
        return Err(invalid("must be at least 1".to_string()));
    }
    Ok(n)
}

/// Parse a comma-separated identity list, skipping empty entries.
fn parse_identity_list(list: &str, var_name: &str) -> Result<Vec<AdminIdentity>, ConfigError> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            AdminIdentity::parse(s)
                .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), format!("{s:?}: {e}")))
        })
        .collect()
}
