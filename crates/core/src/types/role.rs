//! Admin privilege tiers.

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name an [`AdminRole`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid admin role: {0} (expected superadmin, manager or basic)")]
pub struct RoleParseError(pub String);

/// Admin role with different permission levels.
///
/// Variants are declared from least to most privileged, so the derived
/// `Ord` gives `SuperAdmin > Manager > Basic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "warden.admin_role", rename_all = "lowercase")
)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    /// Default tier: may upload content only.
    Basic,
    /// Manages fields, channels and content.
    Manager,
    /// Unrestricted access, including admin management.
    SuperAdmin,
}

impl AdminRole {
    /// All roles, least privileged first.
    pub const ALL: [Self; 3] = [Self::Basic, Self::Manager, Self::SuperAdmin];

    /// Canonical lowercase name, as stored and displayed.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Manager => "manager",
            Self::SuperAdmin => "superadmin",
        }
    }
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for AdminRole {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "superadmin" | "super_admin" => Ok(Self::SuperAdmin),
            "manager" => Ok(Self::Manager),
            "basic" => Ok(Self::Basic),
            _ => Err(RoleParseError(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_privilege_order() {
        assert!(AdminRole::SuperAdmin > AdminRole::Manager);
        assert!(AdminRole::Manager > AdminRole::Basic);
        assert_eq!(AdminRole::ALL.iter().max(), Some(&AdminRole::SuperAdmin));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("SUPERADMIN".parse::<AdminRole>().unwrap(), AdminRole::SuperAdmin);
        assert_eq!("super_admin".parse::<AdminRole>().unwrap(), AdminRole::SuperAdmin);
        assert_eq!("Manager".parse::<AdminRole>().unwrap(), AdminRole::Manager);
        assert_eq!("basic".parse::<AdminRole>().unwrap(), AdminRole::Basic);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "owner".parse::<AdminRole>().unwrap_err();
        assert_eq!(err, RoleParseError("owner".to_owned()));
    }

    #[test]
    fn test_display_matches_parse() {
        for role in AdminRole::ALL {
            assert_eq!(role.to_string().parse::<AdminRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&AdminRole::SuperAdmin).unwrap(),
            "\"superadmin\""
        );
        let role: AdminRole = serde_json::from_str("\"manager\"").unwrap();
        assert_eq!(role, AdminRole::Manager);
    }
}
