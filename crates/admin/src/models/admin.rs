//! Admin record domain types.
//!
//! These types represent validated admin records and the inputs used to
//! create or change them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use warden_core::{AdminFlags, AdminIdentity, AdminRole};

/// An administrator (domain type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminRecord {
    /// External account identifier; primary key, never changes.
    pub identity: AdminIdentity,
    /// Informational display name (e.g. a messenger username).
    pub display_name: Option<String>,
    /// Privilege tier.
    pub role: AdminRole,
    /// Override flag; persisted, not read by permission checks.
    pub can_add_admin: bool,
    /// Override flag; persisted, not read by permission checks.
    pub can_delete_content: bool,
    /// Identity of whoever created the record.
    pub created_by: AdminIdentity,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl AdminRecord {
    /// The override flags stored on this record.
    #[must_use]
    pub const fn flags(&self) -> AdminFlags {
        AdminFlags {
            can_add_admin: self.can_add_admin,
            can_delete_content: self.can_delete_content,
        }
    }

    /// Whether this admin's role grants `action`.
    #[must_use]
    pub fn allows(&self, action: &str) -> bool {
        self.role.allows(action)
    }
}

/// Caller request for [`crate::services::AdminService::create_or_update_admin`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminInput {
    pub identity: AdminIdentity,
    pub display_name: Option<String>,
    pub role: AdminRole,
    pub can_add_admin: Option<bool>,
    pub can_delete_content: Option<bool>,
    /// The admin performing the operation (or the bootstrap identity).
    pub created_by: AdminIdentity,
}

impl AdminInput {
    /// Request with no display name and unspecified flags.
    #[must_use]
    pub const fn new(identity: AdminIdentity, role: AdminRole, created_by: AdminIdentity) -> Self {
        Self {
            identity,
            display_name: None,
            role,
            can_add_admin: None,
            can_delete_content: None,
            created_by,
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub const fn with_can_add_admin(mut self, value: bool) -> Self {
        self.can_add_admin = Some(value);
        self
    }

    #[must_use]
    pub const fn with_can_delete_content(mut self, value: bool) -> Self {
        self.can_delete_content = Some(value);
        self
    }

    /// Flags that will actually be stored for this request.
    #[must_use]
    pub fn effective_flags(&self) -> AdminFlags {
        AdminFlags::effective(self.role, self.can_add_admin, self.can_delete_content)
    }
}

/// A record to insert into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdmin {
    pub identity: AdminIdentity,
    pub display_name: Option<String>,
    pub role: AdminRole,
    pub flags: AdminFlags,
    pub created_by: AdminIdentity,
}

/// Fields the update path may change.
///
/// `identity` and `created_by` are deliberately absent. A `None`
/// display name keeps the stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminChanges {
    pub display_name: Option<String>,
    pub role: AdminRole,
    pub flags: AdminFlags,
}

impl From<&AdminInput> for NewAdmin {
    fn from(input: &AdminInput) -> Self {
        Self {
            identity: input.identity.clone(),
            display_name: input.display_name.clone(),
            role: input.role,
            flags: input.effective_flags(),
            created_by: input.created_by.clone(),
        }
    }
}

impl From<&AdminInput> for AdminChanges {
    fn from(input: &AdminInput) -> Self {
        Self {
            display_name: input.display_name.clone(),
            role: input.role,
            flags: input.effective_flags(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn id(s: &str) -> AdminIdentity {
        AdminIdentity::parse(s).unwrap()
    }

    #[test]
    fn test_new_admin_uses_effective_flags() {
        let input = AdminInput::new(id("1"), AdminRole::SuperAdmin, id("2"))
            .with_can_add_admin(false)
            .with_can_delete_content(false);
        let new = NewAdmin::from(&input);
        assert!(new.flags.can_add_admin);
        assert!(new.flags.can_delete_content);
        assert_eq!(new.created_by, id("2"));
    }

    #[test]
    fn test_changes_carry_display_name() {
        let input = AdminInput::new(id("1"), AdminRole::Basic, id("2")).with_display_name("bob");
        let changes = AdminChanges::from(&input);
        assert_eq!(changes.display_name.as_deref(), Some("bob"));
        assert_eq!(changes.flags, AdminFlags::default());
    }
}
