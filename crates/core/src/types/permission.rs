//! Static role → action table and override-flag policy.
//!
//! Actions are opaque strings supplied by callers. Only the names in
//! [`Permission`] can ever be granted to a non-superadmin role; anything else
//! is denied unless the role bypasses the table entirely.

use serde::{Deserialize, Serialize};

use super::role::AdminRole;

/// A named capability that the static table can grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    ManageFields,
    ManageChannels,
    UploadContent,
    DeleteContent,
}

impl Permission {
    /// Wire name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ManageFields => "MANAGE_FIELDS",
            Self::ManageChannels => "MANAGE_CHANNELS",
            Self::UploadContent => "UPLOAD_CONTENT",
            Self::DeleteContent => "DELETE_CONTENT",
        }
    }

    /// Exact, case-sensitive lookup of an action name.
    #[must_use]
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            "MANAGE_FIELDS" => Some(Self::ManageFields),
            "MANAGE_CHANNELS" => Some(Self::ManageChannels),
            "UPLOAD_CONTENT" => Some(Self::UploadContent),
            "DELETE_CONTENT" => Some(Self::DeleteContent),
            _ => None,
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const MANAGER_PERMISSIONS: &[Permission] = &[
    Permission::ManageFields,
    Permission::ManageChannels,
    Permission::UploadContent,
    Permission::DeleteContent,
];

const BASIC_PERMISSIONS: &[Permission] = &[Permission::UploadContent];

/// What a role is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    /// Every action, known or not. No table row is consulted.
    Everything,
    /// Exactly the listed permissions.
    Only(&'static [Permission]),
}

impl Grant {
    /// Whether this grant covers `action`.
    #[must_use]
    pub fn allows(self, action: &str) -> bool {
        match self {
            Self::Everything => true,
            Self::Only(permissions) => {
                Permission::from_action(action).is_some_and(|p| permissions.contains(&p))
            }
        }
    }
}

impl AdminRole {
    /// The static grant for this role.
    #[must_use]
    pub const fn grant(self) -> Grant {
        match self {
            Self::SuperAdmin => Grant::Everything,
            Self::Manager => Grant::Only(MANAGER_PERMISSIONS),
            Self::Basic => Grant::Only(BASIC_PERMISSIONS),
        }
    }

    /// Whether a holder of this role may perform `action`.
    ///
    /// Per-record override flags play no part here.
    #[must_use]
    pub fn allows(self, action: &str) -> bool {
        self.grant().allows(action)
    }
}

/// The override flags persisted on an admin record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AdminFlags {
    pub can_add_admin: bool,
    pub can_delete_content: bool,
}

impl AdminFlags {
    /// Flags to store for `role` given what the caller asked for.
    ///
    /// Superadmins always get both flags, managers always get
    /// `can_delete_content`. Unspecified requests default to `false`.
    #[must_use]
    pub fn effective(
        role: AdminRole,
        can_add_admin: Option<bool>,
        can_delete_content: Option<bool>,
    ) -> Self {
        let can_add_admin = can_add_admin.unwrap_or(false);
        let can_delete_content = can_delete_content.unwrap_or(false);

        match role {
            AdminRole::SuperAdmin => Self {
                can_add_admin: true,
                can_delete_content: true,
            },
            AdminRole::Manager => Self {
                can_add_admin,
                can_delete_content: true,
            },
            AdminRole::Basic => Self {
                can_add_admin,
                can_delete_content,
            },
        }
    }
}
