//! Integration tests for Warden.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p warden-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `admin_permissions` - Permission resolution through the public service API
//! - `admin_upsert` - Create-or-update policy, deletion and listing
//!
//! Tests run against [`warden_admin::MemoryAdminStore`]; no database is needed.

use warden_admin::{AdminInput, AdminService, MemoryAdminStore};
use warden_core::{AdminIdentity, AdminRole};

/// Parse an identity, panicking on invalid test input.
///
/// # Panics
///
/// Panics if `s` is not a valid identity.
#[must_use]
#[allow(clippy::expect_used)]
pub fn identity(s: &str) -> AdminIdentity {
    AdminIdentity::parse(s).expect("valid test identity")
}

/// A service over an empty in-memory store.
#[must_use]
pub fn service() -> AdminService<MemoryAdminStore> {
    AdminService::new(MemoryAdminStore::new())
}

/// Register `who` with `role`, created by identity `"1"`.
///
/// # Panics
///
/// Panics if the in-memory store rejects the write.
#[allow(clippy::expect_used)]
pub async fn register(svc: &AdminService<MemoryAdminStore>, who: &str, role: AdminRole) {
    svc.create_or_update_admin(&AdminInput::new(identity(who), role, identity("1")))
        .await
        .expect("in-memory upsert");
}
