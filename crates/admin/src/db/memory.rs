//! In-process admin record store.
//!
//! Behaves like [`super::AdminRepository`] (unique identities, `NotFound` on
//! update/delete of a missing identity, newest-first listing) without a
//! database.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::Mutex;

use warden_core::{AdminIdentity, AdminRole};

use super::{AdminStore, RepositoryError};
use crate::models::{AdminChanges, AdminRecord, NewAdmin};

#[derive(Debug, Default)]
struct State {
    /// Record plus its insertion sequence number.
    records: HashMap<AdminIdentity, (u64, AdminRecord)>,
    next_seq: u64,
}

/// Thread-safe, in-memory admin record store.
///
/// Records created within the same clock tick are still listed in reverse
/// insertion order.
#[derive(Debug, Default)]
pub struct MemoryAdminStore {
    state: Mutex<State>,
}

impl MemoryAdminStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.state.lock().await.records.len()
    }

    /// Returns true if no records are stored.
    pub async fn is_empty(&self) -> bool {
        self.state.lock().await.records.is_empty()
    }
}

impl AdminStore for MemoryAdminStore {
    async fn find_by_identity(
        &self,
        identity: &AdminIdentity,
    ) -> Result<Option<AdminRecord>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state.records.get(identity).map(|(_, record)| record.clone()))
    }

    async fn find_role(
        &self,
        identity: &AdminIdentity,
    ) -> Result<Option<AdminRole>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state.records.get(identity).map(|(_, record)| record.role))
    }

    async fn create(&self, admin: &NewAdmin) -> Result<AdminRecord, RepositoryError> {
        let mut state = self.state.lock().await;

        if state.records.contains_key(&admin.identity) {
            return Err(RepositoryError::Conflict(
                "identity already exists".to_owned(),
            ));
        }

        let now = Utc::now();
        let record = AdminRecord {
            identity: admin.identity.clone(),
            display_name: admin.display_name.clone(),
            role: admin.role,
            can_add_admin: admin.flags.can_add_admin,
            can_delete_content: admin.flags.can_delete_content,
            created_by: admin.created_by.clone(),
            created_at: now,
            updated_at: now,
        };

        let seq = state.next_seq;
        state.next_seq += 1;
        state
            .records
            .insert(admin.identity.clone(), (seq, record.clone()));

        Ok(record)
    }

    async fn update(
        &self,
        identity: &AdminIdentity,
        changes: &AdminChanges,
    ) -> Result<AdminRecord, RepositoryError> {
        let mut state = self.state.lock().await;
        let (_, record) = state
            .records
            .get_mut(identity)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(display_name) = &changes.display_name {
            record.display_name = Some(display_name.clone());
        }
        record.role = changes.role;
        record.can_add_admin = changes.flags.can_add_admin;
        record.can_delete_content = changes.flags.can_delete_content;
        record.updated_at = Utc::now();

        Ok(record.clone())
    }

    async fn delete(&self, identity: &AdminIdentity) -> Result<AdminRecord, RepositoryError> {
        let mut state = self.state.lock().await;
        state
            .records
            .remove(identity)
            .map(|(_, record)| record)
            .ok_or(RepositoryError::NotFound)
    }

    async fn list_all(&self) -> Result<Vec<AdminRecord>, RepositoryError> {
        let state = self.state.lock().await;
        let mut entries: Vec<_> = state.records.values().collect();
        entries.sort_by(|(seq_a, a), (seq_b, b)| {
            b.created_at.cmp(&a.created_at).then(seq_b.cmp(seq_a))
        });
        Ok(entries.into_iter().map(|(_, record)| record.clone()).collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use warden_core::AdminFlags;

    use super::*;

    fn id(s: &str) -> AdminIdentity {
        AdminIdentity::parse(s).unwrap()
    }

    fn new_admin(identity: &str) -> NewAdmin {
        NewAdmin {
            identity: id(identity),
            display_name: None,
            role: AdminRole::Basic,
            flags: AdminFlags::default(),
            created_by: id("1"),
        }
    }

    #[tokio::test]
    async fn test_create_duplicate_is_conflict() {
        let store = MemoryAdminStore::new();
        store.create(&new_admin("10")).await.unwrap();

        let err = store.create(&new_admin("10")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = MemoryAdminStore::new();
        let changes = AdminChanges {
            display_name: None,
            role: AdminRole::Manager,
            flags: AdminFlags::default(),
        };
        let err = store.update(&id("10"), &changes).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_update_keeps_display_name_when_absent() {
        let store = MemoryAdminStore::new();
        let mut admin = new_admin("10");
        admin.display_name = Some("alice".to_owned());
        store.create(&admin).await.unwrap();

        let changes = AdminChanges {
            display_name: None,
            role: AdminRole::Manager,
            flags: AdminFlags::default(),
        };
        let updated = store.update(&id("10"), &changes).await.unwrap();
        assert_eq!(updated.display_name.as_deref(), Some("alice"));
        assert_eq!(updated.role, AdminRole::Manager);
    }

    #[tokio::test]
    async fn test_delete_returns_prior_state() {
        let store = MemoryAdminStore::new();
        store.create(&new_admin("10")).await.unwrap();

        let deleted = store.delete(&id("10")).await.unwrap();
        assert_eq!(deleted.identity, id("10"));
        assert!(store.is_empty().await);
        assert!(matches!(
            store.delete(&id("10")).await,
            Err(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let store = MemoryAdminStore::new();
        for identity in ["1", "2", "3"] {
            store.create(&new_admin(identity)).await.unwrap();
        }

        let listed: Vec<_> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.identity.into_inner())
            .collect();
        assert_eq!(listed, ["3", "2", "1"]);
    }
}
