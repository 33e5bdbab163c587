//! Integration tests for admin permission resolution.
//!
//! These tests drive the public `AdminService` API end to end over the
//! in-memory store.

#![allow(clippy::unwrap_used)]

use warden_core::AdminRole;
use warden_integration_tests::{identity, register, service};

const KNOWN_ACTIONS: [&str; 4] = [
    "MANAGE_FIELDS",
    "MANAGE_CHANNELS",
    "UPLOAD_CONTENT",
    "DELETE_CONTENT",
];

const UNKNOWN_ACTIONS: [&str; 4] = ["MANAGE_FIELDS_TYPO", "DELETE_ADMIN", "upload_content", ""];

// =============================================================================
// Unregistered identities
// =============================================================================

#[tokio::test]
async fn test_unregistered_identity_has_nothing() {
    let svc = service();
    let who = identity("999");

    assert!(!svc.is_admin(&who).await.unwrap());
    assert!(!svc.is_super_admin(&who).await.unwrap());
    assert!(svc.get_role(&who).await.unwrap().is_none());
    assert!(svc.get_admin_by_identity(&who).await.unwrap().is_none());

    for action in KNOWN_ACTIONS.iter().chain(UNKNOWN_ACTIONS.iter()) {
        assert!(!svc.has_permission(&who, action).await.unwrap(), "{action}");
    }
}

// =============================================================================
// Role tiers
// =============================================================================

#[tokio::test]
async fn test_superadmin_allowed_everything() {
    let svc = service();
    register(&svc, "10", AdminRole::SuperAdmin).await;
    let who = identity("10");

    for action in KNOWN_ACTIONS.iter().chain(UNKNOWN_ACTIONS.iter()) {
        assert!(svc.has_permission(&who, action).await.unwrap(), "{action}");
    }
}

#[tokio::test]
async fn test_manager_allowed_exactly_manager_set() {
    let svc = service();
    register(&svc, "20", AdminRole::Manager).await;
    let who = identity("20");

    for action in KNOWN_ACTIONS {
        assert!(svc.has_permission(&who, action).await.unwrap(), "{action}");
    }
    for action in UNKNOWN_ACTIONS {
        assert!(!svc.has_permission(&who, action).await.unwrap(), "{action}");
    }
}

#[tokio::test]
async fn test_basic_allowed_upload_only() {
    let svc = service();
    register(&svc, "30", AdminRole::Basic).await;
    let who = identity("30");

    for action in KNOWN_ACTIONS.iter().chain(UNKNOWN_ACTIONS.iter()) {
        let expected = *action == "UPLOAD_CONTENT";
        assert_eq!(
            svc.has_permission(&who, action).await.unwrap(),
            expected,
            "{action}"
        );
    }
}

#[tokio::test]
async fn test_role_change_changes_permissions() {
    let svc = service();
    register(&svc, "40", AdminRole::Basic).await;
    let who = identity("40");
    assert!(!svc.has_permission(&who, "MANAGE_CHANNELS").await.unwrap());

    register(&svc, "40", AdminRole::Manager).await;
    assert_eq!(svc.get_role(&who).await.unwrap(), Some(AdminRole::Manager));
    assert!(svc.has_permission(&who, "MANAGE_CHANNELS").await.unwrap());
    assert!(!svc.is_super_admin(&who).await.unwrap());

    register(&svc, "40", AdminRole::SuperAdmin).await;
    assert!(svc.is_super_admin(&who).await.unwrap());
}
