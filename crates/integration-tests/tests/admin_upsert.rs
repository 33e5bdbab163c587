//! Integration tests for the admin create-or-update policy, deletion and
//! listing order.

#![allow(clippy::unwrap_used)]

use warden_admin::{AdminError, AdminInput};
use warden_core::AdminRole;
use warden_integration_tests::{identity, register, service};

// =============================================================================
// Upsert
// =============================================================================

#[tokio::test]
async fn test_superadmin_gets_all_flags() {
    let svc = service();
    let input = AdminInput::new(identity("A"), AdminRole::SuperAdmin, identity("X"));

    let admin = svc.create_or_update_admin(&input).await.unwrap();

    assert!(admin.can_add_admin);
    assert!(admin.can_delete_content);

    let stored = svc
        .get_admin_by_identity(&identity("A"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, admin);
}

#[tokio::test]
async fn test_manager_delete_content_is_forced() {
    let svc = service();
    let input = AdminInput::new(identity("A"), AdminRole::Manager, identity("X"))
        .with_can_add_admin(false)
        .with_can_delete_content(false);

    let admin = svc.create_or_update_admin(&input).await.unwrap();

    assert!(!admin.can_add_admin);
    assert!(admin.can_delete_content);
}

#[tokio::test]
async fn test_basic_flags_follow_request() {
    let svc = service();
    let input =
        AdminInput::new(identity("A"), AdminRole::Basic, identity("X")).with_can_add_admin(true);

    let admin = svc.create_or_update_admin(&input).await.unwrap();

    assert!(admin.can_add_admin);
    assert!(!admin.can_delete_content);
}

#[tokio::test]
async fn test_repeat_upsert_keeps_single_record_and_creator() {
    let svc = service();
    let first = AdminInput::new(identity("A"), AdminRole::Manager, identity("X"))
        .with_display_name("first");
    let created = svc.create_or_update_admin(&first).await.unwrap();

    let second = AdminInput::new(identity("A"), AdminRole::SuperAdmin, identity("Y"))
        .with_display_name("second");
    let updated = svc.create_or_update_admin(&second).await.unwrap();

    assert_eq!(updated.role, AdminRole::SuperAdmin);
    assert!(updated.can_add_admin);
    assert!(updated.can_delete_content);
    assert_eq!(updated.display_name.as_deref(), Some("second"));
    assert_eq!(updated.created_by, identity("X"));
    assert_eq!(updated.created_at, created.created_at);

    let all = svc.list_admins().await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_concurrent_upserts_resolve_to_one_record() {
    let svc = service();
    let a = AdminInput::new(identity("77"), AdminRole::Basic, identity("X"));
    let b = AdminInput::new(identity("77"), AdminRole::Manager, identity("Y"));

    let (ra, rb) = tokio::join!(
        svc.create_or_update_admin(&a),
        svc.create_or_update_admin(&b)
    );
    ra.unwrap();
    rb.unwrap();

    let all = svc.list_admins().await.unwrap();
    assert_eq!(all.len(), 1);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_missing_is_error() {
    let svc = service();
    let result = svc.delete_admin(&identity("nobody")).await;
    assert!(matches!(result, Err(AdminError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_then_not_admin() {
    let svc = service();
    register(&svc, "50", AdminRole::Basic).await;

    let deleted = svc.delete_admin(&identity("50")).await.unwrap();
    assert_eq!(deleted.identity, identity("50"));
    assert!(!svc.is_admin(&identity("50")).await.unwrap());

    let again = svc.delete_admin(&identity("50")).await;
    assert!(matches!(again, Err(AdminError::NotFound(_))));
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_listing_is_newest_first() {
    let svc = service();
    for who in ["A", "B", "C"] {
        register(&svc, who, AdminRole::Basic).await;
    }

    let order: Vec<String> = svc
        .get_all_admins()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.identity.into_inner())
        .collect();
    assert_eq!(order, ["C", "B", "A"]);
}

#[tokio::test]
async fn test_listing_serializes_for_callers() {
    let svc = service();
    register(&svc, "60", AdminRole::Manager).await;

    let admins = svc.list_admins().await.unwrap();
    let json = serde_json::to_value(&admins).unwrap();

    assert_eq!(json[0]["identity"], "60");
    assert_eq!(json[0]["role"], "manager");
    assert_eq!(json[0]["can_delete_content"], true);
}
