use pretty_assertions::assert_eq;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::common;
use client::{ClientError, MemoryVault, TokenVault};
use shared_types::Role;

#[tokio::test]
async fn login_establishes_session_with_parsed_role() {
    let (base, mock) = common::spawn_mock().await;
    let api = common::client_for(&base);

    let user = api
        .login("mika".to_string(), "correct-horse-battery".to_string(), false)
        .await
        .expect("login should succeed");

    assert_eq!(user.role(), Role::CampusAdmin);
    assert!(api.session().is_logged_in());
    assert_eq!(api.session().role(), Role::CampusAdmin);
    assert_eq!(api.session().username().as_deref(), Some("mika"));
    assert_eq!(mock.login_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn login_failure_surfaces_server_message_and_leaves_no_session() {
    let (base, _mock) = common::spawn_mock().await;
    let api = common::client_for(&base);

    let err = api
        .login("mika".to_string(), "wrong-password-entirely".to_string(), false)
        .await
        .expect_err("login must fail");

    match err {
        ClientError::Api(app) => assert_eq!(app.message, "Invalid credentials"),
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(!api.session().is_logged_in());
}

#[tokio::test]
async fn remembered_session_survives_reload_and_me_restores_role() {
    let (base, _mock) = common::spawn_mock().await;
    let vault: Arc<dyn TokenVault> = Arc::new(MemoryVault::new());

    let api = common::client_with_vault(&base, vault.clone());
    api.login("mika".to_string(), "correct-horse-battery".to_string(), true)
        .await
        .expect("login should succeed");

    // Simulated reload: fresh client over the same vault.
    let reloaded = common::client_with_vault(&base, vault);
    assert!(reloaded.session().restore());
    assert!(reloaded.session().is_logged_in());
    // Identity is unknown until re-fetched...
    assert_eq!(reloaded.session().role(), Role::Guest);

    // ...and `me` fills it back in using the stored tokens.
    let user = reloaded.me().await.expect("me should succeed");
    assert_eq!(user.role(), Role::CampusAdmin);
    assert_eq!(reloaded.session().role(), Role::CampusAdmin);
}

#[tokio::test]
async fn unremembered_session_is_gone_after_reload() {
    let (base, _mock) = common::spawn_mock().await;
    let vault: Arc<dyn TokenVault> = Arc::new(MemoryVault::new());

    let api = common::client_with_vault(&base, vault.clone());
    api.login("mika".to_string(), "correct-horse-battery".to_string(), false)
        .await
        .expect("login should succeed");
    assert!(api.session().is_logged_in());

    let reloaded = common::client_with_vault(&base, vault);
    assert!(!reloaded.session().restore());
    assert!(!reloaded.session().is_logged_in());
}

#[tokio::test]
async fn logout_clears_session_and_vault() {
    let (base, _mock) = common::spawn_mock().await;
    let vault: Arc<dyn TokenVault> = Arc::new(MemoryVault::new());

    let api = common::client_with_vault(&base, vault.clone());
    api.login("mika".to_string(), "correct-horse-battery".to_string(), true)
        .await
        .expect("login should succeed");

    api.logout().await;
    assert!(!api.session().is_logged_in());

    let reloaded = common::client_with_vault(&base, vault);
    assert!(!reloaded.session().restore());
}
