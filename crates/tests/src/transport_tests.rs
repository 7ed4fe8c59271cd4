use pretty_assertions::assert_eq;
use std::sync::atomic::Ordering;

use crate::common;
use client::ClientError;

async fn logged_in_client(
    base: &str,
) -> client::ApiClient {
    let api = common::client_for(base);
    api.login("mika".to_string(), "correct-horse-battery".to_string(), false)
        .await
        .expect("login should succeed");
    api
}

/// A 401 + JWT_EXPIRED on a data request triggers exactly one refresh
/// exchange, then one retry of the original request.
#[tokio::test]
async fn expired_access_refreshes_once_and_retries_once() {
    let (base, mock) = common::spawn_mock().await;
    let api = logged_in_client(&base).await;

    mock.expire_access();

    let schools = api.schools().await.expect("retried request should succeed");
    assert_eq!(schools.len(), 2);

    assert_eq!(mock.refresh_calls.load(Ordering::SeqCst), 1);
    // Original attempt + one retry.
    assert_eq!(mock.schools_calls.load(Ordering::SeqCst), 2);
    assert!(api.session().is_logged_in());
    // The session now holds the rotated pair.
    assert_eq!(api.session().access_token().as_deref(), Some("access-2"));
}

/// Even when the refreshed token is itself rejected, there is no second
/// refresh: the session ends instead.
#[tokio::test]
async fn rejected_refreshed_token_is_terminal_not_a_loop() {
    let (base, mock) = common::spawn_mock().await;
    let api = logged_in_client(&base).await;

    mock.reject_all_access.store(true, Ordering::SeqCst);

    let err = api.schools().await.expect_err("request must fail");
    assert!(matches!(err, ClientError::SessionExpired));

    assert_eq!(mock.refresh_calls.load(Ordering::SeqCst), 1);
    // Original attempt + one retry, nothing more.
    assert_eq!(mock.schools_calls.load(Ordering::SeqCst), 2);
    assert!(!api.session().is_logged_in());
}

/// A failing refresh exchange forces logout; the refresh is not retried.
#[tokio::test]
async fn refresh_failure_forces_logout() {
    let (base, mock) = common::spawn_mock().await;
    let api = logged_in_client(&base).await;

    mock.expire_access();
    mock.refresh_rejects.store(true, Ordering::SeqCst);

    let err = api.schools().await.expect_err("request must fail");
    assert!(matches!(err, ClientError::SessionExpired));
    assert_eq!(mock.refresh_calls.load(Ordering::SeqCst), 1);
    assert!(!api.session().is_logged_in());
}

/// A 401 without the expiry code is an ordinary API error — no refresh.
#[tokio::test]
async fn plain_401_does_not_trigger_refresh() {
    let (base, mock) = common::spawn_mock().await;
    let api = logged_in_client(&base).await;

    mock.plain_unauthorized.store(true, Ordering::SeqCst);

    let err = api.schools().await.expect_err("request must fail");
    match err {
        ClientError::Api(app) => assert_eq!(app.message, "Invalid token"),
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(mock.refresh_calls.load(Ordering::SeqCst), 0);
    // The session is untouched; only the transport dance was skipped.
    assert!(api.session().is_logged_in());
}

/// Signed-out requests never attempt a refresh either.
#[tokio::test]
async fn signed_out_request_surfaces_401_without_refresh() {
    let (base, mock) = common::spawn_mock().await;
    let api = common::client_for(&base);

    let err = api.schools().await.expect_err("request must fail");
    assert!(matches!(err, ClientError::Api(_)));
    assert_eq!(mock.refresh_calls.load(Ordering::SeqCst), 0);
}

/// Server-reported failures carry their message through verbatim.
#[tokio::test]
async fn api_error_message_is_surfaced_verbatim() {
    let (base, mock) = common::spawn_mock().await;
    let api = logged_in_client(&base).await;

    mock.schools_forbidden.store(true, Ordering::SeqCst);

    let err = api.schools().await.expect_err("request must fail");
    assert_eq!(err.friendly_message(), "Admins only");
    assert_eq!(err.page_status(), 403);
}

/// Transport-level failure (nothing listening) maps to the Transport class.
#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Port 9 (discard) is somewhere nothing answers HTTP.
    let api = common::client_for("http://127.0.0.1:9");

    let err = api.schools().await.expect_err("request must fail");
    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(err.page_status(), 503);
}
