use pretty_assertions::assert_eq;

use crate::common;
use shared_types::{PlatformMode, SetPlatformModeRequest};

#[tokio::test]
async fn platform_status_defaults_to_open() {
    let (base, _mock) = common::spawn_mock().await;
    let api = common::client_for(&base);

    let status = api.platform_status().await.expect("status should load");
    assert_eq!(status.mode, PlatformMode::Open);
    assert_eq!(status.announcement, None);
}

#[tokio::test]
async fn mode_change_round_trips_with_announcement() {
    let (base, _mock) = common::spawn_mock().await;
    let api = common::client_for(&base);
    api.login("mika".to_string(), "correct-horse-battery".to_string(), false)
        .await
        .expect("login should succeed");

    let req = SetPlatformModeRequest {
        mode: PlatformMode::Maintenance,
        announcement: Some("Back at 06:00".to_string()),
    };
    let updated = api.set_platform_mode(&req).await.expect("mode change");
    assert_eq!(updated.mode, PlatformMode::Maintenance);

    let status = api.platform_status().await.expect("status should load");
    assert_eq!(status.mode, PlatformMode::Maintenance);
    assert_eq!(status.announcement.as_deref(), Some("Back at 06:00"));
}

#[tokio::test]
async fn mode_change_requires_authentication() {
    let (base, _mock) = common::spawn_mock().await;
    let api = common::client_for(&base);

    let req = SetPlatformModeRequest {
        mode: PlatformMode::ReadOnly,
        announcement: None,
    };
    assert!(api.set_platform_mode(&req).await.is_err());
}
