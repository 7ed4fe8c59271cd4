use pretty_assertions::assert_eq;

use crate::common;
use client::ChatFeed;
use shared_types::{ChatMessage, PostMessageRequest};

async fn logged_in_client(base: &str) -> client::ApiClient {
    let api = common::client_for(base);
    api.login("mika".to_string(), "correct-horse-battery".to_string(), false)
        .await
        .expect("login should succeed");
    api
}

#[tokio::test]
async fn rooms_and_messages_round_trip() {
    let (base, _mock) = common::spawn_mock().await;
    let api = logged_in_client(&base).await;

    let rooms = api.chat_rooms().await.expect("rooms should load");
    assert_eq!(rooms.len(), 1);
    let room = rooms[0].id;

    assert!(api.chat_messages(room).await.expect("messages").is_empty());

    let req = PostMessageRequest {
        room_id: room,
        body: "hello campus".to_string(),
        client_nonce: "nonce-1".to_string(),
    };
    let echo = api.post_message(&req).await.expect("post should succeed");
    assert_eq!(echo.body, "hello campus");
    assert!(!echo.pending);

    let messages = api.chat_messages(room).await.expect("messages");
    assert_eq!(messages.len(), 1);
}

/// The optimistic insert is replaced by the server echo, leaving a single
/// confirmed message — the UI never shows a duplicate.
#[tokio::test]
async fn optimistic_send_reconciles_against_server_echo() {
    let (base, _mock) = common::spawn_mock().await;
    let api = logged_in_client(&base).await;

    let mut feed = ChatFeed::new();
    feed.set_rooms(api.chat_rooms().await.expect("rooms"));
    let room = feed.rooms[0].id;

    let nonce = "nonce-opt".to_string();
    feed.insert_pending(ChatMessage {
        id: -1,
        room_id: room,
        author: "mika".to_string(),
        body: "optimistic".to_string(),
        sent_at: chrono::Utc::now(),
        client_nonce: Some(nonce.clone()),
        pending: true,
    });
    assert!(feed.messages(room)[0].pending);

    let req = PostMessageRequest {
        room_id: room,
        body: "optimistic".to_string(),
        client_nonce: nonce,
    };
    let echo = api.post_message(&req).await.expect("post should succeed");
    feed.upsert_message(echo.clone());

    let messages = feed.messages(room);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, echo.id);
    assert!(!messages[0].pending);
}

/// Polling returns everything after the cursor; applying a batch twice
/// leaves the feed unchanged (upsert-by-id).
#[tokio::test]
async fn event_poll_batches_are_cursored_and_idempotent() {
    let (base, _mock) = common::spawn_mock().await;
    let api = logged_in_client(&base).await;

    let room = api.chat_rooms().await.expect("rooms")[0].id;
    for n in 0..3 {
        let req = PostMessageRequest {
            room_id: room,
            body: format!("message {n}"),
            client_nonce: format!("nonce-{n}"),
        };
        api.post_message(&req).await.expect("post should succeed");
    }

    let batch = api.poll_chat_events(0).await.expect("poll");
    assert_eq!(batch.events.len(), 3);
    assert_eq!(batch.cursor, 3);

    // Nothing new after the cursor.
    let empty = api.poll_chat_events(batch.cursor).await.expect("poll");
    assert!(empty.events.is_empty());

    let mut feed = ChatFeed::new();
    for event in batch.events.clone() {
        feed.apply_event(event);
    }
    let once = feed.clone();
    for event in batch.events {
        feed.apply_event(event);
    }
    assert_eq!(feed, once);
    assert_eq!(feed.messages(room).len(), 3);
}
