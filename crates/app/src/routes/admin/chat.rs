use dioxus::prelude::*;
use shared_types::{AppError, CastVoteRequest, ChatEvent, ChatMessage, ChatVote, CreateRoomRequest, PostMessageRequest};
use shared_ui::{use_toast, Badge, BadgeVariant, Button, ButtonVariant, Input, Skeleton, Textarea, ToastOptions};
use validator::Validate;

use crate::session::{use_access, use_api, use_hub, use_session};
use client::{Access, AdminAction, ChatFeed};

/// Desktop chat admin: room list, message pane, votes, composer.
///
/// All chat state lives in one `ChatFeed`; the page subscribes to the
/// event hub on mount and merges whatever arrives by upsert-by-id. The
/// subscription is owned by the coroutine below — leaving the page drops
/// it, which unsubscribes.
#[component]
pub fn ChatPage() -> Element {
    let toast = use_toast();
    let hub = use_hub();
    let session = use_session();
    let tier = use_access(AdminAction::ManageChatRooms);
    let writable = tier == Access::Granted;

    let mut feed = use_signal(ChatFeed::new);
    let mut selected = use_signal(|| Option::<i64>::None);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut rooms_loaded = use_signal(|| false);

    // Initial room list. The spawned future dies with the component.
    let api_for_rooms = use_api();
    use_hook(move || {
        let api = api_for_rooms.clone();
        spawn(async move {
            match api.chat_rooms().await {
                Ok(rooms) => {
                    if selected.peek().is_none() {
                        if let Some(first) = rooms.first() {
                            selected.set(Some(first.id));
                        }
                    }
                    feed.write().set_rooms(rooms);
                }
                Err(err) => load_error.set(Some(err.friendly_message())),
            }
            rooms_loaded.set(true);
        });
    });

    // Refetch messages and votes whenever the selected room changes.
    let api_for_room = use_api();
    use_effect(move || {
        let Some(room_id) = selected() else { return };
        let api = api_for_room.clone();
        spawn(async move {
            match api.chat_messages(room_id).await {
                Ok(messages) => feed.write().set_messages(room_id, messages),
                Err(err) => {
                    tracing::debug!(error = %err, room_id, "message fetch failed");
                    feed.write().set_messages(room_id, Vec::new());
                }
            }
            match api.chat_votes(room_id).await {
                Ok(votes) => feed.write().set_votes(room_id, votes),
                Err(_) => feed.write().set_votes(room_id, Vec::new()),
            }
        });
    });

    // Live updates: own a subscription for the lifetime of this page.
    use_coroutine(move |_: UnboundedReceiver<()>| {
        let hub = hub.clone();
        async move {
            let mut subscription = hub.subscribe();
            while let Some(event) = subscription.next().await {
                feed.write().apply_event(event);
            }
        }
    });

    // Composer state
    let mut draft = use_signal(String::new);
    let mut next_temp_id = use_signal(|| -1_i64);

    let api_for_send = use_api();
    let mut send_message = move || {
        let api = api_for_send.clone();
        let Some(room_id) = selected() else { return };
        let body = draft().trim().to_string();
        if body.is_empty() {
            return;
        }

        let nonce = uuid::Uuid::new_v4().to_string();
        let author = session
            .current_user
            .read()
            .as_ref()
            .map(|u| u.username.clone())
            .unwrap_or_default();

        // Optimistic insert; the server echo replaces it by nonce.
        let temp_id = next_temp_id();
        next_temp_id.set(temp_id - 1);
        feed.write().insert_pending(ChatMessage {
            id: temp_id,
            room_id,
            author,
            body: body.clone(),
            sent_at: chrono::Utc::now(),
            client_nonce: Some(nonce.clone()),
            pending: true,
        });
        draft.set(String::new());

        spawn(async move {
            let req = PostMessageRequest {
                room_id,
                body,
                client_nonce: nonce,
            };
            match api.post_message(&req).await {
                Ok(echo) => feed.write().upsert_message(echo),
                Err(err) => toast.error(err.friendly_message(), ToastOptions::new()),
            }
        });
    };

    let api_for_vote = use_api();
    let cast = move |vote_id: i64, option_id: i64| {
        let api = api_for_vote.clone();
        spawn(async move {
            let req = CastVoteRequest { vote_id, option_id };
            match api.cast_vote(&req).await {
                Ok(vote) => {
                    feed.write().apply_event(ChatEvent::VoteUpdated { vote });
                }
                Err(err) => toast.error(err.friendly_message(), ToastOptions::new()),
            }
        });
    };

    // Create-room form (full access only)
    let mut new_room_name = use_signal(String::new);
    let api_for_create = use_api();
    let mut create_room = move || {
        let api = api_for_create.clone();
        let req = CreateRoomRequest {
            name: new_room_name().trim().to_string(),
            topic: String::new(),
            school_id: None,
        };
        if let Err(errs) = req.validate() {
            let msg = AppError::from(errs)
                .field_errors
                .into_values()
                .next()
                .unwrap_or_else(|| "Invalid room name".to_string());
            toast.error(msg, ToastOptions::new());
            return;
        }
        spawn(async move {
            match api.create_room(&req).await {
                Ok(room) => {
                    new_room_name.set(String::new());
                    selected.set(Some(room.id));
                    feed.write().apply_event(ChatEvent::RoomUpdated { room });
                }
                Err(err) => toast.error(err.friendly_message(), ToastOptions::new()),
            }
        });
    };

    let feed_read = feed.read();
    let rooms = feed_read.rooms.clone();
    let messages: Vec<ChatMessage> = selected()
        .map(|room| feed_read.messages(room).to_vec())
        .unwrap_or_default();
    let votes: Vec<ChatVote> = selected()
        .map(|room| feed_read.votes(room).to_vec())
        .unwrap_or_default();
    drop(feed_read);

    rsx! {
        div { class: "chat-page",
            aside { class: "chat-rooms",
                h3 { "Rooms" }
                if let Some(err) = load_error() {
                    p { class: "admin-error", "{err}" }
                }
                if !rooms_loaded() {
                    Skeleton { lines: 3 }
                }
                ul { class: "chat-room-list",
                    for room in rooms {
                        li {
                            key: "{room.id}",
                            class: if selected() == Some(room.id) { "chat-room chat-room-active" } else { "chat-room" },
                            onclick: {
                                let id = room.id;
                                move |_| selected.set(Some(id))
                            },
                            span { class: "chat-room-name", "{room.name}" }
                            span { class: "chat-room-meta", "{room.member_count} members" }
                        }
                    }
                }
                if writable {
                    div { class: "chat-room-create",
                        Input {
                            placeholder: "New room name",
                            value: new_room_name(),
                            on_input: move |e: FormEvent| new_room_name.set(e.value()),
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| create_room(),
                            "Create"
                        }
                    }
                }
            }

            section { class: "chat-main",
                if selected().is_none() {
                    p { class: "admin-empty", "Select a room." }
                } else {
                    ul { class: "chat-messages",
                        for message in messages {
                            li {
                                key: "{message.id}",
                                class: if message.pending { "chat-message chat-message-pending" } else { "chat-message" },
                                span { class: "chat-message-author", "{message.author}" }
                                span { class: "chat-message-body", "{message.body}" }
                            }
                        }
                    }

                    div { class: "chat-composer",
                        Textarea {
                            placeholder: if writable { "Write a message...".to_string() } else { "Read-only access".to_string() },
                            value: draft(),
                            disabled: !writable,
                            on_input: move |e: FormEvent| draft.set(e.value()),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: !writable,
                            onclick: move |_| send_message(),
                            "Send"
                        }
                    }
                }
            }

            aside { class: "chat-votes",
                h3 { "Votes" }
                if votes.is_empty() {
                    p { class: "admin-empty", "No votes in this room." }
                }
                for vote in votes {
                    VotePanel {
                        vote: vote.clone(),
                        on_cast: {
                            let cast = cast.clone();
                            move |(vote_id, option_id)| cast(vote_id, option_id)
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn VotePanel(vote: ChatVote, on_cast: EventHandler<(i64, i64)>) -> Element {
    let vote_id = vote.id;
    rsx! {
        div { class: "vote-panel",
            div { class: "vote-question",
                span { "{vote.question}" }
                if vote.closed {
                    Badge { variant: BadgeVariant::Secondary, "Closed" }
                }
            }
            for option in vote.options.clone() {
                div { class: "vote-option",
                    Button {
                        variant: ButtonVariant::Ghost,
                        disabled: vote.closed,
                        onclick: {
                            let option_id = option.id;
                            move |_| on_cast.call((vote_id, option_id))
                        },
                        "{option.label}"
                    }
                    span { class: "vote-count", "{option.count}" }
                }
            }
        }
    }
}
