use dioxus::prelude::*;
use shared_types::{ChatMessage, PostMessageRequest};
use shared_ui::{use_toast, Button, ButtonVariant, Input, Navbar, Skeleton, ToastOptions};

use crate::routes::Route;
use crate::session::{use_access, use_api, use_hub, use_session};
use client::{Access, AdminAction, ChatFeed};

/// Mobile chat admin: one column, room picker on top, same feed semantics
/// as the desktop page.
#[component]
pub fn ChatMobilePage() -> Element {
    let toast = use_toast();
    let hub = use_hub();
    let session = use_session();
    let api = use_api();
    let writable = use_access(AdminAction::ManageChatRooms) == Access::Granted;

    let mut feed = use_signal(ChatFeed::new);
    let mut selected = use_signal(|| Option::<i64>::None);
    let mut loaded = use_signal(|| false);

    let api_for_rooms = use_api();
    use_hook(move || {
        let api = api_for_rooms.clone();
        spawn(async move {
            if let Ok(rooms) = api.chat_rooms().await {
                if selected.peek().is_none() {
                    if let Some(first) = rooms.first() {
                        selected.set(Some(first.id));
                    }
                }
                feed.write().set_rooms(rooms);
            }
            loaded.set(true);
        });
    });

    let api_for_messages = use_api();
    use_effect(move || {
        let Some(room_id) = selected() else { return };
        let api = api_for_messages.clone();
        spawn(async move {
            let messages = api.chat_messages(room_id).await.unwrap_or_default();
            feed.write().set_messages(room_id, messages);
        });
    });

    use_coroutine(move |_: UnboundedReceiver<()>| {
        let hub = hub.clone();
        async move {
            let mut subscription = hub.subscribe();
            while let Some(event) = subscription.next().await {
                feed.write().apply_event(event);
            }
        }
    });

    let mut draft = use_signal(String::new);
    let mut next_temp_id = use_signal(|| -1_i64);

    let api_for_send = use_api();
    let mut send = move || {
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

    // Guard last, after every hook: this route sits outside the admin
    // layout, so it checks itself.
    if !session.is_logged_in() && !api.session().is_logged_in() {
        navigator().push(Route::AuthPage {
            redirect: Some("/m/admin/chat".to_string()),
        });
        return rsx! { p { "Redirecting to sign in..." } };
    }

    let feed_read = feed.read();
    let rooms = feed_read.rooms.clone();
    let messages: Vec<ChatMessage> = selected()
        .map(|room| feed_read.messages(room).to_vec())
        .unwrap_or_default();
    drop(feed_read);

    rsx! {
        div { class: "chat-mobile-page",
            Navbar {
                Link { to: Route::AdminDashboard {}, class: "navbar-link", "Back" }
                span { class: "navbar-brand", "Chat" }
            }

            if !loaded() {
                Skeleton { lines: 3 }
            } else {
                div { class: "chat-mobile-rooms",
                    for room in rooms {
                        Button {
                            variant: if selected() == Some(room.id) { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                            onclick: {
                                let id = room.id;
                                move |_| selected.set(Some(id))
                            },
                            "{room.name}"
                        }
                    }
                }

                ul { class: "chat-messages chat-messages-mobile",
                    for message in messages {
                        li {
                            key: "{message.id}",
                            class: if message.pending { "chat-message chat-message-pending" } else { "chat-message" },
                            span { class: "chat-message-author", "{message.author}" }
                            span { class: "chat-message-body", "{message.body}" }
                        }
                    }
                }

                div { class: "chat-composer chat-composer-mobile",
                    Input {
                        placeholder: if writable { "Message".to_string() } else { "Read-only".to_string() },
                        value: draft(),
                        disabled: !writable,
                        on_input: move |e: FormEvent| draft.set(e.value()),
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: !writable,
                        onclick: move |_| send(),
                        "Send"
                    }
                }
            }
        }
    }
}
