use dioxus::prelude::*;
use shared_types::ChatEvent;
use shared_ui::{use_toast, ToastOptions};

use crate::session::{use_api, use_hub, use_session};

/// Headless component that polls the realtime channel and publishes every
/// event into the shared hub, plus an in-app toast for new messages.
///
/// Mount once inside the admin layout. The poll loop is owned by this
/// component's coroutine: navigating away drops it, which also drops its
/// hub subscription downstream — no dangling listeners. It stops on its
/// own after `poll_max_errors` consecutive transport failures; the user
/// can reload the page to restart it.
#[component]
pub fn ChatListener() -> Element {
    let api = use_api();
    let hub = use_hub();
    let session = use_session();
    let toast = use_toast();
    let config = use_context::<client::ClientConfig>();

    use_coroutine(move |_: UnboundedReceiver<()>| {
        let api = api.clone();
        let hub = hub.clone();
        async move {
            let quiet = api.session().quiet_toasts();
            let mut cursor = 0_i64;
            let mut consecutive_errors: u32 = 0;

            loop {
                if !session.is_logged_in() {
                    break;
                }
                match api.poll_chat_events(cursor).await {
                    Ok(batch) => {
                        consecutive_errors = 0;
                        cursor = cursor.max(batch.cursor);
                        for event in batch.events {
                            if !quiet {
                                if let ChatEvent::MessagePosted { message } = &event {
                                    if !message.pending {
                                        toast.success(
                                            format!("{}: {}", message.author, message.body),
                                            ToastOptions::new(),
                                        );
                                    }
                                }
                            }
                            hub.publish(event);
                        }
                    }
                    Err(err) => {
                        consecutive_errors += 1;
                        tracing::debug!(error = %err, consecutive_errors, "chat poll failed");
                        if consecutive_errors >= config.poll_max_errors {
                            tracing::warn!("chat listener stopping after repeated failures");
                            break;
                        }
                        // The next poll's round-trip time is the only
                        // pacing; the channel long-polls server-side.
                    }
                }
            }
        }
    });

    // Headless — renders nothing
    rsx! {}
}
