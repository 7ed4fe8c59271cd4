use dioxus::prelude::*;

mod chat_listener;
mod routes;
mod session;
mod vault;

use routes::Route;
use session::{use_api, use_session};

const APP_CSS: Asset = asset!("/assets/forumkit.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Build the client core once; everything below reads it from context.
    let api = use_hook(|| {
        let config = client::ClientConfig::from_env();
        let store = client::SessionStore::new(vault::platform_vault());
        store.restore();
        client::ApiClient::new(&config, store)
    });

    use_context_provider(|| client::ClientConfig::from_env());
    use_context_provider(|| api.clone());
    use_context_provider(client::EventHub::new);
    use_context_provider(session::SessionState::new);

    let api_for_restore = use_api();
    let mut state = use_session();

    // A restored session has tokens but no identity yet — re-fetch the
    // viewer so role-gated surfaces render correctly.
    use_hook(move || {
        let api = api_for_restore.clone();
        if api.session().is_logged_in() {
            spawn(async move {
                match api.me().await {
                    Ok(user) => state.set_user(user),
                    Err(err) => {
                        tracing::warn!(error = %err, "stored session rejected, signing out");
                        api.session().logout();
                        state.clear();
                    }
                }
            });
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
