use dioxus::prelude::*;
use shared_types::{AppError, LoginRequest};
use shared_ui::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Checkbox, Input, Label,
    Separator,
};
use std::collections::HashMap;
use validator::Validate;

use crate::routes::Route;
use crate::session::{use_api, use_session};

/// Sign-in page with username/password and OAuth links.
/// Accepts an optional `redirect` query param — after login, navigates
/// there instead of the home page (set by the admin guard).
#[component]
pub fn AuthPage(redirect: Option<String>) -> Element {
    let mut state = use_session();
    let api = use_api();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Pre-fill the remembered username from the last remembered session.
    use_hook(|| {
        if let Some(name) = api.session().username() {
            username.set(name);
        }
    });

    let redirect_target = use_signal(move || redirect);
    let go_to_destination = move || {
        if let Some(ref path) = *redirect_target.read() {
            navigator().push(NavigationTarget::<Route>::External(path.clone()));
        } else {
            navigator().push(Route::Home {});
        }
    };

    // Already signed in — nothing to do here.
    if state.is_logged_in() {
        go_to_destination();
    }

    let api_for_login = use_api();
    let handle_login = move |evt: FormEvent| {
        let api = api_for_login.clone();
        async move {
            evt.prevent_default();
            error_msg.set(None);
            field_errors.set(HashMap::new());

            // Client-side validation blocks the request entirely.
            let req = LoginRequest {
                username: username(),
                password: password(),
            };
            if let Err(errs) = req.validate() {
                let app_err = AppError::from(errs);
                field_errors.set(app_err.field_errors);
                return;
            }

            loading.set(true);
            match api.login(req.username, req.password, remember()).await {
                Ok(user) => {
                    state.set_user(user);
                    go_to_destination();
                }
                Err(err) => {
                    error_msg.set(Some(err.friendly_message()));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Use your campus account to continue" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    div { class: "auth-oauth-buttons",
                        a {
                            class: "auth-oauth-btn",
                            href: "/api/auth/oauth/google",
                            "Continue with Google"
                        }
                        a {
                            class: "auth-oauth-btn",
                            href: "/api/auth/oauth/kakao",
                            "Continue with Kakao"
                        }
                    }

                    div { class: "auth-divider",
                        Separator {}
                        span { class: "auth-divider-text", "or" }
                        Separator {}
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "username", "Username" }
                            Input {
                                id: "username",
                                placeholder: "campus username",
                                value: username(),
                                on_input: move |e: FormEvent| username.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("username") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Enter your password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("password") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-remember",
                            Checkbox {
                                id: "remember",
                                checked: remember(),
                                on_change: move |checked| remember.set(checked),
                            }
                            Label { html_for: "remember", "Keep me signed in" }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button button-primary",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        Link { to: Route::Home {}, "Back to the forum" }
                    }
                }
            }
        }
    }
}
