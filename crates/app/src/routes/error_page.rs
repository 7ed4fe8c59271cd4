use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant};

use crate::routes::Route;

/// Full-page error view keyed by HTTP status, with retry and home actions.
#[component]
pub fn ErrorView(status: u16) -> Element {
    let (title, detail) = describe(status);

    rsx! {
        div { class: "error-page",
            h1 { class: "error-status", "{status}" }
            h2 { class: "error-title", "{title}" }
            p { class: "error-detail", "{detail}" }
            div { class: "error-actions",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        navigator().go_back();
                    },
                    "Go Back"
                }
                if status == 401 {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            navigator().push(Route::AuthPage { redirect: None });
                        },
                        "Sign In"
                    }
                } else {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            navigator().push(Route::Home {});
                        },
                        "Go Home"
                    }
                }
            }
        }
    }
}

fn describe(status: u16) -> (&'static str, &'static str) {
    match status {
        401 => ("Session expired", "Please sign in again to continue."),
        403 => ("Not allowed", "Your account does not have access to this page."),
        404 => ("Not found", "The page or record you were looking for does not exist."),
        429 => ("Slow down", "Too many requests. Wait a moment and try again."),
        503 => ("Unreachable", "The server could not be reached. Check your connection."),
        _ => ("Something went wrong", "An unexpected error occurred. Try again shortly."),
    }
}
