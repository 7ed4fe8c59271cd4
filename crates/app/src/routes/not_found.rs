use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFoundPage(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        div { class: "error-page",
            h1 { class: "error-status", "404" }
            h2 { class: "error-title", "Page not found" }
            p { class: "error-detail", "No page at /{path}." }
            Link { to: Route::Home {}, "Go Home" }
        }
    }
}
