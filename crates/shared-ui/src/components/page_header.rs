use dioxus::prelude::*;

#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        div { class: "page-header", {children} }
    }
}

#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "page-title", {children} }
    }
}

#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "page-actions", {children} }
    }
}
