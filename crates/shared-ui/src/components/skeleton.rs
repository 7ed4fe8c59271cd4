use dioxus::prelude::*;

/// Loading placeholder block.
#[component]
pub fn Skeleton(#[props(default = 1_i64)] lines: i64) -> Element {
    rsx! {
        div { class: "skeleton",
            for _ in 0..lines.max(1) {
                div { class: "skeleton-line" }
            }
        }
    }
}
