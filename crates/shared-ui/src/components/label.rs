use dioxus::prelude::*;

#[component]
pub fn Label(#[props(default)] html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "label",
            r#for: if html_for.is_empty() { None } else { Some(html_for.clone()) },
            {children}
        }
    }
}
