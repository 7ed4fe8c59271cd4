use dioxus::prelude::*;

#[component]
pub fn Checkbox(
    #[props(default = false)] checked: bool,
    #[props(default)] on_change: EventHandler<bool>,
    #[props(default)] id: String,
) -> Element {
    rsx! {
        input {
            class: "checkbox",
            r#type: "checkbox",
            id: if id.is_empty() { None } else { Some(id.clone()) },
            checked,
            onchange: move |evt: FormEvent| on_change.call(evt.checked()),
        }
    }
}
