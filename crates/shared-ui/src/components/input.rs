use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] id: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        input {
            class: "input",
            r#type: "{input_type}",
            id: if id.is_empty() { None } else { Some(id.clone()) },
            value,
            placeholder,
            disabled,
            oninput: move |evt| on_input.call(evt),
        }
    }
}
