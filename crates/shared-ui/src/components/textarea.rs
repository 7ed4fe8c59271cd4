use dioxus::prelude::*;

#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = 3_i64)] rows: i64,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        textarea {
            class: "textarea",
            rows,
            value,
            placeholder,
            disabled,
            oninput: move |evt| on_input.call(evt),
        }
    }
}
