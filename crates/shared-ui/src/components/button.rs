use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button button-primary",
            ButtonVariant::Secondary => "button button-secondary",
            ButtonVariant::Destructive => "button button-destructive",
            ButtonVariant::Ghost => "button button-ghost",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = false)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    #[props(default = "button".to_string())] button_type: String,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "{button_type}",
            class: variant.class(),
            disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
