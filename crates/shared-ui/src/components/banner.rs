use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerTone {
    #[default]
    Info,
    Success,
    Error,
}

impl BannerTone {
    fn class(self) -> &'static str {
        match self {
            BannerTone::Info => "banner banner-info",
            BannerTone::Success => "banner banner-success",
            BannerTone::Error => "banner banner-error",
        }
    }
}

/// Inline message strip for scoped failures and announcements. A failed
/// button click renders one of these next to the control — the rest of the
/// page stays interactive.
#[component]
pub fn Banner(#[props(default)] tone: BannerTone, children: Element) -> Element {
    rsx! {
        div { class: tone.class(), role: "status", {children} }
    }
}
