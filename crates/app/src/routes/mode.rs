use dioxus::prelude::*;
use shared_types::{PlatformMode, SetPlatformModeRequest};
use shared_ui::{use_toast, Badge, BadgeVariant, Banner, BannerTone, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Skeleton, ToastOptions};

use crate::session::{use_api, use_role};

/// Platform mode page.
///
/// Everyone can see the current mode; switching it is limited to the three
/// admin tiers in the capability table.
#[component]
pub fn ModePage() -> Element {
    let role = use_role();
    let can_switch = client::can_set_platform_mode(role);
    let toast = use_toast();

    let api_for_status = use_api();
    let mut status = use_resource(move || {
        let api = api_for_status.clone();
        async move { api.platform_status().await }
    });

    let api_for_switch = use_api();
    let switch_mode = move |mode: PlatformMode| {
        let api = api_for_switch.clone();
        spawn(async move {
            let req = SetPlatformModeRequest {
                mode,
                announcement: None,
            };
            match api.set_platform_mode(&req).await {
                Ok(_) => {
                    status.restart();
                    toast.success(
                        format!("Platform is now {}", mode.display_name()),
                        ToastOptions::new(),
                    );
                }
                Err(err) => {
                    toast.error(err.friendly_message(), ToastOptions::new());
                }
            }
        });
    };

    rsx! {
        div { class: "mode-page",
            Card {
                CardHeader {
                    CardTitle { "Platform Mode" }
                    CardDescription { "How the whole forum behaves right now" }
                }
                CardContent {
                    match &*status.read() {
                        Some(Ok(current)) => rsx! {
                            div { class: "mode-current",
                                Badge {
                                    variant: match current.mode {
                                        PlatformMode::Open => BadgeVariant::Success,
                                        PlatformMode::ReadOnly => BadgeVariant::Warning,
                                        PlatformMode::Maintenance => BadgeVariant::Destructive,
                                    },
                                    "{current.mode.display_name()}"
                                }
                                if let Some(note) = &current.announcement {
                                    p { class: "mode-announcement", "{note}" }
                                }
                            }
                            if can_switch {
                                div { class: "mode-actions",
                                    for mode in PlatformMode::ALL {
                                        Button {
                                            variant: if current.mode == mode { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                                            disabled: current.mode == mode,
                                            onclick: {
                                                let switch_mode = switch_mode.clone();
                                                move |_| switch_mode(mode)
                                            },
                                            "{mode.display_name()}"
                                        }
                                    }
                                }
                            } else {
                                p { class: "mode-note", "Only platform administrators can change the mode." }
                            }
                        },
                        Some(Err(err)) => rsx! {
                            Banner { tone: BannerTone::Error, "{err.friendly_message()}" }
                        },
                        None => rsx! { Skeleton { lines: 2 } },
                    }
                }
            }
        }
    }
}
