use dioxus::prelude::*;
use shared_types::{PlatformMode, SetPlatformModeRequest};
use shared_ui::{use_toast, Badge, BadgeVariant, Button, ButtonVariant, Label, PageHeader, PageTitle, Skeleton, Textarea, ToastOptions};

use crate::session::{use_api, use_role};

/// Platform mode administration: switch mode and set the banner
/// announcement shown to every visitor.
#[component]
pub fn PlatformPage() -> Element {
    let toast = use_toast();
    let role = use_role();
    let can_switch = client::can_set_platform_mode(role);

    let mut announcement = use_signal(String::new);

    let api_for_status = use_api();
    let mut status = use_resource(move || {
        let api = api_for_status.clone();
        async move { api.platform_status().await }
    });

    let api_for_set = use_api();
    let apply = move |mode: PlatformMode| {
        let api = api_for_set.clone();
        let note = announcement().trim().to_string();
        spawn(async move {
            let req = SetPlatformModeRequest {
                mode,
                announcement: if note.is_empty() { None } else { Some(note) },
            };
            match api.set_platform_mode(&req).await {
                Ok(_) => {
                    status.restart();
                    toast.success(
                        format!("Platform set to {}", mode.display_name()),
                        ToastOptions::new(),
                    );
                }
                Err(err) => toast.error(err.friendly_message(), ToastOptions::new()),
            }
        });
    };

    rsx! {
        div { class: "admin-page",
            PageHeader {
                PageTitle { "Platform Mode" }
            }

            match &*status.read() {
                Some(Ok(current)) => rsx! {
                    div { class: "platform-current",
                        span { "Current mode:" }
                        Badge {
                            variant: match current.mode {
                                PlatformMode::Open => BadgeVariant::Success,
                                PlatformMode::ReadOnly => BadgeVariant::Warning,
                                PlatformMode::Maintenance => BadgeVariant::Destructive,
                            },
                            "{current.mode.display_name()}"
                        }
                        if let Some(note) = &current.announcement {
                            p { class: "platform-announcement", "{note}" }
                        }
                    }

                    if can_switch {
                        div { class: "admin-form-field",
                            Label { "Announcement (optional)" }
                            Textarea {
                                placeholder: "Shown to all users while the mode is active",
                                value: announcement(),
                                on_input: move |e: FormEvent| announcement.set(e.value()),
                            }
                        }
                        div { class: "platform-actions",
                            for mode in PlatformMode::ALL {
                                Button {
                                    variant: if current.mode == mode { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                                    disabled: current.mode == mode,
                                    onclick: {
                                        let apply = apply.clone();
                                        move |_| apply(mode)
                                    },
                                    "{mode.display_name()}"
                                }
                            }
                        }
                    } else {
                        p { class: "admin-empty", "Only platform administrators can change the mode." }
                    }
                },
                Some(Err(err)) => rsx! {
                    p { class: "admin-error", "{err.friendly_message()}" }
                },
                None => rsx! { Skeleton { lines: 3 } },
            }
        }
    }
}
