use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, Checkbox, Label, Skeleton};

use crate::session::use_api;

/// Project page: backend health snapshot plus per-device preferences.
#[component]
pub fn ProjectPage() -> Element {
    let api = use_api();
    let mut quiet = use_signal(|| api.session().quiet_toasts());

    let api_for_status = use_api();
    let status = use_resource(move || {
        let api = api_for_status.clone();
        async move { api.server_status().await }
    });

    let api_for_pref = use_api();
    let mut toggle_quiet = move |checked: bool| {
        quiet.set(checked);
        api_for_pref.session().set_quiet_toasts(checked);
    };

    rsx! {
        div { class: "admin-page",
            Card {
                CardHeader {
                    CardTitle { "Server Status" }
                    CardDescription { "Live snapshot from the platform backend" }
                }
                CardContent {
                    match &*status.read() {
                        Some(Ok(s)) => rsx! {
                            dl { class: "status-list",
                                dt { "Version" }
                                dd { "{s.version}" }
                                dt { "Uptime" }
                                dd { {format_uptime(s.uptime_secs)} }
                                dt { "Active users" }
                                dd { "{s.active_users}" }
                                dt { "Open reports" }
                                dd { "{s.open_reports}" }
                            }
                        },
                        Some(Err(err)) => rsx! {
                            p { class: "admin-error", "{err.friendly_message()}" }
                        },
                        None => rsx! { Skeleton { lines: 4 } },
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "This Device" }
                    CardDescription { "Preferences stored locally, never on the server" }
                }
                CardContent {
                    div { class: "pref-row",
                        Checkbox {
                            id: "quiet_toasts",
                            checked: quiet(),
                            on_change: move |checked| toggle_quiet(checked),
                        }
                        Label { html_for: "quiet_toasts", "Quiet notifications (no chat toasts)" }
                    }
                }
            }
        }
    }
}

fn format_uptime(secs: i64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
