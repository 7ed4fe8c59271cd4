pub mod chat;
pub mod chat_mobile;
pub mod comments;
pub mod events;
pub mod instagram;
pub mod moderation;
pub mod platform;
pub mod project;
pub mod schools;
pub mod support;

use dioxus::prelude::*;
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::routes::{route_for, Route};
use crate::session::use_role;
use client::{Access, AdminEntry};

/// Admin overview: one action card per entry the viewer may see, in the
/// literal order of the menu registry. Read-only cards are present but
/// inert; denied cards are absent.
#[component]
pub fn AdminDashboardPage() -> Element {
    let role = use_role();
    let entries = client::visible_entries(role);

    rsx! {
        div { class: "admin-dashboard",
            h2 { class: "page-title", "Administration" }
            p { class: "admin-dashboard-subtitle",
                "Signed in as {role.display_name()}"
            }

            div { class: "admin-card-grid",
                for (entry, tier) in entries {
                    if entry.slug != "overview" {
                        ActionCard { entry: *entry, read_only: tier == Access::ReadOnly }
                    }
                }
            }
        }
    }
}

#[component]
fn ActionCard(entry: AdminEntry, read_only: bool) -> Element {
    if read_only {
        // Visible-but-disabled tier: the card renders, clicks go nowhere.
        return rsx! {
            div {
                class: "admin-card-inert",
                aria_disabled: "true",
                onclick: move |evt: MouseEvent| evt.prevent_default(),
                Card {
                    class: "admin-card admin-card-disabled",
                    CardHeader {
                        CardTitle { "{entry.title}" }
                        CardDescription { "{entry.description}" }
                    }
                    CardContent {
                        Badge { variant: BadgeVariant::Secondary, "Read only" }
                    }
                }
            }
        };
    }

    rsx! {
        Link {
            to: route_for(&entry).unwrap_or(Route::AdminDashboard {}),
            class: "admin-card-link",
            Card {
                class: "admin-card",
                CardHeader {
                    CardTitle { "{entry.title}" }
                    CardDescription { "{entry.description}" }
                }
            }
        }
    }
}
