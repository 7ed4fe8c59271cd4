use dioxus::prelude::*;
use shared_types::{SupportTicket, UpdateTicketRequest};
use shared_ui::{use_toast, Badge, BadgeVariant, Button, ButtonVariant, PageHeader, PageTitle, Skeleton, ToastOptions};

use crate::session::{use_access, use_api};
use client::{Access, AdminAction};

/// Support ticket queue. Campus and cross moderators reach this page
/// read-only: the list renders, every status control is inert.
#[component]
pub fn SupportPage() -> Element {
    let toast = use_toast();
    let tier = use_access(AdminAction::ModerateSupportTickets);
    let writable = tier == Access::Granted;

    let api_for_list = use_api();
    let mut tickets = use_resource(move || {
        let api = api_for_list.clone();
        async move { api.support_tickets().await }
    });

    let api_for_update = use_api();
    let set_status = move |id: i64, status: &'static str| {
        let api = api_for_update.clone();
        spawn(async move {
            let req = UpdateTicketRequest {
                status: status.to_string(),
            };
            match api.update_ticket(id, &req).await {
                Ok(_) => {
                    tickets.restart();
                    toast.success("Ticket updated".to_string(), ToastOptions::new());
                }
                Err(err) => toast.error(err.friendly_message(), ToastOptions::new()),
            }
        });
    };

    rsx! {
        div { class: "admin-page",
            PageHeader {
                PageTitle { "Support Tickets" }
                if !writable {
                    Badge { variant: BadgeVariant::Secondary, "Read only" }
                }
            }

            match &*tickets.read() {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "admin-empty", "No open tickets." }
                },
                Some(Ok(list)) => rsx! {
                    table { class: "admin-table",
                        thead {
                            tr {
                                th { "Subject" }
                                th { "From" }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            for ticket in list.clone() {
                                TicketRow {
                                    ticket: ticket.clone(),
                                    writable,
                                    on_status: {
                                        let set_status = set_status.clone();
                                        move |(id, status)| set_status(id, status)
                                    },
                                }
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    p { class: "admin-error", "{err.friendly_message()}" }
                },
                None => rsx! { Skeleton { lines: 4 } },
            }
        }
    }
}

#[component]
fn TicketRow(
    ticket: SupportTicket,
    writable: bool,
    on_status: EventHandler<(i64, &'static str)>,
) -> Element {
    let id = ticket.id;
    let badge = match ticket.status.as_str() {
        "closed" => BadgeVariant::Secondary,
        "in_progress" => BadgeVariant::Warning,
        _ => BadgeVariant::Primary,
    };

    rsx! {
        tr {
            td { class: "admin-table-body-cell",
                span { class: "ticket-subject", "{ticket.subject}" }
                p { class: "ticket-body", "{ticket.body}" }
            }
            td { "{ticket.author}" }
            td {
                Badge { variant: badge, "{ticket.status}" }
            }
            td {
                if ticket.status != "closed" {
                    // Inert for read-only viewers, not hidden.
                    Button {
                        variant: ButtonVariant::Secondary,
                        disabled: !writable,
                        onclick: move |_| {
                            if writable {
                                on_status.call((id, "closed"));
                            }
                        },
                        "Close"
                    }
                }
            }
        }
    }
}
