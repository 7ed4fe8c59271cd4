use dioxus::prelude::*;
use shared_types::ReportRecord;
use shared_ui::{use_toast, Badge, BadgeVariant, Button, ButtonVariant, PageHeader, PageTitle, Skeleton, ToastOptions};

use crate::session::use_api;

/// Moderation queue: user-filed reports, oldest first as the API returns
/// them. Resolving a report is scoped — a failure toasts and leaves the
/// rest of the queue interactive.
#[component]
pub fn ModerationPage() -> Element {
    let toast = use_toast();
    let mut show_resolved = use_signal(|| false);

    let api_for_list = use_api();
    let mut reports = use_resource(move || {
        let api = api_for_list.clone();
        async move { api.reports().await }
    });

    let api_for_resolve = use_api();
    let resolve = move |id: i64| {
        let api = api_for_resolve.clone();
        spawn(async move {
            match api.resolve_report(id).await {
                Ok(_) => {
                    reports.restart();
                    toast.success("Report resolved".to_string(), ToastOptions::new());
                }
                Err(err) => {
                    toast.error(err.friendly_message(), ToastOptions::new());
                }
            }
        });
    };

    rsx! {
        div { class: "admin-page",
            PageHeader {
                PageTitle { "Moderation" }
            }

            div { class: "admin-filter-row",
                Button {
                    variant: if show_resolved() { ButtonVariant::Secondary } else { ButtonVariant::Primary },
                    onclick: move |_| show_resolved.set(false),
                    "Open"
                }
                Button {
                    variant: if show_resolved() { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                    onclick: move |_| show_resolved.set(true),
                    "All"
                }
            }

            match &*reports.read() {
                Some(Ok(list)) => {
                    let visible: Vec<ReportRecord> = list
                        .iter()
                        .filter(|r| show_resolved() || !r.resolved)
                        .cloned()
                        .collect();
                    if visible.is_empty() {
                        rsx! { p { class: "admin-empty", "No reports to review." } }
                    } else {
                        rsx! {
                            table { class: "admin-table",
                                thead {
                                    tr {
                                        th { "Target" }
                                        th { "Reason" }
                                        th { "Reporter" }
                                        th { "Status" }
                                        th { "" }
                                    }
                                }
                                tbody {
                                    for report in visible {
                                        ReportRow {
                                            report: report.clone(),
                                            on_resolve: {
                                                let resolve = resolve.clone();
                                                move |id| resolve(id)
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Some(Err(err)) => rsx! {
                    p { class: "admin-error", "{err.friendly_message()}" }
                },
                None => rsx! { Skeleton { lines: 5 } },
            }
        }
    }
}

#[component]
fn ReportRow(report: ReportRecord, on_resolve: EventHandler<i64>) -> Element {
    let id = report.id;
    rsx! {
        tr {
            td { "{report.target_kind} #{report.target_id}" }
            td { "{report.reason}" }
            td { "{report.reporter}" }
            td {
                if report.resolved {
                    Badge { variant: BadgeVariant::Success, "Resolved" }
                } else {
                    Badge { variant: BadgeVariant::Warning, "Open" }
                }
            }
            td {
                if !report.resolved {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_resolve.call(id),
                        "Resolve"
                    }
                }
            }
        }
    }
}
