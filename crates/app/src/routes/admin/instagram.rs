use dioxus::prelude::*;
use shared_types::{AppError, LinkInstagramRequest};
use shared_ui::{use_toast, Badge, BadgeVariant, Button, ButtonVariant, Input, Label, PageActions, PageHeader, PageTitle, Skeleton, ToastOptions};
use std::collections::HashMap;
use validator::Validate;

use crate::session::use_api;

/// Linked Instagram accounts used for cross-posting announcements.
#[component]
pub fn InstagramPage() -> Element {
    let toast = use_toast();

    let mut show_form = use_signal(|| false);
    let mut form_handle = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let api_for_list = use_api();
    let mut accounts = use_resource(move || {
        let api = api_for_list.clone();
        async move { api.instagram_accounts().await }
    });

    let api_for_link = use_api();
    let handle_link = move |evt: FormEvent| {
        let api = api_for_link.clone();
        async move {
            evt.prevent_default();
            field_errors.set(HashMap::new());

            let req = LinkInstagramRequest {
                handle: form_handle().trim_start_matches('@').to_string(),
                school_id: None,
            };
            if let Err(errs) = req.validate() {
                field_errors.set(AppError::from(errs).field_errors);
                return;
            }

            match api.link_instagram(&req).await {
                Ok(account) => {
                    accounts.restart();
                    show_form.set(false);
                    form_handle.set(String::new());
                    toast.success(format!("@{} linked", account.handle), ToastOptions::new());
                }
                Err(err) => toast.error(err.friendly_message(), ToastOptions::new()),
            }
        }
    };

    let api_for_unlink = use_api();
    let unlink = move |id: i64| {
        let api = api_for_unlink.clone();
        spawn(async move {
            match api.unlink_instagram(id).await {
                Ok(()) => {
                    accounts.restart();
                    toast.success("Account unlinked".to_string(), ToastOptions::new());
                }
                Err(err) => toast.error(err.friendly_message(), ToastOptions::new()),
            }
        });
    };

    rsx! {
        div { class: "admin-page",
            PageHeader {
                PageTitle { "Instagram" }
                PageActions {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| show_form.set(!show_form()),
                        if show_form() { "Cancel" } else { "Link Account" }
                    }
                }
            }

            if show_form() {
                form { class: "admin-form", onsubmit: handle_link,
                    div { class: "admin-form-field",
                        Label { html_for: "ig_handle", "Handle" }
                        Input {
                            id: "ig_handle",
                            placeholder: "@campus.announcements",
                            value: form_handle(),
                            on_input: move |e: FormEvent| form_handle.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("handle") {
                            div { class: "admin-field-error", "{err}" }
                        }
                    }
                    Button { variant: ButtonVariant::Primary, button_type: "submit".to_string(), "Link" }
                }
            }

            match &*accounts.read() {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "admin-empty", "No linked accounts." }
                },
                Some(Ok(list)) => rsx! {
                    table { class: "admin-table",
                        thead {
                            tr {
                                th { "Handle" }
                                th { "Linked" }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            for account in list.clone() {
                                tr { key: "{account.id}",
                                    td { "@{account.handle}" }
                                    td { {account.linked_at.format("%Y-%m-%d").to_string()} }
                                    td {
                                        if account.active {
                                            Badge { variant: BadgeVariant::Success, "Active" }
                                        } else {
                                            Badge { variant: BadgeVariant::Secondary, "Inactive" }
                                        }
                                    }
                                    td {
                                        Button {
                                            variant: ButtonVariant::Destructive,
                                            onclick: {
                                                let unlink = unlink.clone();
                                                let id = account.id;
                                                move |_| unlink(id)
                                            },
                                            "Unlink"
                                        }
                                    }
                                }
                            }
                        }
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
