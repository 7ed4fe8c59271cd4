use dioxus::prelude::*;
use shared_types::{AppError, CreateSchoolRequest};
use shared_ui::{use_toast, Button, ButtonVariant, Input, Label, PageActions, PageHeader, PageTitle, Skeleton, ToastOptions};
use std::collections::HashMap;
use validator::Validate;

use crate::session::{use_access, use_api};
use client::{Access, AdminAction};

/// Member schools. Campus admins see the list read-only; creating and
/// deleting requires full access per the capability table.
#[component]
pub fn SchoolsPage() -> Element {
    let toast = use_toast();
    let tier = use_access(AdminAction::ManageSchools);
    let writable = tier == Access::Granted;

    let mut show_form = use_signal(|| false);
    let mut form_name = use_signal(String::new);
    let mut form_domain = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let api_for_list = use_api();
    let mut schools = use_resource(move || {
        let api = api_for_list.clone();
        async move { api.schools().await }
    });

    let api_for_create = use_api();
    let handle_create = move |evt: FormEvent| {
        let api = api_for_create.clone();
        async move {
            evt.prevent_default();
            field_errors.set(HashMap::new());

            let req = CreateSchoolRequest {
                name: form_name(),
                email_domain: form_domain(),
            };
            if let Err(errs) = req.validate() {
                field_errors.set(AppError::from(errs).field_errors);
                return;
            }

            match api.create_school(&req).await {
                Ok(school) => {
                    schools.restart();
                    show_form.set(false);
                    form_name.set(String::new());
                    form_domain.set(String::new());
                    toast.success(format!("{} added", school.name), ToastOptions::new());
                }
                Err(err) => toast.error(err.friendly_message(), ToastOptions::new()),
            }
        }
    };

    let api_for_delete = use_api();
    let delete = move |id: i64| {
        let api = api_for_delete.clone();
        spawn(async move {
            match api.delete_school(id).await {
                Ok(()) => {
                    schools.restart();
                    toast.success("School removed".to_string(), ToastOptions::new());
                }
                Err(err) => toast.error(err.friendly_message(), ToastOptions::new()),
            }
        });
    };

    rsx! {
        div { class: "admin-page",
            PageHeader {
                PageTitle { "Schools" }
                PageActions {
                    if writable {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| show_form.set(!show_form()),
                            if show_form() { "Cancel" } else { "Add School" }
                        }
                    }
                }
            }

            if show_form() && writable {
                form { class: "admin-form", onsubmit: handle_create,
                    div { class: "admin-form-field",
                        Label { html_for: "school_name", "Name" }
                        Input {
                            id: "school_name",
                            placeholder: "Northfield College",
                            value: form_name(),
                            on_input: move |e: FormEvent| form_name.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("name") {
                            div { class: "admin-field-error", "{err}" }
                        }
                    }
                    div { class: "admin-form-field",
                        Label { html_for: "school_domain", "Email domain" }
                        Input {
                            id: "school_domain",
                            placeholder: "northfield.edu",
                            value: form_domain(),
                            on_input: move |e: FormEvent| form_domain.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("email_domain") {
                            div { class: "admin-field-error", "{err}" }
                        }
                    }
                    Button { variant: ButtonVariant::Primary, button_type: "submit".to_string(), "Create" }
                }
            }

            match &*schools.read() {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "admin-empty", "No schools yet." }
                },
                Some(Ok(list)) => rsx! {
                    table { class: "admin-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Domain" }
                                th { "Members" }
                                th { "" }
                            }
                        }
                        tbody {
                            for school in list.clone() {
                                tr { key: "{school.id}",
                                    td { "{school.name}" }
                                    td { "{school.email_domain}" }
                                    td { "{school.member_count}" }
                                    td {
                                        if writable {
                                            Button {
                                                variant: ButtonVariant::Destructive,
                                                onclick: {
                                                    let delete = delete.clone();
                                                    let id = school.id;
                                                    move |_| delete(id)
                                                },
                                                "Remove"
                                            }
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
                None => rsx! { Skeleton { lines: 4 } },
            }
        }
    }
}
