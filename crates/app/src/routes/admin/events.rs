use dioxus::prelude::*;
use shared_types::{AppError, CreateEventRequest};
use shared_ui::{use_toast, Button, ButtonVariant, Input, Label, PageActions, PageHeader, PageTitle, Skeleton, Textarea, ToastOptions};
use std::collections::HashMap;
use validator::Validate;

use crate::session::use_api;

/// Campus event calendar management.
#[component]
pub fn EventsPage() -> Element {
    let toast = use_toast();

    let mut show_form = use_signal(|| false);
    let mut form_title = use_signal(String::new);
    let mut form_description = use_signal(String::new);
    let mut form_location = use_signal(String::new);
    let mut form_starts_at = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let api_for_list = use_api();
    let mut events = use_resource(move || {
        let api = api_for_list.clone();
        async move { api.events().await }
    });

    let api_for_create = use_api();
    let handle_create = move |evt: FormEvent| {
        let api = api_for_create.clone();
        async move {
            evt.prevent_default();
            field_errors.set(HashMap::new());

            let Ok(starts_at) = form_starts_at().parse::<chrono::DateTime<chrono::Utc>>() else {
                field_errors.set(HashMap::from([(
                    "starts_at".to_string(),
                    "Use an RFC 3339 timestamp, e.g. 2026-09-01T18:00:00Z".to_string(),
                )]));
                return;
            };

            let req = CreateEventRequest {
                title: form_title(),
                description: form_description(),
                location: form_location(),
                starts_at,
                ends_at: None,
                school_id: None,
            };
            if let Err(errs) = req.validate() {
                field_errors.set(AppError::from(errs).field_errors);
                return;
            }

            match api.create_event(&req).await {
                Ok(event) => {
                    events.restart();
                    show_form.set(false);
                    form_title.set(String::new());
                    form_description.set(String::new());
                    form_location.set(String::new());
                    form_starts_at.set(String::new());
                    toast.success(format!("{} scheduled", event.title), ToastOptions::new());
                }
                Err(err) => toast.error(err.friendly_message(), ToastOptions::new()),
            }
        }
    };

    let api_for_delete = use_api();
    let delete = move |id: i64| {
        let api = api_for_delete.clone();
        spawn(async move {
            match api.delete_event(id).await {
                Ok(()) => {
                    events.restart();
                    toast.success("Event removed".to_string(), ToastOptions::new());
                }
                Err(err) => toast.error(err.friendly_message(), ToastOptions::new()),
            }
        });
    };

    rsx! {
        div { class: "admin-page",
            PageHeader {
                PageTitle { "Events" }
                PageActions {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| show_form.set(!show_form()),
                        if show_form() { "Cancel" } else { "New Event" }
                    }
                }
            }

            if show_form() {
                form { class: "admin-form", onsubmit: handle_create,
                    div { class: "admin-form-field",
                        Label { html_for: "event_title", "Title" }
                        Input {
                            id: "event_title",
                            value: form_title(),
                            on_input: move |e: FormEvent| form_title.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("title") {
                            div { class: "admin-field-error", "{err}" }
                        }
                    }
                    div { class: "admin-form-field",
                        Label { html_for: "event_when", "Starts at" }
                        Input {
                            id: "event_when",
                            placeholder: "2026-09-01T18:00:00Z",
                            value: form_starts_at(),
                            on_input: move |e: FormEvent| form_starts_at.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("starts_at") {
                            div { class: "admin-field-error", "{err}" }
                        }
                    }
                    div { class: "admin-form-field",
                        Label { html_for: "event_location", "Location" }
                        Input {
                            id: "event_location",
                            value: form_location(),
                            on_input: move |e: FormEvent| form_location.set(e.value()),
                        }
                    }
                    div { class: "admin-form-field",
                        Label { html_for: "event_description", "Description" }
                        Textarea {
                            value: form_description(),
                            on_input: move |e: FormEvent| form_description.set(e.value()),
                        }
                    }
                    Button { variant: ButtonVariant::Primary, button_type: "submit".to_string(), "Create" }
                }
            }

            match &*events.read() {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "admin-empty", "No events scheduled." }
                },
                Some(Ok(list)) => rsx! {
                    table { class: "admin-table",
                        thead {
                            tr {
                                th { "Title" }
                                th { "When" }
                                th { "Where" }
                                th { "" }
                            }
                        }
                        tbody {
                            for event in list.clone() {
                                tr { key: "{event.id}",
                                    td { "{event.title}" }
                                    td { {event.starts_at.format("%Y-%m-%d %H:%M").to_string()} }
                                    td { "{event.location}" }
                                    td {
                                        Button {
                                            variant: ButtonVariant::Destructive,
                                            onclick: {
                                                let delete = delete.clone();
                                                let id = event.id;
                                                move |_| delete(id)
                                            },
                                            "Remove"
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
