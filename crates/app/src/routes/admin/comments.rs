use dioxus::prelude::*;
use shared_types::CommentRecord;
use shared_ui::{use_toast, Badge, BadgeVariant, Button, ButtonVariant, PageHeader, PageTitle, Skeleton, ToastOptions};

use crate::session::use_api;

/// Flagged-comment queue: hide or restore individual comments.
#[component]
pub fn CommentsPage() -> Element {
    let toast = use_toast();

    let api_for_list = use_api();
    let mut comments = use_resource(move || {
        let api = api_for_list.clone();
        async move { api.flagged_comments().await }
    });

    let api_for_remove = use_api();
    let remove = move |id: i64| {
        let api = api_for_remove.clone();
        spawn(async move {
            match api.remove_comment(id).await {
                Ok(_) => {
                    comments.restart();
                    toast.success("Comment hidden".to_string(), ToastOptions::new());
                }
                Err(err) => toast.error(err.friendly_message(), ToastOptions::new()),
            }
        });
    };

    let api_for_restore = use_api();
    let restore = move |id: i64| {
        let api = api_for_restore.clone();
        spawn(async move {
            match api.restore_comment(id).await {
                Ok(_) => {
                    comments.restart();
                    toast.success("Comment restored".to_string(), ToastOptions::new());
                }
                Err(err) => toast.error(err.friendly_message(), ToastOptions::new()),
            }
        });
    };

    rsx! {
        div { class: "admin-page",
            PageHeader {
                PageTitle { "Comments" }
            }

            match &*comments.read() {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "admin-empty", "No flagged comments." }
                },
                Some(Ok(list)) => rsx! {
                    table { class: "admin-table",
                        thead {
                            tr {
                                th { "Author" }
                                th { "Comment" }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            for comment in list.clone() {
                                CommentModRow {
                                    comment: comment.clone(),
                                    on_remove: {
                                        let remove = remove.clone();
                                        move |id| remove(id)
                                    },
                                    on_restore: {
                                        let restore = restore.clone();
                                        move |id| restore(id)
                                    },
                                }
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    p { class: "admin-error", "{err.friendly_message()}" }
                },
                None => rsx! { Skeleton { lines: 5 } },
            }
        }
    }
}

#[component]
fn CommentModRow(
    comment: CommentRecord,
    on_remove: EventHandler<i64>,
    on_restore: EventHandler<i64>,
) -> Element {
    let id = comment.id;
    rsx! {
        tr {
            td { "{comment.author}" }
            td { class: "admin-table-body-cell", "{comment.body}" }
            td {
                if comment.removed {
                    Badge { variant: BadgeVariant::Destructive, "Hidden" }
                } else {
                    Badge { variant: BadgeVariant::Secondary, "Visible" }
                }
            }
            td {
                if comment.removed {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_restore.call(id),
                        "Restore"
                    }
                } else {
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| on_remove.call(id),
                        "Hide"
                    }
                }
            }
        }
    }
}
