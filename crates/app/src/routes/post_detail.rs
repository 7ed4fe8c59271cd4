use dioxus::prelude::*;
use shared_types::CommentRecord;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, Skeleton};

use crate::routes::Route;
use crate::session::use_api;

/// Single post with its comments.
///
/// A failed page load is unrecoverable here, so it hands off to the
/// status-keyed error view; the comment list failing alone degrades to an
/// empty list instead.
#[component]
pub fn PostDetailPage(id: i64) -> Element {
    let api_for_post = use_api();
    let post = use_resource(move || {
        let api = api_for_post.clone();
        async move { api.post_detail(id).await }
    });

    let api_for_comments = use_api();
    let comments = use_resource(move || {
        let api = api_for_comments.clone();
        async move {
            // Unexpected shapes and scoped failures coalesce to "no comments".
            api.post_comments(id).await.unwrap_or_default()
        }
    });

    match &*post.read() {
        Some(Ok(post)) => {
            let posted = post.created_at.format("%Y-%m-%d %H:%M");
            rsx! {
                div { class: "post-page",
                    Card {
                        CardHeader {
                            CardTitle { "{post.title}" }
                            p { class: "post-meta", "{post.author} · {posted}" }
                        }
                        CardContent {
                            p { class: "post-body", "{post.body}" }
                        }
                    }

                    section { class: "post-comments",
                        h3 { "Comments" }
                        match &*comments.read() {
                            Some(list) if list.is_empty() => rsx! {
                                p { class: "post-comments-empty", "No comments yet." }
                            },
                            Some(list) => rsx! {
                                ul { class: "comment-list",
                                    for comment in list.clone() {
                                        CommentRow { comment: comment.clone() }
                                    }
                                }
                            },
                            None => rsx! { Skeleton { lines: 3 } },
                        }
                    }

                    Link { to: Route::Home {}, class: "post-back", "Back to the forum" }
                }
            }
        }
        Some(Err(err)) => {
            let status = err.page_status();
            navigator().push(Route::ErrorPage { status });
            rsx! {
                div { class: "post-page", p { "Something went wrong..." } }
            }
        }
        None => rsx! {
            div { class: "post-page", Skeleton { lines: 6 } }
        },
    }
}

#[component]
fn CommentRow(comment: CommentRecord) -> Element {
    rsx! {
        li { class: "comment-row",
            if comment.removed {
                p { class: "comment-removed", "This comment was removed by a moderator." }
            } else {
                p { class: "comment-body", "{comment.body}" }
                span { class: "comment-meta", "{comment.author}" }
            }
        }
    }
}
