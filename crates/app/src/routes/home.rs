use dioxus::prelude::*;
use shared_types::{Post, School};
use shared_ui::{Badge, BadgeVariant, Banner, BannerTone, Button, ButtonVariant, Navbar, Skeleton};

use crate::routes::Route;
use crate::session::{use_api, use_role, use_session};

/// Public landing page: school picker and recent posts.
///
/// The selected school filter is an advisory durable preference — it
/// survives reloads but the page works fine when it is cleared.
#[component]
pub fn HomePage() -> Element {
    let state = use_session();
    let api = use_api();
    let role = use_role();

    let mut school_filter = use_signal(|| api.session().school_filter());
    let my_posts = use_hook(|| api.session().my_posts());

    let api_for_schools = use_api();
    let schools = use_resource(move || {
        let api = api_for_schools.clone();
        async move { api.schools().await }
    });

    let api_for_posts = use_api();
    let posts = use_resource(move || {
        let api = api_for_posts.clone();
        let school = school_filter();
        async move { api.recent_posts(school).await }
    });

    let api_for_filter = use_api();
    let select_school = move |school: Option<i64>| {
        let mut filter = school_filter;
        filter.set(school);
        api_for_filter.session().set_school_filter(school);
    };

    rsx! {
        div { class: "home-page",
            Navbar {
                span { class: "navbar-brand", "ForumKit" }
                div { class: "navbar-spacer" }
                if state.is_logged_in() {
                    Badge { variant: BadgeVariant::Secondary, "{role.display_name()}" }
                    // More than the universal overview entry means the
                    // viewer has an actual admin surface.
                    if client::visible_entries(role).len() > 1 {
                        Link { to: Route::AdminDashboard {}, class: "navbar-link", "Admin" }
                    }
                } else {
                    Link { to: Route::AuthPage { redirect: None }, class: "navbar-link", "Sign In" }
                }
            }

            div { class: "home-content",
                section { class: "home-schools",
                    h2 { "Campuses" }
                    match &*schools.read() {
                        Some(Ok(list)) => rsx! {
                            div { class: "school-chips",
                                Button {
                                    variant: if school_filter().is_none() { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                                    onclick: {
                                        let select_school = select_school.clone();
                                        move |_| select_school(None)
                                    },
                                    "All"
                                }
                                for school in list.clone() {
                                    SchoolChip {
                                        school: school.clone(),
                                        selected: school_filter() == Some(school.id),
                                        on_select: {
                                            let select_school = select_school.clone();
                                            move |id| select_school(Some(id))
                                        },
                                    }
                                }
                            }
                        },
                        Some(Err(_)) => rsx! {
                            // Defensive default: an empty chip row, not a crash.
                            div { class: "school-chips" }
                        },
                        None => rsx! { Skeleton { lines: 1 } },
                    }
                }

                section { class: "home-posts",
                    h2 { "Recent Posts" }
                    match &*posts.read() {
                        Some(Ok(list)) if list.is_empty() => rsx! {
                            p { class: "home-empty", "Nothing here yet." }
                        },
                        Some(Ok(list)) => rsx! {
                            ul { class: "post-list",
                                for post in list.clone() {
                                    PostRow { post: post.clone(), mine: my_posts.contains(&post.id) }
                                }
                            }
                        },
                        Some(Err(err)) => {
                            let status = err.page_status();
                            rsx! {
                                Banner { tone: BannerTone::Error,
                                    "{err.friendly_message()} "
                                    Link { to: Route::ErrorPage { status }, "Details" }
                                }
                            }
                        }
                        None => rsx! { Skeleton { lines: 4 } },
                    }
                }
            }
        }
    }
}

#[component]
fn SchoolChip(school: School, selected: bool, on_select: EventHandler<i64>) -> Element {
    let id = school.id;
    rsx! {
        Button {
            variant: if selected { ButtonVariant::Primary } else { ButtonVariant::Secondary },
            onclick: move |_| on_select.call(id),
            "{school.name}"
        }
    }
}

#[component]
fn PostRow(post: Post, mine: bool) -> Element {
    rsx! {
        li { class: "post-row",
            Link { to: Route::PostDetail { id: post.id },
                span { class: "post-row-title", "{post.title}" }
            }
            span { class: "post-row-meta",
                "{post.author} · {post.comment_count} comments"
            }
            if mine {
                Badge { variant: BadgeVariant::Primary, "Yours" }
            }
        }
    }
}
