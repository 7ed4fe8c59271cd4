pub mod admin;
pub mod auth;
pub mod error_page;
pub mod home;
pub mod mode;
pub mod not_found;
pub mod post_detail;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdCalendar, LdCamera, LdFlag, LdGlobe, LdLayoutDashboard, LdLifeBuoy,
    LdMessageSquare, LdMessagesSquare, LdSchool,
};
use dioxus_free_icons::Icon;
use shared_ui::{Badge, BadgeVariant, Button, ButtonVariant};

use crate::chat_listener::ChatListener;
use crate::session::{use_api, use_role, use_session};
use client::{Access, AdminEntry, MenuIcon};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/auth?:redirect")]
    AuthPage { redirect: Option<String> },
    #[route("/mode")]
    ModePage {},
    #[route("/posts/:id")]
    PostDetail { id: i64 },
    #[route("/error/:status")]
    ErrorPage { status: u16 },
    #[layout(AdminLayout)]
    #[route("/admin")]
    AdminDashboard {},
    #[route("/admin/moderation")]
    AdminModeration {},
    #[route("/admin/comments")]
    AdminComments {},
    #[route("/admin/chat")]
    AdminChat {},
    #[route("/admin/schools")]
    AdminSchools {},
    #[route("/admin/events")]
    AdminEvents {},
    #[route("/admin/instagram")]
    AdminInstagram {},
    #[route("/admin/support")]
    AdminSupport {},
    #[route("/admin/platform")]
    AdminPlatform {},
    #[route("/admin/project")]
    AdminProject {},
    #[end_layout]
    #[route("/m/admin/chat")]
    AdminChatMobile {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Map an admin menu entry back to its route value.
pub(crate) fn route_for(entry: &AdminEntry) -> Option<Route> {
    match entry.slug {
        "overview" => Some(Route::AdminDashboard {}),
        "moderation" => Some(Route::AdminModeration {}),
        "comments" => Some(Route::AdminComments {}),
        "chat" => Some(Route::AdminChat {}),
        "schools" => Some(Route::AdminSchools {}),
        "events" => Some(Route::AdminEvents {}),
        "instagram" => Some(Route::AdminInstagram {}),
        "support" => Some(Route::AdminSupport {}),
        "platform" => Some(Route::AdminPlatform {}),
        "project" => Some(Route::AdminProject {}),
        _ => None,
    }
}

fn entry_icon(icon: MenuIcon) -> Element {
    match icon {
        MenuIcon::LayoutDashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 } },
        MenuIcon::Flag => rsx! { Icon::<LdFlag> { icon: LdFlag, width: 16, height: 16 } },
        MenuIcon::MessageSquare => rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 16, height: 16 } },
        MenuIcon::MessagesSquare => rsx! { Icon::<LdMessagesSquare> { icon: LdMessagesSquare, width: 16, height: 16 } },
        MenuIcon::School => rsx! { Icon::<LdSchool> { icon: LdSchool, width: 16, height: 16 } },
        MenuIcon::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 16, height: 16 } },
        MenuIcon::Camera => rsx! { Icon::<LdCamera> { icon: LdCamera, width: 16, height: 16 } },
        MenuIcon::LifeBuoy => rsx! { Icon::<LdLifeBuoy> { icon: LdLifeBuoy, width: 16, height: 16 } },
        MenuIcon::Globe => rsx! { Icon::<LdGlobe> { icon: LdGlobe, width: 16, height: 16 } },
        MenuIcon::Activity => rsx! { Icon::<LdActivity> { icon: LdActivity, width: 16, height: 16 } },
    }
}

/// Admin shell: auth guard, role-gated navigation, realtime listener.
///
/// Read-only entries render disabled with a non-navigating handler rather
/// than disappearing; denied entries are absent entirely.
#[component]
fn AdminLayout() -> Element {
    let mut state = use_session();
    let api = use_api();
    let role = use_role();
    let route: Route = use_route();

    if !state.is_logged_in() {
        // Tokens restored from the vault but the identity fetch is still in
        // flight: wait rather than bouncing the viewer to the login page.
        if api.session().is_logged_in() {
            return rsx! {
                div { class: "admin-guard", p { "Loading..." } }
            };
        }
        navigator().push(Route::AuthPage {
            redirect: Some(route.to_string()),
        });
        return rsx! {
            div { class: "admin-guard", p { "Redirecting to sign in..." } }
        };
    }

    let current_path = route.to_string();
    let entries = client::visible_entries(role);
    let api_for_logout = api.clone();

    rsx! {
        div { class: "admin-shell",
            ChatListener {}
            nav { class: "admin-nav",
                div { class: "admin-brand", "ForumKit Admin" }

                for (entry, tier) in entries {
                    if tier == Access::Granted {
                        Link {
                            to: route_for(entry).unwrap_or(Route::AdminDashboard {}),
                            class: if current_path == entry.route { "admin-nav-link admin-nav-link-active" } else { "admin-nav-link" },
                            {entry_icon(entry.icon)}
                            span { "{entry.title}" }
                        }
                    } else {
                        span {
                            class: "admin-nav-link admin-nav-link-disabled",
                            aria_disabled: "true",
                            title: "Read-only access",
                            onclick: move |evt: MouseEvent| evt.prevent_default(),
                            {entry_icon(entry.icon)}
                            span { "{entry.title}" }
                        }
                    }
                }

                div { class: "admin-nav-spacer" }

                Badge { variant: BadgeVariant::Secondary, "{role.display_name()}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        let api = api_for_logout.clone();
                        spawn(async move {
                            api.logout().await;
                        });
                        state.clear();
                        navigator().push(Route::AuthPage { redirect: None });
                    },
                    "Sign Out"
                }
            }

            main { class: "admin-content",
                Outlet::<Route> {}
            }
        }
    }
}

// Route components

#[component]
fn Home() -> Element {
    home::HomePage()
}

#[component]
fn AuthPage(redirect: Option<String>) -> Element {
    rsx! { auth::AuthPage { redirect } }
}

#[component]
fn ModePage() -> Element {
    mode::ModePage()
}

#[component]
fn PostDetail(id: i64) -> Element {
    rsx! { post_detail::PostDetailPage { id } }
}

#[component]
fn ErrorPage(status: u16) -> Element {
    rsx! { error_page::ErrorView { status } }
}

#[component]
fn AdminDashboard() -> Element {
    admin::AdminDashboardPage()
}

#[component]
fn AdminModeration() -> Element {
    admin::moderation::ModerationPage()
}

#[component]
fn AdminComments() -> Element {
    admin::comments::CommentsPage()
}

#[component]
fn AdminChat() -> Element {
    admin::chat::ChatPage()
}

#[component]
fn AdminSchools() -> Element {
    admin::schools::SchoolsPage()
}

#[component]
fn AdminEvents() -> Element {
    admin::events::EventsPage()
}

#[component]
fn AdminInstagram() -> Element {
    admin::instagram::InstagramPage()
}

#[component]
fn AdminSupport() -> Element {
    admin::support::SupportPage()
}

#[component]
fn AdminPlatform() -> Element {
    admin::platform::PlatformPage()
}

#[component]
fn AdminProject() -> Element {
    admin::project::ProjectPage()
}

#[component]
fn AdminChatMobile() -> Element {
    admin::chat_mobile::ChatMobilePage()
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    rsx! { not_found::NotFoundPage { route } }
}
