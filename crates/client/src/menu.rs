use shared_types::Role;

use crate::policy::{access, Access, AdminAction};

/// Icon name rendered by the UI layer. Kept as data here so this crate
/// stays free of any rendering dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    LayoutDashboard,
    Flag,
    MessageSquare,
    MessagesSquare,
    School,
    Calendar,
    Camera,
    LifeBuoy,
    Globe,
    Activity,
}

/// One entry of the admin surface.
///
/// `action: None` marks a universally-visible entry — it renders for every
/// role, including unrecognized ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminEntry {
    pub slug: &'static str,
    pub route: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: MenuIcon,
    pub action: Option<AdminAction>,
}

/// The admin surface, hand-authored. Rendered order is this literal order —
/// no sorting, no priority scoring.
pub const ADMIN_ENTRIES: &[AdminEntry] = &[
    AdminEntry {
        slug: "overview",
        route: "/admin",
        title: "Overview",
        description: "Admin home and quick links",
        icon: MenuIcon::LayoutDashboard,
        action: None,
    },
    AdminEntry {
        slug: "moderation",
        route: "/admin/moderation",
        title: "Moderation",
        description: "Review and resolve user reports",
        icon: MenuIcon::Flag,
        action: Some(AdminAction::ModerateReports),
    },
    AdminEntry {
        slug: "comments",
        route: "/admin/comments",
        title: "Comments",
        description: "Hide or restore flagged comments",
        icon: MenuIcon::MessageSquare,
        action: Some(AdminAction::ModerateComments),
    },
    AdminEntry {
        slug: "chat",
        route: "/admin/chat",
        title: "Chat Rooms",
        description: "Rooms, messages, and live votes",
        icon: MenuIcon::MessagesSquare,
        action: Some(AdminAction::ManageChatRooms),
    },
    AdminEntry {
        slug: "schools",
        route: "/admin/schools",
        title: "Schools",
        description: "Member campuses and email domains",
        icon: MenuIcon::School,
        action: Some(AdminAction::ManageSchools),
    },
    AdminEntry {
        slug: "events",
        route: "/admin/events",
        title: "Events",
        description: "Campus event calendar",
        icon: MenuIcon::Calendar,
        action: Some(AdminAction::ManageEvents),
    },
    AdminEntry {
        slug: "instagram",
        route: "/admin/instagram",
        title: "Instagram",
        description: "Linked accounts for announcements",
        icon: MenuIcon::Camera,
        action: Some(AdminAction::ManageInstagram),
    },
    AdminEntry {
        slug: "support",
        route: "/admin/support",
        title: "Support Tickets",
        description: "User-filed support requests",
        icon: MenuIcon::LifeBuoy,
        action: Some(AdminAction::ModerateSupportTickets),
    },
    AdminEntry {
        slug: "platform",
        route: "/admin/platform",
        title: "Platform Mode",
        description: "Open, read-only, or maintenance",
        icon: MenuIcon::Globe,
        action: Some(AdminAction::SetPlatformMode),
    },
    AdminEntry {
        slug: "project",
        route: "/admin/project",
        title: "Project",
        description: "Server status and build info",
        icon: MenuIcon::Activity,
        action: Some(AdminAction::ViewServerStatus),
    },
];

/// Entries visible to `role`, in literal list order, each paired with its
/// access tier. `ReadOnly` entries are included — the UI renders them
/// disabled instead of omitting them. `Denied` entries are dropped.
pub fn visible_entries(role: Role) -> Vec<(&'static AdminEntry, Access)> {
    ADMIN_ENTRIES
        .iter()
        .filter_map(|entry| match entry.action {
            None => Some((entry, Access::Granted)),
            Some(action) => match access(role, action) {
                Access::Denied => None,
                tier => Some((entry, tier)),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Property: for every role, the visible set is exactly the entries
    /// whose capability row does not deny that role, in literal order.
    #[test]
    fn visible_entries_match_capability_table_for_every_role() {
        for role in Role::ALL {
            let visible = visible_entries(role);

            let expected: Vec<&AdminEntry> = ADMIN_ENTRIES
                .iter()
                .filter(|e| {
                    e.action
                        .map(|a| access(role, a) != Access::Denied)
                        .unwrap_or(true)
                })
                .collect();

            let got: Vec<&AdminEntry> = visible.iter().map(|(e, _)| *e).collect();
            assert_eq!(got, expected, "role {:?}", role);
        }
    }

    #[test]
    fn unrecognized_role_sees_only_universal_entries() {
        let role = Role::from_str_or_default("definitely-not-a-role");
        let visible = visible_entries(role);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0.slug, "overview");
    }

    #[test]
    fn campus_moderator_support_entry_present_but_read_only() {
        let visible = visible_entries(Role::CampusModerator);
        let support = visible
            .iter()
            .find(|(e, _)| e.slug == "support")
            .expect("support entry must be present, not omitted");
        assert_eq!(support.1, Access::ReadOnly);
    }

    #[test]
    fn dev_admin_sees_the_whole_surface() {
        let visible = visible_entries(Role::DevAdmin);
        assert_eq!(visible.len(), ADMIN_ENTRIES.len());
        assert!(visible.iter().all(|(_, tier)| *tier == Access::Granted));
    }

    #[test]
    fn ordering_is_literal_list_order() {
        let visible = visible_entries(Role::CrossAdmin);
        let slugs: Vec<&str> = visible.iter().map(|(e, _)| e.slug).collect();
        let mut expected: Vec<&str> = ADMIN_ENTRIES
            .iter()
            .map(|e| e.slug)
            .filter(|s| slugs.contains(s))
            .collect();
        expected.dedup();
        assert_eq!(slugs, expected);
    }

    #[test]
    fn routes_are_unique() {
        let mut routes: Vec<&str> = ADMIN_ENTRIES.iter().map(|e| e.route).collect();
        routes.sort_unstable();
        routes.dedup();
        assert_eq!(routes.len(), ADMIN_ENTRIES.len());
    }
}
