use shared_types::Role;

/// Every privileged action surfaced by the admin UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminAction {
    SetPlatformMode,
    ManageSchools,
    ModerateReports,
    ModerateComments,
    ManageChatRooms,
    ManageEvents,
    ManageInstagram,
    ViewServerStatus,
    ModerateSupportTickets,
}

impl AdminAction {
    pub const ALL: [AdminAction; 9] = [
        AdminAction::SetPlatformMode,
        AdminAction::ManageSchools,
        AdminAction::ModerateReports,
        AdminAction::ModerateComments,
        AdminAction::ManageChatRooms,
        AdminAction::ManageEvents,
        AdminAction::ManageInstagram,
        AdminAction::ViewServerStatus,
        AdminAction::ModerateSupportTickets,
    ];
}

/// What a role may do with an action.
///
/// `ReadOnly` is the visible-but-disabled tier: the surface renders, but
/// mutating controls are inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    ReadOnly,
    Denied,
}

/// The capability table. One place decides what every role may do — no
/// screen re-derives its own allow-list, and no role inherits another's
/// permission except by explicit membership in a row below.
pub fn access(role: Role, action: AdminAction) -> Access {
    use AdminAction::*;
    use Role::*;

    match action {
        SetPlatformMode => match role {
            DevAdmin | CampusAdmin | CrossAdmin => Access::Granted,
            _ => Access::Denied,
        },
        ManageSchools => match role {
            Admin | DevAdmin | CrossAdmin => Access::Granted,
            CampusAdmin => Access::ReadOnly,
            _ => Access::Denied,
        },
        ModerateReports | ModerateComments => match role {
            Moderator | Admin | DevAdmin | CampusAdmin | CrossAdmin | CampusModerator
            | CrossModerator => Access::Granted,
            _ => Access::Denied,
        },
        ManageChatRooms => match role {
            Admin | DevAdmin | CampusAdmin | CrossAdmin => Access::Granted,
            Moderator | CampusModerator | CrossModerator => Access::ReadOnly,
            _ => Access::Denied,
        },
        ManageEvents => match role {
            Admin | DevAdmin | CampusAdmin | CrossAdmin => Access::Granted,
            _ => Access::Denied,
        },
        ManageInstagram => match role {
            Admin | DevAdmin | CampusAdmin | CrossAdmin => Access::Granted,
            _ => Access::Denied,
        },
        ViewServerStatus => match role {
            Admin | DevAdmin | CrossAdmin => Access::Granted,
            _ => Access::Denied,
        },
        ModerateSupportTickets => match role {
            Admin | DevAdmin | CampusAdmin | CrossAdmin => Access::Granted,
            CampusModerator | CrossModerator => Access::ReadOnly,
            _ => Access::Denied,
        },
    }
}

/// True only for full access; `ReadOnly` surfaces stay inert.
pub fn can(role: Role, action: AdminAction) -> bool {
    access(role, action) == Access::Granted
}

pub fn can_set_platform_mode(role: Role) -> bool {
    can(role, AdminAction::SetPlatformMode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_mode_limited_to_the_three_admin_tiers() {
        for role in Role::ALL {
            let expected = matches!(
                role,
                Role::DevAdmin | Role::CampusAdmin | Role::CrossAdmin
            );
            assert_eq!(can_set_platform_mode(role), expected, "{:?}", role);
        }
    }

    #[test]
    fn guests_and_members_are_denied_everything() {
        for role in [Role::Guest, Role::User] {
            for action in AdminAction::ALL {
                assert_eq!(access(role, action), Access::Denied, "{:?}/{:?}", role, action);
            }
        }
    }

    #[test]
    fn campus_moderator_sees_support_tickets_read_only() {
        assert_eq!(
            access(Role::CampusModerator, AdminAction::ModerateSupportTickets),
            Access::ReadOnly
        );
        assert_eq!(
            access(Role::CrossModerator, AdminAction::ModerateSupportTickets),
            Access::ReadOnly
        );
        assert!(!can(Role::CampusModerator, AdminAction::ModerateSupportTickets));
    }

    #[test]
    fn moderators_can_work_the_moderation_queues() {
        for role in [
            Role::Moderator,
            Role::CampusModerator,
            Role::CrossModerator,
        ] {
            assert!(can(role, AdminAction::ModerateReports));
            assert!(can(role, AdminAction::ModerateComments));
        }
    }

    #[test]
    fn plain_moderator_gets_chat_read_only() {
        assert_eq!(
            access(Role::Moderator, AdminAction::ManageChatRooms),
            Access::ReadOnly
        );
        assert_eq!(
            access(Role::CampusAdmin, AdminAction::ManageChatRooms),
            Access::Granted
        );
    }

    #[test]
    fn campus_admin_cannot_delete_schools() {
        assert_eq!(
            access(Role::CampusAdmin, AdminAction::ManageSchools),
            Access::ReadOnly
        );
        assert_eq!(
            access(Role::CrossAdmin, AdminAction::ManageSchools),
            Access::Granted
        );
    }

    #[test]
    fn server_status_excludes_campus_scoped_roles() {
        assert!(!can(Role::CampusAdmin, AdminAction::ViewServerStatus));
        assert!(can(Role::DevAdmin, AdminAction::ViewServerStatus));
    }

    #[test]
    fn table_is_total() {
        // Every (role, action) pair resolves without panicking.
        for role in Role::ALL {
            for action in AdminAction::ALL {
                let _ = access(role, action);
            }
        }
    }
}
