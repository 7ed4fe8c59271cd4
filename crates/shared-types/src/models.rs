use serde::{Deserialize, Serialize};

/// Viewer role controlling access to admin surfaces.
///
/// - `Guest` — unauthenticated or unknown role. Sees only universal entries.
/// - `User` — a signed-in forum member.
/// - `Moderator` — content moderation within their own school.
/// - `Admin` — general platform administration.
/// - `DevAdmin` — platform development team; full access including server status.
/// - `CampusAdmin` — administers one campus (school-scoped).
/// - `CrossAdmin` — administers across campuses.
/// - `CampusModerator` / `CrossModerator` — moderation tiers mirroring the
///   admin split; some surfaces grant them read-only visibility.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Guest,
    User,
    Moderator,
    Admin,
    DevAdmin,
    CampusAdmin,
    CrossAdmin,
    CampusModerator,
    CrossModerator,
}

impl Role {
    /// Every role, in declaration order. Used by exhaustive policy checks.
    pub const ALL: [Role; 9] = [
        Role::Guest,
        Role::User,
        Role::Moderator,
        Role::Admin,
        Role::DevAdmin,
        Role::CampusAdmin,
        Role::CrossAdmin,
        Role::CampusModerator,
        Role::CrossModerator,
    ];

    /// Parse from the wire `role` string. Unknown values default to Guest.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "user" => Role::User,
            "moderator" => Role::Moderator,
            "admin" => Role::Admin,
            "dev_admin" => Role::DevAdmin,
            "campus_admin" => Role::CampusAdmin,
            "cross_admin" => Role::CrossAdmin,
            "campus_moderator" => Role::CampusModerator,
            "cross_moderator" => Role::CrossModerator,
            _ => Role::Guest,
        }
    }

    /// Lowercase snake_case string as carried by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::User => "user",
            Role::Moderator => "moderator",
            Role::Admin => "admin",
            Role::DevAdmin => "dev_admin",
            Role::CampusAdmin => "campus_admin",
            Role::CrossAdmin => "cross_admin",
            Role::CampusModerator => "campus_moderator",
            Role::CrossModerator => "cross_moderator",
        }
    }

    /// Human-readable label. Total: every variant maps to a non-empty string,
    /// and unknown wire values reach this through `from_str_or_default`.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Guest => "Guest",
            Role::User => "Member",
            Role::Moderator => "Moderator",
            Role::Admin => "Administrator",
            Role::DevAdmin => "Platform Developer",
            Role::CampusAdmin => "Campus Administrator",
            Role::CrossAdmin => "Cross-Campus Administrator",
            Role::CampusModerator => "Campus Moderator",
            Role::CrossModerator => "Cross-Campus Moderator",
        }
    }
}

/// Authenticated viewer info (safe to hold client-side).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    /// Wire form of the role; parse with `Role::from_str_or_default`.
    pub role: String,
    #[serde(default)]
    pub school_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl AuthUser {
    pub fn role(&self) -> Role {
        Role::from_str_or_default(&self.role)
    }
}

/// Access/refresh token pair issued at login and on refresh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Successful login/register payload: tokens plus the viewer they identify.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub tokens: TokenPair,
    pub user: AuthUser,
}

/// A member school on the platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct School {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email_domain: String,
    #[serde(default)]
    pub member_count: i64,
}

/// A forum post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: i64,
    pub school_id: i64,
    pub author: String,
    pub title: String,
    pub body: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub comment_count: i64,
}

/// A comment as shown on post pages and the moderation queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentRecord {
    pub id: i64,
    pub post_id: i64,
    pub author: String,
    pub body: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub removed: bool,
}

/// A user-filed content report awaiting moderation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportRecord {
    pub id: i64,
    /// What was reported: "post", "comment", or "message".
    pub target_kind: String,
    pub target_id: i64,
    pub reason: String,
    pub reporter: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub resolved: bool,
}

/// A support ticket visible on the admin support surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupportTicket {
    pub id: i64,
    pub subject: String,
    pub body: String,
    pub author: String,
    /// "open", "in_progress", or "closed".
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A campus event managed from the admin events page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampusEvent {
    pub id: i64,
    pub school_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub location: String,
    pub starts_at: chrono::DateTime<chrono::Utc>,
    pub ends_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// A linked Instagram account used for cross-posting announcements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstagramAccount {
    pub id: i64,
    pub handle: String,
    pub school_id: Option<i64>,
    pub linked_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub active: bool,
}

/// Platform-wide operating mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlatformMode {
    #[default]
    Open,
    ReadOnly,
    Maintenance,
}

impl PlatformMode {
    pub const ALL: [PlatformMode; 3] = [
        PlatformMode::Open,
        PlatformMode::ReadOnly,
        PlatformMode::Maintenance,
    ];

    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "read_only" => PlatformMode::ReadOnly,
            "maintenance" => PlatformMode::Maintenance,
            _ => PlatformMode::Open,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformMode::Open => "open",
            PlatformMode::ReadOnly => "read_only",
            PlatformMode::Maintenance => "maintenance",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PlatformMode::Open => "Open",
            PlatformMode::ReadOnly => "Read Only",
            PlatformMode::Maintenance => "Maintenance",
        }
    }
}

/// Current platform status as reported by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PlatformStatus {
    #[serde(default)]
    pub mode: PlatformMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announcement: Option<String>,
}

/// Backend health snapshot shown on the project page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerStatus {
    pub version: String,
    pub uptime_secs: i64,
    pub active_users: i64,
    #[serde(default)]
    pub open_reports: i64,
}
