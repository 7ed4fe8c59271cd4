use serde::{Deserialize, Serialize};

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, message = "Username must be at least 3 characters"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
}

/// Register request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct RegisterRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, message = "Username must be at least 3 characters"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid school email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Display name is required"))
    )]
    pub display_name: String,
}

/// Refresh token exchange request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Create a school (admin).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateSchoolRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "School name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, message = "Email domain is required"))
    )]
    pub email_domain: String,
}

/// Create a chat room (admin).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateRoomRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Room name is required"))
    )]
    pub name: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub school_id: Option<i64>,
}

/// Post a message into a room.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct PostMessageRequest {
    pub room_id: i64,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Message body is required"))
    )]
    pub body: String,
    /// Echoed back by the server so the sender can reconcile its
    /// optimistic insert.
    pub client_nonce: String,
}

/// Cast a vote on a room poll.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastVoteRequest {
    pub vote_id: i64,
    pub option_id: i64,
}

/// Create a campus event (admin).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateEventRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Event title is required"))
    )]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub starts_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub ends_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub school_id: Option<i64>,
}

/// Change the platform operating mode (admin).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetPlatformModeRequest {
    pub mode: crate::PlatformMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announcement: Option<String>,
}

/// Update a support ticket's status (admin).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateTicketRequest {
    pub status: String,
}

/// Link an Instagram account (admin).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LinkInstagramRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Account handle is required"))
    )]
    pub handle: String,
    #[serde(default)]
    pub school_id: Option<i64>,
}
