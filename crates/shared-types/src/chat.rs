use serde::{Deserialize, Serialize};

/// A chat room listed on the admin chat pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRoom {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub school_id: Option<i64>,
    #[serde(default)]
    pub member_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_message: Option<String>,
}

/// A single chat message.
///
/// `client_nonce` is set by the sender so its own optimistic insert can be
/// reconciled against the server echo; `pending` is never set by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: i64,
    pub room_id: i64,
    pub author: String,
    pub body: String,
    pub sent_at: chrono::DateTime<chrono::Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_nonce: Option<String>,
    #[serde(default)]
    pub pending: bool,
}

/// One selectable option of a room vote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoteOption {
    pub id: i64,
    pub label: String,
    #[serde(default)]
    pub count: i64,
}

/// A vote attached to a chat room.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatVote {
    pub id: i64,
    pub room_id: i64,
    pub question: String,
    pub options: Vec<VoteOption>,
    #[serde(default)]
    pub closed: bool,
}

/// Event delivered on the realtime channel. Each payload is merged into
/// local list state by upsert-by-id; there is no ordering guarantee beyond
/// arrival order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ChatEvent {
    MessagePosted { message: ChatMessage },
    RoomUpdated { room: ChatRoom },
    VoteUpdated { vote: ChatVote },
}

/// One poll's worth of realtime events plus the cursor to resume from.
/// `events` is empty when the poll timed out with nothing new.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ChatEventBatch {
    #[serde(default)]
    pub events: Vec<ChatEvent>,
    #[serde(default)]
    pub cursor: i64,
}
