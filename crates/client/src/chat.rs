use shared_types::{ChatEvent, ChatMessage, ChatRoom, ChatVote};
use std::collections::HashMap;

/// A record addressable by numeric id.
pub trait Keyed {
    fn key(&self) -> i64;
}

impl Keyed for ChatRoom {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for ChatMessage {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for ChatVote {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Insert `record` if its id is absent, else replace the existing record
/// with the same id in place. Idempotent; last write wins by arrival order.
pub fn upsert_by_id<T: Keyed>(list: &mut Vec<T>, record: T) {
    match list.iter_mut().find(|r| r.key() == record.key()) {
        Some(existing) => *existing = record,
        None => list.push(record),
    }
}

/// Client-side chat state shared by the desktop and mobile chat pages.
///
/// Everything is fetched wholesale ("last fetch wins") and then kept warm
/// by merging realtime events via upsert-by-id. No ordering or dedup
/// guarantee beyond id-equality.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatFeed {
    pub rooms: Vec<ChatRoom>,
    messages: HashMap<i64, Vec<ChatMessage>>,
    votes: HashMap<i64, Vec<ChatVote>>,
}

impl ChatFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the room list with a fresh fetch.
    pub fn set_rooms(&mut self, rooms: Vec<ChatRoom>) {
        self.rooms = rooms;
    }

    /// Replace one room's messages with a fresh fetch.
    pub fn set_messages(&mut self, room_id: i64, messages: Vec<ChatMessage>) {
        self.messages.insert(room_id, messages);
    }

    /// Replace one room's votes with a fresh fetch.
    pub fn set_votes(&mut self, room_id: i64, votes: Vec<ChatVote>) {
        self.votes.insert(room_id, votes);
    }

    pub fn messages(&self, room_id: i64) -> &[ChatMessage] {
        self.messages.get(&room_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn votes(&self, room_id: i64) -> &[ChatVote] {
        self.votes.get(&room_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Insert the sender's own message before the server confirms it.
    pub fn insert_pending(&mut self, message: ChatMessage) {
        self.messages.entry(message.room_id).or_default().push(message);
    }

    /// Merge a realtime event into local state.
    pub fn apply_event(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::MessagePosted { message } => self.upsert_message(message),
            ChatEvent::RoomUpdated { room } => upsert_by_id(&mut self.rooms, room),
            ChatEvent::VoteUpdated { vote } => {
                upsert_by_id(self.votes.entry(vote.room_id).or_default(), vote)
            }
        }
    }

    /// Upsert a message, first reconciling it against the sender's own
    /// optimistic insert: an incoming message whose nonce matches a pending
    /// one replaces that entry even though their ids differ.
    pub fn upsert_message(&mut self, message: ChatMessage) {
        let list = self.messages.entry(message.room_id).or_default();

        if let Some(nonce) = message.client_nonce.as_deref() {
            if let Some(pending) = list
                .iter_mut()
                .find(|m| m.pending && m.client_nonce.as_deref() == Some(nonce))
            {
                *pending = message;
                return;
            }
        }
        upsert_by_id(list, message);
    }
}
