//! # Wire models for users, chats and messages
//!
//! Every type here is `Serialize + Deserialize` in the exact shape the chat
//! backend speaks, so REST bodies decode straight into them and the UI can keep
//! them in signals without an intermediate projection.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | The signed-in account, as returned by `/v1/user` and the auth endpoint. |
//! | [`AuthToken`] / [`AuthResponse`] | Bearer token issued on login, plus the user it belongs to. |
//! | [`Chat`] / [`ChatSummary`] | One row of the chat list: chat header, member count and latest message. |
//! | [`Message`] / [`MessageEntry`] | One message and its sender reference. The same shape is used for `last_message` and for thread pages. |
//!
//! Identifiers are kept as strings (the backend uses UUIDs) so the types stay
//! portable to WASM without pulling in a UUID crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub activated: bool,
}

/// Bearer token and the instant it stops being accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
    pub expiry: DateTime<Utc>,
}

/// Body of a successful `POST /v1/tokens/authentication`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub authentication_token: AuthToken,
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_private: bool,
}

/// Chat membership as reported in the list view.
///
/// Older backends send a plain count, newer ones the member list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Members {
    Count(u32),
    List(Vec<UserRef>),
}

impl Members {
    pub fn count(&self) -> usize {
        match self {
            Members::Count(n) => *n as usize,
            Members::List(users) => users.len(),
        }
    }
}

impl Default for Members {
    fn default() -> Self {
        Members::Count(0)
    }
}

/// List-view representation of a conversation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatSummary {
    pub chat: Chat,
    #[serde(default)]
    pub members: Members,
    #[serde(default)]
    pub last_message: Option<MessageEntry>,
}

/// Numeric message type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum MessageKind {
    /// A message typed by a user (`1`).
    Normal,
    /// "X joined the chat" (`50`).
    Joined,
    /// Any other system-generated line (`51`).
    System,
}

impl MessageKind {
    pub fn tag(self) -> i32 {
        match self {
            MessageKind::Normal => 1,
            MessageKind::Joined => 50,
            MessageKind::System => 51,
        }
    }

    /// Map a live-feed event type string onto a tag.
    pub fn from_event_type(kind: &str) -> Self {
        match kind {
            "new_message" => MessageKind::Normal,
            "joined_message" => MessageKind::Joined,
            _ => MessageKind::System,
        }
    }

    pub fn is_normal(self) -> bool {
        self == MessageKind::Normal
    }
}

impl From<i32> for MessageKind {
    fn from(tag: i32) -> Self {
        match tag {
            1 => MessageKind::Normal,
            50 => MessageKind::Joined,
            _ => MessageKind::System,
        }
    }
}

impl From<MessageKind> for i32 {
    fn from(kind: MessageKind) -> Self {
        kind.tag()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub chat_id: String,
    pub content: String,
    pub sent: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: MessageKind,
}

/// Sender reference attached to a message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A message together with who sent it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageEntry {
    pub message: Message,
    pub user: UserRef,
}

impl MessageEntry {
    pub fn id(&self) -> &str {
        &self.message.id
    }

    pub fn is_from(&self, user_id: &str) -> bool {
        self.user.id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_kind_tags() {
        assert_eq!(MessageKind::from_event_type("new_message").tag(), 1);
        assert_eq!(MessageKind::from_event_type("joined_message").tag(), 50);
        assert_eq!(MessageKind::from_event_type("left_message").tag(), 51);
        assert_eq!(MessageKind::from(7), MessageKind::System);
    }

    #[test]
    fn test_decode_chat_summary() {
        let json = r#"{
            "chat": {"id": "c1", "name": "General", "is_private": false},
            "members": 3,
            "last_message": {
                "message": {
                    "id": "m1",
                    "chat_id": "c1",
                    "content": "hello",
                    "sent": "2024-05-01T10:15:00+02:00",
                    "type": 1
                },
                "user": {"id": "u1", "name": "Ann"}
            }
        }"#;
        let summary: ChatSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.chat.name, "General");
        assert_eq!(summary.members.count(), 3);
        let last = summary.last_message.unwrap();
        assert_eq!(last.message.kind, MessageKind::Normal);
        assert_eq!(last.message.sent.to_rfc3339(), "2024-05-01T08:15:00+00:00");
        assert!(last.is_from("u1"));
    }

    #[test]
    fn test_decode_member_list_without_last_message() {
        let json = r#"{
            "chat": {"id": "c2", "name": "Bob", "is_private": true},
            "members": [{"id": "u1", "name": "Ann"}, {"id": "u2", "name": "Bob"}]
        }"#;
        let summary: ChatSummary = serde_json::from_str(json).unwrap();
        assert!(summary.chat.is_private);
        assert_eq!(summary.members.count(), 2);
        assert!(summary.last_message.is_none());
    }
}
