//! # Live-feed reconciliation
//!
//! The backend pushes JSON frames of the form
//!
//! ```json
//! {"type": "new_message",
//!  "payload": {"chat_id": "…", "message": "hi", "id": 5, "sent": "…", "from": "…", "user_name": "Bob"}}
//! ```
//!
//! [`LiveEvent::from_json`] decodes a frame, [`apply_event`] folds it into the
//! chat list, and [`pending_for_thread`] picks the delivered messages an open
//! thread still lacks. Both are pure over their inputs so the reducer and the
//! thread view share them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{ChatSummary, Message, MessageEntry, MessageKind, UserRef};

/// A frame received on the live feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiveEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub payload: EventPayload,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
    pub chat_id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    pub sent: DateTime<Utc>,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub user_name: String,
}

/// Message ids arrive as `"5"` or `5` depending on the sender.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

impl LiveEvent {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Rebuild the message this event announces.
    pub fn to_entry(&self) -> MessageEntry {
        let p = &self.payload;
        MessageEntry {
            message: Message {
                id: p.id.clone(),
                chat_id: p.chat_id.clone(),
                content: p.message.clone(),
                sent: p.sent,
                kind: MessageKind::from_event_type(&self.kind),
            },
            user: UserRef {
                id: p.from.clone(),
                name: p.user_name.clone(),
            },
        }
    }
}

/// Replace the target chat's `last_message` with the event's message.
///
/// Returns `false` when no chat in the list has the event's `chat_id`; the
/// list is left untouched in that case. Order is never changed.
pub fn apply_event(chats: &mut [ChatSummary], event: &LiveEvent) -> bool {
    let Some(summary) = chats
        .iter_mut()
        .find(|c| c.chat.id == event.payload.chat_id)
    else {
        return false;
    };
    summary.last_message = Some(event.to_entry());
    true
}

/// Messages from `arrivals` that `thread` still lacks, in arrival order.
/// Entries without an id are skipped.
pub fn pending_for_thread(thread: &[MessageEntry], arrivals: &[MessageEntry]) -> Vec<MessageEntry> {
    let mut pending: Vec<MessageEntry> = Vec::new();
    for entry in arrivals {
        let id = entry.id();
        if id.is_empty()
            || thread.iter().any(|m| m.id() == id)
            || pending.iter().any(|m| m.id() == id)
        {
            continue;
        }
        pending.push(entry.clone());
    }
    pending
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Chat, Members};

    fn summary(id: &str, name: &str) -> ChatSummary {
        ChatSummary {
            chat: Chat {
                id: id.into(),
                name: name.into(),
                is_private: false,
            },
            members: Members::Count(2),
            last_message: None,
        }
    }

    fn event(kind: &str, chat_id: &str, id: &str, text: &str) -> LiveEvent {
        LiveEvent {
            kind: kind.into(),
            payload: EventPayload {
                chat_id: chat_id.into(),
                message: text.into(),
                id: id.into(),
                sent: DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
                    .unwrap()
                    .with_timezone(&Utc),
                from: "u-bob".into(),
                user_name: "Bob".into(),
            },
        }
    }

    #[test]
    fn test_new_message_updates_last_message() {
        let mut chats = vec![summary("a", "A"), summary("c", "C")];
        let ev = event("new_message", "c", "5", "hi");

        assert!(apply_event(&mut chats, &ev));

        let last = chats[1].last_message.as_ref().unwrap();
        assert_eq!(last.message.content, "hi");
        assert_eq!(last.message.kind.tag(), 1);
        assert_eq!(last.user.name, "Bob");
        assert!(chats[0].last_message.is_none());
        assert_eq!(chats[0].chat.id, "a");
    }

    #[test]
    fn test_system_event_types() {
        let mut chats = vec![summary("c", "C")];

        apply_event(&mut chats, &event("joined_message", "c", "6", "Bob joined"));
        assert_eq!(
            chats[0].last_message.as_ref().unwrap().message.kind,
            MessageKind::Joined
        );

        apply_event(&mut chats, &event("left_message", "c", "7", "Bob left"));
        assert_eq!(
            chats[0].last_message.as_ref().unwrap().message.kind.tag(),
            51
        );
    }

    #[test]
    fn test_unknown_chat_is_ignored() {
        let mut chats = vec![summary("a", "A")];
        let before = chats.clone();

        assert!(!apply_event(&mut chats, &event("new_message", "zzz", "1", "x")));
        assert_eq!(chats, before);
    }

    #[test]
    fn test_decode_frame() {
        let text = r#"{"type":"new_message","payload":{"chat_id":"c","message":"hi","id":"5","sent":"2024-05-01T12:00:00Z","from":"u1","user_name":"Bob"}}"#;
        let ev = LiveEvent::from_json(text).unwrap();
        assert_eq!(ev.kind, "new_message");
        assert_eq!(ev.payload.message, "hi");
        assert!(LiveEvent::from_json("{\"type\":\"new_message\"}").is_err());
    }

    #[test]
    fn test_numeric_id_frame_updates_chat() {
        let text = r#"{"type":"new_message","payload":{"chat_id":"c","message":"hi","id":5,"sent":"2024-05-01T12:00:00Z","from":"u1","user_name":"Bob"}}"#;
        let ev = LiveEvent::from_json(text).unwrap();
        assert_eq!(ev.payload.id, "5");

        let mut chats = vec![summary("c", "C")];
        assert!(apply_event(&mut chats, &ev));
        let last = chats[0].last_message.as_ref().unwrap();
        assert_eq!(last.message.content, "hi");
        assert_eq!(last.message.kind, MessageKind::Normal);
        assert_eq!(last.id(), "5");
    }

    #[test]
    fn test_frame_without_id_decodes_empty() {
        let text = r#"{"type":"left_message","payload":{"chat_id":"c","message":"Bob left","sent":"2024-05-01T12:00:00Z"}}"#;
        assert_eq!(LiveEvent::from_json(text).unwrap().payload.id, "");
    }

    #[test]
    fn test_pending_for_thread() {
        let thread = vec![event("new_message", "c", "1", "one").to_entry()];
        let arrivals = vec![
            event("new_message", "c", "1", "one").to_entry(),
            event("new_message", "c", "2", "two").to_entry(),
            event("left_message", "c", "", "Bob left").to_entry(),
            event("new_message", "c", "3", "three").to_entry(),
            event("new_message", "c", "2", "two").to_entry(),
        ];

        let pending = pending_for_thread(&thread, &arrivals);
        let ids: Vec<&str> = pending.iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec!["2", "3"]);
        assert!(pending_for_thread(&pending, &arrivals[1..2]).is_empty());
    }
}
