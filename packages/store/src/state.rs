//! # Client state and reducers
//!
//! [`AppState`] is the whole reactive client state: a `user` slice and a `chats`
//! slice. It is owned by the UI (inside a signal) and only ever changed through
//! [`AppState::reduce`], one [`Action`] at a time, so every write is ordered.
//!
//! The two slices are independent. Nothing here coordinates them: a chat list
//! arriving after [`Action::Reset`] will repopulate `chats` even though the user
//! has logged out.

use crate::models::{ChatSummary, MessageEntry, User};
use crate::reconcile::{apply_event, LiveEvent};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserSlice {
    pub user: Option<User>,
    pub logged_in: bool,
}

/// Live messages kept for open threads, oldest first.
const MAX_ARRIVALS: usize = 500;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatsSlice {
    pub chats: Vec<ChatSummary>,
    pub loaded: bool,
    /// Every message delivered by the feed since the list was loaded.
    pub arrivals: Vec<MessageEntry>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub user: UserSlice,
    pub chats: ChatsSlice,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetUser(Option<User>),
    SetLoggedIn(bool),
    /// Replace the chat list and mark it loaded.
    SetChats(Vec<ChatSummary>),
    /// Forget the chat list of a previous session.
    ClearChats,
    ApplyEvent(LiveEvent),
    /// Back to the initial state (logout).
    Reset,
}

impl AppState {
    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::SetUser(user) => self.user.user = user,
            Action::SetLoggedIn(flag) => self.user.logged_in = flag,
            Action::SetChats(chats) => {
                self.chats = ChatsSlice {
                    chats,
                    loaded: true,
                    arrivals: Vec::new(),
                };
            }
            Action::ClearChats => self.chats = ChatsSlice::default(),
            Action::ApplyEvent(event) => {
                if !apply_event(&mut self.chats.chats, &event) {
                    tracing::debug!(
                        "Live event for unknown chat {}",
                        event.payload.chat_id
                    );
                    return;
                }
                let arrivals = &mut self.chats.arrivals;
                arrivals.push(event.to_entry());
                if arrivals.len() > MAX_ARRIVALS {
                    let excess = arrivals.len() - MAX_ARRIVALS;
                    arrivals.drain(..excess);
                }
            }
            Action::Reset => *self = AppState::default(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.logged_in
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.user.as_ref()
    }

    pub fn chat(&self, id: &str) -> Option<&ChatSummary> {
        self.chats.chats.iter().find(|c| c.chat.id == id)
    }

    /// Feed messages for one chat, oldest first.
    pub fn arrivals_for(&self, chat_id: &str) -> Vec<MessageEntry> {
        self.chats
            .arrivals
            .iter()
            .filter(|m| m.message.chat_id == chat_id)
            .cloned()
            .collect()
    }

    /// Chats whose name contains `query`, ignoring case. An empty query matches all.
    pub fn search_chats(&self, query: &str) -> Vec<ChatSummary> {
        let needle = query.trim().to_lowercase();
        self.chats
            .chats
            .iter()
            .filter(|c| needle.is_empty() || c.chat.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}
