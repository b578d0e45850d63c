//! Chat list, thread pages and sending.

use store::session;
use store::{Action, AppState, ChatSummary, FormFailure, KeyValueStore, MessageEntry};

use crate::backend::Backend;
use crate::error::ApiError;

/// Error string the server returns for threads the user does not belong to.
/// The misspelling is part of the server contract.
pub const NOT_A_MEMBER: &str = "Not a membor of chat";

const NOT_A_MEMBER_CORRECTED: &str = "Not a member of chat";

pub fn is_not_member(failure: &FormFailure) -> bool {
    matches!(failure, FormFailure::General(msg) if msg == NOT_A_MEMBER || msg == NOT_A_MEMBER_CORRECTED)
}

/// What opening a thread produced.
#[derive(Clone, Debug, PartialEq)]
pub enum ThreadLoad {
    /// Messages oldest first.
    Loaded(Vec<MessageEntry>),
    /// Not a member, or any non-success status.
    Denied,
    /// Network or decoding failure; already logged.
    Unavailable,
}

pub async fn load_chats<B: Backend>(backend: &B, token: &str) -> Result<Vec<ChatSummary>, ApiError> {
    let chats = backend.chats(token).await?;
    tracing::debug!("Loaded {} chats", chats.len());
    Ok(chats)
}

/// A finished chat-list request and the session token it was made with.
#[derive(Debug)]
pub struct ChatFetch {
    token: Option<String>,
    result: Result<Vec<ChatSummary>, ApiError>,
}

/// Load the chat list for the stored session.
pub async fn fetch_chats<B: Backend, S: KeyValueStore>(backend: &B, storage: &S) -> ChatFetch {
    let token = session::stored_token(storage);
    let result = match &token {
        Some(token) => load_chats(backend, token).await,
        None => Err(ApiError::MissingToken),
    };
    ChatFetch { token, result }
}

/// Fold a finished fetch into the store and return the token to open the live
/// feed with.
///
/// A fetch that outlived its session (logout, or another login since) is
/// dropped without touching the store. A failed fetch resolves to an empty
/// list so views stop waiting.
pub fn commit_chats<S: KeyValueStore>(
    state: &mut AppState,
    storage: &S,
    fetch: ChatFetch,
) -> Option<String> {
    if !state.is_logged_in() || session::stored_token(storage) != fetch.token {
        tracing::debug!("Discarding chat list of a previous session");
        return None;
    }
    match fetch.result {
        Ok(chats) => {
            state.reduce(Action::SetChats(chats));
            fetch.token
        }
        Err(e) => {
            tracing::error!("Failed to load chats: {e}");
            state.reduce(Action::SetChats(Vec::new()));
            None
        }
    }
}

/// Fetch the newest page of a chat.
pub async fn open_thread<B: Backend>(
    backend: &B,
    token: &str,
    chat_id: &str,
    page_size: u32,
) -> ThreadLoad {
    match backend.chat_messages(token, chat_id, 0, page_size).await {
        Ok(mut page) => {
            page.reverse();
            ThreadLoad::Loaded(page)
        }
        Err(ApiError::Rejected { failure, status }) => {
            if !is_not_member(&failure) {
                tracing::warn!("Chat {chat_id} refused ({status}): {failure}");
            }
            ThreadLoad::Denied
        }
        Err(ApiError::Status { status, .. }) => {
            tracing::warn!("Chat {chat_id} answered {status}");
            ThreadLoad::Denied
        }
        Err(e) => {
            tracing::error!("Failed to load chat {chat_id}: {e}");
            ThreadLoad::Unavailable
        }
    }
}

/// Trimmed message text, or `None` when there is nothing to send.
pub fn outgoing(input: &str) -> Option<&str> {
    let text = input.trim();
    (!text.is_empty()).then_some(text)
}

/// Post a message. Returns `Ok(false)` without touching the network when
/// `input` is blank. The message is not inserted locally; it arrives over the
/// live feed like everyone else's.
pub async fn send_message<B: Backend>(
    backend: &B,
    token: &str,
    chat_id: &str,
    input: &str,
) -> Result<bool, ApiError> {
    let Some(text) = outgoing(input) else {
        return Ok(false);
    };
    backend.send_message(token, chat_id, text).await?;
    Ok(true)
}
