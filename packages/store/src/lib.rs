//! Client-side state for the Gocha chat client: wire models, the reducer-driven
//! [`AppState`], key-value persistence and the small pure helpers (session
//! checks, theme, live-feed reconciliation, form failures) the UI builds on.

pub mod config;
pub mod forms;
pub mod kv;
pub mod models;
pub mod reconcile;
pub mod session;
pub mod state;
pub mod theme;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::ClientConfig;
pub use forms::FormFailure;
pub use kv::KeyValueStore;
pub use models::{
    AuthResponse, AuthToken, Chat, ChatSummary, Members, Message, MessageEntry, MessageKind,
    User, UserRef,
};
pub use reconcile::LiveEvent;
pub use session::{AuthSession, SessionStatus};
pub use state::{Action, AppState};
pub use theme::Theme;
