//! # API crate: the chat client's view of the backend
//!
//! Everything that crosses the network lives here. The web, and any future
//! platform package, call these helpers from their components and fold the
//! results into [`store::AppState`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | The [`Backend`] trait (six REST calls) and its `reqwest` implementation [`HttpBackend`]. |
//! | [`auth`] | Login, signup, logout and the per-navigation session check ([`auth::revalidate`]). |
//! | [`chat`] | Chat list, thread pages (with the access-denied rule) and sending. |
//! | [`feed`] | The live WebSocket feed as an explicit lifecycle object ([`LiveFeed`]). |
//! | [`error`] | [`ApiError`], the single error type of the crate. |
//!
//! Network failures in background loads are logged with `tracing` and turned
//! into empty or stale views by the callers; nothing here retries.

pub mod auth;
pub mod backend;
pub mod chat;
pub mod error;
pub mod feed;

#[cfg(test)]
mod testing;

pub use auth::Revalidation;
pub use backend::{Backend, HttpBackend};
pub use chat::ThreadLoad;
pub use error::ApiError;
pub use feed::{FeedEvents, FeedState, LiveFeed};
