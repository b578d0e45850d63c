//! # Live feed: one WebSocket per logged-in session
//!
//! [`LiveFeed`] owns the connection to `GET /v1/ws?token=…` and exposes its
//! lifecycle as an explicit [`FeedState`]:
//!
//! ```text
//! Connecting ──open──▶ Open ──close/error──▶ Closed
//!      └──────────────close/error───────────────┘
//! ```
//!
//! There is no reconnect: once `Closed`, the feed stays closed until a new one
//! is created (next login / reload).
//!
//! Decoded frames are handed to the subscriber through an unbounded channel
//! ([`FeedEvents`]) returned by [`LiveFeed::connect`]. The UI drains it in a
//! task and dispatches each event through the reducer, so delivery never
//! depends on which render created the socket. The channel ends when the feed
//! closes.
//!
//! Socket callbacks only talk to [`FeedCore`]. It holds the state cell and the
//! sender, so transitions are testable without a browser.

use std::cell::Cell;
use std::rc::Rc;

use futures::channel::mpsc;
use store::config::ApiConfig;
use store::LiveEvent;

use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedState {
    Connecting,
    Open,
    Closed,
}

/// Receiving half of the feed subscription.
pub type FeedEvents = mpsc::UnboundedReceiver<LiveEvent>;

/// Build the authenticated feed URL.
pub fn feed_url(config: &ApiConfig, token: &str) -> Result<String, ApiError> {
    reqwest::Url::parse_with_params(&config.ws_url(), &[("token", token)])
        .map(|url| url.to_string())
        .map_err(|e| ApiError::Socket(format!("invalid feed url: {e}")))
}

/// Shared by the socket callbacks: current state plus the subscriber.
#[derive(Clone)]
pub struct FeedCore {
    state: Rc<Cell<FeedState>>,
    sender: mpsc::UnboundedSender<LiveEvent>,
}

impl FeedCore {
    pub fn channel() -> (Self, FeedEvents) {
        let (sender, receiver) = mpsc::unbounded();
        let core = Self {
            state: Rc::new(Cell::new(FeedState::Connecting)),
            sender,
        };
        (core, receiver)
    }

    pub fn state(&self) -> FeedState {
        self.state.get()
    }

    pub fn on_open(&self) {
        if self.state() == FeedState::Connecting {
            tracing::info!("Live feed open");
            self.state.set(FeedState::Open);
        }
    }

    /// Decode and forward one text frame. Returns whether it was delivered.
    pub fn on_text(&self, text: &str) -> bool {
        if self.state() == FeedState::Closed {
            return false;
        }
        match LiveEvent::from_json(text) {
            Ok(event) => self.sender.unbounded_send(event).is_ok(),
            Err(e) => {
                tracing::warn!("Dropping malformed live event: {e}");
                false
            }
        }
    }

    pub fn on_close(&self) {
        if self.state() != FeedState::Closed {
            tracing::info!("Live feed closed");
            self.state.set(FeedState::Closed);
            self.sender.close_channel();
        }
    }
}

/// An open (or opening) live feed connection.
pub struct LiveFeed {
    core: FeedCore,
    token: String,
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    socket: socket::Socket,
}

impl LiveFeed {
    /// Open the feed for `token`.
    pub fn connect(config: &ApiConfig, token: &str) -> Result<(Self, FeedEvents), ApiError> {
        let url = feed_url(config, token)?;
        let (core, events) = FeedCore::channel();

        #[cfg(all(target_arch = "wasm32", feature = "web"))]
        {
            let socket = socket::Socket::open(&url, core.clone())?;
            Ok((
                Self {
                    core,
                    token: token.to_string(),
                    socket,
                },
                events,
            ))
        }

        #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
        {
            tracing::warn!("Live feed {url} needs a browser; staying closed");
            core.on_close();
            Ok((
                Self {
                    core,
                    token: token.to_string(),
                },
                events,
            ))
        }
    }

    pub fn state(&self) -> FeedState {
        self.core.state()
    }

    /// Session token the feed was opened with.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn close(&self) {
        #[cfg(all(target_arch = "wasm32", feature = "web"))]
        self.socket.close();
        self.core.on_close();
    }
}

impl Drop for LiveFeed {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod socket {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{CloseEvent, MessageEvent, WebSocket};

    use super::FeedCore;
    use crate::error::ApiError;

    /// Browser socket plus the callbacks bound to it.
    pub(super) struct Socket {
        ws: WebSocket,
        _on_open: Closure<dyn FnMut(JsValue)>,
        _on_message: Closure<dyn FnMut(MessageEvent)>,
        _on_close: Closure<dyn FnMut(CloseEvent)>,
        _on_error: Closure<dyn FnMut(JsValue)>,
    }

    impl Socket {
        pub(super) fn open(url: &str, core: FeedCore) -> Result<Self, ApiError> {
            let ws = WebSocket::new(url).map_err(|e| ApiError::Socket(format!("{e:?}")))?;

            let c = core.clone();
            let on_open = Closure::wrap(Box::new(move |_: JsValue| c.on_open())
                as Box<dyn FnMut(JsValue)>);
            ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));

            let c = core.clone();
            let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
                if let Some(text) = event.data().as_string() {
                    c.on_text(&text);
                }
            }) as Box<dyn FnMut(MessageEvent)>);
            ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

            let c = core.clone();
            let on_close = Closure::wrap(Box::new(move |event: CloseEvent| {
                tracing::debug!("Socket closed: code={} reason={}", event.code(), event.reason());
                c.on_close();
            }) as Box<dyn FnMut(CloseEvent)>);
            ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));

            let c = core;
            let on_error = Closure::wrap(Box::new(move |e: JsValue| {
                tracing::error!("Socket error: {e:?}");
                c.on_close();
            }) as Box<dyn FnMut(JsValue)>);
            ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));

            Ok(Self {
                ws,
                _on_open: on_open,
                _on_message: on_message,
                _on_close: on_close,
                _on_error: on_error,
            })
        }

        pub(super) fn close(&self) {
            // Unhook first: the closures are freed with `self`.
            self.ws.set_onopen(None);
            self.ws.set_onmessage(None);
            self.ws.set_onclose(None);
            self.ws.set_onerror(None);
            if let Err(e) = self.ws.close() {
                tracing::warn!("Failed to close live feed socket: {e:?}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    const FRAME: &str = r#"{"type":"new_message","payload":{"chat_id":"c","message":"hi","id":"5","sent":"2024-05-01T12:00:00Z","from":"u","user_name":"Bob"}}"#;

    #[test]
    fn test_feed_url_encodes_token() {
        let config = ApiConfig {
            base_url: "https://chat.example.com".into(),
        };
        assert_eq!(
            feed_url(&config, "a b+c").unwrap(),
            "wss://chat.example.com/v1/ws?token=a+b%2Bc"
        );
    }

    #[tokio::test]
    async fn test_lifecycle_and_delivery() {
        let (core, mut events) = FeedCore::channel();
        assert_eq!(core.state(), FeedState::Connecting);

        core.on_open();
        assert_eq!(core.state(), FeedState::Open);

        assert!(core.on_text(FRAME));
        assert!(!core.on_text("not json"));

        let event = events.next().await.unwrap();
        assert_eq!(event.payload.message, "hi");

        core.on_close();
        assert_eq!(core.state(), FeedState::Closed);
        assert!(!core.on_text(FRAME));
        assert!(events.next().await.is_none());
    }

    #[test]
    fn test_closed_never_reopens() {
        let (core, _events) = FeedCore::channel();
        core.on_close();
        core.on_open();
        assert_eq!(core.state(), FeedState::Closed);
    }

    #[tokio::test]
    async fn test_events_before_open_are_kept() {
        let (core, mut events) = FeedCore::channel();
        assert!(core.on_text(FRAME));
        core.on_open();
        assert_eq!(events.next().await.unwrap().payload.id, "5");
    }

    #[test]
    fn test_native_connect_stays_closed() {
        let (feed, _events) = LiveFeed::connect(&ApiConfig::default(), "tok").unwrap();
        assert_eq!(feed.state(), FeedState::Closed);
    }

    #[test]
    fn test_feed_remembers_its_session() {
        let (feed, _events) = LiveFeed::connect(&ApiConfig::default(), "TOKEN123").unwrap();
        assert_eq!(feed.token(), "TOKEN123");
    }

    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    #[tokio::test]
    async fn test_dropping_feed_ends_subscription() {
        let (core, mut events) = FeedCore::channel();
        core.on_open();
        let feed = LiveFeed {
            core: core.clone(),
            token: "TOKEN123".into(),
        };
        drop(feed);
        assert_eq!(core.state(), FeedState::Closed);
        assert!(events.next().await.is_none());
    }
}
