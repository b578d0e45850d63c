//! App-wide context: the state signal, the service handles views call into,
//! and the single live feed.

use api::{ApiError, FeedState, HttpBackend, LiveFeed};
use dioxus::prelude::*;
use futures::StreamExt;
use store::config::ApiConfig;
use store::{session, Action, AppState, ClientConfig};

use crate::platform::{make_storage, Storage};

/// Backend client, storage and configuration, shared by every view.
#[derive(Clone)]
pub struct Services {
    pub backend: HttpBackend,
    pub storage: Storage,
    pub config: ClientConfig,
}

impl Services {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            backend: HttpBackend::new(&config.api),
            storage: make_storage(),
            config,
        }
    }

    /// Bearer token of the stored session.
    pub fn token(&self) -> Result<String, ApiError> {
        session::stored_token(&self.storage).ok_or(ApiError::MissingToken)
    }
}

/// Send an [`Action`] through the reducer.
pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

impl Dispatch for Signal<AppState> {
    fn dispatch(&mut self, action: Action) {
        self.write().reduce(action);
    }
}

/// Slot holding the live feed. Emptying it drops, and so closes, the socket.
#[derive(Clone, Copy, PartialEq)]
pub struct FeedHandle(Signal<Option<LiveFeed>>);

impl FeedHandle {
    pub fn state(&self) -> FeedState {
        self.0
            .read()
            .as_ref()
            .map_or(FeedState::Closed, LiveFeed::state)
    }

    /// Open the feed for `token` unless that session's feed is already
    /// connecting or open. A feed of another session is replaced. Events are
    /// dispatched into `state` until the feed closes.
    pub fn open(mut self, config: &ApiConfig, token: &str, mut state: Signal<AppState>) {
        let running = self
            .0
            .peek()
            .as_ref()
            .is_some_and(|feed| feed_is_current(feed, token));
        if running {
            tracing::debug!("Live feed already running");
            return;
        }

        match LiveFeed::connect(config, token) {
            Ok((feed, mut events)) => {
                // Replacing the slot drops, and so closes, a previous feed.
                self.0.set(Some(feed));
                spawn(async move {
                    while let Some(event) = events.next().await {
                        if !state.peek().is_logged_in() {
                            tracing::debug!("Dropping live event received after logout");
                            continue;
                        }
                        state.dispatch(Action::ApplyEvent(event));
                    }
                    tracing::debug!("Live feed subscription ended");
                });
            }
            Err(e) => tracing::error!("Could not open live feed: {e}"),
        }
    }

    pub fn close(mut self) {
        if self.0.peek().is_some() {
            self.0.set(None);
        }
    }
}

fn feed_is_current(feed: &LiveFeed, token: &str) -> bool {
    feed.state() != FeedState::Closed && feed.token() == token
}

pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

pub fn use_services() -> Services {
    use_context::<Services>()
}

pub fn use_feed() -> FeedHandle {
    use_context::<FeedHandle>()
}

/// Provides [`Services`], the [`AppState`] signal and the [`FeedHandle`].
/// Wrap the router with this component.
#[component]
pub fn AppProvider(config: ClientConfig, children: Element) -> Element {
    use_context_provider(|| Services::new(config.clone()));
    use_context_provider(|| Signal::new(AppState::default()));
    use_context_provider(|| FeedHandle(Signal::new(None)));

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_feed_is_replaced() {
        let (feed, _events) = LiveFeed::connect(&ApiConfig::default(), "TOKEN123").unwrap();
        assert_eq!(feed.state(), FeedState::Closed);
        assert!(!feed_is_current(&feed, "TOKEN123"));
        assert!(!feed_is_current(&feed, "TOKEN456"));
    }
}
