//! # Persisted authentication session
//!
//! The bearer token and its expiry live in key-value storage under
//! [`keys::AUTH_TOKEN`] and [`keys::EXPIRY`], not in the reactive [`crate::AppState`].
//! They are consulted on every navigation, before anything touches the network.
//!
//! An empty string means "no value" for both keys; logging out writes empty
//! strings rather than removing the keys.

use chrono::{DateTime, Utc};

use crate::kv::{keys, KeyValueStore};
use crate::models::AuthToken;

/// Bearer token plus the instant it expires.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub expiry: DateTime<Utc>,
}

/// Outcome of checking the stored session against the clock.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionStatus {
    /// No expiry stored, or the stored value could not be parsed.
    Missing,
    /// Expiry is at or before `now`.
    Expired,
    /// A token that is still within its lifetime.
    Valid(AuthSession),
}

impl AuthSession {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry <= now
    }
}

impl From<AuthToken> for AuthSession {
    fn from(token: AuthToken) -> Self {
        Self {
            token: token.token,
            expiry: token.expiry,
        }
    }
}

/// Persist a freshly issued session.
pub fn save_session<S: KeyValueStore>(store: &S, session: &AuthSession) {
    store.set(keys::AUTH_TOKEN, &session.token);
    store.set(keys::EXPIRY, &session.expiry.to_rfc3339());
}

/// Forget the stored session.
pub fn clear_session<S: KeyValueStore>(store: &S) {
    store.set(keys::AUTH_TOKEN, "");
    store.set(keys::EXPIRY, "");
}

/// Read the stored token without looking at the expiry.
pub fn stored_token<S: KeyValueStore>(store: &S) -> Option<String> {
    store.get_non_empty(keys::AUTH_TOKEN)
}

/// Check the stored session against `now`.
///
/// Missing, unparsable and elapsed sessions are cleared from `store` before
/// returning, so callers only have to redirect.
pub fn check_session<S: KeyValueStore>(store: &S, now: DateTime<Utc>) -> SessionStatus {
    let expiry = store
        .get_non_empty(keys::EXPIRY)
        .and_then(|raw| match DateTime::parse_from_rfc3339(&raw) {
            Ok(dt) => Some(dt.with_timezone(&Utc)),
            Err(e) => {
                tracing::warn!("Discarding unparsable session expiry {raw:?}: {e}");
                None
            }
        });

    let Some(expiry) = expiry else {
        clear_session(store);
        return SessionStatus::Missing;
    };

    if expiry <= now {
        clear_session(store);
        return SessionStatus::Expired;
    }

    match stored_token(store) {
        Some(token) => SessionStatus::Valid(AuthSession { token, expiry }),
        None => {
            clear_session(store);
            SessionStatus::Missing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_missing_expiry_clears_token() {
        let store = MemoryStore::new();
        store.set(keys::AUTH_TOKEN, "tok");

        assert_eq!(check_session(&store, now()), SessionStatus::Missing);
        assert_eq!(store.get(keys::AUTH_TOKEN).as_deref(), Some(""));
        assert_eq!(store.get(keys::EXPIRY).as_deref(), Some(""));
    }

    #[test]
    fn test_past_expiries_are_cleared() {
        for hours in [1, 24, 24 * 365] {
            let store = MemoryStore::new();
            save_session(
                &store,
                &AuthSession {
                    token: "tok".into(),
                    expiry: now() - Duration::hours(hours),
                },
            );

            assert_eq!(check_session(&store, now()), SessionStatus::Expired);
            assert!(stored_token(&store).is_none());
            assert!(store.get_non_empty(keys::EXPIRY).is_none());
        }
    }

    #[test]
    fn test_expiry_equal_to_now_is_expired() {
        let store = MemoryStore::new();
        save_session(
            &store,
            &AuthSession {
                token: "tok".into(),
                expiry: now(),
            },
        );
        assert_eq!(check_session(&store, now()), SessionStatus::Expired);
    }

    #[test]
    fn test_garbage_expiry_is_missing() {
        let store = MemoryStore::new();
        store.set(keys::AUTH_TOKEN, "tok");
        store.set(keys::EXPIRY, "tomorrow-ish");

        assert_eq!(check_session(&store, now()), SessionStatus::Missing);
        assert!(stored_token(&store).is_none());
    }

    #[test]
    fn test_valid_session_roundtrips() {
        let store = MemoryStore::new();
        let session = AuthSession {
            token: "tok".into(),
            expiry: now() + Duration::hours(48),
        };
        save_session(&store, &session);

        assert_eq!(check_session(&store, now()), SessionStatus::Valid(session));
    }

    #[test]
    fn test_future_expiry_without_token_is_missing() {
        let store = MemoryStore::new();
        store.set(keys::EXPIRY, &(now() + Duration::hours(1)).to_rfc3339());

        assert_eq!(check_session(&store, now()), SessionStatus::Missing);
    }
}
