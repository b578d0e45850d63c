//! # Authentication helpers
//!
//! Login, signup, logout and the per-navigation session check. The network
//! half of each flow is async and generic over [`Backend`]; the state half
//! ([`set_auth_info`], [`log_out`], [`apply_revalidation`]) is synchronous so
//! the UI can run it inside a single write to its state signal.

use chrono::{DateTime, Utc};
use store::forms::{self, FIELD_EMAIL, FIELD_NAME, FIELD_PASSWORD, SOMETHING_WENT_WRONG};
use store::session::{self, SessionStatus};
use store::{Action, AppState, AuthResponse, AuthSession, FormFailure, KeyValueStore, User};

use crate::backend::Backend;
use crate::error::ApiError;

/// Map a failed auth call onto something a form can display.
fn form_failure(err: ApiError) -> FormFailure {
    match err {
        ApiError::Rejected { failure, .. } => failure,
        ApiError::Decode(e) => {
            tracing::warn!("Auth response could not be decoded: {e}");
            FormFailure::general(SOMETHING_WENT_WRONG)
        }
        other => {
            tracing::error!("Auth request failed: {other}");
            FormFailure::general(SOMETHING_WENT_WRONG)
        }
    }
}

/// Exchange credentials for a token.
pub async fn login<B: Backend>(
    backend: &B,
    email: &str,
    password: &str,
) -> Result<AuthResponse, FormFailure> {
    forms::require_filled(&[(FIELD_EMAIL, email), (FIELD_PASSWORD, password)])?;
    backend
        .authenticate(email.trim(), password)
        .await
        .map_err(form_failure)
}

/// Create an account, then log straight into it.
pub async fn signup<B: Backend>(
    backend: &B,
    name: &str,
    email: &str,
    password: &str,
) -> Result<AuthResponse, FormFailure> {
    forms::require_filled(&[
        (FIELD_NAME, name),
        (FIELD_EMAIL, email),
        (FIELD_PASSWORD, password),
    ])?;
    let created = backend
        .create_user(name.trim(), email.trim(), password)
        .await
        .map_err(form_failure)?;
    tracing::info!("Created account {}", created.id);
    login(backend, email, password).await
}

/// Record a successful login in the store and in persistent storage.
pub fn set_auth_info<S: KeyValueStore>(state: &mut AppState, storage: &S, auth: AuthResponse) {
    session::save_session(storage, &AuthSession::from(auth.authentication_token));
    state.reduce(Action::ClearChats);
    state.reduce(Action::SetUser(Some(auth.user)));
    state.reduce(Action::SetLoggedIn(true));
}

/// Forget the user everywhere.
pub fn log_out<S: KeyValueStore>(state: &mut AppState, storage: &S) {
    state.reduce(Action::Reset);
    session::clear_session(storage);
}

/// Result of the per-navigation session check.
#[derive(Clone, Debug, PartialEq)]
pub enum Revalidation {
    /// No usable session; storage has been cleared. Redirect to login.
    Expired,
    /// The server refused the stored token, or could not be reached. Redirect to login.
    Rejected,
    /// Store already holds a logged-in user; nothing to do.
    Current,
    /// User fetched with the stored token; re-run the current route.
    Restored(User),
}

impl Revalidation {
    pub fn requires_login(&self) -> bool {
        matches!(self, Revalidation::Expired | Revalidation::Rejected)
    }
}

/// Check the stored session and, when the store is empty, restore the user.
pub async fn revalidate<B: Backend, S: KeyValueStore>(
    backend: &B,
    storage: &S,
    logged_in: bool,
    now: DateTime<Utc>,
) -> Revalidation {
    let session = match session::check_session(storage, now) {
        SessionStatus::Valid(session) => session,
        SessionStatus::Missing | SessionStatus::Expired => return Revalidation::Expired,
    };

    if logged_in {
        return Revalidation::Current;
    }

    match backend.current_user(&session.token).await {
        Ok(user) => Revalidation::Restored(user),
        Err(e) => {
            tracing::warn!("Stored session not accepted: {e}");
            Revalidation::Rejected
        }
    }
}

/// Fold a revalidation outcome into the store.
pub fn apply_revalidation(state: &mut AppState, outcome: &Revalidation) {
    match outcome {
        Revalidation::Expired => {
            if state.is_logged_in() {
                state.reduce(Action::Reset);
            }
        }
        Revalidation::Restored(user) => {
            state.reduce(Action::SetUser(Some(user.clone())));
            state.reduce(Action::SetLoggedIn(true));
        }
        Revalidation::Rejected | Revalidation::Current => {}
    }
}
