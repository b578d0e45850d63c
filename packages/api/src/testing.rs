//! In-memory [`Backend`] for tests.

use std::cell::RefCell;

use chrono::{Duration, TimeZone, Utc};
use store::{AuthResponse, AuthToken, ChatSummary, FormFailure, MessageEntry, User};

use crate::backend::Backend;
use crate::error::ApiError;

pub fn user() -> User {
    User {
        id: "u-ann".into(),
        name: "Ann".into(),
        email: "ann@example.com".into(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        activated: true,
    }
}

pub fn auth_response() -> AuthResponse {
    AuthResponse {
        authentication_token: AuthToken {
            token: "TOKEN123".into(),
            expiry: Utc::now() + Duration::hours(48),
        },
        user: user(),
    }
}

/// Canned responses plus a log of every call made.
#[derive(Default)]
pub struct FakeBackend {
    pub calls: RefCell<Vec<String>>,
    pub offline: bool,
    pub auth_failure: Option<FormFailure>,
    pub create_failure: Option<FormFailure>,
    /// `current_user` answers 401 when unset.
    pub user: Option<User>,
    pub chats: Vec<ChatSummary>,
    pub messages: Vec<MessageEntry>,
    pub thread_failure: Option<(u16, Option<FormFailure>)>,
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: &str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call.to_string());
        if self.offline {
            return Err(ApiError::Network("connection refused".into()));
        }
        Ok(())
    }
}

fn rejected(status: u16, failure: FormFailure) -> ApiError {
    ApiError::Rejected { status, failure }
}

impl Backend for FakeBackend {
    async fn authenticate(&self, _email: &str, _password: &str) -> Result<AuthResponse, ApiError> {
        self.record("authenticate")?;
        match &self.auth_failure {
            Some(f) => Err(rejected(422, f.clone())),
            None => Ok(auth_response()),
        }
    }

    async fn create_user(&self, name: &str, email: &str, _password: &str) -> Result<User, ApiError> {
        self.record("create_user")?;
        match &self.create_failure {
            Some(f) => Err(rejected(422, f.clone())),
            None => Ok(User {
                name: name.into(),
                email: email.into(),
                ..user()
            }),
        }
    }

    async fn current_user(&self, _token: &str) -> Result<User, ApiError> {
        self.record("current_user")?;
        self.user.clone().ok_or_else(|| {
            rejected(
                401,
                FormFailure::general("invalid or missing authentication token"),
            )
        })
    }

    async fn chats(&self, _token: &str) -> Result<Vec<ChatSummary>, ApiError> {
        self.record("chats")?;
        Ok(self.chats.clone())
    }

    async fn chat_messages(
        &self,
        _token: &str,
        chat_id: &str,
        start: u32,
        size: u32,
    ) -> Result<Vec<MessageEntry>, ApiError> {
        self.record(&format!("chat_messages {chat_id} {start} {size}"))?;
        match &self.thread_failure {
            Some((status, Some(f))) => Err(rejected(*status, f.clone())),
            Some((status, None)) => Err(ApiError::Status {
                status: *status,
                body: String::new(),
            }),
            None => Ok(self.messages.clone()),
        }
    }

    async fn send_message(&self, _token: &str, chat_id: &str, content: &str) -> Result<(), ApiError> {
        self.record(&format!("send_message {chat_id} {content}"))
    }
}
