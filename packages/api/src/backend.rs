//! # Backend: the REST surface of the chat server
//!
//! [`Backend`] lists the six REST calls the client makes. [`HttpBackend`] is the
//! real implementation on top of `reqwest` (which uses `fetch` on WASM); tests
//! substitute an in-memory fake.
//!
//! | Method | HTTP | Auth |
//! |--------|------|------|
//! | [`authenticate`](Backend::authenticate) | `POST /v1/tokens/authentication` | none |
//! | [`create_user`](Backend::create_user) | `POST /v1/users` | none |
//! | [`current_user`](Backend::current_user) | `GET /v1/user` | bearer |
//! | [`chats`](Backend::chats) | `GET /v1/chats` | bearer |
//! | [`chat_messages`](Backend::chat_messages) | `GET /v1/chat?id&start&size` | bearer |
//! | [`send_message`](Backend::send_message) | `POST /v1/message` | bearer |
//!
//! Every response goes through [`interpret`], which turns the status and body
//! into either the decoded payload or a typed [`ApiError`].

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::config::ApiConfig;
use store::{AuthResponse, ChatSummary, FormFailure, MessageEntry, User};

use crate::error::ApiError;

pub trait Backend {
    fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;

    fn create_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<User, ApiError>>;

    fn current_user(&self, token: &str) -> impl Future<Output = Result<User, ApiError>>;

    fn chats(&self, token: &str) -> impl Future<Output = Result<Vec<ChatSummary>, ApiError>>;

    /// One page of a chat, newest message first.
    fn chat_messages(
        &self,
        token: &str,
        chat_id: &str,
        start: u32,
        size: u32,
    ) -> impl Future<Output = Result<Vec<MessageEntry>, ApiError>>;

    fn send_message(
        &self,
        token: &str,
        chat_id: &str,
        content: &str,
    ) -> impl Future<Output = Result<(), ApiError>>;
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: User,
}

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: Option<Vec<T>>,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct NewUser<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct NewMessage<'a> {
    chat_id: &'a str,
    content: &'a str,
}

/// Turn a raw response into `T` or a typed error.
pub fn interpret<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(match FormFailure::from_body(body) {
            Some(failure) => ApiError::Rejected { status, failure },
            None => ApiError::Status {
                status,
                body: body.to_string(),
            },
        });
    }
    // Some endpoints answer 2xx with an error envelope.
    if let Some(failure) = FormFailure::from_body(body) {
        return Err(ApiError::Rejected { status, failure });
    }
    Ok(serde_json::from_str(body)?)
}

/// `reqwest`-backed [`Backend`].
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.root().to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(ApiError::network)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(ApiError::network)?;
        tracing::debug!("HTTP {status} ({} bytes)", body.len());
        interpret(status, &body)
    }
}

impl Backend for HttpBackend {
    async fn authenticate(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let request = self
            .client
            .post(self.url("/v1/tokens/authentication"))
            .json(&Credentials { email, password });
        self.execute(request).await
    }

    async fn create_user(&self, name: &str, email: &str, password: &str) -> Result<User, ApiError> {
        let request = self.client.post(self.url("/v1/users")).json(&NewUser {
            name,
            email,
            password,
        });
        let envelope: UserEnvelope = self.execute(request).await?;
        Ok(envelope.user)
    }

    async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        let request = self.client.get(self.url("/v1/user")).bearer_auth(token);
        let envelope: UserEnvelope = self.execute(request).await?;
        Ok(envelope.user)
    }

    async fn chats(&self, token: &str) -> Result<Vec<ChatSummary>, ApiError> {
        let request = self.client.get(self.url("/v1/chats")).bearer_auth(token);
        let envelope: DataEnvelope<ChatSummary> = self.execute(request).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    async fn chat_messages(
        &self,
        token: &str,
        chat_id: &str,
        start: u32,
        size: u32,
    ) -> Result<Vec<MessageEntry>, ApiError> {
        let request = self
            .client
            .get(self.url("/v1/chat"))
            .query(&[
                ("id", chat_id.to_string()),
                ("start", start.to_string()),
                ("size", size.to_string()),
            ])
            .bearer_auth(token);
        let envelope: DataEnvelope<MessageEntry> = self.execute(request).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    async fn send_message(&self, token: &str, chat_id: &str, content: &str) -> Result<(), ApiError> {
        let request = self
            .client
            .post(self.url("/v1/message"))
            .json(&NewMessage { chat_id, content })
            .bearer_auth(token);
        let _: serde_json::Value = self.execute(request).await?;
        Ok(())
    }
}
