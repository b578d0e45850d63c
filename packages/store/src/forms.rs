//! # Form failures
//!
//! The backend reports problems as `{"error": …}` where the value is either an
//! object keyed by field name (`{"email": "must be provided"}`) or a bare
//! string (`"invalid authentication credentials"`). [`FormFailure`] is the typed
//! form of both shapes; forms render field entries inline and the general
//! message as a banner.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";

/// Fallback when a success status carries no usable body.
pub const SOMETHING_WENT_WRONG: &str = "something went wrong";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormFailure {
    Fields(BTreeMap<String, String>),
    General(String),
}

/// The `{"error": …}` envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: FormFailure,
}

impl FormFailure {
    pub fn field(name: &str, message: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(name.to_string(), message.into());
        FormFailure::Fields(fields)
    }

    pub fn general(message: impl Into<String>) -> Self {
        FormFailure::General(message.into())
    }

    /// Message for one form field, if that field failed.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        match self {
            FormFailure::Fields(fields) => fields.get(field).map(String::as_str),
            FormFailure::General(_) => None,
        }
    }

    /// Message for the banner.
    ///
    /// Field errors on keys the form has no input for (`known_fields`) are
    /// surfaced here too, so nothing the server says is lost.
    pub fn general_message(&self, known_fields: &[&str]) -> Option<String> {
        match self {
            FormFailure::General(msg) => Some(msg.clone()),
            FormFailure::Fields(fields) => {
                let stray: Vec<String> = fields
                    .iter()
                    .filter(|(k, _)| !known_fields.contains(&k.as_str()))
                    .map(|(k, v)| format!("{k} {v}"))
                    .collect();
                (!stray.is_empty()).then(|| stray.join("; "))
            }
        }
    }

    /// Parse an error body, if it has the `{"error": …}` shape.
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .map(|env| env.error)
    }
}

impl std::fmt::Display for FormFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormFailure::General(msg) => write!(f, "{msg}"),
            FormFailure::Fields(fields) => {
                let parts: Vec<String> =
                    fields.iter().map(|(k, v)| format!("{k}: {v}")).collect();
                write!(f, "{}", parts.join(", "))
            }
        }
    }
}

/// Client-side check run before a credentials form hits the network.
pub fn require_filled(fields: &[(&str, &str)]) -> Result<(), FormFailure> {
    let missing: BTreeMap<String, String> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| (name.to_string(), "must be provided".to_string()))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(FormFailure::Fields(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN_FIELDS: &[&str] = &[FIELD_EMAIL, FIELD_PASSWORD];

    #[test]
    fn test_field_error_targets_only_that_field() {
        let failure =
            FormFailure::from_body(r#"{"error": {"email": "must be a valid email address"}}"#)
                .unwrap();

        assert_eq!(
            failure.message_for(FIELD_EMAIL),
            Some("must be a valid email address")
        );
        assert_eq!(failure.message_for(FIELD_PASSWORD), None);
        assert_eq!(failure.general_message(LOGIN_FIELDS), None);
    }

    #[test]
    fn test_string_error_is_general() {
        let failure =
            FormFailure::from_body(r#"{"error": "invalid authentication credentials"}"#).unwrap();

        assert_eq!(failure.message_for(FIELD_EMAIL), None);
        assert_eq!(
            failure.general_message(LOGIN_FIELDS).as_deref(),
            Some("invalid authentication credentials")
        );
    }

    #[test]
    fn test_unknown_field_goes_to_banner() {
        let failure = FormFailure::from_body(r#"{"error": {"name": "must be provided"}}"#).unwrap();
        assert_eq!(
            failure.general_message(LOGIN_FIELDS).as_deref(),
            Some("name must be provided")
        );
    }

    #[test]
    fn test_non_error_body() {
        assert!(FormFailure::from_body(r#"{"user": {}}"#).is_none());
        assert!(FormFailure::from_body("<html>").is_none());
    }

    #[test]
    fn test_require_filled() {
        assert!(require_filled(&[(FIELD_EMAIL, "a@b.c"), (FIELD_PASSWORD, "x")]).is_ok());

        let failure = require_filled(&[(FIELD_EMAIL, " "), (FIELD_PASSWORD, "x")]).unwrap_err();
        assert_eq!(failure.message_for(FIELD_EMAIL), Some("must be provided"));
        assert_eq!(failure.message_for(FIELD_PASSWORD), None);
    }
}
