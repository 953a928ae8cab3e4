use std::fmt;

use serde::Serialize;

use crate::contact::{
    compose_email, screen, ContactPayload, OutboundEmail, Screening, ValidationError,
};

pub const RESEND_EMAILS_URL: &str = "https://api.resend.com/emails";
pub const DEFAULT_SENDER: &str = "Contact Form <onboarding@resend.dev>";

pub const API_KEY_VAR: &str = "RESEND_API_KEY";
pub const RECIPIENT_VAR: &str = "CONTACT_TO";
pub const SENDER_VAR: &str = "CONTACT_FROM";
pub const ENDPOINT_VAR: &str = "RESEND_API_URL";

#[derive(Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub api_key: String,
    pub recipient: String,
    pub sender: String,
    pub endpoint: String,
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &"<redacted>")
            .field("recipient", &self.recipient)
            .field("sender", &self.sender)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl RelayConfig {
    /// Builds the config from a key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let api_key = read(API_KEY_VAR);
        let recipient = read(RECIPIENT_VAR);
        let (api_key, recipient) = match (api_key, recipient) {
            (Some(api_key), Some(recipient)) => (api_key, recipient),
            (api_key, recipient) => {
                let mut missing = Vec::new();
                if api_key.is_none() {
                    missing.push(API_KEY_VAR);
                }
                if recipient.is_none() {
                    missing.push(RECIPIENT_VAR);
                }
                return Err(ConfigError { missing });
            }
        };
        Ok(Self {
            api_key,
            recipient,
            sender: read(SENDER_VAR).unwrap_or_else(|| DEFAULT_SENDER.to_string()),
            endpoint: read(ENDPOINT_VAR).unwrap_or_else(|| RESEND_EMAILS_URL.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub missing: Vec<&'static str>,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing required settings: {}", self.missing.join(", "))
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailerReply {
    pub status: u16,
    pub body: String,
}

impl MailerReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailerError(pub String);

impl fmt::Display for MailerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mail transport failed: {}", self.0)
    }
}

impl std::error::Error for MailerError {}

/// Outbound side of the relay: one authenticated POST of `email` to
/// `config.endpoint`.
#[allow(async_fn_in_trait)]
pub trait Mailer {
    async fn send(
        &self,
        config: &RelayConfig,
        email: &OutboundEmail,
    ) -> Result<MailerReply, MailerError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestMethod {
    Options,
    Post,
    Other(String),
}

impl RequestMethod {
    pub fn parse(method: &str) -> Self {
        if method.eq_ignore_ascii_case("OPTIONS") {
            RequestMethod::Options
        } else if method.eq_ignore_ascii_case("POST") {
            RequestMethod::Post
        } else {
            RequestMethod::Other(method.to_ascii_uppercase())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    Preflight,
    Delivered,
    SpamAbsorbed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    MethodNotAllowed(String),
    Validation(ValidationError),
    Configuration(ConfigError),
    Upstream { status: u16, body: String },
    Unexpected(String),
}

impl ContactError {
    pub fn status(&self) -> u16 {
        match self {
            ContactError::MethodNotAllowed(_) => 405,
            ContactError::Validation(_) => 400,
            ContactError::Configuration(_) => 500,
            ContactError::Upstream { .. } => 502,
            ContactError::Unexpected(_) => 500,
        }
    }

    /// Text safe to show the caller. Only validation failures say more than
    /// a generic apology.
    pub fn public_message(&self) -> String {
        match self {
            ContactError::MethodNotAllowed(_) => "Method not allowed".to_string(),
            ContactError::Validation(err) => err.to_string(),
            ContactError::Configuration(_) => {
                "Server configuration error. Please try again later.".to_string()
            }
            ContactError::Upstream { .. } => {
                "Failed to send email. Please try again later.".to_string()
            }
            ContactError::Unexpected(_) => {
                "Internal server error. Please try again later.".to_string()
            }
        }
    }
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::MethodNotAllowed(method) => write!(f, "method {method} not allowed"),
            ContactError::Validation(err) => write!(f, "validation failed: {err}"),
            ContactError::Configuration(err) => write!(f, "configuration error: {err}"),
            ContactError::Upstream { status, body } => {
                write!(f, "email provider returned {status}: {body}")
            }
            ContactError::Unexpected(detail) => write!(f, "unexpected failure: {detail}"),
        }
    }
}

impl std::error::Error for ContactError {}

impl From<ValidationError> for ContactError {
    fn from(err: ValidationError) -> Self {
        ContactError::Validation(err)
    }
}

impl From<ConfigError> for ContactError {
    fn from(err: ConfigError) -> Self {
        ContactError::Configuration(err)
    }
}

impl From<MailerError> for ContactError {
    fn from(err: MailerError) -> Self {
        ContactError::Unexpected(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReplyBody {
    Ok { ok: bool },
    Error { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReply {
    pub status: u16,
    pub body: Option<ReplyBody>,
}

impl RelayReply {
    pub fn from_result(result: &Result<RelayOutcome, ContactError>) -> Self {
        match result {
            Ok(RelayOutcome::Preflight) => Self {
                status: 204,
                body: None,
            },
            Ok(RelayOutcome::Delivered | RelayOutcome::SpamAbsorbed) => Self {
                status: 200,
                body: Some(ReplyBody::Ok { ok: true }),
            },
            Err(err) => Self {
                status: err.status(),
                body: Some(ReplyBody::Error {
                    error: err.public_message(),
                }),
            },
        }
    }
}

pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// Contact endpoint state for one invocation. A config error is kept rather
/// than raised so that it only fails requests that get as far as sending.
pub struct ContactRelay<M> {
    config: Result<RelayConfig, ConfigError>,
    mailer: M,
}

impl<M: Mailer> ContactRelay<M> {
    pub fn new(config: Result<RelayConfig, ConfigError>, mailer: M) -> Self {
        Self { config, mailer }
    }

    pub fn mailer(&self) -> &M {
        &self.mailer
    }

    pub async fn process(
        &self,
        method: &RequestMethod,
        body: &[u8],
    ) -> Result<RelayOutcome, ContactError> {
        match method {
            RequestMethod::Options => return Ok(RelayOutcome::Preflight),
            RequestMethod::Post => {}
            RequestMethod::Other(name) => return Err(ContactError::MethodNotAllowed(name.clone())),
        }
        let payload: ContactPayload = serde_json::from_slice(body)
            .map_err(|err| ContactError::Unexpected(format!("invalid request body: {err}")))?;
        let submission = match screen(&payload)? {
            Screening::Spam => return Ok(RelayOutcome::SpamAbsorbed),
            Screening::Accepted(submission) => submission,
        };
        let config = self.config.as_ref().map_err(|err| err.clone())?;
        let email = compose_email(&submission, &config.sender, &config.recipient);
        let reply = self.mailer.send(config, &email).await?;
        if !reply.is_success() {
            return Err(ContactError::Upstream {
                status: reply.status,
                body: reply.body,
            });
        }
        Ok(RelayOutcome::Delivered)
    }

    pub async fn respond(
        &self,
        method: &RequestMethod,
        body: &[u8],
    ) -> (Result<RelayOutcome, ContactError>, RelayReply) {
        let result = self.process(method, body).await;
        let reply = RelayReply::from_result(&result);
        (result, reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn config_defaults_sender_and_endpoint() {
        let config = RelayConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "re_123"),
            (RECIPIENT_VAR, " me@example.com "),
        ]))
        .expect("config");
        assert_eq!(config.recipient, "me@example.com");
        assert_eq!(config.sender, DEFAULT_SENDER);
        assert_eq!(config.endpoint, RESEND_EMAILS_URL);
    }

    #[test]
    fn config_reports_every_missing_key() {
        let err = RelayConfig::from_lookup(lookup(&[(API_KEY_VAR, "   ")])).unwrap_err();
        assert_eq!(err.missing, vec![API_KEY_VAR, RECIPIENT_VAR]);
    }

    #[test]
    fn debug_hides_api_key() {
        let config = RelayConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "re_secret"),
            (RECIPIENT_VAR, "me@example.com"),
        ]))
        .expect("config");
        assert!(!format!("{config:?}").contains("re_secret"));
    }

    #[test]
    fn method_parse_is_case_insensitive() {
        assert_eq!(RequestMethod::parse("post"), RequestMethod::Post);
        assert_eq!(RequestMethod::parse("OPTIONS"), RequestMethod::Options);
        assert_eq!(
            RequestMethod::parse("get"),
            RequestMethod::Other("GET".to_string())
        );
    }

    #[test]
    fn reply_bodies_serialize_as_flat_objects() {
        let ok = serde_json::to_string(&ReplyBody::Ok { ok: true }).expect("json");
        assert_eq!(ok, r#"{"ok":true}"#);
        let err = serde_json::to_string(&ReplyBody::Error {
            error: "nope".to_string(),
        })
        .expect("json");
        assert_eq!(err, r#"{"error":"nope"}"#);
    }
}
