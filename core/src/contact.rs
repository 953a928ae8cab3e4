use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// Lengths are in UTF-16 code units, the unit browsers report for form values.
pub const NAME_MIN_LEN: usize = 2;
pub const MESSAGE_MIN_LEN: usize = 10;
pub const MESSAGE_MAX_LEN: usize = 5000;

pub const FORM_NAME: &str = "contact";
pub const FORM_NAME_FIELD: &str = "form-name";
pub const HONEYPOT_FIELD: &str = "website";

// `\s` is Unicode-aware here; U+FEFF is added to match browser whitespace.
const EMAIL_PATTERN: &str = r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$";

/// Raw JSON body accepted by the relay. Every field is optional so that a
/// missing field is a validation failure rather than a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub bot_field: Option<String>,
}

/// A submission that passed every field rule. Values are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screening {
    Spam,
    Accepted(Submission),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingFields,
    NameTooShort,
    MessageTooShort,
    MessageTooLong,
    InvalidEmail,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields => f.write_str(
                "Missing required fields. Please fill in your name, email, and message.",
            ),
            ValidationError::NameTooShort => write!(
                f,
                "Please enter a valid name (at least {NAME_MIN_LEN} characters)."
            ),
            ValidationError::MessageTooShort => write!(
                f,
                "Please enter a longer message (at least {MESSAGE_MIN_LEN} characters)."
            ),
            ValidationError::MessageTooLong => write!(
                f,
                "Message is too long. Please keep it under {MESSAGE_MAX_LEN} characters."
            ),
            ValidationError::InvalidEmail => f.write_str("Please enter a valid email address."),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FullName,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [
        ContactField::FullName,
        ContactField::Email,
        ContactField::Message,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ContactField::FullName => "fullName",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

pub fn is_honeypot_filled(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.trim().is_empty())
}

fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Applies the rule for a single field to an already trimmed value.
pub fn validate_field(field: ContactField, value: &str) -> Result<(), ValidationError> {
    let len = utf16_len(value);
    match field {
        ContactField::FullName => {
            if len < NAME_MIN_LEN {
                return Err(ValidationError::NameTooShort);
            }
        }
        ContactField::Message => {
            if len < MESSAGE_MIN_LEN {
                return Err(ValidationError::MessageTooShort);
            }
            if len > MESSAGE_MAX_LEN {
                return Err(ValidationError::MessageTooLong);
            }
        }
        ContactField::Email => {
            if !is_valid_email(value) {
                return Err(ValidationError::InvalidEmail);
            }
        }
    }
    Ok(())
}

fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// Screens a raw payload. The honeypot is checked before any field rule so a
/// bot never learns which rule it tripped.
pub fn screen(payload: &ContactPayload) -> Result<Screening, ValidationError> {
    if is_honeypot_filled(payload.bot_field.as_deref()) {
        return Ok(Screening::Spam);
    }
    let (Some(name), Some(email), Some(message)) = (
        required(&payload.full_name),
        required(&payload.email),
        required(&payload.message),
    ) else {
        return Err(ValidationError::MissingFields);
    };
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();
    validate_field(ContactField::FullName, name)?;
    validate_field(ContactField::Message, message)?;
    validate_field(ContactField::Email, email)?;
    Ok(Screening::Accepted(Submission {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    }))
}

/// Body of the provider's send-email call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
}

pub fn email_subject(submission: &Submission) -> String {
    format!("New message from {}", submission.name)
}

pub fn email_text(submission: &Submission) -> String {
    format!(
        "You have received a new message from your portfolio website:\n\
         \n\
         Name: {}\n\
         Email: {}\n\
         \n\
         Message:\n\
         {}\n\
         \n\
         ---\n\
         This message was sent from your portfolio contact form.",
        submission.name, submission.email, submission.message
    )
}

pub fn compose_email(submission: &Submission, from: &str, to: &str) -> OutboundEmail {
    OutboundEmail {
        from: from.to_string(),
        to: to.to_string(),
        reply_to: submission.email.clone(),
        subject: email_subject(submission),
        text: email_text(submission),
    }
}

/// Field values held by the client form, untrimmed as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub message: String,
    pub website: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::FullName => &self.full_name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::FullName => &mut self.full_name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn check(&self, field: ContactField) -> Result<(), ValidationError> {
        validate_field(field, self.value(field).trim())
    }

    /// Every failing field with its error, in form order. The honeypot is
    /// never validated.
    pub fn errors(&self) -> Vec<(ContactField, ValidationError)> {
        ContactField::ALL
            .iter()
            .filter_map(|field| self.check(*field).err().map(|err| (*field, err)))
            .collect()
    }

    pub fn is_spam(&self) -> bool {
        is_honeypot_filled(Some(&self.website))
    }

    /// URL-encoded body for the form host. The honeypot value is sent as is.
    pub fn encode_for_host(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair(FORM_NAME_FIELD, FORM_NAME)
            .append_pair(ContactField::FullName.name(), self.full_name.trim())
            .append_pair(ContactField::Email.name(), self.email.trim())
            .append_pair(ContactField::Message.name(), self.message.trim())
            .append_pair(HONEYPOT_FIELD, &self.website)
            .finish()
    }
}
