//! Contact form validation and simulated submission.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ValidationError;

/// Confirmation shown after a successful (simulated) send.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Contact form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    /// Form input id.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Raw contact form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub message: &'static str,
    /// The form after submission; always reset to blank.
    pub form: ContactForm,
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Whether `email` looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    !email.trim().is_empty() && email_regex().is_match(email)
}

impl ContactForm {
    /// Check every field; all rejected fields are reported together.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut fields = Vec::new();
        if self.name.trim().is_empty() {
            fields.push(FormField::Name);
        }
        if !is_valid_email(&self.email) {
            fields.push(FormField::Email);
        }
        if self.message.trim().is_empty() {
            fields.push(FormField::Message);
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { fields })
        }
    }

    /// Validate and "send". Nothing leaves the process.
    pub fn submit(&self) -> Result<Submission, ValidationError> {
        if let Err(err) = self.validate() {
            tracing::warn!(fields = ?err.fields, "contact form rejected");
            return Err(err);
        }
        tracing::info!(
            name = %self.name.trim(),
            email = %self.email.trim(),
            "contact form accepted (simulated send)"
        );
        Ok(Submission {
            message: SUCCESS_MESSAGE,
            form: ContactForm::default(),
        })
    }
}
