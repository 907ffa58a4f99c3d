//! Contact form state.
//!
//! There is no backend endpoint: a valid submission is logged and the form
//! is cleared.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input fields of the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Phone,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Phone,
        Self::Email,
        Self::Subject,
        Self::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Phone => "Phone Number",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Utkarsh Gupta",
            Self::Phone => "+91 1234567890",
            Self::Email => "example@email.com",
            Self::Subject => "What is this about?",
            Self::Message => "Type your message here...",
        }
    }

    /// Whether the input carries the `required` attribute.
    pub fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::Message)
    }

    /// HTML input type.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Phone => "tel",
            Self::Email => "email",
            Self::Name | Self::Subject | Self::Message => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{} is required", .0.label())]
    Required(ContactField),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

impl ContactError {
    pub fn field(&self) -> ContactField {
        match self {
            Self::Required(field) => *field,
            Self::InvalidEmail(_) => ContactField::Email,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Phone => &mut self.phone,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Checks required fields in display order, then the email shape.
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = ContactField::ALL
            .into_iter()
            .find(|f| f.is_required() && self.get(*f).trim().is_empty())
        {
            return Err(ContactError::Required(field));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }

    /// Validates, logs the submission and clears the form. Returns the
    /// submitted values.
    pub fn submit(&mut self) -> Result<ContactForm, ContactError> {
        self.validate()?;
        let submitted = std::mem::take(self);
        tracing::info!(
            name = %submitted.name,
            email = %submitted.email,
            subject = %submitted.subject,
            message_len = submitted.message.len(),
            "contact form submitted"
        );
        Ok(submitted)
    }
}

/// `local@domain` with a dot somewhere in the domain, like the browser's
/// `type="email"` check without the full grammar.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain.split('.').all(|part| !part.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            phone: String::new(),
            email: "ada@example.com".into(),
            subject: String::new(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn test_required_fields() {
        assert!(filled().validate().is_ok());

        let mut form = filled();
        form.name = "  ".into();
        assert_eq!(form.validate(), Err(ContactError::Required(ContactField::Name)));

        let mut form = filled();
        form.message.clear();
        assert_eq!(form.validate(), Err(ContactError::Required(ContactField::Message)));
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("a@b"));
        assert!(looks_like_email("a.b@c.dev"));
        assert!(!looks_like_email("a@"));
        assert!(!looks_like_email("@b.com"));
        assert!(!looks_like_email("a@b@c"));
        assert!(!looks_like_email("a b@c.com"));
        assert!(!looks_like_email("a@b..com"));

        let mut form = filled();
        form.email = "nope".into();
        let err = form.validate().unwrap_err();
        assert_eq!(err.field(), ContactField::Email);
    }

    #[test]
    fn test_submit_resets_form() {
        let mut form = filled();
        form.set(ContactField::Subject, "Hi");
        let sent = form.submit().unwrap();
        assert_eq!(sent.subject, "Hi");
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_failed_submit_keeps_input() {
        let mut form = filled();
        form.email = "broken".into();
        let before = form.clone();
        assert!(form.submit().is_err());
        assert_eq!(form, before);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::Required(ContactField::Email).to_string(),
            "Email is required"
        );
    }
}
