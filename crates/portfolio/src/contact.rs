//! Contact form validation and submission.

use crate::config::ContactConfig;
use gloo::net::http::Request;
use itertools::Itertools as _;
use serde::Serialize;
use std::fmt;

const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

/// Every problem found in one pass over the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    #[must_use]
    pub fn for_field(&self, field: ContactField) -> Option<&'static str> {
        self.0
            .iter()
            .find(|err| err.field == field)
            .map(|err| err.message)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().map(|err| err.message).format("; "))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    Invalid(FieldErrors),
    #[error("could not send the message: {0}")]
    Transport(#[from] gloo::net::Error),
    #[error("contact endpoint answered with status {0}")]
    Status(u16),
}

/// Raw input as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A form that passed validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// `local@domain.tld`: one `@`, no whitespace, a dot inside the domain.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty()
        && !host.is_empty()
        && !tld.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        let mut errors = Vec::new();
        let mut check = |ok: bool, field, message| {
            if !ok {
                errors.push(FieldError { field, message });
            }
        };
        let name = self.name.trim();
        let email = self.email.trim();
        let subject = self.subject.trim();
        let message = self.message.trim();
        check(!name.is_empty(), ContactField::Name, "Name is required");
        check(
            is_valid_email(email),
            ContactField::Email,
            "Invalid email address",
        );
        check(
            !subject.is_empty(),
            ContactField::Subject,
            "Subject is required",
        );
        check(
            message.chars().count() >= MIN_MESSAGE_CHARS,
            ContactField::Message,
            "Message must be at least 10 characters",
        );
        if !errors.is_empty() {
            return Err(ContactError::Invalid(FieldErrors(errors)));
        }
        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }
}

impl ContactMessage {
    /// Plain-text body of the email sent to the site owner.
    #[must_use]
    pub fn email_text(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nSubject: {}\n\nMessage:\n{}\n",
            self.name, self.email, self.subject, self.message
        )
    }
}

#[derive(Debug, Serialize)]
struct Outgoing<'a> {
    from: &'a str,
    to: &'a [String],
    reply_to: &'a str,
    subject: &'a str,
    text: String,
}

/// Posts the message to the configured endpoint as JSON.
pub async fn submit(config: &ContactConfig, message: &ContactMessage) -> Result<(), ContactError> {
    let outgoing = Outgoing {
        from: &config.from,
        to: &config.to,
        reply_to: &message.email,
        subject: &message.subject,
        text: message.email_text(),
    };
    let response = Request::post(&config.endpoint)
        .json(&outgoing)?
        .send()
        .await?;
    if !response.ok() {
        return Err(ContactError::Status(response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "I enjoyed the blog post.".to_string(),
        }
    }

    #[rstest]
    #[case("ada@example.com", true)]
    #[case("a.b+c@sub.example.io", true)]
    #[case("ada@example", false)]
    #[case("@example.com", false)]
    #[case("ada@.com", false)]
    #[case("ada@example.", false)]
    #[case("a da@example.com", false)]
    #[case("ada@@example.com", false)]
    #[case("", false)]
    fn emails(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(expected, is_valid_email(email));
    }

    #[test]
    fn valid_form_is_trimmed() {
        let message = ContactForm {
            name: "  Ada ".to_string(),
            ..form()
        }
        .validate()
        .unwrap();
        assert_eq!("Ada", message.name);
    }

    #[test]
    fn all_field_errors_are_reported() {
        let err = ContactForm {
            name: " ".to_string(),
            email: "nope".to_string(),
            subject: String::new(),
            message: "short".to_string(),
        }
        .validate()
        .unwrap_err();
        let errors = assert_matches!(err, ContactError::Invalid(errors) => errors);
        assert_eq!(Some("Name is required"), errors.for_field(ContactField::Name));
        assert_eq!(
            Some("Invalid email address"),
            errors.for_field(ContactField::Email)
        );
        assert_eq!(
            Some("Subject is required"),
            errors.for_field(ContactField::Subject)
        );
        assert_eq!(
            Some("Message must be at least 10 characters"),
            errors.for_field(ContactField::Message)
        );
    }

    #[test]
    fn message_length_counts_characters() {
        let ok = ContactForm {
            message: "éééééééééé".to_string(),
            ..form()
        };
        assert!(ok.validate().is_ok());
        let short = ContactForm {
            message: "123456789".to_string(),
            ..form()
        };
        let err = short.validate().unwrap_err();
        assert_eq!("Message must be at least 10 characters", err.to_string());
    }

    #[test]
    fn email_text_layout() {
        let message = form().validate().unwrap();
        assert_eq!(
            "Name: Ada\nEmail: ada@example.com\nSubject: Hello\n\nMessage:\nI enjoyed the blog post.\n",
            message.email_text()
        );
    }
}
