//! Contact message status lifecycle and submission validation.

use std::fmt;
use std::str::FromStr;

use validator::ValidateEmail;

use crate::error::CoreError;

/// Lifecycle of an inbound contact message. Only the admin moves it forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
    Unread,
    Read,
    Replied,
}

/// Accepted wire values, in lifecycle order.
pub const VALID_CONTACT_STATUSES: &[&str] = &["unread", "read", "replied"];

impl ContactStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactStatus::Unread => "unread",
            ContactStatus::Read => "read",
            ContactStatus::Replied => "replied",
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unread" => Ok(ContactStatus::Unread),
            "read" => Ok(ContactStatus::Read),
            "replied" => Ok(ContactStatus::Replied),
            other => Err(CoreError::Validation(format!(
                "Invalid status '{other}'. Must be one of: {}",
                VALID_CONTACT_STATUSES.join(", ")
            ))),
        }
    }
}

/// Name of the first field whose value is missing or blank.
///
/// Fields are checked in the order given, so callers control which name is
/// reported when several are absent.
pub fn first_missing<'a>(fields: &[(&'a str, Option<&str>)]) -> Option<&'a str> {
    fields
        .iter()
        .find(|(_, value)| value.map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| *name)
}

/// Validate a public contact submission.
///
/// Required fields are checked in the order name, email, subject, message;
/// the first missing one is named in the error. A present email must also be
/// syntactically valid.
pub fn validate_submission(
    name: Option<&str>,
    email: Option<&str>,
    subject: Option<&str>,
    message: Option<&str>,
) -> Result<(), CoreError> {
    let fields = [
        ("name", name),
        ("email", email),
        ("subject", subject),
        ("message", message),
    ];
    if let Some(field) = first_missing(&fields) {
        return Err(CoreError::Validation(format!("{field} is required")));
    }

    if !email.is_some_and(|e| e.trim().validate_email()) {
        return Err(CoreError::Validation("email is not a valid address".into()));
    }

    Ok(())
}
