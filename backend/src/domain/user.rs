//! User account data model.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Stable user identifier assigned by the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a server-assigned identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors returned by [`Email::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailValidationError {
    /// Address is empty after trimming whitespace.
    #[error("email address must not be empty")]
    Empty,
    /// Address has surrounding whitespace.
    #[error("email address must not contain surrounding whitespace")]
    SurroundingWhitespace,
    /// Address is not of the form `local@domain`.
    #[error("email address must contain a local part and a domain")]
    MalformedAddress,
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // One local part, one @, one domain; no whitespace anywhere.
        let pattern = r"^[^@\s]+@[^@\s]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Email address used as the case-insensitive lookup key for user accounts.
///
/// ## Invariants
/// - Exactly one `@` separating a non-empty local part and domain.
/// - No surrounding or embedded whitespace.
///
/// The address is stored as entered; [`Email::normalized`] yields the
/// lowercased form every lookup and uniqueness check is performed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`] from owned input.
    pub fn new(address: impl Into<String>) -> Result<Self, EmailValidationError> {
        Self::from_owned(address.into())
    }

    fn from_owned(address: String) -> Result<Self, EmailValidationError> {
        if address.trim().is_empty() {
            return Err(EmailValidationError::Empty);
        }
        if address.trim() != address {
            return Err(EmailValidationError::SurroundingWhitespace);
        }
        if !email_regex().is_match(&address) {
            return Err(EmailValidationError::MalformedAddress);
        }
        Ok(Self(address))
    }

    /// Wrap an address loaded from the store, which validated it on write.
    pub(crate) fn from_stored(address: String) -> Self {
        Self(address)
    }

    /// Lowercased form used for lookups and uniqueness.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }

    /// Borrow the address as entered.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = EmailValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Persisted user account.
///
/// `password` is an opaque credential string owned by the authentication
/// tier; this layer stores and returns it without interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Case-insensitive unique lookup key.
    pub email: Email,
    /// Opaque credential string.
    pub password: String,
}

/// Attributes for a user account that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Case-insensitive unique lookup key.
    pub email: Email,
    /// Opaque credential string.
    pub password: String,
}

#[cfg(test)]
mod tests;
