//! User account entity and its write models.

use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::{Identity, UserId, ValidationError};

/// A registered user as stored by a `UserRepository`.
///
/// `password_hash` is a PHC string; it never leaves the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

impl User {
    /// The identity sessions are issued for.
    pub fn identity(&self) -> Identity {
        Identity::new(self.email.clone())
    }
}

/// Validated input for creating a user, password still in clear text.
#[derive(Debug)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: SecretString,
}

impl NewUser {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: SecretString,
    ) -> Result<Self, ValidationError> {
        let user = Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password,
        };
        require("firstName", &user.first_name)?;
        require("lastName", &user.last_name)?;
        require("email", &user.email)?;
        require("password", user.password.expose_secret())?;
        Ok(user)
    }
}

/// A user row ready to insert: the password is already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

/// Replacement values for an existing user.
///
/// A blank or missing password keeps the stored hash.
#[derive(Debug)]
pub struct UserChanges {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: Option<SecretString>,
}

impl UserChanges {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: Option<SecretString>,
    ) -> Result<Self, ValidationError> {
        let changes = Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.filter(|p| !p.expose_secret().trim().is_empty()),
        };
        require("firstName", &changes.first_name)?;
        require("lastName", &changes.last_name)?;
        require("email", &changes.email)?;
        Ok(changes)
    }
}

fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(())
}
