//! HTTP DTOs for user endpoints.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;
use crate::domain::user::User;

/// Body of `POST /user` and `PUT /user/:id`.
///
/// On update a missing or blank password keeps the current one.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: Option<SecretString>,
}

/// A user as shown to clients. The password hash is not part of it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_never_serializes_hash() {
        let user = User {
            id: UserId::new(3),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password_hash: "$argon2id$v=19$secret".into(),
        };

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com"
            })
        );
    }
}
