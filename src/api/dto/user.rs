//! DTO for the user endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewUser, User, UserUpdate};

/// JSON shape of a user in requests and responses.
///
/// The same shape serves both directions. `id` is populated on responses;
/// on requests it is accepted but never trusted — create assigns a fresh id
/// and update takes the id from the request path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default)]
    pub id: Option<i64>,

    /// User first name, must not be empty.
    #[validate(length(min = 1, message = "User first name should not be null or empty"))]
    pub first_name: String,

    /// User last name, must not be empty.
    #[validate(length(min = 1, message = "User last name should not be null or empty"))]
    pub last_name: String,

    /// User email address, must be non-empty and syntactically valid.
    #[validate(length(min = 1, message = "User email should not be null or empty"))]
    #[validate(email(message = "Email address should be valid"))]
    pub email: String,
}

impl UserDto {
    /// Converts the request body into creation input, discarding any id.
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }

    /// Converts the request body into an update, discarding any id.
    pub fn into_update(self) -> UserUpdate {
        UserUpdate {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: Some(user.id),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}
