//! User entity representing an account record.

/// A stored user.
///
/// The id is assigned by the store at creation time and never changes
/// afterwards; the update path replaces only the name and email fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i64, first_name: String, last_name: String, email: String) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
        }
    }

    /// Full display name, first name first.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Full replacement of a user's mutable fields.
///
/// The id is not part of the update; it is taken from the request path and
/// cannot be changed.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(
            1,
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada@example.com".to_string(),
        );

        assert_eq!(user.id, 1);
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name, "Lovelace");
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn test_full_name() {
        let user = User::new(
            2,
            "Grace".to_string(),
            "Hopper".to_string(),
            "grace@example.com".to_string(),
        );

        assert_eq!(user.full_name(), "Grace Hopper");
    }

    #[test]
    fn test_new_user_creation() {
        let new_user = NewUser {
            first_name: "Alan".to_string(),
            last_name: "Turing".to_string(),
            email: "alan@example.com".to_string(),
        };

        assert_eq!(new_user.first_name, "Alan");
        assert_eq!(new_user.email, "alan@example.com");
    }
}
