//! Repository trait for user data access.

use crate::domain::entities::{NewUser, User, UserUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing users.
///
/// Provides CRUD operations against the backing store. Domain rules such as
/// email uniqueness live in [`crate::application::services::UserService`];
/// implementations only report what the store did.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmailAlreadyExists`] if the store's uniqueness
    /// constraint on email is violated.
    /// Returns [`AppError::Database`] on other database errors.
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Finds a user by email address.
    ///
    /// Used by the service to enforce email uniqueness before writing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Lists all users. Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Replaces the mutable fields of the user with the given id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` with the updated record
    /// - `Ok(None)` if no user has that id
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmailAlreadyExists`] if the new email collides
    /// with another user. Returns [`AppError::Database`] on other errors.
    async fn update(&self, id: i64, update: UserUpdate) -> Result<Option<User>, AppError>;

    /// Deletes the user with the given id.
    ///
    /// Returns `Ok(true)` if a user was removed, `Ok(false)` if none existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts stored users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
