//! User CRUD service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserUpdate};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for creating, reading, updating and deleting users.
///
/// Enforces the domain rules the store alone does not express: email
/// uniqueness is checked before every write, and missing ids are turned
/// into [`AppError::UserNotFound`].
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmailAlreadyExists`] if a user with the given
    /// email already exists. The check runs before the insert; the store's
    /// unique constraint remains as a backstop and maps to the same error.
    ///
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        if self
            .repository
            .find_by_email(&new_user.email)
            .await?
            .is_some()
        {
            return Err(AppError::EmailAlreadyExists(new_user.email));
        }

        let user = self.repository.insert(new_user).await?;
        tracing::info!(user_id = user.id, "User created");

        Ok(user)
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UserNotFound`] if no user has that id.
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn get_user_by_id(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::UserNotFound(id))
    }

    /// Returns all users. Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Replaces the mutable fields of an existing user.
    ///
    /// The id identifies the user and never changes; ids carried in request
    /// bodies are discarded before this point.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UserNotFound`] if no user has that id.
    /// Returns [`AppError::EmailAlreadyExists`] if the new email belongs to
    /// a different user.
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn update_user(&self, id: i64, update: UserUpdate) -> Result<User, AppError> {
        if let Some(owner) = self.repository.find_by_email(&update.email).await?
            && owner.id != id
        {
            return Err(AppError::EmailAlreadyExists(update.email));
        }

        let user = self
            .repository
            .update(id, update)
            .await?
            .ok_or(AppError::UserNotFound(id))?;
        tracing::info!(user_id = user.id, "User updated");

        Ok(user)
    }

    /// Deletes a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UserNotFound`] if no user has that id.
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(AppError::UserNotFound(id));
        }

        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Counts stored users. Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn count_users(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;

    fn create_test_user(id: i64, email: &str) -> User {
        User::new(
            id,
            "Ada".to_string(),
            "Lovelace".to_string(),
            email.to_string(),
        )
    }

    fn create_test_new_user(email: &str) -> NewUser {
        NewUser {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
        }
    }

    fn create_test_update(email: &str) -> UserUpdate {
        UserUpdate {
            first_name: "Augusta".to_string(),
            last_name: "King".to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_email()
            .withf(|email| email == "ada@example.com")
            .times(1)
            .returning(|_| Ok(None));

        let created = create_test_user(10, "ada@example.com");
        mock_repo
            .expect_insert()
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.create_user(create_test_new_user("ada@example.com")).await;

        assert!(result.is_ok());
        let user = result.unwrap();
        assert_eq!(user.id, 10);
        assert_eq!(user.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let mut mock_repo = MockUserRepository::new();

        let existing = create_test_user(3, "ada@example.com");
        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        mock_repo.expect_insert().times(0);

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.create_user(create_test_new_user("ada@example.com")).await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            AppError::EmailAlreadyExists(email) if email == "ada@example.com"
        ));
    }

    #[tokio::test]
    async fn test_get_user_by_id_found() {
        let mut mock_repo = MockUserRepository::new();

        let user = create_test_user(5, "ada@example.com");
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 5)
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.get_user_by_id(5).await;
        assert_eq!(result.unwrap().id, 5);
    }

    #[tokio::test]
    async fn test_get_user_by_id_not_found() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.get_user_by_id(42).await;

        assert!(matches!(result.unwrap_err(), AppError::UserNotFound(42)));
    }

    #[tokio::test]
    async fn test_update_user_success() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let updated = User::new(
            5,
            "Augusta".to_string(),
            "King".to_string(),
            "augusta@example.com".to_string(),
        );
        mock_repo
            .expect_update()
            .withf(|id, update| *id == 5 && update.first_name == "Augusta")
            .times(1)
            .returning(move |_, _| Ok(Some(updated.clone())));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.update_user(5, create_test_update("augusta@example.com")).await;

        assert!(result.is_ok());
        let user = result.unwrap();
        assert_eq!(user.id, 5);
        assert_eq!(user.first_name, "Augusta");
    }

    #[tokio::test]
    async fn test_update_user_keeps_own_email() {
        let mut mock_repo = MockUserRepository::new();

        // The email belongs to the user being updated, so it is not a conflict.
        let owner = create_test_user(5, "ada@example.com");
        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(owner.clone())));

        let updated = User::new(
            5,
            "Augusta".to_string(),
            "King".to_string(),
            "ada@example.com".to_string(),
        );
        mock_repo
            .expect_update()
            .times(1)
            .returning(move |_, _| Ok(Some(updated.clone())));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.update_user(5, create_test_update("ada@example.com")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_user_email_taken_by_other() {
        let mut mock_repo = MockUserRepository::new();

        let other = create_test_user(9, "taken@example.com");
        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(other.clone())));

        mock_repo.expect_update().times(0);

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.update_user(5, create_test_update("taken@example.com")).await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_update_user_not_found() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_update()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.update_user(404, create_test_update("new@example.com")).await;

        assert!(matches!(result.unwrap_err(), AppError::UserNotFound(404)));
    }

    #[tokio::test]
    async fn test_delete_user_success() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_delete()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|_| Ok(true));

        let service = UserService::new(Arc::new(mock_repo));

        assert!(service.delete_user(7).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.delete_user(7).await;

        assert!(matches!(result.unwrap_err(), AppError::UserNotFound(7)));
    }
}
