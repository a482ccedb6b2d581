use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUserPayload, UpdateUserPayload, User, UserFields};
use crate::repository::UserRepository;
use crate::validator::{require_id, validate_required};

/// Service layer for User operations
///
/// Runs the presence checks before touching storage and decides what zero
/// affected rows means for each operation.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    pub async fn get_user(&self, id: i32) -> UserResult<User> {
        self.repository.get(id).await
    }

    /// Create a user from a decoded body.
    pub async fn create_user(&self, payload: CreateUserPayload) -> UserResult<i32> {
        let fields = UserFields::from(payload);
        validate_required(&fields)?;

        self.repository.create(fields).await
    }

    /// Replace the text fields of the user named by `payload.id`.
    ///
    /// Fails with `NotFound` when no row matched.
    pub async fn update_user(&self, payload: UpdateUserPayload) -> UserResult<()> {
        let id = require_id(&payload)?;
        let fields = UserFields::from(payload);
        validate_required(&fields)?;

        match self.repository.update(id, fields).await? {
            0 => Err(UserError::NotFound(id)),
            _ => Ok(()),
        }
    }

    /// Delete a user. Deleting an id that does not exist succeeds.
    pub async fn delete_user(&self, id: i32) -> UserResult<()> {
        let deleted = self.repository.delete(id).await?;

        if deleted == 0 {
            tracing::debug!(user_id = id, "Delete matched no user");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use mockall::predicate::eq;

    fn new_user() -> CreateUserPayload {
        CreateUserPayload {
            first_name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            phone_number: "555-0100".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    fn payload(id: Option<i32>) -> UpdateUserPayload {
        UpdateUserPayload {
            id,
            first_name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            phone_number: "555-0100".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_validates_before_storage() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_create().never();

        let service = UserService::new(mock_repo);
        let mut input = new_user();
        input.email.clear();

        let result = service.create_user(input).await;
        assert!(matches!(result, Err(UserError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_returns_generated_id() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_create()
            .withf(|fields| fields.first_name == "Ada" && fields.email == "ada@example.com")
            .times(1)
            .returning(|_| Ok(41));

        let service = UserService::new(mock_repo);
        assert_eq!(service.create_user(new_user()).await.unwrap(), 41);
    }

    #[tokio::test]
    async fn test_update_requires_id() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_update().never();

        let service = UserService::new(mock_repo);
        let result = service.update_user(payload(None)).await;
        assert!(matches!(result, Err(UserError::Validation(msg)) if msg.contains("id")));
    }

    #[tokio::test]
    async fn test_update_missing_field_does_not_touch_storage() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_update().never();

        let service = UserService::new(mock_repo);
        let mut input = payload(Some(1));
        input.surname.clear();

        assert!(matches!(
            service.update_user(input).await,
            Err(UserError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_update_zero_rows_is_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_update()
            .with(eq(9), mockall::predicate::always())
            .returning(|_, _| Ok(0));

        let service = UserService::new(mock_repo);
        assert!(matches!(
            service.update_user(payload(Some(9))).await,
            Err(UserError::NotFound(9))
        ));
    }

    #[tokio::test]
    async fn test_update_one_row_succeeds() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_update().returning(|_, _| Ok(1));

        let service = UserService::new(mock_repo);
        assert!(service.update_user(payload(Some(2))).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_delete()
            .with(eq(3))
            .times(2)
            .returning({
                let mut calls = 0;
                move |_| {
                    calls += 1;
                    Ok(if calls == 1 { 1 } else { 0 })
                }
            });

        let service = UserService::new(mock_repo);
        assert!(service.delete_user(3).await.is_ok());
        assert!(service.delete_user(3).await.is_ok());
    }

    #[tokio::test]
    async fn test_storage_errors_propagate() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_list()
            .returning(|| Err(UserError::Storage("pool timed out".to_string())));

        let service = UserService::new(mock_repo);
        assert!(matches!(
            service.list_users().await,
            Err(UserError::Storage(_))
        ));
    }
}
