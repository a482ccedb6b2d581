use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserFields};

/// Storage gateway for users.
///
/// Implementations only execute statements and map rows; validation and the
/// meaning of zero affected rows are decided by the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, ordered by id
    async fn list(&self) -> UserResult<Vec<User>>;

    /// A single user, or `NotFound`
    async fn get(&self, id: i32) -> UserResult<User>;

    /// Insert a user and return the generated id
    async fn create(&self, fields: UserFields) -> UserResult<i32>;

    /// Replace the four text fields; returns affected rows
    async fn update(&self, id: i32, fields: UserFields) -> UserResult<u64>;

    /// Hard delete; returns affected rows
    async fn delete(&self, id: i32) -> UserResult<u64>;
}

#[derive(Debug, Default)]
struct Store {
    users: BTreeMap<i32, User>,
    last_id: i32,
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// Ids start at 1 and are never reused, like a `SERIAL` column.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> UserResult<User> {
        let store = self.store.read().await;
        store.users.get(&id).cloned().ok_or(UserError::NotFound(id))
    }

    async fn create(&self, fields: UserFields) -> UserResult<i32> {
        let mut store = self.store.write().await;
        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| UserError::Storage("user id sequence exhausted".to_string()))?;
        store.last_id = id;
        store.users.insert(id, User::new(id, fields));

        tracing::info!(user_id = id, "Created user");
        Ok(id)
    }

    async fn update(&self, id: i32, fields: UserFields) -> UserResult<u64> {
        let mut store = self.store.write().await;
        match store.users.get_mut(&id) {
            Some(user) => {
                user.apply(fields);
                tracing::info!(user_id = id, "Updated user");
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> UserResult<u64> {
        let mut store = self.store.write().await;
        if store.users.remove(&id).is_some() {
            tracing::info!(user_id = id, "Deleted user");
            Ok(1)
        } else {
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(first_name: &str) -> UserFields {
        UserFields {
            first_name: first_name.to_string(),
            surname: "Lovelace".to_string(),
            phone_number: "555-0100".to_string(),
            email: format!("{}@example.com", first_name.to_lowercase()),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryUserRepository::new();

        let id = repo.create(fields("Ada")).await.unwrap();
        let user = repo.get(id).await.unwrap();

        assert_eq!(id, 1);
        assert_eq!(user.first_name, "Ada");
        assert!(user.is_active);
    }

    #[tokio::test]
    async fn test_create_fails_when_ids_exhausted() {
        let repo = InMemoryUserRepository {
            store: Arc::new(RwLock::new(Store {
                users: BTreeMap::new(),
                last_id: i32::MAX - 1,
            })),
        };

        assert_eq!(repo.create(fields("Ada")).await.unwrap(), i32::MAX);
        assert!(matches!(
            repo.create(fields("Grace")).await,
            Err(UserError::Storage(_))
        ));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let repo = InMemoryUserRepository::new();
        assert!(matches!(repo.get(5).await, Err(UserError::NotFound(5))));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.list().await.unwrap().is_empty());

        for name in ["Ada", "Grace", "Edsger"] {
            repo.create(fields(name)).await.unwrap();
        }

        let ids: Vec<i32> = repo.list().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_update_reports_affected_rows() {
        let repo = InMemoryUserRepository::new();
        let id = repo.create(fields("Ada")).await.unwrap();

        assert_eq!(repo.update(id, fields("Grace")).await.unwrap(), 1);
        assert_eq!(repo.update(99, fields("Grace")).await.unwrap(), 0);
        assert_eq!(repo.get(id).await.unwrap().first_name, "Grace");
    }

    #[tokio::test]
    async fn test_delete_reports_affected_rows_and_ids_not_reused() {
        let repo = InMemoryUserRepository::new();
        let id = repo.create(fields("Ada")).await.unwrap();

        assert_eq!(repo.delete(id).await.unwrap(), 1);
        assert_eq!(repo.delete(id).await.unwrap(), 0);

        let next = repo.create(fields("Grace")).await.unwrap();
        assert_eq!(next, id + 1);
    }
}
