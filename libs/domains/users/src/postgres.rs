use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, FromQueryResult, Statement};

use crate::error::{UserError, UserResult};
use crate::models::{User, UserFields};
use crate::repository::UserRepository;

/// PostgreSQL implementation of UserRepository using SeaORM raw statements.
///
/// Every value is bound as a positional parameter.
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Row shape of the `users` table
#[derive(Debug, FromQueryResult)]
struct UserRow {
    id: i32,
    first_name: String,
    surname: String,
    phone_number: String,
    email: String,
    is_active: bool,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            first_name: row.first_name,
            surname: row.surname,
            phone_number: row.phone_number,
            email: row.email,
            is_active: row.is_active,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct InsertedId {
    id: i32,
}

const SELECT_USERS: &str =
    "SELECT id, first_name, surname, phone_number, email, is_active FROM users";

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let stmt = Statement::from_string(DbBackend::Postgres, format!("{SELECT_USERS} ORDER BY id"));

        let rows = UserRow::find_by_statement(stmt).all(&self.db).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get(&self, id: i32) -> UserResult<User> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            format!("{SELECT_USERS} WHERE id = $1"),
            [id.into()],
        );

        UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await?
            .map(User::from)
            .ok_or(UserError::NotFound(id))
    }

    async fn create(&self, fields: UserFields) -> UserResult<i32> {
        let sql = r#"
            INSERT INTO users (first_name, surname, phone_number, email)
            VALUES ($1, $2, $3, $4)
            RETURNING id
        "#;

        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [
                fields.first_name.into(),
                fields.surname.into(),
                fields.phone_number.into(),
                fields.email.into(),
            ],
        );

        let row = InsertedId::find_by_statement(stmt)
            .one(&self.db)
            .await?
            .ok_or_else(|| UserError::Storage("INSERT returned no id".to_string()))?;

        tracing::info!(user_id = row.id, "Created user");
        Ok(row.id)
    }

    async fn update(&self, id: i32, fields: UserFields) -> UserResult<u64> {
        let sql = r#"
            UPDATE users
            SET first_name = $1, surname = $2, phone_number = $3, email = $4
            WHERE id = $5
        "#;

        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [
                fields.first_name.into(),
                fields.surname.into(),
                fields.phone_number.into(),
                fields.email.into(),
                id.into(),
            ],
        );

        let result = self.db.execute_raw(stmt).await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> UserResult<u64> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            "DELETE FROM users WHERE id = $1",
            [id.into()],
        );

        let result = self.db.execute_raw(stmt).await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::collections::BTreeMap;

    fn ada_row(id: i32) -> BTreeMap<&'static str, sea_orm::Value> {
        BTreeMap::from([
            ("id", id.into()),
            ("first_name", "Ada".into()),
            ("surname", "Lovelace".into()),
            ("phone_number", "555-0100".into()),
            ("email", "ada@example.com".into()),
            ("is_active", true.into()),
        ])
    }

    fn fields() -> UserFields {
        UserFields {
            first_name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            phone_number: "555-0100".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_maps_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![ada_row(7)]])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let user = repo.get(7).await.unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.surname, "Lovelace");
        assert!(user.is_active);
    }

    #[tokio::test]
    async fn test_get_without_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, sea_orm::Value>>::new()])
            .into_connection();
        let repo = PgUserRepository::new(db);

        assert!(matches!(repo.get(3).await, Err(UserError::NotFound(3))));
    }

    #[tokio::test]
    async fn test_create_returns_generated_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![BTreeMap::from([("id", sea_orm::Value::from(12))])]])
            .into_connection();
        let repo = PgUserRepository::new(db);

        assert_eq!(repo.create(fields()).await.unwrap(), 12);
    }

    #[tokio::test]
    async fn test_update_and_delete_return_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = PgUserRepository::new(db);

        assert_eq!(repo.update(1, fields()).await.unwrap(), 1);
        assert_eq!(repo.delete(1).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_query_failure_is_storage_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([sea_orm::DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = PgUserRepository::new(db);

        assert!(matches!(repo.list().await, Err(UserError::Storage(_))));
    }
}
