//! PgUserRepository against a real PostgreSQL container
//!
//! Run with `cargo test -p domain_users -- --ignored` when Docker is available.

use domain_users::*;
use sea_orm::ConnectionTrait;
use test_utils::{TestDataBuilder, TestDatabase};

fn fields(builder: &TestDataBuilder, suffix: &str) -> UserFields {
    UserFields {
        first_name: builder.name("first", suffix),
        surname: builder.name("surname", suffix),
        phone_number: builder.phone_number(),
        email: builder.email(suffix),
    }
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_create_get_list_roundtrip() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_create_get");

    assert!(repo.list().await.unwrap().is_empty());

    let first = repo.create(fields(&builder, "a")).await.unwrap();
    let second = repo.create(fields(&builder, "b")).await.unwrap();
    assert!(second > first);

    let user = repo.get(first).await.unwrap();
    assert_eq!(user.email, builder.email("a"));
    assert!(user.is_active, "is_active defaults to TRUE in the store");

    let ids: Vec<i32> = repo.list().await.unwrap().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first, second]);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_update_and_delete_rows_affected() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_update_delete");

    let id = repo.create(fields(&builder, "a")).await.unwrap();

    assert_eq!(repo.update(id, fields(&builder, "b")).await.unwrap(), 1);
    assert_eq!(repo.get(id).await.unwrap().email, builder.email("b"));
    assert_eq!(repo.update(id + 100, fields(&builder, "c")).await.unwrap(), 0);

    assert_eq!(repo.delete(id).await.unwrap(), 1);
    assert_eq!(repo.delete(id).await.unwrap(), 0);
    assert!(matches!(repo.get(id).await, Err(UserError::NotFound(_))));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_ids_restart_after_truncate() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_truncate");

    repo.create(fields(&builder, "a")).await.unwrap();
    repo.create(fields(&builder, "b")).await.unwrap();

    db.truncate_users().await;
    assert!(repo.list().await.unwrap().is_empty());
    assert_eq!(repo.create(fields(&builder, "c")).await.unwrap(), 1);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_values_are_bound_not_interpolated() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());

    let hostile = UserFields {
        first_name: "Robert'); DROP TABLE users; --".to_string(),
        surname: "Tables".to_string(),
        phone_number: "555-0000".to_string(),
        email: "bobby@example.com".to_string(),
    };

    let id = repo.create(hostile.clone()).await.unwrap();
    assert_eq!(repo.get(id).await.unwrap().first_name, hostile.first_name);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_missing_table_is_storage_error() {
    let db = TestDatabase::new().await;
    db.connection
        .execute_unprepared("DROP TABLE users")
        .await
        .unwrap();
    let repo = PgUserRepository::new(db.connection());

    assert!(matches!(repo.list().await, Err(UserError::Storage(_))));
}
