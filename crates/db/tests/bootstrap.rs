use sqlx::SqlitePool;

/// Connect, migrate, verify the table is usable.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: SqlitePool) {
    todo_db::health_check(&pool).await.unwrap();

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todo_items")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

/// Running the migrator a second time is a no-op.
#[sqlx::test(migrations = "./migrations")]
async fn test_migrations_are_idempotent(pool: SqlitePool) {
    todo_db::run_migrations(&pool).await.unwrap();
    todo_db::health_check(&pool).await.unwrap();
}

/// The table rejects blank titles even when inserted directly.
#[sqlx::test(migrations = "./migrations")]
async fn test_blank_title_violates_check_constraint(pool: SqlitePool) {
    let err = sqlx::query("INSERT INTO todo_items (title) VALUES ('')")
        .execute(&pool)
        .await
        .unwrap_err();

    let db_err = err.as_database_error().expect("expected a database error");
    assert!(db_err.is_check_violation(), "got: {db_err}");
}
