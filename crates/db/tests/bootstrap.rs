use sqlx::PgPool;

/// Full bootstrap: connect, migrate, verify schema and seed data.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    doconboard_db::health_check(&pool).await.unwrap();

    let tables = [
        "departments",
        "doctors",
        "doctor_mobile_numbers",
        "qualifications",
        "specializations",
        "addresses",
        "appointment_settings",
        "schedules",
        "doctor_departments",
    ];

    for table in tables {
        sqlx::query(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
    }

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM departments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(count.0 > 0, "departments should have seed data, got 0 rows");
}

/// Running the embedded migrator against an already-migrated database is a no-op.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_run_migrations_is_idempotent(pool: PgPool) {
    doconboard_db::run_migrations(&pool).await.unwrap();
}
