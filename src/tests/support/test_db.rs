//! Throwaway SQLite database with the real schema applied.
use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Fresh in-memory database. One connection, so every query sees the same memory db.
pub async fn sqlite_memory() -> Arc<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("failed to open in-memory sqlite");
    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");

    Arc::new(db)
}
