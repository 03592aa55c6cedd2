pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20250305_090112_create_tokens_table;
mod m20250306_140327_create_movies_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20250305_090112_create_tokens_table::Migration),
            Box::new(m20250306_140327_create_movies_table::Migration),
        ]
    }
}
