use sea_orm_migration::prelude::*;

use crate::m20250304_105428_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tokens::Table)
                    .if_not_exists()
                    // SHA-256 hex digest of the plaintext; the plaintext itself is never stored
                    .col(
                        ColumnDef::new(Tokens::Hash)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tokens::UserId).uuid().not_null())
                    .col(ColumnDef::new(Tokens::Scope).string_len(32).not_null())
                    .col(
                        ColumnDef::new(Tokens::Expiry)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tokens_user_id")
                            .from(Tokens::Table, Tokens::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Revocation deletes by (user_id, scope)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tokens_user_id_scope")
                    .table(Tokens::Table)
                    .col(Tokens::UserId)
                    .col(Tokens::Scope)
                    .to_owned(),
            )
            .await?;

        // Periodic purge deletes by expiry
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tokens_expiry")
                    .table(Tokens::Table)
                    .col(Tokens::Expiry)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tokens::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tokens {
    Table,
    Hash,
    UserId,
    Scope,
    Expiry,
}
