//! Migration to create the advice table

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Advice::Table)
                    .if_not_exists()
                    .col(pk_auto(Advice::Id))
                    .col(integer(Advice::AdvisorId).not_null())
                    .col(string(Advice::Title).not_null())
                    .col(text(Advice::Content).not_null())
                    .col(string_null(Advice::Category))
                    .col(timestamp_with_time_zone(Advice::CreatedAt))
                    .col(timestamp_with_time_zone(Advice::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_advice_advisor")
                    .table(Advice::Table)
                    .col(Advice::AdvisorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Advice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Advice {
    Table,
    Id,
    AdvisorId,
    Title,
    Content,
    Category,
    CreatedAt,
    UpdatedAt,
}
