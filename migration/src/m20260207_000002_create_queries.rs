//! Migration to create the queries table

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Queries::Table)
                    .if_not_exists()
                    .col(pk_auto(Queries::Id))
                    .col(integer(Queries::EntrepreneurId).not_null())
                    .col(text(Queries::Question).not_null())
                    .col(integer_null(Queries::AdvisorId))
                    .col(text_null(Queries::Answer))
                    .col(string(Queries::Status).not_null())
                    .col(timestamp_with_time_zone(Queries::CreatedAt))
                    .col(timestamp_with_time_zone(Queries::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Index for the answered-by listing filter
        manager
            .create_index(
                Index::create()
                    .name("idx_queries_advisor_status")
                    .table(Queries::Table)
                    .col(Queries::AdvisorId)
                    .col(Queries::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Queries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Queries {
    Table,
    Id,
    EntrepreneurId,
    Question,
    AdvisorId,
    Answer,
    Status,
    CreatedAt,
    UpdatedAt,
}
