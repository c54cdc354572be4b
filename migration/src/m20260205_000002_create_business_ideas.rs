//! Migration to create the business_ideas table
//!
//! Idea status is engine-driven (see the connection lifecycle service);
//! migration only fixes the column, not the transition rules.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusinessIdeas::Table)
                    .if_not_exists()
                    .col(pk_auto(BusinessIdeas::Id))
                    .col(integer(BusinessIdeas::EntrepreneurId).not_null())
                    .col(string(BusinessIdeas::Title).not_null())
                    .col(string(BusinessIdeas::Category).not_null())
                    .col(text(BusinessIdeas::Description).not_null())
                    .col(double(BusinessIdeas::FundingRequired).not_null())
                    .col(string_null(BusinessIdeas::ExpectedRoi))
                    .col(string_null(BusinessIdeas::PitchDeckUrl))
                    .col(string(BusinessIdeas::Status).not_null())
                    .col(timestamp_with_time_zone(BusinessIdeas::CreatedAt))
                    .col(timestamp_with_time_zone(BusinessIdeas::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Index for listing an entrepreneur's own ideas
        manager
            .create_index(
                Index::create()
                    .name("idx_business_ideas_entrepreneur")
                    .table(BusinessIdeas::Table)
                    .col(BusinessIdeas::EntrepreneurId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BusinessIdeas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BusinessIdeas {
    Table,
    Id,
    EntrepreneurId,
    Title,
    Category,
    Description,
    FundingRequired,
    ExpectedRoi,
    PitchDeckUrl,
    Status,
    CreatedAt,
    UpdatedAt,
}
