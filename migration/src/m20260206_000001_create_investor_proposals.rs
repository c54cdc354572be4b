//! Migration to create the investor_proposals table

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InvestorProposals::Table)
                    .if_not_exists()
                    .col(pk_auto(InvestorProposals::Id))
                    .col(integer(InvestorProposals::InvestorId).not_null())
                    .col(json(InvestorProposals::SectorsOfInterest).not_null())
                    .col(double(InvestorProposals::InvestmentMin).not_null())
                    .col(double(InvestorProposals::InvestmentMax).not_null())
                    .col(string_null(InvestorProposals::ExpectedRoi))
                    .col(string_null(InvestorProposals::InvestmentHorizon))
                    .col(text_null(InvestorProposals::ProposalNote))
                    .col(timestamp_with_time_zone(InvestorProposals::CreatedAt))
                    .col(timestamp_with_time_zone(InvestorProposals::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_investor_proposals_investor")
                    .table(InvestorProposals::Table)
                    .col(InvestorProposals::InvestorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InvestorProposals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum InvestorProposals {
    Table,
    Id,
    InvestorId,
    SectorsOfInterest,
    InvestmentMin,
    InvestmentMax,
    ExpectedRoi,
    InvestmentHorizon,
    ProposalNote,
    CreatedAt,
    UpdatedAt,
}
