//! Migration to create the loan_offers table
//!
//! max_amount is mandatory: listing filters and client-side calculations
//! divide by it, so a null here would be a latent error.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LoanOffers::Table)
                    .if_not_exists()
                    .col(pk_auto(LoanOffers::Id))
                    .col(integer(LoanOffers::BankerId).not_null())
                    .col(string(LoanOffers::LoanType).not_null())
                    .col(string(LoanOffers::InterestRate).not_null())
                    .col(double(LoanOffers::MaxAmount).not_null())
                    .col(text_null(LoanOffers::Eligibility))
                    .col(text_null(LoanOffers::Description))
                    .col(timestamp_with_time_zone(LoanOffers::CreatedAt))
                    .col(timestamp_with_time_zone(LoanOffers::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_loan_offers_banker")
                    .table(LoanOffers::Table)
                    .col(LoanOffers::BankerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LoanOffers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LoanOffers {
    Table,
    Id,
    BankerId,
    LoanType,
    InterestRate,
    MaxAmount,
    Eligibility,
    Description,
    CreatedAt,
    UpdatedAt,
}
