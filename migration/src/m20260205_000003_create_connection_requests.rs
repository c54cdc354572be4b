//! Migration to create the connection_requests table
//!
//! Uniqueness of (investor_id, business_idea_id) is enforced by lookup at
//! creation time rather than a storage constraint: the conflict response
//! echoes the existing request's status, which a constraint violation
//! could not supply.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConnectionRequests::Table)
                    .if_not_exists()
                    .col(pk_auto(ConnectionRequests::Id))
                    .col(integer(ConnectionRequests::InvestorId).not_null())
                    .col(integer(ConnectionRequests::BusinessIdeaId).not_null())
                    .col(text_null(ConnectionRequests::Message))
                    .col(string(ConnectionRequests::Status).not_null())
                    .col(timestamp_with_time_zone(ConnectionRequests::CreatedAt))
                    .col(timestamp_with_time_zone(ConnectionRequests::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Index for the pending-count recompute on reject
        manager
            .create_index(
                Index::create()
                    .name("idx_connection_requests_idea_status")
                    .table(ConnectionRequests::Table)
                    .col(ConnectionRequests::BusinessIdeaId)
                    .col(ConnectionRequests::Status)
                    .to_owned(),
            )
            .await?;

        // Index for an investor's own request listing
        manager
            .create_index(
                Index::create()
                    .name("idx_connection_requests_investor")
                    .table(ConnectionRequests::Table)
                    .col(ConnectionRequests::InvestorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConnectionRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ConnectionRequests {
    Table,
    Id,
    InvestorId,
    BusinessIdeaId,
    Message,
    Status,
    CreatedAt,
    UpdatedAt,
}
