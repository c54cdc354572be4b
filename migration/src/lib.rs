pub use sea_orm_migration::prelude::*;

mod m20260205_000001_create_users;
mod m20260205_000002_create_business_ideas;
mod m20260205_000003_create_connection_requests;
mod m20260206_000001_create_investor_proposals;
mod m20260206_000002_create_loan_offers;
mod m20260207_000001_create_advice;
mod m20260207_000002_create_queries;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260205_000001_create_users::Migration),
            Box::new(m20260205_000002_create_business_ideas::Migration),
            Box::new(m20260205_000003_create_connection_requests::Migration),
            Box::new(m20260206_000001_create_investor_proposals::Migration),
            Box::new(m20260206_000002_create_loan_offers::Migration),
            Box::new(m20260207_000001_create_advice::Migration),
            Box::new(m20260207_000002_create_queries::Migration),
        ]
    }
}
