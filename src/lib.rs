// src/lib.rs

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub mod entities {
    pub mod prelude;
    pub mod advice;
    pub mod business_ideas;
    pub mod connection_requests;
    pub mod investor_proposals;
    pub mod loan_offers;
    pub mod queries;
    pub mod users;
}

pub mod services {
    pub mod lifecycle;
    pub mod ownership;
}

pub mod auth;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
