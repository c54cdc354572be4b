pub mod advice;
pub mod business_idea;
pub mod connection;
pub mod investor_proposal;
pub mod loan_offer;
pub mod query;
pub mod user;
