pub mod advice;
pub mod auth;
pub mod connections;
pub mod ideas;
pub mod loans;
pub mod proposals;
pub mod queries;

use serde::Serialize;

/// Plain acknowledgement body for deletes
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
