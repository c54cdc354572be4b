//! Ownership guard
//!
//! A write to an owned entity is permitted iff the acting user's id
//! equals the entity's owner-reference column. Callers check existence
//! (NotFound) before invoking the guard. Connection accept/reject uses
//! the indirect form: the owner of the *referenced idea* decides, not
//! anyone named on the request itself — that check lives in the
//! lifecycle service where the idea is already loaded.

use crate::entities::users;
use crate::error::ApiError;

pub fn ensure_owner(
    owner_id: i32,
    acting: &users::Model,
    action: &str,
) -> Result<(), ApiError> {
    if owner_id == acting.id {
        Ok(())
    } else {
        Err(ApiError::Forbidden(format!("Unauthorized to {}", action)))
    }
}
