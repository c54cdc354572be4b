//! Acting-user resolution and role gating
//!
//! Session issuance is an external collaborator: the gateway in front of
//! this service authenticates the caller and forwards the account id in
//! the `x-user-id` header. [`AuthUser`] loads the matching row and fails
//! 401 when the header is absent, unparseable, or refers to no account.
//!
//! Role gating is the coarse check performed before any record lookup;
//! ownership checks live in [`crate::services::ownership`].

use axum::{extract::FromRequestParts, http::request::Parts};
use sea_orm::EntityTrait;

use crate::entities::{prelude::Users, users};
use crate::error::ApiError;
use crate::AppState;

pub const USER_ID_HEADER: &str = "x-user-id";

/// The resolved acting user, extracted on every protected route
pub struct AuthUser(pub users::Model);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id: i32 = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .ok_or(ApiError::Unauthorized)?;

        let user = Users::find_by_id(user_id)
            .one(&state.db)
            .await?
            .ok_or(ApiError::Unauthorized)?;

        Ok(AuthUser(user))
    }
}

/// Coarse role gate, checked before any record lookup
pub fn require_role(user: &users::Model, allowed: &[users::UserRole]) -> Result<(), ApiError> {
    if allowed.contains(&user.role) {
        Ok(())
    } else {
        Err(ApiError::Forbidden(
            "Access denied: role not permitted for this operation".to_string(),
        ))
    }
}
