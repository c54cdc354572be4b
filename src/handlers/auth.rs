//! Account endpoints: signup and profile
//!
//! Session issuance itself is handled upstream; these endpoints only
//! manage the account records. Role is fixed at signup and never
//! touched by profile update.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use tracing::info;

use crate::auth::AuthUser;
use crate::entities::{prelude::Users, users};
use crate::error::ApiError;
use crate::models::user::{ProfileResponse, SignupRequest, UpdateProfileRequest};
use crate::AppState;

pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), ApiError> {
    let name = payload
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("Please fill all required fields".to_string()))?;
    let email = payload
        .email
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("Please fill all required fields".to_string()))?;
    let role = payload
        .role
        .ok_or_else(|| ApiError::Validation("Please fill all required fields".to_string()))?;

    let existing = Users::find()
        .filter(users::Column::Email.eq(&email))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(ApiError::conflict("Email already registered"));
    }

    let location = payload.location;
    let now = Utc::now();
    let user = users::ActiveModel {
        name: Set(name),
        email: Set(email),
        role: Set(role),
        phone: Set(payload.phone),
        location_city: Set(location.as_ref().and_then(|l| l.city.clone())),
        location_state: Set(location.as_ref().and_then(|l| l.state.clone())),
        location_country: Set(location.and_then(|l| l.country)),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!(user_id = user.id, role = ?user.role, "account created");

    Ok((StatusCode::CREATED, Json(user.into())))
}

pub async fn get_profile(AuthUser(user): AuthUser) -> Json<ProfileResponse> {
    Json(user.into())
}

/// Partial update of name/phone/location; empty values are ignored
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let mut active: users::ActiveModel = user.into();

    if let Some(name) = payload.name.filter(|n| !n.trim().is_empty()) {
        active.name = Set(name);
    }
    if let Some(phone) = payload.phone.filter(|p| !p.trim().is_empty()) {
        active.phone = Set(Some(phone));
    }
    if let Some(location) = payload.location {
        if let Some(city) = location.city.filter(|c| !c.trim().is_empty()) {
            active.location_city = Set(Some(city));
        }
        if let Some(region) = location.state.filter(|s| !s.trim().is_empty()) {
            active.location_state = Set(Some(region));
        }
        if let Some(country) = location.country.filter(|c| !c.trim().is_empty()) {
            active.location_country = Set(Some(country));
        }
    }
    active.updated_at = Set(Utc::now().into());

    let updated = active.update(&state.db).await?;
    Ok(Json(updated.into()))
}

/// Confirms the x-user-id header resolves to a live account
pub async fn check(AuthUser(user): AuthUser) -> Json<ProfileResponse> {
    Json(user.into())
}
