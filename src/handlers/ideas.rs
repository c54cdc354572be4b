//! Business idea CRUD
//!
//! Owner-gated writes; status is normally driven by the connection
//! lifecycle service, with direct overwrite on update kept as a manual
//! escape hatch for the owner.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};
use tracing::{info, warn};

use crate::auth::{require_role, AuthUser};
use crate::entities::{
    business_ideas::{self, IdeaStatus},
    prelude::{BusinessIdeas, Users},
    users::UserRole,
};
use crate::error::ApiError;
use crate::handlers::MessageResponse;
use crate::models::business_idea::{CreateIdeaRequest, IdeaResponse, UpdateIdeaRequest};
use crate::services::ownership::ensure_owner;
use crate::AppState;

pub async fn list_ideas(
    State(state): State<AppState>,
) -> Result<Json<Vec<IdeaResponse>>, ApiError> {
    let ideas = BusinessIdeas::find()
        .find_also_related(Users)
        .order_by_desc(business_ideas::Column::CreatedAt)
        .all(&state.db)
        .await?;

    let response = ideas
        .into_iter()
        .map(|(idea, owner)| IdeaResponse::from_model(idea, owner))
        .collect();
    Ok(Json(response))
}

pub async fn get_idea(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<IdeaResponse>, ApiError> {
    let (idea, owner) = BusinessIdeas::find_by_id(id)
        .find_also_related(Users)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Idea"))?;

    Ok(Json(IdeaResponse::from_model(idea, owner)))
}

pub async fn create_idea(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateIdeaRequest>,
) -> Result<(StatusCode, Json<IdeaResponse>), ApiError> {
    require_role(&user, &[UserRole::Entrepreneur])?;

    let title = payload
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("Please fill all required fields".to_string()))?;
    let category = payload
        .category
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("Please fill all required fields".to_string()))?;
    let description = payload
        .description
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("Please fill all required fields".to_string()))?;
    let funding_required = payload
        .funding_required
        .ok_or_else(|| ApiError::Validation("Please fill all required fields".to_string()))?;

    if !funding_required.is_finite() || funding_required <= 0.0 {
        return Err(ApiError::Validation(
            "Funding must be a positive number".to_string(),
        ));
    }

    let now = Utc::now();
    let idea = business_ideas::ActiveModel {
        entrepreneur_id: Set(user.id),
        title: Set(title),
        category: Set(category),
        description: Set(description),
        funding_required: Set(funding_required),
        expected_roi: Set(payload.expected_roi),
        pitch_deck_url: Set(payload.pitch_deck_url),
        status: Set(IdeaStatus::Pending),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!(idea_id = idea.id, entrepreneur_id = user.id, "idea created");

    Ok((
        StatusCode::CREATED,
        Json(IdeaResponse::from_model(idea, Some(user))),
    ))
}

pub async fn update_idea(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateIdeaRequest>,
) -> Result<Json<IdeaResponse>, ApiError> {
    require_role(&user, &[UserRole::Entrepreneur])?;

    let idea = BusinessIdeas::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Idea"))?;
    ensure_owner(idea.entrepreneur_id, &user, "update this idea")?;

    let mut active: business_ideas::ActiveModel = idea.into();

    if let Some(title) = payload.title.filter(|t| !t.trim().is_empty()) {
        active.title = Set(title);
    }
    if let Some(category) = payload.category.filter(|c| !c.trim().is_empty()) {
        active.category = Set(category);
    }
    if let Some(description) = payload.description.filter(|d| !d.trim().is_empty()) {
        active.description = Set(description);
    }
    if let Some(funding) = payload.funding_required.filter(|f| f.is_finite() && *f > 0.0) {
        active.funding_required = Set(funding);
    }
    if let Some(roi) = payload.expected_roi.filter(|r| !r.trim().is_empty()) {
        active.expected_roi = Set(Some(roi));
    }
    if let Some(url) = payload.pitch_deck_url.filter(|u| !u.trim().is_empty()) {
        active.pitch_deck_url = Set(Some(url));
    }
    if let Some(status) = payload.status {
        // Manual override of the engine-derived status; later connection
        // events can clobber it
        warn!(idea_id = id, new_status = ?status, "manual idea status override");
        active.status = Set(status);
    }
    active.updated_at = Set(Utc::now().into());

    let updated = active.update(&state.db).await?;
    Ok(Json(IdeaResponse::from_model(updated, Some(user))))
}

pub async fn delete_idea(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    require_role(&user, &[UserRole::Entrepreneur])?;

    let idea = BusinessIdeas::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Idea"))?;
    ensure_owner(idea.entrepreneur_id, &user, "delete this idea")?;

    idea.delete(&state.db).await?;
    info!(idea_id = id, "idea deleted");

    Ok(Json(MessageResponse {
        message: "Idea deleted successfully".to_string(),
    }))
}
