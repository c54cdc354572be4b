//! Connection request endpoints
//!
//! Creation and the accept/reject decisions delegate to the lifecycle
//! service, which owns all idea-status side-effects.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;

use crate::auth::{require_role, AuthUser};
use crate::entities::{
    business_ideas, connection_requests,
    prelude::{BusinessIdeas, ConnectionRequests, Users},
    users::{self, UserRole},
};
use crate::error::ApiError;
use crate::models::business_idea::IdeaSummary;
use crate::models::connection::{
    ConnectionCreatedResponse, ConnectionDecisionResponse, ConnectionView,
    RequestConnectionRequest,
};
use crate::services::lifecycle;
use crate::AppState;

pub async fn request_connection(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<RequestConnectionRequest>,
) -> Result<(StatusCode, Json<ConnectionCreatedResponse>), ApiError> {
    require_role(&user, &[UserRole::Investor, UserRole::Entrepreneur])?;

    let business_idea_id = payload
        .business_idea_id
        .ok_or_else(|| ApiError::Validation("Business idea ID is required".to_string()))?;

    let request =
        lifecycle::request_connection(&state.db, &user, business_idea_id, payload.message).await?;

    Ok((StatusCode::CREATED, Json(request.into())))
}

pub async fn accept_connection(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<ConnectionDecisionResponse>, ApiError> {
    require_role(&user, &[UserRole::Investor, UserRole::Entrepreneur])?;
    let request = lifecycle::accept_connection(&state.db, &user, id).await?;
    Ok(Json(request.into()))
}

pub async fn reject_connection(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<ConnectionDecisionResponse>, ApiError> {
    require_role(&user, &[UserRole::Investor, UserRole::Entrepreneur])?;
    let request = lifecycle::reject_connection(&state.db, &user, id).await?;
    Ok(Json(request.into()))
}

/// Role-dependent listing: investors see their own requests with the
/// idea (and its entrepreneur) embedded, entrepreneurs see every request
/// against their ideas with the investor profile embedded.
pub async fn list_connections(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<ConnectionView>>, ApiError> {
    require_role(&user, &[UserRole::Investor, UserRole::Entrepreneur])?;

    let views = match user.role {
        UserRole::Investor => investor_connections(&state, &user).await?,
        _ => entrepreneur_connections(&state, &user).await?,
    };

    Ok(Json(views))
}

async fn investor_connections(
    state: &AppState,
    user: &users::Model,
) -> Result<Vec<ConnectionView>, ApiError> {
    let requests = ConnectionRequests::find()
        .filter(connection_requests::Column::InvestorId.eq(user.id))
        .find_also_related(BusinessIdeas)
        .order_by_desc(connection_requests::Column::CreatedAt)
        .all(&state.db)
        .await?;

    let entrepreneur_ids: Vec<i32> = requests
        .iter()
        .filter_map(|(_, idea)| idea.as_ref().map(|i| i.entrepreneur_id))
        .collect();
    let owners = load_users(state, entrepreneur_ids).await?;

    let views = requests
        .into_iter()
        .map(|(request, idea)| {
            let business_idea = idea.map(|idea| {
                let owner = owners.get(&idea.entrepreneur_id).cloned();
                IdeaSummary::from_model(idea, owner)
            });
            ConnectionView {
                id: request.id,
                message: request.message,
                status: request.status,
                investor: None,
                business_idea,
                created_at: request.created_at,
                updated_at: request.updated_at,
            }
        })
        .collect();
    Ok(views)
}

async fn entrepreneur_connections(
    state: &AppState,
    user: &users::Model,
) -> Result<Vec<ConnectionView>, ApiError> {
    let ideas = BusinessIdeas::find()
        .filter(business_ideas::Column::EntrepreneurId.eq(user.id))
        .all(&state.db)
        .await?;
    let idea_ids: Vec<i32> = ideas.iter().map(|i| i.id).collect();
    let ideas_by_id: HashMap<i32, business_ideas::Model> =
        ideas.into_iter().map(|i| (i.id, i)).collect();

    let requests = ConnectionRequests::find()
        .filter(connection_requests::Column::BusinessIdeaId.is_in(idea_ids))
        .find_also_related(Users)
        .order_by_desc(connection_requests::Column::CreatedAt)
        .all(&state.db)
        .await?;

    let views = requests
        .into_iter()
        .map(|(request, investor)| {
            let business_idea = ideas_by_id
                .get(&request.business_idea_id)
                .cloned()
                .map(|idea| IdeaSummary::from_model(idea, None));
            ConnectionView {
                id: request.id,
                message: request.message,
                status: request.status,
                investor: investor.map(Into::into),
                business_idea,
                created_at: request.created_at,
                updated_at: request.updated_at,
            }
        })
        .collect();
    Ok(views)
}

async fn load_users(
    state: &AppState,
    ids: Vec<i32>,
) -> Result<HashMap<i32, users::Model>, ApiError> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = Users::find()
        .filter(users::Column::Id.is_in(ids))
        .all(&state.db)
        .await?;
    Ok(rows.into_iter().map(|u| (u.id, u)).collect())
}
