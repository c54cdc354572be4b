//! Entrepreneur query endpoints
//!
//! Queries carry the one remaining cross-field rule outside the
//! lifecycle engine: status flips unanswered -> answered exactly once,
//! when an advisor posts a solution.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::collections::HashMap;
use tracing::info;

use crate::auth::{require_role, AuthUser};
use crate::entities::{
    prelude::{Queries, Users},
    queries::{self, QueryStatus},
    users::{self, UserRole},
};
use crate::error::ApiError;
use crate::models::query::{
    PostQueryRequest, PostSolutionRequest, QueryListParams, QueryListResponse, QueryResponse,
};
use crate::AppState;

pub async fn list_queries(
    State(state): State<AppState>,
    Query(params): Query<QueryListParams>,
) -> Result<Json<QueryListResponse>, ApiError> {
    let mut select = Queries::find();

    if let Some(status) = params.status {
        select = select.filter(queries::Column::Status.eq(status));
    }
    if let Some(entrepreneur_id) = params.entrepreneur_id {
        select = select.filter(queries::Column::EntrepreneurId.eq(entrepreneur_id));
    }
    if let Some(advisor_id) = params.advisor_id {
        select = select.filter(queries::Column::AdvisorId.eq(advisor_id));
    }
    if let Some(answered_by) = params.answered_by {
        select = select
            .filter(queries::Column::AdvisorId.eq(answered_by))
            .filter(queries::Column::Status.eq(QueryStatus::Answered));
    }
    if let Some(ref search) = params.search {
        select = select.filter(
            Expr::expr(Func::lower(Expr::col(queries::Column::Question)))
                .like(format!("%{}%", search.to_lowercase())),
        );
    }

    let rows = select
        .order_by_desc(queries::Column::CreatedAt)
        .all(&state.db)
        .await?;

    // Batch-load both counterparties for the embedded profiles
    let mut user_ids: Vec<i32> = rows.iter().map(|q| q.entrepreneur_id).collect();
    user_ids.extend(rows.iter().filter_map(|q| q.advisor_id));
    let profiles = load_users(&state, user_ids).await?;

    let data: Vec<QueryResponse> = rows
        .into_iter()
        .map(|query| {
            let entrepreneur = profiles.get(&query.entrepreneur_id).cloned();
            let advisor = query.advisor_id.and_then(|id| profiles.get(&id).cloned());
            QueryResponse::from_model(query, entrepreneur, advisor)
        })
        .collect();

    Ok(Json(QueryListResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

pub async fn get_query(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<QueryResponse>, ApiError> {
    let query = Queries::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Query"))?;

    let mut user_ids = vec![query.entrepreneur_id];
    if let Some(advisor_id) = query.advisor_id {
        user_ids.push(advisor_id);
    }
    let profiles = load_users(&state, user_ids).await?;

    let entrepreneur = profiles.get(&query.entrepreneur_id).cloned();
    let advisor = query.advisor_id.and_then(|id| profiles.get(&id).cloned());
    Ok(Json(QueryResponse::from_model(query, entrepreneur, advisor)))
}

pub async fn post_query(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<PostQueryRequest>,
) -> Result<(StatusCode, Json<QueryResponse>), ApiError> {
    require_role(&user, &[UserRole::Entrepreneur])?;

    let question = payload
        .question
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("Question is required".to_string()))?;

    let now = Utc::now();
    let query = queries::ActiveModel {
        entrepreneur_id: Set(user.id),
        question: Set(question),
        status: Set(QueryStatus::Unanswered),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!(query_id = query.id, entrepreneur_id = user.id, "query posted");

    Ok((
        StatusCode::CREATED,
        Json(QueryResponse::from_model(query, Some(user), None)),
    ))
}

pub async fn post_solution(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<PostSolutionRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    require_role(&user, &[UserRole::Advisor])?;

    let query = Queries::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Query"))?;

    if query.status == QueryStatus::Answered {
        return Err(ApiError::conflict("Query already answered"));
    }

    let answer = payload
        .answer
        .filter(|a| !a.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("Answer is required".to_string()))?;

    let mut active: queries::ActiveModel = query.into();
    active.advisor_id = Set(Some(user.id));
    active.answer = Set(Some(answer));
    active.status = Set(QueryStatus::Answered);
    active.updated_at = Set(Utc::now().into());

    let updated = active.update(&state.db).await?;
    info!(query_id = updated.id, advisor_id = user.id, "query answered");

    let entrepreneur = Users::find_by_id(updated.entrepreneur_id)
        .one(&state.db)
        .await?;
    Ok(Json(QueryResponse::from_model(
        updated,
        entrepreneur,
        Some(user),
    )))
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
