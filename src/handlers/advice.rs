//! Advice CRUD and filtered listing

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, ModelTrait, Order, QueryFilter,
    QueryOrder, Set,
};
use tracing::info;

use crate::auth::{require_role, AuthUser};
use crate::entities::{
    advice,
    prelude::{Advice, Users},
    users::UserRole,
};
use crate::error::ApiError;
use crate::handlers::MessageResponse;
use crate::models::advice::{
    AdviceListParams, AdviceListResponse, AdviceResponse, CreateAdviceRequest, UpdateAdviceRequest,
};
use crate::services::ownership::ensure_owner;
use crate::AppState;

pub async fn list_advice(
    State(state): State<AppState>,
    Query(params): Query<AdviceListParams>,
) -> Result<Json<AdviceListResponse>, ApiError> {
    let mut select = Advice::find();

    if let Some(ref category) = params.category {
        select = select.filter(
            Expr::expr(Func::lower(Expr::col(advice::Column::Category)))
                .like(format!("%{}%", category.to_lowercase())),
        );
    }
    if let Some(advisor_id) = params.advisor_id {
        select = select.filter(advice::Column::AdvisorId.eq(advisor_id));
    }
    if let Some(ref search) = params.search {
        let pattern = format!("%{}%", search.to_lowercase());
        select = select.filter(
            Condition::any()
                .add(Expr::expr(Func::lower(Expr::col(advice::Column::Title))).like(pattern.as_str()))
                .add(Expr::expr(Func::lower(Expr::col(advice::Column::Content))).like(pattern.as_str())),
        );
    }

    let sort_column = match params.sort_by.as_deref() {
        Some("title") => advice::Column::Title,
        Some("category") => advice::Column::Category,
        _ => advice::Column::CreatedAt,
    };
    let sort_order = match params.sort_order.as_deref() {
        Some("asc") => Order::Asc,
        _ => Order::Desc,
    };

    let rows = select
        .order_by(sort_column, sort_order)
        .find_also_related(Users)
        .all(&state.db)
        .await?;

    let data: Vec<AdviceResponse> = rows
        .into_iter()
        .map(|(advice, owner)| AdviceResponse::from_model(advice, owner))
        .collect();

    Ok(Json(AdviceListResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

pub async fn get_advice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<AdviceResponse>, ApiError> {
    let (advice, owner) = Advice::find_by_id(id)
        .find_also_related(Users)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Advice"))?;

    Ok(Json(AdviceResponse::from_model(advice, owner)))
}

pub async fn post_advice(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateAdviceRequest>,
) -> Result<(StatusCode, Json<AdviceResponse>), ApiError> {
    require_role(&user, &[UserRole::Advisor])?;

    let title = payload
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("Title and content are required".to_string()))?;
    // No content-length floor: the 100-character minimum is client-side only
    let content = payload
        .content
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("Title and content are required".to_string()))?;

    let now = Utc::now();
    let advice = advice::ActiveModel {
        advisor_id: Set(user.id),
        title: Set(title),
        content: Set(content),
        category: Set(payload.category),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!(advice_id = advice.id, advisor_id = user.id, "advice posted");

    Ok((
        StatusCode::CREATED,
        Json(AdviceResponse::from_model(advice, Some(user))),
    ))
}

pub async fn update_advice(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAdviceRequest>,
) -> Result<Json<AdviceResponse>, ApiError> {
    require_role(&user, &[UserRole::Advisor])?;

    let advice = Advice::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Advice"))?;
    ensure_owner(advice.advisor_id, &user, "update this advice")?;

    let mut active: advice::ActiveModel = advice.into();

    if let Some(title) = payload.title.filter(|t| !t.trim().is_empty()) {
        active.title = Set(title);
    }
    if let Some(content) = payload.content.filter(|c| !c.trim().is_empty()) {
        active.content = Set(content);
    }
    if let Some(category) = payload.category.filter(|c| !c.trim().is_empty()) {
        active.category = Set(Some(category));
    }
    active.updated_at = Set(Utc::now().into());

    let updated = active.update(&state.db).await?;
    Ok(Json(AdviceResponse::from_model(updated, Some(user))))
}

pub async fn delete_advice(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    require_role(&user, &[UserRole::Advisor])?;

    let advice = Advice::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Advice"))?;
    ensure_owner(advice.advisor_id, &user, "delete this advice")?;

    advice.delete(&state.db).await?;
    info!(advice_id = id, "advice deleted");

    Ok(Json(MessageResponse {
        message: "Advice deleted".to_string(),
    }))
}
