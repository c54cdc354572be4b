//! Loan offer CRUD and filtered listing
//!
//! The only paginated resource; the listing envelope carries count,
//! total, and page math alongside the rows.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use sea_orm::prelude::DateTimeWithTimeZone;
use tracing::info;

use crate::auth::{require_role, AuthUser};
use crate::entities::{
    loan_offers,
    prelude::{LoanOffers, Users},
    users::UserRole,
};
use crate::error::ApiError;
use crate::handlers::MessageResponse;
use crate::models::loan_offer::{
    CreateLoanOfferRequest, LoanOfferListParams, LoanOfferListResponse, LoanOfferResponse,
    UpdateLoanOfferRequest,
};
use crate::services::ownership::ensure_owner;
use crate::AppState;

lazy_static! {
    // Digits with optional decimal point, optional trailing percent sign
    static ref INTEREST_RATE_RE: Regex = Regex::new(r"^[\d.]+%?$").unwrap();
}

pub async fn list_offers(
    State(state): State<AppState>,
    Query(params): Query<LoanOfferListParams>,
) -> Result<Json<LoanOfferListResponse>, ApiError> {
    let mut select = LoanOffers::find();

    if let Some(ref loan_type) = params.loan_type {
        select = select.filter(
            Expr::expr(Func::lower(Expr::col(loan_offers::Column::LoanType)))
                .like(format!("%{}%", loan_type.to_lowercase())),
        );
    }
    if let Some(ref rate) = params.interest_rate {
        select = select.filter(loan_offers::Column::InterestRate.eq(rate));
    }
    if let Some(upper) = params.max_amount {
        select = select.filter(loan_offers::Column::MaxAmount.lte(upper));
    }
    if let Some(lower) = params.min_amount {
        select = select.filter(loan_offers::Column::MaxAmount.gte(lower));
    }
    if let Some(banker_id) = params.banker_id {
        select = select.filter(loan_offers::Column::BankerId.eq(banker_id));
    }
    if let Some(ref eligibility) = params.eligibility {
        select = select.filter(
            Expr::expr(Func::lower(Expr::col(loan_offers::Column::Eligibility)))
                .like(format!("%{}%", eligibility.to_lowercase())),
        );
    }
    if let Some(ref start) = params.created_at_start {
        select = select
            .filter(loan_offers::Column::CreatedAt.gte(parse_filter_date(start, "createdAtStart")?));
    }
    if let Some(ref end) = params.created_at_end {
        select = select
            .filter(loan_offers::Column::CreatedAt.lte(parse_filter_date(end, "createdAtEnd")?));
    }

    let total = select.clone().count(&state.db).await?;

    let sort_column = match params.sort_by.as_deref() {
        Some("interestRate") => loan_offers::Column::InterestRate,
        Some("maxAmount") => loan_offers::Column::MaxAmount,
        Some("loanType") => loan_offers::Column::LoanType,
        _ => loan_offers::Column::CreatedAt,
    };
    let sort_order = match params.sort_order.as_deref() {
        Some("asc") => Order::Asc,
        _ => Order::Desc,
    };
    select = select.order_by(sort_column, sort_order);

    let limit = params.limit.filter(|l| *l > 0);
    let page = params.page.filter(|p| *p > 0).unwrap_or(1);
    if let Some(limit) = limit {
        select = select.offset((page - 1).saturating_mul(limit)).limit(limit);
    }

    let offers = select.find_also_related(Users).all(&state.db).await?;

    let data: Vec<LoanOfferResponse> = offers
        .into_iter()
        .map(|(offer, owner)| LoanOfferResponse::from_model(offer, owner))
        .collect();

    let pages = match limit {
        Some(limit) => total.div_ceil(limit),
        None => 1,
    };

    Ok(Json(LoanOfferListResponse {
        success: true,
        count: data.len(),
        total,
        page,
        pages,
        data,
    }))
}

pub async fn get_offer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<LoanOfferResponse>, ApiError> {
    let (offer, owner) = LoanOffers::find_by_id(id)
        .find_also_related(Users)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Loan offer"))?;

    Ok(Json(LoanOfferResponse::from_model(offer, owner)))
}

pub async fn create_offer(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateLoanOfferRequest>,
) -> Result<(StatusCode, Json<LoanOfferResponse>), ApiError> {
    require_role(&user, &[UserRole::Banker])?;

    let loan_type = payload.loan_type.filter(|t| !t.trim().is_empty());
    let interest_rate = payload.interest_rate.filter(|r| !r.trim().is_empty());
    let (loan_type, interest_rate) = match (loan_type, interest_rate) {
        (Some(t), Some(r)) => (t, r),
        _ => {
            return Err(ApiError::Validation(
                "Loan type and interest rate are required".to_string(),
            ));
        }
    };

    if !INTEREST_RATE_RE.is_match(&interest_rate) {
        return Err(ApiError::Validation(
            "Invalid interest rate format".to_string(),
        ));
    }

    let max_amount = payload
        .max_amount
        .ok_or_else(|| ApiError::Validation("Max amount is required".to_string()))?;
    if !max_amount.is_finite() || max_amount <= 0.0 {
        return Err(ApiError::Validation(
            "Max amount must be a positive number".to_string(),
        ));
    }

    let now = Utc::now();
    let offer = loan_offers::ActiveModel {
        banker_id: Set(user.id),
        loan_type: Set(loan_type),
        interest_rate: Set(interest_rate),
        max_amount: Set(max_amount),
        eligibility: Set(payload.eligibility),
        description: Set(payload.description),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!(offer_id = offer.id, banker_id = user.id, "loan offer created");

    Ok((
        StatusCode::CREATED,
        Json(LoanOfferResponse::from_model(offer, Some(user))),
    ))
}

pub async fn update_offer(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLoanOfferRequest>,
) -> Result<Json<LoanOfferResponse>, ApiError> {
    require_role(&user, &[UserRole::Banker])?;

    let offer = LoanOffers::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Loan offer"))?;
    ensure_owner(offer.banker_id, &user, "update this offer")?;

    if let Some(ref rate) = payload.interest_rate {
        if !rate.trim().is_empty() && !INTEREST_RATE_RE.is_match(rate) {
            return Err(ApiError::Validation(
                "Invalid interest rate format".to_string(),
            ));
        }
    }

    let mut active: loan_offers::ActiveModel = offer.into();

    if let Some(loan_type) = payload.loan_type.filter(|t| !t.trim().is_empty()) {
        active.loan_type = Set(loan_type);
    }
    if let Some(rate) = payload.interest_rate.filter(|r| !r.trim().is_empty()) {
        active.interest_rate = Set(rate);
    }
    if let Some(amount) = payload.max_amount.filter(|a| a.is_finite() && *a > 0.0) {
        active.max_amount = Set(amount);
    }
    if let Some(eligibility) = payload.eligibility.filter(|e| !e.trim().is_empty()) {
        active.eligibility = Set(Some(eligibility));
    }
    if let Some(description) = payload.description.filter(|d| !d.trim().is_empty()) {
        active.description = Set(Some(description));
    }
    active.updated_at = Set(Utc::now().into());

    let updated = active.update(&state.db).await?;
    Ok(Json(LoanOfferResponse::from_model(updated, Some(user))))
}

pub async fn delete_offer(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    require_role(&user, &[UserRole::Banker])?;

    let offer = LoanOffers::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Loan offer"))?;
    ensure_owner(offer.banker_id, &user, "delete this offer")?;

    offer.delete(&state.db).await?;
    info!(offer_id = id, "loan offer deleted");

    Ok(Json(MessageResponse {
        message: "Loan offer deleted successfully".to_string(),
    }))
}

fn parse_filter_date(raw: &str, param: &str) -> Result<DateTimeWithTimeZone, ApiError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc().into());
    }
    Err(ApiError::Validation(format!("Invalid date in {}", param)))
}
