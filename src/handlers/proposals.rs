//! Investor proposal CRUD

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};
use serde_json::json;
use tracing::info;

use crate::auth::{require_role, AuthUser};
use crate::entities::{
    investor_proposals,
    prelude::{InvestorProposals, Users},
    users::UserRole,
};
use crate::error::ApiError;
use crate::handlers::MessageResponse;
use crate::models::investor_proposal::{
    CreateProposalRequest, ProposalResponse, UpdateProposalRequest,
};
use crate::services::ownership::ensure_owner;
use crate::AppState;

pub async fn list_proposals(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProposalResponse>>, ApiError> {
    let proposals = InvestorProposals::find()
        .find_also_related(Users)
        .order_by_desc(investor_proposals::Column::CreatedAt)
        .all(&state.db)
        .await?;

    let response = proposals
        .into_iter()
        .map(|(proposal, owner)| ProposalResponse::from_model(proposal, owner))
        .collect();
    Ok(Json(response))
}

pub async fn get_proposal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProposalResponse>, ApiError> {
    let (proposal, owner) = InvestorProposals::find_by_id(id)
        .find_also_related(Users)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Proposal"))?;

    Ok(Json(ProposalResponse::from_model(proposal, owner)))
}

pub async fn create_proposal(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateProposalRequest>,
) -> Result<(StatusCode, Json<ProposalResponse>), ApiError> {
    require_role(&user, &[UserRole::Investor])?;

    let sectors = payload
        .sectors_of_interest
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            ApiError::Validation("At least one sector of interest is required".to_string())
        })?;

    let range = payload.investment_range.ok_or_else(|| {
        ApiError::Validation(
            "Investment range with min and max values is required".to_string(),
        )
    })?;
    let (min, max) = match (range.min, range.max) {
        (Some(min), Some(max)) if min.is_finite() && max.is_finite() => (min, max),
        (Some(_), Some(_)) => {
            return Err(ApiError::Validation(
                "Investment range must contain valid numbers".to_string(),
            ));
        }
        _ => {
            return Err(ApiError::Validation(
                "Investment range with min and max values is required".to_string(),
            ));
        }
    };

    let now = Utc::now();
    let proposal = investor_proposals::ActiveModel {
        investor_id: Set(user.id),
        sectors_of_interest: Set(json!(sectors)),
        investment_min: Set(min),
        investment_max: Set(max),
        expected_roi: Set(payload.expected_roi),
        investment_horizon: Set(payload.investment_horizon),
        proposal_note: Set(payload.proposal_note),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!(proposal_id = proposal.id, investor_id = user.id, "proposal created");

    Ok((
        StatusCode::CREATED,
        Json(ProposalResponse::from_model(proposal, Some(user))),
    ))
}

pub async fn update_proposal(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProposalRequest>,
) -> Result<Json<ProposalResponse>, ApiError> {
    require_role(&user, &[UserRole::Investor])?;

    let proposal = InvestorProposals::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Proposal"))?;
    ensure_owner(proposal.investor_id, &user, "update this proposal")?;

    if let Some(ref range) = payload.investment_range {
        let min_bad = range.min.is_some_and(|m| !m.is_finite());
        let max_bad = range.max.is_some_and(|m| !m.is_finite());
        if min_bad || max_bad {
            return Err(ApiError::Validation(
                "Investment range must contain valid numbers".to_string(),
            ));
        }
    }

    let mut active: investor_proposals::ActiveModel = proposal.clone().into();

    if let Some(sectors) = payload.sectors_of_interest.filter(|s| !s.is_empty()) {
        active.sectors_of_interest = Set(json!(sectors));
    }
    if let Some(range) = payload.investment_range {
        // Missing subfields fall back to the stored bounds
        active.investment_min = Set(range.min.unwrap_or(proposal.investment_min));
        active.investment_max = Set(range.max.unwrap_or(proposal.investment_max));
    }
    if let Some(roi) = payload.expected_roi.filter(|r| !r.trim().is_empty()) {
        active.expected_roi = Set(Some(roi));
    }
    if let Some(horizon) = payload.investment_horizon.filter(|h| !h.trim().is_empty()) {
        active.investment_horizon = Set(Some(horizon));
    }
    if let Some(note) = payload.proposal_note.filter(|n| !n.trim().is_empty()) {
        active.proposal_note = Set(Some(note));
    }
    active.updated_at = Set(Utc::now().into());

    let updated = active.update(&state.db).await?;
    Ok(Json(ProposalResponse::from_model(updated, Some(user))))
}

pub async fn delete_proposal(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    require_role(&user, &[UserRole::Investor])?;

    let proposal = InvestorProposals::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Proposal"))?;
    ensure_owner(proposal.investor_id, &user, "delete this proposal")?;

    proposal.delete(&state.db).await?;
    info!(proposal_id = id, "proposal deleted");

    Ok(Json(MessageResponse {
        message: "Proposal deleted successfully".to_string(),
    }))
}
