//! Idea/connection lifecycle engine
//!
//! The one place where a mutation of one entity is derived from another:
//! `business_ideas.status` follows the aggregate of connection-request
//! events referencing the idea.
//!
//! Idea transitions driven here:
//! - `pending` -> `in discussion` on the first request against the idea
//! - `in discussion` -> `funded` when any request is accepted (the
//!   force-set is unconditional: acceptance is a terminal business event)
//! - `in discussion` -> `pending` when a request is rejected and no
//!   pending request remains
//!
//! `funded` and `rejected` are absorbing for the engine. Idea-level
//! `rejected` is never produced here; it is only reachable through the
//! owner's manual status override on idea update.
//!
//! Request transitions are one-shot: `pending` -> `accepted` or
//! `pending` -> `rejected`, decided by the entrepreneur owning the
//! referenced idea. Anything else is a conflict.
//!
//! Each transition runs the request write and the idea recompute inside
//! a single transaction, so a crash cannot leave the pair inconsistent.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    PaginatorTrait, QueryFilter, Set, TransactionTrait,
};
use tracing::{info, warn};

use crate::entities::{
    business_ideas::{self, IdeaStatus},
    connection_requests::{self, ConnectionStatus},
    prelude::{BusinessIdeas, ConnectionRequests},
    users,
};
use crate::error::ApiError;

/// Create a connection request from an investor to a business idea.
///
/// Fails NotFound when the idea is absent, InvalidState when the idea is
/// already funded, InvalidOperation on self-connection, and Conflict
/// (echoing the existing request's status) when the pair already has a
/// request. On success the new request is pending, and an idea that was
/// exactly `pending` flips to `in discussion`.
pub async fn request_connection(
    db: &DatabaseConnection,
    investor: &users::Model,
    business_idea_id: i32,
    message: Option<String>,
) -> Result<connection_requests::Model, ApiError> {
    let idea = BusinessIdeas::find_by_id(business_idea_id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("Business idea"))?;

    if idea.status == IdeaStatus::Funded {
        return Err(ApiError::InvalidState("Idea is already funded".to_string()));
    }

    if idea.entrepreneur_id == investor.id {
        return Err(ApiError::InvalidOperation(
            "Cannot connect to your own business idea".to_string(),
        ));
    }

    let existing = ConnectionRequests::find()
        .filter(connection_requests::Column::InvestorId.eq(investor.id))
        .filter(connection_requests::Column::BusinessIdeaId.eq(business_idea_id))
        .one(db)
        .await?;

    if let Some(existing) = existing {
        return Err(ApiError::Conflict {
            message: "Connection request already exists".to_string(),
            existing_status: Some(existing.status),
        });
    }

    let txn = db.begin().await?;

    let now = Utc::now();
    let request = connection_requests::ActiveModel {
        investor_id: Set(investor.id),
        business_idea_id: Set(business_idea_id),
        message: Set(message),
        status: Set(ConnectionStatus::Pending),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    // First-interest signal; a no-op for any status other than pending
    if idea.status == IdeaStatus::Pending {
        set_idea_status(&txn, idea, IdeaStatus::InDiscussion).await?;
    }

    txn.commit().await?;

    info!(
        request_id = request.id,
        investor_id = investor.id,
        business_idea_id,
        "connection request created"
    );

    Ok(request)
}

/// Accept a pending connection request.
///
/// Only the entrepreneur owning the referenced idea may accept; the
/// request must still be pending. Side-effect: the idea is force-set to
/// `funded` regardless of its current status.
pub async fn accept_connection(
    db: &DatabaseConnection,
    acting: &users::Model,
    request_id: i32,
) -> Result<connection_requests::Model, ApiError> {
    let (request, idea) = load_request_and_idea(db, request_id).await?;

    if idea.entrepreneur_id != acting.id {
        return Err(ApiError::Forbidden(
            "Unauthorized to accept this request".to_string(),
        ));
    }

    if request.status != ConnectionStatus::Pending {
        return Err(ApiError::conflict(format!(
            "Connection request already {}",
            status_label(request.status)
        )));
    }

    let txn = db.begin().await?;

    let request = set_request_status(&txn, request, ConnectionStatus::Accepted).await?;
    let idea_id = idea.id;
    set_idea_status(&txn, idea, IdeaStatus::Funded).await?;

    txn.commit().await?;

    info!(
        request_id = request.id,
        business_idea_id = idea_id,
        "connection accepted, idea funded"
    );

    Ok(request)
}

/// Reject a pending connection request.
///
/// Same preconditions as accept. Side-effect: the idea reverts to
/// `pending` only when it is still in discussion and no pending request
/// remains for it — other suitors keep the discussion open, and a funded
/// idea is never downgraded.
pub async fn reject_connection(
    db: &DatabaseConnection,
    acting: &users::Model,
    request_id: i32,
) -> Result<connection_requests::Model, ApiError> {
    let (request, idea) = load_request_and_idea(db, request_id).await?;

    if idea.entrepreneur_id != acting.id {
        return Err(ApiError::Forbidden(
            "Unauthorized to reject this request".to_string(),
        ));
    }

    if request.status != ConnectionStatus::Pending {
        return Err(ApiError::conflict(format!(
            "Connection request already {}",
            status_label(request.status)
        )));
    }

    let txn = db.begin().await?;

    let request = set_request_status(&txn, request, ConnectionStatus::Rejected).await?;

    let pending_remaining = ConnectionRequests::find()
        .filter(connection_requests::Column::BusinessIdeaId.eq(idea.id))
        .filter(connection_requests::Column::Status.eq(ConnectionStatus::Pending))
        .count(&txn)
        .await?;

    let idea_id = idea.id;
    if pending_remaining == 0 && idea.status == IdeaStatus::InDiscussion {
        set_idea_status(&txn, idea, IdeaStatus::Pending).await?;
        info!(
            request_id = request.id,
            business_idea_id = idea_id,
            "last pending request rejected, idea reverted to pending"
        );
    } else {
        info!(
            request_id = request.id,
            business_idea_id = idea_id,
            pending_remaining,
            "connection rejected"
        );
    }

    txn.commit().await?;

    Ok(request)
}

async fn load_request_and_idea(
    db: &DatabaseConnection,
    request_id: i32,
) -> Result<(connection_requests::Model, business_ideas::Model), ApiError> {
    let request = ConnectionRequests::find_by_id(request_id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("Connection request"))?;

    let idea = BusinessIdeas::find_by_id(request.business_idea_id)
        .one(db)
        .await?;

    match idea {
        Some(idea) => Ok((request, idea)),
        None => {
            // Dangling reference; the idea was hard-deleted by its owner
            warn!(
                request_id,
                business_idea_id = request.business_idea_id,
                "connection request references a missing idea"
            );
            Err(ApiError::NotFound("Business idea"))
        }
    }
}

async fn set_request_status(
    txn: &DatabaseTransaction,
    request: connection_requests::Model,
    status: ConnectionStatus,
) -> Result<connection_requests::Model, ApiError> {
    let mut active: connection_requests::ActiveModel = request.into();
    active.status = Set(status);
    active.updated_at = Set(Utc::now().into());
    Ok(active.update(txn).await?)
}

async fn set_idea_status(
    txn: &DatabaseTransaction,
    idea: business_ideas::Model,
    status: IdeaStatus,
) -> Result<business_ideas::Model, ApiError> {
    let mut active: business_ideas::ActiveModel = idea.into();
    active.status = Set(status);
    active.updated_at = Set(Utc::now().into());
    Ok(active.update(txn).await?)
}

fn status_label(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Pending => "pending",
        ConnectionStatus::Accepted => "accepted",
        ConnectionStatus::Rejected => "rejected",
    }
}
