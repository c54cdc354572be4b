use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::entities::business_ideas::{self, IdeaStatus};
use crate::entities::users;
use crate::models::user::UserProfile;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIdeaRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub funding_required: Option<f64>,
    pub expected_roi: Option<String>,
    pub pitch_deck_url: Option<String>,
}

/// Partial update; providing a status is a manual override of the
/// engine-derived value and may be clobbered by later connection events
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIdeaRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub funding_required: Option<f64>,
    pub expected_roi: Option<String>,
    pub pitch_deck_url: Option<String>,
    pub status: Option<IdeaStatus>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaResponse {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub description: String,
    pub funding_required: f64,
    pub expected_roi: Option<String>,
    pub pitch_deck_url: Option<String>,
    pub status: IdeaStatus,
    pub entrepreneur: Option<UserProfile>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl IdeaResponse {
    pub fn from_model(idea: business_ideas::Model, owner: Option<users::Model>) -> Self {
        IdeaResponse {
            id: idea.id,
            title: idea.title,
            category: idea.category,
            description: idea.description,
            funding_required: idea.funding_required,
            expected_roi: idea.expected_roi,
            pitch_deck_url: idea.pitch_deck_url,
            status: idea.status,
            entrepreneur: owner.map(UserProfile::from),
            created_at: idea.created_at,
            updated_at: idea.updated_at,
        }
    }
}

/// Compact idea view embedded in connection listings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaSummary {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub funding_required: f64,
    pub status: IdeaStatus,
    pub entrepreneur: Option<UserProfile>,
}

impl IdeaSummary {
    pub fn from_model(idea: business_ideas::Model, owner: Option<users::Model>) -> Self {
        IdeaSummary {
            id: idea.id,
            title: idea.title,
            category: idea.category,
            funding_required: idea.funding_required,
            status: idea.status,
            entrepreneur: owner.map(UserProfile::from),
        }
    }
}
