use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::entities::{investor_proposals, users};
use crate::models::user::UserProfile;

/// Range bounds as they arrive on the wire; either bound may be missing
/// on update, in which case the stored value is kept
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRangeInput {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProposalRequest {
    pub sectors_of_interest: Option<Vec<String>>,
    pub investment_range: Option<InvestmentRangeInput>,
    pub expected_roi: Option<String>,
    pub investment_horizon: Option<String>,
    pub proposal_note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProposalRequest {
    pub sectors_of_interest: Option<Vec<String>>,
    pub investment_range: Option<InvestmentRangeInput>,
    pub expected_roi: Option<String>,
    pub investment_horizon: Option<String>,
    pub proposal_note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalResponse {
    pub id: i32,
    pub investor: Option<UserProfile>,
    pub sectors_of_interest: Vec<String>,
    pub investment_range: InvestmentRange,
    pub expected_roi: Option<String>,
    pub investment_horizon: Option<String>,
    pub proposal_note: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl ProposalResponse {
    pub fn from_model(proposal: investor_proposals::Model, owner: Option<users::Model>) -> Self {
        let sectors = serde_json::from_value(proposal.sectors_of_interest).unwrap_or_default();
        ProposalResponse {
            id: proposal.id,
            investor: owner.map(UserProfile::from),
            sectors_of_interest: sectors,
            investment_range: InvestmentRange {
                min: proposal.investment_min,
                max: proposal.investment_max,
            },
            expected_roi: proposal.expected_roi,
            investment_horizon: proposal.investment_horizon,
            proposal_note: proposal.proposal_note,
            created_at: proposal.created_at,
            updated_at: proposal.updated_at,
        }
    }
}
