use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::entities::{loan_offers, users};
use crate::models::user::UserProfile;

/// Listing filters; loan offers are the only paginated resource
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanOfferListParams {
    pub loan_type: Option<String>,
    pub interest_rate: Option<String>,
    pub max_amount: Option<f64>,
    pub min_amount: Option<f64>,
    pub banker_id: Option<i32>,
    pub eligibility: Option<String>,
    pub created_at_start: Option<String>,
    pub created_at_end: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub limit: Option<u64>,
    pub page: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanOfferRequest {
    pub loan_type: Option<String>,
    pub interest_rate: Option<String>,
    pub max_amount: Option<f64>,
    pub eligibility: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLoanOfferRequest {
    pub loan_type: Option<String>,
    pub interest_rate: Option<String>,
    pub max_amount: Option<f64>,
    pub eligibility: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanOfferResponse {
    pub id: i32,
    pub banker: Option<UserProfile>,
    pub loan_type: String,
    pub interest_rate: String,
    pub max_amount: f64,
    pub eligibility: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl LoanOfferResponse {
    pub fn from_model(offer: loan_offers::Model, owner: Option<users::Model>) -> Self {
        LoanOfferResponse {
            id: offer.id,
            banker: owner.map(UserProfile::from),
            loan_type: offer.loan_type,
            interest_rate: offer.interest_rate,
            max_amount: offer.max_amount,
            eligibility: offer.eligibility,
            description: offer.description,
            created_at: offer.created_at,
            updated_at: offer.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanOfferListResponse {
    pub success: bool,
    pub count: usize,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
    pub data: Vec<LoanOfferResponse>,
}
