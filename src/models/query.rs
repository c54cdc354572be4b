use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::entities::queries::{self, QueryStatus};
use crate::entities::users;
use crate::models::user::UserProfile;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryListParams {
    pub status: Option<QueryStatus>,
    pub entrepreneur_id: Option<i32>,
    pub advisor_id: Option<i32>,
    /// Shorthand for advisor_id + status=answered
    pub answered_by: Option<i32>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostQueryRequest {
    pub question: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSolutionRequest {
    pub answer: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub id: i32,
    pub question: String,
    pub answer: Option<String>,
    pub status: QueryStatus,
    pub entrepreneur: Option<UserProfile>,
    pub advisor: Option<UserProfile>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl QueryResponse {
    pub fn from_model(
        query: queries::Model,
        entrepreneur: Option<users::Model>,
        advisor: Option<users::Model>,
    ) -> Self {
        QueryResponse {
            id: query.id,
            question: query.question,
            answer: query.answer,
            status: query.status,
            entrepreneur: entrepreneur.map(UserProfile::from),
            advisor: advisor.map(UserProfile::from),
            created_at: query.created_at,
            updated_at: query.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<QueryResponse>,
}
