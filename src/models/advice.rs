use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::entities::{advice, users};
use crate::models::user::UserProfile;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceListParams {
    pub category: Option<String>,
    pub advisor_id: Option<i32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    /// Case-insensitive substring match over title and content
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdviceRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdviceRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceResponse {
    pub id: i32,
    pub advisor: Option<UserProfile>,
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl AdviceResponse {
    pub fn from_model(advice: advice::Model, owner: Option<users::Model>) -> Self {
        AdviceResponse {
            id: advice.id,
            advisor: owner.map(UserProfile::from),
            title: advice.title,
            content: advice.content,
            category: advice.category,
            created_at: advice.created_at,
            updated_at: advice.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<AdviceResponse>,
}
