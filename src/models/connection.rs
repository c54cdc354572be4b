use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::entities::connection_requests::{self, ConnectionStatus};
use crate::models::business_idea::IdeaSummary;
use crate::models::user::UserProfile;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestConnectionRequest {
    pub business_idea_id: Option<i32>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionCreatedResponse {
    pub id: i32,
    pub business_idea_id: i32,
    pub status: ConnectionStatus,
    pub created_at: DateTimeWithTimeZone,
}

impl From<connection_requests::Model> for ConnectionCreatedResponse {
    fn from(request: connection_requests::Model) -> Self {
        ConnectionCreatedResponse {
            id: request.id,
            business_idea_id: request.business_idea_id,
            status: request.status,
            created_at: request.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionDecisionResponse {
    pub id: i32,
    pub status: ConnectionStatus,
    pub updated_at: DateTimeWithTimeZone,
}

impl From<connection_requests::Model> for ConnectionDecisionResponse {
    fn from(request: connection_requests::Model) -> Self {
        ConnectionDecisionResponse {
            id: request.id,
            status: request.status,
            updated_at: request.updated_at,
        }
    }
}

/// Role-dependent listing entry: investors see the idea (with its
/// entrepreneur) they asked about, entrepreneurs see who is asking
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionView {
    pub id: i32,
    pub message: Option<String>,
    pub status: ConnectionStatus,
    pub investor: Option<UserProfile>,
    pub business_idea: Option<IdeaSummary>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}
