//! SeaORM Entity for business ideas
//!
//! The status column is derived state: the connection lifecycle service
//! moves it in response to connection-request events. Owners can still
//! overwrite it through idea update (kept for product parity; the
//! override is logged and may be clobbered by later connection events).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "business_ideas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub entrepreneur_id: i32,
    pub title: String,
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub funding_required: f64,
    pub expected_roi: Option<String>,
    pub pitch_deck_url: Option<String>,
    pub status: IdeaStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

/// Funding pipeline state of an idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum IdeaStatus {
    #[sea_orm(string_value = "pending")]
    #[serde(rename = "pending")]
    Pending,
    #[sea_orm(string_value = "in discussion")]
    #[serde(rename = "in discussion")]
    InDiscussion,
    #[sea_orm(string_value = "funded")]
    #[serde(rename = "funded")]
    Funded,
    #[sea_orm(string_value = "rejected")]
    #[serde(rename = "rejected")]
    Rejected,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::EntrepreneurId",
        to = "super::users::Column::Id"
    )]
    Entrepreneur,
    #[sea_orm(has_many = "super::connection_requests::Entity")]
    ConnectionRequests,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entrepreneur.def()
    }
}

impl Related<super::connection_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConnectionRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
