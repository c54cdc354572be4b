//! SeaORM Entity for investor connection requests
//!
//! At most one request per (investor, idea) pair; the duplicate check
//! happens at creation time in the lifecycle service. Accepted and
//! rejected requests never revert to pending.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "connection_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub investor_id: i32,
    pub business_idea_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub message: Option<String>,
    pub status: ConnectionStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ConnectionStatus {
    #[sea_orm(string_value = "pending")]
    #[serde(rename = "pending")]
    Pending,
    #[sea_orm(string_value = "accepted")]
    #[serde(rename = "accepted")]
    Accepted,
    #[sea_orm(string_value = "rejected")]
    #[serde(rename = "rejected")]
    Rejected,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::InvestorId",
        to = "super::users::Column::Id"
    )]
    Investor,
    #[sea_orm(
        belongs_to = "super::business_ideas::Entity",
        from = "Column::BusinessIdeaId",
        to = "super::business_ideas::Column::Id"
    )]
    BusinessIdea,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Investor.def()
    }
}

impl Related<super::business_ideas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessIdea.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
