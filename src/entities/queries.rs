//! SeaORM Entity for entrepreneur questions answered by advisors
//!
//! status is a one-way flag: unanswered until an advisor posts a
//! solution, then answered forever.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "queries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub entrepreneur_id: i32,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    pub advisor_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub answer: Option<String>,
    pub status: QueryStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum QueryStatus {
    #[sea_orm(string_value = "unanswered")]
    #[serde(rename = "unanswered")]
    Unanswered,
    #[sea_orm(string_value = "answered")]
    #[serde(rename = "answered")]
    Answered,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::EntrepreneurId",
        to = "super::users::Column::Id"
    )]
    Entrepreneur,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entrepreneur.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
