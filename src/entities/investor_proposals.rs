//! SeaORM Entity for investor proposals

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "investor_proposals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub investor_id: i32,
    /// Sector names as a JSON array of strings
    pub sectors_of_interest: Json,
    pub investment_min: f64,
    pub investment_max: f64,
    pub expected_roi: Option<String>,
    pub investment_horizon: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub proposal_note: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::InvestorId",
        to = "super::users::Column::Id"
    )]
    Investor,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Investor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
