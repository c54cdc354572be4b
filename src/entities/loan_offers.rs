//! SeaORM Entity for banker loan offers
//!
//! interest_rate is stored as entered ("7.5%" or "7.5"); format is
//! validated at the handler boundary.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "loan_offers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub banker_id: i32,
    pub loan_type: String,
    pub interest_rate: String,
    pub max_amount: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub eligibility: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::BankerId",
        to = "super::users::Column::Id"
    )]
    Banker,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Banker.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
