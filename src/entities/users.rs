//! SeaORM Entity for marketplace accounts
//!
//! One row per user; the role decides which resources the account may
//! create and is immutable after signup.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub location_city: Option<String>,
    pub location_state: Option<String>,
    pub location_country: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

/// Marketplace role, fixed at signup
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum UserRole {
    #[sea_orm(string_value = "entrepreneur")]
    #[serde(rename = "entrepreneur")]
    Entrepreneur,
    #[sea_orm(string_value = "investor")]
    #[serde(rename = "investor")]
    Investor,
    #[sea_orm(string_value = "banker")]
    #[serde(rename = "banker")]
    Banker,
    #[sea_orm(string_value = "advisor")]
    #[serde(rename = "advisor")]
    Advisor,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::business_ideas::Entity")]
    BusinessIdeas,
    #[sea_orm(has_many = "super::investor_proposals::Entity")]
    InvestorProposals,
    #[sea_orm(has_many = "super::loan_offers::Entity")]
    LoanOffers,
    #[sea_orm(has_many = "super::advice::Entity")]
    Advice,
}

impl Related<super::business_ideas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessIdeas.def()
    }
}

impl Related<super::investor_proposals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvestorProposals.def()
    }
}

impl Related<super::loan_offers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LoanOffers.def()
    }
}

impl Related<super::advice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Advice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
