//! Release entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "releases")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub release_date: DateTimeUtc,
    pub territory: String,
    pub build: i32,
    pub release_letter: String,
    pub prefix_letter: Option<String>,
    pub database_version: String,
    pub ws_version: Option<String>,
    pub tma_version: Option<String>,
    pub port: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub new_features: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub updated_features: Option<String>,
    pub is_current: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sprs::Entity")]
    Sprs,
}

impl Related<super::sprs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sprs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
