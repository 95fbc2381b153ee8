//! User entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub login: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub activated: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sprs::Entity")]
    Sprs,
    #[sea_orm(has_many = "super::out_of_offices::Entity")]
    OutOfOffices,
}

impl Related<super::sprs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sprs.def()
    }
}

impl Related<super::out_of_offices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OutOfOffices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
