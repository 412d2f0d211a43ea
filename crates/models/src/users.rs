use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Row shape for the `users` table. Ids are assigned by the backend's
/// auto-increment sequence. Email is deliberately not unique: repeated
/// registrations land as separate rows.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
