use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Row shape for the `books` table. Title and author are VARCHAR(80)
/// in the schema; the length cap is enforced by the backend.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub author: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
