use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One row of the site-wide key-value settings table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "chave")]
    pub key: String,
    #[sea_orm(column_name = "valor", column_type = "Text")]
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
