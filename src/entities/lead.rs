use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A visitor-submitted interest record from the public contact form.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "interessados")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "nome")]
    pub name: String,
    pub email: String,
    #[sea_orm(column_name = "tipo")]
    pub interest: String,
    #[sea_orm(column_name = "mensagem")]
    pub message: Option<String>,
    #[sea_orm(column_name = "data_envio")]
    pub submitted_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
