use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "secoes_custom")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "titulo")]
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_name = "texto", column_type = "Text")]
    pub text: String,
    #[sea_orm(column_name = "imagem")]
    pub image: Option<String>,
    #[sea_orm(column_name = "ordem")]
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
