use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "projetos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "titulo")]
    pub title: String,
    #[sea_orm(column_name = "descricao", column_type = "Text")]
    pub description: String,
    /// Stored file name inside the projects upload directory.
    #[sea_orm(column_name = "imagem")]
    pub image: String,
    #[sea_orm(column_name = "data_criacao")]
    pub created_at: DateTime,
    #[sea_orm(column_name = "lider_id")]
    pub leader_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::LeaderId",
        to = "super::member::Column::Id",
        on_delete = "SetNull"
    )]
    Leader,
    #[sea_orm(has_many = "super::project_member::Entity")]
    ProjectMember,
}

impl Related<super::project_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectMember.def()
    }
}

// Team members, through the junction table. The leader is reached with
// `Relation::Leader` instead.
impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        super::project_member::Relation::Member.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::project_member::Relation::Project.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
