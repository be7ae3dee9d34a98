use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use super::{is_unique_violation, non_blank};
use crate::entities::member::{self, Entity as Member};
use crate::entities::{project, project_member};
use crate::error::{AppError, AppResult};

pub async fn create_member(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
) -> AppResult<member::Model> {
    let (Some(name), Some(email)) = (non_blank(name), non_blank(email)) else {
        return Err(AppError::Validation(
            "Nome e e-mail do membro são obrigatórios.".to_string(),
        ));
    };

    let member = member::ActiveModel {
        name: Set(name),
        email: Set(email),
        ..Default::default()
    };

    match member.insert(db).await {
        Ok(member) => {
            tracing::info!(member_id = member.id, "member created");
            Ok(member)
        }
        Err(e) if is_unique_violation(&e) => Err(AppError::Conflict(
            "Já existe um membro com esse e-mail.".to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}

pub async fn list_members(db: &DatabaseConnection) -> AppResult<Vec<member::Model>> {
    Ok(Member::find()
        .order_by_asc(member::Column::Name)
        .order_by_asc(member::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_member(db: &DatabaseConnection, id: i32) -> AppResult<member::Model> {
    Member::find_by_id(id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound("Membro não encontrado.".to_string()))
}

/// Delete a member after clearing every project leadership that points at it
/// and its team memberships.
pub async fn delete_member(db: &DatabaseConnection, id: i32) -> AppResult<member::Model> {
    let member = find_member(db, id).await?;

    let txn = db.begin().await?;

    let unled = project::Entity::update_many()
        .col_expr(project::Column::LeaderId, Expr::value(Option::<i32>::None))
        .filter(project::Column::LeaderId.eq(id))
        .exec(&txn)
        .await?;

    project_member::Entity::delete_many()
        .filter(project_member::Column::MemberId.eq(id))
        .exec(&txn)
        .await?;

    Member::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(
        member_id = id,
        projects_unled = unled.rows_affected,
        "member deleted"
    );
    Ok(member)
}
