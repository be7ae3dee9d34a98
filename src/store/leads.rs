use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use super::non_blank;
use crate::entities::lead::{self, Entity as Lead};
use crate::error::{AppError, AppResult};

pub const MISSING_FIELDS: &str = "Por favor preencha Nome, E-mail e Tipo de interesse.";

/// Record a contact-form submission. Name, email and interest type are
/// required; nothing is written when one is blank.
pub async fn create_lead(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    interest: &str,
    message: &str,
) -> AppResult<lead::Model> {
    let (Some(name), Some(email), Some(interest)) =
        (non_blank(name), non_blank(email), non_blank(interest))
    else {
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    };

    let lead = lead::ActiveModel {
        name: Set(name),
        email: Set(email),
        interest: Set(interest),
        message: Set(Some(message.trim().to_string())),
        submitted_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };

    let lead = lead.insert(db).await?;
    tracing::info!(lead_id = lead.id, interest = %lead.interest, "lead recorded");
    Ok(lead)
}

/// All leads, newest submission first.
pub async fn list_leads(db: &DatabaseConnection) -> AppResult<Vec<lead::Model>> {
    Ok(Lead::find()
        .order_by_desc(lead::Column::SubmittedAt)
        .order_by_desc(lead::Column::Id)
        .all(db)
        .await?)
}

pub async fn count_leads(db: &DatabaseConnection) -> AppResult<u64> {
    Ok(Lead::find().count(db).await?)
}

/// Returns `false` when no lead had that id.
pub async fn delete_lead(db: &DatabaseConnection, id: i32) -> AppResult<bool> {
    let result = Lead::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
