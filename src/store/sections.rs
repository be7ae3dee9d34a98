use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::{is_unique_violation, non_blank};
use crate::entities::custom_section::{self, Entity as CustomSection};
use crate::error::{AppError, AppResult};
use crate::utils::text::slugify;

const SLUG_TAKEN: &str = "Já existe uma seção com esse título.";

#[derive(Clone, Debug)]
pub struct SectionInput {
    pub title: String,
    pub text: String,
    /// `None` appends after the last section.
    pub position: Option<i32>,
}

pub fn validate_fields(title: &str) -> AppResult<()> {
    if non_blank(title).is_none() {
        return Err(AppError::Validation(
            "O título da seção é obrigatório.".to_string(),
        ));
    }
    Ok(())
}

/// Fails with a conflict when another section already owns the slug of
/// `title`. Lets handlers reject before storing an image.
pub async fn ensure_slug_available(
    db: &DatabaseConnection,
    title: &str,
    except_id: Option<i32>,
) -> AppResult<()> {
    let mut query = CustomSection::find().filter(custom_section::Column::Slug.eq(slugify(title)));
    if let Some(id) = except_id {
        query = query.filter(custom_section::Column::Id.ne(id));
    }
    if query.one(db).await?.is_some() {
        return Err(AppError::Conflict(SLUG_TAKEN.to_string()));
    }
    Ok(())
}

pub async fn list_sections(db: &DatabaseConnection) -> AppResult<Vec<custom_section::Model>> {
    Ok(CustomSection::find()
        .order_by_asc(custom_section::Column::Position)
        .order_by_asc(custom_section::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_section(db: &DatabaseConnection, id: i32) -> AppResult<custom_section::Model> {
    CustomSection::find_by_id(id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound("Seção não encontrada.".to_string()))
}

async fn next_position(db: &DatabaseConnection) -> AppResult<i32> {
    let max: Option<Option<i32>> = CustomSection::find()
        .select_only()
        .column_as(custom_section::Column::Position.max(), "max_position")
        .into_tuple()
        .one(db)
        .await?;
    Ok(max.flatten().map_or(1, |m| m + 1))
}

pub async fn create_section(
    db: &DatabaseConnection,
    input: SectionInput,
    image: Option<String>,
) -> AppResult<custom_section::Model> {
    validate_fields(&input.title)?;
    let position = match input.position {
        Some(position) => position,
        None => next_position(db).await?,
    };

    let section = custom_section::ActiveModel {
        title: Set(input.title.trim().to_string()),
        slug: Set(slugify(&input.title)),
        text: Set(input.text.trim().to_string()),
        image: Set(image),
        position: Set(position),
        ..Default::default()
    };

    match section.insert(db).await {
        Ok(section) => {
            tracing::info!(section_id = section.id, slug = %section.slug, "section created");
            Ok(section)
        }
        Err(e) if is_unique_violation(&e) => Err(AppError::Conflict(SLUG_TAKEN.to_string())),
        Err(e) => Err(e.into()),
    }
}

/// Update a section, re-deriving its slug from the new title. Returns the
/// updated row and, when the image changed, the previous file name.
pub async fn update_section(
    db: &DatabaseConnection,
    id: i32,
    input: SectionInput,
    image: Option<String>,
) -> AppResult<(custom_section::Model, Option<String>)> {
    validate_fields(&input.title)?;
    let existing = find_section(db, id).await?;
    let previous_image = if image.is_some() { existing.image.clone() } else { None };

    let mut active = existing.into_active_model();
    active.title = Set(input.title.trim().to_string());
    active.slug = Set(slugify(&input.title));
    active.text = Set(input.text.trim().to_string());
    if let Some(position) = input.position {
        active.position = Set(position);
    }
    if image.is_some() {
        active.image = Set(image);
    }

    match active.update(db).await {
        Ok(section) => {
            tracing::info!(section_id = id, "section updated");
            Ok((section, previous_image))
        }
        Err(e) if is_unique_violation(&e) => Err(AppError::Conflict(SLUG_TAKEN.to_string())),
        Err(e) => Err(e.into()),
    }
}

/// Delete a section row. The caller removes its image file.
pub async fn delete_section(db: &DatabaseConnection, id: i32) -> AppResult<custom_section::Model> {
    let section = find_section(db, id).await?;
    CustomSection::delete_by_id(id).exec(db).await?;
    tracing::info!(section_id = id, "section deleted");
    Ok(section)
}
