use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set,
};

use crate::entities::gallery_image::{self, Entity as GalleryImage};
use crate::error::{AppError, AppResult};

/// Append a stored image to the gallery with display order max+1 (1 for the
/// first image).
pub async fn add_image(db: &DatabaseConnection, filename: &str) -> AppResult<gallery_image::Model> {
    let max: Option<Option<i32>> = GalleryImage::find()
        .select_only()
        .column_as(gallery_image::Column::Position.max(), "max_position")
        .into_tuple()
        .one(db)
        .await?;
    let position = max.flatten().map_or(1, |m| m + 1);

    let image = gallery_image::ActiveModel {
        filename: Set(filename.to_string()),
        position: Set(position),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!(image_id = image.id, position, "gallery image added");
    Ok(image)
}

pub async fn list_images(db: &DatabaseConnection) -> AppResult<Vec<gallery_image::Model>> {
    Ok(GalleryImage::find()
        .order_by_asc(gallery_image::Column::Position)
        .order_by_asc(gallery_image::Column::Id)
        .all(db)
        .await?)
}

/// Delete a gallery row. The caller removes the file.
pub async fn delete_image(db: &DatabaseConnection, id: i32) -> AppResult<gallery_image::Model> {
    let image = GalleryImage::find_by_id(id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound("Imagem não encontrada.".to_string()))?;
    GalleryImage::delete_by_id(id).exec(db).await?;
    tracing::info!(image_id = id, "gallery image deleted");
    Ok(image)
}
