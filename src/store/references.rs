//! Which rows still point at a stored upload. Files are keyed by their
//! sanitized name alone, so several rows can share one file.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};

use crate::entities::{config_entry, custom_section, gallery_image, project};
use crate::error::AppResult;
use crate::models::settings::keys;
use crate::services::uploads::UploadCategory;

/// Config keys whose values are file names in the sections directory.
const SECTION_DIR_KEYS: [&str; 2] = [keys::ABOUT_IMAGE, keys::BACKGROUND_IMAGE];

/// Number of rows referencing `filename` inside `category`. Carousel files
/// have no rows and always count zero.
pub async fn count(
    db: &DatabaseConnection,
    category: UploadCategory,
    filename: &str,
) -> AppResult<u64> {
    let total = match category {
        UploadCategory::Carousel => 0,
        UploadCategory::Projects => {
            project::Entity::find()
                .filter(project::Column::Image.eq(filename))
                .count(db)
                .await?
        }
        UploadCategory::Gallery => {
            gallery_image::Entity::find()
                .filter(gallery_image::Column::Filename.eq(filename))
                .count(db)
                .await?
        }
        UploadCategory::Sections => {
            let sections = custom_section::Entity::find()
                .filter(custom_section::Column::Image.eq(filename))
                .count(db)
                .await?;
            let settings = config_entry::Entity::find()
                .filter(config_entry::Column::Key.is_in(SECTION_DIR_KEYS))
                .filter(config_entry::Column::Value.eq(filename))
                .count(db)
                .await?;
            sections + settings
        }
    };
    Ok(total)
}

pub async fn is_referenced(
    db: &DatabaseConnection,
    category: UploadCategory,
    filename: &str,
) -> AppResult<bool> {
    Ok(count(db, category, filename).await? > 0)
}
