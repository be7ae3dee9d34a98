use std::collections::HashMap;

use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};

use crate::entities::config_entry::{self, Entity as ConfigEntry};
use crate::error::AppResult;
use crate::models::settings::{keys, SiteSettings};

/// Values written on first start. Seeding never overwrites a stored value.
pub const DEFAULTS: &[(&str, &str)] = &[
    (
        keys::ABOUT_TEXT,
        "Somos uma organização sem fins lucrativos dedicada a transformar a comunidade.",
    ),
    (keys::CONTACT_EMAIL, "contato@ong.org"),
    (keys::CONTACT_PHONE, ""),
    (keys::CONTACT_ADDRESS, ""),
    (keys::CONTACT_INSTAGRAM, ""),
];

pub async fn get(db: &DatabaseConnection, key: &str) -> AppResult<Option<String>> {
    Ok(ConfigEntry::find_by_id(key.to_string())
        .one(db)
        .await?
        .map(|entry| entry.value))
}

pub async fn all(db: &DatabaseConnection) -> AppResult<HashMap<String, String>> {
    Ok(ConfigEntry::find()
        .all(db)
        .await?
        .into_iter()
        .map(|entry| (entry.key, entry.value))
        .collect())
}

pub async fn site_settings(db: &DatabaseConnection) -> AppResult<SiteSettings> {
    Ok(SiteSettings::from_entries(&all(db).await?))
}

/// Insert the key, or overwrite its value when it already exists.
pub async fn upsert(db: &DatabaseConnection, key: &str, value: &str) -> AppResult<()> {
    let entry = config_entry::ActiveModel {
        key: Set(key.to_string()),
        value: Set(value.to_string()),
    };

    ConfigEntry::insert(entry)
        .on_conflict(
            OnConflict::column(config_entry::Column::Key)
                .update_column(config_entry::Column::Value)
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    tracing::debug!(key, "config value stored");
    Ok(())
}

/// Insert any of [`DEFAULTS`] that are missing.
pub async fn seed_defaults(db: &DatabaseConnection) -> AppResult<()> {
    for (key, value) in DEFAULTS {
        if get(db, key).await?.is_none() {
            upsert(db, key, value).await?;
        }
    }
    Ok(())
}
