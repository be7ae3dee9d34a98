use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Keys of the `config` table.
pub mod keys {
    pub const ABOUT_TEXT: &str = "sobre_texto";
    pub const ABOUT_IMAGE: &str = "sobre_imagem";
    pub const BACKGROUND_IMAGE: &str = "background_imagem";
    pub const CONTACT_EMAIL: &str = "contato_email";
    pub const CONTACT_PHONE: &str = "contato_telefone";
    pub const CONTACT_ADDRESS: &str = "contato_endereco";
    pub const CONTACT_INSTAGRAM: &str = "contato_instagram";
}

/// Typed view of the site-wide settings stored as key-value rows.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SiteSettings {
    pub about_text: String,
    /// File name inside the sections upload directory.
    pub about_image: Option<String>,
    /// File name inside the sections upload directory.
    pub background_image: Option<String>,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub instagram: String,
}

impl SiteSettings {
    pub fn from_entries(entries: &HashMap<String, String>) -> Self {
        let text = |key: &str| entries.get(key).cloned().unwrap_or_default();
        let file = |key: &str| entries.get(key).filter(|v| !v.is_empty()).cloned();

        Self {
            about_text: text(keys::ABOUT_TEXT),
            about_image: file(keys::ABOUT_IMAGE),
            background_image: file(keys::BACKGROUND_IMAGE),
            contact: ContactInfo {
                email: text(keys::CONTACT_EMAIL),
                phone: text(keys::CONTACT_PHONE),
                address: text(keys::CONTACT_ADDRESS),
                instagram: text(keys::CONTACT_INSTAGRAM),
            },
        }
    }
}
