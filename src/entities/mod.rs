pub mod config_entry;
pub mod custom_section;
pub mod gallery_image;
pub mod lead;
pub mod member;
pub mod project;
pub mod project_member;
