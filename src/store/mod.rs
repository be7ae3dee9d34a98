//! Content store: one module per entity, each a set of async functions over a
//! `sea_orm` connection. Handlers call these and never build queries
//! themselves.

pub mod gallery;
pub mod leads;
pub mod members;
pub mod projects;
pub mod references;
pub mod sections;
pub mod settings;

use sea_orm::{DbErr, SqlErr};

/// Whether a database error is a UNIQUE constraint violation.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
        || err.to_string().contains("UNIQUE constraint failed")
}

/// Trimmed copy of a form value; `None` when blank.
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
