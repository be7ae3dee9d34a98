use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::utils::text::escape_html;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    /// Input rejected by a form rule; shown to the admin as a flash message.
    #[error("{0}")]
    Validation(String),
    /// Uniqueness violation; shown to the admin as a flash message.
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    InternalServerError(String),
}

impl AppError {
    /// Errors the user can fix by resubmitting the form.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            AppError::Validation(msg) | AppError::Conflict(msg) => Some(msg),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Database(e) => {
                tracing::error!(error = %e, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro interno do servidor".to_string())
            }
            AppError::Io(e) => {
                tracing::error!(error = %e, "filesystem error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro interno do servidor".to_string())
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro interno do servidor".to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) | AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        let body = Html(format!(
            "<!DOCTYPE html><html lang=\"pt-BR\"><head><meta charset=\"UTF-8\"><title>Erro</title></head>\
             <body><h1>{}</h1><p>{}</p><a href=\"/\">Voltar</a></body></html>",
            status.as_u16(),
            escape_html(&message)
        ));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
