use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::Multipart;

use crate::error::AppError;

/// A file part of a multipart form.
pub struct UploadedFile {
    pub filename: String,
    pub data: Bytes,
}

/// A fully read `multipart/form-data` body: text fields by name plus file
/// parts. File inputs left empty by the browser are dropped, so
/// [`MultipartForm::file`] returning `None` means "no file selected".
#[derive(Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl MultipartForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Dados de formulário inválidos: {e}")))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(filename) => {
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(format!("Falha ao ler o arquivo: {e}")))?;
                    if filename.is_empty() && data.is_empty() {
                        continue;
                    }
                    form.files.insert(name, UploadedFile { filename, data });
                }
                None => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(format!("Campo inválido: {e}")))?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    /// Trimmed text value, empty when the field is absent.
    pub fn text(&self, name: &str) -> &str {
        self.fields.get(name).map(|v| v.trim()).unwrap_or("")
    }

    /// Optional integer field; blank or unparsable reads as `None`.
    pub fn int(&self, name: &str) -> Option<i32> {
        parse_optional_id(self.text(name))
    }

    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files.get(name)
    }
}

/// Select boxes submit `""` for "none".
pub fn parse_optional_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}
