use std::io;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::utils::text::fold_accents;

/// Image extensions accepted by every upload form (compared case-insensitively).
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// The four directories uploaded files are sorted into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadCategory {
    Carousel,
    Projects,
    Sections,
    Gallery,
}

impl UploadCategory {
    pub const ALL: [UploadCategory; 4] = [
        UploadCategory::Carousel,
        UploadCategory::Projects,
        UploadCategory::Sections,
        UploadCategory::Gallery,
    ];

    pub fn dir_name(self) -> &'static str {
        match self {
            UploadCategory::Carousel => "carousel",
            UploadCategory::Projects => "projetos",
            UploadCategory::Sections => "secoes",
            UploadCategory::Gallery => "galeria",
        }
    }
}

// Helper to get file extension
fn get_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .map(str::to_ascii_lowercase)
}

/// Whether the name carries one of [`ALLOWED_EXTENSIONS`].
pub fn allowed_file(filename: &str) -> bool {
    get_extension(filename)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Rewrite a client-supplied file name into a form safe to join onto a
/// directory: ASCII only, whitespace and path separators become `_`, anything
/// outside `[A-Za-z0-9._-]` is dropped, leading and trailing `.`/`_` are
/// stripped. May return an empty string.
pub fn sanitize_filename(name: &str) -> String {
    let folded = fold_accents(name);
    let words: Vec<&str> = folded
        .split(|c: char| c.is_whitespace() || c == '/' || c == '\\')
        .filter(|w| !w.is_empty())
        .collect();

    words
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect::<String>()
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}

/// Local-disk storage for uploaded images, rooted at the configured upload
/// directory.
#[derive(Clone, Debug)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dir(&self, category: UploadCategory) -> PathBuf {
        self.root.join(category.dir_name())
    }

    pub fn path_for(&self, category: UploadCategory, filename: &str) -> PathBuf {
        self.dir(category).join(filename)
    }

    /// Public URL of a stored file, as served under `/uploads`.
    pub fn url_for(category: UploadCategory, filename: &str) -> String {
        format!("/uploads/{}/{}", category.dir_name(), filename)
    }

    pub async fn ensure_dirs(&self) -> io::Result<()> {
        for category in UploadCategory::ALL {
            tokio::fs::create_dir_all(self.dir(category)).await?;
        }
        Ok(())
    }

    /// Validate and write an uploaded file, returning the stored file name.
    ///
    /// An existing file with the same sanitized name is overwritten. Nothing is
    /// written when validation fails.
    pub async fn save(
        &self,
        category: UploadCategory,
        original_name: &str,
        data: &[u8],
    ) -> Result<String, AppError> {
        if original_name.trim().is_empty() {
            return Err(AppError::Validation("Nenhum arquivo selecionado.".to_string()));
        }
        if !allowed_file(original_name) {
            return Err(AppError::Validation(format!(
                "Tipo de arquivo não permitido. Use: {}.",
                ALLOWED_EXTENSIONS.join(", ")
            )));
        }

        let filename = sanitize_filename(original_name);
        if filename.is_empty() || !allowed_file(&filename) {
            return Err(AppError::Validation("Nome de arquivo inválido.".to_string()));
        }

        let dir = self.dir(category);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&filename), data).await?;

        tracing::info!(category = category.dir_name(), file = %filename, size = data.len(), "upload stored");
        Ok(filename)
    }

    /// Delete a stored file. A file that is already gone is not an error.
    pub async fn remove(&self, category: UploadCategory, filename: &str) -> io::Result<()> {
        if filename.is_empty() || sanitize_filename(filename) != filename {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("refusing to delete unsafe file name {filename:?}"),
            ));
        }
        match tokio::fs::remove_file(self.path_for(category, filename)).await {
            Ok(()) => {
                tracing::info!(category = category.dir_name(), file = %filename, "upload removed");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Allowed image files currently present in a category directory, sorted
    /// by name. A missing directory lists as empty.
    pub async fn list(&self, category: UploadCategory) -> io::Result<Vec<String>> {
        let mut entries = match tokio::fs::read_dir(self.dir(category)).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if allowed_file(name) {
                    files.push(name.to_string());
                }
            }
        }
        files.sort();
        Ok(files)
    }
}
