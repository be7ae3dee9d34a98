use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::config::Config;
use crate::error::AppError;
use crate::services::session::{AdminCredentials, SessionSigner};
use crate::services::uploads::UploadStore;
use crate::store;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    pub uploads: UploadStore,
    pub admin: Arc<AdminCredentials>,
    pub sessions: SessionSigner,
}

impl AppState {
    /// Connect, migrate, seed default settings, create the upload directories
    /// and hash the admin password.
    pub async fn initialize(config: Config) -> Result<Self, AppError> {
        let db = connect(&config.database_url).await?;

        let uploads = UploadStore::new(config.upload_dir.clone());
        uploads.ensure_dirs().await?;
        tracing::info!(root = %uploads.root().display(), "upload directories ready");

        let admin = AdminCredentials::new(&config.admin_username, &config.admin_password)?;
        let sessions = SessionSigner::new(&config.secret_key);

        Ok(Self {
            db,
            config: Arc::new(config),
            uploads,
            admin: Arc::new(admin),
            sessions,
        })
    }
}

/// Open the database, apply pending migrations and seed default settings.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, AppError> {
    let db = Database::connect(database_url).await?;
    tracing::info!("database connected");

    Migrator::up(&db, None).await?;
    tracing::info!("database migrations applied");

    store::settings::seed_defaults(&db).await?;
    Ok(db)
}
