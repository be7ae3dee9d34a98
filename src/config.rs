use std::env;
use std::path::PathBuf;

const DEFAULT_SECRET_KEY: &str = "troque_esta_chave_para_producao";

/// Runtime configuration, read from the environment (and `.env` when present).
///
/// | Env Var         | Default                         |
/// |-----------------|---------------------------------|
/// | `SECRET_KEY`    | development value (warns)       |
/// | `ADMIN_USER`    | `admin`                         |
/// | `ADMIN_PASS`    | `senha123`                      |
/// | `DATABASE_URL`  | `sqlite://database.db?mode=rwc` |
/// | `UPLOAD_DIR`    | `static/uploads`                |
/// | `HOST`          | `0.0.0.0`                       |
/// | `PORT`          | `3000`                          |
/// | `MAX_UPLOAD_MB` | `16`                            |
#[derive(Debug, Clone)]
pub struct Config {
    pub secret_key: String,
    pub admin_username: String,
    pub admin_password: String,
    pub database_url: String,
    pub upload_dir: PathBuf,
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Self {
        let secret_key = env::var("SECRET_KEY").unwrap_or_else(|_| {
            tracing::warn!("SECRET_KEY not set, using the development default (insecure!)");
            DEFAULT_SECRET_KEY.to_string()
        });
        let admin_username = env::var("ADMIN_USER").unwrap_or_else(|_| "admin".to_string());
        let admin_password = env::var("ADMIN_PASS").unwrap_or_else(|_| "senha123".to_string());
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://database.db?mode=rwc".to_string());
        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static/uploads"));
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_or("PORT", 3000);
        let max_upload_mb: usize = parse_or("MAX_UPLOAD_MB", 16);

        Self {
            secret_key,
            admin_username,
            admin_password,
            database_url,
            upload_dir,
            host,
            port,
            max_upload_bytes: max_upload_mb * 1024 * 1024,
        }
    }
}

fn parse_or<T: std::str::FromStr>(var: &str, default: T) -> T {
    match env::var(var) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(var, value = %raw, "invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}
