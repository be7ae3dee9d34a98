use sea_orm::{ConnectionTrait, Database, DbBackend, Statement};
use std::env;

// Children before parents so foreign keys never block a drop.
const TABLES: &[&str] = &[
    "galeria",
    "secoes_custom",
    "config",
    "projetos_membros",
    "projetos",
    "interessados",
    "membros",
    "seaql_migrations",
];

#[tokio::main]
async fn main() -> Result<(), sea_orm::DbErr> {
    dotenvy::dotenv().ok();
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://database.db?mode=rwc".to_string());

    let db = Database::connect(database_url).await?;

    for table in TABLES {
        db.execute(Statement::from_string(
            DbBackend::Sqlite,
            format!("DROP TABLE IF EXISTS \"{table}\";"),
        ))
        .await?;
    }
    println!("Database reset successfully");
    Ok(())
}
