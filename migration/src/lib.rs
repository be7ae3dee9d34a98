pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_interessados_table;
mod m20250301_000002_create_membros_table;
mod m20250301_000003_create_projetos_table;
mod m20250301_000004_create_projetos_membros_table;
mod m20250301_000005_create_config_table;
mod m20250301_000006_create_secoes_custom_table;
mod m20250301_000007_create_galeria_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_interessados_table::Migration),
            Box::new(m20250301_000002_create_membros_table::Migration),
            Box::new(m20250301_000003_create_projetos_table::Migration),
            Box::new(m20250301_000004_create_projetos_membros_table::Migration),
            Box::new(m20250301_000005_create_config_table::Migration),
            Box::new(m20250301_000006_create_secoes_custom_table::Migration),
            Box::new(m20250301_000007_create_galeria_table::Migration),
        ]
    }
}
