use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Galeria::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Galeria::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Galeria::Arquivo).string().not_null())
                    .col(ColumnDef::new(Galeria::Ordem).integer().not_null().default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Galeria::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Galeria {
    Table,
    Id,
    Arquivo,
    Ordem,
}
