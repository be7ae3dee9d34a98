use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Membros::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Membros::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Membros::Nome).string().not_null())
                    .col(ColumnDef::new(Membros::Email).string().not_null().unique_key())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Membros::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Membros {
    Table,
    Id,
    Nome,
    Email,
}
