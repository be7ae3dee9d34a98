use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SecoesCustom::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SecoesCustom::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SecoesCustom::Titulo).string().not_null())
                    .col(ColumnDef::new(SecoesCustom::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(SecoesCustom::Texto).text().not_null().default(""))
                    .col(ColumnDef::new(SecoesCustom::Imagem).string())
                    .col(ColumnDef::new(SecoesCustom::Ordem).integer().not_null().default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SecoesCustom::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SecoesCustom {
    Table,
    Id,
    Titulo,
    Slug,
    Texto,
    Imagem,
    Ordem,
}
