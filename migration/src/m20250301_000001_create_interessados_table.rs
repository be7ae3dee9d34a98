use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Interessados::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Interessados::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Interessados::Nome).string().not_null())
                    .col(ColumnDef::new(Interessados::Email).string().not_null())
                    .col(ColumnDef::new(Interessados::Tipo).string().not_null())
                    .col(ColumnDef::new(Interessados::Mensagem).text())
                    .col(
                        ColumnDef::new(Interessados::DataEnvio)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_interessados_data_envio")
                    .table(Interessados::Table)
                    .col(Interessados::DataEnvio)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Interessados::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Interessados {
    Table,
    Id,
    Nome,
    Email,
    Tipo,
    Mensagem,
    DataEnvio,
}
