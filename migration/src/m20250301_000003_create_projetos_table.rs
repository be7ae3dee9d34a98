use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projetos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projetos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projetos::Titulo).string().not_null())
                    .col(ColumnDef::new(Projetos::Descricao).text().not_null())
                    .col(ColumnDef::new(Projetos::Imagem).string().not_null())
                    .col(
                        ColumnDef::new(Projetos::DataCriacao)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Projetos::LiderId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projetos_lider")
                            .from(Projetos::Table, Projetos::LiderId)
                            .to(Membros::Table, Membros::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projetos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projetos {
    Table,
    Id,
    Titulo,
    Descricao,
    Imagem,
    DataCriacao,
    LiderId,
}

#[derive(DeriveIden)]
enum Membros {
    Table,
    Id,
}
