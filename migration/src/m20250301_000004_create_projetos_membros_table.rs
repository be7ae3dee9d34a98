use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjetosMembros::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ProjetosMembros::ProjetoId).integer().not_null())
                    .col(ColumnDef::new(ProjetosMembros::MembroId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_projetos_membros")
                            .col(ProjetosMembros::ProjetoId)
                            .col(ProjetosMembros::MembroId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projetos_membros_projeto")
                            .from(ProjetosMembros::Table, ProjetosMembros::ProjetoId)
                            .to(Projetos::Table, Projetos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projetos_membros_membro")
                            .from(ProjetosMembros::Table, ProjetosMembros::MembroId)
                            .to(Membros::Table, Membros::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjetosMembros::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjetosMembros {
    Table,
    ProjetoId,
    MembroId,
}

#[derive(DeriveIden)]
enum Projetos {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Membros {
    Table,
    Id,
}
