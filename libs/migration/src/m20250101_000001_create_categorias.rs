use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Categorias::Table)
                    .if_not_exists()
                    .col(pk_auto(Categorias::Id))
                    .col(string_len(Categorias::Nome, 50))
                    .col(string_len_null(Categorias::Descricao, 200))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Categorias::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Categorias {
    Table,
    Id,
    Nome,
    Descricao,
}
