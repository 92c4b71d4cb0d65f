use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250101_000001_create_categorias::Categorias;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Produtos::Table)
                    .if_not_exists()
                    .col(pk_auto(Produtos::Id))
                    .col(string_len(Produtos::Nome, 100))
                    .col(double(Produtos::Preco))
                    .col(integer(Produtos::CategoriaId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_produtos_categoria_id")
                            .from(Produtos::Table, Produtos::CategoriaId)
                            .to(Categorias::Table, Categorias::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_produtos_categoria_id")
                    .table(Produtos::Table)
                    .col(Produtos::CategoriaId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Produtos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Produtos {
    Table,
    Id,
    Nome,
    Preco,
    CategoriaId,
}
