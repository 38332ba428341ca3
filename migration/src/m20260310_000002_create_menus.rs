//! Migration to create the menu catalog table

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Menus::Table)
                    .if_not_exists()
                    .col(pk_auto(Menus::Id))
                    .col(string_null(Menus::Image))
                    .col(string(Menus::Name))
                    .col(string(Menus::Category))
                    .col(decimal(Menus::Price))
                    .col(string_null(Menus::Description))
                    .to_owned(),
            )
            .await?;

        // Dashboard statistics filter by category
        manager
            .create_index(
                Index::create()
                    .name("idx_menus_category")
                    .table(Menus::Table)
                    .col(Menus::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Menus::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Menus {
    Table,
    Id,
    Image,
    Name,
    Category,
    Price,
    Description,
}
