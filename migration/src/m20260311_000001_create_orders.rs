//! Migration to create the order header table
//!
//! `no_order` is indexed for receipt lookup but carries no unique constraint;
//! the code is derived from the creation timestamp at second resolution and
//! `id` is the identity.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::Id))
                    .col(string(Orders::NoOrder))
                    .col(integer_null(Orders::NoTable))
                    .col(timestamp_with_time_zone(Orders::Date))
                    .col(string(Orders::OrderType))
                    .col(string(Orders::CustomerName))
                    .col(decimal(Orders::SubTotal))
                    .col(decimal(Orders::Tax))
                    .col(decimal(Orders::Total))
                    .col(string(Orders::Status).default("pending"))
                    .col(integer(Orders::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_orders_user_id")
                    .from(Orders::Table, Orders::UserId)
                    .to(Users::Table, Users::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_no_order")
                    .table(Orders::Table)
                    .col(Orders::NoOrder)
                    .to_owned(),
            )
            .await?;

        // Sales report lists orders newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_date")
                    .table(Orders::Table)
                    .col(Orders::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Orders {
    Table,
    Id,
    NoOrder,
    NoTable,
    Date,
    OrderType,
    CustomerName,
    SubTotal,
    Tax,
    Total,
    Status,
    UserId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
