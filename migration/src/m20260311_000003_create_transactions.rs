//! Migration to create the payment record table
//!
//! One payment per order, written in the same database transaction as the
//! order itself.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(pk_auto(Transactions::Id))
                    .col(integer(Transactions::OrderId))
                    .col(decimal(Transactions::AmountReceived))
                    .col(decimal(Transactions::AmountChange))
                    .col(string(Transactions::Status))
                    .col(
                        timestamp_with_time_zone(Transactions::TransactionDate)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_transactions_order_id")
                    .from(Transactions::Table, Transactions::OrderId)
                    .to(Orders::Table, Orders::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        // Exactly one payment record per order
        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_order_id")
                    .table(Transactions::Table)
                    .col(Transactions::OrderId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Transactions {
    Table,
    Id,
    OrderId,
    AmountReceived,
    AmountChange,
    Status,
    TransactionDate,
}

#[derive(Iden)]
enum Orders {
    Table,
    Id,
}
