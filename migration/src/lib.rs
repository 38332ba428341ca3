pub use sea_orm_migration::prelude::*;

mod m20260310_000001_create_users;
mod m20260310_000002_create_menus;
mod m20260311_000001_create_orders;
mod m20260311_000002_create_order_items;
mod m20260311_000003_create_transactions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260310_000001_create_users::Migration),
            Box::new(m20260310_000002_create_menus::Migration),
            Box::new(m20260311_000001_create_orders::Migration),
            Box::new(m20260311_000002_create_order_items::Migration),
            Box::new(m20260311_000003_create_transactions::Migration),
        ]
    }
}
