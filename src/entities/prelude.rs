pub use super::menus::Entity as Menus;
pub use super::order_items::Entity as OrderItems;
pub use super::orders::Entity as Orders;
pub use super::transactions::Entity as Transactions;
pub use super::users::Entity as Users;
