pub mod menu;
pub mod order;
