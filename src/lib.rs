// src/lib.rs

use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
}

pub mod entities {
    pub mod prelude;

    pub mod menus;
    pub mod order_items;
    pub mod orders;
    pub mod transactions;
    pub mod users;
}

pub mod services {
    pub mod order_writer;
}

pub mod models;
pub mod handlers;

/// All API routes over the shared application state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route(
            "/menu",
            get(handlers::menu::get_all_menus).post(handlers::menu::create_menu),
        )
        .route(
            "/menu/{id}",
            get(handlers::menu::get_menu_by_id)
                .put(handlers::menu::update_menu)
                .delete(handlers::menu::delete_menu),
        )
        .route(
            "/orders",
            get(handlers::order::get_all_orders).post(handlers::order::create_order),
        )
        .route(
            "/orders/stats/{category}",
            get(handlers::order::get_order_stat_category),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "POS backend up"
}
