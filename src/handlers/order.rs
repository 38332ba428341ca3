use std::collections::HashMap;

use axum::{Json, extract::Path, extract::State, http::StatusCode};
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::AppState;
use crate::entities::{menus, order_items, orders, prelude::*, transactions};
use crate::models::order::{
    CategoryStat, CategoryStatsResponse, CreateOrderRequest, CreateOrderResponse, ErrorResponse,
    OrderDetail, OrderItemDetail, OrdersResponse,
};
use crate::services::order_writer::{self, OrderWriteError};

/// POST /orders — persist order, line items and payment atomically.
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<CreateOrderResponse>), (StatusCode, Json<ErrorResponse>)> {
    match order_writer::create_order(&*state.db, &payload).await {
        Ok(receipt) => Ok((
            StatusCode::CREATED,
            Json(CreateOrderResponse {
                message: "Order and payment recorded".to_string(),
                order_id: receipt.order_id,
                no_order: receipt.no_order,
                transaction_id: receipt.transaction_id,
                order_status: receipt.status,
            }),
        )),
        Err(OrderWriteError::InvalidRequest(msg)) => {
            Err((StatusCode::BAD_REQUEST, Json(ErrorResponse { error: msg })))
        }
        Err(OrderWriteError::Persistence(e)) => {
            tracing::error!("failed to create order: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to create order: {}", e),
                }),
            ))
        }
    }
}

/// GET /orders — every order, newest first, with its payment record and item
/// lines joined against the menu catalog. Reads committed data only.
pub async fn get_all_orders(
    State(state): State<AppState>,
) -> Result<Json<OrdersResponse>, (StatusCode, Json<ErrorResponse>)> {
    let order_rows = Orders::find()
        .order_by_desc(orders::Column::Date)
        .all(&*state.db)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Database error: {}", e),
                }),
            )
        })?;

    let payment_rows = Transactions::find().all(&*state.db).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Database error: {}", e),
            }),
        )
    })?;

    let item_rows = OrderItems::find().all(&*state.db).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Database error: {}", e),
            }),
        )
    })?;

    let menu_rows = Menus::find().all(&*state.db).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Database error: {}", e),
            }),
        )
    })?;

    let menus_by_id: HashMap<i32, menus::Model> =
        menu_rows.into_iter().map(|m| (m.id, m)).collect();

    let payments_by_order: HashMap<i32, transactions::Model> =
        payment_rows.into_iter().map(|t| (t.order_id, t)).collect();

    let mut items_by_order: HashMap<i32, Vec<OrderItemDetail>> = HashMap::new();
    for item in item_rows {
        let menu = menus_by_id.get(&item.menu_id);
        items_by_order
            .entry(item.order_id)
            .or_default()
            .push(OrderItemDetail {
                menu_id: item.menu_id,
                menu_name: menu.map(|m| m.name.clone()),
                menu_category: menu.map(|m| m.category.clone()),
                price: item.price,
                quantity: item.quantity,
                notes: item.notes,
            });
    }

    let orders = order_rows
        .into_iter()
        .map(|order| {
            let payment = payments_by_order.get(&order.id);
            OrderDetail {
                order_id: order.id,
                no_order: order.no_order,
                no_table: order.no_table,
                date: order.date,
                order_type: order.order_type,
                customer_name: order.customer_name,
                sub_total: order.sub_total,
                tax: order.tax,
                total: order.total,
                order_status: order.status,
                user_id: order.user_id,
                transaction_id: payment.map(|t| t.id),
                amount_received: payment.map(|t| t.amount_received),
                amount_change: payment.map(|t| t.amount_change),
                transaction_status: payment.map(|t| t.status.clone()),
                transaction_date: payment.map(|t| t.transaction_date),
                items: items_by_order.remove(&order.id).unwrap_or_default(),
            }
        })
        .collect();

    Ok(Json(OrdersResponse { orders }))
}

/// GET /orders/stats/{category} — quantity sold per menu name within one
/// menu category.
pub async fn get_order_stat_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<CategoryStatsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let details = OrderItems::find()
        .select_only()
        .column_as(menus::Column::Name, "name")
        .column_as(order_items::Column::Quantity.sum(), "total")
        .join(JoinType::InnerJoin, order_items::Relation::Menus.def())
        .filter(menus::Column::Category.eq(&category))
        .group_by(menus::Column::Name)
        .into_model::<CategoryStat>()
        .all(&*state.db)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Database error: {}", e),
                }),
            )
        })?;

    Ok(Json(CategoryStatsResponse { details }))
}
