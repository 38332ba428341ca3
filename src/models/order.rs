use rust_decimal::Decimal;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Recognized order types. Anything else is rejected at deserialization,
/// before the writer is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    DineIn,
    TakeAway,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::DineIn => "dine-in",
            OrderType::TakeAway => "take-away",
        }
    }
}

/// Settlement state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub menu_id: i32,
    pub quantity: i32,
    pub price: Decimal,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub table_number: Option<i32>,
    pub order_type: OrderType,
    pub items: Vec<OrderItemRequest>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub user_id: i32,
    pub amount_received: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub message: String,
    pub order_id: i32,
    pub no_order: String,
    pub transaction_id: i32,
    pub order_status: OrderStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDetail {
    pub menu_id: i32,
    pub menu_name: Option<String>,
    pub menu_category: Option<String>,
    pub price: Decimal,
    pub quantity: i32,
    pub notes: Option<String>,
}

/// One order with its payment record and item lines, as consumed by the
/// sales-report pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub order_id: i32,
    pub no_order: String,
    pub no_table: Option<i32>,
    pub date: chrono::DateTime<chrono::FixedOffset>,
    pub order_type: String,
    pub customer_name: String,
    pub sub_total: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub order_status: String,
    pub user_id: i32,
    pub transaction_id: Option<i32>,
    pub amount_received: Option<Decimal>,
    pub amount_change: Option<Decimal>,
    pub transaction_status: Option<String>,
    pub transaction_date: Option<chrono::DateTime<chrono::FixedOffset>>,
    pub items: Vec<OrderItemDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersResponse {
    pub orders: Vec<OrderDetail>,
}

/// Aggregate row for `GET /orders/stats/{category}`.
#[derive(Debug, Clone, Serialize, Deserialize, FromQueryResult)]
pub struct CategoryStat {
    pub name: String,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStatsResponse {
    pub details: Vec<CategoryStat>,
}
