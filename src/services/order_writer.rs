//! Atomic order + payment persistence.
//!
//! One call persists the order header, every line item, and the payment record,
//! then derives the settlement status — or persists nothing at all. Validation
//! runs before any statement is issued; any data-store failure mid-sequence
//! rolls back the whole scope.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set, TransactionTrait};

use crate::entities::{order_items, orders, transactions};
use crate::models::order::{CreateOrderRequest, OrderStatus};

/// Fixed prefix for human-readable order codes.
pub const ORDER_CODE_PREFIX: &str = "ORD";

/// Payment status stored on every record written by this flow. Partial or
/// failed payment states are not modeled.
const TRANSACTION_SUCCESS: &str = "success";

#[derive(Debug)]
pub enum OrderWriteError {
    /// Caller-supplied data failed structural or business validation.
    /// Detected before any write; nothing was persisted.
    InvalidRequest(String),
    /// The data store rejected or failed during the write sequence. The
    /// transaction was rolled back; nothing was persisted.
    Persistence(DbErr),
}

impl std::fmt::Display for OrderWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderWriteError::InvalidRequest(msg) => write!(f, "invalid order request: {}", msg),
            OrderWriteError::Persistence(err) => write!(f, "order persistence failed: {}", err),
        }
    }
}

impl std::error::Error for OrderWriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OrderWriteError::InvalidRequest(_) => None,
            OrderWriteError::Persistence(err) => Some(err),
        }
    }
}

impl From<DbErr> for OrderWriteError {
    fn from(err: DbErr) -> Self {
        OrderWriteError::Persistence(err)
    }
}

/// Identifiers handed back to the caller after a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    pub order_id: i32,
    pub no_order: String,
    pub transaction_id: i32,
    pub status: OrderStatus,
}

/// Order code from the creation timestamp: prefix + `YYYYMMDDHHMMSS`.
///
/// Second resolution only. The code is a display value for receipts; the row
/// id is the uniqueness guarantee.
pub fn generate_order_code(now: DateTime<Utc>) -> String {
    format!("{}{}", ORDER_CODE_PREFIX, now.format("%Y%m%d%H%M%S"))
}

/// Change due and final order status for a given tender.
///
/// `paid` iff the amount received covers the total; change is the exact
/// decimal difference and may be negative when underpaid.
pub fn settlement(amount_received: Decimal, total: Decimal) -> (Decimal, OrderStatus) {
    let change = amount_received - total;
    let status = if amount_received >= total {
        OrderStatus::Paid
    } else {
        OrderStatus::Pending
    };
    (change, status)
}

fn validate(req: &CreateOrderRequest) -> Result<(), OrderWriteError> {
    if req.customer_name.trim().is_empty() {
        return Err(OrderWriteError::InvalidRequest(
            "customerName must not be empty".to_string(),
        ));
    }
    if req.items.is_empty() {
        return Err(OrderWriteError::InvalidRequest(
            "items must not be empty".to_string(),
        ));
    }
    for (i, item) in req.items.iter().enumerate() {
        if item.quantity <= 0 {
            return Err(OrderWriteError::InvalidRequest(format!(
                "items[{}].quantity must be greater than zero",
                i
            )));
        }
        if item.price < Decimal::ZERO {
            return Err(OrderWriteError::InvalidRequest(format!(
                "items[{}].price must not be negative",
                i
            )));
        }
    }
    if req.subtotal < Decimal::ZERO || req.tax < Decimal::ZERO || req.total < Decimal::ZERO {
        return Err(OrderWriteError::InvalidRequest(
            "subtotal, tax and total must not be negative".to_string(),
        ));
    }
    Ok(())
}

/// Persist an order, its line items and its payment record in one database
/// transaction, then derive and store the settlement status.
///
/// On success exactly one order row, one row per item and one payment row
/// exist; on any error zero rows from this call are visible.
pub async fn create_order(
    db: &DatabaseConnection,
    req: &CreateOrderRequest,
) -> Result<OrderReceipt, OrderWriteError> {
    validate(req)?;

    let now = Utc::now();
    let no_order = generate_order_code(now);
    let placed_at = now.fixed_offset();

    // The transaction rolls back on drop if any statement below fails.
    let txn = db.begin().await?;

    let order = orders::ActiveModel {
        no_order: Set(no_order.clone()),
        no_table: Set(req.table_number),
        date: Set(placed_at),
        order_type: Set(req.order_type.as_str().to_string()),
        customer_name: Set(req.customer_name.trim().to_string()),
        sub_total: Set(req.subtotal),
        tax: Set(req.tax),
        total: Set(req.total),
        status: Set(OrderStatus::Pending.as_str().to_string()),
        user_id: Set(req.user_id),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    for item in &req.items {
        order_items::ActiveModel {
            order_id: Set(order.id),
            menu_id: Set(item.menu_id),
            quantity: Set(item.quantity),
            notes: Set(item.notes.clone()),
            price: Set(item.price),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    let (amount_change, status) = settlement(req.amount_received, req.total);

    let payment = transactions::ActiveModel {
        order_id: Set(order.id),
        amount_received: Set(req.amount_received),
        amount_change: Set(amount_change),
        status: Set(TRANSACTION_SUCCESS.to_string()),
        transaction_date: Set(placed_at),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let order_id = order.id;
    let mut settled: orders::ActiveModel = order.into();
    settled.status = Set(status.as_str().to_string());
    settled.update(&txn).await?;

    txn.commit().await?;

    tracing::debug!(
        order_id,
        no_order = %no_order,
        status = status.as_str(),
        "order and payment recorded"
    );

    Ok(OrderReceipt {
        order_id,
        no_order,
        transaction_id: payment.id,
        status,
    })
}
