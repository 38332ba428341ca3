use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body for menu create/update. `image` is a stored path, not an upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuPayload {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
