//! Completed orders as they appear in a user's history.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::OrderNumber;

/// Hours between placing an order and its promised delivery.
const DELIVERY_WINDOW_HOURS: i64 = 24;

/// Fulfilment status of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
}

/// A placed order. Created exactly once, when payment succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_number: OrderNumber,
    pub placed_at: DateTime<Utc>,
    pub estimated_delivery: DateTime<Utc>,
    pub file_names: Vec<String>,
    pub total_pages: u32,
    pub total_price: Decimal,
    pub currency: String,
    pub delivery_location: String,
    pub payment_reference: String,
    pub status: OrderStatus,
}

impl OrderRecord {
    /// Delivery promise derived from the placement time.
    pub fn estimated_delivery_for(placed_at: DateTime<Utc>) -> DateTime<Utc> {
        placed_at + Duration::hours(DELIVERY_WINDOW_HOURS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn delivery_promise_is_one_day_out() {
        let placed = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(
            OrderRecord::estimated_delivery_for(placed),
            Utc.with_ymd_and_hms(2024, 3, 2, 9, 30, 0).unwrap()
        );
    }
}
