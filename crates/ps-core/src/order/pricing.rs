//! Deterministic price computation for an order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::order::file::FileRecord;
use crate::order::options::{Binding, ColorMode, PrintOptions};

/// Per-order pricing constants.
///
/// Configuration rather than hidden state: the same schedule and inputs
/// always produce the same total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSchedule {
    pub page_rate: Decimal,
    pub color_surcharge: Decimal,
    pub staple_fee: Decimal,
    pub spiral_fee: Decimal,
    pub currency: String,
}

impl Default for PriceSchedule {
    fn default() -> Self {
        Self {
            page_rate: Decimal::new(200, 2),
            color_surcharge: Decimal::new(200, 2),
            staple_fee: Decimal::new(50, 2),
            spiral_fee: Decimal::new(300, 2),
            currency: "INR".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    /// Upstream validation keeps `copies >= 1`; reaching this is a
    /// programming error, not user input.
    #[error("invalid print options: copies must be at least 1")]
    InvalidOptions,
}

/// Total price for `files` printed with `options`.
///
/// Fixed order of operations: sum pages, per-page base, color surcharge,
/// binding fee, then multiply the whole per-unit price by the copy count.
pub fn compute_total(
    files: &[FileRecord],
    options: &PrintOptions,
    schedule: &PriceSchedule,
) -> Result<Decimal, PricingError> {
    if options.copies < 1 {
        return Err(PricingError::InvalidOptions);
    }

    let total_pages: u64 = files
        .iter()
        .map(|f| u64::from(f.estimated_page_count))
        .sum();

    let mut base = Decimal::from(total_pages) * schedule.page_rate;

    if options.color == ColorMode::Color {
        base += schedule.color_surcharge;
    }

    match options.binding {
        Binding::Staple => base += schedule.staple_fee,
        Binding::Spiral => base += schedule.spiral_fee,
        Binding::None => {}
    }

    Ok(base * Decimal::from(options.copies))
}
