use serde::{Deserialize, Serialize};

/// Checkout step, in strict linear order.
///
/// Replaces the numeric step counter of the order page with named states;
/// an out-of-range step value is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStep {
    Upload,
    Details,
    Payment,
    Confirmation,
}
