use crate::order::contact::DetailsValidationError;
use crate::order::options::MAX_COPIES;
use crate::order::pricing::PricingError;
use crate::order::state::OrderStep;

/// Recoverable checkout failures.
///
/// Every variant leaves the workflow exactly where it was: `apply` either
/// returns actions and the new state, or an error and no change at all.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error(transparent)]
    InvalidDetails(#[from] DetailsValidationError),

    #[error("copies must be between 1 and {MAX_COPIES}, got {requested}")]
    CopiesOutOfRange { requested: u32 },

    #[error("an order needs at least one file")]
    NoFiles,

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("payment was cancelled")]
    PaymentCancelled,

    #[error("payment failed: {reason}")]
    PaymentFailed { reason: String },

    #[error("this action is not available in the {step:?} step")]
    InvalidEvent { step: OrderStep },
}
