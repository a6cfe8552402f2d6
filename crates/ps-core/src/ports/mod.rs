//! Port interfaces for the application layer.
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations, keeping the core business logic
//! independent of external dependencies.

mod clock;
pub mod order_history;
pub mod otp_delivery;
pub mod payment;
pub mod session_store;

pub use clock::*;
pub use order_history::OrderHistoryPort;
pub use otp_delivery::OtpDeliveryPort;
pub use payment::{PaymentGatewayPort, PaymentMethod, PaymentOutcome, PaymentRequest};
pub use session_store::SessionStorePort;
