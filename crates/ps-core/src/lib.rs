//! # ps-core
//!
//! Core domain models and business logic for PrintStop.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod auth;
pub mod ids;
pub mod order;
pub mod ports;

// Re-export commonly used types at the crate root
pub use auth::{AuthSession, OtpEntry, OtpLedger, UserAccount, UserDirectory};
pub use ids::{OrderNumber, UserId};
pub use order::{
    ContactDetails, FileRecord, OrderRecord, OrderStep, OrderWorkflow, PriceSchedule, PrintOptions,
};
