//! # ps-app
//!
//! Application layer for PrintStop: the interactive checkout session and
//! the sign-in use cases, wired to infrastructure through ports.

pub mod checkout;
pub mod deps;
pub mod persistence;
pub mod usecases;

pub use checkout::{CheckoutError, CheckoutSession};
pub use deps::AppDeps;
