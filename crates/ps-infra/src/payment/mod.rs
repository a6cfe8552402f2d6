pub mod simulated;

pub use simulated::{SettleAs, SimulatedGateway};
