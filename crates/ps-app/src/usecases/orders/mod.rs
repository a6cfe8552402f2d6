pub mod list_orders;

pub use list_orders::{ListOrders, ListOrdersError};
