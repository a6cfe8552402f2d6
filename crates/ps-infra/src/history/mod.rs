pub mod store_history;

pub use store_history::StoreOrderHistory;
