use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::order::contact::ContactDetails;
use crate::order::file::{FileRecord, RejectedFile};
use crate::order::options::PrintOptions;
use crate::order::record::OrderRecord;
use crate::order::state::OrderStep;

/// What the operator needs to prepare an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub files: Vec<FileRecord>,
    pub options: PrintOptions,
    pub contact: ContactDetails,
    pub total_pages: u32,
    pub total_price: Decimal,
}

/// Facts produced by checkout transitions, in the order they happened.
///
/// The state machine performs no I/O; the application layer consumes these
/// to notify listeners, dispatch to the operator and persist history. A
/// file change is always reported before the price it caused, and the price
/// before the step transition it gated.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Intake accepted these uploads and appended them to the order.
    FilesAccepted { files: Vec<FileRecord> },

    /// Intake turned these candidates away; the rest of the batch stands.
    FilesRejected { rejected: Vec<RejectedFile> },

    /// A file was removed from the order.
    FileRemoved { name: String },

    /// The running total changed because files or options did.
    PriceRecomputed { total: Decimal },

    /// The flow moved to a new step.
    EnteredStep { step: OrderStep },

    /// Dispatch the order summary to the stationery operator.
    NotifyOperator { summary: OrderSummary },

    /// Payment settled; the order is placed. Confirmation goes to `email`.
    OrderCompleted { record: OrderRecord, email: String },
}
