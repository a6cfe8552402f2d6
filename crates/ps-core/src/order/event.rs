use crate::order::contact::ContactDetails;
use crate::order::file::UploadCandidate;
use crate::order::options::PrintOptions;
use crate::ports::payment::PaymentOutcome;

/// Events that drive the checkout flow.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderEvent {
    /// User dropped files onto the upload surface.
    AddFiles { candidates: Vec<UploadCandidate> },

    /// User removed an uploaded file by name.
    RemoveFile { name: String },

    /// User changed print options on the details form.
    ChangeOptions { options: PrintOptions },

    /// User submitted the details form.
    SubmitDetails { details: ContactDetails },

    /// Navigate one step back.
    GoBack,

    /// The payment collaborator resolved (success, cancel or failure).
    ResolvePayment { outcome: PaymentOutcome },

    /// From the confirmation screen: begin a fresh order.
    StartNewOrder,
}
