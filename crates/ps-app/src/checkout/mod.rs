//! The interactive checkout session.
//!
//! Wraps the order state machine for one signed-in user, drives the
//! payment gateway at the payment step and archives placed orders. All
//! domain decisions stay in the state machine; this layer only carries
//! out the I/O its actions call for.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, info_span, warn, Instrument};

use ps_core::auth::AuthSession;
use ps_core::order::{
    ContactDetails, OrderAction, OrderError, OrderEvent, OrderRecord, OrderStep, OrderWorkflow,
    PriceSchedule, PrintOptions, UploadCandidate,
};
use ps_core::ports::{
    ClockPort, OrderHistoryPort, PaymentGatewayPort, PaymentMethod, PaymentRequest,
};
use ps_core::UserAccount;

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("sign in to place an order")]
    NotAuthenticated,

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("enter a UPI ID to pay by UPI")]
    MissingUpiId,

    #[error("select a payment location for cash on delivery")]
    MissingPickupLocation,

    #[error("payment could not be started: {0}")]
    GatewayUnavailable(String),
}

pub struct CheckoutSession {
    user: UserAccount,
    workflow: OrderWorkflow,
    clock: Arc<dyn ClockPort>,
    gateway: Arc<dyn PaymentGatewayPort>,
    history: Arc<dyn OrderHistoryPort>,
}

impl CheckoutSession {
    /// Begin checkout for the signed-in user.
    ///
    /// The session predicate is the only door in: an anonymous session
    /// cannot obtain a `CheckoutSession`.
    pub fn begin(
        auth: &AuthSession,
        schedule: PriceSchedule,
        order_prefix: impl Into<String>,
        clock: Arc<dyn ClockPort>,
        gateway: Arc<dyn PaymentGatewayPort>,
        history: Arc<dyn OrderHistoryPort>,
    ) -> Result<Self, CheckoutError> {
        let user = auth
            .current_user
            .clone()
            .ok_or(CheckoutError::NotAuthenticated)?;

        Ok(Self {
            user,
            workflow: OrderWorkflow::new(schedule, order_prefix),
            clock,
            gateway,
            history,
        })
    }

    pub fn user(&self) -> &UserAccount {
        &self.user
    }

    pub fn step(&self) -> OrderStep {
        self.workflow.step()
    }

    pub fn total_price(&self) -> Option<Decimal> {
        self.workflow.total_price()
    }

    /// Read access to the draft for the presentation layer.
    pub fn workflow(&self) -> &OrderWorkflow {
        &self.workflow
    }

    pub fn add_files(
        &mut self,
        candidates: Vec<UploadCandidate>,
    ) -> Result<Vec<OrderAction>, CheckoutError> {
        self.apply(OrderEvent::AddFiles { candidates })
    }

    pub fn remove_file(&mut self, name: &str) -> Result<Vec<OrderAction>, CheckoutError> {
        self.apply(OrderEvent::RemoveFile {
            name: name.to_string(),
        })
    }

    pub fn change_options(
        &mut self,
        options: PrintOptions,
    ) -> Result<Vec<OrderAction>, CheckoutError> {
        self.apply(OrderEvent::ChangeOptions { options })
    }

    pub fn submit_details(
        &mut self,
        details: ContactDetails,
    ) -> Result<Vec<OrderAction>, CheckoutError> {
        self.apply(OrderEvent::SubmitDetails { details })
    }

    pub fn go_back(&mut self) -> Result<Vec<OrderAction>, CheckoutError> {
        self.apply(OrderEvent::GoBack)
    }

    pub fn start_new_order(&mut self) -> Result<Vec<OrderAction>, CheckoutError> {
        self.apply(OrderEvent::StartNewOrder)
    }

    /// Run one gateway round-trip for the frozen total.
    ///
    /// Success places the order and archives it; a cancelled or failed
    /// settlement keeps the draft and the payment step so the user can
    /// retry with nothing lost.
    pub async fn pay(&mut self, method: PaymentMethod) -> Result<OrderRecord, CheckoutError> {
        let span = info_span!("checkout.pay", user = %self.user.id);

        async {
            match &method {
                PaymentMethod::Upi { upi_id } if upi_id.trim().is_empty() => {
                    return Err(CheckoutError::MissingUpiId);
                }
                PaymentMethod::CashOnDelivery { pickup_location }
                    if pickup_location.trim().is_empty() =>
                {
                    return Err(CheckoutError::MissingPickupLocation);
                }
                _ => {}
            }

            let step = self.workflow.step();
            let amount = match (step, self.workflow.total_price()) {
                (OrderStep::Payment, Some(amount)) => amount,
                _ => return Err(CheckoutError::Order(OrderError::InvalidEvent { step })),
            };

            let request = PaymentRequest {
                amount,
                currency: self.workflow.schedule().currency.clone(),
                method,
                note: format!(
                    "{} file(s), {} page(s)",
                    self.workflow.files().len(),
                    self.workflow.total_pages()
                ),
            };

            let outcome = self
                .gateway
                .initiate(request)
                .await
                .map_err(|e| CheckoutError::GatewayUnavailable(e.to_string()))?;

            let actions = self
                .workflow
                .apply_at(OrderEvent::ResolvePayment { outcome }, self.clock.now())?;

            let record = actions
                .into_iter()
                .find_map(|action| match action {
                    OrderAction::OrderCompleted { record, .. } => Some(record),
                    _ => None,
                })
                .ok_or(CheckoutError::Order(OrderError::InvalidEvent { step }))?;

            // The order stands even if archiving it does not.
            if let Err(error) = self.history.append(&self.user.id, &record).await {
                warn!(%error, "order placed but history write failed");
            }

            info!(order = %record.order_number, "order placed");
            Ok(record)
        }
        .instrument(span)
        .await
    }

    fn apply(&mut self, event: OrderEvent) -> Result<Vec<OrderAction>, CheckoutError> {
        Ok(self.workflow.apply_at(event, self.clock.now())?)
    }
}
