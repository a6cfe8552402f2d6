//! Application dependencies.
//!
//! Not a builder: no construction steps, no defaults, no hidden logic —
//! just a struct that groups the ports the use cases need, plus factory
//! methods that hand out wired use cases.

use std::sync::Arc;

use ps_core::auth::AuthSession;
use ps_core::order::PriceSchedule;
use ps_core::ports::{
    ClockPort, OrderHistoryPort, OtpDeliveryPort, PaymentGatewayPort, SessionStorePort,
};

use crate::checkout::{CheckoutError, CheckoutSession};
use crate::usecases::auth::{RequestSignInCode, RestoreSession, SignOut, VerifySignInCode};
use crate::usecases::orders::ListOrders;

pub struct AppDeps {
    pub clock: Arc<dyn ClockPort>,
    pub session_store: Arc<dyn SessionStorePort>,
    pub otp_delivery: Arc<dyn OtpDeliveryPort>,
    pub payment_gateway: Arc<dyn PaymentGatewayPort>,
    pub order_history: Arc<dyn OrderHistoryPort>,
}

impl AppDeps {
    pub fn request_sign_in_code(&self, allowed_suffix: impl Into<String>) -> RequestSignInCode {
        RequestSignInCode::new(
            self.session_store.clone(),
            self.otp_delivery.clone(),
            self.clock.clone(),
            allowed_suffix,
        )
    }

    pub fn verify_sign_in_code(&self, allowed_suffix: impl Into<String>) -> VerifySignInCode {
        VerifySignInCode::new(self.session_store.clone(), self.clock.clone(), allowed_suffix)
    }

    pub fn sign_out(&self) -> SignOut {
        SignOut::new(self.session_store.clone())
    }

    pub fn restore_session(&self) -> RestoreSession {
        RestoreSession::new(self.session_store.clone())
    }

    pub fn list_orders(&self) -> ListOrders {
        ListOrders::new(self.order_history.clone())
    }

    /// Begin checkout for the signed-in user; fails for anonymous sessions.
    pub fn begin_checkout(
        &self,
        auth: &AuthSession,
        schedule: PriceSchedule,
        order_prefix: impl Into<String>,
    ) -> Result<CheckoutSession, CheckoutError> {
        CheckoutSession::begin(
            auth,
            schedule,
            order_prefix,
            self.clock.clone(),
            self.payment_gateway.clone(),
            self.order_history.clone(),
        )
    }
}
