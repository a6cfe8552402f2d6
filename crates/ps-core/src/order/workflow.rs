//! Checkout state machine.
//!
//! Wraps the order draft and drives it through
//! `Upload -> Details -> Payment -> Confirmation`. The machine performs no
//! I/O: transitions return the facts they produced, and the application
//! layer carries them out.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use tracing::warn;

use crate::ids::OrderNumber;
use crate::order::action::{OrderAction, OrderSummary};
use crate::order::contact::ContactDetails;
use crate::order::error::OrderError;
use crate::order::event::OrderEvent;
use crate::order::file::{self, FileRecord, UploadCandidate};
use crate::order::options::PrintOptions;
use crate::order::pricing::{self, PriceSchedule};
use crate::order::record::{OrderRecord, OrderStatus};
use crate::order::state::OrderStep;
use crate::ports::payment::PaymentOutcome;

pub struct OrderWorkflow {
    step: OrderStep,
    files: Vec<FileRecord>,
    options: PrintOptions,
    contact: Option<ContactDetails>,
    total_price: Option<Decimal>,
    order_number: Option<OrderNumber>,
    schedule: PriceSchedule,
    order_prefix: String,
    // Order numbers handed out in this session; collisions regenerate.
    issued_numbers: HashSet<OrderNumber>,
}

impl OrderWorkflow {
    pub fn new(schedule: PriceSchedule, order_prefix: impl Into<String>) -> Self {
        Self {
            step: OrderStep::Upload,
            files: Vec::new(),
            options: PrintOptions::default(),
            contact: None,
            total_price: None,
            order_number: None,
            schedule,
            order_prefix: order_prefix.into(),
            issued_numbers: HashSet::new(),
        }
    }

    pub fn step(&self) -> OrderStep {
        self.step
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn options(&self) -> &PrintOptions {
        &self.options
    }

    pub fn contact(&self) -> Option<&ContactDetails> {
        self.contact.as_ref()
    }

    pub fn total_price(&self) -> Option<Decimal> {
        self.total_price
    }

    pub fn order_number(&self) -> Option<&OrderNumber> {
        self.order_number.as_ref()
    }

    pub fn schedule(&self) -> &PriceSchedule {
        &self.schedule
    }

    pub fn total_pages(&self) -> u32 {
        self.files.iter().map(|f| f.estimated_page_count).sum()
    }

    /// Apply a checkout event at the current time.
    pub fn apply(&mut self, event: OrderEvent) -> Result<Vec<OrderAction>, OrderError> {
        self.apply_at(event, Utc::now())
    }

    /// Apply a checkout event at an explicit point in time.
    ///
    /// On `Err` the draft is untouched: every branch validates before it
    /// mutates. Actions come back in causal order — a file change before
    /// the price it caused, the price before the step transition it gated.
    pub fn apply_at(
        &mut self,
        event: OrderEvent,
        now: DateTime<Utc>,
    ) -> Result<Vec<OrderAction>, OrderError> {
        match (self.step, event) {
            (OrderStep::Upload | OrderStep::Details, OrderEvent::AddFiles { candidates }) => {
                self.add_files(candidates)
            }

            (
                OrderStep::Upload | OrderStep::Details | OrderStep::Payment,
                OrderEvent::RemoveFile { name },
            ) => self.remove_file(&name),

            (OrderStep::Details, OrderEvent::ChangeOptions { options }) => {
                self.change_options(options)
            }

            (OrderStep::Details, OrderEvent::SubmitDetails { details }) => {
                self.submit_details(details)
            }

            (OrderStep::Payment, OrderEvent::ResolvePayment { outcome }) => {
                self.resolve_payment(outcome, now)
            }

            (OrderStep::Upload, OrderEvent::GoBack) => Ok(Vec::new()),
            (OrderStep::Details, OrderEvent::GoBack) => Ok(self.enter(OrderStep::Upload)),
            (OrderStep::Payment, OrderEvent::GoBack) => Ok(self.enter(OrderStep::Details)),

            (OrderStep::Confirmation, OrderEvent::StartNewOrder) => {
                self.files.clear();
                self.options = PrintOptions::default();
                self.contact = None;
                self.total_price = None;
                self.order_number = None;
                Ok(self.enter(OrderStep::Upload))
            }

            (step, event) => {
                warn!(?step, ?event, "invalid checkout transition");
                Err(OrderError::InvalidEvent { step })
            }
        }
    }

    fn add_files(&mut self, candidates: Vec<UploadCandidate>) -> Result<Vec<OrderAction>, OrderError> {
        let outcome = file::accept(candidates);

        let mut actions = Vec::new();
        if !outcome.rejected.is_empty() {
            actions.push(OrderAction::FilesRejected {
                rejected: outcome.rejected,
            });
        }

        // A batch with nothing acceptable changes nothing.
        if outcome.accepted.is_empty() {
            return Ok(actions);
        }

        let mut files = self.files.clone();
        files.extend(outcome.accepted.iter().cloned());
        let total = pricing::compute_total(&files, &self.options, &self.schedule)?;

        self.files = files;
        self.total_price = Some(total);
        actions.push(OrderAction::FilesAccepted {
            files: outcome.accepted,
        });
        actions.push(OrderAction::PriceRecomputed { total });

        if self.step == OrderStep::Upload {
            actions.extend(self.enter(OrderStep::Details));
        }
        Ok(actions)
    }

    fn remove_file(&mut self, name: &str) -> Result<Vec<OrderAction>, OrderError> {
        let Some(position) = self.files.iter().position(|f| f.name == name) else {
            return Ok(Vec::new());
        };

        let mut files = self.files.clone();
        files.remove(position);

        let mut actions = vec![OrderAction::FileRemoved {
            name: name.to_string(),
        }];

        if files.is_empty() {
            // An order with zero files is never payable.
            self.files = files;
            self.total_price = None;
            if self.step != OrderStep::Upload {
                actions.extend(self.enter(OrderStep::Upload));
            }
            return Ok(actions);
        }

        let total = pricing::compute_total(&files, &self.options, &self.schedule)?;
        self.files = files;
        self.total_price = Some(total);
        actions.push(OrderAction::PriceRecomputed { total });

        // The frozen price is stale now; payment must be re-approached
        // through the details step.
        if self.step == OrderStep::Payment {
            actions.extend(self.enter(OrderStep::Details));
        }
        Ok(actions)
    }

    fn change_options(&mut self, options: PrintOptions) -> Result<Vec<OrderAction>, OrderError> {
        if !options.copies_in_range() {
            return Err(OrderError::CopiesOutOfRange {
                requested: options.copies,
            });
        }

        let total = pricing::compute_total(&self.files, &options, &self.schedule)?;
        self.options = options;
        self.total_price = Some(total);
        Ok(vec![OrderAction::PriceRecomputed { total }])
    }

    fn submit_details(&mut self, details: ContactDetails) -> Result<Vec<OrderAction>, OrderError> {
        if self.files.is_empty() {
            return Err(OrderError::NoFiles);
        }

        let details = details.validated()?;

        // Recomputed at the gate; a stale running total is never trusted.
        let total = self.compute_total()?;
        self.contact = Some(details.clone());
        self.total_price = Some(total);

        let mut actions = vec![OrderAction::PriceRecomputed { total }];
        actions.extend(self.enter(OrderStep::Payment));
        actions.push(OrderAction::NotifyOperator {
            summary: OrderSummary {
                files: self.files.clone(),
                options: self.options.clone(),
                contact: details,
                total_pages: self.total_pages(),
                total_price: total,
            },
        });
        Ok(actions)
    }

    fn resolve_payment(
        &mut self,
        outcome: PaymentOutcome,
        now: DateTime<Utc>,
    ) -> Result<Vec<OrderAction>, OrderError> {
        let reference = match outcome {
            PaymentOutcome::Succeeded { reference } => reference,
            PaymentOutcome::Cancelled => return Err(OrderError::PaymentCancelled),
            PaymentOutcome::Failed { reason } => return Err(OrderError::PaymentFailed { reason }),
        };

        // Both are set by the details gate; payment cannot be reached
        // without passing it.
        let (Some(total), Some(contact)) = (self.total_price, self.contact.clone()) else {
            return Err(OrderError::InvalidEvent { step: self.step });
        };

        let order_number = self.next_order_number();
        let record = OrderRecord {
            order_number: order_number.clone(),
            placed_at: now,
            estimated_delivery: OrderRecord::estimated_delivery_for(now),
            file_names: self.files.iter().map(|f| f.name.clone()).collect(),
            total_pages: self.total_pages(),
            total_price: total,
            currency: self.schedule.currency.clone(),
            delivery_location: contact.delivery_location.clone(),
            payment_reference: reference,
            status: OrderStatus::Pending,
        };

        self.order_number = Some(order_number);
        let mut actions = vec![OrderAction::OrderCompleted {
            record,
            email: contact.email,
        }];
        actions.extend(self.enter(OrderStep::Confirmation));
        Ok(actions)
    }

    fn enter(&mut self, step: OrderStep) -> Vec<OrderAction> {
        self.step = step;
        vec![OrderAction::EnteredStep { step }]
    }

    fn compute_total(&self) -> Result<Decimal, OrderError> {
        Ok(pricing::compute_total(
            &self.files,
            &self.options,
            &self.schedule,
        )?)
    }

    fn next_order_number(&mut self) -> OrderNumber {
        let mut rng = rand::rng();
        loop {
            let candidate = OrderNumber::new(format!(
                "{}{}",
                self.order_prefix,
                rng.random_range(100_000..=999_999)
            ));
            if self.issued_numbers.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::contact::FieldError;
    use crate::order::file::{RejectReason, RejectedFile, PDF_MIME_TYPE};
    use crate::order::options::{Binding, ColorMode};
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn pdf(name: &str, size_bytes: u64) -> UploadCandidate {
        UploadCandidate {
            name: name.to_string(),
            mime_type: PDF_MIME_TYPE.to_string(),
            size_bytes,
        }
    }

    fn details() -> ContactDetails {
        ContactDetails {
            full_name: "Asha Pillai".to_string(),
            email: "asha.pillai@sakec.ac.in".to_string(),
            phone: "9876543210".to_string(),
            delivery_location: "Building A, Room 101".to_string(),
            notes: None,
        }
    }

    fn workflow() -> OrderWorkflow {
        OrderWorkflow::new(PriceSchedule::default(), "PS")
    }

    fn workflow_at_details() -> OrderWorkflow {
        let mut wf = workflow();
        wf.apply_at(
            OrderEvent::AddFiles {
                candidates: vec![pdf("a.pdf", 80_000)],
            },
            fixed_now(),
        )
        .unwrap();
        wf
    }

    fn workflow_at_payment() -> OrderWorkflow {
        let mut wf = workflow_at_details();
        wf.apply_at(
            OrderEvent::SubmitDetails { details: details() },
            fixed_now(),
        )
        .unwrap();
        wf
    }

    #[test]
    fn upload_advances_to_details_in_causal_order() {
        let mut wf = workflow();
        let actions = wf
            .apply_at(
                OrderEvent::AddFiles {
                    candidates: vec![pdf("a.pdf", 80_000)],
                },
                fixed_now(),
            )
            .unwrap();

        assert_eq!(wf.step(), OrderStep::Details);
        assert_eq!(
            actions,
            vec![
                OrderAction::FilesAccepted {
                    files: vec![FileRecord {
                        name: "a.pdf".to_string(),
                        size_bytes: 80_000,
                        estimated_page_count: 2,
                    }],
                },
                OrderAction::PriceRecomputed {
                    total: Decimal::new(400, 2),
                },
                OrderAction::EnteredStep {
                    step: OrderStep::Details,
                },
            ]
        );
    }

    #[test]
    fn all_invalid_batch_is_a_noop_not_an_error() {
        let mut wf = workflow();
        let actions = wf
            .apply_at(
                OrderEvent::AddFiles {
                    candidates: vec![UploadCandidate {
                        name: "b.png".to_string(),
                        mime_type: "image/png".to_string(),
                        size_bytes: 10,
                    }],
                },
                fixed_now(),
            )
            .unwrap();

        assert_eq!(wf.step(), OrderStep::Upload);
        assert!(wf.files().is_empty());
        assert_eq!(
            actions,
            vec![OrderAction::FilesRejected {
                rejected: vec![RejectedFile {
                    name: "b.png".to_string(),
                    reason: RejectReason::UnsupportedType,
                }],
            }]
        );
    }

    #[test]
    fn changing_options_recomputes_the_running_total() {
        let mut wf = workflow_at_details();
        let mut options = wf.options().clone();
        options.copies = 2;
        options.color = ColorMode::Color;
        options.binding = Binding::Staple;

        let actions = wf
            .apply_at(OrderEvent::ChangeOptions { options }, fixed_now())
            .unwrap();

        // ((2 * 2.00) + 2.00 + 0.50) * 2
        assert_eq!(
            actions,
            vec![OrderAction::PriceRecomputed {
                total: Decimal::new(1300, 2),
            }]
        );
        assert_eq!(wf.total_price(), Some(Decimal::new(1300, 2)));
    }

    #[test]
    fn out_of_range_copies_change_nothing() {
        let mut wf = workflow_at_details();
        let before = wf.options().clone();
        let mut options = before.clone();
        options.copies = 101;

        let err = wf
            .apply_at(OrderEvent::ChangeOptions { options }, fixed_now())
            .unwrap_err();

        assert_eq!(err, OrderError::CopiesOutOfRange { requested: 101 });
        assert_eq!(wf.options(), &before);
        assert_eq!(wf.step(), OrderStep::Details);
    }

    #[test]
    fn invalid_details_stay_on_details_with_field_errors() {
        let mut wf = workflow_at_details();
        let mut bad = details();
        bad.phone = "123".to_string();

        let err = wf
            .apply_at(OrderEvent::SubmitDetails { details: bad }, fixed_now())
            .unwrap_err();

        match err {
            OrderError::InvalidDetails(e) => {
                assert_eq!(
                    e.fields,
                    vec![FieldError {
                        field: "phone".to_string(),
                        message: "please enter a valid phone number".to_string(),
                    }]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(wf.step(), OrderStep::Details);
        assert!(wf.contact().is_none());
    }

    #[test]
    fn submitting_details_freezes_the_price_and_notifies_the_operator() {
        let mut wf = workflow_at_details();
        let actions = wf
            .apply_at(
                OrderEvent::SubmitDetails { details: details() },
                fixed_now(),
            )
            .unwrap();

        assert_eq!(wf.step(), OrderStep::Payment);
        assert_eq!(actions.len(), 3);
        assert_eq!(
            actions[0],
            OrderAction::PriceRecomputed {
                total: Decimal::new(400, 2),
            }
        );
        assert_eq!(
            actions[1],
            OrderAction::EnteredStep {
                step: OrderStep::Payment,
            }
        );
        match &actions[2] {
            OrderAction::NotifyOperator { summary } => {
                assert_eq!(summary.total_pages, 2);
                assert_eq!(summary.total_price, Decimal::new(400, 2));
                assert_eq!(summary.contact.full_name, "Asha Pillai");
            }
            other => panic!("unexpected action: {other:?}"),
        }

        // Frozen: option changes are no longer available.
        let err = wf
            .apply_at(
                OrderEvent::ChangeOptions {
                    options: PrintOptions::default(),
                },
                fixed_now(),
            )
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::InvalidEvent {
                step: OrderStep::Payment,
            }
        );
    }

    #[test]
    fn removing_the_last_file_forces_upload() {
        let mut wf = workflow_at_details();
        let actions = wf
            .apply_at(
                OrderEvent::RemoveFile {
                    name: "a.pdf".to_string(),
                },
                fixed_now(),
            )
            .unwrap();

        assert_eq!(wf.step(), OrderStep::Upload);
        assert_eq!(wf.total_price(), None);
        assert_eq!(
            actions,
            vec![
                OrderAction::FileRemoved {
                    name: "a.pdf".to_string(),
                },
                OrderAction::EnteredStep {
                    step: OrderStep::Upload,
                },
            ]
        );
    }

    #[test]
    fn removing_a_file_during_payment_restarts_details() {
        let mut wf = workflow_at_payment();
        wf.apply_at(
            OrderEvent::GoBack,
            fixed_now(),
        )
        .unwrap();
        wf.apply_at(
            OrderEvent::AddFiles {
                candidates: vec![pdf("b.pdf", 40_000)],
            },
            fixed_now(),
        )
        .unwrap();
        wf.apply_at(
            OrderEvent::SubmitDetails { details: details() },
            fixed_now(),
        )
        .unwrap();
        assert_eq!(wf.step(), OrderStep::Payment);

        let actions = wf
            .apply_at(
                OrderEvent::RemoveFile {
                    name: "b.pdf".to_string(),
                },
                fixed_now(),
            )
            .unwrap();

        assert_eq!(wf.step(), OrderStep::Details);
        assert_eq!(
            actions,
            vec![
                OrderAction::FileRemoved {
                    name: "b.pdf".to_string(),
                },
                OrderAction::PriceRecomputed {
                    total: Decimal::new(400, 2),
                },
                OrderAction::EnteredStep {
                    step: OrderStep::Details,
                },
            ]
        );
    }

    #[test]
    fn cancelled_payment_keeps_the_draft_and_the_step() {
        let mut wf = workflow_at_payment();
        let err = wf
            .apply_at(
                OrderEvent::ResolvePayment {
                    outcome: PaymentOutcome::Cancelled,
                },
                fixed_now(),
            )
            .unwrap_err();

        assert_eq!(err, OrderError::PaymentCancelled);
        assert_eq!(wf.step(), OrderStep::Payment);
        assert_eq!(wf.files().len(), 1);
        assert!(wf.order_number().is_none());
    }

    #[test]
    fn failed_payment_is_retryable() {
        let mut wf = workflow_at_payment();
        let err = wf
            .apply_at(
                OrderEvent::ResolvePayment {
                    outcome: PaymentOutcome::Failed {
                        reason: "issuer declined".to_string(),
                    },
                },
                fixed_now(),
            )
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::PaymentFailed {
                reason: "issuer declined".to_string(),
            }
        );
        assert_eq!(wf.step(), OrderStep::Payment);

        let actions = wf
            .apply_at(
                OrderEvent::ResolvePayment {
                    outcome: PaymentOutcome::Succeeded {
                        reference: "upi-771".to_string(),
                    },
                },
                fixed_now(),
            )
            .unwrap();
        assert_eq!(wf.step(), OrderStep::Confirmation);
        assert!(matches!(actions[0], OrderAction::OrderCompleted { .. }));
    }

    #[test]
    fn successful_payment_places_the_order() {
        let mut wf = workflow_at_payment();
        let actions = wf
            .apply_at(
                OrderEvent::ResolvePayment {
                    outcome: PaymentOutcome::Succeeded {
                        reference: "upi-417".to_string(),
                    },
                },
                fixed_now(),
            )
            .unwrap();

        assert_eq!(wf.step(), OrderStep::Confirmation);
        let number = wf.order_number().expect("order number assigned").clone();
        assert!(number.is_valid_for_prefix("PS"));

        match &actions[0] {
            OrderAction::OrderCompleted { record, email } => {
                assert_eq!(record.order_number, number);
                assert_eq!(record.placed_at, fixed_now());
                assert_eq!(
                    record.estimated_delivery,
                    fixed_now() + chrono::Duration::hours(24)
                );
                assert_eq!(record.file_names, vec!["a.pdf".to_string()]);
                assert_eq!(record.total_price, Decimal::new(400, 2));
                assert_eq!(record.status, OrderStatus::Pending);
                assert_eq!(record.payment_reference, "upi-417");
                assert_eq!(email, "asha.pillai@sakec.ac.in");
            }
            other => panic!("unexpected action: {other:?}"),
        }
        assert_eq!(
            actions[1],
            OrderAction::EnteredStep {
                step: OrderStep::Confirmation,
            }
        );
    }

    #[test]
    fn new_order_resets_the_draft_and_numbers_stay_unique() {
        let mut wf = workflow_at_payment();
        wf.apply_at(
            OrderEvent::ResolvePayment {
                outcome: PaymentOutcome::Succeeded {
                    reference: "upi-1".to_string(),
                },
            },
            fixed_now(),
        )
        .unwrap();
        let first = wf.order_number().unwrap().clone();

        wf.apply_at(OrderEvent::StartNewOrder, fixed_now()).unwrap();
        assert_eq!(wf.step(), OrderStep::Upload);
        assert!(wf.files().is_empty());
        assert_eq!(wf.options(), &PrintOptions::default());
        assert!(wf.total_price().is_none());
        assert!(wf.order_number().is_none());

        wf.apply_at(
            OrderEvent::AddFiles {
                candidates: vec![pdf("c.pdf", 40_000)],
            },
            fixed_now(),
        )
        .unwrap();
        wf.apply_at(
            OrderEvent::SubmitDetails { details: details() },
            fixed_now(),
        )
        .unwrap();
        wf.apply_at(
            OrderEvent::ResolvePayment {
                outcome: PaymentOutcome::Succeeded {
                    reference: "upi-2".to_string(),
                },
            },
            fixed_now(),
        )
        .unwrap();

        let second = wf.order_number().unwrap().clone();
        assert_ne!(first, second);
    }

    #[test]
    fn forward_steps_cannot_be_skipped() {
        let mut wf = workflow();
        let err = wf
            .apply_at(
                OrderEvent::SubmitDetails { details: details() },
                fixed_now(),
            )
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::InvalidEvent {
                step: OrderStep::Upload,
            }
        );

        let err = wf
            .apply_at(
                OrderEvent::ResolvePayment {
                    outcome: PaymentOutcome::Succeeded {
                        reference: "upi-9".to_string(),
                    },
                },
                fixed_now(),
            )
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::InvalidEvent {
                step: OrderStep::Upload,
            }
        );
    }

    #[test]
    fn back_navigation_walks_the_steps_in_reverse() {
        let mut wf = workflow_at_payment();
        wf.apply_at(OrderEvent::GoBack, fixed_now()).unwrap();
        assert_eq!(wf.step(), OrderStep::Details);
        wf.apply_at(OrderEvent::GoBack, fixed_now()).unwrap();
        assert_eq!(wf.step(), OrderStep::Upload);
        // Already at the first step; going back again is harmless.
        assert!(wf.apply_at(OrderEvent::GoBack, fixed_now()).unwrap().is_empty());
    }
}
