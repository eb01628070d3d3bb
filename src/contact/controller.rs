//! Contact form controller
//!
//! Owns the form input and drives one submission at a time through the
//! delivery collaborator:
//!
//! ```text
//! Idle --submit (valid)--> Submitting --settle(Ok)--> Succeeded
//!                                      --settle(Err)-> Failed
//! Succeeded | Failed --next submit--> Idle
//! ```
//!
//! `submit` only validates and marks the form busy. The returned
//! [`PendingDelivery`] does the network call and can be moved onto a task, so
//! the UI keeps drawing while the relay works. The [`SettledDelivery`] it
//! yields still holds the busy flag; the flag clears only once
//! [`ContactFormController::settle`] has applied the outcome.

use super::busy::{BusyFlag, BusyGuard};
use super::form::{ContactField, FormState, ValidationError};
use crate::delivery::{DeliveryError, MessageDelivery, TemplateParams};
use crate::state::Notification;
use std::sync::Arc;

/// Result of one delivery attempt
pub type DeliveryOutcome = Result<(), DeliveryError>;

/// Where the form is in its submission flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// A validated submission waiting to be sent
///
/// Holds the busy guard. Dropping it unsent clears the flag.
pub struct PendingDelivery {
    params: TemplateParams,
    delivery: Arc<dyn MessageDelivery>,
    guard: BusyGuard,
}

impl PendingDelivery {
    #[cfg(test)]
    pub fn params(&self) -> &TemplateParams {
        &self.params
    }

    /// Call the collaborator once on its own task
    ///
    /// A panic inside the collaborator comes back as [`DeliveryError::Task`].
    /// The busy guard stays out of that task and travels on with the outcome.
    pub async fn deliver(self) -> SettledDelivery {
        let Self {
            params,
            delivery,
            guard,
        } = self;
        let outcome = match tokio::spawn(async move { delivery.send(&params).await }).await {
            Ok(outcome) => outcome,
            Err(err) => Err(DeliveryError::Task(err.to_string())),
        };
        SettledDelivery { outcome, guard }
    }
}

/// A finished delivery that has not been applied to the form yet
///
/// The form counts as busy until this is passed to `settle` or dropped.
pub struct SettledDelivery {
    outcome: DeliveryOutcome,
    guard: BusyGuard,
}

impl SettledDelivery {
    #[cfg(test)]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Mediates between raw form input and the delivery collaborator
pub struct ContactFormController {
    form: FormState,
    status: SubmissionStatus,
    busy: BusyFlag,
    delivery: Arc<dyn MessageDelivery>,
    recipient_name: String,
}

impl ContactFormController {
    pub fn new(delivery: Arc<dyn MessageDelivery>, recipient_name: impl Into<String>) -> Self {
        Self {
            form: FormState::default(),
            status: SubmissionStatus::Idle,
            busy: BusyFlag::default(),
            delivery,
            recipient_name: recipient_name.into(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// True while a delivery is in flight; the send trigger stays disabled
    pub fn is_busy(&self) -> bool {
        self.busy.is_set()
    }

    /// Replace one field's value. No content rules apply.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value.into());
    }

    /// Append a typed character to a field
    pub fn input_char(&mut self, field: ContactField, c: char) {
        let mut value = self.form.get(field).to_string();
        value.push(c);
        self.update_field(field, value);
    }

    /// Delete the last character of a field
    pub fn backspace(&mut self, field: ContactField) {
        let mut value = self.form.get(field).to_string();
        if value.pop().is_some() {
            self.update_field(field, value);
        }
    }

    /// Validate the form and, if complete, start a submission
    ///
    /// On a validation failure nothing changes beyond the status returning to
    /// `Idle`. Callers must not submit again while [`is_busy`](Self::is_busy).
    pub fn submit(&mut self) -> Result<PendingDelivery, ValidationError> {
        self.status = SubmissionStatus::Idle;
        self.form.validate()?;

        let params = TemplateParams::from_form(&self.form, &self.recipient_name);
        let guard = self.busy.acquire();
        self.status = SubmissionStatus::Submitting;
        tracing::info!(from_email = %params.from_email, "contact: submitting message");

        Ok(PendingDelivery {
            params,
            delivery: Arc::clone(&self.delivery),
            guard,
        })
    }

    /// Apply a settled delivery and produce the notification to show
    ///
    /// The busy flag is released after the status and form are updated.
    pub fn settle(&mut self, settled: SettledDelivery) -> Notification {
        if self.status != SubmissionStatus::Submitting {
            tracing::warn!(status = ?self.status, "contact: settling without a submission in flight");
        }

        let SettledDelivery { outcome, guard } = settled;
        let notification = match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Succeeded;
                self.form.clear();
                tracing::info!("contact: message delivered");
                Notification::new(
                    "Success!",
                    "Your message has been sent successfully. I'll get back to you soon!",
                )
            }
            Err(err) => {
                self.status = SubmissionStatus::Failed;
                tracing::error!(error = %err, "contact: delivery failed");
                Notification::destructive(
                    "Error",
                    "Failed to send message. Please try again or contact me directly.",
                )
            }
        };
        drop(guard);
        notification
    }
}

impl From<&ValidationError> for Notification {
    fn from(_: &ValidationError) -> Self {
        Notification::destructive("Error", "Please fill in all fields.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::MockMessageDelivery;
    use crate::state::ToastVariant;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    const OWNER: &str = "Boya Siva Sai Kumar";

    fn form(name: &str, email: &str, message: &str) -> FormState {
        FormState {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    fn controller_with(mock: MockMessageDelivery, initial: &FormState) -> ContactFormController {
        let mut controller = ContactFormController::new(Arc::new(mock), OWNER);
        for field in ContactField::ALL {
            controller.update_field(field, initial.get(field));
        }
        controller
    }

    fn rejected() -> DeliveryError {
        DeliveryError::Rejected {
            status: 400,
            body: "The Public Key is invalid".to_string(),
        }
    }

    /// Delivery that blocks until the test opens the gate
    struct GatedDelivery {
        gate: Arc<Notify>,
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl MessageDelivery for GatedDelivery {
        async fn send(&self, _params: &TemplateParams) -> Result<(), DeliveryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            if self.fail {
                Err(rejected())
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_new_controller_is_idle_and_empty() {
        let controller = ContactFormController::new(Arc::new(MockMessageDelivery::new()), OWNER);
        assert_eq!(controller.status(), SubmissionStatus::Idle);
        assert_eq!(controller.form(), &FormState::default());
        assert!(!controller.is_busy());
    }

    #[test]
    fn test_update_field_leaves_others_untouched() {
        let mut controller = controller_with(MockMessageDelivery::new(), &form("Alice", "a@x.com", "Hi"));
        controller.update_field(ContactField::Message, "Hello there");
        assert_eq!(controller.form(), &form("Alice", "a@x.com", "Hello there"));
    }

    #[test]
    fn test_keystroke_helpers() {
        let mut controller = ContactFormController::new(Arc::new(MockMessageDelivery::new()), OWNER);
        controller.input_char(ContactField::Name, 'B');
        controller.input_char(ContactField::Name, 'o');
        controller.input_char(ContactField::Name, 'x');
        controller.backspace(ContactField::Name);
        controller.input_char(ContactField::Name, 'b');
        controller.backspace(ContactField::Email);
        assert_eq!(controller.form(), &form("Bob", "", ""));
    }

    #[tokio::test]
    async fn test_successful_delivery_resets_form() {
        let mut mock = MockMessageDelivery::new();
        mock.expect_send()
            .withf(|p| {
                p == &TemplateParams {
                    from_name: "Alice".to_string(),
                    from_email: "a@x.com".to_string(),
                    message: "Hi".to_string(),
                    to_name: OWNER.to_string(),
                }
            })
            .times(1)
            .returning(|_| Ok(()));
        let mut controller = controller_with(mock, &form("Alice", "a@x.com", "Hi"));

        let pending = controller.submit().unwrap();
        assert_eq!(controller.status(), SubmissionStatus::Submitting);
        assert!(controller.is_busy());

        let settled = pending.deliver().await;
        assert!(settled.is_ok());
        assert!(controller.is_busy(), "busy until the outcome is applied");

        let notice = controller.settle(settled);
        assert_eq!(notice.title, "Success!");
        assert_eq!(notice.variant, ToastVariant::Default);
        assert_eq!(controller.status(), SubmissionStatus::Succeeded);
        assert_eq!(controller.form(), &FormState::default());
        assert!(!controller.is_busy());
    }

    #[test]
    fn test_empty_name_blocks_send() {
        let mut mock = MockMessageDelivery::new();
        mock.expect_send().never();
        let initial = form("", "a@x.com", "Hi");
        let mut controller = controller_with(mock, &initial);

        let err = controller.submit().err().unwrap();
        assert_eq!(err.missing, vec![ContactField::Name]);

        let notice = Notification::from(&err);
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.description, "Please fill in all fields.");
        assert_eq!(notice.variant, ToastVariant::Destructive);

        assert_eq!(controller.form(), &initial);
        assert_eq!(controller.status(), SubmissionStatus::Idle);
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn test_failed_delivery_preserves_input() {
        let mut mock = MockMessageDelivery::new();
        mock.expect_send().times(1).returning(|_| Err(rejected()));
        let initial = form("Bob", "b@x.com", "Hello");
        let mut controller = controller_with(mock, &initial);

        let settled = controller.submit().unwrap().deliver().await;
        assert!(controller.is_busy());
        let notice = controller.settle(settled);

        assert_eq!(notice.title, "Error");
        assert_eq!(
            notice.description,
            "Failed to send message. Please try again or contact me directly."
        );
        assert_eq!(notice.variant, ToastVariant::Destructive);
        assert_eq!(controller.status(), SubmissionStatus::Failed);
        assert_eq!(controller.form(), &initial);
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn test_retry_after_failure_can_succeed() {
        let mut mock = MockMessageDelivery::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(rejected()));
        mock.expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        let mut controller = controller_with(mock, &form("Bob", "b@x.com", "Hello"));

        let settled = controller.submit().unwrap().deliver().await;
        controller.settle(settled);
        assert_eq!(controller.status(), SubmissionStatus::Failed);

        let settled = controller.submit().unwrap().deliver().await;
        controller.settle(settled);
        assert_eq!(controller.status(), SubmissionStatus::Succeeded);
        assert_eq!(controller.form(), &FormState::default());
    }

    #[tokio::test]
    async fn test_next_attempt_returns_status_to_idle() {
        let mut mock = MockMessageDelivery::new();
        mock.expect_send().times(1).returning(|_| Err(rejected()));
        let mut controller = controller_with(mock, &form("Bob", "b@x.com", "Hello"));

        let settled = controller.submit().unwrap().deliver().await;
        controller.settle(settled);
        assert_eq!(controller.status(), SubmissionStatus::Failed);

        controller.update_field(ContactField::Email, "");
        assert!(controller.submit().is_err());
        assert_eq!(controller.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_panicking_collaborator_settles_as_failure() {
        struct Exploding;

        #[async_trait]
        impl MessageDelivery for Exploding {
            async fn send(&self, _params: &TemplateParams) -> Result<(), DeliveryError> {
                panic!("relay client bug");
            }
        }

        let mut controller = ContactFormController::new(Arc::new(Exploding), OWNER);
        controller.update_field(ContactField::Name, "Alice");
        controller.update_field(ContactField::Email, "a@x.com");
        controller.update_field(ContactField::Message, "Hi");

        let settled = controller.submit().unwrap().deliver().await;
        assert!(!settled.is_ok());
        assert!(controller.is_busy());

        let notice = controller.settle(settled);
        assert_eq!(notice.variant, ToastVariant::Destructive);
        assert_eq!(controller.status(), SubmissionStatus::Failed);
        assert_eq!(controller.form(), &form("Alice", "a@x.com", "Hi"));
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn test_dropping_settled_delivery_clears_busy() {
        let mut mock = MockMessageDelivery::new();
        mock.expect_send().times(1).returning(|_| Ok(()));
        let mut controller = controller_with(mock, &form("Alice", "a@x.com", "Hi"));

        let settled = controller.submit().unwrap().deliver().await;
        assert!(controller.is_busy());
        drop(settled);
        assert!(!controller.is_busy());
    }

    #[test]
    fn test_dropping_pending_delivery_clears_busy() {
        let mut mock = MockMessageDelivery::new();
        mock.expect_send().never();
        let mut controller = controller_with(mock, &form("Alice", "a@x.com", "Hi"));

        let pending = controller.submit().unwrap();
        assert!(controller.is_busy());
        drop(pending);
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn test_busy_only_while_delivery_in_flight() {
        for fail in [false, true] {
            let gate = Arc::new(Notify::new());
            let delivery = Arc::new(GatedDelivery {
                gate: Arc::clone(&gate),
                calls: AtomicUsize::new(0),
                fail,
            });
            let mut controller = ContactFormController::new(delivery.clone(), OWNER);
            controller.update_field(ContactField::Name, "Alice");
            controller.update_field(ContactField::Email, "a@x.com");
            controller.update_field(ContactField::Message, "Hi");
            assert!(!controller.is_busy());

            let pending = controller.submit().unwrap();
            assert!(controller.is_busy());

            let task = tokio::spawn(pending.deliver());
            while delivery.calls.load(Ordering::SeqCst) == 0 {
                tokio::task::yield_now().await;
            }
            assert!(controller.is_busy(), "busy must hold while the relay is pending");

            gate.notify_one();
            let settled = task.await.unwrap();
            assert_eq!(settled.is_ok(), !fail);
            assert!(
                controller.is_busy(),
                "busy must hold until the outcome is settled"
            );
            assert_eq!(controller.status(), SubmissionStatus::Submitting);

            let notice = controller.settle(settled);
            let expected = if fail {
                SubmissionStatus::Failed
            } else {
                SubmissionStatus::Succeeded
            };
            assert_eq!(controller.status(), expected);
            assert_eq!(notice.variant == ToastVariant::Destructive, fail);
            assert!(!controller.is_busy());
            assert_eq!(delivery.calls.load(Ordering::SeqCst), 1);
        }
    }

    fn maybe_empty() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), "\\PC{1,16}"]
    }

    proptest! {
        #[test]
        fn prop_any_empty_field_never_sends(
            name in maybe_empty(),
            email in maybe_empty(),
            message in maybe_empty(),
        ) {
            let initial = FormState { name, email, message };
            prop_assume!(initial.validate().is_err());

            let mut mock = MockMessageDelivery::new();
            mock.expect_send().never();
            let mut controller = controller_with(mock, &initial);

            prop_assert!(controller.submit().is_err());
            prop_assert_eq!(controller.form(), &initial);
            prop_assert!(!controller.is_busy());
            prop_assert_eq!(controller.status(), SubmissionStatus::Idle);
        }

        #[test]
        fn prop_complete_form_sends_exactly_once_with_matching_payload(
            name in "\\PC{1,16}",
            email in "\\PC{1,16}",
            message in "\\PC{1,64}",
            succeed in any::<bool>(),
        ) {
            let initial = FormState { name, email, message };
            let expected = TemplateParams::from_form(&initial, OWNER);

            let mut mock = MockMessageDelivery::new();
            mock.expect_send()
                .withf(move |p| p == &expected)
                .times(1)
                .returning(move |_| if succeed { Ok(()) } else { Err(rejected()) });
            let mut controller = controller_with(mock, &initial);

            let pending = controller.submit().unwrap();
            prop_assert_eq!(pending.params().to_name.as_str(), OWNER);
            let settled = tokio_test::block_on(pending.deliver());
            prop_assert!(controller.is_busy());
            controller.settle(settled);

            prop_assert!(!controller.is_busy());
            if succeed {
                prop_assert_eq!(controller.form(), &FormState::default());
            } else {
                prop_assert_eq!(controller.form(), &initial);
            }
        }
    }
}
