//! Form submission
//!
//! A validated form is handed to a [`Submitter`]. The default one simulates a
//! backend: it waits, then draws a number from an [`OutcomeSource`] and fails
//! about one time in twenty. [`run_submission`] wraps a submitter with the
//! user-facing side of the exchange: busy state on the submit control, exactly
//! one outcome notification, reset on success and the tracking hook.

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::error::SubmissionError;
use super::forms::{FormData, FormKind};
use super::notification::Notification;
use super::tasks::sleep_ms;
use super::validation::is_valid_email;

/// Simulated round-trip time
pub const SUBMIT_DELAY_MS: u32 = 1_500;

/// Draws at or below this value fail
pub const FAILURE_RATE: f64 = 0.05;

/// Submit control label while a submission is in flight
pub const BUSY_LABEL: &str = "Sending...";

/// Shown when a newsletter form is submitted with a bad address
pub const NEWSLETTER_INVALID_EMAIL: &str = "Please enter a valid email address.";

/// Source of uniform draws in `[0, 1)`
pub trait OutcomeSource {
    fn draw(&mut self) -> f64;
}

/// Always returns the same draw
#[derive(Debug, Clone, Copy)]
pub struct FixedOutcome(pub f64);

impl OutcomeSource for FixedOutcome {
    fn draw(&mut self) -> f64 {
        self.0
    }
}

/// Reproducible draws from a seeded generator
#[derive(Debug, Clone)]
pub struct SeededOutcome(StdRng);

impl SeededOutcome {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl OutcomeSource for SeededOutcome {
    fn draw(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

/// Delivers a validated form somewhere
#[allow(async_fn_in_trait)]
pub trait Submitter {
    async fn submit(&self, kind: FormKind, data: &FormData) -> Result<(), SubmissionError>;
}

/// Pretends to talk to a backend
#[derive(Debug)]
pub struct SimulatedSubmitter<O> {
    delay_ms: u32,
    failure_rate: f64,
    outcomes: RefCell<O>,
}

impl<O: OutcomeSource> SimulatedSubmitter<O> {
    pub fn new(outcomes: O) -> Self {
        Self {
            delay_ms: SUBMIT_DELAY_MS,
            failure_rate: FAILURE_RATE,
            outcomes: RefCell::new(outcomes),
        }
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        self.failure_rate = failure_rate;
        self
    }
}

impl<O: OutcomeSource> Submitter for SimulatedSubmitter<O> {
    async fn submit(&self, _kind: FormKind, _data: &FormData) -> Result<(), SubmissionError> {
        sleep_ms(self.delay_ms).await;
        let draw = self.outcomes.borrow_mut().draw();
        if draw > self.failure_rate {
            Ok(())
        } else {
            Err(SubmissionError::Simulated)
        }
    }
}

/// POSTs the fields as JSON to `{endpoint}/{kind}`
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    endpoint: String,
}

#[cfg(feature = "hydrate")]
impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[cfg(feature = "hydrate")]
impl Submitter for HttpSubmitter {
    async fn submit(&self, kind: FormKind, data: &FormData) -> Result<(), SubmissionError> {
        let url = format!("{}/{}", self.endpoint.trim_end_matches('/'), kind);
        let response = gloo_net::http::Request::post(&url)
            .json(data)
            .map_err(|e| SubmissionError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(SubmissionError::Rejected {
                status: response.status(),
            })
        }
    }
}

/// What the submission flow needs from a rendered form
pub trait FormSurface {
    /// Busy: disable the submit control and show [`BUSY_LABEL`].
    /// Not busy: enable it and restore the form's label.
    fn set_busy(&self, busy: bool);
    fn notify(&self, notification: Notification);
    fn reset(&self);
    fn close_modal(&self) {}
}

/// Holds the submit control busy until dropped
pub struct BusyGuard<'a, S: FormSurface + ?Sized> {
    surface: &'a S,
}

impl<'a, S: FormSurface + ?Sized> BusyGuard<'a, S> {
    pub fn engage(surface: &'a S) -> Self {
        surface.set_busy(true);
        Self { surface }
    }
}

impl<S: FormSurface + ?Sized> Drop for BusyGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_busy(false);
    }
}

/// Hook called after every successful submission
pub trait FormTracker {
    fn track(&self, kind: FormKind, data: &FormData);
}

/// Logs submissions to the console
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracker;

impl FormTracker for LogTracker {
    fn track(&self, kind: FormKind, data: &FormData) {
        leptos::logging::log!("Form submitted: {} ({} fields)", kind, data.len());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded,
    Failed(SubmissionError),
    /// Newsletter address failed the pre-check; nothing was sent
    InvalidEmail,
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Succeeded)
    }
}

/// Submit an already validated form and report the outcome.
///
/// Exactly one notification is shown and the submit control is restored on
/// every path. Form data is only reset after a success.
pub async fn run_submission<S, F, T>(
    kind: FormKind,
    data: &FormData,
    submitter: &S,
    surface: &F,
    tracker: &T,
) -> SubmissionOutcome
where
    S: Submitter + ?Sized,
    F: FormSurface + ?Sized,
    T: FormTracker + ?Sized,
{
    let _busy = BusyGuard::engage(surface);

    if kind == FormKind::Newsletter && !is_valid_email(data.get("email").trim()) {
        surface.notify(Notification::error(NEWSLETTER_INVALID_EMAIL));
        return SubmissionOutcome::InvalidEmail;
    }

    match submitter.submit(kind, data).await {
        Ok(()) => {
            surface.notify(Notification::success(kind.success_message()));
            surface.reset();
            if kind.closes_modal() {
                surface.close_modal();
            }
            match kind {
                FormKind::Newsletter => {
                    let email = FormData::new().with("email", data.get("email"));
                    tracker.track(kind, &email);
                }
                _ => tracker.track(kind, data),
            }
            SubmissionOutcome::Succeeded
        }
        Err(err) => {
            surface.notify(Notification::error(kind.failure_message()));
            SubmissionOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notification::NotificationKind;

    #[derive(Default)]
    pub(crate) struct RecordingSurface {
        pub busy: RefCell<Vec<bool>>,
        pub notifications: RefCell<Vec<Notification>>,
        pub resets: RefCell<u32>,
        pub modal_closed: RefCell<bool>,
    }

    impl FormSurface for RecordingSurface {
        fn set_busy(&self, busy: bool) {
            self.busy.borrow_mut().push(busy);
        }

        fn notify(&self, notification: Notification) {
            self.notifications.borrow_mut().push(notification);
        }

        fn reset(&self) {
            *self.resets.borrow_mut() += 1;
        }

        fn close_modal(&self) {
            *self.modal_closed.borrow_mut() = true;
        }
    }

    #[derive(Default)]
    struct RecordingTracker(RefCell<Vec<(FormKind, usize)>>);

    impl FormTracker for RecordingTracker {
        fn track(&self, kind: FormKind, data: &FormData) {
            self.0.borrow_mut().push((kind, data.len()));
        }
    }

    #[test]
    fn test_fixed_outcome() {
        let mut outcome = FixedOutcome(0.5);
        assert_eq!(outcome.draw(), 0.5);
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let mut a = SeededOutcome::new(7);
        let mut b = SeededOutcome::new(7);
        for _ in 0..10 {
            let draw = a.draw();
            assert!((0.0..1.0).contains(&draw));
            assert_eq!(draw, b.draw());
        }
    }

    #[test]
    fn test_busy_guard_restores_on_drop() {
        let surface = RecordingSurface::default();
        {
            let _guard = BusyGuard::engage(&surface);
            assert_eq!(*surface.busy.borrow(), vec![true]);
        }
        assert_eq!(*surface.busy.borrow(), vec![true, false]);
    }

    #[cfg(feature = "ssr")]
    mod flows {
        use super::*;

        fn contact() -> FormData {
            FormData::new()
                .with("firstName", "Ana")
                .with("email", "ana@example.com")
        }

        #[tokio::test]
        async fn test_success_notifies_once_and_resets() {
            let submitter = SimulatedSubmitter::new(FixedOutcome(0.9)).with_delay(0);
            let surface = RecordingSurface::default();
            let tracker = RecordingTracker::default();

            let outcome =
                run_submission(FormKind::Contact, &contact(), &submitter, &surface, &tracker)
                    .await;

            assert_eq!(outcome, SubmissionOutcome::Succeeded);
            let notifications = surface.notifications.borrow();
            assert_eq!(notifications.len(), 1);
            assert_eq!(notifications[0].kind, NotificationKind::Success);
            assert_eq!(notifications[0].message, FormKind::Contact.success_message());
            assert_eq!(*surface.resets.borrow(), 1);
            assert_eq!(*surface.busy.borrow(), vec![true, false]);
            assert_eq!(*tracker.0.borrow(), vec![(FormKind::Contact, 2)]);
        }

        #[tokio::test]
        async fn test_failure_keeps_data_and_restores_control() {
            let submitter = SimulatedSubmitter::new(FixedOutcome(0.01)).with_delay(0);
            let surface = RecordingSurface::default();
            let tracker = RecordingTracker::default();

            let outcome =
                run_submission(FormKind::BulkOrder, &contact(), &submitter, &surface, &tracker)
                    .await;

            assert_eq!(outcome, SubmissionOutcome::Failed(SubmissionError::Simulated));
            let notifications = surface.notifications.borrow();
            assert_eq!(notifications.len(), 1);
            assert_eq!(notifications[0].kind, NotificationKind::Error);
            assert_eq!(*surface.resets.borrow(), 0);
            assert_eq!(*surface.busy.borrow(), vec![true, false]);
            assert!(tracker.0.borrow().is_empty());
        }

        #[tokio::test]
        async fn test_boundary_draw_fails() {
            let submitter = SimulatedSubmitter::new(FixedOutcome(FAILURE_RATE)).with_delay(0);
            let result = submitter.submit(FormKind::Gift, &FormData::new()).await;
            assert_eq!(result, Err(SubmissionError::Simulated));
        }

        #[tokio::test]
        async fn test_newsletter_rejects_bad_email_without_submitting() {
            // a submission would succeed; the pre-check must short-circuit it
            let submitter = SimulatedSubmitter::new(FixedOutcome(0.9)).with_delay(0);
            let surface = RecordingSurface::default();
            let tracker = RecordingTracker::default();
            let data = FormData::new().with("email", "not-an-email");

            let outcome =
                run_submission(FormKind::Newsletter, &data, &submitter, &surface, &tracker).await;

            assert_eq!(outcome, SubmissionOutcome::InvalidEmail);
            let notifications = surface.notifications.borrow();
            assert_eq!(notifications.len(), 1);
            assert_eq!(notifications[0].message, NEWSLETTER_INVALID_EMAIL);
            assert_eq!(*surface.busy.borrow(), vec![true, false]);
            assert!(tracker.0.borrow().is_empty());
        }

        #[tokio::test]
        async fn test_gift_success_closes_modal() {
            let submitter = SimulatedSubmitter::new(FixedOutcome(0.5)).with_delay(0);
            let surface = RecordingSurface::default();

            run_submission(
                FormKind::Gift,
                &FormData::new(),
                &submitter,
                &surface,
                &LogTracker,
            )
            .await;

            assert!(*surface.modal_closed.borrow());
        }

        #[tokio::test]
        async fn test_newsletter_tracks_email_only() {
            let submitter = SimulatedSubmitter::new(FixedOutcome(0.5)).with_delay(0);
            let surface = RecordingSurface::default();
            let tracker = RecordingTracker::default();
            let data = FormData::new()
                .with("email", "leaf@example.com")
                .with("source", "footer");

            run_submission(FormKind::Newsletter, &data, &submitter, &surface, &tracker).await;

            assert_eq!(*tracker.0.borrow(), vec![(FormKind::Newsletter, 1)]);
        }
    }
}
