//! Site forms: contact, bulk order, gift and newsletter

pub mod fields;
pub mod site_form;

pub use fields::{FieldError, FieldHandlers, FormField, SelectField, TextAreaField};
pub use site_form::{NewsletterForm, SiteForm};

use leptos::prelude::*;

use crate::core::error::SubmissionError;
use crate::core::forms::{FieldErrors, FormData, FormKind};
use crate::core::notification::Notification;
use crate::core::settings::EffectSettings;
use crate::core::submission::{FormSurface, SeededOutcome, SimulatedSubmitter, Submitter};
use crate::ui::helpers::SiteHelpers;

/// The submitter chosen from the effect settings
pub enum SiteSubmitter {
    Simulated(SimulatedSubmitter<SeededOutcome>),
    #[cfg(feature = "hydrate")]
    Http(crate::core::submission::HttpSubmitter),
}

impl SiteSubmitter {
    pub fn from_settings(settings: &EffectSettings) -> Self {
        #[cfg(feature = "hydrate")]
        {
            if let Some(endpoint) = &settings.submit_endpoint {
                return SiteSubmitter::Http(crate::core::submission::HttpSubmitter::new(
                    endpoint.clone(),
                ));
            }
        }

        SiteSubmitter::Simulated(
            SimulatedSubmitter::new(SeededOutcome::new(outcome_seed()))
                .with_delay(settings.submit_delay_ms)
                .with_failure_rate(settings.failure_rate),
        )
    }
}

impl Submitter for SiteSubmitter {
    async fn submit(&self, kind: FormKind, data: &FormData) -> Result<(), SubmissionError> {
        match self {
            SiteSubmitter::Simulated(submitter) => submitter.submit(kind, data).await,
            #[cfg(feature = "hydrate")]
            SiteSubmitter::Http(submitter) => submitter.submit(kind, data).await,
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn outcome_seed() -> u64 {
    crate::ui::effects::dom::entropy_seed()
}

#[cfg(feature = "ssr")]
fn outcome_seed() -> u64 {
    0
}

/// A rendered form as seen by the submission flow
#[derive(Clone, Copy)]
pub struct SignalSurface {
    pub values: RwSignal<FormData>,
    pub errors: RwSignal<FieldErrors>,
    pub busy: RwSignal<bool>,
    pub helpers: SiteHelpers,
    pub modal: Option<RwSignal<bool>>,
}

impl FormSurface for SignalSurface {
    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    fn notify(&self, notification: Notification) {
        self.helpers.show(notification);
    }

    fn reset(&self) {
        self.values.set(FormData::new());
        self.errors.update(FieldErrors::clear_all);
    }

    fn close_modal(&self) {
        if let Some(open) = self.modal {
            open.set(false);
        }
    }
}
