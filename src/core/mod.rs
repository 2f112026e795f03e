//! Browser-independent models and rules behind the site's interactive behavior

pub mod animation;
#[cfg(feature = "ssr")]
pub mod config;
pub mod error;
pub mod forms;
pub mod geometry;
pub mod lifecycle;
pub mod notification;
pub mod rate_limit;
pub mod reveal;
pub mod scroll;
pub mod settings;
pub mod submission;
pub mod tasks;
#[cfg(test)]
mod tests;
pub mod validation;
pub mod widgets;

pub use error::{FormError, SubmissionError};
pub use forms::{FieldErrors, FormData, FormEvent, FormKind, FormPhase, validate_form};
pub use notification::{Notification, NotificationKind, NotificationQueue};
pub use settings::{EffectSettings, SiteSettings};
pub use submission::{
    FormSurface, FormTracker, LogTracker, SimulatedSubmitter, SubmissionOutcome, Submitter,
    run_submission,
};
pub use validation::{FieldKind, FieldSpec, ValidationError};
