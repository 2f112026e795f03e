//! Form schemas, field values, error state and the submission phase machine

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::FormError;
use super::validation::{
    FieldKind, FieldSpec, ValidationError, format_phone, validate_area, validate_delivery_input,
    validate_field, validate_gift_date, validate_organization, validate_quantity,
};

/// The site's forms
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    #[display("contact")]
    Contact,
    #[display("bulk-order")]
    BulkOrder,
    #[display("gift")]
    Gift,
    #[display("newsletter")]
    Newsletter,
}

const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("firstName", "First Name", FieldKind::Text).required(),
    FieldSpec::new("lastName", "Last Name", FieldKind::Text).required(),
    FieldSpec::new("email", "Email", FieldKind::Email).required(),
    FieldSpec::new("phone", "Phone", FieldKind::Tel),
    FieldSpec::new("subject", "Subject", FieldKind::Select).required(),
    FieldSpec::new("message", "Message", FieldKind::TextArea)
        .required()
        .min_length(10),
];

const BULK_ORDER_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("contactName", "Contact Name", FieldKind::Text).required(),
    FieldSpec::new("organization", "Organization", FieldKind::Text),
    FieldSpec::new("email", "Email", FieldKind::Email).required(),
    FieldSpec::new("phone", "Phone", FieldKind::Tel).required(),
    FieldSpec::new("projectType", "Project Type", FieldKind::Select).required(),
    FieldSpec::new("quantity", "Quantity", FieldKind::Select).required(),
    FieldSpec::new("areaSize", "Area Size (sq ft)", FieldKind::Number),
    FieldSpec::new("deliveryDate", "Preferred Delivery Date", FieldKind::Date),
    FieldSpec::new("details", "Project Details", FieldKind::TextArea),
];

const GIFT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("senderName", "Your Name", FieldKind::Text).required(),
    FieldSpec::new("recipientName", "Recipient Name", FieldKind::Text).required(),
    FieldSpec::new("recipientEmail", "Recipient Email", FieldKind::Email).required(),
    FieldSpec::new("plant", "Plant", FieldKind::Select).required(),
    FieldSpec::new("deliveryDate", "Delivery Date", FieldKind::Date).required(),
    FieldSpec::new("giftMessage", "Gift Message", FieldKind::TextArea),
];

const NEWSLETTER_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("email", "Email", FieldKind::Email).required()];

/// `(value, label)` pairs for select fields
pub type SelectOptions = &'static [(&'static str, &'static str)];

pub const SUBJECT_OPTIONS: SelectOptions = &[
    ("general", "General Inquiry"),
    ("order", "Order Support"),
    ("care", "Plant Care"),
    ("partnership", "Partnership"),
];

pub const PROJECT_TYPE_OPTIONS: SelectOptions = &[
    ("corporate", "Corporate"),
    ("school", "School"),
    ("community", "Community"),
    ("residential", "Residential"),
];

pub const QUANTITY_OPTIONS: SelectOptions = &[
    ("50-100", "50 - 100 plants"),
    ("100-500", "100 - 500 plants"),
    ("500-1000", "500 - 1000 plants"),
    ("1000+", "1000+ plants"),
];

pub const GIFT_PLANT_OPTIONS: SelectOptions = &[
    ("monstera", "Monstera Deliciosa"),
    ("snake-plant", "Snake Plant"),
    ("pothos", "Golden Pothos"),
    ("fiddle-leaf", "Fiddle Leaf Fig"),
];

/// Options for a select field, empty for anything else
pub fn select_options(field: &str) -> SelectOptions {
    match field {
        "subject" => SUBJECT_OPTIONS,
        "projectType" => PROJECT_TYPE_OPTIONS,
        "quantity" => QUANTITY_OPTIONS,
        "plant" => GIFT_PLANT_OPTIONS,
        _ => &[],
    }
}

impl FormKind {
    pub const ALL: [FormKind; 4] = [
        FormKind::Contact,
        FormKind::BulkOrder,
        FormKind::Gift,
        FormKind::Newsletter,
    ];

    /// Element id of the form; newsletter forms are matched by class instead
    pub fn element_id(&self) -> Option<&'static str> {
        match self {
            FormKind::Contact => Some("contact-form"),
            FormKind::BulkOrder => Some("bulk-order-form"),
            FormKind::Gift => Some("gift-form"),
            FormKind::Newsletter => None,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            FormKind::Newsletter => "newsletter-form",
            _ => "site-form",
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            FormKind::Contact => CONTACT_FIELDS,
            FormKind::BulkOrder => BULK_ORDER_FIELDS,
            FormKind::Gift => GIFT_FIELDS,
            FormKind::Newsletter => NEWSLETTER_FIELDS,
        }
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.name == name)
    }

    /// Idle label of the submit button
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormKind::Contact => "Send Message",
            FormKind::BulkOrder => "Submit Request",
            FormKind::Gift => "Send Gift",
            FormKind::Newsletter => "Subscribe",
        }
    }

    /// Icon shown before the submit label
    pub fn submit_icon(&self) -> Option<&'static str> {
        match self {
            FormKind::Contact | FormKind::BulkOrder => Some("paper-plane"),
            FormKind::Gift | FormKind::Newsletter => None,
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            FormKind::Contact => {
                "Thank you for your message! We'll get back to you within 24 hours."
            }
            FormKind::BulkOrder => {
                "Thank you for your bulk order request! Our team will contact you within 2 business days with a custom quote."
            }
            FormKind::Gift => {
                "Gift order confirmed! Your recipient will receive their plant on the selected delivery date."
            }
            FormKind::Newsletter => {
                "Thank you for subscribing! You'll receive plant care tips and updates."
            }
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            FormKind::Contact => {
                "Sorry, there was an error sending your message. Please try again."
            }
            FormKind::BulkOrder => {
                "Sorry, there was an error submitting your request. Please try again."
            }
            FormKind::Gift => {
                "Sorry, there was an error processing your gift order. Please try again."
            }
            FormKind::Newsletter => {
                "Sorry, there was an error with your subscription. Please try again."
            }
        }
    }

    /// The gift form lives in a modal that closes after a successful order
    pub fn closes_modal(&self) -> bool {
        matches!(self, FormKind::Gift)
    }
}

/// Field values keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(BTreeMap<String, String>);

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a field; absent fields read as empty
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// At most one error per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an error on a field, replacing any previous one
    pub fn show(&mut self, field: impl Into<String>, error: ValidationError) {
        self.0.insert(field.into(), error);
    }

    /// Remove a field's error. Returns `true` if one was shown.
    pub fn clear(&mut self, field: &str) -> bool {
        self.0.remove(field).is_some()
    }

    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    /// Apply a validation result: show the error or clear the field.
    /// Returns `true` when the field is valid.
    pub fn apply(&mut self, field: &str, result: Result<(), ValidationError>) -> bool {
        match result {
            Ok(()) => {
                self.clear(field);
                true
            }
            Err(err) => {
                self.show(field, err);
                false
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.0.get(field)
    }

    pub fn message(&self, field: &str) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationError)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Validate a whole form on submit: every required field, then the
/// cross-field rules of the form. All failures are collected.
pub fn validate_form(kind: FormKind, data: &FormData, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for spec in kind.fields().iter().filter(|f| f.required) {
        errors.apply(spec.name, validate_field(spec, data.get(spec.name)));
    }

    match kind {
        FormKind::BulkOrder => {
            if let Err(err) =
                validate_organization(data.get("projectType"), data.get("organization"))
            {
                errors.show("organization", err);
            }
            if let Err(err) = validate_area(data.get("quantity"), data.get("areaSize")) {
                errors.show("areaSize", err);
            }
        }
        FormKind::Gift => {
            if let Err(err) = validate_gift_date(data.get("deliveryDate"), today) {
                errors.show("deliveryDate", err);
            }
        }
        FormKind::Contact | FormKind::Newsletter => {}
    }

    errors
}

/// What the user just did to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// A keystroke; the value is already stored
    Input,
    /// Typing in an email field stopped for the debounce window
    EmailSettled,
    /// A date or select committed a new value
    Change,
    Blur,
    Focus,
}

/// Value to store for raw input: phone numbers are reformatted as typed
pub fn normalize_input(spec: &FieldSpec, raw: String) -> String {
    match spec.kind {
        FieldKind::Tel => format_phone(&raw),
        _ => raw,
    }
}

/// Update a form's errors for one field event. `data` already holds the
/// field's current value.
pub fn field_event(
    kind: FormKind,
    spec: &FieldSpec,
    event: FieldEvent,
    data: &FormData,
    today: NaiveDate,
    errors: &mut FieldErrors,
) {
    let value = data.get(spec.name);
    let filled = !value.trim().is_empty();

    match event {
        FieldEvent::Input if spec.is_name_field() && filled => {
            errors.apply(spec.name, validate_field(spec, value));
        }
        FieldEvent::EmailSettled if spec.kind == FieldKind::Email && filled => {
            errors.apply(spec.name, validate_field(spec, value));
        }
        FieldEvent::Input | FieldEvent::EmailSettled => {}
        FieldEvent::Blur => {
            errors.apply(spec.name, validate_field(spec, value));
        }
        FieldEvent::Focus => {
            errors.clear(spec.name);
        }
        FieldEvent::Change => {
            if spec.kind == FieldKind::Date {
                errors.apply(spec.name, validate_delivery_input(value, today));
            }
            if kind == FormKind::BulkOrder && matches!(spec.name, "quantity" | "projectType") {
                check_quantity(data, errors);
            }
        }
    }
}

/// The residential size cap only owns its own message; other quantity
/// errors (such as a missing value) stay until the field is fixed.
fn check_quantity(data: &FormData, errors: &mut FieldErrors) {
    match validate_quantity(data.get("projectType"), data.get("quantity")) {
        Err(err) => errors.show("quantity", err),
        Ok(()) => {
            if errors.get("quantity") == Some(&ValidationError::QuantityTooLarge) {
                errors.clear("quantity");
            }
        }
    }
}

/// Where a form is in its submit cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
pub enum FormPhase {
    #[default]
    #[display("idle")]
    Idle,
    #[display("validating")]
    Validating,
    #[display("submitting")]
    Submitting,
    #[display("succeeded")]
    Succeeded,
    #[display("failed")]
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    Invalid,
    Valid,
    Succeeded,
    Failed,
    /// Outcome has been reported and the control restored
    Settle,
}

impl FormPhase {
    pub fn apply(self, event: FormEvent) -> Result<FormPhase, FormError> {
        use FormEvent as E;
        use FormPhase as P;

        match (self, event) {
            (P::Idle, E::Submit) => Ok(P::Validating),
            (P::Validating, E::Invalid) => Ok(P::Idle),
            (P::Validating, E::Valid) => Ok(P::Submitting),
            (P::Submitting, E::Succeeded) => Ok(P::Succeeded),
            (P::Submitting, E::Failed) => Ok(P::Failed),
            (P::Succeeded | P::Failed, E::Settle) => Ok(P::Idle),
            (P::Validating | P::Submitting, E::Submit) => Err(FormError::AlreadySubmitting),
            (phase, event) => Err(FormError::IllegalTransition { phase, event }),
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, FormPhase::Validating | FormPhase::Submitting)
    }
}
