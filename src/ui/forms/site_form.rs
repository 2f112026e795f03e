//! Form components wired to the validation rules and the submission flow

use chrono::NaiveDate;
use leptos::logging::warn;
use leptos::prelude::*;

use super::fields::{FieldHandlers, render_field};
use super::{SignalSurface, SiteSubmitter};
use crate::core::forms::{
    FieldErrors, FieldEvent, FormData, FormEvent, FormKind, FormPhase, field_event,
    normalize_input, select_options, validate_form,
};
use crate::core::submission::{BUSY_LABEL, LogTracker, run_submission};
use crate::core::validation::{FieldKind, FieldSpec, earliest_delivery};
use crate::ui::helpers::{SiteHelpers, debounce, use_site_helpers};
use crate::ui::icon::Icon;

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Reactive state of one rendered form
#[derive(Clone, Copy)]
struct FormController {
    kind: FormKind,
    values: RwSignal<FormData>,
    errors: RwSignal<FieldErrors>,
    phase: RwSignal<FormPhase>,
    busy: RwSignal<bool>,
    helpers: SiteHelpers,
    modal: Option<RwSignal<bool>>,
}

impl FormController {
    fn new(kind: FormKind, helpers: SiteHelpers, modal: Option<RwSignal<bool>>) -> Self {
        Self {
            kind,
            values: RwSignal::new(FormData::new()),
            errors: RwSignal::new(FieldErrors::new()),
            phase: RwSignal::new(FormPhase::Idle),
            busy: RwSignal::new(false),
            helpers,
            modal,
        }
    }

    fn value(&self, name: &'static str) -> Signal<String> {
        let values = self.values;
        Signal::derive(move || values.with(|v| v.get(name).to_string()))
    }

    fn error(&self, name: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.message(name)))
    }

    /// Run the field rules for one user action
    fn event(&self, spec: FieldSpec, event: FieldEvent) {
        let kind = self.kind;
        self.values.with_untracked(|data| {
            self.errors.update(|errors| {
                field_event(kind, &spec, event, data, today(), errors);
            });
        });
    }

    fn input(&self, spec: FieldSpec, raw: String) {
        let value = normalize_input(&spec, raw);
        self.values.update(|v| v.set(spec.name, value));
        self.event(spec, FieldEvent::Input);
    }

    fn change(&self, spec: FieldSpec, value: String) {
        self.values.update(|v| v.set(spec.name, value));
        self.event(spec, FieldEvent::Change);
    }

    fn handlers(&self, spec: FieldSpec) -> FieldHandlers {
        let ctrl = *self;
        let on_input = if spec.kind == FieldKind::Email {
            let wait_ms = self.helpers.settings().email_debounce_ms;
            let check = StoredValue::new_local(debounce(wait_ms, false, move || {
                ctrl.event(spec, FieldEvent::EmailSettled);
            }));
            Callback::new(move |raw: String| {
                ctrl.input(spec, raw);
                check.update_value(|check| check());
            })
        } else {
            Callback::new(move |raw: String| ctrl.input(spec, raw))
        };

        FieldHandlers {
            on_input,
            on_change: Callback::new(move |value: String| ctrl.change(spec, value)),
            on_blur: Callback::new(move |_: ()| ctrl.event(spec, FieldEvent::Blur)),
            on_focus: Callback::new(move |_: ()| ctrl.event(spec, FieldEvent::Focus)),
        }
    }

    fn advance(&self, event: FormEvent) -> bool {
        let kind = self.kind;
        let mut moved = false;
        self.phase.update(|phase| match phase.apply(event) {
            Ok(next) => {
                *phase = next;
                moved = true;
            }
            Err(err) => warn!("{kind} form: {err}"),
        });
        moved
    }

    fn surface(&self) -> SignalSurface {
        SignalSurface {
            values: self.values,
            errors: self.errors,
            busy: self.busy,
            helpers: self.helpers,
            modal: self.modal,
        }
    }

    fn submit(self) {
        if !self.advance(FormEvent::Submit) {
            return;
        }
        let data = self.values.get_untracked();

        // newsletter forms only get the email check inside the submission flow
        if self.kind != FormKind::Newsletter {
            let found = validate_form(self.kind, &data, today());
            if !found.is_empty() {
                self.errors.set(found);
                self.advance(FormEvent::Invalid);
                return;
            }
        }
        self.errors.update(FieldErrors::clear_all);
        self.advance(FormEvent::Valid);

        let submitter = SiteSubmitter::from_settings(&self.helpers.settings());
        let surface = self.surface();
        leptos::task::spawn_local(async move {
            let outcome = run_submission(self.kind, &data, &submitter, &surface, &LogTracker).await;
            self.advance(if outcome.is_success() {
                FormEvent::Succeeded
            } else {
                FormEvent::Failed
            });
            self.advance(FormEvent::Settle);
        });
    }
}

/// Submit button; shows the busy label while a submission is in flight
#[component]
fn SubmitButton(kind: FormKind, busy: RwSignal<bool>) -> impl IntoView {
    view! {
        <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
            {move || {
                if busy.get() {
                    BUSY_LABEL.into_any()
                } else {
                    view! {
                        {kind.submit_icon().map(|name| view! { <Icon name=name/> })}
                        {kind.submit_label()}
                    }
                    .into_any()
                }
            }}
        </button>
    }
}

/// Contact, bulk order and gift forms
#[component]
pub fn SiteForm(
    kind: FormKind,
    /// Modal to close after a successful submission
    #[prop(optional)]
    modal: Option<RwSignal<bool>>,
) -> impl IntoView {
    let ctrl = FormController::new(kind, use_site_helpers(), modal);
    let form_id = kind.element_id().unwrap_or("newsletter-form");
    let min_date = earliest_delivery(today()).format("%Y-%m-%d").to_string();

    let fields = kind
        .fields()
        .iter()
        .map(|spec| {
            let min = (spec.kind == FieldKind::Date).then(|| min_date.clone());
            render_field(
                form_id,
                *spec,
                ctrl.value(spec.name),
                ctrl.handlers(*spec),
                ctrl.error(spec.name),
                select_options(spec.name),
                min,
            )
        })
        .collect_view();

    view! {
        <form
            id=form_id
            class=kind.css_class()
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                ctrl.submit();
            }
        >
            {fields}
            <SubmitButton kind=kind busy=ctrl.busy/>
        </form>
    }
}

/// Inline newsletter signup
#[component]
pub fn NewsletterForm() -> impl IntoView {
    let kind = FormKind::Newsletter;
    let ctrl = FormController::new(kind, use_site_helpers(), None);
    let Some(&spec) = kind.field("email") else {
        return ().into_any();
    };
    let email = ctrl.value(spec.name);
    let handlers = ctrl.handlers(spec);

    view! {
        <form
            class=kind.css_class()
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                ctrl.submit();
            }
        >
            <input
                type="email"
                name=spec.name
                placeholder="Enter your email"
                aria-label="Email address"
                prop:value=move || email.get()
                on:input=move |ev| handlers.on_input.run(event_target_value(&ev))
            />
            <SubmitButton kind=kind busy=ctrl.busy/>
        </form>
    }
    .into_any()
}
