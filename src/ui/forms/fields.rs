use leptos::prelude::*;

use crate::core::forms::SelectOptions;
use crate::core::validation::{FieldKind, FieldSpec};
use crate::ui::icon::{Icon, icons};

/// Event callbacks shared by every field component
#[derive(Clone, Copy)]
pub struct FieldHandlers {
    pub on_input: Callback<String>,
    pub on_change: Callback<String>,
    pub on_blur: Callback<()>,
    pub on_focus: Callback<()>,
}

/// Error line under a field
#[component]
pub fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! {
                <span class="error-message" role="alert">
                    <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                    {err}
                </span>
            }
        })
    }
}

fn field_id(form: &str, spec: &FieldSpec) -> String {
    format!("{form}-{}", spec.name)
}

/// Label with the required asterisk
#[component]
fn FieldLabel(id: String, spec: FieldSpec) -> impl IntoView {
    view! {
        <label for=id>
            {spec.label}
            {spec.required.then(|| view! { <span class="required">"*"</span> })}
        </label>
    }
}

/// Input field: text, email, tel, number or date
#[component]
pub fn FormField(
    /// Id prefix of the owning form
    form: &'static str,
    spec: FieldSpec,
    value: Signal<String>,
    handlers: FieldHandlers,
    error: Signal<Option<String>>,
    /// `min` attribute (date inputs)
    #[prop(optional)]
    min: Option<String>,
    #[prop(default = String::new())]
    placeholder: String,
) -> impl IntoView {
    let id = field_id(form, &spec);

    view! {
        <div class="form-group" class:error=move || error.with(Option::is_some)>
            <FieldLabel id=id.clone() spec=spec/>
            <input
                id=id
                name=spec.name
                type=spec.kind.input_type()
                placeholder=placeholder
                min=min
                minlength=spec.min_length.map(|n| n.to_string())
                aria-invalid=move || error.with(Option::is_some).to_string()
                prop:value=move || value.get()
                on:input=move |ev| handlers.on_input.run(event_target_value(&ev))
                on:change=move |ev| handlers.on_change.run(event_target_value(&ev))
                on:blur=move |_| handlers.on_blur.run(())
                on:focus=move |_| handlers.on_focus.run(())
            />
            <FieldError error=error/>
        </div>
    }
}

/// Text area field component
#[component]
pub fn TextAreaField(
    form: &'static str,
    spec: FieldSpec,
    value: Signal<String>,
    handlers: FieldHandlers,
    error: Signal<Option<String>>,
    #[prop(default = 4)]
    rows: u32,
) -> impl IntoView {
    let id = field_id(form, &spec);

    view! {
        <div class="form-group" class:error=move || error.with(Option::is_some)>
            <FieldLabel id=id.clone() spec=spec/>
            <textarea
                id=id
                name=spec.name
                rows=rows
                minlength=spec.min_length.map(|n| n.to_string())
                aria-invalid=move || error.with(Option::is_some).to_string()
                prop:value=move || value.get()
                on:input=move |ev| handlers.on_input.run(event_target_value(&ev))
                on:blur=move |_| handlers.on_blur.run(())
                on:focus=move |_| handlers.on_focus.run(())
            />
            <FieldError error=error/>
        </div>
    }
}

/// Select/dropdown field with a leading "choose" option
#[component]
pub fn SelectField(
    form: &'static str,
    spec: FieldSpec,
    value: Signal<String>,
    handlers: FieldHandlers,
    error: Signal<Option<String>>,
    /// Options as (value, display_text) pairs
    options: SelectOptions,
) -> impl IntoView {
    let id = field_id(form, &spec);

    view! {
        <div class="form-group" class:error=move || error.with(Option::is_some)>
            <FieldLabel id=id.clone() spec=spec/>
            <select
                id=id
                name=spec.name
                aria-invalid=move || error.with(Option::is_some).to_string()
                prop:value=move || value.get()
                on:change=move |ev| {
                    let val = event_target_value(&ev);
                    handlers.on_input.run(val.clone());
                    handlers.on_change.run(val);
                }
                on:blur=move |_| handlers.on_blur.run(())
                on:focus=move |_| handlers.on_focus.run(())
            >
                <option value="">{format!("Select {}", spec.label.to_lowercase())}</option>
                {options
                    .iter()
                    .map(|(val, text)| view! { <option value=*val>{*text}</option> })
                    .collect_view()}
            </select>
            <FieldError error=error/>
        </div>
    }
}

/// Pick the component for `spec`
pub fn render_field(
    form: &'static str,
    spec: FieldSpec,
    value: Signal<String>,
    handlers: FieldHandlers,
    error: Signal<Option<String>>,
    options: SelectOptions,
    min: Option<String>,
) -> AnyView {
    match spec.kind {
        FieldKind::TextArea => view! {
            <TextAreaField form=form spec=spec value=value handlers=handlers error=error/>
        }
        .into_any(),
        FieldKind::Select => view! {
            <SelectField form=form spec=spec value=value handlers=handlers error=error options=options/>
        }
        .into_any(),
        _ => match min {
            Some(min) => view! {
                <FormField form=form spec=spec value=value handlers=handlers error=error min=min/>
            }
            .into_any(),
            None => view! {
                <FormField form=form spec=spec value=value handlers=handlers error=error/>
            }
            .into_any(),
        },
    }
}
