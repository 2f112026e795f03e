use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Modal dialog shown while `is_open` is set
#[component]
pub fn Modal(
    /// Element id, used by buttons that open it
    id: &'static str,
    /// Modal title
    title: String,
    /// Optional subtitle/description
    #[prop(optional)]
    subtitle: Option<String>,
    /// Whether modal is open
    is_open: RwSignal<bool>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                is_open.set(false);
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            id=id
            class="modal"
            class:active=move || is_open.get()
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                // clicks on the backdrop itself close the modal
                #[cfg(not(feature = "ssr"))]
                {
                    if let Some(target) = e.target() {
                        if let Some(element) = target.dyn_ref::<web_sys::Element>() {
                            if element.class_list().contains("modal") {
                                is_open.set(false);
                            }
                        }
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = e;
                }
            }
        >
            <div class="modal-content">
                <div class="modal-header">
                    <div>
                        <h3>{title}</h3>
                        {subtitle.map(|s| view! { <p class="modal-subtitle">{s}</p> })}
                    </div>
                    <button
                        class="modal-close"
                        on:click=move |_| is_open.set(false)
                        title="Close"
                        aria-label="Close modal"
                    >
                        <Icon name=icons::X/>
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
