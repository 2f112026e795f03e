//! Browser-side controllers
//!
//! Each `use_*` hook attaches a controller to the page root after hydration
//! and tears it down with the owning scope. On the server they do nothing.

pub mod animation;
#[cfg(not(feature = "ssr"))]
pub(crate) mod dom;
pub mod scroll;

pub use animation::use_animation_controller;
pub use scroll::use_scroll_controller;

use leptos::html;
use leptos::prelude::*;

use crate::core::settings::EffectSettings;

/// Mark `<body>` as loaded shortly after hydration and fade lazy images in
/// as they load
pub fn use_page_lifecycle(root: NodeRef<html::Div>, settings: EffectSettings) {
    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::callback::Timeout;

        use dom::{Observer, add_class, query_all};

        Effect::new(move |_| {
            let Some(root) = root.get() else {
                return;
            };

            let loaded = Timeout::new(settings.page_loaded_delay_ms, || {
                if let Some(body) = dom::body() {
                    add_class(&body, "page-loaded");
                }
            });

            let lazy = Observer::new(0.0, "0px", |image, observer| {
                add_class(&image, "loaded");
                observer.unobserve(&image);
            });
            if let Some(observer) = &lazy {
                for image in query_all(&root, "img[loading=\"lazy\"]") {
                    observer.observe(&image);
                }
            }

            let handle = StoredValue::new_local(Some((loaded, lazy)));
            on_cleanup(move || handle.update_value(|page| drop(page.take())));
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (root, settings);
    }
}
