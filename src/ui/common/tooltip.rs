use leptos::html;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
type Shown = browser::Shown;
#[cfg(feature = "ssr")]
type Shown = ();

/// Wraps `children` in a `[data-tooltip]` trigger. The tooltip is created on
/// hover, centred above the trigger, and removed shortly after the pointer
/// leaves.
#[component]
pub fn Tooltip(
    /// The content to show in the tooltip
    text: &'static str,
    /// The element that triggers the tooltip
    children: Children,
) -> impl IntoView {
    let trigger = NodeRef::<html::Span>::new();
    let shown = StoredValue::new_local(None::<Shown>);

    #[cfg(not(feature = "ssr"))]
    {
        on_cleanup(move || shown.update_value(browser::detach));
    }

    let on_enter = move |_| {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(trigger) = trigger.get_untracked() {
                shown.update_value(|current| browser::show(&trigger, text, current));
            }
        }
    };

    let on_leave = move |_| {
        #[cfg(not(feature = "ssr"))]
        {
            browser::hide(shown);
        }
    };

    #[cfg(feature = "ssr")]
    let _ = shown;

    view! {
        <span
            node_ref=trigger
            class="tooltip-trigger"
            data-tooltip=text
            on:mouseenter=on_enter
            on:mouseleave=on_leave
        >
            {children()}
        </span>
    }
}

#[cfg(not(feature = "ssr"))]
mod browser {
    use gloo_timers::callback::Timeout;
    use leptos::prelude::*;
    use web_sys::{Element, HtmlElement};

    use crate::core::widgets::{TOOLTIP_REMOVE_MS, tooltip_position};
    use crate::ui::effects::dom::{self, create_div, set_style};

    pub struct Shown {
        node: HtmlElement,
        _removal: Option<Timeout>,
    }

    pub fn show(trigger: &Element, text: &str, current: &mut Option<Shown>) {
        detach(current);
        let (Some(body), Some(node)) = (
            dom::body(),
            create_div(
                "tooltip",
                "position: fixed; opacity: 0; transition: opacity 0.3s ease; pointer-events: none; z-index: 10000;",
            ),
        ) else {
            return;
        };
        node.set_text_content(Some(text));
        if body.append_child(&node).is_err() {
            return;
        }

        let (left, top) = tooltip_position(
            dom::rect(trigger),
            node.offset_width() as f64,
            node.offset_height() as f64,
        );
        set_style(&node, "left", &format!("{left:.1}px"));
        set_style(&node, "top", &format!("{top:.1}px"));
        set_style(&node, "opacity", "1");
        *current = Some(Shown {
            node,
            _removal: None,
        });
    }

    /// Fade out, then detach once the transition is over
    pub fn hide(shown: StoredValue<Option<Shown>, LocalStorage>) {
        shown.update_value(|current| {
            let Some(tip) = current else {
                return;
            };
            set_style(&tip.node, "opacity", "0");
            let node = tip.node.clone();
            tip._removal = Some(Timeout::new(TOOLTIP_REMOVE_MS, move || node.remove()));
        });
    }

    pub fn detach(current: &mut Option<Shown>) {
        if let Some(tip) = current.take() {
            tip.node.remove();
        }
    }
}
