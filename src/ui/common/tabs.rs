use leptos::prelude::*;

use crate::core::widgets::TabSet;

/// Tab item definition
#[derive(Clone)]
pub struct TabItem {
    /// Display label for the tab
    pub label: &'static str,
    /// Panel content
    pub content: ViewFn,
}

impl TabItem {
    pub fn new(label: &'static str, content: impl Into<ViewFn>) -> Self {
        Self {
            label,
            content: content.into(),
        }
    }
}

/// Tab buttons with their panels; exactly one tab is active
#[component]
pub fn Tabs(
    tabs: Vec<TabItem>,
    /// Additional CSS classes for the container
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let set = RwSignal::new(TabSet::new(tabs.len(), tabs.len()));
    let container_class = if class.is_empty() {
        "tabs".to_string()
    } else {
        format!("tabs {}", class)
    };

    let buttons = tabs
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            let is_active = move || set.with(|s| s.active() == index);
            view! {
                <button
                    class="tab-button"
                    class:active=is_active
                    role="tab"
                    aria-selected=move || is_active().to_string()
                    on:click=move |_| {
                        set.update(|s| {
                            s.select(index);
                        });
                    }
                >
                    {tab.label}
                </button>
            }
        })
        .collect_view();

    let panels = tabs
        .into_iter()
        .enumerate()
        .map(|(index, tab)| {
            let is_active = move || set.with(|s| s.active_panel() == Some(index));
            view! {
                <div class="tab-content" class:active=is_active role="tabpanel">
                    {tab.content.run()}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class=container_class>
            <div class="tab-buttons" role="tablist">{buttons}</div>
            {panels}
        </div>
    }
}
