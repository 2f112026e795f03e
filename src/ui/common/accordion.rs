use leptos::prelude::*;

use crate::core::widgets::AccordionGroup;
use crate::ui::icon::{Icon, icons};

/// One expandable question/answer pair
#[derive(Clone, Debug, PartialEq)]
pub struct AccordionItem {
    pub title: &'static str,
    pub body: &'static str,
}

impl AccordionItem {
    pub const fn new(title: &'static str, body: &'static str) -> Self {
        Self { title, body }
    }
}

/// Accordion where opening one item collapses the others
#[component]
pub fn Accordion(items: Vec<AccordionItem>) -> impl IntoView {
    let group = RwSignal::new(AccordionGroup::new(items.len()));

    view! {
        <div class="accordion">
            {items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    let open = move || group.with(|g| g.is_open(index));
                    view! {
                        <div class="accordion-item" class:active=open>
                            <button
                                class="accordion-header"
                                aria-expanded=move || open().to_string()
                                on:click=move |_| group.update(|g| g.toggle(index))
                            >
                                <span>{item.title}</span>
                                <Icon name=icons::CHEVRON_DOWN class="accordion-icon"/>
                            </button>
                            <div class="accordion-content">
                                <p>{item.body}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
