//! Site navigation: navbar with mobile menu, scroll progress bar and the
//! scroll-to-top button
//!
//! The navbar only owns the menu state. Scroll-driven styling (`scrolled`,
//! active link, progress width, button visibility) is applied by the scroll
//! controller.

use leptos::html;
use leptos::prelude::*;

use crate::core::widgets::MenuState;
use crate::ui::icon::{Icon, icons};

/// In-page sections linked from the navbar
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("#home", "Home"),
    ("#plants", "Plants"),
    ("#services", "Services"),
    ("#impact", "Impact"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let navbar = NodeRef::<html::Nav>::new();
    let is_open = move || menu.with(MenuState::is_open);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::{click, keydown};
        use leptos::wasm_bindgen::JsCast;

        use crate::ui::effects::dom;

        Effect::new(move |_| {
            let open = is_open();
            if let Some(body) = dom::body() {
                dom::toggle_class(&body, "menu-open", open);
            }
        });

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" {
                menu.update(|m| {
                    m.close();
                });
            }
        });

        let handle_click = window_event_listener(click, move |ev| {
            let inside = match (navbar.get_untracked(), ev.target()) {
                (Some(nav), Some(target)) => target
                    .dyn_ref::<web_sys::Node>()
                    .is_some_and(|node| nav.contains(Some(node))),
                _ => false,
            };
            if menu.with_untracked(MenuState::is_open) {
                menu.update(|m| {
                    m.click(inside);
                });
            }
        });

        on_cleanup(move || {
            drop(handle_keydown);
            drop(handle_click);
        });
    }

    view! {
        <nav id="navbar" class="navbar" node_ref=navbar>
            <div class="nav-container">
                <a href="#home" class="nav-logo">
                    <Icon name=icons::LEAF class="nav-logo-icon"/>
                    <span>"PlantGift"</span>
                </a>
                <ul id="nav-menu" class="nav-menu" class:active=is_open>
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <li class="nav-item">
                                    <a
                                        href=*href
                                        class="nav-link"
                                        on:click=move |_| {
                                            menu.update(|m| {
                                                m.close();
                                            });
                                        }
                                    >
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    id="hamburger"
                    class="hamburger"
                    class:active=is_open
                    aria-label="Toggle navigation menu"
                    aria-controls="nav-menu"
                    aria-expanded=move || is_open().to_string()
                    on:click=move |_| {
                        menu.update(|m| {
                            m.toggle();
                        });
                    }
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}

/// Reading progress bar pinned to the top of the viewport
#[component]
pub fn ScrollProgress() -> impl IntoView {
    view! { <div class="scroll-progress" aria-hidden="true"></div> }
}

/// Button that glides back to the top; hidden until the page is scrolled
#[component]
pub fn ScrollToTop() -> impl IntoView {
    view! {
        <button class="scroll-to-top" aria-label="Scroll to top" title="Back to top">
            <Icon name=icons::ARROW_UP/>
        </button>
    }
}
