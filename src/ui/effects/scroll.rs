//! Scroll controller
//!
//! One passive pass per animation frame updates the navbar, scroll spy,
//! progress bar, scroll-to-top button and parallax layers. Observers handle the
//! one-shot reveal and scroll animations and the load-more trigger.

use leptos::html;
use leptos::prelude::*;

use crate::core::settings::EffectSettings;
use crate::ui::helpers::SiteHelpers;

/// Attach the scroll controller to `root` once it is mounted
pub fn use_scroll_controller(root: NodeRef<html::Div>, settings: EffectSettings, helpers: SiteHelpers) {
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            let Some(root) = root.get() else {
                return;
            };
            let controller = browser::ScrollController::attach(root.into(), &settings, helpers);
            let handle = StoredValue::new_local(Some(controller));
            on_cleanup(move || handle.update_value(|controller| drop(controller.take())));
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (root, settings, helpers);
    }
}

#[cfg(not(feature = "ssr"))]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::logging::log;
    use web_sys::{Event, HtmlButtonElement, HtmlElement, MouseEvent};
    use wasm_bindgen::JsCast;

    use crate::core::animation::{CounterAnimation, SCROLL_EFFECTS_CSS};
    use crate::core::notification::NotificationKind;
    use crate::core::reveal::{OnceSet, ScrollAnimation, stagger_delay_ms};
    use crate::core::scroll::{
        FrameGate, NavbarState, ScrollTween, SectionRegistry, floating_sway, leaf_drift,
        parallax_offset, parallax_speed, progress_percent, scroll_to_top_visible, step_toward_top,
    };
    use crate::core::settings::EffectSettings;
    use crate::ui::effects::dom::{
        self, FrameLoop, Listener, Observer, Tasks, add_class, has_class, listen, query_all,
        remove_class, schedule, set_style, toggle_class,
    };
    use crate::ui::helpers::{SiteHelpers, throttle};

    const SCROLL_STYLE_ID: &str = "plantgift-scroll-effects";
    const REVEAL_SELECTOR: &str = ".reveal-on-scroll, .plant-card, .feature-card, .service-card";
    const SCROLL_ANIMATION_SELECTOR: &str = ".animate-on-scroll, .count-up, .progress-bar-fill";
    const PARALLAX_SELECTOR: &str =
        ".parallax, .parallax-element, .hero-background, .floating-leaves";
    const LOAD_MORE_LABEL: &str = "Load More Plants";
    const LOAD_MORE_BUSY: &str = "Loading...";
    const LOAD_MORE_DONE: &str = "More plants loaded!";

    /// Elements and state read by every frame
    struct Layout {
        navbar: Option<HtmlElement>,
        links: Vec<HtmlElement>,
        registry: SectionRegistry,
        progress: Option<HtmlElement>,
        to_top: Option<HtmlElement>,
        parallax: Vec<(HtmlElement, f64)>,
        floating: Vec<HtmlElement>,
        leaves: Vec<HtmlElement>,
    }

    struct ScrollState {
        root: HtmlElement,
        gate: FrameGate,
        scroll: f64,
        layout: Layout,
        parallax_enabled: bool,
        tasks: Tasks,
        revealed: OnceSet<String>,
        animated: OnceSet<String>,
        loading: bool,
        glide: Option<FrameLoop>,
        counters: Vec<FrameLoop>,
        closed: bool,
    }

    type StateRef = Rc<RefCell<ScrollState>>;

    pub struct ScrollController {
        state: StateRef,
        listeners: Vec<Listener>,
        observers: Vec<Observer>,
    }

    impl ScrollController {
        pub fn attach(root: HtmlElement, settings: &EffectSettings, helpers: SiteHelpers) -> Self {
            dom::inject_style(SCROLL_STYLE_ID, SCROLL_EFFECTS_CSS);

            let layout = Layout::scan(&root);
            let state = Rc::new(RefCell::new(ScrollState {
                root,
                gate: FrameGate::new(),
                scroll: dom::scroll_y(),
                layout,
                parallax_enabled: settings.parallax,
                tasks: Tasks::new(),
                revealed: OnceSet::new(),
                animated: OnceSet::new(),
                loading: false,
                glide: None,
                counters: Vec::new(),
                closed: false,
            }));

            let mut controller = Self {
                state,
                listeners: Vec::new(),
                observers: Vec::new(),
            };
            controller.frame_updates(settings.throttle_ms);
            controller.scroll_to_top();
            controller.anchor_links();
            controller.reveal_observer();
            controller.scroll_animations();
            controller.load_more(settings.load_more_delay_ms, helpers);

            update(&controller.state);
            log!(
                "scroll controller attached ({} sections)",
                controller.state.borrow().layout.registry.len()
            );
            controller
        }

        fn root(&self) -> HtmlElement {
            self.state.borrow().root.clone()
        }

        fn frame_updates(&mut self, throttle_ms: f64) {
            let Some(window) = dom::window() else {
                return;
            };

            let state = self.state.clone();
            self.listeners.push(listen(&window, "scroll", move |_: Event| {
                let request = {
                    let mut s = state.borrow_mut();
                    s.scroll = dom::scroll_y();
                    s.gate.request()
                };
                if request {
                    let state = state.clone();
                    dom::request_frame(move || {
                        if state.borrow().closed {
                            return;
                        }
                        update(&state);
                        state.borrow_mut().gate.complete();
                    });
                }
            }));

            let state = self.state.clone();
            let mut rescan = throttle(throttle_ms, move || {
                if state.borrow().closed {
                    return;
                }
                let root = state.borrow().root.clone();
                state.borrow_mut().layout = Layout::scan(&root);
                update(&state);
            });
            self.listeners.push(listen(&window, "resize", move |_: Event| rescan()));
        }

        fn scroll_to_top(&mut self) {
            let Some(button) = self.state.borrow().layout.to_top.clone() else {
                return;
            };
            let state = self.state.clone();
            self.listeners.push(listen(&button, "click", move |ev: MouseEvent| {
                ev.prevent_default();
                let glide = dom::animate_frames(|_| {
                    let next = step_toward_top(dom::scroll_y());
                    dom::scroll_to(next);
                    next > 0.0
                });
                // a new glide replaces any running one
                if let Some(previous) = state.borrow_mut().glide.replace(glide) {
                    previous.cancel();
                }
            }));
        }

        fn anchor_links(&mut self) {
            for link in query_all(&self.root(), "a[href^=\"#\"]") {
                let state = self.state.clone();
                let anchor = link.clone();
                self.listeners.push(listen(&link, "click", move |ev: MouseEvent| {
                    let Some(href) = anchor.get_attribute("href") else {
                        return;
                    };
                    let Some(target) = href.strip_prefix('#').filter(|id| !id.is_empty()).and_then(dom::by_id)
                    else {
                        return;
                    };
                    ev.prevent_default();

                    let mut tween = ScrollTween::to_anchor(dom::scroll_y(), target.offset_top() as f64);
                    let glide = dom::animate_frames(move |now| {
                        let (y, more) = tween.frame(now);
                        dom::scroll_to(y);
                        more
                    });
                    if let Some(previous) = state.borrow_mut().glide.replace(glide) {
                        previous.cancel();
                    }
                }));
            }
        }

        fn reveal_observer(&mut self) {
            let state = self.state.clone();
            let Some(observer) = Observer::new(0.1, "0px 0px -100px 0px", move |element, observer| {
                observer.unobserve(&element);
                let key = element.get_attribute("data-reveal-key").unwrap_or_default();
                if !state.borrow_mut().revealed.fire(key) {
                    return;
                }
                remove_class(&element, "reveal-hidden");
                add_class(&element, "reveal-visible");

                for (i, child) in query_all(&element, ".stagger-child").into_iter().enumerate() {
                    schedule(&mut state.borrow_mut().tasks, stagger_delay_ms(i), move || {
                        add_class(&child, "stagger-visible");
                    });
                }
            }) else {
                return;
            };

            for (i, element) in query_all(&self.root(), REVEAL_SELECTOR).iter().enumerate() {
                let _ = element.set_attribute("data-reveal-key", &i.to_string());
                add_class(element, "reveal-hidden");
                observer.observe(element);
            }
            self.observers.push(observer);
        }

        fn scroll_animations(&mut self) {
            let state = self.state.clone();
            let Some(observer) = Observer::new(0.2, "0px 0px -50px 0px", move |element, observer| {
                observer.unobserve(&element);
                let key = element.get_attribute("data-scroll-key").unwrap_or_default();
                if !state.borrow_mut().animated.fire(key) {
                    return;
                }

                let width = element.get_attribute("data-width");
                match ScrollAnimation::classify(
                    has_class(&element, "count-up"),
                    has_class(&element, "progress-bar-fill"),
                    width.as_deref(),
                ) {
                    ScrollAnimation::Counter => {
                        let Some(counter) = element
                            .text_content()
                            .and_then(|t| CounterAnimation::from_text(&t))
                        else {
                            return;
                        };
                        let frames = dom::count_up(element, counter);
                        state.borrow_mut().counters.push(frames);
                    }
                    ScrollAnimation::ProgressFill { width } => {
                        set_style(&element, "width", "0%");
                        schedule(&mut state.borrow_mut().tasks, 100, move || {
                            set_style(&element, "transition", "width 1.5s ease-out");
                            set_style(&element, "width", &format!("{width}%"));
                        });
                    }
                    ScrollAnimation::Class => add_class(&element, "animated"),
                }
            }) else {
                return;
            };

            for (i, element) in query_all(&self.root(), SCROLL_ANIMATION_SELECTOR)
                .iter()
                .enumerate()
            {
                let _ = element.set_attribute("data-scroll-key", &i.to_string());
                observer.observe(element);
            }
            self.observers.push(observer);
        }

        fn load_more(&mut self, delay_ms: u32, helpers: SiteHelpers) {
            let Some(button) = dom::query(&self.root(), "#load-more") else {
                return;
            };
            let state = self.state.clone();
            let Some(observer) = Observer::new(0.0, "100px", move |element, _| {
                if std::mem::replace(&mut state.borrow_mut().loading, true) {
                    return;
                }
                set_busy(&element, true);

                let owner = state.clone();
                schedule(&mut state.borrow_mut().tasks, delay_ms, move || {
                    set_busy(&element, false);
                    owner.borrow_mut().loading = false;
                    helpers.notify(LOAD_MORE_DONE, NotificationKind::Success);
                });
            }) else {
                return;
            };
            observer.observe(&button);
            self.observers.push(observer);
        }
    }

    impl Drop for ScrollController {
        fn drop(&mut self) {
            self.listeners.clear();
            self.observers.clear();
            let mut state = self.state.borrow_mut();
            state.closed = true;
            state.tasks.close();
            if let Some(glide) = state.glide.take() {
                glide.cancel();
            }
            for counter in state.counters.drain(..) {
                counter.cancel();
            }
        }
    }

    impl Layout {
        fn scan(root: &HtmlElement) -> Self {
            let links = query_all(root, ".nav-link[href^=\"#\"]");
            let mut registry = SectionRegistry::new();
            for (i, link) in links.iter().enumerate() {
                let Some(id) = link
                    .get_attribute("href")
                    .and_then(|href| href.strip_prefix('#').map(str::to_string))
                else {
                    continue;
                };
                if let Some(section) = dom::by_id(&id) {
                    registry.push(id, section.offset_top() as f64, i);
                }
            }

            let parallax = query_all(root, PARALLAX_SELECTOR)
                .into_iter()
                .enumerate()
                .map(|(i, element)| {
                    let speed = parallax_speed(element.get_attribute("data-parallax-speed").as_deref(), i);
                    (element, speed)
                })
                .collect();

            Self {
                navbar: dom::query(root, "#navbar"),
                links,
                registry,
                progress: dom::query(root, ".scroll-progress"),
                to_top: dom::query(root, ".scroll-to-top"),
                parallax,
                floating: query_all(root, ".floating-element"),
                leaves: query_all(root, ".floating-leaves .leaf"),
            }
        }
    }

    /// Apply every scroll-dependent style for the current position
    fn update(state: &StateRef) {
        let state = state.borrow();
        let scroll = state.scroll;
        let layout = &state.layout;

        if let Some(navbar) = &layout.navbar {
            let nav = NavbarState::at(scroll);
            toggle_class(navbar, "scrolled", nav.scrolled);
            set_style(navbar, "background", nav.background());
            set_style(navbar, "backdrop-filter", nav.backdrop_filter());
            set_style(navbar, "box-shadow", nav.box_shadow());
        }

        let active = layout.registry.active(scroll).map(|section| section.link);
        for (i, link) in layout.links.iter().enumerate() {
            toggle_class(link, "active", Some(i) == active);
        }

        if let Some(bar) = &layout.progress {
            let percent = progress_percent(scroll, dom::document_height(), dom::viewport_height());
            set_style(bar, "width", &format!("{percent:.2}%"));
        }

        if let Some(button) = &layout.to_top {
            let visible = scroll_to_top_visible(scroll);
            toggle_class(button, "visible", visible);
            set_style(button, "opacity", if visible { "1" } else { "0" });
            set_style(button, "visibility", if visible { "visible" } else { "hidden" });
        }

        if !state.parallax_enabled {
            return;
        }
        for (element, speed) in &layout.parallax {
            set_style(
                element,
                "transform",
                &format!("translateY({:.2}px)", parallax_offset(scroll, *speed)),
            );
        }
        for (i, element) in layout.floating.iter().enumerate() {
            set_style(
                element,
                "transform",
                &format!("translateY({:.2}px)", floating_sway(scroll, i)),
            );
        }
        for (i, leaf) in layout.leaves.iter().enumerate() {
            let (drift, rotation) = leaf_drift(scroll, i);
            set_style(
                leaf,
                "transform",
                &format!("translateY({drift:.2}px) rotate({rotation:.2}deg)"),
            );
        }
    }

    fn set_busy(element: &HtmlElement, busy: bool) {
        element.set_text_content(Some(if busy { LOAD_MORE_BUSY } else { LOAD_MORE_LABEL }));
        if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(busy);
        }
    }
}
