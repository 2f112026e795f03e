//! Decorative animation controller
//!
//! Floating leaves, hover effects, entrance animations, the hero plant and tree
//! illustrations, text reveal and background blobs. Everything happens inside
//! the root element handed to [`use_animation_controller`]; sections missing from
//! the page are skipped.

use leptos::html;
use leptos::prelude::*;

use crate::core::settings::EffectSettings;

/// Attach the animation controller to `root` once it is mounted. Listeners,
/// observers, timers and generated nodes are released with the owner.
pub fn use_animation_controller(root: NodeRef<html::Div>, settings: EffectSettings) {
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            let Some(root) = root.get() else {
                return;
            };
            if !settings.animations {
                return;
            }
            let controller = browser::AnimationController::attach(root.into(), &settings);
            let handle = StoredValue::new_local(Some(controller));
            on_cleanup(move || handle.update_value(|controller| drop(controller.take())));
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (root, settings);
    }
}

#[cfg(not(feature = "ssr"))]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Interval;
    use leptos::logging::log;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use web_sys::{Element, HtmlElement, MouseEvent};

    use crate::core::animation::{
        BlobSpec, CounterAnimation, FLOATING_BLOB_COUNT, HOVER_FILTER, KEYFRAMES_CSS,
        LEAF_REPOPULATE_DELAY_MS, MORPH_ENTER_RADIUS, MORPH_ENTER_TRANSFORM, MORPH_LEAVE_RADIUS,
        MORPH_LEAVE_TRANSFORM, PARTICLE_LIFETIME_MS, REFRESH_LEAF_COUNT, RIPPLE_LIFETIME_MS,
        Ripple, TILT_RESET, Tilt, hero_leaf_animation, magnetic_offset, particle_burst, populate,
        refresh_schedule, text_reveal_cells, tree_leaf_animation,
    };
    use crate::core::lifecycle::{EphemeralId, EphemeralSet};
    use crate::core::reveal::OnceSet;
    use crate::core::settings::EffectSettings;
    use crate::ui::effects::dom::{
        self, FrameLoop, Listener, Observer, Tasks, add_class, create_div, has_class, listen, query,
        query_all, schedule, set_style,
    };

    const KEYFRAMES_STYLE_ID: &str = "plantgift-animation-keyframes";
    const ENTRANCE_SELECTOR: &str =
        ".plant-card, .feature-card, .service-card, .testimonial-card, .team-member";
    const TILT_SELECTOR: &str = ".plant-card, .feature-card, .service-card";
    const GENERATED_LEAF: &str = "floating-leaf";

    struct Shared {
        rng: StdRng,
        nodes: EphemeralSet,
        tasks: Tasks,
        entered: OnceSet<String>,
        counters: Vec<FrameLoop>,
    }

    type SharedRef = Rc<RefCell<Shared>>;

    pub struct AnimationController {
        root: HtmlElement,
        shared: SharedRef,
        listeners: Vec<Listener>,
        observers: Vec<Observer>,
        refresh: Option<Interval>,
    }

    impl AnimationController {
        pub fn attach(root: HtmlElement, settings: &EffectSettings) -> Self {
            let shared = Rc::new(RefCell::new(Shared {
                rng: StdRng::seed_from_u64(dom::entropy_seed()),
                nodes: EphemeralSet::new(),
                tasks: Tasks::new(),
                entered: OnceSet::new(),
                counters: Vec::new(),
            }));

            let mut controller = Self {
                root,
                shared,
                listeners: Vec::new(),
                observers: Vec::new(),
                refresh: None,
            };

            dom::inject_style(KEYFRAMES_STYLE_ID, KEYFRAMES_CSS);
            controller.floating_leaves(settings);
            controller.entrance_observer();
            controller.card_hover();
            controller.button_ripples();
            controller.magnetic();
            controller.morphing();
            controller.plant_growth();
            controller.text_reveal();
            controller.counters();
            controller.background();

            log!(
                "animation controller attached ({} listeners)",
                controller.listeners.len()
            );
            controller
        }

        fn root(&self) -> &Element {
            &self.root
        }

        fn floating_leaves(&mut self, settings: &EffectSettings) {
            let Some(container) = query(self.root(), ".floating-leaves") else {
                return;
            };

            // hand-written markers only get the float loop
            for (i, leaf) in query_all(&container, ".leaf").iter().enumerate() {
                set_style(
                    leaf,
                    "animation",
                    &format!("floatLeaf {}s ease-in-out {}s infinite", 8 + i * 2, i),
                );
            }

            spawn_leaves(&self.shared, &container, settings.initial_leaf_count);

            let shared = self.shared.clone();
            self.refresh = Some(Interval::new(settings.leaf_refresh_interval_ms, move || {
                refresh_leaves(&shared, &container);
            }));
        }

        fn entrance_observer(&mut self) {
            let shared = self.shared.clone();
            let Some(observer) = Observer::new(0.1, "0px 0px -50px 0px", move |card, observer| {
                observer.unobserve(&card);
                let key = card.get_attribute("data-anim-key").unwrap_or_default();
                if !shared.borrow_mut().entered.fire(key) {
                    return;
                }
                add_class(&card, "animate-in");
                if has_class(&card, "plant-card") {
                    animate_plant_card(&card);
                } else if has_class(&card, "feature-card") {
                    animate_feature_card(&shared, card);
                }
            }) else {
                return;
            };

            for (i, card) in query_all(self.root(), ENTRANCE_SELECTOR).iter().enumerate() {
                let _ = card.set_attribute("data-anim-key", &i.to_string());
                observer.observe(card);
            }
            self.observers.push(observer);
        }

        fn card_hover(&mut self) {
            for card in query_all(self.root(), TILT_SELECTOR) {
                let shared = self.shared.clone();
                let target = card.clone();
                self.listeners
                    .push(listen(&card, "mouseenter", move |_: MouseEvent| {
                        particle_effect(&shared, &target);
                    }));

                let target = card.clone();
                self.listeners
                    .push(listen(&card, "mousemove", move |ev: MouseEvent| {
                        let tilt = Tilt::from_pointer(dom::pointer(&ev), dom::rect(&target));
                        set_style(&target, "transform", &tilt.transform());
                    }));

                let target = card.clone();
                self.listeners
                    .push(listen(&card, "mouseleave", move |_: MouseEvent| {
                        set_style(&target, "transform", TILT_RESET);
                    }));
            }
        }

        fn button_ripples(&mut self) {
            for button in query_all(self.root(), ".btn") {
                let shared = self.shared.clone();
                let target = button.clone();
                self.listeners
                    .push(listen(&button, "click", move |ev: MouseEvent| {
                        let ripple = Ripple::at(dom::pointer(&ev), dom::rect(&target));
                        spawn_ephemeral(
                            &shared,
                            &target,
                            "ripple",
                            &ripple.style(),
                            RIPPLE_LIFETIME_MS,
                        );
                    }));
            }
        }

        fn magnetic(&mut self) {
            for element in query_all(self.root(), ".btn-primary, .nav-logo") {
                let target = element.clone();
                self.listeners
                    .push(listen(&element, "mousemove", move |ev: MouseEvent| {
                        let (dx, dy) = magnetic_offset(dom::pointer(&ev), dom::rect(&target));
                        set_style(
                            &target,
                            "transform",
                            &format!("translate({:.2}px, {:.2}px)", dx, dy),
                        );
                    }));

                let target = element.clone();
                self.listeners
                    .push(listen(&element, "mouseleave", move |_: MouseEvent| {
                        set_style(&target, "transform", "translate(0, 0)");
                    }));
            }
        }

        fn morphing(&mut self) {
            for icon in query_all(self.root(), ".feature-icon, .service-icon") {
                let target = icon.clone();
                self.listeners
                    .push(listen(&icon, "mouseenter", move |_: MouseEvent| {
                        set_style(&target, "border-radius", MORPH_ENTER_RADIUS);
                        set_style(&target, "transform", MORPH_ENTER_TRANSFORM);
                    }));
                let target = icon.clone();
                self.listeners
                    .push(listen(&icon, "mouseleave", move |_: MouseEvent| {
                        set_style(&target, "border-radius", MORPH_LEAVE_RADIUS);
                        set_style(&target, "transform", MORPH_LEAVE_TRANSFORM);
                    }));
            }

            for element in query_all(self.root(), ".plant-card, .btn") {
                let target = element.clone();
                self.listeners
                    .push(listen(&element, "mouseenter", move |_: MouseEvent| {
                        set_style(&target, "filter", HOVER_FILTER);
                    }));
                let target = element.clone();
                self.listeners
                    .push(listen(&element, "mouseleave", move |_: MouseEvent| {
                        set_style(&target, "filter", "none");
                    }));
            }
        }

        fn plant_growth(&self) {
            if let Some(plant) = query(self.root(), ".plant-container") {
                set_style(&plant, "animation", "plantBreathe 4s ease-in-out infinite");
                if let Some(stem) = query(&plant, ".stem") {
                    set_style(&stem, "animation", "growFromBottom 2s ease-out 0.5s both");
                }
                for (i, leaf) in query_all(&plant, ".leaf-large, .leaf-medium, .leaf-small")
                    .iter()
                    .enumerate()
                {
                    set_style(leaf, "animation", &hero_leaf_animation(i));
                }
            }

            if let Some(tree) = query(self.root(), ".animated-tree") {
                if let Some(trunk) = query(&tree, ".tree-trunk") {
                    set_style(&trunk, "animation", "growFromBottom 1.5s ease-out both");
                }
                for (i, crown) in query_all(&tree, ".tree-leaves div").iter().enumerate() {
                    set_style(crown, "animation", &tree_leaf_animation(i));
                }
            }
        }

        fn text_reveal(&self) {
            for heading in query_all(self.root(), ".hero-title, .section-header h2") {
                let Some(text) = heading.text_content() else {
                    continue;
                };
                heading.set_text_content(None);
                for (cell, delay) in text_reveal_cells(&text) {
                    let Some(span) = dom::document().and_then(|d| d.create_element("span").ok())
                    else {
                        continue;
                    };
                    span.set_text_content(Some(&cell));
                    let _ = span.set_attribute(
                        "style",
                        &format!(
                            "display: inline-block; opacity: 0; animation: fadeInUp 0.5s ease-out {:.2}s both;",
                            delay
                        ),
                    );
                    let _ = heading.append_child(&span);
                }
            }
        }

        /// Statistic counters in `.stat h3` and `.impact-stat h3`
        fn counters(&mut self) {
            let shared = Rc::clone(&self.shared);
            let Some(observer) = Observer::new(0.5, "0px", move |element, observer| {
                observer.unobserve(&element);
                let Some(counter) = element.text_content().and_then(|t| CounterAnimation::from_text(&t))
                else {
                    return;
                };
                let frames = dom::count_up(element, counter);
                shared.borrow_mut().counters.push(frames);
            }) else {
                return;
            };
            for stat in query_all(self.root(), ".stat h3, .impact-stat h3") {
                observer.observe(&stat);
            }
            self.observers.push(observer);
        }

        fn background(&self) {
            if let Some(hero) = query(self.root(), ".hero") {
                let mut shared = self.shared.borrow_mut();
                for _ in 0..FLOATING_BLOB_COUNT {
                    let blob = BlobSpec::random(&mut shared.rng);
                    if let Some(node) = create_div("floating-blob", &blob.style()) {
                        let _ = hero.append_child(&node);
                    }
                }
            }
            for section in query_all(self.root(), ".hero, .cta-section") {
                set_style(&section, "background-size", "400% 400%");
                set_style(&section, "animation", "gradientShift 15s ease infinite");
            }
        }
    }

    impl Drop for AnimationController {
        fn drop(&mut self) {
            self.refresh.take();
            self.listeners.clear();
            self.observers.clear();
            let ids = {
                let mut shared = self.shared.borrow_mut();
                shared.tasks.close();
                for counter in shared.counters.drain(..) {
                    counter.cancel();
                }
                shared.nodes.drain()
            };
            for id in ids {
                remove_node(&self.root, id);
            }
        }
    }

    fn node_selector(id: EphemeralId) -> String {
        format!("[data-ephemeral=\"{}\"]", id.attribute())
    }

    fn remove_node(root: &Element, id: EphemeralId) {
        if let Ok(Some(node)) = root.query_selector(&node_selector(id)) {
            node.remove();
        }
    }

    /// Append a node that removes itself after `lifetime_ms`
    fn spawn_ephemeral(shared: &SharedRef, parent: &HtmlElement, class: &str, css: &str, lifetime_ms: u32) {
        let Some(node) = create_div(class, css) else {
            return;
        };
        let id = shared.borrow_mut().nodes.register();
        let _ = node.set_attribute("data-ephemeral", &id.attribute());
        if parent.append_child(&node).is_err() {
            shared.borrow_mut().nodes.release(id);
            return;
        }

        let owner = shared.clone();
        schedule(&mut shared.borrow_mut().tasks, lifetime_ms, move || {
            if owner.borrow_mut().nodes.release(id) {
                node.remove();
            }
        });
    }

    fn particle_effect(shared: &SharedRef, card: &HtmlElement) {
        let Some(layer) = create_div(
            "particle-effect",
            "position: absolute; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; overflow: hidden;",
        ) else {
            return;
        };
        for particle in particle_burst(&mut shared.borrow_mut().rng) {
            if let Some(dot) = create_div("particle", &particle.style()) {
                let _ = layer.append_child(&dot);
            }
        }
        set_style(card, "position", "relative");
        let id = shared.borrow_mut().nodes.register();
        let _ = layer.set_attribute("data-ephemeral", &id.attribute());
        let _ = card.append_child(&layer);

        let owner = shared.clone();
        schedule(&mut shared.borrow_mut().tasks, PARTICLE_LIFETIME_MS, move || {
            if owner.borrow_mut().nodes.release(id) {
                layer.remove();
            }
        });
    }

    fn spawn_leaves(shared: &SharedRef, container: &HtmlElement, count: usize) {
        let mut shared = shared.borrow_mut();
        let specs = populate(&mut shared.rng, count);
        for spec in specs {
            let Some(leaf) = create_div(GENERATED_LEAF, &spec.style()) else {
                continue;
            };
            leaf.set_text_content(Some(spec.symbol));
            set_style(&leaf, "animation", &spec.animation());
            let id = shared.nodes.register();
            let _ = leaf.set_attribute("data-ephemeral", &id.attribute());
            if container.append_child(&leaf).is_err() {
                shared.nodes.release(id);
            }
        }
    }

    /// Fade out the generated leaves one by one, then grow a smaller batch
    fn refresh_leaves(shared: &SharedRef, container: &HtmlElement) {
        if !container.is_connected() {
            return;
        }

        for (i, leaf) in query_all(container, &format!(".{GENERATED_LEAF}"))
            .into_iter()
            .enumerate()
        {
            let Some(id) = leaf
                .get_attribute("data-ephemeral")
                .and_then(|a| EphemeralId::parse(&a))
            else {
                continue;
            };
            let plan = refresh_schedule(i);

            let fading = leaf.clone();
            schedule(&mut shared.borrow_mut().tasks, plan.fade_at_ms, move || {
                if fading.is_connected() {
                    set_style(&fading, "transition", "opacity 1s ease-out");
                    set_style(&fading, "opacity", "0");
                }
            });

            let owner = shared.clone();
            schedule(&mut shared.borrow_mut().tasks, plan.remove_at_ms, move || {
                if owner.borrow_mut().nodes.release(id) {
                    leaf.remove();
                }
            });
        }

        let owner = shared.clone();
        let container = container.clone();
        schedule(&mut shared.borrow_mut().tasks, LEAF_REPOPULATE_DELAY_MS, move || {
            if container.is_connected() {
                spawn_leaves(&owner, &container, REFRESH_LEAF_COUNT);
            }
        });
    }

    fn animate_plant_card(card: &HtmlElement) {
        if let Some(image) = query(card, "img") {
            set_style(&image, "animation", "zoomIn 0.8s ease-out");
        }
        if let Some(content) = query(card, ".card-content") {
            set_style(&content, "animation", "fadeInUp 0.8s ease-out 0.2s both");
        }
    }

    fn animate_feature_card(shared: &SharedRef, card: HtmlElement) {
        if let Some(icon) = query(&card, ".feature-icon") {
            set_style(&icon, "animation", "bounceIn 0.8s ease-out");
        }
        if query(&card, "h3, p").is_some() {
            schedule(&mut shared.borrow_mut().tasks, 200, move || {
                set_style(&card, "animation", "fadeInUp 0.6s ease-out both");
            });
        }
    }

}
