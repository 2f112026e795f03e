//! Thin `web_sys` helpers shared by the effect controllers
//!
//! Every helper tolerates missing elements and discards DOM errors, so one
//! failing lookup never stops the rest of a controller.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::core::animation::CounterAnimation;
use crate::core::geometry::{Point, Rect};
use crate::core::tasks::TaskScope;

pub fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

pub fn document() -> Option<web_sys::Document> {
    window().and_then(|w| w.document())
}

pub fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Vertical scroll offset of the page
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn document_height() -> f64 {
    document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0)
}

pub fn scroll_to(y: f64) {
    if let Some(w) = window() {
        w.scroll_to_with_x_and_y(0.0, y);
    }
}

/// `content` of the `<meta name="{name}">` tag in the document head
pub fn meta_content(name: &str) -> Option<String> {
    document()?
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()
        .flatten()?
        .get_attribute("content")
}

/// Whether the visitor asked the system for reduced motion
pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .is_some_and(|query| query.matches())
}

/// Seed for per-controller random generators
pub fn entropy_seed() -> u64 {
    let random = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (now_ms() as u64) << 20 ^ random
}

/// All `HtmlElement`s under `root` matching `selector`
pub fn query_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn query(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

pub fn by_id(id: &str) -> Option<HtmlElement> {
    document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub fn set_css_text(element: &HtmlElement, css: &str) {
    element.style().set_css_text(css);
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

pub fn toggle_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub fn rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

pub fn pointer(event: &web_sys::MouseEvent) -> Point {
    Point::new(event.client_x() as f64, event.client_y() as f64)
}

/// Create a detached `<div>` with a class and inline style
pub fn create_div(class: &str, css: &str) -> Option<HtmlElement> {
    let element = document()?.create_element("div").ok()?;
    element.set_class_name(class);
    let element = element.dyn_into::<HtmlElement>().ok()?;
    set_css_text(&element, css);
    Some(element)
}

/// Append a `<style id=...>` to `<head>` unless one with that id exists.
/// Returns `true` if the style was added.
pub fn inject_style(id: &str, css: &str) -> bool {
    let Some(document) = document() else {
        return false;
    };
    if document.get_element_by_id(id).is_some() {
        return false;
    }
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return false;
    };
    style.set_id(id);
    style.set_text_content(Some(css));
    head.append_child(&style).is_ok()
}

/// Event listener removed from its target on drop
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Listen for `event` on `target`; events that are not an `E` are ignored
pub fn listen<E>(target: &EventTarget, event: &'static str, mut handler: impl FnMut(E) + 'static) -> Listener
where
    E: JsCast + 'static,
{
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    });
    let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
    Listener {
        target: target.clone(),
        event,
        callback,
    }
}

/// `IntersectionObserver` that reports elements as they become visible.
/// Disconnected on drop.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Observer {
    pub fn new(
        threshold: f64,
        root_margin: &str,
        mut on_visible: impl FnMut(HtmlElement, &IntersectionObserver) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    if let Ok(element) = entry.target().dyn_into::<HtmlElement>() {
                        on_visible(element, &observer);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        Some(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Run `f` on the next animation frame
pub fn request_frame(f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(move |_: f64| f());
    if let Some(w) = window() {
        let _ = w.request_animation_frame(callback.unchecked_ref());
    }
}

/// Handle to a running frame loop
#[derive(Clone, Default)]
pub struct FrameLoop {
    cancelled: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }
}

/// Call `step` with the frame timestamp on every animation frame until it
/// returns `false` or the loop is cancelled
pub fn animate_frames(step: impl FnMut(f64) -> bool + 'static) -> FrameLoop {
    fn schedule(step: Rc<RefCell<dyn FnMut(f64) -> bool>>, cancelled: Rc<Cell<bool>>) {
        let callback = Closure::once_into_js(move |timestamp: f64| {
            if cancelled.get() {
                return;
            }
            if (step.borrow_mut())(timestamp) {
                schedule(step, cancelled);
            }
        });
        if let Some(w) = window() {
            let _ = w.request_animation_frame(callback.unchecked_ref());
        }
    }

    let handle = FrameLoop::default();
    let step: Rc<RefCell<dyn FnMut(f64) -> bool>> = Rc::new(RefCell::new(step));
    schedule(step, handle.cancelled.clone());
    handle
}

/// Count `element` up to the counter's target, one step per frame
pub fn count_up(element: HtmlElement, mut counter: CounterAnimation) -> FrameLoop {
    animate_frames(move |_| {
        if !element.is_connected() {
            return false;
        }
        let (text, more) = counter.step();
        element.set_text_content(Some(&text));
        more
    })
}

/// A pending timeout that knows whether it has fired
pub struct Scheduled {
    done: Rc<Cell<bool>>,
    _timeout: Timeout,
}

impl Scheduled {
    pub fn is_done(&self) -> bool {
        self.done.get()
    }
}

pub type Tasks = TaskScope<Scheduled>;

/// Run `f` after `delay_ms`, owned by `tasks`. Returns `false` if the scope is
/// closed and nothing was scheduled.
pub fn schedule(tasks: &mut Tasks, delay_ms: u32, f: impl FnOnce() + 'static) -> bool {
    tasks.release_finished(Scheduled::is_done);
    let done = Rc::new(Cell::new(false));
    let flag = done.clone();
    let timeout = Timeout::new(delay_ms, move || {
        flag.set(true);
        f();
    });
    tasks.push(Scheduled {
        done,
        _timeout: timeout,
    })
}
