//! Shared helper set for every controller
//!
//! Provides:
//! - [`SiteHelpers`] in Leptos context (site name, settings, notifications, smooth scroll)
//! - [`throttle`] and [`debounce`] wrappers over `core::rate_limit`

use leptos::prelude::*;

use crate::core::notification::{Notification, NotificationKind};
use crate::core::settings::{EffectSettings, SiteSettings};
use crate::ui::notifications::NotificationManager;

/// Helpers provided once at the root of the app
#[derive(Clone, Copy)]
pub struct SiteHelpers {
    notifications: NotificationManager,
    site: StoredValue<SiteSettings>,
}

impl SiteHelpers {
    pub fn new(site: SiteSettings) -> Self {
        Self {
            notifications: NotificationManager::new(),
            site: StoredValue::new(site),
        }
    }

    pub fn site_name(&self) -> String {
        self.site.with_value(|s| s.site_name.clone())
    }

    pub fn notifications(&self) -> NotificationManager {
        self.notifications
    }

    pub fn settings(&self) -> EffectSettings {
        self.site.with_value(|s| s.effects.clone())
    }

    /// Queue a notification with the configured auto-dismiss delay
    pub fn show(&self, notification: Notification) -> u64 {
        let duration = self.site.with_value(|s| s.effects.notification_ms);
        self.notifications.notify(notification.with_duration(duration))
    }

    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.show(Notification::new(kind, message))
    }

    /// Scroll so the element with `id` sits just below the navbar.
    /// Returns `false` if there is no such element.
    pub fn smooth_scroll_to(&self, id: &str) -> bool {
        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::scroll::{Easing, ScrollTween};
            use crate::ui::effects::dom;

            let Some(target) = dom::by_id(id) else {
                return false;
            };
            let (offset, duration) = self
                .site
                .with_value(|s| (s.effects.scroll_offset, s.effects.scroll_duration_ms));
            let start = dom::scroll_y();
            let mut tween = ScrollTween::new(
                start,
                target.offset_top() as f64 - offset,
                duration,
                Easing::Quad,
            );
            dom::animate_frames(move |now| {
                let (y, more) = tween.frame(now);
                dom::scroll_to(y);
                more
            });
            true
        }

        #[cfg(feature = "ssr")]
        {
            let _ = id;
            false
        }
    }
}

/// Provide the helper set to all descendants
pub fn provide_site_helpers(site: SiteSettings) -> SiteHelpers {
    let helpers = SiteHelpers::new(site);
    provide_context(helpers);
    helpers
}

/// Get the helper set. Falls back to defaults outside the provider.
pub fn use_site_helpers() -> SiteHelpers {
    use_context::<SiteHelpers>().unwrap_or_else(|| SiteHelpers::new(SiteSettings::default()))
}

/// Wrap `f` so it runs at most once per `limit_ms`, with one trailing call
/// at the end of a busy window
#[cfg(not(feature = "ssr"))]
pub fn throttle(limit_ms: f64, f: impl Fn() + 'static) -> impl FnMut() {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;

    use crate::core::rate_limit::{Throttle, ThrottleDecision};
    use crate::ui::effects::dom::now_ms;

    let state = Rc::new(RefCell::new(Throttle::new(limit_ms)));
    let f = Rc::new(f);
    let mut trailing: Option<Timeout> = None;

    move || match state.borrow_mut().call(now_ms()) {
        ThrottleDecision::RunNow => f(),
        ThrottleDecision::Trailing { delay_ms } => {
            let state = state.clone();
            let f = f.clone();
            // replacing the handle cancels the previous trailing call
            trailing.replace(Timeout::new(delay_ms.ceil() as u32, move || {
                if state.borrow_mut().fire_trailing(now_ms()) {
                    f();
                }
            }));
        }
    }
}

#[cfg(feature = "ssr")]
pub fn throttle(limit_ms: f64, f: impl Fn() + 'static) -> impl FnMut() {
    let _ = limit_ms;
    move || f()
}

/// Wrap `f` so it runs once calls have stopped for `wait_ms`. With `immediate`
/// it runs on the first call of a burst instead.
#[cfg(not(feature = "ssr"))]
pub fn debounce(wait_ms: f64, immediate: bool, f: impl Fn() + 'static) -> impl FnMut() {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;

    use crate::core::rate_limit::Debounce;

    let state = Rc::new(RefCell::new(if immediate {
        Debounce::leading(wait_ms)
    } else {
        Debounce::new(wait_ms)
    }));
    let f = Rc::new(f);
    let mut timer: Option<Timeout> = None;

    move || {
        let decision = state.borrow_mut().call();
        if decision.run_now {
            f();
        }
        let state = state.clone();
        let f = f.clone();
        timer.replace(Timeout::new(decision.schedule_ms.ceil() as u32, move || {
            if state.borrow_mut().fire() {
                f();
            }
        }));
    }
}

#[cfg(feature = "ssr")]
pub fn debounce(wait_ms: f64, immediate: bool, f: impl Fn() + 'static) -> impl FnMut() {
    let _ = (wait_ms, immediate);
    move || f()
}

#[cfg(test)]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;

    fn helpers_with_delay(notification_ms: u32) -> SiteHelpers {
        SiteHelpers::new(SiteSettings {
            effects: EffectSettings {
                notification_ms,
                ..EffectSettings::default()
            },
            ..SiteSettings::default()
        })
    }

    fn queued_delays(helpers: &SiteHelpers) -> Vec<Option<u32>> {
        helpers.notifications().queue().with_untracked(|q| {
            q.iter()
                .map(|item| item.notification.auto_dismiss_ms())
                .collect()
        })
    }

    #[test]
    fn test_shown_notifications_use_configured_delay() {
        let owner = Owner::new();
        owner.set();

        let helpers = helpers_with_delay(1_200);
        helpers.show(Notification::error("Something went wrong"));
        helpers.notify("Saved", NotificationKind::Success);
        assert_eq!(queued_delays(&helpers), vec![Some(1_200), Some(1_200)]);
    }

    #[test]
    fn test_zero_delay_keeps_notifications_open() {
        let owner = Owner::new();
        owner.set();

        let helpers = helpers_with_delay(0);
        helpers.show(Notification::success("Thanks!"));
        assert_eq!(queued_delays(&helpers), vec![None]);
    }
}
