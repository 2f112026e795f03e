//! Scroll geometry and the per-frame scroll state
//!
//! Everything here is a pure function of scroll position and layout metrics so
//! the browser controller only has to read the metrics and write the results.
//!
//! # Frame coalescing
//!
//! Scroll events fire far more often than the screen repaints. [`FrameGate`]
//! lets any number of events within one frame request a single update:
//!
//! ```
//! # use plantgift::core::scroll::FrameGate;
//! let mut gate = FrameGate::new();
//! assert!(gate.request()); // first event schedules a frame
//! assert!(!gate.request()); // later events in the same frame do not
//! gate.complete();
//! assert!(gate.request());
//! ```

/// Navbar switches to its compact style past this offset
pub const NAVBAR_SCROLLED_THRESHOLD: f64 = 100.0;

/// Navbar shadow appears past this offset
pub const NAVBAR_SHADOW_THRESHOLD: f64 = 50.0;

/// Scroll-to-top button is shown strictly above this offset
pub const SCROLL_TO_TOP_THRESHOLD: f64 = 500.0;

/// A section becomes active this many pixels before its top reaches the viewport top
pub const SECTION_TRIGGER_OFFSET: f64 = 150.0;

/// Height reserved for the fixed navbar when jumping to an anchor
pub const ANCHOR_NAVBAR_OFFSET: f64 = 80.0;

/// Upper bound for anchor scroll animations
pub const MAX_ANCHOR_SCROLL_MS: f64 = 1500.0;

/// Each step of the scroll-to-top animation covers this fraction of the remaining distance
pub const SCROLL_TO_TOP_STEP_DIVISOR: f64 = 8.0;

/// Coalesces high-frequency scroll events onto the animation frame clock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the state dirty. Returns `true` if the caller must request a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Called at the end of the frame callback
    pub fn complete(&mut self) {
        self.pending = false;
    }
}

/// A navigable page section tracked by the scroll spy
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    /// Scroll position at which the section becomes active
    pub offset: f64,
    /// Index of the navigation link pointing at this section
    pub link: usize,
}

/// Ordered list of sections, rebuilt whenever layout changes
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a section whose element starts at `top` (document coordinates)
    pub fn push(&mut self, id: impl Into<String>, top: f64, link: usize) {
        self.sections.push(Section {
            id: id.into(),
            offset: top - SECTION_TRIGGER_OFFSET,
            link,
        });
    }

    pub fn clear(&mut self) {
        self.sections.clear();
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The lowest section whose trigger offset has been passed.
    ///
    /// Sections are scanned from last to first and the first match wins, so for
    /// equal offsets the later section is chosen.
    pub fn active(&self, scroll: f64) -> Option<&Section> {
        self.sections.iter().rev().find(|s| scroll >= s.offset)
    }
}

/// Reading progress in percent, clamped to `[0, 100]`.
///
/// When the document is not taller than the viewport there is nothing to
/// scroll: the result is 0 at the top and 100 anywhere else.
pub fn progress_percent(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if range <= 0.0 || !range.is_finite() {
        return if scroll_top <= 0.0 { 0.0 } else { 100.0 };
    }
    let percent = scroll_top / range * 100.0;
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

/// Visual state of the navbar for a scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarState {
    pub scrolled: bool,
    pub shadow: bool,
}

impl NavbarState {
    pub fn at(scroll: f64) -> Self {
        Self {
            scrolled: scroll > NAVBAR_SCROLLED_THRESHOLD,
            shadow: scroll > NAVBAR_SHADOW_THRESHOLD,
        }
    }

    pub fn background(&self) -> &'static str {
        if self.scrolled {
            "rgba(20, 83, 45, 0.98)"
        } else {
            "rgba(20, 83, 45, 0.95)"
        }
    }

    pub fn backdrop_filter(&self) -> &'static str {
        if self.scrolled { "blur(15px)" } else { "blur(10px)" }
    }

    pub fn box_shadow(&self) -> &'static str {
        if self.shadow {
            "0 4px 30px rgba(20, 83, 45, 0.2)"
        } else {
            "none"
        }
    }
}

pub fn scroll_to_top_visible(scroll: f64) -> bool {
    scroll > SCROLL_TO_TOP_THRESHOLD
}

/// Next position of the decelerating scroll-to-top animation.
///
/// Each frame covers an eighth of the remaining distance. Positions under half a
/// pixel snap to zero so the animation terminates.
pub fn step_toward_top(current: f64) -> f64 {
    if current <= 0.0 {
        return 0.0;
    }
    let next = current - current / SCROLL_TO_TOP_STEP_DIVISOR;
    if next < 0.5 { 0.0 } else { next }
}

/// Duration of an anchor scroll: proportional to distance, capped
pub fn anchor_scroll_duration(distance: f64) -> f64 {
    (distance.abs() * 0.5).min(MAX_ANCHOR_SCROLL_MS)
}

/// Ease-in/ease-out cubic: `t` elapsed, `b` start, `c` change, `d` duration
pub fn ease_in_out_cubic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if d <= 0.0 {
        return b + c;
    }
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t + b;
    }
    t -= 2.0;
    c / 2.0 * (t * t * t + 2.0) + b
}

/// Ease-in/ease-out quadratic, same parameters as [`ease_in_out_cubic`]
pub fn ease_in_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if d <= 0.0 {
        return b + c;
    }
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    t -= 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Cubic,
    Quad,
}

/// A time-based scroll animation driven by animation frame timestamps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTween {
    start: f64,
    distance: f64,
    duration: f64,
    easing: Easing,
    started_at: Option<f64>,
}

impl ScrollTween {
    pub fn new(start: f64, target: f64, duration: f64, easing: Easing) -> Self {
        Self {
            start,
            distance: target - start,
            duration,
            easing,
            started_at: None,
        }
    }

    /// Tween used for in-page anchor links
    pub fn to_anchor(start: f64, element_top: f64) -> Self {
        let target = element_top - ANCHOR_NAVBAR_OFFSET;
        Self::new(
            start,
            target,
            anchor_scroll_duration(target - start),
            Easing::Cubic,
        )
    }

    /// Position for the frame at `now` (ms) and whether another frame is needed.
    /// The first call fixes the start time.
    pub fn frame(&mut self, now: f64) -> (f64, bool) {
        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = now - started_at;
        if elapsed >= self.duration {
            return (self.start + self.distance, false);
        }
        let position = match self.easing {
            Easing::Cubic => ease_in_out_cubic(elapsed, self.start, self.distance, self.duration),
            Easing::Quad => ease_in_out_quad(elapsed, self.start, self.distance, self.duration),
        };
        (position, true)
    }

    pub fn target(&self) -> f64 {
        self.start + self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }
}

/// Parallax speed for the element at `index`, honouring `data-parallax-speed`
pub fn parallax_speed(attribute: Option<&str>, index: usize) -> f64 {
    attribute
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|speed| speed.is_finite())
        .unwrap_or(0.2 + index as f64 * 0.1)
}

/// Vertical displacement of a parallax layer
pub fn parallax_offset(scroll: f64, speed: f64) -> f64 {
    -(scroll * speed)
}

/// Gentle sine sway for decorative floating elements
pub fn floating_sway(scroll: f64, index: usize) -> f64 {
    (scroll * 0.001 + index as f64).sin() * 10.0
}

/// Downward drift and rotation (degrees) of a floating leaf
pub fn leaf_drift(scroll: f64, index: usize) -> (f64, f64) {
    let speed = 0.05 + index as f64 * 0.02;
    let movement = scroll * speed;
    (movement, movement * 0.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_gate_coalesces_events() {
        let mut gate = FrameGate::new();
        let scheduled = (0..10).filter(|_| gate.request()).count();
        assert_eq!(scheduled, 1);
        assert!(gate.is_pending());

        gate.complete();
        assert!(!gate.is_pending());
        assert!(gate.request());
    }

    #[test]
    fn test_progress_endpoints() {
        assert_eq!(progress_percent(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(2000.0, 3000.0, 1000.0), 100.0);
        assert_eq!(progress_percent(1000.0, 3000.0, 1000.0), 50.0);
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(progress_percent(-50.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(5000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_progress_short_document() {
        assert_eq!(progress_percent(0.0, 800.0, 800.0), 0.0);
        assert_eq!(progress_percent(0.0, 500.0, 800.0), 0.0);
        assert_eq!(progress_percent(10.0, 500.0, 800.0), 100.0);
    }

    #[test]
    fn test_active_section_picks_lowest_passed() {
        let mut registry = SectionRegistry::new();
        registry.push("home", 0.0, 0);
        registry.push("plants", 800.0, 1);
        registry.push("contact", 1600.0, 2);

        assert_eq!(registry.active(0.0).map(|s| s.id.as_str()), Some("home"));
        assert_eq!(registry.active(649.0).map(|s| s.id.as_str()), Some("home"));
        assert_eq!(registry.active(650.0).map(|s| s.id.as_str()), Some("plants"));
        assert_eq!(registry.active(5000.0).map(|s| s.id.as_str()), Some("contact"));
    }

    #[test]
    fn test_active_section_none_before_first() {
        let mut registry = SectionRegistry::new();
        registry.push("about", 1000.0, 0);
        assert!(registry.active(100.0).is_none());
        assert!(SectionRegistry::new().active(100.0).is_none());
    }

    #[test]
    fn test_active_section_tie_prefers_later() {
        let mut registry = SectionRegistry::new();
        registry.push("first", 500.0, 0);
        registry.push("second", 500.0, 1);
        assert_eq!(registry.active(400.0).map(|s| s.link), Some(1));
    }

    #[test]
    fn test_navbar_thresholds() {
        assert_eq!(
            NavbarState::at(0.0),
            NavbarState {
                scrolled: false,
                shadow: false
            }
        );
        assert_eq!(
            NavbarState::at(75.0),
            NavbarState {
                scrolled: false,
                shadow: true
            }
        );
        assert!(NavbarState::at(101.0).scrolled);
        assert_eq!(NavbarState::at(0.0).box_shadow(), "none");
    }

    #[test]
    fn test_scroll_to_top_visibility() {
        assert!(!scroll_to_top_visible(500.0));
        assert!(scroll_to_top_visible(500.5));
    }

    #[test]
    fn test_step_toward_top_decelerates_and_terminates() {
        let mut position = 4000.0;
        let mut previous_step = f64::MAX;
        let mut frames = 0;
        while position > 0.0 {
            let next = step_toward_top(position);
            let step = position - next;
            if next > 0.0 {
                assert!(step <= previous_step + 1e-9);
                previous_step = step;
            }
            position = next;
            frames += 1;
            assert!(frames < 200, "scroll-to-top never finished");
        }
        assert_eq!(step_toward_top(800.0), 700.0);
    }

    #[test]
    fn test_anchor_duration_is_capped() {
        assert_eq!(anchor_scroll_duration(400.0), 200.0);
        assert_eq!(anchor_scroll_duration(-400.0), 200.0);
        assert_eq!(anchor_scroll_duration(10_000.0), MAX_ANCHOR_SCROLL_MS);
    }

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_in_out_cubic(0.0, 100.0, 500.0, 1000.0), 100.0);
        assert!((ease_in_out_cubic(500.0, 100.0, 500.0, 1000.0) - 350.0).abs() < 1e-9);
        assert!((ease_in_out_cubic(1000.0, 100.0, 500.0, 1000.0) - 600.0).abs() < 1e-9);

        assert_eq!(ease_in_out_quad(0.0, 0.0, 100.0, 1000.0), 0.0);
        assert!((ease_in_out_quad(500.0, 0.0, 100.0, 1000.0) - 50.0).abs() < 1e-9);
        assert!((ease_in_out_quad(1000.0, 0.0, 100.0, 1000.0) - 100.0).abs() < 1e-9);

        assert_eq!(ease_in_out_cubic(10.0, 5.0, 20.0, 0.0), 25.0);
    }

    #[test]
    fn test_tween_reaches_target() {
        let mut tween = ScrollTween::to_anchor(0.0, 1080.0);
        assert_eq!(tween.target(), 1000.0);
        assert_eq!(tween.duration(), 500.0);

        let (start, more) = tween.frame(10_000.0);
        assert_eq!(start, 0.0);
        assert!(more);

        let (mid, more) = tween.frame(10_250.0);
        assert!(mid > 0.0 && mid < 1000.0);
        assert!(more);

        let (end, more) = tween.frame(10_500.0);
        assert_eq!(end, 1000.0);
        assert!(!more);
    }

    #[test]
    fn test_zero_distance_tween_finishes_immediately() {
        let mut tween = ScrollTween::to_anchor(420.0, 500.0);
        assert_eq!(tween.frame(1.0), (420.0, false));
    }

    #[test]
    fn test_parallax_speed_from_attribute() {
        assert_eq!(parallax_speed(Some("0.5"), 3), 0.5);
        assert!((parallax_speed(None, 2) - 0.4).abs() < 1e-9);
        assert!((parallax_speed(Some("fast"), 0) - 0.2).abs() < 1e-9);
        assert_eq!(parallax_offset(100.0, 0.5), -50.0);
    }

    #[test]
    fn test_decorative_motion() {
        assert_eq!(floating_sway(0.0, 0), 0.0);
        assert!(floating_sway(1234.0, 3).abs() <= 10.0);
        let (drift, rotate) = leaf_drift(100.0, 0);
        assert!((drift - 5.0).abs() < 1e-9);
        assert!((rotate - 0.5).abs() < 1e-9);
    }
}
