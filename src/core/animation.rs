//! Decorative animation model
//!
//! Randomized leaf, blob and particle layouts, hover effect geometry, counter
//! animation and the keyframe stylesheet. Random values always come from a
//! caller-supplied [`Rng`] so layouts are reproducible in tests.

use rand::Rng;
use rand::seq::SliceRandom;

use super::geometry::{Point, Rect};

/// Symbols used for floating leaf markers
pub const LEAF_SYMBOLS: [&str; 4] = ["🍃", "🌿", "🍀", "🌱"];

/// Markers created when the floating layer is first populated
pub const INITIAL_LEAF_COUNT: usize = 10;

/// Markers created on every refresh
pub const REFRESH_LEAF_COUNT: usize = 5;

/// Interval between refreshes of the floating layer
pub const LEAF_REFRESH_INTERVAL_MS: u32 = 15_000;

/// Stagger between fade-outs of successive markers during a refresh
pub const LEAF_FADE_STAGGER_MS: u32 = 200;

/// Time a faded marker stays in the DOM before removal
pub const LEAF_FADE_OUT_MS: u32 = 1_000;

/// Pause before the layer is repopulated during a refresh
pub const LEAF_REPOPULATE_DELAY_MS: u32 = 2_000;

/// Lifetime of a click ripple
pub const RIPPLE_LIFETIME_MS: u32 = 600;

/// Lifetime of a hover particle burst
pub const PARTICLE_LIFETIME_MS: u32 = 2_000;

/// Particles per burst
pub const PARTICLE_COUNT: usize = 6;

/// Soft blobs added to the hero background
pub const FLOATING_BLOB_COUNT: usize = 5;

/// Duration of a counter animation
pub const COUNTER_DURATION_MS: f64 = 2_000.0;

/// Approximate frame length used to size counter increments
pub const COUNTER_FRAME_MS: f64 = 16.0;

/// A generated floating leaf marker
#[derive(Debug, Clone, PartialEq)]
pub struct LeafSpec {
    pub symbol: &'static str,
    pub left_pct: f64,
    pub top_pct: f64,
    pub font_size_px: f64,
    pub opacity: f64,
    pub z_index: u8,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl LeafSpec {
    /// Random marker; `index` is its position in the batch and sets the delay
    pub fn random<R: Rng + ?Sized>(rng: &mut R, index: usize) -> Self {
        Self {
            symbol: LEAF_SYMBOLS.choose(rng).copied().unwrap_or(LEAF_SYMBOLS[0]),
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            font_size_px: rng.gen_range(15.0..35.0),
            opacity: rng.gen_range(0.2..0.8),
            z_index: rng.gen_range(1..=5),
            duration_s: rng.gen_range(8.0..18.0),
            delay_s: index as f64 * 0.5,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: absolute; left: {:.2}%; top: {:.2}%; font-size: {:.1}px; opacity: {:.2}; z-index: {}; pointer-events: none;",
            self.left_pct, self.top_pct, self.font_size_px, self.opacity, self.z_index
        )
    }

    /// Float loop plus a sway at 0.3x the float duration
    pub fn animation(&self) -> String {
        leaf_animation(self.duration_s, self.delay_s)
    }
}

pub fn leaf_animation(duration_s: f64, delay_s: f64) -> String {
    format!(
        "floatLeaf {:.2}s ease-in-out {:.1}s infinite, leafSway {:.2}s ease-in-out {:.1}s infinite alternate",
        duration_s,
        delay_s,
        duration_s * 0.3,
        delay_s
    )
}

/// Generate a batch of `count` markers
pub fn populate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<LeafSpec> {
    (0..count).map(|i| LeafSpec::random(rng, i)).collect()
}

/// Timeline of a single marker during a refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeSchedule {
    pub fade_at_ms: u32,
    pub remove_at_ms: u32,
}

/// When the marker at `index` fades and when it is removed, relative to the refresh start
pub fn refresh_schedule(index: usize) -> FadeSchedule {
    let fade_at_ms = (index as u32).saturating_mul(LEAF_FADE_STAGGER_MS);
    FadeSchedule {
        fade_at_ms,
        remove_at_ms: fade_at_ms.saturating_add(LEAF_FADE_OUT_MS),
    }
}

/// A soft gradient blob floating behind the hero
#[derive(Debug, Clone, PartialEq)]
pub struct BlobSpec {
    pub width_px: f64,
    pub height_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
}

impl BlobSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            width_px: rng.gen_range(50.0..150.0),
            height_px: rng.gen_range(50.0..150.0),
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            duration_s: rng.gen_range(10.0..20.0),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {:.1}px; height: {:.1}px; background: radial-gradient(circle, var(--color-accent), transparent); border-radius: 50%; opacity: 0.1; left: {:.2}%; top: {:.2}%; animation: floatRandom {:.2}s ease-in-out infinite; pointer-events: none;",
            self.width_px, self.height_px, self.left_pct, self.top_pct, self.duration_s
        )
    }
}

/// One dot of a hover particle burst
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpec {
    pub top_pct: f64,
    pub left_pct: f64,
    pub delay_s: f64,
}

pub fn particle_burst<R: Rng + ?Sized>(rng: &mut R) -> Vec<ParticleSpec> {
    (0..PARTICLE_COUNT)
        .map(|i| ParticleSpec {
            top_pct: rng.gen_range(0.0..100.0),
            left_pct: rng.gen_range(0.0..100.0),
            delay_s: i as f64 * 0.1,
        })
        .collect()
}

impl ParticleSpec {
    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: 4px; height: 4px; background: var(--color-accent); border-radius: 50%; top: {:.2}%; left: {:.2}%; opacity: 0; animation: particleFloat 2s ease-out infinite; animation-delay: {:.1}s;",
            self.top_pct, self.left_pct, self.delay_s
        )
    }
}

/// 3D tilt of a card following the cursor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn from_pointer(pointer: Point, rect: Rect) -> Self {
        let local = rect.local(pointer);
        Self {
            rotate_x: (local.y - rect.height / 2.0) / 10.0,
            rotate_y: (rect.width / 2.0 - local.x) / 10.0,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) translateZ(20px)",
            self.rotate_x, self.rotate_y
        )
    }
}

pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) translateZ(0)";

/// Circle spawned where a button was clicked
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    pub fn at(pointer: Point, rect: Rect) -> Self {
        let size = rect.width.max(rect.height);
        let local = rect.local(pointer);
        Self {
            size,
            left: local.x - size / 2.0,
            top: local.y - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {0:.1}px; height: {0:.1}px; left: {1:.1}px; top: {2:.1}px; background: rgba(255, 255, 255, 0.3); border-radius: 50%; pointer-events: none; animation: ripple 0.6s ease-out;",
            self.size, self.left, self.top
        )
    }
}

/// Translation pulling an element toward the cursor
pub fn magnetic_offset(pointer: Point, rect: Rect) -> (f64, f64) {
    let center = rect.center();
    ((pointer.x - center.x) * 0.1, (pointer.y - center.y) * 0.1)
}

pub const MORPH_ENTER_RADIUS: &str = "30% 70% 70% 30% / 30% 30% 70% 70%";
pub const MORPH_ENTER_TRANSFORM: &str = "scale(1.1) rotate(5deg)";
pub const MORPH_LEAVE_RADIUS: &str = "50%";
pub const MORPH_LEAVE_TRANSFORM: &str = "scale(1) rotate(0deg)";
pub const HOVER_FILTER: &str = "hue-rotate(10deg) saturate(1.2)";

/// Extract the number shown in a statistic such as `"12,500+"`
pub fn parse_counter_target(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// Format with comma thousands separators
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Frame-by-frame count-up from zero to the statistic's value
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    plus_suffix: bool,
    finished: bool,
}

impl CounterAnimation {
    /// Returns `None` when the text holds no number
    pub fn from_text(text: &str) -> Option<Self> {
        let target = parse_counter_target(text)?;
        Some(Self {
            target,
            increment: target as f64 / (COUNTER_DURATION_MS / COUNTER_FRAME_MS),
            current: 0.0,
            plus_suffix: text.contains('+'),
            finished: false,
        })
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one frame. Returns the text to display and whether more frames follow.
    pub fn step(&mut self) -> (String, bool) {
        self.current += self.increment;
        if !self.finished && self.current < self.target as f64 {
            (format_thousands(self.current.floor() as u64), true)
        } else {
            self.finished = true;
            let mut text = format_thousands(self.target);
            if self.plus_suffix {
                text.push('+');
            }
            (text, false)
        }
    }
}

/// Split a heading into per-character reveal cells: `(text, delay in seconds)`.
/// Spaces become non-breaking so inline-block spans keep their width.
pub fn text_reveal_cells(text: &str) -> Vec<(String, f64)> {
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let cell = if c == ' ' {
                "\u{00A0}".to_string()
            } else {
                c.to_string()
            };
            (cell, i as f64 * 0.05)
        })
        .collect()
}

/// Grow-in plus sway for the `index`-th leaf of the hero plant
pub fn hero_leaf_animation(index: usize) -> String {
    format!(
        "leafGrowIn 1.5s ease-out {:.1}s both, leafSway {}s ease-in-out infinite",
        1.0 + index as f64 * 0.3,
        3 + index
    )
}

/// Scale-in plus sway for the `index`-th crown of the tree illustration
pub fn tree_leaf_animation(index: usize) -> String {
    format!(
        "scaleIn 1s ease-out {:.1}s both, treeSway {:.1}s ease-in-out infinite",
        1.5 + index as f64 * 0.2,
        4.0 + index as f64 * 0.5
    )
}

/// Keyframes used by the generated decorations. Injected once into `<head>`.
pub const KEYFRAMES_CSS: &str = r#"
@keyframes plantBreathe { 0%, 100% { transform: scale(1); } 50% { transform: scale(1.02); } }
@keyframes leafSway { 0%, 100% { transform: rotate(-2deg); } 50% { transform: rotate(2deg); } }
@keyframes treeSway { 0%, 100% { transform: rotate(-1deg) scale(1); } 50% { transform: rotate(1deg) scale(1.02); } }
@keyframes growFromBottom { from { height: 0; opacity: 0; } to { height: 100%; opacity: 1; } }
@keyframes leafGrowIn { from { transform: scale(0) rotate(-90deg); opacity: 0; } to { transform: scale(1) rotate(0deg); opacity: 1; } }
@keyframes zoomIn { from { transform: scale(0.8); opacity: 0; } to { transform: scale(1); opacity: 1; } }
@keyframes bounceIn { 0% { transform: scale(0.3); opacity: 0; } 50% { transform: scale(1.1); opacity: 0.8; } 100% { transform: scale(1); opacity: 1; } }
@keyframes particleFloat { 0% { opacity: 0; transform: translateY(0) scale(0); } 20% { opacity: 1; transform: translateY(-20px) scale(1); } 100% { opacity: 0; transform: translateY(-100px) scale(0); } }
@keyframes floatRandom { 0%, 100% { transform: translateY(0) translateX(0); } 25% { transform: translateY(-20px) translateX(10px); } 50% { transform: translateY(-10px) translateX(-10px); } 75% { transform: translateY(-30px) translateX(5px); } }
@keyframes ripple { to { transform: scale(4); opacity: 0; } }
"#;

/// Classes toggled by the scroll controller. Injected once into `<head>`.
pub const SCROLL_EFFECTS_CSS: &str = r#"
.reveal-hidden { opacity: 0; transform: translateY(50px); transition: all 0.8s ease-out; }
.reveal-visible { opacity: 1; transform: translateY(0); }
.stagger-child { opacity: 0; transform: translateY(20px); transition: all 0.5s ease-out; }
.stagger-visible { opacity: 1; transform: translateY(0); }
.animate-on-scroll { opacity: 0; transform: translateY(30px); transition: all 0.6s ease-out; }
.animate-on-scroll.animated { opacity: 1; transform: translateY(0); }
.scroll-to-top:hover { transform: scale(1.1) !important; box-shadow: 0 8px 25px rgba(20, 83, 45, 0.3) !important; }
.scroll-to-top:active { transform: scale(0.95) !important; }
html { scroll-behavior: smooth; }
@media (prefers-reduced-motion: reduce) { .parallax-element, .floating-element { transform: none !important; } }
@media (max-width: 768px) {
    .scroll-to-top { bottom: 20px !important; right: 20px !important; width: 45px !important; height: 45px !important; font-size: 16px !important; }
    .reveal-hidden { transform: translateY(30px); }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_leaf_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for (i, leaf) in populate(&mut rng, 200).into_iter().enumerate() {
            assert!(LEAF_SYMBOLS.contains(&leaf.symbol));
            assert!((0.0..100.0).contains(&leaf.left_pct));
            assert!((0.0..100.0).contains(&leaf.top_pct));
            assert!((15.0..35.0).contains(&leaf.font_size_px));
            assert!((0.2..0.8).contains(&leaf.opacity));
            assert!((1..=5).contains(&leaf.z_index));
            assert!((8.0..18.0).contains(&leaf.duration_s));
            assert_eq!(leaf.delay_s, i as f64 * 0.5);
        }
    }

    #[test]
    fn test_populate_is_reproducible() {
        let a = populate(&mut StdRng::seed_from_u64(42), 10);
        let b = populate(&mut StdRng::seed_from_u64(42), 10);
        assert_eq!(a, b);
        assert_eq!(a.len(), INITIAL_LEAF_COUNT);
    }

    #[test]
    fn test_leaf_animation_string() {
        assert_eq!(
            leaf_animation(10.0, 1.5),
            "floatLeaf 10.00s ease-in-out 1.5s infinite, leafSway 3.00s ease-in-out 1.5s infinite alternate"
        );
    }

    #[test]
    fn test_refresh_schedule() {
        assert_eq!(
            refresh_schedule(0),
            FadeSchedule {
                fade_at_ms: 0,
                remove_at_ms: 1000
            }
        );
        assert_eq!(refresh_schedule(3).fade_at_ms, 600);
        assert_eq!(refresh_schedule(3).remove_at_ms, 1600);
    }

    #[test]
    fn test_particle_burst() {
        let burst = particle_burst(&mut StdRng::seed_from_u64(1));
        assert_eq!(burst.len(), PARTICLE_COUNT);
        assert!((burst[5].delay_s - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_tilt_from_pointer() {
        let rect = Rect::new(100.0, 100.0, 200.0, 100.0);
        let center = Tilt::from_pointer(Point::new(200.0, 150.0), rect);
        assert_eq!(center, Tilt { rotate_x: 0.0, rotate_y: 0.0 });

        let corner = Tilt::from_pointer(Point::new(100.0, 100.0), rect);
        assert_eq!(corner.rotate_x, -5.0);
        assert_eq!(corner.rotate_y, 10.0);
        assert!(corner.transform().contains("rotateX(-5.00deg)"));
    }

    #[test]
    fn test_ripple_centered_on_click() {
        let rect = Rect::new(10.0, 10.0, 120.0, 40.0);
        let ripple = Ripple::at(Point::new(70.0, 30.0), rect);
        assert_eq!(ripple.size, 120.0);
        assert_eq!(ripple.left, 0.0);
        assert_eq!(ripple.top, -40.0);
    }

    #[test]
    fn test_magnetic_offset() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(magnetic_offset(Point::new(100.0, 40.0), rect), (5.0, 2.0));
        assert_eq!(magnetic_offset(Point::new(50.0, 20.0), rect), (0.0, 0.0));
    }

    #[test]
    fn test_parse_counter_target() {
        assert_eq!(parse_counter_target("12,500+"), Some(12_500));
        assert_eq!(parse_counter_target("98%"), Some(98));
        assert_eq!(parse_counter_target("Many"), None);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_counter_runs_to_target_with_suffix() {
        let mut counter = CounterAnimation::from_text("5,000+").unwrap();
        let mut frames = 0;
        let last = loop {
            let (text, more) = counter.step();
            frames += 1;
            if !more {
                break text;
            }
        };
        assert_eq!(last, "5,000+");
        assert!(counter.is_finished());
        assert!((120..=130).contains(&frames));
    }

    #[test]
    fn test_counter_zero_target_finishes_at_once() {
        let mut counter = CounterAnimation::from_text("0").unwrap();
        assert_eq!(counter.step(), ("0".to_string(), false));
        assert!(CounterAnimation::from_text("n/a").is_none());
    }

    #[test]
    fn test_text_reveal_cells() {
        let cells = text_reveal_cells("Go on");
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[2].0, "\u{00A0}");
        assert!((cells[4].1 - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_keyframes_cover_generated_animations() {
        for name in ["leafSway", "particleFloat", "floatRandom", "ripple", "bounceIn"] {
            assert!(KEYFRAMES_CSS.contains(&format!("@keyframes {}", name)));
        }
    }
}
