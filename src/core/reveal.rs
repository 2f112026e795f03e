//! One-shot trigger bookkeeping for intersection-driven animations

use std::collections::HashSet;
use std::hash::Hash;

/// Remembers which keys have already fired.
///
/// Observers call [`OnceSet::fire`] on every intersection; only the first call
/// for a key returns `true`, so an element that scrolls in and out repeatedly
/// animates exactly once.
#[derive(Debug, Clone)]
pub struct OnceSet<K> {
    fired: HashSet<K>,
}

impl<K: Eq + Hash> OnceSet<K> {
    pub fn new() -> Self {
        Self {
            fired: HashSet::new(),
        }
    }

    /// Returns `true` the first time `key` is seen
    pub fn fire(&mut self, key: K) -> bool {
        self.fired.insert(key)
    }

    pub fn has_fired(&self, key: &K) -> bool {
        self.fired.contains(key)
    }

    pub fn len(&self) -> usize {
        self.fired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }
}

impl<K: Eq + Hash> Default for OnceSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// What a scroll-animation target does when it first becomes visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollAnimation {
    /// Count up to the number in the element's text
    Counter,
    /// Grow to `data-width` percent
    ProgressFill { width: String },
    /// Add the `animated` class
    Class,
}

impl ScrollAnimation {
    /// Pick the animation from the element's classes and `data-width` attribute
    pub fn classify(has_count_up: bool, has_progress_fill: bool, width: Option<&str>) -> Self {
        if has_count_up {
            ScrollAnimation::Counter
        } else if has_progress_fill {
            ScrollAnimation::ProgressFill {
                width: progress_width(width),
            }
        } else {
            ScrollAnimation::Class
        }
    }
}

/// Target width for a progress bar, defaulting to full
pub fn progress_width(attribute: Option<&str>) -> String {
    match attribute.map(str::trim) {
        Some(w) if !w.is_empty() => w.to_string(),
        _ => "100".to_string(),
    }
}

/// Delay before the `index`-th staggered child of a revealed element appears
pub fn stagger_delay_ms(index: usize) -> u32 {
    (index as u32).saturating_mul(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_key() {
        let mut once = OnceSet::new();
        assert!(once.fire(1_u32));
        assert!(!once.fire(1));
        assert!(!once.fire(1));
        assert!(once.fire(2));
        assert_eq!(once.len(), 2);
        assert!(once.has_fired(&1));
        assert!(!once.has_fired(&3));
    }

    #[test]
    fn test_repeated_entries_trigger_once() {
        let mut once = OnceSet::new();
        // element 7 enters, leaves and re-enters the viewport three times
        let entries = [7, 3, 7, 7, 3];
        let triggered: Vec<_> = entries.into_iter().filter(|k| once.fire(*k)).collect();
        assert_eq!(triggered, vec![7, 3]);
    }

    #[test]
    fn test_classify_scroll_animation() {
        assert_eq!(
            ScrollAnimation::classify(true, true, Some("40")),
            ScrollAnimation::Counter
        );
        assert_eq!(
            ScrollAnimation::classify(false, true, Some("40")),
            ScrollAnimation::ProgressFill {
                width: "40".to_string()
            }
        );
        assert_eq!(
            ScrollAnimation::classify(false, true, None),
            ScrollAnimation::ProgressFill {
                width: "100".to_string()
            }
        );
        assert_eq!(
            ScrollAnimation::classify(false, false, None),
            ScrollAnimation::Class
        );
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(4), 400);
    }
}
