//! State for the small interactive widgets: mobile menu, accordions, tabs and
//! tooltip placement

use super::geometry::Rect;

/// Gap between a tooltip and its trigger
pub const TOOLTIP_GAP: f64 = 10.0;

/// Delay between hiding a tooltip and detaching it
pub const TOOLTIP_REMOVE_MS: u32 = 300;

/// Mobile navigation menu toggled by the hamburger button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Click anywhere on the page; clicks outside the navbar close the menu
    pub fn click(&mut self, inside_navbar: bool) -> bool {
        if inside_navbar { false } else { self.close() }
    }
}

/// A group of accordion items where at most one is expanded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionGroup {
    len: usize,
    open: Option<usize>,
}

impl AccordionGroup {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Click on header `index`: collapse the others and toggle this one.
    /// Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Tab buttons paired with panels by index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    buttons: usize,
    panels: usize,
    active: usize,
}

impl TabSet {
    pub fn new(buttons: usize, panels: usize) -> Self {
        Self {
            buttons,
            panels,
            active: 0,
        }
    }

    /// Activate tab `index`. Returns `false` for a nonexistent button.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.buttons {
            return false;
        }
        self.active = index;
        true
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Panel shown for the active tab, if a panel exists at that index
    pub fn active_panel(&self) -> Option<usize> {
        (self.active < self.panels).then_some(self.active)
    }
}

/// Top-left corner for a tooltip centred above its trigger
pub fn tooltip_position(trigger: Rect, tooltip_width: f64, tooltip_height: f64) -> (f64, f64) {
    let left = trigger.left + trigger.width / 2.0 - tooltip_width / 2.0;
    let top = trigger.top - tooltip_height - TOOLTIP_GAP;
    (left, top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggle_and_close() {
        let mut menu = MenuState::default();
        assert!(menu.toggle());
        assert!(!menu.click(true));
        assert!(menu.is_open());
        assert!(menu.click(false));
        assert!(!menu.is_open());
        assert!(!menu.close());
    }

    #[test]
    fn test_accordion_single_open() {
        let mut group = AccordionGroup::new(3);
        group.toggle(0);
        assert!(group.is_open(0));

        group.toggle(2);
        assert!(!group.is_open(0));
        assert!(group.is_open(2));

        group.toggle(2);
        assert_eq!(group.open_index(), None);

        group.toggle(7);
        assert_eq!(group.open_index(), None);
    }

    #[test]
    fn test_tabs_missing_panel() {
        let mut tabs = TabSet::new(3, 2);
        assert_eq!(tabs.active_panel(), Some(0));
        assert!(tabs.select(2));
        assert_eq!(tabs.active(), 2);
        assert_eq!(tabs.active_panel(), None);
        assert!(!tabs.select(3));
        assert_eq!(tabs.active(), 2);
    }

    #[test]
    fn test_tooltip_centered_above() {
        let trigger = Rect::new(100.0, 200.0, 40.0, 20.0);
        assert_eq!(tooltip_position(trigger, 80.0, 30.0), (80.0, 160.0));
    }
}
