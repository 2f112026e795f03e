//! Common reusable UI components
//!
//! Small interactive widgets shared by the page sections.

pub mod accordion;
pub mod modal;
pub mod tabs;
pub mod tooltip;

pub use accordion::{Accordion, AccordionItem};
pub use modal::Modal;
pub use tabs::{TabItem, Tabs};
pub use tooltip::Tooltip;
