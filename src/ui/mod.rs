pub mod common;
pub mod effects;
pub mod forms;
pub mod helpers;
pub mod icon;
pub mod navigation;
pub mod notifications;
pub mod pages;

pub use helpers::{SiteHelpers, provide_site_helpers, use_site_helpers};
pub use icon::{Icon, icons};
pub use notifications::{NotificationManager, NotificationsContainer};
pub use pages::{LandingPage, NotFoundPage};
