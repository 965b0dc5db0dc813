//! Notification bell with a fading dropdown menu.

mod component;
pub mod state;

pub use component::NotificationDropdown;
pub use state::MenuPhase;
