//! Show/hide toggle for password inputs.

mod component;
pub mod enhance;
pub mod state;

pub use component::PasswordField;
pub use enhance::install_password_toggles;
pub use state::{ToggleConfig, Visibility};
