//! Visibility of a password input and the config of its toggle button.

use serde::Deserialize;

use crate::error::Result;

/// Class set on the toggle button while the password is readable.
pub const ACTIVE_CLASS: &str = "hs-password-active";

/// Whether the password field shows its value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
	/// `type="password"`.
	#[default]
	Masked,
	/// `type="text"`.
	Revealed,
}

impl Visibility {
	/// Anything other than `type="password"` counts as revealed.
	pub fn from_input_type(input_type: &str) -> Self {
		if input_type == "password" {
			Visibility::Masked
		} else {
			Visibility::Revealed
		}
	}

	/// Button click.
	pub fn toggle(self) -> Self {
		match self {
			Visibility::Masked => Visibility::Revealed,
			Visibility::Revealed => Visibility::Masked,
		}
	}

	/// Value for the input's `type` attribute.
	pub fn input_type(self) -> &'static str {
		match self {
			Visibility::Masked => "password",
			Visibility::Revealed => "text",
		}
	}

	/// Whether the button carries [`ACTIVE_CLASS`].
	pub fn is_active(self) -> bool {
		self == Visibility::Revealed
	}

	/// Class list of the "show" icon.
	pub fn eye_class(self) -> &'static str {
		if self.is_active() { "eye-icon hidden" } else { "eye-icon" }
	}

	/// Class list of the "hide" icon.
	pub fn eye_slash_class(self) -> &'static str {
		if self.is_active() { "eye-slash-icon" } else { "eye-slash-icon hidden" }
	}
}

/// Caret position saved across a type switch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
	/// `selectionStart`.
	pub start: u32,
	/// `selectionEnd`.
	pub end: u32,
}

/// Contents of a `data-hs-toggle-password` attribute.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ToggleConfig {
	/// CSS selector of the input the button controls.
	pub target: String,
}

impl ToggleConfig {
	/// Parses the raw attribute value.
	pub fn parse(raw: &str) -> Result<Self> {
		Ok(serde_json::from_str(raw)?)
	}
}
