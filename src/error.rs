//! Error type shared by the tree renderer and the page widgets.
//!
//! Nothing here is ever surfaced to the user as a failure: callers log the
//! error and skip the unit of work it belongs to.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while building or decorating the page.
#[derive(Debug, Error)]
pub enum AppError {
	/// The requested mouse is not part of the pedigree.
	#[error("no mouse with id {0} in pedigree")]
	UnknownMouse(u32),
	/// An element the widget needs is not in the document.
	#[error("element not found: {0}")]
	MissingElement(String),
	/// A browser call threw.
	#[error("DOM operation failed: {0}")]
	Dom(String),
	/// `data-hs-toggle-password` did not hold a valid config object.
	#[error("invalid password toggle config: {0}")]
	ToggleConfig(#[from] serde_json::Error),
}

impl From<JsValue> for AppError {
	fn from(value: JsValue) -> Self {
		Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_messages() {
		assert_eq!(
			AppError::UnknownMouse(404).to_string(),
			"no mouse with id 404 in pedigree"
		);
		assert_eq!(
			AppError::MissingElement("#password".into()).to_string(),
			"element not found: #password"
		);
	}

	#[test]
	fn toggle_config_error_converts() {
		let err: AppError = serde_json::from_str::<serde_json::Value>("{target")
			.unwrap_err()
			.into();
		assert!(matches!(err, AppError::ToggleConfig(_)));
		assert!(err.to_string().starts_with("invalid password toggle config"));
	}
}
