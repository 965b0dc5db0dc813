//! Open/close state of the notification menu.

/// How long the menu takes to fade before it is hidden.
pub const FADE_MS: u64 = 200;

/// Lifecycle of the notification menu.
///
/// `FadingOut` keeps the menu in the layout while its opacity transition
/// runs; the fade timer moves it to `Hidden` unless it was reopened first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuPhase {
	/// Removed from layout.
	#[default]
	Hidden,
	/// Fully visible.
	Open,
	/// Transparent but still laid out.
	FadingOut,
}

impl MenuPhase {
	/// Button click.
	pub fn toggle(self) -> Self {
		match self {
			MenuPhase::Open => MenuPhase::FadingOut,
			MenuPhase::Hidden | MenuPhase::FadingOut => MenuPhase::Open,
		}
	}

	/// Click outside the container or `Escape`; only closes an open menu.
	pub fn dismiss(self) -> Self {
		match self {
			MenuPhase::Open => MenuPhase::FadingOut,
			other => other,
		}
	}

	/// Fade timer fired.
	pub fn fade_elapsed(self) -> Self {
		match self {
			MenuPhase::FadingOut => MenuPhase::Hidden,
			other => other,
		}
	}

	/// True while the menu is shown.
	pub fn is_open(self) -> bool {
		self == MenuPhase::Open
	}

	/// Value for the button's `aria-expanded`.
	pub fn aria_expanded(self) -> &'static str {
		if self.is_open() { "true" } else { "false" }
	}

	/// Class list of the menu element.
	pub fn menu_class(self) -> &'static str {
		match self {
			MenuPhase::Hidden => "notification-menu hidden opacity-0",
			MenuPhase::Open => "notification-menu opacity-100",
			MenuPhase::FadingOut => "notification-menu opacity-0",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toggle_opens_and_closes() {
		let open = MenuPhase::default().toggle();
		assert!(open.is_open());
		assert_eq!(open.aria_expanded(), "true");

		let closing = open.toggle();
		assert_eq!(closing, MenuPhase::FadingOut);
		assert_eq!(closing.aria_expanded(), "false");
		assert_eq!(closing.fade_elapsed(), MenuPhase::Hidden);
	}

	#[test]
	fn reopening_during_fade_survives_the_timer() {
		let reopened = MenuPhase::Open.toggle().toggle();
		assert_eq!(reopened, MenuPhase::Open);
		assert_eq!(reopened.fade_elapsed(), MenuPhase::Open);
	}

	#[test]
	fn dismiss_only_affects_open_menu() {
		assert_eq!(MenuPhase::Open.dismiss(), MenuPhase::FadingOut);
		assert_eq!(MenuPhase::Hidden.dismiss(), MenuPhase::Hidden);
		assert_eq!(MenuPhase::FadingOut.dismiss(), MenuPhase::FadingOut);
	}

	#[test]
	fn classes_track_phase() {
		assert!(MenuPhase::Hidden.menu_class().contains("hidden"));
		assert!(MenuPhase::Open.menu_class().contains("opacity-100"));
		let fading = MenuPhase::FadingOut.menu_class();
		assert!(fading.contains("opacity-0") && !fading.contains("hidden"));
	}
}
