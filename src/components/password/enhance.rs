//! Progressive enhancement for password toggles rendered outside Leptos.
//!
//! Markup contract: a button carrying `data-hs-toggle-password='{"target": "<selector>"}'`,
//! optionally containing `.eye-icon` and `.eye-slash-icon` children.

use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement};

use super::state::{ACTIVE_CLASS, Selection, ToggleConfig, Visibility};
use crate::error::{AppError, Result};

/// Selector of buttons enhanced by [`install_password_toggles`].
pub const TOGGLE_SELECTOR: &str = "[data-hs-toggle-password]";
const TOGGLE_ATTR: &str = "data-hs-toggle-password";

/// Caret range of `input`, when it has one.
pub fn read_selection(input: &HtmlInputElement) -> Option<Selection> {
	let start = input.selection_start().ok().flatten()?;
	let end = input.selection_end().ok().flatten()?;
	Some(Selection { start, end })
}

/// Puts the caret back and refocuses `input`.
pub fn restore_selection(input: &HtmlInputElement, selection: Option<Selection>) {
	if let Some(Selection { start, end }) = selection {
		if let Err(err) = input.set_selection_range(start, end) {
			debug!("could not restore selection: {err:?}");
		}
	}
	if let Err(err) = input.focus() {
		debug!("could not refocus password input: {err:?}");
	}
}

/// Wires every toggle button in `document`, returning how many were wired.
/// Buttons with a malformed config or a missing target are skipped.
pub fn install_password_toggles(document: &Document) -> usize {
	let buttons = match document.query_selector_all(TOGGLE_SELECTOR) {
		Ok(buttons) => buttons,
		Err(err) => {
			warn!("password toggle lookup failed: {err:?}");
			return 0;
		}
	};

	let mut installed = 0;
	for i in 0..buttons.length() {
		let Some(button) = buttons.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
			continue;
		};
		match install_one(document, button) {
			Ok(()) => installed += 1,
			Err(err) => warn!("skipping password toggle: {err}"),
		}
	}
	if installed > 0 {
		info!("installed {installed} password toggles");
	}
	installed
}

fn install_one(document: &Document, button: HtmlElement) -> Result<()> {
	let raw = button.get_attribute(TOGGLE_ATTR).unwrap_or_default();
	let config = ToggleConfig::parse(&raw)?;
	let target = document
		.query_selector(&config.target)?
		.and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
		.ok_or(AppError::MissingElement(config.target))?;

	// keep focus in the input while the button is pressed
	let on_mousedown = Closure::<dyn FnMut(Event)>::new(|ev: Event| ev.prevent_default());
	button.add_event_listener_with_callback("mousedown", on_mousedown.as_ref().unchecked_ref())?;
	on_mousedown.forget();

	let toggle_button = button.clone();
	let on_click = Closure::<dyn FnMut()>::new(move || toggle(&toggle_button, &target));
	button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
	on_click.forget();
	Ok(())
}

fn toggle(button: &HtmlElement, target: &HtmlInputElement) {
	let selection = read_selection(target);
	let current = Visibility::from_input_type(&target.get_attribute("type").unwrap_or_default());
	if let Err(err) = target.set_attribute("type", current.toggle().input_type()) {
		warn!("could not switch password input type: {err:?}");
		return;
	}
	if let Err(err) = button.class_list().toggle(ACTIVE_CLASS) {
		debug!("could not toggle {ACTIVE_CLASS}: {err:?}");
	}

	if let (Ok(Some(eye)), Ok(Some(eye_slash))) = (
		button.query_selector(".eye-icon"),
		button.query_selector(".eye-slash-icon"),
	) {
		for icon in [eye, eye_slash] {
			if let Err(err) = icon.class_list().toggle("hidden") {
				debug!("could not swap password icon: {err:?}");
			}
		}
	}

	let Some(window) = web_sys::window() else {
		return;
	};
	let target = target.clone();
	let refocus = Closure::once_into_js(move || restore_selection(&target, selection));
	if let Err(err) = window.request_animation_frame(refocus.unchecked_ref()) {
		warn!("could not schedule password refocus: {err:?}");
	}
}
