use leptos::prelude::*;
use pedigree_tree::components::password::install_password_toggles;
use pedigree_tree::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);

	// toggles that ship in the static index.html rather than a component
	if let Some(document) = web_sys::window().and_then(|w| w.document()) {
		install_password_toggles(&document);
	}
}
