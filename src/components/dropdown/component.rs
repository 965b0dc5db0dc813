use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};

use super::state::{FADE_MS, MenuPhase};

fn schedule_fade(phase: RwSignal<MenuPhase>) {
	set_timeout(
		move || phase.update(|p| *p = p.fade_elapsed()),
		Duration::from_millis(FADE_MS),
	);
}

fn dismiss(phase: RwSignal<MenuPhase>) {
	phase.update(|p| *p = p.dismiss());
	schedule_fade(phase);
}

/// Bell button with a fading notification menu.
#[component]
pub fn NotificationDropdown(
	/// Messages listed in the menu.
	#[prop(into)]
	notifications: Signal<Vec<String>>,
) -> impl IntoView {
	let phase = RwSignal::new(MenuPhase::Hidden);
	let container_ref = NodeRef::<leptos::html::Div>::new();

	let on_toggle = move |ev: MouseEvent| {
		ev.prevent_default();
		ev.stop_propagation();
		let next = phase.get_untracked().toggle();
		phase.set(next);
		if next == MenuPhase::FadingOut {
			schedule_fade(phase);
		}
	};

	let click_handle = window_event_listener(ev::click, move |ev| {
		if !phase.get_untracked().is_open() {
			return;
		}
		let Some(container) = container_ref.get_untracked() else {
			return;
		};
		let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
		if !container.contains(target.as_ref()) {
			dismiss(phase);
		}
	});
	let key_handle = window_event_listener(ev::keydown, move |ev| {
		if ev.key() == "Escape" && phase.get_untracked().is_open() {
			dismiss(phase);
		}
	});
	on_cleanup(move || {
		click_handle.remove();
		key_handle.remove();
	});

	view! {
		<div
			id="notification-container"
			class="notification-container"
			node_ref=container_ref
			style="position: relative;"
		>
			<button
				id="notification-dropdown"
				type="button"
				aria-haspopup="true"
				aria-expanded=move || phase.get().aria_expanded()
				on:click=on_toggle
			>
				"Notifications"
				<span class="notification-count">{move || notifications.with(Vec::len)}</span>
			</button>
			<div
				id="notification-menu"
				class=move || phase.get().menu_class()
				role="menu"
				style="transition: opacity 200ms;"
			>
				<Show
					when=move || notifications.with(|n| !n.is_empty())
					fallback=|| view! { <p class="notification-empty">"No new notifications"</p> }
				>
					<ul>
						{move || {
							notifications
								.get()
								.into_iter()
								.map(|text| view! { <li role="menuitem">{text}</li> })
								.collect_view()
						}}
					</ul>
				</Show>
			</div>
		</div>
	}
}
