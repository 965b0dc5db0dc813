use leptos::prelude::*;
use web_sys::MouseEvent;

use super::enhance::{read_selection, restore_selection};
use super::state::{ACTIVE_CLASS, Visibility};

/// Password input with a show/hide button that keeps the caret in place.
#[component]
pub fn PasswordField(
	/// Id of the input, also the label's `for`.
	#[prop(into)]
	id: String,
	/// Label text.
	#[prop(into, default = "Password".into())]
	label: String,
	/// Form field name.
	#[prop(into, optional)]
	name: Option<String>,
) -> impl IntoView {
	let visibility = RwSignal::new(Visibility::Masked);
	let input_ref = NodeRef::<leptos::html::Input>::new();

	let on_click = move |_: MouseEvent| {
		let Some(input) = input_ref.get_untracked() else {
			return;
		};
		let selection = read_selection(&input);
		visibility.update(|v| *v = v.toggle());
		request_animation_frame(move || {
			if let Some(input) = input_ref.get_untracked() {
				restore_selection(&input, selection);
			}
		});
	};

	let button_class = move || {
		if visibility.get().is_active() {
			format!("password-toggle {ACTIVE_CLASS}")
		} else {
			"password-toggle".to_string()
		}
	};

	view! {
		<div class="password-field">
			<label for=id.clone()>{label}</label>
			<div class="password-input" style="position: relative;">
				<input
					id=id
					name=name
					node_ref=input_ref
					type=move || visibility.get().input_type()
					autocomplete="current-password"
				/>
				<button
					type="button"
					class=button_class
					aria-label=move || {
						if visibility.get().is_active() { "Hide password" } else { "Show password" }
					}
					on:mousedown=|ev: MouseEvent| ev.prevent_default()
					on:click=on_click
				>
					<span class=move || visibility.get().eye_class()>"Show"</span>
					<span class=move || visibility.get().eye_slash_class()>"Hide"</span>
				</button>
			</div>
		</div>
	}
}
