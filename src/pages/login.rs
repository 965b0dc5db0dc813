use leptos::prelude::*;

use crate::components::password::PasswordField;

#[component]
pub fn Login() -> impl IntoView {
	view! {
		<main class="login-page">
			<h1>"Sign in"</h1>
			<form method="post" action="/accounts/login/">
				<label for="username">"Username"</label>
				<input id="username" name="username" autocomplete="username" />
				<PasswordField id="password" name="password" />
				<button type="submit">"Sign in"</button>
			</form>
		</main>
	}
}
