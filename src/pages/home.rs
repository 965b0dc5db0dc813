use leptos::prelude::*;

use crate::components::dropdown::NotificationDropdown;
use crate::components::pedigree::{Mouse, Pedigree, PedigreeTree, Sex};

/// Id of the mouse whose ancestry the home page shows.
const SUBJECT: u32 = 15;

/// Generate a sample colony: four founder generations bred down to one pup.
fn sample_pedigree() -> Pedigree {
	let mut pedigree = Pedigree::new();
	// founders 1..=8, alternating male/female
	for id in 1..=8 {
		let sex = if id % 2 == 1 { Sex::Male } else { Sex::Female };
		pedigree.insert(Mouse::new(id, format!("F0-{id}"), sex));
	}
	// each later mouse is bred from two consecutive mice of the previous generation
	let mut generation: Vec<u32> = (1..=8).collect();
	let mut next_id = 9;
	while generation.len() > 1 {
		let mut bred = Vec::with_capacity(generation.len() / 2);
		for (i, pair) in generation.chunks(2).enumerate() {
			let sex = if i % 2 == 0 { Sex::Male } else { Sex::Female };
			let mouse = Mouse::new(next_id, format!("Tube {next_id}"), sex)
				.with_parents(pair.first().copied(), pair.get(1).copied());
			pedigree.insert(mouse);
			bred.push(next_id);
			next_id += 1;
		}
		generation = bred;
	}
	pedigree
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let notifications = Signal::derive(move || {
		vec![
			"Breeding request for cage 12 approved".to_string(),
			"Tube 14 weaned".to_string(),
		]
	});

	view! {
		<header class="app-header">
			<a href="/">"Mouse Metrics"</a>
			<NotificationDropdown notifications=notifications />
		</header>
		<main class="family-tree-page">
			<h1>"Family Tree"</h1>
			<PedigreeTree pedigree=sample_pedigree() subject=SUBJECT />
		</main>
	}
}
