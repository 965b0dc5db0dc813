use leptos::prelude::*;
use log::warn;

use super::ancestry::{Mouse, Pedigree};
use super::config::TreeConfig;
use super::dom::run_after_load;

/// Ancestry rows of `subject` with connector lines drawn once the page has loaded.
#[component]
pub fn PedigreeTree(
	/// Every known mouse.
	pedigree: Pedigree,
	/// Id of the youngest mouse, alone in the bottom row.
	subject: u32,
	/// Element ids and styling; defaults to [`TreeConfig::default`].
	#[prop(optional)]
	config: Option<TreeConfig>,
) -> impl IntoView {
	let config = config.unwrap_or_default();
	let rows = match pedigree.ancestry(subject, config.max_generations) {
		Ok(rows) => rows,
		Err(err) => {
			warn!("cannot lay out family tree: {err}");
			return view! { <p class="tree-error">{err.to_string()}</p> }.into_any();
		}
	};

	let generations = rows
		.into_iter()
		.map(|row| {
			let slots = row
				.into_iter()
				.map(|slot| mouse_slot(slot, &config))
				.collect_view();
			view! {
				<div class="tree-generation" style="display: flex;">
					{slots}
				</div>
			}
		})
		.collect_view();

	let load_config = config.clone();
	Effect::new(move |_| {
		run_after_load(load_config.clone());
	});

	view! {
		<div id=config.container_id.clone() class="tree-wrapper" style="position: relative;">
			<svg
				id=config.surface_id.clone()
				class="tree-lines"
				style="position: absolute; inset: 0; width: 100%; height: 100%; overflow: visible; pointer-events: none;"
			></svg>
			{generations}
		</div>
	}
	.into_any()
}

fn mouse_slot(slot: Option<&Mouse>, config: &TreeConfig) -> AnyView {
	let Some(mouse) = slot else {
		return view! { <div class="mouse-slot mouse-slot-empty" style="flex: 1;"></div> }
			.into_any();
	};
	let id = mouse.id.to_string();

	view! {
		<div class="mouse-slot" style="flex: 1; display: flex; justify-content: center; padding: 24px 4px;">
			<div
				id=config.lookup_key(&id)
				class="mouse-box"
				data-mouse-id=id
				data-father-id=mouse.father.map(|f| f.to_string())
				data-mother-id=mouse.mother.map(|m| m.to_string())
			>
				<span class="mouse-label">{mouse.label.clone()}</span>
				" "
				<span class="mouse-sex">{mouse.sex.symbol()}</span>
			</div>
		</div>
	}
	.into_any()
}
