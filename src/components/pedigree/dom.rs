//! Browser side of the line pass: reads boxes out of the document and
//! appends `<line>` elements to the SVG overlay.

use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{AddEventListenerOptions, Document, DomRect, Element, Window};

use super::config::{LineStyle, SVG_NS, TreeConfig};
use super::geometry::{Frame, Rect};
use super::lines::{ConnectorLine, IndividualBox, LineSurface, TreeHost, render_pass};
use crate::error::Result;

impl From<DomRect> for Rect {
	fn from(r: DomRect) -> Self {
		Rect::new(r.left(), r.top(), r.width(), r.height())
	}
}

/// Reads the rendered tree out of a document.
pub struct DomTree<'a> {
	document: &'a Document,
	config: &'a TreeConfig,
}

impl<'a> DomTree<'a> {
	/// Reads boxes matching `config.box_selector` from `document`.
	pub fn new(document: &'a Document, config: &'a TreeConfig) -> Self {
		Self { document, config }
	}
}

impl TreeHost for DomTree<'_> {
	fn frame(&self) -> Option<Frame> {
		self.document
			.get_element_by_id(&self.config.container_id)
			.map(|container| Frame::from_rect(&container.get_bounding_client_rect().into()))
	}

	fn boxes(&self) -> Vec<IndividualBox> {
		let nodes = match self.document.query_selector_all(&self.config.box_selector) {
			Ok(nodes) => nodes,
			Err(err) => {
				warn!("bad box selector {:?}: {err:?}", self.config.box_selector);
				return Vec::new();
			}
		};
		(0..nodes.length())
			.filter_map(|i| nodes.item(i))
			.filter_map(|node| node.dyn_into::<Element>().ok())
			.map(|el| IndividualBox {
				element_id: Some(el.id()).filter(|id| !id.is_empty()),
				id: el.get_attribute("data-mouse-id"),
				father: el.get_attribute("data-father-id"),
				mother: el.get_attribute("data-mother-id"),
				rect: el.get_bounding_client_rect().into(),
			})
			.collect()
	}
}

/// The `<svg>` overlay lines are appended to.
pub struct SvgSurface {
	document: Document,
	svg: Element,
}

impl SvgSurface {
	/// The surface with element id `id`, if the document has one.
	pub fn find(document: &Document, id: &str) -> Option<Self> {
		document.get_element_by_id(id).map(|svg| Self {
			document: document.clone(),
			svg,
		})
	}
}

impl LineSurface for SvgSurface {
	fn append_line(&mut self, line: &ConnectorLine, style: &LineStyle) -> Result<()> {
		let el = self.document.create_element_ns(Some(SVG_NS), "line")?;
		el.set_attribute("x1", &line.from.x.to_string())?;
		el.set_attribute("y1", &line.from.y.to_string())?;
		el.set_attribute("x2", &line.to.x.to_string())?;
		el.set_attribute("y2", &line.to.y.to_string())?;
		el.set_attribute("stroke", &style.stroke)?;
		el.set_attribute("stroke-width", &style.width.to_string())?;
		self.svg.append_child(&el)?;
		Ok(())
	}
}

/// Runs one line pass over `document`.
pub fn draw_tree_lines(document: &Document, config: &TreeConfig) -> usize {
	let host = DomTree::new(document, config);
	let mut surface = SvgSurface::find(document, &config.surface_id);
	let drawn = render_pass(&host, surface.as_mut(), config);
	info!("drew {drawn} pedigree lines");
	drawn
}

/// Whether a document in `ready_state` has already fired `load`.
pub fn is_loaded(ready_state: &str) -> bool {
	ready_state == "complete"
}

/// Draws the tree lines once every resource has loaded.
///
/// If the page has already finished loading the pass runs immediately,
/// otherwise on the window's `load` event.
pub fn run_after_load(config: TreeConfig) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(document) = window.document() else {
		return;
	};
	if is_loaded(&document.ready_state()) {
		draw_tree_lines(&document, &config);
		return;
	}
	draw_on_load(&window, config);
}

/// Runs one pass on the next `load` event of `window`, then unregisters.
pub fn draw_on_load(window: &Window, config: TreeConfig) {
	let on_load = Closure::once_into_js(move || {
		if let Some(document) = web_sys::window().and_then(|w| w.document()) {
			draw_tree_lines(&document, &config);
		}
	});
	let options = AddEventListenerOptions::new();
	options.set_once(true);
	if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
		"load",
		on_load.unchecked_ref::<js_sys::Function>(),
		&options,
	) {
		warn!("could not listen for load: {err:?}");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_complete_counts_as_loaded() {
		assert!(is_loaded("complete"));
		assert!(!is_loaded("interactive"));
		assert!(!is_loaded("loading"));
	}
}
