//! Connector lines between rendered boxes, computed without touching the DOM.

use std::collections::HashMap;

use log::{debug, warn};

use super::config::{DEFAULT_LOOKUP_PREFIX, LineStyle, TreeConfig};
use super::geometry::{Frame, Point, Rect};
use crate::error::Result;

/// One rendered mouse box with its parent annotations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndividualBox {
	/// Element `id` attribute, what parents are resolved by.
	pub element_id: Option<String>,
	/// `data-mouse-id`.
	pub id: Option<String>,
	/// `data-father-id`.
	pub father: Option<String>,
	/// `data-mother-id`.
	pub mother: Option<String>,
	/// Viewport rectangle at measuring time.
	pub rect: Rect,
}

impl IndividualBox {
	/// A box for mouse `id` with the element id the tree view gives it.
	pub fn new(id: impl Into<String>, rect: Rect) -> Self {
		let id = id.into();
		Self {
			element_id: Some(format!("{DEFAULT_LOOKUP_PREFIX}{id}")),
			id: Some(id),
			rect,
			..Self::default()
		}
	}

	/// Overrides the element id.
	pub fn with_element_id(mut self, element_id: impl Into<String>) -> Self {
		self.element_id = Some(element_id.into());
		self
	}

	/// Sets `data-father-id`.
	pub fn with_father(mut self, id: impl Into<String>) -> Self {
		self.father = Some(id.into());
		self
	}

	/// Sets `data-mother-id`.
	pub fn with_mother(mut self, id: impl Into<String>) -> Self {
		self.mother = Some(id.into());
		self
	}

	fn own_id(&self) -> Option<&str> {
		non_empty(&self.id)
	}

	fn parent_ids(&self) -> impl Iterator<Item = &str> {
		[non_empty(&self.father), non_empty(&self.mother)]
			.into_iter()
			.flatten()
	}
}

fn non_empty(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|s| !s.is_empty())
}

/// A segment from a parent's bottom-center to a child's top-center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectorLine {
	/// Parent's bottom-center.
	pub from: Point,
	/// Child's top-center.
	pub to: Point,
}

/// Lookup from element id to box, built once per pass.
///
/// Only boxes carrying their own mouse id are indexed; a parent id resolves
/// through `prefix + id`, the element id the tree view emits.
pub struct BoxIndex<'a> {
	prefix: &'a str,
	by_key: HashMap<&'a str, &'a IndividualBox>,
}

impl<'a> BoxIndex<'a> {
	/// Indexes `boxes` for lookups through `prefix`.
	pub fn build(boxes: &'a [IndividualBox], prefix: &'a str) -> Self {
		let mut by_key = HashMap::with_capacity(boxes.len());
		for b in boxes {
			if b.own_id().is_none() {
				continue;
			}
			if let Some(key) = non_empty(&b.element_id) {
				// first box in document order wins, like getElementById
				by_key.entry(key).or_insert(b);
			}
		}
		Self { prefix, by_key }
	}

	/// The box rendered for mouse `id`, if any.
	pub fn resolve(&self, id: &str) -> Option<&'a IndividualBox> {
		self.by_key
			.get(format!("{}{}", self.prefix, id).as_str())
			.copied()
	}

	/// Number of resolvable boxes.
	pub fn len(&self) -> usize {
		self.by_key.len()
	}

	/// True when nothing can be resolved.
	pub fn is_empty(&self) -> bool {
		self.by_key.is_empty()
	}
}

/// Computes the connector lines for `boxes`, every point relative to `frame`.
///
/// Boxes without an id draw nothing and cannot be resolved as parents.
/// Parent ids with no matching box are skipped. Father edges come before
/// mother edges for each child.
pub fn connector_lines(
	frame: &Frame,
	boxes: &[IndividualBox],
	config: &TreeConfig,
) -> Vec<ConnectorLine> {
	let index = BoxIndex::build(boxes, &config.lookup_prefix);
	let mut lines = Vec::new();

	for child in boxes {
		let Some(child_id) = child.own_id() else {
			continue;
		};
		let to = frame.anchors(&child.rect).top;
		for parent_id in child.parent_ids() {
			match index.resolve(parent_id) {
				Some(parent) => lines.push(ConnectorLine {
					from: frame.anchors(&parent.rect).bottom,
					to,
				}),
				None => debug!("mouse {child_id}: parent {parent_id} is not rendered"),
			}
		}
	}
	lines
}

/// Source of the rendered layout for one pass.
pub trait TreeHost {
	/// Snapshot of the container origin; `None` when the container is absent.
	fn frame(&self) -> Option<Frame>;
	/// Every box in document order.
	fn boxes(&self) -> Vec<IndividualBox>;
}

/// Where connector lines end up.
pub trait LineSurface {
	/// Appends one line drawn with `style`.
	fn append_line(&mut self, line: &ConnectorLine, style: &LineStyle) -> Result<()>;
}

/// Runs one pass and returns how many lines were appended.
///
/// A missing surface or container is a no-op. The surface is never cleared,
/// so running twice over the same layout draws every line twice.
pub fn render_pass<H, S>(host: &H, surface: Option<&mut S>, config: &TreeConfig) -> usize
where
	H: TreeHost,
	S: LineSurface,
{
	let Some(surface) = surface else {
		debug!("no #{} surface, skipping tree lines", config.surface_id);
		return 0;
	};
	let Some(frame) = host.frame() else {
		debug!("no #{} container, skipping tree lines", config.container_id);
		return 0;
	};

	let boxes = host.boxes();
	let mut drawn = 0;
	for line in connector_lines(&frame, &boxes, config) {
		match surface.append_line(&line, &config.line_style) {
			Ok(()) => drawn += 1,
			Err(err) => warn!("failed to draw connector line: {err}"),
		}
	}
	drawn
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::AppError;

	struct MockHost {
		frame: Option<Frame>,
		boxes: Vec<IndividualBox>,
	}

	impl TreeHost for MockHost {
		fn frame(&self) -> Option<Frame> {
			self.frame
		}

		fn boxes(&self) -> Vec<IndividualBox> {
			self.boxes.clone()
		}
	}

	#[derive(Default)]
	struct RecordingSurface {
		lines: Vec<(ConnectorLine, LineStyle)>,
		fail: bool,
	}

	impl LineSurface for RecordingSurface {
		fn append_line(&mut self, line: &ConnectorLine, style: &LineStyle) -> Result<()> {
			if self.fail {
				return Err(AppError::Dom("appendChild threw".into()));
			}
			self.lines.push((*line, style.clone()));
			Ok(())
		}
	}

	fn frame_at(left: f64, top: f64) -> Option<Frame> {
		Some(Frame { left, top })
	}

	fn family() -> Vec<IndividualBox> {
		vec![
			IndividualBox::new("1", Rect::new(0.0, 0.0, 80.0, 30.0)),
			IndividualBox::new("2", Rect::new(100.0, 0.0, 80.0, 30.0)),
			IndividualBox::new("3", Rect::new(50.0, 100.0, 80.0, 30.0))
				.with_father("1")
				.with_mother("2"),
		]
	}

	#[test]
	fn single_father_scenario() {
		let host = MockHost {
			frame: frame_at(50.0, 100.0),
			boxes: vec![
				IndividualBox::new("1", Rect::new(40.0, 120.0, 80.0, 30.0)),
				IndividualBox::new("2", Rect::new(40.0, 200.0, 80.0, 30.0)).with_father("1"),
			],
		};
		let mut surface = RecordingSurface::default();

		let drawn = render_pass(&host, Some(&mut surface), &TreeConfig::default());

		assert_eq!(drawn, 1);
		let (line, style) = &surface.lines[0];
		assert_eq!(line.from, Point::new(30.0, 50.0));
		assert_eq!(line.to, Point::new(30.0, 100.0));
		assert_eq!(style, &LineStyle::default());
	}

	#[test]
	fn both_parents_give_two_lines_father_first() {
		let lines = connector_lines(&Frame::default(), &family(), &TreeConfig::default());
		assert_eq!(lines.len(), 2);
		assert_eq!(lines[0].from, Point::new(40.0, 30.0));
		assert_eq!(lines[1].from, Point::new(140.0, 30.0));
		assert!(lines.iter().all(|l| l.to == Point::new(90.0, 100.0)));
	}

	#[test]
	fn unresolved_parent_is_skipped() {
		let boxes = vec![
			IndividualBox::new("1", Rect::new(0.0, 0.0, 10.0, 10.0)),
			IndividualBox::new("2", Rect::new(0.0, 50.0, 10.0, 10.0))
				.with_father("99")
				.with_mother("1"),
		];
		let lines = connector_lines(&Frame::default(), &boxes, &TreeConfig::default());
		assert_eq!(lines.len(), 1);
		assert_eq!(lines[0].from, Point::new(5.0, 10.0));
	}

	#[test]
	fn box_without_parents_draws_nothing() {
		let boxes = vec![IndividualBox::new("1", Rect::new(0.0, 0.0, 10.0, 10.0))];
		assert!(connector_lines(&Frame::default(), &boxes, &TreeConfig::default()).is_empty());
	}

	#[test]
	fn box_without_id_neither_draws_nor_resolves() {
		let anonymous = IndividualBox {
			id: Some(String::new()),
			father: Some("1".into()),
			rect: Rect::new(0.0, 50.0, 10.0, 10.0),
			..IndividualBox::default()
		};
		let boxes = vec![
			IndividualBox::new("1", Rect::new(0.0, 0.0, 10.0, 10.0)),
			anonymous,
			IndividualBox::new("2", Rect::new(0.0, 90.0, 10.0, 10.0)).with_mother(""),
		];
		let index = BoxIndex::build(&boxes, "mouse-");
		assert_eq!(index.len(), 2);
		assert!(index.resolve("").is_none());
		assert!(index.resolve("1").is_some());
		assert!(connector_lines(&Frame::default(), &boxes, &TreeConfig::default()).is_empty());
	}

	#[test]
	fn duplicate_ids_resolve_to_first_box() {
		let boxes = vec![
			IndividualBox::new("1", Rect::new(0.0, 0.0, 10.0, 10.0)),
			IndividualBox::new("1", Rect::new(500.0, 0.0, 10.0, 10.0)),
		];
		let index = BoxIndex::build(&boxes, "mouse-");
		assert_eq!(index.resolve("1").map(|b| b.rect.left), Some(0.0));
	}

	#[test]
	fn parents_resolve_through_element_id() {
		let boxes = vec![
			IndividualBox::new("1", Rect::new(0.0, 0.0, 10.0, 10.0)).with_element_id("sire"),
			IndividualBox::new("2", Rect::new(0.0, 0.0, 10.0, 10.0)),
			IndividualBox::new("3", Rect::new(0.0, 50.0, 10.0, 10.0))
				.with_father("1")
				.with_mother("2"),
		];
		let index = BoxIndex::build(&boxes, "mouse-");
		assert!(index.resolve("1").is_none());
		assert_eq!(index.resolve("2").and_then(|b| b.id.as_deref()), Some("2"));
		assert_eq!(
			connector_lines(&Frame::default(), &boxes, &TreeConfig::default()).len(),
			1
		);
	}

	#[test]
	fn prefix_comes_from_config() {
		let config = TreeConfig {
			lookup_prefix: "cage-".into(),
			..TreeConfig::default()
		};
		let boxes = vec![
			IndividualBox::new("1", Rect::new(0.0, 0.0, 10.0, 10.0)).with_element_id("cage-1"),
			IndividualBox::new("2", Rect::new(0.0, 50.0, 10.0, 10.0))
				.with_element_id("cage-2")
				.with_father("1"),
		];
		assert_eq!(connector_lines(&Frame::default(), &boxes, &config).len(), 1);
		assert!(connector_lines(&Frame::default(), &boxes, &TreeConfig::default()).is_empty());
	}

	#[test]
	fn missing_surface_is_a_no_op() {
		let host = MockHost {
			frame: frame_at(0.0, 0.0),
			boxes: family(),
		};
		assert_eq!(
			render_pass::<_, RecordingSurface>(&host, None, &TreeConfig::default()),
			0
		);
	}

	#[test]
	fn missing_container_is_a_no_op() {
		let host = MockHost {
			frame: None,
			boxes: family(),
		};
		let mut surface = RecordingSurface::default();
		assert_eq!(render_pass(&host, Some(&mut surface), &TreeConfig::default()), 0);
		assert!(surface.lines.is_empty());
	}

	#[test]
	fn second_pass_accumulates_lines() {
		let host = MockHost {
			frame: frame_at(0.0, 0.0),
			boxes: family(),
		};
		let mut surface = RecordingSurface::default();
		let config = TreeConfig::default();

		render_pass(&host, Some(&mut surface), &config);
		render_pass(&host, Some(&mut surface), &config);

		assert_eq!(surface.lines.len(), 4);
		assert_eq!(surface.lines[0], surface.lines[2]);
	}

	#[test]
	fn surface_failures_are_not_counted() {
		let host = MockHost {
			frame: frame_at(0.0, 0.0),
			boxes: family(),
		};
		let mut surface = RecordingSurface {
			fail: true,
			..RecordingSurface::default()
		};
		assert_eq!(render_pass(&host, Some(&mut surface), &TreeConfig::default()), 0);
	}

	#[test]
	fn custom_style_is_passed_through() {
		let host = MockHost {
			frame: frame_at(0.0, 0.0),
			boxes: family(),
		};
		let config = TreeConfig {
			line_style: LineStyle {
				stroke: "#8c564b".into(),
				width: 1.5,
			},
			..TreeConfig::default()
		};
		let mut surface = RecordingSurface::default();
		render_pass(&host, Some(&mut surface), &config);
		assert!(surface.lines.iter().all(|(_, s)| s.stroke == "#8c564b" && s.width == 1.5));
	}
}
