//! Element ids, selectors and styling shared by the tree view and the line pass.

/// Namespace for elements appended to the drawing surface.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Element id prefix of a mouse box: `mouse-{id}`.
pub const DEFAULT_LOOKUP_PREFIX: &str = "mouse-";

/// Hard ceiling on ancestry rows; the oldest row has `2^(n-1)` slots.
pub const MAX_GENERATIONS: usize = 16;

/// Stroke applied to every connector line.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
	/// SVG `stroke` color.
	pub stroke: String,
	/// SVG `stroke-width`.
	pub width: f64,
}

impl Default for LineStyle {
	fn default() -> Self {
		Self {
			stroke: "black".into(),
			width: 2.0,
		}
	}
}

/// Element ids, selectors and limits shared by the tree view and the line pass.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeConfig {
	/// Id of the `<svg>` overlay lines are appended to.
	pub surface_id: String,
	/// Id of the element whose top-left corner is the coordinate frame origin.
	pub container_id: String,
	/// Selector matching every individual box.
	pub box_selector: String,
	/// Prefix joined with a mouse id to build the box lookup key.
	pub lookup_prefix: String,
	/// Stroke of every connector line.
	pub line_style: LineStyle,
	/// Rows rendered by the ancestry layout, subject included.
	/// Clamped to [`MAX_GENERATIONS`].
	pub max_generations: usize,
}

impl Default for TreeConfig {
	fn default() -> Self {
		Self {
			surface_id: "tree-lines".into(),
			container_id: "tree-wrapper".into(),
			box_selector: "[data-mouse-id]".into(),
			lookup_prefix: DEFAULT_LOOKUP_PREFIX.into(),
			line_style: LineStyle::default(),
			max_generations: 8,
		}
	}
}

impl TreeConfig {
	/// Element id of the box for mouse `id`.
	pub fn lookup_key(&self, id: &str) -> String {
		format!("{}{}", self.lookup_prefix, id)
	}
}
