//! Anchor geometry for connector lines.
//!
//! Every point of one pass is expressed against a single [`Frame`], taken
//! from the container's bounding box before any box is measured.

/// A point in frame coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal offset.
	pub x: f64,
	/// Vertical offset, growing downwards.
	pub y: f64,
}

impl Point {
	/// Builds a point.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// A box in viewport coordinates, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	/// Left edge.
	pub left: f64,
	/// Top edge.
	pub top: f64,
	/// Width.
	pub width: f64,
	/// Height.
	pub height: f64,
}

impl Rect {
	/// Builds a rect from its top-left corner and size.
	pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
		Self {
			left,
			top,
			width,
			height,
		}
	}

	/// Bottom edge.
	pub fn bottom(&self) -> f64 {
		self.top + self.height
	}

	/// Horizontal center.
	pub fn center_x(&self) -> f64 {
		self.left + self.width / 2.0
	}
}

/// Origin of the coordinate frame for one pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Frame {
	/// Viewport x of the origin.
	pub left: f64,
	/// Viewport y of the origin.
	pub top: f64,
}

/// Where lines attach to a box: top-center when it is the child,
/// bottom-center when it is the parent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Anchors {
	/// Top-center.
	pub top: Point,
	/// Bottom-center.
	pub bottom: Point,
}

impl Frame {
	/// Takes the origin from the container's bounding box.
	pub fn from_rect(rect: &Rect) -> Self {
		Self {
			left: rect.left,
			top: rect.top,
		}
	}

	/// Translates viewport coordinates into the frame.
	pub fn to_local(&self, x: f64, y: f64) -> Point {
		Point::new(x - self.left, y - self.top)
	}

	/// Both anchors of `rect`, in the frame.
	pub fn anchors(&self, rect: &Rect) -> Anchors {
		let cx = rect.center_x();
		Anchors {
			top: self.to_local(cx, rect.top),
			bottom: self.to_local(cx, rect.bottom()),
		}
	}
}
