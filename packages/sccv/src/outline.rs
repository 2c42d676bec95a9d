//! Outline paths for the card silhouettes.
//!
//! All outlines are rebuilt from scratch whenever the card is resized - there is no
//! incremental update. Rectangles and ovals are traced anticlockwise on screen (y-down):
//!
//! ```text
//!    TopLeft <-------------- TopRight
//!       |                       ^
//!       v                       |
//!    BottomLeft ----------> BottomRight
//! ```

use kurbo::{BezPath, Ellipse, Point, Rect, RoundedRect, Shape as _};

/// Vello uses an inner tolerance for creating segments
/// We're just reusing the value here
const TOLERANCE: f64 = 0.1;

/// The silhouette of a card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Oval,
    Rhombus,
}

impl ShapeKind {
    /// Map the integer code used by attribute sets (0, 1, 2) to a shape.
    /// Unknown codes fall back to [`ShapeKind::Rectangle`].
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => ShapeKind::Oval,
            2 => ShapeKind::Rhombus,
            _ => ShapeKind::Rectangle,
        }
    }
}

/// Build the closed outline of `shape` inside `bounds`.
///
/// This never fails. Degenerate bounds or odd radii give a degenerate (possibly
/// self-intersecting) path rather than an error.
pub fn build_outline(bounds: Rect, shape: ShapeKind, corner_radius: f64) -> BezPath {
    match shape {
        ShapeKind::Rectangle => rounded_rect(bounds, corner_radius),
        ShapeKind::Oval => oval(bounds),
        ShapeKind::Rhombus => rhombus(bounds, corner_radius),
    }
}

/// kurbo traces its primitives clockwise, so both are reversed.
fn rounded_rect(bounds: Rect, corner_radius: f64) -> BezPath {
    // kurbo limits the radius to half the shortest side but mirrors negative radii
    RoundedRect::from_rect(bounds, corner_radius.max(0.0))
        .to_path(TOLERANCE)
        .reverse_subpaths()
}

fn oval(bounds: Rect) -> BezPath {
    let mut path = Ellipse::from_rect(bounds.abs())
        .to_path(TOLERANCE)
        .reverse_subpaths();
    path.close_path();
    path
}

/// A diamond through the side midpoints with each vertex cut by a quadratic curve.
///
/// The vertex itself is the control point of the cut, so every curve bends towards
/// the centre. The radius is used as-is: a radius larger than the bounds makes the
/// cuts cross each other.
fn rhombus(bounds: Rect, corner_radius: f64) -> BezPath {
    let Rect { x0, y0, x1, y1 } = bounds;
    let Point { x: cx, y: cy } = bounds.center();
    let half = corner_radius / 2.0;

    let mut path = BezPath::new();
    path.move_to((x0 + half, cy - half));

    path.line_to((cx - half, y0 + half));
    path.quad_to((cx, y0), (cx + half, y0 + half));

    path.line_to((x1 - half, cy - half));
    path.quad_to((x1, cy), (x1 - half, cy + half));

    path.line_to((cx + half, y1 - half));
    path.quad_to((cx, y1), (cx - half, y1 - half));

    path.line_to((x0 + half, cy + half));
    path.quad_to((x0, cy), (x0 + half, cy - half));

    path.close_path();
    path
}
