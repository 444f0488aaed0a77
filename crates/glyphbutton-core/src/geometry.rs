//! Procedural path generation for each icon variant.
//!
//! All geometry is derived from the button's bounds at build time. Points are
//! in the button's local coordinate space with the origin at the top-left.

use crate::error::{IconButtonError, Result};
use crate::icon::IconVariant;
use kurbo::{BezPath, Circle, Point, Shape as KurboShape, Size};

/// Default inset subtracted from the short side before halving into a radius.
pub const CIRCLE_INSET: f64 = 10.0;
/// Default stroke width for circles, lines and the check mark.
pub const LINE_WIDTH: f64 = 2.5;
/// Stroke width of the circle behind a check mark.
pub const CHECK_CIRCLE_LINE_WIDTH: f64 = 1.0;

/// Flattening tolerance used when converting curves to bezier paths.
const PATH_TOLERANCE: f64 = 0.1;

/// Center of the bounds.
pub fn center(bounds: Size) -> Point {
    Point::new(bounds.width / 2.0, bounds.height / 2.0)
}

/// Radius of the icon circle: `(min(w, h) - inset) / 2`, never negative.
pub fn circle_radius(bounds: Size, inset: f64) -> f64 {
    ((bounds.width.min(bounds.height) - inset) / 2.0).max(0.0)
}

/// Full circle centered in the bounds, starting at angle zero and running
/// clockwise in screen space.
pub fn circle_path(bounds: Size, inset: f64) -> BezPath {
    Circle::new(center(bounds), circle_radius(bounds, inset)).to_path(PATH_TOLERANCE)
}

/// Endpoints of the plus sign: vertical bar then horizontal bar.
pub fn plus_points(bounds: Size) -> [Point; 4] {
    let middle = bounds.width.min(bounds.height) * 0.5;
    [
        Point::new(middle, middle / 2.0),
        Point::new(middle, bounds.height - middle / 2.0),
        Point::new(middle / 2.0, middle),
        Point::new(bounds.width - middle / 2.0, middle),
    ]
}

/// Endpoints of the X mark: falling diagonal then rising diagonal.
pub fn exit_points(bounds: Size) -> [Point; 4] {
    let middle = bounds.width.min(bounds.height) * 0.5;
    let near = middle - middle / 2.0;
    let far = middle + middle / 2.0;
    [
        Point::new(near, near),
        Point::new(far, bounds.height - near),
        Point::new(far, near),
        Point::new(near, bounds.height - near),
    ]
}

/// Endpoints for a two-line variant. Only `Exit` and `Plus` are two-line
/// shapes.
pub fn two_line_points(variant: IconVariant, bounds: Size) -> Result<[Point; 4]> {
    match variant {
        IconVariant::Exit => Ok(exit_points(bounds)),
        IconVariant::Plus => Ok(plus_points(bounds)),
        other => Err(IconButtonError::UnsupportedLayer(other)),
    }
}

/// The three points of the check mark. Uses the long side, unlike the
/// two-line shapes.
pub fn check_mark_points(bounds: Size) -> [Point; 3] {
    let middle = bounds.width.max(bounds.height) * 0.5;
    [
        Point::new(middle / 2.0, middle),
        Point::new(middle, bounds.height - middle / 2.0),
        Point::new(bounds.width - middle / 2.0, middle / 1.5),
    ]
}

/// Open polyline through the given points.
pub fn polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(*first);
    for p in rest {
        path.line_to(*p);
    }
    path
}
