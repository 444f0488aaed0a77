//! Painting button layers with the egui painter.

use egui::{Color32, Painter, Pos2, Shape, Stroke};
use glyphbutton_core::IconButton;
use kurbo::{BezPath, PathEl, Point};
use peniko::Color;

/// A flattened subpath.
#[derive(Debug, Clone, PartialEq)]
pub struct Subpath {
    pub points: Vec<Point>,
    pub closed: bool,
}

/// Convert a peniko color to an egui color.
pub fn to_color32(color: Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Flatten a path into polylines, one per subpath.
pub fn flatten_subpaths(path: &BezPath, tolerance: f64) -> Vec<Subpath> {
    let mut subpaths: Vec<Subpath> = Vec::new();
    kurbo::flatten(path, tolerance, |el| match el {
        PathEl::MoveTo(p) => subpaths.push(Subpath {
            points: vec![p],
            closed: false,
        }),
        PathEl::LineTo(p) => {
            if let Some(current) = subpaths.last_mut() {
                current.points.push(p);
            }
        }
        PathEl::ClosePath => {
            if let Some(current) = subpaths.last_mut() {
                current.closed = true;
            }
        }
        // flatten only emits moves, lines and closes
        PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
    });
    subpaths
}

/// Paint every live layer of `button` with its top-left corner at `origin`.
pub fn paint_button(painter: &Painter, origin: Pos2, button: &IconButton, tolerance: f64) {
    for layer in button.layers().iter() {
        let offset = layer.frame().origin();
        let to_pos = |p: &Point| {
            Pos2::new(
                origin.x + (offset.x + p.x) as f32,
                origin.y + (offset.y + p.y) as f32,
            )
        };
        let fill = to_color32(layer.presentation_fill());
        let stroke = Stroke::new(layer.line_width() as f32, to_color32(layer.presentation_stroke()));

        for subpath in flatten_subpaths(layer.path(), tolerance) {
            let points: Vec<Pos2> = subpath.points.iter().map(to_pos).collect();
            if fill.a() > 0 && points.len() >= 3 {
                painter.add(Shape::convex_polygon(points.clone(), fill, Stroke::NONE));
            }
            if stroke.is_empty() || points.len() < 2 {
                continue;
            }
            if subpath.closed {
                painter.add(Shape::closed_line(points, stroke));
            } else {
                painter.add(Shape::line(points, stroke));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphbutton_core::geometry;
    use kurbo::Size;

    #[test]
    fn test_to_color32() {
        assert_eq!(to_color32(glyphbutton_core::WHITE), Color32::WHITE);
        assert_eq!(to_color32(glyphbutton_core::CLEAR).a(), 0);
        assert_eq!(to_color32(glyphbutton_core::RED), Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn test_flatten_polyline_is_open() {
        let path = geometry::polyline(&geometry::check_mark_points(Size::new(40.0, 40.0)));
        let subpaths = flatten_subpaths(&path, 0.25);
        assert_eq!(subpaths.len(), 1);
        assert_eq!(subpaths[0].points.len(), 3);
        assert!(!subpaths[0].closed);
    }

    #[test]
    fn test_flatten_circle_is_closed() {
        let path = geometry::circle_path(Size::new(40.0, 40.0), geometry::CIRCLE_INSET);
        let subpaths = flatten_subpaths(&path, 0.25);
        assert_eq!(subpaths.len(), 1);
        assert!(subpaths[0].closed);
        assert!(subpaths[0].points.len() > 8);
        let center = Point::new(20.0, 20.0);
        for p in &subpaths[0].points {
            assert!((p.distance(center) - 15.0).abs() < 0.5);
        }
    }
}
