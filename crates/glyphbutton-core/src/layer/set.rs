//! The live layers of a button, one variant per reachable combination.

use super::ShapeLayer;
use crate::icon::LayerKind;
use std::time::Duration;

/// The layers currently attached to a button.
///
/// Each variant is one combination the button can actually hold, so a
/// partial set (a first line without its second line, say) cannot exist.
/// Iteration order is render order, back to front.
#[derive(Debug, Clone, Default)]
pub enum LayerSet {
    /// Nothing attached.
    #[default]
    Empty,
    /// A single circle.
    Circle { circle: ShapeLayer },
    /// The two lines of an X or a plus sign.
    TwoLine {
        first_line: ShapeLayer,
        second_line: ShapeLayer,
    },
    /// A thin circle with a check mark on top.
    Checkmark {
        circle: ShapeLayer,
        check_mark: ShapeLayer,
    },
    /// A circle with two lines drawn over it, as left by an animated
    /// circle-to-exit transition.
    CircleWithLines {
        circle: ShapeLayer,
        first_line: ShapeLayer,
        second_line: ShapeLayer,
    },
}

impl LayerSet {
    pub fn is_empty(&self) -> bool {
        matches!(self, LayerSet::Empty)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Layers in render order.
    pub fn iter(&self) -> impl Iterator<Item = &ShapeLayer> + '_ {
        let slots: [Option<&ShapeLayer>; 3] = match self {
            LayerSet::Empty => [None, None, None],
            LayerSet::Circle { circle } => [Some(circle), None, None],
            LayerSet::TwoLine {
                first_line,
                second_line,
            } => [Some(first_line), Some(second_line), None],
            LayerSet::Checkmark { circle, check_mark } => [Some(circle), Some(check_mark), None],
            LayerSet::CircleWithLines {
                circle,
                first_line,
                second_line,
            } => [Some(circle), Some(first_line), Some(second_line)],
        };
        slots.into_iter().flatten()
    }

    /// Mutable layers in render order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ShapeLayer> + '_ {
        let slots: [Option<&mut ShapeLayer>; 3] = match self {
            LayerSet::Empty => [None, None, None],
            LayerSet::Circle { circle } => [Some(circle), None, None],
            LayerSet::TwoLine {
                first_line,
                second_line,
            } => [Some(first_line), Some(second_line), None],
            LayerSet::Checkmark { circle, check_mark } => [Some(circle), Some(check_mark), None],
            LayerSet::CircleWithLines {
                circle,
                first_line,
                second_line,
            } => [Some(circle), Some(first_line), Some(second_line)],
        };
        slots.into_iter().flatten()
    }

    /// Kinds of the attached layers, in render order.
    pub fn kinds(&self) -> Vec<LayerKind> {
        self.iter().map(ShapeLayer::kind).collect()
    }

    pub fn contains(&self, kind: LayerKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn get(&self, kind: LayerKind) -> Option<&ShapeLayer> {
        self.iter().find(|layer| layer.kind() == kind)
    }

    pub fn get_mut(&mut self, kind: LayerKind) -> Option<&mut ShapeLayer> {
        self.iter_mut().find(|layer| layer.kind() == kind)
    }

    /// Put two line layers on top of this set.
    ///
    /// A circle is kept underneath the lines; every other layer is dropped.
    /// Returns the new set and the kinds that were detached.
    pub fn with_lines(self, first_line: ShapeLayer, second_line: ShapeLayer) -> (Self, Vec<LayerKind>) {
        match self {
            LayerSet::Circle { circle } => (
                LayerSet::CircleWithLines {
                    circle,
                    first_line,
                    second_line,
                },
                Vec::new(),
            ),
            LayerSet::Checkmark { circle, check_mark } => (
                LayerSet::CircleWithLines {
                    circle,
                    first_line,
                    second_line,
                },
                vec![check_mark.kind()],
            ),
            LayerSet::CircleWithLines {
                circle,
                first_line: old_first,
                second_line: old_second,
            } => (
                LayerSet::CircleWithLines {
                    circle,
                    first_line,
                    second_line,
                },
                vec![old_first.kind(), old_second.kind()],
            ),
            other => {
                let detached = other.kinds();
                (
                    LayerSet::TwoLine {
                        first_line,
                        second_line,
                    },
                    detached,
                )
            }
        }
    }

    /// Detach both line layers, keeping any circle.
    ///
    /// Returns the new set and the kinds that were detached.
    pub fn without_lines(self) -> (Self, Vec<LayerKind>) {
        match self {
            LayerSet::TwoLine {
                first_line,
                second_line,
            } => (LayerSet::Empty, vec![first_line.kind(), second_line.kind()]),
            LayerSet::CircleWithLines {
                circle,
                first_line,
                second_line,
            } => (
                LayerSet::Circle { circle },
                vec![first_line.kind(), second_line.kind()],
            ),
            other => (other, Vec::new()),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.iter().any(ShapeLayer::is_animating)
    }

    /// Advance the animations of every layer.
    pub fn advance(&mut self, dt: Duration) {
        for layer in self.iter_mut() {
            layer.advance(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{BezPath, Rect};

    fn layer(kind: LayerKind) -> ShapeLayer {
        ShapeLayer::new(kind, BezPath::new(), Rect::new(0.0, 0.0, 10.0, 10.0))
    }

    fn circle_set() -> LayerSet {
        LayerSet::Circle {
            circle: layer(LayerKind::Circle),
        }
    }

    #[test]
    fn test_kinds_in_render_order() {
        assert!(LayerSet::Empty.kinds().is_empty());
        assert_eq!(circle_set().kinds(), vec![LayerKind::Circle]);
        let check = LayerSet::Checkmark {
            circle: layer(LayerKind::Circle),
            check_mark: layer(LayerKind::CheckMark),
        };
        assert_eq!(check.kinds(), vec![LayerKind::Circle, LayerKind::CheckMark]);
        assert_eq!(check.len(), 2);
    }

    #[test]
    fn test_get() {
        let set = circle_set();
        assert!(set.contains(LayerKind::Circle));
        assert!(set.get(LayerKind::FirstLine).is_none());
    }

    #[test]
    fn test_with_lines_keeps_circle() {
        let (set, detached) =
            circle_set().with_lines(layer(LayerKind::FirstLine), layer(LayerKind::SecondLine));
        assert!(detached.is_empty());
        assert_eq!(
            set.kinds(),
            vec![LayerKind::Circle, LayerKind::FirstLine, LayerKind::SecondLine]
        );
    }

    #[test]
    fn test_with_lines_drops_check_mark() {
        let check = LayerSet::Checkmark {
            circle: layer(LayerKind::Circle),
            check_mark: layer(LayerKind::CheckMark),
        };
        let (set, detached) =
            check.with_lines(layer(LayerKind::FirstLine), layer(LayerKind::SecondLine));
        assert_eq!(detached, vec![LayerKind::CheckMark]);
        assert!(matches!(set, LayerSet::CircleWithLines { .. }));
    }

    #[test]
    fn test_with_lines_on_empty() {
        let (set, detached) =
            LayerSet::Empty.with_lines(layer(LayerKind::FirstLine), layer(LayerKind::SecondLine));
        assert!(detached.is_empty());
        assert_eq!(set.kinds(), vec![LayerKind::FirstLine, LayerKind::SecondLine]);
    }

    #[test]
    fn test_without_lines() {
        let (with, _) =
            circle_set().with_lines(layer(LayerKind::FirstLine), layer(LayerKind::SecondLine));
        let (set, detached) = with.without_lines();
        assert_eq!(detached, vec![LayerKind::FirstLine, LayerKind::SecondLine]);
        assert_eq!(set.kinds(), vec![LayerKind::Circle]);

        let two = LayerSet::TwoLine {
            first_line: layer(LayerKind::FirstLine),
            second_line: layer(LayerKind::SecondLine),
        };
        let (set, detached) = two.without_lines();
        assert!(set.is_empty());
        assert_eq!(detached.len(), 2);

        let (set, detached) = circle_set().without_lines();
        assert!(detached.is_empty());
        assert_eq!(set.kinds(), vec![LayerKind::Circle]);
    }
}
