//! The icon button: layer construction, re-layout and transitions.

use crate::animation::AnimatedProperty;
use crate::color::CLEAR;
use crate::config::ButtonConfig;
use crate::error::{IconButtonError, Result};
use crate::geometry;
use crate::icon::{IconVariant, LayerKind};
use crate::layer::{LayerSet, ShapeLayer};
use crate::transition::{Phase, Transition, TransitionEvent, TransitionKind, TransitionState};
use kurbo::{Line, Point, Rect, Shape as KurboShape, Size};
use peniko::Color;
use std::time::Duration;

/// A button that draws its icon as layered vector paths.
///
/// The host owns layout and time: it reports bounds through
/// [`set_bounds`](Self::set_bounds) and drives animations through
/// [`advance`](Self::advance). Everything happens on the caller's thread.
#[derive(Debug, Clone)]
pub struct IconButton {
    bounds: Size,
    config: ButtonConfig,
    current_type: Option<IconVariant>,
    layers: LayerSet,
    state: TransitionState,
}

impl Default for IconButton {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl IconButton {
    /// Create an unconfigured button with the default config.
    pub fn new(bounds: Size) -> Self {
        Self::with_config(bounds, ButtonConfig::default())
    }

    /// Create an unconfigured button.
    pub fn with_config(bounds: Size, config: ButtonConfig) -> Self {
        Self {
            bounds,
            config,
            current_type: None,
            layers: LayerSet::Empty,
            state: TransitionState::Idle,
        }
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// The button's full bounds as a rect at the origin.
    pub fn frame(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.bounds)
    }

    /// The variant last passed to [`configure`](Self::configure).
    pub fn current_type(&self) -> Option<IconVariant> {
        self.current_type
    }

    pub fn layers(&self) -> &LayerSet {
        &self.layers
    }

    pub fn layer(&self, kind: LayerKind) -> Option<&ShapeLayer> {
        self.layers.get(kind)
    }

    pub fn layer_kinds(&self) -> Vec<LayerKind> {
        self.layers.kinds()
    }

    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    /// Whether a transition is pending or any layer is still animating.
    pub fn is_animating(&self) -> bool {
        self.state.is_active() || self.layers.is_animating()
    }

    /// Replace the icon with a freshly built `variant`.
    ///
    /// Detaches every current layer and drops any pending transition.
    pub fn configure(&mut self, variant: IconVariant, fill: Color, stroke: Color) {
        self.clear();
        self.current_type = Some(variant);
        match variant {
            IconVariant::Circle => self.build_circle_layer(fill, stroke),
            IconVariant::Checkmark => self.build_check_mark(fill, stroke),
            IconVariant::Exit => self.attach_lines(geometry::exit_points(self.bounds), stroke, fill),
            IconVariant::Plus => self.attach_lines(geometry::plus_points(self.bounds), stroke, fill),
        }
        log::debug!(
            "configured {} button at {}x{}: {:?}",
            variant,
            self.bounds.width,
            self.bounds.height,
            self.layers.kinds()
        );
    }

    /// Replace the layer set with a single circle.
    pub fn build_circle_layer(&mut self, fill: Color, stroke: Color) {
        self.cancel_transition();
        let circle = self.circle_layer(fill, stroke, self.config.line_width);
        self.layers = LayerSet::Circle { circle };
    }

    /// Replace the layer set with a thin circle and a check mark.
    pub fn build_check_mark(&mut self, fill: Color, stroke: Color) {
        self.cancel_transition();
        let circle = self.circle_layer(fill, stroke, self.config.check_circle_line_width);
        let path = geometry::polyline(&geometry::check_mark_points(self.bounds));
        let check_mark = ShapeLayer::new(LayerKind::CheckMark, path, self.frame())
            .with_stroke(self.config.highlight())
            .with_fill(CLEAR)
            .with_line_width(self.config.line_width);
        self.layers = LayerSet::Checkmark { circle, check_mark };
    }

    /// Build the two lines of an `Exit` or `Plus` icon.
    ///
    /// An existing circle stays underneath the lines; other layers are
    /// detached. Any other variant is rejected without touching the button.
    pub fn build_two_line_shape(&mut self, variant: IconVariant, stroke: Color, fill: Color) -> Result<()> {
        let points = geometry::two_line_points(variant, self.bounds)?;
        self.cancel_transition();
        self.attach_lines(points, stroke, fill);
        Ok(())
    }

    /// Resize every live layer's frame to the new bounds.
    ///
    /// Paths keep the geometry they were built with until the next
    /// [`configure`](Self::configure).
    pub fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds;
        let frame = self.frame();
        for layer in self.layers.iter_mut() {
            layer.set_frame(frame);
        }
    }

    /// Start a transition using the configured default durations.
    pub fn animate(&mut self, from: IconVariant, to: IconVariant) -> Result<()> {
        let start = self.config.start_duration();
        let end = self.config.end_duration();
        self.animate_with_durations(from, to, start, end)
    }

    /// Start a transition with explicit phase durations.
    ///
    /// Only `Circle -> Exit` (needs a circle layer) and `Exit -> Circle`
    /// (needs both line layers) are supported.
    pub fn animate_with_durations(
        &mut self,
        from: IconVariant,
        to: IconVariant,
        start_duration: Duration,
        end_duration: Duration,
    ) -> Result<()> {
        if self.state.is_active() {
            return Err(IconButtonError::AnimationInProgress);
        }
        let kind = TransitionKind::resolve(from, to)?;
        if let Some(&missing) = kind
            .required_layers()
            .iter()
            .find(|&&k| !self.layers.contains(k))
        {
            return Err(IconButtonError::NonInstantiatedLayer(missing));
        }

        let highlight = self.config.highlight();
        match kind {
            TransitionKind::CircleToExit => {
                self.animate_layer(LayerKind::Circle, AnimatedProperty::FillColor, highlight, start_duration);
            }
            TransitionKind::ExitToCircle => {
                for line in [LayerKind::FirstLine, LayerKind::SecondLine] {
                    self.animate_layer(line, AnimatedProperty::StrokeColor, highlight, start_duration);
                }
            }
        }
        self.state = TransitionState::Phase1(Transition::new(kind, start_duration, end_duration));
        log::debug!("transition {} -> {} started", from, to);
        Ok(())
    }

    /// Move time forward by `dt`.
    ///
    /// Phase completions fire exactly at their duration; leftover time runs
    /// on into the next phase, so the end state does not depend on how the
    /// host slices time.
    pub fn advance(&mut self, dt: Duration) -> Vec<TransitionEvent> {
        let mut events = Vec::new();
        let mut remaining = dt;
        loop {
            match self.state {
                TransitionState::Phase1(mut transition) => {
                    let left = transition.duration(Phase::First).saturating_sub(transition.elapsed);
                    if remaining < left {
                        transition.elapsed += remaining;
                        self.layers.advance(remaining);
                        self.state = TransitionState::Phase1(transition);
                        remaining = Duration::ZERO;
                        break;
                    }
                    self.layers.advance(left);
                    remaining -= left;
                    events.push(TransitionEvent::PhaseCompleted(Phase::First));
                    self.start_second_phase(transition, &mut events);
                }
                TransitionState::Phase2(mut transition) => {
                    let left = transition.duration(Phase::Second).saturating_sub(transition.elapsed);
                    if remaining < left {
                        transition.elapsed += remaining;
                        self.layers.advance(remaining);
                        self.state = TransitionState::Phase2(transition);
                        remaining = Duration::ZERO;
                        break;
                    }
                    self.layers.advance(left);
                    remaining -= left;
                    let from = transition.kind.from_variant();
                    let to = transition.kind.to_variant();
                    events.push(TransitionEvent::PhaseCompleted(Phase::Second));
                    events.push(TransitionEvent::TransitionFinished { from, to });
                    self.state = TransitionState::Done { from, to };
                    log::debug!("transition {} -> {} finished", from, to);
                }
                TransitionState::Idle | TransitionState::Done { .. } => break,
            }
        }
        self.layers.advance(remaining);
        events
    }

    fn start_second_phase(&mut self, transition: Transition, events: &mut Vec<TransitionEvent>) {
        match transition.kind {
            TransitionKind::CircleToExit => {
                let points = geometry::exit_points(self.bounds);
                let (first_line, second_line) = self.line_layers(points, self.config.highlight(), CLEAR);
                let (layers, detached) = std::mem::take(&mut self.layers).with_lines(first_line, second_line);
                self.layers = layers;
                if !detached.is_empty() {
                    events.push(TransitionEvent::LayersDetached(detached));
                }
                events.push(TransitionEvent::LayersAttached(vec![
                    LayerKind::FirstLine,
                    LayerKind::SecondLine,
                ]));
                let accent = self.config.accent();
                if !self.animate_layer(
                    LayerKind::Circle,
                    AnimatedProperty::FillColor,
                    accent,
                    transition.duration(Phase::Second),
                ) {
                    log::warn!("circle layer vanished before the second phase of circle -> exit");
                }
            }
            TransitionKind::ExitToCircle => {
                let (layers, detached) = std::mem::take(&mut self.layers).without_lines();
                self.layers = layers;
                if !detached.is_empty() {
                    events.push(TransitionEvent::LayersDetached(detached));
                }
                if !self.animate_layer(
                    LayerKind::Circle,
                    AnimatedProperty::FillColor,
                    CLEAR,
                    transition.duration(Phase::Second),
                ) {
                    log::warn!("no circle layer to clear in exit -> circle, second phase only waits");
                }
            }
        }
        self.state = TransitionState::Phase2(Transition {
            elapsed: Duration::ZERO,
            ..transition
        });
    }

    /// Animate one property of a layer. Returns false if the layer is absent.
    fn animate_layer(
        &mut self,
        kind: LayerKind,
        property: AnimatedProperty,
        to: Color,
        duration: Duration,
    ) -> bool {
        let easing = self.config.easing;
        match self.layers.get_mut(kind) {
            Some(layer) => {
                layer.animate(property, to, duration, easing);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        let detached = std::mem::take(&mut self.layers).kinds();
        if !detached.is_empty() {
            log::debug!("detached {:?}", detached);
        }
        self.cancel_transition();
    }

    fn cancel_transition(&mut self) {
        if self.state.is_active() {
            log::debug!("pending transition cancelled: {:?}", self.state);
        }
        self.state = TransitionState::Idle;
    }

    fn circle_layer(&self, fill: Color, stroke: Color, line_width: f64) -> ShapeLayer {
        let path = geometry::circle_path(self.bounds, self.config.circle_inset);
        ShapeLayer::new(LayerKind::Circle, path, self.frame())
            .with_fill(fill)
            .with_stroke(stroke)
            .with_line_width(line_width)
    }

    fn line_layers(&self, points: [Point; 4], stroke: Color, fill: Color) -> (ShapeLayer, ShapeLayer) {
        let line = |kind: LayerKind, a: Point, b: Point| {
            ShapeLayer::new(kind, Line::new(a, b).to_path(0.1), self.frame())
                .with_stroke(stroke)
                .with_fill(fill)
                .with_line_width(self.config.line_width)
        };
        (
            line(LayerKind::FirstLine, points[0], points[1]),
            line(LayerKind::SecondLine, points[2], points[3]),
        )
    }

    fn attach_lines(&mut self, points: [Point; 4], stroke: Color, fill: Color) {
        let (first_line, second_line) = self.line_layers(points, stroke, fill);
        let (layers, detached) = std::mem::take(&mut self.layers).with_lines(first_line, second_line);
        if !detached.is_empty() {
            log::debug!("detached {:?}", detached);
        }
        self.layers = layers;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{RED, WHITE};
    use kurbo::PathEl;

    const BLUE: Color = Color::new([0.0, 0.0, 1.0, 1.0]);

    fn button(variant: IconVariant) -> IconButton {
        let mut button = IconButton::new(Size::new(44.0, 44.0));
        button.configure(variant, BLUE, WHITE);
        button
    }

    fn line_endpoints(layer: &ShapeLayer) -> (Point, Point) {
        let els = layer.path().elements();
        match (els[0], els[1]) {
            (PathEl::MoveTo(a), PathEl::LineTo(b)) => (a, b),
            other => panic!("not a straight line: {:?}", other),
        }
    }

    #[test]
    fn test_unconfigured() {
        let button = IconButton::default();
        assert_eq!(button.current_type(), None);
        assert!(button.layers().is_empty());
        assert!(!button.is_animating());
    }

    #[test]
    fn test_configure_layer_kinds() {
        for variant in IconVariant::ALL {
            let b = button(variant);
            assert_eq!(b.current_type(), Some(variant));
            assert_eq!(b.layer_kinds(), variant.layer_kinds());
        }
    }

    #[test]
    fn test_configure_paint() {
        let b = button(IconVariant::Circle);
        let circle = b.layer(LayerKind::Circle).unwrap();
        assert_eq!(circle.fill_color().components, BLUE.components);
        assert_eq!(circle.stroke_color().components, WHITE.components);
        assert!((circle.line_width() - 2.5).abs() < f64::EPSILON);
        assert_eq!(circle.frame(), Rect::new(0.0, 0.0, 44.0, 44.0));
    }

    #[test]
    fn test_check_mark_paint() {
        let b = button(IconVariant::Checkmark);
        let circle = b.layer(LayerKind::Circle).unwrap();
        assert!((circle.line_width() - 1.0).abs() < f64::EPSILON);
        let check = b.layer(LayerKind::CheckMark).unwrap();
        assert_eq!(check.stroke_color().components, WHITE.components);
        assert_eq!(check.fill_color().components, CLEAR.components);
        assert!((check.line_width() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_plus_geometry() {
        let b = button(IconVariant::Plus);
        let (a, c) = line_endpoints(b.layer(LayerKind::FirstLine).unwrap());
        assert_eq!((a, c), (Point::new(22.0, 11.0), Point::new(22.0, 33.0)));
        let (a, c) = line_endpoints(b.layer(LayerKind::SecondLine).unwrap());
        assert_eq!((a, c), (Point::new(11.0, 22.0), Point::new(33.0, 22.0)));
    }

    #[test]
    fn test_build_two_line_shape_rejects_circle() {
        let mut b = button(IconVariant::Circle);
        let result = b.build_two_line_shape(IconVariant::Circle, RED, CLEAR);
        assert_eq!(result, Err(IconButtonError::UnsupportedLayer(IconVariant::Circle)));
        assert_eq!(b.layer_kinds(), vec![LayerKind::Circle]);
    }

    #[test]
    fn test_build_two_line_shape_over_circle() {
        let mut b = button(IconVariant::Circle);
        b.build_two_line_shape(IconVariant::Plus, RED, CLEAR).unwrap();
        assert_eq!(
            b.layer_kinds(),
            vec![LayerKind::Circle, LayerKind::FirstLine, LayerKind::SecondLine]
        );
    }

    #[test]
    fn test_animate_unsupported_pair() {
        let mut b = button(IconVariant::Circle);
        let result = b.animate(IconVariant::Circle, IconVariant::Plus);
        assert_eq!(
            result,
            Err(IconButtonError::UnsupportedAnimation {
                from: IconVariant::Circle,
                to: IconVariant::Plus,
            })
        );
        assert_eq!(*b.state(), TransitionState::Idle);
    }

    #[test]
    fn test_animate_requires_source_layers() {
        let mut b = button(IconVariant::Plus);
        assert_eq!(
            b.animate(IconVariant::Circle, IconVariant::Exit),
            Err(IconButtonError::NonInstantiatedLayer(LayerKind::Circle))
        );
        let mut b = button(IconVariant::Circle);
        assert_eq!(
            b.animate(IconVariant::Exit, IconVariant::Circle),
            Err(IconButtonError::NonInstantiatedLayer(LayerKind::FirstLine))
        );
        let mut b = IconButton::new(Size::new(44.0, 44.0));
        assert_eq!(
            b.animate(IconVariant::Circle, IconVariant::Exit),
            Err(IconButtonError::NonInstantiatedLayer(LayerKind::Circle))
        );
    }

    #[test]
    fn test_animate_while_pending() {
        let mut b = button(IconVariant::Circle);
        b.animate(IconVariant::Circle, IconVariant::Exit).unwrap();
        assert_eq!(
            b.animate(IconVariant::Circle, IconVariant::Exit),
            Err(IconButtonError::AnimationInProgress)
        );
    }

    #[test]
    fn test_first_phase_timing() {
        let mut b = button(IconVariant::Circle);
        b.animate_with_durations(
            IconVariant::Circle,
            IconVariant::Exit,
            Duration::from_millis(300),
            Duration::from_millis(200),
        )
        .unwrap();
        assert!(b.advance(Duration::from_millis(299)).is_empty());
        assert_eq!(b.state().phase(), Some(Phase::First));
        let events = b.advance(Duration::from_millis(1));
        assert_eq!(events[0], TransitionEvent::PhaseCompleted(Phase::First));
        assert_eq!(b.state().phase(), Some(Phase::Second));
    }

    #[test]
    fn test_huge_configured_phase_does_not_collapse() {
        let config = ButtonConfig {
            start_duration_secs: 1e30,
            ..ButtonConfig::default()
        };
        let mut b = IconButton::with_config(Size::new(44.0, 44.0), config);
        b.configure(IconVariant::Circle, BLUE, WHITE);
        b.animate(IconVariant::Circle, IconVariant::Exit).unwrap();
        assert!(b.advance(Duration::ZERO).is_empty());
        assert!(b.advance(Duration::from_secs(3600)).is_empty());
        assert_eq!(b.state().phase(), Some(Phase::First));
        assert_eq!(b.layer_kinds(), vec![LayerKind::Circle]);
    }

    #[test]
    fn test_configure_cancels_pending_transition() {
        let mut b = button(IconVariant::Circle);
        b.animate(IconVariant::Circle, IconVariant::Exit).unwrap();
        b.advance(Duration::from_millis(100));
        b.configure(IconVariant::Plus, CLEAR, RED);
        assert_eq!(*b.state(), TransitionState::Idle);
        assert!(b.advance(Duration::from_secs(2)).is_empty());
        assert_eq!(b.layer_kinds(), vec![LayerKind::FirstLine, LayerKind::SecondLine]);
    }

    #[test]
    fn test_zero_durations_complete_on_next_tick() {
        let mut b = button(IconVariant::Circle);
        b.animate_with_durations(IconVariant::Circle, IconVariant::Exit, Duration::ZERO, Duration::ZERO)
            .unwrap();
        let events = b.advance(Duration::ZERO);
        assert_eq!(
            events.last(),
            Some(&TransitionEvent::TransitionFinished {
                from: IconVariant::Circle,
                to: IconVariant::Exit,
            })
        );
        let circle = b.layer(LayerKind::Circle).unwrap();
        assert_eq!(circle.fill_color().components, RED.components);
    }

    #[test]
    fn test_set_bounds_resizes_frames_only() {
        let mut b = button(IconVariant::Checkmark);
        let paths: Vec<_> = b.layers().iter().map(|l| l.path().clone()).collect();
        b.set_bounds(Size::new(88.0, 60.0));
        for (layer, path) in b.layers().iter().zip(paths) {
            assert_eq!(layer.frame(), Rect::new(0.0, 0.0, 88.0, 60.0));
            assert_eq!(layer.path(), &path);
        }
    }
}
