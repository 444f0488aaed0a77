//! Declarative property animations on shape layers.

use crate::color;
use crate::easing::Easing;
use peniko::Color;
use std::time::Duration;

/// The animatable paint properties of a shape layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatedProperty {
    FillColor,
    StrokeColor,
}

/// A color animation on one property of a layer.
///
/// Once finished the animation's end value is meant to be committed to the
/// layer's model, so the layer keeps showing it.
#[derive(Debug, Clone)]
pub struct PropertyAnimation {
    /// The property being animated.
    pub property: AnimatedProperty,
    /// Value at the start of the animation.
    pub from: Color,
    /// Value at the end of the animation.
    pub to: Color,
    /// Total duration.
    pub duration: Duration,
    /// Timing curve.
    pub easing: Easing,
    elapsed: Duration,
}

impl PropertyAnimation {
    /// Create a new animation starting now.
    pub fn new(property: AnimatedProperty, from: Color, to: Color, duration: Duration) -> Self {
        Self {
            property,
            from,
            to,
            duration,
            easing: Easing::default(),
            elapsed: Duration::ZERO,
        }
    }

    /// Set the timing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress in `[0, 1]`. Zero-length animations are complete.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Whether the full duration has elapsed.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Move the animation forward. Returns true once finished.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.is_finished()
    }

    /// Current animated value.
    pub fn value(&self) -> Color {
        color::lerp(self.from, self.to, self.easing.apply(self.progress()))
    }
}
