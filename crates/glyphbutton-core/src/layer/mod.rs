//! Shape layers: independently drawable, independently animatable paths.

mod set;

pub use set::LayerSet;

use crate::animation::{AnimatedProperty, PropertyAnimation};
use crate::color::CLEAR;
use crate::easing::Easing;
use crate::icon::LayerKind;
use kurbo::{BezPath, Rect};
use peniko::Color;
use std::time::Duration;

/// A vector path with paint and in-flight animations.
///
/// The path is immutable once built. Only the frame (on re-layout) and the
/// paint (through animations) change afterwards.
#[derive(Debug, Clone)]
pub struct ShapeLayer {
    kind: LayerKind,
    path: BezPath,
    frame: Rect,
    fill_color: Color,
    stroke_color: Color,
    line_width: f64,
    animations: Vec<PropertyAnimation>,
}

impl ShapeLayer {
    /// Create a layer with clear paint and zero line width.
    pub fn new(kind: LayerKind, path: BezPath, frame: Rect) -> Self {
        Self {
            kind,
            path,
            frame,
            fill_color: CLEAR,
            stroke_color: CLEAR,
            line_width: 0.0,
            animations: Vec::new(),
        }
    }

    /// Set the fill color.
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Set the stroke color.
    pub fn with_stroke(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    /// Set the stroke width.
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn path(&self) -> &BezPath {
        &self.path
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Resize the coordinate frame. The path is left as built.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Model fill color (the value shown once animations settle).
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// Model stroke color.
    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    /// Fill color currently on screen.
    pub fn presentation_fill(&self) -> Color {
        self.presentation(AnimatedProperty::FillColor)
    }

    /// Stroke color currently on screen.
    pub fn presentation_stroke(&self) -> Color {
        self.presentation(AnimatedProperty::StrokeColor)
    }

    fn presentation(&self, property: AnimatedProperty) -> Color {
        self.animation(property)
            .map(PropertyAnimation::value)
            .unwrap_or_else(|| self.model(property))
    }

    fn model(&self, property: AnimatedProperty) -> Color {
        match property {
            AnimatedProperty::FillColor => self.fill_color,
            AnimatedProperty::StrokeColor => self.stroke_color,
        }
    }

    fn commit(&mut self, property: AnimatedProperty, color: Color) {
        match property {
            AnimatedProperty::FillColor => self.fill_color = color,
            AnimatedProperty::StrokeColor => self.stroke_color = color,
        }
    }

    /// The running animation on a property, if any.
    pub fn animation(&self, property: AnimatedProperty) -> Option<&PropertyAnimation> {
        self.animations.iter().find(|a| a.property == property)
    }

    pub fn animations(&self) -> &[PropertyAnimation] {
        &self.animations
    }

    pub fn is_animating(&self) -> bool {
        !self.animations.is_empty()
    }

    /// Animate a property from its presentation value to `to`.
    ///
    /// Replaces any running animation on the same property.
    pub fn animate(
        &mut self,
        property: AnimatedProperty,
        to: Color,
        duration: Duration,
        easing: Easing,
    ) {
        let from = self.presentation(property);
        self.animations.retain(|a| a.property != property);
        self.animations
            .push(PropertyAnimation::new(property, from, to, duration).with_easing(easing));
    }

    /// Advance all animations; finished ones are committed and removed.
    pub fn advance(&mut self, dt: Duration) {
        let mut finished = Vec::new();
        for anim in &mut self.animations {
            if anim.advance(dt) {
                finished.push((anim.property, anim.to));
            }
        }
        for (property, color) in finished {
            self.commit(property, color);
            self.animations.retain(|a| a.property != property);
        }
    }
}
