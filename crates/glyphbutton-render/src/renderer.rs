//! Renderer trait abstraction.

use glyphbutton_core::IconButton;
use kurbo::{Affine, Point};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Button has empty bounds ({width}x{height})")]
    EmptyBounds { width: f64, height: f64 },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The button to draw.
    pub button: &'a IconButton,
    /// Where the button's top-left corner lands, in host coordinates.
    pub origin: Point,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Optional background drawn behind the layers.
    pub background_color: Option<Color>,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context at the origin.
    pub fn new(button: &'a IconButton) -> Self {
        Self {
            button,
            origin: Point::ZERO,
            scale_factor: 1.0,
            background_color: None,
        }
    }

    /// Set the host position of the button.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Transform from button space to device pixels.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale_factor) * Affine::translate(self.origin.to_vec2())
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the scene/command buffer for a frame.
    ///
    /// Called once per frame; must prepare every drawing command.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    #[test]
    fn test_transform_scales_after_translating() {
        let button = IconButton::new(Size::new(10.0, 10.0));
        let ctx = RenderContext::new(&button)
            .with_origin(Point::new(5.0, 5.0))
            .with_scale_factor(2.0);
        assert_eq!(ctx.transform() * Point::new(1.0, 1.0), Point::new(12.0, 12.0));
    }
}
