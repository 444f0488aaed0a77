//! Vello-based renderer implementation.

use crate::paint::{PaintOp, paint_commands};
use crate::renderer::{RenderContext, RenderResult, Renderer, RendererError};
use kurbo::Stroke;
use peniko::Fill;
use vello::Scene;

/// Vello-based renderer for GPU-accelerated 2D graphics.
#[derive(Default)]
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        // Clear the scene
        self.scene.reset();

        let bounds = ctx.button.bounds();
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Err(RendererError::EmptyBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }

        let transform = ctx.transform();
        if let Some(background) = ctx.background_color {
            self.scene.fill(
                Fill::NonZero,
                transform,
                background,
                None,
                &ctx.button.frame(),
            );
        }

        for command in paint_commands(ctx.button, transform) {
            match command.op {
                PaintOp::Fill => {
                    self.scene.fill(
                        Fill::NonZero,
                        command.transform,
                        command.color,
                        None,
                        &command.path,
                    );
                }
                PaintOp::Stroke(width) => {
                    self.scene.stroke(
                        &Stroke::new(width),
                        command.transform,
                        command.color,
                        None,
                        &command.path,
                    );
                }
            }
        }
        log::trace!("built scene for {:?}", ctx.button.layer_kinds());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphbutton_core::{IconButton, IconVariant, RED, WHITE};
    use kurbo::Size;

    #[test]
    fn test_empty_bounds_rejected() {
        let button = IconButton::new(Size::ZERO);
        let mut renderer = VelloRenderer::new();
        let result = renderer.build_scene(&RenderContext::new(&button));
        assert!(matches!(result, Err(RendererError::EmptyBounds { .. })));
    }

    #[test]
    fn test_build_scene() {
        let mut button = IconButton::new(Size::new(44.0, 44.0));
        button.configure(IconVariant::Checkmark, RED, WHITE);
        let mut renderer = VelloRenderer::new();
        let ctx = RenderContext::new(&button).with_background(WHITE);
        assert!(renderer.build_scene(&ctx).is_ok());
        let _scene = renderer.take_scene();
    }
}
