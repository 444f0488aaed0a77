//! Lowering of button layers to paint commands.

use glyphbutton_core::color::is_transparent;
use glyphbutton_core::{IconButton, LayerKind};
use kurbo::{Affine, BezPath};
use peniko::Color;

/// What a paint command does with its path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintOp {
    /// Non-zero fill.
    Fill,
    /// Stroke with the given width.
    Stroke(f64),
}

/// One fill or stroke of one layer.
#[derive(Debug, Clone)]
pub struct PaintCommand {
    pub layer: LayerKind,
    pub op: PaintOp,
    pub color: Color,
    pub transform: Affine,
    pub path: BezPath,
}

/// Paint commands for every live layer, back to front.
///
/// Each layer yields its fill then its stroke, using presentation colors.
/// Invisible paint (transparent color, non-positive width) is skipped.
pub fn paint_commands(button: &IconButton, transform: Affine) -> Vec<PaintCommand> {
    let mut commands = Vec::new();
    for layer in button.layers().iter() {
        let layer_transform = transform * Affine::translate(layer.frame().origin().to_vec2());

        let fill = layer.presentation_fill();
        if !is_transparent(fill) {
            commands.push(PaintCommand {
                layer: layer.kind(),
                op: PaintOp::Fill,
                color: fill,
                transform: layer_transform,
                path: layer.path().clone(),
            });
        }

        let stroke = layer.presentation_stroke();
        if !is_transparent(stroke) && layer.line_width() > 0.0 {
            commands.push(PaintCommand {
                layer: layer.kind(),
                op: PaintOp::Stroke(layer.line_width()),
                color: stroke,
                transform: layer_transform,
                path: layer.path().clone(),
            });
        }
    }
    commands
}
