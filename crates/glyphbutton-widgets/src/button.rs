//! An egui widget hosting an animated icon button.

use std::time::Duration;

use egui::{CursorIcon, Response, Sense, Ui, Vec2, vec2};
use glyphbutton_core::IconButton;
use kurbo::Size;

use crate::paint::paint_button;
use crate::sizing;

/// Shows an [`IconButton`] and keeps it in step with egui.
///
/// Each frame the widget pushes the allocated size into the button,
/// advances pending transitions by the frame time and paints the layers.
/// Clicks are reported through the returned [`Response`].
pub struct AnimatedIconButton<'a> {
    button: &'a mut IconButton,
    size: Vec2,
    tolerance: f64,
}

impl<'a> AnimatedIconButton<'a> {
    /// Create a widget for `button` at the medium size.
    pub fn new(button: &'a mut IconButton) -> Self {
        Self {
            button,
            size: vec2(sizing::MEDIUM, sizing::MEDIUM),
            tolerance: sizing::TOLERANCE,
        }
    }

    /// Set the widget size.
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Set the curve flattening tolerance.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Show the button.
    pub fn show(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        let bounds = Size::new(rect.width() as f64, rect.height() as f64);
        if self.button.bounds() != bounds {
            self.button.set_bounds(bounds);
        }

        if self.button.is_animating() {
            let dt = ui.input(|i| i.stable_dt);
            let dt = Duration::try_from_secs_f32(dt).unwrap_or_default();
            for event in self.button.advance(dt) {
                log::debug!("icon button: {:?}", event);
            }
            ui.ctx().request_repaint();
        }

        if ui.is_rect_visible(rect) {
            paint_button(ui.painter(), rect.min, self.button, self.tolerance);
        }

        response.on_hover_cursor(CursorIcon::PointingHand)
    }
}
