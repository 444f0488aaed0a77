//! egui integration for glyphbutton icon buttons.
//!
//! - **AnimatedIconButton**: hosts an [`IconButton`](glyphbutton_core::IconButton),
//!   feeding it the allocated size and frame time and painting its layers.
//! - **Paint helpers**: color conversion and path flattening for the egui painter.

pub mod button;
pub mod paint;

pub use button::AnimatedIconButton;
pub use paint::{Subpath, flatten_subpaths, paint_button, to_color32};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Medium button size (the usual tap target)
    pub const MEDIUM: f32 = 44.0;
    /// Curve flattening tolerance in points
    pub const TOLERANCE: f64 = 0.25;
}
