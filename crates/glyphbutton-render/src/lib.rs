//! Glyphbutton Render Library
//!
//! Renderer abstraction for icon buttons. Layers are first lowered to a flat
//! list of paint commands; the default implementation replays them into a
//! Vello scene.

mod paint;
mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use paint::{PaintCommand, PaintOp, paint_commands};
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
