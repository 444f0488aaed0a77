//! Named colors and a serializable color representation.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Opaque white.
pub const WHITE: Color = Color::new([1.0, 1.0, 1.0, 1.0]);
/// Opaque pure red.
pub const RED: Color = Color::new([1.0, 0.0, 0.0, 1.0]);
/// Fully transparent black.
pub const CLEAR: Color = Color::new([0.0, 0.0, 0.0, 0.0]);

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Linearly interpolate between two colors, component-wise in sRGB with
/// straight alpha. `t` is clamped to `[0, 1]`.
pub fn lerp(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0) as f32;
    let a = from.components;
    let b = to.components;
    Color::new([
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ])
}

/// Whether the color draws nothing.
pub fn is_transparent(color: Color) -> bool {
    color.components[3] <= 0.0
}
