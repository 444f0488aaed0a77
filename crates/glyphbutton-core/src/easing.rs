//! Timing curves for property animations.

use serde::{Deserialize, Serialize};

/// A timing curve mapping linear progress to eased progress.
///
/// The non-linear curves are cubic beziers from (0, 0) to (1, 1) with the
/// standard media-timing control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInEaseOut,
}

impl Easing {
    /// Control points `(x1, y1, x2, y2)` of the cubic bezier.
    pub fn control_points(self) -> (f64, f64, f64, f64) {
        match self {
            Easing::Linear => (0.0, 0.0, 1.0, 1.0),
            Easing::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Easing::EaseInEaseOut => (0.42, 0.0, 0.58, 1.0),
        }
    }

    /// Eased progress for linear progress `t` (clamped to `[0, 1]`).
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if self == Easing::Linear || t == 0.0 || t == 1.0 {
            return t;
        }
        let (x1, y1, x2, y2) = self.control_points();
        let s = solve_parameter(x1, x2, t);
        bezier_component(y1, y2, s)
    }
}

/// One coordinate of a unit cubic bezier with endpoints 0 and 1.
fn bezier_component(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

/// Find the curve parameter whose x coordinate is `x`.
///
/// x(s) is monotone on [0, 1] for control x values inside [0, 1], so
/// bisection always converges.
fn solve_parameter(x1: f64, x2: f64, x: f64) -> f64 {
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    let mut s = x;
    for _ in 0..64 {
        let value = bezier_component(x1, x2, s);
        if (value - x).abs() < 1e-9 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}
