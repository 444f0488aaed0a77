//! Icon variants and the layer kinds they are built from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The logical icon a button displays or is animating towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconVariant {
    /// A stroked, filled circle.
    Circle,
    /// An X mark made of two diagonal lines.
    Exit,
    /// A circle with a three-point check inside.
    Checkmark,
    /// A plus sign made of two orthogonal lines.
    Plus,
}

impl IconVariant {
    /// All variants, in declaration order.
    pub const ALL: [IconVariant; 4] = [
        IconVariant::Circle,
        IconVariant::Exit,
        IconVariant::Checkmark,
        IconVariant::Plus,
    ];

    /// Layer kinds a freshly configured button of this variant holds,
    /// in render order.
    pub fn layer_kinds(self) -> &'static [LayerKind] {
        match self {
            IconVariant::Circle => &[LayerKind::Circle],
            IconVariant::Exit | IconVariant::Plus => &[LayerKind::FirstLine, LayerKind::SecondLine],
            IconVariant::Checkmark => &[LayerKind::Circle, LayerKind::CheckMark],
        }
    }

    /// Whether this variant is drawn with the two-line builder.
    pub fn is_two_line(self) -> bool {
        matches!(self, IconVariant::Exit | IconVariant::Plus)
    }

    /// Get display name for this variant.
    pub fn name(self) -> &'static str {
        match self {
            IconVariant::Circle => "circle",
            IconVariant::Exit => "exit",
            IconVariant::Checkmark => "checkmark",
            IconVariant::Plus => "plus",
        }
    }
}

impl fmt::Display for IconVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifies one drawable sub-layer of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Circle,
    FirstLine,
    SecondLine,
    CheckMark,
}

impl LayerKind {
    /// Get display name for this layer kind.
    pub fn name(self) -> &'static str {
        match self {
            LayerKind::Circle => "circle",
            LayerKind::FirstLine => "first_line",
            LayerKind::SecondLine => "second_line",
            LayerKind::CheckMark => "check_mark",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
