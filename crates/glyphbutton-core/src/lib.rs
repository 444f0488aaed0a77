//! Glyphbutton Core Library
//!
//! Platform-agnostic model for a vector icon button: path geometry for each
//! icon variant, shape layers with animatable paint, and the two-phase
//! transitions between icon states. Hosts supply bounds and drive time.

pub mod animation;
pub mod button;
pub mod color;
pub mod config;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod icon;
pub mod layer;
pub mod transition;

pub use animation::{AnimatedProperty, PropertyAnimation};
pub use button::IconButton;
pub use color::{CLEAR, RED, SerializableColor, WHITE};
pub use config::{ButtonConfig, ConfigError};
pub use easing::Easing;
pub use error::{IconButtonError, Result};
pub use icon::{IconVariant, LayerKind};
pub use layer::{LayerSet, ShapeLayer};
pub use transition::{Phase, Transition, TransitionEvent, TransitionKind, TransitionState};
