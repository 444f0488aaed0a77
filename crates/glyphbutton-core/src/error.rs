//! Error types for button operations.

use crate::icon::{IconVariant, LayerKind};
use thiserror::Error;

/// Errors returned by [`IconButton`](crate::IconButton) operations.
///
/// Every variant is a caller precondition; the button is left untouched
/// when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IconButtonError {
    #[error("layer `{0}` was not instantiated prior to trying to animate it")]
    NonInstantiatedLayer(LayerKind),
    #[error("animation from {from} to {to} is not supported")]
    UnsupportedAnimation { from: IconVariant, to: IconVariant },
    #[error("variant {0} cannot be built as a two-line shape")]
    UnsupportedLayer(IconVariant),
    #[error("a transition is already in progress")]
    AnimationInProgress,
}

/// Result type for button operations.
pub type Result<T> = std::result::Result<T, IconButtonError>;
