//! Two-phase transitions between icon states.

use crate::error::{IconButtonError, Result};
use crate::icon::{IconVariant, LayerKind};
use std::time::Duration;

/// Default duration of each transition phase.
pub const DEFAULT_PHASE_DURATION: Duration = Duration::from_millis(500);

/// The supported transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Flash the circle white, draw the X, then fill the circle red.
    CircleToExit,
    /// Fade the lines to white, remove them, then clear the circle fill.
    ExitToCircle,
}

impl TransitionKind {
    /// Resolve a `(from, to)` pair to a supported transition.
    pub fn resolve(from: IconVariant, to: IconVariant) -> Result<Self> {
        match (from, to) {
            (IconVariant::Circle, IconVariant::Exit) => Ok(TransitionKind::CircleToExit),
            (IconVariant::Exit, IconVariant::Circle) => Ok(TransitionKind::ExitToCircle),
            (from, to) => Err(IconButtonError::UnsupportedAnimation { from, to }),
        }
    }

    pub fn from_variant(self) -> IconVariant {
        match self {
            TransitionKind::CircleToExit => IconVariant::Circle,
            TransitionKind::ExitToCircle => IconVariant::Exit,
        }
    }

    pub fn to_variant(self) -> IconVariant {
        match self {
            TransitionKind::CircleToExit => IconVariant::Exit,
            TransitionKind::ExitToCircle => IconVariant::Circle,
        }
    }

    /// Layers that must exist before the transition can start.
    pub fn required_layers(self) -> &'static [LayerKind] {
        match self {
            TransitionKind::CircleToExit => &[LayerKind::Circle],
            TransitionKind::ExitToCircle => &[LayerKind::FirstLine, LayerKind::SecondLine],
        }
    }
}

/// Which leg of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    First,
    Second,
}

/// A transition in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub kind: TransitionKind,
    pub start_duration: Duration,
    pub end_duration: Duration,
    /// Time spent in the current phase.
    pub elapsed: Duration,
}

impl Transition {
    pub fn new(kind: TransitionKind, start_duration: Duration, end_duration: Duration) -> Self {
        Self {
            kind,
            start_duration,
            end_duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Duration of the given phase.
    pub fn duration(&self, phase: Phase) -> Duration {
        match phase {
            Phase::First => self.start_duration,
            Phase::Second => self.end_duration,
        }
    }
}

/// Where the button is in its transition lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TransitionState {
    /// No transition has run since the last configure.
    #[default]
    Idle,
    /// First phase running.
    Phase1(Transition),
    /// Second phase running.
    Phase2(Transition),
    /// The last transition completed.
    Done { from: IconVariant, to: IconVariant },
}

impl TransitionState {
    /// Whether a transition is pending.
    pub fn is_active(&self) -> bool {
        matches!(self, TransitionState::Phase1(_) | TransitionState::Phase2(_))
    }

    /// The current phase, if a transition is pending.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            TransitionState::Phase1(_) => Some(Phase::First),
            TransitionState::Phase2(_) => Some(Phase::Second),
            _ => None,
        }
    }
}

/// Notifications produced while time advances.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionEvent {
    /// A phase ran its full duration.
    PhaseCompleted(Phase),
    /// Layers were added to the render tree.
    LayersAttached(Vec<LayerKind>),
    /// Layers were removed from the render tree.
    LayersDetached(Vec<LayerKind>),
    /// Both phases are done.
    TransitionFinished { from: IconVariant, to: IconVariant },
}
