//! Drag-to-expand state machine for the footer knob.
//!
//! The host feeds discrete touch events in; this type decides where the
//! expansion offset should settle. Animation timing belongs to the host, which
//! reads [`ExpandGesture::phase`] and calls [`ExpandGesture::settled`] when its
//! animation finishes.

use std::time::Duration;

use tracing::debug;

use crate::layout::{CALENDAR_HEIGHT, ROW_HEIGHT};

/// A downward drag further than one row always expands.
pub const MINIMUM_SWIPE_DOWN: f64 = ROW_HEIGHT;
/// Release velocity (points per ms) above which a short downward flick still expands.
pub const MINIMUM_SWIPE_DOWN_VELOCITY: f64 = 0.3;
pub const SETTLE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePhase {
    Idle,
    Dragging { origin: f64, dy: f64 },
    Settling { from: f64, to: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpandGesture {
    phase: GesturePhase,
    /// Offset at rest, always within [0, CALENDAR_HEIGHT]
    rest: f64,
}

impl Default for ExpandGesture {
    fn default() -> Self {
        ExpandGesture::collapsed()
    }
}

impl ExpandGesture {
    pub fn collapsed() -> Self {
        ExpandGesture {
            phase: GesturePhase::Idle,
            rest: 0.0,
        }
    }

    pub fn expanded() -> Self {
        ExpandGesture {
            phase: GesturePhase::Idle,
            rest: CALENDAR_HEIGHT,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Current expansion offset. While settling this is the starting point;
    /// use [`ExpandGesture::progress`] for intermediate frames.
    pub fn offset(&self) -> f64 {
        match self.phase {
            GesturePhase::Idle => self.rest,
            GesturePhase::Dragging { origin, dy } => origin + dy,
            GesturePhase::Settling { from, .. } => from,
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self.phase, GesturePhase::Idle) && self.rest >= CALENDAR_HEIGHT
    }

    /// A finger went down on the knob. Interrupting a settle picks up from
    /// where that settle was heading.
    pub fn grant(&mut self) {
        let origin = match self.phase {
            GesturePhase::Idle => self.rest,
            GesturePhase::Settling { to, .. } => {
                self.rest = to;
                to
            }
            GesturePhase::Dragging { .. } => {
                debug!("grant while already dragging, ignored");
                return;
            }
        };
        self.phase = GesturePhase::Dragging { origin, dy: 0.0 };
    }

    pub fn move_to(&mut self, dy: f64) {
        match &mut self.phase {
            GesturePhase::Dragging { dy: current, .. } => *current = dy,
            phase => debug!(?phase, "move outside of a drag, ignored"),
        }
    }

    /// The finger lifted with total displacement `dy` and velocity `vy`.
    /// Returns the offset the calendar will settle to.
    pub fn release(&mut self, dy: f64, vy: f64) -> Option<f64> {
        let GesturePhase::Dragging { origin, .. } = self.phase else {
            debug!(phase = ?self.phase, "release outside of a drag, ignored");
            return None;
        };

        let delta = if dy > 0.0 {
            if dy.abs() > MINIMUM_SWIPE_DOWN || vy > MINIMUM_SWIPE_DOWN_VELOCITY {
                CALENDAR_HEIGHT
            } else {
                0.0
            }
        } else {
            -CALENDAR_HEIGHT
        };
        let to = (origin + delta).clamp(0.0, CALENDAR_HEIGHT);

        debug!(dy, vy, from = origin + dy, to, "settling");
        self.phase = GesturePhase::Settling {
            from: origin + dy,
            to,
        };
        Some(to)
    }

    /// Offset at `fraction` (0..=1) of the way through the current settle.
    pub fn progress(&self, fraction: f64) -> f64 {
        match self.phase {
            GesturePhase::Settling { from, to } => from + (to - from) * fraction.clamp(0.0, 1.0),
            _ => self.offset(),
        }
    }

    /// Offset after `elapsed` of a [`SETTLE_DURATION`] settle animation.
    pub fn progress_at(&self, elapsed: Duration) -> f64 {
        self.progress(elapsed.as_secs_f64() / SETTLE_DURATION.as_secs_f64())
    }

    /// The host's settle animation finished.
    pub fn settled(&mut self) {
        match self.phase {
            GesturePhase::Settling { to, .. } => {
                self.rest = to;
                self.phase = GesturePhase::Idle;
            }
            phase => debug!(?phase, "settled without a pending settle, ignored"),
        }
    }
}
