// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag controller: turns gesture events into pan `target` updates.
//!
//! Two input channels feed the same gesture state. The primary pointer
//! (mouse/pen) estimates velocity on every move and applies a one-shot
//! momentum displacement on release; touch moves the grid identically but
//! never contributes velocity or momentum.

use kurbo::{Point, Vec2};
use understory_event_state::drag::DragState;

use crate::config::GridConfig;
use crate::pan::PanOffset;

/// Input channel a gesture event arrived on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureSource {
    /// Mouse or pen: press, move, release.
    Pointer,
    /// Touch: start, move, end.
    Touch,
}

/// Stage of a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// Pointer-down or touch-start.
    Start,
    /// Pointer or touch moved.
    Move,
    /// Pointer-up or touch-end.
    End,
}

/// One gesture notification, in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEvent {
    /// Channel the event arrived on.
    pub source: GestureSource,
    /// Stage of the gesture.
    pub phase: GesturePhase,
    /// Pointer position; ignored for [`GesturePhase::End`].
    pub pos: Point,
    /// Event timestamp in milliseconds.
    pub time: u64,
}

impl GestureEvent {
    /// Pointer-down at `pos`.
    #[must_use]
    pub fn pointer_down(pos: Point, time: u64) -> Self {
        Self::new(GestureSource::Pointer, GesturePhase::Start, pos, time)
    }

    /// Pointer moved to `pos`.
    #[must_use]
    pub fn pointer_move(pos: Point, time: u64) -> Self {
        Self::new(GestureSource::Pointer, GesturePhase::Move, pos, time)
    }

    /// Pointer released.
    #[must_use]
    pub fn pointer_up(time: u64) -> Self {
        Self::new(GestureSource::Pointer, GesturePhase::End, Point::ZERO, time)
    }

    /// Touch started at `pos`.
    #[must_use]
    pub fn touch_start(pos: Point, time: u64) -> Self {
        Self::new(GestureSource::Touch, GesturePhase::Start, pos, time)
    }

    /// Touch moved to `pos`.
    #[must_use]
    pub fn touch_move(pos: Point, time: u64) -> Self {
        Self::new(GestureSource::Touch, GesturePhase::Move, pos, time)
    }

    /// Touch ended.
    #[must_use]
    pub fn touch_end(time: u64) -> Self {
        Self::new(GestureSource::Touch, GesturePhase::End, Point::ZERO, time)
    }

    fn new(source: GestureSource, phase: GesturePhase, pos: Point, time: u64) -> Self {
        Self {
            source,
            phase,
            pos,
            time,
        }
    }
}

/// Idle/dragging state machine that owns the pan `target`.
///
/// The controller can be disabled (while a tile is focused); a disabled
/// controller refuses new gestures, ignores moves, and applies no momentum.
#[derive(Clone, Debug)]
pub struct DragController {
    tracker: DragState,
    moved: bool,
    enabled: bool,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    /// Creates an idle, enabled controller.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tracker: DragState::default(),
            moved: false,
            enabled: true,
        }
    }

    /// Starts a gesture. Returns `false` (and changes nothing) while disabled.
    pub fn begin(&mut self, pos: Point, time: u64) -> bool {
        if !self.enabled {
            return false;
        }
        self.moved = false;
        self.tracker.start(pos, time);
        true
    }

    /// Applies a move, returning the delta added to the pan target.
    ///
    /// Pointer moves refresh the velocity estimate; touch moves do not.
    pub fn drag_to(
        &mut self,
        source: GestureSource,
        pos: Point,
        time: u64,
        pan: &mut PanOffset,
        config: &GridConfig,
    ) -> Option<Vec2> {
        if !self.enabled {
            return None;
        }
        let delta = match source {
            GestureSource::Pointer => self
                .tracker
                .update_timed(pos, time, config.min_sample_interval_ms)?
                .delta,
            GestureSource::Touch => self.tracker.update(pos)?,
        };
        if self.tracker.exceeds_slop(config.drag_slop) {
            self.moved = true;
        }
        pan.nudge_target(delta);
        Some(delta)
    }

    /// Ends the gesture, returning the momentum displacement applied, if any.
    ///
    /// Momentum is `velocity * momentum_factor`, applied once, only for pointer
    /// releases whose velocity exceeds the threshold on either axis.
    pub fn release(
        &mut self,
        source: GestureSource,
        pan: &mut PanOffset,
        config: &GridConfig,
    ) -> Option<Vec2> {
        if !self.tracker.is_dragging() {
            return None;
        }
        let velocity = self.tracker.end();
        if !self.enabled || source == GestureSource::Touch {
            return None;
        }
        let threshold = config.momentum_threshold;
        if velocity.x.abs() <= threshold && velocity.y.abs() <= threshold {
            return None;
        }
        let momentum = velocity * config.momentum_factor;
        pan.nudge_target(momentum);
        #[cfg(feature = "tracing")]
        tracing::debug!(vx = velocity.x, vy = velocity.y, "applied release momentum");
        Some(momentum)
    }

    /// Enables or disables dragging.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns `true` unless a tile is focused.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns `true` between gesture start and end.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Returns `true` if the latest gesture travelled beyond the drag slop.
    ///
    /// The flag survives the end of the gesture so the click that follows a
    /// release can be classified; it clears when the next gesture starts.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Returns `true` if a click right now is a tap rather than a drag release.
    #[must_use]
    pub fn accepts_click(&self) -> bool {
        !self.is_dragging() && !self.moved
    }

    /// Current velocity estimate in units per millisecond.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.tracker.velocity()
    }

    /// Discards any residual velocity.
    pub fn reset_velocity(&mut self) {
        self.tracker.velocity = Vec2::ZERO;
    }
}
