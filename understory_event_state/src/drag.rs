// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: movement deltas, total offsets, and velocity estimates.
//!
//! ## Usage
//!
//! 1) Start a drag operation by calling [`DragState::start`] with the initial
//!    position and timestamp.
//! 2) On each move event, call [`DragState::update_timed`] to get the movement
//!    delta and an instantaneous velocity, or [`DragState::update`] when the
//!    input channel should not contribute to velocity.
//! 3) Query [`DragState::total_offset`] or [`DragState::exceeds_slop`] to tell
//!    a tap apart from a drag.
//! 4) End the drag operation with [`DragState::end`], which returns the last
//!    velocity estimate and resets state.
//!
//! ## Velocity model
//!
//! The estimate is the delta of the most recent move divided by the time since
//! the previous move (or since the drag started). The elapsed time is floored
//! at a caller-chosen minimum so that two events landing in the same
//! millisecond do not divide by zero or produce absurd spikes.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! drag.start(Point::new(10.0, 20.0), 100);
//! assert!(drag.is_dragging());
//!
//! let sample = drag.update_timed(Point::new(15.0, 25.0), 105, 10).unwrap();
//! assert_eq!(sample.delta.x, 5.0);
//! // 5ms elapsed, floored to 10ms.
//! assert_eq!(sample.velocity.x, 0.5);
//!
//! let velocity = drag.end();
//! assert_eq!(velocity.x, 0.5);
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// One timed move: the delta since the previous position and the velocity it implies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    /// Movement since the previous recorded position.
    pub delta: Vec2,
    /// Instantaneous velocity in units per millisecond.
    pub velocity: Vec2,
}

/// Tracks drag state for move event processing
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Start position of the drag operation
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during drag
    pub last_pos: Option<Point>,
    /// Timestamp (ms) of the last timed sample, or of the drag start.
    pub last_time: Option<u64>,
    /// Most recent velocity estimate in units per millisecond.
    pub velocity: Vec2,
}

impl DragState {
    /// Start tracking a new drag operation from the given position.
    ///
    /// Any velocity left over from a previous drag is discarded.
    pub fn start(&mut self, pos: Point, time: u64) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.last_time = Some(time);
        self.velocity = Vec2::ZERO;
    }

    /// Update with a new position, returning the movement delta since the last update.
    ///
    /// The velocity estimate and timing baseline are left untouched.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Update with a new position and timestamp, returning the delta and the
    /// velocity estimate it produces.
    ///
    /// Elapsed time is floored at `min_interval_ms` (and at 1ms).
    pub fn update_timed(
        &mut self,
        pos: Point,
        time: u64,
        min_interval_ms: u64,
    ) -> Option<DragSample> {
        let delta = self.update(pos)?;
        let since = self.last_time.map_or(0, |last| time.saturating_sub(last));
        let elapsed = since.max(min_interval_ms).max(1);
        self.last_time = Some(time);
        self.velocity = delta / elapsed as f64;
        Some(DragSample {
            delta,
            velocity: self.velocity,
        })
    }

    /// Get total offset from drag start position.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// Returns `true` if the last recorded position is more than `slop` away
    /// from the start position on either axis.
    pub fn exceeds_slop(&self, slop: f64) -> bool {
        match (self.start_pos, self.last_pos) {
            (Some(start), Some(last)) => {
                let total = last - start;
                total.x.abs() > slop || total.y.abs() > slop
            }
            _ => false,
        }
    }

    /// Most recent velocity estimate, or zero when no timed move has been seen.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// End the current drag operation and reset state, returning the final velocity.
    pub fn end(&mut self) -> Vec2 {
        let velocity = self.velocity;
        *self = Self::default();
        velocity
    }

    /// Returns `true` while a drag operation is active
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
