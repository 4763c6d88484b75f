// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame easing and re-cull throttling.

use kurbo::Vec2;

use crate::config::GridConfig;
use crate::pan::PanOffset;

/// Result of one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameOutcome {
    /// Panning is disabled; nothing moved and nothing should be re-culled.
    Parked,
    /// The pan offset was eased.
    Eased {
        /// Offset to apply to the surface.
        offset: Vec2,
        /// Whether the wanted set should be recomputed this frame.
        recull: bool,
    },
}

/// Baseline for throttled re-culling.
///
/// Easing runs every frame, but recomputing and reconciling the wanted set
/// only happens once the offset has travelled `recull_distance` or
/// `recull_interval_ms` has passed since the last pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameLoop {
    last_offset: Vec2,
    last_time: u64,
}

impl FrameLoop {
    /// Creates a loop whose last re-cull happened at `offset`, at `now`.
    #[must_use]
    pub fn new(offset: Vec2, now: u64) -> Self {
        Self {
            last_offset: offset,
            last_time: now,
        }
    }

    /// Records a re-cull at `offset`, at `now`.
    pub fn mark_culled(&mut self, offset: Vec2, now: u64) {
        self.last_offset = offset;
        self.last_time = now;
    }

    /// Timestamp of the last re-cull.
    #[must_use]
    pub fn last_culled_at(&self) -> u64 {
        self.last_time
    }

    /// Advances one frame.
    ///
    /// When `enabled`, eases `pan.current` toward `pan.target` and decides
    /// whether to re-cull; a re-cull resets the distance and time baseline.
    pub fn tick(
        &mut self,
        now: u64,
        pan: &mut PanOffset,
        enabled: bool,
        config: &GridConfig,
    ) -> FrameOutcome {
        if !enabled {
            return FrameOutcome::Parked;
        }
        let offset = pan.ease_toward_target(config.ease);
        let travelled = (offset - self.last_offset).hypot();
        let elapsed = now.saturating_sub(self.last_time);
        let recull = travelled > config.recull_distance || elapsed > config.recull_interval_ms;
        if recull {
            self.mark_culled(offset, now);
        }
        FrameOutcome::Eased { offset, recull }
    }
}
