// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two-part pan offset: input-driven `target` and eased `current`.

use kurbo::Vec2;

/// Translation applied to the grid's render surface.
///
/// `target` moves immediately in response to drags and momentum; `current`
/// chases it once per frame. Only the drag controller writes `target` and only
/// the frame loop writes `current`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanOffset {
    target: Vec2,
    current: Vec2,
}

impl PanOffset {
    /// An offset at rest at `offset`.
    #[must_use]
    pub fn at(offset: Vec2) -> Self {
        Self {
            target: offset,
            current: offset,
        }
    }

    /// Offset the surface is easing toward.
    #[must_use]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Offset currently applied to the surface.
    #[must_use]
    pub fn current(&self) -> Vec2 {
        self.current
    }

    /// Remaining distance between `current` and `target`.
    #[must_use]
    pub fn remaining(&self) -> Vec2 {
        self.target - self.current
    }

    pub(crate) fn nudge_target(&mut self, delta: Vec2) {
        self.target += delta;
    }

    /// Moves `current` a fraction `factor` of the way toward `target`.
    pub(crate) fn ease_toward_target(&mut self, factor: f64) -> Vec2 {
        self.current += (self.target - self.current) * factor;
        self.current
    }
}
