// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport culling: which cells should be materialized for a pan state.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`/`ceil`
use kurbo::{Size, Vec2};

use crate::cell::Cell;
use crate::config::GridConfig;

/// Inclusive rectangle of cells that should be resident.
///
/// This is the "wanted set" for one culling pass. It is a pure function of
/// the pan state and viewport size, so calling [`compute_visible_cells`]
/// twice with the same inputs yields the same set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleCells {
    /// First wanted column (inclusive).
    pub start_col: i32,
    /// Last wanted column (inclusive).
    pub end_col: i32,
    /// First wanted row (inclusive).
    pub start_row: i32,
    /// Last wanted row (inclusive).
    pub end_row: i32,
}

impl VisibleCells {
    /// A set containing no cells.
    pub const EMPTY: Self = Self {
        start_col: 0,
        end_col: -1,
        start_row: 0,
        end_row: -1,
    };

    /// Returns `true` if `cell` lies inside the wanted rectangle.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        (self.start_col..=self.end_col).contains(&cell.col)
            && (self.start_row..=self.end_row).contains(&cell.row)
    }

    /// Returns `true` if the rectangle holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start_col > self.end_col || self.start_row > self.end_row
    }

    /// Number of wanted cells.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let cols = i64::from(self.end_col) - i64::from(self.start_col) + 1;
        let rows = i64::from(self.end_row) - i64::from(self.start_row) + 1;
        usize::try_from(cols.saturating_mul(rows)).unwrap_or(usize::MAX)
    }

    /// Iterates the wanted cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + use<> {
        let Self {
            start_col,
            end_col,
            start_row,
            end_row,
        } = *self;
        (start_row..=end_row)
            .flat_map(move |row| (start_col..=end_col).map(move |col| Cell::new(col, row)))
    }
}

/// Computes the cells to materialize for the given pan state.
///
/// `current` is the eased pan offset and `target` the offset it is easing
/// toward; their difference gives the direction of travel on each axis.
///
/// Per axis, with `padded = extent * (1 + buffer)` and `pitch = tile + gap`:
///
/// - `start = floor((-current - padded / 2 - ahead_low) / pitch)`
/// - `end = ceil((-current + padded * 1.5 + ahead_high) / pitch)`
///
/// where the look-ahead lands on the low side (`ahead_low = lookahead`) when
/// the offset is increasing (`target > current`), and on the high side
/// otherwise (including when at rest).
#[must_use]
pub fn compute_visible_cells(
    current: Vec2,
    target: Vec2,
    viewport: Size,
    config: &GridConfig,
) -> VisibleCells {
    let (start_col, end_col) = axis_range(
        current.x,
        target.x,
        viewport.width,
        config.column_pitch(),
        config,
    );
    let (start_row, end_row) = axis_range(
        current.y,
        target.y,
        viewport.height,
        config.row_pitch(),
        config,
    );
    VisibleCells {
        start_col,
        end_col,
        start_row,
        end_row,
    }
}

fn axis_range(
    current: f64,
    target: f64,
    extent: f64,
    pitch: f64,
    config: &GridConfig,
) -> (i32, i32) {
    let padded = extent * (1.0 + config.buffer);
    let increasing = target > current;
    let (ahead_low, ahead_high) = if increasing {
        (config.lookahead, 0.0)
    } else {
        (0.0, config.lookahead)
    };
    let low = -current - padded / 2.0 - ahead_low;
    let high = -current + padded * 1.5 + ahead_high;
    (
        to_index((low / pitch).floor()),
        to_index((high / pitch).ceil()),
    )
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Float-to-int casts saturate; offsets beyond the i32 cell range pin to its ends"
)]
fn to_index(value: f64) -> i32 {
    value as i32
}
