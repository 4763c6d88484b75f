// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell coordinates and the content index derived from them.

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::num::NonZeroU32;

use kurbo::{Point, Rect, Vec2};

use crate::config::GridConfig;

/// One addressable `(column, row)` position in the unbounded grid.
///
/// A cell is its own identity key: two cells are the same tile slot iff
/// their coordinates are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column index; grows to the right.
    pub col: i32,
    /// Row index; grows downward.
    pub row: i32,
}

impl Cell {
    /// Creates a cell from its column and row.
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// World-space rectangle occupied by this cell's tile.
    #[must_use]
    pub fn world_rect(self, config: &GridConfig) -> Rect {
        let origin = Point::new(
            f64::from(self.col) * config.column_pitch(),
            f64::from(self.row) * config.row_pitch(),
        );
        Rect::from_origin_size(origin, config.tile_size)
    }

    /// Screen-space rectangle of this cell's tile under the given pan offset.
    #[must_use]
    pub fn screen_rect(self, config: &GridConfig, pan: Vec2) -> Rect {
        self.world_rect(config) + pan
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.col, self.row)
    }
}

/// 1-based index into the content set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentIndex(NonZeroU32);

impl ContentIndex {
    /// Wraps a 1-based index; returns `None` for zero.
    #[must_use]
    pub const fn new(index: u32) -> Option<Self> {
        match NonZeroU32::new(index) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// The raw 1-based index.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Path of the lightweight thumbnail shown in the grid.
    #[must_use]
    pub fn thumbnail_path(self) -> String {
        format!("thumbs/thumb{}.jpeg", self.get())
    }

    /// Path of the full-resolution image shown when focused.
    #[must_use]
    pub fn full_path(self) -> String {
        format!("img{}.jpg", self.get())
    }
}

impl fmt::Display for ContentIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content index shown at `cell`.
///
/// Computes `|row * columns_per_row + col| mod item_count + 1`. Pure and total:
/// every cell maps to a value in `1..=item_count`, and the same cell always
/// maps to the same value. An `item_count` of zero is treated as one.
#[must_use]
pub fn content_index_of(cell: Cell, config: &GridConfig) -> ContentIndex {
    // Cannot overflow: |i32| * u32 + |i32| stays within i64.
    let linear = i64::from(cell.row) * i64::from(config.columns_per_row) + i64::from(cell.col);
    let count = u64::from(config.item_count.max(1));
    let slot = u32::try_from(linear.unsigned_abs() % count).unwrap_or(0);
    ContentIndex(NonZeroU32::MIN.saturating_add(slot))
}

/// Everything the renderer needs to materialize one tile.
#[derive(Clone, Debug, PartialEq)]
pub struct TileSpec {
    /// The tile's cell.
    pub cell: Cell,
    /// Content shown by the tile.
    pub content: ContentIndex,
    /// World-space placement on the pannable surface.
    pub world_rect: Rect,
    /// Thumbnail to display in the grid.
    pub thumbnail: String,
    /// Full-resolution asset, for optional background preloading.
    pub full: String,
}

impl TileSpec {
    /// Builds the spec for `cell`.
    #[must_use]
    pub fn for_cell(cell: Cell, config: &GridConfig) -> Self {
        let content = content_index_of(cell, config);
        Self {
            cell,
            content,
            world_rect: cell.world_rect(config),
            thumbnail: content.thumbnail_path(),
            full: content.full_path(),
        }
    }
}
