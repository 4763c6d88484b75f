// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resident tiles, reconciled against the wanted set.

use hashbrown::HashMap;

use crate::cell::{Cell, ContentIndex, TileSpec};
use crate::config::GridConfig;
use crate::cull::VisibleCells;
use crate::host::TileRenderer;

/// A materialized tile.
#[derive(Debug)]
pub struct Tile<H> {
    cell: Cell,
    content: ContentIndex,
    handle: H,
    loaded: bool,
}

impl<H> Tile<H> {
    /// The tile's cell.
    #[must_use]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Content shown by the tile.
    #[must_use]
    pub fn content(&self) -> ContentIndex {
        self.content
    }

    /// Host-side visual.
    #[must_use]
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Returns `true` once the host reported the thumbnail as loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub(crate) fn into_handle(self) -> H {
        self.handle
    }
}

/// What one reconcile pass changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    /// Tiles materialized.
    pub created: usize,
    /// Tiles released.
    pub destroyed: usize,
}

impl ReconcileStats {
    /// Returns `true` if the pass neither created nor released anything.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.created == 0 && self.destroyed == 0
    }
}

/// Map from cell to resident tile.
///
/// The pool is the only owner of tile visuals, apart from the single tile it
/// lends out while that tile is focused (see [`TilePool::take`]).
#[derive(Debug)]
pub struct TilePool<H> {
    tiles: HashMap<Cell, Tile<H>>,
}

impl<H> Default for TilePool<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> TilePool<H> {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiles: HashMap::new(),
        }
    }

    /// Brings the resident set in line with `wanted`.
    ///
    /// Releases every resident tile outside `wanted` (or at `focused`), then
    /// materializes every wanted cell that is not yet resident (skipping
    /// `focused`). Already-resident cells are left untouched, so repeating a
    /// call with the same inputs changes nothing.
    pub fn reconcile<R>(
        &mut self,
        wanted: &VisibleCells,
        focused: Option<Cell>,
        config: &GridConfig,
        renderer: &mut R,
    ) -> ReconcileStats
    where
        R: TileRenderer<Handle = H> + ?Sized,
    {
        let mut stats = ReconcileStats::default();

        for (_, tile) in self
            .tiles
            .extract_if(|cell, _| !wanted.contains(*cell) || focused == Some(*cell))
        {
            renderer.destroy_tile(tile.into_handle());
            stats.destroyed += 1;
        }

        for cell in wanted.iter() {
            if focused == Some(cell) || self.tiles.contains_key(&cell) {
                continue;
            }
            let spec = TileSpec::for_cell(cell, config);
            let handle = renderer.create_tile(&spec);
            self.tiles.insert(
                cell,
                Tile {
                    cell,
                    content: spec.content,
                    handle,
                    loaded: false,
                },
            );
            stats.created += 1;
        }

        #[cfg(feature = "tracing")]
        {
            if !stats.is_noop() {
                tracing::debug!(
                    created = stats.created,
                    destroyed = stats.destroyed,
                    resident = self.tiles.len(),
                    "reconciled tile pool"
                );
            }
        }
        stats
    }

    /// Removes a tile from the resident set without releasing its visual.
    pub fn take(&mut self, cell: Cell) -> Option<Tile<H>> {
        self.tiles.remove(&cell)
    }

    /// Returns a tile previously obtained from [`TilePool::take`].
    ///
    /// If the cell was re-materialized in the meantime, the returned tile
    /// displaces it and the displaced tile is handed back to the caller.
    pub fn restore(&mut self, tile: Tile<H>) -> Option<Tile<H>> {
        self.tiles.insert(tile.cell, tile)
    }

    /// Records that the thumbnail for `cell` finished loading.
    ///
    /// Returns `false` if the cell is no longer resident: loads that resolve
    /// after eviction are ignored.
    pub fn mark_loaded(&mut self, cell: Cell) -> bool {
        match self.tiles.get_mut(&cell) {
            Some(tile) => {
                tile.loaded = true;
                true
            }
            None => false,
        }
    }

    /// Releases every resident tile.
    pub fn clear<R>(&mut self, renderer: &mut R) -> usize
    where
        R: TileRenderer<Handle = H> + ?Sized,
    {
        let count = self.tiles.len();
        for (_, tile) in self.tiles.drain() {
            renderer.destroy_tile(tile.into_handle());
        }
        count
    }

    /// Resident tile at `cell`, if any.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<&Tile<H>> {
        self.tiles.get(&cell)
    }

    /// Returns `true` if `cell` is resident.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.tiles.contains_key(&cell)
    }

    /// Number of resident tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns `true` if no tiles are resident.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterates resident tiles in arbitrary order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile<H>> {
        self.tiles.values()
    }

    /// Iterates resident cells in arbitrary order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.tiles.keys().copied()
    }
}
