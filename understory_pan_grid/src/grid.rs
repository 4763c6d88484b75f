// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid engine: wires gestures, frames, culling, and focus together.

use kurbo::{Size, Vec2};

use crate::cell::Cell;
use crate::config::{Catalog, ConfigError, GridConfig};
use crate::cull::{VisibleCells, compute_visible_cells};
use crate::drag::{DragController, GestureEvent, GesturePhase};
use crate::expansion::{Expansion, ExpansionPhase, TransitionCx};
use crate::frame::{FrameLoop, FrameOutcome};
use crate::host::{AnimationId, CursorHint, GridHost};
use crate::pan::PanOffset;
use crate::pool::{ReconcileStats, TilePool};

/// A notification from the embedding application.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridEvent {
    /// Pointer or touch input on the surface.
    Gesture(GestureEvent),
    /// A resident tile was clicked.
    TileClicked(Cell),
    /// The focused overlay was clicked.
    OverlayClicked,
    /// The backdrop behind the focused overlay was clicked.
    BackdropClicked,
    /// The viewport changed size.
    Resized(Size),
    /// The full-resolution asset requested for `cell` finished loading.
    FullAssetLoaded(Cell),
    /// The thumbnail for `cell` finished loading.
    ThumbnailLoaded(Cell),
    /// An overlay animation finished.
    AnimationFinished(AnimationId),
}

/// An unbounded, pannable grid of tiles inside a fixed viewport.
///
/// `PanGrid` owns all mutable state: the pan offset, gesture state, resident
/// tiles, and the focus transition. The host drives it with
/// [`PanGrid::tick`] once per display frame and [`PanGrid::handle_event`] for
/// everything else, and receives instructions through [`GridHost`].
///
/// `H` is the host's tile handle type ([`TileRenderer::Handle`]).
///
/// [`TileRenderer::Handle`]: crate::TileRenderer::Handle
#[derive(Debug)]
pub struct PanGrid<H> {
    config: GridConfig,
    catalog: Catalog,
    viewport: Size,
    pan: PanOffset,
    drag: DragController,
    frames: FrameLoop,
    pool: TilePool<H>,
    expansion: Expansion<H>,
}

impl<H> PanGrid<H> {
    /// Creates a grid at rest at the origin.
    ///
    /// Fails if `config` is invalid or `viewport` is unusable with it (see
    /// [`GridConfig::check_viewport`]).
    pub fn new(config: GridConfig, viewport: Size) -> Result<Self, ConfigError> {
        config.validate()?;
        config.check_viewport(viewport)?;
        Ok(Self {
            config,
            catalog: Catalog::default(),
            viewport,
            pan: PanOffset::default(),
            drag: DragController::new(),
            frames: FrameLoop::new(Vec2::ZERO, 0),
            pool: TilePool::new(),
            expansion: Expansion::default(),
        })
    }

    /// Sets the caption titles shown for focused tiles.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Performs the first cull and sets up the surface.
    pub fn start<R>(&mut self, now: u64, host: &mut R) -> ReconcileStats
    where
        R: GridHost<Handle = H> + ?Sized,
    {
        host.set_surface_transform(self.pan.current());
        host.set_cursor(CursorHint::Grab);
        self.frames.mark_culled(self.pan.current(), now);
        self.recull(host)
    }

    /// Advances one display frame.
    ///
    /// While panning is enabled this eases the offset, applies it to the
    /// surface, and re-culls once the throttle allows. While a tile is focused
    /// the frame is parked and nothing happens.
    pub fn tick<R>(&mut self, now: u64, host: &mut R) -> FrameOutcome
    where
        R: GridHost<Handle = H> + ?Sized,
    {
        let outcome = self
            .frames
            .tick(now, &mut self.pan, self.drag.is_enabled(), &self.config);
        if let FrameOutcome::Eased { offset, recull } = outcome {
            host.set_surface_transform(offset);
            if recull {
                self.recull(host);
            }
        }
        outcome
    }

    /// Recomputes the wanted set and reconciles the resident tiles against it.
    pub fn recull<R>(&mut self, host: &mut R) -> ReconcileStats
    where
        R: GridHost<Handle = H> + ?Sized,
    {
        let wanted = self.visible_cells();
        let focused = self.expansion.focused_cell();
        self.pool.reconcile(&wanted, focused, &self.config, host)
    }

    /// Dispatches one event. Returns `false` if it was ignored (a guarded or
    /// stale input).
    pub fn handle_event<R>(&mut self, event: GridEvent, host: &mut R) -> bool
    where
        R: GridHost<Handle = H> + ?Sized,
    {
        match event {
            GridEvent::Gesture(gesture) => self.gesture(gesture, host),
            GridEvent::TileClicked(cell) => self.click_tile(cell, host),
            GridEvent::OverlayClicked | GridEvent::BackdropClicked => self.dismiss(host),
            GridEvent::Resized(size) => self.resize(size, host).is_ok(),
            GridEvent::FullAssetLoaded(cell) => self.full_asset_loaded(cell, host),
            GridEvent::ThumbnailLoaded(cell) => self.thumbnail_loaded(cell),
            GridEvent::AnimationFinished(id) => self.animation_finished(id, host),
        }
    }

    /// Feeds one pointer or touch event to the drag controller.
    pub fn gesture<R>(&mut self, event: GestureEvent, host: &mut R) -> bool
    where
        R: GridHost<Handle = H> + ?Sized,
    {
        match event.phase {
            GesturePhase::Start => {
                let started = self.drag.begin(event.pos, event.time);
                if started {
                    host.set_cursor(CursorHint::Grabbing);
                } else {
                    #[cfg(feature = "tracing")]
                    tracing::trace!("drag start rejected while a tile is focused");
                }
                started
            }
            GesturePhase::Move => self
                .drag
                .drag_to(
                    event.source,
                    event.pos,
                    event.time,
                    &mut self.pan,
                    &self.config,
                )
                .is_some(),
            GesturePhase::End => {
                if !self.drag.is_dragging() {
                    return false;
                }
                self.drag.release(event.source, &mut self.pan, &self.config);
                if self.drag.is_enabled() {
                    host.set_cursor(CursorHint::Grab);
                }
                true
            }
        }
    }

    /// Routes a click on a resident tile into the focus transition.
    ///
    /// Ignored when a tile is already focused (in any phase), when the click
    /// ends a drag rather than a tap, or when `cell` is not resident. This is
    /// the only guard: the focus machine assumes it is collapsed on entry.
    pub fn click_tile<R>(&mut self, cell: Cell, host: &mut R) -> bool
    where
        R: GridHost<Handle = H> + ?Sized,
    {
        if self.expansion.is_active() || !self.drag.accepts_click() {
            #[cfg(feature = "tracing")]
            tracing::trace!(%cell, "tile click ignored");
            return false;
        }
        let origin = cell.screen_rect(&self.config, self.pan.current());
        let Some(tile) = self.pool.take(cell) else {
            return false;
        };
        let cx = TransitionCx {
            config: &self.config,
            drag: &mut self.drag,
            pool: &mut self.pool,
            host,
        };
        self.expansion.expand(tile, origin, &self.catalog, cx);
        true
    }

    /// Collapses the focused tile in response to a click on the overlay or
    /// backdrop.
    ///
    /// Honoured once the overlay is at rest, and also while its full asset is
    /// still loading (the overlay then closes at once). Ignored while the
    /// overlay is animating.
    pub fn dismiss<R>(&mut self, host: &mut R) -> bool
    where
        R: GridHost<Handle = H> + ?Sized,
    {
        let cx = TransitionCx {
            config: &self.config,
            drag: &mut self.drag,
            pool: &mut self.pool,
            host,
        };
        self.expansion.dismiss(cx)
    }

    /// Applies a new viewport size.
    ///
    /// While a tile is focused the overlay is retargeted; otherwise the
    /// wanted set is recomputed immediately. An unusable size (see
    /// [`GridConfig::check_viewport`]) is rejected and changes nothing.
    pub fn resize<R>(&mut self, viewport: Size, host: &mut R) -> Result<(), ConfigError>
    where
        R: GridHost<Handle = H> + ?Sized,
    {
        if let Err(err) = self.config.check_viewport(viewport) {
            #[cfg(feature = "tracing")]
            tracing::warn!(%err, "rejected viewport resize");
            return Err(err);
        }
        self.viewport = viewport;
        if !self.expansion.resize(viewport, &self.config, host) {
            self.recull(host);
        }
        Ok(())
    }

    /// The full-resolution asset for `cell` is ready; starts the enter
    /// animation if `cell` is focused and still waiting for it.
    pub fn full_asset_loaded<R>(&mut self, cell: Cell, host: &mut R) -> bool
    where
        R: GridHost<Handle = H> + ?Sized,
    {
        self.expansion
            .asset_loaded(cell, self.viewport, &self.config, host)
    }

    /// The thumbnail for `cell` is ready. Returns `false` if the tile was
    /// evicted before the load finished.
    pub fn thumbnail_loaded(&mut self, cell: Cell) -> bool {
        self.pool.mark_loaded(cell)
    }

    /// An overlay animation finished. Returns `false` for unknown ids.
    pub fn animation_finished<R>(&mut self, id: AnimationId, host: &mut R) -> bool
    where
        R: GridHost<Handle = H> + ?Sized,
    {
        let cx = TransitionCx {
            config: &self.config,
            drag: &mut self.drag,
            pool: &mut self.pool,
            host,
        };
        self.expansion.animation_finished(id, self.viewport, cx)
    }

    /// The wanted set for the current pan state and viewport.
    #[must_use]
    pub fn visible_cells(&self) -> VisibleCells {
        compute_visible_cells(
            self.pan.current(),
            self.pan.target(),
            self.viewport,
            &self.config,
        )
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Current viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Current pan state.
    #[must_use]
    pub fn pan(&self) -> &PanOffset {
        &self.pan
    }

    /// Resident tiles.
    #[must_use]
    pub fn pool(&self) -> &TilePool<H> {
        &self.pool
    }

    /// Gesture state.
    #[must_use]
    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Focus transition state.
    #[must_use]
    pub fn expansion(&self) -> &Expansion<H> {
        &self.expansion
    }

    /// Current focus phase.
    #[must_use]
    pub fn phase(&self) -> ExpansionPhase {
        self.expansion.phase()
    }
}
