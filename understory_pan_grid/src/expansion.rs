// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus transitions: one tile at a time grows into a centered overlay.
//!
//! ```text
//!             click(tile)                asset loaded + enter done
//! Collapsed ─────────────► Expanding ──────────────────────────► Expanded
//!     ▲                                                              │
//!     │        exit done                  click(overlay/backdrop)    │
//!     └────────────────────── Collapsing ◄───────────────────────────┘
//! ```
//!
//! A dismissal while the full asset is still loading skips `Collapsing`: the
//! overlay never left its tile, so it closes at once.
//!
//! While any phase other than `Collapsed` is active the machine holds the
//! focused tile (lent out by the pool, hidden in place), panning is disabled,
//! and the focused cell is excluded from reconciliation.

use kurbo::{Point, Rect, Size};

use crate::cell::{Cell, ContentIndex};
use crate::config::{Catalog, GridConfig};
use crate::drag::DragController;
use crate::host::{AnimationId, CursorHint, GridHost};
use crate::pool::{Tile, TilePool};

/// Externally visible phase of the focus transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ExpansionPhase {
    /// No tile is focused.
    #[default]
    Collapsed,
    /// A tile was clicked; the overlay is waiting for its asset or animating in.
    Expanding,
    /// The overlay is at rest in the center of the viewport.
    Expanded,
    /// The overlay is animating back onto its tile.
    Collapsing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    AwaitingAsset,
    Entering(AnimationId),
    Shown,
    Leaving(AnimationId),
}

#[derive(Debug)]
struct Focus<H> {
    tile: Tile<H>,
    origin: Rect,
    stage: Stage,
    captioned: bool,
    resize_pending: bool,
    retarget: Option<AnimationId>,
}

/// Everything a transition may touch besides the machine itself.
pub(crate) struct TransitionCx<'a, H, R: ?Sized> {
    pub(crate) config: &'a GridConfig,
    pub(crate) drag: &'a mut DragController,
    pub(crate) pool: &'a mut TilePool<H>,
    pub(crate) host: &'a mut R,
}

/// The expand/collapse state machine.
///
/// Invariant: a focus record exists if and only if the phase is not
/// [`ExpansionPhase::Collapsed`].
#[derive(Debug)]
pub struct Expansion<H> {
    focus: Option<Focus<H>>,
}

impl<H> Default for Expansion<H> {
    fn default() -> Self {
        Self { focus: None }
    }
}

impl<H> Expansion<H> {
    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ExpansionPhase {
        match self.focus.as_ref().map(|f| f.stage) {
            None => ExpansionPhase::Collapsed,
            Some(Stage::AwaitingAsset | Stage::Entering(_)) => ExpansionPhase::Expanding,
            Some(Stage::Shown) => ExpansionPhase::Expanded,
            Some(Stage::Leaving(_)) => ExpansionPhase::Collapsing,
        }
    }

    /// Returns `true` unless collapsed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.focus.is_some()
    }

    /// The focused cell, if any.
    #[must_use]
    pub fn focused_cell(&self) -> Option<Cell> {
        self.focus.as_ref().map(|f| f.tile.cell())
    }

    /// Content of the focused tile, if any.
    #[must_use]
    pub fn focused_content(&self) -> Option<ContentIndex> {
        self.focus.as_ref().map(|f| f.tile.content())
    }

    /// Screen rectangle the focused tile occupied when it was clicked.
    #[must_use]
    pub fn origin_rect(&self) -> Option<Rect> {
        self.focus.as_ref().map(|f| f.origin)
    }

    /// Returns `true` once the focused tile's full-resolution asset arrived.
    #[must_use]
    pub fn asset_ready(&self) -> bool {
        self.focus
            .as_ref()
            .is_some_and(|f| f.stage != Stage::AwaitingAsset)
    }

    /// `Collapsed → Expanding`.
    ///
    /// Takes ownership of `tile` (already removed from the pool), hides it in
    /// place, disables panning, dims the remaining tiles, and opens the overlay
    /// over `origin`. The enter animation waits for
    /// [`Expansion::asset_loaded`]. The caller guarantees the machine is
    /// collapsed.
    pub(crate) fn expand<R>(
        &mut self,
        tile: Tile<H>,
        origin: Rect,
        catalog: &Catalog,
        cx: TransitionCx<'_, H, R>,
    ) where
        R: GridHost<Handle = H> + ?Sized,
    {
        debug_assert!(self.focus.is_none(), "expand requires a collapsed machine");
        let TransitionCx {
            config,
            drag,
            pool,
            host,
        } = cx;

        drag.set_enabled(false);
        host.set_cursor(CursorHint::Default);

        let content = tile.content();
        let title = catalog.title_for(content);
        if let Some(title) = title {
            host.set_caption(title);
        }

        host.set_tile_visible(tile.handle(), false);
        host.set_backdrop(true);
        let dim = config.sibling_fade.delayed(0);
        for sibling in pool.tiles() {
            host.fade_tile(sibling.handle(), config.dimmed_sibling_opacity, dim);
        }
        host.open_overlay(origin, &content.thumbnail_path(), &content.full_path());

        #[cfg(feature = "tracing")]
        tracing::debug!(cell = %tile.cell(), content = content.get(), "expanding tile");

        self.focus = Some(Focus {
            tile,
            origin,
            stage: Stage::AwaitingAsset,
            captioned: title.is_some(),
            resize_pending: false,
            retarget: None,
        });
    }

    /// The focused tile's full-resolution asset finished loading: start the
    /// enter animation toward the centered target for `viewport`.
    ///
    /// Returns `false` for loads that no longer matter (another cell, or an
    /// asset that already arrived).
    pub(crate) fn asset_loaded<R>(
        &mut self,
        cell: Cell,
        viewport: Size,
        config: &GridConfig,
        host: &mut R,
    ) -> bool
    where
        R: GridHost<Handle = H> + ?Sized,
    {
        let Some(focus) = self.focus.as_mut() else {
            return false;
        };
        if focus.tile.cell() != cell || focus.stage != Stage::AwaitingAsset {
            #[cfg(feature = "tracing")]
            tracing::trace!(%cell, "ignoring stale asset load");
            return false;
        }
        let target = centered_rect(viewport, config);
        let id = host.animate_overlay(Some(focus.origin), target, config.transition);
        if focus.captioned {
            host.caption_enter(config.caption_delay_ms);
        }
        focus.stage = Stage::Entering(id);
        true
    }

    /// An overlay animation finished.
    ///
    /// Completing the enter animation moves to `Expanded` (applying any resize
    /// that arrived meanwhile); completing the exit animation closes the
    /// overlay, gives the tile back to the pool, and re-enables panning.
    /// Unknown or superseded ids return `false`.
    pub(crate) fn animation_finished<R>(
        &mut self,
        id: AnimationId,
        viewport: Size,
        cx: TransitionCx<'_, H, R>,
    ) -> bool
    where
        R: GridHost<Handle = H> + ?Sized,
    {
        let Some(focus) = self.focus.as_mut() else {
            return false;
        };
        let stage = focus.stage;
        match stage {
            Stage::Entering(entering) if entering == id => {
                focus.stage = Stage::Shown;
                if focus.resize_pending {
                    focus.resize_pending = false;
                    retarget(focus, viewport, cx.config, cx.host);
                }
                #[cfg(feature = "tracing")]
                tracing::debug!(cell = %focus.tile.cell(), "tile expanded");
                true
            }
            Stage::Leaving(leaving) if leaving == id => {
                self.finish_collapse(cx);
                true
            }
            _ if focus.retarget == Some(id) => {
                focus.retarget = None;
                true
            }
            _ => {
                #[cfg(feature = "tracing")]
                tracing::trace!(id = id.0, "ignoring stale animation completion");
                false
            }
        }
    }

    /// A click on the overlay or its backdrop.
    ///
    /// From `Expanded` this starts the exit animation (`Collapsing`). While
    /// the full asset is still loading the overlay has not moved off its tile,
    /// so the machine collapses immediately. Returns `false` (and does
    /// nothing) while the overlay is animating or when collapsed.
    pub(crate) fn dismiss<R>(&mut self, cx: TransitionCx<'_, H, R>) -> bool
    where
        R: GridHost<Handle = H> + ?Sized,
    {
        match self.focus.as_ref().map(|f| f.stage) {
            Some(Stage::Shown) => {}
            Some(Stage::AwaitingAsset) => {
                restore_siblings(cx.config, &*cx.pool, &mut *cx.host);
                #[cfg(feature = "tracing")]
                tracing::debug!("dismissed before the full asset arrived");
                self.finish_collapse(cx);
                return true;
            }
            Some(Stage::Entering(_) | Stage::Leaving(_)) | None => return false,
        }
        let Some(focus) = self.focus.as_mut() else {
            return false;
        };
        let TransitionCx {
            config, pool, host, ..
        } = cx;

        if focus.captioned {
            host.caption_exit();
        }
        restore_siblings(config, &*pool, &mut *host);
        if let Some(pending) = focus.retarget.take() {
            host.cancel_animation(pending);
        }
        let id = host.animate_overlay(None, focus.origin, config.transition);
        focus.stage = Stage::Leaving(id);

        #[cfg(feature = "tracing")]
        tracing::debug!(cell = %focus.tile.cell(), "collapsing tile");
        true
    }

    /// Viewport size changed.
    ///
    /// Returns `true` if the machine consumed the resize (any phase but
    /// `Collapsed`); the caller re-culls otherwise. Only a resting overlay is
    /// retargeted immediately; one that is still entering is retargeted once
    /// it arrives.
    pub(crate) fn resize<R>(&mut self, viewport: Size, config: &GridConfig, host: &mut R) -> bool
    where
        R: GridHost<Handle = H> + ?Sized,
    {
        let Some(focus) = self.focus.as_mut() else {
            return false;
        };
        match focus.stage {
            Stage::Shown => retarget(focus, viewport, config, host),
            Stage::Entering(_) => focus.resize_pending = true,
            // The enter target is computed from the viewport when the asset
            // arrives, and the exit target does not depend on it.
            Stage::AwaitingAsset | Stage::Leaving(_) => {}
        }
        true
    }

    fn finish_collapse<R>(&mut self, cx: TransitionCx<'_, H, R>)
    where
        R: GridHost<Handle = H> + ?Sized,
    {
        let Some(focus) = self.focus.take() else {
            return;
        };
        let TransitionCx {
            drag, pool, host, ..
        } = cx;

        host.close_overlay();
        host.set_tile_visible(focus.tile.handle(), true);
        if let Some(displaced) = pool.restore(focus.tile) {
            host.destroy_tile(displaced.into_handle());
        }
        drag.set_enabled(true);
        drag.reset_velocity();
        host.set_cursor(CursorHint::Grab);

        #[cfg(feature = "tracing")]
        tracing::debug!("tile collapsed");
    }
}

fn restore_siblings<H, R>(config: &GridConfig, pool: &TilePool<H>, host: &mut R)
where
    R: GridHost<Handle = H> + ?Sized,
{
    host.set_backdrop(false);
    for sibling in pool.tiles() {
        host.fade_tile(sibling.handle(), 1.0, config.sibling_fade);
    }
}

fn retarget<H, R>(focus: &mut Focus<H>, viewport: Size, config: &GridConfig, host: &mut R)
where
    R: GridHost<Handle = H> + ?Sized,
{
    if let Some(previous) = focus.retarget.take() {
        host.cancel_animation(previous);
    }
    let target = centered_rect(viewport, config);
    focus.retarget = Some(host.animate_overlay(None, target, config.resize_tween));
}

/// Screen rectangle of the focused overlay at rest.
#[must_use]
pub fn centered_rect(viewport: Size, config: &GridConfig) -> Rect {
    let center = Point::new(viewport.width / 2.0, viewport.height / 2.0);
    Rect::from_center_size(center, config.expanded_size(viewport))
}
