// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator traits implemented by the embedding application.
//!
//! The grid never draws, loads, or animates anything itself. It tells the host
//! what to create, destroy, and animate, and the host reports back when
//! asynchronous work finishes:
//!
//! - overlay animation completion via [`PanGrid::animation_finished`],
//! - full-resolution asset readiness via [`PanGrid::full_asset_loaded`],
//! - thumbnail readiness via [`PanGrid::thumbnail_loaded`].
//!
//! [`PanGrid::animation_finished`]: crate::PanGrid::animation_finished
//! [`PanGrid::full_asset_loaded`]: crate::PanGrid::full_asset_loaded
//! [`PanGrid::thumbnail_loaded`]: crate::PanGrid::thumbnail_loaded

use kurbo::{Rect, Vec2};

use crate::cell::TileSpec;
use crate::config::Tween;

/// Opaque handle for one host-side animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(pub u64);

/// Cursor the surface should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CursorHint {
    /// Idle and draggable.
    #[default]
    Grab,
    /// A drag is in progress.
    Grabbing,
    /// A tile is focused; the surface does not pan.
    Default,
}

/// Creates and destroys tile visuals on the pannable surface.
pub trait TileRenderer {
    /// Host-side visual for one tile. The grid never inspects it.
    type Handle;

    /// Materializes a tile at `spec.world_rect` on the surface.
    fn create_tile(&mut self, spec: &TileSpec) -> Self::Handle;

    /// Releases a tile visual.
    fn destroy_tile(&mut self, handle: Self::Handle);

    /// Shows or hides a tile without releasing it.
    fn set_tile_visible(&mut self, handle: &Self::Handle, visible: bool);

    /// Animates a tile's opacity.
    fn fade_tile(&mut self, handle: &Self::Handle, opacity: f64, tween: Tween);

    /// Applies the pan translation to the whole surface.
    fn set_surface_transform(&mut self, offset: Vec2);

    /// Updates the surface cursor.
    fn set_cursor(&mut self, cursor: CursorHint);
}

/// Hosts the floating overlay used to present a focused tile.
pub trait OverlayHost {
    /// Creates the overlay at `rect` (screen space) showing `thumbnail`, and
    /// starts loading `full`.
    ///
    /// The host must call [`PanGrid::full_asset_loaded`](crate::PanGrid::full_asset_loaded)
    /// once `full` is ready; until then the overlay stays at `rect`. If the
    /// load fails the overlay simply never animates.
    fn open_overlay(&mut self, rect: Rect, thumbnail: &str, full: &str);

    /// Animates the overlay to `to`, starting from `from` or, if `None`, from
    /// wherever it currently is.
    ///
    /// The host must call [`PanGrid::animation_finished`](crate::PanGrid::animation_finished)
    /// with the returned id when the animation completes.
    fn animate_overlay(&mut self, from: Option<Rect>, to: Rect, tween: Tween) -> AnimationId;

    /// Stops an animation started by [`OverlayHost::animate_overlay`].
    fn cancel_animation(&mut self, id: AnimationId);

    /// Removes the overlay.
    fn close_overlay(&mut self);

    /// Shows or hides the click-to-dismiss backdrop behind the overlay.
    fn set_backdrop(&mut self, active: bool);
}

/// Presents the focused tile's caption.
///
/// Word splitting and per-word motion are the host's business.
pub trait CaptionHost {
    /// Replaces the caption text, leaving it hidden.
    fn set_caption(&mut self, text: &str);

    /// Animates the caption into view after `delay_ms`.
    fn caption_enter(&mut self, delay_ms: u64);

    /// Animates the caption out of view.
    fn caption_exit(&mut self);
}

/// Everything a [`PanGrid`](crate::PanGrid) needs from its embedder.
pub trait GridHost: TileRenderer + OverlayHost + CaptionHost {}

impl<T: TileRenderer + OverlayHost + CaptionHost> GridHost for T {}
