// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory demos.
//!
//! [`LoggingHost`] implements every pan grid collaborator by logging through
//! `tracing` and queueing the asynchronous completions a real host would
//! deliver later, so demos can run a whole session without a window.

use std::collections::VecDeque;

use kurbo::{Rect, Vec2};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use understory_pan_grid::{
    AnimationId, CaptionHost, CursorHint, OverlayHost, TileRenderer, TileSpec, Tween,
};

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `info`
/// with debug output from the grid.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,understory_pan_grid=debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Host that logs every instruction and queues pending completions.
#[derive(Debug, Default)]
pub struct LoggingHost {
    next_handle: u64,
    next_animation: u64,
    live: usize,
    /// Surface translation most recently applied.
    pub offset: Vec2,
    /// Full-resolution assets requested and not yet delivered.
    pub pending_assets: VecDeque<String>,
    /// Animations started and not yet reported finished.
    pub pending_animations: VecDeque<AnimationId>,
}

impl LoggingHost {
    /// Number of tile visuals currently alive.
    pub fn live_tiles(&self) -> usize {
        self.live
    }
}

impl TileRenderer for LoggingHost {
    type Handle = u64;

    fn create_tile(&mut self, spec: &TileSpec) -> u64 {
        self.next_handle += 1;
        self.live += 1;
        tracing::trace!(cell = %spec.cell, thumbnail = %spec.thumbnail, "create tile");
        self.next_handle
    }

    fn destroy_tile(&mut self, handle: u64) {
        self.live -= 1;
        tracing::trace!(handle, "destroy tile");
    }

    fn set_tile_visible(&mut self, handle: &u64, visible: bool) {
        tracing::info!(handle, visible, "tile visibility");
    }

    fn fade_tile(&mut self, _handle: &u64, _opacity: f64, _tween: Tween) {}

    fn set_surface_transform(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    fn set_cursor(&mut self, cursor: CursorHint) {
        tracing::info!(?cursor, "cursor");
    }
}

impl OverlayHost for LoggingHost {
    fn open_overlay(&mut self, rect: Rect, thumbnail: &str, full: &str) {
        tracing::info!(?rect, thumbnail, full, "open overlay");
        self.pending_assets.push_back(full.to_owned());
    }

    fn animate_overlay(&mut self, from: Option<Rect>, to: Rect, tween: Tween) -> AnimationId {
        self.next_animation += 1;
        let id = AnimationId(self.next_animation);
        tracing::info!(id = id.0, ?from, ?to, duration_ms = tween.duration_ms, "animate overlay");
        self.pending_animations.push_back(id);
        id
    }

    fn cancel_animation(&mut self, id: AnimationId) {
        tracing::info!(id = id.0, "cancel animation");
        self.pending_animations.retain(|pending| *pending != id);
    }

    fn close_overlay(&mut self) {
        tracing::info!("close overlay");
    }

    fn set_backdrop(&mut self, active: bool) {
        tracing::info!(active, "backdrop");
    }
}

impl CaptionHost for LoggingHost {
    fn set_caption(&mut self, text: &str) {
        tracing::info!(text, "caption");
    }

    fn caption_enter(&mut self, delay_ms: u64) {
        tracing::info!(delay_ms, "caption enter");
    }

    fn caption_exit(&mut self) {
        tracing::info!("caption exit");
    }
}
