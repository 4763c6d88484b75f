// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pan_grid --heading-base-level=0

//! Understory Pan Grid: a headless, virtualized, infinitely pannable tile grid.
//!
//! The grid extends without bound in every direction. Only the tiles that
//! intersect a padded window around the viewport are ever materialized; as the
//! user drags, the window moves and tiles are created and released to match.
//! Any tile can be clicked to grow into a centered overlay, and clicked again
//! to shrink back into place.
//!
//! The crate owns the state and the decisions; the embedding application owns
//! the pixels. It is split into small pieces that can be used on their own:
//!
//! - [`GridConfig`]: tile geometry, easing and throttling constants, and
//!   transition timings, with [`GridConfig::validate`].
//! - [`Cell`] and [`content_index_of`]: integer grid coordinates and the
//!   deterministic mapping from a cell to the content it shows.
//! - [`compute_visible_cells`]: the pure culling function producing the
//!   [`VisibleCells`] window for a pan state, including directional lookahead.
//! - [`TilePool`]: resident tiles, reconciled against the wanted set so that
//!   no cell is ever materialized twice.
//! - [`DragController`]: pointer and touch gestures, tap-versus-drag
//!   discrimination, velocity estimation, and release momentum.
//! - [`FrameLoop`]: per-frame exponential easing of the pan offset with
//!   throttled re-culling.
//! - [`Expansion`]: the collapsed / expanding / expanded / collapsing state
//!   machine for the single focused tile.
//! - [`PanGrid`]: the engine that wires everything together.
//!
//! The host implements [`TileRenderer`], [`OverlayHost`], and [`CaptionHost`]
//! (together: [`GridHost`]) and feeds time, input, and load/animation
//! completions back in. Time is always supplied by the caller as milliseconds,
//! so the whole engine runs deterministically under test.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_pan_grid::{
//!     AnimationId, CaptionHost, CursorHint, GestureEvent, GridConfig, GridEvent, OverlayHost,
//!     PanGrid, TileRenderer, TileSpec, Tween,
//! };
//!
//! #[derive(Default)]
//! struct Host {
//!     live: usize,
//!     offset: Vec2,
//! }
//!
//! impl TileRenderer for Host {
//!     type Handle = ();
//!     fn create_tile(&mut self, _spec: &TileSpec) { self.live += 1; }
//!     fn destroy_tile(&mut self, _handle: ()) { self.live -= 1; }
//!     fn set_tile_visible(&mut self, _handle: &(), _visible: bool) {}
//!     fn fade_tile(&mut self, _handle: &(), _opacity: f64, _tween: Tween) {}
//!     fn set_surface_transform(&mut self, offset: Vec2) { self.offset = offset; }
//!     fn set_cursor(&mut self, _cursor: CursorHint) {}
//! }
//!
//! impl OverlayHost for Host {
//!     fn open_overlay(&mut self, _rect: Rect, _thumbnail: &str, _full: &str) {}
//!     fn animate_overlay(&mut self, _: Option<Rect>, _: Rect, _: Tween) -> AnimationId {
//!         AnimationId(0)
//!     }
//!     fn cancel_animation(&mut self, _id: AnimationId) {}
//!     fn close_overlay(&mut self) {}
//!     fn set_backdrop(&mut self, _active: bool) {}
//! }
//!
//! impl CaptionHost for Host {
//!     fn set_caption(&mut self, _text: &str) {}
//!     fn caption_enter(&mut self, _delay_ms: u64) {}
//!     fn caption_exit(&mut self) {}
//! }
//!
//! let mut host = Host::default();
//! let mut grid = PanGrid::new(GridConfig::default(), Size::new(1000.0, 800.0)).unwrap();
//!
//! // The first cull materializes the padded window around the viewport.
//! grid.start(0, &mut host);
//! assert_eq!(host.live, grid.visible_cells().len());
//!
//! // Drag 100px to the left, then let a few frames ease the surface along.
//! for gesture in [
//!     GestureEvent::pointer_down(Point::new(500.0, 400.0), 0),
//!     GestureEvent::pointer_move(Point::new(400.0, 400.0), 40),
//!     GestureEvent::pointer_up(60),
//! ] {
//!     grid.handle_event(GridEvent::Gesture(gesture), &mut host);
//! }
//! for frame in 1..=60 {
//!     grid.tick(60 + frame * 16, &mut host);
//! }
//! assert!(host.offset.x < 0.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `libm`: `no_std` float math through Kurbo's `libm` backend.
//! - `tracing`: emit `tracing` events for reconciliation, gestures, and focus
//!   transitions. Without it every log site compiles away.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cell;
mod config;
mod cull;
mod drag;
mod expansion;
mod frame;
mod grid;
mod host;
mod pan;
mod pool;

pub use cell::{Cell, ContentIndex, TileSpec, content_index_of};
pub use config::{Catalog, ConfigError, Ease, GridConfig, Tween};
pub use cull::{VisibleCells, compute_visible_cells};
pub use drag::{DragController, GestureEvent, GesturePhase, GestureSource};
pub use expansion::{Expansion, ExpansionPhase, centered_rect};
pub use frame::{FrameLoop, FrameOutcome};
pub use grid::{GridEvent, PanGrid};
pub use host::{AnimationId, CaptionHost, CursorHint, GridHost, OverlayHost, TileRenderer};
pub use pan::PanOffset;
pub use pool::{ReconcileStats, Tile, TilePool};
