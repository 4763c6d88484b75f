// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan grid, headless.
//!
//! Drive a whole session against a logging host: fling the grid, let it
//! settle, focus a tile, resize the window, and dismiss it again.
//!
//! Run:
//! - `cargo run -p understory_demos --example pan_grid_headless`
//! - `RUST_LOG=understory_pan_grid=trace cargo run -p understory_demos --example pan_grid_headless`

use kurbo::{Point, Size};
use understory_demos::{LoggingHost, init_logging};
use understory_pan_grid::{Catalog, Cell, GestureEvent, GridConfig, GridEvent, PanGrid};

const FRAME_MS: u64 = 16;

fn main() {
    init_logging();

    let catalog = Catalog::new([
        "Salt Flats",
        "Harbor at Dusk",
        "Orchard",
        "Quarry Lake",
        "North Ridge",
    ]);
    let mut grid = match PanGrid::new(GridConfig::default(), Size::new(1280.0, 800.0)) {
        Ok(grid) => grid.with_catalog(catalog),
        Err(err) => {
            tracing::error!(%err, "invalid grid configuration");
            return;
        }
    };
    let mut host = LoggingHost::default();
    let mut now = 0;

    let stats = grid.start(now, &mut host);
    tracing::info!(created = stats.created, "initial window");

    // Fling up and to the left.
    let fling = [
        GestureEvent::pointer_down(Point::new(900.0, 600.0), now),
        GestureEvent::pointer_move(Point::new(800.0, 560.0), now + 16),
        GestureEvent::pointer_move(Point::new(650.0, 500.0), now + 32),
        GestureEvent::pointer_up(now + 40),
    ];
    for event in fling {
        grid.handle_event(GridEvent::Gesture(event), &mut host);
    }
    now += 40;

    for _ in 0..180 {
        now += FRAME_MS;
        grid.tick(now, &mut host);
    }
    tracing::info!(
        offset = ?grid.pan().current(),
        resident = grid.pool().len(),
        live = host.live_tiles(),
        "settled"
    );

    // Focus whichever resident tile sits under the viewport center.
    let center = Point::new(640.0, 400.0) - grid.pan().current();
    let cell = Cell::new(
        (center.x / grid.config().column_pitch()).floor() as i32,
        (center.y / grid.config().row_pitch()).floor() as i32,
    );
    if !grid.handle_event(GridEvent::TileClicked(cell), &mut host) {
        tracing::warn!(%cell, "click was not accepted");
        return;
    }

    // The full asset arrives, then the enter animation runs to completion.
    while host.pending_assets.pop_front().is_some() {
        grid.handle_event(GridEvent::FullAssetLoaded(cell), &mut host);
    }
    drain_animations(&mut grid, &mut host);
    tracing::info!(phase = ?grid.phase(), "focused");

    grid.handle_event(GridEvent::Resized(Size::new(1024.0, 768.0)), &mut host);
    drain_animations(&mut grid, &mut host);

    grid.handle_event(GridEvent::BackdropClicked, &mut host);
    drain_animations(&mut grid, &mut host);
    tracing::info!(
        phase = ?grid.phase(),
        resident = grid.pool().len(),
        live = host.live_tiles(),
        "back to the grid"
    );
}

fn drain_animations(grid: &mut PanGrid<u64>, host: &mut LoggingHost) {
    while let Some(id) = host.pending_animations.pop_front() {
        grid.handle_event(GridEvent::AnimationFinished(id), host);
    }
}
