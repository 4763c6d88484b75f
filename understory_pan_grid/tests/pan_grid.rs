// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behavior of [`PanGrid`] against a recording host.

use std::collections::{BTreeSet, HashMap};

use kurbo::{Point, Rect, Size, Vec2};
use understory_pan_grid::{
    AnimationId, CaptionHost, Catalog, Cell, ConfigError, CursorHint, ExpansionPhase,
    FrameOutcome, GestureEvent, GridConfig, GridEvent, OverlayHost, PanGrid, TileRenderer,
    TileSpec, Tween, centered_rect,
};

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Create(Cell),
    Destroy(Cell),
    Visible(Cell, bool),
    Fade(Cell, f64),
    Cursor(CursorHint),
    OpenOverlay(Rect, String, String),
    Animate {
        id: AnimationId,
        from: Option<Rect>,
        to: Rect,
        tween: Tween,
    },
    Cancel(AnimationId),
    CloseOverlay,
    Backdrop(bool),
    Caption(String),
    CaptionEnter(u64),
    CaptionExit,
}

#[derive(Default)]
struct Recorder {
    next_handle: u32,
    next_animation: u64,
    live: HashMap<u32, Cell>,
    offset: Vec2,
    calls: Vec<Call>,
}

impl Recorder {
    fn live_cells(&self) -> BTreeSet<Cell> {
        let cells: BTreeSet<Cell> = self.live.values().copied().collect();
        assert_eq!(cells.len(), self.live.len(), "a cell was materialized twice");
        cells
    }

    fn animations(&self) -> Vec<(AnimationId, Option<Rect>, Rect, Tween)> {
        self.calls
            .iter()
            .filter_map(|call| match *call {
                Call::Animate {
                    id,
                    from,
                    to,
                    tween,
                } => Some((id, from, to, tween)),
                _ => None,
            })
            .collect()
    }

    fn last_animation(&self) -> AnimationId {
        self.animations().last().expect("an animation was started").0
    }

    fn count(&self, wanted: &Call) -> usize {
        self.calls.iter().filter(|call| *call == wanted).count()
    }

    fn creations_of(&self, cell: Cell) -> usize {
        self.count(&Call::Create(cell))
    }
}

impl TileRenderer for Recorder {
    type Handle = u32;

    fn create_tile(&mut self, spec: &TileSpec) -> u32 {
        self.next_handle += 1;
        self.live.insert(self.next_handle, spec.cell);
        self.calls.push(Call::Create(spec.cell));
        self.next_handle
    }

    fn destroy_tile(&mut self, handle: u32) {
        let cell = self.live.remove(&handle).expect("destroying a live tile");
        self.calls.push(Call::Destroy(cell));
    }

    fn set_tile_visible(&mut self, handle: &u32, visible: bool) {
        let cell = self.live[handle];
        self.calls.push(Call::Visible(cell, visible));
    }

    fn fade_tile(&mut self, handle: &u32, opacity: f64, _tween: Tween) {
        let cell = self.live[handle];
        self.calls.push(Call::Fade(cell, opacity));
    }

    fn set_surface_transform(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    fn set_cursor(&mut self, cursor: CursorHint) {
        self.calls.push(Call::Cursor(cursor));
    }
}

impl OverlayHost for Recorder {
    fn open_overlay(&mut self, rect: Rect, thumbnail: &str, full: &str) {
        self.calls
            .push(Call::OpenOverlay(rect, thumbnail.into(), full.into()));
    }

    fn animate_overlay(&mut self, from: Option<Rect>, to: Rect, tween: Tween) -> AnimationId {
        self.next_animation += 1;
        let id = AnimationId(self.next_animation);
        self.calls.push(Call::Animate {
            id,
            from,
            to,
            tween,
        });
        id
    }

    fn cancel_animation(&mut self, id: AnimationId) {
        self.calls.push(Call::Cancel(id));
    }

    fn close_overlay(&mut self) {
        self.calls.push(Call::CloseOverlay);
    }

    fn set_backdrop(&mut self, active: bool) {
        self.calls.push(Call::Backdrop(active));
    }
}

impl CaptionHost for Recorder {
    fn set_caption(&mut self, text: &str) {
        self.calls.push(Call::Caption(text.into()));
    }

    fn caption_enter(&mut self, delay_ms: u64) {
        self.calls.push(Call::CaptionEnter(delay_ms));
    }

    fn caption_exit(&mut self) {
        self.calls.push(Call::CaptionExit);
    }
}

const VIEWPORT: Size = Size::new(1000.0, 800.0);

fn started() -> (PanGrid<u32>, Recorder) {
    let mut grid = PanGrid::new(GridConfig::default(), VIEWPORT).unwrap();
    let mut host = Recorder::default();
    grid.start(0, &mut host);
    (grid, host)
}

fn wanted_cells(grid: &PanGrid<u32>) -> BTreeSet<Cell> {
    grid.visible_cells().iter().collect()
}

fn resident_cells(grid: &PanGrid<u32>) -> BTreeSet<Cell> {
    grid.pool().cells().collect()
}

fn drag(grid: &mut PanGrid<u32>, host: &mut Recorder, from: Point, to: Point, t0: u64, t1: u64) {
    grid.handle_event(GridEvent::Gesture(GestureEvent::pointer_down(from, t0)), host);
    grid.handle_event(GridEvent::Gesture(GestureEvent::pointer_move(to, t1)), host);
    grid.handle_event(GridEvent::Gesture(GestureEvent::pointer_up(t1)), host);
}

/// Clicks `cell`, delivers its full asset, and finishes the enter animation.
fn expand_fully(grid: &mut PanGrid<u32>, host: &mut Recorder, cell: Cell) {
    assert!(grid.handle_event(GridEvent::TileClicked(cell), host));
    assert!(grid.handle_event(GridEvent::FullAssetLoaded(cell), host));
    let enter = host.last_animation();
    assert!(grid.handle_event(GridEvent::AnimationFinished(enter), host));
    assert_eq!(grid.phase(), ExpansionPhase::Expanded);
}

#[test]
fn start_materializes_the_padded_window() {
    let (grid, host) = started();

    let visible = grid.visible_cells();
    assert_eq!((visible.start_col, visible.end_col), (-7, 21));
    assert_eq!((visible.start_row, visible.end_row), (-5, 15));
    assert_eq!(visible.len(), 29 * 21);

    assert_eq!(grid.pool().len(), 29 * 21);
    assert_eq!(host.live_cells(), wanted_cells(&grid));
    assert_eq!(host.calls.first(), Some(&Call::Cursor(CursorHint::Grab)));
}

#[test]
fn recull_at_rest_changes_nothing() {
    let (mut grid, mut host) = started();
    let before = host.calls.len();

    assert!(grid.recull(&mut host).is_noop());
    assert!(grid.recull(&mut host).is_noop());
    assert_eq!(host.calls.len(), before);
}

#[test]
fn panning_far_keeps_resident_set_equal_to_wanted_set() {
    let (mut grid, mut host) = started();

    drag(
        &mut grid,
        &mut host,
        Point::new(900.0, 700.0),
        Point::new(-1_100.0, -1_300.0),
        0,
        1_000,
    );
    let mut now = 1_000;
    for _ in 0..300 {
        now += 16;
        grid.tick(now, &mut host);
    }
    // One more pass past the time threshold catches the tail of the easing.
    now += 300;
    grid.tick(now, &mut host);

    assert!(grid.pan().current().x < -1_900.0);
    assert_eq!(resident_cells(&grid), wanted_cells(&grid));
    assert_eq!(host.live_cells(), resident_cells(&grid));
    assert!(host.calls.iter().any(|c| matches!(c, Call::Destroy(_))));
    assert_eq!(host.offset, grid.pan().current());
}

#[test]
fn identical_input_yields_identical_state() {
    let run = || {
        let (mut grid, mut host) = started();
        drag(
            &mut grid,
            &mut host,
            Point::new(10.0, 10.0),
            Point::new(410.0, -90.0),
            0,
            120,
        );
        for frame in 1..=40 {
            grid.tick(120 + frame * 16, &mut host);
        }
        let creations: Vec<Call> = host
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Create(_)))
            .cloned()
            .collect();
        (
            grid.pan().current(),
            resident_cells(&grid),
            host.live_cells(),
            creations,
        )
    };
    assert_eq!(run(), run());
}

#[test]
fn pointer_release_applies_momentum() {
    let (mut grid, mut host) = started();

    drag(
        &mut grid,
        &mut host,
        Point::new(0.0, 0.0),
        Point::new(50.0, 0.0),
        0,
        20,
    );

    // 50 units over 20ms is 2.5/ms; times 200 adds 500 on release.
    assert_eq!(grid.pan().target(), Vec2::new(550.0, 0.0));
    assert_eq!(grid.drag().velocity(), Vec2::ZERO);
    assert_eq!(host.calls.last(), Some(&Call::Cursor(CursorHint::Grab)));
}

#[test]
fn slow_release_has_no_momentum() {
    let (mut grid, mut host) = started();

    drag(
        &mut grid,
        &mut host,
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        0,
        100,
    );

    assert_eq!(grid.pan().target(), Vec2::new(2.0, 0.0));
}

#[test]
fn touch_pans_without_momentum() {
    let (mut grid, mut host) = started();

    let events = [
        GestureEvent::touch_start(Point::new(0.0, 0.0), 0),
        GestureEvent::touch_move(Point::new(50.0, 30.0), 20),
        GestureEvent::touch_end(20),
    ];
    for event in events {
        assert!(grid.handle_event(GridEvent::Gesture(event), &mut host));
    }

    assert_eq!(grid.pan().target(), Vec2::new(50.0, 30.0));
}

#[test]
fn click_after_a_drag_is_ignored() {
    let (mut grid, mut host) = started();

    drag(
        &mut grid,
        &mut host,
        Point::new(100.0, 100.0),
        Point::new(110.0, 100.0),
        0,
        50,
    );

    assert!(grid.drag().has_moved());
    assert!(!grid.handle_event(GridEvent::TileClicked(Cell::new(0, 0)), &mut host));
    assert_eq!(grid.phase(), ExpansionPhase::Collapsed);
    assert!(!host.calls.iter().any(|c| matches!(c, Call::OpenOverlay(..))));
}

#[test]
fn small_jitter_still_counts_as_a_tap() {
    let (mut grid, mut host) = started();

    drag(
        &mut grid,
        &mut host,
        Point::new(100.0, 100.0),
        Point::new(103.0, 104.0),
        0,
        50,
    );

    assert!(!grid.drag().has_moved());
    assert!(grid.handle_event(GridEvent::TileClicked(Cell::new(0, 0)), &mut host));
}

#[test]
fn clicking_a_tile_opens_the_overlay() {
    let mut grid = PanGrid::new(GridConfig::default(), VIEWPORT)
        .unwrap()
        .with_catalog(Catalog::new(["Dunes", "Harbor"]));
    let mut host = Recorder::default();
    grid.start(0, &mut host);
    let cell = Cell::new(1, 0);
    let origin = cell.screen_rect(grid.config(), grid.pan().current());
    let content = grid.pool().get(cell).unwrap().content();
    let residents_before = grid.pool().len();

    assert!(grid.handle_event(GridEvent::TileClicked(cell), &mut host));

    assert_eq!(grid.phase(), ExpansionPhase::Expanding);
    assert_eq!(grid.expansion().focused_cell(), Some(cell));
    assert_eq!(grid.expansion().origin_rect(), Some(origin));
    assert!(!grid.expansion().asset_ready());
    assert!(!grid.drag().is_enabled());
    assert!(!grid.pool().contains(cell));
    assert_eq!(grid.pool().len(), residents_before - 1);

    // Hidden in place, not destroyed.
    assert!(host.live_cells().contains(&cell));
    assert_eq!(host.count(&Call::Visible(cell, false)), 1);
    assert_eq!(host.count(&Call::Destroy(cell)), 0);

    assert_eq!(host.count(&Call::Backdrop(true)), 1);
    assert_eq!(host.count(&Call::Cursor(CursorHint::Default)), 1);
    assert_eq!(
        host.calls
            .iter()
            .filter(|c| matches!(c, Call::Fade(_, o) if *o == 0.25))
            .count(),
        residents_before - 1
    );
    assert!(host.calls.contains(&Call::OpenOverlay(
        origin,
        content.thumbnail_path(),
        content.full_path()
    )));
    assert_eq!(content.get(), 2);
    assert!(host.calls.contains(&Call::Caption("Harbor".into())));
    // Nothing moves until the full asset arrives.
    assert!(host.animations().is_empty());
}

#[test]
fn full_asset_starts_the_enter_animation() {
    let (mut grid, mut host) = started();
    let cell = Cell::new(0, 0);
    let origin = cell.screen_rect(grid.config(), grid.pan().current());
    grid.handle_event(GridEvent::TileClicked(cell), &mut host);

    assert!(grid.handle_event(GridEvent::FullAssetLoaded(cell), &mut host));

    let animations = host.animations();
    assert_eq!(animations.len(), 1);
    let (_, from, to, tween) = animations[0];
    assert_eq!(from, Some(origin));
    assert_eq!(to, Rect::new(300.0, 160.0, 700.0, 640.0));
    assert_eq!(tween, grid.config().transition);
    assert!(grid.expansion().asset_ready());
    assert_eq!(grid.phase(), ExpansionPhase::Expanding);

    // Without a catalog there is no caption to animate.
    assert!(!host.calls.iter().any(|c| matches!(c, Call::CaptionEnter(_))));
}

#[test]
fn caption_enters_after_its_delay() {
    let mut grid = PanGrid::new(GridConfig::default(), VIEWPORT)
        .unwrap()
        .with_catalog(Catalog::new(["Only"]));
    let mut host = Recorder::default();
    grid.start(0, &mut host);

    expand_fully(&mut grid, &mut host, Cell::new(2, 3));
    assert_eq!(host.count(&Call::CaptionEnter(500)), 1);

    assert!(grid.handle_event(GridEvent::OverlayClicked, &mut host));
    assert_eq!(host.count(&Call::CaptionExit), 1);
}

#[test]
fn full_round_trip_restores_the_grid() {
    let (mut grid, mut host) = started();
    let cell = Cell::new(3, 2);
    let wanted_before = wanted_cells(&grid);
    let handle_before = *grid.pool().get(cell).unwrap().handle();

    expand_fully(&mut grid, &mut host, cell);
    assert!(grid.handle_event(GridEvent::BackdropClicked, &mut host));
    assert_eq!(grid.phase(), ExpansionPhase::Collapsing);
    assert_eq!(host.count(&Call::Backdrop(false)), 1);

    let (exit, from, to, _) = *host.animations().last().unwrap();
    assert_eq!(from, None);
    assert_eq!(to, cell.screen_rect(grid.config(), grid.pan().current()));

    assert!(grid.handle_event(GridEvent::AnimationFinished(exit), &mut host));

    assert_eq!(grid.phase(), ExpansionPhase::Collapsed);
    assert!(grid.drag().is_enabled());
    assert_eq!(resident_cells(&grid), wanted_before);
    assert_eq!(host.live_cells(), wanted_before);
    assert_eq!(*grid.pool().get(cell).unwrap().handle(), handle_before);
    assert_eq!(host.creations_of(cell), 1);
    assert_eq!(host.count(&Call::CloseOverlay), 1);
    assert_eq!(host.count(&Call::Visible(cell, true)), 1);
    assert_eq!(host.calls.last(), Some(&Call::Cursor(CursorHint::Grab)));
    assert!(
        host.calls
            .iter()
            .any(|c| matches!(c, Call::Fade(_, o) if *o == 1.0))
    );

    // Panning works again.
    assert!(matches!(
        grid.tick(10_000, &mut host),
        FrameOutcome::Eased { .. }
    ));
}

#[test]
fn only_one_tile_can_be_focused() {
    let (mut grid, mut host) = started();
    let first = Cell::new(0, 0);
    let other = Cell::new(1, 1);

    assert!(grid.handle_event(GridEvent::TileClicked(first), &mut host));
    assert!(!grid.handle_event(GridEvent::TileClicked(other), &mut host));

    grid.handle_event(GridEvent::FullAssetLoaded(first), &mut host);
    assert!(!grid.handle_event(GridEvent::TileClicked(other), &mut host));

    let enter = host.last_animation();
    grid.handle_event(GridEvent::AnimationFinished(enter), &mut host);
    assert!(!grid.handle_event(GridEvent::TileClicked(other), &mut host));

    grid.handle_event(GridEvent::OverlayClicked, &mut host);
    assert!(!grid.handle_event(GridEvent::TileClicked(other), &mut host));

    assert_eq!(grid.expansion().focused_cell(), Some(first));
    assert_eq!(
        host.calls
            .iter()
            .filter(|c| matches!(c, Call::OpenOverlay(..)))
            .count(),
        1
    );
}

#[test]
fn dismiss_is_ignored_while_animating() {
    let (mut grid, mut host) = started();
    let cell = Cell::new(0, 0);

    assert!(!grid.handle_event(GridEvent::OverlayClicked, &mut host));

    grid.handle_event(GridEvent::TileClicked(cell), &mut host);
    grid.handle_event(GridEvent::FullAssetLoaded(cell), &mut host);
    assert!(!grid.handle_event(GridEvent::OverlayClicked, &mut host));
    assert!(!grid.handle_event(GridEvent::BackdropClicked, &mut host));
    assert_eq!(grid.phase(), ExpansionPhase::Expanding);

    let enter = host.last_animation();
    grid.handle_event(GridEvent::AnimationFinished(enter), &mut host);
    assert!(grid.handle_event(GridEvent::OverlayClicked, &mut host));
    assert!(!grid.handle_event(GridEvent::OverlayClicked, &mut host));
    assert_eq!(grid.phase(), ExpansionPhase::Collapsing);
}

#[test]
fn dismiss_while_the_asset_loads_collapses_at_once() {
    let mut grid = PanGrid::new(GridConfig::default(), VIEWPORT)
        .unwrap()
        .with_catalog(Catalog::new(["Dunes"]));
    let mut host = Recorder::default();
    grid.start(0, &mut host);
    let cell = Cell::new(0, 0);
    let wanted_before = wanted_cells(&grid);
    grid.handle_event(GridEvent::TileClicked(cell), &mut host);

    // The full asset never arrives.
    assert!(grid.handle_event(GridEvent::BackdropClicked, &mut host));

    assert_eq!(grid.phase(), ExpansionPhase::Collapsed);
    assert!(grid.drag().is_enabled());
    assert_eq!(resident_cells(&grid), wanted_before);
    assert_eq!(host.live_cells(), wanted_before);
    assert_eq!(host.count(&Call::Visible(cell, true)), 1);
    assert_eq!(host.count(&Call::CloseOverlay), 1);
    assert_eq!(host.count(&Call::Backdrop(false)), 1);
    assert_eq!(host.count(&Call::CaptionExit), 0);
    assert!(host.animations().is_empty());
    assert_eq!(host.calls.last(), Some(&Call::Cursor(CursorHint::Grab)));

    // The grid pans again, and a late asset is stale.
    assert!(matches!(
        grid.tick(60_000, &mut host),
        FrameOutcome::Eased { .. }
    ));
    assert!(grid.handle_event(
        GridEvent::Gesture(GestureEvent::pointer_down(Point::new(0.0, 0.0), 60_000)),
        &mut host
    ));
    assert!(!grid.handle_event(GridEvent::FullAssetLoaded(cell), &mut host));
    assert!(host.animations().is_empty());
}

#[test]
fn focus_freezes_panning() {
    let (mut grid, mut host) = started();
    drag(
        &mut grid,
        &mut host,
        Point::new(0.0, 0.0),
        Point::new(3.0, 0.0),
        0,
        500,
    );
    grid.handle_event(GridEvent::TileClicked(Cell::new(0, 0)), &mut host);
    let pan_before = *grid.pan();

    assert_eq!(grid.tick(1_000, &mut host), FrameOutcome::Parked);
    assert!(!grid.handle_event(
        GridEvent::Gesture(GestureEvent::pointer_down(Point::new(0.0, 0.0), 1_000)),
        &mut host
    ));
    assert!(!grid.handle_event(
        GridEvent::Gesture(GestureEvent::pointer_move(Point::new(300.0, 0.0), 1_020)),
        &mut host
    ));
    assert!(!grid.handle_event(
        GridEvent::Gesture(GestureEvent::pointer_up(1_040)),
        &mut host
    ));
    assert_eq!(*grid.pan(), pan_before);
}

#[test]
fn focused_cell_is_never_rematerialized() {
    let (mut grid, mut host) = started();
    let cell = Cell::new(0, 0);
    grid.handle_event(GridEvent::TileClicked(cell), &mut host);

    grid.recull(&mut host);
    grid.recull(&mut host);

    assert!(!grid.pool().contains(cell));
    assert_eq!(host.creations_of(cell), 1);
    let mut expected = wanted_cells(&grid);
    expected.remove(&cell);
    assert_eq!(resident_cells(&grid), expected);
}

#[test]
fn resize_while_collapsed_reculls_immediately() {
    let (mut grid, mut host) = started();

    grid.handle_event(GridEvent::Resized(Size::new(1600.0, 1200.0)), &mut host);

    assert_eq!(grid.viewport(), Size::new(1600.0, 1200.0));
    assert!(grid.visible_cells().len() > 29 * 21);
    assert_eq!(resident_cells(&grid), wanted_cells(&grid));
    assert_eq!(host.live_cells(), wanted_cells(&grid));
}

#[test]
fn resize_while_expanded_retargets_the_overlay() {
    let (mut grid, mut host) = started();
    let cell = Cell::new(0, 0);
    expand_fully(&mut grid, &mut host, cell);
    let residents = resident_cells(&grid);
    let resized = Size::new(500.0, 400.0);

    grid.handle_event(GridEvent::Resized(resized), &mut host);

    let (first, from, to, tween) = *host.animations().last().unwrap();
    assert_eq!(from, None);
    assert_eq!(to, centered_rect(resized, grid.config()));
    assert_eq!(tween, grid.config().resize_tween);
    assert_eq!(resident_cells(&grid), residents);

    // A second resize supersedes the first retarget.
    grid.handle_event(GridEvent::Resized(VIEWPORT), &mut host);
    assert!(host.calls.contains(&Call::Cancel(first)));
    let second = host.last_animation();

    assert!(!grid.handle_event(GridEvent::AnimationFinished(first), &mut host));
    assert!(grid.handle_event(GridEvent::AnimationFinished(second), &mut host));
    assert_eq!(grid.phase(), ExpansionPhase::Expanded);
}

#[test]
fn resize_while_entering_waits_for_arrival() {
    let (mut grid, mut host) = started();
    let cell = Cell::new(0, 0);
    grid.handle_event(GridEvent::TileClicked(cell), &mut host);
    grid.handle_event(GridEvent::FullAssetLoaded(cell), &mut host);
    let enter = host.last_animation();
    let resized = Size::new(1200.0, 900.0);

    grid.handle_event(GridEvent::Resized(resized), &mut host);
    assert_eq!(host.animations().len(), 1, "enter animation runs undisturbed");

    grid.handle_event(GridEvent::AnimationFinished(enter), &mut host);
    let animations = host.animations();
    assert_eq!(animations.len(), 2);
    assert_eq!(animations[1].2, centered_rect(resized, grid.config()));
}

#[test]
fn resize_before_the_asset_arrives_sizes_the_enter_target() {
    let (mut grid, mut host) = started();
    let cell = Cell::new(0, 0);
    grid.handle_event(GridEvent::TileClicked(cell), &mut host);
    let resized = Size::new(600.0, 600.0);

    grid.handle_event(GridEvent::Resized(resized), &mut host);
    assert!(host.animations().is_empty());

    grid.handle_event(GridEvent::FullAssetLoaded(cell), &mut host);
    assert_eq!(host.animations()[0].2, centered_rect(resized, grid.config()));
}

#[test]
fn stale_notifications_are_ignored() {
    let (mut grid, mut host) = started();
    let cell = Cell::new(0, 0);

    assert!(!grid.handle_event(GridEvent::FullAssetLoaded(cell), &mut host));
    assert!(!grid.handle_event(GridEvent::AnimationFinished(AnimationId(99)), &mut host));
    assert!(!grid.handle_event(GridEvent::ThumbnailLoaded(Cell::new(500, 500)), &mut host));
    assert!(grid.handle_event(GridEvent::ThumbnailLoaded(Cell::new(1, 1)), &mut host));
    assert!(grid.pool().get(Cell::new(1, 1)).unwrap().is_loaded());

    grid.handle_event(GridEvent::TileClicked(cell), &mut host);
    assert!(!grid.handle_event(GridEvent::FullAssetLoaded(Cell::new(1, 0)), &mut host));
    assert!(grid.handle_event(GridEvent::FullAssetLoaded(cell), &mut host));
    assert!(!grid.handle_event(GridEvent::FullAssetLoaded(cell), &mut host));
    assert!(!grid.handle_event(GridEvent::AnimationFinished(AnimationId(99)), &mut host));
    assert_eq!(grid.phase(), ExpansionPhase::Expanding);
}

#[test]
fn clicks_on_non_resident_cells_are_ignored() {
    let (mut grid, mut host) = started();

    assert!(!grid.handle_event(GridEvent::TileClicked(Cell::new(1_000, 0)), &mut host));
    assert_eq!(grid.phase(), ExpansionPhase::Collapsed);
    assert!(grid.drag().is_enabled());
}

#[test]
fn unusable_resize_is_rejected() {
    let (mut grid, mut host) = started();
    let resident = resident_cells(&grid);

    for bad in [
        Size::new(f64::NAN, 800.0),
        Size::new(-10.0, 800.0),
        Size::new(1e12, 1e12),
    ] {
        assert!(!grid.handle_event(GridEvent::Resized(bad), &mut host));
    }
    assert!(matches!(
        grid.resize(Size::new(f64::INFINITY, 1.0), &mut host),
        Err(ConfigError::InvalidViewport(_))
    ));

    assert_eq!(grid.viewport(), VIEWPORT);
    assert_eq!(resident_cells(&grid), resident);
}

#[test]
fn unusable_initial_viewport_is_rejected() {
    let config = GridConfig::default();
    assert!(matches!(
        PanGrid::<u32>::new(config, Size::new(1e12, 800.0)),
        Err(ConfigError::TooManyTiles { .. })
    ));
    assert!(matches!(
        PanGrid::<u32>::new(config, Size::new(1000.0, f64::NAN)),
        Err(ConfigError::InvalidViewport(_))
    ));
}

#[test]
fn invalid_config_is_rejected() {
    let config = GridConfig {
        item_count: 0,
        ..GridConfig::default()
    };
    assert!(PanGrid::<u32>::new(config, VIEWPORT).is_err());
}
