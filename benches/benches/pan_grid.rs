// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use understory_pan_grid::{
    AnimationId, CaptionHost, CursorHint, GestureEvent, GridConfig, GridEvent, OverlayHost,
    PanGrid, TilePool, TileRenderer, TileSpec, Tween, compute_visible_cells,
};

/// Host that only counts live tiles.
#[derive(Default)]
struct NullHost {
    live: usize,
}

impl TileRenderer for NullHost {
    type Handle = u32;

    fn create_tile(&mut self, spec: &TileSpec) -> u32 {
        self.live += 1;
        black_box(spec.content.get())
    }

    fn destroy_tile(&mut self, handle: u32) {
        self.live -= 1;
        black_box(handle);
    }

    fn set_tile_visible(&mut self, _handle: &u32, _visible: bool) {}

    fn fade_tile(&mut self, _handle: &u32, _opacity: f64, _tween: Tween) {}

    fn set_surface_transform(&mut self, offset: Vec2) {
        black_box(offset);
    }

    fn set_cursor(&mut self, _cursor: CursorHint) {}
}

impl OverlayHost for NullHost {
    fn open_overlay(&mut self, _rect: Rect, _thumbnail: &str, _full: &str) {}

    fn animate_overlay(&mut self, _from: Option<Rect>, _to: Rect, _tween: Tween) -> AnimationId {
        AnimationId(0)
    }

    fn cancel_animation(&mut self, _id: AnimationId) {}

    fn close_overlay(&mut self) {}

    fn set_backdrop(&mut self, _active: bool) {}
}

impl CaptionHost for NullHost {
    fn set_caption(&mut self, _text: &str) {}

    fn caption_enter(&mut self, _delay_ms: u64) {}

    fn caption_exit(&mut self) {}
}

const VIEWPORTS: [(f64, f64); 3] = [(390.0, 844.0), (1280.0, 800.0), (3840.0, 2160.0)];

fn bench_pan_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_pan_grid");
    group.sample_size(50);
    let config = GridConfig::default();

    for (w, h) in VIEWPORTS {
        let viewport = Size::new(w, h);

        group.bench_function(format!("compute_visible_cells({w}x{h})"), |b| {
            let current = Vec2::new(-12_345.0, 6_789.0);
            let target = current + Vec2::new(40.0, -25.0);
            b.iter(|| {
                black_box(compute_visible_cells(
                    black_box(current),
                    black_box(target),
                    viewport,
                    &config,
                ))
            });
        });

        // Sweep the window one pitch at a time so each pass evicts and creates
        // a full column.
        group.bench_function(format!("reconcile_sweep({w}x{h})"), |b| {
            b.iter_batched(
                || (TilePool::<u32>::new(), NullHost::default()),
                |(mut pool, mut host)| {
                    for step in 0..32_u32 {
                        let offset = Vec2::new(-f64::from(step) * config.column_pitch(), 0.0);
                        let wanted = compute_visible_cells(offset, offset, viewport, &config);
                        pool.reconcile(&wanted, None, &config, &mut host);
                    }
                    black_box(host.live);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("drag_and_settle({w}x{h})"), |b| {
            b.iter_batched(
                || {
                    let mut host = NullHost::default();
                    let mut grid =
                        PanGrid::new(config, viewport).expect("default config is valid");
                    grid.start(0, &mut host);
                    (grid, host)
                },
                |(mut grid, mut host)| {
                    let events = [
                        GestureEvent::pointer_down(Point::new(0.0, 0.0), 0),
                        GestureEvent::pointer_move(Point::new(-600.0, -300.0), 100),
                        GestureEvent::pointer_up(100),
                    ];
                    for event in events {
                        grid.handle_event(GridEvent::Gesture(event), &mut host);
                    }
                    for frame in 1..=120_u64 {
                        grid.tick(100 + frame * 16, &mut host);
                    }
                    black_box(grid.pan().current());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pan_grid);
criterion_main!(benches);
