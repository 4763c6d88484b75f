// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid configuration, tween descriptors, and the caption catalog.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Size, Vec2};

use crate::cell::ContentIndex;
use crate::cull::compute_visible_cells;

/// A cubic-bezier easing curve, `cubic-bezier(x1, y1, x2, y2)`.
///
/// The grid never samples curves itself; they are handed to the host's
/// animation system verbatim.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ease {
    /// First control point, x.
    pub x1: f64,
    /// First control point, y.
    pub y1: f64,
    /// Second control point, x.
    pub x2: f64,
    /// Second control point, y.
    pub y2: f64,
}

impl Ease {
    /// Slow start, very fast middle, slow settle. Used for the focus transition.
    pub const HOP: Self = Self::new(0.9, 0.0, 0.1, 1.0);
    /// Cubic ease-out. Used for resize retargeting and sibling fades.
    pub const POWER2_OUT: Self = Self::new(0.215, 0.61, 0.355, 1.0);

    /// Creates a curve from its two control points.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Timing for one host-driven animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    /// Duration in milliseconds.
    pub duration_ms: u64,
    /// Delay before the animation starts, in milliseconds.
    pub delay_ms: u64,
    /// Easing curve.
    pub ease: Ease,
}

impl Tween {
    /// Creates a tween with no delay.
    #[must_use]
    pub const fn new(duration_ms: u64, ease: Ease) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            ease,
        }
    }

    /// Returns a copy of this tween starting after `delay_ms`.
    #[must_use]
    pub const fn delayed(self, delay_ms: u64) -> Self {
        Self { delay_ms, ..self }
    }
}

/// Tunables for a [`PanGrid`](crate::PanGrid).
///
/// The defaults reproduce a 120×160 thumbnail wall with 150px gutters over
/// twenty images.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Number of distinct content items; content indices cycle through `1..=item_count`.
    pub item_count: u32,
    /// Row stride used when deriving a content index from a cell.
    pub columns_per_row: u32,
    /// Size of a single tile in world units.
    pub tile_size: Size,
    /// Gutter between neighbouring tiles.
    pub gap: f64,
    /// Extra viewport multiples materialized around the visible region.
    pub buffer: f64,
    /// Directional look-ahead, in world units, added in the direction of travel.
    pub lookahead: f64,
    /// Per-tick exponential smoothing factor for the pan offset.
    pub ease: f64,
    /// Pan distance after which the wanted set is recomputed.
    pub recull_distance: f64,
    /// Time after which the wanted set is recomputed even without movement.
    pub recull_interval_ms: u64,
    /// Cumulative pointer travel that turns a press into a drag.
    pub drag_slop: f64,
    /// Floor for the interval used in velocity estimates.
    pub min_sample_interval_ms: u64,
    /// Per-axis velocity above which a release applies momentum.
    pub momentum_threshold: f64,
    /// Multiplier turning release velocity into a one-shot pan displacement.
    pub momentum_factor: f64,
    /// Focused overlay width as a fraction of viewport width.
    pub expanded_width_fraction: f64,
    /// Focused overlay height as a multiple of its width.
    pub expanded_aspect: f64,
    /// Enter and exit transition of the focused overlay.
    pub transition: Tween,
    /// Delay after the enter transition starts before the caption animates in.
    pub caption_delay_ms: u64,
    /// Retargeting of the overlay after a viewport resize.
    pub resize_tween: Tween,
    /// Dimming and restoring of the non-focused tiles.
    pub sibling_fade: Tween,
    /// Opacity of non-focused tiles while a tile is focused.
    pub dimmed_sibling_opacity: f64,
    /// Upper bound on the wanted set for a viewport at rest; larger viewports
    /// are rejected.
    pub max_resident_tiles: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            item_count: 20,
            columns_per_row: 4,
            tile_size: Size::new(120.0, 160.0),
            gap: 150.0,
            buffer: 2.5,
            lookahead: 300.0,
            ease: 0.075,
            recull_distance: 300.0,
            recull_interval_ms: 250,
            drag_slop: 5.0,
            min_sample_interval_ms: 10,
            momentum_threshold: 0.1,
            momentum_factor: 200.0,
            expanded_width_fraction: 0.4,
            expanded_aspect: 1.2,
            transition: Tween::new(1_000, Ease::HOP),
            caption_delay_ms: 500,
            resize_tween: Tween::new(500, Ease::POWER2_OUT),
            sibling_fade: Tween::new(500, Ease::POWER2_OUT).delayed(500),
            dimmed_sibling_opacity: 0.25,
            max_resident_tiles: 16_384,
        }
    }
}

impl GridConfig {
    /// Distance between the origins of horizontally adjacent tiles.
    #[must_use]
    pub fn column_pitch(&self) -> f64 {
        self.tile_size.width + self.gap
    }

    /// Distance between the origins of vertically adjacent tiles.
    #[must_use]
    pub fn row_pitch(&self) -> f64 {
        self.tile_size.height + self.gap
    }

    /// Size of the focused overlay for a viewport of the given size.
    #[must_use]
    pub fn expanded_size(&self, viewport: Size) -> Size {
        let width = viewport.width * self.expanded_width_fraction;
        Size::new(width, width * self.expanded_aspect)
    }

    /// Checks that the configuration describes a usable grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.item_count == 0 {
            return Err(ConfigError::ZeroItemCount);
        }
        let Size { width, height } = self.tile_size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidTileSize(self.tile_size));
        }
        if !(self.gap.is_finite() && self.gap >= 0.0) {
            return Err(ConfigError::InvalidGap(self.gap));
        }
        if !(self.buffer.is_finite() && self.buffer >= 0.0) {
            return Err(ConfigError::InvalidBuffer(self.buffer));
        }
        if !(self.lookahead.is_finite() && self.lookahead >= 0.0) {
            return Err(ConfigError::InvalidLookahead(self.lookahead));
        }
        if !(self.ease > 0.0 && self.ease <= 1.0) {
            return Err(ConfigError::InvalidEase(self.ease));
        }
        if !(self.recull_distance.is_finite() && self.recull_distance >= 0.0) {
            return Err(ConfigError::InvalidRecullDistance(self.recull_distance));
        }
        if !(self.expanded_width_fraction > 0.0 && self.expanded_aspect > 0.0) {
            return Err(ConfigError::InvalidExpandedSize {
                width_fraction: self.expanded_width_fraction,
                aspect: self.expanded_aspect,
            });
        }
        Ok(())
    }

    /// Checks that `viewport` is usable with this configuration.
    ///
    /// Extents must be finite and non-negative, and the wanted set at rest
    /// must not exceed `max_resident_tiles`. Assumes [`GridConfig::validate`]
    /// passed.
    pub fn check_viewport(&self, viewport: Size) -> Result<(), ConfigError> {
        let Size { width, height } = viewport;
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(ConfigError::InvalidViewport(viewport));
        }
        let wanted = compute_visible_cells(Vec2::ZERO, Vec2::ZERO, viewport, self).len();
        if wanted > self.max_resident_tiles {
            return Err(ConfigError::TooManyTiles {
                wanted,
                max: self.max_resident_tiles,
            });
        }
        Ok(())
    }
}

/// Reason a [`GridConfig`] or viewport was rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// `item_count` was zero.
    ZeroItemCount,
    /// Tile extents must be finite and positive.
    InvalidTileSize(Size),
    /// The gap must be finite and non-negative.
    InvalidGap(f64),
    /// The buffer multiplier must be finite and non-negative.
    InvalidBuffer(f64),
    /// The look-ahead distance must be finite and non-negative.
    InvalidLookahead(f64),
    /// The smoothing factor must lie in `(0, 1]`.
    InvalidEase(f64),
    /// The re-cull distance must be finite and non-negative.
    InvalidRecullDistance(f64),
    /// The focused overlay must have a positive size.
    InvalidExpandedSize {
        /// Configured width fraction.
        width_fraction: f64,
        /// Configured height/width ratio.
        aspect: f64,
    },
    /// Viewport extents must be finite and non-negative.
    InvalidViewport(Size),
    /// The viewport would need more resident tiles than allowed.
    TooManyTiles {
        /// Tiles the viewport would need at rest.
        wanted: usize,
        /// Configured `max_resident_tiles`.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroItemCount => write!(f, "item count must be at least 1"),
            Self::InvalidTileSize(size) => {
                write!(f, "tile size {size:?} must be finite and positive")
            }
            Self::InvalidGap(gap) => write!(f, "gap {gap} must be finite and non-negative"),
            Self::InvalidBuffer(buffer) => {
                write!(f, "buffer {buffer} must be finite and non-negative")
            }
            Self::InvalidLookahead(lookahead) => {
                write!(f, "look-ahead {lookahead} must be finite and non-negative")
            }
            Self::InvalidEase(ease) => write!(f, "ease factor {ease} must lie in (0, 1]"),
            Self::InvalidRecullDistance(distance) => {
                write!(f, "re-cull distance {distance} must be finite and non-negative")
            }
            Self::InvalidExpandedSize {
                width_fraction,
                aspect,
            } => write!(
                f,
                "expanded size (width fraction {width_fraction}, aspect {aspect}) must be positive"
            ),
            Self::InvalidViewport(size) => {
                write!(f, "viewport {size:?} must be finite and non-negative")
            }
            Self::TooManyTiles { wanted, max } => {
                write!(f, "viewport needs {wanted} tiles, more than the limit of {max}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Caption titles, cycled over content indices.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    titles: Vec<String>,
}

impl Catalog {
    /// Creates a catalog from a list of titles.
    #[must_use]
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }

    /// Title shown when `content` is focused, or `None` for an empty catalog.
    #[must_use]
    pub fn title_for(&self, content: ContentIndex) -> Option<&str> {
        if self.titles.is_empty() {
            return None;
        }
        let slot = (content.get() as usize - 1) % self.titles.len();
        self.titles.get(slot).map(String::as_str)
    }

    /// Number of titles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Returns `true` if there are no titles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
