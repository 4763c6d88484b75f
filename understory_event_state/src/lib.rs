// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: Common event state managers for UI interactions.
//!
//! This crate provides small, focused state machines for UI interactions that
//! require stateful tracking across multiple events.
//!
//! - [`drag`]: Track drag operations with movement deltas, total offsets, and a
//!   per-move velocity estimate suitable for momentum on release.
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Clock-agnostic**: Timestamps are supplied by the caller in milliseconds,
//!   so the same code runs under a browser frame clock, a native event loop, or
//!   a deterministic test harness
//!
//! The crate does not assume any particular UI framework or event system.
//! Callers feed raw pointer positions and timestamps and interpret the deltas
//! and velocities that come back.
//!
//! ### Drag Operations
//!
//! Use [`drag::DragState`] to track pointer drag operations:
//!
//! ```rust
//! # #[cfg(feature = "drag")]
//! # fn example() {
//! use kurbo::Point;
//! use understory_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // Start drag at (10, 10) at t = 0ms.
//! drag.start(Point::new(10.0, 10.0), 0);
//!
//! // Move 50px right over 20ms.
//! let sample = drag.update_timed(Point::new(60.0, 10.0), 20, 10).unwrap();
//! assert_eq!(sample.delta.x, 50.0);
//! assert_eq!(sample.velocity.x, 2.5);
//!
//! // Total offset from start.
//! let total = drag.total_offset(Point::new(60.0, 10.0)).unwrap();
//! assert_eq!(total.x, 50.0);
//! # }
//! ```
//!
//! ## Features
//!
//! - `drag`: Enable drag state tracking (requires `kurbo` dependency)
//!
//! This crate is `no_std` compatible for all modules.

#![no_std]

#[cfg(feature = "drag")]
pub mod drag;
